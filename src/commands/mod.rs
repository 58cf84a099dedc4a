//! Phases of an inventory run, each implemented on [`Inventory`](crate::areas::inventory::Inventory)
//!
//! `status` drives the others in order: the workspace scan and filter, then `refresh`,
//! `collect` and finally `render`.

pub mod collect;
pub mod refresh;
pub mod render;
pub mod status;
