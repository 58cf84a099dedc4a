//! Data structures and algorithms of the inventory
//!
//! - `core`: Run configuration shared by every phase
//! - `report`: Column layout, widths and tones of the aligned report
//! - `status`: Repository status records and the git backend seam
//! - `tree`: Directory tree arena and repository filtering

pub mod core;
pub mod report;
pub mod status;
pub mod tree;
