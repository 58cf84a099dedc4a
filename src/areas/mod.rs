//! Components an inventory run is assembled from
//!
//! - `workspace`: filesystem traversal below the inventory root
//! - `git_cli`: status and refresh through the `git` executable
//! - `inventory`: ties the workspace, a git backend and the output writer together

pub mod git_cli;
pub mod inventory;
pub mod workspace;
