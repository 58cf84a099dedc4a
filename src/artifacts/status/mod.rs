//! Repository status as reported by the git backend
//!
//! ## Components
//!
//! - `backend`: The `GitBackend` seam (status query, remote refresh, repository marker)
//! - `file_change`: Porcelain change entries and their classification
//! - `repo_status`: Status snapshot of a single repository

pub mod backend;
pub mod file_change;
pub mod repo_status;

#[cfg(test)]
pub(crate) mod fake;
