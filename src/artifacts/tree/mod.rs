//! Directory tree discovered under the inventory root
//!
//! - `dir_tree`: Arena of directory nodes with parent back-links
//! - `repo_filter`: Pruning of the tree down to (matching) repositories

pub mod dir_tree;
pub mod repo_filter;
