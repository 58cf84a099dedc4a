use crate::artifacts::status::backend::{RefreshMode, StatusOptions};
use crate::artifacts::tree::repo_filter::RepoFilter;
use std::path::PathBuf;

/// Deepest traversal the workspace scan will perform
pub const MAX_DEPTH_CEILING: usize = 5;

/// Configuration of one inventory run
#[derive(Debug, Clone)]
pub struct Options {
    pub path: PathBuf,
    pub depth: usize,
    pub refresh: RefreshMode,
    pub show_files: bool,
    pub compare_reference: bool,
    pub reference_branch: Option<String>,
    pub filter: RepoFilter,
}

impl Options {
    pub fn new(path: PathBuf) -> Self {
        Options {
            path,
            depth: 1,
            refresh: RefreshMode::None,
            show_files: false,
            compare_reference: false,
            reference_branch: None,
            filter: RepoFilter::none(),
        }
    }

    /// Requested depth bounded by [`MAX_DEPTH_CEILING`]
    pub fn clamp_depth(requested: usize) -> usize {
        if requested > MAX_DEPTH_CEILING {
            log::warn!(
                "depth {} exceeds the maximum of {}; clamped to {}",
                requested,
                MAX_DEPTH_CEILING,
                MAX_DEPTH_CEILING
            );
        }

        requested.min(MAX_DEPTH_CEILING)
    }

    pub fn status_options(&self) -> StatusOptions {
        StatusOptions::new(self.compare_reference, self.reference_branch.clone())
    }
}
