use crate::artifacts::status::repo_status::RepoStatus;
use derive_new::new;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

/// Entry whose presence directly inside a directory marks it as a working copy
pub const REPOSITORY_MARKER: &str = ".git";

/// Owned, sendable future returned by [`GitBackend::refresh`]
pub type RefreshFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// Remote refresh performed before status collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    #[default]
    None,
    Fetch,
    FetchAll,
    Pull,
}

impl RefreshMode {
    /// Pull wins over fetch-all, which wins over a plain fetch
    pub fn from_flags(fetch: bool, fetch_all: bool, pull: bool) -> Self {
        match (fetch, fetch_all, pull) {
            (_, _, true) => RefreshMode::Pull,
            (_, true, _) => RefreshMode::FetchAll,
            (true, _, _) => RefreshMode::Fetch,
            _ => RefreshMode::None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self != RefreshMode::None
    }
}

/// What a status query should compute besides the always-present fields
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct StatusOptions {
    pub compare_reference: bool,
    /// Explicit reference branch; detected per repository when absent
    pub reference_branch: Option<String>,
}

/// Version-control operations the inventory relies on
///
/// Status queries are blocking and run one after another. Refreshes are dispatched
/// concurrently, so the returned future must own everything it touches.
pub trait GitBackend: Send + Sync {
    fn is_repository(&self, path: &Path) -> bool {
        path.join(REPOSITORY_MARKER).exists()
    }

    fn status(&self, path: &Path, options: &StatusOptions) -> anyhow::Result<RepoStatus>;

    fn refresh(&self, path: PathBuf, mode: RefreshMode) -> RefreshFuture;
}
