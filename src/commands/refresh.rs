use crate::areas::inventory::Inventory;
use crate::artifacts::status::backend::RefreshMode;
use crate::artifacts::tree::dir_tree::DirTree;
use tokio::task::JoinSet;

/// Outcome of a bulk refresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub dispatched: usize,
    pub failed: usize,
}

impl Inventory {
    /// Refresh every repository of `tree` from its remote, all at once
    ///
    /// Returns only after every dispatched refresh has finished. Failed refreshes are
    /// logged and counted, never propagated.
    pub async fn refresh(&self, tree: &DirTree, mode: RefreshMode) -> RefreshReport {
        let mut report = RefreshReport::default();
        if !mode.is_enabled() {
            return report;
        }

        let mut tasks = JoinSet::new();
        for repository in tree.repositories() {
            let path = repository.path().to_path_buf();
            let refresh = self.backend().refresh(path.clone(), mode);

            log::debug!("refreshing {} ({:?})", path.display(), mode);
            tasks.spawn(async move { (path, refresh.await) });
            report.dispatched += 1;
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((path, Ok(()))) => log::debug!("refreshed {}", path.display()),
                Ok((path, Err(error))) => {
                    log::warn!("refresh of {} failed: {:#}", path.display(), error);
                    report.failed += 1;
                }
                Err(error) => {
                    log::warn!("refresh task did not complete: {}", error);
                    report.failed += 1;
                }
            }
        }

        report
    }
}
