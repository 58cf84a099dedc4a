//! In-memory backend and output capture for unit tests

use crate::artifacts::status::backend::{GitBackend, RefreshFuture, RefreshMode, StatusOptions};
use crate::artifacts::status::repo_status::RepoStatus;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct FakeBackend {
    statuses: HashMap<PathBuf, RepoStatus>,
    broken: HashSet<PathBuf>,
    unreachable: HashSet<PathBuf>,
    pub refreshed: Arc<Mutex<Vec<(PathBuf, RefreshMode)>>>,
    pub in_flight: Arc<AtomicUsize>,
    pub peak_in_flight: Arc<AtomicUsize>,
}

impl FakeBackend {
    pub fn with_status(mut self, path: &Path, status: RepoStatus) -> Self {
        self.statuses.insert(path.to_path_buf(), status);
        self
    }

    pub fn with_broken_status(mut self, path: &Path) -> Self {
        self.broken.insert(path.to_path_buf());
        self
    }

    pub fn with_unreachable_remote(mut self, path: &Path) -> Self {
        self.unreachable.insert(path.to_path_buf());
        self
    }
}

impl GitBackend for FakeBackend {
    fn status(&self, path: &Path, options: &StatusOptions) -> anyhow::Result<RepoStatus> {
        if self.broken.contains(path) {
            anyhow::bail!("not a git repository: {}", path.display());
        }

        let mut status = self.statuses.get(path).cloned().unwrap_or_else(|| RepoStatus {
            branch: "main".to_string(),
            ..Default::default()
        });
        if !options.compare_reference {
            status.reference = None;
        }

        Ok(status)
    }

    fn refresh(&self, path: PathBuf, mode: RefreshMode) -> RefreshFuture {
        let refreshed = self.refreshed.clone();
        let in_flight = self.in_flight.clone();
        let peak = self.peak_in_flight.clone();
        let unreachable = self.unreachable.contains(&path);

        Box::pin(async move {
            let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);

            tokio::time::sleep(Duration::from_millis(20)).await;

            in_flight.fetch_sub(1, Ordering::SeqCst);
            refreshed
                .lock()
                .map_err(|_| anyhow::anyhow!("refresh log poisoned"))?
                .push((path.clone(), mode));

            if unreachable {
                anyhow::bail!("could not read from remote repository at {}", path.display());
            }

            Ok(())
        })
    }
}

/// Writer whose contents stay readable after being boxed into an inventory
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap().clone();
        strip_ansi(&String::from_utf8(bytes).unwrap())
    }

    pub fn raw_contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn strip_ansi(text: &str) -> String {
    regex::Regex::new(r"\x1b\[[0-9;]*m")
        .unwrap()
        .replace_all(text, "")
        .into_owned()
}
