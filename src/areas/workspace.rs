use crate::artifacts::status::backend::{GitBackend, REPOSITORY_MARKER};
use crate::artifacts::tree::dir_tree::{DirTree, NodeId};
use anyhow::Context;
use std::path::Path;
use walkdir::WalkDir;

/// Root directory an inventory is taken of
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the directory tree below the workspace root, `max_depth` levels deep
    ///
    /// Entries are visited in directory-listing order. Symbolic links are not followed
    /// and the repository marker directory is never descended into. Any I/O error aborts
    /// the scan.
    pub fn scan(&self, max_depth: usize, backend: &dyn GitBackend) -> anyhow::Result<DirTree> {
        let mut tree = DirTree::new(
            Self::folder_name(&self.path),
            self.path.to_path_buf(),
            backend.is_repository(&self.path),
        );

        // walkdir raises max_depth to min_depth, so depth 0 never reaches it
        if max_depth == 0 {
            return Ok(tree);
        }

        // ancestors[d] is the node sitting at depth d on the current branch of the walk
        let mut ancestors: Vec<NodeId> = vec![tree.root()];

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != REPOSITORY_MARKER);

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("failed to scan workspace {}", self.path.display())
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }

            ancestors.truncate(entry.depth());
            let parent = *ancestors
                .last()
                .with_context(|| format!("no parent recorded for {}", entry.path().display()))?;

            let path = entry.path().to_path_buf();
            let id = tree.add_child(
                parent,
                entry.file_name().to_string_lossy().into_owned(),
                path.clone(),
                backend.is_repository(&path),
            );
            ancestors.push(id);
        }

        log::debug!(
            "scanned {} directories below {}",
            tree.len() - 1,
            self.path.display()
        );

        Ok(tree)
    }

    fn folder_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
