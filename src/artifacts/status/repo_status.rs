use crate::artifacts::status::file_change::{FileChange, IndexChangeType};

/// Commits ahead of / behind a comparison ref
///
/// `Unknown` covers every case where the counts cannot be determined (no upstream,
/// no remote, no common ancestor) and is never conflated with zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Divergence {
    #[default]
    Unknown,
    Known {
        ahead: usize,
        behind: usize,
    },
}

impl Divergence {
    pub fn ahead(&self) -> Option<usize> {
        match self {
            Divergence::Unknown => None,
            Divergence::Known { ahead, .. } => Some(*ahead),
        }
    }

    pub fn behind(&self) -> Option<usize> {
        match self {
            Divergence::Unknown => None,
            Divergence::Known { behind, .. } => Some(*behind),
        }
    }
}

/// Status snapshot of one repository
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoStatus {
    pub branch: String,
    pub remote_count: usize,
    /// Against the upstream tracking ref
    pub remote: Divergence,
    /// Against the reference branch, only when that comparison was requested
    pub reference: Option<Divergence>,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unstaged: usize,
    pub changes: Vec<FileChange>,
}

impl RepoStatus {
    /// Build a status and derive the four file counts from `changes`
    ///
    /// Each entry is classified once by its index column (added, removed or modified)
    /// and once by its working tree column (unstaged).
    pub fn new(
        branch: String,
        remote_count: usize,
        remote: Divergence,
        reference: Option<Divergence>,
        changes: Vec<FileChange>,
    ) -> Self {
        let mut status = RepoStatus {
            branch,
            remote_count,
            remote,
            reference,
            changes,
            ..Default::default()
        };

        for change in &status.changes {
            match change.index_change() {
                IndexChangeType::None => {}
                IndexChangeType::Added => status.added += 1,
                IndexChangeType::Removed => status.removed += 1,
                IndexChangeType::Modified => status.modified += 1,
            }

            if change.is_unstaged() {
                status.unstaged += 1;
            }
        }

        status
    }
}
