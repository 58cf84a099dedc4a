use crate::artifacts::tree::dir_tree::{DirNode, DirTree, NodeId};
use anyhow::Context;
use regex::Regex;
use std::path::Path;

/// Selects which repositories survive pruning
///
/// Without a pattern every repository is kept. With a pattern, a repository is kept when
/// its absolute path matches, or when it does not match and `invert` is set.
#[derive(Debug, Clone, Default)]
pub struct RepoFilter {
    pattern: Option<Regex>,
    invert: bool,
}

impl RepoFilter {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn try_new(pattern: Option<&str>, invert: bool) -> anyhow::Result<Self> {
        match pattern {
            None if invert => anyhow::bail!("inverting the filter requires a filter pattern"),
            None => Ok(Self::none()),
            Some(pattern) => {
                let pattern = Regex::new(pattern)
                    .with_context(|| format!("invalid filter pattern: {pattern}"))?;

                Ok(Self {
                    pattern: Some(pattern),
                    invert,
                })
            }
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        match &self.pattern {
            None => true,
            Some(pattern) => pattern.is_match(&path.to_string_lossy()) != self.invert,
        }
    }

    fn keeps(&self, node: &DirNode) -> bool {
        node.is_repository && self.accepts(&node.path)
    }
}

impl DirTree {
    /// Prune the tree down to accepted repositories and their ancestors
    ///
    /// Returns `None` when nothing survives, which callers treat as "nothing to report".
    /// The surviving nodes are copied into a fresh arena in pre-order.
    pub fn filter(&self, filter: &RepoFilter) -> Option<DirTree> {
        let mut kept = vec![false; self.len()];

        if !self.mark_kept(self.root(), filter, &mut kept) {
            return None;
        }

        let root = self.node(self.root());
        let mut pruned = DirTree::new(root.name.clone(), root.path.clone(), root.is_repository);
        pruned.node_mut(pruned.root()).status = root.status.clone();

        let pruned_root = pruned.root();
        self.copy_kept(self.root(), pruned_root, &kept, &mut pruned);

        Some(pruned)
    }

    // post-order: a node's verdict depends on all of its children
    fn mark_kept(&self, id: NodeId, filter: &RepoFilter, kept: &mut [bool]) -> bool {
        let mut has_kept_child = false;
        for &child in self.node(id).children() {
            has_kept_child |= self.mark_kept(child, filter, kept);
        }

        let keep = filter.keeps(self.node(id)) || has_kept_child;
        kept[id.index()] = keep;

        keep
    }

    fn copy_kept(&self, source: NodeId, target: NodeId, kept: &[bool], pruned: &mut DirTree) {
        for &child in self.node(source).children() {
            if !kept[child.index()] {
                continue;
            }

            let mut node = self.node(child).clone();
            node.parent = Some(target);
            node.children = Vec::new();

            let copied = pruned.push(node);
            self.copy_kept(child, copied, kept, pruned);
        }
    }
}
