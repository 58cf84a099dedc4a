//! Arena-backed directory tree
//!
//! Nodes are stored in a flat vector and addressed by [`NodeId`]. A node owns its
//! children through the `children` list; the `parent` link is a plain back-reference
//! used to compute depth and is never followed for ownership.

use crate::artifacts::status::repo_status::RepoStatus;
use std::path::{Path, PathBuf};

/// Marker drawn in front of every folder name in the report
pub const TREE_MARKER: &str = "|-- ";

/// Index of a node inside its [`DirTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One directory visited while scanning the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) is_repository: bool,
    pub(crate) status: Option<RepoStatus>,
    pub(crate) tree_width: usize,
}

impl DirNode {
    fn new(name: String, path: PathBuf, parent: Option<NodeId>, is_repository: bool) -> Self {
        DirNode {
            name,
            path,
            parent,
            children: Vec::new(),
            is_repository,
            status: None,
            tree_width: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_repository(&self) -> bool {
        self.is_repository
    }

    pub fn status(&self) -> Option<&RepoStatus> {
        self.status.as_ref()
    }

    pub fn tree_width(&self) -> usize {
        self.tree_width
    }
}

/// Directory tree rooted at the inventory path
///
/// The root always lives at index 0, so a tree is never empty. An "empty" result
/// (nothing left after filtering) is expressed as `Option<DirTree>::None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirTree {
    nodes: Vec<DirNode>,
}

impl DirTree {
    pub fn new(name: String, path: PathBuf, is_repository: bool) -> Self {
        DirTree {
            nodes: vec![DirNode::new(name, path, None, is_repository)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &DirNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut DirNode {
        &mut self.nodes[id.0]
    }

    /// Append a new child below `parent`, preserving discovery order
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: String,
        path: PathBuf,
        is_repository: bool,
    ) -> NodeId {
        self.push(DirNode::new(name, path, Some(parent), is_repository))
    }

    pub(crate) fn push(&mut self, node: DirNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = node.parent {
            self.nodes[parent.0].children.push(id);
        }
        self.nodes.push(node);
        id
    }

    /// Number of parent links between `id` and the root
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).parent;

        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }

        depth
    }

    /// Pre-order (depth-first) traversal starting at the root
    pub fn walk(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![self.root()];

        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.node(id).children.iter().rev().copied());
            Some(id)
        })
    }

    pub fn repositories(&self) -> impl Iterator<Item = &DirNode> {
        self.walk()
            .map(|id| self.node(id))
            .filter(|node| node.is_repository)
    }
}

/// Tree prefix rendered in front of a folder: two spaces per level, then the marker
pub fn tree_label(depth: usize, name: &str) -> String {
    format!("{}{}{}", "  ".repeat(depth), TREE_MARKER, name)
}
