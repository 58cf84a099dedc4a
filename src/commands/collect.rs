use crate::areas::inventory::Inventory;
use crate::artifacts::report::format_stats::FormatStats;
use crate::artifacts::tree::dir_tree::{DirTree, tree_label};
use anyhow::Context;

impl Inventory {
    /// Query every repository of `tree` and measure the widths the report needs
    pub fn collect(&self, tree: &mut DirTree) -> anyhow::Result<FormatStats> {
        let mut stats = FormatStats::default();
        let status_options = self.options().status_options();

        let ids = tree.walk().collect::<Vec<_>>();
        for id in ids {
            let depth = tree.depth(id);
            let node = tree.node_mut(id);

            node.tree_width = tree_label(depth, &node.name).chars().count();
            stats.fold_tree_width(node.tree_width);

            if !node.is_repository {
                continue;
            }

            let status = self
                .backend()
                .status(&node.path, &status_options)
                .with_context(|| format!("status unavailable for {}", node.path.display()))?;
            stats.fold_status(&status);
            node.status = Some(status);
        }

        Ok(stats)
    }
}
