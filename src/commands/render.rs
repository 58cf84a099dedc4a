use crate::areas::inventory::Inventory;
use crate::artifacts::report::column::Column;
use crate::artifacts::report::column_writer::ColumnWriter;
use crate::artifacts::report::format_stats::FormatStats;
use crate::artifacts::report::tone::Tone;
use crate::artifacts::tree::dir_tree::{DirNode, DirTree, tree_label};
use std::io::Write;

impl Inventory {
    /// Write the aligned report for `tree`, one line per folder
    pub fn render(&self, tree: &DirTree, stats: &FormatStats) -> anyhow::Result<()> {
        let compare_reference = self.options().compare_reference;
        let show_files = self.options().show_files;
        let mut writer = self.writer();

        for id in tree.walk() {
            let depth = tree.depth(id);
            let node = tree.node(id);

            let line = Self::render_line(node, depth, stats, compare_reference);
            writeln!(writer, "{line}")?;

            if let Some(status) = node.status().filter(|_| show_files) {
                let indent = "  ".repeat(depth + 2);
                for change in &status.changes {
                    writeln!(writer, "{indent}{change}")?;
                }
            }
        }

        writer.flush()?;

        Ok(())
    }

    fn render_line(
        node: &DirNode,
        depth: usize,
        stats: &FormatStats,
        compare_reference: bool,
    ) -> String {
        let mut line = ColumnWriter::default();
        line.cell(
            &tree_label(depth, node.name()),
            stats.tree_width(),
            Tone::Neutral,
        );

        match node.status() {
            Some(status) => {
                line.cell(&status.branch, stats.branch_width(), Tone::Neutral);
                for column in Column::visible(compare_reference) {
                    let value = column.value(status);
                    line.cell(
                        &column.text(value),
                        stats.column_width(column),
                        Tone::of(column, value),
                    );
                }
            }
            None => {
                line.blank(stats.branch_width());
                for column in Column::visible(compare_reference) {
                    line.blank(stats.column_width(column));
                }
            }
        }

        line.finish()
    }
}
