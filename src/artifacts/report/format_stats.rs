use crate::artifacts::report::column::Column;
use crate::artifacts::status::repo_status::RepoStatus;
use std::collections::BTreeMap;

/// Running maximum widths across every node of the report
///
/// Starts at zero, only grows while statuses are collected, and is read-only once
/// rendering begins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatStats {
    tree_width: usize,
    branch_width: usize,
    column_widths: BTreeMap<Column, usize>,
}

impl FormatStats {
    pub fn tree_width(&self) -> usize {
        self.tree_width
    }

    pub fn branch_width(&self) -> usize {
        self.branch_width
    }

    pub fn column_width(&self, column: Column) -> usize {
        self.column_widths.get(&column).copied().unwrap_or(0)
    }

    pub fn fold_tree_width(&mut self, width: usize) {
        self.tree_width = self.tree_width.max(width);
    }

    pub fn fold_status(&mut self, status: &RepoStatus) {
        self.branch_width = self.branch_width.max(status.branch.chars().count());

        for column in Column::ALL {
            if !column.applies_to(status) {
                continue;
            }

            let width = Column::width(column.value(status));
            let max = self.column_widths.entry(column).or_insert(0);
            if width > *max {
                *max = width;
            }
        }
    }
}
