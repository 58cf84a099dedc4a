use crate::artifacts::status::repo_status::RepoStatus;

/// Placeholder rendered for a count that could not be determined
pub const UNKNOWN_PLACEHOLDER: &str = "?";

/// Statistic columns of the report, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Ahead,
    Behind,
    RefAhead,
    RefBehind,
    Added,
    Removed,
    Modified,
    Unstaged,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Ahead,
        Column::Behind,
        Column::RefAhead,
        Column::RefBehind,
        Column::Added,
        Column::Removed,
        Column::Modified,
        Column::Unstaged,
    ];

    /// Columns shown in the report; the reference pair only when it was requested
    pub fn visible(compare_reference: bool) -> impl Iterator<Item = Column> {
        Self::ALL
            .into_iter()
            .filter(move |column| compare_reference || !column.is_reference())
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Column::RefAhead | Column::RefBehind)
    }

    pub fn glyph(&self) -> char {
        match self {
            Column::Ahead => '↑',
            Column::Behind => '↓',
            Column::RefAhead => '⇡',
            Column::RefBehind => '⇣',
            Column::Added => '+',
            Column::Removed => '-',
            Column::Modified => '~',
            Column::Unstaged => 'x',
        }
    }

    /// Value of this column for `status`; `None` means unknown
    ///
    /// Reference columns of a status collected without the comparison are unknown too,
    /// but they are never displayed in that case.
    pub fn value(&self, status: &RepoStatus) -> Option<usize> {
        match self {
            Column::Ahead => status.remote.ahead(),
            Column::Behind => status.remote.behind(),
            Column::RefAhead => status.reference.and_then(|r| r.ahead()),
            Column::RefBehind => status.reference.and_then(|r| r.behind()),
            Column::Added => Some(status.added),
            Column::Removed => Some(status.removed),
            Column::Modified => Some(status.modified),
            Column::Unstaged => Some(status.unstaged),
        }
    }

    pub fn applies_to(&self, status: &RepoStatus) -> bool {
        !self.is_reference() || status.reference.is_some()
    }

    pub fn text(&self, value: Option<usize>) -> String {
        match value {
            Some(value) => format!("{}{}", self.glyph(), value),
            None => format!("{}{}", self.glyph(), UNKNOWN_PLACEHOLDER),
        }
    }

    /// Digit count plus one slot for the glyph; the unknown placeholder is one character
    pub fn width(value: Option<usize>) -> usize {
        match value {
            Some(value) => digits(value) + 1,
            None => UNKNOWN_PLACEHOLDER.chars().count() + 1,
        }
    }
}

fn digits(mut value: usize) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}
