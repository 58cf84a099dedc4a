use crate::artifacts::report::column::Column;
use colored::Colorize;

/// Display class of a statistic cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Favorable,
    Unfavorable,
    Caution,
    Neutral,
}

impl Tone {
    /// Zero and unknown values are always neutral
    pub fn of(column: Column, value: Option<usize>) -> Self {
        match value {
            None | Some(0) => Tone::Neutral,
            Some(_) => match column {
                Column::Ahead | Column::RefAhead | Column::Added => Tone::Favorable,
                Column::Behind | Column::Removed | Column::Unstaged => Tone::Unfavorable,
                Column::RefBehind | Column::Modified => Tone::Caution,
            },
        }
    }

    pub fn paint(&self, text: &str) -> String {
        match self {
            Tone::Favorable => text.green().to_string(),
            Tone::Unfavorable => text.red().to_string(),
            Tone::Caution => text.yellow().to_string(),
            Tone::Neutral => text.to_string(),
        }
    }
}
