use crate::artifacts::report::tone::Tone;

/// Builds one report line out of fixed-width cells
///
/// Cells are padded before they are tinted, so escape sequences never count towards a
/// column's width. Trailing blanks are trimmed when the line is finished.
#[derive(Debug, Default)]
pub struct ColumnWriter {
    line: String,
}

impl ColumnWriter {
    pub fn cell(&mut self, text: &str, width: usize, tone: Tone) -> &mut Self {
        if !self.line.is_empty() {
            self.line.push(' ');
        }

        let padded = format!("{text:<width$}");
        self.line.push_str(&tone.paint(&padded));

        self
    }

    pub fn blank(&mut self, width: usize) -> &mut Self {
        self.cell("", width, Tone::Neutral)
    }

    pub fn finish(self) -> String {
        self.line.trim_end().to_string()
    }
}
