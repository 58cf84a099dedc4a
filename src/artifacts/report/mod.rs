//! Aligned report layout
//!
//! Rendering is a two-pass process: the collection pass folds every cell width into
//! [`format_stats::FormatStats`], then the render pass pads each cell to the width of its
//! column across the whole report.
//!
//! - `column`: Statistic columns, their glyphs and cell text
//! - `column_writer`: Line builder that pads and tints cells
//! - `format_stats`: Running maximum widths
//! - `tone`: Fixed mapping from a statistic value to a display colour

pub mod column;
pub mod column_writer;
pub mod format_stats;
pub mod tone;
