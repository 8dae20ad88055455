//! Column width computation.
//!
//! `width = max(header label, widest cell line) + CELL_PADDING`. There is no
//! terminal-width fitting: tables always render at their natural width.

use super::format::HeaderLabel;
use super::util::display_width;

/// One space of padding on each side of every cell.
pub const CELL_PADDING: usize = 2;

/// Resolved column widths, padding included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    widths: Vec<usize>,
}

impl Layout {
    /// Computes widths from header labels and formatted cells.
    ///
    /// Multi-line cells are measured by their widest line.
    ///
    /// ```rust
    /// use speedtable_render::tabular::{HeaderLabel, Layout};
    ///
    /// let labels = vec![
    ///     HeaderLabel { name: "ID".into(), annotation: None },
    ///     HeaderLabel { name: "Name".into(), annotation: None },
    /// ];
    /// let rows = vec![vec!["1".to_string(), "Alice".to_string()]];
    ///
    /// let layout = Layout::compute(&labels, &rows);
    /// assert_eq!(layout.widths(), &[4, 7]);
    /// assert_eq!(layout.total_width(), 14);
    /// ```
    pub fn compute(labels: &[HeaderLabel], rows: &[Vec<String>]) -> Self {
        let mut widths: Vec<usize> = labels.iter().map(HeaderLabel::width).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                let cell_width = cell_lines(cell).map(display_width).max().unwrap_or(0);
                *width = (*width).max(cell_width);
            }
        }
        for width in &mut widths {
            *width += CELL_PADDING;
        }
        Layout { widths }
    }

    /// Column widths including padding.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Width available to content in column `index`.
    pub fn content_width(&self, index: usize) -> usize {
        self.widths[index] - CELL_PADDING
    }

    /// Full line width: all columns plus one border glyph per boundary.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.widths.len() + 1
    }

    /// Number of terminal lines a row occupies.
    pub fn row_height(row: &[String]) -> usize {
        row.iter().map(|cell| cell_lines(cell).count()).max().unwrap_or(1)
    }
}

/// Splits a formatted cell into display lines. Always yields at least one.
pub fn cell_lines(cell: &str) -> impl Iterator<Item = &str> {
    cell.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}
