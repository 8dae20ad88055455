//! Table assembly.
//!
//! [`Renderer`] turns a validated [`Table`] plus a [`StyleConfig`] into the
//! final text block:
//!
//! ```text
//!        Users                <- title (optional), centered
//! ┏━━━━┳━━━━━━┳━━━━━┓         <- top border
//! ┃ ID ┃ Name ┃ Age ┃         <- header
//! ┣━━━━╋━━━━━━╋━━━━━┫         <- header/body separator
//! ┃  1 ┃ Luke ┃  21 ┃         <- rows (optional separators between them)
//! ┃  2 ┃ Joe  ┃  45 ┃
//! ┗━━━━┻━━━━━━┻━━━━━┛         <- bottom border
//! ```
//!
//! Rendering is a pure function of its inputs: nothing is cached between
//! calls and identical inputs produce byte-identical output.

use console::Style;
use serde::{Deserialize, Serialize};

use crate::error::{Region, Result};
use crate::model::Table;
use crate::style::{resolve_token, ResolvedStyles, StyleConfig};
use crate::tabular::{
    cell_lines, pad, pad_right, BorderChars, BorderStyle, CellFormatter, ColumnType, HeaderLabel,
    Layout, LineType,
};

/// When header labels carry a `(type)` annotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeLabels {
    /// Only when a `type_label` style is configured.
    #[default]
    Auto,
    Always,
    Never,
}

/// Whether styles are applied at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Emit ANSI escape sequences for configured styles.
    #[default]
    Term,
    /// Plain text; style tokens are still validated but never emitted.
    Text,
}

/// Layout and formatting options that are not tied to a region style.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub border: BorderStyle,
    /// Draw a separator line between consecutive data rows.
    pub row_separators: bool,
    pub type_labels: TypeLabels,
    /// Group digits in numeric columns with this character.
    pub thousands_separator: Option<char>,
    pub output_mode: OutputMode,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn row_separators(mut self, enable: bool) -> Self {
        self.row_separators = enable;
        self
    }

    pub fn type_labels(mut self, type_labels: TypeLabels) -> Self {
        self.type_labels = type_labels;
        self
    }

    pub fn thousands_separator(mut self, sep: char) -> Self {
        self.thousands_separator = Some(sep);
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }
}

/// Renders tables with a fixed set of options.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Renderer { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders `table` with the given region styles.
    ///
    /// All style tokens, including per-row overrides, are resolved before
    /// any output is produced; the first invalid token aborts the render.
    ///
    /// ```rust
    /// use speedtable_render::{model::Cell, model::Table, Renderer, StyleConfig};
    ///
    /// let table = Table::builder()
    ///     .column("ID", Some("int"))
    ///     .column("Name", Some("str"))
    ///     .row(vec![Cell::from(1), Cell::from("Luke")])
    ///     .build()
    ///     .unwrap();
    ///
    /// let output = Renderer::default().render(&table, &StyleConfig::new()).unwrap();
    /// assert_eq!(
    ///     output,
    ///     "┏━━━━┳━━━━━━┓\n┃ ID ┃ Name ┃\n┣━━━━╋━━━━━━┫\n┃  1 ┃ Luke ┃\n┗━━━━┻━━━━━━┛"
    /// );
    /// ```
    pub fn render(&self, table: &Table, styles: &StyleConfig) -> Result<String> {
        let resolved = styles.resolve()?;
        let row_styles = table
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| resolve_token(row.style(), Region::Row(index)))
            .collect::<Result<Vec<_>>>()?;

        warn_unknown_types(table);

        let show_types = match self.options.type_labels {
            TypeLabels::Auto => resolved.type_label.is_some(),
            TypeLabels::Always => true,
            TypeLabels::Never => false,
        };
        let labels: Vec<HeaderLabel> = table
            .columns()
            .iter()
            .map(|column| HeaderLabel::for_column(column, show_types))
            .collect();

        let formatter = CellFormatter::new(self.options.thousands_separator);
        let cells: Vec<Vec<String>> = table
            .rows()
            .iter()
            .map(|row| {
                row.cells()
                    .iter()
                    .zip(table.columns())
                    .map(|(cell, column)| formatter.format(cell, column.kind()))
                    .collect()
            })
            .collect();

        let layout = Layout::compute(&labels, &cells);
        tracing::debug!(
            columns = labels.len(),
            rows = cells.len(),
            widths = ?layout.widths(),
            "computed table layout"
        );

        let painter = Painter {
            styles: resolved,
            enabled: self.options.output_mode == OutputMode::Term,
            chars: self.options.border.chars(),
        };
        let kinds: Vec<ColumnType> = table.columns().iter().map(|c| c.kind()).collect();

        let mut lines = Vec::with_capacity(cells.len() * 2 + 5);
        if let Some(title) = painter.title_line(layout.total_width()) {
            lines.push(title);
        }
        lines.push(painter.rule(&layout, LineType::Top));
        lines.push(painter.header_line(&labels, &layout));
        lines.push(painter.rule(&layout, LineType::Middle));

        for (index, (row, row_style)) in cells.iter().zip(&row_styles).enumerate() {
            if index > 0 && self.options.row_separators {
                lines.push(painter.rule(&layout, LineType::Middle));
            }
            let body_style = row_style.as_ref().or(painter.styles.body.as_ref());
            lines.extend(painter.data_lines(row, &kinds, &layout, body_style));
        }

        lines.push(painter.rule(&layout, LineType::Bottom));
        Ok(lines.join("\n"))
    }
}

fn warn_unknown_types(table: &Table) {
    for column in table.columns() {
        if column.kind() == ColumnType::Unknown {
            tracing::warn!(
                column = column.name(),
                tag = column.tag().unwrap_or_default(),
                "unknown column type, rendering as left-aligned text"
            );
        }
    }
}

/// Applies region styles while assembling lines.
struct Painter {
    styles: ResolvedStyles,
    enabled: bool,
    chars: BorderChars,
}

impl Painter {
    fn paint(&self, text: &str, style: Option<&Style>) -> String {
        match style {
            Some(style) if self.enabled => style.apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }

    fn vertical(&self) -> String {
        self.paint(&self.chars.vertical.to_string(), self.styles.border.as_ref())
    }

    fn rule(&self, layout: &Layout, line_type: LineType) -> String {
        let line = self.chars.horizontal_line(layout.widths(), line_type);
        self.paint(&line, self.styles.border.as_ref())
    }

    /// Title centered over the table, no trailing padding.
    fn title_line(&self, total_width: usize) -> Option<String> {
        let title = self.styles.title.as_ref()?;
        let width = crate::tabular::display_width(&title.text);
        let indent = total_width.saturating_sub(width) / 2;
        Some(format!(
            "{}{}",
            " ".repeat(indent),
            self.paint(&title.text, title.style.as_ref())
        ))
    }

    fn header_line(&self, labels: &[HeaderLabel], layout: &Layout) -> String {
        let vertical = self.vertical();
        let mut line = vertical.clone();
        for (index, label) in labels.iter().enumerate() {
            let mut styled = self.paint(&label.name, self.styles.header.as_ref());
            if let Some(annotation) = &label.annotation {
                styled.push(' ');
                styled.push_str(&self.paint(annotation, self.styles.type_label.as_ref()));
            }
            line.push(' ');
            line.push_str(&pad_right(&styled, layout.content_width(index)));
            line.push(' ');
            line.push_str(&vertical);
        }
        line
    }

    fn data_lines(
        &self,
        row: &[String],
        kinds: &[ColumnType],
        layout: &Layout,
        style: Option<&Style>,
    ) -> Vec<String> {
        let vertical = self.vertical();
        let split: Vec<Vec<&str>> = row.iter().map(|cell| cell_lines(cell).collect()).collect();
        let height = Layout::row_height(row);

        (0..height)
            .map(|line_index| {
                let mut line = vertical.clone();
                for (index, cell) in split.iter().enumerate() {
                    let text = cell.get(line_index).copied().unwrap_or("");
                    let padded = pad(text, layout.content_width(index), kinds[index].align());
                    line.push_str(&self.paint(&format!(" {} ", padded), style));
                    line.push_str(&vertical);
                }
                line
            })
            .collect()
    }
}
