//! Unicode-aware column layout and box drawing.
//!
//! The pieces of the rendering pipeline below the [`Renderer`](crate::Renderer):
//!
//! - [`ColumnType`] maps a declared type tag to a formatting policy
//! - [`CellFormatter`] turns cells into display strings
//! - [`Layout`] computes column widths from header labels and cells
//! - [`BorderStyle`] supplies the box-drawing glyphs
//!
//! Width calculations ignore ANSI escape codes and count East Asian wide
//! characters as two columns.
//!
//! ```rust
//! use speedtable_render::tabular::{display_width, pad_left, pad_right};
//!
//! let padded = pad_right("Luke", 6);
//! assert_eq!(display_width(&padded), 6);
//! assert_eq!(pad_left("21", 4), "  21");
//! ```

mod border;
mod format;
mod layout;
mod types;
mod util;

pub use border::{BorderChars, BorderStyle, LineType};
pub use format::{group_thousands, CellFormatter, HeaderLabel};
pub use layout::{cell_lines, Layout, CELL_PADDING};
pub use types::{Align, ColumnType};
pub use util::{display_width, pad, pad_left, pad_right};
