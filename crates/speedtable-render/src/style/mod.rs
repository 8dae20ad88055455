//! Style resolution for table regions.
//!
//! Regions (header, border, body, type label, title) each take an optional
//! style token; see [`token`] for the grammar. Unknown tokens are errors that
//! name both the token and the region, never silently dropped.

mod color;
mod config;
pub mod token;

pub use color::{rgb_to_ansi256, ColorDef};
pub use config::{resolve_token, ResolvedStyles, StyleConfig, Title, MAX_POSITIONAL};
pub use token::parse_style;
