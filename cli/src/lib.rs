//! `folio` command-line viewer for portfolio content.

pub mod content_cmd;
pub mod render;

pub use content_cmd::FolioCli;
