//! Maker Printer
//!
//! Turns a `ClassModel` back into PHP source:
//! - `render`: the whole file, verbatim where nothing changed
//! - `format`: PHP literals and Doctrine annotation lines

mod format;
mod render;

pub use format::{annotation_line, annotation_value, php_literal, INDENT};
pub use render::{render, render_member};
