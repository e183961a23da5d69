#![forbid(unsafe_code)]

//! Colors and styles used by the langshow highlighter and exporters.

pub mod color;
pub mod style;

pub use color::Color;
pub use style::{Style, StyleFlags};
