#![forbid(unsafe_code)]

//! Command-line front end for the langshow highlighter.
//!
//! [`cli`] turns arguments and `LANGSHOW_*` variables into a [`cli::Command`];
//! [`app::run`] executes it.

pub mod app;
pub mod cli;
