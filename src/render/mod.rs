//! Output rendering: the banner-delimited page text format.

mod text;

pub use text::{separator, PageWriter, SEPARATOR_WIDTH};
