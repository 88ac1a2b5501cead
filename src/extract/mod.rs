//! Page-by-page extraction into the banner text format.

mod extractor;
mod options;
mod report;

pub use extractor::Extractor;
pub use options::{ErrorMode, ExtractOptions};
pub use report::{ExtractionReport, PageCount};
