//! Result of an extraction run.

use std::path::PathBuf;

use serde::Serialize;

/// Number of pages in a document.
pub type PageCount = u32;

/// What an extraction run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// File the text was written to
    pub output_path: PathBuf,
    /// Pages in the document (and banners written)
    pub page_count: PageCount,
    /// Capability that produced the text
    pub backend: String,
    /// 1-based numbers of pages written with an empty body after a failure
    pub failed_pages: Vec<u32>,
}

impl ExtractionReport {
    /// Whether every page's text was extracted.
    pub fn is_complete(&self) -> bool {
        self.failed_pages.is_empty()
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(failed_pages: Vec<u32>) -> ExtractionReport {
        ExtractionReport {
            output_path: PathBuf::from("out.txt"),
            page_count: 3,
            backend: "lopdf".to_string(),
            failed_pages,
        }
    }

    #[test]
    fn test_is_complete() {
        assert!(report(vec![]).is_complete());
        assert!(!report(vec![2]).is_complete());
    }

    #[test]
    fn test_to_json() {
        let json = report(vec![2]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["page_count"], 3);
        assert_eq!(value["backend"], "lopdf");
        assert_eq!(value["output_path"], "out.txt");
        assert_eq!(value["failed_pages"][0], 2);
    }
}
