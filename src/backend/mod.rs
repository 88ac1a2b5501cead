//! Text capability abstraction.
//!
//! A capability is a third-party PDF library that can open a document and
//! return the text of one page. The extractor only talks to the
//! [`TextBackend`] / [`PageSource`] pair, so the concrete library is chosen
//! at startup by probing the [`BackendRegistry`].

#[cfg(feature = "lopdf-backend")]
mod lopdf_backend;
#[cfg(feature = "pdf-extract-backend")]
mod pdf_extract_backend;

#[cfg(feature = "lopdf-backend")]
pub use lopdf_backend::LopdfBackend;
#[cfg(feature = "pdf-extract-backend")]
pub use pdf_extract_backend::PdfExtractBackend;

use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};

/// An open document: the opaque handle a capability hands back from
/// [`TextBackend::open`].
///
/// Dropping the handle releases the underlying resources.
pub trait PageSource {
    /// Total number of pages.
    fn page_count(&self) -> u32;

    /// Extract the text of the page at a 0-based `index`.
    fn page_text(&self, index: u32) -> Result<String>;

    /// Release the document.
    fn close(self: Box<Self>) {}
}

/// A PDF text capability.
pub trait TextBackend: Send + Sync {
    /// Short identifier, e.g. `"lopdf"`.
    fn name(&self) -> &str;

    /// Whether this capability can be used on this host.
    fn is_available(&self) -> bool {
        true
    }

    /// Open the document at `path`.
    ///
    /// Fails with [`Error::DocumentOpen`] if the file is missing, unreadable
    /// or not a PDF this capability can parse.
    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>>;
}

/// Availability information for one registered capability.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BackendInfo {
    pub name: String,
    pub available: bool,
}

/// Ordered list of capabilities, probed first to last.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    backends: Vec<Arc<dyn TextBackend>>,
}

impl BackendRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    /// Create a registry with the compiled-in capabilities, primary first.
    pub fn with_defaults() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();

        #[cfg(feature = "lopdf-backend")]
        registry.register(Arc::new(LopdfBackend::new()));

        #[cfg(feature = "pdf-extract-backend")]
        registry.register(Arc::new(PdfExtractBackend::new()));

        registry
    }

    /// Append a capability at the lowest priority.
    pub fn register(&mut self, backend: Arc<dyn TextBackend>) {
        self.backends.push(backend);
    }

    /// Whether no capability is registered at all.
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Return the first available capability.
    pub fn select(&self) -> Result<Arc<dyn TextBackend>> {
        for backend in &self.backends {
            if backend.is_available() {
                log::info!("Using text capability '{}'", backend.name());
                return Ok(backend.clone());
            }
            log::info!(
                "Text capability '{}' is not available, trying next",
                backend.name()
            );
        }
        Err(Error::CapabilityUnavailable)
    }

    /// Get a capability by name (case insensitive), if it is available.
    pub fn get_by_name(&self, name: &str) -> Result<Arc<dyn TextBackend>> {
        let backend = self
            .backends
            .iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownCapability(name.to_string()))?;

        if backend.is_available() {
            Ok(backend.clone())
        } else {
            Err(Error::CapabilityUnavailable)
        }
    }

    /// Names and availability in priority order.
    pub fn info(&self) -> Vec<BackendInfo> {
        self.backends
            .iter()
            .map(|b| BackendInfo {
                name: b.name().to_string(),
                available: b.is_available(),
            })
            .collect()
    }
}
