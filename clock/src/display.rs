//! Display surface seam
//!
//! The updater writes through this trait. The desktop shell backs it with
//! the page document; tests back it with an in-memory map.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    /// The update could not be rendered into a form the surface accepts.
    #[error("failed to render display update: {0}")]
    Render(String),
    /// The surface itself refused the update (e.g. the webview is gone).
    #[error("display surface rejected update: {0}")]
    Surface(String),
}

/// A surface holding named text elements.
///
/// Implementations must treat a missing element as a silent no-op: the
/// element is not created and absence is never reported as an error.
/// Errors are reserved for the surface itself failing.
pub trait TextTarget {
    fn write_text(&self, element_id: &str, text: &str) -> Result<(), DisplayError>;
}
