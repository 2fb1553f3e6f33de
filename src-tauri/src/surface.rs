//! Webview-backed display target
//!
//! Adapts the page document to the engine's `TextTarget` seam. The update is
//! a one-shot guarded snippet: a missing element leaves the page untouched,
//! and the wrapper keeps repeated evaluation legal in the same document.

use tauri::webview::Webview;
use tauri::Runtime;

use clock::{DisplayError, TextTarget};

pub struct WebviewTarget<R: Runtime> {
    webview: Webview<R>,
}

impl<R: Runtime> WebviewTarget<R> {
    pub fn new(webview: Webview<R>) -> Self {
        Self { webview }
    }
}

impl<R: Runtime> TextTarget for WebviewTarget<R> {
    fn write_text(&self, element_id: &str, text: &str) -> Result<(), DisplayError> {
        let script = write_text_script(element_id, text)
            .map_err(|e| DisplayError::Render(e.to_string()))?;
        self.webview
            .eval(script.as_str())
            .map_err(|e| DisplayError::Surface(e.to_string()))
    }
}

/// Render the snippet that writes `text` into the element named `element_id`.
/// Both values are emitted as JSON string literals.
fn write_text_script(element_id: &str, text: &str) -> serde_json::Result<String> {
    let id = serde_json::to_string(element_id)?;
    let text = serde_json::to_string(text)?;
    Ok(format!(
        "(() => {{ const el = document.getElementById({id}); if (el) {{ el.textContent = {text}; }} }})();"
    ))
}
