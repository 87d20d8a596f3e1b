//! Copy text to the clipboard from inside the browser.
//!
//! Tries the asynchronous Clipboard API first, and falls back to selecting an
//! off-screen `<textarea>` and running `execCommand("copy")` when the API is
//! missing or refuses the write. Any selection or focus the user had is put
//! back before the call returns.
//!
//! Call it from a user-initiated event handler (`click`, `keyup`): browsers
//! gate both mechanisms behind a user gesture.
//!
//! ```no_run
//! # async fn on_click() {
//! if copytext::copy("🦄🌈").await.is_ok() {
//!     log::info!("Copied to clipboard");
//! }
//! # }
//! ```

mod error;
mod platform;
mod writer;

pub use error::CopyError;

use platform::WebPlatform;
use web_sys::HtmlElement;

/// Options for [`copy_with`].
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// Container for the temporary, behind-the-scenes `<textarea>` used by
    /// the fallback — set it to stay within a focus trap, like in a modal.
    ///
    /// Only has an effect when the async Clipboard API is unavailable or
    /// fails. Defaults to `document.body`.
    pub target: Option<HtmlElement>,
}

/// Copy `text` to the system clipboard.
///
/// Resolves to `Ok(())` once the text is on the clipboard, and to
/// [`CopyError`] when both write paths were refused.
pub async fn copy(text: &str) -> Result<(), CopyError> {
    writer::write(&WebPlatform, text, None).await
}

/// Copy `text` to the system clipboard with explicit [`CopyOptions`].
pub async fn copy_with(text: &str, options: CopyOptions) -> Result<(), CopyError> {
    writer::write(&WebPlatform, text, options.target.as_ref()).await
}

/// Fire-and-forget [`copy`] for non-async event handlers.
///
/// The outcome is discarded apart from a warning on failure; await [`copy`]
/// when the caller needs it.
pub fn spawn_copy(text: &str) {
    let text = text.to_owned();
    wasm_bindgen_futures::spawn_local(async move {
        if copy(&text).await.is_err() {
            log::warn!("Failed to copy text to clipboard");
        }
    });
}
