//! Narrow surface over the browser primitives the copy path touches.
//!
//! Everything the writer needs from the host environment goes through these
//! traits, so the core logic can run against a recording double on the host
//! without a rendering environment. [`WebPlatform`] is the production
//! implementation over `web-sys`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlElement, HtmlTextAreaElement, Range};

/// The asynchronous, permission-gated clipboard write capability.
#[async_trait(?Send)]
pub(crate) trait ClipboardApi {
    /// Whether the async clipboard is exposed in this environment.
    fn is_available(&self) -> bool;

    /// Write `text` through the async clipboard. `Err` means the write was
    /// rejected or threw; the platform reason is dropped here on purpose.
    async fn write_text(&self, text: &str) -> Result<(), ()>;
}

/// Document, selection and focus primitives used by the fallback path.
pub(crate) trait DocumentOps {
    /// Insertion container for the carrier.
    type Container;
    /// The temporary text-holding element.
    type Carrier;
    /// A saved selection range.
    type SavedRange;
    /// A saved focus target.
    type SavedFocus;

    /// The document body, the default insertion point.
    fn body(&self) -> Option<Self::Container>;

    /// Element currently holding input focus, if any.
    fn active_element(&self) -> Option<Self::SavedFocus>;

    /// First range of the current document selection, if one exists.
    fn first_selection_range(&self) -> Option<Self::SavedRange>;

    /// Create the off-screen, read-only carrier holding `text`.
    fn create_carrier(&self, text: &str) -> Option<Self::Carrier>;

    /// Append the carrier under `container`.
    fn attach_carrier(&self, container: &Self::Container, carrier: &Self::Carrier);

    /// Select the carrier's entire contents. `len` is the text length in
    /// UTF-16 code units, for the explicit start/end form.
    fn select_carrier_contents(&self, carrier: &Self::Carrier, len: u32);

    /// Run the legacy synchronous copy command against the current
    /// selection. A throw counts as `false`.
    fn exec_copy_command(&self) -> bool;

    /// Detach the carrier from the document.
    fn remove_carrier(&self, carrier: &Self::Carrier);

    /// Clear the current selection and reinstate a saved range.
    fn restore_selection(&self, range: &Self::SavedRange);

    /// Hand focus back to a previously focused element.
    fn restore_focus(&self, focus: &Self::SavedFocus);
}

/// Production implementation backed by the real `window`/`document`.
pub(crate) struct WebPlatform;

#[async_trait(?Send)]
impl ClipboardApi for WebPlatform {
    fn is_available(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let navigator = window.navigator();
        // Probe through Reflect: the generated `clipboard()` getter assumes
        // the property exists, which older engines do not guarantee.
        js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
            .unwrap_or(false)
    }

    async fn write_text(&self, text: &str) -> Result<(), ()> {
        let window = web_sys::window().ok_or(())?;
        let clipboard = window.navigator().clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|_| ())
    }
}

impl DocumentOps for WebPlatform {
    type Container = HtmlElement;
    type Carrier = HtmlTextAreaElement;
    type SavedRange = Range;
    type SavedFocus = HtmlElement;

    fn body(&self) -> Option<HtmlElement> {
        web_sys::window()?.document()?.body()
    }

    fn active_element(&self) -> Option<HtmlElement> {
        let element = web_sys::window()?.document()?.active_element()?;
        element.dyn_into::<HtmlElement>().ok()
    }

    fn first_selection_range(&self) -> Option<Range> {
        let selection = web_sys::window()?.document()?.get_selection().ok()??;
        if selection.range_count() > 0 {
            selection.get_range_at(0).ok()
        } else {
            None
        }
    }

    fn create_carrier(&self, text: &str) -> Option<HtmlTextAreaElement> {
        let document = web_sys::window()?.document()?;
        let textarea = document
            .create_element("textarea")
            .ok()?
            .dyn_into::<HtmlTextAreaElement>()
            .ok()?;
        textarea.set_value(text);
        // Prevent the on-screen keyboard from showing on mobile
        textarea.set_read_only(true);
        let style = textarea.style();
        let _ = style.set_property("contain", "strict");
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("left", "-9999px");
        // 12pt keeps iOS from zooming on focus
        let _ = style.set_property("font-size", "12pt");
        Some(textarea)
    }

    fn attach_carrier(&self, container: &HtmlElement, carrier: &HtmlTextAreaElement) {
        let _ = container.append_child(carrier);
    }

    fn select_carrier_contents(&self, carrier: &HtmlTextAreaElement, len: u32) {
        carrier.select();
        // Some mobile browsers only honor the explicit start/end form
        let _ = carrier.set_selection_start(Some(0));
        let _ = carrier.set_selection_end(Some(len));
    }

    fn exec_copy_command(&self) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Ok(document) = document.dyn_into::<HtmlDocument>() else {
            return false;
        };
        document.exec_command("copy").unwrap_or(false)
    }

    fn remove_carrier(&self, carrier: &HtmlTextAreaElement) {
        carrier.remove();
    }

    fn restore_selection(&self, range: &Range) {
        let Some(selection) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_selection().ok().flatten())
        else {
            return;
        };
        let _ = selection.remove_all_ranges();
        let _ = selection.add_range(range);
    }

    fn restore_focus(&self, focus: &HtmlElement) {
        let _ = focus.focus();
    }
}
