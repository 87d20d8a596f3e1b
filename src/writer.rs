//! The copy algorithm: async clipboard first, selection-based fallback second.

use crate::error::CopyError;
use crate::platform::{ClipboardApi, DocumentOps};

/// Try the async Clipboard API, then fall back to selecting an off-screen
/// carrier and running the legacy copy command. Primary-path failures are
/// absorbed; only the fallback's outcome reaches the caller.
pub(crate) async fn write<P>(
    platform: &P,
    text: &str,
    target: Option<&P::Container>,
) -> Result<(), CopyError>
where
    P: ClipboardApi + DocumentOps,
{
    if !platform.is_available() {
        log::debug!("Async clipboard API unavailable, using the selection fallback");
    } else if platform.write_text(text).await.is_ok() {
        return Ok(());
    } else {
        // Permission denials, unfocused documents and transient failures all
        // land here; the fallback alone decides the outcome.
        log::debug!("Async clipboard write failed, using the selection fallback");
    }

    write_via_selection(platform, text, target)
}

/// Selection-based fallback. Fully synchronous: the user-gesture
/// authorization for the copy command expires once control returns to the
/// event loop.
fn write_via_selection<P>(
    platform: &P,
    text: &str,
    target: Option<&P::Container>,
) -> Result<(), CopyError>
where
    P: DocumentOps,
{
    let saved_focus = platform.active_element();
    let saved_range = platform.first_selection_range();

    let body;
    let container = match target {
        Some(container) => Some(container),
        None => {
            body = platform.body();
            body.as_ref()
        }
    };

    let copied = match container {
        Some(container) => match platform.create_carrier(text) {
            Some(carrier) => {
                platform.attach_carrier(container, &carrier);
                platform.select_carrier_contents(&carrier, utf16_len(text));
                let copied = platform.exec_copy_command();
                platform.remove_carrier(&carrier);
                copied
            }
            None => false,
        },
        None => false,
    };

    if let Some(range) = saved_range {
        platform.restore_selection(&range);
    }
    if let Some(focus) = saved_focus {
        platform.restore_focus(&focus);
    }

    if copied {
        Ok(())
    } else {
        Err(CopyError)
    }
}

/// DOM selection offsets count UTF-16 code units, not bytes.
fn utf16_len(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}
