//! Failure type for clipboard writes.

use thiserror::Error;

/// The copy did not reach the clipboard.
///
/// Deliberately carries no detail: failures of the async Clipboard API are
/// absorbed and retried through the fallback, so the only condition that ever
/// reaches the caller is the legacy copy command being refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the browser refused the copy command")]
pub struct CopyError;
