//! Conversion status reporting for the decode and encode loops.
//!
//! Provides [`CoderResult`], the four-state outcome every conversion call
//! finishes with. `Underflow` and `Overflow` are flow-control results, not
//! errors: they tell the caller to feed more input or drain the destination
//! and call again. `Malformed` and `Unmappable` describe exactly one input
//! unit and leave the cursor at its first element, so the caller can
//! substitute, skip, or abort.

use std::fmt;

/// Outcome of a decode or encode call.
///
/// The `len` carried by the error variants counts input elements: bytes on
/// the decode side, chars on the encode side (where it is always 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", content = "len")
)]
pub enum CoderResult {
    /// All available input was consumed, or more input is needed to finish
    /// a partial unit. This is the normal completion status.
    Underflow,
    /// The destination buffer is full. The unit that did not fit was not
    /// consumed; retry it after draining the destination.
    Overflow,
    /// The next `len` input elements do not form a valid unit.
    Malformed {
        /// Length of the offending unit, in input elements.
        len: usize,
    },
    /// The next `len` input elements form a valid unit with no mapping.
    Unmappable {
        /// Length of the offending unit, in input elements.
        len: usize,
    },
}

impl CoderResult {
    /// Returns true for the normal completion status.
    pub fn is_underflow(&self) -> bool {
        matches!(self, CoderResult::Underflow)
    }

    /// Returns true if the destination buffer was full.
    pub fn is_overflow(&self) -> bool {
        matches!(self, CoderResult::Overflow)
    }

    /// Returns true for `Malformed` and `Unmappable`.
    ///
    /// `Underflow` and `Overflow` are not errors; they signal "call again
    /// with more input / more space".
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            CoderResult::Malformed { .. } | CoderResult::Unmappable { .. }
        )
    }

    /// Length of the offending unit for the error variants, `None` otherwise.
    pub fn length(&self) -> Option<usize> {
        match self {
            CoderResult::Malformed { len } | CoderResult::Unmappable { len } => Some(*len),
            _ => None,
        }
    }
}

impl fmt::Display for CoderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoderResult::Underflow => write!(f, "underflow"),
            CoderResult::Overflow => write!(f, "overflow"),
            CoderResult::Malformed { len } => write!(f, "malformed unit of length {len}"),
            CoderResult::Unmappable { len } => write!(f, "unmappable unit of length {len}"),
        }
    }
}
