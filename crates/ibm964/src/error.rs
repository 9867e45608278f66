//! Error types for the string-level conversion API.
//!
//! Uses [`thiserror`] for ergonomic error derivation. The per-unit loops
//! report conditions through [`CoderResult`](ibm964_core::CoderResult);
//! `ConvertError` is the strict-policy escalation of those conditions, with
//! the offset pinned to the offending unit.

use thiserror::Error;

/// A conversion rejected under [`ErrorPolicy::Strict`](crate::ErrorPolicy).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The input contains an invalid byte sequence.
    #[error("malformed IBM-964 sequence of {len} byte(s) at offset {offset}")]
    Malformed {
        /// Byte offset of the first offending byte.
        offset: usize,
        /// Length of the offending sequence in bytes.
        len: usize,
    },

    /// The input contains a well-formed sequence with no Unicode mapping.
    #[error("unmappable IBM-964 sequence of {len} byte(s) at offset {offset}")]
    Unmappable {
        /// Byte offset of the first offending byte.
        offset: usize,
        /// Length of the offending sequence in bytes.
        len: usize,
    },

    /// A character has no IBM-964 representation.
    #[error("character U+{:04X} at char offset {offset} has no IBM-964 representation", u32::from(*.ch))]
    Unencodable {
        /// The offending character.
        ch: char,
        /// Character offset into the input string.
        offset: usize,
    },
}
