//! Charset identity for the codec.

use crate::decoder::{self, DecodeOutcome};
use crate::encoder::{self, EncodeOutcome};

/// The IBM-964 charset descriptor.
///
/// Carries the canonical name and answers containment queries: IBM-964 is
/// registered as compatible only with itself, never aliased to another code
/// page. The conversion methods delegate to the loop functions and exist so
/// callers holding a descriptor need no second import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ibm964;

impl Ibm964 {
    /// Canonical registered name of this charset.
    pub const NAME: &'static str = "x-IBM964";

    /// The canonical name.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Whether this charset can represent everything `charset_name` can.
    ///
    /// True only for the canonical name itself.
    pub fn contains(&self, charset_name: &str) -> bool {
        charset_name == Self::NAME
    }

    /// Decode IBM-964 bytes into `dst`. See [`decoder::decode`].
    pub fn decode(&self, src: &[u8], dst: &mut [char]) -> DecodeOutcome {
        decoder::decode(src, dst)
    }

    /// Encode scalar values into `dst`. See [`encoder::encode`].
    pub fn encode(&self, src: &[char], dst: &mut [u8]) -> EncodeOutcome {
        encoder::encode(src, dst)
    }
}
