//! String-level conversion with configurable error policies.
//!
//! The per-unit loops in [`decoder`](crate::decoder) and
//! [`encoder`](crate::encoder) surface every condition to the caller; this
//! module implements the caller side once: whole-buffer conversion that
//! substitutes, skips, or aborts on bad units according to an options
//! struct, and applies an optional Unicode normalization to decoded text.

use ibm964_core::{CoderResult, UnicodeNorm};

use crate::decoder;
use crate::encoder;
use crate::error::ConvertError;

/// Replacement character written for bad input units under
/// [`ErrorPolicy::Replace`] on the decode side.
pub const REPLACEMENT: char = '\u{FFFD}';

/// Substitute byte written for unencodable characters under
/// [`ErrorPolicy::Replace`] on the encode side (SUB, as IBM code pages use).
pub const SUBSTITUTE: u8 = 0x1A;

/// What to do with a malformed or unmappable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorPolicy {
    /// Abort the conversion and surface a [`ConvertError`] (default).
    #[default]
    Strict,
    /// Substitute a replacement character or byte and continue.
    Replace,
    /// Drop the offending unit and continue.
    Skip,
}

/// Options for [`decode_to_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Policy for invalid byte sequences (default: `Strict`).
    pub malformed: ErrorPolicy,
    /// Policy for valid sequences with no Unicode mapping (default: `Strict`).
    pub unmappable: ErrorPolicy,
    /// Normalization applied to the decoded text (default: `None`).
    pub norm: UnicodeNorm,
}

/// Options for [`encode_to_vec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Policy for characters with no IBM-964 representation
    /// (default: `Strict`).
    pub unmappable: ErrorPolicy,
}

/// Decode a whole IBM-964 byte buffer into a `String`.
///
/// A truncated unit at the end of the input is treated as malformed of the
/// remaining length, there being no further call to complete it.
pub fn decode_to_string(bytes: &[u8], options: &DecodeOptions) -> Result<String, ConvertError> {
    let mut out = String::with_capacity(bytes.len());
    // One unit always yields at most one scalar from at least one byte, so
    // a destination of `bytes.len()` chars can never overflow.
    let mut dst = vec!['\u{0}'; bytes.len()];
    let mut pos = 0;

    while pos < bytes.len() {
        let step = decoder::decode(&bytes[pos..], &mut dst);
        out.extend(&dst[..step.chars_written]);
        pos += step.bytes_consumed;

        match step.result {
            CoderResult::Underflow => {
                if pos < bytes.len() {
                    // Partial unit at end of input.
                    let len = bytes.len() - pos;
                    apply_decode_policy(options.malformed, &mut out, pos, len, true)?;
                    pos = bytes.len();
                }
            }
            CoderResult::Malformed { len } => {
                apply_decode_policy(options.malformed, &mut out, pos, len, true)?;
                pos += len;
            }
            CoderResult::Unmappable { len } => {
                apply_decode_policy(options.unmappable, &mut out, pos, len, false)?;
                pos += len;
            }
            CoderResult::Overflow => unreachable!("destination sized to the input"),
        }
    }

    Ok(options.norm.normalize(&out))
}

/// Encode a string into a whole IBM-964 byte buffer.
pub fn encode_to_vec(text: &str, options: &EncodeOptions) -> Result<Vec<u8>, ConvertError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    // Four bytes is the longest unit, so this destination never overflows.
    let mut dst = vec![0u8; chars.len() * 4];
    let mut pos = 0;

    while pos < chars.len() {
        let step = encoder::encode(&chars[pos..], &mut dst);
        out.extend_from_slice(&dst[..step.bytes_written]);
        pos += step.chars_consumed;

        match step.result {
            CoderResult::Underflow => {}
            CoderResult::Unmappable { len } => {
                match options.unmappable {
                    ErrorPolicy::Strict => {
                        return Err(ConvertError::Unencodable {
                            ch: chars[pos],
                            offset: pos,
                        });
                    }
                    ErrorPolicy::Replace => out.push(SUBSTITUTE),
                    ErrorPolicy::Skip => {}
                }
                pos += len;
            }
            CoderResult::Overflow => unreachable!("destination sized to the input"),
            CoderResult::Malformed { .. } => unreachable!("no malformed case on encode"),
        }
    }

    Ok(out)
}

fn apply_decode_policy(
    policy: ErrorPolicy,
    out: &mut String,
    offset: usize,
    len: usize,
    malformed: bool,
) -> Result<(), ConvertError> {
    match policy {
        ErrorPolicy::Strict => Err(if malformed {
            ConvertError::Malformed { offset, len }
        } else {
            ConvertError::Unmappable { offset, len }
        }),
        ErrorPolicy::Replace => {
            out.push(REPLACEMENT);
            Ok(())
        }
        ErrorPolicy::Skip => Ok(()),
    }
}
