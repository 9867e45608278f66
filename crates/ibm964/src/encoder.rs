//! The IBM-964 encode loop: Unicode scalar values to native bytes.
//!
//! Each scalar maps to a fixed-size output (1, 2, or 4 bytes) or fails
//! outright, so the encode side has no malformed case and no mid-unit
//! underflow. ASCII takes a direct fast path; everything else goes through
//! the tiered reverse index shared process-wide.

use ibm964_core::CoderResult;
use ibm964_core::revindex::{Encoded, ReverseIndex};

/// Progress report of one [`encode`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOutcome {
    /// Scalar values consumed from the source. Points at the offending or
    /// unwritten scalar when the result is not `Underflow`.
    pub chars_consumed: usize,
    /// Bytes written to the destination.
    pub bytes_written: usize,
    /// Why the loop stopped.
    pub result: CoderResult,
}

/// Encode Unicode scalar values into `dst` as IBM-964 bytes.
///
/// Stops at the first scalar with no native representation
/// (`Unmappable { len: 1 }`, the scalar being `src[chars_consumed]`) or when
/// the destination cannot hold the next unit's full output (`Overflow`,
/// scalar unconsumed). Exhausting the source yields `Underflow`.
pub fn encode(src: &[char], dst: &mut [u8]) -> EncodeOutcome {
    let index = ReverseIndex::shared();
    let mut sp = 0;
    let mut dp = 0;

    while sp < src.len() {
        let ch = src[sp];
        // ASCII bypasses the index; this also keeps U+0000 clear of the
        // reserved zero cell.
        let encoded = if (ch as u32) < 0x80 {
            Encoded::Single(ch as u8)
        } else {
            match index.lookup(ch) {
                Some(encoded) => encoded,
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(scalar = ch as u32, "no native representation");
                    return outcome(sp, dp, CoderResult::Unmappable { len: 1 });
                }
            }
        };

        let need = encoded.byte_len();
        if dst.len() - dp < need {
            return outcome(sp, dp, CoderResult::Overflow);
        }
        match encoded {
            Encoded::Single(b) => dst[dp] = b,
            Encoded::Double(pair) => dst[dp..dp + 2].copy_from_slice(&pair),
            Encoded::Quad(quad) => dst[dp..dp + 4].copy_from_slice(&quad),
        }
        dp += need;
        sp += 1;
    }

    outcome(sp, dp, CoderResult::Underflow)
}

fn outcome(chars_consumed: usize, bytes_written: usize, result: CoderResult) -> EncodeOutcome {
    EncodeOutcome {
        chars_consumed,
        bytes_written,
        result,
    }
}
