//! The IBM-964 decode loop: native bytes to Unicode scalar values.
//!
//! One call scans as many complete units as input and destination capacity
//! allow. Every stop condition leaves the source cursor at the first byte of
//! the unit that could not be completed, so the caller resumes by re-slicing
//! at `bytes_consumed` — there is no partial consumption and no state
//! carried between calls. G2 plane selection is local to a single unit:
//! every escape sequence names its plane again.

use ibm964_core::CoderResult;
use ibm964_core::tables::{self, G2Plane};

/// Progress report of one [`decode`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Bytes consumed from the source. Points at the start of the first
    /// incomplete or offending unit when the result is not `Underflow`.
    pub bytes_consumed: usize,
    /// Scalar values written to the destination.
    pub chars_written: usize,
    /// Why the loop stopped.
    pub result: CoderResult,
}

/// Decode IBM-964 bytes into `dst`.
///
/// Stops at the first malformed or unmappable unit, when `dst` is full
/// (`Overflow`), or when `src` is exhausted or ends in a partial unit
/// (`Underflow`). The offending unit's length is carried in the result; its
/// bytes start at `src[bytes_consumed]`.
pub fn decode(src: &[u8], dst: &mut [char]) -> DecodeOutcome {
    let mut sp = 0;
    let mut dp = 0;

    while sp < src.len() {
        let b1 = src[sp];
        let (ch, unit_len) = match b1 {
            tables::SS2 => {
                // SS2 selector b3 b4 — four bytes or nothing.
                if src.len() - sp < 4 {
                    return outcome(sp, dp, CoderResult::Underflow);
                }
                let Some(plane) = G2Plane::from_selector(src[sp + 1]) else {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(selector = src[sp + 1], "unknown G2 selector");
                    return outcome(sp, dp, CoderResult::Malformed { len: 2 });
                };
                let b3 = src[sp + 2];
                if !tables::is_lead(b3) {
                    return outcome(sp, dp, CoderResult::Malformed { len: 3 });
                }
                let b4 = src[sp + 3];
                if !tables::is_lead(b4) {
                    return outcome(sp, dp, CoderResult::Malformed { len: 4 });
                }
                match tables::g2(plane, tables::cell_index(b3, b4)) {
                    Some(ch) => (ch, 4),
                    None => return outcome(sp, dp, CoderResult::Unmappable { len: 4 }),
                }
            }
            // The G3 set is unused in this code-page variant.
            tables::SS3 => return outcome(sp, dp, CoderResult::Malformed { len: 1 }),
            0x00..=0x9F => match tables::single_byte(b1) {
                Some(ch) => (ch, 1),
                None => return outcome(sp, dp, CoderResult::Unmappable { len: 1 }),
            },
            tables::LEAD_MIN..=tables::LEAD_MAX => {
                if src.len() - sp < 2 {
                    return outcome(sp, dp, CoderResult::Underflow);
                }
                let b2 = src[sp + 1];
                if !tables::is_lead(b2) {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(lead = b1, trail = b2, "trail byte out of range");
                    return outcome(sp, dp, CoderResult::Malformed { len: 2 });
                }
                match tables::g1(tables::cell_index(b1, b2)) {
                    Some(ch) => (ch, 2),
                    None => return outcome(sp, dp, CoderResult::Unmappable { len: 2 }),
                }
            }
            // 0xA0 and 0xFF can start no unit.
            _ => return outcome(sp, dp, CoderResult::Malformed { len: 1 }),
        };

        // The unit is fully validated before the capacity check, so an
        // Overflow return leaves it unconsumed and re-attemptable.
        if dp >= dst.len() {
            return outcome(sp, dp, CoderResult::Overflow);
        }
        dst[dp] = ch;
        dp += 1;
        sp += unit_len;
    }

    outcome(sp, dp, CoderResult::Underflow)
}

fn outcome(bytes_consumed: usize, chars_written: usize, result: CoderResult) -> DecodeOutcome {
    DecodeOutcome {
        bytes_consumed,
        chars_written,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(src: &[u8]) -> (Vec<char>, DecodeOutcome) {
        let mut dst = vec!['\u{0}'; src.len()];
        let out = decode(src, &mut dst);
        dst.truncate(out.chars_written);
        (dst, out)
    }

    // --- single-byte region ---

    #[test]
    fn ascii_byte_decodes_to_ascii() {
        let (chars, out) = decode_all(&[0x41]);
        assert_eq!(chars, vec!['A']);
        assert_eq!(out.result, CoderResult::Underflow);
        assert_eq!(out.bytes_consumed, 1);
    }

    #[test]
    fn ascii_run_decodes() {
        let (chars, out) = decode_all(b"Hi!");
        assert_eq!(chars, vec!['H', 'i', '!']);
        assert_eq!(out.bytes_consumed, 3);
        assert_eq!(out.chars_written, 3);
    }

    #[test]
    fn c1_control_decodes() {
        let (chars, out) = decode_all(&[0x85]);
        assert_eq!(chars, vec!['\u{85}']);
        assert!(out.result.is_underflow());
    }

    // --- G1 plane ---

    #[test]
    fn g1_origin_is_ideographic_space() {
        let (chars, out) = decode_all(&[0xA1, 0xA1]);
        assert_eq!(chars, vec!['\u{3000}']);
        assert_eq!(out.bytes_consumed, 2);
    }

    #[test]
    fn g1_ideograph_row() {
        let (chars, _) = decode_all(&[0xC4, 0xA1, 0xC4, 0xA2]);
        assert_eq!(chars, vec!['\u{4E00}', '\u{4E59}']);
    }

    #[test]
    fn lone_lead_byte_underflows() {
        let out = decode(&[0xA1], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Underflow);
        assert_eq!(out.bytes_consumed, 0);
        assert_eq!(out.chars_written, 0);
    }

    #[test]
    fn trail_below_range_is_malformed() {
        let out = decode(&[0xA1, 0xA0], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Malformed { len: 2 });
        assert_eq!(out.bytes_consumed, 0);
    }

    #[test]
    fn trail_above_range_is_malformed() {
        let out = decode(&[0xA1, 0xFF], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Malformed { len: 2 });
    }

    #[test]
    fn ascii_trail_is_malformed() {
        let out = decode(&[0xA1, 0x41], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Malformed { len: 2 });
    }

    #[test]
    fn unmapped_g1_cell_is_unmappable() {
        // Cell 22 sits in the gap after the first symbol run.
        let out = decode(&[0xA1, 0xB7], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Unmappable { len: 2 });
        assert_eq!(out.bytes_consumed, 0);
    }

    // --- lead bytes outside any region ---

    #[test]
    fn byte_a0_is_malformed() {
        let out = decode(&[0xA0, 0xA1], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Malformed { len: 1 });
        assert_eq!(out.bytes_consumed, 0);
    }

    #[test]
    fn byte_ff_is_malformed() {
        let out = decode(&[0xFF], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Malformed { len: 1 });
    }

    // --- SS2 escape units ---

    #[test]
    fn g2_plane2_origin() {
        let (chars, out) = decode_all(&[0x8E, 0xA2, 0xA1, 0xA1]);
        assert_eq!(chars, vec!['\u{4E42}']);
        assert_eq!(out.bytes_consumed, 4);
    }

    #[test]
    fn g2_udc_plane() {
        let (chars, _) = decode_all(&[0x8E, 0xAC, 0xA1, 0xA1]);
        assert_eq!(chars, vec!['\u{E000}']);
    }

    #[test]
    fn unknown_selector_is_malformed_len_2() {
        let out = decode(&[0x8E, 0xFF, 0xA1, 0xA1], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Malformed { len: 2 });
        assert_eq!(out.bytes_consumed, 0);
    }

    #[test]
    fn bad_third_byte_is_malformed_len_3() {
        let out = decode(&[0x8E, 0xA2, 0x41, 0xA1], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Malformed { len: 3 });
    }

    #[test]
    fn bad_fourth_byte_is_malformed_len_4() {
        let out = decode(&[0x8E, 0xA2, 0xA1, 0x20], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Malformed { len: 4 });
    }

    #[test]
    fn truncated_escape_underflows() {
        for len in 1..4 {
            let src = &[0x8E, 0xA2, 0xA1, 0xA1][..len];
            let out = decode(src, &mut ['\u{0}'; 4]);
            assert_eq!(out.result, CoderResult::Underflow, "prefix of {len} bytes");
            assert_eq!(out.bytes_consumed, 0);
        }
    }

    #[test]
    fn unmapped_g2_cell_is_unmappable_len_4() {
        // Plane 2 row 90 is far past the mapped repertoire.
        let out = decode(&[0x8E, 0xA2, 0xFA, 0xA1], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Unmappable { len: 4 });
        assert_eq!(out.bytes_consumed, 0);
    }

    #[test]
    fn ss3_is_malformed_len_1() {
        let out = decode(&[0x8F, 0xA1, 0xA1, 0xA1], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Malformed { len: 1 });
        assert_eq!(out.bytes_consumed, 0);
    }

    // --- overflow discipline ---

    #[test]
    fn overflow_leaves_unit_unconsumed() {
        let src = [0xA1, 0xA1, 0xA1, 0xA2];
        let mut dst = ['\u{0}'; 1];
        let out = decode(&src, &mut dst);
        assert_eq!(out.result, CoderResult::Overflow);
        assert_eq!(out.bytes_consumed, 2);
        assert_eq!(out.chars_written, 1);
        assert_eq!(dst[0], '\u{3000}');

        // Resuming at the reported offset completes the stream.
        let mut rest = ['\u{0}'; 1];
        let out2 = decode(&src[out.bytes_consumed..], &mut rest);
        assert_eq!(out2.result, CoderResult::Underflow);
        assert_eq!(out2.bytes_consumed, 2);
        assert_eq!(rest[0], '\u{FF0C}');
    }

    #[test]
    fn zero_capacity_destination_overflows_immediately() {
        let out = decode(&[0x41], &mut []);
        assert_eq!(out.result, CoderResult::Overflow);
        assert_eq!(out.bytes_consumed, 0);
        assert_eq!(out.chars_written, 0);
    }

    #[test]
    fn empty_source_underflows() {
        let out = decode(&[], &mut ['\u{0}'; 4]);
        assert_eq!(out.result, CoderResult::Underflow);
        assert_eq!(out.bytes_consumed, 0);
    }

    // --- mixed streams ---

    #[test]
    fn mixed_regions_in_one_call() {
        let src = [0x41, 0xA1, 0xA1, 0x8E, 0xA2, 0xA1, 0xA1, 0x42];
        let (chars, out) = decode_all(&src);
        assert_eq!(chars, vec!['A', '\u{3000}', '\u{4E42}', 'B']);
        assert_eq!(out.bytes_consumed, 8);
        assert_eq!(out.result, CoderResult::Underflow);
    }

    #[test]
    fn error_after_good_units_reports_partial_progress() {
        let src = [0x41, 0x42, 0xA0];
        let mut dst = ['\u{0}'; 4];
        let out = decode(&src, &mut dst);
        assert_eq!(out.result, CoderResult::Malformed { len: 1 });
        assert_eq!(out.bytes_consumed, 2);
        assert_eq!(out.chars_written, 2);
    }
}
