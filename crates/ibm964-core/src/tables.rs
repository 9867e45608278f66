//! Forward lookup over the IBM-964 graphic planes.
//!
//! Byte layout of the code page:
//!
//! - `0x00-0x9F` (minus the shift markers) is the single-byte region: ASCII
//!   plus the C1 controls, decoded by direct lookup.
//! - Lead and trail bytes in `[0xA1, 0xFE]` address the 94×94 G1 plane
//!   (CNS 11643 plane 1) through the index `(b1 - 0xA1) * 94 + (b2 - 0xA1)`.
//! - `SS2` (`0x8E`) followed by a selector byte and two data bytes addresses
//!   one of three G2 planes with the same 94-radix index.
//! - `SS3` (`0x8F`) is unused in this code-page variant.
//!
//! All lookups return `Option<char>`: `None` is the explicit "no mapping"
//! result, never an in-band sentinel value.

use crate::table_data::{self, Run};

/// Single-shift marker introducing a G2 unit.
pub const SS2: u8 = 0x8E;
/// Single-shift marker for the unsupported G3 set.
pub const SS3: u8 = 0x8F;
/// Lowest valid lead/trail byte of a double-byte unit.
pub const LEAD_MIN: u8 = 0xA1;
/// Highest valid lead/trail byte of a double-byte unit.
pub const LEAD_MAX: u8 = 0xFE;
/// Cells per plane row.
pub const ROW: u16 = 94;
/// Total cells in one 94×94 plane.
pub const PLANE_CELLS: u16 = ROW * ROW;

/// The G2 planes of IBM-964, named after their selector bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum G2Plane {
    /// CNS 11643 plane 2 (selector `0xA2`).
    A2,
    /// IBM user-defined plane (selector `0xAC`).
    Ac,
    /// IBM user-defined plane (selector `0xAD`).
    Ad,
}

impl G2Plane {
    /// All planes in table-construction order.
    pub const ALL: [G2Plane; 3] = [G2Plane::A2, G2Plane::Ac, G2Plane::Ad];

    /// The byte that selects this plane after `SS2`.
    pub fn selector(self) -> u8 {
        match self {
            G2Plane::A2 => 0xA2,
            G2Plane::Ac => 0xAC,
            G2Plane::Ad => 0xAD,
        }
    }

    /// Map a selector byte back to its plane. Unknown selectors have no
    /// plane and make the whole unit malformed.
    pub fn from_selector(byte: u8) -> Option<G2Plane> {
        match byte {
            0xA2 => Some(G2Plane::A2),
            0xAC => Some(G2Plane::Ac),
            0xAD => Some(G2Plane::Ad),
            _ => None,
        }
    }
}

/// Returns true if `b` is a valid lead or trail byte of a double-byte unit.
pub fn is_lead(b: u8) -> bool {
    (LEAD_MIN..=LEAD_MAX).contains(&b)
}

/// 94-radix cell index of a validated byte pair.
///
/// Both bytes must already be in `[LEAD_MIN, LEAD_MAX]`.
pub fn cell_index(b1: u8, b2: u8) -> u16 {
    debug_assert!(is_lead(b1) && is_lead(b2));
    u16::from(b1 - LEAD_MIN) * ROW + u16::from(b2 - LEAD_MIN)
}

/// Decode a byte of the single-byte region.
///
/// The shift markers are not characters and return `None` here; the decode
/// loop dispatches on them before consulting this table.
pub fn single_byte(b: u8) -> Option<char> {
    match b {
        SS2 | SS3 => None,
        0x00..=0x9F => Some(b as char),
        _ => None,
    }
}

/// Look up a G1 plane cell.
pub fn g1(index: u16) -> Option<char> {
    lookup_runs(table_data::G1_RUNS, index)
}

/// Look up a G2 plane cell.
pub fn g2(plane: G2Plane, index: u16) -> Option<char> {
    if index >= PLANE_CELLS {
        return None;
    }
    match plane {
        G2Plane::A2 => lookup_runs(table_data::G2_A2_RUNS, index),
        G2Plane::Ac => pua_cell(index, table_data::G2_AC_PUA_BASE, table_data::G2_AC_CELLS),
        G2Plane::Ad => pua_cell(index, table_data::G2_AD_PUA_BASE, table_data::G2_AD_CELLS),
    }
}

/// Binary search over sorted, non-overlapping runs.
fn lookup_runs(runs: &[Run], index: u16) -> Option<char> {
    let pos = runs.partition_point(|&(start, _)| start <= index);
    let &(start, chars) = runs.get(pos.checked_sub(1)?)?;
    chars.get(usize::from(index - start)).copied()
}

/// User-defined-character planes map cells in order onto a private-use block.
fn pua_cell(index: u16, base: u32, cells: u16) -> Option<char> {
    if index >= cells {
        return None;
    }
    char::from_u32(base + u32::from(index))
}

/// All mapped single-byte cells, for reverse-index construction.
pub fn single_byte_entries() -> impl Iterator<Item = (u8, char)> {
    (0x00..=0x9Fu8).filter_map(|b| single_byte(b).map(|ch| (b, ch)))
}

/// All mapped G1 cells as `(index, char)`, in index order.
pub fn g1_entries() -> impl Iterator<Item = (u16, char)> {
    run_entries(table_data::G1_RUNS)
}

/// All mapped cells of a G2 plane as `(index, char)`, in index order.
pub fn g2_entries(plane: G2Plane) -> Box<dyn Iterator<Item = (u16, char)>> {
    match plane {
        G2Plane::A2 => Box::new(run_entries(table_data::G2_A2_RUNS)),
        G2Plane::Ac => Box::new(pua_entries(
            table_data::G2_AC_PUA_BASE,
            table_data::G2_AC_CELLS,
        )),
        G2Plane::Ad => Box::new(pua_entries(
            table_data::G2_AD_PUA_BASE,
            table_data::G2_AD_CELLS,
        )),
    }
}

fn run_entries(runs: &'static [Run]) -> impl Iterator<Item = (u16, char)> {
    runs.iter().flat_map(|&(start, chars)| {
        chars
            .iter()
            .enumerate()
            .map(move |(i, &ch)| (start + i as u16, ch))
    })
}

fn pua_entries(base: u32, cells: u16) -> impl Iterator<Item = (u16, char)> {
    (0..cells).filter_map(move |i| char::from_u32(base + u32::from(i)).map(|ch| (i, ch)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- single-byte region ---

    #[test]
    fn single_byte_ascii_identity() {
        assert_eq!(single_byte(0x41), Some('A'));
        assert_eq!(single_byte(0x00), Some('\u{0}'));
        assert_eq!(single_byte(0x7F), Some('\u{7F}'));
    }

    #[test]
    fn single_byte_c1_controls() {
        assert_eq!(single_byte(0x80), Some('\u{80}'));
        assert_eq!(single_byte(0x9F), Some('\u{9F}'));
    }

    #[test]
    fn single_byte_excludes_shift_markers() {
        assert_eq!(single_byte(SS2), None);
        assert_eq!(single_byte(SS3), None);
    }

    #[test]
    fn single_byte_rejects_high_bytes() {
        assert_eq!(single_byte(0xA0), None);
        assert_eq!(single_byte(0xA1), None);
        assert_eq!(single_byte(0xFF), None);
    }

    // --- cell indexing ---

    #[test]
    fn cell_index_origin() {
        assert_eq!(cell_index(0xA1, 0xA1), 0);
    }

    #[test]
    fn cell_index_row_stride() {
        assert_eq!(cell_index(0xA2, 0xA1), 94);
        assert_eq!(cell_index(0xA1, 0xFE), 93);
        assert_eq!(cell_index(0xFE, 0xFE), PLANE_CELLS - 1);
    }

    #[test]
    fn is_lead_boundaries() {
        assert!(!is_lead(0xA0));
        assert!(is_lead(0xA1));
        assert!(is_lead(0xFE));
        assert!(!is_lead(0xFF));
        assert!(!is_lead(0x41));
    }

    // --- G1 lookups ---

    #[test]
    fn g1_first_cell_is_ideographic_space() {
        assert_eq!(g1(0), Some('\u{3000}'));
    }

    #[test]
    fn g1_row_one_symbols() {
        assert_eq!(g1(1), Some('\u{FF0C}'));
        assert_eq!(g1(3), Some('\u{3002}'));
        assert_eq!(g1(29), Some('\u{FF08}'));
    }

    #[test]
    fn g1_first_ideograph() {
        // Row 36 cell 0 = (36 - 1) * 94.
        assert_eq!(g1(3290), Some('\u{4E00}'));
        assert_eq!(g1(3291), Some('\u{4E59}'));
    }

    #[test]
    fn g1_gap_between_runs_is_unmapped() {
        assert_eq!(g1(22), None);
        assert_eq!(g1(28), None);
        assert_eq!(g1(3289), None);
    }

    #[test]
    fn g1_past_last_run_is_unmapped() {
        assert_eq!(g1(PLANE_CELLS - 1), None);
    }

    // --- G2 lookups ---

    #[test]
    fn g2_plane2_first_cell() {
        assert_eq!(g2(G2Plane::A2, 0), Some('\u{4E42}'));
    }

    #[test]
    fn g2_udc_planes_are_contiguous_pua() {
        assert_eq!(g2(G2Plane::Ac, 0), Some('\u{E000}'));
        assert_eq!(g2(G2Plane::Ac, 187), Some('\u{E0BB}'));
        assert_eq!(g2(G2Plane::Ac, 188), None);
        assert_eq!(g2(G2Plane::Ad, 0), Some('\u{E0BC}'));
        assert_eq!(g2(G2Plane::Ad, 94), None);
    }

    #[test]
    fn g2_out_of_plane_index_is_unmapped() {
        assert_eq!(g2(G2Plane::A2, PLANE_CELLS), None);
        assert_eq!(g2(G2Plane::Ac, u16::MAX), None);
    }

    // --- selectors ---

    #[test]
    fn selector_round_trip() {
        for plane in G2Plane::ALL {
            assert_eq!(G2Plane::from_selector(plane.selector()), Some(plane));
        }
    }

    #[test]
    fn unknown_selectors_have_no_plane() {
        assert_eq!(G2Plane::from_selector(0xA1), None);
        assert_eq!(G2Plane::from_selector(0xA3), None);
        assert_eq!(G2Plane::from_selector(0xFF), None);
        assert_eq!(G2Plane::from_selector(0x00), None);
    }

    // --- entry iteration ---

    #[test]
    fn single_byte_entries_skip_shift_markers() {
        let entries: Vec<_> = single_byte_entries().collect();
        assert_eq!(entries.len(), 0xA0 - 2);
        assert!(entries.iter().all(|&(b, _)| b != SS2 && b != SS3));
        assert!(entries.contains(&(0x41, 'A')));
    }

    #[test]
    fn g1_entries_agree_with_lookup() {
        let mut count = 0;
        for (index, ch) in g1_entries() {
            assert_eq!(g1(index), Some(ch), "mismatch at G1 index {index}");
            count += 1;
        }
        assert_eq!(count, 22 + 30 + 20);
    }

    #[test]
    fn g2_entries_agree_with_lookup() {
        for plane in G2Plane::ALL {
            for (index, ch) in g2_entries(plane) {
                assert_eq!(g2(plane, index), Some(ch), "mismatch in {plane:?} at {index}");
            }
        }
    }

    #[test]
    fn g1_entries_are_sorted_and_unique() {
        let indices: Vec<u16> = g1_entries().map(|(i, _)| i).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(indices, sorted);
    }
}
