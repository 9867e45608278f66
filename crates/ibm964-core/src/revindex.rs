//! Tiered reverse index for the encode direction.
//!
//! Encoding walks a two-level structure keyed by the Unicode scalar value:
//! the high bits (`cp >> 6`) select a 64-cell shard through `index1`, the low
//! six bits select the cell inside it. Shards live in one contiguous cell
//! vector; the source material split them across several arrays only to work
//! around literal-size limits, which is not reproduced here.
//!
//! Cell packing (`u32`):
//!
//! - `0` — no mapping (reserved; no encodable unit packs to zero),
//! - `0x0000_00XX` — one output byte,
//! - `0x0000_XXYY` — two output bytes, lead `XX`, trail `YY`,
//! - `0xWWXX_YYZZ` with a nonzero high half — four output bytes, where the
//!   high half packs `(SS2, selector)` and the low half the two data bytes.
//!
//! The shared instance is derived from the forward tables at first use, so
//! the two directions can never disagree on a mapping.

use std::sync::LazyLock;

use crate::tables::{self, G2Plane};

/// Bits of the scalar value indexing within one shard.
pub const SHARD_BITS: u32 = 6;
/// Cells per shard.
pub const SHARD_LEN: usize = 1 << SHARD_BITS;

/// `index1` value meaning "no cell in this 64-codepoint range is mapped".
const NO_SHARD: u16 = u16::MAX;

/// Highest scalar value the index covers (all IBM-964 mappings are BMP).
const MAX_CP: u32 = 0x1_0000;

/// The native byte form of one encoded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoded {
    /// Single-byte region output.
    Single(u8),
    /// G1 plane output: lead and trail byte.
    Double([u8; 2]),
    /// G2 plane output: `SS2`, selector, lead, trail.
    Quad([u8; 4]),
}

impl Encoded {
    /// Number of output bytes this form occupies.
    pub fn byte_len(&self) -> usize {
        match self {
            Encoded::Single(_) => 1,
            Encoded::Double(_) => 2,
            Encoded::Quad(_) => 4,
        }
    }
}

/// The two-level encode lookup table.
///
/// Immutable after construction; the process-wide instance behind
/// [`ReverseIndex::shared`] is safely shared across threads without locking.
#[derive(Debug)]
pub struct ReverseIndex {
    /// Shard offsets into `cells`, indexed by `cp >> SHARD_BITS`.
    index1: Box<[u16]>,
    /// All shards, flattened into one contiguous cell space.
    cells: Vec<u32>,
}

impl ReverseIndex {
    /// Build an index from `(byte form, scalar value)` pairs.
    ///
    /// When several byte forms map to the same scalar (compatibility
    /// duplicates in the source tables), the first pair wins: re-encoding
    /// reproduces whichever sequence was registered first.
    pub fn build<I>(pairs: I) -> ReverseIndex
    where
        I: IntoIterator<Item = (Encoded, char)>,
    {
        let mut index1 = vec![NO_SHARD; (MAX_CP >> SHARD_BITS) as usize].into_boxed_slice();
        let mut cells: Vec<u32> = Vec::new();

        for (encoded, ch) in pairs {
            let cp = ch as u32;
            debug_assert!(cp < MAX_CP, "IBM-964 repertoire is BMP-only: U+{cp:04X}");

            let hi = (cp >> SHARD_BITS) as usize;
            if index1[hi] == NO_SHARD {
                debug_assert!(cells.len() < usize::from(NO_SHARD));
                index1[hi] = cells.len() as u16;
                cells.resize(cells.len() + SHARD_LEN, 0);
            }

            let cell = &mut cells[usize::from(index1[hi]) + (cp as usize & (SHARD_LEN - 1))];
            if *cell == 0 {
                *cell = pack(encoded);
            }
        }

        ReverseIndex { index1, cells }
    }

    /// The process-wide index derived from the forward mapping tables.
    pub fn shared() -> &'static ReverseIndex {
        static SHARED: LazyLock<ReverseIndex> = LazyLock::new(|| ReverseIndex::build(all_pairs()));
        &SHARED
    }

    /// Look up the byte form of a scalar value.
    pub fn lookup(&self, ch: char) -> Option<Encoded> {
        let cp = ch as u32;
        if cp >= MAX_CP {
            return None;
        }
        let offset = self.index1[(cp >> SHARD_BITS) as usize];
        if offset == NO_SHARD {
            return None;
        }
        let cell = self.cells[usize::from(offset) + (cp as usize & (SHARD_LEN - 1))];
        unpack(cell)
    }

    /// Number of shards materialized in the cell space.
    pub fn shard_count(&self) -> usize {
        self.cells.len() / SHARD_LEN
    }
}

fn pack(encoded: Encoded) -> u32 {
    match encoded {
        Encoded::Single(b) => u32::from(b),
        Encoded::Double([lead, trail]) => u32::from(lead) << 8 | u32::from(trail),
        Encoded::Quad(bytes) => u32::from_be_bytes(bytes),
    }
}

fn unpack(cell: u32) -> Option<Encoded> {
    match cell {
        0 => None,
        c if c < 0x100 => Some(Encoded::Single(c as u8)),
        c if c < 0x1_0000 => Some(Encoded::Double([(c >> 8) as u8, c as u8])),
        c => Some(Encoded::Quad(c.to_be_bytes())),
    }
}

/// Every forward mapping as an `(Encoded, char)` pair, in table-construction
/// order: single-byte region, G1, then the G2 planes.
fn all_pairs() -> impl Iterator<Item = (Encoded, char)> {
    // U+0000 is excluded: its cell would pack to the reserved zero value.
    // The encoder emits NUL through its ASCII fast path instead.
    let single = tables::single_byte_entries()
        .filter(|&(b, _)| b != 0)
        .map(|(b, ch)| (Encoded::Single(b), ch));

    let g1 = tables::g1_entries().map(|(index, ch)| (Encoded::Double(cell_bytes(index)), ch));

    let g2 = G2Plane::ALL.into_iter().flat_map(|plane| {
        tables::g2_entries(plane).map(move |(index, ch)| {
            let [lead, trail] = cell_bytes(index);
            (
                Encoded::Quad([tables::SS2, plane.selector(), lead, trail]),
                ch,
            )
        })
    });

    single.chain(g1).chain(g2)
}

/// Lead and trail byte of a 94-radix cell index.
fn cell_bytes(index: u16) -> [u8; 2] {
    [
        (index / tables::ROW) as u8 + tables::LEAD_MIN,
        (index % tables::ROW) as u8 + tables::LEAD_MIN,
    ]
}
