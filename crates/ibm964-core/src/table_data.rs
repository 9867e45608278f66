//! Forward mapping data for the IBM-964 code page.
//!
//! Each graphic plane is stored as a sorted list of runs. A run pairs the
//! 94-radix cell index of its first character with the consecutive characters
//! that follow; cells between runs have no mapping. The runs below carry the
//! supported repertoire of the code page: the lookup machinery in
//! [`crate::tables`] is independent of how many rows a plane carries, so
//! extending coverage means appending runs here and nothing else.
//!
//! Index convention: `(lead - 0xA1) * 94 + (trail - 0xA1)`.

/// A contiguous run of mapped cells: `(first_index, characters)`.
pub(crate) type Run = (u16, &'static [char]);

/// CNS 11643 plane 1 (the G1 set, lead bytes `0xA1-0xFE`).
pub(crate) static G1_RUNS: &[Run] = &[
    // Row 1: punctuation and fullwidth symbols.
    (
        0,
        &[
            '\u{3000}', '\u{FF0C}', '\u{3001}', '\u{3002}', '\u{FF0E}', '\u{2027}', '\u{FF1B}',
            '\u{FF1A}', '\u{FF1F}', '\u{FF01}', '\u{FE30}', '\u{2026}', '\u{2025}', '\u{FE50}',
            '\u{FE51}', '\u{FE52}', '\u{00B7}', '\u{FE54}', '\u{FE55}', '\u{FE56}', '\u{FE57}',
            '\u{FF5C}',
        ],
    ),
    // Row 1: paired brackets and quotation forms.
    (
        29,
        &[
            '\u{FF08}', '\u{FF09}', '\u{FE35}', '\u{FE36}', '\u{FF5B}', '\u{FF5D}', '\u{FE37}',
            '\u{FE38}', '\u{3014}', '\u{3015}', '\u{FE39}', '\u{FE3A}', '\u{3010}', '\u{3011}',
            '\u{FE3B}', '\u{FE3C}', '\u{300A}', '\u{300B}', '\u{FE3D}', '\u{FE3E}', '\u{3008}',
            '\u{3009}', '\u{FE3F}', '\u{FE40}', '\u{300C}', '\u{300D}', '\u{FE41}', '\u{FE42}',
            '\u{300E}', '\u{300F}',
        ],
    ),
    // Row 36: first ideograph row, ordered by stroke count.
    (
        3290,
        &[
            '\u{4E00}', '\u{4E59}', '\u{4E01}', '\u{4E03}', '\u{4E43}', '\u{4E5D}', '\u{4E86}',
            '\u{4E8C}', '\u{4EBA}', '\u{513F}', '\u{5165}', '\u{516B}', '\u{51E0}', '\u{5200}',
            '\u{5201}', '\u{529B}', '\u{5315}', '\u{5341}', '\u{535C}', '\u{53C8}',
        ],
    ),
];

/// CNS 11643 plane 2 (G2, selector byte `0xA2`).
pub(crate) static G2_A2_RUNS: &[Run] = &[
    // Row 1: supplementary ideographs.
    (
        0,
        &[
            '\u{4E42}', '\u{4E5C}', '\u{51F5}', '\u{531A}', '\u{5382}', '\u{4E07}', '\u{4E0C}',
            '\u{4E47}', '\u{4E8D}', '\u{56D7}',
        ],
    ),
];

/// IBM user-defined G2 plane behind selector `0xAC`.
///
/// UDC cells map in order onto the private use area starting at
/// [`G2_AC_PUA_BASE`]; rows beyond [`G2_AC_CELLS`] are unassigned.
pub(crate) const G2_AC_PUA_BASE: u32 = 0xE000;
pub(crate) const G2_AC_CELLS: u16 = 188;

/// IBM user-defined G2 plane behind selector `0xAD`, continuing the
/// private-use block where the `0xAC` plane ends.
pub(crate) const G2_AD_PUA_BASE: u32 = G2_AC_PUA_BASE + G2_AC_CELLS as u32;
pub(crate) const G2_AD_CELLS: u16 = 94;
