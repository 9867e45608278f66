//! ibm964-core: Mapping tables and coder primitives for the IBM-964 code page.
//!
//! IBM-964 is the IBM variant of EUC-TW: an ASCII/control single-byte region,
//! CNS 11643 plane 1 as the 94×94 G1 graphic set, and supplementary G2 planes
//! reached through the SS2 single-shift byte. This crate provides the forward
//! mapping tables, the tiered reverse index used by the encoder, and the
//! [`CoderResult`] status type shared by both conversion directions. The
//! conversion loops themselves live in the `ibm964` surface crate.

pub mod coder;
pub mod revindex;
pub mod tables;
pub mod unicode_norm;

mod table_data;

pub use coder::CoderResult;
pub use revindex::{Encoded, ReverseIndex};
pub use tables::G2Plane;
pub use unicode_norm::UnicodeNorm;
