//! ibm964: Decoder and encoder for the IBM-964 (EUC-TW) code page.
//!
//! Two independent, stateless conversion loops over caller-provided buffers:
//! [`decoder::decode`] turns IBM-964 bytes into Unicode scalar values,
//! [`encoder::encode`] turns scalar values back into native bytes through a
//! tiered reverse index. Both report progress and a [`CoderResult`] so the
//! caller can drain, refill, substitute, or abort per unit; no condition is
//! fatal to the stream.
//!
//! [`convert`] layers a string-level API with configurable error policies on
//! top of the loops, and [`charset::Ibm964`] carries the charset identity.

pub mod charset;
pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use charset::Ibm964;
pub use convert::{DecodeOptions, EncodeOptions, ErrorPolicy, decode_to_string, encode_to_vec};
pub use decoder::{DecodeOutcome, decode};
pub use encoder::{EncodeOutcome, encode};
pub use error::ConvertError;
pub use ibm964_core::{CoderResult, UnicodeNorm};
