//! Fixed-width bit manipulation utilities
//!
//! Pure functions over 8-, 16-, and 32-bit unsigned integers for byte-level
//! protocol and memory-dump decoding: bit get/set, rotation, mirroring,
//! inversion, half-width composition, and a manual (auditable) IEEE-754
//! single-precision decode.
//!
//! # Architecture
//!
//! - **Width tiers**: [`bits::byte`], [`bits::word`], [`bits::dword`] - each
//!   tier decomposes into the one below, so the indexing rules are defined
//!   once at the byte tier and inherited upward
//! - **Sugar**: [`BitOps`] methods (`bit`, `with_bit`, `rol`, `ror`) over the
//!   tier functions
//! - **Dump decoding**: [`ByteOrder`] plus the `*_from_dump`/`*_from_slice`
//!   readers in [`bits::conversions`]
//! - **Float decode**: [`decode_float_bits`] rebuilds the float from its
//!   fields rather than reinterpret-casting
//!
//! Every operation is stateless and total: out-of-range bit indices and
//! rotation counts wrap modulo the operand width, and the only failable
//! calls are the configuration-facing ones (byte-order parsing and
//! length-checked slice reads).

pub mod bits;
pub mod error;
pub mod float;

// Re-export core types
pub use bits::conversions::{
    dword_from_dump, dword_from_slice, float_from_dump, float_from_slice, word_from_dump,
    word_from_slice,
};
pub use bits::{byte, dword, word, BitOps, ByteOrder};
pub use error::{BitrigError, Result};
pub use float::decode_float_bits;
