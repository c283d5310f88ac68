//! Width-tier bit utilities
//!
//! Three tiers by operand width, each built from the tier below:
//!
//! - [`byte`] - 8-bit leaf tier (bit get/set, rotate, reverse, invert)
//! - [`word`] - 16-bit tier, composed of two bytes
//! - [`dword`] - 32-bit tier, composed of two words
//!
//! Bit indices and rotation counts are reduced modulo the operand width
//! (Euclidean, so negative inputs wrap) instead of being rejected; the whole
//! surface is total. [`ops::BitOps`] offers method-call sugar over the tier
//! functions, and [`byte_order`]/[`conversions`] assemble values from raw
//! dump bytes in any of the common byte orders.

pub mod byte;
pub mod byte_order;
pub mod conversions;
pub mod dword;
pub mod ops;
pub mod word;

pub use byte_order::ByteOrder;
pub use conversions::*;
pub use ops::BitOps;
