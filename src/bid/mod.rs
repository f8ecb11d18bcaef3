//! IEEE 754-2008 decimal floating point numbers with binary
//! integer significands.

mod arith;
mod atod;
mod base;
mod bid128;
mod bid32;
mod bid64;
mod convert;
mod dtoa;
mod util;

pub use bid128::Bid128;
pub use bid32::Bid32;
pub use bid64::Bid64;
