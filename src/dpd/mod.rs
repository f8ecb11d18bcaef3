//! IEEE 754-2008 decimal floating point numbers with densely
//! packed decimal significands.
//!
//! The DPD types are interchange formats. Convert them to their
//! BID counterparts to do arithmetic.

mod bcd;
mod declet;
mod macros;
mod tables;

use macros::impl_dpd;

use crate::bid::{Bid128, Bid32, Bid64};

impl_dpd! {
    /// A 32-bit decimal floating point number with a densely
    /// packed decimal significand.
    name = Dpd32,
    ucoeff = u32,
    bid = Bid32,
}

impl_dpd! {
    /// A 64-bit decimal floating point number with a densely
    /// packed decimal significand.
    name = Dpd64,
    ucoeff = u64,
    bid = Bid64,
}

impl_dpd! {
    /// A 128-bit decimal floating point number with a densely
    /// packed decimal significand.
    name = Dpd128,
    ucoeff = u128,
    bid = Bid128,
}
