use core::mem::size_of;

use super::{arith::arith64, base::impl_dec};
use crate::util::const_assert;

/// A 64-bit decimal floating point number.
///
/// (–1)^sign * coefficient * 10^exp
///
/// It has 16 digits of precision and an adjusted exponent in
/// [-383, 384].
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Bid64(
    /// ## Form 1
    ///
    /// s 00eeeeeeee   (0)ttt tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    /// s 01eeeeeeee   (0)ttt tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    /// s 10eeeeeeee   (0)ttt tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    ///
    /// ## Form 2
    ///
    /// s 1100eeeeeeee (100)t tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    /// s 1101eeeeeeee (100)t tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    /// s 1110eeeeeeee (100)t tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    u64,
);
const_assert!(size_of::<Bid64>() == 64 / 8);

impl_dec! {
    name = Bid64,
    ucoeff = u64,
    icoeff = i64,
    biased_exp = u16,
    unbiased_exp = i16,
    arith = arith64,
    dpd = crate::dpd::Dpd64,
}
