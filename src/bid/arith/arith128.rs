use core::cmp::Ordering;

use super::uint256::u256;

super::impl_basic!(u128);

/// Returns the full product `x * y` as `(lo, hi)`.
pub(crate) const fn widening_mul(x: u128, y: u128) -> (u128, u128) {
    let x1 = (x >> 64) as u64;
    let x0 = x as u64;
    let y1 = (y >> 64) as u64;
    let y0 = y as u64;

    /// Returns `lhs * rhs + carry`.
    const fn carrying_mul(lhs: u64, rhs: u64, carry: u64) -> (u64, u64) {
        // The result always fits: (2^64-1)^2 + 2^64-1 < 2^128.
        let wide = (lhs as u128) * (rhs as u128) + (carry as u128);
        (wide as u64, (wide >> 64) as u64)
    }

    let (p1, p2) = carrying_mul(x0, y0, 0);
    let (p2, p31) = carrying_mul(x0, y1, p2);
    let (p2, p32) = carrying_mul(x1, y0, p2);
    let (p3, p4o) = p31.overflowing_add(p32);
    let (p3, p4) = carrying_mul(x1, y1, p3);
    let p4 = p4.wrapping_add(p4o as u64);

    let hi = p3 as u128 | (p4 as u128) << 64;
    let lo = p1 as u128 | (p2 as u128) << 64;
    (lo, hi)
}

/// The promoted integer used for intermediate results.
pub(crate) type Wide = u256;

pub(crate) const WIDE_ZERO: Wide = u256::ZERO;

/// The number of decimal digits that always fit in [`Wide`].
pub(crate) const WIDE_DIGITS: u32 = 77;

pub(crate) const fn wide_from(x: u128) -> Wide {
    u256::new(x)
}

/// Truncates `x` to a coefficient.
pub(crate) const fn wide_to(x: Wide) -> u128 {
    debug_assert!(x.hi == 0);
    x.lo
}

/// Returns the full product `x * y`.
pub(crate) const fn wide_mul(x: u128, y: u128) -> Wide {
    u256::widening_mul(x, y)
}

pub(crate) const fn wide_mul_small(x: Wide, m: u64) -> Wide {
    x.mul_u64(m)
}

pub(crate) const fn wide_add(x: Wide, y: Wide) -> Wide {
    x.add(y)
}

pub(crate) const fn wide_sub(x: Wide, y: Wide) -> Wide {
    x.sub(y)
}

pub(crate) const fn wide_cmp(x: Wide, y: Wide) -> Ordering {
    x.const_cmp(y)
}

pub(crate) const fn wide_is_zero(x: Wide) -> bool {
    x.is_zero()
}

pub(crate) const fn wide_digits(x: Wide) -> u32 {
    x.digits()
}

pub(crate) const fn wide_divrem_small(x: Wide, d: u64) -> (Wide, u64) {
    x.divrem_u64(d)
}

pub(crate) const fn wide_divrem(x: Wide, d: u128) -> (Wide, u128) {
    x.divrem_u128(d)
}

super::impl_wide_shift!();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_digits_fit() {
        // 10^77 fits in 256 bits, 10^78 does not.
        let p = wide_shl(wide_from(1), WIDE_DIGITS);
        assert_eq!(wide_digits(p), WIDE_DIGITS + 1);
        let (q, r) = wide_divrem_small(p, 10);
        assert_eq!(r, 0);
        assert_eq!(wide_mul_small(q, 10), p);
    }

    #[test]
    fn test_wide_shr_round() {
        // (10^34 - 1)^2
        let max = pow10(34) - 1;
        let x = wide_mul(max, max);
        assert_eq!(wide_digits(x), 68);
        let (q, d, sticky) = wide_shr_round(x, 34);
        // (10^34-1)^2 = 10^68 - 2*10^34 + 1
        assert_eq!(wide_to(q), pow10(34) - 2);
        assert_eq!(d, 0);
        assert!(sticky);
        let (q, d, sticky) = wide_shr_round(x, 68);
        assert!(wide_is_zero(q));
        assert_eq!(d, 9);
        assert!(sticky);
    }
}
