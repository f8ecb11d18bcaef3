use core::cmp::Ordering;

use super::{arith128, arith64};

/// A 256-bit unsigned integer.
///
/// It is only as capable as 128-bit decimal arithmetic needs:
/// products of two coefficients, decimal shifts, and division
/// by a coefficient.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[allow(non_camel_case_types)]
pub(crate) struct u256 {
    pub lo: u128,
    pub hi: u128,
}

impl u256 {
    pub const ZERO: Self = Self { lo: 0, hi: 0 };

    /// Creates a `u256`.
    pub const fn new(lo: u128) -> Self {
        Self { lo, hi: 0 }
    }

    #[cfg(test)]
    pub const fn from_parts(hi: u128, lo: u128) -> Self {
        Self { hi, lo }
    }

    pub const fn is_zero(self) -> bool {
        self.lo == 0 && self.hi == 0
    }

    /// Compares `self` and `other`.
    pub const fn const_cmp(self, other: Self) -> Ordering {
        match arith128::const_cmp(self.hi, other.hi) {
            Ordering::Equal => arith128::const_cmp(self.lo, other.lo),
            ord => ord,
        }
    }

    #[cfg(test)]
    pub const fn const_eq(self, other: Self) -> bool {
        self.hi == other.hi && self.lo == other.lo
    }

    /// Returns the number of decimal digits in `self`.
    pub const fn digits(self) -> u32 {
        const P19: u64 = arith64::pow10(19);

        let mut x = self;
        let mut n = 0;
        // While `x >= 2^128 > 10^19` each division removes
        // exactly 19 digits.
        while x.hi != 0 {
            x = x.divrem_u64(P19).0;
            n += 19;
        }
        n + arith128::digits(x.lo)
    }

    /// Returns `self + other`, wrapping on overflow.
    pub const fn add(self, other: Self) -> Self {
        let (lo, carry) = self.lo.overflowing_add(other.lo);
        let hi = self.hi.wrapping_add(other.hi).wrapping_add(carry as u128);
        Self { lo, hi }
    }

    /// Returns `self - other`, wrapping on underflow.
    pub const fn sub(self, other: Self) -> Self {
        let (lo, borrow) = self.lo.overflowing_sub(other.lo);
        let hi = self.hi.wrapping_sub(other.hi).wrapping_sub(borrow as u128);
        Self { lo, hi }
    }

    /// Returns the full 256-bit product `x * y`.
    pub const fn widening_mul(x: u128, y: u128) -> Self {
        let (lo, hi) = arith128::widening_mul(x, y);
        Self { lo, hi }
    }

    /// Returns `self * m`, wrapping on overflow.
    pub const fn mul_u64(self, m: u64) -> Self {
        let (lo, carry) = arith128::widening_mul(self.lo, m as u128);
        let hi = self.hi.wrapping_mul(m as u128).wrapping_add(carry);
        Self { lo, hi }
    }

    /// Returns `(self / d, self % d)`.
    ///
    /// # Panics
    ///
    /// Panics if `d == 0`.
    pub const fn divrem_u64(self, d: u64) -> (Self, u64) {
        let d = d as u128;
        let limbs = [
            (self.hi >> 64) as u64,
            self.hi as u64,
            (self.lo >> 64) as u64,
            self.lo as u64,
        ];
        let mut q = [0u64; 4];
        let mut r: u128 = 0;
        let mut i = 0;
        while i < limbs.len() {
            // `r < d`, so `cur < d * 2^64` and `cur / d` fits
            // in a u64.
            let cur = (r << 64) | limbs[i] as u128;
            q[i] = (cur / d) as u64;
            r = cur % d;
            i += 1;
        }
        let q = Self {
            hi: ((q[0] as u128) << 64) | q[1] as u128,
            lo: ((q[2] as u128) << 64) | q[3] as u128,
        };
        (q, r as u64)
    }

    /// Returns `(self / d, self % d)`.
    ///
    /// # Panics
    ///
    /// Panics if `d == 0`.
    pub const fn divrem_u128(self, d: u128) -> (Self, u128) {
        if d <= u64::MAX as u128 {
            let (q, r) = self.divrem_u64(d as u64);
            return (q, r as u128);
        }
        if self.hi == 0 {
            return (Self::new(self.lo / d), self.lo % d);
        }

        // Schoolbook division with 64-bit digits (Knuth's
        // Algorithm D). Shift the divisor so that its top bit
        // is set, which keeps each estimated quotient digit
        // within two of the real one.
        let s = d.leading_zeros();
        let d = d << s;
        let limbs = [
            (self.hi >> 64) as u64,
            self.hi as u64,
            (self.lo >> 64) as u64,
            self.lo as u64,
        ];
        let mut q = [0u64; 4];
        // The bits shifted out of the top limb. They are less
        // than `2^64 <= d`.
        let mut r = top_bits(limbs[0], s) as u128;
        let mut i = 0;
        while i < limbs.len() {
            let next = if i + 1 < limbs.len() {
                top_bits(limbs[i + 1], s)
            } else {
                0
            };
            let (digit, rem) = div_step(r, (limbs[i] << s) | next, d);
            q[i] = digit;
            r = rem;
            i += 1;
        }
        let q = Self {
            hi: ((q[0] as u128) << 64) | q[1] as u128,
            lo: ((q[2] as u128) << 64) | q[3] as u128,
        };
        (q, r >> s)
    }
}

/// Returns the `s` most significant bits of `x`.
const fn top_bits(x: u64, s: u32) -> u64 {
    if s == 0 {
        0
    } else {
        x >> (64 - s)
    }
}

/// Divides `r * 2^64 + n` by `d`, returning the quotient digit
/// and the remainder.
///
/// `d` must have its top bit set and `r` must be less than `d`.
const fn div_step(r: u128, n: u64, d: u128) -> (u64, u128) {
    let d1 = d >> 64;
    let mut q = if r >> 64 >= d1 {
        u64::MAX
    } else {
        (r / d1) as u64
    };

    // Compare `q * d` with the dividend as (lo, hi) pairs.
    let (n_lo, n_hi) = ((r << 64) | n as u128, r >> 64);
    let (mut p_lo, mut p_hi) = arith128::widening_mul(d, q as u128);
    while p_hi > n_hi || (p_hi == n_hi && p_lo > n_lo) {
        q -= 1;
        let (lo, borrow) = p_lo.overflowing_sub(d);
        p_lo = lo;
        p_hi -= borrow as u128;
    }
    // The remainder is less than `d`, so the low half holds
    // all of it.
    (q, n_lo.wrapping_sub(p_lo))
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};
    use ruint::aliases::U256;

    use super::*;

    fn to_ruint(x: u256) -> U256 {
        U256::from_limbs([x.lo as u64, (x.lo >> 64) as u64, x.hi as u64, (x.hi >> 64) as u64])
    }

    fn from_ruint(x: U256) -> u256 {
        let [l0, l1, h0, h1] = *x.as_limbs();
        u256::from_parts(
            ((h1 as u128) << 64) | h0 as u128,
            ((l1 as u128) << 64) | l0 as u128,
        )
    }

    fn random() -> u256 {
        let mut rng = thread_rng();
        let hi = match rng.gen_range(0..3) {
            0 => 0,
            1 => rng.gen::<u64>() as u128,
            _ => rng.gen(),
        };
        u256::from_parts(hi, rng.gen())
    }

    #[test]
    fn test_widening_mul() {
        let mut rng = thread_rng();
        for _ in 0..10_000 {
            let x: u128 = rng.gen();
            let y: u128 = rng.gen();
            let want = U256::from(x) * U256::from(y);
            assert_eq!(to_ruint(u256::widening_mul(x, y)), want, "{x} * {y}");
        }
        let max = u256::widening_mul(u128::MAX, u128::MAX);
        assert_eq!(to_ruint(max), U256::from(u128::MAX) * U256::from(u128::MAX));
    }

    #[test]
    fn test_add_sub() {
        for _ in 0..10_000 {
            let x = random();
            let y = random();
            let sum = x.add(y);
            assert_eq!(to_ruint(sum), to_ruint(x).wrapping_add(to_ruint(y)));
            assert_eq!(sum.sub(y), x);
        }
    }

    #[test]
    fn test_mul_u64() {
        let mut rng = thread_rng();
        for _ in 0..10_000 {
            let x = random();
            let m: u64 = rng.gen();
            let want = to_ruint(x).wrapping_mul(U256::from(m));
            assert_eq!(to_ruint(x.mul_u64(m)), want);
        }
    }

    #[test]
    fn test_divrem() {
        let mut rng = thread_rng();
        for _ in 0..10_000 {
            let x = random();
            let d64: u64 = rng.gen_range(1..=u64::MAX);
            let (q, r) = x.divrem_u64(d64);
            assert_eq!(to_ruint(q), to_ruint(x) / U256::from(d64));
            assert_eq!(U256::from(r), to_ruint(x) % U256::from(d64));

            let d128: u128 = match rng.gen_range(0..3) {
                0 => rng.gen_range(1..=u64::MAX as u128),
                1 => rng.gen_range(1..10u128.pow(34)),
                _ => rng.gen_range(1..=u128::MAX),
            };
            let (q, r) = x.divrem_u128(d128);
            assert_eq!(to_ruint(q), to_ruint(x) / U256::from(d128));
            assert_eq!(U256::from(r), to_ruint(x) % U256::from(d128));
            assert_eq!(from_ruint(to_ruint(q)), q);
        }
    }

    #[test]
    fn test_divrem_edges() {
        let divisors = [
            u64::MAX as u128 + 1,
            1 << 127,
            u128::MAX,
            10u128.pow(34) - 1,
            10u128.pow(33),
            (1 << 127) - 1,
        ];
        let dividends = [
            u256::from_parts(u128::MAX, u128::MAX),
            u256::from_parts(1, 0),
            u256::from_parts(u128::MAX >> 1, 0),
            u256::widening_mul(10u128.pow(34) - 1, 10u128.pow(34) - 1),
            u256::from_parts(1 << 64, u64::MAX as u128),
        ];
        for x in dividends {
            for d in divisors {
                let (q, r) = x.divrem_u128(d);
                assert_eq!(to_ruint(q), to_ruint(x) / U256::from(d), "{x:?} / {d}");
                assert_eq!(U256::from(r), to_ruint(x) % U256::from(d), "{x:?} % {d}");
            }
        }
    }

    #[test]
    fn test_digits() {
        let mut x = U256::from(1u8);
        let mut n = 1;
        while let Some(next) = x.checked_mul(U256::from(10u8)) {
            assert_eq!(from_ruint(x).digits(), n, "10^{}", n - 1);
            assert_eq!(from_ruint(x - U256::from(1u8)).digits(), (n - 1).max(1));
            x = next;
            n += 1;
        }
        assert_eq!(from_ruint(U256::MAX).digits(), 78);
        assert_eq!(u256::ZERO.digits(), 1);
    }

    #[test]
    fn test_cmp() {
        let a = u256::from_parts(1, 0);
        let b = u256::new(u128::MAX);
        assert_eq!(a.const_cmp(b), Ordering::Greater);
        assert_eq!(b.const_cmp(a), Ordering::Less);
        assert!(a.const_eq(u256::from_parts(1, 0)));
    }
}
