//! Integer arithmetic on coefficients.
//!
//! Each `arithN` module works on the coefficient word of one
//! format and on its promoted ("wide") integer, which is large
//! enough to hold the product of two coefficients.

pub(crate) mod arith128;
pub(crate) mod arith32;
pub(crate) mod arith64;
pub(crate) mod uint256;

macro_rules! impl_basic {
    ($word:ty) => {
        /// Returns the minimum number of bits required to
        /// represent `x`.
        ///
        /// It returns 0 for `x == 0`.
        pub(crate) const fn bitlen(x: $word) -> u32 {
            <$word>::BITS - x.leading_zeros()
        }

        /// Compares `lhs` and `rhs`.
        pub(crate) const fn const_cmp(lhs: $word, rhs: $word) -> ::core::cmp::Ordering {
            use ::core::cmp::Ordering;
            match lhs.checked_sub(rhs) {
                Some(0) => Ordering::Equal,
                Some(_) => Ordering::Greater,
                None => Ordering::Less,
            }
        }

        /// Orders `(lhs * 10^shift)` and `rhs`.
        pub(crate) const fn const_cmp_shifted(
            lhs: $word,
            rhs: $word,
            shift: u32,
        ) -> ::core::cmp::Ordering {
            use ::core::cmp::Ordering;

            let (lo, hi) = shl(lhs, shift);
            if hi != 0 {
                return Ordering::Greater;
            }
            const_cmp(lo, rhs)
        }

        /// Returns the number of decimal digits in `x`.
        ///
        /// The result will be in `[1, ceil(log10(2^<$word>::BITS))]`.
        pub(crate) const fn digits(mut x: $word) -> u32 {
            // Ensure that `x` is non-zero so that `digits(0) ==
            // 1`.
            //
            // This cannot cause an incorrect result because:
            //
            // - `x|1` sets the lowest bit, so it cannot increase
            //   the bit length for a non-zero `x`.
            // - `x >= p` remains correct because the largest
            //   integer less than `p` is 999...999, which is
            //   odd, meaning `x|1` is a no-op.
            x |= 1;

            let r = ((bitlen(x) + 1) * 1233) / 4096;
            // `r` is in [0, digits(<$word>::MAX)), so it cannot
            // panic.
            let p = pow10(r);
            r + (x >= p) as u32
        }

        /// Returns 10^n.
        pub(crate) const fn pow10(n: u32) -> $word {
            #[allow(
                clippy::indexing_slicing,
                reason = "This is a const initializer, so panicking is okay."
            )]
            const TABLE: [$word; NUM_POW10] = {
                let mut table = [0; NUM_POW10];
                let mut i = 0;
                while i < table.len() {
                    table[i] = <$word>::pow(10, i as u32);
                    i += 1;
                }
                table
            };

            debug_assert!(n <= MAX_SHIFT);
            #[allow(
                clippy::indexing_slicing,
                reason = "Calling code always checks that `n` is in range"
            )]
            TABLE[n as usize]
        }

        /// The maximum shift that does not overflow `$word`.
        pub(crate) const MAX_SHIFT: u32 = (NUM_POW10 - 1) as u32;

        const NUM_POW10: usize = {
            let mut n = 0;
            while (10 as $word).checked_pow(n).is_some() {
                n += 1
            }
            n as usize
        };

        /// Returns `(lo, hi) = x * 10^n`.
        ///
        /// # Panics
        ///
        /// Panics if `n > MAX_SHIFT`.
        pub(crate) const fn shl(x: $word, n: u32) -> ($word, $word) {
            widening_mul(x, pow10(n))
        }

        /// Returns the quotient and remainder `(q, r)` such that
        ///
        /// ```text
        /// q = x / (10^n)
        /// r = x % (10^n)
        /// ```
        pub(crate) const fn shr(x: $word, n: u32) -> ($word, $word) {
            if n == 0 {
                (x, 0)
            } else if n > MAX_SHIFT {
                // x / y for y > x = 0
                (0, x)
            } else {
                let p = pow10(n);
                (x / p, x % p)
            }
        }

    };
}
pub(crate) use impl_basic;

/// Implements the promoted-integer helpers on top of a native
/// wide integer.
macro_rules! impl_wide {
    ($word:ty, $wide:ty, $digits:path) => {
        /// The promoted integer used for intermediate results.
        pub(crate) type Wide = $wide;

        pub(crate) const WIDE_ZERO: Wide = 0;

        /// The number of decimal digits that always fit in
        /// [`Wide`].
        pub(crate) const WIDE_DIGITS: u32 = <$wide>::MAX.ilog10();

        pub(crate) const fn wide_from(x: $word) -> Wide {
            x as Wide
        }

        /// Truncates `x` to a coefficient.
        pub(crate) const fn wide_to(x: Wide) -> $word {
            debug_assert!(x <= <$word>::MAX as Wide);
            x as $word
        }

        /// Returns the full product `x * y`.
        pub(crate) const fn wide_mul(x: $word, y: $word) -> Wide {
            (x as Wide) * (y as Wide)
        }

        pub(crate) const fn wide_mul_small(x: Wide, m: u64) -> Wide {
            x * (m as Wide)
        }

        pub(crate) const fn wide_add(x: Wide, y: Wide) -> Wide {
            x + y
        }

        pub(crate) const fn wide_sub(x: Wide, y: Wide) -> Wide {
            x - y
        }

        pub(crate) const fn wide_cmp(x: Wide, y: Wide) -> ::core::cmp::Ordering {
            use ::core::cmp::Ordering;
            if x < y {
                Ordering::Less
            } else if x > y {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }

        pub(crate) const fn wide_is_zero(x: Wide) -> bool {
            x == 0
        }

        pub(crate) const fn wide_digits(x: Wide) -> u32 {
            $digits(x)
        }

        pub(crate) const fn wide_divrem_small(x: Wide, d: u64) -> (Wide, u64) {
            let d = d as Wide;
            (x / d, (x % d) as u64)
        }

        pub(crate) const fn wide_divrem(x: Wide, d: $word) -> (Wide, $word) {
            let d = d as Wide;
            (x / d, (x % d) as $word)
        }

        $crate::bid::arith::impl_wide_shift!();

    };
}
pub(crate) use impl_wide;

/// Implements decimal shifts of the promoted integer in terms of
/// `wide_mul_small` and `wide_divrem_small`.
macro_rules! impl_wide_shift {
    () => {
        /// Returns `x * 10^n`.
        ///
        /// The caller ensures that the product fits in
        /// [`Wide`].
        pub(crate) const fn wide_shl(mut x: Wide, mut n: u32) -> Wide {
            while n > 0 {
                let k = if n > 19 { 19 } else { n };
                x = wide_mul_small(x, $crate::bid::arith::arith64::pow10(k));
                n -= k;
            }
            x
        }

        /// Divides `x` by `10^n` for `n >= 1`.
        ///
        /// Returns the quotient, the most significant discarded
        /// digit, and whether any other discarded digit was
        /// non-zero.
        pub(crate) const fn wide_shr_round(x: Wide, n: u32) -> (Wide, u32, bool) {
            debug_assert!(n >= 1);

            if n > wide_digits(x) {
                return (WIDE_ZERO, 0, !wide_is_zero(x));
            }
            let mut q = x;
            let mut sticky = false;
            let mut m = n - 1;
            while m > 0 {
                let k = if m > 19 { 19 } else { m };
                let (t, r) = wide_divrem_small(q, $crate::bid::arith::arith64::pow10(k));
                q = t;
                sticky |= r != 0;
                m -= k;
            }
            let (q, d) = wide_divrem_small(q, 10);
            (q, d as u32, sticky)
        }
    };
}
pub(crate) use impl_wide_shift;
