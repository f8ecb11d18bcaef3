macro_rules! impl_dec {
    (
        name = $name:ident,
        ucoeff = $ucoeff:ty,
        icoeff = $icoeff:ty,
        biased_exp = $biased:ty,
        unbiased_exp = $unbiased:ty,
        arith = $arith:ident,
        dpd = $dpd:ty $(,)?
    ) => {
        $crate::bid::base::impl_dec_internal!($name, $ucoeff, $biased, $arith);
        $crate::bid::base::impl_dec_round!($name, $ucoeff, $arith);
        $crate::bid::base::impl_dec_consts!($name, $ucoeff, $unbiased, $arith);
        $crate::bid::base::impl_dec_to_from_repr!($name, $ucoeff, $icoeff, $unbiased, $arith, $dpd);
        $crate::bid::base::impl_dec_arith!($name, $ucoeff, $arith);
        $crate::bid::base::impl_dec_cmp!($name, $ucoeff, $arith);
        $crate::bid::base::impl_dec_misc!($name, $ucoeff, $unbiased, $arith);
        $crate::bid::base::impl_dec_ctx!($name);
        $crate::bid::base::impl_dec_impls!($name, $ucoeff);
        $crate::bid::dtoa::impl_dtoa!($name);
        $crate::bid::atod::impl_atod!($name, $ucoeff, $arith);
        $crate::macros::impl_ops!($name);
    };
}
pub(crate) use impl_dec;

macro_rules! impl_dec_internal {
    ($name:ident, $ucoeff:ty, $biased:ty, $arith:ident $(,)?) => {
        // Internal stuff.
        impl $name {
            /// The storage width in bits.
            pub(crate) const K: u32 = <$ucoeff>::BITS;
            /// The width of the exponent continuation field in
            /// bits.
            pub(crate) const W: u32 = Self::K / 16 + 4;
            /// The width of the trailing significand in bits.
            pub(crate) const T: u32 = 15 * (Self::K / 16) - 10;
            /// The number of digits of precision.
            pub(crate) const P: u32 = 9 * (Self::K / 32) - 2;

            /// The storage width in bytes.
            pub(crate) const BYTES: usize = (Self::K / 8) as usize;

            /// The maximum allowed adjusted exponent.
            pub(crate) const EMAX: i32 = 3 * (1 << (Self::W - 1));

            /// The minimum allowed adjusted exponent for
            /// a normal value.
            pub(crate) const EMIN: i32 = 1 - Self::EMAX;

            /// The minimum unbiased exponent for a subnormal
            /// value.
            pub(crate) const ETINY: i32 = Self::EMIN - (Self::P as i32 - 1);

            /// The maximum unbiased exponent.
            ///
            /// This is the adjusted exponent of a full-length
            /// coefficient at [`EMAX`][Self::EMAX].
            pub(crate) const QMAX: i32 = Self::EMAX - (Self::P as i32 - 1);

            /// The bias added to the encoded exponent in order
            /// to convert it to the "actual" exponent.
            pub(crate) const BIAS: i32 = Self::EMAX + Self::P as i32 - 2;

            /// The maxmimum value of the biased encoded
            /// exponent.
            pub(crate) const LIMIT: $biased = (3 * (1 << Self::W)) - 1;

            /// The shift needed to set the sign bit.
            pub(crate) const SIGN_SHIFT: u32 = Self::K - 1;
            /// Masks just the sign bit.
            pub(crate) const SIGN_MASK: $ucoeff = 1 << Self::SIGN_SHIFT;

            // Top N bits of the combination field.
            //
            // - Top 2 set: form two
            // - Top 4 set: inf
            // - Top 5 set: qnan
            // - Top 6 set: snan
            pub(crate) const COMB_TOP2: $ucoeff = 0x3 << (Self::SIGN_SHIFT - 2);
            pub(crate) const COMB_TOP4: $ucoeff = 0xf << (Self::SIGN_SHIFT - 4);
            pub(crate) const COMB_TOP5: $ucoeff = 0x1f << (Self::SIGN_SHIFT - 5);
            pub(crate) const COMB_TOP6: $ucoeff = 0x3f << (Self::SIGN_SHIFT - 6);

            /// The number of bits in the exponent.
            const EXP_BITS: u32 = Self::W + 2;
            /// Masks only the used bits in an exponent.
            ///
            /// NB: This does *not* mask bits in the combination
            /// field.
            const EXP_MASK: $ucoeff = (1 << Self::EXP_BITS) - 1;

            /// The shift to set the exponent for a form one
            /// number.
            const FORM1_EXP_SHIFT: u32 = Self::SIGN_SHIFT - Self::EXP_BITS;
            /// The shift to set the exponent for a form two
            /// number.
            ///
            /// Form two exponents sit two bits lower because
            /// the steering bits `11` come first.
            const FORM2_EXP_SHIFT: u32 = Self::FORM1_EXP_SHIFT - 2;

            /// The number of bits in the form one coefficient.
            const FORM1_COEFF_BITS: u32 = 3 + Self::T;
            /// Gathers the bits in the form one coefficient.
            const FORM1_COEFF_MASK: $ucoeff = (1 << Self::FORM1_COEFF_BITS) - 1;

            /// Gathers the bits in the form two coefficient.
            const FORM2_COEFF_MASK: $ucoeff = (1 << (1 + Self::T)) - 1;
            /// The implicit bits in the form two coefficient.
            const FORM2_IMPLICIT_COEFF_BITS: $ucoeff = 0x8 << Self::T;

            /// Masks a NaN's payload.
            pub(crate) const PAYLOAD_MASK: $ucoeff = (1 << Self::T) - 1;
            /// The maximum allowed NaN payload.
            pub(crate) const PAYLOAD_MAX: $ucoeff = $arith::pow10(Self::P - 1) - 1;

            /// A mask for the bits (all except [G6:Gw+4]) that
            /// are allowed to be set for a canonical NaN.
            const CANONICAL_NAN: $ucoeff = Self::SIGN_MASK | Self::COMB_TOP6 | Self::PAYLOAD_MASK;

            /// A mask for the bits (all except [G5:Gw+4] as well
            /// as the trailing significant field) that are
            /// allowed to be set for a canonical infinity.
            const CANONICAL_INF: $ucoeff = Self::SIGN_MASK | Self::COMB_TOP4;

            pub(crate) const fn signbit(self) -> bool {
                (self.0 & Self::SIGN_MASK) != 0
            }

            /// Is this form one?
            const fn is_form1(self) -> bool {
                self.0 & Self::COMB_TOP2 != Self::COMB_TOP2
            }

            /// Is this form two?
            const fn is_form2(self) -> bool {
                !self.is_form1()
            }

            /// Reports whether the number is infinite or NaN.
            pub(crate) const fn is_special(self) -> bool {
                // When the first (top) four bits of the
                // combination field are set, the number is
                // either an infinity or a NaN.
                self.0 & Self::COMB_TOP4 == Self::COMB_TOP4
            }

            /// Reports whether the number is finite or infinite.
            const fn is_numeric(self) -> bool {
                !self.is_nan()
            }

            /// Returns the top six bits in the combination
            /// field.
            ///
            /// These bits have the following ordering:
            ///
            /// ```text
            /// sNaN > qNaN > inf > finite
            /// ```
            const fn special_bits(self) -> u8 {
                ((self.0 & Self::COMB_TOP6) >> (Self::SIGN_SHIFT - 6)) as u8
            }

            /// Returns the top six bits in the combination
            /// field with the following ordering:
            ///
            /// ```text
            /// qNaN > sNaN > inf > finite
            /// ```
            ///
            /// (The same ordering required by `total_cmp`.)
            const fn special_ord(self) -> u8 {
                //   sNaN = 0b00111111
                //   qNaN = 0b00111110
                //    inf = 0b00111100
                // finite = 0b00xxxxyy
                //
                // (Where `xxxx` is anything other than `1111`
                // and `yy` is anything.)
                //
                // Flipping the LSB reverses sNaN and qNaN
                // without violating the ordering.
                self.special_bits() ^ 1
            }

            /// Returns the biased exponent.
            ///
            /// If the number is finite, the result is in [0,
            /// [`LIMIT`][Self::LIMIT]].
            const fn biased_exp(self) -> $biased {
                // The exponent only has meaning for finite
                // numbers.
                debug_assert!(self.is_finite());

                let exp = if self.is_form1() {
                    // exp = G[0:w+1]
                    (self.0 >> Self::FORM1_EXP_SHIFT) & Self::EXP_MASK
                } else {
                    // exp = G[2:w+3]
                    (self.0 >> Self::FORM2_EXP_SHIFT) & Self::EXP_MASK
                };
                let exp = exp as $biased;
                debug_assert!(exp <= Self::LIMIT);
                exp
            }

            /// Returns the unbiased exponent.
            ///
            /// If the number is finite, the result is in
            /// [[`ETINY`][Self::ETINY], [`QMAX`][Self::QMAX]].
            pub(crate) const fn unbiased_exp(self) -> i32 {
                self.biased_exp() as i32 - Self::BIAS
            }

            /// Returns the adjusted exponent.
            ///
            /// This is `exp + digits - 1`.
            const fn adjusted_exp(self) -> i32 {
                self.unbiased_exp() + self.digits() as i32 - 1
            }

            /// Returns the full coefficient.
            ///
            /// NB: This may be out of range.
            const fn raw_coeff(self) -> $ucoeff {
                // The coefficient only has meaning for finite
                // numbers.
                debug_assert!(self.is_finite());

                if self.is_form1() {
                    // G[w+2:w+4] || T
                    self.0 & Self::FORM1_COEFF_MASK
                } else {
                    // 100 || G[w+4] || T
                    Self::FORM2_IMPLICIT_COEFF_BITS | (self.0 & Self::FORM2_COEFF_MASK)
                }
            }

            /// Returns the full coefficient.
            ///
            /// Non-canonical coefficients are read as zero.
            pub(crate) const fn coeff(self) -> $ucoeff {
                let coeff = self.raw_coeff();

                // See 3.2(c)(2).
                if coeff > Self::MAX_COEFF {
                    0
                } else {
                    coeff
                }
            }

            /// Returns a NaN's diagnostic information.
            ///
            /// Non-canonical payloads are read as zero.
            pub(crate) const fn payload(self) -> $ucoeff {
                // The payload only has meaning for NaNs.
                debug_assert!(self.is_nan());

                let payload = self.0 & Self::PAYLOAD_MASK;
                if payload > Self::PAYLOAD_MAX {
                    0
                } else {
                    payload
                }
            }

            /// Creates a canonical finite number from the sign,
            /// unbiased exponent, and coefficient.
            ///
            /// The result is exact and unrounded.
            pub(crate) const fn pack(sign: bool, exp: i32, coeff: $ucoeff) -> Self {
                debug_assert!(coeff <= Self::MAX_COEFF);
                debug_assert!(exp >= Self::ETINY);
                debug_assert!(exp <= Self::QMAX);

                let biased = (exp + Self::BIAS) as $ucoeff;
                let mut bits = (sign as $ucoeff) << Self::SIGN_SHIFT;
                if coeff >> Self::FORM1_COEFF_BITS == 0 {
                    // s 00eeeeee   (0)ttt tttttttttt tttttttttt
                    // s 01eeeeee   (0)ttt tttttttttt tttttttttt
                    // s 10eeeeee   (0)ttt tttttttttt tttttttttt
                    bits |= biased << Self::FORM1_EXP_SHIFT;
                    bits |= coeff;
                } else {
                    // s 1100eeeeee (100)t tttttttttt tttttttttt
                    // s 1101eeeeee (100)t tttttttttt tttttttttt
                    // s 1110eeeeee (100)t tttttttttt tttttttttt
                    bits |= Self::COMB_TOP2;
                    bits |= biased << Self::FORM2_EXP_SHIFT;
                    bits |= coeff & Self::FORM2_COEFF_MASK;
                }
                Self(bits)
            }

            /// Creates a canonical infinity.
            pub(crate) const fn inf(sign: bool) -> Self {
                Self(((sign as $ucoeff) << Self::SIGN_SHIFT) | Self::COMB_TOP4)
            }

            /// Creates a canonical quiet NaN.
            pub(crate) const fn nan(sign: bool, payload: $ucoeff) -> Self {
                debug_assert!(payload <= Self::PAYLOAD_MAX);

                Self(((sign as $ucoeff) << Self::SIGN_SHIFT) | Self::COMB_TOP5 | payload)
            }

            /// Creates a canonical signaling NaN.
            pub(crate) const fn snan(sign: bool, payload: $ucoeff) -> Self {
                debug_assert!(payload <= Self::PAYLOAD_MAX);

                Self(((sign as $ucoeff) << Self::SIGN_SHIFT) | Self::COMB_TOP6 | payload)
            }

            /// Creates a canonical zero.
            const fn zero() -> Self {
                Self::pack(false, 0, 0)
            }

            /// The result of an invalid operation.
            const fn invalid() -> (Self, $crate::ctx::Condition) {
                (Self::nan(false, 0), $crate::ctx::Condition::INVALID_OPERATION)
            }

            /// Creates a NaN from either `lhs` or `rhs` per
            /// [Arithmetic operation rules][rules].
            ///
            /// One of the two arguments *must* be NaN. The
            /// result is always quiet and raises an invalid
            /// operation if either argument is signaling.
            ///
            /// [rules]: https://speleotrove.com/decimal/daops.html
            pub(crate) const fn select_nan(lhs: Self, rhs: Self) -> (Self, $crate::ctx::Condition) {
                use $crate::ctx::Condition;

                debug_assert!(lhs.is_nan() || rhs.is_nan());

                let nan = if lhs.is_snan() {
                    lhs
                } else if rhs.is_snan() {
                    rhs
                } else if lhs.is_nan() {
                    lhs
                } else {
                    rhs
                };
                let flags = if lhs.is_snan() || rhs.is_snan() {
                    Condition::INVALID_OPERATION
                } else {
                    Condition::empty()
                };
                (Self::nan(nan.signbit(), nan.payload()), flags)
            }
        }

        $crate::util::const_assert!($name::LIMIT as i32 == $name::BIAS + $name::QMAX);
        $crate::util::const_assert!($name::ETINY + $name::BIAS == 0);
        $crate::util::const_assert!($name::MAX_COEFF < 1 << ($name::FORM1_COEFF_BITS + 1));
        $crate::util::const_assert!(2 * $name::P + 2 <= $arith::WIDE_DIGITS);
    };
}
pub(crate) use impl_dec_internal;

macro_rules! impl_dec_round {
    ($name:ident, $ucoeff:ty, $arith:ident $(,)?) => {
        // Rounding.
        impl $name {
            /// Removes the `k` least significant digits from
            /// `coeff` and rounds the result.
            ///
            /// `sticky` reports whether any digit below `coeff`
            /// was already discarded.
            ///
            /// It returns the rounded coefficient, whether the
            /// coefficient carried into `10^P`, and whether the
            /// result is inexact. The coefficient left over
            /// after removing the digits must have at most `P`
            /// digits.
            pub(crate) const fn round_digits(
                coeff: $arith::Wide,
                k: u32,
                sign: bool,
                sticky: bool,
                mode: $crate::ctx::RoundingMode,
            ) -> ($ucoeff, bool, bool) {
                debug_assert!(k >= 1);

                let (q, digit, rest) = $arith::wide_shr_round(coeff, k);
                let sticky = sticky || rest;
                let mut c = $arith::wide_to(q);
                if mode.should_increment(digit, sticky, c & 1 == 1, sign) {
                    c += 1;
                }
                (c, c > Self::MAX_COEFF, digit != 0 || sticky)
            }

            /// Rounds `(-1)^sign * coeff * 10^exp` to the
            /// format.
            ///
            /// `sticky` reports whether the exact result has
            /// non-zero digits below `coeff`. In that case
            /// `coeff` must have more than `P` digits.
            pub(crate) const fn finalize(
                sign: bool,
                exp: i32,
                coeff: $arith::Wide,
                sticky: bool,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use $crate::ctx::Condition;

                if $arith::wide_is_zero(coeff) && !sticky {
                    return Self::zero_clamped(sign, exp);
                }

                let digits = $arith::wide_digits(coeff) as i32;
                let drop = $crate::bid::util::max_i32(digits - Self::P as i32, Self::ETINY - exp);
                if drop <= 0 {
                    debug_assert!(!sticky);
                    let coeff = $arith::wide_to(coeff);
                    return Self::pack_checked(sign, exp, coeff, Condition::empty(), mode);
                }

                let (mut coeff, carry, inexact) =
                    Self::round_digits(coeff, drop as u32, sign, sticky, mode);
                let mut exp = exp + drop;
                if carry {
                    // We went from 999... to 1000..., so chop
                    // off a trailing zero.
                    coeff /= 10;
                    exp += 1;
                }
                let flags = if inexact {
                    Condition::ROUNDED.union(Condition::INEXACT)
                } else {
                    Condition::ROUNDED
                };
                Self::pack_checked(sign, exp, coeff, flags, mode)
            }

            /// Encodes a coefficient with at most `P` digits,
            /// handling overflow, underflow, and clamping.
            ///
            /// `exp` must be at least [`ETINY`][Self::ETINY].
            pub(crate) const fn pack_checked(
                sign: bool,
                exp: i32,
                coeff: $ucoeff,
                flags: $crate::ctx::Condition,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use $crate::ctx::Condition;

                debug_assert!(coeff <= Self::MAX_COEFF);
                debug_assert!(exp >= Self::ETINY);

                let mut flags = flags;
                if coeff == 0 {
                    if flags.contains(Condition::INEXACT) {
                        flags = flags.union(Condition::UNDERFLOW).union(Condition::SUBNORMAL);
                    }
                    let (zero, clamped) = Self::zero_clamped(sign, exp);
                    return (zero, flags.union(clamped));
                }

                let adj = exp + $arith::digits(coeff) as i32 - 1;
                if adj > Self::EMAX {
                    let flags = flags
                        .union(Condition::OVERFLOW)
                        .union(Condition::INEXACT)
                        .union(Condition::ROUNDED);
                    return (Self::overflow_value(sign, mode), flags);
                }
                if adj < Self::EMIN {
                    flags = flags.union(Condition::SUBNORMAL);
                    if flags.contains(Condition::INEXACT) {
                        flags = flags.union(Condition::UNDERFLOW);
                    }
                }
                if exp > Self::QMAX {
                    // The coefficient has room for the extra
                    // zeros because `adj <= EMAX`.
                    let shift = (exp - Self::QMAX) as u32;
                    let coeff = coeff * $arith::pow10(shift);
                    return (Self::pack(sign, Self::QMAX, coeff), flags.union(Condition::CLAMPED));
                }
                (Self::pack(sign, exp, coeff), flags)
            }

            /// Creates a zero, clamping `exp` to
            /// [[`ETINY`][Self::ETINY], [`QMAX`][Self::QMAX]].
            const fn zero_clamped(sign: bool, exp: i32) -> (Self, $crate::ctx::Condition) {
                use $crate::ctx::Condition;

                if exp < Self::ETINY {
                    (Self::pack(sign, Self::ETINY, 0), Condition::CLAMPED)
                } else if exp > Self::QMAX {
                    (Self::pack(sign, Self::QMAX, 0), Condition::CLAMPED)
                } else {
                    (Self::pack(sign, exp, 0), Condition::empty())
                }
            }

            /// Returns the result of an overflow.
            ///
            /// Rounding toward the infinity on the result's
            /// side gives that infinity, rounding away from it
            /// gives the largest finite magnitude.
            const fn overflow_value(sign: bool, mode: $crate::ctx::RoundingMode) -> Self {
                use $crate::ctx::RoundingMode;

                let to_inf = match mode {
                    RoundingMode::ToNearestEven | RoundingMode::ToNearestAway => true,
                    RoundingMode::ToZero => false,
                    RoundingMode::ToNegativeInf => sign,
                    RoundingMode::ToPositiveInf => !sign,
                };
                if to_inf {
                    Self::inf(sign)
                } else {
                    Self::pack(sign, Self::QMAX, Self::MAX_COEFF)
                }
            }

            /// Creates a number from an integer coefficient and
            /// an exponent of zero.
            pub(crate) const fn from_u128_with(
                sign: bool,
                coeff: u128,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use $crate::{bid::arith::arith128, ctx::Condition};

                let digits = arith128::digits(coeff);
                if digits <= Self::P {
                    // Fits, so the cast is lossless.
                    return (Self::pack(sign, 0, coeff as $ucoeff), Condition::empty());
                }

                let k = digits - Self::P;
                let (q, r) = arith128::shr(coeff, k);
                let (digit, rest) = arith128::shr(r, k - 1);
                let sticky = rest != 0;
                let digit = digit as u32;

                // `q` has exactly `P` digits.
                let mut c = q as $ucoeff;
                let mut exp = k as i32;
                if mode.should_increment(digit, sticky, c & 1 == 1, sign) {
                    c += 1;
                    if c > Self::MAX_COEFF {
                        c /= 10;
                        exp += 1;
                    }
                }
                let flags = if digit != 0 || sticky {
                    Condition::ROUNDED.union(Condition::INEXACT)
                } else {
                    Condition::ROUNDED
                };
                Self::pack_checked(sign, exp, c, flags, mode)
            }
        }
    };
}
pub(crate) use impl_dec_round;

macro_rules! impl_dec_consts {
    ($name:ident, $ucoeff:ty, $unbiased:ty, $arith:ident $(,)?) => {
        impl $name {
            /// The largest value that can be represented by this
            /// type.
            pub const MAX: Self = Self::pack(false, Self::QMAX, Self::MAX_COEFF);

            /// The smallest value that can be represented by
            /// this type.
            pub const MIN: Self = Self::pack(true, Self::QMAX, Self::MAX_COEFF);

            /// The smallest positive normal value that can be
            /// represented by this type.
            pub const MIN_POSITIVE: Self = Self::pack(false, Self::EMIN, 1);

            /// The largest allowed coefficient.
            pub const MAX_COEFF: $ucoeff = $arith::pow10(Self::P) - 1;

            /// The maximum allowed adjusted exponent.
            pub const MAX_EXP: $unbiased = Self::EMAX as $unbiased;

            /// The smallest allowed adjusted exponent for
            /// a normal value.
            pub const MIN_EXP: $unbiased = Self::EMIN as $unbiased;

            /// The number of base 10 significant digits.
            pub const DIGITS: u32 = Self::P;

            /// Zero (0).
            pub const ZERO: Self = Self::zero();

            /// One (1).
            pub const ONE: Self = Self::pack(false, 0, 1);

            /// Not a Number (NaN).
            ///
            /// # Note
            ///
            /// Do not use this constant to determine whether
            /// a number is NaN. Use [`is_nan`][Self::is_nan]
            /// instead.
            pub const NAN: Self = Self::nan(false, 0);

            /// Infinity (∞).
            ///
            /// # Note
            ///
            /// Do not use this constant to determine whether
            /// a number is infinity. Use
            /// [`is_infinite`][Self::is_infinite] instead.
            pub const INFINITY: Self = Self::inf(false);

            /// Negative infinity (−∞).
            ///
            /// # Note
            ///
            /// Do not use this constant to determine whether
            /// a number is infinity. Use
            /// [`is_infinite`][Self::is_infinite] instead.
            pub const NEG_INFINITY: Self = Self::inf(true);
        }
    };
}
pub(crate) use impl_dec_consts;

macro_rules! impl_dec_to_from_repr {
    (
        $name:ident,
        $ucoeff:ty,
        $icoeff:ty,
        $unbiased:ty,
        $arith:ident,
        $dpd:ty $(,)?
    ) => {
        // To/from repr.
        impl $name {
            /// Creates a number from its coefficient and
            /// exponent.
            ///
            /// The result is rounded with
            /// [`ROUNDING_CONST`][crate::ROUNDING_CONST] if it
            /// cannot be represented exactly.
            pub const fn new(coeff: $icoeff, exp: $unbiased) -> Self {
                Self::from_parts(coeff < 0, coeff.unsigned_abs(), exp)
            }

            /// Creates a number from its sign, coefficient, and
            /// exponent.
            ///
            /// The result is rounded with
            /// [`ROUNDING_CONST`][crate::ROUNDING_CONST] if it
            /// cannot be represented exactly.
            pub const fn from_parts(sign: bool, coeff: $ucoeff, exp: $unbiased) -> Self {
                let coeff = $arith::wide_from(coeff);
                Self::finalize(sign, exp as i32, coeff, false, $crate::ctx::ROUNDING_CONST).0
            }

            /// Decomposes the number into its sign, coefficient,
            /// and exponent.
            ///
            /// It returns `None` if the number is infinite or
            /// NaN.
            pub const fn to_parts(self) -> Option<(bool, $ucoeff, $unbiased)> {
                if self.is_finite() {
                    Some((self.signbit(), self.coeff(), self.unbiased_exp() as $unbiased))
                } else {
                    None
                }
            }

            /// Creates a number from its raw bits.
            pub const fn from_bits(bits: $ucoeff) -> Self {
                Self(bits)
            }

            /// Raw transmutation to the number's raw bit
            /// representation.
            pub const fn to_bits(self) -> $ucoeff {
                self.0
            }

            /// Creates a number from a little-endian byte array.
            pub const fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Self {
                Self(<$ucoeff>::from_le_bytes(bytes))
            }

            /// Creates a number from a big-endian byte array.
            pub const fn from_be_bytes(bytes: [u8; Self::BYTES]) -> Self {
                Self(<$ucoeff>::from_be_bytes(bytes))
            }

            /// Creates a number from a native-endian byte array.
            pub const fn from_ne_bytes(bytes: [u8; Self::BYTES]) -> Self {
                Self(<$ucoeff>::from_ne_bytes(bytes))
            }

            /// Returns the memory representation of the number
            /// as a little-endian byte array.
            pub const fn to_le_bytes(self) -> [u8; Self::BYTES] {
                self.0.to_le_bytes()
            }

            /// Returns the memory representation of the number
            /// as a big-endian byte array.
            pub const fn to_be_bytes(self) -> [u8; Self::BYTES] {
                self.0.to_be_bytes()
            }

            /// Returns the memory representation of the number
            /// as a native-endian byte array.
            pub const fn to_ne_bytes(self) -> [u8; Self::BYTES] {
                self.0.to_ne_bytes()
            }

            /// Converts the number to a densely packed decimal.
            pub const fn to_dpd(self) -> $dpd {
                <$dpd>::from_bid(self)
            }

            /// Converts a densely packed decimal to a number.
            pub const fn from_dpd(dpd: $dpd) -> Self {
                dpd.to_bid()
            }

            /// Creates a number from `coeff` and an exponent of
            /// zero.
            ///
            /// The result is rounded with
            /// [`ROUNDING_CONST`][crate::ROUNDING_CONST] if
            /// `coeff` has more than [`DIGITS`][Self::DIGITS]
            /// digits.
            pub const fn from_i32(coeff: i32) -> Self {
                Self::from_i128(coeff as i128)
            }

            /// Creates a number from `coeff` and an exponent of
            /// zero.
            ///
            /// The result is rounded with
            /// [`ROUNDING_CONST`][crate::ROUNDING_CONST] if
            /// `coeff` has more than [`DIGITS`][Self::DIGITS]
            /// digits.
            pub const fn from_u32(coeff: u32) -> Self {
                Self::from_u128(coeff as u128)
            }

            /// Creates a number from `coeff` and an exponent of
            /// zero.
            ///
            /// The result is rounded with
            /// [`ROUNDING_CONST`][crate::ROUNDING_CONST] if
            /// `coeff` has more than [`DIGITS`][Self::DIGITS]
            /// digits.
            pub const fn from_i64(coeff: i64) -> Self {
                Self::from_i128(coeff as i128)
            }

            /// Creates a number from `coeff` and an exponent of
            /// zero.
            ///
            /// The result is rounded with
            /// [`ROUNDING_CONST`][crate::ROUNDING_CONST] if
            /// `coeff` has more than [`DIGITS`][Self::DIGITS]
            /// digits.
            pub const fn from_u64(coeff: u64) -> Self {
                Self::from_u128(coeff as u128)
            }

            /// Creates a number from `coeff` and an exponent of
            /// zero.
            ///
            /// The result is rounded with
            /// [`ROUNDING_CONST`][crate::ROUNDING_CONST] if
            /// `coeff` has more than [`DIGITS`][Self::DIGITS]
            /// digits.
            pub const fn from_i128(coeff: i128) -> Self {
                Self::from_u128_with(coeff < 0, coeff.unsigned_abs(), $crate::ctx::ROUNDING_CONST).0
            }

            /// Creates a number from `coeff` and an exponent of
            /// zero.
            ///
            /// The result is rounded with
            /// [`ROUNDING_CONST`][crate::ROUNDING_CONST] if
            /// `coeff` has more than [`DIGITS`][Self::DIGITS]
            /// digits.
            pub const fn from_u128(coeff: u128) -> Self {
                Self::from_u128_with(false, coeff, $crate::ctx::ROUNDING_CONST).0
            }

            /// Returns the magnitude of the number truncated
            /// toward zero, or `None` if it does not fit in
            /// a `u128`.
            const fn trunc_u128(self) -> Option<u128> {
                use $crate::bid::arith::arith128;

                debug_assert!(self.is_finite());

                let coeff = self.coeff() as u128;
                let exp = self.unbiased_exp();
                if coeff == 0 {
                    Some(0)
                } else if exp >= 0 {
                    if exp as u32 > arith128::MAX_SHIFT {
                        return None;
                    }
                    coeff.checked_mul(arith128::pow10(exp as u32))
                } else {
                    Some(arith128::shr(coeff, exp.unsigned_abs()).0)
                }
            }

            /// Converts the number to an `i128`, truncating any
            /// fractional part.
            ///
            /// Out of range values saturate. NaN converts to
            /// `i128::MAX`.
            pub const fn to_i128(self) -> i128 {
                if self.is_nan() {
                    return i128::MAX;
                }
                let sign = self.signbit();
                let mag = if self.is_infinite() {
                    None
                } else {
                    self.trunc_u128()
                };
                match mag {
                    Some(mag) if !sign && mag <= i128::MAX as u128 => mag as i128,
                    // `i128::MIN.unsigned_abs()` is one larger
                    // than `i128::MAX`.
                    Some(mag) if sign && mag <= i128::MIN.unsigned_abs() => {
                        (mag as i128).wrapping_neg()
                    }
                    _ if sign => i128::MIN,
                    _ => i128::MAX,
                }
            }

            /// Converts the number to an `i64`, truncating any
            /// fractional part.
            ///
            /// Out of range values saturate. NaN converts to
            /// `i64::MAX`.
            pub const fn to_i64(self) -> i64 {
                let v = self.to_i128();
                if v > i64::MAX as i128 {
                    i64::MAX
                } else if v < i64::MIN as i128 {
                    i64::MIN
                } else {
                    v as i64
                }
            }

            /// Converts the number to an `i32`, truncating any
            /// fractional part.
            ///
            /// Out of range values saturate. NaN converts to
            /// `i32::MAX`.
            pub const fn to_i32(self) -> i32 {
                let v = self.to_i128();
                if v > i32::MAX as i128 {
                    i32::MAX
                } else if v < i32::MIN as i128 {
                    i32::MIN
                } else {
                    v as i32
                }
            }

            /// Converts the number to a `u128`, truncating any
            /// fractional part.
            ///
            /// Out of range values saturate. NaN converts to
            /// `u128::MAX`.
            pub const fn to_u128(self) -> u128 {
                if self.is_nan() {
                    return u128::MAX;
                }
                if self.signbit() {
                    return 0;
                }
                if self.is_infinite() {
                    return u128::MAX;
                }
                match self.trunc_u128() {
                    Some(v) => v,
                    None => u128::MAX,
                }
            }

            /// Converts the number to a `u64`, truncating any
            /// fractional part.
            ///
            /// Out of range values saturate. NaN converts to
            /// `u64::MAX`.
            pub const fn to_u64(self) -> u64 {
                let v = self.to_u128();
                if v > u64::MAX as u128 {
                    u64::MAX
                } else {
                    v as u64
                }
            }

            /// Converts the number to a `u32`, truncating any
            /// fractional part.
            ///
            /// Out of range values saturate. NaN converts to
            /// `u32::MAX`.
            pub const fn to_u32(self) -> u32 {
                let v = self.to_u128();
                if v > u32::MAX as u128 {
                    u32::MAX
                } else {
                    v as u32
                }
            }

            /// Converts an `f64` to a number.
            ///
            /// The conversion starts from the shortest decimal
            /// string that round trips to `f` and rounds it with
            /// the process-wide rounding mode.
            pub fn from_f64(f: f64) -> Self {
                Self::from_f64_with(f, $crate::ctx::rounding_mode()).0
            }

            /// Converts an `f32` to a number.
            ///
            /// See [`from_f64`][Self::from_f64].
            pub fn from_f32(f: f32) -> Self {
                Self::from_f32_with(f, $crate::ctx::rounding_mode()).0
            }

            pub(crate) fn from_f64_with(
                f: f64,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use ::core::fmt::Write;

                if f.is_nan() {
                    return (Self::nan(f.is_sign_negative(), 0), $crate::ctx::Condition::empty());
                }
                if f.is_infinite() {
                    return (Self::inf(f.is_sign_negative()), $crate::ctx::Condition::empty());
                }
                let mut buf = $crate::util::Ascii::<32>::new();
                // `{:e}` is the shortest round trip form, which
                // is at most "-d.ddddddddddddddddde-ddd".
                match write!(buf, "{f:e}") {
                    Ok(()) => Self::from_shortest(buf.as_str(), mode),
                    Err(_) => (Self::NAN, $crate::ctx::Condition::CONVERSION_SYNTAX),
                }
            }

            pub(crate) fn from_f32_with(
                f: f32,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use ::core::fmt::Write;

                if f.is_nan() {
                    return (Self::nan(f.is_sign_negative(), 0), $crate::ctx::Condition::empty());
                }
                if f.is_infinite() {
                    return (Self::inf(f.is_sign_negative()), $crate::ctx::Condition::empty());
                }
                let mut buf = $crate::util::Ascii::<32>::new();
                match write!(buf, "{f:e}") {
                    Ok(()) => Self::from_shortest(buf.as_str(), mode),
                    Err(_) => (Self::NAN, $crate::ctx::Condition::CONVERSION_SYNTAX),
                }
            }

            fn from_shortest(
                s: &str,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                match Self::parse_with(s, mode) {
                    Ok(v) => v,
                    Err(_) => (Self::NAN, $crate::ctx::Condition::CONVERSION_SYNTAX),
                }
            }

            /// Converts the number to the nearest `f64`.
            pub fn to_f64(self) -> f64 {
                use ::core::fmt::Write;

                if self.is_nan() {
                    return if self.signbit() { -f64::NAN } else { f64::NAN };
                }
                if self.is_infinite() {
                    return if self.signbit() { f64::NEG_INFINITY } else { f64::INFINITY };
                }
                let mut buf = $crate::util::Ascii::<64>::new();
                match write!(buf, "{self:e}") {
                    Ok(()) => buf.as_str().parse().unwrap_or(f64::NAN),
                    Err(_) => f64::NAN,
                }
            }

            /// Converts the number to the nearest `f32`.
            pub fn to_f32(self) -> f32 {
                use ::core::fmt::Write;

                if self.is_nan() {
                    return if self.signbit() { -f32::NAN } else { f32::NAN };
                }
                if self.is_infinite() {
                    return if self.signbit() { f32::NEG_INFINITY } else { f32::INFINITY };
                }
                let mut buf = $crate::util::Ascii::<64>::new();
                match write!(buf, "{self:e}") {
                    Ok(()) => buf.as_str().parse().unwrap_or(f32::NAN),
                    Err(_) => f32::NAN,
                }
            }
        }

        impl From<$dpd> for $name {
            fn from(dpd: $dpd) -> Self {
                Self::from_dpd(dpd)
            }
        }

        $crate::bid::base::from_int_impl!($name; i8 i16 i32 i64 i128; u8 u16 u32 u64 u128);
    };
}
pub(crate) use impl_dec_to_from_repr;

macro_rules! from_int_impl {
    ($name:ident; $($signed:ty)*; $($unsigned:ty)*) => {
        $(
            impl From<$signed> for $name {
                /// Converts the integer, rounding with the
                /// process-wide rounding mode.
                fn from(coeff: $signed) -> Self {
                    let mode = $crate::ctx::rounding_mode();
                    Self::from_u128_with(coeff < 0, coeff.unsigned_abs() as u128, mode).0
                }
            }
        )*
        $(
            impl From<$unsigned> for $name {
                /// Converts the integer, rounding with the
                /// process-wide rounding mode.
                fn from(coeff: $unsigned) -> Self {
                    let mode = $crate::ctx::rounding_mode();
                    Self::from_u128_with(false, coeff as u128, mode).0
                }
            }
        )*
    };
}
pub(crate) use from_int_impl;

macro_rules! impl_dec_arith {
    ($name:ident, $ucoeff:ty, $arith:ident $(,)?) => {
        // Arithmetic operations.
        // <https://speleotrove.com/decimal/daops.html>
        impl $name {
            /// Returns `self + rhs` rounded with `mode`.
            pub(crate) const fn add_with(
                self,
                rhs: Self,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use ::core::cmp::Ordering;
                use $crate::{
                    bid::util::min_u32,
                    ctx::{Condition, RoundingMode},
                };

                if self.is_special() || rhs.is_special() {
                    if self.is_nan() || rhs.is_nan() {
                        // ±NaN + rhs
                        // self + ±NaN
                        // ±NaN + ±NaN
                        return Self::select_nan(self, rhs);
                    }
                    if self.is_infinite() {
                        if rhs.is_infinite() && self.signbit() != rhs.signbit() {
                            // +inf + -inf
                            // -inf + +inf
                            return Self::invalid();
                        }
                        // ±inf + rhs
                        return (Self::inf(self.signbit()), Condition::empty());
                    }
                    // self + ±inf
                    return (Self::inf(rhs.signbit()), Condition::empty());
                }
                // Both are now finite.

                // The sign of an exact zero sum is negative only
                // if both operands are negative or the signs
                // differ and we're rounding toward -inf.
                let zero_sign = (self.signbit() && rhs.signbit())
                    || (self.signbit() != rhs.signbit()
                        && matches!(mode, RoundingMode::ToNegativeInf));

                // `hi` has the larger exponent.
                let (hi, lo) = if self.unbiased_exp() >= rhs.unbiased_exp() {
                    (self, rhs)
                } else {
                    (rhs, self)
                };
                let (e_hi, c_hi) = (hi.unbiased_exp(), hi.coeff());
                let (e_lo, c_lo) = (lo.unbiased_exp(), lo.coeff());

                if c_lo == 0 {
                    if c_hi == 0 {
                        // ±0 + ±0
                        return (Self::pack(zero_sign, e_lo, 0), Condition::empty());
                    }
                    // hi + ±0
                    //
                    // The ideal exponent is `e_lo`, so move
                    // toward it as far as the precision
                    // allows.
                    let room = Self::P - $arith::digits(c_hi);
                    let shift = min_u32((e_hi - e_lo) as u32, room);
                    let coeff = c_hi * $arith::pow10(shift);
                    let sum = Self::pack(hi.signbit(), e_hi - shift as i32, coeff);
                    return (sum, Condition::empty());
                }
                if c_hi == 0 {
                    // ±0 + lo
                    return (Self::pack(lo.signbit(), e_lo, c_lo), Condition::empty());
                }
                // Both are non-zero.

                let shift = (e_hi - e_lo) as u32;
                let d_hi = $arith::digits(c_hi);
                let subtract = hi.signbit() != lo.signbit();

                if d_hi + shift <= $arith::WIDE_DIGITS - 1 {
                    // Exact: `c_hi * 10^shift` and the sum both
                    // fit in the promoted width.
                    let a = $arith::wide_shl($arith::wide_from(c_hi), shift);
                    let b = $arith::wide_from(c_lo);
                    let (sign, sum) = if !subtract {
                        (hi.signbit(), $arith::wide_add(a, b))
                    } else {
                        match $arith::wide_cmp(a, b) {
                            Ordering::Greater => (hi.signbit(), $arith::wide_sub(a, b)),
                            Ordering::Less => (lo.signbit(), $arith::wide_sub(b, a)),
                            Ordering::Equal => {
                                return (Self::pack(zero_sign, e_lo, 0), Condition::empty());
                            }
                        }
                    };
                    return Self::finalize(sign, e_lo, sum, false, mode);
                }

                // `lo` does not fit next to `hi` in the promoted
                // width. Since the width holds at least 2P+2
                // digits, `lo` is then less than 1/100th of an
                // ULP of `hi` normalized to `P` digits, so it only
                // matters as a sticky bit.
                let e_norm = e_hi - (Self::P - d_hi) as i32;
                debug_assert!(e_lo + ($arith::digits(c_lo) as i32) - 1 <= e_norm - 3);

                let sign = hi.signbit();
                let mut coeff = c_hi * $arith::pow10(Self::P - d_hi);
                let mut exp = e_norm;
                let flags = Condition::INEXACT.union(Condition::ROUNDED);
                if !subtract {
                    let up = match mode {
                        RoundingMode::ToPositiveInf => !sign,
                        RoundingMode::ToNegativeInf => sign,
                        _ => false,
                    };
                    if up {
                        coeff += 1;
                        if coeff > Self::MAX_COEFF {
                            coeff /= 10;
                            exp += 1;
                        }
                    }
                } else {
                    let down = match mode {
                        RoundingMode::ToZero => true,
                        RoundingMode::ToPositiveInf => sign,
                        RoundingMode::ToNegativeInf => !sign,
                        _ => false,
                    };
                    if down {
                        if coeff == $arith::pow10(Self::P - 1) {
                            // 100...0 - ε = 99...9 with one
                            // more digit of precision.
                            coeff = Self::MAX_COEFF;
                            exp -= 1;
                        } else {
                            coeff -= 1;
                        }
                    }
                }
                Self::pack_checked(sign, exp, coeff, flags, mode)
            }

            /// Returns `self - rhs` rounded with `mode`.
            pub(crate) const fn sub_with(
                self,
                rhs: Self,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                // x - y = x + -y, but the NaN keeps its sign.
                let rhs = if rhs.is_nan() { rhs } else { rhs.copy_neg() };
                self.add_with(rhs, mode)
            }

            /// Returns `self * rhs` rounded with `mode`.
            pub(crate) const fn mul_with(
                self,
                rhs: Self,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use $crate::ctx::Condition;

                let sign = self.signbit() ^ rhs.signbit();
                if self.is_special() || rhs.is_special() {
                    if self.is_nan() || rhs.is_nan() {
                        return Self::select_nan(self, rhs);
                    }
                    if self.is_zero() || rhs.is_zero() {
                        // ±inf * 0
                        // 0 * ±inf
                        return Self::invalid();
                    }
                    return (Self::inf(sign), Condition::empty());
                }

                let prod = $arith::wide_mul(self.coeff(), rhs.coeff());
                let exp = self.unbiased_exp() + rhs.unbiased_exp();
                Self::finalize(sign, exp, prod, false, mode)
            }

            /// Returns `self / rhs` rounded with `mode`.
            pub(crate) const fn div_with(
                self,
                rhs: Self,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use $crate::ctx::Condition;

                let sign = self.signbit() ^ rhs.signbit();
                if self.is_special() || rhs.is_special() {
                    if self.is_nan() || rhs.is_nan() {
                        return Self::select_nan(self, rhs);
                    }
                    if self.is_infinite() {
                        if rhs.is_infinite() {
                            // ±inf / ±inf
                            return Self::invalid();
                        }
                        // ±inf / rhs
                        return (Self::inf(sign), Condition::empty());
                    }
                    // self / ±inf
                    return (Self::pack(sign, Self::ETINY, 0), Condition::empty());
                }

                let (c1, c2) = (self.coeff(), rhs.coeff());
                if c2 == 0 {
                    return if c1 == 0 {
                        // 0 / 0
                        let flags = Condition::DIVISION_UNDEFINED.union(Condition::INVALID_OPERATION);
                        (Self::nan(false, 0), flags)
                    } else {
                        // self / 0
                        (Self::inf(sign), Condition::DIVISION_BY_ZERO)
                    };
                }

                let ideal = self.unbiased_exp() - rhs.unbiased_exp();
                if c1 == 0 {
                    // 0 / rhs
                    return Self::finalize(sign, ideal, $arith::WIDE_ZERO, false, mode);
                }

                // Scale the dividend so that the quotient has at
                // least `P+1` digits.
                let s = Self::P + 1 + $arith::digits(c2) - $arith::digits(c1);
                let num = $arith::wide_shl($arith::wide_from(c1), s);
                let (mut q, r) = $arith::wide_divrem(num, c2);
                let mut exp = ideal - s as i32;
                if r == 0 {
                    // Exact, so move toward the ideal exponent.
                    while exp < ideal {
                        let (t, d) = $arith::wide_divrem_small(q, 10);
                        if d != 0 {
                            break;
                        }
                        q = t;
                        exp += 1;
                    }
                }
                Self::finalize(sign, exp, q, r != 0, mode)
            }

            /// Returns the truncated remainder of `self / rhs`.
            ///
            /// The result is always exact, so `mode` is unused
            /// except for signature parity with the other
            /// operations.
            pub(crate) const fn rem_with(
                self,
                rhs: Self,
                _mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use $crate::ctx::Condition;

                if self.is_special() || rhs.is_special() {
                    if self.is_nan() || rhs.is_nan() {
                        return Self::select_nan(self, rhs);
                    }
                    if self.is_infinite() {
                        // ±inf % rhs
                        return Self::invalid();
                    }
                    // self % ±inf
                    return (self.canonical(), Condition::empty());
                }

                let (c1, c2) = (self.coeff(), rhs.coeff());
                if c2 == 0 {
                    let flags = if c1 == 0 {
                        // 0 % 0
                        Condition::DIVISION_UNDEFINED.union(Condition::INVALID_OPERATION)
                    } else {
                        // self % 0
                        Condition::INVALID_OPERATION
                    };
                    return (Self::nan(false, 0), flags);
                }

                let sign = self.signbit();
                let (e1, e2) = (self.unbiased_exp(), rhs.unbiased_exp());
                let exp = if e1 < e2 { e1 } else { e2 };
                if c1 == 0 {
                    return (Self::pack(sign, exp, 0), Condition::empty());
                }

                let r = if e1 >= e2 {
                    // r = (c1 * 10^(e1-e2)) mod c2
                    //
                    // Each step keeps `m * 10^n` below the
                    // promoted width since `m < c2 < 10^P`.
                    const CHUNK: u32 = $arith::WIDE_DIGITS - 1 - $name::P;
                    let mut m = c1 % c2;
                    let mut k = (e1 - e2) as u32;
                    while k > 0 && m != 0 {
                        let n = if k > CHUNK { CHUNK } else { k };
                        let x = $arith::wide_shl($arith::wide_from(m), n);
                        m = $arith::wide_divrem(x, c2).1;
                        k -= n;
                    }
                    m
                } else {
                    let shift = (e2 - e1) as u32;
                    if $arith::digits(c2) + shift > Self::P {
                        // c2 * 10^shift > c1
                        c1
                    } else {
                        c1 % (c2 * $arith::pow10(shift))
                    }
                };
                (Self::pack(sign, exp, r), Condition::empty())
            }

            /// Returns `self + rhs`.
            ///
            /// This is the same as [`Add`][core::ops::Add], but
            /// can be used in a const context. It always rounds
            /// with [`ROUNDING_CONST`][crate::ROUNDING_CONST].
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn const_add(self, rhs: Self) -> Self {
                self.add_with(rhs, $crate::ctx::ROUNDING_CONST).0
            }

            /// Returns `self - rhs`.
            ///
            /// This is the same as [`Sub`][core::ops::Sub], but
            /// can be used in a const context. It always rounds
            /// with [`ROUNDING_CONST`][crate::ROUNDING_CONST].
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn const_sub(self, rhs: Self) -> Self {
                self.sub_with(rhs, $crate::ctx::ROUNDING_CONST).0
            }

            /// Returns `self * rhs`.
            ///
            /// This is the same as [`Mul`][core::ops::Mul], but
            /// can be used in a const context. It always rounds
            /// with [`ROUNDING_CONST`][crate::ROUNDING_CONST].
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn const_mul(self, rhs: Self) -> Self {
                self.mul_with(rhs, $crate::ctx::ROUNDING_CONST).0
            }

            /// Returns `self / rhs`.
            ///
            /// This is the same as [`Div`][core::ops::Div], but
            /// can be used in a const context. It always rounds
            /// with [`ROUNDING_CONST`][crate::ROUNDING_CONST].
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn const_div(self, rhs: Self) -> Self {
                self.div_with(rhs, $crate::ctx::ROUNDING_CONST).0
            }

            /// Returns `self % rhs`.
            ///
            /// This is the same as [`Rem`][core::ops::Rem], but
            /// can be used in a const context.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn const_rem(self, rhs: Self) -> Self {
                self.rem_with(rhs, $crate::ctx::ROUNDING_CONST).0
            }

            /// Returns `-self`.
            ///
            /// This is the same as [`Neg`][core::ops::Neg], but
            /// can be used in a const context.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn const_neg(self) -> Self {
                self.copy_neg()
            }

            /// Returns the absolute value of `self`.
            ///
            /// Unlike [`copy_abs`][Self::copy_abs], NaNs are
            /// made quiet and canonical.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn abs(self) -> Self {
                if self.is_nan() {
                    Self::select_nan(self, self).0.copy_abs()
                } else {
                    self.canonical().copy_abs()
                }
            }

            /// Returns the maximum of `self` and `rhs`.
            ///
            /// If one operand is qNaN and the other is a number,
            /// it returns the number.
            ///
            /// See IEEE 754-2008 `maxNum`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn max(self, rhs: Self) -> Self {
                use ::core::cmp::Ordering;

                let max = if self.is_numeric() && rhs.is_numeric() {
                    // Both are numeric, so `total_cmp` ensures
                    // that +0 > -0, etc.
                    match self.total_cmp(rhs) {
                        Ordering::Greater | Ordering::Equal => self,
                        Ordering::Less => rhs,
                    }
                } else if self.is_numeric() && rhs.is_qnan() {
                    self
                } else if self.is_qnan() && rhs.is_numeric() {
                    rhs
                } else {
                    return Self::select_nan(self, rhs).0;
                };
                max.canonical()
            }

            /// Returns the minimum of `self` and `rhs`.
            ///
            /// If one operand is qNaN and the other is a number,
            /// it returns the number.
            ///
            /// See IEEE 754-2008 `minNum`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn min(self, rhs: Self) -> Self {
                use ::core::cmp::Ordering;

                let min = if self.is_numeric() && rhs.is_numeric() {
                    match self.total_cmp(rhs) {
                        Ordering::Less | Ordering::Equal => self,
                        Ordering::Greater => rhs,
                    }
                } else if self.is_numeric() && rhs.is_qnan() {
                    self
                } else if self.is_qnan() && rhs.is_numeric() {
                    rhs
                } else {
                    return Self::select_nan(self, rhs).0;
                };
                min.canonical()
            }

            /// Returns the maximum of `self` and `rhs`.
            ///
            /// Unlike [`max`][Self::max], this returns NaN if
            /// either operand is NaN.
            ///
            /// See IEEE 754-2019 `maximum`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn maximum(self, rhs: Self) -> Self {
                if self.is_nan() || rhs.is_nan() {
                    Self::select_nan(self, rhs).0
                } else {
                    self.max(rhs)
                }
            }

            /// Returns the minimum of `self` and `rhs`.
            ///
            /// Unlike [`min`][Self::min], this returns NaN if
            /// either operand is NaN.
            ///
            /// See IEEE 754-2019 `minimum`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn minimum(self, rhs: Self) -> Self {
                if self.is_nan() || rhs.is_nan() {
                    Self::select_nan(self, rhs).0
                } else {
                    self.min(rhs)
                }
            }

            /// Returns the smallest representable number that is
            /// larger than `self`.
            ///
            /// If `self` is `+Infinity`, it returns `+Infinity`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn next_plus(self) -> Self {
                if self.is_nan() {
                    return Self::select_nan(self, self).0;
                }
                if self.is_infinite() {
                    return if self.signbit() { Self::MIN } else { Self::INFINITY };
                }
                let tiny = Self::pack(false, Self::ETINY, 1);
                let next = self.add_with(tiny, $crate::ctx::RoundingMode::ToPositiveInf).0;
                if next.is_zero() {
                    // -tiny + tiny = -0
                    Self::pack(true, Self::ETINY, 0)
                } else {
                    next
                }
            }

            /// Returns the largest representable number that is
            /// smaller than `self`.
            ///
            /// If `self` is `-Infinity`, it returns `-Infinity`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn next_minus(self) -> Self {
                if self.is_nan() {
                    return Self::select_nan(self, self).0;
                }
                if self.is_infinite() {
                    return if self.signbit() { Self::NEG_INFINITY } else { Self::MAX };
                }
                let tiny = Self::pack(true, Self::ETINY, 1);
                let next = self.add_with(tiny, $crate::ctx::RoundingMode::ToNegativeInf).0;
                if next.is_zero() {
                    // tiny - tiny = +0
                    Self::pack(false, Self::ETINY, 0)
                } else {
                    next
                }
            }

            /// Returns a number equal (after rounding with `mode`)
            /// to `self` with the exponent of `rhs`.
            pub(crate) const fn quantize_with(
                self,
                rhs: Self,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use $crate::ctx::Condition;

                if self.is_special() || rhs.is_special() {
                    if self.is_nan() || rhs.is_nan() {
                        return Self::select_nan(self, rhs);
                    }
                    if self.is_infinite() && rhs.is_infinite() {
                        return (Self::inf(self.signbit()), Condition::empty());
                    }
                    // Exactly one is infinite.
                    return Self::invalid();
                }

                let sign = self.signbit();
                let (exp, coeff) = (self.unbiased_exp(), self.coeff());
                let target = rhs.unbiased_exp();
                if coeff == 0 {
                    return (Self::pack(sign, target, 0), Condition::empty());
                }

                if target <= exp {
                    let shift = (exp - target) as u32;
                    if $arith::digits(coeff) + shift > Self::P {
                        // Needs more precision than we have.
                        return Self::invalid();
                    }
                    let coeff = coeff * $arith::pow10(shift);
                    return (Self::pack(sign, target, coeff), Condition::empty());
                }

                let k = (target - exp) as u32;
                let (coeff, carry, inexact) =
                    Self::round_digits($arith::wide_from(coeff), k, sign, false, mode);
                if carry {
                    // Rounding produced `P+1` digits.
                    return Self::invalid();
                }
                let flags = if inexact {
                    Condition::ROUNDED.union(Condition::INEXACT)
                } else {
                    Condition::ROUNDED
                };
                (Self::pack(sign, target, coeff), flags)
            }

            /// Returns a number equal (before rounding) to
            /// `self` and with the same sign as `self`, but with
            /// the exponent of `rhs`.
            ///
            /// It rounds with the process-wide rounding mode. It
            /// returns NaN if the coefficient would need more
            /// than [`DIGITS`][Self::DIGITS] digits or if exactly
            /// one operand is infinite.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub fn quantize(self, rhs: Self) -> Self {
                self.quantize_with(rhs, $crate::ctx::rounding_mode()).0
            }

            pub(crate) const fn round_to_integral_with(
                self,
                mode: $crate::ctx::RoundingMode,
            ) -> (Self, $crate::ctx::Condition) {
                use $crate::ctx::Condition;

                if self.is_nan() {
                    return Self::select_nan(self, self);
                }
                if self.is_infinite() {
                    return (Self::inf(self.signbit()), Condition::empty());
                }
                let exp = self.unbiased_exp();
                if exp >= 0 {
                    return (self.canonical(), Condition::empty());
                }

                let sign = self.signbit();
                let coeff = $arith::wide_from(self.coeff());
                // Dropping at least one digit means we cannot
                // carry into `10^P`.
                let (coeff, _, inexact) =
                    Self::round_digits(coeff, exp.unsigned_abs(), sign, false, mode);
                let flags = if inexact {
                    Condition::ROUNDED.union(Condition::INEXACT)
                } else {
                    Condition::ROUNDED
                };
                (Self::pack(sign, 0, coeff), flags)
            }

            /// Rounds `self` to an integer with `mode`.
            ///
            /// The result has an exponent of zero unless `self`
            /// already had a non-negative exponent.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn round_to_integral(self, mode: $crate::ctx::RoundingMode) -> Self {
                self.round_to_integral_with(mode).0
            }

            /// Returns the integer part of `self`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn trunc(self) -> Self {
                self.round_to_integral($crate::ctx::RoundingMode::ToZero)
            }

            /// Returns the largest integer less than or equal to
            /// `self`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn floor(self) -> Self {
                self.round_to_integral($crate::ctx::RoundingMode::ToNegativeInf)
            }

            /// Returns the smallest integer greater than or equal
            /// to `self`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn ceil(self) -> Self {
                self.round_to_integral($crate::ctx::RoundingMode::ToPositiveInf)
            }

            /// Returns the nearest integer to `self`, rounding
            /// half-way cases away from zero.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn round(self) -> Self {
                self.round_to_integral($crate::ctx::RoundingMode::ToNearestAway)
            }

            /// Returns the nearest integer to `self`, rounding
            /// half-way cases to the even integer.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn round_ties_even(self) -> Self {
                self.round_to_integral($crate::ctx::RoundingMode::ToNearestEven)
            }

            /// Removes trailing zeros from the coefficient.
            ///
            /// Zero reduces to `±0E+0`. The result is the
            /// canonical member of the number's cohort.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn reduce(self) -> Self {
                if self.is_nan() {
                    return Self::select_nan(self, self).0;
                }
                if self.is_infinite() {
                    return Self::inf(self.signbit());
                }
                let sign = self.signbit();
                let mut coeff = self.coeff();
                if coeff == 0 {
                    return Self::pack(sign, 0, 0);
                }
                let mut exp = self.unbiased_exp();
                while exp < Self::QMAX && coeff % 10 == 0 {
                    coeff /= 10;
                    exp += 1;
                }
                Self::pack(sign, exp, coeff)
            }
        }
    };
}
pub(crate) use impl_dec_arith;

macro_rules! impl_dec_cmp {
    ($name:ident, $ucoeff:ty, $arith:ident $(,)?) => {
        // Comparisons.
        impl $name {
            /// Reports whether `self == other`.
            ///
            /// - If either number is NaN, it returns `false`.
            /// - +0.0 and -0.0 are considered equal.
            /// - Members of the same cohort are equal.
            ///
            /// This is a const version of [`PartialEq`].
            pub const fn const_eq(self, other: Self) -> bool {
                use ::core::cmp::Ordering;

                if self.is_nan() || other.is_nan() {
                    // NaN != NaN
                    return false;
                }
                if self.to_bits() == other.to_bits() {
                    // Obvious case: same bits.
                    return true;
                }
                matches!(self.partial_cmp_numeric(other), Ordering::Equal)
            }

            /// Returns the ordering between `self` and `rhs`.
            ///
            /// - If either number is NaN, it returns `None`.
            /// - +0.0 and -0.0 are considered equal.
            ///
            /// This is a const version of [`PartialOrd`].
            pub const fn const_partial_cmp(self, rhs: Self) -> Option<::core::cmp::Ordering> {
                if self.is_nan() || rhs.is_nan() {
                    // NaN != NaN
                    return None;
                }
                Some(self.partial_cmp_numeric(rhs))
            }

            const fn partial_cmp_numeric(self, rhs: Self) -> ::core::cmp::Ordering {
                use ::core::cmp::Ordering;

                debug_assert!(self.is_numeric() && rhs.is_numeric());

                let lhs_zero = self.is_zero();
                let rhs_zero = rhs.is_zero();
                if lhs_zero && rhs_zero {
                    // ±0 == ±0
                    return Ordering::Equal;
                }
                if self.signbit() != rhs.signbit() || lhs_zero || rhs_zero {
                    // The signs differ or exactly one is zero,
                    // so the sign of the non-zero decides.
                    let x = if lhs_zero { 0 } else if self.signbit() { -1 } else { 1 };
                    let y = if rhs_zero { 0 } else if rhs.signbit() { -1 } else { 1 };
                    return $crate::bid::util::const_cmp_i8(x, y);
                }
                // Signs are the same and neither is zero.

                let ord = self.partial_cmp_numeric_abs(rhs);
                if self.signbit() {
                    ord.reverse()
                } else {
                    ord
                }
            }

            /// Compares the magnitudes of two non-zero numbers.
            const fn partial_cmp_numeric_abs(self, rhs: Self) -> ::core::cmp::Ordering {
                use ::core::cmp::Ordering;

                if self.is_infinite() || rhs.is_infinite() {
                    return $crate::bid::util::const_cmp_u8(self.special_ord(), rhs.special_ord());
                }
                // Both are finite.
                debug_assert!(!self.is_zero() && !rhs.is_zero());

                let (lhs_exp, rhs_exp) = (self.unbiased_exp(), rhs.unbiased_exp());
                let shift = lhs_exp.abs_diff(rhs_exp);
                if shift >= Self::P {
                    // The shift is at least the precision, so
                    // the coefficients do not overlap.
                    // Therefore, the larger exponent is the
                    // larger number.
                    return if lhs_exp < rhs_exp {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    };
                }
                // `shift` is in [0, P).

                if shift == 0 {
                    $arith::const_cmp(self.coeff(), rhs.coeff())
                } else if lhs_exp > rhs_exp {
                    $arith::const_cmp_shifted(self.coeff(), rhs.coeff(), shift)
                } else {
                    $arith::const_cmp_shifted(rhs.coeff(), self.coeff(), shift).reverse()
                }
            }

            pub(crate) const fn compare_with(
                self,
                rhs: Self,
                signal: bool,
            ) -> (Self, $crate::ctx::Condition) {
                use ::core::cmp::Ordering;
                use $crate::ctx::Condition;

                if self.is_nan() || rhs.is_nan() {
                    let (nan, flags) = Self::select_nan(self, rhs);
                    let flags = if signal { Condition::INVALID_OPERATION } else { flags };
                    return (nan, flags);
                }
                let v = match self.partial_cmp_numeric(rhs) {
                    Ordering::Greater => Self::ONE,
                    Ordering::Less => Self::pack(true, 0, 1),
                    Ordering::Equal => Self::zero(),
                };
                (v, Condition::empty())
            }

            /// Compares `self` and `rhs` numerically.
            ///
            /// It returns -1, 0, or 1, or NaN if the operands
            /// are unordered.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn compare(self, rhs: Self) -> Self {
                self.compare_with(rhs, false).0
            }

            /// Like [`compare`][Self::compare], but any NaN
            /// operand is an invalid operation.
            ///
            /// Use [`Ctx::compare_signal`][crate::Ctx] to observe
            /// the condition.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn compare_signal(self, rhs: Self) -> Self {
                self.compare_with(rhs, true).0
            }

            /// Compares `self` and `rhs` with
            /// [`total_cmp`][Self::total_cmp].
            #[cfg(test)]
            pub(crate) const fn compare_total(self, rhs: Self) -> Self {
                use ::core::cmp::Ordering;

                match self.total_cmp(rhs) {
                    Ordering::Greater => Self::ONE,
                    Ordering::Less => Self::pack(true, 0, 1),
                    Ordering::Equal => Self::zero(),
                }
            }

            /// Returns the total ordering between `self` and
            /// `rhs`.
            ///
            /// The values are ordered as follows:
            ///
            /// - negative quiet NaN
            /// - negative signaling NaN
            /// - negative infinity
            /// - negative numbers
            /// - negative subnormal numbers
            /// - negative zero
            /// - positive zero
            /// - positive subnormal numbers
            /// - positive numbers
            /// - positive infinity
            /// - positive signaling NaN
            /// - positive quiet NaN
            ///
            /// Members of a cohort are ordered by exponent, and
            /// NaNs by payload.
            ///
            /// The ordering established by this function does
            /// not always agree with [`PartialOrd`] and
            /// [`PartialEq`]. For example, they consider
            /// negative and positive zero equal, while
            /// `total_cmp` doesn't.
            ///
            /// See IEEE 754-2008 `totalOrder`.
            pub const fn total_cmp(self, rhs: Self) -> ::core::cmp::Ordering {
                use ::core::cmp::Ordering;

                if self.signbit() != rhs.signbit() {
                    return if self.signbit() {
                        // -x < +x
                        Ordering::Less
                    } else {
                        // +x > -x
                        Ordering::Greater
                    };
                }
                // Signs are the same.

                let ord = self.total_cmp_abs(rhs);
                if self.signbit() {
                    ord.reverse()
                } else {
                    ord
                }
            }

            /// `totalOrder`, but without comparing signs.
            const fn total_cmp_abs(self, rhs: Self) -> ::core::cmp::Ordering {
                use ::core::cmp::Ordering;

                if self.to_bits() == rhs.to_bits() {
                    // Same bits, so obviously equal.
                    return Ordering::Equal;
                }

                if !self.is_finite() || !rhs.is_finite() {
                    return match $crate::bid::util::const_cmp_u8(
                        self.special_ord() | 1,
                        rhs.special_ord() | 1,
                    ) {
                        // Both are NaN or both are infinite.
                        Ordering::Equal if self.is_nan() => {
                            match $crate::bid::util::const_cmp_u8(
                                self.special_ord(),
                                rhs.special_ord(),
                            ) {
                                // Both are the same type of NaN.
                                // Compare the payloads.
                                Ordering::Equal => $arith::const_cmp(self.payload(), rhs.payload()),
                                ord => ord,
                            }
                        }
                        Ordering::Equal => Ordering::Equal,
                        ord => ord,
                    };
                }
                // Both are finite.

                let lhs_zero = self.is_zero();
                let rhs_zero = rhs.is_zero();
                let ord = if lhs_zero || rhs_zero {
                    $crate::bid::util::const_cmp_u8(!lhs_zero as u8, !rhs_zero as u8)
                } else {
                    self.partial_cmp_numeric_abs(rhs)
                };
                match ord {
                    // Same value, so order by exponent.
                    Ordering::Equal => {
                        let lhs = self.unbiased_exp();
                        let rhs = rhs.unbiased_exp();
                        if lhs < rhs {
                            Ordering::Less
                        } else if lhs > rhs {
                            Ordering::Greater
                        } else {
                            Ordering::Equal
                        }
                    }
                    ord => ord,
                }
            }

            /// Equivalent to [`total_cmp`][Self::total_cmp], but
            /// with both signs assumed to be zero.
            pub const fn total_cmp_magnitude(self, rhs: Self) -> ::core::cmp::Ordering {
                // NB: This is equivalent to
                // `self.copy_abs().total_cmp(rhs.copy_abs())`
                self.total_cmp_abs(rhs)
            }
        }
    };
}
pub(crate) use impl_dec_cmp;

macro_rules! impl_dec_misc {
    ($name:ident, $ucoeff:ty, $unbiased:ty, $arith:ident $(,)?) => {
        // Misc operations.
        // <https://speleotrove.com/decimal/damisc.html>
        impl $name {
            /// Converts the number to its canonical encoding.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn canonical(self) -> Self {
                if self.is_nan() {
                    let payload = self.payload();
                    if self.is_snan() {
                        Self::snan(self.signbit(), payload)
                    } else {
                        Self::nan(self.signbit(), payload)
                    }
                } else if self.is_infinite() {
                    Self(self.0 & Self::CANONICAL_INF)
                } else {
                    Self::pack(self.signbit(), self.unbiased_exp(), self.coeff())
                }
            }

            /// Returns the floating point category for the
            /// number.
            pub const fn classify(self) -> ::core::num::FpCategory {
                use ::core::num::FpCategory;

                if self.is_nan() {
                    FpCategory::Nan
                } else if self.is_infinite() {
                    FpCategory::Infinite
                } else if self.is_zero() {
                    FpCategory::Zero
                } else if self.is_normal() {
                    FpCategory::Normal
                } else {
                    FpCategory::Subnormal
                }
            }

            /// Returns the decTest class name of the number.
            #[cfg(test)]
            pub(crate) const fn class(self) -> &'static str {
                use ::core::num::FpCategory;

                let sign = self.signbit();
                match self.classify() {
                    FpCategory::Nan if self.is_snan() => "sNaN",
                    FpCategory::Nan => "NaN",
                    FpCategory::Infinite if sign => "-Infinity",
                    FpCategory::Infinite => "+Infinity",
                    FpCategory::Zero if sign => "-Zero",
                    FpCategory::Zero => "+Zero",
                    FpCategory::Normal if sign => "-Normal",
                    FpCategory::Normal => "+Normal",
                    FpCategory::Subnormal if sign => "-Subnormal",
                    FpCategory::Subnormal => "+Subnormal",
                }
            }

            /// Returns the absolute value of `self`.
            ///
            /// Unlike [`abs`][Self::abs], this operation has no
            /// special NaN handling and may return
            /// a non-canonical result.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn copy_abs(self) -> Self {
                Self(self.0 & !Self::SIGN_MASK)
            }

            /// Returns `-self`.
            ///
            /// This operation has no special NaN handling and
            /// may return a non-canonical result.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn copy_neg(self) -> Self {
                Self(self.0 ^ Self::SIGN_MASK)
            }

            /// Returns `self` with the same sign as `rhs`.
            ///
            /// This operation has no special NaN handling and
            /// may return a non-canonical result.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn copy_sign(self, rhs: Self) -> Self {
                Self((self.0 & !Self::SIGN_MASK) | (rhs.0 & Self::SIGN_MASK))
            }

            /// Reports whether the number is in its canonical
            /// format.
            pub const fn is_canonical(self) -> bool {
                if self.is_nan() {
                    self.0 & !Self::CANONICAL_NAN == 0
                        && self.0 & Self::PAYLOAD_MASK <= Self::PAYLOAD_MAX
                } else if self.is_infinite() {
                    self.0 & !Self::CANONICAL_INF == 0
                } else {
                    self.raw_coeff() <= Self::MAX_COEFF
                }
            }

            /// Reports whether the number is neither infinite
            /// nor NaN.
            pub const fn is_finite(self) -> bool {
                !self.is_special()
            }

            /// Reports whether the number is either positive or
            /// negative infinity.
            pub const fn is_infinite(self) -> bool {
                // When the first (top) four bits of the
                // combination field are set, the number is
                // either an infinity or a NaN. The fifth bit
                // signals NaN.
                self.0 & Self::COMB_TOP5 == Self::COMB_TOP4
            }

            /// Reports whether the number is a NaN.
            pub const fn is_nan(self) -> bool {
                self.0 & Self::COMB_TOP5 == Self::COMB_TOP5
            }

            /// Reports whether the number is a quiet NaN.
            pub const fn is_qnan(self) -> bool {
                // When the number is a NaN, the sixth
                // combination bit signals whether the NaN is
                // signaling.
                self.0 & Self::COMB_TOP6 == Self::COMB_TOP5
            }

            /// Reports whether the number is a signaling NaN.
            pub const fn is_snan(self) -> bool {
                self.0 & Self::COMB_TOP6 == Self::COMB_TOP6
            }

            /// Reports whether the number is neither zero,
            /// infinite, subnormal, or NaN.
            pub const fn is_normal(self) -> bool {
                if self.is_special() || self.is_zero() {
                    return false;
                }
                self.adjusted_exp() >= Self::EMIN
            }

            /// Reports whether the number is subnormal.
            pub const fn is_subnormal(self) -> bool {
                !self.is_special() && !self.is_zero() && !self.is_normal()
            }

            /// Reports whether the number is negative, including
            /// `-0.0`.
            pub const fn is_sign_negative(self) -> bool {
                self.signbit()
            }

            /// Reports whether the number is positive, including
            /// `+0.0`.
            pub const fn is_sign_positive(self) -> bool {
                !self.is_sign_negative()
            }

            /// Reports whether the number is `-0.0` or `+0.0`.
            pub const fn is_zero(self) -> bool {
                // A non-canonical coefficient is read as zero.
                self.is_finite() && self.coeff() == 0
            }

            /// Returns the base in which arithmetic is effected.
            pub const fn radix() -> u32 {
                10
            }

            /// Reports whether `self` and `rhs` have the same
            /// exponent.
            ///
            /// If either operand is an infinity or a NaN, it
            /// only returns true if both operands are infinity
            /// or both are NaN.
            pub const fn same_quantum(self, rhs: Self) -> bool {
                if self.is_finite() && rhs.is_finite() {
                    self.unbiased_exp() == rhs.unbiased_exp()
                } else {
                    // Right shifting by one discards the sNaN
                    // bit.
                    self.special_bits() >> 1 == rhs.special_bits() >> 1
                }
            }

            /// Returns the number of significant digits in the
            /// number.
            ///
            /// If the number is infinity or zero, it returns 1.
            /// If the number is NaN, it returns the number of
            /// digits in the payload.
            ///
            /// The result will always be in [1,
            /// [`DIGITS`][Self::DIGITS]].
            pub const fn digits(self) -> u32 {
                if self.is_finite() {
                    $arith::digits(self.coeff())
                } else if self.is_nan() {
                    $arith::digits(self.payload())
                } else {
                    1 // infinite
                }
            }

            /// Returns the unbiased exponent.
            ///
            /// If the number is infinite or NaN, it returns
            /// `None`.
            pub const fn exponent(self) -> Option<$unbiased> {
                if self.is_finite() {
                    Some(self.unbiased_exp() as $unbiased)
                } else {
                    None
                }
            }
        }
    };
}
pub(crate) use impl_dec_misc;

macro_rules! impl_dec_ctx {
    ($name:ident) => {
        impl $crate::ctx::Ctx<$name> {
            /// Returns `lhs + rhs`.
            pub fn add(&mut self, lhs: $name, rhs: $name) -> $name {
                let (v, cond) = lhs.add_with(rhs, self.rounding);
                self.raise(cond);
                v
            }

            /// Returns `lhs - rhs`.
            pub fn sub(&mut self, lhs: $name, rhs: $name) -> $name {
                let (v, cond) = lhs.sub_with(rhs, self.rounding);
                self.raise(cond);
                v
            }

            /// Returns `lhs * rhs`.
            pub fn mul(&mut self, lhs: $name, rhs: $name) -> $name {
                let (v, cond) = lhs.mul_with(rhs, self.rounding);
                self.raise(cond);
                v
            }

            /// Returns `lhs / rhs`.
            pub fn div(&mut self, lhs: $name, rhs: $name) -> $name {
                let (v, cond) = lhs.div_with(rhs, self.rounding);
                self.raise(cond);
                v
            }

            /// Returns the truncated remainder of `lhs / rhs`.
            pub fn rem(&mut self, lhs: $name, rhs: $name) -> $name {
                let (v, cond) = lhs.rem_with(rhs, self.rounding);
                self.raise(cond);
                v
            }

            /// Returns `lhs` with the exponent of `rhs`.
            ///
            /// See [`quantize`][$name::quantize].
            pub fn quantize(&mut self, lhs: $name, rhs: $name) -> $name {
                let (v, cond) = lhs.quantize_with(rhs, self.rounding);
                self.raise(cond);
                v
            }

            /// Rounds `x` to an integer.
            pub fn round_to_integral(&mut self, x: $name) -> $name {
                let (v, cond) = x.round_to_integral_with(self.rounding);
                self.raise(cond);
                v
            }

            /// Compares `lhs` and `rhs`.
            ///
            /// See [`compare`][$name::compare].
            pub fn compare(&mut self, lhs: $name, rhs: $name) -> $name {
                let (v, cond) = lhs.compare_with(rhs, false);
                self.raise(cond);
                v
            }

            /// Compares `lhs` and `rhs`, signaling on any NaN.
            ///
            /// See [`compare_signal`][$name::compare_signal].
            pub fn compare_signal(&mut self, lhs: $name, rhs: $name) -> $name {
                let (v, cond) = lhs.compare_with(rhs, true);
                self.raise(cond);
                v
            }

            /// Parses a decimal from a string.
            ///
            /// Malformed input raises
            /// [`CONVERSION_SYNTAX`][crate::Condition::CONVERSION_SYNTAX].
            pub fn parse(&mut self, s: &str) -> Result<$name, $crate::conv::ParseError> {
                match $name::parse_with(s, self.rounding) {
                    Ok((v, cond)) => {
                        self.raise(cond);
                        Ok(v)
                    }
                    Err(err) => {
                        self.raise($crate::ctx::Condition::CONVERSION_SYNTAX);
                        Err(err)
                    }
                }
            }

            /// Converts an `f64` to a decimal.
            ///
            /// See [`from_f64`][$name::from_f64].
            pub fn from_f64(&mut self, f: f64) -> $name {
                let (v, cond) = $name::from_f64_with(f, self.rounding);
                self.raise(cond);
                v
            }
        }
    };
}
pub(crate) use impl_dec_ctx;

macro_rules! impl_dec_impls {
    ($name:ident, $ucoeff:ty) => {
        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.const_eq(*other)
            }
        }

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                self.const_partial_cmp(*other)
            }
        }

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                // Equal numbers reduce to the same encoding,
                // except for zeros, which differ by sign.
                let v = self.reduce();
                let bits = if v.is_zero() {
                    Self::ZERO.to_bits()
                } else {
                    v.to_bits()
                };
                ::core::hash::Hash::hash(&bits, state)
            }
        }

        impl ::core::iter::Product for $name {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, |a, b| a * b)
            }
        }

        impl<'a> ::core::iter::Product<&'a $name> for $name {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, |a, b| a * b)
            }
        }

        impl ::core::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |a, b| a + b)
            }
        }

        impl<'a> ::core::iter::Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |a, b| a + b)
            }
        }

        impl $crate::conv::private::Sealed for $name {
            fn write(self, buf: &mut $crate::conv::Buffer, fmt: $crate::conv::Fmt) -> &str {
                self.format_with(buf, fmt)
            }
        }

        impl $crate::conv::Decimal for $name {
            const PRECISION: u32 = $name::P;
            const EMAX: i32 = $name::EMAX;
            const EMIN: i32 = $name::EMIN;
            const BITS: u32 = $name::K;
        }

        #[cfg(feature = "rand")]
        impl ::rand::distributions::Distribution<$name> for ::rand::distributions::Standard {
            /// Returns a uniformly random finite number.
            fn sample<R: ::rand::Rng + ?Sized>(&self, rng: &mut R) -> $name {
                let coeff = rng.gen_range(0..=$name::MAX_COEFF);
                let exp = rng.gen_range($name::ETINY..=$name::QMAX);
                $name::pack(rng.gen(), exp, coeff)
            }
        }

        #[cfg(feature = "serde")]
        const _: () = {
            use ::core::fmt;

            use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

            impl Serialize for $name {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    if serializer.is_human_readable() {
                        serializer.collect_str(self)
                    } else {
                        self.to_bits().serialize(serializer)
                    }
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    struct Visitor;

                    impl de::Visitor<'_> for Visitor {
                        type Value = $name;

                        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                            f.write_str("a decimal string")
                        }

                        fn visit_str<E: de::Error>(self, s: &str) -> Result<$name, E> {
                            s.parse().map_err(E::custom)
                        }
                    }

                    if deserializer.is_human_readable() {
                        deserializer.deserialize_str(Visitor)
                    } else {
                        <$ucoeff>::deserialize(deserializer).map($name::from_bits)
                    }
                }
            }
        };
    };
}
pub(crate) use impl_dec_impls;
