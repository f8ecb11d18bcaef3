//! Conversions between the decimal formats.
//!
//! Widening is exact and keeps the cohort. Narrowing rounds
//! through [`finalize`][super::Bid32::finalize], so it raises
//! the same conditions as arithmetic.
//!
//! NaNs keep their sign and signaling state. A payload that
//! does not fit the narrower format keeps its low digits.

use super::{
    arith::{arith128, arith32, arith64},
    Bid128, Bid32, Bid64,
};
use crate::ctx::{Condition, Ctx, RoundingMode};

macro_rules! impl_widen {
    ($from:ident => $to:ident, $method:ident, $to_ucoeff:ty) => {
        impl $from {
            #[doc = concat!("Converts `self` to a [`", stringify!($to), "`].")]
            ///
            /// The conversion is exact and keeps the exponent.
            pub const fn $method(self) -> $to {
                let sign = self.signbit();
                if self.is_nan() {
                    let payload = self.payload() as $to_ucoeff;
                    return if self.is_snan() {
                        $to::snan(sign, payload)
                    } else {
                        $to::nan(sign, payload)
                    };
                }
                if self.is_infinite() {
                    return $to::inf(sign);
                }
                $to::pack(sign, self.unbiased_exp(), self.coeff() as $to_ucoeff)
            }
        }

        impl From<$from> for $to {
            fn from(x: $from) -> Self {
                x.$method()
            }
        }
    };
}
impl_widen!(Bid32 => Bid64, to_bid64, u64);
impl_widen!(Bid32 => Bid128, to_bid128, u128);
impl_widen!(Bid64 => Bid128, to_bid128, u128);

macro_rules! impl_narrow {
    (
        $from:ident => $to:ident,
        $method:ident,
        $method_with:ident,
        $from_ucoeff:ty,
        $to_ucoeff:ty,
        $from_arith:ident,
        $to_arith:ident $(,)?
    ) => {
        impl $from {
            #[doc = concat!("Converts `self` to a [`", stringify!($to), "`], rounding with `mode`.")]
            pub(crate) const fn $method_with(self, mode: RoundingMode) -> ($to, Condition) {
                let sign = self.signbit();
                if self.is_nan() {
                    let payload = self.payload() % ($to::PAYLOAD_MAX as $from_ucoeff + 1);
                    let payload = payload as $to_ucoeff;
                    let nan = if self.is_snan() {
                        $to::snan(sign, payload)
                    } else {
                        $to::nan(sign, payload)
                    };
                    return (nan, Condition::empty());
                }
                if self.is_infinite() {
                    return ($to::inf(sign), Condition::empty());
                }

                // Keep two digits beyond the target precision
                // and fold the rest into a sticky bit so that
                // the coefficient fits the target's promoted
                // width.
                let (coeff, exp) = (self.coeff(), self.unbiased_exp());
                let keep = $to::P + 2;
                let digits = $from_arith::digits(coeff);
                let (coeff, exp, sticky) = if digits > keep {
                    let (q, r) = $from_arith::shr(coeff, digits - keep);
                    (q, exp + (digits - keep) as i32, r != 0)
                } else {
                    (coeff, exp, false)
                };
                let coeff = $to_arith::wide_from(coeff as $to_ucoeff);
                $to::finalize(sign, exp, coeff, sticky, mode)
            }

            #[doc = concat!("Converts `self` to a [`", stringify!($to), "`].")]
            ///
            /// It rounds with the process-wide rounding mode.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub fn $method(self) -> $to {
                self.$method_with($crate::ctx::rounding_mode()).0
            }
        }

        impl Ctx<$from> {
            #[doc = concat!("Converts `x` to a [`", stringify!($to), "`].")]
            pub fn $method(&mut self, x: $from) -> $to {
                let (v, cond) = x.$method_with(self.rounding);
                self.raise(cond);
                v
            }
        }
    };
}
impl_narrow!(Bid64 => Bid32, to_bid32, to_bid32_with, u64, u32, arith64, arith32);
impl_narrow!(Bid128 => Bid32, to_bid32, to_bid32_with, u128, u32, arith128, arith32);
impl_narrow!(Bid128 => Bid64, to_bid64, to_bid64_with, u128, u64, arith128, arith64);

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;
    use crate::ctx::tests::lock_mode;

    const MODES: [RoundingMode; 5] = [
        RoundingMode::ToNearestEven,
        RoundingMode::ToNearestAway,
        RoundingMode::ToZero,
        RoundingMode::ToNegativeInf,
        RoundingMode::ToPositiveInf,
    ];

    #[test]
    fn test_widen() {
        for s in ["1.50", "-0.000", "1E-101", "9.999999E+96", "-1234567E+90"] {
            let x = Bid32::parse_lit(s);
            assert_eq!(Bid64::from(x).to_bits(), Bid64::parse_lit(s).to_bits(), "{s}");
            assert_eq!(Bid128::from(x).to_bits(), Bid128::parse_lit(s).to_bits(), "{s}");
            let y = Bid64::from(x);
            assert_eq!(Bid128::from(y).to_bits(), Bid128::parse_lit(s).to_bits(), "{s}");
        }
        assert_eq!(Bid64::from(Bid32::MAX).to_string(), "9.999999E+96");
        assert_eq!(Bid128::from(Bid64::MIN).to_string(), "-9.999999999999999E+384");
    }

    #[test]
    fn test_widen_specials() {
        assert_eq!(Bid64::from(Bid32::NEG_INFINITY).to_bits(), Bid64::NEG_INFINITY.to_bits());
        assert_eq!(Bid128::from(Bid32::INFINITY).to_bits(), Bid128::INFINITY.to_bits());

        let x = Bid64::from(Bid32::parse_lit("-sNaN123"));
        assert!(x.is_snan());
        assert!(x.is_sign_negative());
        assert_eq!(x.payload(), 123);

        let x = Bid128::from(Bid64::parse_lit("NaN999999999999999"));
        assert!(x.is_qnan());
        assert_eq!(x.payload(), 999_999_999_999_999);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = thread_rng();
        for _ in 0..10_000 {
            let coeff = rng.gen_range(0..=Bid32::MAX_COEFF);
            let exp = rng.gen_range(Bid32::ETINY..=Bid32::QMAX);
            let x = Bid32::pack(rng.gen(), exp, coeff);
            for mode in MODES {
                let (got, cond) = x.to_bid64().to_bid32_with(mode);
                assert_eq!(got.to_bits(), x.to_bits(), "{x} {mode}");
                assert!(cond.difference(Condition::SUBNORMAL).is_empty(), "{x} {mode}");

                let (got, cond) = x.to_bid128().to_bid32_with(mode);
                assert_eq!(got.to_bits(), x.to_bits(), "{x} {mode}");
                assert!(cond.difference(Condition::SUBNORMAL).is_empty(), "{x} {mode}");
            }
        }
        for _ in 0..10_000 {
            let coeff = rng.gen_range(0..=Bid64::MAX_COEFF);
            let exp = rng.gen_range(Bid64::ETINY..=Bid64::QMAX);
            let x = Bid64::pack(rng.gen(), exp, coeff);
            let (got, cond) = x.to_bid128().to_bid64_with(RoundingMode::ToZero);
            assert_eq!(got.to_bits(), x.to_bits(), "{x}");
            assert!(cond.difference(Condition::SUBNORMAL).is_empty(), "{x}");
        }
    }

    #[test]
    fn test_narrow_rounding() {
        use RoundingMode::*;

        let x = Bid64::parse_lit("1234567.5");
        let y = Bid64::parse_lit("-1234567.5");
        let cases = [
            (ToNearestEven, "1234568", "-1234568"),
            (ToNearestAway, "1234568", "-1234568"),
            (ToZero, "1234567", "-1234567"),
            (ToNegativeInf, "1234567", "-1234568"),
            (ToPositiveInf, "1234568", "-1234567"),
        ];
        for (mode, pos, neg) in cases {
            let (got, cond) = x.to_bid32_with(mode);
            assert_eq!(got.to_string(), pos, "{mode}");
            assert_eq!(cond, Condition::INEXACT | Condition::ROUNDED, "{mode}");
            let (got, _) = y.to_bid32_with(mode);
            assert_eq!(got.to_string(), neg, "{mode}");
        }

        // Digits past the kept ones still break the tie.
        let x = Bid128::parse_lit("1.234568500000000000000000000000001");
        assert_eq!(x.to_bid32_with(ToNearestEven).0.to_string(), "1.234569");
        assert_eq!(x.to_bid32_with(ToZero).0.to_string(), "1.234568");
        let x = Bid128::parse_lit("1.234568500000000000000000000000000");
        assert_eq!(x.to_bid32_with(ToNearestEven).0.to_string(), "1.234568");
    }

    #[test]
    fn test_narrow_overflow() {
        use RoundingMode::*;

        let flags = Condition::OVERFLOW | Condition::INEXACT | Condition::ROUNDED;
        let x = Bid64::parse_lit("1E+97");
        let y = Bid64::parse_lit("-1E+97");
        let cases = [
            (ToNearestEven, "Infinity", "-Infinity"),
            (ToNearestAway, "Infinity", "-Infinity"),
            (ToZero, "9.999999E+96", "-9.999999E+96"),
            (ToNegativeInf, "9.999999E+96", "-Infinity"),
            (ToPositiveInf, "Infinity", "-9.999999E+96"),
        ];
        for (mode, pos, neg) in cases {
            let (got, cond) = x.to_bid32_with(mode);
            assert_eq!(got.to_string(), pos, "{mode}");
            assert_eq!(cond, flags, "{mode}");
            let (got, cond) = y.to_bid32_with(mode);
            assert_eq!(got.to_string(), neg, "{mode}");
            assert_eq!(cond, flags, "{mode}");
        }

        let (got, cond) = Bid128::parse_lit("1E+385").to_bid64_with(ToNearestEven);
        assert!(got.is_infinite());
        assert_eq!(cond, flags);
    }

    #[test]
    fn test_narrow_underflow() {
        use RoundingMode::*;

        let x = Bid64::parse_lit("1E-102");
        let y = Bid64::parse_lit("-1E-102");
        let cases = [
            (ToNearestEven, "0E-101", "-0E-101"),
            (ToNearestAway, "0E-101", "-0E-101"),
            (ToZero, "0E-101", "-0E-101"),
            (ToNegativeInf, "0E-101", "-1E-101"),
            (ToPositiveInf, "1E-101", "-0E-101"),
        ];
        let flags = Condition::UNDERFLOW
            | Condition::SUBNORMAL
            | Condition::INEXACT
            | Condition::ROUNDED;
        for (mode, pos, neg) in cases {
            let (got, cond) = x.to_bid32_with(mode);
            assert_eq!(got.to_string(), pos, "{mode}");
            assert_eq!(cond, flags, "{mode}");
            let (got, cond) = y.to_bid32_with(mode);
            assert_eq!(got.to_string(), neg, "{mode}");
            assert_eq!(cond, flags, "{mode}");
        }

        // Exact subnormals only raise `SUBNORMAL`.
        let (got, cond) = Bid64::parse_lit("1.5E-100").to_bid32_with(ToNearestEven);
        assert_eq!(got.to_string(), "1.5E-100");
        assert_eq!(cond, Condition::SUBNORMAL);
    }

    #[test]
    fn test_narrow_specials() {
        let (got, cond) = Bid64::NEG_INFINITY.to_bid32_with(RoundingMode::ToZero);
        assert_eq!(got.to_bits(), Bid32::NEG_INFINITY.to_bits());
        assert_eq!(cond, Condition::empty());

        // Only the low digits of the payload fit.
        let (got, _) = Bid64::parse_lit("NaN1234567").to_bid32_with(RoundingMode::ToZero);
        assert!(got.is_qnan());
        assert_eq!(got.payload(), 234_567);

        let (got, cond) = Bid128::parse_lit("-sNaN12").to_bid64_with(RoundingMode::ToZero);
        assert!(got.is_snan());
        assert!(got.is_sign_negative());
        assert_eq!(got.payload(), 12);
        assert_eq!(cond, Condition::empty());
    }

    #[test]
    fn test_ctx_narrow() {
        let mut ctx = Ctx::<Bid64>::new().with_rounding_mode(RoundingMode::ToPositiveInf);
        assert_eq!(ctx.to_bid32(Bid64::parse_lit("2.5")).to_string(), "2.5");
        assert_eq!(ctx.status(), Condition::empty());
        assert_eq!(ctx.to_bid32(Bid64::parse_lit("0.12345671")).to_string(), "0.1234568");
        assert_eq!(ctx.status(), Condition::INEXACT | Condition::ROUNDED);
        assert!(ctx.to_bid32(Bid64::MAX).is_infinite());
        assert!(ctx.status().contains(Condition::OVERFLOW));

        let mut ctx = Ctx::<Bid128>::new();
        assert_eq!(ctx.to_bid64(Bid128::parse_lit("1E-399")).to_string(), "0E-398");
        assert!(ctx.status().contains(Condition::UNDERFLOW));
    }

    #[test]
    fn test_narrow_uses_rounding_mode() {
        let _guard = lock_mode();
        let prev = crate::ctx::set_rounding_mode(RoundingMode::ToZero);
        assert_eq!(Bid64::parse_lit("0.66666666").to_bid32().to_string(), "0.6666666");
        crate::ctx::set_rounding_mode(RoundingMode::ToNearestEven);
        assert_eq!(Bid64::parse_lit("0.66666666").to_bid32().to_string(), "0.6666667");
        crate::ctx::set_rounding_mode(prev);
    }
}
