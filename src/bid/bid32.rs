use core::mem::size_of;

use super::{arith::arith32, base::impl_dec};
use crate::util::const_assert;

/// A 32-bit decimal floating point number.
///
/// (–1)^sign * coefficient * 10^exp
///
/// It has 7 digits of precision and an adjusted exponent in
/// [-95, 96].
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Bid32(
    /// ## Form 1
    ///
    /// s 00eeeeee   (0)ttt tttttttttt tttttttttt
    /// s 01eeeeee   (0)ttt tttttttttt tttttttttt
    /// s 10eeeeee   (0)ttt tttttttttt tttttttttt
    ///
    /// ## Form 2
    ///
    /// s 1100eeeeee (100)t tttttttttt tttttttttt
    /// s 1101eeeeee (100)t tttttttttt tttttttttt
    /// s 1110eeeeee (100)t tttttttttt tttttttttt
    u32,
);
const_assert!(size_of::<Bid32>() == 32 / 8);

impl_dec! {
    name = Bid32,
    ucoeff = u32,
    icoeff = i32,
    biased_exp = u16,
    unbiased_exp = i16,
    arith = arith32,
    dpd = crate::dpd::Dpd32,
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use super::*;
    use crate::ctx::{Condition, Ctx, RoundingMode};

    fn d(s: &str) -> Bid32 {
        Bid32::parse_lit(s)
    }

    #[test]
    fn test_consts() {
        assert_eq!(Bid32::P, 7);
        assert_eq!(Bid32::EMAX, 96);
        assert_eq!(Bid32::EMIN, -95);
        assert_eq!(Bid32::ETINY, -101);
        assert_eq!(Bid32::QMAX, 90);
        assert_eq!(Bid32::BIAS, 101);
        assert_eq!(Bid32::MAX_COEFF, 9_999_999);
        assert_eq!(Bid32::MAX.to_string(), "9.999999E+96");
        assert_eq!(Bid32::MIN.to_string(), "-9.999999E+96");
        assert_eq!(Bid32::MIN_POSITIVE.to_string(), "1E-95");
    }

    #[test]
    fn test_exp() {
        for exp in Bid32::ETINY..=Bid32::QMAX {
            let d = Bid32::new(0, exp as i16);
            let got = d.unbiased_exp();
            assert_eq!(got, exp, "(1) d={:012b}", d.to_bits() >> (32 - 12));
            assert_eq!(d.coeff(), 0, "#{exp}");

            let d = Bid32::new(Bid32::MAX_COEFF as i32, exp as i16);
            let got = d.unbiased_exp();
            assert_eq!(got, exp, "(2) d={:012b}", d.to_bits() >> (32 - 12));
            assert_eq!(d.coeff(), Bid32::MAX_COEFF, "#{exp}");
        }
    }

    #[test]
    fn test_from_u32() {
        let tests = [
            (0, "0"),
            (9_999_999, "9999999"),
            (10_000_000, "1.000000E+7"),
            // Ties round to even.
            (12_345_675, "1.234568E+7"),
            (12_345_685, "1.234568E+7"),
            (123_456_789, "1.234568E+8"),
            (u32::MAX, "4.294967E+9"),
        ];
        for (i, (x, want)) in tests.into_iter().enumerate() {
            assert_eq!(Bid32::from_u32(x).to_string(), want, "#{i}");
        }
    }

    #[test]
    fn test_digits() {
        for i in 1..Bid32::DIGITS {
            let v = 10i32.pow(i);
            let got = Bid32::new(v - 1, 0).digits();
            let want = v.ilog10();
            assert_eq!(got, want, "#{}", v - 1);
        }
    }

    #[test]
    fn test_new_clamps() {
        // Too large.
        assert!(Bid32::new(100, 10_000).is_infinite());
        assert!(Bid32::new(-100, 10_000).is_sign_negative());
        // Too small.
        let x = Bid32::new(100, -10_000);
        assert!(x.is_zero());
        assert_eq!(x.exponent(), Some(-101));

        // Fold-down: the exponent is above `QMAX`, so the
        // coefficient is padded with zeros.
        let x = Bid32::new(1, 96);
        assert_eq!(x.to_parts(), Some((false, 1_000_000, 90)));
        assert_eq!(x.to_string(), "1.000000E+96");
        assert!(Bid32::new(10, 96).is_infinite());
    }

    #[test]
    fn test_ties_to_even() {
        let tests = [
            ("1234567.50", "1234568"),
            ("1234568.50", "1234568"),
            ("1234567.49", "1234567"),
            ("1234567.51", "1234568"),
            ("-1234567.50", "-1234568"),
        ];
        for (i, (input, want)) in tests.into_iter().enumerate() {
            let mut ctx = Ctx::<Bid32>::new();
            let got = ctx.parse(input).unwrap();
            assert_eq!(got.to_string(), want, "#{i}");
            assert_eq!(ctx.status(), Condition::INEXACT | Condition::ROUNDED, "#{i}");
        }

        let mut ctx = Ctx::<Bid32>::new().with_rounding_mode(RoundingMode::ToNearestAway);
        assert_eq!(ctx.parse("1234568.50").unwrap().to_string(), "1234569");
        assert_eq!(ctx.parse("-1234568.50").unwrap().to_string(), "-1234569");
    }

    #[test]
    fn test_directed_add() {
        use RoundingMode::*;

        let tests = [
            (ToPositiveInf, "-1e+2", "1e-20", "-99.99999"),
            (ToNegativeInf, "-1e+2", "1e-20", "-100.0000"),
            (ToPositiveInf, "1", "1e-20", "1.000001"),
            (ToNegativeInf, "1", "1e-20", "1.000000"),
            (ToZero, "1", "-1e-20", "0.9999999"),
            (ToNearestEven, "1", "-1e-20", "1.000000"),
            (ToNegativeInf, "5e+50", "-4e+40", "4.999999E+50"),
            (ToPositiveInf, "5e+50", "4e+40", "5.000001E+50"),
            (ToNearestEven, "5e+50", "4e+40", "5.000000E+50"),
        ];
        for (i, (mode, lhs, rhs, want)) in tests.into_iter().enumerate() {
            let mut ctx = Ctx::<Bid32>::new().with_rounding_mode(mode);
            let got = ctx.add(d(lhs), d(rhs));
            assert_eq!(got.to_string(), want, "#{i}: {lhs} + {rhs} ({mode:?})");
            assert!(ctx.status().contains(Condition::INEXACT), "#{i}");
        }
    }

    #[test]
    fn test_add_exact() {
        let tests = [
            ("1", "1", "2"),
            ("1.23", "1.27", "2.50"),
            ("1E+2", "1E+4", "1.01E+4"),
            ("-5", "5", "0"),
            ("-0", "-0", "-0"),
            ("-0", "0", "0"),
            ("0E+3", "1.5", "1.5"),
            ("7.5", "0E-5", "7.50000"),
        ];
        for (i, (lhs, rhs, want)) in tests.into_iter().enumerate() {
            let mut ctx = Ctx::<Bid32>::new();
            let got = ctx.add(d(lhs), d(rhs));
            assert_eq!(got.to_string(), want, "#{i}: {lhs} + {rhs}");
            assert_eq!(ctx.status(), Condition::empty(), "#{i}");
        }

        // An exact zero is negative when rounding toward -inf.
        let mut ctx = Ctx::<Bid32>::new().with_rounding_mode(RoundingMode::ToNegativeInf);
        assert_eq!(ctx.add(d("-5"), d("5")).to_string(), "-0");
    }

    #[test]
    fn test_overflow() {
        use RoundingMode::*;

        let ten = Bid32::from_u32(10);
        let tests = [
            (ToNearestEven, Bid32::MAX, "Infinity"),
            (ToNearestAway, Bid32::MAX, "Infinity"),
            (ToZero, Bid32::MAX, "9.999999E+96"),
            (ToNegativeInf, Bid32::MAX, "9.999999E+96"),
            (ToPositiveInf, Bid32::MAX, "Infinity"),
            (ToNegativeInf, Bid32::MIN, "-Infinity"),
            (ToPositiveInf, Bid32::MIN, "-9.999999E+96"),
        ];
        for (i, (mode, x, want)) in tests.into_iter().enumerate() {
            let mut ctx = Ctx::<Bid32>::new().with_rounding_mode(mode);
            let got = ctx.mul(x, ten);
            assert_eq!(got.to_string(), want, "#{i}");
            assert_eq!(
                ctx.status(),
                Condition::OVERFLOW | Condition::INEXACT | Condition::ROUNDED,
                "#{i}"
            );
        }
    }

    #[test]
    fn test_underflow() {
        let ten = Bid32::new(1, 1);

        // Exact subnormal.
        let mut ctx = Ctx::<Bid32>::new();
        let x = ctx.div(Bid32::MIN_POSITIVE, ten);
        assert_eq!(x.to_string(), "1E-96");
        assert!(x.is_subnormal());
        assert_eq!(ctx.status(), Condition::SUBNORMAL);

        // Rounds to zero.
        let mut ctx = Ctx::<Bid32>::new();
        let x = ctx.div(d("1E-101"), ten);
        assert_eq!(x.to_string(), "0E-101");
        assert_eq!(
            ctx.status(),
            Condition::UNDERFLOW | Condition::SUBNORMAL | Condition::INEXACT | Condition::ROUNDED
        );

        let mut ctx = Ctx::<Bid32>::new();
        let x = ctx.mul(d("1E-60"), d("1E-60"));
        assert_eq!(x.to_string(), "0E-101");
        assert!(ctx.status().contains(Condition::UNDERFLOW));
    }

    #[test]
    fn test_mul_div() {
        let tests = [
            ("1.20", "3", '*', "3.60"),
            ("-2", "4.5", '*', "-9.0"),
            ("0", "-7", '*', "-0"),
            ("1", "8", '/', "0.125"),
            ("12", "4", '/', "3"),
            ("2.400", "2.0", '/', "1.20"),
            ("1", "3", '/', "0.3333333"),
            ("2", "3", '/', "0.6666667"),
            ("-1", "3", '/', "-0.3333333"),
            ("0", "5", '/', "0"),
            ("0.00", "5", '/', "0.00"),
        ];
        for (i, (lhs, rhs, op, want)) in tests.into_iter().enumerate() {
            let mut ctx = Ctx::<Bid32>::new();
            let got = match op {
                '*' => ctx.mul(d(lhs), d(rhs)),
                _ => ctx.div(d(lhs), d(rhs)),
            };
            assert_eq!(got.to_string(), want, "#{i}: {lhs} {op} {rhs}");
        }
    }

    #[test]
    fn test_rem() {
        let tests = [
            ("2.1", "3", "2.1"),
            ("10", "3", "1"),
            ("-10", "3", "-1"),
            ("10.2", "1", "0.2"),
            ("10", "0.3", "0.1"),
            ("3.6", "1.3", "1.0"),
            ("1", "Infinity", "1"),
            ("0", "3", "0"),
        ];
        for (i, (lhs, rhs, want)) in tests.into_iter().enumerate() {
            let mut ctx = Ctx::<Bid32>::new();
            let got = ctx.rem(d(lhs), d(rhs));
            assert_eq!(got.to_string(), want, "#{i}: {lhs} % {rhs}");
            assert_eq!(ctx.status(), Condition::empty(), "#{i}");
        }

        for (lhs, rhs) in [("1", "0"), ("Infinity", "1"), ("0", "0")] {
            let mut ctx = Ctx::<Bid32>::new();
            assert!(ctx.rem(d(lhs), d(rhs)).is_nan(), "{lhs} % {rhs}");
            assert!(ctx.status().contains(Condition::INVALID_OPERATION));
        }
    }

    #[test]
    fn test_specials() {
        let mut ctx = Ctx::<Bid32>::new();
        assert!(ctx.sub(Bid32::INFINITY, Bid32::INFINITY).is_nan());
        assert_eq!(ctx.status(), Condition::INVALID_OPERATION);

        let mut ctx = Ctx::<Bid32>::new();
        assert!(ctx.mul(Bid32::INFINITY, Bid32::ZERO).is_nan());
        assert_eq!(ctx.status(), Condition::INVALID_OPERATION);

        let mut ctx = Ctx::<Bid32>::new();
        let x = ctx.div(Bid32::ONE.copy_neg(), Bid32::ZERO);
        assert_eq!(x, Bid32::NEG_INFINITY);
        assert_eq!(ctx.status(), Condition::DIVISION_BY_ZERO);

        let mut ctx = Ctx::<Bid32>::new();
        assert!(ctx.div(Bid32::ZERO, Bid32::ZERO).is_nan());
        assert_eq!(
            ctx.status(),
            Condition::DIVISION_UNDEFINED | Condition::INVALID_OPERATION
        );

        let mut ctx = Ctx::<Bid32>::new();
        assert_eq!(ctx.div(d("5"), Bid32::INFINITY).to_string(), "0E-101");
        assert_eq!(ctx.add(Bid32::INFINITY, Bid32::MAX), Bid32::INFINITY);
        assert_eq!(ctx.status(), Condition::empty());
    }

    #[test]
    fn test_nan_propagation() {
        let tests = [
            ("NaN5", "sNaN7", "NaN7", true),
            ("sNaN7", "NaN5", "NaN7", true),
            ("-NaN3", "NaN4", "-NaN3", false),
            ("1", "-NaN4", "-NaN4", false),
            ("-sNaN", "1", "-NaN", true),
        ];
        for (i, (lhs, rhs, want, invalid)) in tests.into_iter().enumerate() {
            let mut ctx = Ctx::<Bid32>::new();
            let got = ctx.add(d(lhs), d(rhs));
            assert!(got.is_qnan(), "#{i}");
            assert_eq!(got.to_string(), want, "#{i}");
            assert_eq!(
                ctx.status().contains(Condition::INVALID_OPERATION),
                invalid,
                "#{i}"
            );
        }
    }

    #[test]
    fn test_quantize() {
        let tests = [
            ("2.17", "0.001", "2.170", false),
            ("2.17", "0.01", "2.17", false),
            ("2.17", "0.1", "2.2", true),
            ("2.17", "1e+0", "2", true),
            ("-0.1", "1", "-0", true),
            ("217", "1e-1", "217.0", false),
            ("0", "1e+5", "0E+5", false),
            ("Infinity", "-Infinity", "Infinity", false),
        ];
        for (i, (lhs, rhs, want, inexact)) in tests.into_iter().enumerate() {
            let mut ctx = Ctx::<Bid32>::new();
            let got = ctx.quantize(d(lhs), d(rhs));
            assert_eq!(got.to_string(), want, "#{i}: quantize({lhs}, {rhs})");
            assert_eq!(ctx.status().contains(Condition::INEXACT), inexact, "#{i}");
        }

        for (lhs, rhs) in [("1234567", "0.1"), ("1", "Infinity"), ("-Infinity", "1")] {
            let mut ctx = Ctx::<Bid32>::new();
            assert!(ctx.quantize(d(lhs), d(rhs)).is_nan(), "quantize({lhs}, {rhs})");
            assert!(ctx.status().contains(Condition::INVALID_OPERATION));
        }
    }

    #[test]
    fn test_round_to_integral() {
        use RoundingMode::*;

        let tests = [
            ("2.5", ToNearestEven, "2"),
            ("3.5", ToNearestEven, "4"),
            ("2.5", ToNearestAway, "3"),
            ("-2.5", ToNearestAway, "-3"),
            ("2.7", ToZero, "2"),
            ("-2.1", ToNegativeInf, "-3"),
            ("-2.1", ToPositiveInf, "-2"),
            ("0.0001", ToPositiveInf, "1"),
            ("123E+3", ToZero, "1.23E+5"),
            ("-0.4", ToNearestEven, "-0"),
        ];
        for (i, (input, mode, want)) in tests.into_iter().enumerate() {
            let got = d(input).round_to_integral(mode);
            assert_eq!(got.to_string(), want, "#{i}: {input} ({mode:?})");
        }
        assert_eq!(d("-7.5").trunc().to_string(), "-7");
        assert_eq!(d("-7.5").floor().to_string(), "-8");
        assert_eq!(d("-7.5").ceil().to_string(), "-7");
        assert_eq!(d("-7.5").round().to_string(), "-8");
        assert_eq!(d("6.5").round_ties_even().to_string(), "6");
    }

    #[test]
    fn test_rounding_idempotent() {
        use rand::{thread_rng, Rng};
        use RoundingMode::*;

        let mut rng = thread_rng();
        for _ in 0..10_000 {
            let x = Bid32::pack(
                rng.gen(),
                rng.gen_range(Bid32::ETINY..=Bid32::QMAX),
                rng.gen_range(0..=Bid32::MAX_COEFF),
            );
            let y = Bid32::pack(false, rng.gen_range(Bid32::ETINY..=Bid32::QMAX), 1);
            for mode in [ToNearestEven, ToNearestAway, ToZero, ToNegativeInf, ToPositiveInf] {
                let (once, _) = x.round_to_integral_with(mode);
                let (twice, cond) = once.round_to_integral_with(mode);
                assert_eq!(twice.to_bits(), once.to_bits(), "{x} ({mode})");
                assert_eq!(cond, Condition::empty(), "{x} ({mode})");

                let (once, _) = x.quantize_with(y, mode);
                if once.is_nan() {
                    continue;
                }
                let (twice, cond) = once.quantize_with(y, mode);
                assert_eq!(twice.to_bits(), once.to_bits(), "{x}, {y} ({mode})");
                assert_eq!(cond, Condition::empty(), "{x}, {y} ({mode})");
            }

            let (sign, coeff, exp) = x.to_parts().unwrap();
            assert_eq!(Bid32::from_parts(sign, coeff, exp).to_bits(), x.to_bits(), "{x}");
        }
    }

    #[test]
    fn test_next() {
        assert_eq!(Bid32::ONE.next_plus().to_string(), "1.000001");
        assert_eq!(Bid32::ONE.next_minus().to_string(), "0.9999999");
        assert_eq!(Bid32::ZERO.next_plus().to_string(), "1E-101");
        assert_eq!(Bid32::ZERO.next_minus().to_string(), "-1E-101");
        assert_eq!(d("-1E-101").next_plus().to_string(), "-0E-101");
        assert_eq!(d("1E-101").next_minus().to_string(), "0E-101");
        assert_eq!(Bid32::MAX.next_plus(), Bid32::INFINITY);
        assert_eq!(Bid32::INFINITY.next_minus(), Bid32::MAX);
        assert_eq!(Bid32::NEG_INFINITY.next_plus(), Bid32::MIN);
        assert_eq!(Bid32::NEG_INFINITY.next_minus(), Bid32::NEG_INFINITY);
        assert!(Bid32::NAN.next_plus().is_nan());
    }

    #[test]
    fn test_partial_cmp() {
        let tests = [
            ("NaN", "3", None),
            ("3", "NaN", None),
            ("2.1", "3", Some(Ordering::Less)),
            ("2.1", "2.1", Some(Ordering::Equal)),
            ("2.1", "2.10", Some(Ordering::Equal)),
            ("3", "2.1", Some(Ordering::Greater)),
            ("2.1", "-3", Some(Ordering::Greater)),
            ("-3", "2.1", Some(Ordering::Less)),
            ("-0", "0", Some(Ordering::Equal)),
            ("1E+90", "9999999", Some(Ordering::Greater)),
            ("-Infinity", "-9.999999E+96", Some(Ordering::Less)),
        ];
        for (i, (lhs, rhs, want)) in tests.into_iter().enumerate() {
            let x = d(lhs);
            let y = d(rhs);
            let got = PartialOrd::partial_cmp(&x, &y);
            assert_eq!(got, want, "#{i}: partial_cmp({lhs}, {rhs})");
            assert_eq!(
                x.const_partial_cmp(y),
                want,
                "#{i}: const_partial_cmp({lhs}, {rhs})"
            );
        }

        assert_eq!(d("2.1").compare(d("3")).to_string(), "-1");
        assert_eq!(d("2.10").compare(d("2.1")).to_string(), "0");
        assert!(d("NaN").compare(d("1")).is_nan());

        let mut ctx = Ctx::<Bid32>::new();
        assert!(ctx.compare(d("NaN"), d("1")).is_nan());
        assert_eq!(ctx.status(), Condition::empty());
        assert!(ctx.compare_signal(d("NaN"), d("1")).is_nan());
        assert_eq!(ctx.status(), Condition::INVALID_OPERATION);
    }

    #[test]
    fn test_total_cmp() {
        // In increasing order.
        let tests = [
            "-NaN2", "-NaN1", "-sNaN", "-Infinity", "-1", "-1.0", "-1E-101", "-0", "-0E-101",
            "0E-101", "0", "0E+3", "1E-101", "1.0", "1", "Infinity", "sNaN", "NaN", "NaN1",
        ];
        for (i, pair) in tests.windows(2).enumerate() {
            let x = d(pair[0]);
            let y = d(pair[1]);
            assert_eq!(x.total_cmp(y), Ordering::Less, "#{i}: {} < {}", pair[0], pair[1]);
            assert_eq!(y.total_cmp(x), Ordering::Greater, "#{i}: {} > {}", pair[1], pair[0]);
            assert_eq!(x.total_cmp(x), Ordering::Equal, "#{i}");
        }
        assert_eq!(d("-2").total_cmp_magnitude(d("1")), Ordering::Greater);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(d("1").max(d("2")).to_string(), "2");
        assert_eq!(d("1").min(d("2")).to_string(), "1");
        assert_eq!(d("NaN").max(d("2")).to_string(), "2");
        assert_eq!(d("2").min(d("NaN")).to_string(), "2");
        assert!(d("NaN").maximum(d("2")).is_nan());
        assert_eq!(d("-0").max(d("0")).to_string(), "0");
        assert_eq!(d("-0").min(d("0")).to_string(), "-0");
    }

    #[test]
    fn test_saturating_to_int() {
        assert_eq!(Bid32::MAX.to_i32(), i32::MAX);
        assert_eq!(Bid32::MIN.to_i64(), i64::MIN);
        assert_eq!(Bid32::NAN.to_i32(), i32::MAX);
        assert_eq!(Bid32::INFINITY.to_u64(), u64::MAX);
        assert_eq!(Bid32::NEG_INFINITY.to_u32(), 0);
        assert_eq!(Bid32::new(-12345, -2).to_i32(), -123);
        assert_eq!(Bid32::new(99, -1).to_u64(), 9);
        assert_eq!(Bid32::new(-99, -1).to_u64(), 0);
        assert_eq!(Bid32::new(42, 3).to_i128(), 42_000);
    }

    #[test]
    fn test_canonical() {
        // The bits between the sixth combination bit and the
        // payload.
        const BITS: u32 = Bid32::W + 5 - 6;
        for x in [
            Bid32::nan(false, Bid32::PAYLOAD_MAX),
            Bid32::snan(true, Bid32::PAYLOAD_MAX),
        ] {
            assert!(x.is_canonical());
            for i in 0..1u32 << BITS {
                let got = Bid32::from_bits(x.to_bits() | i << Bid32::T);
                assert_eq!(i == 0, got.is_canonical(), "#{i}");
                assert!(got.canonical().is_canonical(), "#{i}");
            }
        }

        let x = Bid32::from_bits(Bid32::INFINITY.to_bits() | 1234);
        assert!(!x.is_canonical());
        assert!(x.is_infinite());
        assert_eq!(x.canonical().to_bits(), Bid32::INFINITY.to_bits());
    }

    #[test]
    fn test_classify() {
        let tests = [
            ("1", "+Normal"),
            ("-1E-95", "-Normal"),
            ("1E-96", "+Subnormal"),
            ("-0", "-Zero"),
            ("Infinity", "+Infinity"),
            ("NaN", "NaN"),
            ("sNaN", "sNaN"),
        ];
        for (input, want) in tests {
            assert_eq!(d(input).class(), want, "{input}");
        }
    }
}
