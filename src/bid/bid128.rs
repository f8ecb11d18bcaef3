use core::mem::size_of;

use super::{arith::arith128, base::impl_dec};
use crate::util::const_assert;

/// A 128-bit decimal floating point number.
///
/// (–1)^sign * coefficient * 10^exp
///
/// It has 34 digits of precision and an adjusted exponent in
/// [-6143, 6144].
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Bid128(
    /// ## Form 1
    ///
    /// s 00eeeeeeeeeeee   (0)ttt tttttttttt ... tttttttttt
    /// s 01eeeeeeeeeeee   (0)ttt tttttttttt ... tttttttttt
    /// s 10eeeeeeeeeeee   (0)ttt tttttttttt ... tttttttttt
    ///
    /// ## Form 2
    ///
    /// Every form two coefficient is larger than
    /// `MAX_COEFF`, so it is never canonical.
    ///
    /// s 1100eeeeeeeeeeee (100)t tttttttttt ... tttttttttt
    /// s 1101eeeeeeeeeeee (100)t tttttttttt ... tttttttttt
    /// s 1110eeeeeeeeeeee (100)t tttttttttt ... tttttttttt
    u128,
);
const_assert!(size_of::<Bid128>() == 128 / 8);

impl_dec! {
    name = Bid128,
    ucoeff = u128,
    icoeff = i128,
    biased_exp = u16,
    unbiased_exp = i16,
    arith = arith128,
    dpd = crate::dpd::Dpd128,
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use super::*;
    use crate::ctx::{Condition, Ctx, RoundingMode, ROUNDING_CONST};

    fn d(s: &str) -> Bid128 {
        Bid128::parse_lit(s)
    }

    #[test]
    fn test_consts() {
        assert_eq!(Bid128::P, 34);
        assert_eq!(Bid128::EMAX, 6144);
        assert_eq!(Bid128::EMIN, -6143);
        assert_eq!(Bid128::QMAX, 6111);
        assert_eq!(Bid128::ETINY, -6176);
        assert_eq!(Bid128::BIAS, 6176);
        assert_eq!(Bid128::MAX_COEFF, 10u128.pow(34) - 1);
        assert_eq!(
            Bid128::MAX.to_string(),
            "9.999999999999999999999999999999999E+6144"
        );
        assert_eq!(
            Bid128::MIN.to_string(),
            "-9.999999999999999999999999999999999E+6144"
        );
        assert_eq!(Bid128::MIN_POSITIVE.to_string(), "1E-6143");
        assert_eq!(Bid128::ZERO.to_bits(), 0x3040 << 112);
    }

    #[test]
    fn test_exp() {
        for exp in Bid128::ETINY..=Bid128::QMAX {
            let d = Bid128::new(0, exp as i16);
            assert_eq!(d.unbiased_exp(), exp, "#{exp}");
            assert_eq!(d.coeff(), 0, "#{exp}");

            let d = Bid128::new(Bid128::MAX_COEFF as i128, exp as i16);
            assert_eq!(d.unbiased_exp(), exp, "#{exp}");
            assert_eq!(d.coeff(), Bid128::MAX_COEFF, "#{exp}");
        }
    }

    #[test]
    fn test_from_int() {
        assert_eq!(
            Bid128::from_i128(i128::MAX).to_string(),
            "1.701411834604692317316873037158841E+38"
        );
        assert_eq!(
            Bid128::from_i128(i128::MIN).to_string(),
            "-1.701411834604692317316873037158841E+38"
        );
        assert_eq!(
            Bid128::from_u128(u128::MAX).to_string(),
            "3.402823669209384634633746074317682E+38"
        );
        assert_eq!(Bid128::from_u64(u64::MAX).to_string(), u64::MAX.to_string());
        assert_eq!(Bid128::from_i64(i64::MIN).to_string(), i64::MIN.to_string());
        assert_eq!(Bid128::from_i64(i64::MIN).to_i64(), i64::MIN);
        assert_eq!(
            Bid128::new(i128::MAX, 0).to_i128(),
            170141183460469231731687303715884100000
        );
        assert_eq!(d("1E+40").to_i128(), i128::MAX);
        assert_eq!(d("-1E+40").to_i128(), i128::MIN);
        assert_eq!(d("-1E+40").to_u128(), 0);
        assert_eq!(d("1E+38").to_u128(), 10u128.pow(38));
        assert_eq!(d("-12.99").to_i128(), -12);
    }

    #[test]
    fn test_wide_mul() {
        let max = Bid128::new(Bid128::MAX_COEFF as i128, 0);
        let mut ctx = Ctx::<Bid128>::new();
        let got = ctx.mul(max, max);
        assert_eq!(got.to_string(), "9.999999999999999999999999999999998E+67");
        assert_eq!(ctx.status(), Condition::INEXACT | Condition::ROUNDED);

        let mut ctx = Ctx::<Bid128>::new();
        let got = ctx.mul(d("1E+3000"), d("1E+3145"));
        assert_eq!(got.to_string(), "Infinity");
        assert!(ctx.status().contains(Condition::OVERFLOW));
    }

    #[test]
    fn test_sticky_add() {
        let mut ctx = Ctx::<Bid128>::new().with_rounding_mode(RoundingMode::ToPositiveInf);
        let got = ctx.add(d("1"), d("1E-40"));
        assert_eq!(got.to_string(), format!("1.{}1", "0".repeat(32)));
        assert_eq!(ctx.status(), Condition::INEXACT | Condition::ROUNDED);

        let mut ctx = Ctx::<Bid128>::new();
        let got = ctx.add(d("1"), d("1E-40"));
        assert_eq!(got.to_string(), format!("1.{}", "0".repeat(33)));
        assert_eq!(ctx.status(), Condition::INEXACT | Condition::ROUNDED);
    }

    #[test]
    fn test_div() {
        let mut ctx = Ctx::<Bid128>::new();
        let one = Bid128::ONE;
        let three = Bid128::from_u32(3);
        assert_eq!(ctx.div(one, three).to_string(), format!("0.{}", "3".repeat(34)));
        assert_eq!(
            ctx.div(Bid128::from_u32(2), three).to_string(),
            format!("0.{}7", "6".repeat(33))
        );
        assert_eq!(ctx.div(d("1"), d("8")).to_string(), "0.125");
        assert_eq!(ctx.div(d("1E+6000"), d("1E-100")).to_string(), "1E+6100");
        assert_eq!(ctx.div(d("1E+6000"), d("1E-200")).to_string(), "Infinity");
    }

    #[test]
    fn test_rem() {
        let mut ctx = Ctx::<Bid128>::new();
        // 10^6 ≡ 1 (mod 7)
        assert_eq!(ctx.rem(d("1E+6000"), d("7")).to_string(), "1");
        assert_eq!(ctx.rem(d("7.5"), d("2")).to_string(), "1.5");
        assert_eq!(ctx.status(), Condition::empty());

        assert!(ctx.rem(d("1"), d("0")).is_nan());
        assert_eq!(ctx.status(), Condition::INVALID_OPERATION);

        let mut ctx = Ctx::<Bid128>::new();
        assert!(ctx.rem(d("0"), d("0")).is_nan());
        assert_eq!(ctx.status(), Condition::DIVISION_UNDEFINED | Condition::INVALID_OPERATION);
    }

    #[test]
    fn test_canonical_specials() {
        // Bits below the NaN's top six combination bits but
        // above the payload.
        for i in 1..(1u128 << (Bid128::W - 1)) {
            let x = Bid128::from_bits(Bid128::NAN.to_bits() | (i << Bid128::T));
            assert!(x.is_nan());
            assert!(!x.is_canonical(), "#{i}");
            assert_eq!(x.canonical().to_bits(), Bid128::NAN.to_bits(), "#{i}");
        }
        // Bits below the infinity's top five combination bits.
        for i in 1..(1u128 << Bid128::W) {
            for coeff in [0, 1234, Bid128::PAYLOAD_MASK] {
                let x = Bid128::from_bits(Bid128::INFINITY.to_bits() | (i << Bid128::T) | coeff);
                assert!(x.is_infinite());
                assert!(!x.is_canonical(), "#{i}");
                assert_eq!(x.canonical().to_bits(), Bid128::INFINITY.to_bits(), "#{i}");
            }
        }
        assert!(Bid128::INFINITY.is_canonical());
        assert!(Bid128::NAN.is_canonical());
        assert!(d("-sNaN123").is_canonical());
    }

    #[test]
    fn test_total_cmp() {
        assert!(Bid128::NAN.special_ord() > Bid128::snan(false, 0).special_ord());
        assert!(Bid128::snan(false, 0).special_ord() > Bid128::INFINITY.special_ord());
        assert!(Bid128::INFINITY.special_ord() > Bid128::MAX.special_ord());

        let ordered = [
            "-NaN",
            "-sNaN",
            "-Infinity",
            "-1E+10",
            "-1",
            "-1.0",
            "-0",
            "-0.00",
            "0.00",
            "0",
            "1.0",
            "1",
            "1E+10",
            "Infinity",
            "sNaN",
            "sNaN1",
            "NaN",
            "NaN1",
        ];
        for pair in ordered.windows(2) {
            let (a, b) = (d(pair[0]), d(pair[1]));
            assert_eq!(a.total_cmp(b), Ordering::Less, "{} < {}", pair[0], pair[1]);
            assert_eq!(b.total_cmp(a), Ordering::Greater, "{} > {}", pair[1], pair[0]);
        }
        for s in ordered {
            assert_eq!(d(s).total_cmp(d(s)), Ordering::Equal, "{s}");
        }
    }

    #[test]
    fn test_from_f64() {
        let mut ctx = Ctx::<Bid128>::new();
        assert_eq!(ctx.from_f64(1.0 / 3.0).to_string(), "0.3333333333333333");
        assert_eq!(ctx.from_f64(1e-300).to_string(), "1E-300");
        assert_eq!(ctx.from_f64(f64::MAX).to_string(), "1.7976931348623157E+308");
        assert_eq!(ctx.status(), Condition::empty());
    }

    #[test]
    fn test_dpd() {
        let x = d("-1234567890123456789012345678901234E-50");
        let dpd = x.to_dpd();
        assert_eq!(Bid128::from_dpd(dpd).to_bits(), x.to_bits());
        assert_eq!(dpd.to_string(), x.to_string());
    }

    #[test]
    fn test_const_items() {
        const SEVEN: Bid128 = Bid128::from_u32(7);
        const SEVENTH: Bid128 = Bid128::ONE.const_div(SEVEN);
        const REM: Bid128 = Bid128::new(1, 6000).const_rem(SEVEN);
        const BIG: Bid128 = Bid128::new(9_999_999_999_999_999_999_999_999_999_999_999, 0);
        const ROUNDED: Bid128 = BIG.const_add(Bid128::new(5, -1));

        let mut ctx = Ctx::<Bid128>::new().with_rounding_mode(ROUNDING_CONST);
        assert_eq!(SEVENTH.to_bits(), ctx.div(Bid128::ONE, SEVEN).to_bits());
        assert_eq!(ROUNDED.to_bits(), ctx.add(BIG, d("0.5")).to_bits());
        assert_eq!(REM.to_string(), "1");
    }
}
