macro_rules! impl_atod {
    ($name:ident, $ucoeff:ty, $arith:ident) => {
        impl $name {
            /// Parses a decimal from a string, rounding with the
            /// process-wide rounding mode.
            ///
            /// The accepted syntax is
            ///
            /// ```text
            /// sign      ::= '+' | '-'
            /// digits    ::= digit [digit]...
            /// decimal   ::= digits '.' [digits] | ['.'] digits
            /// exponent  ::= ('e' | 'E') [sign] digits
            /// infinity  ::= 'Infinity' | 'Inf'
            /// nan       ::= 'NaN' [digits] | 'sNaN' [digits]
            /// numeric   ::= decimal [exponent] | infinity
            /// string    ::= [sign] (numeric | nan)
            /// ```
            ///
            /// Special values are case insensitive.
            pub fn parse(s: &str) -> Result<Self, $crate::conv::ParseError> {
                match Self::parse_with(s, $crate::ctx::rounding_mode()) {
                    Ok((v, _)) => Ok(v),
                    Err(err) => Err(err),
                }
            }

            /// Parses a decimal literal, rounding with
            /// [`ROUNDING_CONST`][crate::ROUNDING_CONST].
            ///
            /// # Panics
            ///
            /// Panics if `s` is not a valid decimal, unless the
            /// `nan-on-parse-error` feature is enabled, in which
            /// case it returns NaN.
            #[track_caller]
            pub fn parse_lit(s: &str) -> Self {
                match Self::parse_with(s, $crate::ctx::ROUNDING_CONST) {
                    Ok((v, _)) => v,
                    Err(_) if cfg!(feature = "nan-on-parse-error") => Self::NAN,
                    Err(err) => panic!("invalid decimal literal `{s}`: {err}"),
                }
            }

            pub(crate) fn parse_with(
                s: &str,
                mode: $crate::ctx::RoundingMode,
            ) -> Result<(Self, $crate::ctx::Condition), $crate::conv::ParseError> {
                use $crate::conv::ParseError;

                let mut s = s.as_bytes();
                if s.is_empty() {
                    return Err(ParseError::empty());
                }

                let mut sign = false;
                if let Some((c @ (b'-' | b'+'), rest)) = s.split_first() {
                    sign = *c == b'-';
                    s = rest;
                }

                match s.first() {
                    Some(b'0'..=b'9' | b'.') => {}
                    Some(b'i' | b'I' | b'n' | b'N' | b's' | b'S') => {
                        let v = Self::parse_special(sign, s)?;
                        return Ok((v, $crate::ctx::Condition::empty()));
                    }
                    Some(_) => return Err(ParseError::invalid("expected digit or special")),
                    None => return Err(ParseError::invalid("unexpected end of input")),
                }

                let (coeff, sticky, shift, rest) = Self::parse_coeff(s)?;
                let exp = Self::parse_exp(rest)?;
                // Bound the exponent so that the rounding
                // arithmetic cannot overflow. Anything this far
                // out of range rounds the same way.
                const LIMIT: i64 = 100_000_000;
                let exp = (exp as i64 + shift).clamp(-LIMIT, LIMIT) as i32;
                Ok(Self::finalize(sign, exp, coeff, sticky, mode))
            }

            /// Parses the coefficient.
            ///
            /// It returns the significant digits, whether any
            /// non-zero digit did not fit, the adjustment to the
            /// exponent, and the unused remainder of the input.
            fn parse_coeff(
                s: &[u8],
            ) -> Result<($arith::Wide, bool, i64, &[u8]), $crate::conv::ParseError> {
                // Keep one digit of headroom for rounding.
                const MAX_DIGITS: usize = ($arith::WIDE_DIGITS - 1) as usize;

                let mut coeff = $arith::WIDE_ZERO;
                let mut sig = 0;
                let mut sticky = false;
                // Integer digits that did not fit.
                let mut dropped: i64 = 0;
                // Fraction digits that did fit.
                let mut frac: i64 = 0;
                let mut digits = 0;
                let mut dot = false;
                let mut i = 0;
                while let Some(&c) = s.get(i) {
                    match c {
                        b'0'..=b'9' => {
                            digits += 1;
                            let d = c - b'0';
                            if sig < MAX_DIGITS {
                                // Leading zeros are not
                                // significant.
                                if sig > 0 || d != 0 {
                                    coeff = $arith::wide_add(
                                        $arith::wide_mul_small(coeff, 10),
                                        $arith::wide_from(d as $ucoeff),
                                    );
                                    sig += 1;
                                }
                                if dot {
                                    frac += 1;
                                }
                            } else {
                                sticky |= d != 0;
                                if !dot {
                                    dropped += 1;
                                }
                            }
                        }
                        b'.' if !dot => dot = true,
                        _ => break,
                    }
                    i += 1;
                }
                if digits == 0 {
                    return Err($crate::conv::ParseError::invalid("expected digit"));
                }
                let rest = s.get(i..).unwrap_or_default();
                Ok((coeff, sticky, dropped - frac, rest))
            }

            /// Parses the exponent, including the leading `e` or
            /// `E`.
            ///
            /// Large exponents are clamped to
            /// ±1,000,000.
            const fn parse_exp(mut s: &[u8]) -> Result<i32, $crate::conv::ParseError> {
                use $crate::conv::ParseError;

                const MAX: i32 = 1_000_000;

                if s.is_empty() {
                    return Ok(0);
                }

                if let Some((b'e' | b'E', rest)) = s.split_first() {
                    s = rest;
                } else {
                    return Err(ParseError::invalid("expected `e` or `E`"));
                }

                let mut sign = false;
                if let Some((c @ (b'-' | b'+'), rest)) = s.split_first() {
                    sign = *c == b'-';
                    s = rest;
                }
                if s.is_empty() {
                    return Err(ParseError::invalid("expected exponent digits"));
                }

                let mut exp: i32 = 0;
                while let Some((&c, rest)) = s.split_first() {
                    let d = c.wrapping_sub(b'0');
                    if d >= 10 {
                        return Err(ParseError::invalid("expected digit"));
                    }
                    if exp < MAX {
                        exp = exp * 10 + d as i32;
                    }
                    s = rest;
                }
                if exp > MAX {
                    exp = MAX;
                }
                if sign {
                    exp = -exp;
                }
                Ok(exp)
            }

            /// Parses a special from `s`.
            ///
            /// The sign has already been parsed.
            const fn parse_special(
                sign: bool,
                s: &[u8],
            ) -> Result<Self, $crate::conv::ParseError> {
                use $crate::{conv::ParseError, util::equal_fold_ascii};

                if equal_fold_ascii(s, b"inf") || equal_fold_ascii(s, b"infinity") {
                    return Ok(Self::inf(sign));
                }

                const fn atoi(mut s: &[u8]) -> Result<$ucoeff, ParseError> {
                    let mut n: $ucoeff = 0;
                    while let Some((&c, rest)) = s.split_first() {
                        let d = c.wrapping_sub(b'0');
                        if d >= 10 {
                            return Err(ParseError::invalid("expected digit"));
                        }
                        n = match n.checked_mul(10) {
                            Some(n) => n,
                            None => return Err(ParseError::invalid("payload overflow")),
                        };
                        n = match n.checked_add(d as $ucoeff) {
                            Some(n) => n,
                            None => return Err(ParseError::invalid("payload overflow")),
                        };
                        s = rest;
                    }
                    if n > $name::PAYLOAD_MAX {
                        return Err(ParseError::invalid("payload too large"));
                    }
                    Ok(n)
                }

                if let Some((chunk, rest)) = s.split_first_chunk::<4>() {
                    if equal_fold_ascii(chunk, b"snan") {
                        return match atoi(rest) {
                            Ok(payload) => Ok(Self::snan(sign, payload)),
                            Err(err) => Err(err),
                        };
                    }
                }

                if let Some((chunk, rest)) = s.split_first_chunk::<3>() {
                    if equal_fold_ascii(chunk, b"nan") {
                        return match atoi(rest) {
                            Ok(payload) => Ok(Self::nan(sign, payload)),
                            Err(err) => Err(err),
                        };
                    }
                }

                Err(ParseError::invalid("unknown special"))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::conv::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::parse(s)
            }
        }
    };
}
pub(crate) use impl_atod;
