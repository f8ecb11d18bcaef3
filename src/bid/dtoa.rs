macro_rules! impl_dtoa {
    ($name:ident) => {
        impl $name {
            /// Converts the decimal to a string.
            ///
            /// The default format is IEEE 754 "to-scientific-string":
            /// numbers with a non-positive exponent and an
            /// adjusted exponent of at least -6 are printed
            /// without an exponent.
            pub(crate) fn format_with(
                self,
                dst: &mut $crate::conv::Buffer,
                fmt: $crate::conv::Fmt,
            ) -> &str {
                use $crate::conv::Fmt;

                dst.clear();
                if self.signbit() {
                    dst.push(b'-');
                }

                if self.is_special() {
                    if self.is_infinite() {
                        dst.extend(b"Infinity");
                        return dst.as_str();
                    }
                    let s: &[u8] = if self.is_snan() { b"sNaN" } else { b"NaN" };
                    dst.extend(s);
                    let payload = self.payload();
                    if payload != 0 {
                        let mut tmp = itoa::Buffer::new();
                        dst.extend(tmp.format(payload).as_bytes());
                    }
                    return dst.as_str();
                }
                debug_assert!(self.is_finite());

                let mut tmp = itoa::Buffer::new();
                let coeff = tmp.format(self.coeff()).as_bytes();
                let exp = self.unbiased_exp();
                let adj = exp + coeff.len() as i32 - 1;

                if fmt == Fmt::Default && exp <= 0 && adj >= -6 {
                    // The number of digits before the '.'.
                    let pre = coeff.len() as i32 + exp;
                    if exp == 0 {
                        dst.extend(coeff);
                    } else if pre > 0 {
                        let (int, frac) = coeff.split_at(pre as usize);
                        dst.extend(int);
                        dst.push(b'.');
                        dst.extend(frac);
                    } else {
                        dst.extend(b"0.");
                        for _ in 0..pre.unsigned_abs() {
                            dst.push(b'0');
                        }
                        dst.extend(coeff);
                    }
                    return dst.as_str();
                }

                if let Some((head, tail)) = coeff.split_first() {
                    dst.push(*head);
                    if !tail.is_empty() {
                        dst.push(b'.');
                        dst.extend(tail);
                    }
                }
                dst.push(if fmt == Fmt::LowerExp { b'e' } else { b'E' });
                dst.push(if adj < 0 { b'-' } else { b'+' });
                let mut tmp = itoa::Buffer::new();
                dst.extend(tmp.format(adj.unsigned_abs()).as_bytes());
                dst.as_str()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let mut buf = $crate::conv::Buffer::new();
                f.write_str(buf.format(*self, $crate::conv::Fmt::Default))
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let sign = self.signbit() as u8;
                if self.is_nan() {
                    let kind = if self.is_snan() { "sNaN" } else { "qNaN" };
                    write!(f, "[{sign},{kind},{}]", self.payload())
                } else if self.is_infinite() {
                    write!(f, "[{sign},inf]")
                } else {
                    write!(
                        f,
                        "[{sign},{},{},form={}]",
                        self.coeff(),
                        self.unbiased_exp(),
                        (self.is_form2() as u8) + 1,
                    )
                }
            }
        }

        impl ::core::fmt::Binary for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Binary::fmt(&self.to_bits(), f)
            }
        }

        impl ::core::fmt::LowerExp for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let mut buf = $crate::conv::Buffer::new();
                f.write_str(buf.format(*self, $crate::conv::Fmt::LowerExp))
            }
        }

        impl ::core::fmt::UpperExp for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let mut buf = $crate::conv::Buffer::new();
                f.write_str(buf.format(*self, $crate::conv::Fmt::UpperExp))
            }
        }
    };
}
pub(crate) use impl_dtoa;
