macro_rules! impl_dpd {
    (
        $(#[$meta:meta])*
        name = $name:ident,
        ucoeff = $ucoeff:ty,
        bid = $bid:ty $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $name($ucoeff);

        // Internal stuff.
        impl $name {
            /// The shift needed to reach the five-bit
            /// combination field.
            const COMB_SHIFT: u32 = <$bid>::K - 1 - 5;

            /// Masks the exponent continuation field after
            /// shifting it down.
            const ECON_MASK: $ucoeff = (1 << <$bid>::W) - 1;

            /// Masks the coefficient continuation field.
            const CONT_MASK: $ucoeff = (1 << <$bid>::T) - 1;

            /// The number of declets in the coefficient
            /// continuation field.
            const DECLETS: u32 = <$bid>::T / 10;

            const fn signbit(self) -> bool {
                self.0 >> <$bid>::SIGN_SHIFT != 0
            }

            /// Returns the five-bit combination field.
            const fn comb(self) -> u8 {
                ((self.0 >> Self::COMB_SHIFT) & 0x1f) as u8
            }

            /// Packs the low `3*DECLETS` digits of `bin` into
            /// declets.
            ///
            /// It returns the declets and the remaining high
            /// digits.
            const fn pack_coeff(mut bin: $ucoeff) -> ($ucoeff, $ucoeff) {
                use $crate::dpd::tables::BIN_TO_DPD;

                let mut dpd = 0;
                let mut i = 0;
                while i < Self::DECLETS {
                    let declet = BIN_TO_DPD[(bin % 1000) as usize] as $ucoeff;
                    dpd |= declet << (10 * i);
                    bin /= 1000;
                    i += 1;
                }
                (dpd, bin)
            }

            /// Converts the declets in `dpd` to a binary
            /// number.
            const fn unpack_coeff(dpd: $ucoeff) -> $ucoeff {
                use $crate::dpd::tables::DPD_TO_BIN;

                let mut bin = 0;
                let mut i = Self::DECLETS;
                while i > 0 {
                    i -= 1;
                    let declet = ((dpd >> (10 * i)) & 0x3ff) as usize;
                    bin = bin * 1000 + DPD_TO_BIN[declet] as $ucoeff;
                }
                bin
            }
        }

        impl $name {
            /// Reports whether the number is neither infinite
            /// nor NaN.
            pub const fn is_finite(self) -> bool {
                self.0 & <$bid>::COMB_TOP4 != <$bid>::COMB_TOP4
            }

            /// Reports whether the number is either positive or
            /// negative infinity.
            pub const fn is_infinite(self) -> bool {
                self.0 & <$bid>::COMB_TOP5 == <$bid>::COMB_TOP4
            }

            /// Reports whether the number is a NaN.
            pub const fn is_nan(self) -> bool {
                self.0 & <$bid>::COMB_TOP5 == <$bid>::COMB_TOP5
            }

            /// Reports whether the number is a signaling NaN.
            pub const fn is_snan(self) -> bool {
                self.0 & <$bid>::COMB_TOP6 == <$bid>::COMB_TOP6
            }

            /// Reports whether the number is negative, including
            /// `-0.0`.
            pub const fn is_sign_negative(self) -> bool {
                self.signbit()
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
            pub const fn from_le_bytes(bytes: [u8; <$bid>::BYTES]) -> Self {
                Self(<$ucoeff>::from_le_bytes(bytes))
            }

            /// Creates a number from a big-endian byte array.
            pub const fn from_be_bytes(bytes: [u8; <$bid>::BYTES]) -> Self {
                Self(<$ucoeff>::from_be_bytes(bytes))
            }

            /// Creates a number from a native-endian byte array.
            pub const fn from_ne_bytes(bytes: [u8; <$bid>::BYTES]) -> Self {
                Self(<$ucoeff>::from_ne_bytes(bytes))
            }

            /// Converts the number to a little-endian byte
            /// array.
            pub const fn to_le_bytes(self) -> [u8; <$bid>::BYTES] {
                self.0.to_le_bytes()
            }

            /// Converts the number to a big-endian byte array.
            pub const fn to_be_bytes(self) -> [u8; <$bid>::BYTES] {
                self.0.to_be_bytes()
            }

            /// Converts the number to a native-endian byte
            /// array.
            pub const fn to_ne_bytes(self) -> [u8; <$bid>::BYTES] {
                self.0.to_ne_bytes()
            }

            /// Converts `bid` to a DPD.
            ///
            /// The result is canonical.
            pub const fn from_bid(bid: $bid) -> Self {
                let sign = (bid.signbit() as $ucoeff) << <$bid>::SIGN_SHIFT;
                if bid.is_nan() {
                    let (payload, _) = Self::pack_coeff(bid.payload());
                    let top = if bid.is_snan() {
                        <$bid>::COMB_TOP6
                    } else {
                        <$bid>::COMB_TOP5
                    };
                    return Self(sign | top | payload);
                }
                if bid.is_infinite() {
                    return Self(sign | <$bid>::COMB_TOP4);
                }

                let biased = (bid.unbiased_exp() + <$bid>::BIAS) as $ucoeff;
                let msb = (biased >> <$bid>::W) as u8;
                debug_assert!(msb <= 2);
                let econ = biased & Self::ECON_MASK;

                let (cont, msd) = Self::pack_coeff(bid.coeff());
                let msd = msd as u8;
                debug_assert!(msd <= 9);

                // [0, 7] -> ab 0cde
                // [8, 9] -> 11 ab0e
                let comb = if msd <= 7 {
                    (msb << 3) | msd
                } else {
                    0x18 | (msb << 1) | (msd & 0x1)
                };

                let mut bits = sign;
                bits |= (comb as $ucoeff) << Self::COMB_SHIFT;
                bits |= econ << <$bid>::T;
                bits |= cont;
                Self(bits)
            }

            /// Converts the number to a BID.
            ///
            /// Non-canonical declets are decoded to their
            /// canonical values. NaN payloads are preserved.
            pub const fn to_bid(self) -> $bid {
                let sign = self.signbit();
                let comb = self.comb();
                if comb & 0x1e == 0x1e {
                    if comb & 0x1 == 0 {
                        return <$bid>::inf(sign);
                    }
                    let payload = Self::unpack_coeff(self.0 & Self::CONT_MASK);
                    return if self.is_snan() {
                        <$bid>::snan(sign, payload)
                    } else {
                        <$bid>::nan(sign, payload)
                    };
                }

                // If bits `ab` are both set, then the exponent's
                // MSBs are in bits `cd` and the MSD is `100e`.
                // Otherwise, the MSBs are `ab` and the MSD is
                // `0cde`.
                let (msb, msd) = if comb & 0x18 == 0x18 {
                    ((comb >> 1) & 0x3, 0x8 | (comb & 0x1))
                } else {
                    (comb >> 3, comb & 0x7)
                };
                let econ = (self.0 >> <$bid>::T) & Self::ECON_MASK;
                let biased = ((msb as $ucoeff) << <$bid>::W) | econ;
                let exp = biased as i32 - <$bid>::BIAS;

                // 10^(P-1)
                let scale = <$bid>::PAYLOAD_MAX + 1;
                let coeff = (msd as $ucoeff) * scale + Self::unpack_coeff(self.0 & Self::CONT_MASK);
                <$bid>::pack(sign, exp, coeff)
            }
        }

        impl From<$bid> for $name {
            fn from(bid: $bid) -> Self {
                Self::from_bid(bid)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                PartialEq::eq(&self.to_bid(), &other.to_bid())
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                PartialOrd::partial_cmp(&self.to_bid(), &other.to_bid())
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.to_bid(), f)
            }
        }

        impl ::core::fmt::Binary for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Binary::fmt(&self.0, f)
            }
        }

        impl ::core::fmt::LowerExp for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::LowerExp::fmt(&self.to_bid(), f)
            }
        }

        impl ::core::fmt::UpperExp for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::UpperExp::fmt(&self.to_bid(), f)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(&self.to_bid(), f)
            }
        }

        impl $crate::conv::private::Sealed for $name {
            fn write(self, buf: &mut $crate::conv::Buffer, fmt: $crate::conv::Fmt) -> &str {
                self.to_bid().format_with(buf, fmt)
            }
        }

        impl $crate::conv::Decimal for $name {
            const PRECISION: u32 = <$bid>::P;
            const EMAX: i32 = <$bid>::EMAX;
            const EMIN: i32 = <$bid>::EMIN;
            const BITS: u32 = <$bid>::K;
        }
    };
}
pub(crate) use impl_dpd;
