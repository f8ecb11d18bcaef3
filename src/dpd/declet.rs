//! Conversions between three BCD digits and a 10-bit declet.
//!
//! A BCD `(abcd)(efgh)(ijkm)` becomes the declet
//! `(pqr)(stu)(v)(wxy)`. A digit is "large" if it is 8 or 9,
//! in which case only its LSB needs to be stored.

/// A BCD's bit pattern.
///
/// The discriminant is the BCD masked by `0x888`, the MSB of
/// each digit.
#[repr(u16)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Pattern {
    /// All digits are small.
    AllSmall = 0x000,
    /// The right digit is large.
    RightLarge = 0x008,
    /// The middle digit is large.
    MiddleLarge = 0x080,
    /// The left digit is large.
    LeftLarge = 0x800,
    /// The right digit is small.
    RightSmall = 0x880,
    /// The middle digit is small.
    MiddleSmall = 0x808,
    /// The left digit is small.
    LeftSmall = 0x088,
    /// All digits are large.
    AllLarge = 0x888,
}

/// Classifies a 12-bit BCD for packing into a declet.
pub(super) const fn classify_bcd(bcd: u16) -> Pattern {
    use Pattern::*;
    match bcd & 0x888 {
        0x000 => AllSmall,
        0x008 => RightLarge,
        0x080 => MiddleLarge,
        0x800 => LeftLarge,
        0x880 => RightSmall,
        0x808 => MiddleSmall,
        0x088 => LeftSmall,
        _ => AllLarge,
    }
}

/// Classifies a declet for unpacking into a BCD.
pub(super) const fn classify_dpd(dpd: u16) -> Pattern {
    use Pattern::*;

    // Match bit `v`.
    if dpd & 0x8 == 0 {
        return AllSmall;
    }

    // Match bits `vwx`.
    match dpd & 0xe {
        0x8 => return RightLarge,
        0xa => return MiddleLarge,
        0xc => return LeftLarge,
        _ => {}
    }

    // Match bits `st`.
    match dpd & 0x60 {
        0x00 => RightSmall,
        0x20 => MiddleSmall,
        0x40 => LeftSmall,
        _ => AllLarge,
    }
}

/// Packs a 12-bit BCD into a declet.
pub(super) const fn pack(bcd: u16) -> u16 {
    // | aei | pqr stu v wxy | comments              |
    // | --- | ------------- | --------------------- |
    // | 000 | bcd fgh 0 jkm | All digits are small  |
    // | 001 | bcd fgh 1 00m | Right digit is large  |
    // | 010 | bcd jkh 1 01m | Middle digit is large |
    // | 100 | jkd fgh 1 10m | Left digit is large   |
    // | 110 | jkd 00h 1 11m | Right digit is small  |
    // | 101 | fgd 01h 1 11m | Middle digit is small |
    // | 011 | bcd 10h 1 11m | Left digit is small   |
    // | 111 | 00d 11h 1 11m | All digits are large  |

    let bcd_ = (bcd >> 8) & 0x7;
    let fgh = (bcd >> 4) & 0x7;
    let jk = (bcd >> 1) & 0x3;
    let fg = (bcd >> 5) & 0x3;
    let d = (bcd >> 8) & 0x1;
    let h = (bcd >> 4) & 0x1;
    let m = bcd & 0x1;

    use Pattern::*;
    match classify_bcd(bcd) {
        AllSmall => (bcd_ << 7) | (fgh << 4) | (bcd & 0x7),
        RightLarge => (bcd_ << 7) | (fgh << 4) | 0x8 | m,
        MiddleLarge => (bcd_ << 7) | (jk << 5) | (h << 4) | 0xa | m,
        LeftLarge => (jk << 8) | (d << 7) | (fgh << 4) | 0xc | m,
        RightSmall => (jk << 8) | (d << 7) | (h << 4) | 0xe | m,
        MiddleSmall => (fg << 8) | (d << 7) | 0x20 | (h << 4) | 0xe | m,
        LeftSmall => (bcd_ << 7) | 0x40 | (h << 4) | 0xe | m,
        AllLarge => (d << 7) | 0x60 | (h << 4) | 0xe | m,
    }
}

/// Unpacks a declet into a 12-bit BCD.
///
/// Only the lower 10 bits of `dpd` are used. The 24
/// non-canonical declets decode to 888, 889, 898, 899, 988,
/// 989, 998, or 999.
pub(super) const fn unpack(dpd: u16) -> u16 {
    // | vwxst | abcd efgh ijkm |
    // | ----- | -------------- |
    // | 0.... | 0pqr 0stu 0wxy |
    // | 100.. | 0pqr 0stu 100y |
    // | 101.. | 0pqr 100u 0sty |
    // | 110.. | 100r 0stu 0pqy |
    // | 11100 | 100r 100u 0pqy |
    // | 11101 | 100r 0pqu 100y |
    // | 11110 | 0pqr 100u 100y |
    // | 11111 | 100r 100u 100y |

    let pqr = (dpd >> 7) & 0x7;
    let stu = (dpd >> 4) & 0x7;
    let pq = (dpd >> 8) & 0x3;
    let st = (dpd >> 5) & 0x3;
    let r = (dpd >> 7) & 0x1;
    let u = (dpd >> 4) & 0x1;
    let y = dpd & 0x1;

    let (d1, d2, d3) = {
        use Pattern::*;
        match classify_dpd(dpd) {
            AllSmall => (pqr, stu, dpd & 0x7),
            RightLarge => (pqr, stu, 0x8 | y),
            MiddleLarge => (pqr, 0x8 | u, (st << 1) | y),
            LeftLarge => (0x8 | r, stu, (pq << 1) | y),
            RightSmall => (0x8 | r, 0x8 | u, (pq << 1) | y),
            MiddleSmall => (0x8 | r, (pq << 1) | u, 0x8 | y),
            LeftSmall => (pqr, 0x8 | u, 0x8 | y),
            AllLarge => (0x8 | r, 0x8 | u, 0x8 | y),
        }
    };
    (d1 << 8) | (d2 << 4) | d3
}

#[cfg(test)]
mod tests {
    use core::fmt;

    use super::{super::bcd, *};

    struct Dpd(u16);
    impl fmt::Display for Dpd {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let pqr = (self.0 >> 7) & 0x7;
            let stu = (self.0 >> 4) & 0x7;
            let v = (self.0 >> 3) & 0x1;
            let wxy = self.0 & 0x7;
            write!(f, "({pqr:03b})({stu:03b})({v:01b})({wxy:03b})")
        }
    }

    #[test]
    fn test_pack_unpack() {
        use Pattern::*;
        let tests = [
            (5, 0b000_000_0_101, AllSmall),
            (9, 0b000_000_1_001, RightLarge),
            (55, 0b000_101_0_101, AllSmall),
            (79, 0b000_111_1_001, RightLarge),
            (80, 0b000_000_1_010, MiddleLarge),
            (99, 0b000_101_1_111, LeftSmall),
            (555, 0b101_101_0_101, AllSmall),
            (899, 0b000_111_1_111, AllLarge),
            (909, 0b001_010_1_111, MiddleSmall),
            (999, 0b001_111_1_111, AllLarge),
        ];
        for (i, (bin, dpd, pattern)) in tests.into_iter().enumerate() {
            let bcd = bcd::from_bin(bin);

            assert_eq!(classify_bcd(bcd), pattern, "#{i}");
            assert_eq!(classify_dpd(dpd), pattern, "#{i}");

            let got = pack(bcd);
            assert_eq!(got, dpd, "#{i} ({bin}): {} != {}", Dpd(got), Dpd(dpd));
            assert_eq!(unpack(got), bcd, "#{i} ({bin})");
        }
    }

    #[test]
    fn test_pack_unpack_exhaustive() {
        for i in 0..=999 {
            let bcd = bcd::from_bin(i);
            let dpd = pack(bcd);
            assert!(dpd < 1 << 10, "#{i}");
            assert_eq!(classify_bcd(bcd), classify_dpd(dpd), "#{i}");
            assert_eq!(unpack(dpd), bcd, "#{i}: dpd={}", Dpd(dpd));
        }
    }

    #[test]
    fn test_non_canonical() {
        // The declets `xx1 11x 111x` with `xx != 00` are
        // redundant encodings of 888 through 999.
        for pq in 1..4u16 {
            for r in 0..2u16 {
                for u in 0..2u16 {
                    for y in 0..2u16 {
                        let dpd = (pq << 8) | (r << 7) | 0x60 | (u << 4) | 0xe | y;
                        let canonical = (r << 7) | 0x60 | (u << 4) | 0xe | y;
                        assert_eq!(unpack(dpd), unpack(canonical), "{}", Dpd(dpd));
                    }
                }
            }
        }
    }
}
