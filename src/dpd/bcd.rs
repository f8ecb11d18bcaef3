//! Conversions between binary and packed BCD.
//!
//! Only the DPD lookup tables use these, so they favor clarity
//! over speed.

/// Converts a packed BCD with up to four digits to binary.
pub(super) const fn to_bin(bcd: u16) -> u16 {
    let mut bin = 0;
    let mut shift = 16;
    while shift > 0 {
        shift -= 4;
        bin = bin * 10 + ((bcd >> shift) & 0xf);
    }
    bin
}

/// Packs a binary number in [0, 9999] into BCD.
pub(super) const fn from_bin(mut bin: u16) -> u16 {
    debug_assert!(bin <= 9999);

    let mut bcd = 0;
    let mut shift = 0;
    while bin > 0 {
        bcd |= (bin % 10) << shift;
        bin /= 10;
        shift += 4;
    }
    bcd
}
