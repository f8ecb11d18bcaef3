use super::{bcd, declet};

/// Converts a binary number in [0, 999] to a declet.
pub(super) const BIN_TO_DPD: [u16; 1000] = {
    let mut t = [0u16; 1000];
    let mut i = 0;
    while i < t.len() {
        let bcd = bcd::from_bin(i as u16);
        t[i] = declet::pack(bcd);
        i += 1;
    }
    t
};

/// Converts a declet to a binary number in [0, 999].
pub(super) const DPD_TO_BIN: [u16; 1 << 10] = {
    let mut t = [0u16; 1 << 10];
    let mut i = 0;
    while i < t.len() {
        let bcd = declet::unpack(i as u16);
        t[i] = bcd::to_bin(bcd);
        i += 1;
    }
    t
};
