use core::cmp::Ordering;

pub(crate) const fn const_cmp_u8(lhs: u8, rhs: u8) -> Ordering {
    match lhs.checked_sub(rhs) {
        Some(0) => Ordering::Equal,
        Some(_) => Ordering::Greater,
        None => Ordering::Less,
    }
}

pub(crate) const fn const_cmp_i8(lhs: i8, rhs: i8) -> Ordering {
    if lhs < rhs {
        Ordering::Less
    } else if lhs > rhs {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

pub(crate) const fn min_u32(x: u32, y: u32) -> u32 {
    if x < y {
        x
    } else {
        y
    }
}

pub(crate) const fn max_i32(x: i32, y: i32) -> i32 {
    if x > y {
        x
    } else {
        y
    }
}
