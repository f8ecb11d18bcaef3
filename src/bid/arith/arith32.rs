super::impl_basic!(u32);
super::impl_wide!(u32, u64, crate::bid::arith::arith64::digits);

const fn widening_mul(lhs: u32, rhs: u32) -> (u32, u32) {
    let wide = (lhs as u64) * (rhs as u64);
    (wide as u32, (wide >> 32) as u32)
}
