super::impl_basic!(u64);
super::impl_wide!(u64, u128, crate::bid::arith::arith128::digits);

const fn widening_mul(lhs: u64, rhs: u64) -> (u64, u64) {
    let wide = (lhs as u128) * (rhs as u128);
    (wide as u64, (wide >> 64) as u64)
}
