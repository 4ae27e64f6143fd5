use rust_decimal_macros::dec;

pub type Dec = rust_decimal::Decimal;

/// Default tolerance below which a scalar is treated as zero.
pub const NEAR_ZERO: Dec = dec!(0.0000000001);

pub fn is_near_zero(value: Dec, eps: Dec) -> bool {
    value.abs() < eps
}
