use bigdecimal::{BigDecimal, RoundingMode};

/// Renders an amount with exactly two decimal places.
pub fn format_price(amount: &BigDecimal) -> String {
    amount.with_scale_round(2, RoundingMode::HalfUp).to_string()
}
