//! Arithmetic evaluator.
//!
//! Pure mapping from two decimal operands and an operation to a
//! decimal result. Division by zero yields zero — the calculator has
//! always answered `5 / 0` with `0` and callers depend on the display
//! never showing an error token. Quotients are pinned to a fixed
//! scale so non-terminating decimals have one canonical form.

use bigdecimal::{BigDecimal, RoundingMode, Zero};

use crate::session::Operation;

/// Fractional digits kept by division before trailing zeros are trimmed.
const DIV_SCALE: i64 = 20;

/// Compute `a op b`.
///
/// Addition, subtraction, and multiplication are exact. Division
/// rounds half-up at [`DIV_SCALE`] fractional digits and trims
/// trailing zeros, so `5 / 2` is `2.5` and `1 / 8` is `0.125`.
/// A zero divisor returns zero.
///
/// Only division trims: the exact operations keep the scale decimal
/// arithmetic gives them, so `2.5 + 2.5` is `5.0` while `10 / 2` is
/// `5`.
pub fn evaluate(a: &BigDecimal, b: &BigDecimal, op: Operation) -> BigDecimal {
    match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b.is_zero() {
                BigDecimal::zero()
            } else {
                (a / b)
                    .with_scale_round(DIV_SCALE, RoundingMode::HalfUp)
                    .normalized()
            }
        }
    }
}
