//! Binary operator implementations.

use crate::parser::BinaryOp;

/// Evaluate a binary operation on two numbers.
///
/// Division by zero yields 0 instead of an infinity or an error.
pub(super) fn eval_binary(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => {
            if right == 0.0 {
                0.0
            } else {
                left / right
            }
        }
    }
}
