//! Residua (fuzzy implications) of the three t-norms.
//!
//! Operands are combined elementwise with cyclic recycling to the longer
//! length. At each position:
//!
//! | condition                      | result                  |
//! |--------------------------------|-------------------------|
//! | `x == 0`                       | 1, even if `y` missing  |
//! | `x` or `y` missing             | missing                 |
//! | `x <= y`                       | 1                       |
//! | otherwise                      | family-specific value   |

use lfl_math::{checked_value, TruthValue};

use crate::recycle::{recycled, recycled_len};
use crate::Result;

fn residuum_with<F>(x: &[TruthValue], y: &[TruthValue], below: F) -> Result<Vec<TruthValue>>
where
    F: Fn(f64, f64) -> f64,
{
    let n = recycled_len(&[x.len(), y.len()])?;
    let mut res = Vec::with_capacity(n);
    for i in 0..n {
        let xi = checked_value(i % x.len(), recycled(x, i))?;
        let yi = checked_value(i % y.len(), recycled(y, i))?;
        let r = match (xi, yi) {
            (Some(a), _) if a == 0.0 => TruthValue::TRUE,
            (Some(a), Some(b)) if a <= b => TruthValue::TRUE,
            (Some(a), Some(b)) => TruthValue::Value(below(a, b)),
            _ => TruthValue::Missing,
        };
        res.push(r);
    }
    Ok(res)
}

/// Gödel implication: `y` when `x > y`.
pub fn goedel_residuum(x: &[TruthValue], y: &[TruthValue]) -> Result<Vec<TruthValue>> {
    residuum_with(x, y, |_, b| b)
}

/// Łukasiewicz implication: `1 - x + y` when `x > y`.
pub fn lukasiewicz_residuum(x: &[TruthValue], y: &[TruthValue]) -> Result<Vec<TruthValue>> {
    residuum_with(x, y, |a, b| 1.0 - a + b)
}

/// Goguen implication: `y / x` when `x > y`.
pub fn goguen_residuum(x: &[TruthValue], y: &[TruthValue]) -> Result<Vec<TruthValue>> {
    residuum_with(x, y, |a, b| b / a)
}
