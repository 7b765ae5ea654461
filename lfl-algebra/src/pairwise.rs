//! Elementwise combinations of several operands, built on the aggregators
//! and residua.

use lfl_math::TruthValue;

use crate::family::{residuum, tconorm, tnorm, Family};
use crate::recycle::{recycled, recycled_len};
use crate::Result;

fn pairwise_with<F>(operands: &[&[TruthValue]], aggregate: F) -> Result<Vec<TruthValue>>
where
    F: Fn(&[TruthValue]) -> Result<TruthValue>,
{
    let lens: Vec<usize> = operands.iter().map(|o| o.len()).collect();
    let n = recycled_len(&lens)?;
    let mut row = Vec::with_capacity(operands.len());
    let mut res = Vec::with_capacity(n);
    for i in 0..n {
        row.clear();
        row.extend(operands.iter().map(|o| recycled(*o, i)));
        res.push(aggregate(&row)?);
    }
    Ok(res)
}

/// At every index, the t-norm of the operands' (recycled) elements there.
///
/// The result has the length of the longest operand; no operands give an
/// empty result.
pub fn pairwise_tnorm(
    family: Family,
    operands: &[&[TruthValue]],
    missing_removable: bool,
) -> Result<Vec<TruthValue>> {
    pairwise_with(operands, |row| tnorm(family, row, missing_removable))
}

/// At every index, the t-conorm of the operands' (recycled) elements there.
pub fn pairwise_tconorm(
    family: Family,
    operands: &[&[TruthValue]],
    missing_removable: bool,
) -> Result<Vec<TruthValue>> {
    pairwise_with(operands, |row| tconorm(family, row, missing_removable))
}

/// Equivalence `(x -> y) AND (y -> x)`, elementwise with recycling.
pub fn biresiduum(family: Family, x: &[TruthValue], y: &[TruthValue]) -> Result<Vec<TruthValue>> {
    let forward = residuum(family, x, y)?;
    let backward = residuum(family, y, x)?;
    pairwise_tnorm(family, &[forward.as_slice(), backward.as_slice()], false)
}
