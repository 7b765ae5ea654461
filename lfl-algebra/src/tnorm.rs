//! T-norms (fuzzy conjunction) over a whole sequence of truth values.
//!
//! Missing elements never enter the fold. They only decide, after the fold,
//! whether the result is reported as missing: with `missing_removable` unset a
//! missing element turns the result missing unless the non-missing part has
//! already reached the absorbing value 0.

use lfl_math::{checked_value, TruthValue};

use crate::Result;

/// Minimum t-norm.
pub fn goedel_tnorm(values: &[TruthValue], missing_removable: bool) -> Result<TruthValue> {
    let mut res = 1.0;
    let mut missing = false;
    for (i, &x) in values.iter().enumerate() {
        match checked_value(i, x)? {
            None => missing = true,
            Some(v) if v < res => res = v,
            Some(_) => {}
        }
    }
    if !missing_removable && missing && res > 0.0 {
        return Ok(TruthValue::Missing);
    }
    Ok(TruthValue::Value(res))
}

/// Bounded-difference t-norm: `max(0, sum - (n - 1))`.
///
/// A missing element counts as 1 in the sum, so the bound reaches 0 only when
/// the known elements force it there whatever the missing ones are.
pub fn lukasiewicz_tnorm(values: &[TruthValue], missing_removable: bool) -> Result<TruthValue> {
    let mut res = 1.0;
    let mut missing = false;
    for (i, &x) in values.iter().enumerate() {
        match checked_value(i, x)? {
            None => {
                missing = true;
                res += 1.0;
            }
            Some(v) => res += v,
        }
    }
    res -= values.len() as f64;
    if res <= 0.0 {
        return Ok(TruthValue::FALSE);
    }
    if !missing_removable && missing {
        return Ok(TruthValue::Missing);
    }
    Ok(TruthValue::Value(res))
}

/// Product t-norm.
pub fn goguen_tnorm(values: &[TruthValue], missing_removable: bool) -> Result<TruthValue> {
    let mut res = 1.0;
    let mut missing = false;
    for (i, &x) in values.iter().enumerate() {
        match checked_value(i, x)? {
            None => missing = true,
            Some(v) => res *= v,
        }
    }
    if !missing_removable && missing && res > 0.0 {
        return Ok(TruthValue::Missing);
    }
    Ok(TruthValue::Value(res))
}
