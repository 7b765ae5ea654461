//! T-conorms (fuzzy disjunction), the duals of [`crate::tnorm`].
//!
//! The missing-value policy mirrors the t-norms with 1 as the absorbing value.

use lfl_math::{checked_value, TruthValue};

use crate::Result;

/// Maximum t-conorm.
pub fn goedel_tconorm(values: &[TruthValue], missing_removable: bool) -> Result<TruthValue> {
    let mut res = 0.0;
    let mut missing = false;
    for (i, &x) in values.iter().enumerate() {
        match checked_value(i, x)? {
            None => missing = true,
            Some(v) if v > res => res = v,
            Some(_) => {}
        }
    }
    if !missing_removable && missing && res < 1.0 {
        return Ok(TruthValue::Missing);
    }
    Ok(TruthValue::Value(res))
}

/// Bounded sum `min(1, sum)`. Missing elements are left out of the sum.
pub fn lukasiewicz_tconorm(values: &[TruthValue], missing_removable: bool) -> Result<TruthValue> {
    let mut res = 0.0;
    let mut missing = false;
    for (i, &x) in values.iter().enumerate() {
        match checked_value(i, x)? {
            None => missing = true,
            Some(v) => res += v,
        }
    }
    if res >= 1.0 {
        return Ok(TruthValue::TRUE);
    }
    if !missing_removable && missing {
        return Ok(TruthValue::Missing);
    }
    Ok(TruthValue::Value(res))
}

/// Probabilistic sum, folded left as `res + x - res * x`.
pub fn goguen_tconorm(values: &[TruthValue], missing_removable: bool) -> Result<TruthValue> {
    let mut res = 0.0;
    let mut missing = false;
    for (i, &x) in values.iter().enumerate() {
        match checked_value(i, x)? {
            None => missing = true,
            Some(v) => res = res + v - res * v,
        }
    }
    if !missing_removable && missing && res < 1.0 {
        return Ok(TruthValue::Missing);
    }
    Ok(TruthValue::Value(res))
}
