use lfl_math::{checked_value, TruthValue};

use crate::Result;

/// `1 - x`
pub fn involutive_negation(values: &[TruthValue]) -> Result<Vec<TruthValue>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &x)| -> Result<TruthValue> {
            let r = checked_value(i, x)?.map(|v| 1.0 - v);
            Ok(TruthValue::from(r))
        })
        .collect()
}

/// 1 for exactly 0, otherwise 0
pub fn strict_negation(values: &[TruthValue]) -> Result<Vec<TruthValue>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &x)| -> Result<TruthValue> {
            let r = checked_value(i, x)?.map(|v| if v == 0.0 { 1.0 } else { 0.0 });
            Ok(TruthValue::from(r))
        })
        .collect()
}
