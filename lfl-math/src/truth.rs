use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A truth value of three-valued fuzzy logic.
///
/// `Value(v)` is only meaningful for `0 <= v <= 1`; the variant itself does not
/// enforce that, so every operator passes its inputs through [`validate`]
/// before using them. Use [`TruthValue::new`] for a checked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TruthValue {
    /// A degree of truth in `[0, 1]`
    Value(f64),
    /// Unknown truth
    Missing,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TruthError {
    #[error("argument out of range 0..1: {0}")]
    OutOfRange(f64),
    #[error("NaN argument")]
    NotANumber,
    #[error("empty operand cannot be recycled")]
    EmptyOperand,
}

pub type Result<T> = std::result::Result<T, TruthError>;

impl TruthValue {
    pub const TRUE: Self = TruthValue::Value(1.0);
    pub const FALSE: Self = TruthValue::Value(0.0);

    /// Checked constructor: fails the same way [`validate`] does.
    pub fn new(value: f64) -> Result<Self> {
        let t = TruthValue::Value(value);
        validate(t)?;
        Ok(t)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, TruthValue::Missing)
    }

    /// The degree of truth, or `None` when missing
    pub fn value(&self) -> Option<f64> {
        match *self {
            TruthValue::Value(v) => Some(v),
            TruthValue::Missing => None,
        }
    }
}

impl From<Option<f64>> for TruthValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => TruthValue::Value(v),
            None => TruthValue::Missing,
        }
    }
}

impl From<TruthValue> for Option<f64> {
    fn from(value: TruthValue) -> Self {
        value.value()
    }
}

/// Accepts a missing value or a number in `[0, 1]`.
///
/// The range check runs first; NaN fails it silently (every comparison with
/// NaN is false) and is then reported as [`TruthError::NotANumber`].
pub fn validate(x: TruthValue) -> Result<()> {
    if let TruthValue::Value(v) = x {
        if v < 0.0 || v > 1.0 {
            return Err(TruthError::OutOfRange(v));
        }
        if v.is_nan() {
            return Err(TruthError::NotANumber);
        }
    }
    Ok(())
}

/// Validates the element at `index` of an operand and unwraps it.
///
/// Returns `Ok(None)` for a missing element. Rejections are reported to
/// `tracing` with the offending position before being propagated.
#[inline]
pub fn checked_value(index: usize, x: TruthValue) -> Result<Option<f64>> {
    match validate(x) {
        Ok(()) => Ok(x.value()),
        Err(e) => {
            tracing::debug!(index, error = %e, "rejected truth value");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_unit_interval_and_missing() {
        for v in [0.0, 0.25, 0.5, 1.0, -0.0] {
            assert!(validate(TruthValue::Value(v)).is_ok(), "{} rejected", v);
        }
        assert!(validate(TruthValue::Missing).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(validate(TruthValue::Value(1.5)), Err(TruthError::OutOfRange(1.5)));
        assert_eq!(validate(TruthValue::Value(-0.1)), Err(TruthError::OutOfRange(-0.1)));
        assert!(matches!(
            validate(TruthValue::Value(f64::INFINITY)),
            Err(TruthError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_nan_is_not_missing() {
        assert_eq!(validate(TruthValue::Value(f64::NAN)), Err(TruthError::NotANumber));
        assert_eq!(TruthValue::new(f64::NAN), Err(TruthError::NotANumber));
    }

    #[test]
    fn test_checked_value() {
        assert_eq!(checked_value(0, TruthValue::Value(0.3)), Ok(Some(0.3)));
        assert_eq!(checked_value(3, TruthValue::Missing), Ok(None));
        assert_eq!(checked_value(7, TruthValue::Value(2.0)), Err(TruthError::OutOfRange(2.0)));
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(TruthValue::from(Some(0.5)), TruthValue::Value(0.5));
        assert_eq!(TruthValue::from(None), TruthValue::Missing);
        assert_eq!(Option::<f64>::from(TruthValue::TRUE), Some(1.0));
        assert!(TruthValue::Missing.is_missing());
        assert!(!TruthValue::FALSE.is_missing());
    }
}
