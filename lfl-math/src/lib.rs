//! # lfl-math
//!
//! Three-valued truth values for the fuzzy-logic algebra.
//!
//! This crate provides [`TruthValue`] — a tagged value that is either a real
//! number in `[0, 1]` or [`TruthValue::Missing`] — together with the validator
//! every operator runs on every element it reads, and [`MissingEncoding`], the
//! codec that maps a host's f64 stream (with a reserved NaN payload marking
//! missing values) onto truth values and back.
//!
//! NaN is never a truth value: it is rejected with [`TruthError::NotANumber`],
//! distinctly from the missing marker.

pub mod encoding;
pub mod truth;

pub use encoding::{MissingEncoding, DEFAULT_MISSING_PAYLOAD};
pub use truth::{checked_value, validate, Result, TruthError, TruthValue};
