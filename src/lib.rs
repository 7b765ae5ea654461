//! # lfl
//!
//! Fuzzy-logic algebra over three-valued truth values.
//!
//! - [`math`]: [`TruthValue`], validation, host missing-value encoding
//! - [`algebra`]: t-norms, t-conorms, residua, negations and [`Algebra`]

pub use lfl_algebra as algebra;
pub use lfl_math as math;

pub use lfl_algebra::{
    biresiduum, negate, pairwise_tconorm, pairwise_tnorm, residuum, tconorm, tnorm, Algebra,
    AlgebraConfig, AlgebraError, Family, NegationKind,
};
pub use lfl_math::{MissingEncoding, TruthError, TruthValue};
