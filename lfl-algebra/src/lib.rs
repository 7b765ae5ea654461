//! # lfl-algebra
//!
//! Fuzzy-logic operators over three-valued [`TruthValue`]s.
//!
//! Three families are provided, each a t-norm, its dual t-conorm and its
//! residuum:
//! - **Gödel**: [`goedel_tnorm`] / [`goedel_tconorm`] / [`goedel_residuum`]
//! - **Łukasiewicz**: [`lukasiewicz_tnorm`] / [`lukasiewicz_tconorm`] / [`lukasiewicz_residuum`]
//! - **Goguen**: [`goguen_tnorm`] / [`goguen_tconorm`] / [`goguen_residuum`]
//!
//! plus the [`involutive_negation`] and [`strict_negation`]. The entry points
//! [`tnorm`], [`tconorm`], [`residuum`] and [`negate`] select an operator by
//! [`Family`] / [`NegationKind`]; [`Algebra`] bundles one family with a
//! negation.
//!
//! Every operator validates every element it reads and aborts the whole call
//! on the first invalid one. All functions are pure.
//!
//! [`TruthValue`]: lfl_math::TruthValue

pub mod algebra;
pub mod error;
pub mod family;
pub mod negation;
pub mod pairwise;
mod recycle;
pub mod residuum;
pub mod tconorm;
pub mod tnorm;

pub use algebra::{Algebra, AlgebraConfig};
pub use error::{AlgebraError, Result};
pub use family::{negate, residuum, tconorm, tnorm, Family, NegationKind};
pub use negation::{involutive_negation, strict_negation};
pub use pairwise::{biresiduum, pairwise_tconorm, pairwise_tnorm};
pub use residuum::{goedel_residuum, goguen_residuum, lukasiewicz_residuum};
pub use tconorm::{goedel_tconorm, goguen_tconorm, lukasiewicz_tconorm};
pub use tnorm::{goedel_tnorm, goguen_tnorm, lukasiewicz_tnorm};
