use lfl_math::TruthValue;
use serde::{Deserialize, Serialize};

use crate::family::{negate, residuum, tconorm, tnorm, Family, NegationKind};
use crate::pairwise::{biresiduum, pairwise_tconorm, pairwise_tnorm};
use crate::Result;

/// Configuration of an [`Algebra`]
///
/// When `negation` is left out, the family's residual negation is used
/// (see [`Family::residual_negation`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgebraConfig {
    pub family: Family,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negation: Option<NegationKind>,
}

impl AlgebraConfig {
    pub fn new(family: Family) -> Self {
        Self { family, negation: None }
    }

    pub fn with_negation(mut self, negation: NegationKind) -> Self {
        self.negation = Some(negation);
        self
    }
}

impl Default for AlgebraConfig {
    fn default() -> Self {
        Self::new(Family::Goguen)
    }
}

/// A complete fuzzy algebra: t-norm, t-conorm, residuum and negation of one
/// family, selected once and reused.
///
/// # Example
/// ```
/// use lfl_algebra::{Algebra, AlgebraConfig, Family};
/// use lfl_math::TruthValue::{Missing, Value};
///
/// let alg = Algebra::new(AlgebraConfig::new(Family::Goedel));
///
/// assert_eq!(alg.t(&[Value(0.5), Missing], false).unwrap(), Missing);
/// assert_eq!(alg.t(&[Value(0.0), Missing], false).unwrap(), Value(0.0));
/// assert_eq!(alg.n(&[Value(0.0), Value(0.3)]).unwrap(), vec![Value(1.0), Value(0.0)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Algebra {
    family: Family,
    negation: NegationKind,
}

impl Algebra {
    pub fn new(config: AlgebraConfig) -> Self {
        let negation = config
            .negation
            .unwrap_or_else(|| config.family.residual_negation());
        tracing::debug!(family = %config.family, negation = %negation, "algebra configured");
        Self {
            family: config.family,
            negation,
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn negation(&self) -> NegationKind {
        self.negation
    }

    /// Human-readable description
    pub fn description(&self) -> String {
        format!("{} algebra ({} negation)", self.family, self.negation)
    }

    /// T-norm of all `values`
    pub fn t(&self, values: &[TruthValue], missing_removable: bool) -> Result<TruthValue> {
        tnorm(self.family, values, missing_removable)
    }

    /// Elementwise t-norm of several operands
    pub fn pt(&self, operands: &[&[TruthValue]], missing_removable: bool) -> Result<Vec<TruthValue>> {
        pairwise_tnorm(self.family, operands, missing_removable)
    }

    /// T-conorm of all `values`
    pub fn c(&self, values: &[TruthValue], missing_removable: bool) -> Result<TruthValue> {
        tconorm(self.family, values, missing_removable)
    }

    /// Elementwise t-conorm of several operands
    pub fn pc(&self, operands: &[&[TruthValue]], missing_removable: bool) -> Result<Vec<TruthValue>> {
        pairwise_tconorm(self.family, operands, missing_removable)
    }

    /// Residuum `x -> y`
    pub fn r(&self, x: &[TruthValue], y: &[TruthValue]) -> Result<Vec<TruthValue>> {
        residuum(self.family, x, y)
    }

    /// Bi-residuum `x <-> y`
    pub fn b(&self, x: &[TruthValue], y: &[TruthValue]) -> Result<Vec<TruthValue>> {
        biresiduum(self.family, x, y)
    }

    /// Configured negation
    pub fn n(&self, values: &[TruthValue]) -> Result<Vec<TruthValue>> {
        negate(self.negation, values)
    }

    /// Involutive negation, whatever is configured
    pub fn ni(&self, values: &[TruthValue]) -> Result<Vec<TruthValue>> {
        negate(NegationKind::Involutive, values)
    }
}

impl Default for Algebra {
    fn default() -> Self {
        Self::new(AlgebraConfig::default())
    }
}

impl From<Family> for Algebra {
    fn from(family: Family) -> Self {
        Self::new(AlgebraConfig::new(family))
    }
}
