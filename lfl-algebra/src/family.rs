use std::fmt;
use std::str::FromStr;

use lfl_math::TruthValue;
use serde::{Deserialize, Serialize};

use crate::negation::{involutive_negation, strict_negation};
use crate::residuum::{goedel_residuum, goguen_residuum, lukasiewicz_residuum};
use crate::tconorm::{goedel_tconorm, goguen_tconorm, lukasiewicz_tconorm};
use crate::tnorm::{goedel_tnorm, goguen_tnorm, lukasiewicz_tnorm};
use crate::{AlgebraError, Result};

/// Algebra family selector
///
/// Each family fixes a t-norm, its dual t-conorm and its residuum:
/// - **Goedel**: minimum / maximum
/// - **Lukasiewicz**: bounded difference / bounded sum
/// - **Goguen**: product / probabilistic sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Goedel,
    Lukasiewicz,
    Goguen,
}

/// Negation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegationKind {
    /// `1 - x`
    Involutive,
    /// 1 for 0, else 0
    Strict,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Goedel, Family::Lukasiewicz, Family::Goguen];

    pub fn name(&self) -> &'static str {
        match self {
            Family::Goedel => "goedel",
            Family::Lukasiewicz => "lukasiewicz",
            Family::Goguen => "goguen",
        }
    }

    /// Negation obtained as the residuum `x -> 0` of this family.
    ///
    /// Gödel and Goguen implications into 0 are the strict negation,
    /// Łukasiewicz's is `1 - x`.
    pub fn residual_negation(&self) -> NegationKind {
        match self {
            Family::Lukasiewicz => NegationKind::Involutive,
            Family::Goedel | Family::Goguen => NegationKind::Strict,
        }
    }
}

impl NegationKind {
    pub const ALL: [NegationKind; 2] = [NegationKind::Involutive, NegationKind::Strict];

    pub fn name(&self) -> &'static str {
        match self {
            NegationKind::Involutive => "involutive",
            NegationKind::Strict => "strict",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for NegationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self> {
        Family::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| AlgebraError::UnknownFamily(s.to_string()))
    }
}

impl FromStr for NegationKind {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self> {
        NegationKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| AlgebraError::UnknownNegation(s.to_string()))
    }
}

/// Fuzzy conjunction of all `values` under `family`.
///
/// With `missing_removable` set, missing elements are simply ignored;
/// otherwise they make the result missing unless it is already 0.
pub fn tnorm(family: Family, values: &[TruthValue], missing_removable: bool) -> Result<TruthValue> {
    match family {
        Family::Goedel => goedel_tnorm(values, missing_removable),
        Family::Lukasiewicz => lukasiewicz_tnorm(values, missing_removable),
        Family::Goguen => goguen_tnorm(values, missing_removable),
    }
}

/// Fuzzy disjunction of all `values` under `family`; 1 absorbs missing values.
pub fn tconorm(family: Family, values: &[TruthValue], missing_removable: bool) -> Result<TruthValue> {
    match family {
        Family::Goedel => goedel_tconorm(values, missing_removable),
        Family::Lukasiewicz => lukasiewicz_tconorm(values, missing_removable),
        Family::Goguen => goguen_tconorm(values, missing_removable),
    }
}

/// Elementwise implication `x -> y`, recycling the shorter operand.
pub fn residuum(family: Family, x: &[TruthValue], y: &[TruthValue]) -> Result<Vec<TruthValue>> {
    match family {
        Family::Goedel => goedel_residuum(x, y),
        Family::Lukasiewicz => lukasiewicz_residuum(x, y),
        Family::Goguen => goguen_residuum(x, y),
    }
}

pub fn negate(kind: NegationKind, values: &[TruthValue]) -> Result<Vec<TruthValue>> {
    match kind {
        NegationKind::Involutive => involutive_negation(values),
        NegationKind::Strict => strict_negation(values),
    }
}
