use lfl_math::TruthError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgebraError {
    #[error(transparent)]
    Truth(#[from] TruthError),
    #[error("unknown algebra family: {0:?} (expected goedel, lukasiewicz or goguen)")]
    UnknownFamily(String),
    #[error("unknown negation: {0:?} (expected involutive or strict)")]
    UnknownNegation(String),
}

pub type Result<T> = std::result::Result<T, AlgebraError>;
