use thiserror::Error;

/// Rejected input to [`Parameter::new`](crate::parameter::Parameter::new).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("n must be positive, but was {0}")]
    NonPositiveMaxNumber(i64),

    #[error("g must be positive, but was {0}")]
    NonPositiveGroupCount(i64),

    #[error("n must be greater than or equal to g, but n: {n}, g: {g}")]
    FewerNumbersThanGroups { n: i64, g: i64 },

    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("delimiter must not be a numeric string, but was {0:?}")]
    NumericDelimiter(String),
}

/// An iterator was asked for a value past its end.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("sequence exhausted")]
pub struct Exhausted;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot join an empty group")]
pub struct EmptyJoin;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    #[error(transparent)]
    Exhausted(#[from] Exhausted),

    #[error(transparent)]
    EmptyJoin(#[from] EmptyJoin),
}
