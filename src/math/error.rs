use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeriesError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("terms must be non-negative")]
    NegativeTerms,
    #[error("division by zero")]
    DivisionByZero,
    #[error("logarithm argument must be positive")]
    NonPositiveArgument,
    #[error("term index {0} does not fit in the integer type")]
    TermOutOfRange(i64),
    #[error("arithmetic overflow in the integer type")]
    Overflow,
}
