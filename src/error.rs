use thiserror::Error;

/// Errors raised by [`Optional`](crate::Optional) operations.
///
/// Every variant signals a caller-side mistake. Nothing in this crate
/// recovers from them, retries, or turns them into an absent value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionalError {
    #[error("attempted to extract a value from an absent optional")]
    EmptyValue,

    #[error("contract violation in {operation}: expected {expected}, found {found}")]
    ContractViolation {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("wrong number of arguments: expected {expected}, found {found}")]
    Arity { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, OptionalError>;
