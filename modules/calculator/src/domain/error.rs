use thiserror::Error;

use super::operation::Operation;

/// Failure modes of the operation dispatcher.
///
/// The messages are part of the wire contract: the REST layer surfaces
/// them verbatim in the `error` field of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The operation name is not one of the recognized tags.
    #[error("Invalid operation: {operation}")]
    InvalidOperation { operation: String },

    /// A binary operation was requested without its second operand.
    #[error("num2 is required for {operation} operation")]
    MissingOperand { operation: Operation },

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Modulo by zero is not allowed")]
    ModuloByZero,

    #[error("Cannot calculate square root of negative number")]
    NegativeSquareRoot,
}
