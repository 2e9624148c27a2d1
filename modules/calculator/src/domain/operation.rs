use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::CalcError;

/// The supported operations.
///
/// Wire names are the lowercase variant names (`"add"`, `"sqrt"`, ...).
/// Parsing an unrecognized name fails with [`CalcError::InvalidOperation`];
/// inside the domain the set is closed and matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Sqrt,
}

impl Operation {
    /// Wire name of the operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulo => "modulo",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
        }
    }

    /// `sqrt` is the only unary operation; everything else takes two operands.
    pub fn is_binary(self) -> bool {
        !matches!(self, Operation::Sqrt)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            "modulo" => Ok(Operation::Modulo),
            "power" => Ok(Operation::Power),
            "sqrt" => Ok(Operation::Sqrt),
            other => Err(CalcError::InvalidOperation {
                operation: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_wire_names() {
        for name in [
            "add",
            "subtract",
            "multiply",
            "divide",
            "modulo",
            "power",
            "sqrt",
        ] {
            let op: Operation = name.parse().unwrap();
            assert_eq!(op.as_str(), name);
        }
    }

    #[test]
    fn test_parse_unknown_name_fails() {
        let err = "cube".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid operation: cube");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Add".parse::<Operation>().is_err());
    }

    #[test]
    fn test_sqrt_is_the_only_unary_operation() {
        assert!(!Operation::Sqrt.is_binary());
        assert!(Operation::Add.is_binary());
        assert!(Operation::Power.is_binary());
    }

    #[test]
    fn test_serde_wire_names_match_from_str() {
        let json = serde_json::to_string(&Operation::Subtract).unwrap();
        assert_eq!(json, "\"subtract\"");
        let op: Operation = serde_json::from_str("\"modulo\"").unwrap();
        assert_eq!(op, Operation::Modulo);
    }
}
