//! Domain service for the calculator module
//!
//! `evaluate` is the pure operation dispatcher; [`Service`] wires it to the
//! history ledger so that every successful calculation is recorded and no
//! failed one is.

use chrono::Utc;
use tracing::debug;

use super::error::CalcError;
use super::history::{CalculationRecord, HistoryLedger};
use super::operation::Operation;

/// Evaluate one operation over its operands.
///
/// Pure: no shared state is read or written, identical inputs yield
/// identical results. Binary operations require `operand2`; `sqrt`
/// ignores it.
///
/// # Errors
/// Returns [`CalcError::MissingOperand`] when a binary operation lacks its
/// second operand, and the operation-specific errors for division or
/// modulo by zero and negative square roots. `power` never fails: a
/// non-finite result is propagated, not rejected.
pub fn evaluate(
    operation: Operation,
    operand1: f64,
    operand2: Option<f64>,
) -> Result<f64, CalcError> {
    match (operation, operand2) {
        (Operation::Sqrt, _) => {
            if operand1 < 0.0 {
                return Err(CalcError::NegativeSquareRoot);
            }
            Ok(operand1.sqrt())
        }
        (op, None) => Err(CalcError::MissingOperand { operation: op }),
        (Operation::Add, Some(num2)) => Ok(operand1 + num2),
        (Operation::Subtract, Some(num2)) => Ok(operand1 - num2),
        (Operation::Multiply, Some(num2)) => Ok(operand1 * num2),
        (Operation::Divide, Some(num2)) => {
            if num2 == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(operand1 / num2)
        }
        (Operation::Modulo, Some(num2)) => {
            if num2 == 0.0 {
                return Err(CalcError::ModuloByZero);
            }
            // Sign follows operand1 (floating remainder of the dividend).
            Ok(operand1 % num2)
        }
        (Operation::Power, Some(num2)) => Ok(operand1.powf(num2)),
    }
}

/// Domain service owning the history ledger.
///
/// Handlers hold it as `Arc<Service>`; the ledger mutex is the only shared
/// mutable state in the process.
#[derive(Debug)]
pub struct Service {
    history: HistoryLedger,
}

impl Service {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: HistoryLedger::new(history_capacity),
        }
    }

    /// Evaluate `operation` and, on success, record it in the history.
    ///
    /// # Errors
    /// Propagates dispatcher failures; a failed evaluation leaves the
    /// ledger untouched.
    pub fn calculate(
        &self,
        operation: Operation,
        operand1: f64,
        operand2: Option<f64>,
    ) -> Result<CalculationRecord, CalcError> {
        let result = evaluate(operation, operand1, operand2)?;
        debug!(%operation, operand1, operand2 = ?operand2, result, "calculation succeeded");

        let record = CalculationRecord {
            operation,
            operand1,
            operand2,
            result,
            recorded_at: Utc::now(),
        };
        self.history.record(record.clone());
        Ok(record)
    }

    /// Retained calculations, most recent first.
    pub fn history(&self) -> Vec<CalculationRecord> {
        self.history.all()
    }

    pub fn clear_history(&self) {
        self.history.clear();
    }

    pub fn history_count(&self) -> usize {
        self.history.count()
    }
}
