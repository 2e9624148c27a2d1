//! Domain layer for the calculator module
//!
//! Operation dispatch and history retention; no transport types here.

pub mod error;
pub mod history;
pub mod operation;
pub mod service;

pub use error::CalcError;
pub use history::{CalculationRecord, HistoryLedger};
pub use operation::Operation;
pub use service::{Service, evaluate};
