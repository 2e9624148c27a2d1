//! Calculator module
//!
//! Arithmetic operation dispatch plus a bounded, most-recent-first record
//! of successful calculations, exposed over REST.
//!
//! ## Architecture
//!
//! - `domain/` - operation dispatch, history ledger, domain errors
//! - `api/rest/` - DTOs, handlers, routes, error mapping
//! - `config.rs` - module configuration

pub mod api;
pub mod config;
pub mod domain;

pub use config::CalculatorConfig;
