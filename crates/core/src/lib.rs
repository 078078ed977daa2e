//! Ledger Core - Domain entities, services, and traits.
//!
//! This crate contains the reporting logic of the ledger: period resolution,
//! transaction analytics and report distribution. It is storage-agnostic and
//! defines traits that are implemented by the `storage-memory` crate.

pub mod analytics;
pub mod categories;
pub mod constants;
pub mod distribution;
pub mod errors;
pub mod events;
pub mod fx;
pub mod period;
pub mod settings;
pub mod transactions;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
