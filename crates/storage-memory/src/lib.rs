//! In-memory storage implementation for the ledger reporting engine.
//!
//! This crate implements the repository traits defined in `ledger-core` on
//! top of process-local collections, and loads them from a JSON seed file:
//! - Category, transaction and subscription repositories
//! - Seed file parsing ([`SeedData`])
//! - A [`MemoryStorage`] bundle wiring everything together
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-memory (this crate)
//!       │
//!       ▼
//!  seed.json
//! ```

pub mod categories;
pub mod distribution;
pub mod errors;
pub mod seed;
pub mod transactions;

pub use categories::InMemoryCategoryRepository;
pub use distribution::InMemoryDistributingMetricItemRepository;
pub use errors::StorageError;
pub use seed::{MemoryStorage, SeedData};
pub use transactions::InMemoryTransactionRepository;

// Re-export from ledger-core for convenience
pub use ledger_core::errors::{DatabaseError, Error, Result};
