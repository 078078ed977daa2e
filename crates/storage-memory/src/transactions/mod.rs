//! In-memory storage for ledger transactions.

mod repository;

pub use repository::InMemoryTransactionRepository;
