//! Transactions module - ledger transactions and their store contract.

mod transactions_model;
mod transactions_traits;

pub use transactions_model::{Transaction, TransactionQuery};
pub use transactions_traits::TransactionRepositoryTrait;
