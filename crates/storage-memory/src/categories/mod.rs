//! In-memory storage for transaction categories.

mod repository;

pub use repository::InMemoryCategoryRepository;
