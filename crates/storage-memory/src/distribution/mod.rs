//! In-memory storage for metric subscriptions.

mod repository;

pub use repository::InMemoryDistributingMetricItemRepository;
