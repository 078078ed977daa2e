//! Categories module - transaction categories and their hierarchy.

mod categories_model;
mod categories_service;
mod categories_traits;

pub use categories_model::TransactionCategory;
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
