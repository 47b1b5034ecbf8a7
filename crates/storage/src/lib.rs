#![forbid(unsafe_code)]

pub mod json;
pub mod repository;
pub mod seed;

pub use json::JsonCatalogRepository;
pub use repository::{CatalogRepository, InMemoryRepository, Storage, StorageError};
