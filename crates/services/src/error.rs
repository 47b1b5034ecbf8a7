//! Shared error types for the services crate.

use thiserror::Error;

use rethink_core::model::CatalogError;
use storage::repository::StorageError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
