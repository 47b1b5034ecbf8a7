use std::sync::Arc;

use rethink_core::model::{Catalog, Subject, SubjectId};
use storage::repository::{CatalogRepository, StorageError};

use crate::error::CatalogServiceError;

/// Loads the study catalog from a repository.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Read user, subjects and decks into one consistent snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    /// Returns `CatalogServiceError::Catalog` if the pieces do not fit together.
    pub async fn load(&self) -> Result<Catalog, CatalogServiceError> {
        let user = self.catalog.current_user().await?;
        let subjects = self.catalog.list_subjects().await?;
        let decks = self.catalog.list_flashcard_decks().await?;
        let catalog = Catalog::new(user, subjects, decks)?;
        tracing::info!(
            subjects = catalog.subjects.len(),
            decks = catalog.flashcard_decks.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Fetch a subject by ID.
    ///
    /// Returns `Ok(None)` when the subject does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn subject(&self, id: SubjectId) -> Result<Option<Subject>, CatalogServiceError> {
        match self.catalog.get_subject(id).await {
            Ok(subject) => Ok(Some(subject)),
            Err(StorageError::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
