use async_trait::async_trait;
use rethink_core::model::{Catalog, FlashcardDeck, Subject, SubjectId, User};
use std::path::{Path, PathBuf};

use crate::repository::{CatalogRepository, InMemoryRepository, StorageError};

/// Catalog read from a JSON file at startup.
///
/// The file is parsed once; `reload` re-reads it in place.
#[derive(Clone)]
pub struct JsonCatalogRepository {
    path: PathBuf,
    inner: InMemoryRepository,
}

impl JsonCatalogRepository {
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, parsed, or validated.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let catalog = read_catalog(&path)?;
        Ok(Self {
            path,
            inner: InMemoryRepository::new(catalog),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file, keeping the previous catalog if it fails.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, parsed, or validated.
    pub fn reload(&self) -> Result<(), StorageError> {
        let catalog = read_catalog(&self.path)?;
        self.inner.replace(catalog)
    }
}

/// Parse and validate a catalog document.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::InvalidCatalog` for inconsistent ids.
pub fn parse_catalog(raw: &str) -> Result<Catalog, StorageError> {
    let catalog: Catalog = serde_json::from_str(raw)?;
    catalog.validate()?;
    Ok(catalog)
}

fn read_catalog(path: &Path) -> Result<Catalog, StorageError> {
    let raw = std::fs::read_to_string(path)?;
    parse_catalog(&raw)
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepository {
    async fn current_user(&self) -> Result<User, StorageError> {
        self.inner.current_user().await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError> {
        self.inner.list_subjects().await
    }

    async fn get_subject(&self, id: SubjectId) -> Result<Subject, StorageError> {
        self.inner.get_subject(id).await
    }

    async fn list_flashcard_decks(&self) -> Result<Vec<FlashcardDeck>, StorageError> {
        self.inner.list_flashcard_decks().await
    }
}
