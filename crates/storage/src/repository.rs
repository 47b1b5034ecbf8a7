use async_trait::async_trait;
use rethink_core::model::{Catalog, CatalogError, FlashcardDeck, Subject, SubjectId, User};
use std::path::Path;
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::json::JsonCatalogRepository;
use crate::seed::demo_catalog;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("storage lock poisoned: {0}")]
    Poisoned(String),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidCatalog(#[from] CatalogError),
}

/// Read access to the study catalog (user, subjects, decks).
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// The signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn current_user(&self) -> Result<User, StorageError>;

    /// All subjects in display order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError>;

    /// Fetch one subject by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_subject(&self, id: SubjectId) -> Result<Subject, StorageError>;

    /// All flashcard decks across subjects.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_flashcard_decks(&self) -> Result<Vec<FlashcardDeck>, StorageError>;
}

/// In-memory catalog, seeded with the demo data by default.
#[derive(Clone)]
pub struct InMemoryRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    #[must_use]
    pub fn seeded() -> Self {
        Self::new(demo_catalog())
    }

    /// Swap the whole catalog, validating it first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidCatalog` if ids clash, or `Poisoned` on lock failure.
    pub fn replace(&self, catalog: Catalog) -> Result<(), StorageError> {
        catalog.validate()?;
        let mut guard = self
            .catalog
            .write()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        *guard = catalog;
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&Catalog) -> T) -> Result<T, StorageError> {
        let guard = self
            .catalog
            .read()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(f(&guard))
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryRepository {
    async fn current_user(&self) -> Result<User, StorageError> {
        self.read(|catalog| catalog.user.clone())
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError> {
        self.read(|catalog| catalog.subjects.clone())
    }

    async fn get_subject(&self, id: SubjectId) -> Result<Subject, StorageError> {
        self.read(|catalog| catalog.subject(id).cloned())?
            .ok_or(StorageError::NotFound)
    }

    async fn list_flashcard_decks(&self) -> Result<Vec<FlashcardDeck>, StorageError> {
        self.read(|catalog| catalog.flashcard_decks.clone())
    }
}

/// Catalog backend behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            catalog: Arc::new(InMemoryRepository::seeded()),
        }
    }

    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file is unreadable or malformed.
    pub fn json(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let repo = JsonCatalogRepository::open(path)?;
        Ok(Self {
            catalog: Arc::new(repo),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rethink_core::model::{MaterialId, UserId};
    use rethink_core::time::fixed_now;

    #[tokio::test]
    async fn seeded_repository_serves_demo_catalog() {
        let repo = InMemoryRepository::seeded();
        let user = repo.current_user().await.unwrap();
        assert!(!user.name.is_empty());

        let subjects = repo.list_subjects().await.unwrap();
        assert!(subjects.iter().any(|s| s.first_textbook().is_some()));

        let decks = repo.list_flashcard_decks().await.unwrap();
        assert!(!decks.is_empty());
    }

    #[tokio::test]
    async fn missing_subject_is_not_found() {
        let repo = InMemoryRepository::seeded();
        let err = repo.get_subject(SubjectId::new(9_999)).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn replace_rejects_inconsistent_catalog() {
        let repo = InMemoryRepository::seeded();
        let user = User::new(UserId::new(2), "Kim", "kim@example.org");
        let book = rethink_core::model::Material::textbook(MaterialId::new(1), "A", "/a.pdf")
            .unwrap();
        let subject = |id| {
            Subject::new(SubjectId::new(id), "S", None, vec![book.clone()], fixed_now()).unwrap()
        };
        let broken = Catalog {
            user,
            subjects: vec![subject(501), subject(502)],
            flashcard_decks: Vec::new(),
        };

        let err = repo.replace(broken).unwrap_err();
        assert!(matches!(err, StorageError::InvalidCatalog(_)));
        assert!(repo.get_subject(SubjectId::new(502)).await.is_err());
    }
}
