use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::deck::FlashcardDeck;
use crate::model::ids::{DeckId, MaterialId, SubjectId};
use crate::model::material::Material;
use crate::model::subject::Subject;
use crate::model::user::User;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate subject id {0}")]
    DuplicateSubject(SubjectId),

    #[error("duplicate material id {0}")]
    DuplicateMaterial(MaterialId),

    #[error("duplicate deck id {0}")]
    DuplicateDeck(DeckId),

    #[error("deck {deck} references unknown subject {subject}")]
    UnknownSubject { deck: DeckId, subject: SubjectId },
}

/// Read-only snapshot of everything the study screens display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub user: User,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub flashcard_decks: Vec<FlashcardDeck>,
}

impl Catalog {
    /// Build a catalog, checking ids are unique and decks point at known subjects.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` describing the first inconsistency found.
    pub fn new(
        user: User,
        subjects: Vec<Subject>,
        flashcard_decks: Vec<FlashcardDeck>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            user,
            subjects,
            flashcard_decks,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// # Errors
    ///
    /// Returns `CatalogError` describing the first inconsistency found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut subject_ids = HashSet::new();
        let mut material_ids = HashSet::new();
        for subject in &self.subjects {
            if !subject_ids.insert(subject.id()) {
                return Err(CatalogError::DuplicateSubject(subject.id()));
            }
            for material in subject.materials() {
                if !material_ids.insert(material.id()) {
                    return Err(CatalogError::DuplicateMaterial(material.id()));
                }
            }
        }

        let mut deck_ids = HashSet::new();
        for deck in &self.flashcard_decks {
            if !deck_ids.insert(deck.id) {
                return Err(CatalogError::DuplicateDeck(deck.id));
            }
            if !subject_ids.contains(&deck.subject_id) {
                return Err(CatalogError::UnknownSubject {
                    deck: deck.id,
                    subject: deck.subject_id,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id() == id)
    }

    #[must_use]
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.subjects
            .iter()
            .find_map(|subject| subject.material(id))
    }

    pub fn decks_for_subject(&self, id: SubjectId) -> impl Iterator<Item = &FlashcardDeck> {
        self.flashcard_decks
            .iter()
            .filter(move |deck| deck.subject_id == id)
    }

    /// First textbook across all subjects, in catalog order.
    #[must_use]
    pub fn first_textbook(&self) -> Option<&Material> {
        self.subjects.iter().find_map(Subject::first_textbook)
    }
}
