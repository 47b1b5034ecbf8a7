use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{DeckId, SubjectId};

/// A flashcard deck shown next to a subject's materials.
///
/// Only the summary is carried here; card contents are not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardDeck {
    pub id: DeckId,
    pub subject_id: SubjectId,
    pub name: String,
    pub card_count: u32,
    #[serde(default)]
    pub last_studied_at: Option<DateTime<Utc>>,
}

impl FlashcardDeck {
    #[must_use]
    pub fn new(id: DeckId, subject_id: SubjectId, name: impl Into<String>, card_count: u32) -> Self {
        Self {
            id,
            subject_id,
            name: name.into(),
            card_count,
            last_studied_at: None,
        }
    }

    #[must_use]
    pub fn with_last_studied_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_studied_at = Some(at);
        self
    }

    #[must_use]
    pub fn card_count_label(&self) -> String {
        match self.card_count {
            1 => "1 card".to_owned(),
            n => format!("{n} cards"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_count_label_pluralizes() {
        let one = FlashcardDeck::new(DeckId::new(1), SubjectId::new(1), "Nerves", 1);
        let many = FlashcardDeck::new(DeckId::new(2), SubjectId::new(1), "Lobes", 12);
        assert_eq!(one.card_count_label(), "1 card");
        assert_eq!(many.card_count_label(), "12 cards");
    }
}
