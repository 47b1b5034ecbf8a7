use rethink_core::model::{FlashcardDeck, SubjectId};

use super::time_fmt::format_date;

/// UI-ready row for the flashcards tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckRowVm {
    pub name: String,
    pub count_label: String,
    pub last_studied_label: Option<String>,
}

/// Decks belonging to one subject, in catalog order.
#[must_use]
pub fn map_deck_rows(decks: &[FlashcardDeck], subject_id: SubjectId) -> Vec<DeckRowVm> {
    decks
        .iter()
        .filter(|deck| deck.subject_id == subject_id)
        .map(|deck| DeckRowVm {
            name: deck.name.clone(),
            count_label: deck.card_count_label(),
            last_studied_label: deck
                .last_studied_at
                .map(|at| format!("Last studied {}", format_date(at))),
        })
        .collect()
}
