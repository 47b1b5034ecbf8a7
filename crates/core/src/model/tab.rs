use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the active tab in the subject view.
///
/// Any string is accepted; the known tabs are exposed as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveTab(String);

impl ActiveTab {
    pub const MATERIAL: &'static str = "material";
    pub const FLASHCARDS: &'static str = "flashcards";

    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn material() -> Self {
        Self::new(Self::MATERIAL)
    }

    #[must_use]
    pub fn flashcards() -> Self {
        Self::new(Self::FLASHCARDS)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is(&self, id: &str) -> bool {
        self.0 == id
    }
}

impl Default for ActiveTab {
    fn default() -> Self {
        Self::material()
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
