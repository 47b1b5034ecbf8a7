use rethink_core::model::Catalog;

const DEMO_CATALOG: &str = include_str!("../data/demo_catalog.json");

/// The bundled demo catalog: two subjects with textbooks and three decks.
///
/// # Panics
///
/// Panics if the bundled JSON is malformed.
#[must_use]
pub fn demo_catalog() -> Catalog {
    serde_json::from_str(DEMO_CATALOG).expect("bundled demo catalog should be valid")
}
