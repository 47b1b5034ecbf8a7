mod catalog;
mod deck;
mod ids;
mod material;
mod subject;
mod tab;
mod user;

pub use catalog::{Catalog, CatalogError};
pub use deck::FlashcardDeck;
pub use ids::{DeckId, MaterialId, ParseIdError, SubjectId, UserId};
pub use material::{DocumentSource, Material, MaterialError, MaterialKind};
pub use subject::{Subject, SubjectError};
pub use tab::ActiveTab;
pub use user::User;
