use thiserror::Error;

use crate::model::{CatalogError, MaterialError, SubjectError};
use crate::quiz::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Material(#[from] MaterialError),
    #[error(transparent)]
    Subject(#[from] SubjectError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
