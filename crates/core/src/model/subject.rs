use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{MaterialId, SubjectId};
use crate::model::material::Material;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubjectError {
    #[error("subject name cannot be empty")]
    EmptyName,
}

/// A course of study grouping learning materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SubjectRecord")]
pub struct Subject {
    id: SubjectId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    materials: Vec<Material>,
    updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct SubjectRecord {
    id: SubjectId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    materials: Vec<Material>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SubjectRecord> for Subject {
    type Error = SubjectError;

    fn try_from(record: SubjectRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.name,
            record.description,
            record.materials,
            record.updated_at,
        )
    }
}

impl Subject {
    /// # Errors
    ///
    /// Returns `SubjectError::EmptyName` if the name is blank.
    pub fn new(
        id: SubjectId,
        name: impl Into<String>,
        description: Option<String>,
        materials: Vec<Material>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, SubjectError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SubjectError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            description,
            materials,
            updated_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> SubjectId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.iter().find(|material| material.id() == id)
    }

    #[must_use]
    pub fn first_textbook(&self) -> Option<&Material> {
        self.materials.iter().find(|material| material.is_textbook())
    }
}
