use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::model::ids::MaterialId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MaterialError {
    #[error("material title cannot be empty")]
    EmptyTitle,

    #[error("document source cannot be empty")]
    EmptySource,
}

//
// ─── DOCUMENT SOURCE ───────────────────────────────────────────────────────────
//

/// Locator handed to the document viewer.
///
/// Absolute URLs are kept parsed; anything else (`/bookneuro.pdf`,
/// `docs/intro.pdf`) is treated as an asset path served next to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DocumentSource {
    AssetPath(String),
    Url(Url),
}

impl DocumentSource {
    /// Parse a raw locator.
    ///
    /// # Errors
    ///
    /// Returns `MaterialError::EmptySource` if the locator is blank.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MaterialError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MaterialError::EmptySource);
        }
        match Url::parse(trimmed) {
            Ok(url) if url.has_host() || url.scheme() == "file" => Ok(Self::Url(url)),
            _ => Ok(Self::AssetPath(trimmed.to_owned())),
        }
    }

    /// String form suitable for an `src`/`href` attribute.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            DocumentSource::AssetPath(path) => path,
            DocumentSource::Url(url) => url.as_str(),
        }
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            DocumentSource::Url(url) => Some(url),
            DocumentSource::AssetPath(_) => None,
        }
    }
}

impl TryFrom<String> for DocumentSource {
    type Error = MaterialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DocumentSource> for String {
    fn from(value: DocumentSource) -> Self {
        value.href().to_owned()
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

//
// ─── MATERIAL ──────────────────────────────────────────────────────────────────
//

/// What kind of resource a material is, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialKind {
    Textbook { source: DocumentSource },
    Video { url: Url },
    Article { url: Url },
    Notes { body: String },
}

impl MaterialKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MaterialKind::Textbook { .. } => "textbook",
            MaterialKind::Video { .. } => "video",
            MaterialKind::Article { .. } => "article",
            MaterialKind::Notes { .. } => "notes",
        }
    }
}

/// A learning resource the user can select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MaterialRecord")]
pub struct Material {
    id: MaterialId,
    title: String,
    #[serde(flatten)]
    kind: MaterialKind,
}

/// Wire shape of a material; validated through `Material::new`.
#[derive(Deserialize)]
struct MaterialRecord {
    id: MaterialId,
    title: String,
    #[serde(flatten)]
    kind: MaterialKind,
}

impl TryFrom<MaterialRecord> for Material {
    type Error = MaterialError;

    fn try_from(record: MaterialRecord) -> Result<Self, Self::Error> {
        Self::new(record.id, record.title, record.kind)
    }
}

impl Material {
    /// # Errors
    ///
    /// Returns `MaterialError::EmptyTitle` if the title is blank.
    pub fn new(
        id: MaterialId,
        title: impl Into<String>,
        kind: MaterialKind,
    ) -> Result<Self, MaterialError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(MaterialError::EmptyTitle);
        }
        Ok(Self { id, title, kind })
    }

    /// Convenience constructor for a textbook backed by a document.
    ///
    /// # Errors
    ///
    /// Returns `MaterialError` if the title or the source is blank.
    pub fn textbook(
        id: MaterialId,
        title: impl Into<String>,
        source: impl AsRef<str>,
    ) -> Result<Self, MaterialError> {
        let source = DocumentSource::parse(source)?;
        Self::new(id, title, MaterialKind::Textbook { source })
    }

    #[must_use]
    pub fn id(&self) -> MaterialId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn kind(&self) -> &MaterialKind {
        &self.kind
    }

    #[must_use]
    pub fn is_textbook(&self) -> bool {
        matches!(self.kind, MaterialKind::Textbook { .. })
    }

    /// The document to display, for textbooks only.
    #[must_use]
    pub fn document_source(&self) -> Option<&DocumentSource> {
        match &self.kind {
            MaterialKind::Textbook { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_asset_paths() {
        let source = DocumentSource::parse("/bookneuro.pdf").unwrap();
        assert_eq!(source, DocumentSource::AssetPath("/bookneuro.pdf".into()));
        assert_eq!(source.href(), "/bookneuro.pdf");
        assert!(source.as_url().is_none());
    }

    #[test]
    fn absolute_urls_are_parsed() {
        let source = DocumentSource::parse(" https://example.org/book.pdf ").unwrap();
        assert_eq!(
            source.as_url().map(Url::as_str),
            Some("https://example.org/book.pdf")
        );
    }

    #[test]
    fn blank_source_is_rejected() {
        assert_eq!(DocumentSource::parse("   "), Err(MaterialError::EmptySource));
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = Material::textbook(MaterialId::new(1), " ", "/a.pdf").unwrap_err();
        assert_eq!(err, MaterialError::EmptyTitle);
    }

    #[test]
    fn only_textbooks_expose_a_document() {
        let book = Material::textbook(MaterialId::new(1), "Neuro", "/bookneuro.pdf").unwrap();
        let notes = Material::new(
            MaterialId::new(2),
            "Notes",
            MaterialKind::Notes {
                body: "cranial nerves".into(),
            },
        )
        .unwrap();

        assert!(book.is_textbook());
        assert!(book.document_source().is_some());
        assert!(!notes.is_textbook());
        assert!(notes.document_source().is_none());
    }

    #[test]
    fn json_uses_type_tag() {
        let book = Material::textbook(MaterialId::new(5), "Neuro", "/bookneuro.pdf").unwrap();
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["type"], "textbook");
        assert_eq!(json["source"], "/bookneuro.pdf");

        let parsed: Material = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn json_with_empty_source_fails() {
        let raw = r#"{"id":1,"title":"Neuro","type":"textbook","source":""}"#;
        assert!(serde_json::from_str::<Material>(raw).is_err());
    }

    #[test]
    fn json_with_blank_title_fails() {
        let raw = r#"{"id":1,"title":"   ","type":"textbook","source":"/a.pdf"}"#;
        let err = serde_json::from_str::<Material>(raw).unwrap_err();
        assert!(err.to_string().contains("material title cannot be empty"), "{err}");
    }
}
