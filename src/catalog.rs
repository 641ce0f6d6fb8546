//! Catalog model
//!
//! Glossary terms and systems playbooks share one entry shape: a handful of
//! searchable text fields (some localized, some not), a category tag and
//! optional goal and level tags. Catalogs are loaded once and never mutated
//! by the search core.

use crate::error::AppError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Active display language
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            other => Err(AppError::InvalidInput(format!(
                "unknown locale '{}', expected 'ar' or 'en'",
                other
            ))),
        }
    }
}

/// Difficulty level of a playbook
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == token)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown level '{}'", s.trim())))
    }
}

/// A string with an Arabic and an English rendition, either may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: Some(ar.into()),
            en: Some(en.into()),
        }
    }

    /// Text for the given locale; a missing rendition is the empty string
    pub fn pick(&self, locale: Locale) -> &str {
        let text = match locale {
            Locale::Ar => self.ar.as_deref(),
            Locale::En => self.en.as_deref(),
        };
        text.unwrap_or("")
    }
}

/// One searchable field of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TextField {
    /// Same text in every locale (e.g. an English term name)
    Plain(String),
    Localized(LocalizedText),
}

impl TextField {
    pub fn resolve(&self, locale: Locale) -> &str {
        match self {
            TextField::Plain(text) => text,
            TextField::Localized(text) => text.pick(locale),
        }
    }
}

impl From<&str> for TextField {
    fn from(text: &str) -> Self {
        TextField::Plain(text.to_string())
    }
}

impl From<LocalizedText> for TextField {
    fn from(text: LocalizedText) -> Self {
        TextField::Localized(text)
    }
}

/// A glossary term or systems playbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogEntry {
    /// Opaque identifier (slug)
    pub id: String,
    /// Searchable fields, in concatenation order
    #[serde(default)]
    pub fields: Vec<TextField>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
            category: category.into(),
            goal: None,
            level: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<TextField>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// All fields resolved for `locale`, joined by single spaces
    pub fn searchable_text(&self, locale: Locale) -> String {
        self.fields
            .iter()
            .map(|field| field.resolve(locale))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First field resolved for `locale`, used as a display title
    pub fn title(&self, locale: Locale) -> &str {
        self.fields
            .first()
            .map(|field| field.resolve(locale))
            .unwrap_or("")
    }
}

/// On-disk catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CatalogDocument {
    pub entries: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Document(CatalogDocument),
    Bare(Vec<CatalogEntry>),
}

/// Read-only collection of searchable entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a catalog from JSON: either `{"entries": [...]}` or a bare array
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let entries = match file {
            CatalogFile::Document(doc) => doc.entries,
            CatalogFile::Bare(entries) => entries,
        };
        debug!("Parsed catalog with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::NotFound(format!("catalog file {}", path.display()))
            }
            _ => AppError::from(e),
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Self::new(entries)
    }
}
