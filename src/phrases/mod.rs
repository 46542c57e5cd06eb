//! Phrase records and their categories
//!
//! Raw [`Phrase`] records come from a static dataset. At load time each one is
//! run through [`categorize`] once, producing an immutable [`TaggedPhrase`].
//!
//! # Category rules
//!
//! Rules are evaluated in a fixed order and each matching rule overwrites the
//! previous result, so the last matching rule wins:
//!
//! 1. `geral` by default
//! 2. `autor` contains `:` ⇒ `bíblica`
//! 3. `autor` contains "maria" (any case) ⇒ `maria`
//! 4. `frase` contains "deus" or "senhor" (any case) ⇒ `fé`
//! 5. `frase` contains "coragem" or "medo" (any case) ⇒ `encorajamento`

pub mod dataset;
pub mod error;

pub use dataset::{default_dataset, load_dataset, parse_dataset};
pub use error::PhraseError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw phrase record as found in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub frase: String,
    pub autor: String,
}

impl Phrase {
    #[must_use]
    pub fn new(frase: impl Into<String>, autor: impl Into<String>) -> Self {
        Self {
            frase: frase.into(),
            autor: autor.into(),
        }
    }
}

/// Phrase with its derived category
///
/// This is also the persisted shape of a favorite:
/// `{"frase": ..., "autor": ..., "category": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedPhrase {
    pub frase: String,
    pub autor: String,
    pub category: CategoryTag,
}

impl TaggedPhrase {
    /// Text used for copy and share: `"<frase>" - <autor>`
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("\"{}\" - {}", self.frase, self.autor)
    }

    /// Case-insensitive substring match on `frase` or `autor`
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.frase.to_lowercase().contains(needle) || self.autor.to_lowercase().contains(needle)
    }
}

/// One of the five fixed classification labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryTag {
    #[serde(rename = "geral")]
    Geral,
    #[serde(rename = "bíblica")]
    Biblica,
    #[serde(rename = "maria")]
    Maria,
    #[serde(rename = "fé")]
    Fe,
    #[serde(rename = "encorajamento")]
    Encorajamento,
}

impl CategoryTag {
    /// Every tag, in rule order
    pub const ALL: [Self; 5] = [
        Self::Geral,
        Self::Biblica,
        Self::Maria,
        Self::Fe,
        Self::Encorajamento,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Geral => "geral",
            Self::Biblica => "bíblica",
            Self::Maria => "maria",
            Self::Fe => "fé",
            Self::Encorajamento => "encorajamento",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryTag {
    type Err = PhraseError;

    /// Accepts the canonical names plus unaccented spellings (`biblica`, `fe`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "geral" => Ok(Self::Geral),
            "bíblica" | "biblica" => Ok(Self::Biblica),
            "maria" => Ok(Self::Maria),
            "fé" | "fe" => Ok(Self::Fe),
            "encorajamento" => Ok(Self::Encorajamento),
            _ => Err(PhraseError::UnknownCategory(s.to_string())),
        }
    }
}

/// Category constraint for random selection: `todas` or a single tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryTag),
}

impl CategoryFilter {
    pub const ALL_NAME: &'static str = "todas";

    #[must_use]
    pub fn matches(self, tag: CategoryTag) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == tag,
        }
    }

    /// Human label: "Todas categorias" or the capitalised tag
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::All => "Todas categorias".to_string(),
            Self::Only(tag) => capitalize(tag.as_str()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_NAME),
            Self::Only(tag) => tag.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = PhraseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_NAME) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl From<CategoryTag> for CategoryFilter {
    fn from(tag: CategoryTag) -> Self {
        Self::Only(tag)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Derive the category of a phrase (last matching rule wins)
#[must_use]
pub fn category_for(phrase: &Phrase) -> CategoryTag {
    let autor = phrase.autor.to_lowercase();
    let frase = phrase.frase.to_lowercase();

    let mut category = CategoryTag::Geral;
    if phrase.autor.contains(':') {
        category = CategoryTag::Biblica;
    }
    if autor.contains("maria") {
        category = CategoryTag::Maria;
    }
    if frase.contains("deus") || frase.contains("senhor") {
        category = CategoryTag::Fe;
    }
    if frase.contains("coragem") || frase.contains("medo") {
        category = CategoryTag::Encorajamento;
    }
    category
}

/// Tag a raw phrase with its category
#[must_use]
pub fn categorize(phrase: Phrase) -> TaggedPhrase {
    let category = category_for(&phrase);
    TaggedPhrase {
        frase: phrase.frase,
        autor: phrase.autor,
        category,
    }
}
