//! Corpus loading — the two immutable datasets the engines are built from.
//!
//! Both corpora are JSON arrays on disk. Entries get an explicit `id` at load
//! time (their position in the file), and every downstream result carries
//! that id rather than a bare array index. Loading is strict: an unreadable
//! file, malformed JSON, or an empty array is a fatal [`CorpusError`].

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CorpusError;

/// One question/answer pair from the Q&A corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaEntry {
    /// Assigned at load time from the entry's position in the file.
    #[serde(skip_deserializing)]
    pub id: usize,
    pub question: String,
    pub answer: String,
}

/// One recipe from the recommendation corpus.
///
/// `name` is the display name shown to users. The remaining fields are the
/// descriptive terms the sparse matcher is fitted on; all of them are
/// optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeEntry {
    /// Assigned at load time from the entry's position in the file.
    #[serde(skip_deserializing)]
    pub id: usize,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub pantry: Vec<String>,
}

impl RecipeEntry {
    /// Bag-of-words document the vectorizer sees: keywords, season, and
    /// pantry terms joined with spaces.
    pub fn document(&self) -> String {
        let mut parts: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        if !self.season.is_empty() {
            parts.push(&self.season);
        }
        parts.extend(self.pantry.iter().map(String::as_str));
        parts.join(" ")
    }
}

/// Load the Q&A corpus from a JSON file.
pub fn load_qa(path: impl AsRef<Path>) -> Result<Vec<QaEntry>, CorpusError> {
    let path = path.as_ref();
    let mut entries: Vec<QaEntry> = read_entries(path)?;
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.id = position;
    }
    info!(path = %path.display(), entries = entries.len(), "loaded Q&A corpus");
    Ok(entries)
}

/// Load the recipe corpus from a JSON file.
pub fn load_recipes(path: impl AsRef<Path>) -> Result<Vec<RecipeEntry>, CorpusError> {
    let path = path.as_ref();
    let mut entries: Vec<RecipeEntry> = read_entries(path)?;
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.id = position;
    }
    info!(path = %path.display(), entries = entries.len(), "loaded recipe corpus");
    Ok(entries)
}

fn read_entries<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CorpusError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<T> = serde_json::from_str(&contents).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if entries.is_empty() {
        return Err(CorpusError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(keywords: &[&str], season: &str, pantry: &[&str]) -> RecipeEntry {
        RecipeEntry {
            id: 0,
            name: "Test Recipe".to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            season: season.to_string(),
            pantry: pantry.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn document_joins_all_term_sources() {
        let entry = recipe(&["chocolate", "cake"], "winter", &["flour", "cocoa"]);
        assert_eq!(entry.document(), "chocolate cake winter flour cocoa");
    }

    #[test]
    fn document_skips_missing_season() {
        let entry = recipe(&["lemon"], "", &["sugar"]);
        assert_eq!(entry.document(), "lemon sugar");
    }

    #[test]
    fn document_of_bare_entry_is_empty() {
        let entry = recipe(&[], "", &[]);
        assert_eq!(entry.document(), "");
    }

    #[test]
    fn qa_entry_ignores_id_in_file() {
        let entry: QaEntry =
            serde_json::from_str(r#"{"id": 99, "question": "Q?", "answer": "A."}"#).unwrap();
        assert_eq!(entry.id, 0);
        assert_eq!(entry.question, "Q?");
    }

    #[test]
    fn recipe_entry_defaults_optional_fields() {
        let entry: RecipeEntry = serde_json::from_str(r#"{"name": "Brioche"}"#).unwrap();
        assert_eq!(entry.name, "Brioche");
        assert!(entry.keywords.is_empty());
        assert!(entry.season.is_empty());
        assert!(entry.pantry.is_empty());
    }

    #[test]
    fn recipe_entry_requires_name() {
        let result: Result<RecipeEntry, _> = serde_json::from_str(r#"{"season": "fall"}"#);
        assert!(result.is_err());
    }
}
