use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::generator::WordSource;

#[derive(Embed)]
#[folder = "assets/wordlists/"]
struct WordListAssets;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list `{name}` not found (available: {available})")]
    NotFound { name: String, available: String },
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list `{name}` is malformed")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("word list `{0}` contains no usable words")]
    Empty(String),
}

#[derive(Deserialize)]
struct WordListFile {
    name: String,
    words: Vec<String>,
}

pub struct WordList {
    name: String,
    words: Vec<String>,
    rng: SmallRng,
}

impl WordList {
    /// Looks in the user's word list directory first, then the bundled lists.
    pub fn load(name: &str) -> Result<Self, WordListError> {
        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir
                .join("typr")
                .join("wordlists")
                .join(format!("{name}.json"));
            if user_path.exists() {
                return Self::load_file(&user_path);
            }
        }

        let file = WordListAssets::get(&format!("{name}.json"))
            .ok_or_else(|| WordListError::NotFound {
                name: name.to_string(),
                available: Self::available().join(", "),
            })?;
        let content = String::from_utf8_lossy(file.data.as_ref());
        Self::from_json(name, &content)
    }

    pub fn load_file(path: &Path) -> Result<Self, WordListError> {
        let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&path.display().to_string(), &content)
    }

    /// `origin` names the list in errors until the file's own name is known.
    pub fn from_json(origin: &str, json: &str) -> Result<Self, WordListError> {
        let file: WordListFile =
            serde_json::from_str(json).map_err(|source| WordListError::Parse {
                name: origin.to_string(),
                source,
            })?;

        // Words are joined with single spaces, so anything containing
        // whitespace would break line tracking.
        let words: Vec<String> = file
            .words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty() && !w.chars().any(char::is_whitespace))
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty(file.name));
        }

        Ok(Self {
            name: file.name,
            words,
            rng: SmallRng::from_entropy(),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn available() -> Vec<String> {
        WordListAssets::iter()
            .filter_map(|f| f.strip_suffix(".json").map(|n| n.to_string()))
            .collect()
    }
}

impl WordSource for WordList {
    fn random_words(&mut self, n: usize) -> Vec<String> {
        (0..n)
            .filter_map(|_| self.words.choose(&mut self.rng).cloned())
            .collect()
    }

    fn all_words(&mut self) -> Vec<String> {
        let mut words = self.words.clone();
        words.shuffle(&mut self.rng);
        words
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_bundled_english_list_loads() {
        let list = WordList::from_json(
            "en",
            std::str::from_utf8(WordListAssets::get("en.json").unwrap().data.as_ref()).unwrap(),
        )
        .unwrap();
        assert_eq!(list.name(), "english");
        assert!(list.len() > 100);
        assert!(WordList::available().contains(&"en".to_string()));
    }

    #[test]
    fn test_unknown_list_is_not_found() {
        let err = WordList::load("klingon-does-not-exist").err().unwrap();
        assert!(matches!(err, WordListError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "word list `klingon-does-not-exist` not found (available: en)"
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = WordList::from_json("bad", "{\"name\": \"x\"").err().unwrap();
        assert!(matches!(err, WordListError::Parse { .. }));
    }

    #[test]
    fn test_list_without_usable_words_is_empty_error() {
        let err = WordList::from_json("blank", r#"{"name": "blank", "words": ["", "  ", "a b"]}"#)
            .err()
            .unwrap();
        assert!(matches!(err, WordListError::Empty(_)));
    }

    #[test]
    fn test_random_words_draws_from_list() {
        let mut list = WordList::from_json("t", r#"{"name": "t", "words": ["red", "green", "blue"]}"#)
            .unwrap()
            .with_seed(7);
        let words = list.random_words(20);
        assert_eq!(words.len(), 20);
        assert!(words.iter().all(|w| ["red", "green", "blue"].contains(&w.as_str())));
        assert!(list.random_words(0).is_empty());
    }

    #[test]
    fn test_all_words_is_a_permutation() {
        let mut list = WordList::from_json(
            "t",
            r#"{"name": "t", "words": ["one", "two", "three", "four", "five"]}"#,
        )
        .unwrap()
        .with_seed(42);
        let words = list.all_words();
        assert_eq!(words.len(), 5);
        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_same_seed_same_words() {
        let json = r#"{"name": "t", "words": ["a", "b", "c", "d", "e", "f"]}"#;
        let mut a = WordList::from_json("t", json).unwrap().with_seed(1);
        let mut b = WordList::from_json("t", json).unwrap().with_seed(1);
        assert_eq!(a.random_words(10), b.random_words(10));
    }
}
