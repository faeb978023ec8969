//! Static lookup tables used by the extractor
//!
//! Each table ships embedded in the binary as a JSON resource and can be
//! replaced at start-up by a file with the same shape. Tables are read once
//! and never mutated afterwards.

use crate::error::Result;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

const EMBEDDED_STOPWORDS: &str = include_str!("../resources/stopwords.json");
const EMBEDDED_SYNONYMS: &str = include_str!("../resources/synonyms.json");
const EMBEDDED_LEXICON: &str = include_str!("../resources/nouns.json");

/// Tokens that are never reported as ingredients: units, descriptors and
/// single syllables too generic to mean anything on their own.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_STOPWORDS)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading stopwords from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let words: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::from_words(words))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Maps partial or alternative ingredient names to one canonical name.
#[derive(Debug, Clone)]
pub struct SynonymMap {
    entries: HashMap<String, String>,
}

impl SynonymMap {
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SYNONYMS)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading synonyms from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Canonical name for `token`, or `token` itself when it has no entry.
    /// The lookup is a single step: the returned value is never looked up again.
    pub fn canonical<'a>(&'a self, token: &'a str) -> &'a str {
        self.entries.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Known nouns shared by the dictionary-backed analyzers.
#[derive(Debug, Clone)]
pub struct NounLexicon {
    words: HashSet<String>,
    max_chars: usize,
}

impl NounLexicon {
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_LEXICON)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading noun lexicon from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let words: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::from_words(words))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(Into::<String>::into)
            .filter(|w| !w.is_empty())
            .collect();
        let max_chars = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        Self { words, max_chars }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Length in characters of the longest entry
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Longest entry of at least `min_chars` that is a prefix of `chars`, as a
    /// character count
    pub fn longest_prefix(&self, chars: &[char], min_chars: usize) -> Option<usize> {
        let limit = self.max_chars.min(chars.len());
        (min_chars.max(1)..=limit)
            .rev()
            .find(|&len| self.words.contains(&chars[..len].iter().collect::<String>()))
    }

    /// Longest entry of at least `min_chars` that is a suffix of `chars`, as a
    /// character count
    pub fn longest_suffix(&self, chars: &[char], min_chars: usize) -> Option<usize> {
        let limit = self.max_chars.min(chars.len());
        (min_chars.max(1)..=limit).rev().find(|&len| {
            self.words
                .contains(&chars[chars.len() - len..].iter().collect::<String>())
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
