use serde::Serialize;
use serde::ser::SerializeSeq;

pub mod config;
pub mod corpus;
pub mod enrich;
pub mod error;
pub mod lookup;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod tokenize;
pub mod vocab;

pub use config::Config;
pub use error::{BlockError, EnrichError};
pub use lookup::Vocabulary;

/// Cap on examples stored per entry.
pub const MAX_EXAMPLES: usize = 2;

/// Language code a corpus line must carry to be considered.
pub const TARGET_LANG: &str = "eng";

/// Sentence length band in characters, min inclusive, max exclusive.
pub const MIN_SENTENCE_LEN: usize = 5;
pub const MAX_SENTENCE_LEN: usize = 151;

// Rank thresholds, by zero-based position among parsed entries
pub const COMMON_BELOW: usize = 4000;
pub const INTERMEDIATE_BELOW: usize = 8000;
pub const ADVANCED_BELOW: usize = 15000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Common,
    Intermediate,
    Advanced,
    Master,
}

impl Category {
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            r if r < COMMON_BELOW => Category::Common,
            r if r < INTERMEDIATE_BELOW => Category::Intermediate,
            r if r < ADVANCED_BELOW => Category::Advanced,
            _ => Category::Master,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    New,
    Learning,
    Known,
}

/// Spaced-repetition fields. Carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SrsStats {
    pub interval: u32,
    pub repetition: u32,
    pub efactor: f64,
    pub due_date: u64,
}

impl Default for SrsStats {
    fn default() -> Self {
        SrsStats {
            interval: 0,
            repetition: 0,
            efactor: 2.5,
            due_date: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    #[serde(rename = "en")]
    pub sentence_text: String,
    #[serde(rename = "cn")]
    pub translation: String,
}

impl Example {
    pub fn new(sentence_text: &str) -> Self {
        Example {
            sentence_text: sentence_text.to_string(),
            translation: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabEntry {
    pub id: String,
    pub word: String,
    pub phonetic: String,
    pub category: Category,
    pub status: Status,
    // downstream reads the gloss as a one-element definition list
    #[serde(rename = "definitions", serialize_with = "gloss_as_definitions")]
    pub gloss: String,
    pub examples: Vec<Example>,
    pub note: String,
    pub srs: SrsStats,
}

impl VocabEntry {
    pub fn has_example(&self, text: &str) -> bool {
        self.examples.iter().any(|ex| ex.sentence_text == text)
    }
}

#[derive(Serialize)]
struct Definition<'a> {
    pos: &'static str,
    en: &'static str,
    cn: &'a str,
}

fn gloss_as_definitions<S: serde::Serializer>(gloss: &str, s: S) -> Result<S::Ok, S::Error> {
    let mut seq = s.serialize_seq(Some(1))?;
    seq.serialize_element(&Definition {
        pos: "mix",
        en: "",
        cn: gloss,
    })?;
    seq.end()
}
