use std::ops::Range;
use std::path::PathBuf;

use crate::{MAX_EXAMPLES, MAX_SENTENCE_LEN, MIN_SENTENCE_LEN, TARGET_LANG};

pub const DEFAULT_VOCAB_FILE: &str = "30k-explained.txt";
pub const DEFAULT_SENTENCES_FILE: &str = "eng_sentences.tsv";
pub const DEFAULT_OUTPUT_FILE: &str = "vocab_30k.json";
pub const DEFAULT_ID_PREFIX: &str = "30k";

/// Run parameters. Fixed for the duration of one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub vocab_path: PathBuf,
    pub sentences_path: PathBuf,
    pub output_path: PathBuf,
    pub lang: String,
    /// Accepted sentence length in characters
    pub sentence_len: Range<usize>,
    pub max_examples: usize,
    /// Drop a word's lookup key once it holds `max_examples` examples.
    pub retire_full_entries: bool,
    pub id_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vocab_path: PathBuf::from(DEFAULT_VOCAB_FILE),
            sentences_path: PathBuf::from(DEFAULT_SENTENCES_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            lang: TARGET_LANG.to_string(),
            sentence_len: MIN_SENTENCE_LEN..MAX_SENTENCE_LEN,
            max_examples: MAX_EXAMPLES,
            retire_full_entries: true,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}
