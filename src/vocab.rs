use std::fs;
use std::path::Path;

use crate::error::{BlockError, EnrichError, SourceRole};
use crate::{Category, SrsStats, Status, VocabEntry, Vocabulary};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub blocks: usize,
    pub parsed: usize,
    pub too_short: usize,
    pub empty_header: usize,
    /// Lookup keys taken over by a later block with the same lowercased word
    pub shadowed: usize,
}

impl ParseStats {
    pub fn dropped(&self) -> usize {
        self.too_short + self.empty_header
    }
}

/// Reads the whole vocabulary source. Invalid UTF-8 is replaced, not fatal.
pub fn read_source(path: &Path) -> Result<String, EnrichError> {
    let raw = fs::read(path).map_err(|source| EnrichError::SourceMissing {
        role: SourceRole::Vocabulary,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Splits `content` into runs of non-blank lines. A line holding only
/// whitespace counts as blank.
pub fn blocks(content: &str) -> Vec<Vec<&str>> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn phonetic(line: &str) -> String {
    let segment = line.trim().split("  ").next().unwrap_or_default();
    format!("/{segment}/")
}

/// Builds one entry from a block. `block_index` feeds the id, `rank` (position
/// among parsed entries) feeds the category.
pub fn parse_block(
    lines: &[&str],
    block_index: usize,
    rank: usize,
    id_prefix: &str,
) -> Result<VocabEntry, BlockError> {
    if lines.len() < 2 {
        return Err(BlockError::TooShort(lines.len()));
    }
    let word = lines[0]
        .split_whitespace()
        .next()
        .ok_or(BlockError::EmptyHeader)?;

    let gloss = lines[2..]
        .iter()
        .map(|l| l.trim())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(VocabEntry {
        id: format!("{id_prefix}_{block_index}"),
        word: word.to_string(),
        phonetic: phonetic(lines[1]),
        category: Category::from_rank(rank),
        status: Status::default(),
        gloss,
        examples: Vec::new(),
        note: String::new(),
        srs: SrsStats::default(),
    })
}

pub fn parse_vocabulary(content: &str, id_prefix: &str) -> (Vocabulary, ParseStats) {
    let mut vocab = Vocabulary::new();
    let mut stats = ParseStats::default();

    for (block_index, lines) in blocks(content).iter().enumerate() {
        stats.blocks += 1;
        match parse_block(lines, block_index, vocab.len(), id_prefix) {
            Ok(entry) => {
                if vocab.push(entry) {
                    stats.shadowed += 1;
                }
                stats.parsed += 1;
            }
            Err(BlockError::TooShort(_)) => stats.too_short += 1,
            Err(BlockError::EmptyHeader) => stats.empty_header += 1,
        }
    }

    (vocab, stats)
}
