use std::io;

use crate::Config;
use crate::corpus::{LineFilter, LineRejection};
use crate::lookup::{Append, Vocabulary};
use crate::progress::{Observer, PROGRESS_INTERVAL, REPORTED_MATCHES};
use crate::tokenize::tokenize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichStats {
    pub lines: usize,
    pub blank: usize,
    pub too_few_fields: usize,
    pub wrong_language: usize,
    pub out_of_band: usize,
    /// Lines that passed every filter and were tokenized
    pub accepted: usize,
    pub examples_added: usize,
    /// Matches rejected because the entry already held the same text
    pub duplicates: usize,
    /// Lookup keys removed once their entry hit the cap
    pub retired: usize,
}

/// Attaches matching corpus sentences to vocabulary entries, one line at a time.
pub struct Enricher<'v> {
    vocab: &'v mut Vocabulary,
    filter: LineFilter,
    cap: usize,
    retire_full: bool,
    stats: EnrichStats,
}

impl<'v> Enricher<'v> {
    pub fn new(vocab: &'v mut Vocabulary, config: &Config) -> Self {
        Enricher {
            vocab,
            filter: LineFilter {
                lang: config.lang.clone(),
                len: config.sentence_len.clone(),
            },
            cap: config.max_examples,
            retire_full: config.retire_full_entries,
            stats: EnrichStats::default(),
        }
    }

    pub fn feed(&mut self, line: &str, observer: &mut dyn Observer) {
        self.stats.lines += 1;
        match self.filter.accept(line) {
            Ok(record) => {
                self.stats.accepted += 1;
                self.attach(record.text, observer);
            }
            Err(LineRejection::Blank) => self.stats.blank += 1,
            Err(LineRejection::TooFewFields) => self.stats.too_few_fields += 1,
            Err(LineRejection::WrongLanguage) => self.stats.wrong_language += 1,
            Err(LineRejection::OutOfBand) => self.stats.out_of_band += 1,
        }
        if self.stats.lines % PROGRESS_INTERVAL == 0 {
            observer.on_progress(&self.stats);
        }
    }

    fn attach(&mut self, text: &str, observer: &mut dyn Observer) {
        for token in tokenize(text) {
            match self.vocab.try_append(&token, text, self.cap) {
                Append::Added => {}
                Append::AddedFull => {
                    if self.retire_full && self.vocab.retire(&token) {
                        self.stats.retired += 1;
                    }
                }
                Append::Duplicate => {
                    self.stats.duplicates += 1;
                    continue;
                }
                Append::Full | Append::NoEntry => continue,
            }
            self.stats.examples_added += 1;
            if self.stats.examples_added <= REPORTED_MATCHES {
                observer.on_match(self.stats.examples_added, &token, text);
            }
        }
    }

    pub fn finish(self) -> EnrichStats {
        self.stats
    }
}

/// Streams `lines` through an [`Enricher`]. Stops on the first read error.
pub fn enrich<I>(
    vocab: &mut Vocabulary,
    config: &Config,
    lines: I,
    observer: &mut dyn Observer,
) -> io::Result<EnrichStats>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut enricher = Enricher::new(vocab, config);
    for line in lines {
        enricher.feed(&line?, observer);
    }
    let stats = enricher.finish();
    observer.on_corpus_done(&stats);
    Ok(stats)
}
