use std::path::Path;

use tracing::{debug, info, warn};

use crate::enrich::EnrichStats;
use crate::vocab::ParseStats;

/// Corpus lines between two `on_progress` calls.
pub const PROGRESS_INTERVAL: usize = 200_000;

/// Matches reported individually through `on_match` before going quiet.
pub const REPORTED_MATCHES: usize = 3;

/// Receives progress and milestones from a run. All methods default to no-ops.
pub trait Observer {
    fn on_vocabulary(&mut self, _stats: &ParseStats) {}
    fn on_progress(&mut self, _stats: &EnrichStats) {}
    fn on_match(&mut self, _nth: usize, _word: &str, _sentence: &str) {}
    fn on_corpus_done(&mut self, _stats: &EnrichStats) {}
    fn on_corpus_skipped(&mut self, _path: &Path) {}
    fn on_output(&mut self, _path: &Path, _total: usize, _with_examples: usize) {}
}

/// Discards every event.
pub struct Silent;

impl Observer for Silent {}

/// Logs events through `tracing`.
#[derive(Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_vocabulary(&mut self, stats: &ParseStats) {
        info!(
            blocks = stats.blocks,
            dropped = stats.dropped(),
            shadowed = stats.shadowed,
            "loaded {} words",
            stats.parsed
        );
        if stats.parsed == 0 {
            warn!("no words parsed, vocabulary source may have a different format");
        }
    }

    fn on_progress(&mut self, stats: &EnrichStats) {
        info!(
            "processed {} lines... (matches so far: {})",
            stats.lines, stats.examples_added
        );
    }

    fn on_match(&mut self, nth: usize, word: &str, sentence: &str) {
        debug!("match #{nth}: '{word}' -> {sentence:?}");
    }

    fn on_corpus_done(&mut self, stats: &EnrichStats) {
        info!(
            lines = stats.lines,
            accepted = stats.accepted,
            too_few_fields = stats.too_few_fields,
            wrong_language = stats.wrong_language,
            out_of_band = stats.out_of_band,
            duplicates = stats.duplicates,
            retired = stats.retired,
            "corpus done, {} examples added",
            stats.examples_added
        );
    }

    fn on_corpus_skipped(&mut self, path: &Path) {
        warn!(
            "corpus {} not found, writing entries without examples",
            path.display()
        );
    }

    fn on_output(&mut self, path: &Path, total: usize, with_examples: usize) {
        info!(
            "saved {} words ({} with examples) to {}",
            total,
            with_examples,
            path.display()
        );
    }
}
