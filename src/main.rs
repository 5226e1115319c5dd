//! Attach corpus example sentences to a vocabulary list.
//!
//! Usage:
//!   wordbank-enrich                                   # default file names in cwd
//!   wordbank-enrich -v words.txt -s eng.tsv.gz -o out.json
//!   RUST_LOG=debug wordbank-enrich                    # also show the first matches

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wordbank_enrich::config::{DEFAULT_OUTPUT_FILE, DEFAULT_SENTENCES_FILE, DEFAULT_VOCAB_FILE};
use wordbank_enrich::progress::TracingObserver;
use wordbank_enrich::{Config, EnrichError, pipeline};

#[derive(Parser)]
#[command(name = "wordbank-enrich")]
#[command(about = "Attach example sentences from a corpus to vocabulary entries")]
struct Args {
    /// Vocabulary source, blank-line separated blocks
    #[arg(short = 'v', long, default_value = DEFAULT_VOCAB_FILE)]
    vocab: PathBuf,

    /// Sentence corpus (id, lang, text per line); .gz and .zst are decompressed
    #[arg(short = 's', long, default_value = DEFAULT_SENTENCES_FILE)]
    sentences: PathBuf,

    /// Output JSON file, overwritten
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Language code of sentences to keep
    #[arg(long)]
    lang: Option<String>,

    /// Shortest accepted sentence, in characters
    #[arg(long)]
    min_len: Option<usize>,

    /// Longest accepted sentence, in characters
    #[arg(long)]
    max_len: Option<usize>,

    /// Prefix for generated entry ids
    #[arg(long)]
    id_prefix: Option<String>,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config {
            vocab_path: self.vocab,
            sentences_path: self.sentences,
            output_path: self.output,
            ..Config::default()
        };
        if let Some(lang) = self.lang {
            config.lang = lang;
        }
        if let Some(min) = self.min_len {
            config.sentence_len.start = min;
        }
        // exclusive bound internally
        if let Some(max) = self.max_len {
            config.sentence_len.end = max.saturating_add(1);
        }
        if let Some(prefix) = self.id_prefix {
            config.id_prefix = prefix;
        }
        config
    }
}

fn run(config: &Config) -> Result<()> {
    let start = Instant::now();
    let report = pipeline::run(config, &mut TracingObserver)
        .with_context(|| format!("building {}", config.output_path.display()))?;

    info!("total words: {}", report.total_words);
    info!(
        "words with examples: {} ({:.1}%)",
        report.words_with_examples,
        report.coverage()
    );
    info!("completed in {:?}", start.elapsed());
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Args::parse().into_config();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(EnrichError::SourceMissing { path, .. }) = e.downcast_ref::<EnrichError>() {
                error!("source missing: {}", path.display());
            } else {
                error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
