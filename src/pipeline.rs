use std::path::PathBuf;

use crate::corpus::CorpusReader;
use crate::enrich::{EnrichStats, enrich};
use crate::error::EnrichError;
use crate::progress::Observer;
use crate::vocab::{ParseStats, parse_vocabulary, read_source};
use crate::{Config, output};

#[derive(Debug, Clone)]
pub struct RunReport {
    pub parse: ParseStats,
    /// `None` when the corpus could not be opened
    pub enrich: Option<EnrichStats>,
    pub total_words: usize,
    pub words_with_examples: usize,
    pub output_path: PathBuf,
}

impl RunReport {
    pub fn corpus_missing(&self) -> bool {
        self.enrich.is_none()
    }

    pub fn empty_vocabulary(&self) -> bool {
        self.total_words == 0
    }

    /// Percentage of words holding at least one example.
    pub fn coverage(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.words_with_examples as f64 * 100.0 / self.total_words as f64
    }
}

/// Parses the vocabulary, enriches it from the corpus and writes the output.
///
/// A missing vocabulary aborts before anything is written. A missing corpus
/// only skips enrichment.
pub fn run(config: &Config, observer: &mut dyn Observer) -> Result<RunReport, EnrichError> {
    let content = read_source(&config.vocab_path)?;
    let (mut vocab, parse) = parse_vocabulary(&content, &config.id_prefix);
    drop(content);
    observer.on_vocabulary(&parse);

    let enrich_stats = match CorpusReader::open(&config.sentences_path) {
        Ok(reader) => Some(enrich(&mut vocab, config, reader, observer)?),
        Err(e) if e.is_source_missing() => {
            observer.on_corpus_skipped(&config.sentences_path);
            None
        }
        Err(e) => return Err(e),
    };

    let total_words = vocab.len();
    let words_with_examples = vocab.words_with_examples();
    output::save(&config.output_path, vocab.entries())?;
    observer.on_output(&config.output_path, total_words, words_with_examples);

    Ok(RunReport {
        parse,
        enrich: enrich_stats,
        total_words,
        words_with_examples,
        output_path: config.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceRole;
    use crate::progress::Silent;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;

    fn config_in(dir: &Path) -> Config {
        Config {
            vocab_path: dir.join("vocab.txt"),
            sentences_path: dir.join("sentences.tsv"),
            output_path: dir.join("out.json"),
            ..Config::default()
        }
    }

    fn read_output(config: &Config) -> Value {
        serde_json::from_str(&fs::read_to_string(&config.output_path).unwrap()).unwrap()
    }

    #[test]
    fn test_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.vocab_path, "cat\n/kæt/\na small domesticated animal\n").unwrap();
        fs::write(&config.sentences_path, "1\teng\tThe cat sat on the mat.\n").unwrap();

        let report = run(&config, &mut Silent).unwrap();
        assert_eq!(report.total_words, 1);
        assert_eq!(report.words_with_examples, 1);
        assert_eq!(report.coverage(), 100.0);

        let out = read_output(&config);
        let examples = out[0]["examples"].as_array().unwrap();
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0]["en"], "The cat sat on the mat.");
        assert_eq!(out[0]["word"], "cat");
        assert_eq!(out[0]["definitions"][0]["cn"], "a small domesticated animal");
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(
            &config.vocab_path,
            "the\nðə\narticle\n\ncat\nkæt\nanimal\n\ndog\ndɒɡ\nanimal\n",
        )
        .unwrap();
        let corpus: String = (0..50)
            .map(|i| format!("{i}\teng\tThe cat and the dog number {i}.\n"))
            .collect();
        fs::write(&config.sentences_path, corpus).unwrap();

        run(&config, &mut Silent).unwrap();
        let first = fs::read(&config.output_path).unwrap();
        run(&config, &mut Silent).unwrap();
        let second = fs::read(&config.output_path).unwrap();
        assert_eq!(first, second);

        let out = read_output(&config);
        assert_eq!(out[1]["examples"][0]["en"], "The cat and the dog number 0.");
        assert_eq!(out[1]["examples"][1]["en"], "The cat and the dog number 1.");
    }

    #[test]
    fn test_missing_vocabulary_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.sentences_path, "1\teng\tThe cat sat.\n").unwrap();

        match run(&config, &mut Silent) {
            Err(EnrichError::SourceMissing { role, .. }) => assert_eq!(role, SourceRole::Vocabulary),
            other => panic!("expected missing vocabulary, got {other:?}"),
        }
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_missing_corpus_writes_unenriched() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.vocab_path, "cat\nkæt\nanimal\n").unwrap();

        let report = run(&config, &mut Silent).unwrap();
        assert!(report.corpus_missing());
        assert_eq!(report.words_with_examples, 0);

        let out = read_output(&config);
        assert_eq!(out.as_array().unwrap().len(), 1);
        assert!(out[0]["examples"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_corpus_writes_unenriched() {
        let dir = tempfile::tempdir().unwrap();
        let not_gzip = dir.path().join("sentences.tsv.gz");
        fs::write(&not_gzip, "1\teng\tThe cat sat.\n").unwrap();
        let corpus_dir = dir.path().join("corpus");
        fs::create_dir(&corpus_dir).unwrap();

        for sentences_path in [corpus_dir, not_gzip] {
            let config = Config {
                sentences_path,
                ..config_in(dir.path())
            };
            fs::write(&config.vocab_path, "cat\nkæt\nanimal\n").unwrap();
            let _ = fs::remove_file(&config.output_path);

            let report = run(&config, &mut Silent).unwrap();
            assert!(report.corpus_missing());

            let out = read_output(&config);
            assert_eq!(out.as_array().unwrap().len(), 1);
            assert!(out[0]["examples"].as_array().unwrap().is_empty());
        }
    }

    #[test]
    fn test_empty_vocabulary_still_completes() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.vocab_path, "one\n\ntwo\n\nthree\n").unwrap();
        fs::write(&config.sentences_path, "1\teng\tone two three.\n").unwrap();

        let report = run(&config, &mut Silent).unwrap();
        assert!(report.empty_vocabulary());
        assert_eq!(report.parse.too_short, 3);
        assert_eq!(report.coverage(), 0.0);
        assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "[]\n");
    }

    #[test]
    fn test_gzip_corpus() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            sentences_path: dir.path().join("sentences.tsv.gz"),
            ..config_in(dir.path())
        };
        fs::write(&config.vocab_path, "cat\nkæt\nanimal\n").unwrap();
        let mut enc = flate2::write::GzEncoder::new(
            fs::File::create(&config.sentences_path).unwrap(),
            flate2::Compression::default(),
        );
        enc.write_all(b"1\tfra\tLe chat.\n2\teng\tA cat naps.\n").unwrap();
        enc.finish().unwrap();

        let report = run(&config, &mut Silent).unwrap();
        let stats = report.enrich.unwrap();
        assert_eq!(stats.wrong_language, 1);
        assert_eq!(stats.examples_added, 1);
    }
}
