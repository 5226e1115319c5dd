use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{EnrichError, SourceRole};

static WIDE_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

const FIELD_SEPARATOR: char = '\t';

/// The `language_code, sentence_text` part of an `id, language_code,
/// sentence_text` line. The id is not needed for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub lang: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRejection {
    Blank,
    TooFewFields,
    WrongLanguage,
    OutOfBand,
}

fn three_fields<'a>(mut it: impl Iterator<Item = &'a str>) -> Option<Record<'a>> {
    it.next()?;
    let lang = it.next()?.trim();
    let text = it.next()?.trim();
    Some(Record { lang, text })
}

/// Splits on the tab separator, falling back to runs of two or more
/// whitespace characters. The sentence is the remainder after the second
/// separator.
pub fn split_fields(line: &str) -> Option<Record<'_>> {
    let line = line.trim();
    three_fields(line.splitn(3, FIELD_SEPARATOR))
        .or_else(|| three_fields(WIDE_SPACE_RE.splitn(line, 3)))
}

/// Filter deciding which corpus lines become candidate sentences.
#[derive(Debug, Clone)]
pub struct LineFilter {
    pub lang: String,
    pub len: Range<usize>,
}

impl LineFilter {
    pub fn accept<'a>(&self, line: &'a str) -> Result<Record<'a>, LineRejection> {
        if line.trim().is_empty() {
            return Err(LineRejection::Blank);
        }
        let record = split_fields(line).ok_or(LineRejection::TooFewFields)?;
        if record.lang != self.lang {
            return Err(LineRejection::WrongLanguage);
        }
        if !self.len.contains(&record.text.chars().count()) {
            return Err(LineRejection::OutOfBand);
        }
        Ok(record)
    }
}

/// Forward-only line source over a possibly compressed corpus.
pub struct CorpusReader {
    inner: Box<dyn BufRead>,
    buf: Vec<u8>,
}

impl CorpusReader {
    pub fn new<R: Read + 'static>(raw: R) -> Self {
        CorpusReader {
            inner: Box::new(BufReader::new(raw)),
            buf: Vec::with_capacity(512),
        }
    }

    /// Opens `path`, picking a decoder from the extension (`.gz`, `.zst`).
    pub fn open(path: &Path) -> Result<Self, EnrichError> {
        let missing = |source: io::Error| EnrichError::SourceMissing {
            role: SourceRole::Corpus,
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(missing)?;
        let mut reader = match path.extension().and_then(|e| e.to_str()) {
            Some("gz") => Self::new(flate2::read::GzDecoder::new(file)),
            Some("zst") => Self::new(zstd::Decoder::new(file).map_err(missing)?),
            _ => Self::new(file),
        };
        // directories and bad compression headers only fail on first read
        reader.inner.fill_buf().map_err(missing)?;
        Ok(reader)
    }

    /// Next line without its terminator, lossily decoded. `None` at EOF.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

impl Iterator for CorpusReader {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
