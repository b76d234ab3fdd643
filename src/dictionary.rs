use crate::config::DictionaryFilter;
use crate::error::PfResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Ordered candidate words. Position in the list is the word's identity, so
/// duplicate entries stay distinct choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Keeps the words that pass `filter`, lowercased, in input order.
    pub fn from_words<I, S>(words: I, filter: &DictionaryFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref().as_bytes(), filter))
            .collect();
        Self { words }
    }

    /// Reads a word list: one word per line, anything after the first tab
    /// (frequency counts and the like) is ignored.
    pub fn from_reader<R: Read>(reader: R, filter: &DictionaryFilter) -> PfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut words = Vec::new();
        let mut lines_read = 0;

        for result in rdr.byte_records() {
            let rec = result?;
            lines_read += 1;
            if let Some(word) = rec.get(0).and_then(|raw| normalize(raw, filter)) {
                words.push(word);
            }
        }

        debug!(
            "Scanned {} lines. Kept {} words in {}..={} letters.",
            lines_read,
            words.len(),
            filter.min_word_len,
            filter.max_word_len
        );

        Ok(Self { words })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P, filter: &DictionaryFilter) -> PfResult<Self> {
        let path = path.as_ref();
        info!("📚 Loading dictionary: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file, filter)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub fn is_ascii_alpha(word: &[u8]) -> bool {
    word.iter().all(u8::is_ascii_alphabetic)
}

fn normalize(raw: &[u8], filter: &DictionaryFilter) -> Option<String> {
    let trimmed = raw.trim_ascii();
    if !filter.accepts_len(trimmed.len()) || !is_ascii_alpha(trimmed) {
        return None;
    }
    Some(String::from_utf8_lossy(trimmed).to_ascii_lowercase())
}
