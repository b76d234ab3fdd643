use crate::error::{PassForgeError, PfResult};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::Display;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub dictionary: DictionaryFilter,
}

/// Whether one dictionary entry may be picked more than once.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WordReuse {
    /// Same entry may repeat; exact polynomial search.
    #[default]
    Allowed,
    /// Every entry at most once; exact search over used-word sets.
    Forbidden,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Number of words in the password
    #[arg(short = 'k', long = "words", default_value_t = 4)]
    pub word_count: usize,
    /// Minimum password length (inclusive)
    #[arg(long, default_value_t = 20)]
    pub min_len: usize,
    /// Maximum password length (inclusive)
    #[arg(long, default_value_t = 24)]
    pub max_len: usize,
    /// Key the finger rests on before typing starts
    #[arg(long, default_value_t = 'g')]
    pub initial_char: char,
    #[arg(long, value_enum, default_value_t = WordReuse::Allowed)]
    pub reuse: WordReuse,
    /// Upper bound on live states per layer when reuse is forbidden
    #[arg(long, default_value_t = 2_000_000)]
    pub state_limit: usize,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub parallel: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            word_count: 4,
            min_len: 20,
            max_len: 24,
            initial_char: 'g',
            reuse: WordReuse::Allowed,
            state_limit: 2_000_000,
            parallel: true,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryFilter {
    #[arg(long, default_value_t = 1)]
    pub min_word_len: usize,
    #[arg(long, default_value_t = 24)]
    pub max_word_len: usize,
}

impl Default for DictionaryFilter {
    fn default() -> Self {
        Self {
            min_word_len: 1,
            max_word_len: 24,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every value the user typed explicitly on the command line over
    /// the values loaded from a profile.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.word_count);
        update_if_present!(search.min_len);
        update_if_present!(search.max_len);
        update_if_present!(search.initial_char);
        update_if_present!(search.reuse);
        update_if_present!(search.state_limit);
        update_if_present!(search.parallel);

        update_if_present!(dictionary.min_word_len);
        update_if_present!(dictionary.max_word_len);
    }

    pub fn validate(&self) -> PfResult<()> {
        self.search.validate()?;
        self.dictionary.validate()
    }
}

impl SearchParams {
    pub fn validate(&self) -> PfResult<()> {
        if self.word_count == 0 {
            return Err(PassForgeError::Config(
                "word count must be at least 1".to_string(),
            ));
        }
        if self.max_len == 0 {
            return Err(PassForgeError::Config(
                "max length must be at least 1".to_string(),
            ));
        }
        if self.min_len > self.max_len {
            return Err(PassForgeError::Config(format!(
                "min length {} exceeds max length {}",
                self.min_len, self.max_len
            )));
        }
        if self.state_limit == 0 {
            return Err(PassForgeError::Config(
                "state limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl DictionaryFilter {
    pub fn validate(&self) -> PfResult<()> {
        if self.min_word_len == 0 {
            return Err(PassForgeError::Config(
                "min word length must be at least 1".to_string(),
            ));
        }
        if self.min_word_len > self.max_word_len {
            return Err(PassForgeError::Config(format!(
                "min word length {} exceeds max word length {}",
                self.min_word_len, self.max_word_len
            )));
        }
        Ok(())
    }

    #[inline(always)]
    pub fn accepts_len(&self, len: usize) -> bool {
        len >= self.min_word_len && len <= self.max_word_len
    }
}
