pub mod candidate;
mod distinct;
mod layered;

use crate::config::{SearchParams, WordReuse};
use crate::consts::MAX_SEARCH_CELLS;
use crate::error::{PassForgeError, PfResult};
use crate::scorer::{Cost, DistanceTable};
use serde::Serialize;
use tracing::{debug, info};

/// The cheapest password found for one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// Concatenation of `words`.
    pub password: String,
    /// Chosen words in typing order.
    pub words: Vec<String>,
    /// Positions of `words` in the input list.
    pub indices: Vec<usize>,
    /// Total moves, starting from the initial key.
    pub cost: Cost,
    pub length: usize,
}

/// Engine output: total cost and chosen candidate positions in typing order.
#[derive(Debug, Clone)]
pub(crate) struct Selection {
    pub cost: Cost,
    pub picks: Vec<usize>,
}

pub struct Optimizer<'a> {
    table: &'a DistanceTable,
    params: SearchParams,
    start: usize,
}

impl<'a> Optimizer<'a> {
    /// Checks the search bounds up front so a bad configuration is never
    /// mistaken for "no solution".
    pub fn new(table: &'a DistanceTable, params: SearchParams) -> PfResult<Self> {
        params.validate()?;
        let start = table.slot(params.initial_char).ok_or_else(|| {
            PassForgeError::Config(format!(
                "initial key '{}' is not on layout '{}'",
                params.initial_char,
                table.layout().name()
            ))
        })?;

        Ok(Self {
            table,
            params,
            start,
        })
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Picks exactly `word_count` entries of `words` whose concatenated
    /// length lies in `min_len..=max_len`, minimising total moves.
    ///
    /// `Ok(None)` means the inputs are valid but no combination fits.
    pub fn solve<S: AsRef<str>>(&self, words: &[S]) -> PfResult<Option<Solution>> {
        let p = &self.params;
        let candidates = candidate::compile(self.table, words, p.max_len)?;
        let (Some(shortest), Some(longest)) = (
            candidates.iter().map(|c| c.len).min(),
            candidates.iter().map(|c| c.len).max(),
        ) else {
            info!("No usable words for lengths up to {}.", p.max_len);
            return Ok(None);
        };

        // Nothing past `word_count * longest` can be reached, so the window
        // is clamped before any table is sized from it.
        let max_len = p.max_len.min(p.word_count.saturating_mul(longest));
        if p.min_len > max_len || p.word_count.saturating_mul(shortest) > max_len {
            info!(
                "{} words of {}..={} letters cannot fill {}..={} characters.",
                p.word_count, shortest, longest, p.min_len, p.max_len
            );
            return Ok(None);
        }

        debug!(
            "Searching {} words x {} candidates, length {}..={}, reuse {}",
            p.word_count,
            candidates.len(),
            p.min_len,
            max_len,
            p.reuse
        );

        let selection = match p.reuse {
            WordReuse::Allowed => {
                check_table_size(p.word_count, max_len, self.table.key_count())?;
                layered::search(
                    self.table,
                    &candidates,
                    p.word_count,
                    p.min_len,
                    max_len,
                    self.start,
                    p.parallel,
                )
            }
            WordReuse::Forbidden => distinct::search(
                self.table,
                &candidates,
                p.word_count,
                p.min_len,
                max_len,
                self.start,
                p.state_limit,
            )?,
        };

        Ok(selection.map(|sel| {
            let indices: Vec<usize> = sel.picks.iter().map(|&i| candidates[i].index).collect();
            let words: Vec<String> = indices
                .iter()
                .map(|&i| words[i].as_ref().to_string())
                .collect();
            let password = words.concat();
            Solution {
                length: password.len(),
                password,
                words,
                indices,
                cost: sel.cost,
            }
        }))
    }
}

/// Rejects windows whose layered table would not fit in memory.
fn check_table_size(word_count: usize, max_len: usize, key_count: usize) -> PfResult<()> {
    let cells = word_count
        .checked_add(1)
        .zip(max_len.checked_add(1))
        .and_then(|(layers, lens)| layers.checked_mul(lens))
        .and_then(|n| n.checked_mul(key_count));
    match cells {
        Some(n) if n <= MAX_SEARCH_CELLS => Ok(()),
        _ => Err(PassForgeError::Config(format!(
            "{} words over lengths up to {} need more than {} search cells",
            word_count, max_len, MAX_SEARCH_CELLS
        ))),
    }
}

/// One-shot helper: validate, search, and return the cheapest password.
pub fn solve<S: AsRef<str>>(
    table: &DistanceTable,
    words: &[S],
    params: &SearchParams,
) -> PfResult<Option<Solution>> {
    Optimizer::new(table, params.clone())?.solve(words)
}
