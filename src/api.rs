use crate::config::SearchParams;
use crate::dictionary::Dictionary;
use crate::error::{PassForgeError, PfResult};
use crate::geometry::KeyboardLayout;
use crate::optimizer::{Optimizer, Solution};
use crate::scorer::{Cost, DistanceTable};
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    pub layout_name: String,
    pub dictionary_size: usize,
    pub search: SearchParams,
    pub solution: Option<Solution>,
    /// Distance table plus search, wall clock.
    pub elapsed_ms: f64,
}

/// Service: build the distance table for `layout` and find the cheapest
/// password in `dictionary`.
pub fn generate(
    layout: &KeyboardLayout,
    dictionary: &Dictionary,
    params: &SearchParams,
) -> PfResult<GenerateReport> {
    info!(
        "🔎 Searching {} words on '{}' ({} in dictionary)",
        params.word_count,
        layout.name(),
        dictionary.len()
    );

    let start = Instant::now();
    let table = DistanceTable::build(layout)?;
    let optimizer = Optimizer::new(&table, params.clone())?;
    let solution = optimizer.solve(dictionary.words())?;
    let elapsed = start.elapsed();

    match &solution {
        Some(s) => info!("Found '{}' at {} moves in {:?}", s.password, s.cost, elapsed),
        None => info!("No password fits the constraints ({:?})", elapsed),
    }

    Ok(GenerateReport {
        layout_name: layout.name().to_string(),
        dictionary_size: dictionary.len(),
        search: optimizer.params().clone(),
        solution,
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
    })
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhraseScore {
    pub phrase: String,
    pub initial_char: char,
    /// Per word: (word, moves to reach its first key, moves inside it).
    pub words: Vec<(String, Cost, Cost)>,
    pub total: Cost,
}

/// Service: price a given sequence of words the way the optimizer would.
pub fn score_phrase<S: AsRef<str>>(
    table: &DistanceTable,
    initial_char: char,
    words: &[S],
) -> PfResult<PhraseScore> {
    let missing = |text: &str, key: char| {
        PassForgeError::Validation(format!(
            "'{}' uses '{}', which is not on layout '{}'",
            text,
            key,
            table.layout().name()
        ))
    };

    let mut prev = initial_char;
    if table.slot(prev).is_none() {
        return Err(missing(&prev.to_string(), prev));
    }

    let mut parts = Vec::with_capacity(words.len());
    let mut total = 0;
    for word in words {
        let word = word.as_ref();
        if let Some(key) = table.first_missing_key(word) {
            return Err(missing(word, key));
        }
        let Some(first) = word.chars().next() else {
            continue;
        };
        let reach = table.distance(prev, first).unwrap_or(0);
        let inner = table.word_cost(word).unwrap_or(0);
        total += reach + inner;
        parts.push((word.to_string(), reach, inner));
        prev = word.chars().last().unwrap_or(first);
    }

    Ok(PhraseScore {
        phrase: parts.iter().map(|(w, _, _)| w.as_str()).collect(),
        initial_char,
        words: parts,
        total,
    })
}
