use crate::error::{PassForgeError, PfResult};
use crate::scorer::{Cost, DistanceTable};
use tracing::debug;

/// A dictionary word reduced to what the search needs to price it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Position in the caller's word list.
    pub index: usize,
    pub len: usize,
    pub first: u8,
    pub last: u8,
    /// Moves inside the word.
    pub cost: Cost,
}

/// Compiles every word that can still fit in `max_len` characters.
///
/// A word with a character the layout does not have is rejected outright
/// rather than silently dropped.
pub fn compile<S: AsRef<str>>(
    table: &DistanceTable,
    words: &[S],
    max_len: usize,
) -> PfResult<Vec<Candidate>> {
    let mut candidates = Vec::with_capacity(words.len());
    let mut skipped = 0;

    for (index, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let Some(slots) = table.word_slots(word) else {
            let missing = table.first_missing_key(word).unwrap_or('?');
            return Err(PassForgeError::Validation(format!(
                "word #{} '{}' uses '{}', which is not on layout '{}'",
                index,
                word,
                missing,
                table.layout().name()
            )));
        };

        let (Some(&first), Some(&last)) = (slots.first(), slots.last()) else {
            skipped += 1;
            continue;
        };
        if slots.len() > max_len {
            skipped += 1;
            continue;
        }

        let cost = slots
            .windows(2)
            .map(|pair| table.slot_distance(pair[0], pair[1]))
            .sum();

        candidates.push(Candidate {
            index,
            len: slots.len(),
            first: first as u8,
            last: last as u8,
            cost,
        });
    }

    debug!(
        "Compiled {} candidates ({} empty or longer than {}).",
        candidates.len(),
        skipped,
        max_len
    );

    Ok(candidates)
}
