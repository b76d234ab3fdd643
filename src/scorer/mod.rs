pub mod bfs;

use crate::error::{PassForgeError, PfResult};
use crate::geometry::KeyboardLayout;
use tracing::debug;

/// Typing effort, in key-to-key moves.
pub type Cost = u32;

/// All-pairs move counts for one layout.
///
/// Built once from a [`KeyboardLayout`] and read-only afterwards. Lookups by
/// slot are infallible; lookups by character return `None` for characters
/// that are not on the layout.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    layout: KeyboardLayout,
    key_count: usize,
    // Row-major [from * key_count + to]
    moves: Vec<Cost>,
}

impl DistanceTable {
    pub fn build(layout: &KeyboardLayout) -> PfResult<Self> {
        let key_count = layout.key_count();
        let mut moves = vec![0; key_count * key_count];

        for origin in 0..key_count {
            let row = bfs::distances_from(layout, origin);
            for (target, dist) in row.into_iter().enumerate() {
                match dist {
                    Some(d) => moves[origin * key_count + target] = d,
                    None => {
                        let keys = layout.keys();
                        return Err(PassForgeError::Validation(format!(
                            "Layout '{}' is not connected: '{}' cannot reach '{}'",
                            layout.name(),
                            keys[origin].key,
                            keys[target].key
                        )));
                    }
                }
            }
        }

        debug!(
            "Built distance table for '{}': {} keys, {} pairs",
            layout.name(),
            key_count,
            moves.len()
        );

        Ok(Self {
            layout: layout.clone(),
            key_count,
            moves,
        })
    }

    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    pub fn key_count(&self) -> usize {
        self.key_count
    }

    #[inline(always)]
    pub fn slot(&self, key: char) -> Option<usize> {
        self.layout.slot_of(key)
    }

    #[inline(always)]
    pub fn slot_distance(&self, from: usize, to: usize) -> Cost {
        self.moves[from * self.key_count + to]
    }

    pub fn distance(&self, a: char, b: char) -> Option<Cost> {
        Some(self.slot_distance(self.slot(a)?, self.slot(b)?))
    }

    /// Moves needed to type `word` once the finger is on its first key.
    /// Empty and single-character words cost nothing.
    pub fn word_cost(&self, word: &str) -> Option<Cost> {
        let slots = self.word_slots(word)?;
        Some(self.slots_cost(&slots))
    }

    /// Moves needed to type `words` back to back starting from `initial`.
    pub fn phrase_cost<S: AsRef<str>>(&self, initial: char, words: &[S]) -> Option<Cost> {
        let mut slots = vec![self.slot(initial)?];
        for word in words {
            slots.extend(self.word_slots(word.as_ref())?);
        }
        Some(self.slots_cost(&slots))
    }

    pub fn word_slots(&self, word: &str) -> Option<Vec<usize>> {
        word.chars().map(|c| self.slot(c)).collect()
    }

    /// First character of `word` that is not on the layout.
    pub fn first_missing_key(&self, word: &str) -> Option<char> {
        word.chars().find(|&c| self.slot(c).is_none())
    }

    pub fn max_distance(&self) -> Cost {
        self.moves.iter().copied().max().unwrap_or(0)
    }

    fn slots_cost(&self, slots: &[usize]) -> Cost {
        slots
            .windows(2)
            .map(|pair| self.slot_distance(pair[0], pair[1]))
            .sum()
    }
}
