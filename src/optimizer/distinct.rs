use super::candidate::Candidate;
use super::Selection;
use crate::error::{PassForgeError, PfResult};
use crate::scorer::{Cost, DistanceTable};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::debug;

/// Words chosen so far, newest first. Paths that share a prefix share nodes.
struct PathNode {
    candidate: usize,
    prev: Option<Rc<PathNode>>,
}

/// Fixed-width bitset over candidate positions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct UsedSet(Box<[u64]>);

impl UsedSet {
    fn empty(capacity: usize) -> Self {
        Self(vec![0; capacity.div_ceil(64)].into_boxed_slice())
    }

    #[inline(always)]
    fn contains(&self, pos: usize) -> bool {
        self.0[pos / 64] & (1 << (pos % 64)) != 0
    }

    fn with(&self, pos: usize) -> Self {
        let mut bits = self.0.clone();
        bits[pos / 64] |= 1 << (pos % 64);
        Self(bits)
    }
}

/// Two partial passwords with the same word set and the same last key have
/// the same future, so only the cheaper one is kept.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct StateKey {
    used: UsedSet,
    last: u8,
}

struct State {
    cost: Cost,
    len: usize,
    path: Option<Rc<PathNode>>,
}

/// Exact search where every candidate may be used at most once.
///
/// The state space grows with the number of distinct word sets, so a layer
/// holding more than `state_limit` states aborts the search.
pub(super) fn search(
    table: &DistanceTable,
    candidates: &[Candidate],
    word_count: usize,
    min_len: usize,
    max_len: usize,
    start: usize,
    state_limit: usize,
) -> PfResult<Option<Selection>> {
    let (Some(shortest), Some(longest)) = (
        candidates.iter().map(|c| c.len).min(),
        candidates.iter().map(|c| c.len).max(),
    ) else {
        return Ok(None);
    };
    if word_count > candidates.len() {
        return Ok(None);
    }

    let mut layer = BTreeMap::new();
    layer.insert(
        StateKey {
            used: UsedSet::empty(candidates.len()),
            last: start as u8,
        },
        State {
            cost: 0,
            len: 0,
            path: None,
        },
    );

    for depth in 1..=word_count {
        let remaining = word_count - depth;
        let mut next: BTreeMap<StateKey, State> = BTreeMap::new();

        for (key, state) in &layer {
            for (pos, cand) in candidates.iter().enumerate() {
                if key.used.contains(pos) {
                    continue;
                }

                let len = state.len + cand.len;
                if len.saturating_add(remaining.saturating_mul(shortest)) > max_len
                    || len.saturating_add(remaining.saturating_mul(longest)) < min_len
                {
                    continue;
                }

                let cost = state.cost
                    + table.slot_distance(key.last as usize, cand.first as usize)
                    + cand.cost;

                let extend = || State {
                    cost,
                    len,
                    path: Some(Rc::new(PathNode {
                        candidate: pos,
                        prev: state.path.clone(),
                    })),
                };

                match next.entry(StateKey {
                    used: key.used.with(pos),
                    last: cand.last,
                }) {
                    Entry::Vacant(slot) => {
                        slot.insert(extend());
                    }
                    Entry::Occupied(mut slot) => {
                        if cost < slot.get().cost {
                            slot.insert(extend());
                        }
                    }
                }

                if next.len() > state_limit {
                    return Err(PassForgeError::StateLimit {
                        layer: depth,
                        states: next.len(),
                        limit: state_limit,
                    });
                }
            }
        }

        debug!("Layer {}: {} distinct word sets", depth, next.len());
        if next.is_empty() {
            return Ok(None);
        }
        layer = next;
    }

    let Some(best) = layer
        .values()
        .filter(|s| s.len >= min_len && s.len <= max_len)
        .reduce(|best, s| if s.cost < best.cost { s } else { best })
    else {
        return Ok(None);
    };

    let mut picks = Vec::with_capacity(word_count);
    let mut node = best.path.as_deref();
    while let Some(n) = node {
        picks.push(n.candidate);
        node = n.prev.as_deref();
    }
    picks.reverse();

    Ok(Some(Selection {
        cost: best.cost,
        picks,
    }))
}
