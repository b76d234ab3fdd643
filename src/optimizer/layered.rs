use super::candidate::Candidate;
use super::Selection;
use crate::scorer::{Cost, DistanceTable};
use rayon::prelude::*;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: Cost,
    /// Last slot of the previous layer's cell.
    from: u8,
    /// Position in the candidate list of the word that led here.
    candidate: usize,
}

/// Cheapest way to put the finger on a given first key, per source length.
#[derive(Debug, Clone, Copy)]
struct Entry {
    cost: Cost,
    from: u8,
}

struct Sweep<'a> {
    table: &'a DistanceTable,
    candidates: &'a [Candidate],
    key_count: usize,
    parallel: bool,
}

/// Exact search over (words used, length, last key) with repeats allowed.
///
/// Each layer is pulled from the frozen previous layer one length row at a
/// time, so rows can be filled in parallel and every cell is still scanned
/// in the same order.
pub(super) fn search(
    table: &DistanceTable,
    candidates: &[Candidate],
    word_count: usize,
    min_len: usize,
    max_len: usize,
    start: usize,
    parallel: bool,
) -> Option<Selection> {
    let key_count = table.key_count();
    let sweep = Sweep {
        table,
        candidates,
        key_count,
        parallel,
    };

    let mut root = vec![None; (max_len + 1) * key_count];
    root[start] = Some(Cell {
        cost: 0,
        from: start as u8,
        candidate: 0,
    });

    let mut layers = Vec::with_capacity(word_count + 1);
    layers.push(root);

    for layer in 1..=word_count {
        let next = sweep.advance(&layers[layer - 1]);
        let reached = next.iter().filter(|c| c.is_some()).count();
        debug!("Layer {}: {} reachable states", layer, reached);
        if reached == 0 {
            return None;
        }
        layers.push(next);
    }

    let terminal = &layers[word_count];
    let mut best: Option<(Cost, usize, usize)> = None;
    for len in min_len..=max_len {
        for slot in 0..key_count {
            if let Some(cell) = terminal[len * key_count + slot] {
                if best.map_or(true, |(cost, _, _)| cell.cost < cost) {
                    best = Some((cell.cost, len, slot));
                }
            }
        }
    }

    let (cost, mut len, mut slot) = best?;
    let mut picks = Vec::with_capacity(word_count);
    for layer in (1..=word_count).rev() {
        let cell = layers[layer][len * key_count + slot]?;
        picks.push(cell.candidate);
        len -= candidates[cell.candidate].len;
        slot = cell.from as usize;
    }
    picks.reverse();

    Some(Selection { cost, picks })
}

impl Sweep<'_> {
    fn advance(&self, prev: &[Option<Cell>]) -> Vec<Option<Cell>> {
        let n = self.key_count;

        let mut entries: Vec<Option<Entry>> = vec![None; prev.len()];
        let fill_entries = |(len, row): (usize, &mut [Option<Entry>])| {
            self.fill_entries(&prev[len * n..(len + 1) * n], row)
        };
        if self.parallel {
            entries.par_chunks_mut(n).enumerate().for_each(fill_entries);
        } else {
            entries.chunks_mut(n).enumerate().for_each(fill_entries);
        }

        let mut next: Vec<Option<Cell>> = vec![None; prev.len()];
        let fill_cells = |(len, row): (usize, &mut [Option<Cell>])| {
            self.fill_cells(&entries, len, row)
        };
        if self.parallel {
            next.par_chunks_mut(n).enumerate().for_each(fill_cells);
        } else {
            next.chunks_mut(n).enumerate().for_each(fill_cells);
        }

        next
    }

    fn fill_entries(&self, src: &[Option<Cell>], row: &mut [Option<Entry>]) {
        if src.iter().all(Option::is_none) {
            return;
        }
        for (first, entry) in row.iter_mut().enumerate() {
            for (slot, cell) in src.iter().enumerate() {
                let Some(cell) = cell else { continue };
                let cost = cell.cost + self.table.slot_distance(slot, first);
                if entry.map_or(true, |e| cost < e.cost) {
                    *entry = Some(Entry {
                        cost,
                        from: slot as u8,
                    });
                }
            }
        }
    }

    fn fill_cells(&self, entries: &[Option<Entry>], len: usize, row: &mut [Option<Cell>]) {
        let n = self.key_count;
        for (pos, cand) in self.candidates.iter().enumerate() {
            if cand.len > len {
                continue;
            }
            let src_len = len - cand.len;
            let Some(entry) = entries[src_len * n + cand.first as usize] else {
                continue;
            };
            let cost = entry.cost + cand.cost;
            let target = &mut row[cand.last as usize];
            if target.map_or(true, |t| cost < t.cost) {
                *target = Some(Cell {
                    cost,
                    from: entry.from,
                    candidate: pos,
                });
            }
        }
    }
}
