#![allow(dead_code)]

use passforge::config::{SearchParams, WordReuse};
use passforge::geometry::KeyboardLayout;
use passforge::layouts::KnownLayout;
use passforge::scorer::{Cost, DistanceTable};

pub fn qwerty() -> KeyboardLayout {
    KnownLayout::Qwerty.to_layout().unwrap()
}

pub fn qwerty_table() -> DistanceTable {
    DistanceTable::build(&qwerty()).unwrap()
}

pub fn params(word_count: usize, min_len: usize, max_len: usize, initial_char: char) -> SearchParams {
    SearchParams {
        word_count,
        min_len,
        max_len,
        initial_char,
        ..Default::default()
    }
}

pub fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Cheapest cost over every ordered tuple of `word_count` entries.
pub fn brute_force(table: &DistanceTable, words: &[String], params: &SearchParams) -> Option<Cost> {
    let distinct = params.reuse == WordReuse::Forbidden;
    let mut best = None;
    let mut picks = Vec::with_capacity(params.word_count);
    walk(table, words, params, distinct, &mut picks, &mut best);
    best
}

fn walk(
    table: &DistanceTable,
    words: &[String],
    params: &SearchParams,
    distinct: bool,
    picks: &mut Vec<usize>,
    best: &mut Option<Cost>,
) {
    if picks.len() == params.word_count {
        let len: usize = picks.iter().map(|&i| words[i].len()).sum();
        if len < params.min_len || len > params.max_len {
            return;
        }
        let chosen: Vec<&str> = picks.iter().map(|&i| words[i].as_str()).collect();
        let cost = table.phrase_cost(params.initial_char, &chosen).unwrap();
        if best.map_or(true, |b| cost < b) {
            *best = Some(cost);
        }
        return;
    }
    for i in 0..words.len() {
        if distinct && picks.contains(&i) {
            continue;
        }
        picks.push(i);
        walk(table, words, params, distinct, picks, best);
        picks.pop();
    }
}
