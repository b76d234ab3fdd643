use passforge::config::{SearchParams, WordReuse};
use passforge::geometry::KeyboardLayout;
use passforge::optimizer;
use passforge::scorer::DistanceTable;
use proptest::prelude::*;

mod common;

const KEY_POOL: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

// --- STRATEGIES ---

// Left-aligned ragged rows filled with distinct keys. Every row has a key in
// column 0, so the layout is always connected.
prop_compose! {
    fn arb_layout()(
        row_lens in proptest::collection::vec(1usize..=7, 1..=5)
    ) -> KeyboardLayout {
        let mut next = 0;
        let rows: Vec<String> = row_lens
            .iter()
            .map(|&len| {
                let row: String = KEY_POOL[next..next + len].iter().map(|&b| b as char).collect();
                next += len;
                row
            })
            .collect();
        KeyboardLayout::from_rows("prop", &rows).unwrap()
    }
}

prop_compose! {
    fn arb_search()(
        word_count in 1usize..=3,
        min_len in 1usize..=8,
        span in 0usize..=4,
        initial in proptest::sample::select(('a'..='z').collect::<Vec<char>>()),
        forbid in any::<bool>()
    ) -> SearchParams {
        SearchParams {
            reuse: if forbid { WordReuse::Forbidden } else { WordReuse::Allowed },
            ..common::params(word_count, min_len, min_len + span, initial)
        }
    }
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,4}", 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_distances_form_a_metric(layout in arb_layout()) {
        let table = DistanceTable::build(&layout).unwrap();
        let n = table.key_count();
        for a in 0..n {
            prop_assert_eq!(table.slot_distance(a, a), 0);
            for b in 0..n {
                let ab = table.slot_distance(a, b);
                prop_assert_eq!(ab, table.slot_distance(b, a));
                if a != b {
                    prop_assert!(ab >= 1);
                }
                for c in 0..n {
                    prop_assert!(table.slot_distance(a, c) <= ab + table.slot_distance(b, c));
                }
            }
        }
    }

    #[test]
    fn test_neighbors_are_one_move_apart(layout in arb_layout()) {
        let table = DistanceTable::build(&layout).unwrap();
        for slot in 0..layout.key_count() {
            for next in layout.neighbors(slot) {
                prop_assert_eq!(table.slot_distance(slot, next), 1);
            }
        }
    }

    #[test]
    fn test_search_matches_exhaustive_enumeration(
        words in arb_words(),
        params in arb_search()
    ) {
        let table = common::qwerty_table();
        let expected = common::brute_force(&table, &words, &params);
        let found = optimizer::solve(&table, &words, &params).unwrap();

        prop_assert_eq!(found.as_ref().map(|s| s.cost), expected);
        if let Some(solution) = found {
            prop_assert_eq!(solution.words.len(), params.word_count);
            prop_assert!(solution.length >= params.min_len && solution.length <= params.max_len);
            prop_assert_eq!(table.phrase_cost(params.initial_char, &solution.words), Some(solution.cost));
            if params.reuse == WordReuse::Forbidden {
                let mut seen = solution.indices.clone();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), params.word_count);
            }
        }
    }

    #[test]
    fn test_widening_the_window_never_costs_more(
        words in arb_words(),
        params in arb_search()
    ) {
        let table = common::qwerty_table();
        let wider = SearchParams { max_len: params.max_len + 1, ..params.clone() };

        let narrow = optimizer::solve(&table, &words, &params).unwrap();
        let wide = optimizer::solve(&table, &words, &wider).unwrap();

        match (narrow, wide) {
            (Some(n), Some(w)) => prop_assert!(w.cost <= n.cost),
            (Some(_), None) => prop_assert!(false, "wider window lost a solution"),
            _ => {}
        }
    }
}
