use proptest::prelude::*;
use seriesfn::lowest_min;
use seriesfn_types::Series;

fn arb_values() -> impl Strategy<Value = Vec<Option<f64>>> {
    proptest::collection::vec(
        proptest::option::of(-1_000_000.0f64..1_000_000.0),
        0..20,
    )
}

fn arb_series() -> impl Strategy<Value = Series> {
    ("[a-z]{1,8}", arb_values()).prop_map(|(name, values)| {
        let step = 10;
        let end = i64::try_from(values.len()).unwrap_or(0) * step;
        Series::new(name, 0, end, step, values)
    })
}

fn key(s: &Series) -> f64 {
    s.min_value().unwrap_or(f64::INFINITY)
}

proptest! {
    #[test]
    fn returns_exactly_min_n_len_series(
        input in proptest::collection::vec(arb_series(), 0..30),
        n in 0i64..40,
    ) {
        let len = input.len();
        let picked = lowest_min(input, n);
        let expected = usize::try_from(n).unwrap_or(0).min(len);
        prop_assert_eq!(picked.len(), expected);
    }

    #[test]
    fn result_is_sorted_ascending_by_minimum(
        input in proptest::collection::vec(arb_series(), 0..30),
        n in 1i64..40,
    ) {
        let picked = lowest_min(input, n);
        for pair in picked.windows(2) {
            prop_assert!(key(&pair[0]) <= key(&pair[1]));
        }
    }

    #[test]
    fn every_returned_minimum_bounds_every_excluded_one(
        input in proptest::collection::vec(arb_series(), 1..30),
        n in 1i64..30,
    ) {
        let original = input.clone();
        let picked = lowest_min(input, n);

        // Remove each picked series from the original multiset once, so
        // duplicates in the input are excluded exactly once.
        let mut remaining: Vec<&Series> = picked.iter().collect();
        let mut excluded: Vec<&Series> = Vec::new();
        for s in &original {
            if let Some(pos) = remaining.iter().position(|p| *p == s) {
                remaining.swap_remove(pos);
            } else {
                excluded.push(s);
            }
        }

        let max_picked = picked.iter().map(key).fold(f64::NEG_INFINITY, f64::max);
        for s in excluded {
            prop_assert!(max_picked <= key(s));
        }
    }
}
