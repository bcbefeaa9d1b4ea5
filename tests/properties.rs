//! Property tests for the differencing core and the local-search driver.

use proptest::prelude::*;
use u_partition::algorithm::Algorithm;
use u_partition::draws::create_rng;
use u_partition::encoding::{
    group_by_labels, prepartition_residue, standard_residue, Encoding, PrepartitionEncoding,
    SignEncoding,
};
use u_partition::heap::MaxHeap;
use u_partition::kk::karmarkar_karp;
use u_partition::search::{LocalSearch, SearchConfig, Strategy as Heuristic};
use u_partition::PartitionError;

/// Integer-valued reals keep every sum exact, so order never matters.
fn values_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u32..1_000_000).prop_map(f64::from), 1..40)
}

proptest! {
    #[test]
    fn heap_pops_in_descending_order(values in prop::collection::vec(-1e6f64..1e6, 0..60)) {
        let mut heap = MaxHeap::from_values(&values);
        let mut expected = values.clone();
        expected.sort_by(|a, b| b.total_cmp(a));

        let mut popped = Vec::with_capacity(values.len());
        while heap.size() > 0 {
            popped.push(heap.pop().unwrap());
        }
        prop_assert_eq!(popped, expected);
        prop_assert!(heap.pop().is_err());
    }

    #[test]
    fn kk_bounded_and_permutation_invariant(values in values_strategy(), seed in any::<u64>()) {
        let residue = karmarkar_karp(&values).unwrap();
        let total: f64 = values.iter().map(|v| v.abs()).sum();
        prop_assert!(residue >= 0.0);
        prop_assert!(residue <= total);

        let mut shuffled = values.clone();
        rand::seq::SliceRandom::shuffle(shuffled.as_mut_slice(), &mut create_rng(seed));
        prop_assert_eq!(karmarkar_karp(&shuffled).unwrap(), residue);
        prop_assert_eq!(karmarkar_karp(&values).unwrap(), residue);
    }

    #[test]
    fn standard_residue_is_abs_dot(
        pairs in prop::collection::vec(((0u32..1_000_000).prop_map(f64::from), any::<bool>()), 1..40)
    ) {
        let values: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let signs: Vec<i8> = pairs.iter().map(|p| if p.1 { 1 } else { -1 }).collect();
        let dot: f64 = values.iter().zip(&signs).map(|(v, &s)| v * f64::from(s)).sum();
        let residue = standard_residue(&values, &signs).unwrap();
        prop_assert!(residue >= 0.0);
        prop_assert_eq!(residue, dot.abs());
    }

    #[test]
    fn empty_groups_only_add_zeros(values in values_strategy(), seed in any::<u64>()) {
        let encoding = PrepartitionEncoding::new(&values).unwrap();
        let labels = encoding.random_solution(&mut create_rng(seed));

        let grouped = group_by_labels(&values, &labels).unwrap();
        prop_assert_eq!(grouped.len(), values.len());
        prop_assert_eq!(grouped.iter().sum::<f64>(), values.iter().sum::<f64>());

        let non_empty: Vec<f64> = (0..values.len())
            .filter(|g| labels.contains(g))
            .map(|g| grouped[g])
            .collect();
        prop_assert_eq!(
            prepartition_residue(&values, &labels).unwrap(),
            karmarkar_karp(&non_empty).unwrap()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn best_never_worse_than_first_candidate(values in values_strategy(), seed in any::<u64>()) {
        let config = SearchConfig::default().with_iterations(300).with_seed(seed);
        let sign = SignEncoding::new(&values).unwrap();
        let prep = PrepartitionEncoding::new(&values).unwrap();
        for strategy in [Heuristic::RepeatedRandom, Heuristic::HillClimbing, Heuristic::SimulatedAnnealing] {
            let r = LocalSearch::run(&sign, strategy, &config).unwrap();
            prop_assert!(r.best_residue >= 0.0);
            prop_assert!(r.best_residue <= r.initial_residue);

            let r = LocalSearch::run(&prep, strategy, &config).unwrap();
            prop_assert!(r.best_residue >= 0.0);
            prop_assert!(r.best_residue <= r.initial_residue);
        }
    }
}

#[test]
fn hill_climbing_never_regresses() {
    let values = u_partition::input::random_instance(50, 1_000_000_000, &mut create_rng(17));
    let config = SearchConfig::default()
        .with_iterations(2_000)
        .with_history_interval(1)
        .with_seed(17);

    let sign = SignEncoding::new(&values).unwrap();
    let r = LocalSearch::run(&sign, Heuristic::HillClimbing, &config).unwrap();
    assert_eq!(r.residue_history.len(), 2_001);
    assert!(r.residue_history.windows(2).all(|w| w[1] <= w[0]));

    let prep = PrepartitionEncoding::new(&values).unwrap();
    let r = LocalSearch::run(&prep, Heuristic::HillClimbing, &config).unwrap();
    assert!(r.residue_history.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn annealing_current_may_worsen_but_best_does_not() {
    let values = u_partition::input::random_instance(50, 1_000_000_000, &mut create_rng(23));
    let config = SearchConfig::default()
        .with_iterations(2_000)
        .with_history_interval(1)
        .with_seed(23);

    let sign = SignEncoding::new(&values).unwrap();
    let r = LocalSearch::run(&sign, Heuristic::SimulatedAnnealing, &config).unwrap();
    // Early temperatures are ~1e10, so strictly worse neighbors get accepted.
    assert!(r.uphill_moves > 0);
    assert!(r.residue_history.windows(2).all(|w| w[1] <= w[0]));

    let prep = PrepartitionEncoding::new(&values).unwrap();
    let r = LocalSearch::run(&prep, Heuristic::SimulatedAnnealing, &config).unwrap();
    assert!(r.uphill_moves > 0);
    assert!(r.residue_history.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn only_annealing_moves_uphill() {
    let values = u_partition::input::random_instance(30, 1_000_000, &mut create_rng(5));
    let sign = SignEncoding::new(&values).unwrap();
    let config = SearchConfig::default().with_iterations(1_000).with_seed(5);
    for strategy in [Heuristic::RepeatedRandom, Heuristic::HillClimbing] {
        let r = LocalSearch::run(&sign, strategy, &config).unwrap();
        assert_eq!(r.uphill_moves, 0);
        assert_eq!(r.accepted_moves, r.improving_moves);
    }
}

#[test]
fn negative_input_rejected_by_every_algorithm() {
    let config = SearchConfig::default().with_iterations(10).with_seed(1);
    for algorithm in Algorithm::ALL {
        for values in [&[-5.0][..], &[3.0, -1.0, 2.0][..]] {
            assert!(
                matches!(
                    algorithm.solve(values, &config),
                    Err(PartitionError::InvalidValue { .. })
                ),
                "{algorithm} accepted {values:?}"
            );
        }
    }
}

#[test]
fn end_to_end_small_instance() {
    let values = [1.0, 7.0, 8.0, 4.0, 6.0, 10.0];
    let sign = SignEncoding::new(&values).unwrap();
    let config = SearchConfig::default().with_seed(2025);

    for strategy in [
        Heuristic::RepeatedRandom,
        Heuristic::HillClimbing,
        Heuristic::SimulatedAnnealing,
    ] {
        let r = LocalSearch::run(&sign, strategy, &config).unwrap();
        assert!(r.best_residue >= 0.0);
        assert!(r.best_residue <= r.initial_residue);
        assert_eq!(r.best_residue, standard_residue(&values, &r.best).unwrap());

        let via_code = Algorithm::Standard(strategy).solve(&values, &config).unwrap();
        assert_eq!(via_code, r.best_residue);
    }
}
