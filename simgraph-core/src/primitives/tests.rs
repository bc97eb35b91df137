//! Unit tests for the random graph primitives.

use proptest::{prop_assert, prop_assert_eq, proptest};
use rstest::rstest;

use super::{barabasi_albert_graph, gnp_random_graph, validate_probability};
use crate::{error::GenerationError, random::seeded_rng};

#[rstest]
#[case(0.0)]
#[case(0.25)]
#[case(1.0)]
fn validate_probability_accepts_unit_interval(#[case] p: f64) {
    assert_eq!(validate_probability("p", p), Ok(p));
}

#[rstest]
#[case(-0.1)]
#[case(1.5)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn validate_probability_rejects_out_of_range(#[case] p: f64) {
    let err = validate_probability("p", p).expect_err("probability must be rejected");
    assert!(matches!(
        err,
        GenerationError::InvalidParameter { parameter: "p", .. }
    ));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(12)]
fn gnp_with_zero_probability_has_no_edges(#[case] n: usize) {
    let mut rng = seeded_rng(9);
    let graph = gnp_random_graph(&mut rng, n, 0.0).expect("valid parameters");
    assert_eq!(graph.node_count(), n);
    assert_eq!(graph.edge_count(), 0);
}

#[rstest]
#[case(2, 1)]
#[case(5, 10)]
#[case(16, 120)]
fn gnp_with_unit_probability_is_complete(#[case] n: usize, #[case] edges: usize) {
    let mut rng = seeded_rng(9);
    let graph = gnp_random_graph(&mut rng, n, 1.0).expect("valid parameters");
    assert_eq!(graph.edge_count(), edges);
}

#[rstest]
#[case::smallest_normal(f64::MIN_POSITIVE)]
#[case::below_epsilon(1e-17)]
#[case::tiny(1e-12)]
fn gnp_with_tiny_probability_is_nearly_empty(#[case] p: f64) {
    for seed in 0..10 {
        let graph = gnp_random_graph(&mut seeded_rng(seed), 50, p).expect("valid parameters");
        assert_eq!(graph.node_count(), 50);
        assert!(graph.edge_count() <= 2, "p={p} gave {} edges", graph.edge_count());
    }
}

#[test]
fn gnp_just_below_one_is_nearly_complete() {
    let p = 1.0 - f64::EPSILON;
    for seed in 0..10 {
        let graph = gnp_random_graph(&mut seeded_rng(seed), 50, p).expect("valid parameters");
        assert!(graph.edge_count() >= 1_220, "p={p} gave {} edges", graph.edge_count());
    }
}

#[test]
fn connected_gnp_with_tiny_probability_is_a_spanning_tree() {
    let graph =
        crate::generators::connected_gnp(&mut seeded_rng(1), 50, 1e-17).expect("valid parameters");
    assert!(graph.is_connected());
    assert!(graph.edge_count() <= 51);
}

#[test]
fn gnp_edge_density_tracks_probability() {
    let mut rng = seeded_rng(2024);
    let n = 200;
    let graph = gnp_random_graph(&mut rng, n, 0.1).expect("valid parameters");
    let possible = n * (n - 1) / 2;
    let expected = possible / 10;
    // Standard deviation is about 42 edges; allow a generous band.
    assert!(graph.edge_count().abs_diff(expected) < 300);
}

#[test]
fn gnp_is_deterministic_for_equal_seeds() {
    let first = gnp_random_graph(&mut seeded_rng(17), 40, 0.3).expect("valid parameters");
    let second = gnp_random_graph(&mut seeded_rng(17), 40, 0.3).expect("valid parameters");
    assert_eq!(first, second);
}

#[rstest]
#[case(1, 1)]
#[case(5, 0)]
#[case(5, 5)]
#[case(3, 7)]
fn barabasi_albert_rejects_out_of_range_m(#[case] n: usize, #[case] m: usize) {
    let mut rng = seeded_rng(4);
    let err = barabasi_albert_graph(&mut rng, n, m).expect_err("m must lie in [1, n)");
    assert!(matches!(
        err,
        GenerationError::InvalidParameter {
            parameter: "edges_per_node",
            ..
        }
    ));
}

#[test]
fn barabasi_albert_minimal_graph_is_star() {
    let mut rng = seeded_rng(4);
    let graph = barabasi_albert_graph(&mut rng, 4, 3).expect("valid parameters");
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges, vec![(0, 1), (0, 2), (0, 3)]);
}

proptest! {
    #[test]
    fn gnp_never_emits_invalid_edges(seed in 0_u64..1_000, n in 0_usize..60, p in 0.0_f64..=1.0) {
        let graph = gnp_random_graph(&mut seeded_rng(seed), n, p).expect("valid parameters");
        prop_assert_eq!(graph.node_count(), n);
        prop_assert!(graph.edge_count() <= n * n.saturating_sub(1) / 2);
        for (u, v) in graph.edges() {
            prop_assert!(u < v && v < n);
        }
    }

    #[test]
    fn barabasi_albert_is_connected_with_expected_edges(
        seed in 0_u64..1_000,
        m in 1_usize..5,
        extra in 1_usize..40,
    ) {
        let n = m + extra;
        let graph = barabasi_albert_graph(&mut seeded_rng(seed), n, m).expect("valid parameters");
        prop_assert_eq!(graph.node_count(), n);
        prop_assert_eq!(graph.edge_count(), m * (n - m));
        prop_assert!(graph.is_connected());
    }
}
