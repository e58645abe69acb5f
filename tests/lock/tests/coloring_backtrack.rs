//! Backtracking coloring lock tests.
//!
//! The solution list must equal full color-vector enumeration on seeded
//! random graphs, in the same lexicographic order. Undo must be exact: the
//! shared assignment ends empty and every commit is undone, including when a
//! solution limit cuts the run short.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use arbor_harness::report::ColoringReport;
use arbor_harness::runner::enumerate_colorings;
use arbor_harness::worlds::coloring::ColoringInstance;
use arbor_harness::worlds::ValidationError;
use arbor_search::backtrack::{backtrack, BacktrackEvent};
use arbor_search::policy::BacktrackPolicy;
use lock_tests::{brute_force_colorings, canonical};

fn colors_of(report: &ColoringReport) -> Vec<Vec<u32>> {
    report
        .solutions
        .iter()
        .map(|solution| solution.iter().map(|vc| vc.color).collect())
        .collect()
}

fn random_graph(rng: &mut ChaCha8Rng) -> (Vec<String>, Vec<(usize, usize)>) {
    let n = rng.random_range(1..=6);
    let names = (0..n).map(|i| format!("v{i}")).collect();
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            if rng.random_bool(0.4) {
                edges.push((u, v));
            }
        }
    }
    (names, edges)
}

fn named_edges(names: &[String], edges: &[(usize, usize)]) -> Vec<(String, String)> {
    edges
        .iter()
        .map(|&(u, v)| (names[u].clone(), names[v].clone()))
        .collect()
}

#[test]
fn solutions_match_full_enumeration() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xc0105);
    for round in 0..80 {
        let (names, edges) = random_graph(&mut rng);
        let colors = rng.random_range(1..=3);
        let report = enumerate_colorings(
            &names,
            &named_edges(&names, &edges),
            colors,
            &BacktrackPolicy::default(),
        )
        .unwrap();
        let expected = brute_force_colorings(names.len(), &edges, colors);
        assert_eq!(colors_of(&report), expected, "round {round}: {edges:?} k={colors}");
        assert!(!report.truncated);
        assert_eq!(report.stats.solutions, expected.len() as u64);
    }
}

#[test]
fn every_commit_is_undone() {
    let mut rng = ChaCha8Rng::seed_from_u64(19);
    for _ in 0..40 {
        let (names, edges) = random_graph(&mut rng);
        let instance = ColoringInstance::new(&names, &named_edges(&names, &edges), 3).unwrap();
        for limit in [None, Some(1), Some(4)] {
            let policy = BacktrackPolicy {
                solution_limit: limit,
            };
            let outcome = backtrack(&instance, &policy).unwrap();
            assert_eq!(outcome.residual_assignment, 0);
            assert_eq!(outcome.stats.commits, outcome.stats.undos);
            assert_eq!(
                outcome.stats.attempts,
                outcome.stats.commits + outcome.stats.conflicts
            );
            for solution in &outcome.solutions {
                let coloring: Vec<u32> = solution.iter().map(|&(_, c)| c).collect();
                assert!(instance.is_proper(&coloring));
            }
        }
    }
}

#[test]
fn trace_pairs_every_success_with_an_undo() {
    let instance = ColoringInstance::new(
        &canonical::GRAPH_VERTICES,
        &canonical::GRAPH_EDGES,
        canonical::GRAPH_COLORS,
    )
    .unwrap();
    let outcome = backtrack(&instance, &BacktrackPolicy::default()).unwrap();

    let mut live: Vec<(usize, u32)> = Vec::new();
    let mut awaiting_verdict = false;
    for event in &outcome.trace {
        match event.event {
            BacktrackEvent::Trying { depth, .. } => {
                assert!(!awaiting_verdict);
                assert_eq!(depth as usize, live.len());
                awaiting_verdict = true;
            }
            BacktrackEvent::Success { var, value } => {
                assert!(awaiting_verdict);
                awaiting_verdict = false;
                live.push((var, value));
            }
            BacktrackEvent::Backtrack { .. } => {
                assert!(awaiting_verdict);
                awaiting_verdict = false;
            }
            BacktrackEvent::Undone { var, value } => {
                assert_eq!(live.pop(), Some((var, value)));
            }
            BacktrackEvent::SolutionRecorded { .. } => {
                assert_eq!(live.len(), canonical::GRAPH_VERTICES.len());
            }
        }
    }
    assert!(live.is_empty());
}

#[test]
fn small_graphs_have_known_counts() {
    let square = ["a", "b", "c", "d"];
    let square_edges = [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")];
    let policy = BacktrackPolicy::default();

    let two = enumerate_colorings(&square, &square_edges, 2, &policy).unwrap();
    assert_eq!(colors_of(&two), vec![vec![1, 2, 1, 2], vec![2, 1, 2, 1]]);

    let one = enumerate_colorings(&square, &square_edges, 1, &policy).unwrap();
    assert!(one.solutions.is_empty());

    let triangle = enumerate_colorings(
        &["x", "y", "z"],
        &[("x", "y"), ("y", "z"), ("z", "x")],
        3,
        &policy,
    )
    .unwrap();
    assert_eq!(triangle.solutions.len(), 6);

    let edgeless = enumerate_colorings(&["p", "q"], &[], 3, &policy).unwrap();
    assert_eq!(edgeless.solutions.len(), 9);

    let canonical = enumerate_colorings(
        &canonical::GRAPH_VERTICES,
        &canonical::GRAPH_EDGES,
        canonical::GRAPH_COLORS,
        &policy,
    )
    .unwrap();
    assert_eq!(canonical.solutions.len(), 18);
    assert_eq!(canonical.solutions[0][0].vertex, "a");
}

#[test]
fn solution_limit_returns_a_prefix() {
    let full = enumerate_colorings(
        &canonical::GRAPH_VERTICES,
        &canonical::GRAPH_EDGES,
        canonical::GRAPH_COLORS,
        &BacktrackPolicy::default(),
    )
    .unwrap();
    let limited = enumerate_colorings(
        &canonical::GRAPH_VERTICES,
        &canonical::GRAPH_EDGES,
        canonical::GRAPH_COLORS,
        &BacktrackPolicy {
            solution_limit: Some(5),
        },
    )
    .unwrap();
    assert!(limited.truncated);
    assert_eq!(limited.solutions, full.solutions[..5]);

    // A limit equal to the total still counts as a stop.
    let exact = enumerate_colorings(
        &canonical::GRAPH_VERTICES,
        &canonical::GRAPH_EDGES,
        canonical::GRAPH_COLORS,
        &BacktrackPolicy {
            solution_limit: Some(18),
        },
    )
    .unwrap();
    assert_eq!(exact.solutions, full.solutions);
}

#[test]
fn malformed_graphs_are_rejected() {
    let policy = BacktrackPolicy::default();
    let no_vertices: [&str; 0] = [];
    assert!(enumerate_colorings(&no_vertices, &[], 2, &policy).is_err());
    assert!(matches!(
        ColoringInstance::new(&["a"], &[("a", "a")], 2),
        Err(ValidationError::SelfLoop { .. })
    ));
    assert!(matches!(
        ColoringInstance::new(&["a"], &[("a", "b")], 2),
        Err(ValidationError::UnknownEdgeVertex { .. })
    ));
    assert!(matches!(
        ColoringInstance::new(&["a"], &[], 0),
        Err(ValidationError::ZeroPalette)
    ));
    assert!(matches!(
        enumerate_colorings(
            &["a"],
            &[],
            2,
            &BacktrackPolicy {
                solution_limit: Some(0)
            }
        ),
        Err(arbor_harness::runner::RunError::Search(_))
    ));
}
