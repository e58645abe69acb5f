//! In-process determinism lock tests.
//!
//! - N>=10 runs of each driver yield byte-identical report bytes.
//! - Trace digests are stable and sensitive to the policy.
//! - The canonical digest lines are stable and carry the expected values.
//! - Report bytes contain no floating point numbers.

use arbor_harness::policy::RunConfig;
use arbor_harness::report::{report_bytes, report_digest, tree_digest};
use arbor_harness::runner::{enumerate_colorings, solve_knapsack_bnb, solve_puzzle_astar};
use arbor_search::policy::{BnbPolicy, FrontierDiscipline};
use arbor_search::trace::trace_digest;
use lock_tests::{canonical, canonical_digest_lines};

fn knapsack_bytes(policy: &BnbPolicy) -> Vec<u8> {
    let report = solve_knapsack_bnb(
        &canonical::KNAPSACK_ITEMS,
        canonical::KNAPSACK_CAPACITY,
        policy,
    )
    .unwrap();
    report_bytes(&report).unwrap()
}

#[test]
fn knapsack_report_bytes_are_stable_n10() {
    let policy = BnbPolicy::default();
    let first = knapsack_bytes(&policy);
    for i in 1..=10 {
        assert_eq!(knapsack_bytes(&policy), first, "run {i} diverged");
    }
}

#[test]
fn puzzle_report_bytes_are_stable_n10() {
    let config = RunConfig::default();
    let first = solve_puzzle_astar(&canonical::PUZZLE_START, &config.puzzle).unwrap();
    let first_bytes = report_bytes(&first).unwrap();
    for i in 1..=10 {
        let again = solve_puzzle_astar(&canonical::PUZZLE_START, &config.puzzle).unwrap();
        assert_eq!(report_bytes(&again).unwrap(), first_bytes, "run {i} diverged");
        assert_eq!(
            trace_digest(&again.trace_events).unwrap(),
            trace_digest(&first.trace_events).unwrap()
        );
    }
}

#[test]
fn coloring_report_bytes_are_stable_n10() {
    let config = RunConfig::default();
    let run = || {
        enumerate_colorings(
            &canonical::GRAPH_VERTICES,
            &canonical::GRAPH_EDGES,
            canonical::GRAPH_COLORS,
            &config.coloring,
        )
        .unwrap()
    };
    let first = report_digest(&run()).unwrap();
    for i in 1..=10 {
        assert_eq!(report_digest(&run()).unwrap(), first, "run {i} diverged");
    }
}

#[test]
fn frontier_discipline_changes_the_trace_not_the_answer() {
    let run = |frontier| {
        solve_knapsack_bnb(
            &canonical::KNAPSACK_ITEMS,
            canonical::KNAPSACK_CAPACITY,
            &BnbPolicy { frontier },
        )
        .unwrap()
    };
    let least_cost = run(FrontierDiscipline::LeastCost);
    let fifo = run(FrontierDiscipline::Fifo);
    assert_eq!(least_cost.selected_ids, fifo.selected_ids);
    assert_eq!(least_cost.total_value, fifo.total_value);
    assert_ne!(
        trace_digest(&least_cost.trace_events).unwrap(),
        trace_digest(&fifo.trace_events).unwrap()
    );
    assert_ne!(tree_digest(&least_cost).unwrap(), tree_digest(&fifo).unwrap());
}

#[test]
fn canonical_digest_lines_are_stable() {
    let first = canonical_digest_lines();
    for _ in 0..10 {
        assert_eq!(canonical_digest_lines(), first);
    }
    assert!(first.contains(&"knapsack_value=38".to_string()));
    assert!(first.contains(&"puzzle_moves=4".to_string()));
    assert!(first.contains(&"coloring_solutions=18".to_string()));
    for line in first.iter().filter(|l| l.contains("_digest=")) {
        assert!(line.contains("=sha256:"), "unexpected digest line {line}");
    }
}

#[test]
fn report_bytes_are_integer_only() {
    let bytes = knapsack_bytes(&BnbPolicy::default());
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let mut stack = vec![&value];
    while let Some(v) = stack.pop() {
        match v {
            serde_json::Value::Number(n) => assert!(n.is_i64() || n.is_u64(), "float {n}"),
            serde_json::Value::Array(items) => stack.extend(items),
            serde_json::Value::Object(map) => stack.extend(map.values()),
            _ => {}
        }
    }
}
