//! Shared oracles and canonical fixtures for the lock tests.
//!
//! The oracles are deliberately naive (exhaustive subset enumeration,
//! breadth-first search, full color-vector enumeration) so they share no
//! code with the drivers they check.

use std::collections::{HashSet, VecDeque};

use arbor_harness::policy::RunConfig;
use arbor_harness::report::{report_digest, tree_digest};
use arbor_harness::runner::{enumerate_colorings, solve_knapsack_bnb, solve_puzzle_astar};
use arbor_harness::worlds::puzzle::{Board, GOAL};
use arbor_kernel::proof::hash::ContentHash;
use rand::Rng;

/// Best value over all `2^n` subsets of `(value, weight)` items.
///
/// # Panics
///
/// Panics if there are more than 20 items.
#[must_use]
pub fn brute_force_knapsack(items: &[(u32, u32)], capacity: u64) -> u64 {
    assert!(items.len() <= 20, "brute force is limited to 20 items");
    let mut best = 0;
    for mask in 0u32..(1 << items.len()) {
        let (mut value, mut weight) = (0u64, 0u64);
        for (i, &(v, w)) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                value += u64::from(v);
                weight += u64::from(w);
            }
        }
        if weight <= capacity {
            best = best.max(value);
        }
    }
    best
}

/// Random `(value, weight)` items with both components in `1..=max`.
pub fn random_items<R: Rng>(rng: &mut R, count: usize, max: u32) -> Vec<(u32, u32)> {
    (0..count)
        .map(|_| (rng.random_range(1..=max), rng.random_range(1..=max)))
        .collect()
}

/// Shortest move count from `start` to the goal, searching at most
/// `max_depth` moves deep.
#[must_use]
pub fn bfs_distance(start: Board, max_depth: usize) -> Option<usize> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0)]);
    while let Some((board, depth)) = queue.pop_front() {
        if board == GOAL {
            return Some(depth);
        }
        if depth == max_depth {
            continue;
        }
        for (_, next) in board.successors() {
            if seen.insert(next) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}

/// Every proper coloring of a graph on `0..vertex_count` with colors
/// `1..=colors`, in lexicographic order.
#[must_use]
pub fn brute_force_colorings(
    vertex_count: usize,
    edges: &[(usize, usize)],
    colors: u32,
) -> Vec<Vec<u32>> {
    let mut out = Vec::new();
    let mut current = vec![1u32; vertex_count];
    loop {
        if edges.iter().all(|&(u, v)| current[u] != current[v]) {
            out.push(current.clone());
        }
        // Odometer increment, last vertex fastest.
        let mut position = vertex_count;
        loop {
            if position == 0 {
                return out;
            }
            position -= 1;
            if current[position] < colors {
                current[position] += 1;
                break;
            }
            current[position] = 1;
        }
    }
}

/// Canonical inputs shared by the fixture binary and the in-process tests.
pub mod canonical {
    pub const KNAPSACK_ITEMS: [(u32, u32); 4] = [(10, 2), (10, 4), (12, 6), (18, 9)];
    pub const KNAPSACK_CAPACITY: u64 = 15;

    /// Four moves from the goal (four misplaced tiles, so no shorter path).
    pub const PUZZLE_START: [u32; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 11, 13, 0, 14, 12];

    pub const GRAPH_VERTICES: [&str; 5] = ["a", "b", "c", "d", "e"];
    pub const GRAPH_EDGES: [(&str, &str); 6] = [
        ("a", "b"),
        ("b", "c"),
        ("c", "a"),
        ("c", "d"),
        ("d", "e"),
        ("e", "a"),
    ];
    pub const GRAPH_COLORS: u32 = 3;
}

/// Digests of every canonical run, as `key=value` lines.
///
/// # Panics
///
/// Panics if a canonical input is rejected or a report fails to project,
/// both of which indicate a bug.
#[must_use]
pub fn canonical_digest_lines() -> Vec<String> {
    use canonical::{
        GRAPH_COLORS, GRAPH_EDGES, GRAPH_VERTICES, KNAPSACK_CAPACITY, KNAPSACK_ITEMS, PUZZLE_START,
    };

    let config = RunConfig::default();
    let knapsack = solve_knapsack_bnb(&KNAPSACK_ITEMS, KNAPSACK_CAPACITY, &config.knapsack)
        .expect("canonical knapsack is valid");
    let puzzle =
        solve_puzzle_astar(&PUZZLE_START, &config.puzzle).expect("canonical puzzle is valid");
    let coloring = enumerate_colorings(
        &GRAPH_VERTICES,
        &GRAPH_EDGES,
        GRAPH_COLORS,
        &config.coloring,
    )
    .expect("canonical graph is valid");

    let line = |key: &str, digest: ContentHash| format!("{key}={digest}");
    vec![
        line("config_digest", config.digest().expect("config digest")),
        line("knapsack_digest", report_digest(&knapsack).expect("knapsack digest")),
        line("knapsack_tree_digest", tree_digest(&knapsack).expect("tree digest")),
        format!("knapsack_value={}", knapsack.total_value),
        line("puzzle_digest", report_digest(&puzzle).expect("puzzle digest")),
        format!("puzzle_moves={}", puzzle.move_count()),
        line("coloring_digest", report_digest(&coloring).expect("coloring digest")),
        format!("coloring_solutions={}", coloring.solutions.len()),
    ]
}
