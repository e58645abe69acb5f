//! Shared instance generators for the arbor benchmark suites.
//!
//! Every generator is seeded, so a benchmark id always names the same input.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use arbor_harness::worlds::coloring::ColoringInstance;
use arbor_harness::worlds::knapsack::KnapsackInstance;
use arbor_harness::worlds::puzzle::Board;
use arbor_kernel::store::{NodeId, NodeStore};

/// A knapsack of `count` random items with values and weights in `1..=50`
/// and capacity half the total weight.
///
/// # Panics
///
/// Panics if the generated instance fails validation, which would be a bug
/// in the generator.
#[must_use]
pub fn knapsack_instance(seed: u64, count: usize) -> KnapsackInstance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pairs: Vec<(u32, u32)> = (0..count)
        .map(|_| (rng.random_range(1..=50), rng.random_range(1..=50)))
        .collect();
    let capacity = pairs.iter().map(|&(_, w)| u64::from(w)).sum::<u64>() / 2;
    KnapsackInstance::from_pairs(&pairs, capacity).expect("generated items are valid")
}

/// A board `moves` random blank moves from the goal.
#[must_use]
pub fn scrambled_board(seed: u64, moves: usize) -> Board {
    Board::scramble(&mut ChaCha8Rng::seed_from_u64(seed), moves)
}

/// A `G(n, p)` random graph with `colors` colors.
///
/// # Panics
///
/// Panics if `vertices` is zero or `colors` is zero.
#[must_use]
pub fn random_graph(seed: u64, vertices: usize, edge_probability: f64, colors: u32) -> ColoringInstance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let names: Vec<String> = (0..vertices).map(|i| format!("v{i}")).collect();
    let mut edges = Vec::new();
    for u in 0..vertices {
        for v in u + 1..vertices {
            if rng.random_bool(edge_probability) {
                edges.push((names[u].clone(), names[v].clone()));
            }
        }
    }
    ColoringInstance::new(&names, &edges, colors).expect("generated graph is valid")
}

/// `count` distinct node ids, in creation order.
#[must_use]
pub fn node_ids(count: usize) -> Vec<NodeId> {
    let (mut store, root) = NodeStore::with_root((), 0, ());
    let mut ids = vec![root];
    while ids.len() < count {
        ids.push(store.insert_child(root, (), 0, ()));
    }
    ids.truncate(count);
    ids
}
