//! Graph `k`-coloring as a backtracking enumeration.
//!
//! Vertices are visited in input order and colors `1..=k` are tried in
//! ascending order, so solutions come out in lexicographic order of their
//! color vectors.

use std::collections::HashMap;

use arbor_search::assignment::Assignment;
use arbor_search::contract::ConstraintProblem;

use super::ValidationError;

/// A validated undirected graph plus a palette size.
#[derive(Debug, Clone)]
pub struct ColoringInstance {
    names: Vec<String>,
    /// Vertex indices `0..n`, the visitation order.
    order: Vec<usize>,
    /// Sorted, deduplicated neighbour lists.
    adjacency: Vec<Vec<usize>>,
    colors: u32,
}

impl ColoringInstance {
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an empty or repeated vertex, an edge
    /// touching an unknown vertex, a self-loop, or `colors == 0`.
    pub fn new<S: AsRef<str>>(
        vertices: &[S],
        edges: &[(S, S)],
        colors: u32,
    ) -> Result<Self, ValidationError> {
        if vertices.is_empty() {
            return Err(ValidationError::EmptyVertexSet);
        }
        if colors == 0 {
            return Err(ValidationError::ZeroPalette);
        }

        let mut index = HashMap::with_capacity(vertices.len());
        for (i, name) in vertices.iter().enumerate() {
            if index.insert(name.as_ref(), i).is_some() {
                return Err(ValidationError::DuplicateVertex {
                    vertex: name.as_ref().to_string(),
                });
            }
        }

        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| ValidationError::UnknownEdgeVertex {
                    vertex: name.to_string(),
                })
        };
        let mut adjacency = vec![Vec::new(); vertices.len()];
        for (a, b) in edges {
            let (u, v) = (lookup(a.as_ref())?, lookup(b.as_ref())?);
            if u == v {
                return Err(ValidationError::SelfLoop {
                    vertex: a.as_ref().to_string(),
                });
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        for neighbours in &mut adjacency {
            neighbours.sort_unstable();
            neighbours.dedup();
        }

        Ok(Self {
            names: vertices.iter().map(|s| s.as_ref().to_string()).collect(),
            order: (0..vertices.len()).collect(),
            adjacency,
            colors,
        })
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn name(&self, vertex: usize) -> Option<&str> {
        self.names.get(vertex).map(String::as_str)
    }

    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[usize] {
        self.adjacency.get(vertex).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn colors(&self) -> u32 {
        self.colors
    }

    /// `true` if `coloring` (indexed by vertex) gives every edge two
    /// different colors.
    #[must_use]
    pub fn is_proper(&self, coloring: &[u32]) -> bool {
        coloring.len() == self.names.len()
            && self.adjacency.iter().enumerate().all(|(u, neighbours)| {
                neighbours.iter().all(|&v| coloring[u] != coloring[v])
            })
    }
}

impl ConstraintProblem for ColoringInstance {
    type Var = usize;
    type Value = u32;

    fn variables(&self) -> &[usize] {
        &self.order
    }

    fn domain(&self, _vertex: usize) -> Vec<u32> {
        (1..=self.colors).collect()
    }

    fn is_consistent(&self, vertex: usize, color: u32, assignment: &Assignment<usize, u32>) -> bool {
        self.neighbours(vertex)
            .iter()
            .all(|&n| assignment.get(n) != Some(color))
    }
}
