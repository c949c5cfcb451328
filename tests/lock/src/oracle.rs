//! Brute-force reference answers and seeded input generators.
//!
//! Everything here is exhaustive and slow on purpose. Inputs stay small
//! enough that enumerating every simple path or every complete selection
//! is cheap.

use costwise_kernel::model::{ConfigSpace, GraphModel, VertexId};
use costwise_search::config::CompleteConfigV1;

/// Fixed-seed linear congruential generator (Knuth MMIX constants).
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state >> 33
    }

    /// Uniform-ish value in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Directed graph with `vertices` vertices where each ordered pair gets an
/// edge with probability `edge_permille / 1000`. Weights are whole numbers
/// in `0..=max_weight`, so every path sum is exact.
#[must_use]
pub fn random_graph(seed: u64, vertices: usize, edge_permille: u64, max_weight: u64) -> GraphModel {
    let mut rng = Lcg::new(seed);
    let mut graph = GraphModel::with_vertices(vertices);
    for from in 0..vertices {
        for to in 0..vertices {
            if from == to || rng.below(1000) >= edge_permille {
                continue;
            }
            #[allow(clippy::cast_precision_loss)]
            let weight = rng.below(max_weight + 1) as f64;
            graph
                .add_edge(from, to, weight)
                .unwrap_or_else(|e| panic!("generated edge {from}->{to}: {e}"));
        }
    }
    graph
}

/// Minimum cost over every simple path from `source` to `goal`, or `None`
/// if no path exists. Requires non-negative weights.
#[must_use]
pub fn cheapest_simple_path(graph: &GraphModel, source: VertexId, goal: VertexId) -> Option<f64> {
    let mut on_path = vec![false; graph.vertex_count()];
    let mut best: Option<f64> = None;
    walk(graph, source, goal, 0.0, &mut on_path, &mut best);
    best
}

fn walk(
    graph: &GraphModel,
    at: VertexId,
    goal: VertexId,
    cost: f64,
    on_path: &mut [bool],
    best: &mut Option<f64>,
) {
    if at == goal {
        let improves = match *best {
            Some(b) => cost < b,
            None => true,
        };
        if improves {
            *best = Some(cost);
        }
        return;
    }
    on_path[at] = true;
    for edge in graph.neighbors(at) {
        if !on_path[edge.target] {
            walk(graph, edge.target, goal, cost + edge.weight, on_path, best);
        }
    }
    on_path[at] = false;
}

/// Every complete selection of `space`, in lexicographic index order.
#[must_use]
pub fn all_selections(space: &ConfigSpace) -> Vec<Vec<usize>> {
    let mut out = vec![Vec::new()];
    for category in space.categories() {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..category.items.len()).map(move |i| {
                    let mut next = prefix.clone();
                    next.push(i);
                    next
                })
            })
            .collect();
    }
    out
}

/// Highest ratio among eligible complete selections under `budget`.
#[must_use]
pub fn best_ratio(space: &ConfigSpace, budget: f64) -> Option<f64> {
    all_selections(space)
        .iter()
        .filter_map(|s| CompleteConfigV1::evaluate(space, s))
        .filter(|c| c.is_eligible(budget))
        .map(|c| c.ratio)
        .reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcg_is_reproducible() {
        let mut a = Lcg::new(7);
        let mut b = Lcg::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn simple_path_oracle_on_line() {
        let mut g = GraphModel::with_vertices(3);
        g.add_edge(0, 1, 2.0).unwrap();
        g.add_edge(1, 2, 3.0).unwrap();
        g.add_edge(0, 2, 9.0).unwrap();
        assert_eq!(cheapest_simple_path(&g, 0, 2), Some(5.0));
        assert_eq!(cheapest_simple_path(&g, 2, 0), None);
        assert_eq!(cheapest_simple_path(&g, 1, 1), Some(0.0));
    }
}
