//! Shared input builders for costwise benchmark suites.
//!
//! Inputs are deterministic functions of their size parameters so runs are
//! comparable across machines and commits.

use costwise_kernel::model::{ConfigSpace, GraphModel};

/// Square grid of `side * side` vertices with undirected edges to the
/// right and below. Weights cycle through 1..=7 so many ties and many
/// stale entries occur.
///
/// # Panics
///
/// Panics if graph construction fails. Benchmark setup failures are fatal.
#[must_use]
pub fn grid_graph(side: usize) -> GraphModel {
    let mut graph = GraphModel::with_vertices(side * side);
    let mut k = 0u32;
    for row in 0..side {
        for col in 0..side {
            let here = row * side + col;
            if col + 1 < side {
                k += 1;
                graph
                    .add_undirected_edge(here, here + 1, f64::from(k % 7 + 1))
                    .expect("grid edge");
            }
            if row + 1 < side {
                k += 1;
                graph
                    .add_undirected_edge(here, here + side, f64::from(k % 7 + 1))
                    .expect("grid edge");
            }
        }
    }
    graph
}

/// Config space with `categories` categories of `items` items each, equal
/// weights, and costs and performances spread by a fixed pattern.
///
/// # Panics
///
/// Panics if construction fails (e.g. zero categories or items).
#[must_use]
pub fn uniform_space(categories: u32, items: u32) -> ConfigSpace {
    let mut builder = ConfigSpace::builder();
    let weight = 1.0 / f64::from(categories);
    for c in 0..categories {
        let index = builder
            .add_category(format!("cat{c}"), weight)
            .expect("category");
        for i in 0..items {
            let cost = f64::from(10 + (c * 37 + i * 53) % 90);
            let performance = 20 + (c * 11 + i * 29) % 80;
            builder
                .add_item(index, format!("item{c}_{i}"), cost, performance)
                .expect("item");
        }
    }
    builder.build().expect("space")
}
