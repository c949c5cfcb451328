//! Typed search errors.
//!
//! Pre-flight failures (`UnknownVertex`, `InvalidBudget`, `InvalidPolicy`)
//! are returned before any frontier is built. `Capacity` and `Empty` are
//! structural frontier failures raised mid-search.
//!
//! An unreachable goal or an infeasible budget is not an error: those
//! searches return `Ok` with a not-found result.

/// Typed failure for search execution.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A frontier insert would exceed the frontier's fixed bound.
    Capacity { capacity: usize },
    /// Extraction was attempted on an empty frontier.
    Empty,
    /// Source or goal is not a vertex of the graph.
    UnknownVertex { id: usize, vertex_count: usize },
    /// The budget cannot be compared against costs (NaN).
    InvalidBudget { detail: String },
    /// The search policy is unusable.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capacity { capacity } => {
                write!(f, "frontier capacity exceeded (capacity {capacity})")
            }
            Self::Empty => write!(f, "extraction from empty frontier"),
            Self::UnknownVertex { id, vertex_count } => {
                write!(f, "unknown vertex {id} (graph has {vertex_count} vertices)")
            }
            Self::InvalidBudget { detail } => write!(f, "invalid budget: {detail}"),
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
