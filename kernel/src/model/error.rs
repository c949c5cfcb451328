//! Typed model construction errors.

/// Failure while building or addressing a [`super::GraphModel`] or
/// [`super::ConfigSpace`].
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A vertex id outside `0..vertex_count`.
    UnknownVertex { id: usize, vertex_count: usize },
    /// A category index outside `0..category_count`.
    UnknownCategory { index: usize, category_count: usize },
    /// A category was declared twice.
    DuplicateCategory { name: String },
    /// A category has no items, so no complete assignment can exist.
    EmptyCategory { category: String },
    /// A category weight is negative or not finite.
    InvalidWeight { category: String, weight: f64 },
    /// Category weights do not sum to 1.
    WeightSum { sum: f64 },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVertex { id, vertex_count } => {
                write!(f, "unknown vertex {id} (graph has {vertex_count} vertices)")
            }
            Self::UnknownCategory {
                index,
                category_count,
            } => write!(
                f,
                "unknown category {index} (space has {category_count} categories)"
            ),
            Self::DuplicateCategory { name } => write!(f, "duplicate category: {name}"),
            Self::EmptyCategory { category } => write!(f, "category {category} has no items"),
            Self::InvalidWeight { category, weight } => {
                write!(f, "category {category} has invalid weight {weight}")
            }
            Self::WeightSum { sum } => write!(f, "category weights sum to {sum}, expected 1"),
        }
    }
}

impl std::error::Error for ModelError {}
