//! Ordered catalog of item categories for combinatorial selection.
//!
//! A [`ConfigSpace`] is a fixed sequence of categories. Each category holds
//! an ordered list of [`Item`]s and a weight; weights sum to 1. A complete
//! selection picks exactly one item per category, identified by its index
//! within that category.

use crate::proof::canon::{canonical_json_bytes, f64_to_hex, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

use super::error::ModelError;

/// Tolerance for the weight-sum check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    /// Purchase cost. Non-negative.
    pub cost: f64,
    /// Raw performance contribution before category weighting.
    pub performance: u32,
    /// Index of the owning category.
    pub category: usize,
}

/// A named, weighted group of alternative items.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub weight: f64,
    pub items: Vec<Item>,
}

/// Immutable category catalog. Construct via [`ConfigSpaceBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSpace {
    categories: Vec<Category>,
}

impl ConfigSpace {
    #[must_use]
    pub fn builder() -> ConfigSpaceBuilder {
        ConfigSpaceBuilder::default()
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Items of the category at `index`, in catalog order.
    ///
    /// Out-of-range indices yield an empty slice.
    #[must_use]
    pub fn items_of(&self, index: usize) -> &[Item] {
        self.categories
            .get(index)
            .map_or(&[][..], |c| c.items.as_slice())
    }

    /// Resolve a selection (one item index per assigned category, in
    /// category order) to its items.
    ///
    /// Returns `None` if the selection is longer than the category list or
    /// names an item index that does not exist.
    #[must_use]
    pub fn resolve(&self, selection: &[usize]) -> Option<Vec<&Item>> {
        if selection.len() > self.categories.len() {
            return None;
        }
        selection
            .iter()
            .zip(&self.categories)
            .map(|(&i, c)| c.items.get(i))
            .collect()
    }

    /// Sum of item costs, accumulated in category order starting from 0.
    #[must_use]
    pub fn selection_cost(&self, selection: &[usize]) -> Option<f64> {
        let items = self.resolve(selection)?;
        Some(items.iter().fold(0.0, |acc, item| acc + item.cost))
    }

    /// Weighted performance of a complete selection, truncated toward zero.
    ///
    /// Returns `None` unless `selection` assigns every category.
    #[must_use]
    pub fn weighted_performance(&self, selection: &[usize]) -> Option<u32> {
        if selection.len() != self.categories.len() {
            return None;
        }
        let items = self.resolve(selection)?;
        let weighted: f64 = items
            .iter()
            .zip(&self.categories)
            .map(|(item, category)| f64::from(item.performance) * category.weight)
            .sum();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let truncated = weighted.trunc() as u32;
        Some(truncated)
    }

    /// Number of complete selections (Cartesian product size), saturating.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.categories
            .iter()
            .fold(1usize, |acc, c| acc.saturating_mul(c.items.len()))
    }

    /// Number of nodes in the implicit selection tree, root included,
    /// saturating. Every partial selection appears once.
    #[must_use]
    pub fn implicit_node_count(&self) -> usize {
        let mut level = 1usize;
        let mut total = 1usize;
        for c in &self.categories {
            level = level.saturating_mul(c.items.len());
            total = total.saturating_add(level);
        }
        total
    }

    /// Lowest possible cost of a complete selection.
    #[must_use]
    pub fn cheapest_complete_cost(&self) -> f64 {
        self.categories
            .iter()
            .map(|c| {
                c.items
                    .iter()
                    .map(|i| i.cost)
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let categories: Vec<serde_json::Value> = self
            .categories
            .iter()
            .map(|c| {
                let items: Vec<serde_json::Value> = c
                    .items
                    .iter()
                    .map(|i| {
                        serde_json::json!({
                            "name": i.name,
                            "cost": f64_to_hex(i.cost),
                            "performance": i.performance,
                        })
                    })
                    .collect();
                serde_json::json!({
                    "name": c.name,
                    "weight": f64_to_hex(c.weight),
                    "items": items,
                })
            })
            .collect();
        serde_json::json!({ "categories": categories })
    }

    /// Content digest of [`ConfigSpace::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::ConfigSpace, &bytes))
    }
}

/// Incremental builder for [`ConfigSpace`]. Validation happens in
/// [`ConfigSpaceBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct ConfigSpaceBuilder {
    categories: Vec<Category>,
}

impl ConfigSpaceBuilder {
    /// Append a category and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateCategory`] if the name is taken, or
    /// [`ModelError::InvalidWeight`] for a negative or non-finite weight.
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        weight: f64,
    ) -> Result<usize, ModelError> {
        let name = name.into();
        if self.categories.iter().any(|c| c.name == name) {
            return Err(ModelError::DuplicateCategory { name });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(ModelError::InvalidWeight {
                category: name,
                weight,
            });
        }
        self.categories.push(Category {
            name,
            weight,
            items: Vec::new(),
        });
        Ok(self.categories.len() - 1)
    }

    /// Append an item to an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownCategory`] if `category` is out of range.
    pub fn add_item(
        &mut self,
        category: usize,
        name: impl Into<String>,
        cost: f64,
        performance: u32,
    ) -> Result<&mut Self, ModelError> {
        let category_count = self.categories.len();
        let slot = self
            .categories
            .get_mut(category)
            .ok_or(ModelError::UnknownCategory {
                index: category,
                category_count,
            })?;
        slot.items.push(Item {
            name: name.into(),
            cost,
            performance,
            category,
        });
        Ok(self)
    }

    /// Finish construction.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyCategory`] if any category has no items,
    /// or [`ModelError::WeightSum`] if the weights do not sum to 1.
    pub fn build(self) -> Result<ConfigSpace, ModelError> {
        if let Some(empty) = self.categories.iter().find(|c| c.items.is_empty()) {
            return Err(ModelError::EmptyCategory {
                category: empty.name.clone(),
            });
        }
        if !self.categories.is_empty() {
            let sum: f64 = self.categories.iter().map(|c| c.weight).sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(ModelError::WeightSum { sum });
            }
        }
        Ok(ConfigSpace {
            categories: self.categories,
        })
    }
}
