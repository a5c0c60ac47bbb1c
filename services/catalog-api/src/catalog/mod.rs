
pub mod model;
pub mod reference;

use thiserror::Error;
use tracing::warn;

pub use model::{Category, CatalogEntry, Product};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Category not found")]
    CategoryNotFound { requested: String, available: Vec<String> },
    #[error("Product not found")]
    ProductNotFound { category: String, id: u64 },
}

/// Immutable category -> products table. Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Later categories whose name repeats an earlier one are dropped.
    pub fn new(categories: Vec<Category>) -> Self {
        let mut unique: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            if unique.iter().any(|c| c.name() == category.name()) {
                warn!(category = category.name(), "duplicate category dropped");
                continue;
            }
            unique.push(category);
        }
        Self { categories: unique }
    }

    pub fn reference() -> Self {
        Self::new(reference::categories())
    }

    /// Category keys in declaration order.
    pub fn categories(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Case-insensitive category lookup.
    pub fn category(&self, name: &str) -> Result<&Category, CatalogError> {
        let key = name.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name() == key)
            .ok_or_else(|| CatalogError::CategoryNotFound { requested: key, available: self.categories() })
    }

    pub fn products_in(&self, name: &str) -> Result<&[Product], CatalogError> {
        self.category(name).map(Category::products)
    }

    /// Scans only the named category, so equal ids elsewhere never match.
    pub fn find_product(&self, name: &str, id: u64) -> Result<CatalogEntry<'_>, CatalogError> {
        let category = self.category(name)?;
        category
            .find(id)
            .map(|product| CatalogEntry { product, category: category.name() })
            .ok_or_else(|| CatalogError::ProductNotFound { category: category.name().to_string(), id })
    }

    /// Every product, category order first and declaration order within.
    pub fn all_products(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.categories.iter().flat_map(Category::entries)
    }
}
