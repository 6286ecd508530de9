//! Immutable product catalog and the lookups the storefront runs against it.

mod seed;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{Category, Product, ALL_CATEGORIES};
use crate::error::CatalogError;
use crate::pricing::format_price;

/// Default size of the featured strip.
pub const DEFAULT_FEATURED_LIMIT: usize = 4;

/// One entry of the blank-order product picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub product_id: String,
    pub label: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and in-stock products without sizes.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        check_products(&products)?;
        Ok(Self { products, categories })
    }

    /// The storefront's built-in product list.
    pub fn seed() -> Self {
        Self {
            products: seed::products(),
            categories: seed::categories(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.products, file.categories)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find_product_by_id(&self, id: &str) -> Option<&Product> {
        let found = self.products.iter().find(|p| p.id == id);
        if found.is_none() {
            debug!(product_id = id, "Product lookup missed");
        }
        found
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// In-stock featured products in catalog order, at most `limit` of them.
    pub fn list_featured(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.featured && p.in_stock)
            .take(limit)
            .collect()
    }

    /// In-stock products of one category, or of every category for `"all"`.
    pub fn list_by_category(&self, category_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.in_stock)
            .filter(|p| category_id == ALL_CATEGORIES || p.category == category_id)
            .collect()
    }

    pub fn selector_options(&self, currency: &str) -> Vec<SelectorOption> {
        self.products
            .iter()
            .filter(|p| p.in_stock)
            .map(|p| SelectorOption {
                product_id: p.id.clone(),
                label: format!("{} - {}", p.name_bn, format_price(currency, p.price)),
            })
            .collect()
    }
}

fn check_products(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id.as_str()) {
            return Err(CatalogError::DuplicateProduct(product.id.clone()));
        }
        if product.in_stock && product.sizes.is_empty() {
            return Err(CatalogError::MissingSizes(product.id.clone()));
        }
    }
    Ok(())
}
