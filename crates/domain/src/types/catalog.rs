//! Catalog types: products, product detail, master catalog, taxonomy

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::Money;

/// Product as listed in grids and search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: Money,
    /// Pre-discount price, present on promotions only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    pub image: String,
}

impl Product {
    /// Whole-percent discount when the product is on promotion
    pub fn discount_percent(&self) -> Option<u8> {
        self.original_price.map(|original| crate::percent_off(original, self.price))
    }
}

/// Listing filter. Every populated field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ProductFilter {
    /// Case-insensitive substring of name, category or brand
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
}

impl ProductFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self { search_term: Some(term.into()), ..Self::default() }
    }

    pub fn category(name: impl Into<String>) -> Self {
        Self { category: Some(name.into()), ..Self::default() }
    }

    pub fn brand(name: impl Into<String>) -> Self {
        Self { brand: Some(name.into()), ..Self::default() }
    }

    #[must_use]
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Whether `product` passes every populated criterion.
    ///
    /// An empty search term matches everything. Price bounds are inclusive.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(term) = self.search_term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let needle = term.to_lowercase();
            let hit = [&product.name, &product.category, &product.brand]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if self.category.as_ref().is_some_and(|c| *c != product.category) {
            return false;
        }
        if self.brand.as_ref().is_some_and(|b| *b != product.brand) {
            return false;
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        true
    }
}

/// Selectable variation (size, colour, ...) of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ProductVariation {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub stock: u32,
}

/// One seller's offer for a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SellerOffer {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub stock: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Review {
    pub id: u32,
    pub author: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RelatedProduct {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub price: Money,
}

/// Everything the product page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ProductDetail {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub images: Vec<String>,
    pub variations: Vec<ProductVariation>,
    pub sellers: Vec<SellerOffer>,
    pub reviews: Vec<Review>,
    pub related_products: Vec<RelatedProduct>,
}

impl ProductDetail {
    pub fn variation(&self, id: u32) -> Option<&ProductVariation> {
        self.variations.iter().find(|v| v.id == id)
    }

    pub fn seller(&self, id: u32) -> Option<&SellerOffer> {
        self.sellers.iter().find(|s| s.id == id)
    }

    /// Mean review rating, `None` without reviews
    pub fn average_rating(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        #[allow(clippy::cast_precision_loss)]
        Some(sum as f32 / self.reviews.len() as f32)
    }
}

/// Platform-wide catalog entry curated by admins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MasterProduct {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub brand: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MasterProductDraft {
    pub name: String,
    pub category: String,
    pub brand: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MasterProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
}

impl MasterProductPatch {
    pub fn apply_to(&self, product: &mut MasterProduct) {
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }
        if let Some(category) = &self.category {
            product.category.clone_from(category);
        }
        if let Some(brand) = &self.brand {
            product.brand.clone_from(brand);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Brand {
    pub id: String,
    pub name: String,
}
