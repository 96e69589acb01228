//! Catalog browsing and product-page purchase logic

use std::sync::Arc;

use marketfeed_domain::{CartItem, MarketError, Product, ProductDetail, ProductFilter, Result};
use tracing::debug;

use super::ports::CatalogGateway;
use crate::cart::CartStore;

/// The three home-page rails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    pub new_arrivals: Vec<Product>,
    pub promotions: Vec<Product>,
    pub popular: Vec<Product>,
}

pub struct CatalogService {
    gateway: Arc<dyn CatalogGateway>,
    cart: Arc<CartStore>,
}

impl CatalogService {
    pub fn new(gateway: Arc<dyn CatalogGateway>, cart: Arc<CartStore>) -> Self {
        Self { gateway, cart }
    }

    /// Explore page search
    pub async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
            if min > max {
                return Err(MarketError::InvalidInput(
                    "Minimum price cannot exceed maximum price".to_string(),
                ));
            }
        }
        self.gateway.get_products(filter).await
    }

    pub async fn by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.gateway.get_products_by_category(category).await
    }

    pub async fn by_brand(&self, brand: &str) -> Result<Vec<Product>> {
        self.gateway.get_products_by_brand(brand).await
    }

    /// Load the home-page rails concurrently
    pub async fn showcase(&self) -> Result<Showcase> {
        let (new_arrivals, promotions, popular) = futures::try_join!(
            self.gateway.get_new_arrivals(),
            self.gateway.get_promotions(),
            self.gateway.get_popular_products(),
        )?;
        Ok(Showcase { new_arrivals, promotions, popular })
    }

    pub async fn product(&self, product_id: u32) -> Result<ProductDetail> {
        self.gateway.get_product_details(product_id).await
    }

    /// Build the cart line for buying `detail` from `seller_id`.
    ///
    /// Products with variations need one selected; the line then takes the
    /// variation's price and is named `Name (Variation)`. Otherwise the
    /// seller's price applies, falling back to the first seller when the
    /// seller is unknown.
    pub fn resolve_purchase(
        detail: &ProductDetail,
        seller_id: u32,
        variation_id: Option<u32>,
    ) -> Result<CartItem> {
        let image = detail.images.first().cloned().unwrap_or_default();

        if !detail.variations.is_empty() {
            let variation = variation_id
                .and_then(|id| detail.variation(id))
                .ok_or_else(|| MarketError::InvalidInput("Please select a variation.".to_string()))?;
            return Ok(CartItem {
                product_id: detail.id,
                name: format!("{} ({})", detail.name, variation.name),
                price: variation.price,
                image,
                variation_id: Some(variation.id),
                seller_id: Some(seller_id),
                quantity: 1,
            });
        }

        let offer = detail
            .seller(seller_id)
            .or_else(|| detail.sellers.first())
            .ok_or_else(|| MarketError::InvalidInput("No seller offers this product".to_string()))?;
        Ok(CartItem {
            product_id: detail.id,
            name: detail.name.clone(),
            price: offer.price,
            image,
            variation_id: None,
            seller_id: Some(seller_id),
            quantity: 1,
        })
    }

    /// Resolve the line and add one unit to the cart
    pub fn add_to_cart(
        &self,
        detail: &ProductDetail,
        seller_id: u32,
        variation_id: Option<u32>,
    ) -> Result<CartItem> {
        let item = Self::resolve_purchase(detail, seller_id, variation_id)?;
        self.cart.add(item.clone(), 1)?;
        debug!(product_id = item.product_id, seller_id, "product_added_to_cart");
        Ok(item)
    }
}
