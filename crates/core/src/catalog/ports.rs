//! Port interfaces for the product catalog

use async_trait::async_trait;
use marketfeed_domain::{
    Ack, Brand, Category, MasterProduct, MasterProductDraft, MasterProductPatch, Product,
    ProductDetail, ProductFilter, Result,
};

/// Catalog endpoints of the backend
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Products matching every populated field of `filter`
    async fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>>;

    async fn get_products_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.get_products(&ProductFilter::category(category)).await
    }

    async fn get_products_by_brand(&self, brand: &str) -> Result<Vec<Product>> {
        self.get_products(&ProductFilter::brand(brand)).await
    }

    async fn get_new_arrivals(&self) -> Result<Vec<Product>>;

    /// Discounted products; each carries `original_price`
    async fn get_promotions(&self) -> Result<Vec<Product>>;

    async fn get_popular_products(&self) -> Result<Vec<Product>>;

    async fn get_product_details(&self, product_id: u32) -> Result<ProductDetail>;

    async fn get_master_products(&self) -> Result<Vec<MasterProduct>>;

    async fn add_master_product(&self, draft: &MasterProductDraft) -> Result<MasterProduct>;

    async fn update_master_product(
        &self,
        product_id: u32,
        patch: &MasterProductPatch,
    ) -> Result<Ack>;

    async fn delete_master_product(&self, product_id: u32) -> Result<Ack>;

    async fn get_categories(&self) -> Result<Vec<Category>>;

    async fn add_category(&self, name: &str) -> Result<Category>;

    async fn get_brands(&self) -> Result<Vec<Brand>>;

    async fn add_brand(&self, name: &str) -> Result<Brand>;
}
