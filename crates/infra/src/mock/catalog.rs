use async_trait::async_trait;
use marketfeed_core::CatalogGateway;
use marketfeed_domain::{
    Ack, Brand, Category, MarketError, MasterProduct, MasterProductDraft, MasterProductPatch,
    Product, ProductDetail, ProductFilter, Result,
};
use tracing::info;

use super::{fixtures, LatencyClass, MockBackend};

#[async_trait]
impl CatalogGateway for MockBackend {
    async fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.respond("get_products", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| {
            store.products.iter().filter(|p| filter.matches(p)).cloned().collect()
        }))
    }

    async fn get_new_arrivals(&self) -> Result<Vec<Product>> {
        self.respond("get_new_arrivals", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.new_arrivals.clone()))
    }

    async fn get_promotions(&self) -> Result<Vec<Product>> {
        self.respond("get_promotions", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.promotions.clone()))
    }

    async fn get_popular_products(&self) -> Result<Vec<Product>> {
        self.respond("get_popular_products", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.popular.clone()))
    }

    async fn get_product_details(&self, product_id: u32) -> Result<ProductDetail> {
        self.respond("get_product_details", LatencyClass::Standard).await?;
        self.with_store(|store| {
            store
                .find_product(product_id)
                .map(|_| fixtures::product_detail(product_id))
                .ok_or_else(|| MarketError::not_found("product", product_id))
        })
    }

    async fn get_master_products(&self) -> Result<Vec<MasterProduct>> {
        self.respond("get_master_products", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.master_products.clone()))
    }

    async fn add_master_product(&self, draft: &MasterProductDraft) -> Result<MasterProduct> {
        self.respond("add_master_product", LatencyClass::Standard).await?;
        let product = self.with_store(|store| {
            let product = MasterProduct {
                id: store.next_id(),
                name: draft.name.trim().to_string(),
                category: draft.category.trim().to_string(),
                brand: draft.brand.trim().to_string(),
            };
            store.master_products.push(product.clone());
            product
        });
        info!(product_id = product.id, "master_product_added");
        Ok(product)
    }

    async fn update_master_product(
        &self,
        product_id: u32,
        patch: &MasterProductPatch,
    ) -> Result<Ack> {
        self.respond("update_master_product", LatencyClass::Standard).await?;
        self.with_store(|store| {
            let product = store
                .master_products
                .iter_mut()
                .find(|p| p.id == product_id)
                .ok_or_else(|| MarketError::not_found("master product", product_id))?;
            patch.apply_to(product);
            Ok::<_, MarketError>(())
        })?;
        info!(product_id, "master_product_updated");
        Ok(Ack::new("Master product updated successfully!"))
    }

    async fn delete_master_product(&self, product_id: u32) -> Result<Ack> {
        self.respond("delete_master_product", LatencyClass::Standard).await?;
        self.with_store(|store| {
            let before = store.master_products.len();
            store.master_products.retain(|p| p.id != product_id);
            if store.master_products.len() == before {
                return Err(MarketError::not_found("master product", product_id));
            }
            Ok(())
        })?;
        info!(product_id, "master_product_deleted");
        Ok(Ack::new("Master product deleted successfully!"))
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        self.respond("get_categories", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.categories.clone()))
    }

    async fn add_category(&self, name: &str) -> Result<Category> {
        self.respond("add_category", LatencyClass::Standard).await?;
        let category = self.with_store(|store| {
            let category =
                Category { id: format!("cat{}", store.next_id()), name: name.trim().to_string() };
            store.categories.push(category.clone());
            category
        });
        info!(category_id = %category.id, "category_added");
        Ok(category)
    }

    async fn get_brands(&self) -> Result<Vec<Brand>> {
        self.respond("get_brands", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.brands.clone()))
    }

    async fn add_brand(&self, name: &str) -> Result<Brand> {
        self.respond("add_brand", LatencyClass::Standard).await?;
        let brand = self.with_store(|store| {
            let brand =
                Brand { id: format!("brand{}", store.next_id()), name: name.trim().to_string() };
            store.brands.push(brand.clone());
            brand
        });
        info!(brand_id = %brand.id, "brand_added");
        Ok(brand)
    }
}
