//! Seller dashboard view model

use std::sync::Arc;

use marketfeed_domain::{
    MarketError, OrderStatus, Result, ShopInfo, ShopOrder, ShopProduct, ShopProductDraft,
    ShopProductPatch,
};
use tracing::info;

use super::ports::ShopGateway;
use crate::session::AuthStore;
use crate::utils::validation::validate;

/// Local state of the shop management page.
///
/// Every mutation hits the backend first and only then patches the local
/// lists, so a failed call leaves the page as it was.
pub struct ShopDashboard {
    gateway: Arc<dyn ShopGateway>,
    auth: Arc<AuthStore>,
    shop_id: String,
    info: ShopInfo,
    products: Vec<ShopProduct>,
    orders: Vec<ShopOrder>,
}

impl ShopDashboard {
    pub fn new(gateway: Arc<dyn ShopGateway>, auth: Arc<AuthStore>, shop_id: impl Into<String>) -> Self {
        Self {
            gateway,
            auth,
            shop_id: shop_id.into(),
            info: ShopInfo::default(),
            products: Vec::new(),
            orders: Vec::new(),
        }
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    pub fn info(&self) -> &ShopInfo {
        &self.info
    }

    pub fn products(&self) -> &[ShopProduct] {
        &self.products
    }

    pub fn orders(&self) -> &[ShopOrder] {
        &self.orders
    }

    /// Fetch info, products and orders concurrently
    pub async fn load(&mut self) -> Result<()> {
        self.auth.require_user()?;
        let shop_id = self.shop_id.as_str();
        let (info, products, orders) = futures::try_join!(
            self.gateway.get_shop_info(shop_id),
            self.gateway.get_shop_products(shop_id),
            self.gateway.get_shop_orders(shop_id),
        )?;
        self.info = info;
        self.products = products;
        self.orders = orders;
        Ok(())
    }

    pub async fn update_info(&mut self, info: ShopInfo) -> Result<()> {
        validate(|v| {
            v.require_text("name", &info.name);
        })?;
        self.gateway.update_shop_info(&self.shop_id, &info).await?;
        self.info = info;
        Ok(())
    }

    /// Create a listing and append it locally
    pub async fn add_product(&mut self, draft: ShopProductDraft) -> Result<ShopProduct> {
        validate(|v| {
            v.require_text("name", &draft.name)
                .greater_than("price", draft.price.cents(), 0)
                .min("stock", draft.stock, 0);
        })?;

        let product = self.gateway.add_shop_product(&self.shop_id, &draft).await?;
        info!(shop_id = %self.shop_id, product_id = product.id, "shop_product_added");
        self.products.push(product.clone());
        Ok(product)
    }

    pub async fn update_product(&mut self, product_id: u32, patch: ShopProductPatch) -> Result<()> {
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(MarketError::Validation("name is required".to_string()));
        }
        if patch.price.is_some_and(|p| !p.is_positive()) {
            return Err(MarketError::Validation("price must be greater than 0".to_string()));
        }
        self.gateway.update_shop_product(&self.shop_id, product_id, &patch).await?;
        if let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) {
            patch.apply_to(product);
        }
        Ok(())
    }

    pub async fn delete_product(&mut self, product_id: u32) -> Result<()> {
        self.gateway.delete_shop_product(&self.shop_id, product_id).await?;
        self.products.retain(|p| p.id != product_id);
        Ok(())
    }

    pub async fn update_order_status(&mut self, order_id: u32, status: OrderStatus) -> Result<()> {
        self.gateway.update_shop_order_status(&self.shop_id, order_id, status).await?;
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = status;
        }
        info!(shop_id = %self.shop_id, order_id, status = %status, "shop_order_status_updated");
        Ok(())
    }
}
