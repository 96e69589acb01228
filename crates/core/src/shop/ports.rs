//! Port interfaces for seller shop management

use async_trait::async_trait;
use marketfeed_domain::{
    Ack, OrderStatus, Result, ShopInfo, ShopOrder, ShopProduct, ShopProductDraft,
    ShopProductPatch,
};

/// Shop management endpoints of the backend
#[async_trait]
pub trait ShopGateway: Send + Sync {
    async fn get_shop_info(&self, shop_id: &str) -> Result<ShopInfo>;

    async fn update_shop_info(&self, shop_id: &str, info: &ShopInfo) -> Result<Ack>;

    async fn get_shop_products(&self, shop_id: &str) -> Result<Vec<ShopProduct>>;

    async fn add_shop_product(&self, shop_id: &str, draft: &ShopProductDraft)
        -> Result<ShopProduct>;

    async fn update_shop_product(
        &self,
        shop_id: &str,
        product_id: u32,
        patch: &ShopProductPatch,
    ) -> Result<Ack>;

    async fn delete_shop_product(&self, shop_id: &str, product_id: u32) -> Result<Ack>;

    async fn get_shop_orders(&self, shop_id: &str) -> Result<Vec<ShopOrder>>;

    async fn update_shop_order_status(
        &self,
        shop_id: &str,
        order_id: u32,
        status: OrderStatus,
    ) -> Result<Ack>;
}
