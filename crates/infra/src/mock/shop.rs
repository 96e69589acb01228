use async_trait::async_trait;
use marketfeed_core::ShopGateway;
use marketfeed_domain::{
    Ack, MarketError, OrderStatus, Result, ShopInfo, ShopOrder, ShopProduct, ShopProductDraft,
    ShopProductPatch,
};
use tracing::info;

use super::{LatencyClass, MockBackend};

#[async_trait]
impl ShopGateway for MockBackend {
    async fn get_shop_info(&self, shop_id: &str) -> Result<ShopInfo> {
        self.respond("get_shop_info", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.shop(shop_id).info.clone()))
    }

    async fn update_shop_info(&self, shop_id: &str, info: &ShopInfo) -> Result<Ack> {
        self.respond("update_shop_info", LatencyClass::Standard).await?;
        self.with_store(|store| store.shop(shop_id).info = info.clone());
        info!(shop_id, "shop_info_updated");
        Ok(Ack::new("Shop info updated successfully!"))
    }

    async fn get_shop_products(&self, shop_id: &str) -> Result<Vec<ShopProduct>> {
        self.respond("get_shop_products", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.shop(shop_id).products.clone()))
    }

    async fn add_shop_product(
        &self,
        shop_id: &str,
        draft: &ShopProductDraft,
    ) -> Result<ShopProduct> {
        self.respond("add_shop_product", LatencyClass::Standard).await?;
        let stock = u32::try_from(draft.stock)
            .map_err(|_| MarketError::InvalidInput(format!("Invalid stock: {}", draft.stock)))?;
        let product = self.with_store(|store| {
            let product = ShopProduct {
                id: store.next_id(),
                name: draft.name.trim().to_string(),
                price: draft.price,
                stock,
                image: draft.image.clone(),
            };
            store.shop(shop_id).products.push(product.clone());
            product
        });
        info!(shop_id, product_id = product.id, "shop_product_created");
        Ok(product)
    }

    async fn update_shop_product(
        &self,
        shop_id: &str,
        product_id: u32,
        patch: &ShopProductPatch,
    ) -> Result<Ack> {
        self.respond("update_shop_product", LatencyClass::Standard).await?;
        self.with_store(|store| {
            let product = store
                .shop(shop_id)
                .products
                .iter_mut()
                .find(|p| p.id == product_id)
                .ok_or_else(|| MarketError::not_found("shop product", product_id))?;
            patch.apply_to(product);
            Ok::<_, MarketError>(())
        })?;
        info!(shop_id, product_id, "shop_product_updated");
        Ok(Ack::new("Product updated successfully!"))
    }

    async fn delete_shop_product(&self, shop_id: &str, product_id: u32) -> Result<Ack> {
        self.respond("delete_shop_product", LatencyClass::Standard).await?;
        self.with_store(|store| {
            let products = &mut store.shop(shop_id).products;
            let before = products.len();
            products.retain(|p| p.id != product_id);
            if products.len() == before {
                return Err(MarketError::not_found("shop product", product_id));
            }
            Ok(())
        })?;
        info!(shop_id, product_id, "shop_product_deleted");
        Ok(Ack::new("Product deleted successfully!"))
    }

    async fn get_shop_orders(&self, shop_id: &str) -> Result<Vec<ShopOrder>> {
        self.respond("get_shop_orders", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.shop(shop_id).orders.clone()))
    }

    async fn update_shop_order_status(
        &self,
        shop_id: &str,
        order_id: u32,
        status: OrderStatus,
    ) -> Result<Ack> {
        self.respond("update_shop_order_status", LatencyClass::Standard).await?;
        self.with_store(|store| {
            let order = store
                .shop(shop_id)
                .orders
                .iter_mut()
                .find(|o| o.id == order_id)
                .ok_or_else(|| MarketError::not_found("shop order", order_id))?;
            order.status = status;
            Ok::<_, MarketError>(())
        })?;
        info!(shop_id, order_id, status = %status, "shop_order_status_updated");
        Ok(Ack::new("Order status updated successfully!"))
    }
}
