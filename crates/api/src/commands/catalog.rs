//! Product browsing commands

use marketfeed_core::Showcase;
use marketfeed_domain::{Product, ProductDetail, ProductFilter, Result};

use crate::context::AppContext;
use crate::utils::execute_command;

pub async fn search_products(ctx: &AppContext, filter: &ProductFilter) -> Result<Vec<Product>> {
    execute_command(ctx, "catalog::search_products", move || ctx.catalog.search(filter)).await
}

pub async fn products_by_category(ctx: &AppContext, category: &str) -> Result<Vec<Product>> {
    execute_command(ctx, "catalog::products_by_category", move || ctx.catalog.by_category(category))
        .await
}

pub async fn products_by_brand(ctx: &AppContext, brand: &str) -> Result<Vec<Product>> {
    execute_command(ctx, "catalog::products_by_brand", move || ctx.catalog.by_brand(brand)).await
}

/// Home page rails
pub async fn showcase(ctx: &AppContext) -> Result<Showcase> {
    execute_command(ctx, "catalog::showcase", move || ctx.catalog.showcase()).await
}

pub async fn product_detail(ctx: &AppContext, product_id: u32) -> Result<ProductDetail> {
    execute_command(ctx, "catalog::product_detail", move || ctx.catalog.product(product_id)).await
}
