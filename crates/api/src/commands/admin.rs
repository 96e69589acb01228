//! Admin console commands
//!
//! Every command re-checks the admin role inside the console; a non-admin
//! gets `Forbidden` and an empty snapshot is never produced for them.

use marketfeed_core::AdminConsole;
use marketfeed_domain::{
    AdminUser, Brand, Category, MasterProduct, MasterProductDraft, MasterProductPatch, Result,
    ShopSummary,
};
use serde::Serialize;

use crate::context::AppContext;
use crate::utils::execute_command;

/// Everything the admin dashboard renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSnapshot {
    pub users: Vec<AdminUser>,
    pub shops: Vec<ShopSummary>,
    pub master_products: Vec<MasterProduct>,
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
}

impl From<&AdminConsole> for AdminSnapshot {
    fn from(console: &AdminConsole) -> Self {
        Self {
            users: console.users().to_vec(),
            shops: console.shops().to_vec(),
            master_products: console.master_products().to_vec(),
            categories: console.categories().to_vec(),
            brands: console.brands().to_vec(),
        }
    }
}

pub async fn open_admin_console(ctx: &AppContext) -> Result<AdminSnapshot> {
    execute_command(ctx, "admin::open_admin_console", move || async move {
        let mut console = ctx.admin_console.lock().await;
        console.open().await?;
        Ok(AdminSnapshot::from(&*console))
    })
    .await
}

pub async fn ban_user(ctx: &AppContext, user_id: &str) -> Result<AdminSnapshot> {
    execute_command(ctx, "admin::ban_user", move || async move {
        let mut console = ctx.admin_console.lock().await;
        console.ban_user(user_id).await?;
        ctx.toasts.success(format!("User {user_id} banned successfully!"));
        Ok(AdminSnapshot::from(&*console))
    })
    .await
}

pub async fn approve_shop(ctx: &AppContext, shop_id: &str) -> Result<AdminSnapshot> {
    execute_command(ctx, "admin::approve_shop", move || async move {
        let mut console = ctx.admin_console.lock().await;
        console.approve_shop(shop_id).await?;
        ctx.toasts.success(format!("Shop {shop_id} approved successfully!"));
        Ok(AdminSnapshot::from(&*console))
    })
    .await
}

pub async fn suspend_shop(ctx: &AppContext, shop_id: &str) -> Result<AdminSnapshot> {
    execute_command(ctx, "admin::suspend_shop", move || async move {
        let mut console = ctx.admin_console.lock().await;
        console.suspend_shop(shop_id).await?;
        ctx.toasts.success(format!("Shop {shop_id} suspended successfully!"));
        Ok(AdminSnapshot::from(&*console))
    })
    .await
}

pub async fn add_master_product(
    ctx: &AppContext,
    draft: MasterProductDraft,
) -> Result<AdminSnapshot> {
    execute_command(ctx, "admin::add_master_product", move || async move {
        let mut console = ctx.admin_console.lock().await;
        console.add_master_product(draft).await?;
        ctx.toasts.success("Master product added successfully!");
        Ok(AdminSnapshot::from(&*console))
    })
    .await
}

pub async fn update_master_product(
    ctx: &AppContext,
    product_id: u32,
    patch: MasterProductPatch,
) -> Result<AdminSnapshot> {
    execute_command(ctx, "admin::update_master_product", move || async move {
        let mut console = ctx.admin_console.lock().await;
        console.update_master_product(product_id, patch).await?;
        ctx.toasts.success("Master product updated successfully!");
        Ok(AdminSnapshot::from(&*console))
    })
    .await
}

pub async fn delete_master_product(ctx: &AppContext, product_id: u32) -> Result<AdminSnapshot> {
    execute_command(ctx, "admin::delete_master_product", move || async move {
        let mut console = ctx.admin_console.lock().await;
        console.delete_master_product(product_id).await?;
        ctx.toasts.success("Master product deleted successfully!");
        Ok(AdminSnapshot::from(&*console))
    })
    .await
}

pub async fn add_category(ctx: &AppContext, name: &str) -> Result<AdminSnapshot> {
    execute_command(ctx, "admin::add_category", move || async move {
        let mut console = ctx.admin_console.lock().await;
        let category = console.add_category(name).await?;
        ctx.toasts.success(format!("Category {} added successfully!", category.name));
        Ok(AdminSnapshot::from(&*console))
    })
    .await
}

pub async fn add_brand(ctx: &AppContext, name: &str) -> Result<AdminSnapshot> {
    execute_command(ctx, "admin::add_brand", move || async move {
        let mut console = ctx.admin_console.lock().await;
        let brand = console.add_brand(name).await?;
        ctx.toasts.success(format!("Brand {} added successfully!", brand.name));
        Ok(AdminSnapshot::from(&*console))
    })
    .await
}
