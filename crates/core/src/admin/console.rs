//! Admin console view model

use std::sync::Arc;

use marketfeed_domain::{
    AdminUser, Brand, Category, MarketError, MasterProduct, MasterProductDraft,
    MasterProductPatch, Result, ShopStatus, ShopSummary, UserRole,
};
use tracing::{info, warn};

use super::ports::AdminGateway;
use crate::catalog::ports::CatalogGateway;
use crate::session::AuthStore;
use crate::utils::validation::validate;

/// Local state of the admin page.
///
/// Only an admin can [`open`](Self::open) it; for anyone else the lists
/// stay empty and every action is refused.
pub struct AdminConsole {
    admin: Arc<dyn AdminGateway>,
    catalog: Arc<dyn CatalogGateway>,
    auth: Arc<AuthStore>,
    opened: bool,
    users: Vec<AdminUser>,
    shops: Vec<ShopSummary>,
    master_products: Vec<MasterProduct>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
}

impl AdminConsole {
    pub fn new(
        admin: Arc<dyn AdminGateway>,
        catalog: Arc<dyn CatalogGateway>,
        auth: Arc<AuthStore>,
    ) -> Self {
        Self {
            admin,
            catalog,
            auth,
            opened: false,
            users: Vec::new(),
            shops: Vec::new(),
            master_products: Vec::new(),
            categories: Vec::new(),
            brands: Vec::new(),
        }
    }

    fn guard(&self) -> Result<()> {
        self.auth.require_role(UserRole::Admin).map(|_| ())
    }

    /// Check the role and load every management list concurrently
    pub async fn open(&mut self) -> Result<()> {
        if let Err(err) = self.guard() {
            warn!(error = %err, "admin_console_denied");
            self.close();
            return Err(err);
        }

        let (users, shops, master_products, categories, brands) = futures::try_join!(
            self.admin.get_all_users(),
            self.admin.get_all_shops(),
            self.catalog.get_master_products(),
            self.catalog.get_categories(),
            self.catalog.get_brands(),
        )?;
        self.users = users;
        self.shops = shops;
        self.master_products = master_products;
        self.categories = categories;
        self.brands = brands;
        self.opened = true;
        Ok(())
    }

    /// Drop all loaded management data
    pub fn close(&mut self) {
        self.opened = false;
        self.users.clear();
        self.shops.clear();
        self.master_products.clear();
        self.categories.clear();
        self.brands.clear();
    }

    /// Whether management controls should render.
    ///
    /// Re-checks the role on every call, so a later sign-in as a non-admin
    /// hides the console even before it is closed.
    pub fn is_open(&self) -> bool {
        self.opened && self.auth.is_admin()
    }

    fn visible<'a, T>(&self, list: &'a [T]) -> &'a [T] {
        if self.is_open() {
            list
        } else {
            &[]
        }
    }

    pub fn users(&self) -> &[AdminUser] {
        self.visible(&self.users)
    }

    pub fn shops(&self) -> &[ShopSummary] {
        self.visible(&self.shops)
    }

    pub fn master_products(&self) -> &[MasterProduct] {
        self.visible(&self.master_products)
    }

    pub fn categories(&self) -> &[Category] {
        self.visible(&self.categories)
    }

    pub fn brands(&self) -> &[Brand] {
        self.visible(&self.brands)
    }

    pub async fn ban_user(&mut self, user_id: &str) -> Result<()> {
        self.guard()?;
        self.admin.ban_user(user_id).await?;
        if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) {
            user.is_banned = true;
        }
        info!(user_id, "user_banned");
        Ok(())
    }

    pub async fn approve_shop(&mut self, shop_id: &str) -> Result<()> {
        self.guard()?;
        self.admin.approve_shop(shop_id).await?;
        self.set_shop_status(shop_id, ShopStatus::Approved);
        Ok(())
    }

    pub async fn suspend_shop(&mut self, shop_id: &str) -> Result<()> {
        self.guard()?;
        self.admin.suspend_shop(shop_id).await?;
        self.set_shop_status(shop_id, ShopStatus::Suspended);
        Ok(())
    }

    fn set_shop_status(&mut self, shop_id: &str, status: ShopStatus) {
        if let Some(shop) = self.shops.iter_mut().find(|s| s.id == shop_id) {
            shop.status = status;
        }
        info!(shop_id, status = %status, "shop_status_changed");
    }

    pub async fn add_master_product(&mut self, draft: MasterProductDraft) -> Result<MasterProduct> {
        self.guard()?;
        validate(|v| {
            v.require_text("name", &draft.name);
        })?;
        let product = self.catalog.add_master_product(&draft).await?;
        self.master_products.push(product.clone());
        Ok(product)
    }

    pub async fn update_master_product(
        &mut self,
        product_id: u32,
        patch: MasterProductPatch,
    ) -> Result<()> {
        self.guard()?;
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(MarketError::Validation("name is required".to_string()));
        }
        self.catalog.update_master_product(product_id, &patch).await?;
        if let Some(product) = self.master_products.iter_mut().find(|p| p.id == product_id) {
            patch.apply_to(product);
        }
        Ok(())
    }

    pub async fn delete_master_product(&mut self, product_id: u32) -> Result<()> {
        self.guard()?;
        self.catalog.delete_master_product(product_id).await?;
        self.master_products.retain(|p| p.id != product_id);
        Ok(())
    }

    pub async fn add_category(&mut self, name: &str) -> Result<Category> {
        self.guard()?;
        validate(|v| {
            v.require_text("name", name);
        })?;
        let category = self.catalog.add_category(name.trim()).await?;
        self.categories.push(category.clone());
        Ok(category)
    }

    pub async fn add_brand(&mut self, name: &str) -> Result<Brand> {
        self.guard()?;
        validate(|v| {
            v.require_text("name", name);
        })?;
        let brand = self.catalog.add_brand(name.trim()).await?;
        self.brands.push(brand.clone());
        Ok(brand)
    }
}
