//! In-memory state behind the mock backend

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use marketfeed_domain::{
    AdminUser, AuctionDetail, Brand, Category, CoinBalance, Conversation, LoyaltyStatus,
    MarketError, MasterProduct, Message, Notification, Order, Post, Product, ProfileUpdate,
    Result, ReturnRequest, ShopInfo, ShopLoyalty, ShopOrder, ShopProduct, ShopSummary,
    StockAlert, SubscriptionPlan, UserSubscription,
};

use super::fixtures::{self, Account};

/// First id handed out for newly created records
const FIRST_GENERATED_ID: u32 = 10_000;

/// One seller's shop page
#[derive(Debug, Clone)]
pub struct ShopState {
    pub info: ShopInfo,
    pub products: Vec<ShopProduct>,
    pub orders: Vec<ShopOrder>,
}

impl ShopState {
    fn seeded(shop_id: &str) -> Self {
        Self {
            info: fixtures::shop_info(shop_id),
            products: fixtures::shop_products(),
            orders: fixtures::shop_orders(),
        }
    }
}

/// Everything the mock backend knows.
///
/// Mutations land here so a later read reflects them.
#[derive(Debug)]
pub struct MockStore {
    next_id: u32,
    pub accounts: Vec<Account>,
    pub profiles: HashMap<String, ProfileUpdate>,
    pub products: Vec<Product>,
    pub new_arrivals: Vec<Product>,
    pub promotions: Vec<Product>,
    pub popular: Vec<Product>,
    pub posts: Vec<Post>,
    pub profile_posts: Vec<Post>,
    pub following: HashSet<String>,
    pub orders: Vec<Order>,
    pub returns: Vec<ReturnRequest>,
    shops: HashMap<String, ShopState>,
    pub users: Vec<AdminUser>,
    pub shop_summaries: Vec<ShopSummary>,
    pub master_products: Vec<MasterProduct>,
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub auctions: Vec<AuctionDetail>,
    pub loyalty: LoyaltyStatus,
    pub shop_loyalty: Vec<ShopLoyalty>,
    pub coins: CoinBalance,
    pub stock_alerts: Vec<StockAlert>,
    pub plans: Vec<SubscriptionPlan>,
    pub subscriptions: Vec<UserSubscription>,
    pub notifications: Vec<Notification>,
    pub conversations: Vec<Conversation>,
    pub messages: HashMap<u32, Vec<Message>>,
}

impl MockStore {
    /// Fresh fixtures with time-relative data anchored at `now`
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let conversations = fixtures::conversations();
        let messages = conversations.iter().map(|c| (c.id, fixtures::messages())).collect();
        Self {
            next_id: FIRST_GENERATED_ID,
            accounts: fixtures::accounts(),
            profiles: HashMap::new(),
            products: fixtures::products(),
            new_arrivals: fixtures::new_arrivals(),
            promotions: fixtures::promotions(),
            popular: fixtures::popular_products(),
            posts: fixtures::feed_posts(now),
            profile_posts: fixtures::profile_posts(now),
            following: HashSet::new(),
            orders: fixtures::orders(),
            returns: fixtures::returns(),
            shops: HashMap::new(),
            users: fixtures::users(),
            shop_summaries: fixtures::shops(),
            master_products: fixtures::master_products(),
            categories: fixtures::categories(),
            brands: fixtures::brands(),
            auctions: fixtures::auctions(now),
            loyalty: fixtures::loyalty(),
            shop_loyalty: fixtures::shop_loyalty(),
            coins: fixtures::coins(),
            stock_alerts: fixtures::stock_alerts(),
            plans: fixtures::plans(),
            subscriptions: fixtures::subscriptions(),
            notifications: fixtures::notifications(),
            conversations,
            messages,
        }
    }

    /// Next id of the shared, strictly increasing sequence
    pub fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Shop state, seeded on first access
    pub fn shop(&mut self, shop_id: &str) -> &mut ShopState {
        self.shops.entry(shop_id.to_string()).or_insert_with(|| ShopState::seeded(shop_id))
    }

    /// Every product listed anywhere in the storefront
    pub fn catalog(&self) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .chain(&self.new_arrivals)
            .chain(&self.promotions)
            .chain(&self.popular)
    }

    pub fn find_product(&self, product_id: u32) -> Option<&Product> {
        self.catalog().find(|p| p.id == product_id)
    }

    /// A post from the feed or the profile timeline
    pub fn post_mut(&mut self, post_id: u32) -> Result<&mut Post> {
        self.posts
            .iter_mut()
            .chain(self.profile_posts.iter_mut())
            .find(|p| p.id == post_id)
            .ok_or_else(|| MarketError::not_found("post", post_id))
    }

    pub fn auction_mut(&mut self, auction_id: u32) -> Result<&mut AuctionDetail> {
        self.auctions
            .iter_mut()
            .find(|a| a.id == auction_id)
            .ok_or_else(|| MarketError::not_found("auction", auction_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_increase_and_skip_fixtures() {
        let mut store = MockStore::seeded(Utc::now());
        let first = store.next_id();
        let second = store.next_id();

        assert!(first > 2002, "must not collide with fixture ids");
        assert!(second > first);
    }

    #[test]
    fn shops_are_seeded_lazily_per_id() {
        let mut store = MockStore::seeded(Utc::now());
        store.shop("shop1").products.clear();

        assert!(store.shop("shop1").products.is_empty());
        assert_eq!(store.shop("shop9").products.len(), 2);
        assert_eq!(store.shop("shop9").info.name, "Mock Shop for shop9");
    }

    #[test]
    fn catalog_spans_every_listing() {
        let store = MockStore::seeded(Utc::now());
        assert_eq!(store.catalog().count(), 10);
        assert_eq!(store.find_product(8).map(|p| p.name.as_str()), Some("Gaming Keyboard"));
    }
}
