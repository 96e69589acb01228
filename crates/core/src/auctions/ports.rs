//! Port interfaces for auctions

use async_trait::async_trait;
use marketfeed_domain::{Ack, Auction, AuctionDetail, Money, Result};

#[async_trait]
pub trait AuctionGateway: Send + Sync {
    async fn get_auctions(&self) -> Result<Vec<Auction>>;

    /// `NotFound` for an unknown auction
    async fn get_auction_details(&self, auction_id: u32) -> Result<AuctionDetail>;

    async fn place_bid(&self, auction_id: u32, amount: Money, bidder: &str) -> Result<Ack>;
}
