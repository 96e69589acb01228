use async_trait::async_trait;
use chrono::Utc;
use marketfeed_core::AuctionGateway;
use marketfeed_domain::{Ack, Auction, AuctionDetail, Bid, MarketError, Money, Result};
use tracing::info;

use super::{LatencyClass, MockBackend};

#[async_trait]
impl AuctionGateway for MockBackend {
    async fn get_auctions(&self) -> Result<Vec<Auction>> {
        self.respond("get_auctions", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.auctions.iter().map(AuctionDetail::summary).collect()))
    }

    async fn get_auction_details(&self, auction_id: u32) -> Result<AuctionDetail> {
        self.respond("get_auction_details", LatencyClass::Standard).await?;
        self.with_store(|store| store.auction_mut(auction_id).cloned())
    }

    async fn place_bid(&self, auction_id: u32, amount: Money, bidder: &str) -> Result<Ack> {
        self.respond("place_bid", LatencyClass::Standard).await?;
        let now = Utc::now();
        self.with_store(|store| {
            let auction = store.auction_mut(auction_id)?;
            if auction.has_ended(now) {
                return Err(MarketError::InvalidInput("This auction has ended".to_string()));
            }
            if amount <= auction.current_bid {
                return Err(MarketError::InvalidInput(format!(
                    "Your bid must be higher than the current bid of {}",
                    auction.current_bid
                )));
            }
            auction.current_bid = amount;
            auction.bid_history.push(Bid { bidder: bidder.to_string(), amount, time: now });
            Ok::<_, MarketError>(())
        })?;
        info!(auction_id, amount_cents = amount.cents(), bidder, "bid_recorded");
        Ok(Ack::new("Bid placed successfully!"))
    }
}
