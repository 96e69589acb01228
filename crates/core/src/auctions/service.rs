//! Auction browsing and bidding

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use marketfeed_domain::{Auction, AuctionDetail, MarketError, Money, Result};
use tracing::info;

use super::ports::AuctionGateway;
use crate::session::AuthStore;

pub struct AuctionService {
    gateway: Arc<dyn AuctionGateway>,
    auth: Arc<AuthStore>,
}

impl AuctionService {
    pub fn new(gateway: Arc<dyn AuctionGateway>, auth: Arc<AuthStore>) -> Self {
        Self { gateway, auth }
    }

    pub async fn list(&self) -> Result<Vec<Auction>> {
        self.gateway.get_auctions().await
    }

    pub async fn detail(&self, auction_id: u32) -> Result<AuctionDetail> {
        self.gateway.get_auction_details(auction_id).await
    }

    /// Bid as the signed-in user and return the refreshed auction.
    ///
    /// The amount must be strictly greater than the current bid as last
    /// fetched, and the auction must still be running.
    pub async fn place_bid(&self, auction_id: u32, amount: Money) -> Result<AuctionDetail> {
        let user = self.auth.require_user()?;
        let current = self.gateway.get_auction_details(auction_id).await?;
        if current.has_ended(Utc::now()) {
            return Err(MarketError::InvalidInput("This auction has ended".to_string()));
        }
        if amount <= current.current_bid {
            return Err(MarketError::InvalidInput(format!(
                "Your bid must be higher than the current bid of {}",
                current.current_bid
            )));
        }

        self.gateway.place_bid(auction_id, amount, &user.username).await?;
        info!(auction_id, amount_cents = amount.cents(), bidder = %user.username, "bid_placed");
        self.gateway.get_auction_details(auction_id).await
    }

    /// Countdown label such as `1h 59m 30s`, or `Auction Ended`
    pub fn time_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let left = end - now;
        if left <= Duration::zero() {
            return "Auction Ended".to_string();
        }
        let secs = left.num_seconds();
        let (days, hours, mins, secs) =
            (secs / 86_400, (secs % 86_400) / 3_600, (secs % 3_600) / 60, secs % 60);
        if days > 0 {
            format!("{days}d {hours}h {mins}m {secs}s")
        } else {
            format!("{hours}h {mins}m {secs}s")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_formats() {
        let now = Utc::now();
        assert_eq!(
            AuctionService::time_remaining(now + Duration::seconds(7_170), now),
            "1h 59m 30s"
        );
        assert_eq!(
            AuctionService::time_remaining(now + Duration::hours(26), now),
            "1d 2h 0m 0s"
        );
        assert_eq!(AuctionService::time_remaining(now, now), "Auction Ended");
        assert_eq!(
            AuctionService::time_remaining(now - Duration::minutes(1), now),
            "Auction Ended"
        );
    }
}
