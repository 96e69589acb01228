//! Auction commands

use chrono::Utc;
use marketfeed_core::AuctionService;
use marketfeed_domain::{Auction, AuctionDetail, Money, Result};

use crate::context::AppContext;
use crate::utils::execute_command;

pub async fn list_auctions(ctx: &AppContext) -> Result<Vec<Auction>> {
    execute_command(ctx, "auctions::list_auctions", move || ctx.auctions.list()).await
}

pub async fn auction_detail(ctx: &AppContext, auction_id: u32) -> Result<AuctionDetail> {
    execute_command(ctx, "auctions::auction_detail", move || ctx.auctions.detail(auction_id)).await
}

/// Bid as the signed-in user; returns the refreshed auction
pub async fn place_bid(ctx: &AppContext, auction_id: u32, amount: Money) -> Result<AuctionDetail> {
    execute_command(ctx, "auctions::place_bid", move || async move {
        let detail = ctx.auctions.place_bid(auction_id, amount).await?;
        ctx.toasts.success(format!("Bid of {amount} placed successfully!"));
        Ok(detail)
    })
    .await
}

/// Countdown label for an auction card, as of now
pub fn time_remaining(auction: &Auction) -> String {
    AuctionService::time_remaining(auction.end_time, Utc::now())
}
