//! Loyalty and coin balance commands

use marketfeed_core::RewardsDashboard;
use marketfeed_domain::{CoinBalance, Result};

use crate::context::AppContext;
use crate::utils::execute_command;

pub async fn rewards_dashboard(ctx: &AppContext) -> Result<RewardsDashboard> {
    execute_command(ctx, "rewards::rewards_dashboard", move || ctx.rewards.dashboard()).await
}

pub async fn coin_balance(ctx: &AppContext) -> Result<CoinBalance> {
    execute_command(ctx, "rewards::coin_balance", move || ctx.rewards.coin_balance()).await
}
