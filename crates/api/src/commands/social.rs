//! Feed, post engagement and follow commands

use std::sync::Arc;

use marketfeed_core::{EngagementState, FollowToggle, PostEngagement};
use marketfeed_domain::{MarketError, Post, Result};

use crate::context::AppContext;
use crate::utils::execute_command;

/// Load the feed and reset every post card to the fetched counters
pub async fn load_feed(ctx: &AppContext) -> Result<Vec<Post>> {
    execute_command(ctx, "social::load_feed", move || async move {
        let posts = ctx.feed.feed().await?;
        track_posts(ctx, &posts).await;
        Ok(posts)
    })
    .await
}

/// Posts shown on a profile page
pub async fn load_user_posts(ctx: &AppContext, user_id: &str) -> Result<Vec<Post>> {
    execute_command(ctx, "social::load_user_posts", move || async move {
        let posts = ctx.feed.user_posts(user_id).await?;
        track_posts(ctx, &posts).await;
        Ok(posts)
    })
    .await
}

async fn track_posts(ctx: &AppContext, posts: &[Post]) {
    let mut cards = ctx.engagements.lock().await;
    for post in posts {
        cards.insert(post.id, Arc::new(PostEngagement::new(ctx.gateways.social.clone(), post)));
    }
}

async fn card(ctx: &AppContext, post_id: u32) -> Result<Arc<PostEngagement>> {
    ctx.engagements
        .lock()
        .await
        .get(&post_id)
        .cloned()
        .ok_or_else(|| MarketError::not_found("post", post_id))
}

pub async fn create_post(ctx: &AppContext, content: &str) -> Result<Post> {
    execute_command(ctx, "social::create_post", move || async move {
        let post = ctx.feed.create_post(content).await?;
        track_posts(ctx, std::slice::from_ref(&post)).await;
        ctx.toasts.success("Post created successfully!");
        Ok(post)
    })
    .await
}

/// Characters left in the composer
pub fn remaining_chars(ctx: &AppContext, draft: &str) -> i64 {
    ctx.feed.remaining_chars(draft)
}

pub async fn toggle_like(ctx: &AppContext, post_id: u32) -> Result<EngagementState> {
    execute_command(ctx, "social::toggle_like", move || async move {
        let card = card(ctx, post_id).await?;
        card.toggle_like().await
    })
    .await
}

pub async fn comment_on_post(ctx: &AppContext, post_id: u32, text: &str) -> Result<EngagementState> {
    execute_command(ctx, "social::comment_on_post", move || async move {
        let card = card(ctx, post_id).await?;
        card.set_comment_draft(text);
        card.submit_comment().await
    })
    .await
}

pub async fn toggle_repost(ctx: &AppContext, post_id: u32) -> Result<EngagementState> {
    execute_command(ctx, "social::toggle_repost", move || async move {
        Ok(card(ctx, post_id).await?.toggle_repost())
    })
    .await
}

pub async fn toggle_bookmark(ctx: &AppContext, post_id: u32) -> Result<EngagementState> {
    execute_command(ctx, "social::toggle_bookmark", move || async move {
        Ok(card(ctx, post_id).await?.toggle_bookmark())
    })
    .await
}

/// Follow or unfollow `user_id`; returns whether the user is now followed
pub async fn toggle_follow(ctx: &AppContext, user_id: &str) -> Result<bool> {
    execute_command(ctx, "social::toggle_follow", move || async move {
        let mut follows = ctx.follows.lock().await;
        let toggle = follows.entry(user_id.to_string()).or_insert_with(|| {
            FollowToggle::new(ctx.gateways.social.clone(), ctx.auth.clone(), user_id, false)
        });
        toggle.toggle().await
    })
    .await
}
