//! Feed loading and post composition

use std::sync::Arc;

use marketfeed_domain::{NewPost, Post, Result};
use tracing::info;

use super::ports::SocialGateway;
use crate::session::AuthStore;
use crate::utils::validation::validate;

pub struct FeedService {
    gateway: Arc<dyn SocialGateway>,
    auth: Arc<AuthStore>,
    max_post_chars: usize,
}

impl FeedService {
    pub fn new(gateway: Arc<dyn SocialGateway>, auth: Arc<AuthStore>, max_post_chars: usize) -> Self {
        Self { gateway, auth, max_post_chars }
    }

    pub async fn feed(&self) -> Result<Vec<Post>> {
        self.gateway.get_posts().await
    }

    pub async fn user_posts(&self, user_id: &str) -> Result<Vec<Post>> {
        self.gateway.get_user_posts(user_id).await
    }

    /// Publish a post as the signed-in user.
    ///
    /// The trimmed content must be non-empty and within `max_post_chars`.
    pub async fn create_post(&self, content: &str) -> Result<Post> {
        let user = self.auth.require_user()?;
        validate(|v| {
            v.require_text("content", content).max_chars("content", content, self.max_post_chars);
        })?;

        let post = self
            .gateway
            .create_post(&NewPost { author: user.username, content: content.trim().to_string() })
            .await?;
        info!(post_id = post.id, "post_created");
        Ok(post)
    }

    /// Characters left in the composer for `draft`
    pub fn remaining_chars(&self, draft: &str) -> i64 {
        let used = i64::try_from(draft.trim().chars().count()).unwrap_or(i64::MAX);
        i64::try_from(self.max_post_chars).unwrap_or(i64::MAX).saturating_sub(used)
    }
}
