//! Port interfaces for the social feed

use async_trait::async_trait;
use marketfeed_domain::{Ack, NewPost, Post, Result};

/// Feed and engagement endpoints of the backend
#[async_trait]
pub trait SocialGateway: Send + Sync {
    /// Home feed, newest first
    async fn get_posts(&self) -> Result<Vec<Post>>;

    async fn get_user_posts(&self, user_id: &str) -> Result<Vec<Post>>;

    async fn create_post(&self, post: &NewPost) -> Result<Post>;

    async fn like_post(&self, post_id: u32) -> Result<Ack>;

    async fn unlike_post(&self, post_id: u32) -> Result<Ack>;

    async fn comment_on_post(&self, post_id: u32, content: &str) -> Result<Ack>;

    async fn follow_user(&self, user_id: &str) -> Result<Ack>;

    async fn unfollow_user(&self, user_id: &str) -> Result<Ack>;
}
