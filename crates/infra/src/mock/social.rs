use async_trait::async_trait;
use chrono::Utc;
use marketfeed_core::SocialGateway;
use marketfeed_domain::{Ack, MarketError, NewPost, Post, Result};
use tracing::info;

use super::{LatencyClass, MockBackend};

const AVATAR: &str = "https://via.placeholder.com/40";

/// `"Mock User"` becomes `"mockuser"`
fn handle_for(author: &str) -> String {
    author.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}

#[async_trait]
impl SocialGateway for MockBackend {
    async fn get_posts(&self) -> Result<Vec<Post>> {
        self.respond("get_posts", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.posts.clone()))
    }

    async fn get_user_posts(&self, user_id: &str) -> Result<Vec<Post>> {
        self.respond("get_user_posts", LatencyClass::Standard).await?;
        tracing::debug!(user_id, "profile_posts_requested");
        Ok(self.with_store(|store| store.profile_posts.clone()))
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<Post> {
        self.respond("create_post", LatencyClass::Standard).await?;
        let post = self.with_store(|store| {
            let post = Post {
                id: store.next_id(),
                username: new_post.author.clone(),
                handle: handle_for(&new_post.author),
                content: new_post.content.trim().to_string(),
                avatar_src: AVATAR.to_string(),
                product: None,
                comments: 0,
                reposts: 0,
                likes: 0,
                created_at: Utc::now(),
            };
            store.posts.insert(0, post.clone());
            store.profile_posts.insert(0, post.clone());
            post
        });
        info!(post_id = post.id, author = %post.username, "post_created");
        Ok(post)
    }

    async fn like_post(&self, post_id: u32) -> Result<Ack> {
        self.respond("like_post", LatencyClass::Quick).await?;
        let likes = self.with_store(|store| {
            store.post_mut(post_id).map(|post| {
                post.likes = post.likes.saturating_add(1);
                post.likes
            })
        })?;
        info!(post_id, likes, "post_liked");
        Ok(Ack::new("Post liked successfully!"))
    }

    async fn unlike_post(&self, post_id: u32) -> Result<Ack> {
        self.respond("unlike_post", LatencyClass::Quick).await?;
        let likes = self.with_store(|store| {
            store.post_mut(post_id).map(|post| {
                post.likes = post.likes.saturating_sub(1);
                post.likes
            })
        })?;
        info!(post_id, likes, "post_unliked");
        Ok(Ack::new("Post unliked successfully!"))
    }

    async fn comment_on_post(&self, post_id: u32, content: &str) -> Result<Ack> {
        self.respond("comment_on_post", LatencyClass::Messaging).await?;
        if content.trim().is_empty() {
            return Err(MarketError::InvalidInput("Comment cannot be empty".to_string()));
        }
        self.with_store(|store| {
            store.post_mut(post_id).map(|post| post.comments = post.comments.saturating_add(1))
        })?;
        info!(post_id, "post_commented");
        Ok(Ack::new("Comment added successfully!"))
    }

    async fn follow_user(&self, user_id: &str) -> Result<Ack> {
        self.respond("follow_user", LatencyClass::Quick).await?;
        self.with_store(|store| store.following.insert(user_id.to_string()));
        info!(user_id, "user_followed");
        Ok(Ack::new("User followed successfully!"))
    }

    async fn unfollow_user(&self, user_id: &str) -> Result<Ack> {
        self.respond("unfollow_user", LatencyClass::Quick).await?;
        self.with_store(|store| store.following.remove(user_id));
        info!(user_id, "user_unfollowed");
        Ok(Ack::new("User unfollowed successfully!"))
    }
}
