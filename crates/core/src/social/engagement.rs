//! Optimistic engagement state for a single post and follow buttons

use std::sync::Arc;

use marketfeed_domain::{Post, Result};
use parking_lot::Mutex;
use tracing::debug;

use super::ports::SocialGateway;
use crate::session::AuthStore;
use crate::utils::validation::validate;

/// What a post card renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngagementState {
    pub likes: u32,
    pub comments: u32,
    pub reposts: u32,
    pub liked: bool,
    pub reposted: bool,
    pub bookmarked: bool,
    pub comment_draft: String,
    /// A backend call is in flight; further actions are ignored
    pub pending: bool,
}

/// Local engagement state of one post.
///
/// Counters change only after the backend accepts the action. While a call
/// is in flight every other action returns the current state untouched.
pub struct PostEngagement {
    gateway: Arc<dyn SocialGateway>,
    post_id: u32,
    state: Mutex<EngagementState>,
}

impl PostEngagement {
    pub fn new(gateway: Arc<dyn SocialGateway>, post: &Post) -> Self {
        Self {
            gateway,
            post_id: post.id,
            state: Mutex::new(EngagementState {
                likes: post.likes,
                comments: post.comments,
                reposts: post.reposts,
                ..EngagementState::default()
            }),
        }
    }

    pub fn post_id(&self) -> u32 {
        self.post_id
    }

    pub fn state(&self) -> EngagementState {
        self.state.lock().clone()
    }

    /// Mark the card busy; `None` when another call already is
    fn begin(&self) -> Option<bool> {
        let mut state = self.state.lock();
        if state.pending {
            return None;
        }
        state.pending = true;
        Some(state.liked)
    }

    fn finish(&self, apply: impl FnOnce(&mut EngagementState)) -> EngagementState {
        let mut state = self.state.lock();
        state.pending = false;
        apply(&mut state);
        state.clone()
    }

    /// Like or unlike depending on the current state
    pub async fn toggle_like(&self) -> Result<EngagementState> {
        let Some(liked) = self.begin() else {
            return Ok(self.state());
        };

        let result = if liked {
            self.gateway.unlike_post(self.post_id).await
        } else {
            self.gateway.like_post(self.post_id).await
        };

        match result {
            Ok(_) => {
                debug!(post_id = self.post_id, liked = !liked, "post_like_toggled");
                Ok(self.finish(|s| {
                    s.likes = if liked { s.likes.saturating_sub(1) } else { s.likes + 1 };
                    s.liked = !liked;
                }))
            }
            Err(err) => {
                self.finish(|_| {});
                Err(err)
            }
        }
    }

    pub fn set_comment_draft(&self, text: impl Into<String>) {
        self.state.lock().comment_draft = text.into();
    }

    /// Submit the current draft; clears it and bumps the counter on success
    pub async fn submit_comment(&self) -> Result<EngagementState> {
        let draft = self.state.lock().comment_draft.clone();
        validate(|v| {
            v.require_text("comment", &draft);
        })?;
        if self.begin().is_none() {
            return Ok(self.state());
        }

        match self.gateway.comment_on_post(self.post_id, draft.trim()).await {
            Ok(_) => Ok(self.finish(|s| {
                s.comments += 1;
                s.comment_draft.clear();
            })),
            Err(err) => {
                self.finish(|_| {});
                Err(err)
            }
        }
    }

    /// Reposts are client-only
    pub fn toggle_repost(&self) -> EngagementState {
        let mut state = self.state.lock();
        if !state.pending {
            state.reposts =
                if state.reposted { state.reposts.saturating_sub(1) } else { state.reposts + 1 };
            state.reposted = !state.reposted;
        }
        state.clone()
    }

    pub fn toggle_bookmark(&self) -> EngagementState {
        let mut state = self.state.lock();
        state.bookmarked = !state.bookmarked;
        state.clone()
    }
}

/// Follow button for another user's profile
pub struct FollowToggle {
    gateway: Arc<dyn SocialGateway>,
    auth: Arc<AuthStore>,
    target_user_id: String,
    following: bool,
}

impl FollowToggle {
    pub fn new(
        gateway: Arc<dyn SocialGateway>,
        auth: Arc<AuthStore>,
        target_user_id: impl Into<String>,
        following: bool,
    ) -> Self {
        Self { gateway, auth, target_user_id: target_user_id.into(), following }
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    /// Follow or unfollow; returns the new state
    pub async fn toggle(&mut self) -> Result<bool> {
        self.auth.require_user()?;
        if self.following {
            self.gateway.unfollow_user(&self.target_user_id).await?;
        } else {
            self.gateway.follow_user(&self.target_user_id).await?;
        }
        self.following = !self.following;
        debug!(user_id = %self.target_user_id, following = self.following, "follow_toggled");
        Ok(self.following)
    }
}
