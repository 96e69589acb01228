//! Port interfaces for sign-in and account management

use async_trait::async_trait;
use marketfeed_domain::{Ack, ProfileUpdate, RegisterRequest, RegisterResponse, Result, Session};

/// Account endpoints of the backend
#[async_trait]
pub trait SessionGateway: Send + Sync {
    /// Exchange credentials for a session
    async fn login(&self, email: &str, password: &str) -> Result<Session>;

    /// Create an account
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse>;

    /// Update the editable profile fields of a user
    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Ack>;
}
