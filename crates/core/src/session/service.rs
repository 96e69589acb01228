//! Login, registration and profile flows

use std::sync::Arc;

use marketfeed_domain::{
    Ack, LoginRequest, MarketError, ProfileUpdate, RegisterRequest, RegisterResponse, Result,
    Session,
};
use tracing::{debug, info};

use super::ports::SessionGateway;
use super::store::AuthStore;
use crate::utils::validation::validate;

/// Session page logic on top of the [`AuthStore`]
pub struct AuthService {
    gateway: Arc<dyn SessionGateway>,
    store: Arc<AuthStore>,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn SessionGateway>, store: Arc<AuthStore>) -> Self {
        Self { gateway, store }
    }

    /// Validate the form, authenticate, and sign the session in
    pub async fn login(&self, request: &LoginRequest) -> Result<Session> {
        validate(|v| {
            v.require_email("email", &request.email).require_text("password", &request.password);
        })?;

        let session = self.gateway.login(request.email.trim(), &request.password).await?;
        info!(user_id = %session.user.id, role = %session.user.role, "user_signed_in");
        self.store.sign_in(session.clone());
        Ok(session)
    }

    /// Validate and submit the registration form.
    ///
    /// Registration does not sign the user in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        if request.password != request.confirm_password {
            return Err(MarketError::Validation("Passwords do not match".to_string()));
        }
        validate(|v| {
            v.require_text("username", &request.username)
                .require_email("email", &request.email)
                .require_text("password", &request.password);
        })?;

        let response = self.gateway.register(request).await?;
        debug!(username = %response.username, "account_registered");
        Ok(response)
    }

    pub fn logout(&self) {
        if let Some(user) = self.store.current_user() {
            info!(user_id = %user.id, "user_signed_out");
        }
        self.store.sign_out();
    }

    /// Update the signed-in user's profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Ack> {
        let user = self.store.require_user()?;
        if update.is_empty() {
            return Err(MarketError::InvalidInput("Nothing to update".to_string()));
        }
        self.gateway.update_profile(&user.id, update).await
    }

    pub fn store(&self) -> &Arc<AuthStore> {
        &self.store
    }
}
