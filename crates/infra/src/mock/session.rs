use async_trait::async_trait;
use marketfeed_core::SessionGateway;
use marketfeed_domain::constants::MOCK_TOKEN;
use marketfeed_domain::{
    Ack, MarketError, ProfileUpdate, RegisterRequest, RegisterResponse, Result, Session, User,
    UserRole,
};
use tracing::info;

use super::fixtures::Account;
use super::{LatencyClass, MockBackend};

#[async_trait]
impl SessionGateway for MockBackend {
    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        self.respond("login", LatencyClass::Standard).await?;
        let email = email.trim();
        self.with_store(|store| {
            store
                .accounts
                .iter()
                .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == password)
                .map(|a| Session { token: MOCK_TOKEN.to_string(), user: a.user.clone() })
                .ok_or_else(|| MarketError::Auth("Invalid credentials".to_string()))
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.respond("register", LatencyClass::Standard).await?;
        let email = request.email.trim().to_string();
        let username = request.username.trim().to_string();
        self.with_store(|store| {
            if store.accounts.iter().any(|a| a.email.eq_ignore_ascii_case(&email)) {
                return Err(MarketError::InvalidInput(
                    "An account with this email already exists".to_string(),
                ));
            }
            let id = format!("user{}", store.next_id());
            store.accounts.push(Account {
                email: email.clone(),
                password: request.password.clone(),
                user: User {
                    id: id.clone(),
                    username: username.clone(),
                    email: email.clone(),
                    role: UserRole::Customer,
                },
            });
            info!(user_id = %id, "account_registered");
            Ok(RegisterResponse { message: "Registration successful".to_string(), username, email })
        })
    }

    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Ack> {
        self.respond("update_profile", LatencyClass::Standard).await?;
        self.with_store(|store| {
            let profile = store.profiles.entry(user_id.to_string()).or_default();
            if let Some(bio) = &update.bio {
                profile.bio = Some(bio.clone());
            }
            if let Some(location) = &update.location {
                profile.location = Some(location.clone());
            }
        });
        info!(user_id, "profile_updated");
        Ok(Ack::new("Profile updated successfully!"))
    }
}
