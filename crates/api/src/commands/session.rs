//! Login, registration and profile commands

use marketfeed_domain::{
    Ack, LoginRequest, ProfileUpdate, RegisterRequest, RegisterResponse, Result, User,
};
use tracing::info;

use crate::context::AppContext;
use crate::utils::execute_command;

/// Sign in and greet the user.
///
/// Page state left by the previous user is dropped before the new session starts.
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<User> {
    execute_command(ctx, "session::login", move || async move {
        reset_page_state(ctx).await;
        let session = ctx.auth_service.login(&LoginRequest::new(email, password)).await?;
        ctx.toasts.success(format!("Welcome back, {}!", session.user.username));
        Ok(session.user)
    })
    .await
}

pub async fn register(ctx: &AppContext, request: &RegisterRequest) -> Result<RegisterResponse> {
    execute_command(ctx, "session::register", move || async move {
        let response = ctx.auth_service.register(request).await?;
        ctx.toasts.success("Registration successful! Please log in.");
        Ok(response)
    })
    .await
}

/// Sign out and drop every per-user page state
pub async fn logout(ctx: &AppContext) {
    ctx.auth_service.logout();
    reset_page_state(ctx).await;
    info!("session_cleared");
}

async fn reset_page_state(ctx: &AppContext) {
    ctx.admin_console.lock().await.close();
    *ctx.shop_dashboard.lock().await = None;
    ctx.follows.lock().await.clear();
    ctx.engagements.lock().await.clear();
}

pub async fn update_profile(ctx: &AppContext, update: &ProfileUpdate) -> Result<Ack> {
    execute_command(ctx, "session::update_profile", move || async move {
        let ack = ctx.auth_service.update_profile(update).await?;
        ctx.toasts.success(ack.message.clone());
        Ok(ack)
    })
    .await
}

/// The signed-in user, if any
pub fn current_user(ctx: &AppContext) -> Option<User> {
    ctx.auth.current_user()
}
