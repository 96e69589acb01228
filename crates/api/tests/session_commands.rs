//! Sign-in, registration and sign-out through the command layer

mod support;

use marketfeed_domain::{MarketError, RegisterRequest, ToastKind, UserRole};
use marketfeed_lib::commands::{admin, session, social};
use support::{context, last_error};

#[tokio::test]
async fn login_signs_in_and_greets() {
    let ctx = context();

    let user = session::login(&ctx, "user@example.com", "password").await.unwrap();

    assert_eq!(user.role, UserRole::Customer);
    assert_eq!(session::current_user(&ctx).map(|u| u.username), Some("MockUser".to_string()));
    let toast = ctx.toasts.latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Welcome back, MockUser!");
}

#[tokio::test]
async fn rejected_login_shows_error_toast() {
    let ctx = context();

    let err = session::login(&ctx, "user@example.com", "nope").await.unwrap_err();

    assert_eq!(err, MarketError::Auth("Invalid credentials".into()));
    assert_eq!(last_error(&ctx).as_deref(), Some("Invalid credentials"));
    assert!(session::current_user(&ctx).is_none());
}

#[tokio::test]
async fn malformed_email_never_reaches_backend() {
    let ctx = context();

    let err = session::login(&ctx, "not-an-email", "password").await.unwrap_err();

    assert!(matches!(err, MarketError::Validation(_)));
    assert!(last_error(&ctx).is_some());
}

#[tokio::test]
async fn registration_then_login() {
    let ctx = context();
    let form = RegisterRequest {
        username: "Shopper".into(),
        email: "shopper@example.com".into(),
        password: "s3cret!".into(),
        confirm_password: "s3cret!".into(),
    };

    session::register(&ctx, &form).await.unwrap();
    let user = session::login(&ctx, "shopper@example.com", "s3cret!").await.unwrap();

    assert_eq!(user.username, "Shopper");
}

#[tokio::test]
async fn mismatched_passwords_are_reported() {
    let ctx = context();
    let form = RegisterRequest {
        username: "Shopper".into(),
        email: "shopper@example.com".into(),
        password: "one".into(),
        confirm_password: "two".into(),
    };

    let err = session::register(&ctx, &form).await.unwrap_err();

    assert_eq!(err, MarketError::Validation("Passwords do not match".into()));
}

#[tokio::test]
async fn logout_closes_admin_console() {
    let ctx = support::admin_context().await;
    admin::open_admin_console(&ctx).await.unwrap();
    assert!(ctx.admin_console.lock().await.is_open());

    session::logout(&ctx).await;

    assert!(!ctx.admin_console.lock().await.is_open());
    assert!(session::current_user(&ctx).is_none());
}

#[tokio::test]
async fn customer_login_after_admin_hides_console() {
    let ctx = support::admin_context().await;
    admin::open_admin_console(&ctx).await.unwrap();
    assert!(!ctx.admin_console.lock().await.users().is_empty());

    let user = session::login(&ctx, "user@example.com", "password").await.unwrap();

    assert_eq!(user.role, UserRole::Customer);
    let console = ctx.admin_console.lock().await;
    assert!(!console.is_open());
    assert!(console.users().is_empty());
    assert!(console.shops().is_empty());
}

#[tokio::test]
async fn logout_forgets_post_engagement() {
    let ctx = support::customer_context().await;
    let posts = social::load_feed(&ctx).await.unwrap();
    let state = social::toggle_bookmark(&ctx, posts[0].id).await.unwrap();
    assert!(state.bookmarked);

    session::logout(&ctx).await;
    session::login(&ctx, "user@example.com", "password").await.unwrap();

    let err = social::toggle_bookmark(&ctx, posts[0].id).await.unwrap_err();
    assert!(matches!(err, MarketError::NotFound(_)));

    social::load_feed(&ctx).await.unwrap();
    let fresh = social::toggle_bookmark(&ctx, posts[0].id).await.unwrap();
    assert!(fresh.bookmarked, "a reloaded card starts unbookmarked");
}
