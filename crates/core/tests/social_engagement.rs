mod support;

use std::time::Duration;

use marketfeed_core::{FeedService, FollowToggle, PostEngagement};
use marketfeed_domain::{MarketError, UserRole};
use support::{post, signed_in, signed_out, FakeBackend};

#[tokio::test]
async fn like_then_unlike_restores_counter() {
    let backend = FakeBackend::new();
    let card = PostEngagement::new(backend.clone(), &post(1, 23));

    let liked = card.toggle_like().await.unwrap();
    assert!(liked.liked);
    assert_eq!(liked.likes, 24);

    let unliked = card.toggle_like().await.unwrap();
    assert!(!unliked.liked);
    assert_eq!(unliked.likes, 23);
    assert_eq!(backend.calls(), vec!["like_post", "unlike_post"]);
}

#[tokio::test]
async fn failed_like_leaves_counter_and_clears_pending() {
    let backend = FakeBackend::new();
    backend.fail("like_post");
    let card = PostEngagement::new(backend.clone(), &post(1, 23));

    assert!(card.toggle_like().await.is_err());

    let state = card.state();
    assert_eq!(state.likes, 23);
    assert!(!state.liked);
    assert!(!state.pending);
}

#[tokio::test(start_paused = true)]
async fn actions_are_ignored_while_a_call_is_in_flight() {
    let backend = FakeBackend::with_like_delay(Duration::from_millis(200));
    let card = PostEngagement::new(backend.clone(), &post(1, 23));

    let (first, second) = tokio::join!(card.toggle_like(), card.toggle_like());

    assert_eq!(first.unwrap().likes, 24);
    // The overlapping call saw the pending flag and changed nothing
    let second = second.unwrap();
    assert!(second.pending);
    assert_eq!(second.likes, 23);
    assert_eq!(backend.count("like_post"), 1);
    assert_eq!(card.state().likes, 24);
}

#[tokio::test]
async fn comment_requires_text_and_clears_draft() {
    let backend = FakeBackend::new();
    let card = PostEngagement::new(backend.clone(), &post(1, 23));

    card.set_comment_draft("   ");
    assert!(matches!(card.submit_comment().await, Err(MarketError::Validation(_))));
    assert_eq!(backend.count("comment_on_post"), 0);

    card.set_comment_draft("Nice find!");
    let state = card.submit_comment().await.unwrap();
    assert_eq!(state.comments, 13);
    assert!(state.comment_draft.is_empty());
}

#[tokio::test]
async fn repost_and_bookmark_are_local_toggles() {
    let backend = FakeBackend::new();
    let card = PostEngagement::new(backend.clone(), &post(1, 23));

    assert_eq!(card.toggle_repost().reposts, 6);
    assert_eq!(card.toggle_repost().reposts, 5);
    assert!(card.toggle_bookmark().bookmarked);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn create_post_enforces_login_and_length() {
    let backend = FakeBackend::new();

    let anonymous = FeedService::new(backend.clone(), signed_out(), 280);
    assert!(matches!(anonymous.create_post("hello").await, Err(MarketError::Auth(_))));

    let feed = FeedService::new(backend.clone(), signed_in(UserRole::Customer), 280);
    assert!(matches!(feed.create_post("   ").await, Err(MarketError::Validation(_))));
    assert!(matches!(feed.create_post(&"x".repeat(281)).await, Err(MarketError::Validation(_))));

    let created = feed.create_post(&format!("  {}  ", "x".repeat(280))).await.unwrap();
    assert_eq!(created.content.len(), 280);
    assert_eq!(created.username, "MockUser");
    assert_eq!(feed.remaining_chars("abc"), 277);
}

#[tokio::test]
async fn follow_toggle_alternates_calls() {
    let backend = FakeBackend::new();
    let mut button =
        FollowToggle::new(backend.clone(), signed_in(UserRole::Customer), "user2", false);

    assert!(button.toggle().await.unwrap());
    assert!(!button.toggle().await.unwrap());
    assert_eq!(backend.calls(), vec!["follow_user", "unfollow_user"]);
}

#[tokio::test]
async fn follow_requires_login() {
    let backend = FakeBackend::new();
    let mut button = FollowToggle::new(backend.clone(), signed_out(), "user2", false);

    assert!(matches!(button.toggle().await, Err(MarketError::Auth(_))));
    assert!(!button.is_following());
}
