//! Social feed: posts, engagement, follows

pub mod content;
mod engagement;
mod feed;
pub mod ports;

pub use engagement::{EngagementState, FollowToggle, PostEngagement};
pub use feed::FeedService;
