//! Direct messaging

mod conversation;
pub mod ports;

pub use conversation::ConversationView;
