//! Auctions

pub mod ports;
mod service;

pub use service::AuctionService;
