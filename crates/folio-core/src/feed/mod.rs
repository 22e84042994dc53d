mod client;
mod models;
mod normalize;

pub use client::FeedClient;
pub use models::{Article, FeedInfo, FeedResponse, RawFeedItem};
pub use normalize::normalize_item;
