pub mod category;
pub mod config;
pub mod error;
pub mod feed;
pub mod format;
pub mod service;
pub mod text;

pub use category::{filter_by_category, CategoryConfig, CategoryTable};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use feed::{Article, FeedClient};
