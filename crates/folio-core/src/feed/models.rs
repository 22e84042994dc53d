use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::parse_timestamp;

/// A syndicated article, normalized for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    /// Source timestamp, kept exactly as the feed sent it
    pub published_at: String,
    pub author: String,
    pub thumbnail: String,
    /// Plain text, at most 150 characters plus an ellipsis
    pub description: String,
    /// Feed tags in feed order, duplicates included
    #[serde(default)]
    pub categories: Vec<String>,
    /// Feed guid, unique within one fetch
    pub id: String,
}

impl Article {
    /// Publish time, when the source timestamp is in a known format
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }

    /// Estimated minutes to read the description
    pub fn read_time_minutes(&self) -> u32 {
        crate::text::read_time_minutes(&self.description)
    }
}

/// Response body of the feed-to-JSON converter
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub status: String,
    /// Error detail sent alongside a non-"ok" status
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub feed: Option<FeedInfo>,
    #[serde(default)]
    pub items: Vec<RawFeedItem>,
}

impl FeedResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedInfo {
    pub url: String,
    pub title: String,
    pub link: String,
    pub author: String,
    pub description: String,
    pub image: String,
}

/// One syndication entry as the converter delivers it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFeedItem {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "pubDate", deserialize_with = "null_as_default")]
    pub pub_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub guid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
}

// The converter sends `null` for some optional fields instead of omitting them
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
