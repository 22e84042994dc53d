use super::models::{Article, RawFeedItem};
use crate::text::{clean_description, extract_first_image};

/// Map one converter item onto an [`Article`]
///
/// The thumbnail falls back from the feed field, to the first `<img>` in the
/// item content, to `placeholder`.
pub fn normalize_item(item: RawFeedItem, placeholder: &str) -> Article {
    let thumbnail = select_thumbnail(&item, placeholder);
    let description = clean_description(&item.description);

    Article {
        title: item.title,
        link: item.link,
        published_at: item.pub_date,
        author: item.author,
        thumbnail,
        description,
        categories: item.categories,
        id: item.guid,
    }
}

fn select_thumbnail(item: &RawFeedItem, placeholder: &str) -> String {
    if !item.thumbnail.is_empty() {
        return item.thumbnail.clone();
    }

    extract_first_image(&item.content)
        .unwrap_or(placeholder)
        .to_string()
}
