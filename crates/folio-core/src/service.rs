use crate::category::{filter_by_category, CategoryTable, ALL_SLUG};
use crate::feed::{Article, FeedClient};

/// Fetch a handle's articles and narrow them to a category
///
/// `None` and `"all"` skip filtering. Like [`FeedClient::fetch_articles`],
/// this never fails: an upstream problem yields an empty list.
pub async fn get_articles(
    client: &FeedClient,
    table: &CategoryTable,
    handle: &str,
    category: Option<&str>,
) -> Vec<Article> {
    let articles = client.fetch_articles(handle).await;

    match category {
        Some(slug) if slug != ALL_SLUG => filter_by_category(articles, slug, table),
        _ => articles,
    }
}

/// The first `count` articles in feed order
pub fn latest(mut articles: Vec<Article>, count: usize) -> Vec<Article> {
    articles.truncate(count);
    articles
}
