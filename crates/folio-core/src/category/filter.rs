use std::borrow::Cow;

use super::table::{CategoryConfig, CategoryTable};
use crate::feed::Article;

/// Slug that selects every article
pub const ALL_SLUG: &str = "all";

/// Keep the articles that belong to `slug`, in their original order.
///
/// An empty slug or `"all"` returns the input untouched. A slug missing from
/// `table` is used as its own keyword, matched against tags and text.
///
/// Matching is plain substring containment, so short keywords also hit
/// inside longer words ("ai" in "brain").
pub fn filter_by_category(articles: Vec<Article>, slug: &str, table: &CategoryTable) -> Vec<Article> {
    if slug.is_empty() || slug == ALL_SLUG {
        return articles;
    }

    let category = match table.get(slug) {
        Some(config) => Cow::Borrowed(config),
        None => {
            tracing::debug!("Unknown category '{}', matching on the slug itself", slug);
            Cow::Owned(CategoryConfig::ad_hoc(slug))
        }
    };

    let total = articles.len();
    let matched: Vec<Article> = articles
        .into_iter()
        .filter(|article| category.matches(article))
        .collect();

    tracing::debug!(
        "Category '{}' matched {} of {} articles",
        category.slug,
        matched.len(),
        total
    );

    matched
}
