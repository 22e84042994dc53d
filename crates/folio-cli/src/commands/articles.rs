use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use folio_core::{
    feed::{Article, FeedClient},
    format::{format_date, format_relative_date},
    service::{get_articles, latest},
    AppConfig,
};

const MAX_TAGS_SHOWN: usize = 3;

pub struct Options {
    pub handle: Option<String>,
    pub category: Option<String>,
    pub limit: Option<usize>,
    pub json: bool,
}

pub async fn run(config: &AppConfig, options: Options) -> Result<()> {
    let Some(handle) = options
        .handle
        .or_else(|| config.general.default_handle.clone())
    else {
        bail!(
            "No author handle given. Pass --handle or set general.default_handle in {}",
            AppConfig::config_path().display()
        );
    };

    let client = FeedClient::new(config)?;
    let table = config.category_table();

    let mut articles = get_articles(&client, &table, &handle, options.category.as_deref()).await;
    if let Some(limit) = options.limit {
        articles = latest(articles, limit);
    }

    tracing::debug!("Showing {} articles for '{}'", articles.len(), handle);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    if articles.is_empty() {
        println!("No articles found.");
        println!("\nThe feed may be unreachable right now, or nothing matches this category.");
        return Ok(());
    }

    let now = Utc::now();
    for article in &articles {
        println!("{}", render(article, now));
    }

    Ok(())
}

fn render(article: &Article, now: DateTime<Utc>) -> String {
    let mut out = format!(
        "  {}\n    {} ({}) · {} min read\n",
        article.title,
        format_date(&article.published_at),
        format_relative_date(&article.published_at, now),
        article.read_time_minutes(),
    );

    if !article.categories.is_empty() {
        let tags: Vec<&str> = article
            .categories
            .iter()
            .take(MAX_TAGS_SHOWN)
            .map(String::as_str)
            .collect();
        out.push_str(&format!("    Tags: {}\n", tags.join(", ")));
    }

    out.push_str(&format!("    {}\n", article.link));
    out
}
