use folio_core::category::CategoryTable;
use folio_core::service::get_articles;
use folio_core::{AppConfig, Error, FeedClient};
use mockito::{Matcher, Server, ServerGuard};

const PLACEHOLDER: &str = "/images/article-placeholder.jpg";

fn config_for(server: &ServerGuard) -> AppConfig {
    let mut config = AppConfig::default();
    config.feed.converter_url = format!("{}/v1/api.json", server.url());
    config.feed.request_timeout_secs = 5;
    config
}

fn rss_url_for(handle: &str) -> Matcher {
    Matcher::UrlEncoded(
        "rss_url".to_string(),
        format!("https://medium.com/feed/@{}", handle),
    )
}

fn ok_body() -> String {
    serde_json::json!({
        "status": "ok",
        "feed": {
            "url": "https://medium.com/feed/@someone",
            "title": "Stories by Someone on Medium",
            "link": "https://medium.com/@someone",
            "author": "",
            "description": "Stories by Someone on Medium",
            "image": "https://cdn-images-1.medium.com/fit/c/150/150/avatar.png"
        },
        "items": [
            {
                "title": "Micro frontends with React",
                "pubDate": "2024-01-15 10:30:00",
                "link": "https://medium.com/@someone/micro-frontends-1",
                "guid": "https://medium.com/p/aaa111",
                "author": "Someone",
                "thumbnail": "https://cdn-images-1.medium.com/thumb-a.png",
                "description": "<p>Splitting a <b>frontend</b> &amp; keeping it sane.</p>",
                "content": "<p>body</p>",
                "categories": ["react", "micro-frontends", "frontend"]
            },
            {
                "title": "Prompting Claude for code review",
                "pubDate": "2024-01-10 08:00:00",
                "link": "https://medium.com/@someone/prompting-2",
                "guid": "https://medium.com/p/bbb222",
                "author": "Someone",
                "thumbnail": "",
                "description": "<p>Notes from a month of reviews.</p>",
                "content": "<figure><img alt=\"\" src=\"https://cdn-images-1.medium.com/inline-b.png\"></figure>",
                "categories": ["AI Tools", "LLM"]
            },
            {
                "title": "A week in Lisbon",
                "pubDate": "2024-01-02 18:45:00",
                "link": "https://medium.com/@someone/lisbon-3",
                "guid": "https://medium.com/p/ccc333",
                "author": "Someone",
                "thumbnail": "",
                "description": "<p>Trams, tiles and too many pastries.</p>",
                "content": "<p>No pictures this time.</p>",
                "categories": []
            }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn fetch_normalizes_items_in_feed_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/api.json")
        .match_query(rss_url_for("someone"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_body())
        .create_async()
        .await;

    let client = FeedClient::new(&config_for(&server)).unwrap();
    let articles = client.fetch_articles("someone").await;

    mock.assert_async().await;
    assert_eq!(articles.len(), 3);

    let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "https://medium.com/p/aaa111",
            "https://medium.com/p/bbb222",
            "https://medium.com/p/ccc333",
        ]
    );

    assert_eq!(articles[0].thumbnail, "https://cdn-images-1.medium.com/thumb-a.png");
    assert_eq!(articles[1].thumbnail, "https://cdn-images-1.medium.com/inline-b.png");
    assert_eq!(articles[2].thumbnail, PLACEHOLDER);

    assert_eq!(articles[0].description, "Splitting a frontend & keeping it sane.");
    assert_eq!(articles[0].published_at, "2024-01-15 10:30:00");
    assert!(articles[2].categories.is_empty());
}

#[tokio::test]
async fn http_error_yields_empty_list() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/api.json")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .expect(2)
        .create_async()
        .await;

    let client = FeedClient::new(&config_for(&server)).unwrap();

    assert!(client.fetch_articles("someone").await.is_empty());

    let err = client.try_fetch_articles("someone").await.unwrap_err();
    match err {
        Error::UpstreamStatus { status, .. } => assert_eq!(status.as_u16(), 500),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn converter_failure_status_yields_empty_list() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/api.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"error","message":"Cannot download this RSS feed, make sure the Rss URL is correct."}"#)
        .create_async()
        .await;

    let client = FeedClient::new(&config_for(&server)).unwrap();

    assert!(client.fetch_articles("nobody").await.is_empty());
    assert!(matches!(
        client.try_fetch_articles("nobody").await,
        Err(Error::FeedConversion(msg)) if msg.starts_with("Cannot download")
    ));
}

#[tokio::test]
async fn malformed_payload_yields_empty_list() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/api.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let client = FeedClient::new(&config_for(&server)).unwrap();

    assert!(client.fetch_articles("someone").await.is_empty());
    assert!(matches!(
        client.try_fetch_articles("someone").await,
        Err(Error::Json(_))
    ));
}

#[tokio::test]
async fn successful_results_are_cached() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/api.json")
        .match_query(rss_url_for("someone"))
        .with_status(200)
        .with_body(ok_body())
        .expect(1)
        .create_async()
        .await;

    let client = FeedClient::new(&config_for(&server)).unwrap();

    let first = client.fetch_articles("someone").await;
    let second = client.fetch_articles("@someone").await;

    mock.assert_async().await;
    assert_eq!(first, second);
    assert_eq!(second.len(), 3);
}

#[tokio::test]
async fn invalidate_forces_refetch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/api.json")
        .match_query(rss_url_for("someone"))
        .with_status(200)
        .with_body(ok_body())
        .expect(2)
        .create_async()
        .await;

    let client = FeedClient::new(&config_for(&server)).unwrap();

    client.fetch_articles("someone").await;
    client.invalidate("someone").await;
    client.fetch_articles("someone").await;

    mock.assert_async().await;
}

#[tokio::test]
async fn zero_ttl_disables_cache() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/api.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(ok_body())
        .expect(2)
        .create_async()
        .await;

    let mut config = config_for(&server);
    config.feed.cache_ttl_secs = 0;
    let client = FeedClient::new(&config).unwrap();

    client.fetch_articles("someone").await;
    client.fetch_articles("someone").await;

    mock.assert_async().await;
}

#[tokio::test]
async fn get_articles_filters_by_category() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/api.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(ok_body())
        .create_async()
        .await;

    let client = FeedClient::new(&config_for(&server)).unwrap();
    let table = CategoryTable::builtin();

    let ai = get_articles(&client, &table, "someone", Some("ai")).await;
    let titles: Vec<&str> = ai.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Prompting Claude for code review"]);

    let web = get_articles(&client, &table, "someone", Some("web")).await;
    let titles: Vec<&str> = web.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Micro frontends with React"]);

    let all = get_articles(&client, &table, "someone", Some("all")).await;
    assert_eq!(all.len(), 3);

    let none = get_articles(&client, &table, "someone", None).await;
    assert_eq!(none, all);
}

#[tokio::test]
async fn concurrent_misses_share_one_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/api.json")
        .match_query(rss_url_for("someone"))
        .with_status(200)
        .with_body(ok_body())
        .expect(1)
        .create_async()
        .await;

    let client = FeedClient::new(&config_for(&server)).unwrap();

    let (first, second) = tokio::join!(
        client.fetch_articles("someone"),
        client.fetch_articles("someone"),
    );

    mock.assert_async().await;
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[tokio::test]
async fn null_fields_do_not_drop_the_feed() {
    let body = serde_json::json!({
        "status": "ok",
        "items": [
            {
                "title": "Kept",
                "pubDate": "2024-01-15 10:30:00",
                "link": "https://medium.com/p/one",
                "guid": "g1",
                "author": "Someone",
                "thumbnail": "",
                "description": "<p>One</p>",
                "content": "",
                "categories": ["react"]
            },
            {
                "title": null,
                "pubDate": null,
                "link": null,
                "guid": "g2",
                "author": null,
                "thumbnail": null,
                "description": null,
                "content": null,
                "categories": null
            }
        ]
    })
    .to_string();

    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/api.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let client = FeedClient::new(&config_for(&server)).unwrap();
    let articles = client.fetch_articles("someone").await;

    let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["g1", "g2"]);
    assert!(articles[1].title.is_empty());
    assert_eq!(articles[1].thumbnail, PLACEHOLDER);
}
