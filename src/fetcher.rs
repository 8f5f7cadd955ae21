//! Feed Fetcher.
//!
//! Retrieves a feed and reduces each entry to an [`Article`]. Parsing is
//! delegated to `feed-rs`, which handles RSS 0.9x/1.0/2.0, Atom and JSON Feed.
//!
//! # Sources
//!
//! | Source | Retrieval |
//! |--------|-----------|
//! | `http://…`, `https://…` | `GET` with the shared [`reqwest::Client`] |
//! | `file://…` | read from the local filesystem |
//! | anything else | treated as a local path |
//!
//! No validation, filtering or deduplication is applied: the returned vector
//! has one article per feed entry, in feed order.

use crate::error::{Error, Result};
use crate::models::Article;
use feed_rs::model::Entry;
use reqwest::Client;
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use url::Url;

/// Where a feed is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FeedLocation {
    Remote(Url),
    Local(PathBuf),
}

impl FeedLocation {
    fn resolve(source: &str) -> Self {
        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => FeedLocation::Remote(url),
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => FeedLocation::Local(path),
                Err(()) => FeedLocation::Local(PathBuf::from(source)),
            },
            _ => FeedLocation::Local(PathBuf::from(source)),
        }
    }
}

/// Build the HTTP client used for feed requests.
///
/// No request timeout is configured.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(Error::Client)
}

/// Fetch the feed at `source` and extract its articles.
///
/// # Errors
///
/// - [`Error::Request`] / [`Error::HttpStatus`] for network failures
/// - [`Error::Io`] when a local feed cannot be read
/// - [`Error::Parse`] when the payload is not a feed
#[instrument(level = "info", skip(client))]
pub async fn fetch_articles(client: &Client, source: &str) -> Result<Vec<Article>> {
    let raw = match FeedLocation::resolve(source) {
        FeedLocation::Remote(url) => fetch_remote(client, url).await?,
        FeedLocation::Local(path) => {
            debug!(path = %path.display(), "Reading local feed");
            tokio::fs::read(&path)
                .await
                .map_err(|e| Error::io(path, e))?
        }
    };
    debug!(bytes = raw.len(), "Feed payload retrieved");

    let articles = parse_articles(&raw, source)?;
    info!(count = articles.len(), "Extracted articles from feed");
    Ok(articles)
}

async fn fetch_remote(client: &Client, url: Url) -> Result<Vec<u8>> {
    let url_str = url.to_string();
    let request_error = |source| Error::Request {
        url: url_str.clone(),
        source,
    };

    let response = client.get(url).send().await.map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: url_str.clone(),
            status: status.as_u16(),
        });
    }
    let body = response.bytes().await.map_err(request_error)?;
    Ok(body.to_vec())
}

/// Parse an in-memory feed payload into articles.
///
/// `origin` only labels the error when parsing fails.
pub fn parse_articles(raw: &[u8], origin: &str) -> Result<Vec<Article>> {
    let feed = feed_rs::parser::parse(raw).map_err(|source| Error::Parse {
        origin: origin.to_string(),
        source,
    })?;
    Ok(feed.entries.into_iter().map(article_from_entry).collect())
}

fn article_from_entry(entry: Entry) -> Article {
    Article {
        title: entry.title.map(|text| text.content),
        description: entry.summary.map(|text| text.content),
        content: entry.content.and_then(|content| content.body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use std::io::Write;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Security Blog</title>
    <link>https://example.com/</link>
    <description>Sample</description>
    <item>
      <title>Hello</title>
      <link>https://example.com/hello</link>
      <description>d1</description>
    </item>
    <item>
      <link>https://example.com/untitled</link>
      <content:encoded><![CDATA[c2]]></content:encoded>
    </item>
    <item>
      <title>Both</title>
      <description>d3</description>
      <content:encoded><![CDATA[c3]]></content:encoded>
    </item>
  </channel>
</rss>"#;

    const SAMPLE_ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Sample</title>
  <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
  <updated>2024-01-01T00:00:00Z</updated>
  <entry>
    <title>Atom Entry</title>
    <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>
    <updated>2024-01-01T00:00:00Z</updated>
    <summary>s1</summary>
    <content type="text">body1</content>
  </entry>
</feed>"#;

    #[test]
    fn test_resolve_http_sources() {
        assert!(matches!(
            FeedLocation::resolve("https://blog.example.com/feed/"),
            FeedLocation::Remote(_)
        ));
        assert!(matches!(
            FeedLocation::resolve("http://localhost:8080/rss"),
            FeedLocation::Remote(_)
        ));
    }

    #[test]
    fn test_resolve_local_sources() {
        assert_eq!(
            FeedLocation::resolve("feeds/sample.xml"),
            FeedLocation::Local(PathBuf::from("feeds/sample.xml"))
        );
        assert_eq!(
            FeedLocation::resolve("file:///tmp/sample.xml"),
            FeedLocation::Local(PathBuf::from("/tmp/sample.xml"))
        );
    }

    #[test]
    fn test_parse_rss_preserves_order_and_fields() {
        let articles = parse_articles(SAMPLE_RSS.as_bytes(), "sample").unwrap();
        assert_eq!(articles.len(), 3);

        assert_eq!(articles[0].title(), Some("Hello"));
        assert_eq!(articles[0].description(), Some("d1"));
        assert_eq!(articles[0].content(), None);

        assert_eq!(articles[1].title(), None);
        assert_eq!(articles[1].content(), Some("c2"));

        assert_eq!(articles[2].title(), Some("Both"));
        assert_eq!(articles[2].description(), Some("d3"));
        assert_eq!(articles[2].content(), Some("c3"));
    }

    #[test]
    fn test_parse_atom_entry() {
        let articles = parse_articles(SAMPLE_ATOM.as_bytes(), "atom").unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title(), Some("Atom Entry"));
        assert_eq!(articles[0].description(), Some("s1"));
        assert_eq!(articles[0].content(), Some("body1"));
    }

    #[test]
    fn test_parse_rejects_non_feed() {
        let err = parse_articles(b"this is not a feed", "garbage").unwrap_err();
        match err {
            Error::Parse { origin, .. } => assert_eq!(origin, "garbage"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_RSS.as_bytes()).unwrap();
        let source = file.path().to_str().unwrap().to_string();

        let client = build_client().unwrap();
        let articles = fetch_articles(&client, &source).await.unwrap();
        assert_eq!(articles.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_missing_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.xml");

        let client = build_client().unwrap();
        let err = fetch_articles(&client, missing.to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    async fn spawn_test_server() -> (String, tokio::task::JoinHandle<()>) {
        let app = Router::new()
            .route(
                "/feed.xml",
                get(|| async {
                    (
                        [(axum::http::header::CONTENT_TYPE, "application/rss+xml")],
                        SAMPLE_RSS,
                    )
                }),
            )
            .route(
                "/gone.xml",
                get(|| async { StatusCode::NOT_FOUND.into_response() }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let address = listener.local_addr().expect("local addr should exist");
        let join_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });
        (format!("http://{address}"), join_handle)
    }

    #[tokio::test]
    async fn test_fetch_over_http() {
        let (base, server) = spawn_test_server().await;
        let client = build_client().unwrap();

        let articles = fetch_articles(&client, &format!("{base}/feed.xml"))
            .await
            .unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].title(), Some("Hello"));

        server.abort();
    }

    #[tokio::test]
    async fn test_fetch_http_error_status() {
        let (base, server) = spawn_test_server().await;
        let client = build_client().unwrap();

        let err = fetch_articles(&client, &format!("{base}/gone.xml"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 404, .. }));

        server.abort();
    }
}
