use std::path::PathBuf;

use rocket::tokio::fs;
use url::Url;

use crate::models::news::NewsFeed;

/// Why the news feed could not be loaded. The page shows the same error
/// state for every kind; the distinction only reaches the logs.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The resource could not be reached at all.
    Network(String),
    /// The resource answered with a non-success status.
    Status(u16),
    /// The body was not a valid news document.
    Data(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Network(e) => write!(f, "news feed unreachable: {}", e),
            FeedError::Status(code) => write!(f, "news feed returned status {}", code),
            FeedError::Data(e) => write!(f, "news feed malformed: {}", e),
        }
    }
}

/// Where the news JSON lives: a file on disk or an http(s) URL.
/// Every `fetch` reads the resource fresh.
pub enum NewsSource {
    File(PathBuf),
    Remote { url: Url, client: reqwest::Client },
}

impl NewsSource {
    pub fn from_location(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => NewsSource::Remote {
                url,
                client: reqwest::Client::new(),
            },
            _ => NewsSource::File(PathBuf::from(location)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            NewsSource::File(path) => path.display().to_string(),
            NewsSource::Remote { url, .. } => url.to_string(),
        }
    }

    pub async fn fetch(&self) -> Result<NewsFeed, FeedError> {
        match self {
            NewsSource::File(path) => {
                let raw = fs::read_to_string(path)
                    .await
                    .map_err(|e| FeedError::Network(format!("{}: {}", path.display(), e)))?;
                NewsFeed::from_json(&raw).map_err(FeedError::Data)
            }
            NewsSource::Remote { url, client } => {
                let resp = client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|e| FeedError::Network(format!("{}: {}", url, e)))?;

                if !resp.status().is_success() {
                    return Err(FeedError::Status(resp.status().as_u16()));
                }

                resp.json::<NewsFeed>()
                    .await
                    .map_err(|e| FeedError::Data(format!("{}: {}", url, e)))
            }
        }
    }
}
