use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::render::parse_timestamp;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewsRecord {
    pub id: i64,
    pub date: String,
    pub summary: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// The JSON document served at the news source: `{ "news": [...] }`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NewsFeed {
    pub news: Vec<NewsRecord>,
}

impl NewsRecord {
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }

    pub fn href(&self) -> &str {
        self.url.as_deref().filter(|u| !u.is_empty()).unwrap_or("#")
    }

    pub fn opens_new_window(&self) -> bool {
        self.target.as_deref() == Some("_blank")
    }
}

impl NewsFeed {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Invalid news JSON: {}", e))
    }

    /// Newest first. Records sharing a date keep their feed order.
    /// A record with an unreadable date fails the whole feed.
    pub fn into_sorted(self) -> Result<Vec<NewsRecord>, String> {
        let mut keyed = Vec::with_capacity(self.news.len());
        for record in self.news {
            let ts = record
                .published_at()
                .ok_or_else(|| format!("News {} has an invalid date: {:?}", record.id, record.date))?;
            keyed.push((ts, record));
        }
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(keyed.into_iter().map(|(_, r)| r).collect())
    }

    /// First record with exactly this id, in feed order.
    pub fn find(&self, id: i64) -> Option<&NewsRecord> {
        self.news.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, date: &str) -> NewsRecord {
        NewsRecord {
            id,
            date: date.to_string(),
            summary: format!("summary {}", id),
            detail: format!("detail {}", id),
            url: None,
            target: None,
        }
    }

    #[test]
    fn sorts_newest_first() {
        let feed = NewsFeed {
            news: vec![record(1, "2024-01-01"), record(2, "2024-03-01"), record(3, "2024-02-01")],
        };
        let dates: Vec<String> = feed.into_sorted().unwrap().into_iter().map(|r| r.date).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn equal_dates_keep_feed_order() {
        let feed = NewsFeed {
            news: vec![
                record(1, "2024-01-01"),
                record(2, "2024-05-05"),
                record(3, "2024-05-05"),
                record(4, "2024-05-05"),
            ],
        };
        let ids: Vec<i64> = feed.into_sorted().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn invalid_date_fails_the_feed() {
        let feed = NewsFeed {
            news: vec![record(1, "2024-01-01"), record(2, "someday")],
        };
        let err = feed.into_sorted().unwrap_err();
        assert!(err.contains("News 2"));
    }

    #[test]
    fn parses_optional_link_fields() {
        let feed = NewsFeed::from_json(
            r#"{"news":[
                {"id":1,"date":"2024-01-01","summary":"a","detail":"b"},
                {"id":2,"date":"2024-01-02","summary":"c","detail":"d","url":"https://example.com","target":"_blank"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(feed.news[0].href(), "#");
        assert!(!feed.news[0].opens_new_window());
        assert_eq!(feed.news[1].href(), "https://example.com");
        assert!(feed.news[1].opens_new_window());
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        assert!(NewsFeed::from_json(r#"{"items":[]}"#).is_err());
        assert!(NewsFeed::from_json(r#"{"news":[{"id":"x"}]}"#).is_err());
        assert!(NewsFeed::from_json("not json").is_err());
    }

    #[test]
    fn find_matches_exact_id() {
        let feed = NewsFeed {
            news: vec![record(10, "2024-01-01"), record(11, "2024-01-02")],
        };
        assert_eq!(feed.find(11).map(|r| r.id), Some(11));
        assert!(feed.find(1).is_none());
    }
}
