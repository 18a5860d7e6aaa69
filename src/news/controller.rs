use log::warn;

use super::pagination::Pagination;
use super::source::{FeedError, NewsSource};
use crate::models::news::NewsRecord;

/// The sorted feed plus the page being looked at. Rendering reads it,
/// navigation consumes it and hands back the next state.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsListState {
    records: Vec<NewsRecord>,
    pagination: Pagination,
}

impl NewsListState {
    /// `records` must already be sorted newest first.
    pub fn new(records: Vec<NewsRecord>) -> Self {
        let pagination = Pagination::new(records.len());
        NewsListState { records, pagination }
    }

    pub fn go_to(self, page: usize) -> Self {
        NewsListState {
            pagination: self.pagination.go_to(page),
            records: self.records,
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_records(&self) -> &[NewsRecord] {
        &self.records[self.pagination.range()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NewsView {
    List(NewsListState),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Found(NewsRecord),
    NotFound,
    Failed,
}

/// Owns one news view for the lifetime of a request: mount, load once, render.
pub struct NewsController<'a> {
    source: &'a NewsSource,
}

impl<'a> NewsController<'a> {
    pub fn mount(source: &'a NewsSource) -> Self {
        NewsController { source }
    }

    pub async fn list(&self, page: Option<usize>) -> NewsView {
        let records = match self.source.fetch().await {
            Ok(feed) => feed.into_sorted().map_err(FeedError::Data),
            Err(e) => Err(e),
        };

        match records {
            Ok(records) => NewsView::List(NewsListState::new(records).go_to(page.unwrap_or(1))),
            Err(e) => {
                warn!("[news] {} ({})", e, self.source.describe());
                NewsView::Failed
            }
        }
    }

    /// Detail for the record named by the request path (`/news/<id>`).
    pub async fn detail(&self, path: &str) -> DetailView {
        let id = match parse_record_id(path) {
            Some(id) => id,
            None => return DetailView::NotFound,
        };

        match self.source.fetch().await {
            Ok(feed) => match feed.find(id) {
                Some(record) => DetailView::Found(record.clone()),
                None => DetailView::NotFound,
            },
            Err(e) => {
                warn!("[news] detail {}: {} ({})", id, e, self.source.describe());
                DetailView::Failed
            }
        }
    }
}

/// Record id from the third segment of `/news/<id>`.
/// Reads leading digits (with an optional sign) and ignores anything after them,
/// so `/news/12-title` names record 12.
pub fn parse_record_id(path: &str) -> Option<i64> {
    let mut segments = path.split('/');
    segments.next()?;
    if segments.next()? != "news" {
        return None;
    }
    let segment = segments.next()?.trim_start();

    let (sign, digits) = match segment.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, segment.strip_prefix('+').unwrap_or(segment)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(id: i64, date: &str) -> NewsRecord {
        NewsRecord {
            id,
            date: date.to_string(),
            summary: format!("s{}", id),
            detail: format!("d{}", id),
            url: None,
            target: None,
        }
    }

    fn nine() -> Vec<NewsRecord> {
        (1..=9).map(|i| record(i, &format!("2024-01-{:02}", 10 - i))).collect()
    }

    #[test]
    fn pages_slice_the_sorted_records() {
        let records = nine();
        let state = NewsListState::new(records.clone());
        assert_eq!(state.pagination().total_pages(), 3);
        assert_eq!(state.current_records(), &records[0..4]);

        let state = state.go_to(3);
        assert_eq!(state.current_records(), &records[8..9]);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let state = NewsListState::new(nine()).go_to(0);
        assert_eq!(state.pagination().current_page(), 1);
        let state = state.go_to(99);
        assert_eq!(state.pagination().current_page(), 3);
        assert_eq!(state.current_records().len(), 1);
    }

    #[test]
    fn parses_ids_from_paths() {
        assert_eq!(parse_record_id("/news/7"), Some(7));
        assert_eq!(parse_record_id("/news/12-title"), Some(12));
        assert_eq!(parse_record_id("/news/-3"), Some(-3));
        assert_eq!(parse_record_id("/news/abc"), None);
        assert_eq!(parse_record_id("/news/"), None);
        assert_eq!(parse_record_id("/news"), None);
        assert_eq!(parse_record_id("/blog/7"), None);
    }

    fn feed_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[rocket::async_test]
    async fn list_sorts_and_opens_requested_page() {
        let file = feed_file(
            r#"{"news":[
                {"id":1,"date":"2024-01-01","summary":"a","detail":"a"},
                {"id":2,"date":"2024-03-01","summary":"b","detail":"b"},
                {"id":3,"date":"2024-02-01","summary":"c","detail":"c"}
            ]}"#,
        );
        let source = NewsSource::File(file.path().to_path_buf());
        let view = NewsController::mount(&source).list(None).await;

        let NewsView::List(state) = view else {
            panic!("expected a list view");
        };
        let ids: Vec<i64> = state.current_records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(state.pagination().current_page(), 1);
    }

    #[rocket::async_test]
    async fn list_failure_degrades_to_failed_view() {
        let dir = tempfile::tempdir().unwrap();
        let source = NewsSource::File(dir.path().join("missing.json"));
        assert_eq!(NewsController::mount(&source).list(Some(2)).await, NewsView::Failed);
    }

    #[rocket::async_test]
    async fn list_with_bad_date_is_failed() {
        let file = feed_file(r#"{"news":[{"id":1,"date":"??","summary":"a","detail":"a"}]}"#);
        let source = NewsSource::File(file.path().to_path_buf());
        assert_eq!(NewsController::mount(&source).list(None).await, NewsView::Failed);
    }

    #[rocket::async_test]
    async fn detail_looks_up_by_id() {
        let file = feed_file(
            r#"{"news":[
                {"id":4,"date":"2024-01-01","summary":"four","detail":"x"},
                {"id":5,"date":"2024-01-02","summary":"five","detail":"y"}
            ]}"#,
        );
        let source = NewsSource::File(file.path().to_path_buf());
        let controller = NewsController::mount(&source);

        match controller.detail("/news/5").await {
            DetailView::Found(r) => assert_eq!(r.summary, "five"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(controller.detail("/news/6").await, DetailView::NotFound);
        assert_eq!(controller.detail("/news/five").await, DetailView::NotFound);
    }

    #[rocket::async_test]
    async fn detail_failure_is_failed() {
        let file = feed_file("<html>oops</html>");
        let source = NewsSource::File(file.path().to_path_buf());
        assert_eq!(NewsController::mount(&source).detail("/news/1").await, DetailView::Failed);
    }
}
