use chrono::NaiveDate;
use newscraft_core::domain::{ListingPage, Post, RawRow};
use newscraft_core::errors::FetchError;
use newscraft_core::ports::{ListingSource, PostPublisher, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

pub const DAY: &str = "2024-04-30";

pub fn day() -> NaiveDate {
    NaiveDate::parse_from_str(DAY, "%Y-%m-%d").unwrap()
}

pub fn page_url(page: u32) -> String {
    match page {
        1 => format!("https://news.ycombinator.com/front?day={DAY}"),
        n => format!("https://news.ycombinator.com/front?day={DAY}&p={n}"),
    }
}

pub fn row(title: &str, score: &str, comments: &str) -> RawRow {
    RawRow {
        title: title.to_string(),
        href: format!("https://example.com/{}", title.replace(' ', "-")),
        score_text: Some(score.to_string()),
        comments_text: Some(comments.to_string()),
        age_text: Some("2 hours ago".to_string()),
    }
}

/// In-memory listing keyed by absolute URL
#[derive(Default)]
pub struct FakeListing {
    pages: HashMap<String, ListingPage>,
    errors: HashMap<String, FetchError>,
    pub fetched: Arc<Mutex<Vec<String>>>,
}

impl FakeListing {
    pub fn with_page(mut self, url: String, rows: Vec<RawRow>, more: &[&str]) -> Self {
        let page = ListingPage {
            rows,
            more_links: more.iter().map(|m| m.to_string()).collect(),
        };
        self.pages.insert(url, page);
        self
    }

    pub fn with_error(mut self, url: String, error: FetchError) -> Self {
        self.errors.insert(url, error);
        self
    }
}

impl ListingSource for FakeListing {
    fn fetch_page(&self, url: &Url) -> std::result::Result<ListingPage, FetchError> {
        self.fetched.lock().unwrap().push(url.to_string());
        if let Some(err) = self.errors.get(url.as_str()) {
            return Err(err.clone());
        }
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Transport {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            })
    }
}

/// Publisher that keeps every call for later inspection
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    pub calls: Arc<Mutex<Vec<(NaiveDate, Vec<Post>)>>>,
}

impl PostPublisher for RecordingPublisher {
    fn publish(&self, day: NaiveDate, posts: &[Post]) -> Result<()> {
        self.calls.lock().unwrap().push((day, posts.to_vec()));
        Ok(())
    }
}

/// Publisher that always fails
pub struct BrokenPublisher;

impl PostPublisher for BrokenPublisher {
    fn publish(&self, _day: NaiveDate, _posts: &[Post]) -> Result<()> {
        Err("disk full".into())
    }
}
