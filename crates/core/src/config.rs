use crate::ranking::ShortListPolicy;
use crate::utils::front_page_url;
use chrono::NaiveDate;

pub const DEFAULT_DOMAIN: &str = "news.ycombinator.com";
pub const DEFAULT_TOP: usize = 5;
pub const DEFAULT_MAX_PAGES: usize = 25;

/// Settings for one crawl run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Only pages on this host are fetched
    pub domain: String,
    /// Day of the front page listing
    pub day: NaiveDate,
    /// Number of posts to publish
    pub top: usize,
    /// Upper bound on page fetch attempts, failed ones included
    pub max_pages: usize,
    pub short_list: ShortListPolicy,
}

impl CrawlConfig {
    /// Default settings for the given day
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            day,
            top: DEFAULT_TOP,
            max_pages: DEFAULT_MAX_PAGES,
            short_list: ShortListPolicy::default(),
        }
    }

    pub fn start_url(&self) -> String {
        front_page_url(&self.domain, self.day)
    }
}
