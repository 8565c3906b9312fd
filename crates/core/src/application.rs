use crate::config::CrawlConfig;
use crate::domain::Post;
use crate::ports::{ListingSource, PostPublisher, Result};
use crate::ranking::{top_posts, ShortListPolicy};
use crate::walker::{Harvest, PageWalker};
use tracing::info;
use url::Url;

/// Outcome of one crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub harvest: Harvest,
    /// Posts handed to the publishers, best first
    pub ranked: Vec<Post>,
}

/// Application service for crawling a day's listing and publishing its best posts
pub struct CrawlServiceImpl {
    listing_source: Box<dyn ListingSource>,
    publishers: Vec<Box<dyn PostPublisher>>,
    config: CrawlConfig,
}

impl CrawlServiceImpl {
    /// Creates a new CrawlServiceImpl with the given dependencies
    pub fn new(
        listing_source: Box<dyn ListingSource>,
        publishers: Vec<Box<dyn PostPublisher>>,
        config: CrawlConfig,
    ) -> Self {
        Self {
            listing_source,
            publishers,
            config,
        }
    }

    /// Executes the crawl: walks every listing page, ranks the posts and publishes them
    pub fn execute_crawl(&self) -> Result<CrawlReport> {
        let start = Url::parse(&self.config.start_url())?;
        info!(day = %self.config.day, start = %start, "starting crawl");

        let mut harvest = Harvest::default();
        PageWalker::new(self.listing_source.as_ref(), &self.config).walk(start, &mut harvest);

        info!(
            pages = harvest.pages.len(),
            failed = harvest.failures.len(),
            posts = harvest.posts.len(),
            issues = harvest.issues.len(),
            "crawl finished"
        );

        let ranked = top_posts(&harvest.posts, self.config.top, self.config.short_list);
        if ranked.is_empty()
            && !harvest.posts.is_empty()
            && self.config.short_list == ShortListPolicy::Suppress
        {
            info!(
                posts = harvest.posts.len(),
                top = self.config.top,
                "not enough posts for a full list, publishing nothing"
            );
        }

        for publisher in &self.publishers {
            publisher.publish(self.config.day, &ranked)?;
        }

        Ok(CrawlReport { harvest, ranked })
    }
}
