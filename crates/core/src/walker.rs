use crate::config::CrawlConfig;
use crate::domain::Post;
use crate::errors::{FieldIssue, VisitError};
use crate::extract::extract_post;
use crate::ports::ListingSource;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, info, warn};
use url::Url;

/// Field issue found on a specific row of a specific page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    pub page: String,
    /// Zero-based row position on the page
    pub row: usize,
    pub issue: FieldIssue,
}

/// A page that was scheduled but not harvested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub url: String,
    pub error: VisitError,
}

/// Everything gathered during one crawl
#[derive(Debug, Clone, Default)]
pub struct Harvest {
    /// Posts in discovery order
    pub posts: Vec<Post>,
    pub issues: Vec<RowIssue>,
    /// Pages fetched successfully, in visit order
    pub pages: Vec<String>,
    pub failures: Vec<PageFailure>,
    /// Set when the page budget ran out with pages still queued
    pub truncated: bool,
}

impl Harvest {
    fn attempts(&self) -> usize {
        self.pages.len()
            + self
                .failures
                .iter()
                .filter(|f| matches!(f.error, VisitError::Fetch(_)))
                .count()
    }
}

/// Walks the paginated listing of one day, page by page
pub struct PageWalker<'a> {
    source: &'a dyn ListingSource,
    config: &'a CrawlConfig,
}

impl<'a> PageWalker<'a> {
    pub fn new(source: &'a dyn ListingSource, config: &'a CrawlConfig) -> Self {
        Self { source, config }
    }

    /// Visits `start` and every "more results" page reachable from it,
    /// appending to `harvest`. Page and row failures are recorded, never returned.
    pub fn walk(&self, start: Url, harvest: &mut Harvest) {
        let mut seen = HashSet::from([start.as_str().to_owned()]);
        let mut queue = VecDeque::from([start]);

        while let Some(url) = queue.pop_front() {
            if !self.is_allowed(&url) {
                warn!(
                    url = %url,
                    allowed = %self.config.domain,
                    "skipping page outside allowed domain"
                );
                harvest.failures.push(PageFailure {
                    url: url.to_string(),
                    error: VisitError::ForbiddenDomain {
                        url: url.to_string(),
                        allowed: self.config.domain.clone(),
                    },
                });
                continue;
            }

            if harvest.attempts() >= self.config.max_pages {
                warn!(
                    max_pages = self.config.max_pages,
                    pending = queue.len() + 1,
                    "page budget exhausted, stopping crawl"
                );
                harvest.truncated = true;
                break;
            }

            let page = match self.source.fetch_page(&url) {
                Ok(page) => page,
                Err(err) => {
                    match err.status() {
                        Some(status) => warn!(url = %url, status, error = %err, "request failed"),
                        None => warn!(url = %url, error = %err, "request failed"),
                    }
                    harvest.failures.push(PageFailure {
                        url: url.to_string(),
                        error: err.into(),
                    });
                    continue;
                }
            };

            info!(url = %url, rows = page.rows.len(), "harvested page");
            harvest.pages.push(url.to_string());

            for (row, raw) in page.rows.iter().enumerate() {
                let extraction = extract_post(raw);
                harvest.issues.extend(extraction.issues.into_iter().map(|issue| RowIssue {
                    page: url.to_string(),
                    row,
                    issue,
                }));
                harvest.posts.push(extraction.post);
            }

            for href in &page.more_links {
                match url.join(href) {
                    Ok(next) => {
                        if seen.insert(next.as_str().to_owned()) {
                            debug!(url = %next, "queued next page");
                            queue.push_back(next);
                        }
                    }
                    Err(err) => {
                        warn!(href = %href, error = %err, "could not resolve pagination link");
                        harvest.failures.push(PageFailure {
                            url: url.to_string(),
                            error: VisitError::InvalidLink {
                                href: href.clone(),
                                reason: err.to_string(),
                            },
                        });
                    }
                }
            }
        }
    }

    fn is_allowed(&self, url: &Url) -> bool {
        url.host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(&self.config.domain))
    }
}
