use crate::domain::{ListingPage, Post};
use crate::errors::FetchError;
use chrono::NaiveDate;
use std::error::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Fetches one listing page and exposes its rows and pagination links.
/// This is the port the core uses to reach the network and the HTML tree.
pub trait ListingSource: Send + Sync {
    fn fetch_page(&self, url: &Url) -> std::result::Result<ListingPage, FetchError>;
}

/// Trait for publishing the ranked posts of a day
/// This is a port (interface) that defines how the core communicates with output adapters
pub trait PostPublisher: Send + Sync {
    fn publish(&self, day: NaiveDate, posts: &[Post]) -> Result<()>;
}
