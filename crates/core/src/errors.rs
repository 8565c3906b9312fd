use thiserror::Error;

/// Failure reported by a listing source for a single page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

impl FetchError {
    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { .. } => None,
        }
    }
}

/// Why a page of the listing was not harvested
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisitError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{url} is outside the allowed domain {allowed}")]
    ForbiddenDomain { url: String, allowed: String },

    #[error("pagination link {href:?} could not be resolved: {reason}")]
    InvalidLink { href: String, reason: String },
}

/// Data quality problem found while extracting a single row.
/// None of these stop the crawl.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    #[error("row has no score element")]
    MissingScore,

    #[error("score text {0:?} does not match \"<N> points\"")]
    ScorePatternMiss(String),

    #[error("comment text {0:?} has no parseable count")]
    CommentCountUnparsed(String),

    #[error("comment text {0:?} is not a recognized format")]
    CommentTextUnrecognized(String),
}
