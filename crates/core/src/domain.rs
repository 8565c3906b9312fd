/// One entry of the front page listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub url: String,
    /// `None` when the score text could not be parsed
    pub upvotes: Option<u32>,
    /// `None` when the comment link text could not be parsed or was not recognized
    pub comments: Option<u32>,
    pub uploaded: String, // Relative age, kept verbatim ("3 hours ago")
}

impl Post {
    /// Score with unparsed values reported as zero
    pub fn upvote_count(&self) -> u32 {
        self.upvotes.unwrap_or(0)
    }

    /// Comment count with unparsed values reported as zero
    pub fn comment_count(&self) -> u32 {
        self.comments.unwrap_or(0)
    }
}

/// Text fragments of a single listing row as handed over by a listing source.
/// `None` means the element was not present in the row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub title: String,
    pub href: String,
    pub score_text: Option<String>,
    pub comments_text: Option<String>,
    pub age_text: Option<String>,
}

/// One fetched listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Rows in document order
    pub rows: Vec<RawRow>,
    /// Raw `href` values of the "more results" links, unresolved
    pub more_links: Vec<String>,
}
