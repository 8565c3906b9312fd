//! Field extraction for a single listing row.
//!
//! Every function here is pure apart from log output: a malformed row still
//! yields a [`Post`], with the fields that could not be read left as `None`
//! and the reasons returned as [`FieldIssue`]s.

use crate::domain::{Post, RawRow};
use crate::errors::FieldIssue;
use crate::utils::{first_digit_run, strip_nbsp};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s+points?").expect("score pattern is valid"));

/// Comment link text shown for posts with no comments yet
pub const DISCUSS: &str = "discuss";

/// Interpretation of the last link of a metadata row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentField {
    /// Literal "discuss": the post has no comments
    Discuss,
    Count(u32),
    /// Looked like a comment count but held no parseable number
    Unparsed,
    /// Anything else ("flag", "hide", a missing link)
    Unrecognized,
}

impl CommentField {
    pub fn value(self) -> Option<u32> {
        match self {
            CommentField::Discuss => Some(0),
            CommentField::Count(n) => Some(n),
            CommentField::Unparsed | CommentField::Unrecognized => None,
        }
    }
}

/// Result of extracting one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub post: Post,
    pub issues: Vec<FieldIssue>,
}

/// Extracts the leading score out of text shaped like `"123 points"`
pub fn parse_score(text: &str) -> Result<u32, FieldIssue> {
    SCORE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .ok_or_else(|| FieldIssue::ScorePatternMiss(text.to_string()))
}

/// Classifies the comment link text of a metadata row
pub fn parse_comments(text: &str) -> CommentField {
    if text == DISCUSS {
        return CommentField::Discuss;
    }
    if !text.contains("comment") {
        return CommentField::Unrecognized;
    }

    let cleaned = strip_nbsp(text);
    match first_digit_run(&cleaned).and_then(|digits| digits.parse().ok()) {
        Some(count) => CommentField::Count(count),
        None => CommentField::Unparsed,
    }
}

/// Builds a post out of the raw fragments of one listing row
pub fn extract_post(row: &RawRow) -> Extraction {
    let mut issues = Vec::new();

    let upvotes = match row.score_text.as_deref() {
        Some(text) => match parse_score(text) {
            Ok(score) => Some(score),
            Err(issue) => {
                warn!(title = %row.title, score_text = text, "score text did not match");
                issues.push(issue);
                None
            }
        },
        None => {
            warn!(title = %row.title, "row has no score");
            issues.push(FieldIssue::MissingScore);
            None
        }
    };

    let comments_text = row.comments_text.as_deref().unwrap_or_default();
    let comments = match parse_comments(comments_text) {
        CommentField::Unparsed => {
            warn!(title = %row.title, comments_text, "failed to convert comment count to integer");
            issues.push(FieldIssue::CommentCountUnparsed(comments_text.to_string()));
            None
        }
        CommentField::Unrecognized => {
            debug!(title = %row.title, comments_text, "unrecognized comment link");
            issues.push(FieldIssue::CommentTextUnrecognized(comments_text.to_string()));
            None
        }
        field => field.value(),
    };

    Extraction {
        post: Post {
            title: row.title.clone(),
            url: row.href.clone(),
            upvotes,
            comments,
            uploaded: row.age_text.clone().unwrap_or_default(),
        },
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(score: Option<&str>, comments: Option<&str>) -> RawRow {
        RawRow {
            title: "Show HN: A tiny scraper".to_string(),
            href: "https://example.com/scraper".to_string(),
            score_text: score.map(str::to_string),
            comments_text: comments.map(str::to_string),
            age_text: Some("3 hours ago".to_string()),
        }
    }

    #[test]
    fn test_parse_score_points() {
        assert_eq!(parse_score("123 points"), Ok(123));
    }

    #[test]
    fn test_parse_score_single_point() {
        assert_eq!(parse_score("1 point"), Ok(1));
    }

    #[test]
    fn test_parse_score_pattern_miss() {
        assert_eq!(
            parse_score("points"),
            Err(FieldIssue::ScorePatternMiss("points".to_string()))
        );
        assert!(parse_score("").is_err());
    }

    #[test]
    fn test_parse_score_overflow_is_a_miss() {
        assert!(parse_score("99999999999 points").is_err());
    }

    #[test]
    fn test_parse_comments_discuss() {
        assert_eq!(parse_comments("discuss"), CommentField::Discuss);
        assert_eq!(CommentField::Discuss.value(), Some(0));
    }

    #[test]
    fn test_parse_comments_discuss_must_be_exact() {
        assert_eq!(parse_comments(" discuss"), CommentField::Unrecognized);
    }

    #[test]
    fn test_parse_comments_count() {
        assert_eq!(parse_comments("42 comments"), CommentField::Count(42));
        assert_eq!(parse_comments("1 comment"), CommentField::Count(1));
    }

    #[test]
    fn test_parse_comments_with_nbsp() {
        assert_eq!(parse_comments("42\u{a0}comments"), CommentField::Count(42));
        assert_eq!(parse_comments("\u{a0}128\u{a0}comments\u{a0}"), CommentField::Count(128));
    }

    #[test]
    fn test_parse_comments_without_digits() {
        assert_eq!(parse_comments("comments"), CommentField::Unparsed);
    }

    #[test]
    fn test_parse_comments_unrecognized() {
        assert_eq!(parse_comments("flag"), CommentField::Unrecognized);
        assert_eq!(parse_comments(""), CommentField::Unrecognized);
    }

    #[test]
    fn test_extract_post_complete_row() {
        let extraction = extract_post(&row(Some("123 points"), Some("42\u{a0}comments")));
        assert!(extraction.issues.is_empty());
        assert_eq!(
            extraction.post,
            Post {
                title: "Show HN: A tiny scraper".to_string(),
                url: "https://example.com/scraper".to_string(),
                upvotes: Some(123),
                comments: Some(42),
                uploaded: "3 hours ago".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_post_discuss_is_zero_without_issue() {
        let extraction = extract_post(&row(Some("7 points"), Some("discuss")));
        assert_eq!(extraction.post.comments, Some(0));
        assert!(extraction.issues.is_empty());
    }

    #[test]
    fn test_extract_post_unrecognized_comments_default_to_zero() {
        let extraction = extract_post(&row(Some("7 points"), Some("flag")));
        assert_eq!(extraction.post.comments, None);
        assert_eq!(extraction.post.comment_count(), 0);
        assert_eq!(
            extraction.issues,
            vec![FieldIssue::CommentTextUnrecognized("flag".to_string())]
        );
    }

    #[test]
    fn test_extract_post_unparsed_comments() {
        let extraction = extract_post(&row(Some("7 points"), Some("comments")));
        assert_eq!(extraction.post.comment_count(), 0);
        assert_eq!(
            extraction.issues,
            vec![FieldIssue::CommentCountUnparsed("comments".to_string())]
        );
    }

    #[test]
    fn test_extract_post_missing_score_keeps_row() {
        let extraction = extract_post(&row(None, Some("discuss")));
        assert_eq!(extraction.post.upvotes, None);
        assert_eq!(extraction.post.upvote_count(), 0);
        assert_eq!(extraction.issues, vec![FieldIssue::MissingScore]);
    }

    #[test]
    fn test_extract_post_empty_row() {
        let extraction = extract_post(&RawRow::default());
        assert_eq!(extraction.post.title, "");
        assert_eq!(extraction.post.uploaded, "");
        assert_eq!(extraction.issues.len(), 2);
    }

    #[test]
    fn test_extract_post_keeps_title_verbatim() {
        let mut raw = row(Some("5 points"), Some("discuss"));
        raw.title = "  spaced  title ".to_string();
        assert_eq!(extract_post(&raw).post.title, "  spaced  title ");
    }
}
