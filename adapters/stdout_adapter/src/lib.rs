use chrono::NaiveDate;
use newscraft_core::domain::Post;
use newscraft_core::ports::{PostPublisher, Result};
use std::io::{self, Write};

/// Publisher printing one labeled block per post to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutPublisher;

impl StdoutPublisher {
    pub fn new() -> Self {
        Self
    }
}

fn count_or_unknown(value: Option<u32>) -> String {
    value.map_or_else(|| "unknown".to_string(), |n| n.to_string())
}

/// Writes the ranked posts as plain text blocks, separated by blank lines
pub fn write_posts<W: Write>(out: &mut W, posts: &[Post]) -> io::Result<()> {
    for post in posts {
        writeln!(out, "Title: {}", post.title)?;
        writeln!(out, "Link: {}", post.url)?;
        writeln!(out, "Upvotes: {}", count_or_unknown(post.upvotes))?;
        writeln!(out, "Comments: {}", count_or_unknown(post.comments))?;
        writeln!(out)?;
    }
    Ok(())
}

impl PostPublisher for StdoutPublisher {
    fn publish(&self, _day: NaiveDate, posts: &[Post]) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_posts(&mut out, posts)?;
        out.flush()?;
        Ok(())
    }
}
