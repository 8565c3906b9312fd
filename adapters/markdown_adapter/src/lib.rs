use chrono::NaiveDate;
use newscraft_core::domain::Post;
use newscraft_core::ports::{PostPublisher, Result};
use newscraft_core::utils::sanitize_filename;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Markdown digest adapter implementation
pub struct MarkdownDigestWriter {
    output_folder: String,
    domain: String,
}

impl MarkdownDigestWriter {
    pub fn new(output_folder: String, domain: String) -> Self {
        Self {
            output_folder,
            domain,
        }
    }

    /// Path of the digest file for a given day, e.g. `<dir>/news.ycombinator.com-2024-04-30.md`
    pub fn digest_path(&self, day: NaiveDate) -> PathBuf {
        let filename = format!(
            "{}-{}.md",
            sanitize_filename(&self.domain),
            day.format("%Y-%m-%d")
        );
        Path::new(&self.output_folder).join(filename)
    }

    /// Formats the ranked posts of one day into markdown
    fn format_markdown(&self, day: NaiveDate, posts: &[Post]) -> String {
        if posts.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        output.push_str(&format!("# {} front page, {}\n\n", self.domain, day.format("%Y-%m-%d")));
        output.push_str(&format!("*top {} posts*\n\n", posts.len()));
        output.push_str("---\n\n");

        for (rank, post) in posts.iter().enumerate() {
            let title = post.title.trim();
            if title.is_empty() {
                output.push_str(&format!("## {}. *[No title]*\n\n", rank + 1));
            } else {
                output.push_str(&format!(
                    "## {}. [{}](<{}>)\n\n",
                    rank + 1,
                    escape_link_text(title),
                    escape_link_target(&post.url)
                ));
            }

            output.push_str(&format!(
                "**{}** points, **{}** comments",
                count_or_unknown(post.upvotes),
                count_or_unknown(post.comments)
            ));
            if !post.uploaded.trim().is_empty() {
                output.push_str(&format!(", *{}*", post.uploaded.trim()));
            }
            output.push_str("\n\n---\n\n");
        }

        output
    }
}

// Brackets inside link text would close the link early
fn escape_link_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// The target is written in angle brackets, which cannot hold `<`, `>` or whitespace
fn escape_link_target(url: &str) -> String {
    url.chars()
        .map(|c| match c {
            '<' => "%3C".to_string(),
            '>' => "%3E".to_string(),
            c if c.is_whitespace() => format!("%{:02X}", c as u32),
            c => c.to_string(),
        })
        .collect()
}

fn count_or_unknown(value: Option<u32>) -> String {
    value.map_or_else(|| "?".to_string(), |n| n.to_string())
}

impl PostPublisher for MarkdownDigestWriter {
    fn publish(&self, day: NaiveDate, posts: &[Post]) -> Result<()> {
        if posts.is_empty() {
            return Ok(());
        }

        // Create output directory if it doesn't exist
        fs::create_dir_all(&self.output_folder)?;

        let file_path = self.digest_path(day);
        fs::write(&file_path, self.format_markdown(day, posts))?;
        info!(path = %file_path.display(), posts = posts.len(), "wrote markdown digest");

        Ok(())
    }
}
