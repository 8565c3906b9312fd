use crate::domain::Post;

/// What to do when fewer posts than requested were collected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortListPolicy {
    /// Publish whatever is available, up to the limit
    #[default]
    ShowAvailable,
    /// Publish nothing unless strictly more than `limit` posts were collected
    Suppress,
}

/// Orders posts by score, highest first.
/// The sort is stable, so equal scores keep discovery order, and posts
/// without a parsed score come after every scored post.
pub fn sort_by_score(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
}

/// Returns the `limit` best scored posts according to `policy`
pub fn top_posts(posts: &[Post], limit: usize, policy: ShortListPolicy) -> Vec<Post> {
    if policy == ShortListPolicy::Suppress && posts.len() <= limit {
        return Vec::new();
    }

    let mut ranked = posts.to_vec();
    sort_by_score(&mut ranked);
    ranked.truncate(limit);
    ranked
}
