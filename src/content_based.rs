//! Content-based filtering
//!
//! Ranks items by cosine similarity to a target item in the TF-IDF vector
//! space built for the current request.

use crate::math::cosine_similarity;
use crate::vectorizer::ContentVectorSpace;

/// Default result size for direct similarity queries.
pub const DEFAULT_SIMILAR_COUNT: usize = 6;

/// Content-based similarity engine over a prepared vector space.
pub struct ContentBasedEngine<'a> {
    space: &'a ContentVectorSpace,
}

impl<'a> ContentBasedEngine<'a> {
    pub fn new(space: &'a ContentVectorSpace) -> Self {
        Self { space }
    }

    /// The `top_n` items most similar to `content_id`, best first, excluding
    /// the item itself. An id not present in the current space yields an
    /// empty list rather than an error.
    ///
    /// Equal scores keep content-list order (stable sort).
    pub fn find_similar(&self, content_id: &str, top_n: usize) -> Vec<String> {
        let Some(target) = self.space.vector(content_id) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, f64)> = (0..self.space.len())
            .filter(|&row| self.space.id_at(row) != content_id)
            .map(|row| (row, cosine_similarity(target, self.space.row(row))))
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_n);

        scored
            .into_iter()
            .map(|(row, _)| self.space.id_at(row).to_string())
            .collect()
    }
}
