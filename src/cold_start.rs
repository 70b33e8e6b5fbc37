//! Popularity fallback
//!
//! Serves recommendations when no principled ranking is available: a user
//! with no interaction history, or a request with no interaction data at
//! all. The selection is an unweighted random sample of the content pool.

use crate::types::ContentItem;
use rand::seq::SliceRandom;

/// Popularity-based fallback recommendations.
pub struct PopularityFallback;

impl PopularityFallback {
    /// Up to `limit` item ids sampled without replacement from `content`.
    /// Never returns more items than the pool holds.
    pub fn execute(content: &[ContentItem], limit: usize) -> Vec<String> {
        let mut rng = rand::thread_rng();
        content
            .choose_multiple(&mut rng, limit)
            .map(|item| item.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: format!("title {id}"),
            description: format!("description {id}"),
            category: "general".to_string(),
            tags: Vec::new(),
            content_type: None,
            author: None,
        }
    }

    #[test]
    fn sample_never_exceeds_pool() {
        let content = vec![item("a"), item("b"), item("c")];
        let sample = PopularityFallback::execute(&content, 10);
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn sample_is_drawn_from_pool() {
        let content = vec![item("a"), item("b"), item("c")];
        let sample = PopularityFallback::execute(&content, 2);
        assert_eq!(sample.len(), 2);
        for id in &sample {
            assert!(content.iter().any(|c| &c.id == id));
        }
    }

    #[test]
    fn empty_pool_yields_empty_sample() {
        assert!(PopularityFallback::execute(&[], 5).is_empty());
    }
}
