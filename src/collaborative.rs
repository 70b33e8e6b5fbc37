//! User-based collaborative filtering
//!
//! Ranks items by aggregating the interaction weights of the target user's
//! nearest neighbors in the interaction matrix. A user without history is a
//! cold start, resolved by the popularity fallback rather than an error.

use crate::cold_start::PopularityFallback;
use crate::interaction_matrix::InteractionMatrix;
use crate::math::cosine_similarity;
use crate::types::ContentItem;
use std::collections::HashMap;

/// Nearest neighbors consulted per user.
const NEIGHBOR_COUNT: usize = 5;

/// Default result size for collaborative recommendations.
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 12;

/// User-based collaborative filtering engine.
pub struct CollaborativeEngine<'a> {
    matrix: Option<&'a InteractionMatrix>,
}

impl<'a> CollaborativeEngine<'a> {
    pub fn new(matrix: Option<&'a InteractionMatrix>) -> Self {
        Self { matrix }
    }

    /// Top `top_n` item ids for `user_id`, excluding items the user has
    /// already interacted with. Without a matrix, or without a row for the
    /// user, delegates to a popularity sample over `content`.
    pub fn recommend(&self, user_id: &str, content: &[ContentItem], top_n: usize) -> Vec<String> {
        let Some(matrix) = self.matrix else {
            return PopularityFallback::execute(content, top_n);
        };
        let Some(target) = matrix.user_index_of(user_id) else {
            return PopularityFallback::execute(content, top_n);
        };

        let target_row = matrix.row(target);

        // Rank the other users by cosine similarity to the target row; equal
        // scores keep row order (stable sort). Self-similarity is maximal by
        // construction and must not reach the neighbor set.
        let mut neighbors: Vec<(usize, f64)> = (0..matrix.num_users())
            .filter(|&user| user != target)
            .map(|user| (user, cosine_similarity(target_row, matrix.row(user))))
            .collect();
        neighbors.sort_by(|a, b| b.1.total_cmp(&a.1));
        neighbors.truncate(NEIGHBOR_COUNT);

        let seen = matrix.user_items(user_id);

        // Sum neighbor weights per item the target user has not touched.
        let mut scores: HashMap<usize, f64> = HashMap::new();
        let mut first_seen: Vec<usize> = Vec::new();
        for &(user, _) in &neighbors {
            for (item, &weight) in matrix.row(user).iter().enumerate() {
                if weight > 0.0 && !seen.contains(matrix.item_at(item)) {
                    *scores.entry(item).or_insert_with(|| {
                        first_seen.push(item);
                        0.0
                    }) += weight;
                }
            }
        }

        let mut ranked: Vec<(usize, f64)> = first_seen
            .into_iter()
            .map(|item| (item, scores[&item]))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(top_n);

        ranked
            .into_iter()
            .map(|(item, _)| matrix.item_at(item).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InteractionEvent, InteractionKind};

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

    fn event(user: &str, content: &str, kind: InteractionKind) -> InteractionEvent {
        InteractionEvent {
            user_id: user.to_string(),
            content_id: content.to_string(),
            kind,
            rating: None,
        }
    }

    #[test]
    fn missing_matrix_falls_back_to_popularity() {
        let content = vec![item("a"), item("b"), item("c")];
        let recs = CollaborativeEngine::new(None).recommend("u1", &content, 5);
        assert_eq!(recs.len(), 3);
        for id in &recs {
            assert!(content.iter().any(|c| &c.id == id));
        }
    }

    #[test]
    fn unknown_user_falls_back_to_popularity() {
        let content = vec![item("a"), item("b")];
        let events = vec![event("u1", "a", InteractionKind::View)];
        let matrix = InteractionMatrix::build(&events).unwrap();
        let recs = CollaborativeEngine::new(Some(&matrix)).recommend("stranger", &content, 5);
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn neighbors_contribute_unseen_items() {
        // u1 and u2 overlap on x; u1 also likes y, which u2 has never seen.
        let events = vec![
            event("u1", "x", InteractionKind::Like),
            event("u1", "y", InteractionKind::Like),
            event("u2", "x", InteractionKind::Like),
        ];
        let matrix = InteractionMatrix::build(&events).unwrap();
        let recs = CollaborativeEngine::new(Some(&matrix)).recommend("u2", &[], 5);
        assert_eq!(recs, vec!["y".to_string()]);
    }

    #[test]
    fn excludes_items_user_already_interacted_with() {
        let events = vec![
            event("u1", "x", InteractionKind::Like),
            event("u2", "x", InteractionKind::Like),
        ];
        let matrix = InteractionMatrix::build(&events).unwrap();
        let recs = CollaborativeEngine::new(Some(&matrix)).recommend("u2", &[], 5);
        assert!(recs.is_empty());
    }

    #[test]
    fn heavier_neighbor_weight_ranks_higher() {
        // Both unseen items come from the same neighbor; z carries the
        // heavier summed weight and must rank first.
        let events = vec![
            event("u1", "x", InteractionKind::Like),
            event("u1", "y", InteractionKind::View),
            event("u1", "z", InteractionKind::Like),
            event("u2", "x", InteractionKind::Like),
        ];
        let matrix = InteractionMatrix::build(&events).unwrap();
        let recs = CollaborativeEngine::new(Some(&matrix)).recommend("u2", &[], 5);
        assert_eq!(recs, vec!["z".to_string(), "y".to_string()]);
    }
}
