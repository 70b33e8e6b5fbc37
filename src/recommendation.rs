//! Hybrid recommendation composition
//!
//! Orchestrates the similarity engines for one request: rebuilds the vector
//! space and interaction matrix from the payload, draws candidates from the
//! collaborative and content-based engines, merges with first-occurrence
//! deduplication, and backfills from the popularity fallback.

use crate::cold_start::PopularityFallback;
use crate::collaborative::CollaborativeEngine;
use crate::content_based::ContentBasedEngine;
use crate::interaction_matrix::InteractionMatrix;
use crate::types::{ContentItem, InteractionEvent, InteractionKind};
use crate::vectorizer::TfidfVectorizer;
use std::collections::HashSet;

/// Liked items used as content-similarity seeds.
const MAX_SEED_LIKES: usize = 3;
/// Similar items fetched per seed.
const SIMILAR_PER_SEED: usize = 5;

/// Default result size for hybrid recommendations.
pub const DEFAULT_TOP_N: usize = 12;

/// Hybrid recommendation pipeline.
///
/// Constructed per request: the vector space and interaction matrix are
/// rebuilt from the supplied lists on every call and nothing is carried over
/// between calls, so one request's content can never leak into another's
/// similarity computation.
#[derive(Debug, Default)]
pub struct HybridRecommender {
    vectorizer: TfidfVectorizer,
}

impl HybridRecommender {
    pub fn new(vectorizer: TfidfVectorizer) -> Self {
        Self { vectorizer }
    }

    /// Produce up to `top_n` deduplicated recommendations for `user_id`.
    ///
    /// The result is shorter than `top_n` only when the distinct reachable
    /// item pool is smaller than `top_n`.
    pub fn execute(
        &self,
        user_id: &str,
        interactions: &[InteractionEvent],
        content: &[ContentItem],
        top_n: usize,
    ) -> Vec<String> {
        let space = self.vectorizer.fit(content);
        let matrix = InteractionMatrix::build(interactions);

        let collaborative =
            CollaborativeEngine::new(matrix.as_ref()).recommend(user_id, content, top_n * 2);

        // Content candidates seeded by the user's first few likes, first-seen
        // order preserved across seeds, later-seed duplicates dropped.
        let content_engine = ContentBasedEngine::new(&space);
        let mut content_candidates: Vec<String> = Vec::new();
        let mut candidate_set: HashSet<String> = HashSet::new();
        let seeds = interactions
            .iter()
            .filter(|event| event.user_id == user_id && event.kind == InteractionKind::Like)
            .take(MAX_SEED_LIKES);
        for seed in seeds {
            for id in content_engine.find_similar(&seed.content_id, SIMILAR_PER_SEED) {
                if candidate_set.insert(id.clone()) {
                    content_candidates.push(id);
                }
            }
        }

        // First half from each source, deduplicated keeping first occurrence.
        let half = top_n / 2;
        let mut merged: Vec<String> = Vec::with_capacity(top_n);
        let mut picked: HashSet<String> = HashSet::new();
        for id in collaborative
            .iter()
            .take(half)
            .chain(content_candidates.iter().take(half))
        {
            if picked.insert(id.clone()) {
                merged.push(id.clone());
            }
        }
        merged.truncate(top_n);

        // Backfill from the popularity pool until the requested count is
        // reached or the pool is exhausted.
        if merged.len() < top_n {
            for id in PopularityFallback::execute(content, top_n) {
                if merged.len() >= top_n {
                    break;
                }
                if picked.insert(id.clone()) {
                    merged.push(id);
                }
            }
        }

        merged
    }
}
