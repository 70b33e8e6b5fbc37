//! User-item interaction matrix
//!
//! Aggregates raw interaction events into a dense user x item weight matrix,
//! with id to index maps induced from the data in first-seen order. Rebuilt
//! from the request payload on every call.

use crate::types::InteractionEvent;
use ndarray::{Array2, ArrayView1};
use std::collections::{HashMap, HashSet};

/// Weighted user x item matrix for one request.
#[derive(Debug, Clone)]
pub struct InteractionMatrix {
    users: Vec<String>,
    user_index: HashMap<String, usize>,
    items: Vec<String>,
    item_index: HashMap<String, usize>,
    weights: Array2<f64>,
}

impl InteractionMatrix {
    /// Build the matrix from raw events. Returns `None` when there are no
    /// events; an absent matrix is the expected cold-start case, not an
    /// error. Cells sum the weight of every event for that (user, item) pair.
    pub fn build(events: &[InteractionEvent]) -> Option<Self> {
        if events.is_empty() {
            return None;
        }

        let mut users: Vec<String> = Vec::new();
        let mut user_index: HashMap<String, usize> = HashMap::new();
        let mut items: Vec<String> = Vec::new();
        let mut item_index: HashMap<String, usize> = HashMap::new();
        let mut cells: Vec<(usize, usize, f64)> = Vec::with_capacity(events.len());

        for event in events {
            let user = *user_index.entry(event.user_id.clone()).or_insert_with(|| {
                users.push(event.user_id.clone());
                users.len() - 1
            });
            let item = *item_index.entry(event.content_id.clone()).or_insert_with(|| {
                items.push(event.content_id.clone());
                items.len() - 1
            });
            cells.push((user, item, event.weight()));
        }

        let mut weights = Array2::<f64>::zeros((users.len(), items.len()));
        for (user, item, weight) in cells {
            weights[[user, item]] += weight;
        }

        Some(Self {
            users,
            user_index,
            items,
            item_index,
            weights,
        })
    }

    pub fn num_users(&self) -> usize {
        self.users.len()
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn user_at(&self, row: usize) -> &str {
        &self.users[row]
    }

    pub fn item_at(&self, column: usize) -> &str {
        &self.items[column]
    }

    pub fn user_index_of(&self, user_id: &str) -> Option<usize> {
        self.user_index.get(user_id).copied()
    }

    /// Weight row for one user across all items.
    pub fn row(&self, user: usize) -> ArrayView1<'_, f64> {
        self.weights.row(user)
    }

    /// Summed weight for a (user, item) pair, 0 where absent.
    pub fn weight(&self, user_id: &str, item_id: &str) -> f64 {
        match (self.user_index.get(user_id), self.item_index.get(item_id)) {
            (Some(&user), Some(&item)) => self.weights[[user, item]],
            _ => 0.0,
        }
    }

    /// Item ids the user has interacted with.
    pub fn user_items(&self, user_id: &str) -> HashSet<&str> {
        match self.user_index.get(user_id) {
            Some(&user) => self
                .weights
                .row(user)
                .iter()
                .enumerate()
                .filter(|&(_, &weight)| weight > 0.0)
                .map(|(item, _)| self.items[item].as_str())
                .collect(),
            None => HashSet::new(),
        }
    }
}
