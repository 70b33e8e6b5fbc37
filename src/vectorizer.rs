//! TF-IDF text vectorization
//!
//! Builds a bounded vocabulary over the combined text of a content list and
//! produces one L2-normalized TF-IDF vector per item. The vocabulary and all
//! vectors are scoped to a single content list; every `fit` starts from
//! scratch.

use crate::types::ContentItem;
use ndarray::{Array2, ArrayView1};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// Common English terms excluded from the vocabulary. Sorted for binary search.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "and", "any", "are", "because", "been",
    "before", "being", "below", "between", "both", "but", "can", "could", "did", "does", "down",
    "during", "each", "few", "for", "from", "further", "had", "has", "have", "having", "her",
    "here", "hers", "him", "his", "how", "into", "its", "just", "more", "most", "nor", "not",
    "now", "off", "once", "only", "other", "our", "out", "over", "own", "same", "she", "should",
    "some", "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "too", "under", "until", "very", "was", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "you", "your",
];

/// TF-IDF vectorizer with a bounded vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    /// Build the vector space for a content list.
    ///
    /// An empty list produces an empty space rather than an error. When the
    /// distinct term count exceeds the feature cap, the terms with the highest
    /// total collection frequency are kept, first-seen order breaking ties.
    pub fn fit(&self, content: &[ContentItem]) -> ContentVectorSpace {
        if content.is_empty() {
            return ContentVectorSpace::empty();
        }

        let documents: Vec<Vec<String>> = content
            .iter()
            .map(|item| tokenize(&item.combined_text()))
            .collect();

        // Collection frequency drives vocabulary selection under the cap.
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for doc in &documents {
            for term in doc {
                let count = counts.entry(term.as_str()).or_insert_with(|| {
                    order.push(term.as_str());
                    0
                });
                *count += 1;
            }
        }

        let mut ranked: Vec<(usize, &str)> = order.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| counts[b.1].cmp(&counts[a.1]).then(a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        let vocabulary: HashMap<&str, usize> = ranked
            .iter()
            .enumerate()
            .map(|(column, &(_, term))| (term, column))
            .collect();
        let n_docs = documents.len();
        let n_features = vocabulary.len();

        // Document frequency per retained term.
        let mut doc_freq = vec![0usize; n_features];
        for doc in &documents {
            let mut seen: HashSet<usize> = HashSet::new();
            for term in doc {
                if let Some(&column) = vocabulary.get(term.as_str()) {
                    if seen.insert(column) {
                        doc_freq[column] += 1;
                    }
                }
            }
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1.
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut vectors = Array2::<f64>::zeros((n_docs, n_features));
        for (row, doc) in documents.iter().enumerate() {
            if doc.is_empty() {
                continue;
            }
            let inv_len = 1.0 / doc.len() as f64;
            for term in doc {
                if let Some(&column) = vocabulary.get(term.as_str()) {
                    vectors[[row, column]] += inv_len;
                }
            }
        }

        for mut row in vectors.rows_mut() {
            for (column, value) in row.iter_mut().enumerate() {
                *value *= idf[column];
            }
            let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|v| v / norm);
            }
        }

        let ids: Vec<String> = content.iter().map(|item| item.id.clone()).collect();
        let index = ids
            .iter()
            .enumerate()
            .map(|(row, id)| (id.clone(), row))
            .collect();

        ContentVectorSpace { ids, index, vectors }
    }
}

/// Item vectors over a shared vocabulary, scoped to one content list.
#[derive(Debug, Clone)]
pub struct ContentVectorSpace {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Array2<f64>,
}

impl ContentVectorSpace {
    fn empty() -> Self {
        Self {
            ids: Vec::new(),
            index: HashMap::new(),
            vectors: Array2::zeros((0, 0)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of items in the space.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn num_features(&self) -> usize {
        self.vectors.ncols()
    }

    pub fn id_at(&self, row: usize) -> &str {
        &self.ids[row]
    }

    pub fn row(&self, row: usize) -> ArrayView1<'_, f64> {
        self.vectors.row(row)
    }

    /// Vector for a content id, if the id is part of the current space.
    pub fn vector(&self, content_id: &str) -> Option<ArrayView1<'_, f64>> {
        self.index.get(content_id).map(|&row| self.vectors.row(row))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 1 && STOP_WORDS.binary_search(t).is_err())
        .map(str::to_owned)
        .collect()
}
