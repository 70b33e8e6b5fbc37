//! Vector math shared by the similarity engines.

use ndarray::ArrayView1;

/// Cosine similarity between two vectors.
///
/// Zero-magnitude vectors have similarity 0 with everything, so items or
/// users with no usable signal are never favored.
pub fn cosine_similarity(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let dot = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
