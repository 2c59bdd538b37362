//! Similarity Engine — pairwise metrics over two documents' term counts.
//!
//! All three metrics are in [0, 1]. Empty inputs are a defined case that
//! yields 0.0, never an error.

use std::collections::HashSet;

use crate::store::DocumentRecord;

/// Default number of top job terms keyword coverage considers.
pub const DEFAULT_COVERAGE_TOP_N: usize = 50;

/// Cosine of the angle between the two term-count vectors.
///
/// cos(a, b) = Σ(a_w * b_w) / (||a|| * ||b||), over the union vocabulary;
/// a term missing from one side contributes 0 to the dot product.
pub fn cosine_similarity(a: &DocumentRecord, b: &DocumentRecord) -> f64 {
    // only shared terms contribute to the dot product
    let (small, large) = if a.wordcount.len() <= b.wordcount.len() {
        (a, b)
    } else {
        (b, a)
    };
    let dot: f64 = small
        .wordcount
        .iter()
        .map(|(term, &count)| count as f64 * large.count(term) as f64)
        .sum();

    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }
    (dot / (magnitude_a * magnitude_b)).clamp(0.0, 1.0)
}

/// |vocab(a) ∩ vocab(b)| / |vocab(a) ∪ vocab(b)|, frequencies ignored.
pub fn jaccard_similarity(a: &DocumentRecord, b: &DocumentRecord) -> f64 {
    let intersection = a
        .wordcount
        .keys()
        .filter(|term| b.contains(term))
        .count();
    let union = a.unique_words() + b.unique_words() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Share of the job's `top_n` most frequent terms that appear anywhere in
/// the resume. Directional: resume frequencies do not matter.
///
/// When the job has fewer than `top_n` distinct terms, all of them are
/// considered.
pub fn keyword_coverage(resume: &DocumentRecord, job: &DocumentRecord, top_n: usize) -> f64 {
    let top_job_terms: HashSet<&str> = job
        .most_common(top_n)
        .into_iter()
        .map(|(term, _)| term)
        .collect();
    if top_job_terms.is_empty() {
        return 0.0;
    }
    let matched = top_job_terms
        .iter()
        .filter(|term| resume.contains(term))
        .count();
    matched as f64 / top_job_terms.len() as f64
}

fn magnitude(record: &DocumentRecord) -> f64 {
    record
        .wordcount
        .values()
        .map(|&count| (count as f64).powi(2))
        .sum::<f64>()
        .sqrt()
}
