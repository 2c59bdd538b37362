//! Match Scorer — combines the similarity metrics into a weighted 0–100
//! score, categorizes it, and extracts shared / missing keywords.
//!
//! Algorithm:
//! 1. validate weights (sum to 1.0 within 1e-5, none negative)
//! 2. resolve both labels in the store (`NotFound` before any math)
//! 3. total = (cosine·w_cosine + jaccard·w_jaccard + coverage·w_coverage) × 100
//! 4. level from the full-precision total

pub mod result;
pub mod weights;

use std::sync::Arc;

use tracing::debug;

use crate::config::MatcherConfig;
use crate::errors::MatchError;
use crate::similarity::{self, DEFAULT_COVERAGE_TOP_N};
use crate::store::record::by_frequency;
use crate::store::{DocumentRecord, DocumentStore};

pub use result::{MatchLevel, MatchReport, MatchResult, MissingKeyword, SharedKeyword};
pub use weights::MatchWeights;

/// How many of the job's most frequent terms are scanned for gaps.
pub const MISSING_KEYWORD_POOL: usize = 100;
/// Default length of the missing / shared keyword lists.
pub const DEFAULT_KEYWORD_TOP_N: usize = 20;

/// Scores documents held by a `DocumentStore`. Borrows the store; holds no
/// other state besides its parameters.
pub struct MatchScorer<'a> {
    store: &'a DocumentStore,
    coverage_top_n: usize,
    keyword_top_n: usize,
}

impl<'a> MatchScorer<'a> {
    pub fn new(store: &'a DocumentStore) -> Self {
        Self {
            store,
            coverage_top_n: DEFAULT_COVERAGE_TOP_N,
            keyword_top_n: DEFAULT_KEYWORD_TOP_N,
        }
    }

    pub fn from_config(store: &'a DocumentStore, config: &MatcherConfig) -> Self {
        Self::new(store)
            .with_coverage_top_n(config.coverage_top_n)
            .with_keyword_top_n(config.keyword_top_n)
    }

    /// `N` used by keyword coverage inside `score`.
    pub fn with_coverage_top_n(mut self, n: usize) -> Self {
        self.coverage_top_n = n;
        self
    }

    /// List length used by `report`.
    pub fn with_keyword_top_n(mut self, n: usize) -> Self {
        self.keyword_top_n = n;
        self
    }

    pub fn cosine_similarity(&self, label_a: &str, label_b: &str) -> Result<f64, MatchError> {
        let (a, b) = self.pair(label_a, label_b)?;
        Ok(similarity::cosine_similarity(&a, &b))
    }

    pub fn jaccard_similarity(&self, label_a: &str, label_b: &str) -> Result<f64, MatchError> {
        let (a, b) = self.pair(label_a, label_b)?;
        Ok(similarity::jaccard_similarity(&a, &b))
    }

    pub fn keyword_coverage(
        &self,
        resume_label: &str,
        job_label: &str,
        top_n: usize,
    ) -> Result<f64, MatchError> {
        let (resume, job) = self.pair(resume_label, job_label)?;
        Ok(similarity::keyword_coverage(&resume, &job, top_n))
    }

    /// Weighted match score. `None` uses the default 0.4 / 0.3 / 0.3 weights.
    pub fn score(
        &self,
        resume_label: &str,
        job_label: &str,
        weights: Option<&MatchWeights>,
    ) -> Result<MatchResult, MatchError> {
        let weights = weights.copied().unwrap_or_default();
        weights.validate()?;
        let (resume, job) = self.pair(resume_label, job_label)?;
        Ok(self.compute(&resume, &job, &weights))
    }

    /// The first `top_n` of the job's 100 most frequent terms that the resume
    /// lacks, in job-frequency order.
    pub fn missing_keywords(
        &self,
        resume_label: &str,
        job_label: &str,
        top_n: usize,
    ) -> Result<Vec<MissingKeyword>, MatchError> {
        let (resume, job) = self.pair(resume_label, job_label)?;
        Ok(missing(&resume, &job, top_n))
    }

    /// Terms in both documents, by job frequency (ties by term), first `top_n`.
    pub fn shared_keywords(
        &self,
        resume_label: &str,
        job_label: &str,
        top_n: usize,
    ) -> Result<Vec<SharedKeyword>, MatchError> {
        let (resume, job) = self.pair(resume_label, job_label)?;
        Ok(shared(&resume, &job, top_n))
    }

    /// Score plus strengths and gaps in one pass over a single snapshot of
    /// each document.
    pub fn report(
        &self,
        resume_label: &str,
        job_label: &str,
        weights: Option<&MatchWeights>,
    ) -> Result<MatchReport, MatchError> {
        let weights = weights.copied().unwrap_or_default();
        weights.validate()?;
        let (resume, job) = self.pair(resume_label, job_label)?;

        let result = self.compute(&resume, &job, &weights);
        let shared_keywords = shared(&resume, &job, self.keyword_top_n);
        let missing_keywords = missing(&resume, &job, self.keyword_top_n);
        let recommendation = build_recommendation(&result, &missing_keywords);

        Ok(MatchReport {
            resume_label: resume_label.to_string(),
            job_label: job_label.to_string(),
            result,
            shared_keywords,
            missing_keywords,
            recommendation,
        })
    }

    fn pair(
        &self,
        label_a: &str,
        label_b: &str,
    ) -> Result<(Arc<DocumentRecord>, Arc<DocumentRecord>), MatchError> {
        Ok((self.store.get(label_a)?, self.store.get(label_b)?))
    }

    fn compute(
        &self,
        resume: &DocumentRecord,
        job: &DocumentRecord,
        weights: &MatchWeights,
    ) -> MatchResult {
        let cosine = similarity::cosine_similarity(resume, job);
        let jaccard = similarity::jaccard_similarity(resume, job);
        let coverage = similarity::keyword_coverage(resume, job, self.coverage_top_n);
        let total = weights.combine(cosine, jaccard, coverage).clamp(0.0, 100.0);
        let match_level = MatchLevel::from_score(total);

        debug!(cosine, jaccard, coverage, total, %match_level, "computed match score");

        MatchResult {
            cosine_similarity: cosine,
            jaccard_similarity: jaccard,
            keyword_coverage: coverage,
            total_score: total,
            match_level,
        }
    }
}

fn missing(resume: &DocumentRecord, job: &DocumentRecord, top_n: usize) -> Vec<MissingKeyword> {
    job.most_common(MISSING_KEYWORD_POOL)
        .into_iter()
        .filter(|(term, _)| !resume.contains(term))
        .take(top_n)
        .map(|(term, count)| MissingKeyword {
            keyword: term.to_string(),
            job_frequency: count,
        })
        .collect()
}

fn shared(resume: &DocumentRecord, job: &DocumentRecord, top_n: usize) -> Vec<SharedKeyword> {
    let mut shared: Vec<SharedKeyword> = job
        .wordcount
        .iter()
        .filter_map(|(term, &job_frequency)| {
            let resume_frequency = resume.count(term);
            (resume_frequency > 0).then(|| SharedKeyword {
                keyword: term.clone(),
                job_frequency,
                resume_frequency,
            })
        })
        .collect();
    shared.sort_by(|a, b| by_frequency(a.job_frequency, &a.keyword, b.job_frequency, &b.keyword));
    shared.truncate(top_n);
    shared
}

/// Builds a human-readable recommendation string from the level and gaps.
fn build_recommendation(result: &MatchResult, gaps: &[MissingKeyword]) -> String {
    let score = result.rounded_total();
    let top_gaps: Vec<&str> = gaps.iter().take(3).map(|g| g.keyword.as_str()).collect();

    match result.match_level {
        MatchLevel::Excellent => {
            "Strong fit. The resume covers the job's key terms.".to_string()
        }
        _ if top_gaps.is_empty() => format!(
            "{} ({score}/100). No high-frequency job terms are missing.",
            result.match_level
        ),
        MatchLevel::Good | MatchLevel::Fair => format!(
            "{} ({score}/100). Consider adding: {}.",
            result.match_level,
            top_gaps.join(", ")
        ),
        MatchLevel::Weak | MatchLevel::Poor => format!(
            "{} ({score}/100). Significant gaps: {}.",
            result.match_level,
            top_gaps.join(", ")
        ),
    }
}
