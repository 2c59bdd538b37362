use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::scoring::{MatchWeights, DEFAULT_KEYWORD_TOP_N};
use crate::similarity::DEFAULT_COVERAGE_TOP_N;

/// Matcher configuration loaded from environment variables (and `.env`).
/// Every variable is optional; unset variables fall back to the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// Extra stopwords, one per line, merged into the baseline English list.
    pub stopwords_file: Option<PathBuf>,
    pub weights: MatchWeights,
    /// How many of the job's most frequent terms keyword coverage considers.
    pub coverage_top_n: usize,
    /// Length of the missing / shared keyword lists.
    pub keyword_top_n: usize,
    pub rust_log: String,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            stopwords_file: None,
            weights: MatchWeights::default(),
            coverage_top_n: DEFAULT_COVERAGE_TOP_N,
            keyword_top_n: DEFAULT_KEYWORD_TOP_N,
            rust_log: "info".to_string(),
        }
    }
}

impl MatcherConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let weights = MatchWeights {
            cosine: parse_or(&lookup, "MATCH_WEIGHT_COSINE", defaults.weights.cosine)?,
            jaccard: parse_or(&lookup, "MATCH_WEIGHT_JACCARD", defaults.weights.jaccard)?,
            coverage: parse_or(&lookup, "MATCH_WEIGHT_COVERAGE", defaults.weights.coverage)?,
        };
        weights
            .validate()
            .context("MATCH_WEIGHT_* variables do not form a valid weight set")?;

        Ok(MatcherConfig {
            stopwords_file: lookup("STOPWORDS_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            weights,
            coverage_top_n: parse_or(&lookup, "COVERAGE_TOP_N", defaults.coverage_top_n)?,
            keyword_top_n: parse_or(&lookup, "KEYWORD_TOP_N", defaults.keyword_top_n)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
