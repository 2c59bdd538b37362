use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Categorical match quality. Thresholds are lower-bound inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchLevel {
    #[serde(rename = "Poor Match")]
    Poor,
    #[serde(rename = "Weak Match")]
    Weak,
    #[serde(rename = "Fair Match")]
    Fair,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Excellent Match")]
    Excellent,
}

impl MatchLevel {
    /// Maps a 0–100 total to a level: ≥75 Excellent, ≥60 Good, ≥45 Fair,
    /// ≥30 Weak, otherwise Poor.
    pub fn from_score(total: f64) -> Self {
        if total >= 75.0 {
            MatchLevel::Excellent
        } else if total >= 60.0 {
            MatchLevel::Good
        } else if total >= 45.0 {
            MatchLevel::Fair
        } else if total >= 30.0 {
            MatchLevel::Weak
        } else {
            MatchLevel::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLevel::Poor => "Poor Match",
            MatchLevel::Weak => "Weak Match",
            MatchLevel::Fair => "Fair Match",
            MatchLevel::Good => "Good Match",
            MatchLevel::Excellent => "Excellent Match",
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores for one (resume, job) pair.
///
/// Fields hold full precision. Serialization rounds the components to 4
/// decimals and the total to 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(serialize_with = "serialize_4dp")]
    pub cosine_similarity: f64, // 0.0 – 1.0
    #[serde(serialize_with = "serialize_4dp")]
    pub jaccard_similarity: f64, // 0.0 – 1.0
    #[serde(serialize_with = "serialize_4dp")]
    pub keyword_coverage: f64, // 0.0 – 1.0
    #[serde(serialize_with = "serialize_2dp")]
    pub total_score: f64, // 0 – 100
    pub match_level: MatchLevel,
}

impl MatchResult {
    pub fn rounded_total(&self) -> f64 {
        round_to(self.total_score, 2)
    }
}

/// A top job term the resume never mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingKeyword {
    pub keyword: String,
    pub job_frequency: u32,
}

/// A term present in both documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedKeyword {
    pub keyword: String,
    pub job_frequency: u32,
    pub resume_frequency: u32,
}

/// Full match report returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub resume_label: String,
    pub job_label: String,
    pub result: MatchResult,
    pub shared_keywords: Vec<SharedKeyword>, // strengths
    pub missing_keywords: Vec<MissingKeyword>, // gaps
    pub recommendation: String,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        let thin = "-".repeat(60);
        let r = &self.result;

        writeln!(f, "{rule}")?;
        writeln!(f, "RESUME-JOB MATCH ANALYSIS ({} vs {})", self.resume_label, self.job_label)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "\nOVERALL MATCH SCORE: {:.2}%", r.total_score)?;
        writeln!(f, "Match Level: {}", r.match_level)?;
        writeln!(f, "\nDetailed Scores:")?;
        writeln!(f, "  Cosine Similarity: {:.4}", r.cosine_similarity)?;
        writeln!(f, "  Jaccard Similarity: {:.4}", r.jaccard_similarity)?;
        writeln!(f, "  Keyword Coverage: {:.4}", r.keyword_coverage)?;

        writeln!(f, "\n{rule}\nSHARED KEYWORDS (Strengths)\n{rule}")?;
        writeln!(f, "{:<20} {:<12} Resume Count", "Keyword", "Job Count")?;
        writeln!(f, "{thin}")?;
        for kw in &self.shared_keywords {
            writeln!(f, "{:<20} {:<12} {}", kw.keyword, kw.job_frequency, kw.resume_frequency)?;
        }

        writeln!(f, "\n{rule}\nMISSING KEYWORDS (Potential Gaps)\n{rule}")?;
        writeln!(f, "{:<30} Frequency in Job", "Keyword")?;
        writeln!(f, "{thin}")?;
        for kw in &self.missing_keywords {
            writeln!(f, "{:<30} {}", kw.keyword, kw.job_frequency)?;
        }

        writeln!(f, "\n{}", self.recommendation)
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

fn serialize_4dp<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 4))
}

fn serialize_2dp<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> MatchResult {
        MatchResult {
            cosine_similarity: 0.774596669,
            jaccard_similarity: 2.0 / 3.0,
            keyword_coverage: 0.5,
            total_score: 66.98376,
            match_level: MatchLevel::Good,
        }
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(MatchLevel::from_score(100.0), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(60.0), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(59.99), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(45.0), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(30.0), MatchLevel::Weak);
        assert_eq!(MatchLevel::from_score(29.99), MatchLevel::Poor);
        assert_eq!(MatchLevel::from_score(0.0), MatchLevel::Poor);
    }

    #[test]
    fn test_excellent_boundary_is_inclusive() {
        assert_eq!(MatchLevel::from_score(75.0), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(74.99), MatchLevel::Good);
    }

    #[test]
    fn test_level_display_and_serde() {
        assert_eq!(MatchLevel::Excellent.to_string(), "Excellent Match");
        let json = serde_json::to_string(&MatchLevel::Weak).unwrap();
        assert_eq!(json, r#""Weak Match""#);
        let level: MatchLevel = serde_json::from_str(r#""Fair Match""#).unwrap();
        assert_eq!(level, MatchLevel::Fair);
    }

    #[test]
    fn test_serialization_rounds_for_display_only() {
        let result = sample_result();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["cosine_similarity"], 0.7746);
        assert_eq!(json["jaccard_similarity"], 0.6667);
        assert_eq!(json["keyword_coverage"], 0.5);
        assert_eq!(json["total_score"], 66.98);
        assert_eq!(json["match_level"], "Good Match");
        // in-memory value untouched
        assert_eq!(result.total_score, 66.98376);
        assert_eq!(result.rounded_total(), 66.98);
    }

    #[test]
    fn test_report_display_lists_keywords() {
        let report = MatchReport {
            resume_label: "resume".to_string(),
            job_label: "job".to_string(),
            result: sample_result(),
            shared_keywords: vec![SharedKeyword {
                keyword: "python".to_string(),
                job_frequency: 3,
                resume_frequency: 2,
            }],
            missing_keywords: vec![MissingKeyword {
                keyword: "tableau".to_string(),
                job_frequency: 1,
            }],
            recommendation: "Good fit.".to_string(),
        };
        let text = report.to_string();
        assert!(text.contains("OVERALL MATCH SCORE: 66.98%"));
        assert!(text.contains("Match Level: Good Match"));
        assert!(text.contains("python"));
        assert!(text.contains("tableau"));
        assert!(text.contains("Good fit."));
    }
}
