//! ATS analysis report structures
//!
//! Everything here is derived data: a report is regenerated on every scoring
//! call, carries no identity, and is never persisted by the engine.

use serde::{Deserialize, Serialize};

/// Complete output of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    /// Overall ATS compatibility score (0-100).
    pub current_score: u8,

    /// Letter-style grade derived from the score.
    pub overall_grade: Grade,

    /// Points earned per scoring dimension, before final rounding.
    pub score_breakdown: ScoreBreakdown,

    /// Layout and section-presence assessment.
    pub format_analysis: SectionAnalysis,

    /// Keyword match against the analyzed job posting.
    pub keyword_analysis: KeywordAnalysis,

    /// Writing-quality assessment of summary and achievements.
    pub content_analysis: SectionAnalysis,

    /// Human-readable names of absent resume fields, in a fixed order.
    pub missing_elements: Vec<String>,

    /// Action verbs not yet opening any achievement bullet (up to 15).
    pub suggested_action_verbs: Vec<String>,

    /// Power words not yet present in the summary (up to 10).
    pub suggested_power_words: Vec<String>,

    /// Ordered improvement list: High entries first, one Low entry always last.
    pub prioritized_recommendations: Vec<Recommendation>,

    /// Projected effect of applying every recommendation.
    pub before_after: BeforeAfterComparison,

    /// Whether the current template is ATS-safe.
    pub template_recommendation: TemplateRecommendation,
}

/// Points earned per dimension. Sums to the overall score before rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Contact completeness, out of 15.
    pub contact: f64,
    /// Professional summary, out of 20.
    pub summary: f64,
    /// Core competencies, out of 20.
    pub skills: f64,
    /// Experience and achievements, out of 30.
    pub experience: f64,
    /// Education presence, out of 10.
    pub education: f64,
    /// Certifications and projects, out of 5.
    pub extras: f64,
}

/// Score plus qualitative findings for one analysis dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionAnalysis {
    pub score: u8,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Keyword-match dimension: score plus the matched/missing breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub score: u8,
    /// Job keywords found in the resume text.
    pub matched_keywords: Vec<String>,
    /// Job keywords absent from the resume text.
    pub missing_keywords: Vec<String>,
    /// Percentage of job keywords matched (0-100).
    pub density: f64,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

/// One prioritized improvement entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub category: String,
    pub issue: String,
    pub solution: String,
    pub impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Issue/change pairs with the projected score effect of applying them all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeforeAfterComparison {
    /// Issue strings from the recommendations, same order.
    pub issues: Vec<String>,
    /// Solution strings from the recommendations, same order.
    pub changes: Vec<String>,
    /// Expected score increase, capped at 40.
    pub expected_increase: u8,
    /// Current score plus the expected increase, capped at 100.
    pub projected_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecommendation {
    /// True when the format score suggests switching templates.
    pub switch_recommended: bool,
    pub advice: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => Grade::Excellent,
            70..=84 => Grade::Good,
            55..=69 => Grade::Fair,
            _ => Grade::Poor,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Excellent => write!(f, "Excellent"),
            Grade::Good => write!(f, "Good"),
            Grade::Fair => write!(f, "Fair"),
            Grade::Poor => write!(f, "Poor"),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_score(100), Grade::Excellent);
        assert_eq!(Grade::from_score(85), Grade::Excellent);
        assert_eq!(Grade::from_score(84), Grade::Good);
        assert_eq!(Grade::from_score(70), Grade::Good);
        assert_eq!(Grade::from_score(69), Grade::Fair);
        assert_eq!(Grade::from_score(55), Grade::Fair);
        assert_eq!(Grade::from_score(54), Grade::Poor);
        assert_eq!(Grade::from_score(0), Grade::Poor);
    }
}
