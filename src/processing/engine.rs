//! ATS scoring engine
//!
//! Deterministic fixed-weight checklist over structured resume data. Given
//! identical inputs the engine returns an identical report; all thresholds
//! and dictionaries live in [`Dictionaries`] and the constants below.

use crate::error::{AtsError, Result};
use crate::processing::dictionaries::Dictionaries;
use crate::processing::job_analyzer::JobAnalysis;
use crate::processing::report::{
    AtsReport, BeforeAfterComparison, Grade, KeywordAnalysis, Priority, Recommendation,
    ScoreBreakdown, SectionAnalysis, TemplateRecommendation,
};
use crate::processing::resume::ResumeData;
use log::debug;
use regex::Regex;
use std::collections::HashSet;

const FORMAT_BASELINE: f64 = 85.0;
const CONTENT_BASELINE: f64 = 70.0;
const NO_JOB_KEYWORD_SCORE: u8 = 50;
const KEYWORD_REC_THRESHOLD: u8 = 60;
const MAX_VERB_SUGGESTIONS: usize = 15;
const MAX_POWER_WORD_SUGGESTIONS: usize = 10;
const MAX_PROJECTED_INCREASE: u32 = 40;

pub struct ScoringEngine {
    dictionaries: Dictionaries,
    /// Flattened action verbs in category order; drives suggestion order.
    action_verbs: Vec<String>,
    action_verb_set: HashSet<String>,
    email_regex: Regex,
    quantified_regex: Regex,
}

struct AchievementStats {
    total: usize,
    quantified: usize,
    verb_openers: usize,
}

impl AchievementStats {
    /// Zero achievements yields a ratio of 0, never NaN.
    fn quantified_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.quantified as f64 / self.total as f64
        }
    }

    fn verb_opener_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.verb_openers as f64 / self.total as f64
        }
    }
}

impl ScoringEngine {
    pub fn new() -> Result<Self> {
        Self::with_dictionaries(Dictionaries::default())
    }

    /// Build an engine over custom dictionaries (e.g. from the config file).
    pub fn with_dictionaries(dictionaries: Dictionaries) -> Result<Self> {
        let email_regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .map_err(|e| AtsError::Processing(format!("Failed to compile email pattern: {}", e)))?;

        // A digit optionally followed by % or $, or a result verb eventually
        // followed by a digit.
        let quantified_regex = Regex::new(
            r"(?i)\d[%$]?|(?:increased|decreased|improved|reduced|saved|generated).*\d",
        )
        .map_err(|e| AtsError::Processing(format!("Failed to compile metrics pattern: {}", e)))?;

        let action_verbs = dictionaries.all_action_verbs();
        let action_verb_set = action_verbs.iter().map(|v| v.to_lowercase()).collect();

        Ok(Self {
            dictionaries,
            action_verbs,
            action_verb_set,
            email_regex,
            quantified_regex,
        })
    }

    /// Score a resume, optionally against an analyzed job posting.
    ///
    /// Pure computation: no I/O, no errors. A low score is a normal output,
    /// not a failure.
    pub fn score_resume(&self, resume: &ResumeData, job: Option<&JobAnalysis>) -> AtsReport {
        let stats = self.achievement_stats(resume);
        let score_breakdown = self.compute_breakdown(resume, job, &stats);
        let total = score_breakdown.contact
            + score_breakdown.summary
            + score_breakdown.skills
            + score_breakdown.experience
            + score_breakdown.education
            + score_breakdown.extras;
        let current_score = clamp_score(total);

        debug!(
            "scored resume: contact={} summary={} skills={} experience={} education={} extras={} total={}",
            score_breakdown.contact,
            score_breakdown.summary,
            score_breakdown.skills,
            score_breakdown.experience,
            score_breakdown.education,
            score_breakdown.extras,
            current_score
        );

        let format_analysis = self.analyze_format(resume);
        let keyword_analysis = self.analyze_keywords(resume, job);
        let content_analysis = self.analyze_content(resume, &stats);
        let missing_elements = self.missing_elements(resume);
        let prioritized_recommendations = self.build_recommendations(
            &missing_elements,
            &format_analysis,
            &keyword_analysis,
            &stats,
        );
        let before_after = build_projection(current_score, &prioritized_recommendations);
        let template_recommendation = template_advice(&format_analysis);

        AtsReport {
            current_score,
            overall_grade: Grade::from_score(current_score),
            score_breakdown,
            format_analysis,
            keyword_analysis,
            content_analysis,
            missing_elements,
            suggested_action_verbs: self.suggest_action_verbs(resume),
            suggested_power_words: self.suggest_power_words(resume),
            prioritized_recommendations,
            before_after,
            template_recommendation,
        }
    }

    fn compute_breakdown(
        &self,
        resume: &ResumeData,
        job: Option<&JobAnalysis>,
        stats: &AchievementStats,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            contact: self.contact_points(resume),
            summary: self.summary_points(resume, job),
            skills: self.skills_points(resume, job),
            experience: self.experience_points(resume, stats),
            education: if resume.education.is_empty() { 0.0 } else { 10.0 },
            extras: self.extras_points(resume),
        }
    }

    /// 3 points each: name, valid email, phone, location, LinkedIn link.
    fn contact_points(&self, resume: &ResumeData) -> f64 {
        let info = &resume.personal_info;
        let mut points = 0.0;
        if present(&info.full_name) {
            points += 3.0;
        }
        if self.email_regex.is_match(&info.email) {
            points += 3.0;
        }
        if present(&info.phone) {
            points += 3.0;
        }
        if present(&info.location) {
            points += 3.0;
        }
        if resume.has_linkedin() {
            points += 3.0;
        }
        points
    }

    /// 15/10/5 by length tier, plus up to 5 for job keywords found in the
    /// summary. Without a job analysis the bonus is simply absent.
    fn summary_points(&self, resume: &ResumeData, job: Option<&JobAnalysis>) -> f64 {
        let length = resume.professional_summary.chars().count();
        let base = if (100..=300).contains(&length) {
            15.0
        } else if length >= 50 {
            10.0
        } else if length > 0 {
            5.0
        } else {
            0.0
        };

        let bonus = match job {
            Some(analysis) => {
                let summary = resume.professional_summary.to_lowercase();
                let matches = analysis
                    .keywords
                    .iter()
                    .filter(|k| summary.contains(k.as_str()))
                    .count();
                matches.min(5) as f64
            }
            None => 0.0,
        };

        base + bonus
    }

    /// 15/10/5 by skill count, plus up to 5 for skills containing a required
    /// skill from the job analysis.
    fn skills_points(&self, resume: &ResumeData, job: Option<&JobAnalysis>) -> f64 {
        let count = resume.core_competencies.len();
        let base = if count >= 8 {
            15.0
        } else if count >= 5 {
            10.0
        } else if count > 0 {
            5.0
        } else {
            0.0
        };

        let bonus = match job {
            Some(analysis) => {
                let matches = resume
                    .core_competencies
                    .iter()
                    .filter(|skill| {
                        let skill = skill.to_lowercase();
                        analysis
                            .required_skills
                            .iter()
                            .any(|req| skill.contains(&req.to_lowercase()))
                    })
                    .count();
                matches.min(5) as f64
            }
            None => 0.0,
        };

        base + bonus
    }

    /// 10 flat for having any entries, up to 10 for quantified achievements
    /// (2 each), up to 10 for action-verb openers (1 each).
    fn experience_points(&self, resume: &ResumeData, stats: &AchievementStats) -> f64 {
        if resume.experience.is_empty() {
            return 0.0;
        }
        let quantified = (stats.quantified as f64 * 2.0).min(10.0);
        let verbs = (stats.verb_openers as f64).min(10.0);
        10.0 + quantified + verbs
    }

    fn extras_points(&self, resume: &ResumeData) -> f64 {
        let mut points = 0.0;
        if !resume.certifications.is_empty() {
            points += 2.5;
        }
        if !resume.projects.is_empty() {
            points += 2.5;
        }
        points
    }

    fn achievement_stats(&self, resume: &ResumeData) -> AchievementStats {
        let mut total = 0;
        let mut quantified = 0;
        let mut verb_openers = 0;

        for achievement in resume.all_achievements() {
            total += 1;
            if self.quantified_regex.is_match(achievement) {
                quantified += 1;
            }
            if self.opens_with_action_verb(achievement) {
                verb_openers += 1;
            }
        }

        AchievementStats {
            total,
            quantified,
            verb_openers,
        }
    }

    /// The raw first whitespace token, lower-cased, compared for equality.
    /// Trailing punctuation defeats the match.
    fn opens_with_action_verb(&self, achievement: &str) -> bool {
        achievement
            .split_whitespace()
            .next()
            .map(|word| self.action_verb_set.contains(&word.to_lowercase()))
            .unwrap_or(false)
    }

    fn analyze_format(&self, resume: &ResumeData) -> SectionAnalysis {
        let mut score = FORMAT_BASELINE;
        let mut issues = Vec::new();
        let mut strengths = Vec::new();
        let mut recommendations = Vec::new();

        let core_sections = [
            present(&resume.personal_info.full_name),
            present(&resume.professional_summary),
            !resume.core_competencies.is_empty(),
            !resume.experience.is_empty(),
        ];
        let core_count = core_sections.iter().filter(|p| **p).count();

        if core_count < core_sections.len() {
            score -= 15.0;
            issues.push(
                "One or more core sections (name, summary, skills, experience) are missing"
                    .to_string(),
            );
            recommendations.push(
                "Fill in your name, professional summary, core competencies, and at least one experience entry"
                    .to_string(),
            );
        } else {
            strengths.push("All core resume sections are present".to_string());
        }

        if let Some(portfolio) = &resume.personal_info.portfolio {
            if portfolio.to_lowercase().contains("pdf") {
                score -= 5.0;
                issues.push(
                    "Portfolio link appears to point to a document instead of a plain web page"
                        .to_string(),
                );
                recommendations
                    .push("Link to a plain URL that tracking systems can crawl".to_string());
            }
        }

        SectionAnalysis {
            score: clamp_score(score),
            issues,
            strengths,
            recommendations,
        }
    }

    fn analyze_keywords(&self, resume: &ResumeData, job: Option<&JobAnalysis>) -> KeywordAnalysis {
        let keywords = match job {
            Some(analysis) if !analysis.keywords.is_empty() => &analysis.keywords,
            // No job posting analyzed, or nothing extractable from it: a
            // fixed midpoint score with a pointer at the analyze step.
            _ => {
                return KeywordAnalysis {
                    score: NO_JOB_KEYWORD_SCORE,
                    recommendations: vec![
                        "Analyze a job description to unlock keyword matching insights".to_string(),
                    ],
                    ..Default::default()
                };
            }
        };

        let text = resume.searchable_text();
        let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = keywords
            .iter()
            .cloned()
            .partition(|k| text.contains(k.as_str()));

        let density = matched_keywords.len() as f64 / keywords.len() as f64 * 100.0;
        let score = clamp_score((density * 1.2).min(100.0));

        let mut issues = Vec::new();
        let mut strengths = Vec::new();
        let mut recommendations = Vec::new();

        if density < 60.0 {
            issues.push("Keyword match with the job posting is low".to_string());
            recommendations.push(
                "Weave more terminology from the job posting into your summary and achievements"
                    .to_string(),
            );
        } else {
            strengths.push("Strong keyword alignment with the job posting".to_string());
        }

        if !missing_keywords.is_empty() {
            let preview: Vec<&str> = missing_keywords.iter().take(5).map(|k| k.as_str()).collect();
            recommendations.push(format!("Consider adding: {}", preview.join(", ")));
        }

        debug!(
            "keyword analysis: {}/{} matched, density {:.1}",
            matched_keywords.len(),
            keywords.len(),
            density
        );

        KeywordAnalysis {
            score,
            matched_keywords,
            missing_keywords,
            density,
            issues,
            strengths,
            recommendations,
        }
    }

    fn analyze_content(&self, resume: &ResumeData, stats: &AchievementStats) -> SectionAnalysis {
        let mut score = CONTENT_BASELINE;
        let mut issues = Vec::new();
        let mut strengths = Vec::new();
        let mut recommendations = Vec::new();

        if resume.professional_summary.chars().count() < 100 {
            score -= 10.0;
            issues.push("Professional summary is shorter than 100 characters".to_string());
            recommendations
                .push("Expand the summary to 100-300 characters of focused positioning".to_string());
        } else {
            strengths.push("Professional summary has solid length".to_string());
        }

        if stats.quantified_ratio() < 0.5 {
            score -= 15.0;
            issues.push("Fewer than half of the achievements cite a concrete number".to_string());
            recommendations.push(
                "Quantify results with percentages, dollar amounts, or counts".to_string(),
            );
        } else {
            strengths.push("Achievements are well quantified".to_string());
        }

        if stats.verb_opener_ratio() < 0.7 {
            score -= 10.0;
            issues.push("Many achievement bullets do not open with an action verb".to_string());
            recommendations.push("Start each bullet with a strong action verb".to_string());
        } else {
            strengths.push("Achievement bullets consistently open with action verbs".to_string());
        }

        SectionAnalysis {
            score: clamp_score(score),
            issues,
            strengths,
            recommendations,
        }
    }

    /// Absent fields rendered as human-readable labels, in a fixed order.
    fn missing_elements(&self, resume: &ResumeData) -> Vec<String> {
        let info = &resume.personal_info;
        let checks: [(&str, bool); 8] = [
            ("Full Name", present(&info.full_name)),
            ("Email Address", present(&info.email)),
            ("Phone Number", present(&info.phone)),
            ("Location", present(&info.location)),
            ("Professional Summary", present(&resume.professional_summary)),
            ("Core Competencies", !resume.core_competencies.is_empty()),
            ("Work Experience", !resume.experience.is_empty()),
            ("Education", !resume.education.is_empty()),
        ];

        checks
            .iter()
            .filter(|(_, present)| !present)
            .map(|(label, _)| label.to_string())
            .collect()
    }

    /// Dictionary verbs not yet opening any achievement bullet.
    fn suggest_action_verbs(&self, resume: &ResumeData) -> Vec<String> {
        let used: HashSet<String> = resume
            .all_achievements()
            .filter_map(|a| a.split_whitespace().next())
            .map(|w| w.to_lowercase())
            .collect();

        self.action_verbs
            .iter()
            .filter(|verb| !used.contains(verb.as_str()))
            .take(MAX_VERB_SUGGESTIONS)
            .cloned()
            .collect()
    }

    /// Power words not yet present anywhere in the summary.
    fn suggest_power_words(&self, resume: &ResumeData) -> Vec<String> {
        let summary = resume.professional_summary.to_lowercase();
        self.dictionaries
            .power_words
            .iter()
            .filter(|word| !summary.contains(&word.to_lowercase()))
            .take(MAX_POWER_WORD_SUGGESTIONS)
            .cloned()
            .collect()
    }

    fn build_recommendations(
        &self,
        missing_elements: &[String],
        format_analysis: &SectionAnalysis,
        keyword_analysis: &KeywordAnalysis,
        stats: &AchievementStats,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if !missing_elements.is_empty() {
            recommendations.push(Recommendation {
                priority: Priority::High,
                category: "Completeness".to_string(),
                issue: format!("Missing required elements: {}", missing_elements.join(", ")),
                solution: "Fill in every core field so tracking systems can parse the resume"
                    .to_string(),
                impact: "Resumes with absent core fields are frequently rejected before review"
                    .to_string(),
            });
        }

        if keyword_analysis.score < KEYWORD_REC_THRESHOLD {
            recommendations.push(Recommendation {
                priority: Priority::High,
                category: "Keywords".to_string(),
                issue: "Resume keywords do not sufficiently match the target job description"
                    .to_string(),
                solution:
                    "Incorporate more terminology from the job posting into the summary and achievements"
                        .to_string(),
                impact: "Directly raises the match rate job-side filters compute".to_string(),
            });
        }

        if stats.quantified_ratio() < 0.5 {
            recommendations.push(Recommendation {
                priority: Priority::Medium,
                category: "Achievements".to_string(),
                issue: "Few achievements are backed by concrete numbers".to_string(),
                solution: "Add metrics such as percentages, dollar amounts, or team sizes to your bullets"
                    .to_string(),
                impact: "Quantified results stand out to both parsers and recruiters".to_string(),
            });
        }

        if !format_analysis.issues.is_empty() {
            recommendations.push(Recommendation {
                priority: Priority::Medium,
                category: "Formatting".to_string(),
                issue: format_analysis.issues.join("; "),
                solution: "Simplify the layout and keep every link a plain URL".to_string(),
                impact: "Clean formatting keeps automated parsing reliable".to_string(),
            });
        }

        recommendations.push(Recommendation {
            priority: Priority::Low,
            category: "Sections".to_string(),
            issue: "Resume could include more supporting sections".to_string(),
            solution: "Consider adding certifications, projects, or volunteer work".to_string(),
            impact: "Extra sections give parsers more signal without hurting the layout"
                .to_string(),
        });

        recommendations
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new().expect("Failed to create default scoring engine")
    }
}

fn build_projection(current_score: u8, recommendations: &[Recommendation]) -> BeforeAfterComparison {
    let mut increase: u32 = 0;
    for rec in recommendations {
        increase += match rec.priority {
            Priority::High => 15,
            Priority::Medium => 8,
            Priority::Low => 3,
        };
    }
    let expected_increase = increase.min(MAX_PROJECTED_INCREASE) as u8;
    let projected_score = (current_score as u32 + expected_increase as u32).min(100) as u8;

    BeforeAfterComparison {
        issues: recommendations.iter().map(|r| r.issue.clone()).collect(),
        changes: recommendations.iter().map(|r| r.solution.clone()).collect(),
        expected_increase,
        projected_score,
    }
}

fn template_advice(format_analysis: &SectionAnalysis) -> TemplateRecommendation {
    if format_analysis.score < 70 {
        TemplateRecommendation {
            switch_recommended: true,
            advice: "Switch to a plain single-column template so parsers read every section in order"
                .to_string(),
        }
    } else {
        TemplateRecommendation {
            switch_recommended: false,
            advice: "Current format is ATS-friendly; no template change needed".to_string(),
        }
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Round-half-up to an integer and clamp into [0, 100].
fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::resume::{Education, Experience, PersonalInfo};

    fn engine() -> ScoringEngine {
        ScoringEngine::new().unwrap()
    }

    fn full_contact() -> PersonalInfo {
        PersonalInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            location: "Austin, TX".to_string(),
            linkedin: Some("linkedin.com/in/janedoe".to_string()),
            portfolio: None,
        }
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let report = engine().score_resume(&ResumeData::default(), None);
        assert_eq!(report.current_score, 0);
        assert_eq!(report.overall_grade, Grade::Poor);
        assert_eq!(report.missing_elements.len(), 8);
    }

    #[test]
    fn test_contact_points_require_valid_email() {
        let mut resume = ResumeData {
            personal_info: full_contact(),
            ..Default::default()
        };
        let full = engine().score_resume(&resume, None).score_breakdown.contact;
        assert_eq!(full, 15.0);

        resume.personal_info.email = "not-an-email".to_string();
        let invalid = engine().score_resume(&resume, None).score_breakdown.contact;
        assert_eq!(invalid, 12.0);
    }

    #[test]
    fn test_summary_length_tiers() {
        let cases = [(0, 0.0), (30, 5.0), (60, 10.0), (150, 15.0), (400, 10.0)];
        for (length, expected) in cases {
            let resume = ResumeData {
                professional_summary: "x".repeat(length),
                ..Default::default()
            };
            let report = engine().score_resume(&resume, None);
            assert_eq!(report.score_breakdown.summary, expected, "length {}", length);
        }
    }

    #[test]
    fn test_summary_keyword_bonus_caps_at_five() {
        let resume = ResumeData {
            professional_summary:
                "alpha bravo charlie delta echo foxtrot golf hotel india juliett kilo lima mike november"
                    .to_string(),
            ..Default::default()
        };
        let job = JobAnalysis {
            keywords: vec![
                "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            ..Default::default()
        };

        let report = engine().score_resume(&resume, Some(&job));
        // 10 for length tier (>= 50 chars) plus the capped bonus.
        assert_eq!(report.score_breakdown.summary, 15.0);
    }

    #[test]
    fn test_experience_caps() {
        let achievements: Vec<String> = (0..12)
            .map(|i| format!("Led rollout {} saving {}%", i, i))
            .collect();
        let resume = ResumeData {
            experience: vec![Experience {
                achievements,
                ..Default::default()
            }],
            ..Default::default()
        };

        let report = engine().score_resume(&resume, None);
        // 10 flat + 10 quantified cap + 10 verb-opener cap.
        assert_eq!(report.score_breakdown.experience, 30.0);
    }

    #[test]
    fn test_format_deductions() {
        let mut resume = ResumeData {
            personal_info: full_contact(),
            professional_summary: "Seasoned engineer.".to_string(),
            core_competencies: vec!["Rust".to_string()],
            experience: vec![Experience::default()],
            ..Default::default()
        };
        assert_eq!(engine().score_resume(&resume, None).format_analysis.score, 85);

        resume.personal_info.portfolio = Some("https://example.com/resume.pdf".to_string());
        assert_eq!(engine().score_resume(&resume, None).format_analysis.score, 80);

        resume.experience.clear();
        let report = engine().score_resume(&resume, None);
        assert_eq!(report.format_analysis.score, 65);
        assert!(report.template_recommendation.switch_recommended);
    }

    #[test]
    fn test_keyword_density_scoring() {
        let resume = ResumeData {
            professional_summary: "Shipped kubernetes operators and terraform modules".to_string(),
            ..Default::default()
        };
        let job = JobAnalysis {
            keywords: vec!["kubernetes", "terraform", "golang", "grpc"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Default::default()
        };

        let report = engine().score_resume(&resume, Some(&job));
        // 2 of 4 matched: density 50, score min(50 * 1.2, 100) = 60.
        assert_eq!(report.keyword_analysis.score, 60);
        assert_eq!(report.keyword_analysis.matched_keywords.len(), 2);
        assert_eq!(report.keyword_analysis.missing_keywords.len(), 2);
        assert!(report
            .keyword_analysis
            .recommendations
            .iter()
            .any(|r| r.contains("golang")));
    }

    #[test]
    fn test_content_analysis_with_no_achievements() {
        let resume = ResumeData {
            professional_summary: "q".repeat(120),
            education: vec![Education::default()],
            ..Default::default()
        };
        let report = engine().score_resume(&resume, None);
        // Baseline 70, zero-achievement ratios are 0: -15 and -10 apply.
        assert_eq!(report.content_analysis.score, 45);
    }

    #[test]
    fn test_low_recommendation_is_always_present() {
        let report = engine().score_resume(&ResumeData::default(), None);
        let last = report.prioritized_recommendations.last().unwrap();
        assert_eq!(last.priority, Priority::Low);
    }

    #[test]
    fn test_projection_lists_mirror_recommendations() {
        let report = engine().score_resume(&ResumeData::default(), None);
        let issues: Vec<String> = report
            .prioritized_recommendations
            .iter()
            .map(|r| r.issue.clone())
            .collect();
        assert_eq!(report.before_after.issues, issues);
        assert!(report.before_after.expected_increase <= 40);
        assert!(report.before_after.projected_score <= 100);
    }
}
