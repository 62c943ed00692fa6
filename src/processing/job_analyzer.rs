//! Job description analysis: keyword and skill extraction

use crate::error::{AtsError, Result};
use crate::processing::dictionaries::Dictionaries;
use aho_corasick::AhoCorasick;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of keywords kept from a job posting.
const KEYWORD_CAP: usize = 20;

/// Tokens this short are never treated as keywords.
const MIN_TOKEN_LEN: usize = 4;

/// Read-only snapshot of a job posting, produced once per analyze action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    /// Deduplicated free-text keywords in first-seen order, capped at 20.
    pub keywords: Vec<String>,
    /// Technical skills found in the posting, in dictionary order.
    pub required_skills: Vec<String>,
    /// Soft skills found in the posting, in dictionary order.
    pub soft_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub industry_terms: Vec<String>,
}

/// Converts unstructured job-posting text into a structured skill profile.
///
/// Skill detection is naive substring containment: a dictionary entry found
/// anywhere in the text counts, so "java" matches inside "javascript" and
/// both entries are reported. That imprecision is part of the scoring
/// contract and is kept deliberately.
pub struct JobDescriptionAnalyzer {
    dictionaries: Dictionaries,
    stop_words: HashSet<String>,
    tech_matcher: AhoCorasick,
    soft_matcher: AhoCorasick,
}

impl JobDescriptionAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_dictionaries(Dictionaries::default())
    }

    /// Build an analyzer over custom dictionaries (e.g. from the config file).
    pub fn with_dictionaries(dictionaries: Dictionaries) -> Result<Self> {
        let tech_matcher = build_matcher(&dictionaries.technical_skills)?;
        let soft_matcher = build_matcher(&dictionaries.soft_skills)?;
        let stop_words = dictionaries
            .stop_words
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        Ok(Self {
            dictionaries,
            stop_words,
            tech_matcher,
            soft_matcher,
        })
    }

    /// Analyze free-text job posting content. Total over its input: empty
    /// text yields an empty analysis, never an error.
    pub fn analyze(&self, text: &str) -> JobAnalysis {
        let lowered = text.to_lowercase();

        let keywords = self.extract_keywords(&lowered);
        let required_skills =
            find_dictionary_matches(&self.tech_matcher, &self.dictionaries.technical_skills, &lowered);
        let soft_skills =
            find_dictionary_matches(&self.soft_matcher, &self.dictionaries.soft_skills, &lowered);

        debug!(
            "job analysis: {} keywords, {} required skills, {} soft skills",
            keywords.len(),
            required_skills.len(),
            soft_skills.len()
        );

        JobAnalysis {
            keywords,
            required_skills,
            soft_skills,
            preferred_skills: Vec::new(),
            industry_terms: Vec::new(),
        }
    }

    fn extract_keywords(&self, lowered: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for token in lowered.split_whitespace() {
            if token.chars().count() < MIN_TOKEN_LEN || self.stop_words.contains(token) {
                continue;
            }
            if seen.insert(token.to_string()) {
                keywords.push(token.to_string());
                if keywords.len() == KEYWORD_CAP {
                    break;
                }
            }
        }

        keywords
    }
}

fn build_matcher(patterns: &[String]) -> Result<AhoCorasick> {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(patterns)
        .map_err(|e| AtsError::Processing(format!("Failed to build skill matcher: {}", e)))
}

/// Which dictionary entries occur as substrings of `text`, in dictionary
/// order. Overlapping matches are reported, so entries nested inside longer
/// entries still count.
fn find_dictionary_matches(matcher: &AhoCorasick, dictionary: &[String], text: &str) -> Vec<String> {
    let mut found: Vec<bool> = vec![false; dictionary.len()];
    for mat in matcher.find_overlapping_iter(text) {
        found[mat.pattern().as_usize()] = true;
    }

    dictionary
        .iter()
        .zip(found)
        .filter(|(_, hit)| *hit)
        .map(|(entry, _)| entry.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> JobDescriptionAnalyzer {
        JobDescriptionAnalyzer::new().unwrap()
    }

    #[test]
    fn test_empty_text_yields_empty_analysis() {
        let analysis = analyzer().analyze("");
        assert!(analysis.keywords.is_empty());
        assert!(analysis.required_skills.is_empty());
        assert!(analysis.soft_skills.is_empty());
    }

    #[test]
    fn test_keywords_are_deduplicated_in_first_seen_order() {
        let analysis = analyzer().analyze("Kubernetes deployment pipelines. Kubernetes experts only.");
        let kube_count = analysis.keywords.iter().filter(|k| *k == "kubernetes").count();
        assert_eq!(kube_count, 1);
        assert_eq!(analysis.keywords[0], "kubernetes");
        assert_eq!(analysis.keywords[1], "deployment");
    }

    #[test]
    fn test_short_tokens_and_stop_words_are_dropped() {
        let analysis = analyzer().analyze("We are looking for someone with SQL and Rust");
        assert!(!analysis.keywords.iter().any(|k| k == "we" || k == "are" || k == "sql"));
        assert!(!analysis.keywords.iter().any(|k| k == "with"));
        assert!(analysis.keywords.iter().any(|k| k == "rust"));
    }

    #[test]
    fn test_keywords_capped_at_twenty() {
        let text = (0..40)
            .map(|i| format!("keyword{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let analysis = analyzer().analyze(&text);
        assert_eq!(analysis.keywords.len(), 20);
    }

    #[test]
    fn test_substring_matching_reports_nested_entries() {
        // "java" is embedded in "javascript"; both dictionary entries match.
        let analysis = analyzer().analyze("Deep JavaScript expertise required");
        assert!(analysis.required_skills.contains(&"javascript".to_string()));
        assert!(analysis.required_skills.contains(&"java".to_string()));
    }

    #[test]
    fn test_skills_come_back_in_dictionary_order() {
        let analysis = analyzer().analyze("react before python? no: python is listed after javascript");
        let dicts = Dictionaries::default();
        let positions: Vec<usize> = analysis
            .required_skills
            .iter()
            .map(|s| dicts.technical_skills.iter().position(|d| d == s).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_soft_skill_phrases_match_anywhere() {
        let analysis = analyzer().analyze("Strong problem solving and proven leadership expected.");
        assert_eq!(
            analysis.soft_skills,
            vec!["leadership".to_string(), "problem solving".to_string()]
        );
    }
}
