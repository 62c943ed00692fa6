//! Fixed lookup tables used by the analyzer and scoring engine
//!
//! All scoring rules consult these tables rather than scattered literals, so
//! the tables can be swapped per locale or industry through the config file
//! without touching scoring code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dictionaries {
    /// Technical skills matched as substrings of job-description text.
    pub technical_skills: Vec<String>,
    /// Soft-skill phrases matched as substrings of job-description text.
    pub soft_skills: Vec<String>,
    /// Words excluded from keyword extraction.
    pub stop_words: Vec<String>,
    /// Action verbs an achievement bullet may open with, by category.
    pub action_verbs: Vec<VerbCategory>,
    /// Power words suggested for the professional summary.
    pub power_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbCategory {
    pub name: String,
    pub verbs: Vec<String>,
}

impl Default for Dictionaries {
    fn default() -> Self {
        Self {
            technical_skills: default_technical_skills(),
            soft_skills: default_soft_skills(),
            stop_words: default_stop_words(),
            action_verbs: default_action_verbs(),
            power_words: default_power_words(),
        }
    }
}

impl Dictionaries {
    /// All action verbs flattened in category order. This order also decides
    /// which verbs are suggested first.
    pub fn all_action_verbs(&self) -> Vec<String> {
        self.action_verbs
            .iter()
            .flat_map(|c| c.verbs.iter().cloned())
            .collect()
    }
}

fn default_technical_skills() -> Vec<String> {
    vec![
        "javascript",
        "typescript",
        "python",
        "java",
        "react",
        "angular",
        "vue",
        "node.js",
        "sql",
        "aws",
        "azure",
        "docker",
        "kubernetes",
        "git",
        "html",
        "css",
        "mongodb",
        "postgresql",
        "rest",
        "graphql",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_soft_skills() -> Vec<String> {
    vec![
        "leadership",
        "communication",
        "teamwork",
        "problem solving",
        "time management",
        "adaptability",
        "collaboration",
        "critical thinking",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_stop_words() -> Vec<String> {
    vec![
        "the", "and", "for", "are", "with", "that", "this", "have", "from", "they", "will",
        "been", "were", "their", "would", "there", "what", "about", "which", "when", "your",
        "more", "than", "into", "other", "some", "such", "only", "over", "most", "also",
        "must", "each", "very", "where", "while", "should", "could", "them", "then", "these",
        "through", "being", "both", "well", "able",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_action_verbs() -> Vec<VerbCategory> {
    let categories: Vec<(&str, Vec<&str>)> = vec![
        (
            "leadership",
            vec![
                "led", "managed", "directed", "supervised", "coordinated", "oversaw",
                "chaired", "delegated",
            ],
        ),
        (
            "achievement",
            vec![
                "achieved", "delivered", "exceeded", "attained", "completed", "earned", "won",
            ],
        ),
        (
            "improvement",
            vec![
                "improved", "optimized", "streamlined", "enhanced", "upgraded", "modernized",
                "simplified",
            ],
        ),
        (
            "creation",
            vec![
                "created", "developed", "designed", "built", "launched", "established",
                "engineered", "implemented",
            ],
        ),
        (
            "analysis",
            vec![
                "analyzed", "evaluated", "assessed", "researched", "investigated", "measured",
                "forecasted",
            ],
        ),
        (
            "collaboration",
            vec![
                "collaborated", "partnered", "facilitated", "negotiated", "mentored",
                "advised", "trained",
            ],
        ),
        (
            "growth",
            vec![
                "increased", "expanded", "grew", "accelerated", "boosted", "scaled",
                "generated",
            ],
        ),
        (
            "problem solving",
            vec![
                "resolved", "solved", "diagnosed", "troubleshot", "debugged", "remediated",
                "overhauled",
            ],
        ),
    ];

    categories
        .into_iter()
        .map(|(name, verbs)| VerbCategory {
            name: name.to_string(),
            verbs: verbs.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

fn default_power_words() -> Vec<String> {
    vec![
        "accomplished",
        "strategic",
        "innovative",
        "proven",
        "dedicated",
        "proactive",
        "versatile",
        "resourceful",
        "results-driven",
        "detail-oriented",
        "collaborative",
        "analytical",
        "motivated",
        "passionate",
        "experienced",
        "skilled",
        "reliable",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_table_sizes() {
        let dicts = Dictionaries::default();
        assert_eq!(dicts.technical_skills.len(), 20);
        assert_eq!(dicts.soft_skills.len(), 8);
        assert_eq!(dicts.action_verbs.len(), 8);
        assert_eq!(dicts.power_words.len(), 17);
        assert!(dicts.all_action_verbs().len() >= 55);
    }

    #[test]
    fn test_action_verbs_are_unique_and_lowercase() {
        let verbs = Dictionaries::default().all_action_verbs();
        let unique: HashSet<&String> = verbs.iter().collect();
        assert_eq!(unique.len(), verbs.len());
        assert!(verbs.iter().all(|v| *v == v.to_lowercase()));
    }

    #[test]
    fn test_tables_survive_toml_round_trip() {
        let dicts = Dictionaries::default();
        let serialized = toml::to_string(&dicts).unwrap();
        let restored: Dictionaries = toml::from_str(&serialized).unwrap();
        assert_eq!(restored, dicts);
    }
}
