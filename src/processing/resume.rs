//! Resume data structures

use serde::{Deserialize, Serialize};

/// Structured resume data as produced by the companion form UI.
///
/// Every field deserializes to a safe default so that partially filled or
/// malformed input never fails: the scoring engine is total over this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub professional_summary: String,
    pub core_competencies: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

/// A single employment entry. Dates are free-text "YYYY-MM" strings; when
/// `current` is true the scorer never reads `end_date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
}

impl ResumeData {
    /// All achievement bullets across every experience entry, in order.
    pub fn all_achievements(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|e| e.achievements.iter())
            .map(|a| a.as_str())
    }

    /// Lower-cased text the keyword analysis searches: summary, skills, and
    /// every achievement bullet joined with spaces.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.push(self.professional_summary.as_str());
        parts.extend(self.core_competencies.iter().map(|s| s.as_str()));
        parts.extend(self.all_achievements());
        parts.join(" ").to_lowercase()
    }

    pub fn has_linkedin(&self) -> bool {
        self.personal_info
            .linkedin
            .as_deref()
            .map(|l| !l.trim().is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_fields() {
        let json = r#"{"personalInfo": {"fullName": "Jane Doe"}}"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();

        assert_eq!(resume.personal_info.full_name, "Jane Doe");
        assert!(resume.personal_info.email.is_empty());
        assert!(resume.professional_summary.is_empty());
        assert!(resume.experience.is_empty());
    }

    #[test]
    fn test_searchable_text_is_lowercased() {
        let resume = ResumeData {
            professional_summary: "Senior Engineer".to_string(),
            core_competencies: vec!["React".to_string(), "AWS".to_string()],
            experience: vec![Experience {
                achievements: vec!["Led a team".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };

        let text = resume.searchable_text();
        assert!(text.contains("senior engineer"));
        assert!(text.contains("react"));
        assert!(text.contains("aws"));
        assert!(text.contains("led a team"));
    }

    #[test]
    fn test_all_achievements_preserves_order() {
        let resume = ResumeData {
            experience: vec![
                Experience {
                    achievements: vec!["first".to_string(), "second".to_string()],
                    ..Default::default()
                },
                Experience {
                    achievements: vec!["third".to_string()],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let bullets: Vec<&str> = resume.all_achievements().collect();
        assert_eq!(bullets, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_has_linkedin_ignores_blank() {
        let mut resume = ResumeData::default();
        assert!(!resume.has_linkedin());

        resume.personal_info.linkedin = Some("   ".to_string());
        assert!(!resume.has_linkedin());

        resume.personal_info.linkedin = Some("linkedin.com/in/jane".to_string());
        assert!(resume.has_linkedin());
    }
}
