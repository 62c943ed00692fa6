//! Input loading: resume JSON and job-description text files

pub mod text_extractor;

use crate::error::{AtsError, Result};
use crate::processing::resume::ResumeData;
use log::debug;
use std::fs;
use std::path::Path;
use text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};

/// Load structured resume data from a JSON export of the form UI.
pub fn load_resume(path: &Path) -> Result<ResumeData> {
    let content = fs::read_to_string(path)?;
    let resume: ResumeData = serde_json::from_str(&content)?;
    debug!(
        "loaded resume for '{}' with {} experience entries",
        resume.personal_info.full_name,
        resume.experience.len()
    );
    Ok(resume)
}

/// Load job-description text, dispatching on the file extension.
pub fn load_job_description(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let text = match extension.as_str() {
        "txt" => PlainTextExtractor.extract(path)?,
        "md" | "markdown" => MarkdownExtractor.extract(path)?,
        other => {
            return Err(AtsError::UnsupportedFormat(format!(
                "'{}' is not a supported job description format (use .txt or .md)",
                other
            )));
        }
    };

    debug!("loaded job description: {} characters", text.len());
    Ok(text)
}
