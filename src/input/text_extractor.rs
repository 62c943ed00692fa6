//! Text extraction from supported file formats

use crate::error::Result;
use pulldown_cmark::{Event, Parser, Tag};
use std::fs;
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path)?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Collect the text content of a markdown document, dropping formatting.
fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item) => text.push('\n'),
            _ => {}
        }
    }

    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_formatting_is_stripped() {
        let markdown = "# Senior Engineer\n\nWe need **React** and `node.js` experience.\n\n- leadership\n- teamwork\n";
        let text = markdown_to_text(markdown);

        assert!(text.contains("Senior Engineer"));
        assert!(text.contains("React"));
        assert!(text.contains("node.js"));
        assert!(text.contains("leadership"));
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
        assert!(!text.contains('`'));
    }

    #[test]
    fn test_blank_lines_are_collapsed() {
        let text = markdown_to_text("para one\n\n\n\npara two");
        assert_eq!(text, "para one\npara two");
    }
}
