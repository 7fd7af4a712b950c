//! Text extraction from supported file formats

use crate::error::{Result, ResumeInsightError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::fs;
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        html_to_text(&html_output)
    }
}

fn html_to_text(html: &str) -> Result<String> {
    let text = html
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let tags = Regex::new(r"<[^>]*>")
        .map_err(|e| ResumeInsightError::TextExtraction(format!("tag pattern: {}", e)))?;
    let clean = tags.replace_all(&text, "");

    // Collapse runs of blank lines left behind by stripped block tags
    let lines: Vec<&str> = clean.lines().map(|l| l.trim_end()).collect();
    let mut out = String::new();
    let mut blank_run = 0;
    for line in lines {
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    Ok(out.trim().to_string())
}

/// Dispatch on file extension. Only plain text and markdown are handled;
/// richer document formats are out of scope for this tool.
pub fn extract_text(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .ok_or_else(|| {
            ResumeInsightError::UnsupportedFormat(format!(
                "file has no extension: {}",
                path.display()
            ))
        })?;

    match extension.as_str() {
        "txt" => PlainTextExtractor.extract(path),
        "md" | "markdown" => MarkdownExtractor.extract(path),
        other => Err(ResumeInsightError::UnsupportedFormat(format!(
            "unsupported extension '.{}', expected .txt or .md",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_file(suffix: &str) -> tempfile::NamedTempFile {
        Builder::new().suffix(suffix).tempfile().unwrap()
    }

    #[test]
    fn plain_text_passes_through() {
        let mut file = temp_file(".txt");
        writeln!(file, "Experience with Python.").unwrap();
        let text = extract_text(file.path()).unwrap();
        assert!(text.contains("Experience with Python."));
    }

    #[test]
    fn markdown_is_stripped_to_text() {
        let mut file = temp_file(".md");
        writeln!(file, "# Jane Doe\n\n- **Built** ETL pipelines\n- Deployed to *AWS*").unwrap();
        let text = extract_text(file.path()).unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Built ETL pipelines"));
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let file = temp_file(".pdf");
        let err = extract_text(file.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ResumeInsightError::UnsupportedFormat(_)
        ));
    }
}
