//! ATS compatibility scoring
//!
//! Six independent sub-scorers, each capped at a documented maximum that
//! together sum to 100: sections 25, keywords 20, action verbs 15, metrics
//! 20, formatting 10, contact 10.

use crate::analysis::extractor::{MetricMention, VerbUsage};
use crate::analysis::sections::SectionPresence;
use crate::error::{Result, ResumeInsightError};
use regex::Regex;
use serde::{Deserialize, Serialize};

const MAX_SUGGESTIONS: usize = 15;
const MAX_PRIORITIES: usize = 5;

const WEAK_PHRASES: &[&str] = &["responsible for", "duties include", "tasks include"];
const BULLET_CHARS: &[char] = &['•', '-', '►', '→', '*'];

pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";
pub const PHONE_PATTERN: &str = r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b";

/// Per-category sub-scores. Field order is the reporting order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub sections: f64,
    pub keywords: f64,
    pub action_verbs: f64,
    pub metrics: f64,
    pub formatting: f64,
    pub contact: f64,
}

impl AtsBreakdown {
    pub const MAX_SECTIONS: f64 = 25.0;
    pub const MAX_KEYWORDS: f64 = 20.0;
    pub const MAX_ACTION_VERBS: f64 = 15.0;
    pub const MAX_METRICS: f64 = 20.0;
    pub const MAX_FORMATTING: f64 = 10.0;
    pub const MAX_CONTACT: f64 = 10.0;

    pub fn total(&self) -> f64 {
        self.sections + self.keywords + self.action_verbs + self.metrics + self.formatting
            + self.contact
    }

    /// (display name, score, max) per category, in reporting order.
    pub fn categories(&self) -> [(&'static str, f64, f64); 6] {
        [
            ("Sections", self.sections, Self::MAX_SECTIONS),
            ("Keywords", self.keywords, Self::MAX_KEYWORDS),
            ("Action Verbs", self.action_verbs, Self::MAX_ACTION_VERBS),
            ("Metrics", self.metrics, Self::MAX_METRICS),
            ("Formatting", self.formatting, Self::MAX_FORMATTING),
            ("Contact", self.contact, Self::MAX_CONTACT),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsResult {
    pub overall_score: f64,
    pub grade: String,
    pub feedback: String,
    pub breakdown: AtsBreakdown,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub priority_improvements: Vec<String>,
}

pub struct AtsScorer {
    email_regex: Regex,
    phone_regex: Regex,
}

impl AtsScorer {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                ResumeInsightError::AnalysisFailed(format!("invalid pattern '{}': {}", pattern, e))
            })
        };
        Ok(Self {
            email_regex: compile(EMAIL_PATTERN)?,
            phone_regex: compile(PHONE_PATTERN)?,
        })
    }

    pub fn score(
        &self,
        text: &str,
        skill_count: usize,
        sections: &SectionPresence,
        action_verbs: &[VerbUsage],
        metrics: &[MetricMention],
    ) -> AtsResult {
        let mut suggestions = Vec::new();

        let (sections_score, s) = self.score_sections(sections);
        suggestions.extend(s);
        let (keywords_score, s) = self.score_keywords(text, skill_count);
        suggestions.extend(s);
        let (verbs_score, s) = self.score_action_verbs(text, action_verbs);
        suggestions.extend(s);
        let (metrics_score, s) = self.score_metrics(metrics);
        suggestions.extend(s);
        let (formatting_score, s) = self.score_formatting(text);
        suggestions.extend(s);
        let (contact_score, s) = self.score_contact(text);
        suggestions.extend(s);

        let breakdown = AtsBreakdown {
            sections: sections_score,
            keywords: keywords_score,
            action_verbs: verbs_score,
            metrics: metrics_score,
            formatting: formatting_score,
            contact: contact_score,
        };

        let overall_score = round2(breakdown.total());
        let (grade, feedback) = grade_and_feedback(overall_score);
        suggestions.truncate(MAX_SUGGESTIONS);

        AtsResult {
            overall_score,
            grade: grade.to_string(),
            feedback: feedback.to_string(),
            breakdown,
            suggestions,
            strengths: identify_strengths(&breakdown),
            priority_improvements: identify_priorities(&breakdown),
        }
    }

    fn score_sections(&self, sections: &SectionPresence) -> (f64, Vec<String>) {
        let mut suggestions = Vec::new();

        let required = sections.required_present() as f64;
        let recommended = sections.recommended_present() as f64;
        let score = (required / 3.0) * 15.0 + (recommended / 3.0) * 10.0;

        for section in sections.missing_required() {
            suggestions.push(format!(
                "CRITICAL: Add '{}' section, required by most ATS systems.",
                title_case(section)
            ));
        }
        for section in sections.missing_recommended() {
            suggestions.push(format!(
                "Add '{}' section to strengthen your resume.",
                title_case(section)
            ));
        }

        (score, suggestions)
    }

    fn score_keywords(&self, text: &str, skill_count: usize) -> (f64, Vec<String>) {
        let mut score = 0.0;
        let mut suggestions = Vec::new();

        score += match skill_count {
            n if n >= 15 => 10.0,
            n if n >= 10 => 7.0,
            n if n >= 5 => 4.0,
            _ => {
                suggestions.push(
                    "Add more relevant technical skills, aim for 10-15 skills.".to_string(),
                );
                0.0
            }
        };

        let word_count = text.split_whitespace().count();
        if word_count > 0 {
            let density = (skill_count * 3) as f64 / word_count as f64;
            score += if density >= 0.05 {
                10.0
            } else if density >= 0.03 {
                7.0
            } else if density >= 0.01 {
                4.0
            } else {
                suggestions
                    .push("Increase keyword density by mentioning skills in context.".to_string());
                0.0
            };
        }

        if skill_count < 8 {
            suggestions.push(format!(
                "Add {} more relevant skills to improve ATS match.",
                8 - skill_count
            ));
        }

        (score, suggestions)
    }

    fn score_action_verbs(&self, text: &str, action_verbs: &[VerbUsage]) -> (f64, Vec<String>) {
        let mut score = 0.0;
        let mut suggestions = Vec::new();
        let text_lower = text.to_lowercase();

        let unique_verbs = action_verbs.len();
        let total_usage: usize = action_verbs.iter().map(|v| v.count).sum();

        score += match unique_verbs {
            n if n >= 10 => 7.0,
            n if n >= 6 => 5.0,
            n if n >= 3 => 3.0,
            _ => {
                suggestions.push(
                    "Use more diverse action verbs, aim for 10+ different verbs.".to_string(),
                );
                0.0
            }
        };

        score += match total_usage {
            n if n >= 15 => 8.0,
            n if n >= 10 => 5.0,
            n if n >= 5 => 3.0,
            _ => {
                suggestions
                    .push("Start more bullet points with strong action verbs.".to_string());
                0.0
            }
        };

        for phrase in WEAK_PHRASES {
            if text_lower.contains(phrase) {
                suggestions.push(format!(
                    "Replace '{}' with action verbs like 'Led', 'Developed', 'Managed'.",
                    phrase
                ));
            }
        }

        if unique_verbs < 8 {
            suggestions.push(
                "Example strong verbs: Architected, Spearheaded, Optimized, Pioneered".to_string(),
            );
        }

        (score, suggestions)
    }

    fn score_metrics(&self, metrics: &[MetricMention]) -> (f64, Vec<String>) {
        let mut score = 0.0;
        let mut suggestions = Vec::new();

        let count = metrics.len();
        score += match count {
            n if n >= 8 => 15.0,
            n if n >= 5 => 10.0,
            n if n >= 3 => 6.0,
            n if n >= 1 => 3.0,
            _ => {
                suggestions.push(
                    "CRITICAL: Add quantifiable metrics to demonstrate impact.".to_string(),
                );
                0.0
            }
        };

        let has_percentages = metrics.iter().any(|m| m.metric.contains('%'));
        let has_numbers = metrics
            .iter()
            .any(|m| m.metric.as_bytes().windows(2).any(|w| {
                w[0].is_ascii_digit() && w[1].is_ascii_digit()
            }));
        let has_currency = metrics.iter().any(|m| m.metric.contains('$'));
        let quality = [has_percentages, has_numbers, has_currency]
            .iter()
            .filter(|&&b| b)
            .count();
        score += (quality as f64 / 3.0) * 5.0;

        if count < 5 {
            suggestions.push(
                "Add numbers: '20% improvement', '$50K savings', '1000+ users'".to_string(),
            );
        }
        if !has_percentages {
            suggestions.push(
                "Include percentage improvements (e.g., 'reduced time by 30%')".to_string(),
            );
        }
        if count == 0 {
            suggestions
                .push("Example: 'Increased sales by 25%, managing $2M portfolio'".to_string());
        }

        (score, suggestions)
    }

    fn score_formatting(&self, text: &str) -> (f64, Vec<String>) {
        let mut score = 0.0;
        let mut suggestions = Vec::new();

        let word_count = text.split_whitespace().count();
        if (400..=1000).contains(&word_count) {
            score += 5.0;
        } else if (300..=1200).contains(&word_count) {
            score += 3.0;
        } else if word_count < 300 {
            suggestions.push(
                "Resume seems too short, add more details about projects and experience."
                    .to_string(),
            );
        } else {
            suggestions.push(
                "Consider condensing, resumes should be concise (400-1000 words).".to_string(),
            );
        }

        if text.contains(BULLET_CHARS) {
            score += 5.0;
        } else {
            suggestions
                .push("Use bullet points for better readability and ATS parsing.".to_string());
        }

        (score, suggestions)
    }

    fn score_contact(&self, text: &str) -> (f64, Vec<String>) {
        let mut score = 0.0;
        let mut suggestions = Vec::new();
        let text_lower = text.to_lowercase();

        if self.email_regex.is_match(text) {
            score += 3.0;
        } else {
            suggestions.push("Include email address in contact section.".to_string());
        }

        if self.phone_regex.is_match(text) {
            score += 2.0;
        } else {
            suggestions.push("Include phone number for contact.".to_string());
        }

        if text_lower.contains("linkedin") {
            score += 3.0;
        } else {
            suggestions.push("Add LinkedIn profile URL.".to_string());
        }

        if text_lower.contains("github") || text_lower.contains("portfolio") {
            score += 2.0;
        } else {
            suggestions.push("Include GitHub or portfolio link to showcase work.".to_string());
        }

        (score, suggestions)
    }
}

fn grade_and_feedback(score: f64) -> (&'static str, &'static str) {
    if score >= 90.0 {
        ("A+", "Excellent! Your resume is highly optimized for ATS systems.")
    } else if score >= 85.0 {
        ("A", "Great! Your resume should pass most ATS systems.")
    } else if score >= 80.0 {
        ("A-", "Very good! Minor improvements will maximize your chances.")
    } else if score >= 75.0 {
        ("B+", "Good! Some enhancements needed for optimal ATS performance.")
    } else if score >= 70.0 {
        ("B", "Decent. Address key suggestions to improve ATS compatibility.")
    } else if score >= 65.0 {
        ("B-", "Fair. Important improvements needed.")
    } else if score >= 60.0 {
        ("C+", "Below average. Significant improvements required.")
    } else if score >= 55.0 {
        ("C", "Poor. Major revisions needed for ATS success.")
    } else {
        ("D", "Critical issues detected. Complete restructuring recommended.")
    }
}

fn identify_strengths(breakdown: &AtsBreakdown) -> Vec<String> {
    let strengths: Vec<String> = breakdown
        .categories()
        .iter()
        .filter_map(|(name, score, max)| {
            let percentage = (score / max) * 100.0;
            (percentage >= 80.0).then(|| format!("{}: Strong ({:.0}%)", name, percentage))
        })
        .collect();

    if strengths.is_empty() {
        vec!["Keep working on improving all areas!".to_string()]
    } else {
        strengths
    }
}

fn identify_priorities(breakdown: &AtsBreakdown) -> Vec<String> {
    let mut priorities: Vec<String> = breakdown
        .categories()
        .iter()
        .filter_map(|(name, score, max)| {
            let percentage = (score / max) * 100.0;
            if percentage < 50.0 {
                Some(format!("URGENT: {} ({:.0}%)", name, percentage))
            } else if percentage < 70.0 {
                Some(format!("Important: {} ({:.0}%)", name, percentage))
            } else {
                None
            }
        })
        .collect();

    priorities.truncate(MAX_PRIORITIES);
    if priorities.is_empty() {
        vec!["Great job! Focus on minor refinements.".to_string()]
    } else {
        priorities
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::{MetricMention, VerbUsage};

    fn scorer() -> AtsScorer {
        AtsScorer::new().unwrap()
    }

    fn verb(verb: &str, count: usize) -> VerbUsage {
        VerbUsage {
            verb: verb.to_string(),
            count,
        }
    }

    fn metric(metric: &str) -> MetricMention {
        MetricMention {
            metric: metric.to_string(),
            context: String::new(),
        }
    }

    #[test]
    fn empty_resume_scores_near_zero_keywords() {
        let sections = SectionPresence::detect("");
        let result = scorer().score("short text", 0, &sections, &[], &[]);
        assert_eq!(result.breakdown.keywords, 0.0);
        assert_eq!(result.breakdown.sections, 0.0);
        assert!(result.overall_score <= 100.0);
    }

    #[test]
    fn sub_scores_never_exceed_their_maxima() {
        let text = format!(
            "experience education skills summary projects certifications \
             email a@b.com 555-123-4567 linkedin github • {}",
            "built improved increased 25% increase $100 500 users ".repeat(60)
        );
        let sections = SectionPresence::detect(&text);
        let verbs: Vec<VerbUsage> = (0..12).map(|i| verb(&format!("v{}", i), 3)).collect();
        let metrics: Vec<MetricMention> =
            (0..10).map(|_| metric("25% increase")).collect();
        let result = scorer().score(&text, 20, &sections, &verbs, &metrics);

        let b = &result.breakdown;
        assert!(b.sections <= AtsBreakdown::MAX_SECTIONS);
        assert!(b.keywords <= AtsBreakdown::MAX_KEYWORDS);
        assert!(b.action_verbs <= AtsBreakdown::MAX_ACTION_VERBS);
        assert!(b.metrics <= AtsBreakdown::MAX_METRICS);
        assert!(b.formatting <= AtsBreakdown::MAX_FORMATTING);
        assert!(b.contact <= AtsBreakdown::MAX_CONTACT);
        assert!(result.overall_score <= 100.0);
    }

    #[test]
    fn contact_score_counts_email_and_linkedin() {
        let sections = SectionPresence::detect("");
        let result = scorer().score(
            "email: a@b.com, linkedin.com/in/x",
            0,
            &sections,
            &[],
            &[],
        );
        // email (3) + linkedin (3), no phone, no github/portfolio
        assert_eq!(result.breakdown.contact, 6.0);
    }

    #[test]
    fn weak_phrases_trigger_suggestions() {
        let sections = SectionPresence::detect("");
        let result = scorer().score(
            "Responsible for maintaining servers.",
            0,
            &sections,
            &[],
            &[],
        );
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("responsible for")));
    }

    #[test]
    fn grade_bands_are_monotonic() {
        assert_eq!(grade_and_feedback(95.0).0, "A+");
        assert_eq!(grade_and_feedback(85.0).0, "A");
        assert_eq!(grade_and_feedback(72.0).0, "B");
        assert_eq!(grade_and_feedback(55.0).0, "C");
        assert_eq!(grade_and_feedback(10.0).0, "D");
    }

    #[test]
    fn strengths_and_priorities_reflect_percentages() {
        let breakdown = AtsBreakdown {
            sections: 25.0,
            keywords: 5.0,
            action_verbs: 14.0,
            metrics: 0.0,
            formatting: 10.0,
            contact: 6.5,
        };
        let strengths = identify_strengths(&breakdown);
        assert!(strengths.iter().any(|s| s.starts_with("Sections")));
        let priorities = identify_priorities(&breakdown);
        assert!(priorities.iter().any(|p| p.contains("URGENT: Keywords")));
        assert!(priorities.iter().any(|p| p.contains("URGENT: Metrics")));
        assert!(priorities.len() <= 5);
    }
}
