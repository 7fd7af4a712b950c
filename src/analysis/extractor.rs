//! Extraction engine: skills, certifications, experience, education,
//! action verbs, and quantifiable metrics.
//!
//! All extraction is deterministic dictionary and pattern matching. Skill
//! matching uses a single Aho-Corasick automaton compiled from the catalog's
//! skill universe with leftmost-longest semantics, so multi-word skills win
//! over their prefixes ("javascript" never collapses to "java").

use crate::catalog::Catalog;
use crate::error::{Result, ResumeInsightError};
use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Context captured around a skill match, in characters per side.
const CONTEXT_RADIUS: usize = 50;
/// Context captured around a metric match, in characters per side.
const METRIC_CONTEXT_RADIUS: usize = 100;
/// Stored context snippets per skill.
const MAX_CONTEXTS_PER_SKILL: usize = 3;
/// Metric mentions retained per extraction.
const MAX_METRICS: usize = 10;
/// Confidence above which a skill counts as high-confidence.
const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

const SECTION_BOOST_KEYWORDS: &[&str] = &["skills", "technologies", "tools", "expertise"];

const ACTION_VERBS: &[&str] = &[
    "built", "developed", "designed", "implemented", "optimized", "analyzed",
    "created", "automated", "deployed", "improved", "engineered", "trained",
    "led", "managed", "coordinated", "established", "launched", "delivered",
    "architected", "scaled", "maintained", "integrated", "migrated", "streamlined",
    "reduced", "increased", "achieved", "collaborated", "spearheaded", "pioneered",
];

/// One canonical skill found in the resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMention {
    pub name: String,
    pub count: usize,
    pub contexts: Vec<String>,
    pub confidence: f64,
}

/// Years-of-experience estimate. All zero when no pattern matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceYears {
    pub max_years: u32,
    pub min_years: u32,
    pub avg_years: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree: String,
    pub major: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbUsage {
    pub verb: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricMention {
    pub metric: String,
    pub context: String,
}

/// Everything the extraction engine pulls out of one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Sorted by descending (confidence, count).
    pub skills: Vec<SkillMention>,
    pub high_confidence_skills: Vec<String>,
    pub certifications: Vec<String>,
    pub experience: ExperienceYears,
    pub education: Vec<EducationRecord>,
    /// Sorted by descending count.
    pub action_verbs: Vec<VerbUsage>,
    pub metrics: Vec<MetricMention>,
}

impl ExtractionResult {
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.clone()).collect()
    }

    pub fn total_unique_skills(&self) -> usize {
        self.skills.len()
    }
}

/// Compiled extraction engine. Build once and reuse across analyses.
pub struct SkillExtractor {
    catalog: &'static Catalog,
    skill_matcher: AhoCorasick,
    skill_terms: Vec<String>,
    cert_patterns: Vec<Regex>,
    experience_patterns: Vec<Regex>,
    degree_patterns: Vec<Regex>,
    verb_patterns: Vec<(&'static str, Regex)>,
    metric_patterns: Vec<Regex>,
}

impl SkillExtractor {
    pub fn new(catalog: &'static Catalog) -> Result<Self> {
        let mut skill_terms = catalog.skill_universe();
        // Longest-first keeps ordering deterministic alongside the
        // leftmost-longest match kind.
        skill_terms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let skill_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&skill_terms)
            .map_err(|e| {
                ResumeInsightError::AnalysisFailed(format!("failed to build skill matcher: {}", e))
            })?;

        let compile = |patterns: &[&str]| -> Result<Vec<Regex>> {
            patterns
                .iter()
                .map(|p| {
                    Regex::new(p).map_err(|e| {
                        ResumeInsightError::AnalysisFailed(format!("invalid pattern '{}': {}", p, e))
                    })
                })
                .collect()
        };

        let cert_patterns = compile(&[
            r"(?i)\b(?:AWS|Azure|GCP|Google Cloud)\s+Certified\s+\w+",
            r"(?i)\b(?:PMP|CISSP|CEH|OSCP|Security\+|Network\+|A\+)",
            r"(?i)\b(?:CPA|CFA|CMA|SHRM-CP|SHRM-SCP|PHR|SPHR)",
            r"(?i)\b(?:Scrum Master|Product Owner|SAFe|Prince2)",
            r"(?i)\b(?:Six Sigma|Black Belt|Green Belt)",
            r"(?i)\b(?:Certified|Certification)\s+\w+",
        ])?;

        let experience_patterns = compile(&[
            r"(?i)(\d+)\+?\s*years?\s+(?:of\s+)?experience",
            r"(?i)experience\s+(?:of\s+)?(\d+)\+?\s*years?",
            r"(?i)(\d+)\+?\s*years?\s+(?:working|in)",
        ])?;

        let degree_patterns = compile(&[
            r"(?i)\b(Bachelor|BS|BA|B\.S\.|B\.A\.)\s+(?:of\s+)?(?:Science|Arts)?\s+in\s+([A-Za-z\s]+)",
            r"(?i)\b(Master|MS|MA|M\.S\.|M\.A\.|MBA)\s+(?:of\s+)?(?:Science|Arts|Business)?\s+in\s+([A-Za-z\s]+)",
            r"(?i)\b(Ph\.?D\.?|Doctorate)\s+in\s+([A-Za-z\s]+)",
            r"(?i)\b(Associate|AS|AA)\s+(?:of\s+)?(?:Science|Arts)?\s+in\s+([A-Za-z\s]+)",
        ])?;

        let verb_patterns = ACTION_VERBS
            .iter()
            .map(|verb| {
                Regex::new(&format!(r"\b{}\b", verb))
                    .map(|re| (*verb, re))
                    .map_err(|e| {
                        ResumeInsightError::AnalysisFailed(format!(
                            "invalid verb pattern '{}': {}",
                            verb, e
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let metric_patterns = compile(&[
            r"(?i)\d+(?:\.\d+)?%\s+(?:increase|decrease|improvement|reduction|growth)",
            r"(?i)(?:increased|increasing|decreased|decreasing|improved|improving|reduced|reducing|grew|growing)\s+(?:by\s+)?\d+(?:\.\d+)?%",
            r"(?i)\$\d+(?:,\d{3})*(?:\.\d+)?\s*(?:million|billion|thousand|M|B|K)?",
            r"(?i)\d+(?:,\d{3})*\s+(?:users|customers|clients|projects|features|products)",
            r"(?i)(?:from|to)\s+\d+(?:,\d{3})*",
        ])?;

        Ok(Self {
            catalog,
            skill_matcher,
            skill_terms,
            cert_patterns,
            experience_patterns,
            degree_patterns,
            verb_patterns,
            metric_patterns,
        })
    }

    /// Run every sub-extraction over the resume text.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let (skills, high_confidence_skills) = self.extract_skills(text);

        ExtractionResult {
            skills,
            high_confidence_skills,
            certifications: self.extract_certifications(text),
            experience: self.extract_experience_years(text),
            education: self.extract_education(text),
            action_verbs: self.extract_action_verbs(text),
            metrics: self.extract_metrics(text),
        }
    }

    fn extract_skills(&self, text: &str) -> (Vec<SkillMention>, Vec<String>) {
        let mut found: HashMap<String, SkillMention> = HashMap::new();

        for m in self.skill_matcher.find_iter(text) {
            if !is_whole_word(text, m.start(), m.end()) {
                continue;
            }

            let term = &self.skill_terms[m.pattern().as_usize()];
            let canonical = self.catalog.synonyms().canonicalize(term).to_string();
            let context = snippet(text, m.start(), m.end(), CONTEXT_RADIUS);

            let entry = found.entry(canonical.clone()).or_insert_with(|| SkillMention {
                name: canonical,
                count: 0,
                contexts: Vec::new(),
                confidence: 0.0,
            });
            entry.count += 1;
            if entry.contexts.len() < MAX_CONTEXTS_PER_SKILL {
                entry.contexts.push(context);
            }
        }

        let mut skills: Vec<SkillMention> = found.into_values().collect();
        for skill in &mut skills {
            let base = (skill.count as f64 * 0.2).min(1.0);
            let boost = if skill.contexts.iter().any(|c| {
                let lower = c.to_lowercase();
                SECTION_BOOST_KEYWORDS.iter().any(|k| lower.contains(k))
            }) {
                0.3
            } else {
                0.0
            };
            skill.confidence = (base + boost).min(1.0);
        }

        skills.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
                .then(b.count.cmp(&a.count))
                .then(a.name.cmp(&b.name))
        });

        let high_confidence = skills
            .iter()
            .filter(|s| s.confidence > HIGH_CONFIDENCE_THRESHOLD)
            .map(|s| s.name.clone())
            .collect();

        (skills, high_confidence)
    }

    fn extract_certifications(&self, text: &str) -> Vec<String> {
        let mut certifications: Vec<String> = self
            .cert_patterns
            .iter()
            .flat_map(|p| p.find_iter(text).map(|m| m.as_str().to_string()))
            .collect();
        certifications.sort();
        certifications.dedup();
        certifications
    }

    fn extract_experience_years(&self, text: &str) -> ExperienceYears {
        let years: Vec<u32> = self
            .experience_patterns
            .iter()
            .flat_map(|p| {
                p.captures_iter(text)
                    .filter_map(|c| c.get(1).and_then(|m| m.as_str().parse().ok()))
            })
            .collect();

        if years.is_empty() {
            return ExperienceYears::default();
        }

        let sum: u32 = years.iter().sum();
        ExperienceYears {
            max_years: *years.iter().max().unwrap_or(&0),
            min_years: *years.iter().min().unwrap_or(&0),
            avg_years: sum / years.len() as u32,
        }
    }

    fn extract_education(&self, text: &str) -> Vec<EducationRecord> {
        let mut education = Vec::new();
        for pattern in &self.degree_patterns {
            for captures in pattern.captures_iter(text) {
                let degree = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
                let major = captures
                    .get(2)
                    .map(|m| m.as_str().trim())
                    .unwrap_or("Unknown");
                education.push(EducationRecord {
                    degree: degree.to_string(),
                    major: major.to_string(),
                });
            }
        }
        education
    }

    fn extract_action_verbs(&self, text: &str) -> Vec<VerbUsage> {
        let lower = text.to_lowercase();
        let mut usage: Vec<VerbUsage> = self
            .verb_patterns
            .iter()
            .filter_map(|(verb, pattern)| {
                let count = pattern.find_iter(&lower).count();
                (count > 0).then(|| VerbUsage {
                    verb: verb.to_string(),
                    count,
                })
            })
            .collect();
        // Stable: ties keep the fixed verb-list order.
        usage.sort_by(|a, b| b.count.cmp(&a.count));
        usage
    }

    fn extract_metrics(&self, text: &str) -> Vec<MetricMention> {
        let mut metrics = Vec::new();
        for pattern in &self.metric_patterns {
            for m in pattern.find_iter(text) {
                metrics.push(MetricMention {
                    metric: m.as_str().to_string(),
                    context: snippet(text, m.start(), m.end(), METRIC_CONTEXT_RADIUS),
                });
                if metrics.len() >= MAX_METRICS {
                    return metrics;
                }
            }
        }
        metrics
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whole-word check for an automaton match: an alphanumeric match edge must
/// not touch an adjacent alphanumeric byte.
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    if is_word_byte(bytes[start]) && start > 0 && is_word_byte(bytes[start - 1]) {
        return false;
    }
    if is_word_byte(bytes[end - 1]) && end < bytes.len() && is_word_byte(bytes[end]) {
        return false;
    }
    true
}

/// Trimmed context window around a byte range, snapped to char boundaries.
fn snippet(text: &str, start: usize, end: usize, radius: usize) -> String {
    let mut lo = start.saturating_sub(radius);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + radius).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    text[lo..hi].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(catalog::builtin()).unwrap()
    }

    #[test]
    fn finds_skills_with_word_boundaries() {
        let ex = extractor();
        let result = ex.extract("Experienced in Python and SQL. Wrote Javadoc comments.");
        let names = result.skill_names();
        assert!(names.iter().any(|n| n == "python"));
        assert!(names.iter().any(|n| n == "sql"));
        // "Javadoc" must not produce a "java" mention
        assert!(!names.iter().any(|n| n == "java"));
    }

    #[test]
    fn longest_skill_wins_over_prefix() {
        let ex = extractor();
        let result = ex.extract("Deep knowledge of machine learning and javascript.");
        let names = result.skill_names();
        assert!(names.iter().any(|n| n == "machine learning"));
        assert!(names.iter().any(|n| n == "javascript"));
        assert!(!names.iter().any(|n| n == "java"));
    }

    #[test]
    fn synonyms_normalize_to_canonical() {
        let ex = extractor();
        let result = ex.extract("Deployed services on k8s with containerization.");
        let names = result.skill_names();
        assert!(names.iter().any(|n| n == "kubernetes"));
        assert!(names.iter().any(|n| n == "docker"));
    }

    #[test]
    fn confidence_boosted_inside_skills_section() {
        let ex = extractor();
        let result = ex.extract("Technical Skills: Python, SQL, Docker");
        let python = result.skills.iter().find(|s| s.name == "python").unwrap();
        // One mention (0.2) plus section boost (0.3)
        assert!((python.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn repeated_mentions_raise_confidence_to_cap() {
        let ex = extractor();
        let text = "python ".repeat(10);
        let result = ex.extract(&text);
        let python = result.skills.iter().find(|s| s.name == "python").unwrap();
        assert_eq!(python.count, 10);
        assert!((python.confidence - 1.0).abs() < 1e-9);
        assert_eq!(python.contexts.len(), 3);
        assert!(result.high_confidence_skills.contains(&"python".to_string()));
    }

    #[test]
    fn extracts_certifications() {
        let ex = extractor();
        let certs =
            ex.extract_certifications("AWS Certified Developer, PMP, and a Scrum Master cert.");
        assert!(certs.iter().any(|c| c == "AWS Certified Developer"));
        assert!(certs.iter().any(|c| c == "PMP"));
        assert!(certs.iter().any(|c| c == "Scrum Master"));
    }

    #[test]
    fn extracts_experience_years() {
        let ex = extractor();
        let years = ex.extract_experience_years("5+ years of experience; 3 years in fintech.");
        assert_eq!(years.max_years, 5);
        assert_eq!(years.min_years, 3);
        assert_eq!(years.avg_years, 4);
    }

    #[test]
    fn no_experience_patterns_yield_zeroes() {
        let ex = extractor();
        assert_eq!(
            ex.extract_experience_years("No numbers here."),
            ExperienceYears::default()
        );
    }

    #[test]
    fn extracts_education_records() {
        let ex = extractor();
        let education = ex.extract_education("Bachelor of Science in Computer Engineering");
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "Bachelor");
        assert_eq!(education[0].major, "Computer Engineering");
    }

    #[test]
    fn action_verbs_sorted_by_count() {
        let ex = extractor();
        let verbs =
            ex.extract_action_verbs("Built x. Built y. Developed z. Managed team. managed infra.");
        assert_eq!(verbs[0].verb, "built");
        assert_eq!(verbs[0].count, 2);
        assert!(verbs.iter().all(|v| v.count > 0));
    }

    #[test]
    fn metrics_capture_percentages_and_cap_at_ten() {
        let ex = extractor();
        let metrics = ex.extract_metrics("Reduced latency by 35% and saved $50,000 annually.");
        assert!(metrics.iter().any(|m| m.metric.contains("35%")));
        assert!(metrics.iter().any(|m| m.metric.contains("$50,000")));

        let many = "increased throughput by 5%. ".repeat(20);
        assert_eq!(ex.extract_metrics(&many).len(), 10);
    }

    #[test]
    fn gerund_metric_forms_match() {
        let ex = extractor();
        let metrics = ex.extract_metrics("reducing processing time by 35%");
        assert!(metrics.iter().any(|m| m.metric.contains("35%")));
    }

    #[test]
    fn extraction_is_deterministic() {
        let ex = extractor();
        let text = "Skills: python, js, sql, docker, k8s, aws. Built and deployed ETL jobs.";
        let a = ex.extract(text);
        let b = ex.extract(text);
        assert_eq!(a.skill_names(), b.skill_names());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
