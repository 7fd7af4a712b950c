//! Job description matching
//!
//! Compares resume content against a supplied job description: keyword
//! overlap (60% of the score), skill overlap (40%), must-have vs
//! nice-to-have classification of gaps, and section alignment checks.

use crate::analysis::ats::round2;
use crate::error::{Result, ResumeInsightError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A job description shorter than this (trimmed) is treated as absent.
pub const MIN_JD_CHARS: usize = 30;

const MAX_MATCHED_KEYWORDS: usize = 20;
const MAX_MISSING_KEYWORDS: usize = 15;
const MAX_MISSING_SKILLS: usize = 10;
const MAX_RECOMMENDATIONS: usize = 8;
const MAX_TAILORED_TIPS: usize = 5;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "as", "is", "was", "are", "were", "be",
    "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "should", "could", "may", "might", "must", "can", "this",
    "that", "these", "those", "i", "you", "he", "she", "it", "we", "they",
    "who", "what", "where", "when", "why", "how", "all", "each", "every",
    "both", "few", "more", "most", "other", "some", "such", "than", "too",
    "very", "our", "your", "their",
];

const TECH_KEYWORDS: &[&str] = &[
    "python", "java", "javascript", "sql", "aws", "azure", "gcp",
    "docker", "kubernetes", "react", "angular", "node", "git",
    "machine learning", "data science", "analytics", "tableau",
    "power bi", "excel", "agile", "scrum", "jira",
];

const MUST_HAVE_INDICATORS: &[&str] = &[
    "required", "must have", "must be", "essential", "mandatory", "critical", "minimum",
];

const NICE_TO_HAVE_INDICATORS: &[&str] = &[
    "preferred", "nice to have", "bonus", "plus", "desired", "advantageous", "beneficial",
];

/// Requirement categories checked for resume/JD alignment, with the phrases
/// that signal each one.
const ALIGNMENT_CATEGORIES: &[(&str, &[&str])] = &[
    ("experience", &["years of experience", "experience in", "experience with"]),
    ("education", &["degree in", "bachelor", "master", "phd"]),
    ("certifications", &["certified", "certification", "license"]),
    ("leadership", &["lead", "manage", "supervise", "mentor"]),
    ("projects", &["project", "portfolio", "built", "developed"]),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JdBreakdown {
    pub keyword_match: f64,
    pub skill_match: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionAlignment {
    pub requirement: String,
    pub present_in_resume: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoverageCounts {
    pub matched: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdMatchResult {
    pub match_score: f64,
    pub grade: String,
    pub breakdown: JdBreakdown,
    pub matched_skills: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub missing_must_have: Vec<String>,
    pub missing_nice_to_have: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub section_alignment: Vec<SectionAlignment>,
    pub recommendations: Vec<String>,
    pub tailored_tips: Vec<String>,
    pub skill_coverage: CoverageCounts,
    pub keyword_coverage: CoverageCounts,
}

pub struct JdMatcher {
    non_alpha: Regex,
    skill_label_patterns: Vec<Regex>,
}

impl JdMatcher {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                ResumeInsightError::AnalysisFailed(format!("invalid pattern '{}': {}", pattern, e))
            })
        };

        let skill_label_patterns = [
            r"required skills?:?\s*([^\n]+)",
            r"qualifications?:?\s*([^\n]+)",
            r"experience (?:with|in):?\s*([^\n]+)",
            r"proficient (?:with|in):?\s*([^\n]+)",
            r"knowledge of:?\s*([^\n]+)",
        ]
        .iter()
        .map(|p| compile(p))
        .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            non_alpha: compile(r"[^a-zA-Z\s]")?,
            skill_label_patterns,
        })
    }

    /// Returns `None` when no usable job description was supplied.
    pub fn analyze(
        &self,
        resume_text: &str,
        jd_text: &str,
        extracted_skills: &[String],
    ) -> Option<JdMatchResult> {
        if jd_text.trim().chars().count() < MIN_JD_CHARS {
            return None;
        }

        let resume_keywords = self.extract_keywords(resume_text);
        let jd_keywords = self.extract_keywords(jd_text);
        let jd_skills = self.extract_jd_skills(jd_text);

        let matched_keywords: BTreeSet<String> =
            resume_keywords.intersection(&jd_keywords).cloned().collect();
        let missing_keywords: BTreeSet<String> =
            jd_keywords.difference(&resume_keywords).cloned().collect();

        let extracted: BTreeSet<String> = extracted_skills.iter().cloned().collect();
        let matched_skills: BTreeSet<String> =
            extracted.intersection(&jd_skills).cloned().collect();
        let missing_skills: BTreeSet<String> =
            jd_skills.difference(&extracted).cloned().collect();

        let keyword_score = match_score(matched_keywords.len(), jd_keywords.len());
        let skill_score = match_score(matched_skills.len(), jd_skills.len());
        let overall = keyword_score * 0.6 + skill_score * 0.4;

        let section_alignment = self.section_alignment(resume_text, jd_text);
        let recommendations = self.recommendations(
            overall,
            &missing_skills,
            &missing_keywords,
            &section_alignment,
        );
        let (must_have, nice_to_have) = self.categorize_requirements(jd_text, &missing_skills);
        let tailored_tips = self.tailored_tips(jd_text);

        Some(JdMatchResult {
            match_score: round2(overall),
            grade: match_grade(overall).to_string(),
            breakdown: JdBreakdown {
                keyword_match: round2(keyword_score),
                skill_match: round2(skill_score),
            },
            matched_skills: matched_skills.iter().cloned().collect(),
            matched_keywords: matched_keywords
                .iter()
                .take(MAX_MATCHED_KEYWORDS)
                .cloned()
                .collect(),
            missing_must_have: must_have.into_iter().take(MAX_MISSING_SKILLS).collect(),
            missing_nice_to_have: nice_to_have
                .into_iter()
                .take(MAX_MISSING_SKILLS)
                .collect(),
            missing_keywords: missing_keywords
                .iter()
                .take(MAX_MISSING_KEYWORDS)
                .cloned()
                .collect(),
            section_alignment,
            recommendations,
            tailored_tips,
            skill_coverage: CoverageCounts {
                matched: matched_skills.len(),
                total: jd_skills.len(),
            },
            keyword_coverage: CoverageCounts {
                matched: matched_keywords.len(),
                total: jd_keywords.len(),
            },
        })
    }

    /// Alphabetic tokens longer than three characters, minus stop words.
    fn extract_keywords(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        let cleaned = self.non_alpha.replace_all(&lowered, " ");
        cleaned
            .split_whitespace()
            .filter(|word| word.len() > 3 && !STOP_WORDS.contains(word))
            .map(|word| word.to_string())
            .collect()
    }

    fn extract_jd_skills(&self, jd_text: &str) -> BTreeSet<String> {
        let jd_lower = jd_text.to_lowercase();
        let mut skills = BTreeSet::new();

        for pattern in &self.skill_label_patterns {
            for captures in pattern.captures_iter(&jd_lower) {
                if let Some(list) = captures.get(1) {
                    for fragment in list.as_str().split(['\u{2022}', ',', ';', '\n']) {
                        let fragment = fragment.trim();
                        if fragment.len() > 2 && fragment.len() < 50 {
                            skills.insert(fragment.to_string());
                        }
                    }
                }
            }
        }

        for keyword in TECH_KEYWORDS {
            if jd_lower.contains(keyword) {
                skills.insert(keyword.to_string());
            }
        }

        skills
    }

    fn section_alignment(&self, resume_text: &str, jd_text: &str) -> Vec<SectionAlignment> {
        let jd_lower = jd_text.to_lowercase();
        let resume_lower = resume_text.to_lowercase();

        ALIGNMENT_CATEGORIES
            .iter()
            .filter(|(_, phrases)| phrases.iter().any(|p| jd_lower.contains(p)))
            .map(|(name, phrases)| SectionAlignment {
                requirement: name.to_string(),
                present_in_resume: phrases.iter().any(|p| resume_lower.contains(p)),
            })
            .collect()
    }

    /// Missing skills split by the strength of the language around their
    /// first occurrences in the JD. Absent any indicator, a skill defaults
    /// to nice-to-have.
    fn categorize_requirements(
        &self,
        jd_text: &str,
        missing_skills: &BTreeSet<String>,
    ) -> (Vec<String>, Vec<String>) {
        let jd_lower = jd_text.to_lowercase();
        let mut must_have = Vec::new();
        let mut nice_to_have = Vec::new();

        for skill in missing_skills {
            let pattern = format!(r"(?s).{{0,100}}{}.{{0,100}}", regex::escape(skill));
            let contexts: Vec<String> = match Regex::new(&pattern) {
                Ok(re) => re
                    .find_iter(&jd_lower)
                    .map(|m| m.as_str().to_string())
                    .collect(),
                Err(_) => Vec::new(),
            };

            let is_must_have = contexts.iter().any(|context| {
                MUST_HAVE_INDICATORS
                    .iter()
                    .any(|indicator| context.contains(indicator))
            });

            if is_must_have {
                must_have.push(skill.clone());
            } else {
                nice_to_have.push(skill.clone());
            }
        }

        (must_have, nice_to_have)
    }

    fn recommendations(
        &self,
        overall_score: f64,
        missing_skills: &BTreeSet<String>,
        missing_keywords: &BTreeSet<String>,
        section_alignment: &[SectionAlignment],
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if overall_score >= 80.0 {
            recommendations.push(
                "Excellent match! Your resume aligns well with this job description.".to_string(),
            );
        } else if overall_score >= 60.0 {
            recommendations
                .push("Good match! Address key gaps to strengthen your application.".to_string());
        } else if overall_score >= 40.0 {
            recommendations.push("Moderate match. Significant improvements needed.".to_string());
        } else {
            recommendations
                .push("Low match. Consider if this role aligns with your background.".to_string());
        }

        if !missing_skills.is_empty() {
            let top_missing: Vec<&str> = missing_skills
                .iter()
                .take(5)
                .map(|s| s.as_str())
                .collect();
            recommendations.push(format!("Develop these skills: {}", top_missing.join(", ")));
        }

        for alignment in section_alignment {
            if !alignment.present_in_resume {
                recommendations.push(format!(
                    "Add {} section highlighting relevant background.",
                    alignment.requirement
                ));
            }
        }

        if !missing_keywords.is_empty() {
            recommendations.push(
                "Incorporate more keywords from the job description naturally throughout your resume."
                    .to_string(),
            );
        }

        recommendations.push(
            "Tailor your resume: mirror language from the job description in your experience descriptions."
                .to_string(),
        );

        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }

    fn tailored_tips(&self, jd_text: &str) -> Vec<String> {
        let jd_lower = jd_text.to_lowercase();
        let mut tips = Vec::new();

        let culture_keywords: [(&str, &str); 5] = [
            ("innovative", "Highlight creative problem-solving and innovative projects"),
            ("collaborative", "Emphasize teamwork and cross-functional collaboration"),
            ("fast-paced", "Showcase ability to multitask and deliver under pressure"),
            ("data-driven", "Feature analytical projects with measurable outcomes"),
            ("customer-focused", "Demonstrate customer success stories and impact"),
        ];

        for (keyword, tip) in culture_keywords {
            if jd_lower.contains(keyword) {
                tips.push(format!("Company values '{}': {}", keyword, tip));
            }
        }

        if ["senior", "lead", "principal"].iter().any(|t| jd_lower.contains(t)) {
            tips.push(
                "Senior role: Emphasize leadership, mentoring, and strategic impact".to_string(),
            );
        } else if ["junior", "entry", "associate"].iter().any(|t| jd_lower.contains(t)) {
            tips.push(
                "Entry role: Focus on learning ability, projects, and foundational skills"
                    .to_string(),
            );
        }

        tips.truncate(MAX_TAILORED_TIPS);
        tips
    }
}

fn match_score(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (matched as f64 / total as f64) * 100.0
}

fn match_grade(score: f64) -> &'static str {
    if score >= 90.0 {
        "A+ (Excellent Match)"
    } else if score >= 80.0 {
        "A (Great Match)"
    } else if score >= 70.0 {
        "B (Good Match)"
    } else if score >= 60.0 {
        "C (Fair Match)"
    } else if score >= 50.0 {
        "D (Weak Match)"
    } else {
        "F (Poor Match)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> JdMatcher {
        JdMatcher::new().unwrap()
    }

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const JD: &str = "Senior Data Engineer position.\n\
                      Required skills: python, sql, airflow\n\
                      Experience with aws is essential.\n\
                      Knowledge of: docker, kubernetes\n\
                      Nice to have: tableau is a plus.\n\
                      We are a data-driven, collaborative team.";

    #[test]
    fn short_jd_returns_none() {
        let m = matcher();
        assert!(m.analyze("resume text", "", &[]).is_none());
        assert!(m.analyze("resume text", "   too short to matter   ", &[]).is_none());
        // 29 trimmed characters is still below the threshold
        let jd29: String = "x".repeat(29);
        assert!(m.analyze("resume", &jd29, &[]).is_none());
        let jd30: String = "x".repeat(30);
        assert!(m.analyze("resume", &jd30, &[]).is_some());
    }

    #[test]
    fn score_is_bounded_and_graded() {
        let result = matcher()
            .analyze("python sql aws docker experience", JD, &owned(&["python", "sql"]))
            .unwrap();
        assert!(result.match_score >= 0.0 && result.match_score <= 100.0);
        assert!(!result.grade.is_empty());
    }

    #[test]
    fn extracts_labeled_and_known_skills_from_jd() {
        let skills = matcher().extract_jd_skills(JD);
        assert!(skills.contains("python"));
        assert!(skills.contains("airflow"));
        assert!(skills.contains("kubernetes"));
        assert!(skills.contains("tableau"));
    }

    #[test]
    fn keyword_extraction_drops_stop_words_and_short_tokens() {
        let keywords = matcher().extract_keywords("We are the team that should hire you for SQL");
        assert!(keywords.contains("team"));
        assert!(keywords.contains("hire"));
        assert!(!keywords.contains("the"));
        assert!(!keywords.contains("sql")); // three characters
    }

    #[test]
    fn must_have_wins_over_nice_to_have() {
        // The indicator window is 100 characters per side, so the filler
        // line keeps the nice-to-have mention clear of "required".
        let jd = "Cloud Platform Engineer.\n\
                  Experience with aws is required and essential for this position.\n\
                  The team maintains a large fleet of services and values careful, \
                  well tested changes over quick fixes in day to day engineering work.\n\
                  Nice to have: tableau is a plus for reporting.";
        let result = matcher()
            .analyze("a resume with none of the wanted stack present here", jd, &[])
            .unwrap();
        assert!(result.missing_must_have.contains(&"aws".to_string()));
        assert!(result.missing_nice_to_have.contains(&"tableau".to_string()));
    }

    #[test]
    fn section_alignment_flags_missing_categories() {
        let result = matcher()
            .analyze(
                "Plain text without any experience phrasing or education words.",
                "We need 5 years of experience and a degree in engineering.",
                &[],
            )
            .unwrap();
        let experience = result
            .section_alignment
            .iter()
            .find(|a| a.requirement == "experience")
            .unwrap();
        assert!(!experience.present_in_resume);
    }

    #[test]
    fn tailored_tips_detect_culture_and_seniority() {
        let tips = matcher().tailored_tips(JD);
        assert!(tips.iter().any(|t| t.contains("data-driven")));
        assert!(tips.iter().any(|t| t.contains("Senior role")));
        assert!(tips.len() <= 5);
    }

    #[test]
    fn recommendations_are_capped() {
        let result = matcher()
            .analyze("nothing relevant here at all, sadly", JD, &[])
            .unwrap();
        assert!(result.recommendations.len() <= 8);
        assert!(!result.recommendations.is_empty());
    }
}
