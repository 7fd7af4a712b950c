//! Resume section detection via keyword presence

use serde::{Deserialize, Serialize};

const CONTACT_KEYWORDS: &[&str] = &["email", "phone", "linkedin", "github", "portfolio"];
const SUMMARY_KEYWORDS: &[&str] = &["summary", "profile", "objective", "about"];
const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "professional experience",
];
const EDUCATION_KEYWORDS: &[&str] = &["education", "academic", "degree", "university", "college"];
const SKILLS_KEYWORDS: &[&str] = &[
    "skills",
    "technical skills",
    "core competencies",
    "expertise",
];
const PROJECTS_KEYWORDS: &[&str] = &["projects", "portfolio", "key projects"];
const CERTIFICATIONS_KEYWORDS: &[&str] = &["certifications", "licenses", "credentials"];
const AWARDS_KEYWORDS: &[&str] = &["awards", "honors", "achievements", "recognition"];

/// Which of the eight standard resume sections are present.
///
/// Detection is a pure substring presence test on the lower-cased text.
/// No positional or structural parsing is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub contact: bool,
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub projects: bool,
    pub certifications: bool,
    pub awards: bool,
}

impl SectionPresence {
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        let has = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        Self {
            contact: has(CONTACT_KEYWORDS),
            summary: has(SUMMARY_KEYWORDS),
            experience: has(EXPERIENCE_KEYWORDS),
            education: has(EDUCATION_KEYWORDS),
            skills: has(SKILLS_KEYWORDS),
            projects: has(PROJECTS_KEYWORDS),
            certifications: has(CERTIFICATIONS_KEYWORDS),
            awards: has(AWARDS_KEYWORDS),
        }
    }

    /// Sections ATS systems expect on every resume.
    pub const REQUIRED: [&'static str; 3] = ["experience", "education", "skills"];

    /// Sections that strengthen a resume but are not mandatory.
    pub const RECOMMENDED: [&'static str; 3] = ["summary", "projects", "certifications"];

    fn get(&self, name: &str) -> bool {
        match name {
            "contact" => self.contact,
            "summary" => self.summary,
            "experience" => self.experience,
            "education" => self.education,
            "skills" => self.skills,
            "projects" => self.projects,
            "certifications" => self.certifications,
            "awards" => self.awards,
            _ => false,
        }
    }

    pub fn required_present(&self) -> usize {
        Self::REQUIRED.iter().filter(|&&s| self.get(s)).count()
    }

    pub fn recommended_present(&self) -> usize {
        Self::RECOMMENDED.iter().filter(|&&s| self.get(s)).count()
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        Self::REQUIRED
            .iter()
            .filter(|&&s| !self.get(s))
            .copied()
            .collect()
    }

    pub fn missing_recommended(&self) -> Vec<&'static str> {
        Self::RECOMMENDED
            .iter()
            .filter(|&&s| !self.get(s))
            .copied()
            .collect()
    }
}
