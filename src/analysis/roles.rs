//! Role matching against the reference catalog
//!
//! Every catalog role is scored with a weighted multi-factor formula:
//! 40% technical skills, 25% tools, 15% soft skills, 10% certifications,
//! 10% experience.

use crate::analysis::ats::round2;
use crate::catalog::{Catalog, RoleRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

const MAX_CRITICAL_MISSING: usize = 5;
const MAX_MISSING: usize = 10;

const SKILL_WEIGHT: f64 = 0.40;
const TOOL_WEIGHT: f64 = 0.25;
const SOFT_SKILL_WEIGHT: f64 = 0.15;
const CERT_WEIGHT: f64 = 0.10;
const EXPERIENCE_WEIGHT: f64 = 0.10;

/// Qualitative confidence bucket for a role match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfidenceLevel::VeryHigh => "Very High",
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::VeryLow => "Very Low",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub technical_skills: f64,
    pub tools: f64,
    pub soft_skills: f64,
    pub certifications: f64,
    pub experience: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedSkills {
    pub technical: Vec<String>,
    pub tools: Vec<String>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingSkills {
    pub critical: Vec<String>,
    pub all: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchCounts {
    pub technical_matched: usize,
    pub technical_required: usize,
    pub tools_matched: usize,
    pub tools_required: usize,
    pub total_matched: usize,
    pub total_required: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role: String,
    pub category: String,
    pub overall_score: f64,
    pub confidence: ConfidenceLevel,
    pub breakdown: ScoreBreakdown,
    pub matched: MatchedSkills,
    pub missing: MissingSkills,
    pub counts: MatchCounts,
    /// Populated only for top matches.
    pub insights: Vec<String>,
}

pub struct RoleMatcher {
    catalog: &'static Catalog,
}

impl RoleMatcher {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    /// Score the resume against every catalog role. Returns exactly one
    /// match per role, sorted by non-increasing overall score.
    pub fn match_roles(
        &self,
        extracted_skills: &[String],
        experience_years: u32,
        certifications: &[String],
    ) -> Vec<RoleMatch> {
        let extracted: HashSet<String> =
            extracted_skills.iter().map(|s| s.to_lowercase()).collect();

        let mut matches: Vec<RoleMatch> = self
            .catalog
            .roles()
            .iter()
            .map(|role| self.score_role(role, &extracted, experience_years, certifications))
            .collect();

        matches.sort_by(|a, b| {
            b.overall_score
                .partial_cmp(&a.overall_score)
                .unwrap_or(Ordering::Equal)
        });

        matches
    }

    /// Take the leading matches and attach narrative insights to each.
    pub fn top_matches(&self, all_matches: &[RoleMatch], top_n: usize) -> Vec<RoleMatch> {
        all_matches
            .iter()
            .take(top_n)
            .map(|m| {
                let mut with_insights = m.clone();
                with_insights.insights = generate_insights(m);
                with_insights
            })
            .collect()
    }

    fn score_role(
        &self,
        role: &RoleRecord,
        extracted: &HashSet<String>,
        experience_years: u32,
        certifications: &[String],
    ) -> RoleMatch {
        let required_skills: BTreeSet<String> =
            role.skills.iter().map(|s| s.to_lowercase()).collect();
        let required_tools: BTreeSet<String> =
            role.tools.iter().map(|s| s.to_lowercase()).collect();
        let required_soft: BTreeSet<String> =
            role.soft_skills.iter().map(|s| s.to_lowercase()).collect();
        let preferred_certs: BTreeSet<String> = role
            .certifications
            .iter()
            .map(|c| c.to_lowercase())
            .collect();

        let skills_matched = self.match_with_synonyms(&required_skills, extracted);
        let tools_matched = self.match_with_synonyms(&required_tools, extracted);
        let soft_matched = self.match_with_synonyms(&required_soft, extracted);

        let skill_score = coverage_score(skills_matched.len(), required_skills.len()) * 100.0;
        let tool_score = coverage_score(tools_matched.len(), required_tools.len()) * 100.0;
        let soft_score = coverage_score(soft_matched.len(), required_soft.len()) * 100.0;
        let cert_score = certification_score(certifications, &preferred_certs);
        let experience_score = (experience_years as f64 * 10.0).min(100.0);

        let overall_score = skill_score * SKILL_WEIGHT
            + tool_score * TOOL_WEIGHT
            + soft_score * SOFT_SKILL_WEIGHT
            + cert_score * CERT_WEIGHT
            + experience_score * EXPERIENCE_WEIGHT;

        let confidence = confidence_level(
            skill_score,
            tool_score,
            skills_matched.len() + tools_matched.len(),
        );

        let all_required: BTreeSet<&String> =
            required_skills.iter().chain(&required_tools).collect();
        let all_matched: BTreeSet<&String> =
            skills_matched.iter().chain(&tools_matched).collect();
        let total_matched = all_matched.len();
        let total_required = all_required.len();
        let missing: Vec<String> = all_required
            .difference(&all_matched)
            .map(|s| s.to_string())
            .collect();

        let mut critical: Vec<String> = missing
            .iter()
            .filter(|skill| is_critical_skill(skill, &role.keywords))
            .cloned()
            .collect();
        critical.truncate(MAX_CRITICAL_MISSING);
        let mut all_missing = missing;
        all_missing.truncate(MAX_MISSING);

        RoleMatch {
            role: role.name.clone(),
            category: role.category.clone(),
            overall_score: round2(overall_score),
            confidence,
            breakdown: ScoreBreakdown {
                technical_skills: round2(skill_score),
                tools: round2(tool_score),
                soft_skills: round2(soft_score),
                certifications: round2(cert_score),
                experience: round2(experience_score),
            },
            counts: MatchCounts {
                technical_matched: skills_matched.len(),
                technical_required: required_skills.len(),
                tools_matched: tools_matched.len(),
                tools_required: required_tools.len(),
                total_matched,
                total_required,
            },
            matched: MatchedSkills {
                technical: skills_matched.into_iter().collect(),
                tools: tools_matched.into_iter().collect(),
                soft_skills: soft_matched.into_iter().collect(),
            },
            missing: MissingSkills {
                critical,
                all: all_missing,
            },
            insights: Vec::new(),
        }
    }

    /// A requirement matches when present directly, when one of its listed
    /// variants is present, or when it is itself a variant of a present
    /// canonical skill.
    fn match_with_synonyms(
        &self,
        required: &BTreeSet<String>,
        extracted: &HashSet<String>,
    ) -> BTreeSet<String> {
        let synonyms = self.catalog.synonyms();
        let mut matched = BTreeSet::new();

        for req in required {
            if extracted.contains(req) {
                matched.insert(req.clone());
                continue;
            }

            if let Some(variants) = synonyms.variants_of(req) {
                if variants.iter().any(|v| extracted.contains(v)) {
                    matched.insert(req.clone());
                    continue;
                }
            }

            let req_is_variant_of_present = extracted.iter().any(|ext| {
                synonyms
                    .variants_of(ext)
                    .is_some_and(|variants| variants.iter().any(|v| v == req))
            });
            if req_is_variant_of_present {
                matched.insert(req.clone());
            }
        }

        matched
    }
}

/// Coverage fraction in [0,1], with a small bonus when matches exceed the
/// requirement count. Empty requirements count as fully covered.
fn coverage_score(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 1.0;
    }
    let mut coverage = matched as f64 / required as f64;
    if matched > required {
        let bonus = ((matched - required) as f64 * 0.02).min(0.1);
        coverage = (coverage + bonus).min(1.0);
    }
    coverage
}

/// 50 is the neutral score when the role lists no certifications.
fn certification_score(user_certs: &[String], preferred: &BTreeSet<String>) -> f64 {
    if preferred.is_empty() {
        return 50.0;
    }

    let user_lower: Vec<String> = user_certs.iter().map(|c| c.to_lowercase()).collect();
    let matches = preferred
        .iter()
        .filter(|pref| user_lower.iter().any(|user| user.contains(pref.as_str())))
        .count();

    if matches == 0 {
        return 0.0;
    }
    ((matches as f64 / preferred.len() as f64) * 100.0).min(100.0)
}

fn confidence_level(skill_score: f64, tool_score: f64, total_matches: usize) -> ConfidenceLevel {
    let avg = (skill_score + tool_score) / 2.0;

    if avg >= 80.0 && total_matches >= 8 {
        ConfidenceLevel::VeryHigh
    } else if avg >= 60.0 && total_matches >= 5 {
        ConfidenceLevel::High
    } else if avg >= 40.0 && total_matches >= 3 {
        ConfidenceLevel::Medium
    } else if avg >= 20.0 {
        ConfidenceLevel::Low
    } else {
        ConfidenceLevel::VeryLow
    }
}

/// A missing skill is critical when it overlaps one of the role's free-text
/// keywords in either direction.
fn is_critical_skill(skill: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        keyword.contains(skill) || skill.contains(keyword.as_str())
    })
}

fn generate_insights(m: &RoleMatch) -> Vec<String> {
    let mut insights = Vec::new();

    if m.overall_score >= 80.0 {
        insights.push(format!("Excellent match for {}!", m.role));
    } else if m.overall_score >= 60.0 {
        insights.push(format!("Good match for {}.", m.role));
    } else if m.overall_score >= 40.0 {
        insights.push("Moderate match. Significant skill development needed.".to_string());
    } else {
        insights.push("Low match. Consider building foundational skills first.".to_string());
    }

    if m.breakdown.technical_skills < 50.0 {
        insights.push("Focus on building core technical skills for this role.".to_string());
    }
    if m.breakdown.tools < 50.0 {
        insights.push("Gain hands-on experience with industry-standard tools.".to_string());
    }
    if m.breakdown.certifications < 30.0 {
        insights.push("Consider relevant certifications to boost credibility.".to_string());
    }

    if m.breakdown.technical_skills >= 70.0 {
        insights.push("Strong technical foundation for this role!".to_string());
    }
    if m.breakdown.tools >= 70.0 {
        insights.push("Good familiarity with relevant tools and technologies!".to_string());
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn matcher() -> RoleMatcher {
        RoleMatcher::new(catalog::builtin())
    }

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn returns_one_match_per_role_sorted() {
        let matches = matcher().match_roles(&owned(&["python", "sql"]), 3, &[]);
        assert_eq!(matches.len(), catalog::builtin().roles().len());
        for pair in matches.windows(2) {
            assert!(pair[0].overall_score >= pair[1].overall_score);
        }
    }

    #[test]
    fn zero_skills_give_zero_coverage() {
        let matches = matcher().match_roles(&[], 0, &[]);
        for m in &matches {
            if m.counts.technical_required > 0 {
                assert_eq!(m.breakdown.technical_skills, 0.0);
            }
            if m.counts.tools_required > 0 {
                assert_eq!(m.breakdown.tools, 0.0);
            }
        }
    }

    #[test]
    fn synonym_matching_is_symmetric() {
        let m = matcher();
        // "js" is a variant of "javascript"; a role requiring javascript
        // must accept a resume listing only js
        let via_variant = m.match_roles(&owned(&["js"]), 0, &[]);
        let engineer = via_variant
            .iter()
            .find(|r| r.role == "Software Engineer")
            .unwrap();
        assert!(engineer
            .matched
            .technical
            .contains(&"javascript".to_string()));

        let via_canonical = m.match_roles(&owned(&["javascript"]), 0, &[]);
        let engineer = via_canonical
            .iter()
            .find(|r| r.role == "Software Engineer")
            .unwrap();
        assert!(engineer
            .matched
            .technical
            .contains(&"javascript".to_string()));
    }

    #[test]
    fn experience_score_caps_at_100() {
        let matches = matcher().match_roles(&[], 25, &[]);
        assert!(matches.iter().all(|m| m.breakdown.experience == 100.0));
    }

    #[test]
    fn neutral_cert_score_when_role_requires_none() {
        assert_eq!(certification_score(&[], &BTreeSet::new()), 50.0);
    }

    #[test]
    fn cert_substring_matching() {
        let preferred: BTreeSet<String> =
            ["aws certified developer".to_string()].into_iter().collect();
        let score = certification_score(&owned(&["AWS Certified Developer Associate"]), &preferred);
        assert_eq!(score, 100.0);
        assert_eq!(certification_score(&owned(&["PMP"]), &preferred), 0.0);
    }

    #[test]
    fn confidence_thresholds() {
        assert_eq!(confidence_level(90.0, 85.0, 9), ConfidenceLevel::VeryHigh);
        assert_eq!(confidence_level(70.0, 60.0, 5), ConfidenceLevel::High);
        assert_eq!(confidence_level(45.0, 40.0, 3), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(25.0, 20.0, 0), ConfidenceLevel::Low);
        assert_eq!(confidence_level(5.0, 0.0, 0), ConfidenceLevel::VeryLow);
    }

    #[test]
    fn missing_lists_respect_caps() {
        let matches = matcher().match_roles(&[], 0, &[]);
        for m in &matches {
            assert!(m.missing.critical.len() <= 5);
            assert!(m.missing.all.len() <= 10);
        }
    }

    #[test]
    fn top_matches_carry_insights() {
        let m = matcher();
        let all = m.match_roles(&owned(&["python", "sql", "excel"]), 2, &[]);
        let top = m.top_matches(&all, 5);
        assert_eq!(top.len(), 5);
        assert!(top.iter().all(|t| !t.insights.is_empty()));
        assert!(all.iter().all(|t| t.insights.is_empty()));
    }

    #[test]
    fn coverage_bonus_is_bounded() {
        assert_eq!(coverage_score(0, 0), 1.0);
        assert!((coverage_score(3, 6) - 0.5).abs() < 1e-9);
        assert!(coverage_score(12, 6) <= 1.0);
    }
}
