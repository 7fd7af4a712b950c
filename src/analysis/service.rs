//! Orchestration of the full analysis pipeline
//!
//! Runs extraction, section detection, ATS scoring, role matching, and
//! optional JD matching, then folds everything into one immutable report
//! with an aggregate health score and cross-cutting recommendations.

use crate::analysis::ats::{round2, AtsResult, AtsScorer};
use crate::analysis::extractor::{
    EducationRecord, ExtractionResult, MetricMention, SkillExtractor, SkillMention, VerbUsage,
};
use crate::analysis::jd::{JdMatcher, JdMatchResult};
use crate::analysis::roles::{ConfidenceLevel, RoleMatch, RoleMatcher};
use crate::analysis::sections::SectionPresence;
use crate::catalog::Catalog;
use crate::error::Result;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MAX_OVERALL_RECOMMENDATIONS: usize = 10;
const MAX_DISPLAYED_VERBS: usize = 15;
const TOP_MATCHES_PER_CATEGORY: usize = 3;

/// Default number of top role matches shown in reports.
pub const DEFAULT_TOP_MATCHES: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeHealth {
    pub overall_score: f64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsSummary {
    pub extracted_skills: Vec<String>,
    pub skill_details: Vec<SkillMention>,
    pub total_skills: usize,
    pub high_confidence_skills: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceSummary {
    pub max_years: u32,
    pub min_years: u32,
    pub avg_years: u32,
    pub education: Vec<EducationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub role: String,
    pub score: f64,
    pub confidence: ConfidenceLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMatchingSummary {
    pub top_matches: Vec<RoleMatch>,
    /// Top matches per industry category.
    pub categories: BTreeMap<String, Vec<CategoryMatch>>,
    pub best_fit: Option<RoleMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSummary {
    pub action_verbs: Vec<VerbUsage>,
    pub metrics: Vec<MetricMention>,
    pub sections: SectionPresence,
    pub total_action_verbs: usize,
    pub total_metrics: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityAction {
    pub priority: String,
    pub action: String,
    pub description: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub category: String,
    pub insight: String,
    pub impact: String,
    pub detail: String,
}

/// The complete analysis output, built once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub health: ResumeHealth,
    pub ats: AtsResult,
    pub skills: SkillsSummary,
    pub experience: ExperienceSummary,
    pub role_matching: RoleMatchingSummary,
    pub content: ContentSummary,
    pub jd_match: Option<JdMatchResult>,
    pub recommendations: Vec<String>,
    pub priority_actions: Vec<PriorityAction>,
    pub insights: Vec<Insight>,
}

/// Full pipeline, compiled once and reusable across analyses.
pub struct AnalysisService {
    extractor: SkillExtractor,
    ats_scorer: AtsScorer,
    role_matcher: RoleMatcher,
    jd_matcher: JdMatcher,
    top_matches: usize,
}

impl AnalysisService {
    pub fn new(catalog: &'static Catalog) -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new(catalog)?,
            ats_scorer: AtsScorer::new()?,
            role_matcher: RoleMatcher::new(catalog),
            jd_matcher: JdMatcher::new()?,
            top_matches: DEFAULT_TOP_MATCHES,
        })
    }

    pub fn with_top_matches(mut self, top_matches: usize) -> Self {
        self.top_matches = top_matches.max(1);
        self
    }

    /// Analyze resume text, optionally against a job description.
    pub fn analyze(&self, resume_text: &str, job_description: Option<&str>) -> AnalysisReport {
        debug!("extracting entities from {} bytes of text", resume_text.len());
        let extraction = self.extractor.extract(resume_text);
        let sections = SectionPresence::detect(resume_text);

        let skill_names = extraction.skill_names();
        let ats = self.ats_scorer.score(
            resume_text,
            skill_names.len(),
            &sections,
            &extraction.action_verbs,
            &extraction.metrics,
        );

        let all_matches = self.role_matcher.match_roles(
            &skill_names,
            extraction.experience.max_years,
            &extraction.certifications,
        );
        let top_matches = self.role_matcher.top_matches(&all_matches, self.top_matches);
        debug!("scored {} roles, best: {:?}", all_matches.len(), top_matches.first().map(|m| &m.role));

        let jd_match = job_description
            .and_then(|jd| self.jd_matcher.analyze(resume_text, jd, &skill_names));

        let health = health_score(
            ats.overall_score,
            skill_names.len(),
            extraction.action_verbs.len(),
            extraction.metrics.len(),
            &sections,
        );

        let recommendations =
            overall_recommendations(&ats, &top_matches, skill_names.len(), jd_match.as_ref());
        let priority_actions =
            priority_actions(&ats, skill_names.len(), jd_match.as_ref());
        let insights = generate_insights(&ats, &top_matches, skill_names.len(), &extraction);

        let mut displayed_verbs = extraction.action_verbs.clone();
        displayed_verbs.truncate(MAX_DISPLAYED_VERBS);

        AnalysisReport {
            generated_at: Utc::now(),
            health: ResumeHealth {
                status: health_status(health).to_string(),
                overall_score: health,
            },
            ats,
            skills: SkillsSummary {
                extracted_skills: skill_names,
                total_skills: extraction.skills.len(),
                skill_details: extraction.skills.clone(),
                high_confidence_skills: extraction.high_confidence_skills.clone(),
                certifications: extraction.certifications.clone(),
            },
            experience: ExperienceSummary {
                max_years: extraction.experience.max_years,
                min_years: extraction.experience.min_years,
                avg_years: extraction.experience.avg_years,
                education: extraction.education.clone(),
            },
            role_matching: RoleMatchingSummary {
                best_fit: top_matches.first().cloned(),
                categories: group_by_category(&all_matches),
                top_matches,
            },
            content: ContentSummary {
                action_verbs: displayed_verbs,
                metrics: extraction.metrics.clone(),
                sections,
                total_action_verbs: extraction.action_verbs.len(),
                total_metrics: extraction.metrics.len(),
            },
            jd_match,
            recommendations,
            priority_actions,
            insights,
        }
    }
}

/// Weighted aggregate: ATS 40%, skills 25%, verbs 10%, metrics 10%,
/// required-section completeness 15%.
fn health_score(
    ats_score: f64,
    skill_count: usize,
    verb_count: usize,
    metric_count: usize,
    sections: &SectionPresence,
) -> f64 {
    let ats_component = (ats_score / 100.0) * 40.0;
    let skill_component = (skill_count as f64 / 15.0).min(1.0) * 25.0;
    let verb_component = (verb_count as f64 / 10.0).min(1.0) * 10.0;
    let metric_component = (metric_count as f64 / 5.0).min(1.0) * 10.0;
    let completeness = (sections.required_present() as f64 / 3.0) * 15.0;

    round2(ats_component + skill_component + verb_component + metric_component + completeness)
}

fn health_status(score: f64) -> &'static str {
    if score >= 85.0 {
        "Excellent"
    } else if score >= 70.0 {
        "Good"
    } else if score >= 55.0 {
        "Fair"
    } else {
        "Needs Improvement"
    }
}

fn overall_recommendations(
    ats: &AtsResult,
    top_matches: &[RoleMatch],
    skill_count: usize,
    jd_match: Option<&JdMatchResult>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if ats.overall_score < 70.0 {
        recommendations.extend(ats.priority_improvements.iter().take(2).cloned());
    }

    if let Some(best) = top_matches.first() {
        if best.overall_score < 70.0 && !best.missing.critical.is_empty() {
            let gaps: Vec<&str> = best
                .missing
                .critical
                .iter()
                .take(3)
                .map(|s| s.as_str())
                .collect();
            recommendations.push(format!(
                "To better match {}: Add {}",
                best.role,
                gaps.join(", ")
            ));
        }
    }

    if skill_count < 10 {
        recommendations
            .push("Expand skill set: Add 5-8 more relevant technical skills".to_string());
    }

    if let Some(jd) = jd_match {
        if jd.match_score < 70.0 && !jd.missing_must_have.is_empty() {
            let gaps: Vec<&str> = jd
                .missing_must_have
                .iter()
                .take(3)
                .map(|s| s.as_str())
                .collect();
            recommendations.push(format!(
                "Critical JD requirements missing: {}",
                gaps.join(", ")
            ));
        }
    }

    recommendations.truncate(MAX_OVERALL_RECOMMENDATIONS);
    recommendations
}

fn priority_actions(
    ats: &AtsResult,
    skill_count: usize,
    jd_match: Option<&JdMatchResult>,
) -> Vec<PriorityAction> {
    let mut actions = Vec::new();

    if ats.overall_score < 60.0 {
        actions.push(PriorityAction {
            priority: "CRITICAL".to_string(),
            action: "ATS Optimization".to_string(),
            description: "Your resume may not pass ATS screening".to_string(),
            steps: ats.priority_improvements.iter().take(2).cloned().collect(),
        });
    }

    if skill_count < 8 {
        actions.push(PriorityAction {
            priority: "HIGH".to_string(),
            action: "Expand Skills".to_string(),
            description: format!("Add {} more relevant skills", 8 - skill_count),
            steps: vec![
                "Research industry-standard tools".to_string(),
                "Include technologies from job postings".to_string(),
            ],
        });
    }

    if let Some(jd) = jd_match {
        if jd.match_score < 60.0 {
            actions.push(PriorityAction {
                priority: "HIGH".to_string(),
                action: "Tailor to Job Description".to_string(),
                description: "Resume doesn't align well with target role".to_string(),
                steps: jd.recommendations.iter().take(2).cloned().collect(),
            });
        }
    }

    actions
}

fn generate_insights(
    ats: &AtsResult,
    top_matches: &[RoleMatch],
    skill_count: usize,
    extraction: &ExtractionResult,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    insights.push(Insight {
        category: "ATS Compatibility".to_string(),
        insight: format!("Your resume scores {} for ATS systems", ats.grade),
        impact: if ats.overall_score >= 75.0 { "HIGH" } else { "CRITICAL" }.to_string(),
        detail: ats.feedback.clone(),
    });

    if let Some(best) = top_matches.first() {
        insights.push(Insight {
            category: "Best Role Fit".to_string(),
            insight: format!("Strongest match: {} ({} confidence)", best.role, best.confidence),
            impact: "MEDIUM".to_string(),
            detail: format!(
                "You have {}/{} relevant skills/tools",
                best.counts.total_matched, best.counts.total_required
            ),
        });
    }

    insights.push(Insight {
        category: "Skill Portfolio".to_string(),
        insight: format!("{} unique skills identified", skill_count),
        impact: "MEDIUM".to_string(),
        detail: "Aim for 12-15 relevant skills for competitive roles".to_string(),
    });

    if extraction.experience.max_years > 0 {
        insights.push(Insight {
            category: "Experience Level".to_string(),
            insight: format!(
                "~{} years of experience detected",
                extraction.experience.max_years
            ),
            impact: "LOW".to_string(),
            detail: "Ensure experience descriptions showcase growth and impact".to_string(),
        });
    }

    insights
}

fn group_by_category(matches: &[RoleMatch]) -> BTreeMap<String, Vec<CategoryMatch>> {
    let mut categories: BTreeMap<String, Vec<CategoryMatch>> = BTreeMap::new();

    for m in matches {
        categories
            .entry(m.category.clone())
            .or_default()
            .push(CategoryMatch {
                role: m.role.clone(),
                score: m.overall_score,
                confidence: m.confidence,
            });
    }

    for entries in categories.values_mut() {
        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries.truncate(TOP_MATCHES_PER_CATEGORY);
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn service() -> AnalysisService {
        AnalysisService::new(catalog::builtin()).unwrap()
    }

    const RESUME: &str = "\
Jane Doe\n\
email: jane@example.com | 555-123-4567 | linkedin.com/in/janedoe\n\
\n\
Summary: Data engineer with 6 years of experience.\n\
\n\
Experience\n\
• Built and deployed Python ETL pipelines on AWS, reducing runtime by 40%\n\
• Developed SQL models serving 2,000 users\n\
• Led migration to docker and kubernetes\n\
\n\
Education: Bachelor of Science in Computer Science\n\
\n\
Skills: python, sql, aws, docker, kubernetes, airflow, spark, git, tableau\n";

    #[test]
    fn full_pipeline_produces_consistent_report() {
        let report = service().analyze(RESUME, None);

        assert!(report.health.overall_score >= 0.0 && report.health.overall_score <= 100.0);
        assert!(report.ats.overall_score <= 100.0);
        assert!(report.skills.total_skills > 5);
        assert_eq!(report.experience.max_years, 6);
        assert!(report.jd_match.is_none());
        assert_eq!(
            report.role_matching.top_matches.len(),
            DEFAULT_TOP_MATCHES
        );
        assert!(report.role_matching.best_fit.is_some());
        assert!(report.content.total_action_verbs >= 3);
    }

    #[test]
    fn health_score_stays_in_bounds() {
        let sections = SectionPresence::detect("experience education skills");
        assert_eq!(health_score(100.0, 100, 100, 100, &sections), 100.0);
        let none = SectionPresence::detect("");
        assert_eq!(health_score(0.0, 0, 0, 0, &none), 0.0);
    }

    #[test]
    fn health_status_tiers() {
        assert_eq!(health_status(90.0), "Excellent");
        assert_eq!(health_status(72.0), "Good");
        assert_eq!(health_status(60.0), "Fair");
        assert_eq!(health_status(20.0), "Needs Improvement");
    }

    #[test]
    fn jd_match_included_when_supplied() {
        let jd = "Required skills: python, sql, aws\nExperience with docker is essential.";
        let report = service().analyze(RESUME, Some(jd));
        let jd_result = report.jd_match.unwrap();
        assert!(jd_result.match_score > 0.0);
        assert!(jd_result.matched_skills.contains(&"python".to_string()));
    }

    #[test]
    fn sparse_resume_triggers_priority_actions() {
        let report = service().analyze("Just a couple of plain words here.", None);
        assert!(report
            .priority_actions
            .iter()
            .any(|a| a.priority == "CRITICAL" && a.action == "ATS Optimization"));
        assert!(report
            .priority_actions
            .iter()
            .any(|a| a.action == "Expand Skills"));
    }

    #[test]
    fn categories_cap_at_three_entries() {
        let report = service().analyze(RESUME, None);
        assert!(!report.role_matching.categories.is_empty());
        assert!(report
            .role_matching
            .categories
            .values()
            .all(|v| v.len() <= 3 && !v.is_empty()));
    }

    #[test]
    fn scores_are_deterministic_across_runs() {
        let svc = service();
        let a = svc.analyze(RESUME, Some("Required skills: python, sql, spark and more."));
        let b = svc.analyze(RESUME, Some("Required skills: python, sql, spark and more."));
        assert_eq!(a.health.overall_score, b.health.overall_score);
        assert_eq!(a.ats.overall_score, b.ats.overall_score);
        assert_eq!(a.skills.extracted_skills, b.skills.extracted_skills);
        assert_eq!(
            serde_json::to_string(&a.role_matching).unwrap(),
            serde_json::to_string(&b.role_matching).unwrap()
        );
    }
}
