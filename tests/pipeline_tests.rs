//! End-to-end tests for the analysis pipeline

use resume_insight::analysis::service::{AnalysisService, DEFAULT_TOP_MATCHES};
use resume_insight::catalog;
use resume_insight::input;

fn service() -> AnalysisService {
    AnalysisService::new(catalog::builtin()).expect("pipeline should build")
}

const SAMPLE_RESUME: &str = "\
Jane Doe\n\
email: jane@example.com | 555-867-5309 | linkedin.com/in/janedoe | github.com/janedoe\n\
\n\
Summary\n\
Data engineer with 6 years of experience building cloud data platforms.\n\
\n\
Experience\n\
• Built and deployed Python ETL pipelines on AWS, reducing runtime by 40%\n\
• Developed SQL models powering dashboards for 2,000 users\n\
• Led migration from on-prem to docker and kubernetes\n\
• Automated CI/CD workflows with git and jenkins\n\
\n\
Education\n\
Bachelor of Science in Computer Science, State University, 2017\n\
\n\
Skills\n\
python, sql, aws, docker, kubernetes, airflow, spark, git, tableau, excel\n\
\n\
Certifications\n\
AWS Certified Developer\n";

#[test]
fn worked_example_from_short_snippet() {
    let text = "Built and deployed a Python-based ETL pipeline reducing processing time \
                by 35%. AWS Certified Developer. email: a@b.com, linkedin.com/in/x";
    let report = service().analyze(text, None);

    // Two action verbs at minimum
    assert!(report.content.total_action_verbs >= 2);
    let verbs: Vec<&str> = report
        .content
        .action_verbs
        .iter()
        .map(|v| v.verb.as_str())
        .collect();
    assert!(verbs.contains(&"built"));
    assert!(verbs.contains(&"deployed"));

    // A metric containing 35%
    assert!(report
        .content
        .metrics
        .iter()
        .any(|m| m.metric.contains("35%")));

    // Contact sub-score: email (3) + linkedin (3), no phone or github
    assert!(report.ats.breakdown.contact >= 6.0);

    // Python extracted as a skill
    assert!(report
        .skills
        .extracted_skills
        .iter()
        .any(|s| s == "python"));

    // Certification picked up
    assert!(report
        .skills
        .certifications
        .iter()
        .any(|c| c.contains("AWS Certified")));
}

#[test]
fn zero_skill_resume_scores_zero_coverage() {
    let text = "Friendly person seeking any position. References available upon request. \
                Hard worker, reliable, punctual, always on time for everything daily.";
    let report = service().analyze(text, None);

    assert_eq!(report.skills.total_skills, 0);
    assert_eq!(report.ats.breakdown.keywords, 0.0);
    for role in &report.role_matching.top_matches {
        if role.counts.technical_required > 0 {
            assert_eq!(role.breakdown.technical_skills, 0.0);
        }
    }
}

#[test]
fn every_catalog_role_is_ranked() {
    let report = service().analyze(SAMPLE_RESUME, None);
    assert_eq!(report.role_matching.top_matches.len(), DEFAULT_TOP_MATCHES);

    // Ranking is total over the catalog and non-increasing
    for pair in report.role_matching.top_matches.windows(2) {
        assert!(pair[0].overall_score >= pair[1].overall_score);
    }

    // A data-heavy resume should rank a data role first
    let best = report.role_matching.best_fit.expect("best fit exists");
    assert!(best.overall_score > 0.0);
}

#[test]
fn health_score_within_bounds_for_varied_inputs() {
    for text in [
        SAMPLE_RESUME,
        "experience education skills and a little more text to pass validation, 2020",
        "Python python python python experience 2021 developer@company.com",
    ] {
        let report = service().analyze(text, None);
        assert!(report.health.overall_score >= 0.0);
        assert!(report.health.overall_score <= 100.0);
        assert!(report.ats.overall_score <= 100.0);
    }
}

#[test]
fn short_jd_yields_no_match_section() {
    let report = service().analyze(SAMPLE_RESUME, Some("too short"));
    assert!(report.jd_match.is_none());

    let jd29 = "x".repeat(29);
    let report = service().analyze(SAMPLE_RESUME, Some(&jd29));
    assert!(report.jd_match.is_none());
}

#[test]
fn adequate_jd_yields_bounded_match_score() {
    let jd = "Senior Data Engineer role.\n\
              Required skills: python, sql, airflow\n\
              Experience with aws is essential.\n\
              Nice to have: looker is a plus.";
    let report = service().analyze(SAMPLE_RESUME, Some(jd));
    let jd_match = report.jd_match.expect("jd long enough");
    assert!(jd_match.match_score >= 0.0 && jd_match.match_score <= 100.0);
    assert!(jd_match.matched_skills.contains(&"python".to_string()));
    assert!(jd_match.recommendations.len() <= 8);
}

#[test]
fn synonym_only_resume_still_matches_roles() {
    // js instead of javascript, k8s instead of kubernetes
    let text = "Skills: js, k8s, amazon web services. Experience since 2018. \
                contact me at dev@example.com";
    let report = service().analyze(text, None);

    let names = &report.skills.extracted_skills;
    assert!(names.iter().any(|s| s == "javascript"));
    assert!(names.iter().any(|s| s == "kubernetes"));
    assert!(names.iter().any(|s| s == "aws"));
}

#[test]
fn validation_rejects_short_or_non_resume_text() {
    // Under the 50 character floor
    assert!(input::validate_resume("tiny resume text").is_err());

    // Long enough but with no resume indicators
    let words = "one two three four five six seven eight nine ten \
                 eleven twelve thirteen fourteen fifteen sixteen";
    assert!(input::validate_resume(words).is_err());

    // And valid text passes, so the pipeline can be reached
    assert!(input::validate_resume(SAMPLE_RESUME).is_ok());
}

#[test]
fn identical_input_gives_identical_scores() {
    let svc = service();
    let jd = "Required skills: python, sql, spark. Experience with aws is essential here.";
    let a = svc.analyze(SAMPLE_RESUME, Some(jd));
    let b = svc.analyze(SAMPLE_RESUME, Some(jd));

    assert_eq!(a.health.overall_score, b.health.overall_score);
    assert_eq!(a.ats.overall_score, b.ats.overall_score);
    assert_eq!(a.skills.extracted_skills, b.skills.extracted_skills);
    assert_eq!(
        serde_json::to_string(&a.role_matching).unwrap(),
        serde_json::to_string(&b.role_matching).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&a.jd_match).unwrap(),
        serde_json::to_string(&b.jd_match).unwrap()
    );
}

#[test]
fn caps_hold_across_the_report() {
    let report = service().analyze(SAMPLE_RESUME, None);

    assert!(report.ats.suggestions.len() <= 15);
    assert!(report.ats.priority_improvements.len() <= 5);
    assert!(report.recommendations.len() <= 10);
    assert!(report.content.action_verbs.len() <= 15);
    assert!(report.content.metrics.len() <= 10);
    for role in &report.role_matching.top_matches {
        assert!(role.missing.critical.len() <= 5);
        assert!(role.missing.all.len() <= 10);
    }
    for entries in report.role_matching.categories.values() {
        assert!(entries.len() <= 3);
    }
}

#[test]
fn clean_text_feeds_pipeline_without_panics() {
    let messy = "Jane\u{0007} Doe\r\n\r\n\r\nexperience   with   python\t2020\r\njane@x.com";
    let cleaned = input::clean_text(messy);
    assert!(!cleaned.contains('\u{0007}'));
    let report = service().analyze(&cleaned, None);
    assert!(report.health.overall_score >= 0.0);
}
