//! End-to-end validation pipeline integration tests
//!
//! Exercises the full collect -> normalize -> score -> assess -> filter ->
//! profile flow against realistic submissions, including:
//! - Cross-source corroboration and evidence bonuses
//! - Hallucination exclusion at the default and custom thresholds
//! - Profile construction over validated output

use std::sync::Arc;

use chrono::{Duration, Utc};
use lexicon::SkillLexicon;
use sve::{
    ConfidenceLevel, EngineConfig, GithubProfile, MentionKind, ProfileBuilder, Recommendation,
    Repository, RiskLevel, SkillMention, SkillSubmission, StackOverflowProfile, TagScore,
    ValidationPipeline,
};

fn pipeline() -> ValidationPipeline {
    ValidationPipeline::new(Arc::new(SkillLexicon::builtin()))
}

// =============================================================================
// Corroboration & Confidence
// =============================================================================

#[test]
fn test_cv_and_github_corroboration() {
    let submission = SkillSubmission::new()
        .with_cv_skills(["Python"])
        .with_github(GithubProfile {
            skills: vec!["python".to_string()],
            ..Default::default()
        });

    let result = pipeline().validate(&submission);
    assert_eq!(result.total_skills_validated, 1);

    let python = &result.validated_skills[0];
    assert_eq!(python.skill, "python");
    assert_eq!(python.base_score, 75);
    assert_eq!(python.confidence_score, 75);
    assert_eq!(python.confidence_level, ConfidenceLevel::High);
    assert_eq!(python.risk_score, 0);
    assert_eq!(python.risk_level, RiskLevel::Minimal);
    assert_eq!(python.recommendation, Recommendation::Include);
}

#[test]
fn test_all_sources_with_evidence_reach_expert() {
    let now = Utc::now();
    let submission = SkillSubmission::new()
        .with_cv_skills(["Python"])
        .with_github(GithubProfile {
            skills: vec!["py".to_string()],
            repositories: vec![Repository {
                name: "api".to_string(),
                language: Some("Python".to_string()),
            }],
            collected_at: Some(now - Duration::days(10)),
        })
        .with_stackoverflow(StackOverflowProfile {
            skills: vec!["python3".to_string()],
            top_tags: vec![TagScore {
                tag: "python".to_string(),
                score: 250,
            }],
        })
        .with_web_mention(SkillMention {
            skill: "Python".to_string(),
            source_type: MentionKind::Article,
            collected_at: Some(now - Duration::days(5)),
        })
        .with_blog_mention(SkillMention {
            skill: "Python".to_string(),
            source_type: MentionKind::Blog,
            collected_at: Some(now - Duration::days(3)),
        });

    let result = pipeline().validate(&submission);
    assert_eq!(result.total_skills_validated, 1);

    let python = &result.validated_skills[0];
    // All four matrix flags set, plus article and recent-activity bonuses;
    // the total clamps at 100.
    assert_eq!(python.base_score, 95);
    assert!(python.bonuses.contains_key("articles"));
    assert_eq!(python.bonuses["recent_activity"], 10);
    assert_eq!(python.confidence_score, 100);
    assert_eq!(python.confidence_level, ConfidenceLevel::Expert);
    assert_eq!(python.source_count, 5);
}

#[test]
fn test_variant_spellings_merge_across_sources() {
    let submission = SkillSubmission::new()
        .with_cv_skills(["JavaScript", "Python"])
        .with_github(GithubProfile {
            skills: vec!["js".to_string(), "python3".to_string()],
            ..Default::default()
        });

    let result = pipeline().validate(&submission);

    let names: Vec<&str> = result
        .validated_skills
        .iter()
        .map(|s| s.skill.as_str())
        .collect();
    assert_eq!(names, vec!["javascript", "python"]);
    for skill in &result.validated_skills {
        assert_eq!(skill.source_count, 2);
    }
}

// =============================================================================
// Hallucination Filtering
// =============================================================================

#[test]
fn test_vague_single_source_skill_is_excluded() {
    let submission = SkillSubmission::new()
        .with_cv_skills(["Python", "React"])
        .with_github(GithubProfile {
            skills: vec!["python".to_string(), "react".to_string()],
            ..Default::default()
        })
        .with_web_mention(SkillMention {
            skill: "coding".to_string(),
            source_type: MentionKind::Other,
            collected_at: None,
        });

    let result = pipeline().validate(&submission);

    let validated: Vec<&str> = result
        .validated_skills
        .iter()
        .map(|s| s.skill.as_str())
        .collect();
    assert_eq!(validated, vec!["python", "react"]);

    // single_source (30) + no_primary_source (40) + vague_skill (25)
    assert_eq!(result.excluded_skills.len(), 1);
    let excluded = &result.excluded_skills[0];
    assert_eq!(excluded.risk_score, 95);
    assert_eq!(excluded.risk_level, RiskLevel::High);

    let factor_ids: Vec<&str> = excluded.factors.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        factor_ids,
        vec!["single_source", "no_primary_source", "vague_skill"]
    );
    let weight_sum: u32 = excluded.factors.iter().map(|f| f.weight).sum();
    assert_eq!(excluded.risk_score, weight_sum);

    assert_eq!(result.hallucination_report.hallucination_count, 1);
}

#[test]
fn test_filter_respects_configured_threshold() {
    // docker asserted by GitHub only: single_source + not_in_cv = 45
    let submission = SkillSubmission::new().with_github(GithubProfile {
        skills: vec!["docker".to_string()],
        ..Default::default()
    });

    let lexicon = Arc::new(SkillLexicon::builtin());

    let default_run = ValidationPipeline::new(Arc::clone(&lexicon)).validate(&submission);
    assert_eq!(default_run.total_skills_validated, 1);
    assert_eq!(default_run.validated_skills[0].recommendation, Recommendation::Flag);

    let strict = EngineConfig {
        exclusion_threshold: 45,
        ..Default::default()
    };
    let strict_run =
        ValidationPipeline::with_config(Arc::clone(&lexicon), strict).validate(&submission);
    assert_eq!(strict_run.total_skills_validated, 0);
    assert_eq!(strict_run.excluded_skills.len(), 1);
}

#[test]
fn test_evidence_required_skill_without_signal() {
    let submission = SkillSubmission::new().with_cv_skills(["Machine Learning", "Python"]);

    let result = pipeline().validate(&submission);

    // single_source (30) + no_evidence (35) = 65: excluded even though the
    // CV asserts it. Python in the primary set keeps the inconsistency
    // factor quiet, but a claim this strong needs concrete backing.
    let ml = result
        .excluded_skills
        .iter()
        .find(|s| s.skill == "Machine Learning")
        .expect("ml excluded at default threshold");
    assert_eq!(ml.risk_score, 65);
    assert!(ml.factors.iter().any(|f| f.id == "no_evidence"));
    assert!(ml
        .factors
        .iter()
        .all(|f| f.id != "profile_inconsistency"));

    assert!(result
        .validated_skills
        .iter()
        .any(|s| s.skill == "python"));
}

// =============================================================================
// Aggregates & Profile
// =============================================================================

#[test]
fn test_empty_submission_yields_emerging_profile() {
    let result = pipeline().validate(&SkillSubmission::new());

    assert_eq!(result.total_skills_raw, 0);
    assert_eq!(result.total_skills_validated, 0);
    assert_eq!(result.profile_confidence.overall_confidence, 0.0);
    assert_eq!(result.hallucination_report.total_skills, 0);

    let profile = ProfileBuilder::default().build(&result.validated_skills);
    assert_eq!(profile.summary.profile_strength.as_str(), "emerging");
    assert_eq!(profile.summary.total_skills, 0);
}

#[test]
fn test_profile_confidence_counts_survivors_only() {
    let submission = SkillSubmission::new()
        .with_cv_skills(["Python"])
        .with_github(GithubProfile {
            skills: vec!["python".to_string()],
            ..Default::default()
        })
        .with_web_mention(SkillMention {
            skill: "teamwork".to_string(),
            source_type: MentionKind::Other,
            collected_at: None,
        });

    let result = pipeline().validate(&submission);

    assert_eq!(result.total_skills_raw, 2);
    assert_eq!(result.profile_confidence.total_skills, 1);
    assert_eq!(result.profile_confidence.overall_confidence, 75.0);
    assert_eq!(result.profile_confidence.high_confidence_skills, 1);
}

#[test]
fn test_end_to_end_profile_construction() {
    let submission = SkillSubmission::new()
        .with_cv_skills(["Python", "Django", "PostgreSQL", "Docker"])
        .with_github(GithubProfile {
            skills: vec![
                "python".to_string(),
                "django".to_string(),
                "docker".to_string(),
            ],
            repositories: vec![Repository {
                name: "saas".to_string(),
                language: Some("Python".to_string()),
            }],
            collected_at: Some(Utc::now() - Duration::days(15)),
        });

    let result = pipeline().validate(&submission);
    assert_eq!(result.total_skills_validated, 4);

    let profile = ProfileBuilder::default().build(&result.validated_skills);

    let django_stack = profile
        .skill_relationships
        .iter()
        .find(|m| m.stack_name == "Django Backend Stack")
        .expect("django stack detected");
    assert_eq!(django_stack.completion_rate, 100.0);

    let backend_gap = profile
        .skill_gaps
        .iter()
        .find(|g| g.gap_area == "Backend Development")
        .expect("backend gap reported");
    assert_eq!(backend_gap.missing_skills, vec!["redis", "git"]);

    assert!(profile
        .recommended_learning
        .iter()
        .any(|r| r.learning_path == "Cloud Infrastructure"));
}

#[test]
fn test_source_conflicts_reported() {
    let submission = SkillSubmission::new()
        .with_cv_skills(["Rust"])
        .with_github(GithubProfile {
            skills: vec!["go".to_string()],
            ..Default::default()
        })
        .with_stackoverflow(StackOverflowProfile {
            skills: vec!["go".to_string()],
            top_tags: vec![],
        });

    let result = pipeline().validate(&submission);

    let rust = result
        .source_conflicts
        .iter()
        .find(|c| c.skill == "rust")
        .expect("rust conflict");
    assert_eq!(rust.reason.as_str(), "single_source_only");

    let go = result
        .source_conflicts
        .iter()
        .find(|c| c.skill == "go")
        .expect("go conflict");
    assert_eq!(go.reason.as_str(), "missing_from_cv");
}

#[test]
fn test_determinism_with_fixed_reference_time() {
    let now = Utc::now();
    let submission = SkillSubmission::new()
        .with_cv_skills(["Python", "Go", "Rust"])
        .with_github(GithubProfile {
            skills: vec!["rust".to_string()],
            repositories: vec![],
            collected_at: Some(now - Duration::days(100)),
        });

    let p = pipeline();
    let first = p.validate_at(&submission, now);
    let second = p.validate_at(&submission, now);

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_output_serializes_to_plain_json() {
    let submission = SkillSubmission::new().with_cv_skills(["Python"]);
    let result = pipeline().validate(&submission);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["total_skills_validated"], 1);
    assert_eq!(json["validated_skills"][0]["skill"], "python");
    assert_eq!(json["validated_skills"][0]["confidence_level"], "medium");
    // CV-only means a single source, so the skill is kept but marked
    assert_eq!(json["validated_skills"][0]["recommendation"], "VERIFY");
}
