//! Per-submission validation orchestration.
//!
//! The pipeline wires the canonicalizer, confidence scorer, and risk
//! assessor together: collect raw lists, normalize, union source presence,
//! aggregate evidence, score, assess, filter, rank, aggregate. It performs
//! no I/O; everything it needs arrives in the submission.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use lexicon::SkillLexicon;
use tracing::{debug, info};

use crate::canonical::Canonicalizer;
use crate::config::EngineConfig;
use crate::confidence::{profile_confidence, ConfidenceScorer};
use crate::risk::{detect_source_conflicts, ProfileContext, RiskAssessor};
use crate::types::{
    EvidenceRecord, ExcludedSkill, Result, SkillSubmission, SourceAvailability, SourcePresence,
    ValidatedSkill, ValidationResult,
};

/// Normalized per-source skill lists for one submission.
struct NormalizedSources {
    cv: Vec<String>,
    github: Vec<String>,
    stackoverflow: Vec<String>,
    web_mentions: Vec<String>,
    blog: Vec<String>,
}

/// The full validation pipeline.
pub struct ValidationPipeline {
    canonicalizer: Canonicalizer,
    scorer: ConfidenceScorer,
    assessor: RiskAssessor,
    config: EngineConfig,
}

impl ValidationPipeline {
    /// Create a pipeline over the given lexicon with default configuration.
    pub fn new(lexicon: Arc<SkillLexicon>) -> Self {
        Self::with_config(lexicon, EngineConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(lexicon: Arc<SkillLexicon>, config: EngineConfig) -> Self {
        Self {
            canonicalizer: Canonicalizer::new(Arc::clone(&lexicon)),
            scorer: ConfidenceScorer::with_config(config.scoring.clone()),
            assessor: RiskAssessor::with_config(Arc::clone(&lexicon), config.risk.clone()),
            config,
        }
    }

    /// Create a pipeline from a lexicon file, so deployments can swap
    /// registry tables without rebuilding.
    pub fn from_lexicon_path(path: impl AsRef<Path>, config: EngineConfig) -> Result<Self> {
        let lexicon = SkillLexicon::from_path(path)?;
        Ok(Self::with_config(Arc::new(lexicon), config))
    }

    /// The canonicalizer the pipeline resolves skills with.
    pub fn canonicalizer(&self) -> &Canonicalizer {
        &self.canonicalizer
    }

    /// Validate a submission against the current instant.
    pub fn validate(&self, submission: &SkillSubmission) -> ValidationResult {
        self.validate_at(submission, Utc::now())
    }

    /// Validate a submission against an explicit reference instant, making
    /// the run a pure function of its inputs.
    pub fn validate_at(
        &self,
        submission: &SkillSubmission,
        now: DateTime<Utc>,
    ) -> ValidationResult {
        info!(
            submission_id = %submission.submission_id,
            "Starting skill validation"
        );

        let sources = self.normalize_sources(submission);
        let availability = SourceAvailability {
            cv: !sources.cv.is_empty(),
            github: !sources.github.is_empty(),
            stackoverflow: !sources.stackoverflow.is_empty(),
            web_mentions: !sources.web_mentions.is_empty(),
            blog: !sources.blog.is_empty(),
        };

        let presence_map = build_presence_map(&sources);
        let evidence_map = self.gather_evidence(submission, &presence_map);
        let context = ProfileContext::from_primary_sources(&presence_map);

        debug!(
            skills = presence_map.len(),
            primary_context = context.len(),
            "Presence map and evidence assembled"
        );

        let mut validated = Vec::new();
        let mut excluded = Vec::new();
        let mut assessments = Vec::new();

        for (skill, presence) in &presence_map {
            let evidence = evidence_map.get(skill);

            let confidence = self.scorer.score(skill, presence, evidence, now);
            let assessment = self
                .assessor
                .assess(skill, presence, evidence, Some(&context), now);

            if assessment.risk_score >= self.config.exclusion_threshold {
                excluded.push(ExcludedSkill {
                    skill: skill.clone(),
                    risk_score: assessment.risk_score,
                    risk_level: assessment.risk_level,
                    factors: assessment.factors.clone(),
                });
            } else {
                validated.push(ValidatedSkill {
                    skill: skill.clone(),
                    category: self.canonicalizer.categorize(skill),
                    confidence_score: confidence.confidence_score,
                    confidence_level: confidence.confidence_level,
                    sources: confidence.sources_found.clone(),
                    source_count: confidence.source_count,
                    base_score: confidence.base_score,
                    bonuses: confidence.bonuses.clone(),
                    total_bonus: confidence.total_bonus,
                    risk_score: assessment.risk_score,
                    risk_level: assessment.risk_level,
                    recommendation: assessment.recommendation,
                });
            }

            assessments.push(assessment);
        }

        // Highest confidence first; skill name breaks ties deterministically
        validated.sort_by(|a, b| {
            b.confidence_score
                .cmp(&a.confidence_score)
                .then_with(|| a.skill.cmp(&b.skill))
        });
        excluded.sort_by(|a, b| {
            b.risk_score
                .cmp(&a.risk_score)
                .then_with(|| a.skill.cmp(&b.skill))
        });

        let profile_confidence = profile_confidence(&validated);
        let hallucination_report = self.assessor.summarize(&assessments);
        let source_conflicts = detect_source_conflicts(&presence_map, 2);

        info!(
            submission_id = %submission.submission_id,
            raw = presence_map.len(),
            validated = validated.len(),
            excluded = excluded.len(),
            "Skill validation complete"
        );

        ValidationResult {
            submission_id: submission.submission_id,
            validated_at: now,
            sources_analyzed: availability,
            total_skills_raw: presence_map.len(),
            total_skills_validated: validated.len(),
            validated_skills: validated,
            excluded_skills: excluded,
            profile_confidence,
            hallucination_report,
            source_conflicts,
        }
    }

    /// Normalize every per-source raw list. Absent sources normalize to
    /// empty lists; structurally invalid entries are dropped.
    fn normalize_sources(&self, submission: &SkillSubmission) -> NormalizedSources {
        let c = &self.canonicalizer;

        NormalizedSources {
            cv: c.normalize_all(&submission.cv_skills),
            github: c.normalize_all(&submission.github.skills),
            stackoverflow: c.normalize_all(&submission.stackoverflow.skills),
            web_mentions: c.normalize_all(submission.web_mentions.iter().map(|m| &m.skill)),
            blog: c.normalize_all(submission.blog_mentions.iter().map(|m| &m.skill)),
        }
    }

    /// Aggregate an evidence record per canonical skill from the
    /// source-specific signals that match it.
    fn gather_evidence(
        &self,
        submission: &SkillSubmission,
        presence_map: &BTreeMap<String, SourcePresence>,
    ) -> BTreeMap<String, EvidenceRecord> {
        let c = &self.canonicalizer;
        let mut evidence_map = BTreeMap::new();

        for skill in presence_map.keys() {
            let mut evidence = EvidenceRecord::default();

            // Repositories whose declared language resolves to this skill
            for repo in &submission.github.repositories {
                if let Some(language) = &repo.language {
                    if &c.canonicalize(language) == skill {
                        evidence.repository_count += 1;
                    }
                }
            }
            evidence.last_activity_date = submission.github.collected_at;

            // Reputation tags matching this skill
            for tag in &submission.stackoverflow.top_tags {
                if &c.canonicalize(&tag.tag) == skill {
                    evidence.stackoverflow_score = tag.score;
                }
            }

            // Written work mentioning this skill
            let mentions = submission
                .web_mentions
                .iter()
                .chain(submission.blog_mentions.iter())
                .filter(|m| &c.canonicalize(&m.skill) == skill);

            for mention in mentions {
                if mention.source_type.is_written_work() {
                    evidence.articles_written += 1;
                }
                if let Some(collected) = mention.collected_at {
                    let newer = evidence
                        .last_activity_date
                        .map(|current| collected > current)
                        .unwrap_or(true);
                    if newer {
                        evidence.last_activity_date = Some(collected);
                    }
                }
            }

            evidence_map.insert(skill.clone(), evidence);
        }

        evidence_map
    }
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::new(Arc::new(SkillLexicon::builtin()))
    }
}

/// Union per-source membership into one presence record per canonical
/// skill.
fn build_presence_map(sources: &NormalizedSources) -> BTreeMap<String, SourcePresence> {
    let cv: HashSet<&str> = sources.cv.iter().map(String::as_str).collect();
    let github: HashSet<&str> = sources.github.iter().map(String::as_str).collect();
    let stackoverflow: HashSet<&str> =
        sources.stackoverflow.iter().map(String::as_str).collect();
    let web_mentions: HashSet<&str> =
        sources.web_mentions.iter().map(String::as_str).collect();
    let blog: HashSet<&str> = sources.blog.iter().map(String::as_str).collect();

    let mut presence_map = BTreeMap::new();
    let all = cv
        .iter()
        .chain(github.iter())
        .chain(stackoverflow.iter())
        .chain(web_mentions.iter())
        .chain(blog.iter());

    for skill in all {
        presence_map
            .entry(skill.to_string())
            .or_insert_with(|| SourcePresence {
                cv: cv.contains(skill),
                github: github.contains(skill),
                stackoverflow: stackoverflow.contains(skill),
                web_mentions: web_mentions.contains(skill),
                blog: blog.contains(skill),
            });
    }

    presence_map
}

/// Render a fixed-format, human-readable validation report.
pub fn render_report(result: &ValidationResult) -> String {
    let mut report = String::new();
    let rule = "=".repeat(60);

    let _ = writeln!(report, "{rule}");
    let _ = writeln!(report, "SKILL VALIDATION REPORT");
    let _ = writeln!(report, "{rule}");
    let _ = writeln!(
        report,
        "Total Skills Analyzed: {}",
        result.hallucination_report.total_skills
    );
    let _ = writeln!(
        report,
        "Likely Hallucinations: {}",
        result.hallucination_report.hallucination_count
    );
    let _ = writeln!(
        report,
        "High Risk Skills: {}",
        result.hallucination_report.high_risk_count
    );
    let _ = writeln!(
        report,
        "Medium Risk Skills: {}",
        result.hallucination_report.medium_risk_count
    );
    let _ = writeln!(
        report,
        "Hallucination Rate: {}%",
        result.hallucination_report.hallucination_rate
    );
    let _ = writeln!(report);

    if !result.hallucination_report.flagged_skills.is_empty() {
        let _ = writeln!(report, "FLAGGED AS HALLUCINATIONS:");
        for skill in &result.hallucination_report.flagged_skills {
            let _ = writeln!(report, "  - {skill}");
        }
        let _ = writeln!(report);
    }

    let unflagged: Vec<&String> = result
        .hallucination_report
        .suspicious_skills
        .iter()
        .filter(|s| !result.hallucination_report.flagged_skills.contains(s))
        .collect();
    if !unflagged.is_empty() {
        let _ = writeln!(report, "SUSPICIOUS SKILLS (REQUIRE VERIFICATION):");
        for skill in unflagged {
            let _ = writeln!(report, "  - {skill}");
        }
        let _ = writeln!(report);
    }

    let _ = writeln!(report, "{rule}");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        GithubProfile, MentionKind, Repository, SkillMention, StackOverflowProfile, TagScore,
    };

    fn pipeline() -> ValidationPipeline {
        ValidationPipeline::default()
    }

    #[test]
    fn test_empty_submission() {
        let result = pipeline().validate(&SkillSubmission::new());

        assert_eq!(result.total_skills_raw, 0);
        assert_eq!(result.total_skills_validated, 0);
        assert!(result.validated_skills.is_empty());
        assert!(result.excluded_skills.is_empty());
        assert_eq!(result.profile_confidence.overall_confidence, 0.0);
        assert!(!result.sources_analyzed.cv);
        assert!(!result.sources_analyzed.github);
    }

    #[test]
    fn test_presence_union_across_variants() {
        // "Python" in the CV and "py" on GitHub are the same skill.
        let submission = SkillSubmission::new()
            .with_cv_skills(["Python"])
            .with_github(GithubProfile {
                skills: vec!["py".to_string()],
                ..Default::default()
            });

        let result = pipeline().validate(&submission);
        assert_eq!(result.total_skills_raw, 1);

        let skill = &result.validated_skills[0];
        assert_eq!(skill.skill, "python");
        assert_eq!(skill.source_count, 2);
        assert_eq!(skill.base_score, 75);
    }

    #[test]
    fn test_invalid_entries_are_dropped() {
        let submission = SkillSubmission::new().with_cv_skills(["Python", "", "123", "!!!"]);
        let result = pipeline().validate(&submission);
        assert_eq!(result.total_skills_raw, 1);
    }

    #[test]
    fn test_repository_evidence_aggregation() {
        let now = Utc::now();
        let submission = SkillSubmission::new()
            .with_cv_skills(["Python"])
            .with_github(GithubProfile {
                skills: vec!["Python".to_string()],
                repositories: vec![
                    Repository {
                        name: "api".to_string(),
                        language: Some("Python".to_string()),
                    },
                    Repository {
                        name: "scripts".to_string(),
                        language: Some("python3".to_string()),
                    },
                    Repository {
                        name: "web".to_string(),
                        language: Some("JavaScript".to_string()),
                    },
                    Repository {
                        name: "docs".to_string(),
                        language: None,
                    },
                ],
                collected_at: Some(now),
            });

        let p = pipeline();
        let presence_map = build_presence_map(&p.normalize_sources(&submission));
        let evidence = p.gather_evidence(&submission, &presence_map);

        assert_eq!(evidence["python"].repository_count, 2);
        assert_eq!(evidence["python"].last_activity_date, Some(now));
        assert_eq!(evidence["javascript"].repository_count, 1);
    }

    #[test]
    fn test_tag_and_mention_evidence_aggregation() {
        let older = Utc::now() - chrono::Duration::days(200);
        let newer = Utc::now() - chrono::Duration::days(20);

        let submission = SkillSubmission::new()
            .with_cv_skills(["Python"])
            .with_stackoverflow(StackOverflowProfile {
                skills: vec!["python".to_string()],
                top_tags: vec![TagScore {
                    tag: "python3".to_string(),
                    score: 140,
                }],
            })
            .with_web_mention(SkillMention {
                skill: "Python".to_string(),
                source_type: MentionKind::Article,
                collected_at: Some(older),
            })
            .with_blog_mention(SkillMention {
                skill: "py".to_string(),
                source_type: MentionKind::Blog,
                collected_at: Some(newer),
            })
            .with_web_mention(SkillMention {
                skill: "Python".to_string(),
                source_type: MentionKind::Other,
                collected_at: None,
            });

        let p = pipeline();
        let presence_map = build_presence_map(&p.normalize_sources(&submission));
        let evidence = p.gather_evidence(&submission, &presence_map);

        let python = &evidence["python"];
        assert_eq!(python.stackoverflow_score, 140);
        // article + blog count; the "other" mention does not
        assert_eq!(python.articles_written, 2);
        // the newest mention wins the activity date
        assert_eq!(python.last_activity_date, Some(newer));
    }

    #[test]
    fn test_exclusion_at_default_threshold() {
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

        // Unknown names canonicalize to title case, so "coding" surfaces as
        // "Coding" in the audit trail.
        assert_eq!(result.excluded_skills.len(), 1);
        let coding = &result.excluded_skills[0];
        assert_eq!(coding.skill, "Coding");
        assert_eq!(coding.risk_score, 95);
        assert!(!coding.factors.is_empty());
        assert_eq!(result.hallucination_report.flagged_skills, vec!["Coding"]);
    }

    #[test]
    fn test_custom_exclusion_threshold() {
        let submission = SkillSubmission::new()
            .with_github(GithubProfile {
                skills: vec!["docker".to_string()],
                ..Default::default()
            });

        // docker alone on GitHub: single_source + not_in_cv = 45
        let strict = EngineConfig {
            exclusion_threshold: 40,
            ..Default::default()
        };
        let result = ValidationPipeline::with_config(
            Arc::new(SkillLexicon::builtin()),
            strict,
        )
        .validate(&submission);
        assert!(result.validated_skills.is_empty());
        assert_eq!(result.excluded_skills.len(), 1);

        let default = pipeline().validate(&submission);
        assert_eq!(default.validated_skills.len(), 1);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let submission = SkillSubmission::new()
            .with_cv_skills(["Go", "Rust"])
            .with_github(GithubProfile {
                skills: vec!["rust".to_string()],
                ..Default::default()
            });

        let result = pipeline().validate(&submission);
        let order: Vec<&str> = result
            .validated_skills
            .iter()
            .map(|s| s.skill.as_str())
            .collect();
        // rust (75) ahead of go (60)
        assert_eq!(order, vec!["rust", "go"]);
    }

    #[test]
    fn test_from_lexicon_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let yaml = SkillLexicon::builtin().to_yaml().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let p = ValidationPipeline::from_lexicon_path(file.path(), EngineConfig::default())
            .unwrap();
        let result = p.validate(&SkillSubmission::new().with_cv_skills(["py"]));
        assert_eq!(result.validated_skills[0].skill, "python");

        assert!(ValidationPipeline::from_lexicon_path(
            "/nonexistent/lexicon.yaml",
            EngineConfig::default()
        )
        .is_err());
    }

    #[test]
    fn test_render_report_mentions_flagged_skills() {
        let submission = SkillSubmission::new().with_web_mention(SkillMention {
            skill: "coding".to_string(),
            source_type: MentionKind::Other,
            collected_at: None,
        });

        let result = pipeline().validate(&submission);
        let report = render_report(&result);

        assert!(report.contains("SKILL VALIDATION REPORT"));
        assert!(report.contains("FLAGGED AS HALLUCINATIONS:"));
        assert!(report.contains("  - Coding"));
    }
}
