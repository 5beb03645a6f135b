//! Hallucination risk assessment.
//!
//! Each risk factor is evaluated independently and its weight added to the
//! total; the factor list in the result preserves evaluation order. The
//! assessor is total: missing evidence or context simply leaves the
//! corresponding factors untriggered.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use lexicon::SkillLexicon;
use std::sync::Arc;
use tracing::debug;

use crate::config::RiskConfig;
use crate::types::{
    ConflictReason, EvidenceRecord, FactorSeverity, HallucinationReport, Recommendation,
    RiskAssessment, RiskLevel, SourceConflict, SourcePresence, TriggeredFactor,
};

/// Weight of the single-source factor.
pub const WEIGHT_SINGLE_SOURCE: u32 = 30;
/// Weight of the missing-primary-source factor.
pub const WEIGHT_NO_PRIMARY_SOURCE: u32 = 40;
/// Weight of the secondary-only (not in resume) factor.
pub const WEIGHT_NOT_IN_CV: u32 = 15;
/// Weight of the vague-skill factor.
pub const WEIGHT_VAGUE_SKILL: u32 = 25;
/// Weight of the missing-evidence factor.
pub const WEIGHT_NO_EVIDENCE: u32 = 35;
/// Weight of the profile-inconsistency factor.
pub const WEIGHT_PROFILE_INCONSISTENCY: u32 = 20;
/// Weight of the stale-activity factor.
pub const WEIGHT_STALE_SKILL: u32 = 15;

/// The candidate's primary skills, fixed before any per-skill assessment.
///
/// Built from the canonical skills the primary sources (resume and
/// code-hosting profile) assert, so domain-consistency checks never read
/// in-progress results.
#[derive(Debug, Clone, Default)]
pub struct ProfileContext {
    main_skills: BTreeSet<String>,
}

impl ProfileContext {
    /// Build a context from an iterator of canonical skill names.
    pub fn new<I, S>(main_skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            main_skills: main_skills
                .into_iter()
                .map(|s| s.into().to_lowercase())
                .collect(),
        }
    }

    /// Build a context from a presence map, keeping skills asserted by a
    /// primary source.
    pub fn from_primary_sources(presence_map: &BTreeMap<String, SourcePresence>) -> Self {
        Self::new(
            presence_map
                .iter()
                .filter(|(_, presence)| presence.cv || presence.github)
                .map(|(skill, _)| skill.clone()),
        )
    }

    /// Whether the candidate's primary skills include the given canonical
    /// name.
    pub fn has_skill(&self, canonical: &str) -> bool {
        self.main_skills.contains(canonical)
    }

    /// Number of primary skills in the context.
    pub fn len(&self) -> usize {
        self.main_skills.len()
    }

    /// Whether the context is empty.
    pub fn is_empty(&self) -> bool {
        self.main_skills.is_empty()
    }
}

/// Assessor for per-skill hallucination risk.
pub struct RiskAssessor {
    lexicon: Arc<SkillLexicon>,
    config: RiskConfig,
}

impl RiskAssessor {
    /// Create an assessor over the given lexicon with default configuration.
    pub fn new(lexicon: Arc<SkillLexicon>) -> Self {
        Self::with_config(lexicon, RiskConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(lexicon: Arc<SkillLexicon>, config: RiskConfig) -> Self {
        Self { lexicon, config }
    }

    /// Assess one skill for hallucination risk.
    pub fn assess(
        &self,
        skill: &str,
        presence: &SourcePresence,
        evidence: Option<&EvidenceRecord>,
        context: Option<&ProfileContext>,
        now: DateTime<Utc>,
    ) -> RiskAssessment {
        let mut factors = Vec::new();
        // Vocabulary tables are lower-cased; unknown skills arrive title-cased
        let skill_lower = skill.to_lowercase();

        // Factor 1: a single asserting source
        if presence.count() == 1 {
            factors.push(TriggeredFactor {
                id: "single_source".to_string(),
                weight: WEIGHT_SINGLE_SOURCE,
                severity: FactorSeverity::Medium,
                reason: "Skill found in only one source".to_string(),
            });
        }

        // Factor 2: absent from the primary sources
        if !presence.cv {
            if !presence.github {
                factors.push(TriggeredFactor {
                    id: "no_primary_source".to_string(),
                    weight: WEIGHT_NO_PRIMARY_SOURCE,
                    severity: FactorSeverity::High,
                    reason: "Skill not found in CV or GitHub (primary sources)".to_string(),
                });
            } else {
                factors.push(TriggeredFactor {
                    id: "not_in_cv".to_string(),
                    weight: WEIGHT_NOT_IN_CV,
                    severity: FactorSeverity::Low,
                    reason: "Skill found in secondary sources but not in CV".to_string(),
                });
            }
        }

        // Factor 3: vague or generic skill name
        if self.lexicon.is_vague(&skill_lower) {
            factors.push(TriggeredFactor {
                id: "vague_skill".to_string(),
                weight: WEIGHT_VAGUE_SKILL,
                severity: FactorSeverity::Medium,
                reason: format!("'{}' is a generic/vague skill name", skill),
            });
        }

        // Factor 4: a claim that needs concrete evidence, with none
        if self.lexicon.requires_evidence(&skill_lower)
            && !evidence.map(EvidenceRecord::has_concrete_signal).unwrap_or(false)
        {
            factors.push(TriggeredFactor {
                id: "no_evidence".to_string(),
                weight: WEIGHT_NO_EVIDENCE,
                severity: FactorSeverity::High,
                reason: format!("'{}' requires concrete evidence but none found", skill),
            });
        }

        // Factor 5: inconsistent with the candidate's primary skills
        if let Some(context) = context {
            if self.is_profile_inconsistent(skill, context) {
                factors.push(TriggeredFactor {
                    id: "profile_inconsistency".to_string(),
                    weight: WEIGHT_PROFILE_INCONSISTENCY,
                    severity: FactorSeverity::Medium,
                    reason: "Skill seems inconsistent with overall profile".to_string(),
                });
            }
        }

        // Factor 6: no activity for over a year
        if let Some(days) = evidence.and_then(|e| e.days_since_activity(now)) {
            if days > self.config.stale_after_days {
                factors.push(TriggeredFactor {
                    id: "stale_skill".to_string(),
                    weight: WEIGHT_STALE_SKILL,
                    severity: FactorSeverity::Low,
                    reason: format!("No activity in {} days (may be outdated)", days),
                });
            }
        }

        let risk_score: u32 = factors.iter().map(|f| f.weight).sum();
        let risk_level = RiskLevel::from_score(risk_score);
        let is_hallucination = risk_score >= self.config.hallucination_threshold;

        if is_hallucination {
            debug!(skill = %skill, risk_score, "Skill flagged as likely hallucination");
        }

        RiskAssessment {
            skill: skill.to_string(),
            risk_score,
            risk_level,
            factors,
            is_hallucination,
            recommendation: Recommendation::from_score(risk_score),
        }
    }

    /// Whether a skill's domain clashes with the candidate's primary
    /// skills. A clash needs a keyword match with no supporting skill.
    fn is_profile_inconsistent(&self, skill: &str, context: &ProfileContext) -> bool {
        let skill_lower = skill.to_lowercase();

        self.lexicon.domain_rules().iter().any(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| skill_lower.contains(keyword.as_str()))
                && !rule
                    .supporting_skills
                    .iter()
                    .any(|support| context.has_skill(support))
        })
    }

    /// Summarize a batch of assessments, ordered most risky first.
    pub fn summarize(&self, assessments: &[RiskAssessment]) -> HallucinationReport {
        let total_skills = assessments.len();

        let mut ranked: Vec<&RiskAssessment> = assessments.iter().collect();
        ranked.sort_by(|a, b| {
            b.risk_score
                .cmp(&a.risk_score)
                .then_with(|| a.skill.cmp(&b.skill))
        });

        let flagged_skills: Vec<String> = ranked
            .iter()
            .filter(|a| a.is_hallucination)
            .map(|a| a.skill.clone())
            .collect();
        let suspicious_skills: Vec<String> = ranked
            .iter()
            .filter(|a| matches!(a.risk_level, RiskLevel::High | RiskLevel::Medium))
            .map(|a| a.skill.clone())
            .collect();

        let high_risk_count = ranked
            .iter()
            .filter(|a| a.risk_level == RiskLevel::High)
            .count();
        let medium_risk_count = ranked
            .iter()
            .filter(|a| a.risk_level == RiskLevel::Medium)
            .count();

        let hallucination_rate = if total_skills > 0 {
            crate::confidence::round2(flagged_skills.len() as f64 / total_skills as f64 * 100.0)
        } else {
            0.0
        };

        HallucinationReport {
            total_skills,
            hallucination_count: flagged_skills.len(),
            high_risk_count,
            medium_risk_count,
            hallucination_rate,
            flagged_skills,
            suspicious_skills,
        }
    }
}

/// Flag cross-source conflicts for audit: skills asserted by one source
/// only, and skills multiple secondary sources agree on that the resume
/// never mentions.
pub fn detect_source_conflicts(
    presence_map: &BTreeMap<String, SourcePresence>,
    min_sources: usize,
) -> Vec<SourceConflict> {
    let mut conflicts = Vec::new();

    for (skill, presence) in presence_map {
        let count = presence.count();

        if count == 1 {
            let (reason, severity) = if presence.cv {
                (ConflictReason::SingleSourceOnly, FactorSeverity::Medium)
            } else {
                (ConflictReason::SingleSourceNoCv, FactorSeverity::High)
            };
            conflicts.push(SourceConflict {
                skill: skill.clone(),
                reason,
                severity,
                sources: presence.found(),
                note: None,
            });
        } else if !presence.cv && count >= min_sources {
            conflicts.push(SourceConflict {
                skill: skill.clone(),
                reason: ConflictReason::MissingFromCv,
                severity: FactorSeverity::Low,
                sources: presence.found(),
                note: Some(
                    "Skill found in multiple sources but not in CV - may be genuine \
                     but undocumented skill"
                        .to_string(),
                ),
            });
        }
    }

    conflicts
}
