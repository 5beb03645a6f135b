//! Confidence scoring.
//!
//! The base score comes from an ordered, first-match-wins rule table over
//! the source-combination flags; bonuses are independent and additive. The
//! scorer is total: missing evidence fields contribute nothing, and an
//! empty presence record yields the all-zero result.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::types::{
    ConfidenceLevel, ConfidenceResult, EvidenceRecord, ProfileConfidence, SourcePresence,
    ValidatedSkill,
};

/// Boolean view of a presence record as the matrix sees it: web mentions
/// and blog collapse into one "web" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFlags {
    /// Asserted by the resume
    pub cv: bool,
    /// Asserted by the code-hosting profile
    pub github: bool,
    /// Asserted by web mentions or blog posts
    pub web: bool,
    /// Asserted by the reputation site
    pub stackoverflow: bool,
}

impl SourceFlags {
    /// Collapse a presence record into matrix flags.
    pub fn from_presence(presence: &SourcePresence) -> Self {
        Self {
            cv: presence.cv,
            github: presence.github,
            web: presence.has_web(),
            stackoverflow: presence.stackoverflow,
        }
    }

    /// How many secondary (non-resume) flags are set.
    fn secondary_count(&self) -> usize {
        [self.github, self.web, self.stackoverflow]
            .iter()
            .filter(|f| **f)
            .count()
    }
}

/// One row of the base-score matrix.
pub struct BaseRule {
    /// Rule identifier
    pub id: &'static str,
    /// Base score awarded when the rule matches
    pub score: u32,
    matches: fn(&SourceFlags) -> bool,
}

/// The base-score matrix, evaluated top to bottom; the first matching rule
/// wins. Rows for a lone secondary source require exactly one secondary
/// flag, so that any corroborated pair falls through to the 55-point row
/// and the score stays monotone in every flag.
pub const BASE_RULES: &[BaseRule] = &[
    BaseRule {
        id: "all_sources",
        score: 95,
        matches: |f| f.cv && f.github && f.web && f.stackoverflow,
    },
    BaseRule {
        id: "cv_github_web",
        score: 90,
        matches: |f| f.cv && f.github && f.web,
    },
    BaseRule {
        id: "cv_github",
        score: 75,
        matches: |f| f.cv && f.github,
    },
    BaseRule {
        id: "cv_only",
        score: 60,
        matches: |f| f.cv,
    },
    BaseRule {
        id: "github_only",
        score: 50,
        matches: |f| f.github && f.secondary_count() == 1,
    },
    BaseRule {
        id: "stackoverflow_only",
        score: 45,
        matches: |f| f.stackoverflow && f.secondary_count() == 1,
    },
    BaseRule {
        id: "web_only",
        score: 40,
        matches: |f| f.web && f.secondary_count() == 1,
    },
    BaseRule {
        id: "corroborated_secondary",
        score: 55,
        matches: |f| f.secondary_count() >= 2,
    },
];

/// Bonus points for endorsements.
pub const BONUS_ENDORSEMENTS: u32 = 5;
/// Bonus points for written articles.
pub const BONUS_ARTICLES: u32 = 5;
/// Bonus points for very recent activity.
pub const BONUS_ACTIVITY_MAX: u32 = 10;
/// Bonus points for moderately recent activity.
pub const BONUS_ACTIVITY_MIN: u32 = 5;

/// Scorer for per-skill confidence.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceScorer {
    config: ScoringConfig,
}

impl ConfidenceScorer {
    /// Create a scorer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration.
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score one skill against its source presence and evidence.
    pub fn score(
        &self,
        skill: &str,
        presence: &SourcePresence,
        evidence: Option<&EvidenceRecord>,
        now: DateTime<Utc>,
    ) -> ConfidenceResult {
        if !presence.any() {
            return ConfidenceResult {
                skill: skill.to_string(),
                base_score: 0,
                bonuses: BTreeMap::new(),
                total_bonus: 0,
                confidence_score: 0,
                confidence_level: ConfidenceLevel::None,
                sources_found: Vec::new(),
                source_count: 0,
            };
        }

        let flags = SourceFlags::from_presence(presence);
        let base_score = self.base_score(&flags);

        let mut bonuses = BTreeMap::new();
        if let Some(evidence) = evidence {
            if evidence.endorsements > 0 {
                bonuses.insert("endorsements".to_string(), BONUS_ENDORSEMENTS);
            }
            if evidence.articles_written > 0 {
                bonuses.insert("articles".to_string(), BONUS_ARTICLES);
            }
            let activity = self.activity_bonus(evidence, now);
            if activity > 0 {
                bonuses.insert("recent_activity".to_string(), activity);
            }
        }
        let total_bonus: u32 = bonuses.values().sum();

        let confidence_score = (base_score + total_bonus).min(100);
        let sources_found = presence.found();
        let source_count = sources_found.len();

        ConfidenceResult {
            skill: skill.to_string(),
            base_score,
            bonuses,
            total_bonus,
            confidence_score,
            confidence_level: ConfidenceLevel::from_score(confidence_score),
            sources_found,
            source_count,
        }
    }

    /// Evaluate the base-score matrix for a set of flags.
    pub fn base_score(&self, flags: &SourceFlags) -> u32 {
        for rule in BASE_RULES {
            if (rule.matches)(flags) {
                debug!(rule = rule.id, score = rule.score, "Base rule matched");
                return rule.score;
            }
        }
        0
    }

    /// Tiered bonus for recent activity: the full bonus inside the
    /// very-recent window, the reduced bonus inside the recent window,
    /// nothing otherwise (or when no date is known).
    fn activity_bonus(&self, evidence: &EvidenceRecord, now: DateTime<Utc>) -> u32 {
        match evidence.days_since_activity(now) {
            Some(days) if days < self.config.very_recent_days => BONUS_ACTIVITY_MAX,
            Some(days) if days < self.config.recent_days => BONUS_ACTIVITY_MIN,
            _ => 0,
        }
    }
}

/// Aggregate confidence over a set of validated skills.
pub fn profile_confidence(skills: &[ValidatedSkill]) -> ProfileConfidence {
    if skills.is_empty() {
        return ProfileConfidence::default();
    }

    let total_skills = skills.len();
    let sum: u64 = skills.iter().map(|s| s.confidence_score as u64).sum();
    let overall = round2(sum as f64 / total_skills as f64);

    let count_level = |level: ConfidenceLevel| {
        skills
            .iter()
            .filter(|s| s.confidence_level == level)
            .count()
    };

    let expert = count_level(ConfidenceLevel::Expert);
    let high = count_level(ConfidenceLevel::High);
    let medium = count_level(ConfidenceLevel::Medium);
    let low = count_level(ConfidenceLevel::Low);
    let very_low = count_level(ConfidenceLevel::VeryLow);

    let mut distribution = BTreeMap::new();
    distribution.insert("expert".to_string(), expert);
    distribution.insert("high".to_string(), high);
    distribution.insert("medium".to_string(), medium);
    distribution.insert("low".to_string(), low);
    distribution.insert("very_low".to_string(), very_low);

    ProfileConfidence {
        overall_confidence: overall,
        total_skills,
        expert_skills: expert,
        high_confidence_skills: high,
        medium_confidence_skills: medium,
        low_confidence_skills: low,
        very_low_confidence_skills: very_low,
        distribution,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
