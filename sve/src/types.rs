//! Core types for the validation engine.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use lexicon::SkillCategory;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An evidence source the engine cross-checks skills against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    /// Resume extraction
    Cv,
    /// Code-hosting profile analysis
    Github,
    /// Q&A reputation site
    Stackoverflow,
    /// Web mention discovery
    WebMentions,
    /// Personal technical writing
    Blog,
}

impl SkillSource {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cv => "cv",
            Self::Github => "github",
            Self::Stackoverflow => "stackoverflow",
            Self::WebMentions => "web_mentions",
            Self::Blog => "blog",
        }
    }

    /// All sources in reporting order.
    pub fn all() -> [Self; 5] {
        [
            Self::Cv,
            Self::Github,
            Self::Stackoverflow,
            Self::WebMentions,
            Self::Blog,
        ]
    }
}

/// Kind of web mention a skill was discovered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionKind {
    /// Published article
    Article,
    /// Personal blog post
    Blog,
    /// Anything else (forum, profile page, ...)
    Other,
}

impl MentionKind {
    /// Whether this mention counts as written-article evidence.
    pub fn is_written_work(&self) -> bool {
        matches!(self, Self::Article | Self::Blog)
    }
}

/// Which sources asserted one canonical skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePresence {
    /// Present in the resume
    pub cv: bool,
    /// Present in the code-hosting profile
    pub github: bool,
    /// Present in reputation-site tags
    pub stackoverflow: bool,
    /// Present in web mentions
    pub web_mentions: bool,
    /// Present in blog posts
    pub blog: bool,
}

impl SourcePresence {
    /// Number of sources asserting the skill.
    pub fn count(&self) -> usize {
        [
            self.cv,
            self.github,
            self.stackoverflow,
            self.web_mentions,
            self.blog,
        ]
        .iter()
        .filter(|p| **p)
        .count()
    }

    /// Whether any source asserted the skill.
    pub fn any(&self) -> bool {
        self.count() > 0
    }

    /// Whether the skill has any web footprint (mentions or blog).
    pub fn has_web(&self) -> bool {
        self.web_mentions || self.blog
    }

    /// Sources asserting the skill, in reporting order.
    pub fn found(&self) -> Vec<SkillSource> {
        let mut sources = Vec::new();
        if self.cv {
            sources.push(SkillSource::Cv);
        }
        if self.github {
            sources.push(SkillSource::Github);
        }
        if self.stackoverflow {
            sources.push(SkillSource::Stackoverflow);
        }
        if self.web_mentions {
            sources.push(SkillSource::WebMentions);
        }
        if self.blog {
            sources.push(SkillSource::Blog);
        }
        sources
    }
}

/// Quantitative and temporal signals supporting a skill claim.
///
/// Every field defaults to zero/none; absence is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// Repositories whose declared language matches the skill
    pub repository_count: u32,
    /// Commits attributed to the skill
    pub commit_count: u32,
    /// Articles or blog posts written about the skill
    pub articles_written: u32,
    /// Third-party endorsements
    pub endorsements: u32,
    /// Reputation-site tag score
    pub stackoverflow_score: i64,
    /// Most recent relevant activity
    pub last_activity_date: Option<DateTime<Utc>>,
}

impl EvidenceRecord {
    /// Whether any concrete signal backs the skill (repositories, commits,
    /// written work, or reputation).
    pub fn has_concrete_signal(&self) -> bool {
        self.repository_count > 0
            || self.commit_count > 0
            || self.articles_written > 0
            || self.stackoverflow_score > 0
    }

    /// Whole days between the last activity and `now`, if a date is known.
    pub fn days_since_activity(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_activity_date
            .map(|last| (now - last).num_days())
    }
}

/// Confidence tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// 90-100
    Expert,
    /// 75-89
    High,
    /// 60-74
    Medium,
    /// 40-59
    Low,
    /// 1-39
    VeryLow,
    /// Exactly zero - no source asserted the skill
    None,
}

impl ConfidenceLevel {
    /// Map a clamped 0-100 score to its tier.
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Self::Expert
        } else if score >= 75 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else if score >= 40 {
            Self::Low
        } else if score > 0 {
            Self::VeryLow
        } else {
            Self::None
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expert => "expert",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::VeryLow => "very_low",
            Self::None => "none",
        }
    }
}

/// Hallucination-risk tier derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// 0-19
    Minimal,
    /// 20-39
    Low,
    /// 40-59
    Medium,
    /// 60 and above
    High,
}

impl RiskLevel {
    /// Map a risk score to its tier.
    pub fn from_score(score: u32) -> Self {
        if score >= 60 {
            Self::High
        } else if score >= 40 {
            Self::Medium
        } else if score >= 20 {
            Self::Low
        } else {
            Self::Minimal
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Severity label of a single triggered risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorSeverity {
    /// Minor signal
    Low,
    /// Notable signal
    Medium,
    /// Strong fabrication signal
    High,
}

impl FactorSeverity {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Downstream handling recommendation for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    /// Low risk, safe to include
    Include,
    /// Include but mark as unverified
    Verify,
    /// Requires manual review
    Flag,
    /// Likely hallucination, exclude from the profile
    Exclude,
}

impl Recommendation {
    /// Map a risk score to its recommendation.
    pub fn from_score(score: u32) -> Self {
        if score >= 60 {
            Self::Exclude
        } else if score >= 40 {
            Self::Flag
        } else if score >= 20 {
            Self::Verify
        } else {
            Self::Include
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Include => "INCLUDE",
            Self::Verify => "VERIFY",
            Self::Flag => "FLAG",
            Self::Exclude => "EXCLUDE",
        }
    }
}

/// A risk factor that triggered for a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredFactor {
    /// Factor identifier, e.g. "single_source"
    pub id: String,
    /// Points the factor contributed
    pub weight: u32,
    /// Severity label
    pub severity: FactorSeverity,
    /// Human-readable reason
    pub reason: String,
}

/// Confidence scoring result for one skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceResult {
    /// Canonical skill name
    pub skill: String,
    /// Score from the source-combination matrix
    pub base_score: u32,
    /// Named bonus breakdown
    pub bonuses: BTreeMap<String, u32>,
    /// Sum of all bonuses
    pub total_bonus: u32,
    /// Final score, clamped to 0-100
    pub confidence_score: u32,
    /// Tier derived from the final score
    pub confidence_level: ConfidenceLevel,
    /// Sources that asserted the skill
    pub sources_found: Vec<SkillSource>,
    /// Number of asserting sources
    pub source_count: usize,
}

/// Risk assessment result for one skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Canonical skill name
    pub skill: String,
    /// Sum of triggered factor weights
    pub risk_score: u32,
    /// Tier derived from the risk score
    pub risk_level: RiskLevel,
    /// Triggered factors, in evaluation order
    pub factors: Vec<TriggeredFactor>,
    /// Whether the skill is likely fabricated
    pub is_hallucination: bool,
    /// Downstream handling recommendation
    pub recommendation: Recommendation,
}

/// A skill that survived validation, with full scoring metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedSkill {
    /// Canonical skill name
    pub skill: String,
    /// Skill domain
    pub category: SkillCategory,
    /// Final confidence score
    pub confidence_score: u32,
    /// Confidence tier
    pub confidence_level: ConfidenceLevel,
    /// Sources that asserted the skill
    pub sources: Vec<SkillSource>,
    /// Number of asserting sources
    pub source_count: usize,
    /// Matrix base score
    pub base_score: u32,
    /// Named bonus breakdown
    pub bonuses: BTreeMap<String, u32>,
    /// Sum of all bonuses
    pub total_bonus: u32,
    /// Risk score the skill was admitted with
    pub risk_score: u32,
    /// Risk tier
    pub risk_level: RiskLevel,
    /// Downstream handling recommendation
    pub recommendation: Recommendation,
}

/// A skill removed from the profile, kept for audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludedSkill {
    /// Canonical skill name
    pub skill: String,
    /// Risk score that caused the exclusion
    pub risk_score: u32,
    /// Risk tier
    pub risk_level: RiskLevel,
    /// Triggered factors, in evaluation order
    pub factors: Vec<TriggeredFactor>,
}

/// Submission-level confidence aggregate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfidence {
    /// Mean confidence score across skills
    pub overall_confidence: f64,
    /// Number of skills aggregated
    pub total_skills: usize,
    /// Count of expert-tier skills
    pub expert_skills: usize,
    /// Count of high-tier skills
    pub high_confidence_skills: usize,
    /// Count of medium-tier skills
    pub medium_confidence_skills: usize,
    /// Count of low-tier skills
    pub low_confidence_skills: usize,
    /// Count of very-low-tier skills
    pub very_low_confidence_skills: usize,
    /// Tier name to count
    pub distribution: BTreeMap<String, usize>,
}

/// Which sources produced any usable skills for a submission.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SourceAvailability {
    /// Resume skills found
    pub cv: bool,
    /// Code-hosting skills found
    pub github: bool,
    /// Reputation-site skills found
    pub stackoverflow: bool,
    /// Web-mention skills found
    pub web_mentions: bool,
    /// Blog skills found
    pub blog: bool,
}

/// Reason a skill was flagged as a cross-source conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictReason {
    /// One source only, and it is not the resume
    SingleSourceNoCv,
    /// One source only, the resume
    SingleSourceOnly,
    /// Multiple secondary sources but absent from the resume
    MissingFromCv,
}

impl ConflictReason {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleSourceNoCv => "single_source_no_cv",
            Self::SingleSourceOnly => "single_source_only",
            Self::MissingFromCv => "missing_from_cv",
        }
    }
}

/// Cross-source conflict audit record for one skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConflict {
    /// Canonical skill name
    pub skill: String,
    /// Why the skill was flagged
    pub reason: ConflictReason,
    /// Severity of the conflict
    pub severity: FactorSeverity,
    /// Sources the skill was found in
    pub sources: Vec<SkillSource>,
    /// Optional explanatory note
    pub note: Option<String>,
}

/// Aggregate hallucination statistics for a submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HallucinationReport {
    /// Skills analyzed
    pub total_skills: usize,
    /// Skills flagged as likely hallucinations
    pub hallucination_count: usize,
    /// Skills at high risk
    pub high_risk_count: usize,
    /// Skills at medium risk
    pub medium_risk_count: usize,
    /// Flagged share of all skills, in percent
    pub hallucination_rate: f64,
    /// Skills flagged as hallucinations
    pub flagged_skills: Vec<String>,
    /// Skills at high or medium risk
    pub suspicious_skills: Vec<String>,
}

/// Complete validation output for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Submission the result belongs to
    pub submission_id: Uuid,
    /// Reference instant the run was scored against
    pub validated_at: DateTime<Utc>,
    /// Per-source availability
    pub sources_analyzed: SourceAvailability,
    /// Distinct canonical skills before filtering
    pub total_skills_raw: usize,
    /// Skills that survived filtering
    pub total_skills_validated: usize,
    /// Surviving skills, ordered by confidence descending
    pub validated_skills: Vec<ValidatedSkill>,
    /// Removed skills with their triggered factors
    pub excluded_skills: Vec<ExcludedSkill>,
    /// Confidence aggregate over surviving skills
    pub profile_confidence: ProfileConfidence,
    /// Hallucination statistics over all scored skills
    pub hallucination_report: HallucinationReport,
    /// Cross-source conflict audit
    pub source_conflicts: Vec<SourceConflict>,
}

/// A repository from the code-hosting profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,
    /// Declared primary language, if any
    pub language: Option<String>,
}

/// Code-hosting profile input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubProfile {
    /// Skills inferred from the profile
    pub skills: Vec<String>,
    /// Public repositories
    pub repositories: Vec<Repository>,
    /// When the profile was collected
    pub collected_at: Option<DateTime<Utc>>,
}

/// A scored reputation-site tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagScore {
    /// Tag name
    pub tag: String,
    /// Accumulated answer score for the tag
    pub score: i64,
}

/// Reputation-site profile input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StackOverflowProfile {
    /// Skills inferred from answered tags
    pub skills: Vec<String>,
    /// Highest-scored tags
    pub top_tags: Vec<TagScore>,
}

/// A skill discovered in a web mention or blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMention {
    /// Raw skill name as discovered
    pub skill: String,
    /// Kind of page the mention came from
    pub source_type: MentionKind,
    /// When the mention was collected
    pub collected_at: Option<DateTime<Utc>>,
}

/// Everything upstream collectors gathered for one candidate.
///
/// Any list may be empty; an empty list is recorded as "not found" and
/// never treated as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSubmission {
    /// Submission identifier
    pub submission_id: Uuid,
    /// Raw skill names from resume extraction
    pub cv_skills: Vec<String>,
    /// Code-hosting profile analysis
    pub github: GithubProfile,
    /// Reputation-site discovery
    pub stackoverflow: StackOverflowProfile,
    /// Web mention discovery
    pub web_mentions: Vec<SkillMention>,
    /// Blog discovery
    pub blog_mentions: Vec<SkillMention>,
}

impl SkillSubmission {
    /// Create an empty submission with a fresh id.
    pub fn new() -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            cv_skills: Vec::new(),
            github: GithubProfile::default(),
            stackoverflow: StackOverflowProfile::default(),
            web_mentions: Vec::new(),
            blog_mentions: Vec::new(),
        }
    }

    /// Set the resume skill list.
    pub fn with_cv_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cv_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the code-hosting profile.
    pub fn with_github(mut self, github: GithubProfile) -> Self {
        self.github = github;
        self
    }

    /// Set the reputation-site profile.
    pub fn with_stackoverflow(mut self, stackoverflow: StackOverflowProfile) -> Self {
        self.stackoverflow = stackoverflow;
        self
    }

    /// Add a web mention.
    pub fn with_web_mention(mut self, mention: SkillMention) -> Self {
        self.web_mentions.push(mention);
        self
    }

    /// Add a blog mention.
    pub fn with_blog_mention(mut self, mention: SkillMention) -> Self {
        self.blog_mentions.push(mention);
        self
    }
}

impl Default for SkillSubmission {
    fn default() -> Self {
        Self::new()
    }
}

/// Error types for the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Registry loading failure
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] lexicon::LexiconError),

    /// Configuration failure
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
