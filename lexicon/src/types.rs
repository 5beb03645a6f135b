//! Core types for the skill registries.
//!
//! These types model the serializable registry document and its entries.
//! Everything here derives `Serialize`/`Deserialize` so a whole lexicon can
//! round-trip through YAML.

use serde::{Deserialize, Serialize};

/// Skill domain, derived deterministically from the canonical name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    /// General-purpose programming languages
    ProgrammingLanguage,
    /// Browser-side frameworks and tooling
    Frontend,
    /// Server-side frameworks
    Backend,
    /// Databases and storage engines
    Database,
    /// Cloud platforms
    Cloud,
    /// Deployment and infrastructure tooling
    Devops,
    /// Machine learning and data science
    MachineLearning,
    /// Test frameworks and QA tooling
    Testing,
    /// Everything without a known category
    Other,
}

impl SkillCategory {
    /// Get string representation (matches the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProgrammingLanguage => "programming_language",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Cloud => "cloud",
            Self::Devops => "devops",
            Self::MachineLearning => "machine_learning",
            Self::Testing => "testing",
            Self::Other => "other",
        }
    }

    /// Human-readable display name for profile output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ProgrammingLanguage => "Programming Languages",
            Self::Frontend => "Frontend Development",
            Self::Backend => "Backend Development",
            Self::Database => "Databases",
            Self::Cloud => "Cloud Platforms",
            Self::Devops => "DevOps & Infrastructure",
            Self::MachineLearning => "Machine Learning & AI",
            Self::Testing => "Testing & QA",
            Self::Other => "Other Skills",
        }
    }

    /// All categories in declaration order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::ProgrammingLanguage,
            Self::Frontend,
            Self::Backend,
            Self::Database,
            Self::Cloud,
            Self::Devops,
            Self::MachineLearning,
            Self::Testing,
            Self::Other,
        ]
    }
}

impl Default for SkillCategory {
    fn default() -> Self {
        Self::Other
    }
}

/// Priority label attached to gap recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    /// Worth closing soon
    High,
    /// Worth closing eventually
    Medium,
    /// Nice to have
    Low,
}

impl GapPriority {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One canonical skill and every variant spelling that maps to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymGroup {
    /// Canonical name all variants resolve to
    pub canonical: String,
    /// Known variant spellings (lower-cased)
    pub variants: Vec<String>,
}

/// Canonical skills belonging to one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySet {
    /// The category
    pub category: SkillCategory,
    /// Canonical skill names in this category
    pub skills: Vec<String>,
}

/// A named set of skills commonly used together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackDefinition {
    /// Display name, e.g. "React Frontend Stack"
    pub name: String,
    /// Canonical member skills
    pub skills: Vec<String>,
    /// How the members relate to each other
    pub relationship: String,
}

/// Rule recommending companion skills when a marker skill is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapRule {
    /// Area the rule covers, e.g. "Frontend Development"
    pub area: String,
    /// Any of these skills triggers the rule
    pub markers: Vec<String>,
    /// Companion skills checked for absence
    pub recommended: Vec<String>,
    /// Priority of closing the gap
    pub priority: GapPriority,
    /// Why the companions matter
    pub reason: String,
}

/// A learning path keyed on one prerequisite skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPath {
    /// Display name, e.g. "Python Data Science"
    pub name: String,
    /// Skill the candidate must already hold
    pub prerequisite: String,
    /// Skills the path teaches
    pub skills: Vec<String>,
    /// Difficulty label, e.g. "intermediate_to_advanced"
    pub level: String,
}

/// Consistency rule tying a skill family to supporting languages.
///
/// A skill whose lowered name contains any keyword is expected to appear
/// alongside at least one supporting skill in the candidate's primary set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRule {
    /// Rule identifier, e.g. "machine_learning"
    pub id: String,
    /// Substrings that place a skill in this family
    pub keywords: Vec<String>,
    /// Skills that make the family plausible
    pub supporting_skills: Vec<String>,
}

/// The complete serializable registry document.
///
/// This is the swappable configuration surface: load one from YAML to
/// replace every table the engine consults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconDocument {
    /// Semantic version of the table set
    pub version: String,
    /// Trailing qualifier words stripped during cleaning
    pub qualifier_suffixes: Vec<String>,
    /// Canonical-variant synonym table
    pub synonyms: Vec<SynonymGroup>,
    /// Category membership table
    pub categories: Vec<CategorySet>,
    /// Generic skill names that carry little signal
    pub vague_skills: Vec<String>,
    /// Skills that need concrete evidence to be credible
    pub evidence_required: Vec<String>,
    /// Domain consistency rules
    pub domain_rules: Vec<DomainRule>,
    /// Stack registry
    pub stacks: Vec<StackDefinition>,
    /// Gap rules
    pub gap_rules: Vec<GapRule>,
    /// Learning paths
    pub learning_paths: Vec<LearningPath>,
}
