//! Skill profile construction.
//!
//! Consumes validated skills and derives the candidate-facing view:
//! category groups, detected stacks, gaps, learning paths, and a templated
//! profile summary. Everything is driven by the lexicon's stack registry
//! and gap rules; there is no generative step.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use lexicon::{SkillCategory, SkillLexicon};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::confidence::{profile_confidence, round2};
use crate::types::{ConfidenceLevel, ProfileConfidence, SkillSource, ValidatedSkill};

/// How many skills the top-skills list keeps.
const TOP_SKILLS: usize = 10;

/// A skill inside a category group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySkill {
    /// Canonical skill name
    pub skill: String,
    /// Final confidence score
    pub confidence_score: u32,
    /// Confidence tier
    pub confidence_level: ConfidenceLevel,
    /// Sources that asserted the skill
    pub sources: Vec<SkillSource>,
}

/// One category's slice of the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Human-readable category name
    pub category_name: String,
    /// Number of skills in the category
    pub skill_count: usize,
    /// Mean confidence across the category
    pub average_confidence: f64,
    /// Skills, highest confidence first
    pub skills: Vec<CategorySkill>,
}

/// Skill names grouped by confidence tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfidenceGroups {
    /// Expert-tier skills
    pub expert: Vec<String>,
    /// High-tier skills
    pub high: Vec<String>,
    /// Medium-tier skills
    pub medium: Vec<String>,
    /// Low-tier skills
    pub low: Vec<String>,
}

/// A stack from the registry the candidate partially or fully covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackMatch {
    /// Stack name from the registry
    pub stack_name: String,
    /// Member skills the candidate holds
    pub skills_present: Vec<String>,
    /// Member skills the candidate lacks
    pub skills_missing: Vec<String>,
    /// Held share of the stack, in percent
    pub completion_rate: f64,
    /// Relationship label from the registry
    pub relationship_type: String,
}

/// A recommended-skill gap relative to a detected marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    /// Area the gap concerns
    pub gap_area: String,
    /// Companion skills the candidate lacks
    pub missing_skills: Vec<String>,
    /// Priority label
    pub priority: lexicon::GapPriority,
    /// Why the companions matter
    pub reason: String,
}

/// A learning path the candidate is positioned to pursue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningRecommendation {
    /// Path name from the registry
    pub learning_path: String,
    /// Prerequisite skill the candidate holds
    pub prerequisite_met: String,
    /// Path skills still to learn
    pub skills_to_learn: Vec<String>,
    /// Path skills already held
    pub skills_already_have: Vec<String>,
    /// Held share of the path, in percent
    pub completion_percentage: f64,
    /// Difficulty label from the registry
    pub difficulty_level: String,
}

/// Overall strength label for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStrength {
    /// Broad, deep, well-evidenced
    Exceptional,
    /// Strong with several expert skills
    Strong,
    /// Solid overall confidence
    Good,
    /// Moderate confidence
    Developing,
    /// Little validated signal yet
    Emerging,
}

impl ProfileStrength {
    /// Fixed threshold function of overall confidence plus expert/high
    /// counts.
    pub fn assess(overall_confidence: f64, expert_count: usize, high_count: usize) -> Self {
        if overall_confidence >= 85.0 && expert_count >= 5 {
            Self::Exceptional
        } else if overall_confidence >= 75.0 && expert_count + high_count >= 8 {
            Self::Strong
        } else if overall_confidence >= 65.0 {
            Self::Good
        } else if overall_confidence >= 50.0 {
            Self::Developing
        } else {
            Self::Emerging
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exceptional => "exceptional",
            Self::Strong => "strong",
            Self::Good => "good",
            Self::Developing => "developing",
            Self::Emerging => "emerging",
        }
    }
}

/// A category and how many validated skills it holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Human-readable category name
    pub category: String,
    /// Number of skills
    pub skill_count: usize,
}

/// Templated summary of the whole profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Number of validated skills
    pub total_skills: usize,
    /// Display name of the dominant category, if any skills exist
    pub primary_domain: Option<String>,
    /// Skill count in the dominant category
    pub primary_domain_skill_count: usize,
    /// Mean confidence across the profile
    pub overall_confidence: f64,
    /// Largest categories, descending
    pub top_categories: Vec<CategoryCount>,
    /// Strength label
    pub profile_strength: ProfileStrength,
    /// One-paragraph description
    pub description: String,
}

/// The complete derived skill profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillProfile {
    /// Confidence aggregate the profile was built from
    pub profile_confidence: ProfileConfidence,
    /// Per-category breakdowns
    pub skills_by_category: BTreeMap<SkillCategory, CategoryBreakdown>,
    /// Skill names grouped by tier
    pub skills_by_confidence: ConfidenceGroups,
    /// Strongest skills, highest confidence first
    pub top_skills: Vec<ValidatedSkill>,
    /// Stacks the candidate partially or fully covers
    pub skill_relationships: Vec<StackMatch>,
    /// Companion-skill gaps
    pub skill_gaps: Vec<SkillGap>,
    /// Learning paths worth pursuing
    pub recommended_learning: Vec<LearningRecommendation>,
    /// Templated summary
    pub summary: ProfileSummary,
}

/// Builder for candidate skill profiles.
pub struct ProfileBuilder {
    lexicon: Arc<SkillLexicon>,
}

impl ProfileBuilder {
    /// Create a builder over the given lexicon.
    pub fn new(lexicon: Arc<SkillLexicon>) -> Self {
        Self { lexicon }
    }

    /// Build the profile for a set of validated skills.
    pub fn build(&self, validated: &[ValidatedSkill]) -> SkillProfile {
        let mut skills: Vec<ValidatedSkill> = validated.to_vec();
        skills.sort_by(|a, b| {
            b.confidence_score
                .cmp(&a.confidence_score)
                .then_with(|| a.skill.cmp(&b.skill))
        });

        let held: BTreeSet<&str> = skills.iter().map(|s| s.skill.as_str()).collect();
        let confidence = profile_confidence(&skills);

        let by_category = self.categorize(&skills);
        let summary = self.summarize(&skills, &confidence, &by_category);

        let profile = SkillProfile {
            skills_by_category: by_category,
            skills_by_confidence: group_by_confidence(&skills),
            top_skills: skills.iter().take(TOP_SKILLS).cloned().collect(),
            skill_relationships: self.detect_stacks(&held),
            skill_gaps: self.detect_gaps(&held),
            recommended_learning: self.recommend_learning(&held),
            summary,
            profile_confidence: confidence,
        };

        info!(
            skills = skills.len(),
            categories = profile.skills_by_category.len(),
            stacks = profile.skill_relationships.len(),
            "Skill profile built"
        );

        profile
    }

    /// Group skills by category, highest confidence first within each.
    fn categorize(
        &self,
        skills: &[ValidatedSkill],
    ) -> BTreeMap<SkillCategory, CategoryBreakdown> {
        let mut grouped: BTreeMap<SkillCategory, Vec<CategorySkill>> = BTreeMap::new();

        for skill in skills {
            grouped
                .entry(skill.category)
                .or_default()
                .push(CategorySkill {
                    skill: skill.skill.clone(),
                    confidence_score: skill.confidence_score,
                    confidence_level: skill.confidence_level,
                    sources: skill.sources.clone(),
                });
        }

        grouped
            .into_iter()
            .map(|(category, skills)| {
                let sum: u64 = skills.iter().map(|s| s.confidence_score as u64).sum();
                let average = round2(sum as f64 / skills.len() as f64);
                (
                    category,
                    CategoryBreakdown {
                        category_name: category.display_name().to_string(),
                        skill_count: skills.len(),
                        average_confidence: average,
                        skills,
                    },
                )
            })
            .collect()
    }

    /// Intersect the candidate's skills with the stack registry.
    fn detect_stacks(&self, held: &BTreeSet<&str>) -> Vec<StackMatch> {
        let mut matches = Vec::new();

        for stack in self.lexicon.stacks() {
            let present: Vec<String> = stack
                .skills
                .iter()
                .filter(|s| held.contains(s.as_str()))
                .cloned()
                .collect();

            if present.len() < 2 {
                continue;
            }

            let missing: Vec<String> = stack
                .skills
                .iter()
                .filter(|s| !held.contains(s.as_str()))
                .cloned()
                .collect();

            matches.push(StackMatch {
                stack_name: stack.name.clone(),
                completion_rate: round2(present.len() as f64 / stack.skills.len() as f64 * 100.0),
                skills_present: present,
                skills_missing: missing,
                relationship_type: stack.relationship.clone(),
            });
        }

        matches.sort_by(|a, b| {
            b.completion_rate
                .partial_cmp(&a.completion_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.stack_name.cmp(&b.stack_name))
        });
        matches
    }

    /// Apply the gap rules: a held marker skill checks its companion set.
    fn detect_gaps(&self, held: &BTreeSet<&str>) -> Vec<SkillGap> {
        let mut gaps = Vec::new();

        for rule in self.lexicon.gap_rules() {
            if !rule.markers.iter().any(|m| held.contains(m.as_str())) {
                continue;
            }

            let missing: Vec<String> = rule
                .recommended
                .iter()
                .filter(|s| !held.contains(s.as_str()))
                .cloned()
                .collect();

            if !missing.is_empty() {
                gaps.push(SkillGap {
                    gap_area: rule.area.clone(),
                    missing_skills: missing,
                    priority: rule.priority,
                    reason: rule.reason.clone(),
                });
            }
        }

        gaps
    }

    /// Recommend registry learning paths whose prerequisite the candidate
    /// holds but which are not yet complete.
    fn recommend_learning(&self, held: &BTreeSet<&str>) -> Vec<LearningRecommendation> {
        let mut recommendations = Vec::new();

        for path in self.lexicon.learning_paths() {
            if !held.contains(path.prerequisite.as_str()) {
                continue;
            }

            let already_have: Vec<String> = path
                .skills
                .iter()
                .filter(|s| held.contains(s.as_str()))
                .cloned()
                .collect();
            let to_learn: Vec<String> = path
                .skills
                .iter()
                .filter(|s| !held.contains(s.as_str()))
                .cloned()
                .collect();

            if to_learn.is_empty() {
                continue;
            }

            recommendations.push(LearningRecommendation {
                learning_path: path.name.clone(),
                prerequisite_met: path.prerequisite.clone(),
                completion_percentage: round2(
                    already_have.len() as f64 / path.skills.len() as f64 * 100.0,
                ),
                skills_to_learn: to_learn,
                skills_already_have: already_have,
                difficulty_level: path.level.clone(),
            });
        }

        recommendations.sort_by(|a, b| {
            b.completion_percentage
                .partial_cmp(&a.completion_percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.learning_path.cmp(&b.learning_path))
        });
        recommendations
    }

    /// Build the templated summary.
    fn summarize(
        &self,
        skills: &[ValidatedSkill],
        confidence: &ProfileConfidence,
        by_category: &BTreeMap<SkillCategory, CategoryBreakdown>,
    ) -> ProfileSummary {
        let mut category_counts: Vec<(SkillCategory, usize)> = by_category
            .iter()
            .map(|(category, breakdown)| (*category, breakdown.skill_count))
            .collect();
        category_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let primary = category_counts.first().copied();
        let strength = ProfileStrength::assess(
            confidence.overall_confidence,
            confidence.expert_skills,
            confidence.high_confidence_skills,
        );

        ProfileSummary {
            total_skills: skills.len(),
            primary_domain: primary.map(|(category, _)| category.display_name().to_string()),
            primary_domain_skill_count: primary.map(|(_, count)| count).unwrap_or(0),
            overall_confidence: confidence.overall_confidence,
            top_categories: category_counts
                .iter()
                .take(5)
                .map(|(category, count)| CategoryCount {
                    category: category.display_name().to_string(),
                    skill_count: *count,
                })
                .collect(),
            profile_strength: strength,
            description: describe(skills.len(), confidence, primary, strength),
        }
    }
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new(Arc::new(SkillLexicon::builtin()))
    }
}

/// Group skill names by confidence tier.
fn group_by_confidence(skills: &[ValidatedSkill]) -> ConfidenceGroups {
    let mut groups = ConfidenceGroups::default();

    for skill in skills {
        match skill.confidence_level {
            ConfidenceLevel::Expert => groups.expert.push(skill.skill.clone()),
            ConfidenceLevel::High => groups.high.push(skill.skill.clone()),
            ConfidenceLevel::Medium => groups.medium.push(skill.skill.clone()),
            ConfidenceLevel::Low => groups.low.push(skill.skill.clone()),
            ConfidenceLevel::VeryLow | ConfidenceLevel::None => {}
        }
    }

    groups
}

/// Synthesize the one-paragraph description from fixed sentence templates.
fn describe(
    total_skills: usize,
    confidence: &ProfileConfidence,
    primary: Option<(SkillCategory, usize)>,
    strength: ProfileStrength,
) -> String {
    let primary_domain = match primary {
        Some((category, _)) => category.display_name(),
        None => return "No validated skills found in profile.".to_string(),
    };

    let mut description = format!(
        "This profile demonstrates {} technical expertise with {} validated skills. \
         The primary focus area is {}. ",
        strength.as_str(),
        total_skills,
        primary_domain
    );

    if confidence.expert_skills > 0 {
        description.push_str(&format!(
            "Shows expert-level proficiency in {} skill(s). ",
            confidence.expert_skills
        ));
    }
    if confidence.high_confidence_skills > 0 {
        description.push_str(&format!(
            "Strong competency in {} additional skill(s). ",
            confidence.high_confidence_skills
        ));
    }

    description.push_str(&format!(
        "Overall confidence score: {:.1}/100.",
        confidence.overall_confidence
    ));

    description
}
