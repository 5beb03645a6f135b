//! Registry assembly and lookup.
//!
//! A [`SkillLexicon`] is built from a [`LexiconDocument`] (the built-in one
//! or a YAML-loaded replacement) and answers every table lookup the engine
//! makes. Assembly precomputes the reverse variant map so lookups stay
//! cheap.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::info;

use crate::builtin;
use crate::types::{
    DomainRule, GapRule, LearningPath, LexiconDocument, SkillCategory, StackDefinition,
};

/// Error types for registry loading.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// Failed to read a registry file
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a registry document
    #[error("Failed to parse lexicon document: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Assembled, lookup-ready registry tables.
pub struct SkillLexicon {
    document: LexiconDocument,
    /// variant -> canonical; later groups win on collision
    variant_map: HashMap<String, String>,
    /// canonical -> known variants
    synonym_map: HashMap<String, Vec<String>>,
    /// canonical -> category
    category_map: HashMap<String, SkillCategory>,
    vague: HashSet<String>,
    evidence_required: HashSet<String>,
}

impl SkillLexicon {
    /// Build the lexicon from the built-in default tables.
    pub fn builtin() -> Self {
        Self::from_document(builtin::document())
    }

    /// Build a lexicon from a registry document.
    pub fn from_document(document: LexiconDocument) -> Self {
        let mut variant_map = HashMap::new();
        let mut synonym_map = HashMap::new();
        for group in &document.synonyms {
            for variant in &group.variants {
                variant_map.insert(
                    variant.to_lowercase().trim().to_string(),
                    group.canonical.clone(),
                );
            }
            synonym_map.insert(group.canonical.clone(), group.variants.clone());
        }

        let mut category_map = HashMap::new();
        for set in &document.categories {
            for skill in &set.skills {
                category_map.insert(skill.clone(), set.category);
            }
        }

        let vague = document.vague_skills.iter().cloned().collect();
        let evidence_required = document.evidence_required.iter().cloned().collect();

        info!(
            version = %document.version,
            variants = variant_map.len(),
            categories = category_map.len(),
            stacks = document.stacks.len(),
            "Skill lexicon assembled"
        );

        Self {
            document,
            variant_map,
            synonym_map,
            category_map,
            vague,
            evidence_required,
        }
    }

    /// Parse a lexicon from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, LexiconError> {
        let document: LexiconDocument = serde_yaml::from_str(yaml)?;
        Ok(Self::from_document(document))
    }

    /// Load a lexicon from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Serialize the underlying document to YAML.
    pub fn to_yaml(&self) -> Result<String, LexiconError> {
        Ok(serde_yaml::to_string(&self.document)?)
    }

    /// Version of the loaded table set.
    pub fn version(&self) -> &str {
        &self.document.version
    }

    /// Trailing qualifier words to strip during cleaning.
    pub fn qualifier_suffixes(&self) -> &[String] {
        &self.document.qualifier_suffixes
    }

    /// Look up the canonical form of a cleaned (lower-cased, trimmed,
    /// de-qualified) skill string.
    pub fn canonical_of(&self, cleaned: &str) -> Option<&str> {
        self.variant_map.get(cleaned).map(String::as_str)
    }

    /// Known variants of a canonical skill, if the table has the group.
    pub fn synonyms_of(&self, canonical: &str) -> Option<&[String]> {
        self.synonym_map.get(canonical).map(Vec::as_slice)
    }

    /// Category of a canonical skill; unknown skills are [`SkillCategory::Other`].
    pub fn category_of(&self, canonical: &str) -> SkillCategory {
        self.category_map
            .get(canonical)
            .copied()
            .unwrap_or_default()
    }

    /// Whether the canonical skill is in the vague vocabulary.
    pub fn is_vague(&self, canonical: &str) -> bool {
        self.vague.contains(canonical)
    }

    /// Whether the canonical skill requires concrete evidence.
    pub fn requires_evidence(&self, canonical: &str) -> bool {
        self.evidence_required.contains(canonical)
    }

    /// Domain consistency rules.
    pub fn domain_rules(&self) -> &[DomainRule] {
        &self.document.domain_rules
    }

    /// Stack registry.
    pub fn stacks(&self) -> &[StackDefinition] {
        &self.document.stacks
    }

    /// Gap rules.
    pub fn gap_rules(&self) -> &[GapRule] {
        &self.document.gap_rules
    }

    /// Learning paths.
    pub fn learning_paths(&self) -> &[LearningPath] {
        &self.document.learning_paths
    }

    /// Number of variant spellings in the table.
    pub fn variant_count(&self) -> usize {
        self.variant_map.len()
    }
}

impl Default for SkillLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
