//! Built-in registry defaults.
//!
//! Each submodule provides the default content for one concern, assembled
//! into a complete [`LexiconDocument`] by [`document`]. Deployments that
//! need different vocabulary load their own document instead.

mod categories;
mod stacks;
mod synonyms;
mod vocabulary;

pub use categories::category_sets;
pub use stacks::{gap_rules, learning_paths, stack_definitions};
pub use synonyms::synonym_groups;
pub use vocabulary::{domain_rules, evidence_required, qualifier_suffixes, vague_skills};

use crate::types::LexiconDocument;

/// Version of the built-in table set.
pub const BUILTIN_VERSION: &str = "1.0.0";

/// Assemble the complete built-in registry document.
pub fn document() -> LexiconDocument {
    LexiconDocument {
        version: BUILTIN_VERSION.to_string(),
        qualifier_suffixes: qualifier_suffixes(),
        synonyms: synonym_groups(),
        categories: category_sets(),
        vague_skills: vague_skills(),
        evidence_required: evidence_required(),
        domain_rules: domain_rules(),
        stacks: stack_definitions(),
        gap_rules: gap_rules(),
        learning_paths: learning_paths(),
    }
}
