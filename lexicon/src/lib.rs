//! Skill Registries for the Credence Validation Engine
//!
//! This crate holds the versioned static tables the engine resolves skills
//! against:
//!
//! - **Synonym table**: variant spellings collapsed to one canonical name
//! - **Category table**: canonical name to skill domain
//! - **Vocabularies**: vague skills and skills requiring concrete evidence
//! - **Domain rules**: skill families and the languages that support them
//! - **Stack registry**: named skill sets commonly used together
//! - **Gap rules / learning paths**: companion-skill recommendations
//!
//! Tables ship with built-in defaults and can be swapped wholesale by
//! loading a [`LexiconDocument`] from YAML, so tests can substitute minimal
//! fixtures and deployments can version their vocabulary independently of
//! the engine.
//!
//! # Example
//!
//! ```
//! use lexicon::SkillLexicon;
//!
//! let lexicon = SkillLexicon::builtin();
//! assert_eq!(lexicon.canonical_of("py"), Some("python"));
//! ```

pub mod builtin;
pub mod lexicon;
pub mod types;

// Re-export main types
pub use lexicon::{LexiconError, SkillLexicon};
pub use types::*;
