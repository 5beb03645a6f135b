//! Skill Validation Engine (SVE) - cross-source skill credibility scoring
//!
//! Decides, per candidate submission, which claimed skills are credible, at
//! what confidence, and which look fabricated:
//!
//! - **Canonicalization**: variant spellings collapse to one identity
//! - **Confidence scoring**: source-combination matrix plus evidence bonuses
//! - **Risk assessment**: additive hallucination factors with audit trail
//! - **Profile building**: categories, stacks, gaps, learning paths
//!
//! The engine is pure and synchronous: it performs no I/O, holds no shared
//! state, and is a deterministic function of the submission, the reference
//! instant, the configuration, and the loaded lexicon tables.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   ValidationPipeline                        │
//! │                                                             │
//! │  ┌───────────┐  ┌────────────┐  ┌──────────┐  ┌─────────┐  │
//! │  │ Canonical │──│ Confidence │──│  Filter  │──│ Profile │  │
//! │  │   -izer   │  ├────────────┤  │  / Rank  │  │ Builder │  │
//! │  └───────────┘  │    Risk    │  └──────────┘  └─────────┘  │
//! │                 └────────────┘                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod canonical;
pub mod config;
pub mod confidence;
pub mod pipeline;
pub mod profile;
pub mod risk;
pub mod types;

// Re-export main types
pub use canonical::Canonicalizer;
pub use config::EngineConfig;
pub use confidence::ConfidenceScorer;
pub use pipeline::{render_report, ValidationPipeline};
pub use profile::{ProfileBuilder, SkillProfile};
pub use risk::{ProfileContext, RiskAssessor};
pub use types::*;
