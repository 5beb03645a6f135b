//! Skill name canonicalization.
//!
//! Collapses variant spellings ("Python", "python3", "PY") to one canonical
//! identity and derives the skill category. Canonicalization is pure, total,
//! and idempotent: it never fails, and feeding its output back in returns
//! the same string.

use std::collections::BTreeMap;
use std::sync::Arc;

use lexicon::{SkillCategory, SkillLexicon};
use tracing::debug;

/// Canonicalizer over a loaded skill lexicon.
#[derive(Clone)]
pub struct Canonicalizer {
    lexicon: Arc<SkillLexicon>,
    /// Minimum cleaned length for a raw string to count as a skill
    min_length: usize,
}

impl Canonicalizer {
    /// Create a canonicalizer over the given lexicon.
    pub fn new(lexicon: Arc<SkillLexicon>) -> Self {
        Self {
            lexicon,
            min_length: 1,
        }
    }

    /// Set the minimum accepted skill-name length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Lower-case, trim, and strip one trailing qualifier word
    /// ("framework", "library", "lang", "language", "programming").
    fn clean(&self, raw: &str) -> String {
        let cleaned = raw.to_lowercase();
        let cleaned = cleaned.trim();

        if let Some((head, tail)) = cleaned.rsplit_once(char::is_whitespace) {
            if self
                .lexicon
                .qualifier_suffixes()
                .iter()
                .any(|suffix| suffix == tail)
            {
                return head.trim().to_string();
            }
        }

        cleaned.to_string()
    }

    /// Normalize a raw skill name to its canonical form.
    ///
    /// Unknown skills fall back to a title-cased cleaned string so novel
    /// names still get a stable, readable identity.
    pub fn canonicalize(&self, raw: &str) -> String {
        let cleaned = self.clean(raw);
        if cleaned.is_empty() {
            return cleaned;
        }

        if let Some(canonical) = self.lexicon.canonical_of(&cleaned) {
            return canonical.to_string();
        }

        debug!(skill = %cleaned, "No canonical mapping, title-casing");
        title_case(&cleaned)
    }

    /// Normalize a raw name and derive its category in one step.
    pub fn resolve(&self, raw: &str) -> (String, SkillCategory) {
        let canonical = self.canonicalize(raw);
        let category = self.lexicon.category_of(&canonical);
        (canonical, category)
    }

    /// Category of an already-canonical skill name.
    pub fn categorize(&self, canonical: &str) -> SkillCategory {
        self.lexicon.category_of(canonical)
    }

    /// Whether a raw string is structurally a skill name: non-empty after
    /// trimming, not pure digits, not pure symbols.
    pub fn is_valid_skill(&self, raw: &str) -> bool {
        let cleaned = raw.trim();

        if cleaned.chars().count() < self.min_length {
            return false;
        }
        if cleaned.chars().all(|c| c.is_numeric()) {
            return false;
        }
        if !cleaned.chars().any(|c| c.is_alphanumeric()) {
            return false;
        }

        true
    }

    /// Normalize a list of raw names to sorted, unique canonical forms.
    /// Structurally invalid entries are dropped.
    pub fn normalize_all<I, S>(&self, raws: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonicals: Vec<String> = raws
            .into_iter()
            .filter(|raw| self.is_valid_skill(raw.as_ref()))
            .map(|raw| self.canonicalize(raw.as_ref()))
            .collect();

        canonicals.sort();
        canonicals.dedup();
        canonicals
    }

    /// Merge several raw lists into one normalized, deduplicated list.
    pub fn merge_lists(&self, lists: &[&[String]]) -> Vec<String> {
        self.normalize_all(lists.iter().flat_map(|list| list.iter()))
    }

    /// Group raw names by their canonical form, preserving the observed
    /// variants.
    pub fn group_variants<I, S>(&self, raws: I) -> BTreeMap<String, Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for raw in raws {
            let raw = raw.as_ref();
            if !self.is_valid_skill(raw) {
                continue;
            }
            let canonical = self.canonicalize(raw);
            let variants = groups.entry(canonical).or_default();
            if !variants.iter().any(|v| v == raw) {
                variants.push(raw.to_string());
            }
        }

        groups
    }

    /// Known synonyms of a skill, the canonical form itself if none.
    pub fn synonyms_of(&self, raw: &str) -> Vec<String> {
        let canonical = self.canonicalize(raw);
        match self.lexicon.synonyms_of(&canonical) {
            Some(variants) => variants.to_vec(),
            None => vec![canonical],
        }
    }
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(cleaned: &str) -> String {
    cleaned
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonicalizer() -> Canonicalizer {
        Canonicalizer::new(Arc::new(SkillLexicon::builtin()))
    }

    #[test]
    fn test_variant_invariance() {
        let c = canonicalizer();
        for raw in ["Python", "python", "Python3", "PY", "python 3"] {
            assert_eq!(c.canonicalize(raw), "python", "raw: {raw}");
        }
    }

    #[test]
    fn test_qualifier_stripping() {
        let c = canonicalizer();
        assert_eq!(c.canonicalize("rust lang"), "rust");
        assert_eq!(c.canonicalize("R programming"), "r");
        assert_eq!(c.canonicalize("Flask framework"), "flask");
    }

    #[test]
    fn test_unknown_skill_title_cased() {
        let c = canonicalizer();
        assert_eq!(c.canonicalize("quantum annealing"), "Quantum Annealing");
    }

    #[test]
    fn test_idempotence() {
        let c = canonicalizer();
        for raw in ["Python", "js", "quantum annealing", "Rust Lang", "K8S"] {
            let once = c.canonicalize(raw);
            assert_eq!(c.canonicalize(&once), once, "raw: {raw}");
        }
    }

    #[test]
    fn test_resolve_categories() {
        let c = canonicalizer();
        assert_eq!(
            c.resolve("py"),
            ("python".to_string(), SkillCategory::ProgrammingLanguage)
        );
        assert_eq!(
            c.resolve("reactjs"),
            ("react".to_string(), SkillCategory::Frontend)
        );
        assert_eq!(
            c.resolve("underwater basket weaving").1,
            SkillCategory::Other
        );
    }

    #[test]
    fn test_validity() {
        let c = canonicalizer();
        assert!(c.is_valid_skill("python"));
        assert!(c.is_valid_skill("c"));
        assert!(c.is_valid_skill("c++"));
        assert!(!c.is_valid_skill(""));
        assert!(!c.is_valid_skill("   "));
        assert!(!c.is_valid_skill("12345"));
        assert!(!c.is_valid_skill("++--!!"));
    }

    #[test]
    fn test_min_length() {
        let c = canonicalizer().with_min_length(2);
        assert!(!c.is_valid_skill("c"));
        assert!(c.is_valid_skill("go"));
    }

    #[test]
    fn test_normalize_all_dedupes_and_sorts() {
        let c = canonicalizer();
        let normalized = c.normalize_all(["Python", "python", "Python3", "JavaScript", "js"]);
        assert_eq!(normalized, vec!["javascript", "python"]);
    }

    #[test]
    fn test_normalize_all_drops_invalid() {
        let c = canonicalizer();
        let normalized = c.normalize_all(["", "42", "***", "go"]);
        assert_eq!(normalized, vec!["go"]);
    }

    #[test]
    fn test_merge_lists() {
        let c = canonicalizer();
        let cv = vec!["Python".to_string(), "Docker".to_string()];
        let github = vec!["py".to_string(), "k8s".to_string()];
        let merged = c.merge_lists(&[&cv, &github]);
        assert_eq!(merged, vec!["docker", "kubernetes", "python"]);
    }

    #[test]
    fn test_group_variants() {
        let c = canonicalizer();
        let groups = c.group_variants(["Python", "python3", "Python", "js"]);
        assert_eq!(
            groups.get("python").unwrap(),
            &vec!["Python".to_string(), "python3".to_string()]
        );
        assert_eq!(groups.get("javascript").unwrap(), &vec!["js".to_string()]);
    }

    #[test]
    fn test_synonyms_of() {
        let c = canonicalizer();
        let synonyms = c.synonyms_of("golang");
        assert!(synonyms.contains(&"go".to_string()));

        assert_eq!(
            c.synonyms_of("quantum annealing"),
            vec!["Quantum Annealing".to_string()]
        );
    }
}
