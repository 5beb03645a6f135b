//! Default category membership table.

use crate::types::{CategorySet, SkillCategory};

fn set(category: SkillCategory, skills: &[&str]) -> CategorySet {
    CategorySet {
        category,
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// Default category sets, keyed by canonical name. Skills in no set fall
/// back to [`SkillCategory::Other`].
pub fn category_sets() -> Vec<CategorySet> {
    vec![
        set(
            SkillCategory::ProgrammingLanguage,
            &[
                "python", "javascript", "typescript", "java", "c++", "c#", "c", "go",
                "rust", "ruby", "php", "swift", "kotlin", "r", "scala", "perl", "shell",
            ],
        ),
        set(
            SkillCategory::Frontend,
            &[
                "react", "vue", "angular", "svelte", "next.js", "nuxt", "gatsby",
                "tailwind", "bootstrap", "sass", "webpack", "vite",
            ],
        ),
        set(
            SkillCategory::Backend,
            &[
                "django", "flask", "fastapi", "express", "nest.js", "spring",
                "asp.net", "rails", "laravel",
            ],
        ),
        set(
            SkillCategory::Database,
            &[
                "postgresql", "mysql", "mongodb", "redis", "elasticsearch",
                "cassandra", "dynamodb", "sqlite", "mariadb", "oracle", "mssql",
            ],
        ),
        set(
            SkillCategory::Cloud,
            &["aws", "azure", "gcp", "heroku", "digitalocean"],
        ),
        set(
            SkillCategory::Devops,
            &[
                "docker", "kubernetes", "jenkins", "gitlab", "github actions",
                "terraform", "ansible", "circleci",
            ],
        ),
        set(
            SkillCategory::MachineLearning,
            &[
                "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy", "keras",
                "jupyter",
            ],
        ),
        set(
            SkillCategory::Testing,
            &["pytest", "jest", "mocha", "selenium", "cypress"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_skill_in_two_categories() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        for set in category_sets() {
            for skill in set.skills {
                assert!(seen.insert(skill.clone()), "'{}' categorized twice", skill);
            }
        }
    }

    #[test]
    fn test_other_has_no_explicit_set() {
        assert!(category_sets()
            .iter()
            .all(|s| s.category != SkillCategory::Other));
    }
}
