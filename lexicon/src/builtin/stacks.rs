//! Default stack registry, gap rules, and learning paths.

use crate::types::{GapPriority, GapRule, LearningPath, StackDefinition};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Default stack registry.
pub fn stack_definitions() -> Vec<StackDefinition> {
    let complementary = |name: &str, skills: &[&str]| StackDefinition {
        name: name.to_string(),
        skills: strings(skills),
        relationship: "complementary".to_string(),
    };

    vec![
        complementary("React Frontend Stack", &["react", "javascript", "typescript"]),
        complementary("Django Backend Stack", &["python", "django", "postgresql"]),
        complementary("DevOps Stack", &["docker", "kubernetes", "aws"]),
        complementary("Data Science Stack", &["python", "pandas", "numpy", "jupyter"]),
        complementary(
            "Machine Learning Stack",
            &["python", "tensorflow", "pytorch", "scikit-learn"],
        ),
        complementary(
            "Full Stack JavaScript",
            &["javascript", "react", "node.js", "express"],
        ),
    ]
}

/// Default gap rules.
pub fn gap_rules() -> Vec<GapRule> {
    vec![
        GapRule {
            area: "Frontend Development".to_string(),
            markers: strings(&["react", "vue", "angular"]),
            recommended: strings(&["typescript", "jest", "webpack", "git"]),
            priority: GapPriority::High,
            reason: "Common tools for modern frontend development".to_string(),
        },
        GapRule {
            area: "Backend Development".to_string(),
            markers: strings(&["django", "flask", "fastapi"]),
            recommended: strings(&["postgresql", "redis", "docker", "git"]),
            priority: GapPriority::High,
            reason: "Essential backend infrastructure skills".to_string(),
        },
        GapRule {
            area: "DevOps".to_string(),
            markers: strings(&["docker", "kubernetes"]),
            recommended: strings(&["terraform", "jenkins", "aws"]),
            priority: GapPriority::Medium,
            reason: "Complete DevOps toolkit".to_string(),
        },
        GapRule {
            area: "Data Science".to_string(),
            markers: strings(&["pandas", "numpy"]),
            recommended: strings(&["jupyter", "scikit-learn", "matplotlib"]),
            priority: GapPriority::Medium,
            reason: "Standard data science tools".to_string(),
        },
    ]
}

/// Default learning paths.
pub fn learning_paths() -> Vec<LearningPath> {
    let path = |name: &str, prerequisite: &str, skills: &[&str], level: &str| LearningPath {
        name: name.to_string(),
        prerequisite: prerequisite.to_string(),
        skills: strings(skills),
        level: level.to_string(),
    };

    vec![
        path(
            "Advanced React Development",
            "react",
            &["next.js", "redux", "graphql"],
            "intermediate_to_advanced",
        ),
        path(
            "Full Stack JavaScript",
            "javascript",
            &["node.js", "express", "mongodb"],
            "intermediate",
        ),
        path(
            "Python Data Science",
            "python",
            &["pandas", "numpy", "scikit-learn", "jupyter"],
            "intermediate",
        ),
        path(
            "Machine Learning Engineer",
            "python",
            &["tensorflow", "pytorch", "docker", "aws"],
            "advanced",
        ),
        path(
            "Cloud Infrastructure",
            "docker",
            &["kubernetes", "terraform", "aws"],
            "intermediate_to_advanced",
        ),
    ]
}
