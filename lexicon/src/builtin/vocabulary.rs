//! Default risk vocabularies and domain consistency rules.

use crate::types::DomainRule;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Trailing qualifier words stripped before canonical lookup.
pub fn qualifier_suffixes() -> Vec<String> {
    strings(&["framework", "library", "lang", "language", "programming"])
}

/// Generic skill names that carry little signal on their own.
pub fn vague_skills() -> Vec<String> {
    strings(&[
        "coding",
        "programming",
        "software",
        "development",
        "technology",
        "computer science",
        "it",
        "web",
        "mobile",
        "desktop",
        "frontend",
        "backend",
        "fullstack",
        "data",
        "analytics",
        "management",
        "leadership",
        "communication",
        "teamwork",
        "problem solving",
        "critical thinking",
        "agile",
        "scrum",
    ])
}

/// Skills that need concrete evidence (repositories, commits, articles, or
/// reputation) before they are believed.
pub fn evidence_required() -> Vec<String> {
    strings(&[
        "machine learning",
        "deep learning",
        "artificial intelligence",
        "blockchain",
        "cryptocurrency",
        "quantum computing",
        "embedded systems",
        "robotics",
        "iot",
        "cybersecurity",
        "penetration testing",
        "ethical hacking",
    ])
}

/// Default domain consistency rules.
pub fn domain_rules() -> Vec<DomainRule> {
    vec![
        DomainRule {
            id: "machine_learning".to_string(),
            keywords: strings(&[
                "machine learning",
                "deep learning",
                "tensorflow",
                "pytorch",
                "keras",
            ]),
            supporting_skills: strings(&["python", "r", "julia"]),
        },
        DomainRule {
            id: "mobile".to_string(),
            keywords: strings(&["ios", "android", "mobile", "swift", "kotlin"]),
            supporting_skills: strings(&[
                "swift",
                "kotlin",
                "java",
                "react native",
                "flutter",
            ]),
        },
        DomainRule {
            id: "blockchain".to_string(),
            keywords: strings(&["blockchain", "solidity", "smart contract", "ethereum"]),
            supporting_skills: strings(&["solidity", "rust", "go", "javascript"]),
        },
    ]
}
