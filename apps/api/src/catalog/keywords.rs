//! Keyword weight tables for the text analyzers.
//!
//! All matching is lowercase substring containment, so a keyword also hits
//! inside longer words. Table order is the order hits are reported in.

/// (keyword, weight) pairs.
pub type KeywordTable = &'static [(&'static str, u32)];

/// Technical depth signals in project descriptions.
pub const TECH_KEYWORDS: KeywordTable = &[
    // architecture
    ("microservices", 3), ("serverless", 3), ("event-driven", 3), ("distributed", 3),
    ("real-time", 2), ("scalable", 2), ("high-availability", 3), ("fault-tolerant", 3),
    ("load balancing", 2), ("caching", 2), ("message queue", 2), ("api gateway", 2),
    // ai/ml
    ("machine learning", 3), ("deep learning", 3), ("neural network", 3),
    ("natural language processing", 3), ("nlp", 2), ("computer vision", 3),
    ("tensorflow", 2), ("pytorch", 2), ("transformer", 3), ("bert", 2), ("gpt", 2),
    ("recommendation system", 3), ("classification", 2), ("regression", 2),
    ("clustering", 2), ("reinforcement learning", 3), ("generative ai", 3),
    ("llm", 3), ("fine-tuning", 2), ("rag", 2),
    // web
    ("react", 2), ("angular", 2), ("vue", 2), ("next.js", 2), ("node.js", 2),
    ("express", 1), ("django", 2), ("flask", 1), ("fastapi", 2), ("spring boot", 2),
    ("graphql", 2), ("rest api", 2), ("websocket", 2), ("progressive web app", 2),
    ("responsive", 1), ("authentication", 2), ("oauth", 2), ("jwt", 2),
    // mobile
    ("react native", 2), ("flutter", 2), ("ios", 2), ("android", 2), ("mobile", 1),
    ("cross-platform", 2),
    // data
    ("big data", 2), ("data pipeline", 2), ("etl", 2), ("data warehouse", 2),
    ("analytics", 2), ("visualization", 1), ("dashboard", 1), ("reporting", 1),
    ("spark", 2), ("hadoop", 2), ("kafka", 2), ("elasticsearch", 2),
    // cloud/devops
    ("aws", 2), ("azure", 2), ("gcp", 2), ("docker", 2), ("kubernetes", 3),
    ("ci/cd", 2), ("terraform", 2), ("infrastructure as code", 2),
    ("cloud-native", 2), ("monitoring", 1), ("logging", 1),
    // security
    ("security", 2), ("encryption", 2), ("penetration testing", 3),
    ("vulnerability", 2), ("firewall", 2), ("zero trust", 2),
    // blockchain
    ("blockchain", 2), ("smart contract", 2), ("solidity", 2), ("defi", 2),
    ("web3", 2), ("nft", 1), ("decentralized", 2),
    // quality
    ("testing", 1), ("unit test", 2), ("integration test", 2), ("tdd", 2),
    ("ci/cd pipeline", 2), ("automated", 1), ("performance", 1), ("optimization", 2),
    ("documentation", 1), ("open source", 2), ("contributor", 1),
    // databases
    ("postgresql", 1), ("mongodb", 1), ("redis", 1), ("mysql", 1),
    ("database design", 2), ("sql", 1), ("nosql", 1), ("orm", 1),
    // fundamentals
    ("algorithm", 2), ("data structure", 2), ("design pattern", 2),
    ("system design", 3), ("architecture", 2), ("concurrency", 2),
    ("multithreading", 2), ("async", 1), ("parallel", 2),
];

/// Technologies counted as high-demand in a project's tech stack (lowercase).
pub const HIGH_DEMAND_TECHS: &[&str] = &[
    "react", "angular", "vue", "next.js", "node.js", "python", "django", "flask", "fastapi",
    "spring boot", "docker", "kubernetes", "aws", "azure", "gcp", "tensorflow", "pytorch",
    "postgresql", "mongodb", "redis", "graphql", "typescript", "go", "rust", "kafka",
];

/// Role relevance; the best single hit sets the role score.
pub const ROLE_KEYWORDS: KeywordTable = &[
    ("software engineer", 10), ("software developer", 10),
    ("full stack", 9), ("frontend", 8), ("backend", 8),
    ("data scientist", 10), ("data analyst", 8), ("data engineer", 9),
    ("ml engineer", 10), ("machine learning", 10), ("ai engineer", 10),
    ("devops", 9), ("cloud engineer", 9), ("sre", 9),
    ("security", 8), ("cybersecurity", 9), ("penetration tester", 8),
    ("product manager", 8), ("project manager", 7),
    ("mobile developer", 8), ("ios developer", 8), ("android developer", 8),
    ("blockchain developer", 7), ("web3", 7),
    ("research", 8), ("researcher", 8), ("intern", 5),
    ("technical", 7), ("engineering", 7), ("developer", 7),
    ("analyst", 6), ("associate", 5), ("trainee", 4),
    ("qa engineer", 7), ("test engineer", 7), ("automation", 7),
    ("ui/ux", 7), ("designer", 6),
    ("system administrator", 6), ("network engineer", 7),
    ("database administrator", 7), ("dba", 7),
];

/// Impact language in internship achievements.
pub const ACHIEVEMENT_KEYWORDS: KeywordTable = &[
    ("led", 3), ("managed", 3), ("architected", 4), ("designed", 3),
    ("built", 2), ("developed", 2), ("implemented", 2), ("created", 2),
    ("improved", 3), ("increased", 3), ("reduced", 3), ("optimized", 3),
    ("automated", 3), ("streamlined", 2), ("launched", 3), ("deployed", 2),
    ("mentored", 3), ("collaborated", 2), ("presented", 2), ("published", 3),
    ("awarded", 4), ("recognized", 3), ("promoted", 3), ("selected", 2),
    ("patent", 4), ("paper", 3), ("conference", 3), ("hackathon", 2),
    ("revenue", 3), ("users", 2), ("performance", 2), ("scalability", 3),
    ("million", 3), ("thousand", 2), ("percent", 2), ("%", 2),
    ("first place", 4), ("winner", 3), ("top", 2), ("best", 2),
    ("open source", 3), ("contribution", 2), ("community", 2),
];

/// (section key, words) pairs.
pub type SectionTable = &'static [(&'static str, &'static [&'static str])];

/// Résumé sections: key, header strings (first one is the display header).
pub const SECTION_HEADERS: SectionTable = &[
    ("contact", &["contact", "personal"]),
    (
        "summary",
        &["summary", "professional summary", "objective", "career objective", "about me", "profile"],
    ),
    (
        "experience",
        &["experience", "work experience", "professional experience", "employment", "internship"],
    ),
    ("education", &["education", "academic", "qualifications", "degrees"]),
    (
        "skills",
        &["skills", "technical skills", "competencies", "technologies", "tools", "tech stack"],
    ),
    (
        "certifications",
        &["certifications", "certificates", "credentials", "professional development"],
    ),
    ("projects", &["projects", "personal projects", "academic projects", "portfolio"]),
];

/// Quality indicators per narrative résumé section.
pub const QUALITY_KEYWORDS: SectionTable = &[
    (
        "experience",
        &[
            "developed", "implemented", "designed", "managed", "led", "built", "created",
            "improved", "increased", "reduced", "optimized", "architected", "deployed",
            "automated", "collaborated", "mentored",
        ],
    ),
    (
        "education",
        &[
            "bachelor", "master", "phd", "b.tech", "m.tech", "b.e", "m.e", "gpa", "cgpa",
            "university", "institute", "college",
        ],
    ),
    (
        "skills",
        &[
            "python", "java", "javascript", "react", "node", "sql", "aws", "docker",
            "kubernetes", "git", "linux", "machine learning", "data", "cloud", "agile", "api",
        ],
    ),
    (
        "summary",
        &[
            "experienced", "passionate", "skilled", "proficient", "expertise",
            "results-driven", "innovative",
        ],
    ),
    (
        "certifications",
        &["certified", "aws", "azure", "google cloud", "comptia", "pmp", "scrum"],
    ),
    (
        "projects",
        &[
            "built", "developed", "created", "github", "deployed", "full-stack",
            "machine learning", "web", "mobile",
        ],
    ),
];

/// Looks up a section's entry in one of the keyed tables above.
pub fn section_table(table: SectionTable, key: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(table: KeywordTable) {
        let mut seen = HashSet::new();
        for (kw, _) in table {
            assert!(seen.insert(*kw), "duplicate keyword {kw}");
            assert_eq!(*kw, kw.to_lowercase());
        }
    }

    #[test]
    fn test_tables_have_unique_lowercase_keys() {
        assert_unique(TECH_KEYWORDS);
        assert_unique(ROLE_KEYWORDS);
        assert_unique(ACHIEVEMENT_KEYWORDS);
    }

    #[test]
    fn test_role_weights_cap_at_ten() {
        assert!(ROLE_KEYWORDS.iter().all(|(_, w)| *w <= 10));
    }

    #[test]
    fn test_section_table_lookup() {
        assert_eq!(section_table(SECTION_HEADERS, "education")[0], "education");
        assert!(section_table(QUALITY_KEYWORDS, "contact").is_empty());
    }
}
