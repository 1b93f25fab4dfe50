//! Query domain classification.
//!
//! Maps a free-text query to at most one coarse topical [`Domain`] by keyword
//! substring matching. The classified domain biases ranking: it feeds the
//! project-relevance signal and the additive per-category boost table in
//! [`super::scoring`].

use serde::{Deserialize, Serialize};

/// Coarse topical domains a query can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Jobs,
    Family,
    Travel,
    Health,
    Finance,
    Project,
}

impl Domain {
    /// All domains in classification priority order. The first domain whose
    /// keyword list matches wins; there is no multi-domain blending.
    pub const ALL: [Domain; 6] = [
        Self::Jobs,
        Self::Family,
        Self::Travel,
        Self::Health,
        Self::Finance,
        Self::Project,
    ];

    /// Keywords that signal this domain when present in a query.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Jobs => &[
                "job", "career", "work", "manager", "promotion", "resume", "interview",
            ],
            Self::Family => &["family", "kids", "parent", "child", "partner", "spouse"],
            Self::Travel => &["trip", "travel", "flight", "airport", "vacation"],
            Self::Health => &["health", "exercise", "diet", "doctor", "sleep", "workout"],
            Self::Finance => &["budget", "money", "finance", "savings", "invest", "spend"],
            Self::Project => &["project", "roadmap", "build", "ship", "sprint", "release"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Family => "family",
            Self::Travel => "travel",
            Self::Health => "health",
            Self::Finance => "finance",
            Self::Project => "project",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a query into at most one domain.
///
/// Lower-cases the query and returns the first domain (in [`Domain::ALL`]
/// order) with any keyword appearing as a substring, or `None` if nothing
/// matches.
pub fn classify_query_domain(query: &str) -> Option<Domain> {
    let normalized = query.to_lowercase();
    Domain::ALL.into_iter().find(|domain| {
        domain
            .keywords()
            .iter()
            .any(|keyword| normalized.contains(keyword))
    })
}
