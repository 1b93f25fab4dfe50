//! Blended retrieval scoring.
//!
//! Five independent signals — similarity, recency, importance, confidence,
//! project relevance — are combined by a weighted sum, then an additive
//! per-domain category boost is applied on top. Every scorer here is total:
//! malformed or missing fields degrade to documented neutral values, and the
//! result is a pure function of `(record, similarity, domain, now)`.

use chrono::{DateTime, Utc};

use super::domain::Domain;
use crate::memory::types::{MemoryCategory, MemoryRecord};

// ── Weights for the blended scoring function ──────────────────────────────────
//
// Similarity dominates; the rest are tie-breakers among semantically similar
// candidates. The domain boost is additive on top of the weighted sum and is
// intentionally allowed to outweigh a weak similarity signal.

pub const W_SIM: f64 = 0.6;
pub const W_REC: f64 = 0.15;
pub const W_IMP: f64 = 0.1;
pub const W_CONF: f64 = 0.1;
pub const W_PROJ: f64 = 0.05;

/// Half-life used for categories without an entry in the table.
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 45.0;

/// Tags that add a fixed importance bonus, matched case-insensitively.
pub const IMPORTANT_TAGS: [&str; 4] = ["important", "goal", "milestone", "priority"];

/// Domains in which a `project` record counts as project-relevant.
pub const PROJECT_DOMAINS: [Domain; 2] = [Domain::Jobs, Domain::Project];

/// Recency half-life in days for a category.
///
/// An event stales fast; an identity statement barely ages.
pub fn half_life_days(category: MemoryCategory) -> f64 {
    match category {
        MemoryCategory::Preference => 90.0,
        MemoryCategory::Identity => 120.0,
        MemoryCategory::Event => 21.0,
        MemoryCategory::Project => 45.0,
        MemoryCategory::Reflection => 60.0,
        MemoryCategory::Unknown => DEFAULT_HALF_LIFE_DAYS,
    }
}

/// A candidate record together with its per-signal scores.
///
/// Built fresh for each rerank call and discarded once the response is
/// assembled (or echoed into the diagnostic trace).
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub record: &'a MemoryRecord,
    pub similarity: f64,
    pub recency_boost: f64,
    pub importance: f64,
    pub confidence: f64,
    pub project_relevance: f64,
    pub domain_boost: f64,
    pub final_score: f64,
}

/// Exponential recency decay in `(0, 1]`: `exp(-age_days / half_life)`.
///
/// A record created at `now` (or with no `created_at` at all) scores 1.0.
/// Degenerate arithmetic (non-positive half-life, non-finite result) yields
/// 0.0 rather than propagating.
pub fn recency_boost(record: &MemoryRecord, now: DateTime<Utc>) -> f64 {
    let created = record.effective_created_at(now);
    let age_days = ((now - created).num_seconds() as f64 / 86_400.0).max(0.0);
    let half_life = half_life_days(record.category);
    if half_life <= 0.0 {
        return 0.0;
    }
    let boost = (-age_days / half_life).exp();
    if boost.is_finite() {
        boost
    } else {
        0.0
    }
}

/// Importance in `[0, 1]`: a per-category base plus +0.1 if any tag is in
/// [`IMPORTANT_TAGS`], capped at 1.0.
pub fn importance_score(record: &MemoryRecord) -> f64 {
    let base = match record.category {
        MemoryCategory::Project => 0.9,
        MemoryCategory::Identity => 0.8,
        MemoryCategory::Reflection => 0.7,
        MemoryCategory::Preference => 0.6,
        MemoryCategory::Event => 0.5,
        MemoryCategory::Unknown => 0.5,
    };
    let tagged_important = record
        .tags
        .iter()
        .any(|tag| IMPORTANT_TAGS.contains(&tag.to_lowercase().as_str()));
    if tagged_important {
        (base + 0.1_f64).min(1.0)
    } else {
        base
    }
}

/// Normalized confidence in `[0, 1]`. Missing or non-finite values become
/// 0.0; out-of-range values are clamped.
pub fn confidence(record: &MemoryRecord) -> f64 {
    match record.confidence {
        Some(value) if value.is_finite() => value.clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// 1.0 exactly when the record is a `project` memory and the query domain is
/// project-adjacent ([`PROJECT_DOMAINS`]); otherwise 0.0.
pub fn project_relevance(record: &MemoryRecord, domain: Option<Domain>) -> f64 {
    match domain {
        Some(d) if record.category == MemoryCategory::Project && PROJECT_DOMAINS.contains(&d) => {
            1.0
        }
        _ => 0.0,
    }
}

/// Additive ranking adjustment for a `(domain, category)` pair.
///
/// The table encodes editorial intuitions: a family query lifts identity and
/// preference memories and suppresses project ones, a jobs query does the
/// reverse. Pairs without an entry (including the whole `project` domain)
/// yield 0.0.
pub fn domain_boost(record: &MemoryRecord, domain: Option<Domain>) -> f64 {
    use MemoryCategory as C;
    let Some(domain) = domain else { return 0.0 };
    match (domain, record.category) {
        (Domain::Jobs, C::Project) => 0.2,
        (Domain::Jobs, C::Identity) => 0.1,
        (Domain::Jobs, C::Preference) => -0.1,
        (Domain::Family, C::Identity) => 0.2,
        (Domain::Family, C::Preference) => 0.1,
        (Domain::Family, C::Project) => -0.15,
        (Domain::Travel, C::Event) => 0.15,
        (Domain::Travel, C::Preference) => 0.05,
        (Domain::Health, C::Identity) => 0.1,
        (Domain::Health, C::Preference) => 0.05,
        (Domain::Finance, C::Project) => 0.1,
        (Domain::Finance, C::Identity) => 0.05,
        _ => 0.0,
    }
}

/// Compute the full blended score for one candidate.
///
/// `final = W_SIM·sim + W_REC·rec + W_IMP·imp + W_CONF·conf + W_PROJ·proj +
/// domain_boost`, with the domain boost additive and unweighted.
pub fn compute_score<'a>(
    record: &'a MemoryRecord,
    similarity: f64,
    domain: Option<Domain>,
    now: DateTime<Utc>,
) -> ScoredCandidate<'a> {
    let rec = recency_boost(record, now);
    let imp = importance_score(record);
    let conf = confidence(record);
    let proj = project_relevance(record, domain);
    let dom = domain_boost(record, domain);
    let final_score =
        W_SIM * similarity + W_REC * rec + W_IMP * imp + W_CONF * conf + W_PROJ * proj + dom;
    ScoredCandidate {
        record,
        similarity,
        recency_boost: rec,
        importance: imp,
        confidence: conf,
        project_relevance: proj,
        domain_boost: dom,
        final_score,
    }
}
