//! Candidate generation and reranking orchestration.
//!
//! The pipeline behind every retrieval-augmented feature: embed the query,
//! narrow the collection to the top-K records by raw cosine similarity, then
//! reorder those candidates with the blended score from [`super::scoring`].
//! When no embeddings are available the pipeline degrades to a recency
//! ordering instead of failing — the caller always gets something useful.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::classify_query_domain;
use super::scoring::{compute_score, ScoredCandidate};
use crate::embedding::{cosine_similarity, EmbeddingProvider};
use crate::memory::types::MemoryRecord;

/// Knobs for a single rerank call.
#[derive(Debug, Clone)]
pub struct RerankOptions {
    /// How many records to return.
    pub top_n: usize,
    /// How many candidates to keep from the similarity pass before blended
    /// scoring.
    pub candidate_k: usize,
    /// Emit a per-candidate score breakdown alongside the records.
    pub diagnostics: bool,
    /// Fixed "now" for deterministic scoring; `None` uses wall-clock time.
    pub now: Option<DateTime<Utc>>,
}

impl Default for RerankOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            candidate_k: 50,
            diagnostics: false,
            now: None,
        }
    }
}

/// A record paired with its raw query similarity.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub similarity: f32,
    pub record: &'a MemoryRecord,
}

/// Per-candidate score breakdown, in final ranked order.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub record_id: String,
    pub similarity: f64,
    pub recency_boost: f64,
    pub importance: f64,
    pub confidence: f64,
    pub project_relevance: f64,
    pub domain_boost: f64,
    pub final_score: f64,
}

impl From<&ScoredCandidate<'_>> for ScoreBreakdown {
    fn from(scored: &ScoredCandidate<'_>) -> Self {
        Self {
            record_id: scored.record.id.clone(),
            similarity: scored.similarity,
            recency_boost: scored.recency_boost,
            importance: scored.importance,
            confidence: scored.confidence,
            project_relevance: scored.project_relevance,
            domain_boost: scored.domain_boost,
            final_score: scored.final_score,
        }
    }
}

/// Result of a rerank call: records in final order plus the optional
/// diagnostic trace (never produced on the fallback path).
#[derive(Debug)]
pub struct RerankResult<'a> {
    pub records: Vec<&'a MemoryRecord>,
    pub diagnostics: Option<Vec<ScoreBreakdown>>,
}

impl RerankResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Embed the query and return the `top_k` records by cosine similarity,
/// descending.
///
/// Records without an embedding, or whose embedding length differs from the
/// query vector, are silently skipped. If the provider fails (empty query,
/// network error, empty response) the result is empty and the caller falls
/// back to recency ordering.
///
/// The sort is stable, so equal similarities keep their input order; this is
/// what makes candidate truncation reproducible for a fixed snapshot.
pub fn generate_candidates<'a>(
    provider: &dyn EmbeddingProvider,
    query: &str,
    records: &'a [MemoryRecord],
    top_k: usize,
) -> Vec<Candidate<'a>> {
    let query_vec = match provider.embed(query) {
        Ok(vec) => vec,
        Err(err) => {
            tracing::debug!(error = %err, "query embedding unavailable");
            return Vec::new();
        }
    };

    let mut candidates: Vec<Candidate<'a>> = records
        .iter()
        .filter_map(|record| {
            let embedding = record.embedding.as_deref()?;
            let similarity = cosine_similarity(&query_vec, embedding)?;
            Some(Candidate { similarity, record })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(top_k);
    candidates
}

/// Rerank a snapshot of records against a query.
///
/// 1. Classify the query domain.
/// 2. Generate the top `candidate_k` candidates by similarity.
/// 3. If there are none (embedding unavailable or no records carry
///    embeddings), return the most recent `top_n` records with no
///    diagnostics.
/// 4. Otherwise blend-score each candidate and sort by final score
///    descending, tie-breaking by `created_at` descending then id ascending.
///
/// Stateless and pure apart from the single embedding call; two calls with
/// identical inputs and the same injected `now` produce identical output.
pub fn rerank<'a>(
    provider: &dyn EmbeddingProvider,
    query: &str,
    records: &'a [MemoryRecord],
    options: &RerankOptions,
) -> RerankResult<'a> {
    let now = options.now.unwrap_or_else(Utc::now);
    let domain = classify_query_domain(query);
    let candidates = generate_candidates(provider, query, records, options.candidate_k);

    if candidates.is_empty() {
        tracing::debug!(records = records.len(), "no candidates, recency fallback");
        return RerankResult {
            records: most_recent(records, options.top_n, now),
            diagnostics: None,
        };
    }

    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .map(|c| compute_score(c.record, f64::from(c.similarity), domain, now))
        .collect();

    scored.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.record
                    .effective_created_at(now)
                    .cmp(&a.record.effective_created_at(now))
            })
            .then_with(|| a.record.id.cmp(&b.record.id))
    });
    scored.truncate(options.top_n);

    let diagnostics = options
        .diagnostics
        .then(|| scored.iter().map(ScoreBreakdown::from).collect());

    RerankResult {
        records: scored.into_iter().map(|s| s.record).collect(),
        diagnostics,
    }
}

/// All records by creation time descending, truncated to `top_n`.
/// Missing timestamps count as `now`, so unstamped records sort first.
fn most_recent<'a>(
    records: &'a [MemoryRecord],
    top_n: usize,
    now: DateTime<Utc>,
) -> Vec<&'a MemoryRecord> {
    let mut recent: Vec<&'a MemoryRecord> = records.iter().collect();
    recent.sort_by(|a, b| {
        b.effective_created_at(now)
            .cmp(&a.effective_created_at(now))
            .then_with(|| a.id.cmp(&b.id))
    });
    recent.truncate(top_n);
    recent
}
