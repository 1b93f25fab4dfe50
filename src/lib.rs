//! Retrieval and reranking engine for personal journal memories.
//!
//! `memoir` is the retrieval core of a journaling backend: given a query and
//! a snapshot of enriched journal entries, it finds the entries most worth
//! handing to a downstream LLM call. Candidates are generated by vector
//! similarity, then reordered by a blended score that also weighs recency,
//! importance, confidence, and the query's topical domain.
//!
//! Each memory category decays and weighs differently:
//!
//! | Category | Half-life (days) | Base importance |
//! |------------|------------------|-----------------|
//! | event | 21 | 0.5 |
//! | project | 45 | 0.9 |
//! | reflection | 60 | 0.7 |
//! | preference | 90 | 0.6 |
//! | identity | 120 | 0.8 |
//! | unknown | 45 | 0.5 |
//!
//! # Architecture
//!
//! - **Records in, ranking out**: the engine reads an immutable snapshot of
//!   [`memory::types::MemoryRecord`]s supplied by the caller; persistence is
//!   the caller's concern.
//! - **Embeddings**: one OpenAI-compatible `/embeddings` call per query via
//!   [`embedding::EmbeddingProvider`]; provider failures degrade to a
//!   recency-ordered fallback, never an error.
//! - **Scoring**: `0.6·similarity + 0.15·recency + 0.1·importance +
//!   0.1·confidence + 0.05·project_relevance + domain_boost`, deterministic
//!   for a fixed "now".
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`embedding`] — Embedding provider boundary and cosine similarity
//! - [`memory`] — Record types and JSON snapshot loading
//! - [`retrieval`] — Domain classification, signal scoring, and reranking
//! - [`context`] — Per-session conversation state and prompt context building

pub mod config;
pub mod context;
pub mod embedding;
pub mod memory;
pub mod retrieval;
