//! Retrieval and reranking pipeline.
//!
//! Candidate generation by vector similarity followed by multi-signal
//! blended scoring. See [`rerank::rerank`] for the top-level entry point.

pub mod domain;
pub mod rerank;
pub mod scoring;
