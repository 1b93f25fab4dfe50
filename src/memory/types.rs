//! Core memory record definitions.
//!
//! Defines [`MemoryCategory`] (the five journal memory categories),
//! [`SourceType`] (how an entry reached the journal), and [`MemoryRecord`]
//! (a full entry snapshot as consumed by the retrieval engine).

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The five journal memory categories.
///
/// The category drives two retrieval signals: how fast a record's recency
/// boost decays (half-life) and its base importance. Unrecognized categories
/// deserialize to [`MemoryCategory::Unknown`], which scores with mid-range
/// defaults rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryCategory {
    /// Something that happened — fastest decay (21-day half-life).
    Event,
    /// Introspection about feelings or patterns (60-day half-life).
    Reflection,
    /// A like, dislike, or habit (90-day half-life).
    Preference,
    /// A durable statement about who the writer is (120-day half-life).
    Identity,
    /// Ongoing work toward a goal — highest base importance (45-day half-life).
    Project,
    /// Catch-all for categories this version does not recognize.
    #[serde(other)]
    Unknown,
}

impl MemoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Reflection => "reflection",
            Self::Preference => "preference",
            Self::Identity => "identity",
            Self::Project => "project",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for MemoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MemoryCategory {
    type Err = std::convert::Infallible;

    /// Total parse: anything unrecognized becomes [`MemoryCategory::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "event" => Self::Event,
            "reflection" => Self::Reflection,
            "preference" => Self::Preference,
            "identity" => Self::Identity,
            "project" => Self::Project,
            _ => Self::Unknown,
        })
    }
}

/// How an entry reached the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Typed directly by the user.
    Typed,
    /// Transcribed from an audio recording.
    Voice,
    /// Inferred by the enrichment pipeline rather than stated.
    Inferred,
    /// Imported from an external system.
    External,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typed => "typed",
            Self::Voice => "voice",
            Self::Inferred => "inferred",
            Self::External => "external",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One journal entry with its extracted metadata, as supplied by the caller.
///
/// The retrieval engine only ever reads these; it never creates, mutates, or
/// deletes them. Every field a scorer touches is optional-tolerant: a record
/// with nothing but an `id` and `content` still scores (with neutral
/// defaults) rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Opaque unique identifier (UUID v4 for records built here).
    pub id: String,
    /// Memory category; drives recency half-life and base importance.
    #[serde(default = "default_category")]
    pub category: MemoryCategory,
    /// Provenance of the entry.
    #[serde(default)]
    pub source: SourceType,
    /// Full entry text (typed or transcribed).
    pub content: String,
    /// LLM-generated summary, if enrichment has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Free-text labels. Tags in the important set add an importance bonus.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Caller-asserted trust in `[0, 1]`. Missing or out-of-range values are
    /// normalized by the scorer, never rejected here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Creation time. Absent is treated as "now" (zero age) when scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Embedding vector from the provider, if one has been computed.
    /// Records without one are skipped during candidate generation but stay
    /// eligible for the recency fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl MemoryRecord {
    /// Build a fresh record with a random id, the default confidence (0.75),
    /// and `created_at` set to now. Intended for callers assembling
    /// snapshots; the engine itself never constructs records.
    pub fn new(category: MemoryCategory, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category,
            source: SourceType::Unknown,
            content: content.into(),
            summary: None,
            tags: Vec::new(),
            confidence: Some(0.75),
            created_at: Some(Utc::now()),
            embedding: None,
        }
    }

    /// Creation time with absent values pinned to `now`, so age is zero.
    pub fn effective_created_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.created_at.unwrap_or(now)
    }
}

fn default_category() -> MemoryCategory {
    MemoryCategory::Unknown
}
