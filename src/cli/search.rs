use std::path::Path;

use anyhow::Result;

use crate::config::MemoirConfig;
use crate::memory::snapshot;
use crate::retrieval::domain::classify_query_domain;
use crate::retrieval::rerank::{rerank, RerankOptions};

/// Run a retrieval query against a snapshot file from the terminal.
pub fn search(
    config: &MemoirConfig,
    query: &str,
    records_path: &Path,
    top_n: Option<usize>,
    candidates: Option<usize>,
    debug: bool,
) -> Result<()> {
    let records = snapshot::load_records(records_path)?;
    let provider = crate::embedding::create_provider(&config.embedding)?;

    let options = RerankOptions {
        top_n: top_n.unwrap_or(config.retrieval.top_n),
        candidate_k: candidates.unwrap_or(config.retrieval.candidate_k),
        diagnostics: debug,
        now: None,
    };

    let result = rerank(provider.as_ref(), query, &records, &options);

    if result.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    if let Some(domain) = classify_query_domain(query) {
        println!("Query domain: {domain}");
    }
    if debug && result.diagnostics.is_none() {
        println!("(embedding unavailable — recency fallback)");
    }
    println!("Found {} result(s)\n", result.records.len());

    for (i, record) in result.records.iter().enumerate() {
        let preview = match record.content.char_indices().nth(120) {
            Some((end, _)) => format!("{}...", &record.content[..end]),
            None => record.content.clone(),
        };

        let created = record
            .created_at
            .map(|t| t.date_naive().to_string())
            .unwrap_or_else(|| "undated".into());

        println!(
            "  {}. [{}] {} ({}, {})",
            i + 1,
            record.category,
            record.id,
            record.source,
            created,
        );
        println!("     {preview}");
        println!();
    }

    if let Some(diags) = &result.diagnostics {
        println!("Score breakdown:");
        for diag in diags {
            println!(
                "  {} sim={:.4} rec={:.4} imp={:.2} conf={:.2} proj={:.1} dom={:+.2} final={:.4}",
                diag.record_id,
                diag.similarity,
                diag.recency_boost,
                diag.importance,
                diag.confidence,
                diag.project_relevance,
                diag.domain_boost,
                diag.final_score,
            );
        }
    }

    Ok(())
}
