use std::path::Path;

use anyhow::Result;

use crate::config::MemoirConfig;
use crate::context::build_memory_context;
use crate::memory::snapshot;
use crate::retrieval::rerank::{rerank, RerankOptions};

/// Print the prompt context block the conversation layer would receive for
/// this query. Useful for inspecting what the LLM actually sees.
pub fn context(
    config: &MemoirConfig,
    query: &str,
    records_path: &Path,
    top_n: Option<usize>,
) -> Result<()> {
    let records = snapshot::load_records(records_path)?;
    let provider = crate::embedding::create_provider(&config.embedding)?;

    let options = RerankOptions {
        top_n: top_n.unwrap_or(config.retrieval.top_n),
        candidate_k: config.retrieval.candidate_k,
        diagnostics: false,
        now: None,
    };

    let result = rerank(provider.as_ref(), query, &records, &options);
    if result.is_empty() {
        println!("No entries available.");
        return Ok(());
    }

    println!("Relevant entries:");
    println!("{}", build_memory_context(&result.records));
    Ok(())
}
