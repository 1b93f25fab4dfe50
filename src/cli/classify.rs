use anyhow::Result;

use crate::retrieval::domain::classify_query_domain;

/// Print the topical domain a query would be classified into.
pub fn classify(query: &str) -> Result<()> {
    match classify_query_domain(query) {
        Some(domain) => println!("{domain}"),
        None => println!("(no domain)"),
    }
    Ok(())
}
