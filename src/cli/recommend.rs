//! CLI `recommend` command — query the sparse matcher directly, bypassing the
//! intent router.

use anyhow::Result;

use crate::config::CrumbConfig;
use crate::engine::ChatEngine;

/// Print up to `top_n` recipes for the query.
pub fn run(config: &CrumbConfig, query: &str, top_n: Option<usize>) -> Result<()> {
    let engine = ChatEngine::from_config(config)?;
    let top_n = top_n.unwrap_or(config.retrieval.recipe_top_n);

    let recs = engine.recommend(query, top_n);
    if recs.is_empty() {
        println!("No recipes matched that request.");
        return Ok(());
    }

    println!("Found {} recipe(s):", recs.len());
    for (i, rec) in recs.iter().enumerate() {
        println!("  {}. {} (score {:.4})", i + 1, rec.name, rec.score);
    }

    Ok(())
}
