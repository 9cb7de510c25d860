//! CLI `ask` command — one routed query from the terminal.

use anyhow::Result;

use crate::config::CrumbConfig;
use crate::engine::router::Intent;
use crate::engine::{ChatEngine, Reply};

/// Run a single query through the router and print the reply.
pub fn run(config: &CrumbConfig, query: &str) -> Result<()> {
    let engine = ChatEngine::from_config(config)?;

    match engine.respond(query)? {
        Reply::EmptyQuery => {
            println!("Empty query, nothing to look up.");
        }
        Reply::Answer(answer) => {
            println!("{}", answer.answer);
            println!();
            println!("  (matched \"{}\", score {:.4})", answer.question, answer.score);
        }
        Reply::Recommendations(recs) => {
            println!("Recipes matching your query:");
            for (i, rec) in recs.iter().enumerate() {
                println!("  {}. {} (score {:.4})", i + 1, rec.name, rec.score);
            }
        }
        Reply::NoMatch(Intent::FactLookup) => {
            println!("No answer above the confidence threshold.");
        }
        Reply::NoMatch(Intent::Recommendation) => {
            println!("No recipes matched that request.");
        }
    }

    Ok(())
}
