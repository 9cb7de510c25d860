//! CLI `doctor` command — check config, corpora, and model files, and print a
//! health report.

use anyhow::Result;

use crate::config::CrumbConfig;
use crate::{corpus, embedding};

/// Run startup checks without serving and print a health report.
pub fn run(config: &CrumbConfig) -> Result<()> {
    println!("Crumb Health Report");
    println!("===================");
    println!();

    let qa_path = config.resolved_qa_path();
    match corpus::load_qa(&qa_path) {
        Ok(entries) => {
            println!("Q&A corpus:        {} ({} entries)", qa_path.display(), entries.len());
        }
        Err(e) => {
            println!("Q&A corpus:        FAILED ({e})");
        }
    }

    let recipe_path = config.resolved_recipe_path();
    match corpus::load_recipes(&recipe_path) {
        Ok(entries) => {
            println!("Recipe corpus:     {} ({} entries)", recipe_path.display(), entries.len());
        }
        Err(e) => {
            println!("Recipe corpus:     FAILED ({e})");
        }
    }

    println!();
    println!("Embedding:");
    println!("  Provider:        {}", config.embedding.provider);
    println!("  Model:           {}", config.embedding.model);

    if config.embedding.provider == "local" {
        let cache_dir = config.resolved_cache_dir();
        let model_path = cache_dir.join("model.onnx");
        let tokenizer_path = cache_dir.join("tokenizer.json");
        println!(
            "  Model file:      {}",
            if model_path.exists() { "present" } else { "MISSING" }
        );
        println!(
            "  Tokenizer file:  {}",
            if tokenizer_path.exists() { "present" } else { "MISSING" }
        );
        if !model_path.exists() || !tokenizer_path.exists() {
            println!();
            println!("Run `crumb model download`, or set provider = \"hashed\" in");
            println!("{} to go model-free.", crate::config::default_config_path().display());
            return Ok(());
        }
    }

    match embedding::create_encoder(&config.embedding) {
        Ok(encoder) => match encoder.encode("proof yeast") {
            Ok(vector) if vector.len() == encoder.dimensions() => {
                println!("  Encode check:    OK ({} dimensions)", vector.len());
            }
            Ok(vector) => {
                println!(
                    "  Encode check:    FAILED (got {} dimensions, expected {})",
                    vector.len(),
                    encoder.dimensions()
                );
            }
            Err(e) => {
                println!("  Encode check:    FAILED ({e:#})");
            }
        },
        Err(e) => {
            println!("  Encode check:    FAILED ({e:#})");
        }
    }

    println!();
    println!("Thresholds:");
    println!("  qa_min_score:    {} (inclusive gate)", config.retrieval.qa_min_score);
    println!("  recipe_min_score: {} (exclusive floor)", config.retrieval.recipe_min_score);
    println!("  Triggers:        {}", config.router.recommend_triggers.join(" | "));

    Ok(())
}
