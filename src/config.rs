use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CrumbConfig {
    pub corpus: CorpusConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub router: RouterConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorpusConfig {
    pub qa_path: String,
    pub recipe_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: String,
    pub model: String,
    pub cache_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    pub qa_top_k: usize,
    pub qa_min_score: f32,
    pub recipe_top_n: usize,
    pub recipe_min_score: f32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RouterConfig {
    pub recommend_triggers: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChatConfig {
    pub log_level: String,
}

impl Default for CrumbConfig {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            embedding: EmbeddingConfig::default(),
            retrieval: RetrievalConfig::default(),
            router: RouterConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            qa_path: "data/baking_qa.json".into(),
            recipe_path: "data/recipes.json".into(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        let cache_dir = default_crumb_dir()
            .join("models")
            .to_string_lossy()
            .into_owned();
        Self {
            provider: "local".into(),
            model: "all-MiniLM-L6-v2".into(),
            cache_dir,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            qa_top_k: 1,
            qa_min_score: 0.5,
            recipe_top_n: 3,
            recipe_min_score: 0.1,
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            recommend_triggers: vec![
                "what can i make with".into(),
                "recommend a recipe".into(),
                "show me recipes".into(),
            ],
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

/// Returns `~/.crumb/`
pub fn default_crumb_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".crumb")
}

/// Returns the default config file path: `~/.crumb/config.toml`
pub fn default_config_path() -> PathBuf {
    default_crumb_dir().join("config.toml")
}

impl CrumbConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            CrumbConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (CRUMB_QA_CORPUS, CRUMB_RECIPE_CORPUS,
    /// CRUMB_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CRUMB_QA_CORPUS") {
            self.corpus.qa_path = val;
        }
        if let Ok(val) = std::env::var("CRUMB_RECIPE_CORPUS") {
            self.corpus.recipe_path = val;
        }
        if let Ok(val) = std::env::var("CRUMB_LOG_LEVEL") {
            self.chat.log_level = val;
        }
    }

    /// Resolve the Q&A corpus path, expanding `~` if needed.
    pub fn resolved_qa_path(&self) -> PathBuf {
        expand_tilde(&self.corpus.qa_path)
    }

    /// Resolve the recipe corpus path, expanding `~` if needed.
    pub fn resolved_recipe_path(&self) -> PathBuf {
        expand_tilde(&self.corpus.recipe_path)
    }

    /// Resolve the model cache directory, expanding `~` if needed.
    pub fn resolved_cache_dir(&self) -> PathBuf {
        expand_tilde(&self.embedding.cache_dir)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
