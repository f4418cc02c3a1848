use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::matching::matcher::DEFAULT_SIMILARITY_THRESHOLD;

/// Default cap on a document's skill `TermSet`.
pub const DEFAULT_MAX_SKILL_TERMS: usize = 40;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_dir: PathBuf,
    pub job_description_path: Option<PathBuf>,
    pub job_keywords: Vec<String>,
    pub similarity_threshold: f64,
    pub max_skill_terms: usize,
    pub expand_keyword_variants: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            resume_dir: PathBuf::from(require_env("RESUME_DIR")?),
            job_description_path: std::env::var("JOB_DESCRIPTION_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            job_keywords: std::env::var("JOB_KEYWORDS")
                .map(|v| parse_keyword_list(&v))
                .unwrap_or_default(),
            similarity_threshold: std::env::var("SIMILARITY_THRESHOLD")
                .unwrap_or_else(|_| DEFAULT_SIMILARITY_THRESHOLD.to_string())
                .parse::<f64>()
                .context("SIMILARITY_THRESHOLD must be a number")?,
            max_skill_terms: std::env::var("MAX_SKILL_TERMS")
                .unwrap_or_else(|_| DEFAULT_MAX_SKILL_TERMS.to_string())
                .parse::<usize>()
                .context("MAX_SKILL_TERMS must be a non-negative integer")?,
            expand_keyword_variants: parse_flag(
                &std::env::var("EXPAND_KEYWORD_VARIANTS").unwrap_or_default(),
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        };

        if config.job_description_path.is_none() && config.job_keywords.is_empty() {
            bail!("Provide either JOB_DESCRIPTION_PATH or JOB_KEYWORDS");
        }

        Ok(config)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Splits a comma-separated keyword list, dropping blank entries.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_list_trims_and_drops_blanks() {
        let list = parse_keyword_list(" Python, ,React ,  AWS,");
        assert_eq!(list, vec!["Python", "React", "AWS"]);
    }

    #[test]
    fn test_parse_keyword_list_empty() {
        assert!(parse_keyword_list("").is_empty());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("off"));
    }
}
