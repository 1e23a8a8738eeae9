//! Configuration for the loan policy.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (LIBRIS_LOAN_DAYS, LIBRIS_STRICT_RETURNS)
//! 2. Project config file (.libris/config.yaml in the current directory or a parent)
//! 3. User config file (~/.libris/config.yaml)
//! 4. Defaults (14-day loans, any member may return a book)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Default loan length in days
pub const DEFAULT_LOAN_DAYS: i64 = 14;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub loans: LoansConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoansConfig {
    /// Days until a loan falls due
    pub period_days: Option<i64>,
    /// Only the borrowing member may return a book
    pub strict_returns: Option<bool>,
}

/// Rules applied by the catalog when lending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPolicy {
    /// Days until a loan falls due
    pub loan_period_days: i64,

    /// Reject returns made by anyone other than the borrower
    pub strict_returns: bool,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: DEFAULT_LOAN_DAYS,
            strict_returns: false,
        }
    }
}

impl LoanPolicy {
    /// Loan length as a duration
    pub fn loan_period(&self) -> Duration {
        Duration::days(self.loan_period_days)
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Loan policy after applying all sources
    pub policy: LoanPolicy,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".libris").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let user_config = dirs::home_dir()?.join(".libris").join("config.yaml");
    user_config.exists().then_some(user_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse a boolean environment value ("1", "true", "yes", "on" and their negatives)
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Layer the config file and environment values over the defaults
fn resolve_policy(
    file: Option<&ConfigFile>,
    env_loan_days: Option<String>,
    env_strict: Option<String>,
) -> Result<LoanPolicy> {
    let mut policy = LoanPolicy::default();

    if let Some(loans) = file.map(|f| &f.loans) {
        if let Some(days) = loans.period_days {
            policy.loan_period_days = days;
        }
        if let Some(strict) = loans.strict_returns {
            policy.strict_returns = strict;
        }
    }

    if let Some(raw) = env_loan_days {
        policy.loan_period_days = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid LIBRIS_LOAN_DAYS: {}", raw))?;
    }

    if let Some(raw) = env_strict {
        policy.strict_returns = parse_bool(&raw)
            .with_context(|| format!("Invalid LIBRIS_STRICT_RETURNS: {}", raw))?;
    }

    if policy.loan_period_days <= 0 {
        anyhow::bail!(
            "Loan period must be at least one day, got {}",
            policy.loan_period_days
        );
    }

    Ok(policy)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();

    let file = match config_file {
        Some(ref path) => Some(load_config_file(path)?),
        None => None,
    };

    let policy = resolve_policy(
        file.as_ref(),
        std::env::var("LIBRIS_LOAN_DAYS").ok(),
        std::env::var("LIBRIS_STRICT_RETURNS").ok(),
    )?;

    Ok(ResolvedConfig {
        policy,
        config_file,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

/// Get the configured loan policy
pub fn loan_policy() -> Result<LoanPolicy> {
    Ok(config()?.policy)
}
