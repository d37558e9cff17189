// src/config.rs
use crate::constants::DEFAULT_LOG_FILE_NAME;
use crate::error::AppError;
use crate::types::{ApiBaseUrl, ApiKey};
use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the Notion integration token.
pub const API_KEY_ENV: &str = "NOTION_API_KEY";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Log file path (defaults to a file in the system temp dir)
    #[arg(long)]
    pub log_file: Option<String>,

    /// Notion API root, e.g. for a local proxy
    #[arg(long, default_value = crate::constants::NOTION_API_BASE_URL)]
    pub api_base_url: String,
}

/// Resolved server configuration, validated and ready before any tool call.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_key: ApiKey,
    pub api_base_url: ApiBaseUrl,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl ServerConfig {
    /// Resolves configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, std::env::var(API_KEY_ENV).ok())
    }

    /// Resolves configuration with an explicitly supplied token.
    pub fn resolve_with(cli: CommandLineInput, api_key: Option<String>) -> Result<Self, AppError> {
        let api_key_str = api_key.ok_or_else(|| {
            AppError::MissingConfiguration(format!("{} environment variable not set", API_KEY_ENV))
        })?;

        let api_key = ApiKey::new(api_key_str)?;
        let api_base_url = ApiBaseUrl::parse(&cli.api_base_url)?;
        let log_file = cli
            .log_file
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME));

        Ok(ServerConfig {
            api_key,
            api_base_url,
            log_file,
            verbose: cli.verbose,
        })
    }
}
