// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use notion_mcp_bridge::{CommandLineInput, NotionHttpClient, NotionMcpService, ServerConfig};
use rmcp::{transport::stdio, ServiceExt};
use std::path::Path;
use std::sync::Arc;

/// Sets up logging. Console output goes to stderr: stdout carries the protocol.
fn setup_logging(verbose: bool, log_file_path: &Path) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Some(parent) = log_file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{l}] {m}{n}")))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();
    let config = ServerConfig::resolve(cli).context("Failed to resolve configuration")?;

    setup_logging(config.verbose, &config.log_file).context("Failed to initialize logging")?;

    let client = NotionHttpClient::with_base_url(&config.api_key, config.api_base_url.clone())
        .context("Failed to build Notion client")?;
    log::info!(
        "Starting Notion MCP server against {} (key {})",
        config.api_base_url,
        config.api_key
    );

    let service = NotionMcpService::new(Arc::new(client))
        .serve(stdio())
        .await
        .context("Failed to start MCP transport")?;
    service.waiting().await?;

    log::info!("Notion MCP server stopped");
    Ok(())
}
