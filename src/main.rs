//! txpager main entry point

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use txpager_api::start_server;
use txpager_config::{Config, ConfigError, ConfigErrorSeverity};
use txpager_core::{MemoryRecordSource, RecordSource};

#[derive(Parser, Debug)]
#[command(name = "txpager")]
#[command(version = "0.1.0")]
#[command(about = "Stable, navigable pages over a live-refreshing transaction list", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

/// Load the config, falling back to defaults on warning-level failures
///
/// The fallback error is handed back so it can be logged once the logger
/// exists.
fn load_config(path: &Path) -> anyhow::Result<(Config, Option<ConfigError>)> {
    match Config::load(path) {
        Ok(config) => Ok((config, None)),
        Err(err) => match err.severity() {
            ConfigErrorSeverity::Warning => Ok((Config::default(), Some(err))),
            ConfigErrorSeverity::Error => Err(anyhow::anyhow!("{}", err.to_details())),
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, fallback) = load_config(&args.config)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str()))
        .init();

    if let Some(err) = fallback {
        log::warn!("{}; using built-in defaults", err.to_details());
    } else {
        log::info!("Config loaded from {}", args.config.display());
    }

    let source = match &config.data.seed_file {
        Some(path) => MemoryRecordSource::from_seed_file(path)
            .await
            .with_context(|| format!("failed to load seed file {}", path.display()))?,
        None => {
            log::warn!("No seed file configured, starting with an empty collection");
            MemoryRecordSource::default()
        }
    };
    let source: Arc<dyn RecordSource> = Arc::new(source);

    start_server(config, source).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let (config, fallback) = load_config(Path::new("/definitely/not/here.yaml")).unwrap();
        assert_eq!(config.pagination.records_per_page, 10);
        assert!(matches!(fallback, Some(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_broken_config_aborts_startup() {
        let path = std::env::temp_dir().join(format!("txpager-broken-{}.yaml", std::process::id()));
        std::fs::write(&path, "pagination:\n  records_per_page: 0\n").unwrap();
        let result = load_config(&path);
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("INVALID_VALUE"));
    }
}
