use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use archive_core::impls::{GalaxyClient, InMemoryHistoryStore};
use archive_core::{ArchiveWizard, ClientConfig, HistoryId, Settled};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Show which archive wizard a history would get",
    long_about = None
)]
struct Cli {
    /// History to archive.
    #[arg(long)]
    history_id: String,

    /// TOML config file (base_url, api_key, timeout_secs, [flags]).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server URL; overrides config file and GALAXY_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Force the async task flag instead of asking the server.
    #[arg(long)]
    async_tasks: Option<bool>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("ARCHIVE_WIZARD_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "archive_core=debug,archive_wizard=debug,info"
        } else {
            "archive_core=info,warn"
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ClientConfig::default(),
    }
    .with_env();

    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    if let Some(enabled) = cli.async_tasks {
        config.flags = Some(archive_core::FeatureFlags::new(enabled));
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let client = Arc::new(GalaxyClient::new(config)?);
    debug!(
        base_url = %client.config().base_url,
        timeout_secs = client.config().timeout_secs,
        "using server"
    );

    let history_id = HistoryId::new(cli.history_id.as_str());
    let history = client
        .fetch_history(&history_id)
        .await
        .context("fetching history")?;
    let flags = client
        .fetch_feature_flags()
        .await
        .context("fetching server configuration")?;

    let store = Arc::new(InMemoryHistoryStore::new());
    store.insert(history);

    let wizard = ArchiveWizard::new(history_id, store, client, flags);
    let view = match wizard.load().await? {
        Settled::Applied(view) => view,
        Settled::Superseded { request, newest } => {
            anyhow::bail!("load {request} superseded by {newest}")
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{view}");
    }
    Ok(())
}
