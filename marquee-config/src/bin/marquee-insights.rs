use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marquee_config::{ConfigSource, InsightsConfig, build_lookup, init_tracing};
use marquee_core::insights::InsightsService;
use marquee_core::providers::TmdbCatalogLookup;
use marquee_core::store::InMemoryCollectionStore;
use marquee_model::{ListId, UserId};
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "marquee-insights",
    about = "Collection insights from a saved-list snapshot"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enrich a user's lists and print the insights report as JSON
    Report {
        /// Collection snapshot exported as JSON
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long)]
        user: Uuid,
        /// Restrict the report to one list instead of the whole collection
        #[arg(long)]
        list: Option<Uuid>,
        #[arg(long)]
        pretty: bool,
    },
    /// Print the cache fingerprint of a user's collection
    Fingerprint {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long)]
        user: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, source) = InsightsConfig::load_from_env()?;
    init_tracing(&config.log_filter);
    log_source(&source);

    match cli.command {
        Command::Report {
            snapshot,
            user,
            list,
            pretty,
        } => {
            let lookup = build_lookup(&config.tmdb)?;
            let service = service_for(&snapshot, lookup, &config).await?;
            let user = UserId(user);

            let report = match list {
                Some(list) => service.list_insights(user, ListId(list)).await,
                None => service.collection_insights(user).await,
            }
            .context("failed to build insights report")?;

            let rendered = if pretty {
                serde_json::to_string_pretty(report.as_ref())?
            } else {
                serde_json::to_string(report.as_ref())?
            };
            println!("{rendered}");
        }
        Command::Fingerprint { snapshot, user } => {
            // Fingerprinting never touches the catalog.
            let lookup = TmdbCatalogLookup::new(String::new());
            let service = service_for(&snapshot, lookup, &config).await?;
            let fingerprint = service.collection_fingerprint(UserId(user)).await?;
            println!("{fingerprint}");
        }
    }

    Ok(())
}

async fn service_for(
    snapshot: &Path,
    lookup: TmdbCatalogLookup,
    config: &InsightsConfig,
) -> Result<InsightsService<InMemoryCollectionStore, TmdbCatalogLookup>> {
    let store = InMemoryCollectionStore::load(snapshot)
        .await
        .with_context(|| format!("failed to load snapshot {}", snapshot.display()))?;
    Ok(InsightsService::new(
        Arc::new(store),
        Arc::new(lookup),
        config.insights.clone(),
    ))
}

fn log_source(source: &ConfigSource) {
    match source {
        ConfigSource::EnvPath(path) => {
            info!(path = %path.display(), "insights config loaded from env path")
        }
        ConfigSource::EnvInline => {
            info!("insights config loaded from inline environment json")
        }
        ConfigSource::File(path) => {
            info!(path = %path.display(), "insights config loaded from file")
        }
        ConfigSource::Default => info!("using default insights config"),
    }
}
