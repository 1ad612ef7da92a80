use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use peerbook_cluster_spec::ClusterRegistry;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match &cli.command {
        Commands::List => {
            let registry = load_registry(&cli)?;
            println!("{}", serde_json::to_string_pretty(registry.all_clusters())?);
        }
        Commands::Show(cmd) => {
            let registry = load_registry(&cli)?;
            let cluster = cmd
                .network
                .resolve(&registry)
                .ok_or_else(|| anyhow!("Network {} is not in the cluster table", cmd.network))?;
            println!("{}", serde_json::to_string_pretty(cluster)?);
        }
        Commands::Validate(cmd) => {
            let registry = ClusterRegistry::from_file(&cmd.file)?;
            info!(
                "{} is valid: {} clusters",
                cmd.file.display(),
                registry.all_clusters().len()
            );
        }
    }

    Ok(())
}

fn load_registry(cli: &Cli) -> anyhow::Result<Arc<ClusterRegistry>> {
    match &cli.clusters_file {
        Some(path) => {
            info!("Loading clusters from {}", path.display());
            Ok(Arc::new(ClusterRegistry::from_file(path)?))
        }
        None => Ok(ClusterRegistry::default_clusters()),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::ERROR,
        2 => LevelFilter::WARN,
        3 => LevelFilter::INFO,
        4 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
