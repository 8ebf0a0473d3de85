use clap::Parser;
use color_eyre::eyre::{self, Context};
use kagi_config::Configuration;
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Receiver for webhook notifications of the licensing service
#[derive(Parser)]
#[command(about, author, version)]
struct Args {
    /// Path to the configuration file
    #[clap(long, short)]
    config: PathBuf,
}

async fn boot() -> eyre::Result<()> {
    let args = Args::parse();
    let config = Configuration::load(&args.config)
        .await
        .wrap_err_with(|| format!("Failed to load configuration from {}", args.config.display()))?;
    kagi_observability::initialise()?;

    let state = kagi::initialise_state(&config)?;
    let shutdown_signal = kagi::signal::shutdown();

    kagi::http::run(state, config.server, shutdown_signal).await
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(boot())
}
