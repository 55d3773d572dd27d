use anyhow::Result;
use tracing_subscriber::EnvFilter;

use workbook::{run_server, AppConfig, ProblemGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env();
    if config.rng_seed.is_some() {
        tracing::info!("ordering questions use a fixed random seed");
    }
    let generator = ProblemGenerator::new(config.rng_seed);

    run_server(config, generator).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
