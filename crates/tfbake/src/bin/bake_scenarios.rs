//! # Scenario Baker
//!
//! Bakes every configured scenario into the output directory.
//!
//! ```bash
//! TFBAKE_CONFIG=tfbake.toml RUST_LOG=debug bake_scenarios
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use tfbake::{BakeConfig, BakeResult, BakeReport, Pipeline, CONFIG_ENV, DEFAULT_CONFIG_PATH};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run() {
        Ok(report) => {
            for (name, path) in &report.scenarios {
                info!(scenario = %name, path = %path.display(), "scenario baked");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("bake failed: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> BakeResult<BakeReport> {
    let path = std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = BakeConfig::load(&path)?;
    info!(
        config = %path.display(),
        output_dir = %config.output_dir.display(),
        parallel = config.parallel_scenarios,
        "starting bake"
    );
    Pipeline::new(config).run()
}
