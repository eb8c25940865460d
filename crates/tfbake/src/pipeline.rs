//! # Bake Pipeline
//!
//! ## Run Order
//!
//! 1. Create one `AssetPool` for the whole run
//! 2. For each selected scenario: fresh `SceneContext`, construction pass,
//!    write `<name>.tfsave`
//! 3. Flush the pool as `<sha>.glb` files
//!
//! In parallel mode scenarios run on scoped threads. Handles stay
//! deterministic because each scenario owns its writer, and the pool
//! serializes memoization internally.

use std::fs;
use std::panic;
use std::path::{Path, PathBuf};
use std::thread;

use tfbake_assets::AssetPool;
use tfbake_save::SceneContext;
use tracing::info;

use crate::config::BakeConfig;
use crate::error::{BakeError, BakeResult};
use crate::scenarios::{self, Scenario, CATALOG};

/// Outcome of a bake run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeReport {
    /// Save files written, as `(scenario name, path)` in catalog order.
    pub scenarios: Vec<(String, PathBuf)>,
    /// Number of asset files written.
    pub assets: usize,
}

/// Bake driver.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: BakeConfig,
}

impl Pipeline {
    /// Creates a pipeline for `config`.
    #[must_use]
    pub const fn new(config: BakeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &BakeConfig {
        &self.config
    }

    /// Scenarios selected by the configuration.
    ///
    /// # Errors
    ///
    /// Returns `BakeError::UnknownScenario` for names missing from the catalog.
    pub fn selected(&self) -> BakeResult<Vec<&'static Scenario>> {
        match &self.config.scenarios {
            None => Ok(CATALOG.iter().collect()),
            Some(names) => names
                .iter()
                .map(|name| {
                    scenarios::find(name).ok_or_else(|| BakeError::UnknownScenario {
                        name: name.clone(),
                    })
                })
                .collect(),
        }
    }

    /// Runs the bake.
    ///
    /// # Errors
    ///
    /// Fails fast on the first scenario, asset or I/O error.
    pub fn run(&self) -> BakeResult<BakeReport> {
        let selected = self.selected()?;
        let dir = self.config.output_dir.as_path();
        fs::create_dir_all(dir).map_err(|source| BakeError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let pool = AssetPool::new();
        let scenarios = if self.config.parallel_scenarios {
            bake_parallel(&selected, &pool, dir)?
        } else {
            selected
                .iter()
                .map(|scenario| bake_scenario(scenario, &pool, dir))
                .collect::<BakeResult<Vec<_>>>()?
        };

        let assets = pool.flush_to_dir(dir)?.len();
        let stats = pool.stats();
        info!(
            scenarios = scenarios.len(),
            assets,
            pool_hits = stats.hits,
            pool_misses = stats.misses,
            "bake complete"
        );

        Ok(BakeReport { scenarios, assets })
    }
}

fn bake_scenario(
    scenario: &Scenario,
    pool: &AssetPool,
    dir: &Path,
) -> BakeResult<(String, PathBuf)> {
    info!(scenario = scenario.name, "baking scenario");
    let mut ctx = SceneContext::new(pool);
    (scenario.build)(&mut ctx).map_err(|source| BakeError::Scenario {
        scenario: scenario.name.to_string(),
        source,
    })?;
    let path = ctx.finish().write_to(dir, scenario.name)?;
    Ok((scenario.name.to_string(), path))
}

fn bake_parallel(
    selected: &[&'static Scenario],
    pool: &AssetPool,
    dir: &Path,
) -> BakeResult<Vec<(String, PathBuf)>> {
    thread::scope(|scope| {
        let workers: Vec<_> = selected
            .iter()
            .map(|&scenario| scope.spawn(move || bake_scenario(scenario, pool, dir)))
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
}
