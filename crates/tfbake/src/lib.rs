//! # TFBAKE
//!
//! Bakes scenario save files and the glTF assets they reference.
//!
//! ## Output
//!
//! ```text
//! <output_dir>/
//! ├── <scenario>.tfsave   - compact JSON record tables
//! └── <sha1>.glb          - one file per distinct asset
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use tfbake::{BakeConfig, Pipeline};
//!
//! let report = Pipeline::new(BakeConfig::load("tfbake.toml".as_ref())?).run()?;
//! println!("{} assets", report.assets);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod scenarios;

pub use config::{BakeConfig, CONFIG_ENV, DEFAULT_CONFIG_PATH};
pub use error::{BakeError, BakeResult};
pub use pipeline::{BakeReport, Pipeline};
pub use scenarios::{Scenario, ScenarioFn, CATALOG};
