//! # Scenario Catalog
//!
//! Every scenario is a function that writes its scene graph into a fresh
//! [`SceneContext`]. The pipeline saves the result as `<name>.tfsave`.

use tfbake_save::{SaveResult, SceneContext};

pub mod basic;

/// Writes one scenario's records.
pub type ScenarioFn = fn(&mut SceneContext<'_>) -> SaveResult<()>;

/// A named scenario.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Save file stem.
    pub name: &'static str,
    /// Construction pass.
    pub build: ScenarioFn,
}

/// All known scenarios, in bake order.
pub const CATALOG: &[Scenario] = &[Scenario {
    name: "basic",
    build: basic::write_scenario,
}];

/// Looks up a scenario by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|scenario| scenario.name == name)
}
