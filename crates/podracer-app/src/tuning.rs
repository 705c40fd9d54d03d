//! Solver configuration from the command line and an optional JSON file.

use std::fs;
use std::path::Path;

use anyhow::Context;

use podracer_core::config::SolverConfig;

/// Load defaults, overlay the tuning file if given, then apply `seed`.
pub fn load_config(tuning: Option<&Path>, seed: Option<u64>) -> anyhow::Result<SolverConfig> {
    let mut config = match tuning {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading tuning file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing tuning file {}", path.display()))?
        }
        None => SolverConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}
