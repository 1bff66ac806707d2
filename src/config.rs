use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::replay::ReplayError;

/// Default location of the harness configuration.
pub const DEFAULT_CONFIG_PATH: &str = "assets/replay_config.ron";

/// Replay harness configuration, loaded once at startup.
///
/// Missing fields fall back to [`HarnessConfig::default`], so a config file only has to
/// name what it changes.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HarnessConfig {
    // Logging
    pub log_dir: PathBuf,
    pub log_keep_count: usize,
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    pub log_filter: String,

    // Scenario selection
    /// RON scenario to replay. A seeded random scenario is generated when unset.
    pub scenario_path: Option<PathBuf>,
    pub random_seed: u64,
    pub random_steps: usize,
    /// Where to write the generated scenario so peers can replay it.
    pub save_generated_to: Option<PathBuf>,

    // Verification
    /// Digest the run must reproduce. The harness exits with failure on a mismatch.
    pub expected_digest: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_keep_count: 25,
            log_filter: "lockstep_vec2=info".to_string(),
            scenario_path: None,
            random_seed: 0x5eed,
            random_steps: 1024,
            save_generated_to: None,
            expected_digest: None,
        }
    }
}

impl HarnessConfig {
    pub fn from_ron_str(contents: &str) -> Result<Self, ReplayError> {
        Ok(ron::from_str(contents)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&contents)
    }

    /// Loads `path`, logging the failure and using the defaults when it cannot be read
    /// or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded harness config from {}", path.display());
                config
            }
            Err(e) => {
                error!("Failed to load harness config: {}", e);
                error!("Using default HarnessConfig");
                Self::default()
            }
        }
    }
}
