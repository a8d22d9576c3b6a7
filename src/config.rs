//! Settings loading with layered sources
//!
//! Priority (highest to lowest):
//! 1. Command-line flags (applied by the caller)
//! 2. `COUNTRY_GUESS_*` environment variables
//! 3. Explicit `--config` file
//! 4. Project file: `./country-guess.toml`
//! 5. Global file: `$CONFIG_DIR/country-guess/config.toml`
//! 6. Defaults

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "country-guess";
const PROJECT_FILE: &str = "country-guess.toml";

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the scoreboard and log file live
    pub data_dir: Option<PathBuf>,
    /// Ring the terminal bell on outcomes
    pub sound: bool,
    /// Fixed seed for target selection
    pub seed: Option<u64>,
    /// Length of the time gauge, in seconds
    pub time_window_secs: u64,
    /// Custom region table instead of the embedded one
    pub regions: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            sound: true,
            seed: None,
            time_window_secs: 30,
            regions: None,
        }
    }
}

impl Settings {
    /// Load settings from every file and environment source
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    pub fn load(config_path: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(global) = global_config_path()
            && global.exists()
        {
            figment = figment.merge(Toml::file(global));
        }

        let project = PathBuf::from(PROJECT_FILE);
        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed("COUNTRY_GUESS_"))
            .extract()
            .map_err(Box::new)
    }

    /// Configured data directory, or the platform default
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(default_data_dir)
            .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR))
    }
}

/// `$CONFIG_DIR/country-guess/config.toml`
#[must_use]
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// `$DATA_DIR/country-guess`
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR))
}
