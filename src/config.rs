use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::DdicError;

/// Tunables a host can set without recompiling: how demanding to be
/// about type matches, how much output to produce, and how long a
/// single sequence is allowed to run. Layered the way the rest of this
/// codebase's config used to be layered -- defaults, then an optional
/// TOML file, then environment overrides -- just backed by `figment`
/// instead of a hand-rolled key-value map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DdicConfig {
    pub exact_type_match_default: bool,
    pub only_receivers_default: bool,
    pub max_producers_per_call: usize,
    pub execution_timeout_ms: u64,
    pub log_level: u8,
}

impl Default for DdicConfig {
    fn default() -> DdicConfig {
        DdicConfig {
            exact_type_match_default: false,
            only_receivers_default: false,
            max_producers_per_call: 256,
            execution_timeout_ms: 2_000,
            log_level: 2,
        }
    }
}

impl DdicConfig {
    /// Merges, in increasing precedence: built-in defaults, an optional
    /// TOML file at `path`, then `DDIC_`-prefixed environment variables.
    pub fn load(path: Option<&str>) -> Result<DdicConfig, DdicError> {
        let mut figment = Figment::from(Serialized::defaults(DdicConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed("DDIC_"));
        figment.extract().map_err(DdicError::from)
    }
}
