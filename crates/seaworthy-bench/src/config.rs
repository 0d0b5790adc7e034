//! TOML scenario configuration for offline runs.
//!
//! ```toml
//! scenario = "storm"
//! steps = 1200
//! seed = 7
//! snapshot_every = 300
//!
//! [wind]
//! base_speed = 25.0
//! gust_speed = 40.0
//!
//! [parameters]
//! basal_wave_height_adjustment = 2.0
//! tsunami_rate = 0.0
//! ```
//!
//! Omitted parameters keep the scenario's preset values. Scenario and
//! parameter errors are reported as `InvalidConfig`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use seaworthy_ocean::WindState;
use seaworthy_types::{SeaworthyError, SeaworthyResult};

use crate::scenarios::{Scenario, ScenarioKind};

/// Wind section of a scenario config (km/h).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindConfig {
    pub base_speed: f32,
    /// Gust speed; defaults to the base speed.
    #[serde(default)]
    pub gust_speed: Option<f32>,
}

impl WindConfig {
    pub fn to_state(self) -> WindState {
        WindState {
            base_speed: self.base_speed,
            current_speed: self.gust_speed.unwrap_or(self.base_speed),
        }
    }
}

/// A scenario plus overrides, as read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioKind,
    /// Overrides the scenario's step count.
    #[serde(default)]
    pub steps: Option<u32>,
    /// Overrides the scenario's seed.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Write a snapshot every this many steps.
    #[serde(default)]
    pub snapshot_every: Option<u32>,
    #[serde(default)]
    pub wind: Option<WindConfig>,
    /// Parameter overrides, merged over the scenario's preset.
    #[serde(default)]
    pub parameters: Option<toml::Table>,
}

impl ScenarioConfig {
    pub fn from_toml_str(text: &str) -> SeaworthyResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| SeaworthyError::InvalidConfig(e.to_string()))?;
        if config.steps == Some(0) {
            return Err(SeaworthyError::InvalidConfig("steps must be positive".into()));
        }
        if config.snapshot_every == Some(0) {
            return Err(SeaworthyError::InvalidConfig(
                "snapshot_every must be positive".into(),
            ));
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> SeaworthyResult<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Builds the configured scenario with every override applied.
    pub fn to_scenario(&self) -> SeaworthyResult<Scenario> {
        let mut scenario = Scenario::from_kind(self.scenario)?;

        if let Some(steps) = self.steps {
            scenario.timesteps = steps;
        }
        if let Some(seed) = self.seed {
            scenario.seed = seed;
        }
        if let Some(wind) = self.wind {
            scenario.wind = wind.to_state();
        }
        if let Some(overrides) = &self.parameters {
            // Merge the overrides over the preset, then reparse
            let mut merged = toml::Value::try_from(&scenario.params)
                .map_err(|e| SeaworthyError::Serialization(e.to_string()))?;
            if let toml::Value::Table(table) = &mut merged {
                for (key, value) in overrides {
                    if !table.contains_key(key) {
                        return Err(SeaworthyError::InvalidConfig(format!(
                            "unknown parameter '{key}'"
                        )));
                    }
                    table.insert(key.clone(), value.clone());
                }
            }
            scenario.params = merged
                .try_into()
                .map_err(|e: toml::de::Error| SeaworthyError::InvalidConfig(e.to_string()))?;
        }

        scenario.params.validate()?;
        Ok(scenario)
    }
}
