//! Benchmark scenarios: structure, materials, sea state and run length.
//!
//! Four canonical scenarios for regression testing:
//! 1. **Calm sea**: an oak raft settling on a flat sea
//! 2. **Storm**: an iron-hulled boat in high basal waves and gusty wind
//! 3. **Tsunami strike**: a raft hit by a tsunami triggered at step 1
//! 4. **Overload raft**: a glass raft whose deck is loaded until it breaks

use serde::{Deserialize, Serialize};

use seaworthy_material::MaterialDatabase;
use seaworthy_ocean::WindState;
use seaworthy_structure::generators::{hull_box, raft};
use seaworthy_structure::StructureLayer;
use seaworthy_types::{SeaworthyResult, SimulationParameters};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    CalmSea,
    Storm,
    TsunamiStrike,
    OverloadRaft,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::CalmSea,
            ScenarioKind::Storm,
            ScenarioKind::TsunamiStrike,
            ScenarioKind::OverloadRaft,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::CalmSea => "calm_sea",
            ScenarioKind::Storm => "storm",
            ScenarioKind::TsunamiStrike => "tsunami_strike",
            ScenarioKind::OverloadRaft => "overload_raft",
        }
    }

    /// Looks a scenario up by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    /// Ship structure.
    pub layer: StructureLayer,
    pub materials: MaterialDatabase,
    pub params: SimulationParameters,
    pub wind: WindState,
    /// Number of steps to simulate.
    pub timesteps: u32,
    /// Seed of the world's random engine.
    pub seed: u64,
    /// Step at which a tsunami is forced, if any.
    pub tsunami_at_step: Option<u32>,
    /// Extra mass (kg) added to every point of the top row.
    pub deck_load: f32,
}

impl Scenario {
    /// A 10×2 oak raft on a flat, windless sea for 4 seconds.
    pub fn calm_sea() -> SeaworthyResult<Self> {
        let materials = MaterialDatabase::with_defaults();
        let oak = materials.require("oak_wood")?;

        Ok(Self {
            kind: ScenarioKind::CalmSea,
            layer: raft(10, 2, oak),
            materials,
            params: SimulationParameters::calm(),
            wind: WindState::calm(),
            timesteps: 256,
            seed: 1,
            tsunami_at_step: None,
            deck_load: 0.0,
        })
    }

    /// A 16×5 iron hull with an oak deck in storm waves and 40 km/h wind
    /// gusting to 60.
    pub fn storm() -> SeaworthyResult<Self> {
        let materials = MaterialDatabase::with_defaults();
        let iron = materials.require("iron_hull")?;
        let oak = materials.require("oak_wood")?;

        Ok(Self {
            kind: ScenarioKind::Storm,
            layer: hull_box(16, 5, iron, oak),
            materials,
            params: SimulationParameters::stormy(),
            wind: WindState {
                base_speed: 40.0,
                current_speed: 60.0,
            },
            timesteps: 512,
            seed: 2,
            tsunami_at_step: None,
            deck_load: 0.0,
        })
    }

    /// A 12×2 oak raft with a tsunami forced on the first step.
    pub fn tsunami_strike() -> SeaworthyResult<Self> {
        let materials = MaterialDatabase::with_defaults();
        let oak = materials.require("oak_wood")?;

        Ok(Self {
            kind: ScenarioKind::TsunamiStrike,
            layer: raft(12, 2, oak),
            materials,
            params: SimulationParameters::calm(),
            wind: WindState::steady(10.0),
            timesteps: 512,
            seed: 3,
            tsunami_at_step: Some(1),
            deck_load: 0.0,
        })
    }

    /// An 8×2 glass raft with 20 t on every deck point.
    pub fn overload_raft() -> SeaworthyResult<Self> {
        let materials = MaterialDatabase::with_defaults();
        let glass = materials.require("glass")?;

        Ok(Self {
            kind: ScenarioKind::OverloadRaft,
            layer: raft(8, 2, glass),
            materials,
            params: SimulationParameters::calm(),
            wind: WindState::calm(),
            timesteps: 256,
            seed: 4,
            tsunami_at_step: None,
            deck_load: 20_000.0,
        })
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> SeaworthyResult<Self> {
        match kind {
            ScenarioKind::CalmSea => Self::calm_sea(),
            ScenarioKind::Storm => Self::storm(),
            ScenarioKind::TsunamiStrike => Self::tsunami_strike(),
            ScenarioKind::OverloadRaft => Self::overload_raft(),
        }
    }

    pub fn with_timesteps(mut self, timesteps: u32) -> Self {
        self.timesteps = timesteps;
        self
    }
}
