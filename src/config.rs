//! Scenario files. A scenario describes the starting world, how the problem
//! is costed and which engine searches it, in TOML:
//!
//! ```toml
//! [world]
//! width = 3
//! height = 3
//! agent = [0, 0]
//! dirt = [[1, 1]]
//! jewels = [[2, 0]]
//!
//! [problem]
//! cost-model = "uniform"
//! heuristic = "nearest-item"
//!
//! [search]
//! engine = "astar"
//! time-limit = "30s"
//! ```

use crate::search::search_engines::SearchEngineName;
use crate::vacuum::{
    CostModel, HeuristicModel, Position, ProblemSettings, SearchBudget, VacuumProblem,
    VacuumState, WorldError,
};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("unable to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid time limit {value:?}: {source}")]
    TimeLimit {
        value: String,
        source: humantime::DurationError,
    },
    #[error("invalid world: {0}")]
    World(#[from] WorldError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    pub agent: Position,
    #[serde(default)]
    pub dirt: Vec<Position>,
    #[serde(default)]
    pub jewels: Vec<Position>,
}

impl WorldConfig {
    pub fn build(&self) -> Result<VacuumState, WorldError> {
        let mut state = VacuumState::new(self.width, self.height, self.agent)?;
        for &position in &self.dirt {
            state.add_dirt(position)?;
        }
        for &position in &self.jewels {
            state.add_jewel(position)?;
        }
        Ok(state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProblemConfig {
    #[serde(default)]
    pub cost_model: CostModel,
    #[serde(default)]
    pub heuristic: HeuristicModel,
    #[serde(default)]
    pub allow_noop: bool,
}

impl From<ProblemConfig> for ProblemSettings {
    fn from(config: ProblemConfig) -> Self {
        ProblemSettings {
            cost_model: config.cost_model,
            heuristic_model: config.heuristic,
            allow_noop: config.allow_noop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchConfig {
    #[serde(default = "default_engine")]
    pub engine: SearchEngineName,
    /// A humantime duration such as `"30s"` or `"2m 30s"`.
    #[serde(default)]
    pub time_limit: Option<String>,
    #[serde(default)]
    pub node_limit: Option<usize>,
    #[serde(default)]
    pub memory_limit_mb: Option<usize>,
}

fn default_engine() -> SearchEngineName {
    SearchEngineName::AStar
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            time_limit: None,
            node_limit: None,
            memory_limit_mb: None,
        }
    }
}

impl SearchConfig {
    pub fn time_limit(&self) -> Result<Option<Duration>, ConfigError> {
        self.time_limit
            .as_deref()
            .map(|value| {
                humantime::parse_duration(value).map_err(|source| ConfigError::TimeLimit {
                    value: value.to_string(),
                    source,
                })
            })
            .transpose()
    }

    pub fn budget(&self) -> Result<SearchBudget, ConfigError> {
        Ok(SearchBudget {
            time_limit: self.time_limit()?,
            node_limit: self.node_limit,
            memory_limit_mb: self.memory_limit_mb,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScenarioConfig {
    pub world: WorldConfig,
    #[serde(default)]
    pub problem: ProblemConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl ScenarioConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// The problem described by this scenario, with the whole grid to clean.
    pub fn problem(&self) -> Result<VacuumProblem, ConfigError> {
        let state = self.world.build()?;
        Ok(VacuumProblem::new(state)
            .with_cost_model(self.problem.cost_model)
            .with_heuristic_model(self.problem.heuristic)
            .with_noop(self.problem.allow_noop))
    }
}
