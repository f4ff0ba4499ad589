//! Runtime configuration read from the environment.
//!
//! | Variable                   | Meaning                               |
//! |----------------------------|---------------------------------------|
//! | `GEOPOINTS_DATA`           | Path to a points/lines JSON dataset   |
//! | `GEOPOINTS_NODE_LIMIT`     | Cap on positions reached per search   |
//! | `GEOPOINTS_DISTANCE_SCALE` | Multiplier applied to planar distance |
//! | `GEOPOINTS_POLICY`         | `by_distance` or `by_score`           |
//!
//! A `.env` file is honoured when the caller loads it with `dotenv` first.

use std::env;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use crate::costing::{CostPolicy, DEFAULT_DISTANCE_SCALE};


pub const DATA: &str = "GEOPOINTS_DATA";
pub const NODE_LIMIT: &str = "GEOPOINTS_NODE_LIMIT";
pub const DISTANCE_SCALE: &str = "GEOPOINTS_DISTANCE_SCALE";
pub const POLICY: &str = "GEOPOINTS_POLICY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable was set, but could not be parsed.
    Invalid { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {key}: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data: Option<PathBuf>,
    pub node_limit: Option<usize>,
    pub distance_scale: f64,
    pub policy: CostPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: None,
            node_limit: None,
            distance_scale: DEFAULT_DISTANCE_SCALE,
            policy: CostPolicy::default(),
        }
    }
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Unset or empty
    /// variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let distance_scale = parse::<f64>(DISTANCE_SCALE, fetch(DISTANCE_SCALE))?
            .map(check_distance_scale)
            .transpose()?
            .unwrap_or(defaults.distance_scale);

        Ok(Self {
            data: fetch(DATA).map(PathBuf::from),
            node_limit: parse(NODE_LIMIT, fetch(NODE_LIMIT))?,
            distance_scale,
            policy: parse(POLICY, fetch(POLICY))?.unwrap_or(defaults.policy),
        })
    }

    /// Overrides the distance scale, subject to [`check_distance_scale`].
    pub fn with_distance_scale(mut self, scale: f64) -> Result<Self, ConfigError> {
        self.distance_scale = check_distance_scale(scale)?;
        Ok(self)
    }
}

/// Edge costs must never be negative, so the scale must be finite and
/// strictly positive.
pub fn check_distance_scale(scale: f64) -> Result<f64, ConfigError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(ConfigError::Invalid {
            key: DISTANCE_SCALE,
            value: scale.to_string(),
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid { key, value })
        })
        .transpose()
}
