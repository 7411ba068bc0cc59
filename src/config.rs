//! Scenario files and runtime settings.
//!
//! A scenario is a TOML document describing the constants of a run and its
//! initial bodies:
//!
//! ```toml
//! gravitational_constant = 6.674e-11   # optional
//! update_order = "sequential"          # optional, or "synchronous"
//!
//! [scales]                             # optional
//! space = 1.0e-9                       # simulation units per meter
//! time = 50000.0                       # simulated seconds per tick
//!
//! [[bodies]]
//! name = "Earth"                       # optional, used in logs
//! position = [0.0, 0.0]                # simulation space
//! velocity = [0.0, 0.0]                # m/s
//! display_radius = 0.1                 # simulation space
//! mass = 5.97e24                       # kg
//! physical_radius = 6.371e6            # m
//! ```

use std::{env, fs, path::{Path, PathBuf}};

use serde::Deserialize;
use tracing::{info, warn};
use ultraviolet::DVec2;

use crate::{
    body::Body,
    error::{Error, Result},
    scale::{G, Scales},
    simulation::{Simulation, UpdateOrder},
};

pub const DEFAULT_TICKS: u64 = 1000;

/// Built-in Earth–Moon scenario.
pub const EARTH_MOON: &str = include_str!("../scenarios/earth_moon.toml");

fn default_g() -> f64 {
    G
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScalesConfig {
    #[serde(default = "ScalesConfig::default_space")]
    pub space: f64,
    #[serde(default = "ScalesConfig::default_time")]
    pub time: f64,
}

impl ScalesConfig {
    fn default_space() -> f64 {
        Scales::DEFAULT_SPACE
    }

    fn default_time() -> f64 {
        Scales::DEFAULT_TIME
    }
}

impl Default for ScalesConfig {
    fn default() -> Self {
        Self {
            space: Scales::DEFAULT_SPACE,
            time: Scales::DEFAULT_TIME,
        }
    }
}

/// Initial state of one body.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    pub display_radius: f64,
    pub mass: f64,
    pub physical_radius: f64,
}

impl BodyConfig {
    pub fn build(&self) -> Result<Body> {
        let [x, y] = self.position;
        let [vx, vy] = self.velocity;
        Ok(Body::new(
            DVec2::new(x, y),
            DVec2::new(vx, vy),
            self.display_radius,
            self.mass,
            self.physical_radius,
        )?)
    }
}

/// Top-level scenario.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_g")]
    pub gravitational_constant: f64,
    #[serde(default)]
    pub update_order: UpdateOrder,
    #[serde(default)]
    pub scales: ScalesConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Config {
    pub fn earth_moon() -> Result<Self> {
        Self::from_toml(EARTH_MOON)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        info!(path = %path.display(), bodies = config.bodies.len(), "loaded scenario");
        Ok(config)
    }

    /// Loads the scenario named by `GRAVSIM_CONFIG`, or the built-in one.
    pub fn from_env() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load(path),
            None => Self::earth_moon(),
        }
    }

    /// Validates every value and builds the simulation.
    pub fn build(&self) -> Result<Simulation> {
        if self.bodies.is_empty() {
            return Err(Error::EmptyScenario);
        }

        let scales = Scales::new(self.scales.space, self.scales.time)?;
        let bodies = self
            .bodies
            .iter()
            .enumerate()
            .map(|(index, cfg)| -> Result<Body> {
                let body = cfg.build()?;
                info!(
                    index,
                    name = cfg.name.as_deref().unwrap_or("unnamed"),
                    mass = body.mass(),
                    "body ready"
                );
                Ok(body)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Simulation::with_params(
            bodies,
            scales,
            self.gravitational_constant,
            self.update_order,
        ))
    }
}

/// Scenario file override.
pub fn config_path() -> Option<PathBuf> {
    env::var_os("GRAVSIM_CONFIG").map(PathBuf::from)
}

/// Headless tick limit.
pub fn tick_limit() -> u64 {
    parse_tick_limit(env::var("GRAVSIM_TICKS").ok().as_deref())
}

fn parse_tick_limit(value: Option<&str>) -> u64 {
    let Some(value) = value else {
        return DEFAULT_TICKS;
    };
    match value.trim().parse() {
        Ok(ticks) => ticks,
        Err(err) => {
            warn!(value, %err, default = DEFAULT_TICKS, "ignoring invalid GRAVSIM_TICKS");
            DEFAULT_TICKS
        }
    }
}
