use crate::error::{Error, Result};

/// Newtonian gravitational constant in m³·kg⁻¹·s⁻².
pub const G: f64 = 6.674e-11;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Conversion factors between simulation space and the physical world.
///
/// Simulation space is the dimensionless square `[-1, 1]²` the renderer
/// draws into. Velocities are always kept in real m/s and only converted
/// when a body is integrated.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    /// Simulation-space units per meter.
    space: f64,
    /// Simulated seconds per tick.
    time: f64,
}

impl Default for Scales {
    fn default() -> Self {
        Self {
            space: Self::DEFAULT_SPACE,
            time: Self::DEFAULT_TIME,
        }
    }
}

impl Scales {
    /// One simulation unit is a billion meters.
    pub const DEFAULT_SPACE: f64 = 1.0e-9;
    /// Each tick covers 50 000 s, roughly fourteen hours.
    pub const DEFAULT_TIME: f64 = 50_000.0;

    pub fn new(space: f64, time: f64) -> Result<Self> {
        for (name, value) in [("space", space), ("time", time)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidScale { name, value });
            }
        }
        Ok(Self { space, time })
    }

    pub fn space(&self) -> f64 {
        self.space
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Converts a simulation-space length to meters.
    pub fn to_meters(&self, sim: f64) -> f64 {
        sim / self.space
    }
}
