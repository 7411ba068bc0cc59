use ultraviolet::DVec2;

use crate::{error::InvalidBody, scale::Scales};

/// Represents a massive body in the simulation.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Position in simulation space.
    pub pos: DVec2,
    /// Velocity in m/s.
    pub vel: DVec2,
    /// Radius drawn on screen, in simulation-space units.
    display_radius: f64,
    /// Mass in kg.
    mass: f64,
    /// Real radius in meters.
    physical_radius: f64,
}

impl Body {
    /// Creates a new Body with the given properties.
    /// Mass and physical radius must be strictly positive.
    pub fn new(
        pos: DVec2,
        vel: DVec2,
        display_radius: f64,
        mass: f64,
        physical_radius: f64,
    ) -> Result<Self, InvalidBody> {
        if !(mass > 0.0) {
            return Err(InvalidBody::Mass(mass));
        }
        if !(physical_radius > 0.0) {
            return Err(InvalidBody::PhysicalRadius(physical_radius));
        }

        Ok(Self {
            pos,
            vel,
            display_radius,
            mass,
            physical_radius,
        })
    }

    pub fn display_radius(&self) -> f64 {
        self.display_radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn physical_radius(&self) -> f64 {
        self.physical_radius
    }

    /// Adds one tick's worth of the acceleration `acc` (m/s²) to the velocity.
    pub fn accelerate(&mut self, acc: DVec2, scales: &Scales) {
        self.vel += acc * scales.time();
    }

    /// Moves the body by its real displacement over one tick, converted to
    /// simulation space.
    pub fn update_position(&mut self, scales: &Scales) {
        self.pos += self.vel * scales.time() * scales.space();
    }

    /// Keeps the visual edge inside `[-1, 1]` on each axis, reversing the
    /// velocity along any axis that had to be clamped.
    /// Returns `true` if either axis was clamped.
    pub fn reflect_at_bounds(&mut self) -> bool {
        let r = self.display_radius;
        let mut reflected = false;

        for (pos, vel) in [
            (&mut self.pos.x, &mut self.vel.x),
            (&mut self.pos.y, &mut self.vel.y),
        ] {
            if *pos - r < -1.0 {
                *pos = -1.0 + r;
                *vel = -*vel;
                reflected = true;
            } else if *pos + r > 1.0 {
                *pos = 1.0 - r;
                *vel = -*vel;
                reflected = true;
            }
        }

        reflected
    }

    /// Screen-space overlap test against `other`.
    ///
    /// When the display circles overlap, both velocities are reversed. The
    /// bodies are not pushed apart, so a pair that stays overlapping is
    /// reversed again on the next test.
    pub fn check_collision(&mut self, other: &mut Body) -> bool {
        let d = other.pos - self.pos;

        if other.display_radius + self.display_radius > d.mag() {
            self.vel *= -1.0;
            other.vel *= -1.0;
            return true;
        }
        false
    }
}
