//! Pairwise Newtonian gravity between two bodies.
//!
//! Positions live in simulation space, so every distance is converted back to
//! meters before the inverse-square law is applied. Pairs closer than the sum
//! of their physical radii are skipped outright: the contribution is zero for
//! that tick, never an error.

use ultraviolet::DVec2;

use crate::{body::Body, scale::Scales};

/// Offset from one body to another, in both coordinate systems.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Separation {
    /// `to.pos - from.pos`, simulation space.
    pub offset: DVec2,
    /// Length of `offset`, simulation space.
    pub distance_sim: f64,
    /// Length of `offset`, meters.
    pub distance_real: f64,
}

impl Separation {
    pub fn between(from: &Body, to: &Body, scales: &Scales) -> Self {
        let offset = to.pos - from.pos;
        let distance_sim = offset.mag();
        Self {
            offset,
            distance_sim,
            distance_real: scales.to_meters(distance_sim),
        }
    }

    /// Unit vector pointing from `from` towards `to`.
    pub fn direction(&self) -> DVec2 {
        self.offset / self.distance_sim
    }
}

/// Returns true when two bodies are too close for the force to be evaluated.
pub fn within_contact(a: &Body, b: &Body, sep: &Separation) -> bool {
    sep.distance_real < a.physical_radius() + b.physical_radius()
}

/// Magnitude of the gravitational force between `a` and `b` in newtons, or
/// `None` if the pair is inside the contact distance.
pub fn force(a: &Body, b: &Body, g: f64, scales: &Scales) -> Option<f64> {
    let sep = Separation::between(a, b, scales);
    if within_contact(a, b, &sep) {
        return None;
    }
    Some(force_at(a, b, g, sep.distance_real))
}

fn force_at(a: &Body, b: &Body, g: f64, distance_real: f64) -> f64 {
    (g * a.mass() * b.mass()) / (distance_real * distance_real)
}

/// Acceleration of `a` towards `b` in m/s², or `None` if the pair is skipped.
pub fn acceleration(a: &Body, b: &Body, g: f64, scales: &Scales) -> Option<DVec2> {
    let sep = Separation::between(a, b, scales);
    if within_contact(a, b, &sep) {
        tracing::trace!(
            distance_real = sep.distance_real,
            "pair inside contact distance, skipped"
        );
        return None;
    }

    let force = force_at(a, b, g, sep.distance_real);
    let acc = force / a.mass();
    Some(sep.direction() * acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::G;
    use approx::assert_relative_eq;

    fn body(x: f64, y: f64, mass: f64, physical_radius: f64) -> Body {
        Body::new(DVec2::new(x, y), DVec2::zero(), 0.01, mass, physical_radius).unwrap()
    }

    #[test]
    fn force_is_symmetric() {
        let scales = Scales::default();
        let a = body(-0.2, 0.1, 5.97e24, 6.371e6);
        let b = body(0.3, -0.05, 7.35e22, 1.737e6);

        let f_ab = force(&a, &b, G, &scales).unwrap();
        let f_ba = force(&b, &a, G, &scales).unwrap();
        assert_relative_eq!(f_ab, f_ba, max_relative = 1e-14);

        let a_ab = acceleration(&a, &b, G, &scales).unwrap() * a.mass();
        let a_ba = acceleration(&b, &a, G, &scales).unwrap() * b.mass();
        assert_relative_eq!(a_ab.x, -a_ba.x, max_relative = 1e-12);
        assert_relative_eq!(a_ab.y, -a_ba.y, max_relative = 1e-12);
    }

    #[test]
    fn force_follows_inverse_square() {
        let scales = Scales::default();
        let a = body(0.0, 0.0, 1.0e24, 1.0e6);
        let near = body(0.1, 0.0, 1.0e22, 1.0e6);
        let far = body(0.2, 0.0, 1.0e22, 1.0e6);

        let f_near = force(&a, &near, G, &scales).unwrap();
        let f_far = force(&a, &far, G, &scales).unwrap();
        assert_relative_eq!(f_near / f_far, 4.0, max_relative = 1e-12);
        assert_relative_eq!(f_near, G * 1.0e24 * 1.0e22 / (1.0e8 * 1.0e8), max_relative = 1e-12);
    }

    #[test]
    fn acceleration_points_towards_other_body() {
        let scales = Scales::default();
        let a = body(0.0, 0.0, 1.0e24, 1.0e6);
        let b = body(0.0, -0.3, 1.0e22, 1.0e6);

        let acc = acceleration(&a, &b, G, &scales).unwrap();
        assert_eq!(acc.x, 0.0);
        assert!(acc.y < 0.0);
        assert_relative_eq!(acc.y, -G * 1.0e22 / (3.0e8 * 3.0e8), max_relative = 1e-12);
    }

    #[test]
    fn pairs_inside_contact_distance_are_skipped() {
        let scales = Scales::default();
        // 1e6 m apart, radii sum to 2e6 m.
        let a = body(0.0, 0.0, 1.0e24, 1.0e6);
        let b = body(1.0e-3, 0.0, 1.0e24, 1.0e6);

        assert_eq!(force(&a, &b, G, &scales), None);
        assert_eq!(acceleration(&a, &b, G, &scales), None);
        assert_eq!(acceleration(&b, &a, G, &scales), None);
    }

    #[test]
    fn coincident_bodies_are_skipped() {
        let scales = Scales::default();
        let a = body(0.25, 0.25, 1.0e24, 1.0);
        let b = body(0.25, 0.25, 1.0e24, 1.0);

        assert_eq!(acceleration(&a, &b, G, &scales), None);
    }
}
