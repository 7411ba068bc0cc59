use crate::{
    body::Body,
    gravity,
    render::{Canvas, DrawRequest},
    scale::{G, SECONDS_PER_DAY, Scales},
};

use serde::Deserialize;
use tracing::{debug, info};
use ultraviolet::DVec2;

/// How bodies within a tick observe each other's motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOrder {
    /// Each body is pulled, moved and bounced before the next one is looked
    /// at, so later bodies see earlier bodies' new positions.
    #[default]
    Sequential,
    /// Every pull is computed from the positions at the start of the tick,
    /// then all bodies move together and each overlapping pair is reversed
    /// once.
    Synchronous,
}

/// Manages the direct-summation N-body simulation state and logic.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Fixed for the run.
    scales: Scales,
    /// Gravitational constant.
    g: f64,
    order: UpdateOrder,
    /// Collection of all bodies in the simulation, fixed at construction.
    bodies: Vec<Body>,
    /// Simulated seconds since the start.
    elapsed: f64,
    /// Current frame count.
    frame: usize,
    /// Scratch buffer for synchronous ticks.
    accelerations: Vec<DVec2>,
}

impl Simulation {
    /// Initializes a simulation with the given bodies, real G and sequential
    /// ordering.
    pub fn new(bodies: Vec<Body>, scales: Scales) -> Self {
        Self::with_params(bodies, scales, G, UpdateOrder::default())
    }

    pub fn with_params(bodies: Vec<Body>, scales: Scales, g: f64, order: UpdateOrder) -> Self {
        info!(
            bodies = bodies.len(),
            space_scale = scales.space(),
            time_scale = scales.time(),
            g,
            ?order,
            "simulation initialised"
        );

        Self {
            scales,
            g,
            order,
            accelerations: vec![DVec2::zero(); bodies.len()],
            bodies,
            elapsed: 0.0,
            frame: 0,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn scales(&self) -> Scales {
        self.scales
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.g
    }

    pub fn order(&self) -> UpdateOrder {
        self.order
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Simulated seconds elapsed. Reported only, never fed back into physics.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn elapsed_days(&self) -> f64 {
        self.elapsed / SECONDS_PER_DAY
    }

    /// Advances the simulation by one tick without drawing.
    pub fn step(&mut self) {
        self.step_with(&mut ());
    }

    /// Advances the simulation by one tick, emitting one draw request per body
    /// into `canvas` right after that body has been integrated.
    pub fn step_with<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.elapsed += self.scales.time();

        match self.order {
            UpdateOrder::Sequential => self.step_sequential(canvas),
            UpdateOrder::Synchronous => self.step_synchronous(canvas),
        }

        self.frame += 1;
    }

    fn step_sequential<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        for i in 0..self.bodies.len() {
            self.attract(i);
            self.bodies[i].update_position(&self.scales);
            canvas.draw_circle(DrawRequest::for_body(&self.bodies[i]));
            self.bounce(i);
            self.collide(i);
        }
    }

    fn step_synchronous<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let n = self.bodies.len();
        for i in 0..n {
            let a = &self.bodies[i];
            self.accelerations[i] = (0..n)
                .filter(|&j| j != i)
                .filter_map(|j| gravity::acceleration(a, &self.bodies[j], self.g, &self.scales))
                .fold(DVec2::zero(), |sum, acc| sum + acc);
        }

        for i in 0..n {
            let acc = self.accelerations[i];
            let body = &mut self.bodies[i];
            body.accelerate(acc, &self.scales);
            body.update_position(&self.scales);
            canvas.draw_circle(DrawRequest::for_body(body));
            self.bounce(i);
        }

        // Positions no longer move during this pass, so a per-body sweep would
        // test every pair twice and undo each reversal. Test each pair once.
        for i in 0..n {
            for j in (i + 1)..n {
                self.collide_pair(i, j);
            }
        }
    }

    /// Applies the pull of every other body to body `i`, one pair at a time.
    fn attract(&mut self, i: usize) {
        for j in 0..self.bodies.len() {
            if j == i {
                continue;
            }
            if let Some(acc) =
                gravity::acceleration(&self.bodies[i], &self.bodies[j], self.g, &self.scales)
            {
                self.bodies[i].accelerate(acc, &self.scales);
            }
        }
    }

    fn bounce(&mut self, i: usize) {
        if self.bodies[i].reflect_at_bounds() {
            debug!(body = i, frame = self.frame, "reflected off boundary");
        }
    }

    /// Tests body `i` against every other body in index order.
    fn collide(&mut self, i: usize) {
        for j in 0..self.bodies.len() {
            if j != i {
                self.collide_pair(i, j);
            }
        }
    }

    fn collide_pair(&mut self, i: usize, j: usize) {
        let (a, b) = pair_mut(&mut self.bodies, i, j);
        if a.check_collision(b) {
            debug!(a = i, b = j, frame = self.frame, "collision, velocities reversed");
        }
    }
}

/// Mutable references to two distinct elements of `bodies`.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
