//! The frame loop and the front-ends that drive it.

use std::io::Write;

use tracing::info;

use crate::{
    error::Result,
    render::{Canvas, DrawRequest},
    simulation::Simulation,
};

/// A window, or anything standing in for one.
pub trait Frontend: Canvas {
    /// Polled once per tick; the loop exits as soon as this returns true.
    fn should_close(&self) -> bool;

    /// Called before the tick's draw requests, e.g. to clear the screen.
    fn begin_frame(&mut self) {}

    /// Called after the tick, e.g. to swap buffers and poll events.
    fn end_frame(&mut self) {}
}

/// Single terminal line showing simulated time, rewritten each tick.
#[derive(Debug)]
pub struct StatusLine<W> {
    out: W,
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn update(&mut self, days: f64) -> std::io::Result<()> {
        write!(self.out, "\rSimulation time: {days:.3} days")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Runs ticks until the front-end asks to stop. Returns the number of ticks.
pub fn run<F, W>(sim: &mut Simulation, frontend: &mut F, status: &mut StatusLine<W>) -> Result<u64>
where
    F: Frontend + ?Sized,
    W: Write,
{
    let mut ticks = 0;

    while !frontend.should_close() {
        frontend.begin_frame();
        sim.step_with(frontend);
        status.update(sim.elapsed_days())?;
        frontend.end_frame();
        ticks += 1;
    }

    info!(ticks, days = sim.elapsed_days(), "simulation stopped");
    Ok(ticks)
}

/// Front-end without a window: closes after a fixed number of frames and
/// keeps the draw requests of the latest one.
#[derive(Debug, Default)]
pub struct Headless {
    limit: u64,
    frames: u64,
    frame: Vec<DrawRequest>,
}

impl Headless {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw requests from the most recent frame.
    pub fn last_frame(&self) -> &[DrawRequest] {
        &self.frame
    }
}

impl Canvas for Headless {
    fn draw_circle(&mut self, request: DrawRequest) {
        self.frame.push(request);
    }
}

impl Frontend for Headless {
    fn should_close(&self) -> bool {
        self.frames >= self.limit
    }

    fn begin_frame(&mut self) {
        self.frame.clear();
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}
