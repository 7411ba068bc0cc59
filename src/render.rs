//! What the simulation hands to whatever draws it.
//!
//! The engine never touches a graphics API. Each tick it emits one
//! [`DrawRequest`] per body into a [`Canvas`]; the canvas decides how to put a
//! filled circle on screen.

use std::f64::consts::TAU;

use ultraviolet::DVec2;

use crate::body::Body;

/// Triangles used to approximate each circle.
pub const CIRCLE_SEGMENTS: u32 = 50;

/// Body fill color, RGB.
pub const FOREGROUND: [f32; 3] = [1.0, 1.0, 1.0];

/// Clear color, RGBA.
pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// A filled circle in normalized device coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRequest {
    pub center: DVec2,
    pub radius: f64,
    pub segments: u32,
}

impl DrawRequest {
    pub fn for_body(body: &Body) -> Self {
        Self {
            center: body.pos,
            radius: body.display_radius(),
            segments: CIRCLE_SEGMENTS,
        }
    }

    /// Vertices of a triangle fan covering the circle: the center, then
    /// `segments + 1` rim points with the first repeated at the end.
    pub fn triangle_fan(&self) -> Vec<DVec2> {
        let mut vertices = Vec::with_capacity(self.segments as usize + 2);
        vertices.push(self.center);

        for i in 0..=self.segments {
            let angle = TAU * (i as f64 / self.segments as f64);
            let (sin, cos) = angle.sin_cos();
            vertices.push(self.center + DVec2::new(cos, sin) * self.radius);
        }

        vertices
    }
}

/// Receives the draw requests produced during a tick.
pub trait Canvas {
    fn draw_circle(&mut self, request: DrawRequest);
}

/// Discards everything.
impl Canvas for () {
    fn draw_circle(&mut self, _request: DrawRequest) {}
}

/// Records every request in order.
impl Canvas for Vec<DrawRequest> {
    fn draw_circle(&mut self, request: DrawRequest) {
        self.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn request_mirrors_body() {
        let body = Body::new(DVec2::new(0.384, 0.0), DVec2::new(0.0, 1022.0), 0.05, 7.35e22, 1.737e6)
            .unwrap();
        let request = DrawRequest::for_body(&body);

        assert_eq!(request.center, DVec2::new(0.384, 0.0));
        assert_eq!(request.radius, 0.05);
        assert_eq!(request.segments, 50);
    }

    #[test]
    fn fan_is_a_closed_ring_around_the_center() {
        let request = DrawRequest {
            center: DVec2::new(0.5, -0.25),
            radius: 0.1,
            segments: CIRCLE_SEGMENTS,
        };
        let fan = request.triangle_fan();

        assert_eq!(fan.len(), CIRCLE_SEGMENTS as usize + 2);
        assert_eq!(fan[0], request.center);

        let first = fan[1];
        let last = fan[fan.len() - 1];
        assert_abs_diff_eq!(first.x, last.x, epsilon = 1e-12);
        assert_abs_diff_eq!(first.y, last.y, epsilon = 1e-12);
        assert_abs_diff_eq!(first.x, 0.6, epsilon = 1e-12);

        for rim in &fan[1..] {
            assert_abs_diff_eq!((*rim - request.center).mag(), 0.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn vec_canvas_records_in_order() {
        let mut canvas: Vec<DrawRequest> = Vec::new();
        for x in [0.1, 0.2] {
            canvas.draw_circle(DrawRequest {
                center: DVec2::new(x, 0.0),
                radius: 0.01,
                segments: CIRCLE_SEGMENTS,
            });
        }

        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas[1].center.x, 0.2);
    }
}
