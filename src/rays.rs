// Ray emitter + ray marcher.
// Rays leave the light source in every direction; each one is walked in
// unit steps until it leaves the screen or enters the obstacle, which is
// what carves the shadow behind the obstacle.

use std::f64::consts::TAU;

use crate::consts::{RAY_STEP, RAY_THICKNESS};
use crate::draw::fill_rect;
use crate::types::{Circle, FrameBuffer, Ray};

/// Why a ray stopped. Both look the same on screen today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayOutcome {
    OffScreen,
    Hit,
}

/// Where and after how many steps a ray stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayEnd {
    pub outcome: RayOutcome,
    pub x: f64,
    pub y: f64,
    pub steps: usize,
}

/// `count` rays from the center of `source`, angles evenly spread over a full turn.
pub fn generate_rays(source: Circle, count: usize) -> Vec<Ray> {
    (0..count)
        .map(|i| Ray {
            x_start: source.x,
            y_start: source.y,
            angle: (i as f64 / count as f64) * TAU,
        })
        .collect()
}

/// Walk one ray across a `width`×`height` screen, calling `plot` at every
/// cursor position (the origin itself is never plotted).
///
/// After each step the off-screen test runs first, then the obstacle test.
pub fn march_ray<F>(ray: &Ray, obstacle: Circle, width: f64, height: f64, mut plot: F) -> RayEnd
where
    F: FnMut(f64, f64),
{
    let (dy, dx) = ray.angle.sin_cos();
    let mut x = ray.x_start;
    let mut y = ray.y_start;
    let mut steps = 0;

    loop {
        x += RAY_STEP * dx;
        y += RAY_STEP * dy;
        steps += 1;

        plot(x, y);

        if x < 0.0 || x > width || y < 0.0 || y > height {
            return RayEnd { outcome: RayOutcome::OffScreen, x, y, steps };
        }
        if obstacle.contains(x, y) {
            return RayEnd { outcome: RayOutcome::Hit, x, y, steps };
        }
    }
}

/// Draw every ray onto `fb` in `color`, stopping each one at the screen edge or `obstacle`.
pub fn fill_rays(fb: &mut FrameBuffer, rays: &[Ray], color: u32, obstacle: Circle) {
    let (w, h) = (fb.width as f64, fb.height as f64);
    for ray in rays {
        // `as i32` truncates toward zero, so -0.5 still lands on column 0
        march_ray(ray, obstacle, w, h, |x, y| {
            fill_rect(fb, x as i32, y as i32, RAY_THICKNESS, color);
        });
    }
}
