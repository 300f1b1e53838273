use std::time::Duration;

use crate::types::Circle;

// Window and render size.
pub const WIDTH: usize = 1200;
pub const HEIGHT: usize = 900;
pub const WINDOW_TITLE: &str = "Raytracing";

// Rays.
pub const NUM_RAYS: usize = 500;
pub const RAY_THICKNESS: i32 = 1;
pub const RAY_STEP: f64 = 1.0;

// Scene.
pub const LIGHT_SOURCE: Circle = Circle { x: 200.0, y: 200.0, r: 40.0 };
pub const OBSTACLE: Circle = Circle { x: 600.0, y: 450.0, r: 140.0 };
pub const OBSTACLE_SPEED_Y: f64 = 3.0; // px per frame

// 10 ms per frame caps us at roughly 100 FPS.
pub const FRAME_DELAY: Duration = Duration::from_millis(10);
