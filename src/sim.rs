// The scene state the loop owns: light source, obstacle, rays.

use tracing::{debug, trace};

use crate::color;
use crate::consts::{HEIGHT, LIGHT_SOURCE, NUM_RAYS, OBSTACLE, OBSTACLE_SPEED_Y};
use crate::draw::fill_circle;
use crate::rays::{fill_rays, generate_rays};
use crate::types::{Circle, FrameBuffer, Ray};

/// Input the loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed or Escape pressed.
    Quit,
    /// Pointer moved with the left button held, in window pixels.
    Drag { x: f64, y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct Simulation {
    pub light: Circle,
    pub obstacle: Circle,
    pub obstacle_vy: f64,
    pub rays: Vec<Ray>,
    pub state: LoopState,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(LIGHT_SOURCE, OBSTACLE)
    }
}

impl Simulation {
    pub fn new(light: Circle, obstacle: Circle) -> Self {
        Self {
            light,
            obstacle,
            obstacle_vy: OBSTACLE_SPEED_Y,
            rays: generate_rays(light, NUM_RAYS),
            state: LoopState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Apply every pending event, in order. A quit does not discard the rest.
    pub fn drain_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.state = LoopState::Stopped,
            InputEvent::Drag { x, y } => {
                self.light.x = x;
                self.light.y = y;
                self.rays = generate_rays(self.light, NUM_RAYS);
                debug!(x, y, "light source moved, rays regenerated");
            }
        }
    }

    /// Erase, then rays, then both circles on top so they hide the ray pixels inside them.
    pub fn render(&self, fb: &mut FrameBuffer) {
        fb.clear(color::black());
        fill_rays(fb, &self.rays, color::ray(), self.obstacle);
        fill_circle(fb, self.light, color::white());
        fill_circle(fb, self.obstacle, color::white());
    }

    /// Move the obstacle one frame; flip its velocity once it pokes past the
    /// top or bottom edge. Returns true on a bounce.
    pub fn advance(&mut self) -> bool {
        self.obstacle.y += self.obstacle_vy;

        let o = self.obstacle;
        if o.y + o.r > HEIGHT as f64 || o.y - o.r < 0.0 {
            self.obstacle_vy = -self.obstacle_vy;
            trace!(y = o.y, vy = self.obstacle_vy, "obstacle bounced");
            return true;
        }
        false
    }
}
