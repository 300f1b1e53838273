// Window + software drawing utilities.
// 1) A window that shows the frame buffer and reports input as events.
// 2) Pixel, square and filled-disc rasterizers used by the rays and circles.

use crate::error::Error;
use crate::sim::InputEvent;
use crate::types::{Circle, FrameBuffer};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,                      // the on-screen window you see
    last_mouse: Option<(f32, f32)>,      // pointer at the previous poll
}

impl Drawer {
    /// Create a window of the given size with default (flag-less) options.
    /// Placement is left to the platform: minifb can't query the screen to center it.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // The loop paces itself with a fixed sleep.
        window.set_target_fps(0);
        Ok(Self { window, last_mouse: None })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Translate the window state since the last `present` into events.
    /// minifb has no queue of its own, so the queue is built here and the
    /// caller drains it to empty.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let open = self.window.is_open();
        let esc = self.window.is_key_down(Key::Escape);
        // Raw coordinates: a drag may leave the window, like a captured pointer.
        let pos = self.window.get_mouse_pos(MouseMode::Pass);
        let left = self.window.get_mouse_down(MouseButton::Left);
        translate_input(open, esc, pos, left, &mut self.last_mouse)
    }
}

/// Polled window state -> events. `last` is the pointer seen at the
/// previous poll and is replaced by `pos`.
pub fn translate_input(
    open: bool,
    esc: bool,
    pos: Option<(f32, f32)>,
    left: bool,
    last: &mut Option<(f32, f32)>,
) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if !open || esc {
        events.push(InputEvent::Quit);
    }

    if let Some((mx, my)) = pos {
        let moved = *last != Some((mx, my));
        if moved && left {
            events.push(InputEvent::Drag { x: mx as f64, y: my as f64 });
        }
    }
    *last = pos;

    events
}

/* ---------- Software drawing ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill a `size`×`size` square whose top-left corner is (x,y), clipped.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, size: i32, color: u32) {
    for py in y..y + size {
        for px in x..x + size {
            put_pixel(fb, px, py, color);
        }
    }
}

/// Fill every integer pixel strictly inside `circle`.
/// Scans the bounding square only; rim pixels stay untouched (aliased disc).
pub fn fill_circle(fb: &mut FrameBuffer, circle: Circle, color: u32) {
    let x0 = (circle.x - circle.r).floor() as i32;
    let x1 = (circle.x + circle.r).ceil() as i32;
    let y0 = (circle.y - circle.r).floor() as i32;
    let y1 = (circle.y + circle.r).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            if circle.contains(x as f64, y as f64) {
                put_pixel(fb, x, y, color);
            }
        }
    }
}
