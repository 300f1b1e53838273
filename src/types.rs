// Core types shared by the emitter, the marcher and the loop.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer of `width * height` pixels, all set to `color`.
    pub fn new(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Overwrite every pixel with `color` (the per-frame erase).
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Pixel at (x,y), or None when outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// A circle in screen-pixel units. `r` is expected to be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64, // center x
    pub y: f64, // center y
    pub r: f64, // radius
}

impl Circle {
    /// Strictly inside: points exactly on the rim are outside.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy < self.r * self.r
    }
}

/// A ray leaving (x_start, y_start) at `angle` radians, in [0, 2π).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub x_start: f64,
    pub y_start: f64,
    pub angle: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_the_rim() {
        let c = Circle { x: 10.0, y: 10.0, r: 5.0 };
        assert!(c.contains(10.0, 10.0));
        assert!(c.contains(14.9, 10.0));
        assert!(!c.contains(15.0, 10.0));
        assert!(!c.contains(10.0, 5.0));
    }

    #[test]
    fn get_is_bounds_checked() {
        let mut fb = FrameBuffer::new(4, 3, 0);
        fb.pixels[2 * 4 + 3] = 7;
        assert_eq!(fb.get(3, 2), Some(7));
        assert_eq!(fb.get(4, 2), None);
        assert_eq!(fb.get(0, 3), None);

        fb.clear(9);
        assert!(fb.pixels.iter().all(|&p| p == 9));
    }
}
