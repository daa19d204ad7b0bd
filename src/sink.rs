// Rendering sinks: dots onto the persistent canvas, press state into the
// HUD label. Each consumes its stream as-is; no filtering or shaping here.

use crate::draw;
use crate::types::{DrawnPoint, FrameBuffer};

/// Stamps accepted points onto the canvas. The canvas is append-only: dots
/// are only ever painted over what is already there, never cleared, so a
/// session's drawing accumulates until the window closes.
pub struct MarkerSink {
    radius: i32,    // dot radius in pixels
    stamped: usize, // dots painted so far
}

impl MarkerSink {
    pub fn new(radius: i32) -> Self {
        Self { radius, stamped: 0 }
    }

    /// Paint one dot. Visual: a filled circle in the session color lands at
    /// (x,y) and stays for the rest of the run.
    pub fn accept(&mut self, canvas: &mut FrameBuffer, point: &DrawnPoint) {
        draw::fill_circle(canvas, point.x, point.y, self.radius, point.color.pixel());
        self.stamped += 1;
    }

    /// How many dots have landed so far (shown in the HUD).
    pub fn count(&self) -> usize {
        self.stamped
    }
}

/// The "is the button down" HUD text. Starts out reading "No" and is only
/// rewritten when a press or release actually happens.
pub struct StatusLabel {
    text: &'static str,
}

impl StatusLabel {
    pub fn new() -> Self {
        Self { text: "No" }
    }

    /// Overwrite the label for a press-state change.
    pub fn set_pressed(&mut self, down: bool) {
        self.text = if down { "Yes" } else { "No" };
    }

    pub fn text(&self) -> &str {
        self.text
    }
}

impl Default for StatusLabel {
    fn default() -> Self {
        Self::new()
    }
}
