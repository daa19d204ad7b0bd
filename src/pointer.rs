// Turns the window's polled mouse state into discrete pointer events.
// minifb answers "is the button down right now" and "where is the cursor";
// the pipeline wants press/release/move occurrences, so we diff against the
// previous frame here, once per poll.

use crate::types::PointerEvent;

/// Remembers last frame's poll so the current one can be edge-detected.
pub struct PointerTracker {
    was_down: bool,
    last_pos: Option<(i32, i32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { was_down: false, last_pos: None }
    }

    /// Diff the current poll against the previous frame and push the
    /// resulting events in delivery order. The button edge goes first, then
    /// the move, so a press-and-move in the same frame draws immediately.
    /// A held button or an unmoved cursor produces nothing.
    pub fn poll(&mut self, down: bool, pos: Option<(i32, i32)>, out: &mut Vec<PointerEvent>) {
        if down && !self.was_down {
            out.push(PointerEvent::Down);
        } else if !down && self.was_down {
            out.push(PointerEvent::Up);
        }
        self.was_down = down;

        if let Some((x, y)) = pos {
            if self.last_pos != Some((x, y)) {
                out.push(PointerEvent::Move { x, y });
                self.last_pos = Some((x, y));
            }
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(tracker: &mut PointerTracker, down: bool, pos: Option<(i32, i32)>) -> Vec<PointerEvent> {
        let mut out = Vec::new();
        tracker.poll(down, pos, &mut out);
        out
    }

    #[test]
    fn press_edge_fires_once_while_held() {
        let mut tracker = PointerTracker::new();
        assert_eq!(events(&mut tracker, true, Some((3, 4))), vec![
            PointerEvent::Down,
            PointerEvent::Move { x: 3, y: 4 },
        ]);
        // Still held, still at (3,4): nothing new this frame.
        assert_eq!(events(&mut tracker, true, Some((3, 4))), vec![]);
    }

    #[test]
    fn release_edge_fires_once() {
        let mut tracker = PointerTracker::new();
        tracker.poll(true, None, &mut Vec::new());
        assert_eq!(events(&mut tracker, false, None), vec![PointerEvent::Up]);
        assert_eq!(events(&mut tracker, false, None), vec![]);
    }

    #[test]
    fn button_edge_precedes_move_within_one_poll() {
        let mut tracker = PointerTracker::new();
        let evs = events(&mut tracker, true, Some((10, 20)));
        assert_eq!(evs[0], PointerEvent::Down);
        assert_eq!(evs[1], PointerEvent::Move { x: 10, y: 20 });
    }

    #[test]
    fn unmoved_cursor_emits_no_move() {
        let mut tracker = PointerTracker::new();
        assert_eq!(events(&mut tracker, false, Some((7, 7))), vec![
            PointerEvent::Move { x: 7, y: 7 },
        ]);
        assert_eq!(events(&mut tracker, false, Some((7, 7))), vec![]);
        assert_eq!(events(&mut tracker, false, Some((8, 7))), vec![
            PointerEvent::Move { x: 8, y: 7 },
        ]);
    }

    #[test]
    fn missing_position_emits_no_move() {
        let mut tracker = PointerTracker::new();
        assert_eq!(events(&mut tracker, false, None), vec![]);
    }
}
