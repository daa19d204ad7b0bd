// The pointer pipeline: one mutable press-state cell plus the ordered
// filter, throttle, shape chain that turns raw moves into drawn points.
// Two small structs, both driven from a single call site in the frame loop.

use std::time::{Duration, Instant};

use crate::color::SessionColor;
use crate::types::DrawnPoint;

/// Whether the left button is held right now. Two states, starts released;
/// a Down event flips it true, an Up event flips it false, nothing else
/// touches it. Lives for the whole run.
#[derive(Debug, Default)]
pub struct PressState {
    down: bool,
}

impl PressState {
    pub fn new() -> Self {
        Self { down: false }
    }

    /// Button went down.
    pub fn press(&mut self) {
        self.down = true;
    }

    /// Button came back up.
    pub fn release(&mut self) {
        self.down = false;
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.down
    }
}

/// The move chain. Holds the throttle clock and the session color; emits at
/// most one `DrawnPoint` per throttle window while the button is held.
pub struct MovePipeline {
    window: Duration,           // minimum gap between two accepted moves
    last_emit: Option<Instant>, // when the previous point was accepted
    color: SessionColor,        // stamped into every point this session
}

impl MovePipeline {
    pub fn new(window: Duration, color: SessionColor) -> Self {
        Self { window, last_emit: None, color }
    }

    /// Run one move event through the chain. Stages in strict order:
    /// filter (button held?), throttle (window reopened?), shape.
    /// `now` is supplied by the caller so the throttle clock can be driven
    /// directly in tests.
    pub fn handle(&mut self, x: i32, y: i32, pressed: bool, now: Instant) -> Option<DrawnPoint> {
        // 1) Filter: an unpressed move is dropped before the throttle clock
        //    is even consulted.
        if !pressed {
            return None;
        }

        // 2) Throttle, leading edge: suppressed moves don't reset the window.
        if !self.window_open(now) {
            return None;
        }
        self.last_emit = Some(now);

        // 3) Shape.
        Some(DrawnPoint { x, y, color: self.color })
    }

    /// Open until the first accepted move, then closed until a full window
    /// has elapsed since the last acceptance.
    fn window_open(&self, now: Instant) -> bool {
        match self.last_emit {
            None => true,
            Some(last) => now.duration_since(last) >= self.window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointerEvent;

    const WINDOW: Duration = Duration::from_millis(50);

    fn pipeline() -> MovePipeline {
        MovePipeline::new(WINDOW, SessionColor::from_pixel(0x12_34_56))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn press_state_starts_released() {
        assert!(!PressState::new().is_down());
    }

    #[test]
    fn press_state_follows_most_recent_event() {
        let mut press = PressState::new();
        let script = [
            (PointerEvent::Down, true),
            (PointerEvent::Down, true),
            (PointerEvent::Up, false),
            (PointerEvent::Up, false),
            (PointerEvent::Down, true),
        ];
        for (event, expected) in script {
            match event {
                PointerEvent::Down => press.press(),
                PointerEvent::Up => press.release(),
                PointerEvent::Move { .. } => {}
            }
            assert_eq!(press.is_down(), expected);
        }
    }

    #[test]
    fn move_without_press_is_dropped() {
        let mut moves = pipeline();
        assert_eq!(moves.handle(5, 5, false, Instant::now()), None);
    }

    #[test]
    fn first_move_is_accepted_then_window_suppresses() {
        let mut moves = pipeline();
        let t0 = Instant::now();

        let first = moves.handle(10, 20, true, t0).expect("first move accepted");
        assert_eq!((first.x, first.y), (10, 20));

        // 10 ms later: inside the window, suppressed.
        assert_eq!(moves.handle(11, 21, true, t0 + ms(10)), None);
    }

    #[test]
    fn window_reopens_after_full_gap() {
        let mut moves = pipeline();
        let t0 = Instant::now();

        assert!(moves.handle(0, 0, true, t0).is_some());
        // Long pause, then an accepted move at t0+60.
        let point = moves.handle(1, 1, true, t0 + ms(60)).expect("window reopened");
        assert_eq!((point.x, point.y), (1, 1));
        // Only 10 ms after that acceptance: suppressed again.
        assert_eq!(moves.handle(2, 2, true, t0 + ms(70)), None);
        // The window is measured from the t0+60 acceptance, not from t0+70.
        assert!(moves.handle(3, 3, true, t0 + ms(110)).is_some());
    }

    #[test]
    fn exact_window_boundary_is_accepted() {
        let mut moves = pipeline();
        let t0 = Instant::now();

        assert!(moves.handle(0, 0, true, t0).is_some());
        assert!(moves.handle(1, 1, true, t0 + WINDOW).is_some());
    }

    #[test]
    fn filtered_moves_leave_the_throttle_clock_alone() {
        let mut moves = pipeline();
        let t0 = Instant::now();

        assert!(moves.handle(0, 0, true, t0).is_some());
        // Unpressed move at t0+40 must not count as an emission...
        assert_eq!(moves.handle(9, 9, false, t0 + ms(40)), None);
        // ...so a pressed move at t0+50 still clears the window.
        assert!(moves.handle(1, 1, true, t0 + ms(50)).is_some());
    }

    #[test]
    fn every_point_carries_the_session_color() {
        let mut moves = pipeline();
        let t0 = Instant::now();

        let mut points = Vec::new();
        for i in 0..4 {
            let at = t0 + ms(60 * i as u64);
            points.push(moves.handle(i, i, true, at).expect("spaced beyond the window"));
        }
        assert!(points.iter().all(|p| p.color == points[0].color));
    }

    #[test]
    fn no_events_means_no_points() {
        // Nothing fed in, nothing comes out; the pipeline holds no pending state.
        let moves = pipeline();
        assert!(moves.last_emit.is_none());
    }
}
