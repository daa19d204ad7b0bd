// What you SEE:
// • Hold Left Mouse and drag: colored dots trail the cursor onto the canvas.
// • Every dot in a run shares one random color, picked at startup.
// • At most one dot lands per 50 ms, however fast the cursor moves.
// • The HUD shows the pressed state ("Yes"/"No"), the dot count, the session
//   color, and FPS. ESC or closing the window quits.

mod color;
mod draw;
mod error;
mod pipeline;
mod pointer;
mod sink;
mod types;

use std::time::{Duration, Instant};

use color::SessionColor;
use draw::{Drawer, draw_crosshair, draw_text_5x7};
use error::Error;
use pipeline::{MovePipeline, PressState};
use pointer::PointerTracker;
use sink::{MarkerSink, StatusLabel};
use types::{FrameBuffer, PointerEvent};

// Tunables. Visual: window size, dot size, and how often a dot may land.
const WIDTH: usize = 800;
const HEIGHT: usize = 600;
const TARGET_FPS: usize = 60;
const THROTTLE_WINDOW: Duration = Duration::from_millis(50);
const DOT_RADIUS: i32 = 5;
const BACKGROUND: u32 = 0x00_10_10_14; // near-black canvas
const CROSSHAIR_COLOR: u32 = 0x00_FF_CC_33;
const HUD_COLOR: u32 = 0x00_FF_FF_FF;

fn main() -> Result<(), Error> {
    /* --- Window setup ---
       Visual: an empty near-black canvas appears. */
    let mut drawer = Drawer::new("Dot Trail — Hold to Draw", WIDTH, HEIGHT, TARGET_FPS)?;

    /* --- Session color ---
       Visual: no effect yet; every dot this run will share it. */
    let session_color = SessionColor::random();

    /* --- Canvas (persistent: dots accumulate here) and screen (rebuilt each frame) --- */
    let mut canvas = FrameBuffer::filled(WIDTH, HEIGHT, BACKGROUND);
    let mut screen = FrameBuffer::filled(WIDTH, HEIGHT, BACKGROUND);

    /* --- The pointer pipeline, wired once and threaded explicitly ---
       Poll → events → press state → filter/throttle/shape → sinks. */
    let mut tracker = PointerTracker::new();
    let mut press = PressState::new();
    let mut moves = MovePipeline::new(THROTTLE_WINDOW, session_color);
    let mut markers = MarkerSink::new(DOT_RADIUS);
    let mut label = StatusLabel::new();
    let mut events: Vec<PointerEvent> = Vec::new();

    /* --- HUD / FPS ---
       Visual: small text shows the status line + FPS. */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Poll the mouse and synthesize this frame's discrete events. */
        events.clear();
        tracker.poll(drawer.left_mouse_down(), drawer.mouse_pos(), &mut events);

        /* 2) Feed them through: press edges update the state cell and the
              label; moves run the filter → throttle → shape chain. */
        for event in &events {
            match *event {
                PointerEvent::Down => {
                    press.press();
                    label.set_pressed(true); // visual: HUD flips to "Yes"
                }
                PointerEvent::Up => {
                    press.release();
                    label.set_pressed(false); // visual: HUD flips to "No"
                }
                PointerEvent::Move { x, y } => {
                    if let Some(point) = moves.handle(x, y, press.is_down(), now) {
                        markers.accept(&mut canvas, &point); // visual: a dot lands
                    }
                }
            }
        }

        /* 3) Composite: canvas below, crosshair + HUD on top.
           The overlay is redrawn every frame and never touches the canvas. */
        screen.pixels.copy_from_slice(&canvas.pixels);

        if let Some((mx, my)) = drawer.mouse_pos() {
            draw_crosshair(&mut screen, mx, my, 12, CROSSHAIR_COLOR);
        }

        let hud = format!(
            "DOWN: {} | DOTS: {} | {} | {}",
            label.text(),
            markers.count(),
            session_color.hex(),
            hud_fps_text
        );
        draw_text_5x7(&mut screen, 8, 8, &hud, HUD_COLOR);

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 5) FPS counter (prints to terminal + HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            println!("FPS: {:.1}", fps);               // terminal
            hud_fps_text = format!("FPS: {:.1}", fps); // HUD part
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
