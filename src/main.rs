// What you SEE:
// • A white light source throws yellow rays in every direction.
// • A second white circle bounces up and down and blocks rays (its shadow).
// • Hold Left Mouse and drag to move the light source. ESC or close to quit.

use light_shadow::color;
use light_shadow::consts::{FRAME_DELAY, HEIGHT, NUM_RAYS, WIDTH, WINDOW_TITLE};
use light_shadow::draw::Drawer;
use light_shadow::error::Error;
use light_shadow::sim::Simulation;
use light_shadow::types::FrameBuffer;
use std::time::{Duration, Instant};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    /* --- Window + reusable screen buffer --- */
    let mut drawer = Drawer::new(WINDOW_TITLE, WIDTH, HEIGHT)?;
    let mut screen = FrameBuffer::new(WIDTH, HEIGHT, color::black());

    let mut sim = Simulation::default();
    info!(width = WIDTH, height = HEIGHT, rays = NUM_RAYS, "window open");

    /* --- FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut frames_total: u64 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while sim.is_running() {
        /* 1) Inputs: drain everything that arrived since the last frame. */
        sim.drain_events(drawer.poll_events());
        if !sim.is_running() {
            break;
        }

        /* 2) Erase, rays, then both circles on top. */
        sim.render(&mut screen);

        /* 3) Obstacle moves for the next frame (bounces top/bottom). */
        sim.advance();

        /* 4) Present to the window. */
        drawer.present(&screen)?;

        /* 5) FPS once per second. */
        frames_this_second += 1;
        frames_total += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            info!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }

        std::thread::sleep(FRAME_DELAY);
    }

    info!(frames = frames_total, "quit");
    Ok(())
}
