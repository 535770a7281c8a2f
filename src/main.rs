extern crate sdl2;

mod render;

use legion::{Resources, Schedule, World};
use log::{error, info};
use render::DisplayConfig;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use trail::{
    advance_cursor_trail_system,
    frame::{FrameConfig, FrameLoop},
    logging,
    pointer::PointerHub,
    world_gen::init_world,
    CursorTrail, TrailConfig, TrailError,
};

const WIDTH: u32 = 1600;
const HEIGHT: u32 = 800;

fn run() -> Result<(), TrailError> {
    // Setup.
    let graphics = render::init_graphics(&DisplayConfig {
        width: WIDTH,
        height: HEIGHT,
        title: "Trail",
    })?;
    let mut event_pump = graphics
        .sdl_context
        .event_pump()
        .map_err(TrailError::Graphics)?;
    let mut world = World::default();
    let mut cursor_trail = CursorTrail::new(TrailConfig::default())?;
    init_world(&mut world, &mut cursor_trail)?;

    let mut hub = PointerHub::default();
    let token = cursor_trail.start(&mut hub);

    let mut resources = Resources::default();
    resources.insert(graphics);
    resources.insert(cursor_trail);

    let mut schedule = Schedule::builder()
        .add_system(advance_cursor_trail_system())
        .add_thread_local(render::render_dots_system())
        .build();

    let mut frame_loop = FrameLoop::new(FrameConfig::default(), token);
    frame_loop.run_until_cancelled(|_| {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    if let Some(mut cursor_trail) = resources.get_mut::<CursorTrail>() {
                        cursor_trail.stop(&mut hub);
                    }
                }
                Event::MouseMotion { x, y, .. } => hub.dispatch(x as f64, y as f64),
                _ => {}
            }
        }
        schedule.execute(&mut world, &mut resources);
    });
    info!("Exiting after {} frames", frame_loop.frames());
    Ok(())
}

pub fn main() {
    if let Err(e) = logging::init_logging(logging::level_from_env()) {
        eprintln!("{}", e);
    }
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
