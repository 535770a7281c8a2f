use legion::IntoQuery;
use legion::{system, world::SubWorld};
use log::warn;
use sdl2::{gfx::primitives::DrawRenderer, pixels::Color, render::BlendMode};
use trail::{
    config::{Rgb, BACKGROUND},
    dot::Dot,
    TrailError,
};

pub struct Graphics {
    pub sdl_context: sdl2::Sdl,
    pub canvas: sdl2::render::Canvas<sdl2::video::Window>,
}

pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub title: &'static str,
}

pub fn init_graphics(display_config: &DisplayConfig) -> Result<Graphics, TrailError> {
    let sdl_context = sdl2::init().map_err(TrailError::Graphics)?;
    let video_subsystem = sdl_context.video().map_err(TrailError::Graphics)?;

    let window = video_subsystem
        .window(
            display_config.title,
            display_config.width,
            display_config.height,
        )
        .position_centered()
        .build()
        .map_err(|e| TrailError::Graphics(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| TrailError::Graphics(e.to_string()))?;
    canvas.set_blend_mode(BlendMode::Blend);

    Ok(Graphics {
        sdl_context,
        canvas,
    })
}

fn sdl_color(color: Rgb, alpha: u8) -> Color {
    Color::RGBA(color.r, color.g, color.b, alpha)
}

#[system]
#[read_component(Dot)]
pub fn render_dots(world: &mut SubWorld, #[resource] graphics: &mut Graphics) {
    graphics.canvas.set_draw_color(sdl_color(BACKGROUND, 255));
    graphics.canvas.clear();
    for dot in <&Dot>::query().iter(world) {
        // Dots stay invisible until the trail paints them.
        if dot.painted_at.is_none() {
            continue;
        }
        let center = dot.center();
        let result = graphics.canvas.filled_circle(
            center.x.round() as i16,
            center.y.round() as i16,
            (dot.size / 2.).round() as i16,
            sdl_color(dot.color, dot.alpha()),
        );
        if let Err(e) = result {
            warn!("Failed to draw dot: {}", e);
        }
    }
    graphics.canvas.present();
}
