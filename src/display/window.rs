// Display window - SDL2 window, renderer and event pump ownership
//
// One DisplayWindow owns everything the display needs from SDL: the
// library context, the window, its renderer, and the process-wide event
// pump. Dropping the window releases all of it; rust-sdl2 reference-counts
// the context, so teardown is idempotent and a new window can be opened
// afterwards. SDL allows a single event pump per process, which makes a
// second concurrent DisplayWindow fail to open rather than misbehave.

use log::{debug, info};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, WindowCanvas};
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};

use crate::display::blit::{blit, DrawTarget};
use crate::display::config::{DisplayConfig, RenderFlags, WindowFlags, WindowPosition};
use crate::display::DisplayError;
use crate::input::events::translate_event;
use crate::input::DisplayEvent;

/// An open display window
///
/// Created from a [`DisplayConfig`]; used by many `show` and `poll_event`
/// calls; torn down once, either explicitly via [`close`](Self::close) or
/// by dropping. Not thread-safe: all calls must come from the thread that
/// opened it.
pub struct DisplayWindow {
    canvas: WindowCanvas,
    events: EventPump,
    config: DisplayConfig,
    // Declared last: the context must outlive the canvas and the pump.
    _sdl: Sdl,
}

impl DisplayWindow {
    /// Open a window and renderer described by `config`
    ///
    /// The window is created at `width * x_scale` by `height * y_scale`
    /// screen pixels. Each failure during construction maps to its own
    /// [`DisplayError`] variant with the SDL diagnostic attached; nothing
    /// is retried.
    pub fn open(config: DisplayConfig) -> Result<Self, DisplayError> {
        let sdl = sdl2::init().map_err(DisplayError::Init)?;
        let video = sdl.video().map_err(DisplayError::Init)?;

        let mut builder =
            video.window(&config.title, config.window_width(), config.window_height());
        match (config.x, config.y) {
            (WindowPosition::At(x), WindowPosition::At(y)) => {
                builder.position(x, y);
            }
            (WindowPosition::Centered, WindowPosition::Centered) => {
                builder.position_centered();
            }
            // Mixed placement sentinels degrade to window-system choice;
            // the builder only takes symmetric placement hints.
            _ => {}
        }
        if config.window_flags.contains(WindowFlags::HIDDEN) {
            builder.hidden();
        }
        if config.window_flags.contains(WindowFlags::BORDERLESS) {
            builder.borderless();
        }
        if config.window_flags.contains(WindowFlags::RESIZABLE) {
            builder.resizable();
        }
        if config.window_flags.contains(WindowFlags::FULLSCREEN) {
            builder.fullscreen();
        }
        if config.window_flags.contains(WindowFlags::ALLOW_HIGHDPI) {
            builder.allow_highdpi();
        }
        let window = builder.build()?;

        let mut canvas_builder = window.into_canvas();
        if config.render_flags.contains(RenderFlags::SOFTWARE) {
            canvas_builder = canvas_builder.software();
        }
        if config.render_flags.contains(RenderFlags::ACCELERATED) {
            canvas_builder = canvas_builder.accelerated();
        }
        if config.render_flags.contains(RenderFlags::PRESENTVSYNC) {
            canvas_builder = canvas_builder.present_vsync();
        }
        if config.render_flags.contains(RenderFlags::TARGET_TEXTURE) {
            canvas_builder = canvas_builder.target_texture();
        }
        let canvas = canvas_builder.build()?;

        let events = sdl.event_pump().map_err(DisplayError::EventPump)?;

        info!(
            "opened {}x{} display window (scale {}x{})",
            config.width, config.height, config.x_scale, config.y_scale
        );

        Ok(DisplayWindow {
            canvas,
            events,
            config,
            _sdl: sdl,
        })
    }

    /// Paint a full RGB565 frame and present it
    ///
    /// # Arguments
    /// * `buffer` - Packed RGB565 bytes, length `width * height * 2`
    ///
    /// # Errors
    /// [`DisplayError::BufferSize`] when the length is wrong (nothing is
    /// drawn); any other variant when the rendering backend fails partway
    /// through, leaving an undefined partial frame on screen.
    pub fn show(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        blit(
            &mut self.canvas,
            self.config.width,
            self.config.height,
            self.config.x_scale,
            self.config.y_scale,
            buffer,
        )
    }

    /// Poll one pending event, already translated into display space
    ///
    /// Non-blocking; returns `None` when the queue is empty. Events come
    /// back in queue order, one per call.
    pub fn poll_event(&mut self) -> Option<DisplayEvent> {
        self.events
            .poll_event()
            .map(|event| translate_event(event, self.config.x_scale, self.config.y_scale))
    }

    /// The configuration this window was opened with
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Tear the window down explicitly
    ///
    /// Equivalent to dropping; provided so call sites can make the
    /// teardown point visible.
    pub fn close(self) {}
}

impl Drop for DisplayWindow {
    fn drop(&mut self) {
        debug!("display window closed");
    }
}

impl DrawTarget for WindowCanvas {
    fn set_draw_color(&mut self, r: u8, g: u8, b: u8, a: u8) -> Result<(), DisplayError> {
        Canvas::<Window>::set_draw_color(self, Color::RGBA(r, g, b, a));
        Ok(())
    }

    fn draw_point(&mut self, x: i32, y: i32) -> Result<(), DisplayError> {
        Canvas::<Window>::draw_point(self, Point::new(x, y)).map_err(DisplayError::Backend)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<(), DisplayError> {
        Canvas::<Window>::fill_rect(self, Rect::new(x, y, w, h)).map_err(DisplayError::Backend)
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        Canvas::<Window>::present(self);
        Ok(())
    }
}
