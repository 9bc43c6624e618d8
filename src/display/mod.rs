// Display module - RGB565 framebuffer rendering onto an SDL2 window
//
// This module provides:
// - RGB565 pixel decoding (exact proportional channel rescaling)
// - An owned frame buffer for callers that render on the CPU
// - The blit engine painting full frames through a draw-target seam
// - Window configuration with TOML persistence
// - The SDL2 window/renderer/event-pump owner

pub mod blit;
pub mod config;
pub mod framebuffer;
pub mod pixel;
pub mod window;

pub use blit::{blit, DrawTarget};
pub use config::{DisplayConfig, RenderFlags, WindowFlags, WindowPosition};
pub use framebuffer::FrameBuffer;
pub use pixel::{rgb565_to_rgb, rgb565_to_rgba, rgb_to_rgb565};
pub use window::DisplayWindow;

use sdl2::video::WindowBuildError;
use sdl2::IntegerOrSdlError;

/// Errors reported by the display stack
///
/// `BufferSize` is a caller error: the call must be fixed, not retried.
/// Every other variant is a backend failure carrying the SDL diagnostic;
/// the window generally stays usable unless construction itself failed.
#[derive(Debug)]
pub enum DisplayError {
    /// SDL or video subsystem initialization failed
    Init(String),

    /// Window creation failed
    WindowBuild(WindowBuildError),

    /// Renderer creation failed
    CanvasBuild(IntegerOrSdlError),

    /// Event pump acquisition failed (a second display is already open)
    EventPump(String),

    /// Framebuffer length does not match `width * height * 2`
    BufferSize { expected: usize, actual: usize },

    /// A draw or present call failed in the rendering backend
    Backend(String),
}

impl DisplayError {
    /// Whether this error is a caller contract violation rather than a
    /// backend failure
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, DisplayError::BufferSize { .. })
    }
}

impl std::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayError::Init(e) => write!(f, "SDL init error: {}", e),
            DisplayError::WindowBuild(e) => write!(f, "window creation error: {}", e),
            DisplayError::CanvasBuild(e) => write!(f, "renderer creation error: {}", e),
            DisplayError::EventPump(e) => write!(f, "event pump error: {}", e),
            DisplayError::BufferSize { expected, actual } => {
                write!(
                    f,
                    "buffer size mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            DisplayError::Backend(e) => write!(f, "render backend error: {}", e),
        }
    }
}

impl std::error::Error for DisplayError {}

impl From<WindowBuildError> for DisplayError {
    fn from(e: WindowBuildError) -> Self {
        DisplayError::WindowBuild(e)
    }
}

impl From<IntegerOrSdlError> for DisplayError {
    fn from(e: IntegerOrSdlError) -> Self {
        DisplayError::CanvasBuild(e)
    }
}

impl From<String> for DisplayError {
    fn from(e: String) -> Self {
        DisplayError::Backend(e)
    }
}
