// pixelscreen - SDL2-backed RGB565 display emulator
//
// Renders packed 16-bit framebuffers into a desktop window and normalizes
// SDL input events into display-space coordinates, so code written for a
// small embedded screen runs unchanged against a host window.

// Public modules
pub mod display;
pub mod input;

// Re-export main types for convenience
pub use display::{
    blit, rgb565_to_rgb, rgb565_to_rgba, rgb_to_rgb565, DisplayConfig, DisplayError,
    DisplayWindow, DrawTarget, FrameBuffer, RenderFlags, WindowFlags, WindowPosition,
};
pub use input::{translate_event, DisplayEvent, EventKind, KeyMod, MouseButtons, WheelDirection};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // The pure components can be instantiated without a window.
        let config = DisplayConfig::new();
        let frame = FrameBuffer::new(config.width, config.height);
        assert_eq!(frame.as_bytes().len(), config.buffer_len());
        assert_eq!(rgb565_to_rgb(0xF800), [255, 0, 0]);
    }
}
