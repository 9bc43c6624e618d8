// Blit Engine - Paints an RGB565 framebuffer onto a draw target
//
// One call paints a full frame: every pixel is decoded and drawn, then the
// frame is presented once. With scale factors above 1 each source pixel
// becomes an axis-aligned x_scale by y_scale tile; tiles partition the
// scaled canvas exactly, with no gaps and no overlaps.

use super::pixel::rgb565_to_rgb;
use super::DisplayError;

/// Drawing operations the blit engine needs from a render surface
///
/// `DisplayWindow`'s SDL canvas implements this; tests substitute a
/// recording target.
pub trait DrawTarget {
    /// Set the color used by subsequent draw calls
    fn set_draw_color(&mut self, r: u8, g: u8, b: u8, a: u8) -> Result<(), DisplayError>;

    /// Paint a single point
    fn draw_point(&mut self, x: i32, y: i32) -> Result<(), DisplayError>;

    /// Paint a filled axis-aligned rectangle
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<(), DisplayError>;

    /// Make the painted frame visible
    fn present(&mut self) -> Result<(), DisplayError>;
}

/// Paint a packed RGB565 framebuffer onto a draw target
///
/// The buffer holds `width * height` 16-bit values in row-major order,
/// native byte order. A length mismatch is a caller error reported before
/// any draw call; a failing draw call aborts the remaining iteration and
/// the frame is not presented (the partial frame on screen is undefined).
///
/// # Arguments
/// * `target` - Surface receiving the draw calls
/// * `width`, `height` - Display size in unscaled pixels
/// * `x_scale`, `y_scale` - Per-axis integer magnification
/// * `buffer` - Packed RGB565 bytes, length `width * height * 2`
pub fn blit(
    target: &mut impl DrawTarget,
    width: u32,
    height: u32,
    x_scale: u32,
    y_scale: u32,
    buffer: &[u8],
) -> Result<(), DisplayError> {
    let expected = width as usize * height as usize * 2;
    if buffer.len() != expected {
        return Err(DisplayError::BufferSize {
            expected,
            actual: buffer.len(),
        });
    }

    let mut i = 0;
    for y in 0..height {
        for x in 0..width {
            let color = u16::from_ne_bytes([buffer[i], buffer[i + 1]]);
            i += 2;

            let [r, g, b] = rgb565_to_rgb(color);
            target.set_draw_color(r, g, b, 0xFF)?;

            if x_scale == 1 && y_scale == 1 {
                target.draw_point(x as i32, y as i32)?;
            } else {
                target.fill_rect(
                    (x * x_scale) as i32,
                    (y * y_scale) as i32,
                    x_scale,
                    y_scale,
                )?;
            }
        }
    }

    target.present()
}
