// Display configuration
//
// Window geometry, per-axis scaling, and SDL flag selection, with TOML
// persistence. Settings are immutable once a window is opened from them.

use bitflags::bitflags;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

bitflags! {
    /// Window creation options
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct WindowFlags: u32 {
        /// Window is visible on creation (the default behavior)
        const SHOWN = 1 << 0;
        /// Window starts hidden
        const HIDDEN = 1 << 1;
        /// No window decoration
        const BORDERLESS = 1 << 2;
        /// Window can be resized by the user
        const RESIZABLE = 1 << 3;
        /// Fullscreen window
        const FULLSCREEN = 1 << 4;
        /// Request a high-DPI drawable where available
        const ALLOW_HIGHDPI = 1 << 5;
    }
}

bitflags! {
    /// Renderer creation options
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RenderFlags: u32 {
        /// Software fallback renderer
        const SOFTWARE = 1 << 0;
        /// Hardware-accelerated renderer
        const ACCELERATED = 1 << 1;
        /// Present is synchronized with the display refresh rate
        const PRESENTVSYNC = 1 << 2;
        /// Renderer supports rendering to texture
        const TARGET_TEXTURE = 1 << 3;
    }
}

/// Window placement for one axis
///
/// Serializes as a bare integer, `"centered"`, or `"undefined"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPosition {
    /// Center the window on the display
    Centered,
    /// Let the window system pick a position
    Undefined,
    /// Absolute coordinate in screen pixels
    At(i32),
}

impl Serialize for WindowPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WindowPosition::Centered => serializer.serialize_str("centered"),
            WindowPosition::Undefined => serializer.serialize_str("undefined"),
            WindowPosition::At(v) => serializer.serialize_i32(*v),
        }
    }
}

impl<'de> Deserialize<'de> for WindowPosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PositionVisitor;

        impl Visitor<'_> for PositionVisitor {
            type Value = WindowPosition;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer coordinate, \"centered\", or \"undefined\"")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                i32::try_from(v)
                    .map(WindowPosition::At)
                    .map_err(|_| E::custom("window coordinate out of range"))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i32::try_from(v)
                    .map(WindowPosition::At)
                    .map_err(|_| E::custom("window coordinate out of range"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                match v {
                    "centered" => Ok(WindowPosition::Centered),
                    "undefined" => Ok(WindowPosition::Undefined),
                    other => Err(E::unknown_variant(other, &["centered", "undefined"])),
                }
            }
        }

        deserializer.deserialize_any(PositionVisitor)
    }
}

/// Display configuration
///
/// `width` and `height` are the logical display size; the window is created
/// at `width * x_scale` by `height * y_scale` screen pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Logical display width in pixels
    pub width: u32,

    /// Logical display height in pixels
    pub height: u32,

    /// Horizontal window placement
    pub x: WindowPosition,

    /// Vertical window placement
    pub y: WindowPosition,

    /// Horizontal magnification (1 = native size)
    pub x_scale: u32,

    /// Vertical magnification (1 = native size)
    pub y_scale: u32,

    /// Window title
    pub title: String,

    /// Window creation flags
    pub window_flags: WindowFlags,

    /// Renderer creation flags
    pub render_flags: RenderFlags,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            width: 320,
            height: 240,
            x: WindowPosition::Centered,
            y: WindowPosition::Centered,
            x_scale: 1,
            y_scale: 1,
            title: "pixelscreen".to_string(),
            window_flags: WindowFlags::SHOWN,
            render_flags: RenderFlags::ACCELERATED | RenderFlags::PRESENTVSYNC,
        }
    }
}

impl DisplayConfig {
    /// Create a configuration with default values
    ///
    /// Default: 320x240, centered, 1x scale, accelerated vsync renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logical display size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Set the per-axis scale factors (clamped to at least 1)
    pub fn with_scale(mut self, x_scale: u32, y_scale: u32) -> Self {
        self.x_scale = x_scale.max(1);
        self.y_scale = y_scale.max(1);
        self
    }

    /// Set the window placement
    pub fn with_position(mut self, x: WindowPosition, y: WindowPosition) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window creation flags
    pub fn with_window_flags(mut self, flags: WindowFlags) -> Self {
        self.window_flags = flags;
        self
    }

    /// Set the renderer creation flags
    pub fn with_render_flags(mut self, flags: RenderFlags) -> Self {
        self.render_flags = flags;
        self
    }

    /// Window width in screen pixels
    pub fn window_width(&self) -> u32 {
        self.width * self.x_scale
    }

    /// Window height in screen pixels
    pub fn window_height(&self) -> u32 {
        self.height * self.y_scale
    }

    /// Expected framebuffer length in bytes for this display size
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 2
    }

    /// Load configuration from a file, falling back to defaults
    ///
    /// If the file is missing or malformed the default configuration is
    /// returned and written to the path so the user has a file to edit.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|_| {
            let config = Self::default();
            // Try to save the default config, but don't fail if we can't
            let _ = config.save(path);
            config
        })
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 240);
        assert_eq!(config.x, WindowPosition::Centered);
        assert_eq!(config.y, WindowPosition::Centered);
        assert_eq!(config.x_scale, 1);
        assert_eq!(config.y_scale, 1);
        assert_eq!(config.window_flags, WindowFlags::SHOWN);
        assert_eq!(
            config.render_flags,
            RenderFlags::ACCELERATED | RenderFlags::PRESENTVSYNC
        );
    }

    #[test]
    fn test_window_size_applies_scale() {
        let config = DisplayConfig::new().with_size(160, 120).with_scale(3, 2);
        assert_eq!(config.window_width(), 480);
        assert_eq!(config.window_height(), 240);
        assert_eq!(config.buffer_len(), 160 * 120 * 2);
    }

    #[test]
    fn test_scale_clamps_to_one() {
        let config = DisplayConfig::new().with_scale(0, 0);
        assert_eq!(config.x_scale, 1);
        assert_eq!(config.y_scale, 1);
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = DisplayConfig::new()
            .with_size(128, 64)
            .with_scale(2, 4)
            .with_position(WindowPosition::At(10), WindowPosition::Undefined)
            .with_title("demo");

        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: DisplayConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize");

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_position_sentinels_from_toml() {
        let config: DisplayConfig = toml::from_str(
            r#"
            x = "centered"
            y = "undefined"
            "#,
        )
        .expect("Failed to deserialize");

        assert_eq!(config.x, WindowPosition::Centered);
        assert_eq!(config.y, WindowPosition::Undefined);
        // Unspecified fields take their defaults.
        assert_eq!(config.width, 320);
    }

    #[test]
    fn test_absolute_position_from_toml() {
        let config: DisplayConfig = toml::from_str("x = 100\ny = -20\n").unwrap();
        assert_eq!(config.x, WindowPosition::At(100));
        assert_eq!(config.y, WindowPosition::At(-20));
    }

    #[test]
    fn test_bad_position_string_rejected() {
        let result: Result<DisplayConfig, _> = toml::from_str(r#"x = "middle""#);
        assert!(result.is_err());
    }
}
