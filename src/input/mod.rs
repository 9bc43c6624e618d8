// Input module - Normalized host input events
//
// This module provides:
// - DisplayEvent, the closed set of normalized event shapes
// - Modifier and button-state masks mirroring the SDL layouts
// - The pure SDL-to-DisplayEvent translation function

pub mod events;

pub use events::{translate_event, DisplayEvent, EventKind, KeyMod, MouseButtons, WheelDirection};
