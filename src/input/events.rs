// Event translation - SDL events to normalized display events
//
// Raw SDL events carry window-pixel coordinates. The translator divides
// positions by the per-axis scale factors so consumers work in logical
// display coordinates, and flattens each event into one variant of a
// closed set. Field meanings and order within each variant are stable.

use bitflags::bitflags;
use log::trace;
use sdl2::event::Event;
use sdl2::mouse::{MouseButton, MouseWheelDirection};

bitflags! {
    /// Keyboard modifier state, mirroring the SDL modifier mask bit-for-bit
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct KeyMod: u16 {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LCTRL = 0x0040;
        const RCTRL = 0x0080;
        const LALT = 0x0100;
        const RALT = 0x0200;
        const LGUI = 0x0400;
        const RGUI = 0x0800;
        const NUM = 0x1000;
        const CAPS = 0x2000;
        const MODE = 0x4000;
        const SCROLL = 0x8000;

        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        const ALT = Self::LALT.bits() | Self::RALT.bits();
        const GUI = Self::LGUI.bits() | Self::RGUI.bits();
    }
}

bitflags! {
    /// Pressed-button state reported with pointer motion
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtons: u32 {
        const LEFT = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT = 1 << 2;
        const X1 = 1 << 3;
        const X2 = 1 << 4;
    }
}

/// Scroll wheel orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scroll values follow the physical wheel
    Normal,
    /// Natural scrolling; values are inverted
    Flipped,
    /// Unrecognized direction reported by the backend
    Unknown(u32),
}

/// Broad family of an event the translator does not normalize further
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Window,
    Text,
    Joystick,
    Controller,
    Touch,
    Gesture,
    Drop,
    Audio,
    Render,
    App,
    Clipboard,
    User,
    Unknown,
}

/// A host event normalized into display coordinates
///
/// Every variant's first field, where present, is position data already
/// corrected into unscaled display space; callers never see window pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    /// Key pressed
    KeyDown {
        /// Resolved key name, empty when the key has none
        key: String,
        /// Modifier state at the time of the event
        modifiers: KeyMod,
    },

    /// Key released
    KeyUp { key: String, modifiers: KeyMod },

    /// Pointer moved
    MouseMotion {
        x: i32,
        y: i32,
        xrel: i32,
        yrel: i32,
        /// Buttons held during the motion
        buttons: MouseButtons,
    },

    /// Pointer button pressed
    MouseButtonDown {
        x: i32,
        y: i32,
        /// Button ordinal: left 1, middle 2, right 3, extra 4-5
        button: u8,
    },

    /// Pointer button released
    MouseButtonUp { x: i32, y: i32, button: u8 },

    /// Scroll wheel moved
    MouseWheel {
        /// Horizontal tick count, scaled into display space
        x: i32,
        /// Vertical tick count, scaled into display space
        y: i32,
        direction: WheelDirection,
        /// Sub-tick horizontal scroll amount, unscaled
        precise_x: f32,
        /// Sub-tick vertical scroll amount, unscaled
        precise_y: f32,
        /// Pointer position at scroll time, unscaled window pixels
        mouse_x: i32,
        mouse_y: i32,
    },

    /// The window was asked to close
    Quit,

    /// Any event kind with no dedicated variant
    Other { kind: EventKind },
}

/// Translate one SDL event into a normalized display event
///
/// Coordinate fields are divided by the matching scale factor with
/// truncating integer division, so a window twice the logical size
/// reports logical positions. Pure function; testable without a window.
pub fn translate_event(event: Event, x_scale: u32, y_scale: u32) -> DisplayEvent {
    let xs = x_scale.max(1) as i32;
    let ys = y_scale.max(1) as i32;

    match event {
        Event::KeyDown {
            keycode, keymod, ..
        } => DisplayEvent::KeyDown {
            key: keycode.map(|k| k.name()).unwrap_or_default(),
            modifiers: KeyMod::from_bits_retain(keymod.bits()),
        },

        Event::KeyUp {
            keycode, keymod, ..
        } => DisplayEvent::KeyUp {
            key: keycode.map(|k| k.name()).unwrap_or_default(),
            modifiers: KeyMod::from_bits_retain(keymod.bits()),
        },

        Event::MouseMotion {
            mousestate,
            x,
            y,
            xrel,
            yrel,
            ..
        } => DisplayEvent::MouseMotion {
            x: x / xs,
            y: y / ys,
            xrel: xrel / xs,
            yrel: yrel / ys,
            buttons: MouseButtons::from_bits_truncate(mousestate.to_sdl_state()),
        },

        Event::MouseButtonDown {
            mouse_btn, x, y, ..
        } => DisplayEvent::MouseButtonDown {
            x: x / xs,
            y: y / ys,
            button: button_ordinal(mouse_btn),
        },

        Event::MouseButtonUp {
            mouse_btn, x, y, ..
        } => DisplayEvent::MouseButtonUp {
            x: x / xs,
            y: y / ys,
            button: button_ordinal(mouse_btn),
        },

        Event::MouseWheel {
            x,
            y,
            direction,
            precise_x,
            precise_y,
            mouse_x,
            mouse_y,
            ..
        } => DisplayEvent::MouseWheel {
            x: x / xs,
            y: y / ys,
            direction: wheel_direction(direction),
            precise_x,
            precise_y,
            mouse_x,
            mouse_y,
        },

        Event::Quit { .. } => DisplayEvent::Quit,

        other => {
            let kind = event_kind(&other);
            trace!("unnormalized event {:?}", kind);
            DisplayEvent::Other { kind }
        }
    }
}

fn button_ordinal(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Middle => 2,
        MouseButton::Right => 3,
        MouseButton::X1 => 4,
        MouseButton::X2 => 5,
        MouseButton::Unknown => 0,
    }
}

fn wheel_direction(direction: MouseWheelDirection) -> WheelDirection {
    match direction {
        MouseWheelDirection::Normal => WheelDirection::Normal,
        MouseWheelDirection::Flipped => WheelDirection::Flipped,
        MouseWheelDirection::Unknown(v) => WheelDirection::Unknown(v),
    }
}

fn event_kind(event: &Event) -> EventKind {
    match event {
        Event::Window { .. } => EventKind::Window,
        Event::TextEditing { .. } | Event::TextInput { .. } => EventKind::Text,
        Event::JoyAxisMotion { .. }
        | Event::JoyBallMotion { .. }
        | Event::JoyHatMotion { .. }
        | Event::JoyButtonDown { .. }
        | Event::JoyButtonUp { .. }
        | Event::JoyDeviceAdded { .. }
        | Event::JoyDeviceRemoved { .. } => EventKind::Joystick,
        Event::ControllerAxisMotion { .. }
        | Event::ControllerButtonDown { .. }
        | Event::ControllerButtonUp { .. }
        | Event::ControllerDeviceAdded { .. }
        | Event::ControllerDeviceRemoved { .. }
        | Event::ControllerDeviceRemapped { .. } => EventKind::Controller,
        Event::FingerDown { .. } | Event::FingerUp { .. } | Event::FingerMotion { .. } => {
            EventKind::Touch
        }
        Event::DollarGesture { .. } | Event::DollarRecord { .. } | Event::MultiGesture { .. } => {
            EventKind::Gesture
        }
        Event::DropFile { .. }
        | Event::DropText { .. }
        | Event::DropBegin { .. }
        | Event::DropComplete { .. } => EventKind::Drop,
        Event::AudioDeviceAdded { .. } | Event::AudioDeviceRemoved { .. } => EventKind::Audio,
        Event::RenderTargetsReset { .. } | Event::RenderDeviceReset { .. } => EventKind::Render,
        Event::AppTerminating { .. }
        | Event::AppLowMemory { .. }
        | Event::AppWillEnterBackground { .. }
        | Event::AppDidEnterBackground { .. }
        | Event::AppWillEnterForeground { .. }
        | Event::AppDidEnterForeground { .. } => EventKind::App,
        Event::ClipboardUpdate { .. } => EventKind::Clipboard,
        Event::User { .. } => EventKind::User,
        _ => EventKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::{Keycode, Mod};
    use sdl2::mouse::MouseState;

    fn motion(x: i32, y: i32, xrel: i32, yrel: i32, state: u32) -> Event {
        Event::MouseMotion {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mousestate: MouseState::from_sdl_state(state),
            x,
            y,
            xrel,
            yrel,
        }
    }

    #[test]
    fn test_motion_scales_both_axes_independently() {
        let event = motion(10, 10, 4, 4, MouseButtons::LEFT.bits());

        let translated = translate_event(event, 2, 1);
        assert_eq!(
            translated,
            DisplayEvent::MouseMotion {
                x: 5,
                y: 10,
                xrel: 2,
                yrel: 4,
                buttons: MouseButtons::LEFT,
            }
        );
    }

    #[test]
    fn test_motion_division_truncates_toward_zero() {
        let event = motion(7, -7, -3, 5, 0);

        let translated = translate_event(event, 2, 2);
        assert_eq!(
            translated,
            DisplayEvent::MouseMotion {
                x: 3,
                y: -3,
                xrel: -1,
                yrel: 2,
                buttons: MouseButtons::empty(),
            }
        );
    }

    #[test]
    fn test_key_event_resolves_name_and_modifiers() {
        let event = Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::A),
            scancode: None,
            keymod: Mod::LSHIFTMOD | Mod::RCTRLMOD,
            repeat: false,
        };

        let translated = translate_event(event, 1, 1);
        match translated {
            DisplayEvent::KeyDown { key, modifiers } => {
                assert_eq!(key, "A");
                assert!(modifiers.contains(KeyMod::LSHIFT));
                assert!(modifiers.contains(KeyMod::RCTRL));
                assert!(modifiers.intersects(KeyMod::SHIFT));
                assert!(!modifiers.contains(KeyMod::ALT));
            }
            other => panic!("expected KeyDown, got {:?}", other),
        }
    }

    #[test]
    fn test_key_event_without_keycode_has_empty_name() {
        let event = Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: None,
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };

        assert_eq!(
            translate_event(event, 1, 1),
            DisplayEvent::KeyUp {
                key: String::new(),
                modifiers: KeyMod::empty(),
            }
        );
    }

    #[test]
    fn test_button_events_scale_position_and_keep_ordinal() {
        let event = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Right,
            clicks: 1,
            x: 9,
            y: 15,
        };

        assert_eq!(
            translate_event(event, 3, 5),
            DisplayEvent::MouseButtonDown {
                x: 3,
                y: 3,
                button: 3,
            }
        );
    }

    #[test]
    fn test_wheel_scales_ticks_per_axis_and_passes_precise_through() {
        let event = Event::MouseWheel {
            timestamp: 0,
            window_id: 0,
            which: 0,
            x: 4,
            y: -6,
            direction: MouseWheelDirection::Flipped,
            precise_x: 0.5,
            precise_y: -1.5,
            mouse_x: 100,
            mouse_y: 200,
        };

        assert_eq!(
            translate_event(event, 2, 2),
            DisplayEvent::MouseWheel {
                x: 2,
                y: -3,
                direction: WheelDirection::Flipped,
                precise_x: 0.5,
                precise_y: -1.5,
                mouse_x: 100,
                mouse_y: 200,
            }
        );
    }

    #[test]
    fn test_quit_and_fallback_events() {
        assert_eq!(
            translate_event(Event::Quit { timestamp: 0 }, 1, 1),
            DisplayEvent::Quit
        );

        assert_eq!(
            translate_event(Event::AppTerminating { timestamp: 0 }, 1, 1),
            DisplayEvent::Other {
                kind: EventKind::App
            }
        );

        assert_eq!(
            translate_event(Event::ClipboardUpdate { timestamp: 0 }, 1, 1),
            DisplayEvent::Other {
                kind: EventKind::Clipboard
            }
        );
    }

    #[test]
    fn test_keymod_mask_matches_sdl_layout() {
        // The normalized mask must be bit-compatible with SDL's.
        assert_eq!(KeyMod::LSHIFT.bits(), Mod::LSHIFTMOD.bits());
        assert_eq!(KeyMod::RSHIFT.bits(), Mod::RSHIFTMOD.bits());
        assert_eq!(KeyMod::LCTRL.bits(), Mod::LCTRLMOD.bits());
        assert_eq!(KeyMod::RCTRL.bits(), Mod::RCTRLMOD.bits());
        assert_eq!(KeyMod::LALT.bits(), Mod::LALTMOD.bits());
        assert_eq!(KeyMod::RALT.bits(), Mod::RALTMOD.bits());
        assert_eq!(KeyMod::LGUI.bits(), Mod::LGUIMOD.bits());
        assert_eq!(KeyMod::RGUI.bits(), Mod::RGUIMOD.bits());
        assert_eq!(KeyMod::NUM.bits(), Mod::NUMMOD.bits());
        assert_eq!(KeyMod::CAPS.bits(), Mod::CAPSMOD.bits());
        assert_eq!(KeyMod::MODE.bits(), Mod::MODEMOD.bits());
    }
}
