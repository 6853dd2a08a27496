//! Platform independent input events, as delivered to the map view.
//!
//! Platform glue converts its native pointer and keyboard events into these types, so the
//! interaction layer never has to depend on a windowing toolkit.
use bitflags::bitflags;
use euclid::default::Point2D;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        /// The "logo" key, also known as the "command", "meta" or "super" key on a keyboard.
        #[doc(alias = "command")]
        #[doc(alias = "meta")]
        #[doc(alias = "super")]
        const LOGO = 1 << 3;

        const CAPS_LOCK = 1 << 4;
        const NUM_LOCK = 1 << 5;
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyboardEvent {
    pub modifiers: Modifiers,
    pub kind: KeyboardEventKind,
}

impl KeyboardEvent {
    pub const fn new(kind: KeyboardEventKind, modifiers: Modifiers) -> Self {
        Self { modifiers, kind }
    }
    pub const fn press(key: Key) -> Self {
        Self::new(KeyboardEventKind::Press(key), Modifiers::empty())
    }
    pub const fn release(key: Key) -> Self {
        Self::new(KeyboardEventKind::Release(key), Modifiers::empty())
    }

    /// The key involved in the event, `None` for pure modifier updates.
    pub const fn key(&self) -> Option<&Key> {
        match &self.kind {
            KeyboardEventKind::Press(key) | KeyboardEventKind::Release(key) => Some(key),
            KeyboardEventKind::ModifiersChanged => None,
        }
    }
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyboardEventKind::Press(_))
    }
    pub const fn is_release(&self) -> bool {
        matches!(self.kind, KeyboardEventKind::Release(_))
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyboardEventKind {
    Press(Key),
    Release(Key),
    ModifiersChanged,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    SpecialKey(SpecialKey),
    Character(String),
    Unknown,
}

impl Key {
    pub const fn special(key: SpecialKey) -> Self {
        Key::SpecialKey(key)
    }
    pub fn character(repr: impl Into<String>) -> Self {
        Key::Character(repr.into())
    }

    pub fn is_space(&self) -> bool {
        match self {
            Key::SpecialKey(key) => *key == SpecialKey::Space,
            Key::Character(repr) => repr == " ",
            Key::Unknown => false,
        }
    }
    /// Delete and Backspace both remove the current selection.
    pub const fn is_delete(&self) -> bool {
        matches!(
            self,
            Key::SpecialKey(SpecialKey::Delete) | Key::SpecialKey(SpecialKey::Backspace)
        )
    }
    pub const fn is_alt(&self) -> bool {
        matches!(
            self,
            Key::SpecialKey(SpecialKey::LAlt) | Key::SpecialKey(SpecialKey::RAlt)
        )
    }
    pub const fn is_ctrl(&self) -> bool {
        matches!(
            self,
            Key::SpecialKey(SpecialKey::LCtrl) | Key::SpecialKey(SpecialKey::RCtrl)
        )
    }
    pub const fn is_logo(&self) -> bool {
        matches!(self, Key::SpecialKey(SpecialKey::Logo))
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    LShift,
    LCtrl,
    LAlt,
    RShift,
    RCtrl,
    RAlt,

    /// Command on macOS, super or windows elsewhere.
    Logo,

    CapsLock,
    NumLock,

    Escape,
    Space,

    Insert,
    Delete,

    Enter,
    Backspace,

    Home,
    End,
    PageUp,
    PageDown,

    Left,
    Right,
    Up,
    Down,

    Tab,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,

    /// The fourth non-scroll button, which is often used as "back" in web browsers.
    Side,
    /// The fifth non-scroll button, which is often used as "forward" in web browsers.
    Extra,
}

/// A pointer event in viewport pixels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEvent {
    pub position: Point2D<f32>,
    pub kind: MouseEventKind,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub const fn new(position: Point2D<f32>, kind: MouseEventKind) -> Self {
        Self {
            position,
            kind,
            modifiers: Modifiers::empty(),
        }
    }
    pub const fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }

    pub const fn enter(position: Point2D<f32>) -> Self {
        Self::new(position, MouseEventKind::Enter)
    }
    pub const fn leave(position: Point2D<f32>) -> Self {
        Self::new(position, MouseEventKind::Leave)
    }
    pub const fn motion(position: Point2D<f32>) -> Self {
        Self::new(position, MouseEventKind::Motion { time: 0 })
    }
    pub const fn press(position: Point2D<f32>, button: MouseButton) -> Self {
        Self::new(position, MouseEventKind::Press { time: 0, button })
    }
    pub const fn release(position: Point2D<f32>, button: MouseButton) -> Self {
        Self::new(position, MouseEventKind::Release { time: 0, button })
    }
    /// A vertical wheel event of `steps` notches, negative values scroll up.
    pub const fn wheel(position: Point2D<f32>, steps: i32) -> Self {
        Self::new(
            position,
            MouseEventKind::Axis {
                time: 0,
                horizontal: AxisScroll::NONE,
                vertical: AxisScroll {
                    absolute: steps as f64 * 10.0,
                    discrete: steps,
                    stop: false,
                },
                source: Some(AxisSource::Wheel),
            },
        )
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MouseEventKind {
    Enter,
    Leave,
    Motion {
        time: u32,
    },
    Press {
        time: u32,
        button: MouseButton,
    },
    Release {
        time: u32,
        button: MouseButton,
    },
    Axis {
        time: u32,
        horizontal: AxisScroll,
        vertical: AxisScroll,
        source: Option<AxisSource>,
    },
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisScroll {
    /// The scroll measured in pixels.
    pub absolute: f64,

    /// The scroll measured in steps.
    ///
    /// Note: this might always be zero if the scrolling is due to a touchpad or other continuous
    /// source.
    pub discrete: i32,

    /// The scroll was stopped.
    pub stop: bool,
}

impl AxisScroll {
    pub const NONE: AxisScroll = AxisScroll {
        absolute: 0.,
        discrete: 0,
        stop: false,
    };
}

/// How an axis event was physically generated, a wheel scrolls in discrete notches whereas a
/// finger scrolls continuously.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AxisSource {
    Wheel,
    Finger,
    Continuous,
    WheelTilt,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// The platform-dependent default cursor. Often rendered as arrow.
    #[default]
    Default,
    Pointer,
    Crosshair,
    Text,
    Move,
    Wait,
    NotAllowed,

    /// Indicates that something can be grabbed (dragged to be moved). Often
    /// rendered as the backside of an open hand.
    Grab,
    /// Indicates that something is being grabbed.
    Grabbing,

    /// Often rendered as a magnifying glass with a "+" in the center of the glass.
    ZoomIn,
    /// Often rendered as a magnifying glass with a "-" in the center of the glass.
    ZoomOut,
}
