use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Level-polled pad state as a bitmask. Bit positions follow the classic
/// handheld layout the gameplay code was written against.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Buttons(u16);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const A: Buttons = Buttons(1 << 0);
    pub const B: Buttons = Buttons(1 << 1);
    pub const SELECT: Buttons = Buttons(1 << 2);
    pub const START: Buttons = Buttons(1 << 3);
    pub const RIGHT: Buttons = Buttons(1 << 4);
    pub const LEFT: Buttons = Buttons(1 << 5);
    pub const UP: Buttons = Buttons(1 << 6);
    pub const DOWN: Buttons = Buttons(1 << 7);
    pub const R: Buttons = Buttons(1 << 8);
    pub const L: Buttons = Buttons(1 << 9);

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn from_bits(bits: u16) -> Self {
        Buttons(bits)
    }

    pub const fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Buttons) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Buttons) {
        self.0 &= !other.0;
    }

    pub fn set(&mut self, other: Buttons, pressed: bool) {
        if pressed {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    fn bitor_assign(&mut self, rhs: Buttons) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Buttons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buttons({:#06x})", self.0)
    }
}

/// Tracks host keyboard state and exposes it as the pad bitmask. No edge
/// detection: the gameplay core polls levels once per tick.
#[derive(Debug, Default)]
pub(crate) struct PadCollector {
    buttons: Buttons,
    quit_requested: bool,
}

impl PadCollector {
    pub(crate) fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        self.set_key(key_event.physical_key, key_event.state);
    }

    fn set_key(&mut self, key: PhysicalKey, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        match key {
            PhysicalKey::Code(KeyCode::ArrowUp) | PhysicalKey::Code(KeyCode::KeyW) => {
                self.buttons.set(Buttons::UP, pressed);
            }
            PhysicalKey::Code(KeyCode::ArrowDown) | PhysicalKey::Code(KeyCode::KeyS) => {
                self.buttons.set(Buttons::DOWN, pressed);
            }
            PhysicalKey::Code(KeyCode::ArrowLeft) | PhysicalKey::Code(KeyCode::KeyA) => {
                self.buttons.set(Buttons::LEFT, pressed);
            }
            PhysicalKey::Code(KeyCode::ArrowRight) | PhysicalKey::Code(KeyCode::KeyD) => {
                self.buttons.set(Buttons::RIGHT, pressed);
            }
            PhysicalKey::Code(KeyCode::Space) | PhysicalKey::Code(KeyCode::KeyZ) => {
                self.buttons.set(Buttons::A, pressed);
            }
            PhysicalKey::Code(KeyCode::KeyX) => {
                self.buttons.set(Buttons::B, pressed);
            }
            PhysicalKey::Code(KeyCode::Enter) => {
                self.buttons.set(Buttons::START, pressed);
            }
            PhysicalKey::Code(KeyCode::Backspace) => {
                self.buttons.set(Buttons::SELECT, pressed);
            }
            PhysicalKey::Code(KeyCode::KeyQ) => {
                self.buttons.set(Buttons::L, pressed);
            }
            PhysicalKey::Code(KeyCode::KeyE) => {
                self.buttons.set(Buttons::R, pressed);
            }
            PhysicalKey::Code(KeyCode::Escape) => {
                if pressed {
                    self.quit_requested = true;
                }
            }
            _ => {}
        }
    }

    pub(crate) fn buttons(&self) -> Buttons {
        self.buttons
    }

    pub(crate) fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
