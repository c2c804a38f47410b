//! Input events
//!
//! Platform-agnostic pointer and keyboard events delivered to widgets.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const KEY_DOWN: EventType = 20;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer { x: f32, y: f32, button: u8 },
    Key { key: KeyCode, repeat: bool },
}

impl Event {
    /// Primary-button pointer event at `(x, y)`
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            data: EventData::Pointer { x, y, button: 0 },
        }
    }

    /// Non-repeating key event
    pub fn key(event_type: EventType, key: KeyCode) -> Self {
        Self {
            event_type,
            data: EventData::Key { key, repeat: false },
        }
    }
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const SPACE: KeyCode = KeyCode(0x20);
}
