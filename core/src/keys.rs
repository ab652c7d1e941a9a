use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKey {
    Enter,
    Backspace,
    Tab,
    ShiftTab,
    Escape,
}

/// A decoded key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    Arrow(ArrowKey),
    Letter(char),
    Control(ControlKey),
    Unsupported,
}

/// Maps a physical key identifier such as `KeyA` or `ArrowLeft` to an input.
/// Never fails; anything unknown is [`KeyInput::Unsupported`].
pub fn decode_key(code: &str) -> KeyInput {
    if let Some(arrow) = code.strip_prefix("Arrow") {
        return match arrow {
            "Up" => KeyInput::Arrow(ArrowKey::Up),
            "Down" => KeyInput::Arrow(ArrowKey::Down),
            "Left" => KeyInput::Arrow(ArrowKey::Left),
            "Right" => KeyInput::Arrow(ArrowKey::Right),
            _ => KeyInput::Unsupported,
        };
    }

    if let Some(letter) = code.strip_prefix("Key") {
        return match letter.chars().next() {
            Some(ch) => KeyInput::Letter(ch),
            None => KeyInput::Unsupported,
        };
    }

    match code {
        "Enter" => KeyInput::Control(ControlKey::Enter),
        "Backspace" => KeyInput::Control(ControlKey::Backspace),
        "Tab" => KeyInput::Control(ControlKey::Tab),
        "ShiftTab" => KeyInput::Control(ControlKey::ShiftTab),
        "Escape" => KeyInput::Control(ControlKey::Escape),
        _ => KeyInput::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_come_from_physical_key_code() {
        assert_eq!(decode_key("KeyA"), KeyInput::Letter('A'));
        assert_eq!(decode_key("KeyZ"), KeyInput::Letter('Z'));
        assert_eq!(decode_key("Key"), KeyInput::Unsupported);
    }

    #[test]
    fn arrows_decode_by_suffix() {
        assert_eq!(decode_key("ArrowUp"), KeyInput::Arrow(ArrowKey::Up));
        assert_eq!(decode_key("ArrowRight"), KeyInput::Arrow(ArrowKey::Right));
        assert_eq!(decode_key("ArrowSideways"), KeyInput::Unsupported);
    }

    #[test]
    fn controls_match_exactly() {
        assert_eq!(decode_key("Enter"), KeyInput::Control(ControlKey::Enter));
        assert_eq!(decode_key("ShiftTab"), KeyInput::Control(ControlKey::ShiftTab));
        assert_eq!(decode_key("Escape"), KeyInput::Control(ControlKey::Escape));
        assert_eq!(decode_key("enter"), KeyInput::Unsupported);
        assert_eq!(decode_key("Digit1"), KeyInput::Unsupported);
        assert_eq!(decode_key(""), KeyInput::Unsupported);
    }
}
