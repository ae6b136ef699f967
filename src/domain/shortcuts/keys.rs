use serde::{Deserialize, Serialize};

/// A key as reported by the DOM `KeyboardEvent.key` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    Char(char),
    Backspace,
    Escape,
    Other(String),
}

impl Key {
    pub fn parse(raw: &str) -> Key {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c),
            _ => match raw {
                "Backspace" => Key::Backspace,
                "Escape" | "Esc" => Key::Escape,
                other => Key::Other(other.to_string()),
            },
        }
    }

    pub fn is_char(&self, expected: char) -> bool {
        matches!(self, Key::Char(c) if *c == expected)
    }

    /// Value of a number-row digit key.
    pub fn digit(&self) -> Option<u32> {
        match self {
            Key::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}

impl From<String> for Key {
    fn from(raw: String) -> Self {
        Key::parse(&raw)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        match key {
            Key::Char(c) => c.to_string(),
            Key::Backspace => "Backspace".to_string(),
            Key::Escape => "Escape".to_string(),
            Key::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPhase {
    #[default]
    Down,
    Up,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,

    #[serde(default)]
    pub phase: KeyPhase,

    /// Focus was inside a text input or textarea when the key fired.
    #[serde(default)]
    pub in_text_input: bool,

    #[serde(default)]
    pub timestamp_ms: u64,
}

impl KeyEvent {
    pub fn down(key: &str, timestamp_ms: u64) -> Self {
        KeyEvent {
            key: Key::parse(key),
            phase: KeyPhase::Down,
            in_text_input: false,
            timestamp_ms,
        }
    }

    pub fn up(key: &str, timestamp_ms: u64) -> Self {
        KeyEvent {
            phase: KeyPhase::Up,
            ..KeyEvent::down(key, timestamp_ms)
        }
    }

    pub fn in_text_input(mut self) -> Self {
        self.in_text_input = true;
        self
    }

    pub fn is_down(&self) -> bool {
        self.phase == KeyPhase::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_key_names() {
        assert_eq!(Key::parse("j"), Key::Char('j'));
        assert_eq!(Key::parse("?"), Key::Char('?'));
        assert_eq!(Key::parse("Backspace"), Key::Backspace);
        assert_eq!(Key::parse("Escape"), Key::Escape);
        assert_eq!(Key::parse("Shift"), Key::Other("Shift".into()));
    }

    #[test]
    fn events_deserialize_with_defaults() {
        let event: KeyEvent = serde_json::from_str(r#"{"key":"G"}"#).unwrap();

        assert_eq!(event.key, Key::Char('G'));
        assert!(event.is_down());
        assert!(!event.in_text_input);
    }
}
