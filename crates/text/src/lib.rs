use serde::Serialize;
use std::fmt;

/// The palette a host uses when it has no opinion of its own.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColorCode {
    Green,
    Red,
    Aqua,
    Gray,
    White,
}

impl ColorCode {
    /// Legacy `&` formatting code for this color.
    pub fn legacy_code(self) -> char {
        match self {
            ColorCode::Green => 'a',
            ColorCode::Red => 'c',
            ColorCode::Aqua => 'b',
            ColorCode::Gray => '7',
            ColorCode::White => 'f',
        }
    }
}

/// Semantic weight of an output line. Hosts decide how each level looks.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Success,
    Error,
    Accent,
}

impl Emphasis {
    pub fn default_color(self) -> ColorCode {
        match self {
            Emphasis::Success => ColorCode::Green,
            Emphasis::Error => ColorCode::Red,
            Emphasis::Accent => ColorCode::Aqua,
        }
    }
}

/// One line of output addressed to a command sender.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub emphasis: Emphasis,
    pub text: String,
}

impl Message {
    pub fn new(emphasis: Emphasis, text: impl Into<String>) -> Self {
        Self {
            emphasis,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Emphasis::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Emphasis::Error, text)
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::new(Emphasis::Accent, text)
    }

    pub fn is_error(&self) -> bool {
        self.emphasis == Emphasis::Error
    }

    pub fn encode_json(&self) -> String {
        // A struct of a unit enum and a string can not fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Renders the line with a leading legacy color code, e.g. `&aData loaded!`.
    pub fn to_legacy_text(&self) -> String {
        format!("&{}{}", self.emphasis.default_color().legacy_code(), self.text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
