//! Easy vs Customize creation flows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the user wants to configure a new resource.
///
/// - `Easy`: one "purpose" answer, resolved through a defaults table.
/// - `Customize`: a fixed field-by-field sequence of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationMode {
    Easy,
    Customize,
}

impl CreationMode {
    /// Parses a whole message as a mode token.
    ///
    /// Only an exact (trimmed, case-insensitive) `easy` or `customize`
    /// counts; "easy please" is ordinary text.
    pub fn from_token(message: &str) -> Option<Self> {
        match message.trim().to_lowercase().as_str() {
            "easy" => Some(CreationMode::Easy),
            "customize" => Some(CreationMode::Customize),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreationMode::Easy => "easy",
            CreationMode::Customize => "customize",
        }
    }
}

impl fmt::Display for CreationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
