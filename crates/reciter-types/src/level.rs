use std::fmt;

use serde::{Deserialize, Serialize};

/// College English Test level a word list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WordLevel {
    Cet4, // Band 4 (~4500 words)
    Cet6, // Band 6 (~6000 words)
}

impl WordLevel {
    /// Every level, easiest first
    pub const ALL: [WordLevel; 2] = [WordLevel::Cet4, WordLevel::Cet6];

    /// Parse level from string ("CET4", "cet-6", "4", ...)
    pub fn parse(s: &str) -> Option<Self> {
        let compact: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_uppercase();

        match compact.as_str() {
            "CET4" | "4" => Some(WordLevel::Cet4),
            "CET6" | "6" => Some(WordLevel::Cet6),
            _ => None,
        }
    }

    /// Get level string
    pub fn as_str(&self) -> &'static str {
        match self {
            WordLevel::Cet4 => "CET4",
            WordLevel::Cet6 => "CET6",
        }
    }
}

impl fmt::Display for WordLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for WordLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        WordLevel::parse(&value).ok_or_else(|| format!("unknown word level: {value:?}"))
    }
}

impl From<WordLevel> for String {
    fn from(level: WordLevel) -> Self {
        level.as_str().to_string()
    }
}
