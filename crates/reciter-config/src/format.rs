use serde::{Deserialize, Serialize};

fn default_delimiter() -> char {
    '|'
}

fn default_comment_prefix() -> String {
    "#".to_string()
}

/// Line grammar of a word list file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ListFormat {
    /// Separates headword, explanation and phonetic symbol
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Lines starting with this are skipped. Empty disables comments
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
    /// Compose fields to Unicode NFC instead of keeping them as written
    #[serde(default)]
    pub normalize: bool,
}

impl ListFormat {
    pub fn is_comment(&self, trimmed_line: &str) -> bool {
        let prefix = self.comment_prefix.trim();
        !prefix.is_empty() && trimmed_line.starts_with(prefix)
    }
}

impl Default for ListFormat {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            comment_prefix: default_comment_prefix(),
            normalize: false,
        }
    }
}
