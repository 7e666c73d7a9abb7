use std::fmt;

use serde::Serialize;

use crate::level::WordLevel;

/// One vocabulary entry from a word list
///
/// Fields are private so a record cannot change after it is built. The
/// headword is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    level: WordLevel,
    headword: String,
    explanation: String,
    phonetic_symbol: String,
}

impl WordRecord {
    /// Build a record, returning `None` when the headword is blank
    pub fn new(
        level: WordLevel,
        headword: impl Into<String>,
        explanation: impl Into<String>,
        phonetic_symbol: impl Into<String>,
    ) -> Option<Self> {
        let headword = headword.into();
        if headword.trim().is_empty() {
            return None;
        }

        Some(Self {
            level,
            headword,
            explanation: explanation.into(),
            phonetic_symbol: phonetic_symbol.into(),
        })
    }

    pub fn level(&self) -> WordLevel {
        self.level
    }

    pub fn headword(&self) -> &str {
        &self.headword
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn phonetic_symbol(&self) -> &str {
        &self.phonetic_symbol
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headword)?;
        if !self.phonetic_symbol.is_empty() {
            write!(f, " [{}]", self.phonetic_symbol)?;
        }
        if !self.explanation.is_empty() {
            write!(f, " {}", self.explanation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_headword_is_rejected() {
        assert!(WordRecord::new(WordLevel::Cet4, "", "x", "y").is_none());
        assert!(WordRecord::new(WordLevel::Cet4, "  \t", "x", "y").is_none());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let word = WordRecord::new(WordLevel::Cet6, "world", "", "").unwrap();
        assert_eq!(word.level(), WordLevel::Cet6);
        assert_eq!(word.headword(), "world");
        assert_eq!(word.explanation(), "");
        assert_eq!(word.phonetic_symbol(), "");
    }

    #[test]
    fn test_display() {
        let word = WordRecord::new(WordLevel::Cet4, "hello", "a greeting", "/hə'ləʊ/").unwrap();
        assert_eq!(word.to_string(), "hello [/hə'ləʊ/] a greeting");

        let bare = WordRecord::new(WordLevel::Cet4, "world", "", "").unwrap();
        assert_eq!(bare.to_string(), "world");
    }
}
