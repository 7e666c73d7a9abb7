use unicode_normalization::UnicodeNormalization;

const BOM: char = '\u{feff}';

pub trait Preprocessor {
    // Default field cleanup, text kept as written
    fn process(&self, field: &str) -> String {
        field.trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Trims and composes to NFC
pub struct NfcPreprocessor;
impl Preprocessor for NfcPreprocessor {
    fn process(&self, field: &str) -> String {
        let field = field.trim();

        if field.is_empty() {
            return String::new();
        }

        field.nfc().collect()
    }
}

/// Drop a leading UTF-8 byte order mark
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix(BOM).unwrap_or(line)
}
