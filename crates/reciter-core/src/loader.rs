use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::PathBuf;

use reciter_config::ListFormat;
use reciter_types::{WordLevel, WordRecord};

use crate::error::{LoadError, MalformedLine, Result};
use crate::preprocess::{DefaultPreprocessor, NfcPreprocessor, Preprocessor, strip_bom};

const ESCAPE: char = '\\';

/// Reads one word list file; every entry gets the loader's level
#[derive(Debug, Clone)]
pub struct ListLoader {
    path: PathBuf,
    level: WordLevel,
    format: ListFormat,
}

/// Records parsed from one list, plus the lines that were skipped as malformed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadedList {
    pub records: Vec<WordRecord>,
    pub malformed: Vec<MalformedLine>,
}

impl ListLoader {
    pub fn new(path: impl Into<PathBuf>, level: WordLevel) -> Self {
        Self::with_format(path, level, ListFormat::default())
    }

    pub fn with_format(path: impl Into<PathBuf>, level: WordLevel, format: ListFormat) -> Self {
        Self {
            path: path.into(),
            level,
            format,
        }
    }

    /// Open the file and iterate its entries lazily
    ///
    /// Each call starts again from the first line. The file is closed when
    /// the returned iterator is dropped.
    pub fn entries(&self) -> Result<Entries> {
        let file = File::open(&self.path).map_err(|e| LoadError::from_io(&self.path, e))?;

        Ok(Entries {
            lines: BufReader::new(file).lines(),
            path: self.path.clone(),
            level: self.level,
            format: self.format.clone(),
            line_number: 0,
            done: false,
        })
    }

    /// Read the whole list, skipping malformed lines
    ///
    /// Fails only when the file cannot be opened or read.
    pub fn load(&self) -> Result<LoadedList> {
        tracing::info!("Loading {} word list: {}", self.level, self.path.display());

        let mut list = LoadedList::default();
        for entry in self.entries()? {
            match entry {
                Ok(word) => list.records.push(word),
                Err(LoadError::MalformedLine(malformed)) => {
                    tracing::warn!("{}: {}", self.path.display(), malformed);
                    list.malformed.push(malformed);
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Loaded {} {} words from {} ({} malformed lines skipped)",
            list.records.len(),
            self.level,
            self.path.display(),
            list.malformed.len()
        );
        Ok(list)
    }
}

/// Lazy iterator over the entries of one list file
pub struct Entries {
    lines: Lines<BufReader<File>>,
    path: PathBuf,
    level: WordLevel,
    format: ListFormat,
    line_number: usize,
    done: bool,
}

impl Iterator for Entries {
    type Item = Result<WordRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    // A read error leaves the reader in an unknown position
                    self.done = true;
                    return Some(Err(LoadError::from_io(&self.path, e)));
                }
            };
            self.line_number += 1;

            match parse_line(&line, self.line_number, self.level, &self.format) {
                Ok(Some(word)) => return Some(Ok(word)),
                Ok(None) => continue,
                Err(malformed) => return Some(Err(malformed.into())),
            }
        }
    }
}

/// Parse one list line
///
/// Grammar: `headword[|explanation[|phonetic]]` with the delimiter taken from
/// `format`. `\<delimiter>` and `\\` escape a literal delimiter or backslash.
/// The phonetic field runs to the end of the line. Fields are trimmed, and
/// NFC-normalized only when `format.normalize` is set. A BOM before the
/// first line is ignored.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(
    line: &str,
    line_number: usize,
    level: WordLevel,
    format: &ListFormat,
) -> std::result::Result<Option<WordRecord>, MalformedLine> {
    let text = if line_number == 1 { strip_bom(line) } else { line };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if format.is_comment(trimmed) {
        tracing::debug!("Skipping comment on line {line_number}");
        return Ok(None);
    }

    let [headword, explanation, phonetic] = split_fields(text, format.delimiter);
    let preprocessor: &dyn Preprocessor = if format.normalize {
        &NfcPreprocessor
    } else {
        &DefaultPreprocessor
    };

    WordRecord::new(
        level,
        preprocessor.process(&headword),
        preprocessor.process(&explanation),
        preprocessor.process(&phonetic),
    )
    .map(Some)
    .ok_or_else(|| MalformedLine {
        line_number,
        content: line.to_string(),
    })
}

fn split_fields(line: &str, delimiter: char) -> [String; 3] {
    let mut fields: [String; 3] = Default::default();
    let mut idx = 0;
    let escapes = delimiter != ESCAPE;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if escapes && c == ESCAPE {
            match chars.next() {
                Some(next) if next == delimiter || next == ESCAPE => fields[idx].push(next),
                Some(next) => {
                    fields[idx].push(ESCAPE);
                    fields[idx].push(next);
                }
                None => fields[idx].push(ESCAPE),
            }
        } else if c == delimiter && idx < fields.len() - 1 {
            idx += 1;
        } else {
            fields[idx].push(c);
        }
    }

    fields
}
