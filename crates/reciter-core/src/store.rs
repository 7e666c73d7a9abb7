use std::path::Path;

use reciter_config::{ListFormat, ListSource, ReciterConfig};
use reciter_types::{WordLevel, WordRecord};

use crate::error::{MalformedLine, Result};
use crate::loader::ListLoader;

/// Word lists held in memory, one ordered sequence per level
///
/// Append-only. Records are only reachable through read-only slices.
#[derive(Debug, Default, Clone)]
pub struct WordStore {
    cet4_words: Vec<WordRecord>,
    cet6_words: Vec<WordRecord>,
}

/// Outcome of loading one list into the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub level: WordLevel,
    /// Records appended to the level's sequence
    pub added: usize,
    /// Lines skipped because they had no headword
    pub malformed: Vec<MalformedLine>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a list with the default format and append it under `level`
    pub fn load(&mut self, path: impl AsRef<Path>, level: WordLevel) -> Result<LoadReport> {
        self.load_with_format(path, level, &ListFormat::default())
    }

    /// Load a list and append it under `level`
    ///
    /// The store is left untouched when the file cannot be opened or read.
    pub fn load_with_format(
        &mut self,
        path: impl AsRef<Path>,
        level: WordLevel,
        format: &ListFormat,
    ) -> Result<LoadReport> {
        let loader = ListLoader::with_format(path.as_ref(), level, format.clone());
        let list = loader.load()?;

        let added = list.records.len();
        let words = self.words_mut(level);
        debug_assert!(list.records.iter().all(|w| w.level() == level));
        words.extend(list.records);

        Ok(LoadReport {
            level,
            added,
            malformed: list.malformed,
        })
    }

    /// Load every configured list in order
    ///
    /// A list that fails to load is reported and the rest still load.
    pub fn load_sources(
        &mut self,
        config: &ReciterConfig,
    ) -> Vec<(ListSource, Result<LoadReport>)> {
        config
            .lists
            .iter()
            .map(|source| {
                let result = self.load_with_format(&source.path, source.level, &config.format);
                if let Err(e) = &result {
                    tracing::warn!("Failed to load word list {}: {}", source.path.display(), e);
                }
                (source.clone(), result)
            })
            .collect()
    }

    /// Words of one level in file order
    pub fn words_for(&self, level: WordLevel) -> &[WordRecord] {
        match level {
            WordLevel::Cet4 => &self.cet4_words,
            WordLevel::Cet6 => &self.cet6_words,
        }
    }

    pub fn len(&self, level: WordLevel) -> usize {
        self.words_for(level).len()
    }

    pub fn total(&self) -> usize {
        WordLevel::ALL.iter().map(|&level| self.len(level)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Case-insensitive headword match across levels, easier levels first
    pub fn lookup(&self, headword: &str) -> Vec<&WordRecord> {
        let query = headword.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        WordLevel::ALL
            .iter()
            .flat_map(|&level| self.words_for(level))
            .filter(|w| w.headword().to_lowercase() == query)
            .collect()
    }

    fn words_mut(&mut self, level: WordLevel) -> &mut Vec<WordRecord> {
        match level {
            WordLevel::Cet4 => &mut self.cet4_words,
            WordLevel::Cet6 => &mut self.cet6_words,
        }
    }
}
