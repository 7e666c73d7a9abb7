use std::path::PathBuf;

use reciter_types::WordLevel;
use serde::{Deserialize, Serialize};

/// A word list file and the level every entry in it gets
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ListSource {
    pub path: PathBuf,
    pub level: WordLevel,
}

impl ListSource {
    pub fn new(path: impl Into<PathBuf>, level: WordLevel) -> Self {
        Self {
            path: path.into(),
            level,
        }
    }
}
