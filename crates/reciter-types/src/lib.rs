pub mod level;
pub mod word;

pub use level::WordLevel;
pub use word::WordRecord;
