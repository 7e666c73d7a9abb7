pub mod error;
pub mod loader;
pub mod preprocess;
pub mod store;

pub use error::{LoadError, MalformedLine, Result};
pub use loader::{Entries, ListLoader, LoadedList, parse_line};
pub use store::{LoadReport, WordStore};

pub use reciter_config::{ListFormat, ListSource, ReciterConfig};
pub use reciter_types::{WordLevel, WordRecord};
