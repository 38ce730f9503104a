pub mod constants;
pub mod error;
pub mod inherit;
pub mod language;
pub mod languages;
pub mod orthography;
pub mod selector;
pub mod support;

pub use error::{CoverageError, Result};
pub use language::{Language, LanguageRecord};
pub use languages::{Languages, LanguagesConfig};
pub use orthography::{Orthography, OrthographyStatus};
pub use support::{CharInventory, SupportLevel, SupportOptions, SupportResult};
