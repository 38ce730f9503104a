use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use fxhash::FxHashMap;
use log::debug;
use rayon::prelude::*;

use crate::error::{CoverageError, Result};
use crate::inherit::resolve;
use crate::language::{Language, LanguageRecord};
use crate::support::{has_support, CharInventory, SupportOptions, SupportResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagesConfig {
    /// Fill missing character sets from `inherit` references.
    pub inherit: bool,
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        LanguagesConfig { inherit: true }
    }
}

/// All language records, keyed by code.
///
/// Inheritance is resolved once, up front; afterwards the collection is
/// read only and can be shared between threads.
pub struct Languages {
    raw: FxHashMap<String, LanguageRecord>,
    resolved: FxHashMap<String, LanguageRecord>,
    codes: Vec<String>, // sorted
    config: LanguagesConfig,
}

impl Languages {
    pub fn new(raw: FxHashMap<String, LanguageRecord>, config: LanguagesConfig) -> Self {
        let resolved: FxHashMap<String, LanguageRecord> = raw
            .iter()
            .map(|(code, record)| (code.clone(), resolve(record, &raw, config.inherit)))
            .collect();

        let mut codes: Vec<String> = raw.keys().cloned().collect();
        codes.sort_unstable();

        debug!("loaded {} languages (inherit: {})", codes.len(), config.inherit);

        Languages {
            raw,
            resolved,
            codes,
            config,
        }
    }

    pub fn from_records<I>(records: I, config: LanguagesConfig) -> Self
    where
        I: IntoIterator<Item = (String, LanguageRecord)>,
    {
        Languages::new(records.into_iter().collect(), config)
    }

    /// Load a JSON document shaped `{ "<code>": <record>, ... }`.
    pub fn from_path(path: &Path, config: LanguagesConfig) -> Result<Self> {
        let file = File::open(path)?;
        Languages::from_reader(BufReader::new(file), config)
    }

    pub fn from_reader<R: Read>(reader: R, config: LanguagesConfig) -> Result<Self> {
        let raw: FxHashMap<String, LanguageRecord> = serde_json::from_reader(reader)?;
        Ok(Languages::new(raw, config))
    }

    pub fn from_json_str(json: &str, config: LanguagesConfig) -> Result<Self> {
        let raw: FxHashMap<String, LanguageRecord> = serde_json::from_str(json)?;
        Ok(Languages::new(raw, config))
    }

    pub fn config(&self) -> LanguagesConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn contains(&self, code: &str) -> bool {
        self.raw.contains_key(code)
    }

    /// The record with inheritance applied (when enabled).
    pub fn get(&self, code: &str) -> Result<&LanguageRecord> {
        self.resolved
            .get(code)
            .ok_or_else(|| CoverageError::NotFound(code.to_string()))
    }

    /// The record exactly as loaded.
    pub fn get_raw(&self, code: &str) -> Result<&LanguageRecord> {
        self.raw
            .get(code)
            .ok_or_else(|| CoverageError::NotFound(code.to_string()))
    }

    pub fn language(&self, code: &str) -> Result<Language<'_>> {
        let (code, record) = self
            .resolved
            .get_key_value(code)
            .ok_or_else(|| CoverageError::NotFound(code.to_string()))?;
        Ok(Language::new(code, record))
    }

    /// Languages in code order.
    pub fn languages(&self) -> impl Iterator<Item = Language<'_>> {
        self.codes
            .iter()
            .filter_map(move |code| self.resolved.get(code).map(|r| Language::new(code, r)))
    }

    /// Every language `inventory` supports, merged per script.
    pub fn supported_languages(&self, inventory: &CharInventory, options: &SupportOptions) -> SupportResult {
        self.codes
            .par_iter()
            .filter_map(|code| {
                self.resolved
                    .get(code)
                    .map(|record| has_support(inventory, code, record, options))
            })
            .reduce(SupportResult::new, |mut acc, result| {
                acc.merge(result);
                acc
            })
    }
}
