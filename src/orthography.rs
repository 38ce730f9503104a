use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::constants::is_separator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrthographyStatus {
    Primary,
    Secondary,
    Local,
    Transliteration,
    Historical,
    Deprecated,
}

impl OrthographyStatus {
    /// Historical and deprecated orthographies are skipped by default queries.
    pub fn is_deprecated(self) -> bool {
        matches!(self, OrthographyStatus::Historical | OrthographyStatus::Deprecated)
    }
}

/// One script specific character profile of a language.
///
/// Character sets are kept as written in the database: whitespace separated
/// tokens, where a token may be a cluster of a letter and combining marks.
/// Use [`parse_chars`] (or the `*_chars` accessors) to get the tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orthography {
    pub script: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(default, alias = "aux", skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<String>,

    /// `None` reads as primary, but loses tie-breaks against an explicit `primary`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrthographyStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autonym: Option<String>,

    /// Overrides the record level `inherit` for this orthography only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherit: Option<String>,
}

impl Orthography {
    pub fn new(script: &str) -> Self {
        Orthography {
            script: script.to_string(),
            ..Default::default()
        }
    }

    pub fn with_base(mut self, base: &str) -> Self {
        self.base = Some(base.to_string());
        self
    }

    pub fn with_auxiliary(mut self, auxiliary: &str) -> Self {
        self.auxiliary = Some(auxiliary.to_string());
        self
    }

    pub fn with_marks(mut self, marks: &str) -> Self {
        self.marks = Some(marks.to_string());
        self
    }

    pub fn with_status(mut self, status: OrthographyStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_autonym(mut self, autonym: &str) -> Self {
        self.autonym = Some(autonym.to_string());
        self
    }

    pub fn status(&self) -> OrthographyStatus {
        self.status.unwrap_or(OrthographyStatus::Primary)
    }

    pub fn is_deprecated(&self) -> bool {
        self.status().is_deprecated()
    }

    pub fn is_primary(&self) -> bool {
        self.status() == OrthographyStatus::Primary
    }

    pub fn has_base(&self) -> bool {
        !is_missing(&self.base)
    }

    pub fn base_chars(&self) -> Vec<String> {
        self.base.as_deref().map(parse_chars).unwrap_or_default()
    }

    pub fn aux_chars(&self) -> Vec<String> {
        self.auxiliary.as_deref().map(parse_chars).unwrap_or_default()
    }

    pub fn mark_chars(&self) -> Vec<String> {
        self.marks.as_deref().map(parse_chars).unwrap_or_default()
    }
}

/// A character set field counts as missing when absent or when it holds
/// nothing but separators.
pub fn is_missing(field: &Option<String>) -> bool {
    match field {
        Some(chars) => chars.chars().all(is_separator),
        None => true,
    }
}

/// Split a character set string into unique tokens, first occurrence wins.
pub fn parse_chars(chars: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut tokens = Vec::new();

    for raw in chars.split_whitespace() {
        let token: String = raw.chars().filter(|&c| !is_separator(c)).collect();
        if token.is_empty() {
            continue;
        }
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }

    tokens
}
