use serde::{Deserialize, Serialize};

use crate::orthography::Orthography;
use crate::selector::{select, Selection};
use crate::support::{has_support, CharInventory, SupportOptions, SupportResult};

/// A language entry as it comes out of the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,

    #[serde(default)]
    pub orthographies: Vec<Orthography>,

    /// Code of a related language to borrow missing character sets from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherit: Option<String>,
}

impl LanguageRecord {
    pub fn new(name: &str) -> Self {
        LanguageRecord {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_orthography(mut self, orthography: Orthography) -> Self {
        self.orthographies.push(orthography);
        self
    }

    pub fn with_inherit(mut self, code: &str) -> Self {
        self.inherit = Some(code.to_string());
        self
    }

    pub fn with_preferred_name(mut self, name: &str) -> Self {
        self.preferred_name = Some(name.to_string());
        self
    }
}

/// Read-only view of one (resolved) record, keyed by its code.
#[derive(Debug, Clone, Copy)]
pub struct Language<'a> {
    code: &'a str,
    record: &'a LanguageRecord,
}

impl<'a> Language<'a> {
    pub fn new(code: &'a str, record: &'a LanguageRecord) -> Self {
        Language { code, record }
    }

    pub fn code(&self) -> &'a str {
        self.code
    }

    pub fn record(&self) -> &'a LanguageRecord {
        self.record
    }

    /// The preferred name when the database has one, the plain name otherwise.
    pub fn name(&self) -> &'a str {
        self.record
            .preferred_name
            .as_deref()
            .unwrap_or(&self.record.name)
    }

    /// Autonym of the orthography for `script`, or of the primary orthography.
    /// `None` when nothing is recorded.
    pub fn autonym(&self, script: Option<&str>) -> Option<&'a str> {
        let orthography = self.orthography(script).or_else(|| {
            // A script that only has secondary orthographies still has an autonym
            script.and_then(|_| {
                select(
                    self.record,
                    Selection {
                        script,
                        include_all: true,
                        ..Default::default()
                    },
                )
                .into_iter()
                .next()
            })
        })?;
        orthography.autonym.as_deref()
    }

    /// First primary orthography, optionally restricted to `script`.
    pub fn orthography(&self, script: Option<&str>) -> Option<&'a Orthography> {
        self.orthographies(script, false).into_iter().next()
    }

    pub fn orthographies(&self, script: Option<&str>, include_all: bool) -> Vec<&'a Orthography> {
        select(
            self.record,
            Selection {
                script,
                include_all,
                ..Default::default()
            },
        )
    }

    pub fn has_support(&self, inventory: &CharInventory, options: &SupportOptions) -> SupportResult {
        has_support(inventory, self.code, self.record, options)
    }
}
