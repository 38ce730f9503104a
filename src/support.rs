use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use fxhash::{FxHashMap, FxHashSet};
use log::trace;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::decompose_canonical;
use unicode_normalization::UnicodeNormalization;

use crate::constants::{is_mark, is_separator};
use crate::error::CoverageError;
use crate::language::LanguageRecord;
use crate::orthography::Orthography;
use crate::selector::{select, Selection};

// ============================================================================
// Query parameters
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    /// The base letters of an orthography.
    #[default]
    Base,
    /// Base plus auxiliary letters.
    #[serde(alias = "auxiliary")]
    Aux,
}

impl FromStr for SupportLevel {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" => Ok(SupportLevel::Base),
            "aux" | "auxiliary" => Ok(SupportLevel::Aux),
            _ => Err(CoverageError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportLevel::Base => f.write_str("base"),
            SupportLevel::Aux => f.write_str("aux"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportOptions {
    pub level: SupportLevel,
    /// Only check orthographies of this script.
    pub script: Option<String>,
    /// Drop scripts nobody supports from the result. When off, every script
    /// of a checked orthography shows up, possibly with an empty list.
    pub prune_orthographies: bool,
    /// Check every non-deprecated orthography, not only the primary ones.
    pub check_all_orthographies: bool,
    /// Also check historical/deprecated orthographies (needs
    /// `check_all_orthographies`).
    pub include_historical: bool,
    /// Require every listed mark, not only those the letters decompose to.
    pub check_all_marks: bool,
}

impl Default for SupportOptions {
    fn default() -> Self {
        SupportOptions {
            level: SupportLevel::Base,
            script: None,
            prune_orthographies: true,
            check_all_orthographies: false,
            include_historical: false,
            check_all_marks: false,
        }
    }
}

impl SupportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: SupportLevel) -> Self {
        self.level = level;
        self
    }

    pub fn script(mut self, script: &str) -> Self {
        self.script = Some(script.to_string());
        self
    }

    pub fn prune_orthographies(mut self, prune: bool) -> Self {
        self.prune_orthographies = prune;
        self
    }

    pub fn check_all_orthographies(mut self, all: bool) -> Self {
        self.check_all_orthographies = all;
        self
    }

    pub fn include_historical(mut self, historical: bool) -> Self {
        self.include_historical = historical;
        self
    }

    pub fn check_all_marks(mut self, marks: bool) -> Self {
        self.check_all_marks = marks;
        self
    }

    fn selection(&self) -> Selection<'_> {
        Selection {
            script: self.script.as_deref(),
            include_all: self.check_all_orthographies,
            include_historical: self.include_historical,
        }
    }
}

// ============================================================================
// Character inventory
// ============================================================================

/// The characters a font (or anything else) provides. Order and duplicates
/// do not matter.
#[derive(Debug, Clone, Default)]
pub struct CharInventory {
    chars: FxHashSet<char>,
    // Canonical decomposition of every character, keyed by its first part
    pieces: FxHashMap<char, Vec<Vec<char>>>,
}

impl CharInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    pub fn insert(&mut self, c: char) -> bool {
        if !self.chars.insert(c) {
            return false;
        }

        let mut parts = Vec::with_capacity(4);
        decompose_canonical(c, |part| parts.push(part));
        if let Some(&first) = parts.first() {
            self.pieces.entry(first).or_default().push(parts);
        }
        true
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether a character set token can be rendered.
    ///
    /// The token's own codepoints always count. Otherwise both sides are
    /// compared fully decomposed: the token must split into runs that are
    /// each the decomposition of some inventory character. So "Ä" is covered
    /// by `Ä` as well as by `A` + U+0308, and `A` + U+0308 is covered by `Ä`.
    pub fn covers(&self, token: &str) -> bool {
        let mut literal = token.chars().filter(|&c| !is_separator(c));
        if literal.all(|c| self.contains(c)) {
            return true;
        }

        let decomposed: Vec<char> = token.nfd().filter(|&c| !is_separator(c)).collect();
        self.tiles(&decomposed)
    }

    fn tiles(&self, decomposed: &[char]) -> bool {
        let n = decomposed.len();
        let mut reachable = vec![false; n + 1];
        reachable[0] = true;

        for i in 0..n {
            if !reachable[i] {
                continue;
            }
            let Some(pieces) = self.pieces.get(&decomposed[i]) else {
                continue;
            };
            for piece in pieces {
                let end = i + piece.len();
                if end <= n && decomposed[i..end] == piece[..] {
                    reachable[end] = true;
                }
            }
        }

        reachable[n]
    }
}

impl PartialEq for CharInventory {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for CharInventory {}

impl FromIterator<char> for CharInventory {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut inventory = CharInventory::new();
        for c in iter {
            inventory.insert(c);
        }
        inventory
    }
}

impl From<&str> for CharInventory {
    fn from(text: &str) -> Self {
        CharInventory::from_text(text)
    }
}

// ============================================================================
// Result
// ============================================================================

/// Script name -> language codes supported in that script, codes ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportResult(BTreeMap<String, Vec<String>>);

impl SupportResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, script: &str) -> Option<&[String]> {
        self.0.get(script).map(Vec::as_slice)
    }

    pub fn contains_script(&self, script: &str) -> bool {
        self.0.contains_key(script)
    }

    pub fn supports(&self, script: &str, code: &str) -> bool {
        self.get(script)
            .map_or(false, |codes| codes.iter().any(|c| c == code))
    }

    pub fn scripts(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(script, codes)| (script.as_str(), codes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// Make sure `script` has an entry, even an empty one.
    pub fn touch(&mut self, script: &str) {
        if !self.0.contains_key(script) {
            self.0.insert(script.to_string(), Vec::new());
        }
    }

    pub fn add(&mut self, script: &str, code: &str) {
        self.touch(script);
        if let Some(codes) = self.0.get_mut(script) {
            if let Err(pos) = codes.binary_search_by(|c| c.as_str().cmp(code)) {
                codes.insert(pos, code.to_string());
            }
        }
    }

    pub fn merge(&mut self, other: SupportResult) {
        for (script, codes) in other.0 {
            self.touch(&script);
            for code in codes {
                self.add(&script, &code);
            }
        }
    }
}

// ============================================================================
// Matching
// ============================================================================

/// Check which of a record's orthographies `inventory` supports.
pub fn has_support(
    inventory: &CharInventory,
    code: &str,
    record: &LanguageRecord,
    options: &SupportOptions,
) -> SupportResult {
    let mut result = SupportResult::new();

    for orthography in select(record, options.selection()) {
        if !options.prune_orthographies {
            result.touch(&orthography.script);
        }
        if supports_orthography(inventory, orthography, options) {
            result.add(&orthography.script, code);
        } else {
            trace!("{}: {} not supported at {} level", code, orthography.script, options.level);
        }
    }

    result
}

/// Orthographies without base letters have nothing to check and never count
/// as supported.
pub fn supports_orthography(
    inventory: &CharInventory,
    orthography: &Orthography,
    options: &SupportOptions,
) -> bool {
    if !orthography.has_base() {
        return false;
    }

    let required = required_chars(orthography, options.level);
    if let Some(missing) = required.iter().find(|token| !inventory.covers(token)) {
        trace!("{}: missing '{}'", orthography.script, missing);
        return false;
    }

    required_marks(orthography, &required, options.check_all_marks)
        .iter()
        .all(|mark| inventory.covers(mark))
}

/// Letters a level needs. Aux always includes base.
pub fn required_chars(orthography: &Orthography, level: SupportLevel) -> Vec<String> {
    let mut required = orthography.base_chars();
    if level == SupportLevel::Aux {
        for token in orthography.aux_chars() {
            if !required.contains(&token) {
                required.push(token);
            }
        }
    }
    required
}

/// Listed marks that the required letters are composed with, or every listed
/// mark with `all_marks`.
pub fn required_marks(orthography: &Orthography, required: &[String], all_marks: bool) -> Vec<String> {
    let listed = orthography.mark_chars();
    if all_marks {
        return listed;
    }

    let listed: FxHashSet<char> = listed
        .iter()
        .flat_map(|mark| mark.nfd())
        .filter(|&c| is_mark(c))
        .collect();

    let mut seen = FxHashSet::default();
    let mut marks = Vec::new();
    for token in required {
        for c in token.nfd() {
            if is_mark(c) && listed.contains(&c) && seen.insert(c) {
                marks.push(c.to_string());
            }
        }
    }
    marks
}
