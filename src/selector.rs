use crate::language::LanguageRecord;
use crate::orthography::{Orthography, OrthographyStatus};

/// Which orthographies of a record a query looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection<'s> {
    /// Restrict to one script; an unknown script selects nothing.
    pub script: Option<&'s str>,
    /// Every non-deprecated orthography instead of one primary per script.
    pub include_all: bool,
    /// Also surface historical/deprecated orthographies. Only honoured
    /// together with `include_all`.
    pub include_historical: bool,
}

/// Narrow a record's orthographies down for a query, keeping record order.
///
/// In primary mode each script yields at most one orthography: an explicit
/// `primary` status beats an unset one, otherwise the first in record order
/// wins.
pub fn select<'a>(record: &'a LanguageRecord, selection: Selection<'_>) -> Vec<&'a Orthography> {
    let with_history = selection.include_all && selection.include_historical;

    let candidates = record
        .orthographies
        .iter()
        .filter(|o| selection.script.map_or(true, |script| o.script == script))
        .filter(|o| with_history || !o.is_deprecated());

    if selection.include_all {
        return candidates.collect();
    }

    let mut picked: Vec<&'a Orthography> = Vec::new();
    for orthography in candidates.filter(|o| o.is_primary()) {
        match picked.iter_mut().find(|p| p.script == orthography.script) {
            Some(slot) => {
                if slot.status.is_none() && orthography.status == Some(OrthographyStatus::Primary) {
                    *slot = orthography;
                }
            }
            None => picked.push(orthography),
        }
    }

    picked
}

/// Scripts of the selected orthographies, deduplicated in record order.
pub fn scripts<'a>(orthographies: &[&'a Orthography]) -> Vec<&'a str> {
    let mut scripts: Vec<&'a str> = Vec::with_capacity(orthographies.len());
    for &orthography in orthographies {
        if !scripts.contains(&orthography.script.as_str()) {
            scripts.push(&orthography.script);
        }
    }
    scripts
}
