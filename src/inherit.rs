use fxhash::FxHashMap;
use log::debug;

use crate::language::LanguageRecord;
use crate::orthography::{is_missing, Orthography};
use crate::selector::{select, Selection};

/// Fill the character sets a record's orthographies lack from the related
/// language named by `inherit`.
///
/// Only missing fields are filled, each of base, auxiliary and marks on its
/// own, and only from the same script's orthography of the *raw* target
/// record. An `inherit` on the orthography overrides the record level one.
/// Unresolved references leave the orthography as it is. With `enabled`
/// false this is the identity.
pub fn resolve(
    record: &LanguageRecord,
    records: &FxHashMap<String, LanguageRecord>,
    enabled: bool,
) -> LanguageRecord {
    let mut resolved = record.clone();
    if !enabled {
        return resolved;
    }

    for orthography in resolved.orthographies.iter_mut() {
        let source_code = match orthography.inherit.clone().or_else(|| record.inherit.clone()) {
            Some(code) => code,
            None => continue,
        };

        match source_orthography(records, &source_code, &orthography.script) {
            Some(source) => merge_missing(orthography, source),
            None => debug!(
                "{}: no {} orthography to inherit from '{}'",
                record.name, orthography.script, source_code
            ),
        }
    }

    resolved
}

/// The orthography of `code` to borrow from for `script`: its primary one,
/// else any non-deprecated one.
fn source_orthography<'a>(
    records: &'a FxHashMap<String, LanguageRecord>,
    code: &str,
    script: &str,
) -> Option<&'a Orthography> {
    let target = records.get(code)?;
    let primary = Selection {
        script: Some(script),
        ..Default::default()
    };
    let any = Selection {
        include_all: true,
        ..primary
    };

    select(target, primary)
        .into_iter()
        .next()
        .or_else(|| select(target, any).into_iter().next())
}

fn merge_missing(orthography: &mut Orthography, source: &Orthography) {
    fill(&mut orthography.base, &source.base);
    fill(&mut orthography.auxiliary, &source.auxiliary);
    fill(&mut orthography.marks, &source.marks);
}

fn fill(field: &mut Option<String>, source: &Option<String>) {
    if is_missing(field) && !is_missing(source) {
        *field = source.clone();
    }
}
