//! Collection-wide coverage against the shared case file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use ortho_coverage::{CharInventory, Languages, LanguagesConfig, SupportLevel, SupportOptions};

#[derive(Debug, Deserialize)]
struct TestCase {
    id: usize,
    description: String,
    chars: String,
    #[serde(default)]
    level: SupportLevel,
    #[serde(default)]
    script: Option<String>,
    #[serde(default)]
    all_orthographies: bool,
    #[serde(default = "default_prune")]
    prune_orthographies: bool,
    #[serde(default)]
    marks: bool,
    expected: BTreeMap<String, Vec<String>>,
}

fn default_prune() -> bool {
    true
}

impl TestCase {
    fn options(&self) -> SupportOptions {
        SupportOptions {
            level: self.level,
            script: self.script.clone(),
            prune_orthographies: self.prune_orthographies,
            check_all_orthographies: self.all_orthographies,
            include_historical: false,
            check_all_marks: self.marks,
        }
    }
}

fn setup() -> (Languages, Vec<TestCase>) {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");

    let languages = Languages::from_path(&data_dir.join("languages.json"), LanguagesConfig::default())
        .expect("Failed to load language database");

    let cases_json = std::fs::read_to_string(data_dir.join("support_cases.json"))
        .expect("Failed to read support cases");
    let cases: Vec<TestCase> = serde_json::from_str(&cases_json)
        .expect("Failed to parse support cases");

    (languages, cases)
}

#[test]
fn test_all_cases_match_expected() {
    let (languages, cases) = setup();
    let mut failures = Vec::new();

    for case in &cases {
        let inventory = CharInventory::from_text(&case.chars);
        let result = languages
            .supported_languages(&inventory, &case.options())
            .into_inner();
        if result != case.expected {
            failures.push(format!(
                "[{}] {}\n  Expected: {:?}\n  Actual: {:?}",
                case.id, case.description, case.expected, result
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "{}/{} support cases failed:\n{}",
            failures.len(),
            cases.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_supported_languages_matches_per_language() {
    let (languages, cases) = setup();

    for case in &cases {
        let inventory = CharInventory::from_text(&case.chars);
        let options = case.options();
        let merged = languages.supported_languages(&inventory, &options);

        for language in languages.languages() {
            let own = language.has_support(&inventory, &options);
            for (script, codes) in own.iter() {
                assert!(merged.contains_script(script), "[{}] {}", case.id, script);
                for code in codes {
                    assert!(merged.supports(script, code), "[{}] {} {}", case.id, script, code);
                }
            }
        }
    }
}

#[test]
fn test_collection_query_is_stable() {
    let (languages, cases) = setup();

    for case in &cases {
        let inventory = CharInventory::from_text(&case.chars);
        let first = languages.supported_languages(&inventory, &case.options());
        let second = languages.supported_languages(&inventory, &case.options());
        assert_eq!(first, second, "[{}] {}", case.id, case.description);
    }
}
