use std::path::Path;

use ortho_coverage::{
    CharInventory, CoverageError, LanguageRecord, Languages, LanguagesConfig, Orthography,
    SupportOptions,
};

const DATABASE: &str = r#"{
    "tst": {
        "name": "Test",
        "orthographies": [
            { "script": "Latin", "base": "a b c", "aux": "d", "marks": "◌̈" }
        ]
    },
    "dep": {
        "name": "Dependent",
        "preferred_name": "Dependent Language",
        "inherit": "tst",
        "orthographies": [
            { "script": "Latin", "autonym": "depish" }
        ]
    },
    "abc": {
        "name": "Alphabet",
        "orthographies": [
            { "script": "Latin", "base": "a b", "status": "primary" },
            { "script": "Greek", "base": "α β", "status": "transliteration" }
        ]
    }
}"#;

#[test]
fn test_from_json_str() {
    let languages = Languages::from_json_str(DATABASE, LanguagesConfig::default()).unwrap();

    assert_eq!(languages.len(), 3);
    assert!(!languages.is_empty());
    assert_eq!(languages.codes(), ["abc", "dep", "tst"]);
    assert!(languages.contains("dep"));
    assert!(!languages.contains("xyz"));

    let tst = languages.get("tst").unwrap();
    assert_eq!(tst.orthographies[0].auxiliary.as_deref(), Some("d"));

    let dep = languages.language("dep").unwrap();
    assert_eq!(dep.code(), "dep");
    assert_eq!(dep.name(), "Dependent Language");
    assert_eq!(dep.record().orthographies[0].base.as_deref(), Some("a b c"));
    assert_eq!(dep.autonym(None), Some("depish"));
}

#[test]
fn test_languages_in_code_order() {
    let languages = Languages::from_json_str(DATABASE, LanguagesConfig::default()).unwrap();
    let codes: Vec<&str> = languages.languages().map(|l| l.code()).collect();

    assert_eq!(codes, vec!["abc", "dep", "tst"]);
}

#[test]
fn test_supported_languages_merges_codes() {
    let languages = Languages::from_json_str(DATABASE, LanguagesConfig::default()).unwrap();
    let inventory = CharInventory::from_text("abc");

    let support = languages.supported_languages(&inventory, &SupportOptions::new());
    assert_eq!(
        support.get("Latin").unwrap(),
        ["abc".to_string(), "dep".to_string(), "tst".to_string()]
    );
    assert!(!support.contains_script("Greek"));

    // Without inheritance "dep" has nothing to check
    let languages = Languages::from_json_str(DATABASE, LanguagesConfig { inherit: false }).unwrap();
    let support = languages.supported_languages(&inventory, &SupportOptions::new());
    assert_eq!(support.get("Latin").unwrap(), ["abc".to_string(), "tst".to_string()]);
}

#[test]
fn test_supported_languages_unpruned() {
    let languages = Languages::from_json_str(DATABASE, LanguagesConfig::default()).unwrap();
    let inventory = CharInventory::from_text("ab");

    let options = SupportOptions::new()
        .check_all_orthographies(true)
        .prune_orthographies(false);
    let support = languages.supported_languages(&inventory, &options);

    assert_eq!(support.scripts().collect::<Vec<_>>(), vec!["Greek", "Latin"]);
    assert_eq!(support.get("Greek"), Some(&[][..]));
    assert_eq!(support.get("Latin").unwrap(), ["abc".to_string()]);
}

#[test]
fn test_from_records() {
    let languages = Languages::from_records(
        vec![(
            "one".to_string(),
            LanguageRecord::new("One").with_orthography(Orthography::new("Latin").with_base("x")),
        )],
        LanguagesConfig::default(),
    );

    assert!(languages.config().inherit);
    let support = languages.supported_languages(&CharInventory::from_text("x"), &SupportOptions::new());
    assert!(support.supports("Latin", "one"));
}

#[test]
fn test_invalid_json() {
    match Languages::from_json_str("{ \"tst\": [] }", LanguagesConfig::default()) {
        Err(CoverageError::Json(_)) => {}
        Err(other) => panic!("expected a JSON error, got {}", other),
        Ok(_) => panic!("expected a JSON error"),
    }
}

#[test]
fn test_missing_file() {
    let result = Languages::from_path(Path::new("does/not/exist.json"), LanguagesConfig::default());
    assert!(matches!(result, Err(CoverageError::Io(_))));
}

#[test]
fn test_not_found() {
    let languages = Languages::from_json_str(DATABASE, LanguagesConfig::default()).unwrap();
    let err = languages.get("zzz").unwrap_err();

    assert!(matches!(err, CoverageError::NotFound(ref code) if code == "zzz"));
    assert_eq!(err.to_string(), "language 'zzz' not found");
}
