use std::io::Write;
use std::sync::Arc;

use synocount::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn test_dictionary_file_drives_counts() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            ["flower", "flor", "blume", "fleur"],
            ["bread", "pan", "brot"]
        ]"#
    )
    .unwrap();

    let dictionary = DictionaryTranslator::load_from_file(file.path()).unwrap();
    let counter = WordCounter::new(Arc::new(dictionary));

    for word in ["flower", "flor", "blume", "fleur", "Brot", "pan", "joe"] {
        counter.add(word).unwrap();
    }

    assert_eq!(counter.count("flower"), 4);
    assert_eq!(counter.count("FLEUR"), 4);
    assert_eq!(counter.count("bread"), 2);
    assert_eq!(counter.count("joe"), 1);
    assert_eq!(counter.count("rose"), 0);
    assert_eq!(counter.total(), 7);
}

#[test]
fn test_every_alphabetic_word_counts_once_with_identity() {
    let words = ["a", "Z", "flower", "bread", "CAPITAL", "HIGHSTREET", "xYz"];

    for word in words {
        let counter = WordCounter::new(Arc::new(IdentityTranslator));
        counter.add(word).unwrap();
        assert_eq!(counter.count(word), 1, "{word}");
    }
}

#[test]
fn test_every_non_alphabetic_word_is_rejected() {
    let counter = WordCounter::new(Arc::new(IdentityTranslator));

    for word in ["12121", "#@bread", "aaa@", "1HIGHSTREET", "tab\tbed", "café", "-"] {
        let err = counter.add(word).unwrap_err();
        assert!(
            matches!(err, WordCountError::InvalidInput(_)),
            "{word:?} gave {err}"
        );
    }
    assert!(counter.is_empty());
}

#[test]
fn test_prepopulated_counter_aggregates_synonyms() {
    let dictionary = DictionaryTranslator::from_synonym_groups(vec![vec![
        "flower".to_string(),
        "flor".to_string(),
    ]]);
    let counter = WordCounter::with_counts(
        vec![("flor".to_string(), 3), ("bread".to_string(), 1)],
        Arc::new(dictionary),
    )
    .unwrap();

    counter.add("flower").unwrap();

    assert_eq!(counter.count("flower"), 4);
    assert_eq!(counter.get("flor"), 3);
    assert_eq!(counter.get("flower"), 1);
}

#[test]
fn test_handles_compose_with_iterators() {
    let counter = WordCounter::new(Arc::new(IdentityTranslator));
    let add = counter.add_handle();

    let failures = ["bread", "flower", "bread", "n0pe"]
        .into_iter()
        .map(Some)
        .map(&add)
        .filter(Result::is_err)
        .count();
    assert_eq!(failures, 1);

    let count = counter.count_handle();
    let totals: Vec<u64> = [Some("bread"), Some("flower"), None]
        .into_iter()
        .map(count)
        .collect();
    assert_eq!(totals, vec![2, 1, 0]);
}
