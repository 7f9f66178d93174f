use std::fs;
use std::path::PathBuf;

use prize_atlas::data::loader::{load_dataset, LoadError};
use tempfile::TempDir;

fn write_pair(dir: &TempDir, laureates: &str, prizes: &str) -> (PathBuf, PathBuf) {
    let laureates_path = dir.path().join("laureates.json");
    let prizes_path = dir.path().join("prizes.json");
    fs::write(&laureates_path, laureates).unwrap();
    fs::write(&prizes_path, prizes).unwrap();
    (laureates_path, prizes_path)
}

#[test]
fn loads_the_json_pair() {
    let dir = TempDir::new().unwrap();
    let (laureates_path, prizes_path) = write_pair(
        &dir,
        r#"{ "laureates": [
            { "id": "1", "firstname": "Wilhelm Conrad", "surname": "Röntgen",
              "bornCountry": "Prussia (now Germany)", "bornCountryCode": "DE",
              "diedCountry": "Germany", "diedCountryCode": "DE",
              "gender": "male" },
            { "id": "482", "firstname": "International Peace Bureau" }
        ] }"#,
        r#"{ "prizes": [
            { "year": "1901", "category": "physics",
              "laureates": [ { "id": "1", "firstname": "Wilhelm Conrad",
                  "motivation": "in recognition of the extraordinary services",
                  "share": "1" } ] }
        ] }"#,
    );

    let dataset = load_dataset(&laureates_path, &prizes_path).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.prizes.len(), 1);

    let roentgen = dataset.laureate_by_id("1").unwrap();
    assert_eq!(roentgen.full_name(), "Wilhelm Conrad Röntgen");
    assert_eq!(roentgen.born_country_code.as_deref(), Some("DE"));

    // Organizations have no surname; the name stands alone.
    let bureau = dataset.laureate_by_id("482").unwrap();
    assert_eq!(bureau.surname, None);
    assert_eq!(bureau.full_name(), "International Peace Bureau");

    let prize = &dataset.prizes[0];
    assert_eq!(prize.year, "1901");
    assert_eq!(prize.laureates[0].share.as_deref(), Some("1"));
}

#[test]
fn skips_prizes_without_laureate_references() {
    let dir = TempDir::new().unwrap();
    let (laureates_path, prizes_path) = write_pair(
        &dir,
        r#"{ "laureates": [ { "id": "1", "firstname": "A" } ] }"#,
        r#"{ "prizes": [
            { "year": "1940", "category": "peace",
              "overallMotivation": "No prize was awarded" },
            { "year": "1941", "category": "peace", "laureates": [] },
            { "year": "1945", "category": "peace",
              "laureates": [ { "id": "1" } ] }
        ] }"#,
    );

    let dataset = load_dataset(&laureates_path, &prizes_path).unwrap();
    assert_eq!(dataset.prizes.len(), 1);
    assert_eq!(dataset.prizes[0].year, "1945");
}

#[test]
fn unknown_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    let (laureates_path, prizes_path) = write_pair(
        &dir,
        r#"{ "laureates": [
            { "id": "1", "firstname": "A", "born": "1845-03-27",
              "bornCity": "Lennep" }
        ] }"#,
        r#"{ "prizes": [
            { "year": "1901", "category": "physics",
              "laureates": [ { "id": "1" } ] }
        ] }"#,
    );

    let dataset = load_dataset(&laureates_path, &prizes_path).unwrap();
    assert_eq!(dataset.len(), 1);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let (laureates_path, prizes_path) = write_pair(
        &dir,
        r#"{ "laureates": [ { "id": 5 } ] }"#,
        r#"{ "prizes": [] }"#,
    );

    let err = load_dataset(&laureates_path, &prizes_path).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
    assert!(err.to_string().contains("laureates.json"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let (laureates_path, _) = write_pair(&dir, r#"{ "laureates": [] }"#, "{}");

    let err = load_dataset(&laureates_path, &dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
