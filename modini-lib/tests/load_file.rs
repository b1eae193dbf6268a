use std::{io::ErrorKind, path::PathBuf};

use modini::{Error, load_file, load_mod_desc, models::IniFile};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

#[test]
fn load_file_reads_all_sections() {
    let ini_file = load_file(fixture("mod.ini")).unwrap();

    assert_eq!(ini_file.len(), 5);
    assert_eq!(ini_file.get("", "title"), Some("Sample mod"));
    assert_eq!(ini_file.get("Description", "author"), Some("Someone"));
    assert_eq!(ini_file.get("2", "start"), Some("00:30"));
    assert_eq!(ini_file.time_section_count(), 2);
}

#[test]
fn load_mod_desc_reads_only_description() {
    let description = load_mod_desc(fixture("mod.ini")).unwrap();

    assert_eq!(description.len(), 3);
    assert_eq!(description.get("name").map(String::as_str), Some("Foo"));
    assert_eq!(description.get("version").map(String::as_str), Some("1"));
    assert!(!description.contains_key("start"));
    assert!(!description.contains_key("title"));
}

#[test]
fn load_mod_desc_without_description_is_empty() {
    assert!(load_mod_desc(fixture("no_description.ini")).unwrap().is_empty());
}

#[test]
fn syntax_error_carries_line() {
    let error = load_file(fixture("broken.ini")).unwrap_err();

    assert!(matches!(error, Error::Syntax { line: 3, ref content } if content == "this line is broken"));
}

#[test]
fn missing_file_is_an_io_error() {
    for error in [
        load_file(fixture("does_not_exist.ini")).unwrap_err(),
        load_mod_desc(fixture("does_not_exist.ini")).unwrap_err(),
    ] {
        match error {
            Error::Io(io_error) => assert_eq!(io_error.kind(), ErrorKind::NotFound),
            other => panic!("Unexpected error: {other}"),
        }
    }
}

#[test]
fn load_file_into_existing_keeps_data_before_error() {
    let mut ini_file = IniFile::new();

    let error = ini_file.load_file(fixture("broken.ini")).unwrap_err();

    assert!(matches!(error, Error::Syntax { line: 3, .. }));
    assert_eq!(ini_file.get("ok", "key"), Some("value"));
}
