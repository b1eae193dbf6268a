use std::{collections::HashMap, io::BufRead};

use crate::{
    Error,
    scanner::{Line, LineScanner},
};

const DESCRIPTION_HEADER: &str = "[description]";

/// Collects the assignments of the first `[description]` section, matched case-insensitively.
///
/// Lines before the header are not parsed at all. Collection ends quietly at the first
/// line after it that is neither blank, a comment nor an assignment.
pub(crate) fn parse_description<R: BufRead>(reader: R) -> Result<HashMap<String, String>, Error> {
    let mut scanner = LineScanner::new(reader);
    let mut description = HashMap::new();
    let mut found = false;

    while let Some((line_number, line)) = scanner.next_line()? {
        match Line::classify(line) {
            Line::Blank | Line::Comment => continue,
            _ if !found => {
                if is_description_header(line) {
                    log::debug!("Found description section on line {line_number}");
                    found = true;
                }
            }
            Line::Assignment { key, value } => {
                description.insert(key.to_owned(), value.to_owned());
            }
            _ => {
                log::debug!("Description section ends before line {line_number}: {line}");
                break;
            }
        }
    }

    if !found {
        log::debug!("No description section found");
    }

    Ok(description)
}

/// Case-insensitive comparison using simple case folding, so `ſ` counts as `s`.
fn is_description_header(line: &str) -> bool {
    let folded = line.chars().flat_map(char::to_lowercase).map(|c| match c {
        '\u{017F}' => 's',
        c => c,
    });

    folded.eq(DESCRIPTION_HEADER.chars())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::parse_description;

    fn description(text: &str) -> HashMap<String, String> {
        parse_description(text.as_bytes()).unwrap()
    }

    #[test]
    fn header_is_case_insensitive() {
        let expected = HashMap::from([
            ("name".to_owned(), "Foo".to_owned()),
            ("version".to_owned(), "1".to_owned()),
        ]);

        assert_eq!(description("[description]\nname=Foo\nversion=1"), expected);
        assert_eq!(description("[DESCRIPTION]\nname=Foo\nversion=1"), expected);
        assert_eq!(description("[Description]\nname = Foo\n\n; c\nversion = 1\n"), expected);
    }

    #[test]
    fn missing_section_gives_empty_mapping() {
        assert!(description("[general]\nname = Foo\n").is_empty());
        assert!(description("").is_empty());
    }

    #[test]
    fn lines_before_header_are_not_parsed() {
        let parsed = description("garbage without equals\n[other]\nx = 1\n[description]\nname = Foo\n");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("name").map(String::as_str), Some("Foo"));
    }

    #[test]
    fn collection_stops_at_next_section() {
        let parsed = description("[description]\nname = Foo\n[other]\nname = Bar\nextra = 1\n");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("name").map(String::as_str), Some("Foo"));
    }

    #[test]
    fn collection_stops_at_non_assignment() {
        let parsed = description("[description]\na = 1\nnot an assignment\nb = 2\n");

        assert_eq!(parsed.len(), 1);
        assert!(!parsed.contains_key("b"));
    }

    #[test]
    fn spaced_header_is_not_the_description() {
        assert!(description("[ description ]\nname = Foo\n").is_empty());
    }

    #[test]
    fn header_matches_unicode_fold_of_s() {
        assert_eq!(description("[DE\u{017F}CRIPTION]\nname = Foo\n").len(), 1);
    }

    #[test]
    fn invalid_utf8_before_header_is_skipped() {
        let parsed = parse_description(&b"; \xc4\xe3\xba\xc3 gbk comment\n[description]\nname = Foo\n"[..]).unwrap();

        assert_eq!(parsed.get("name").map(String::as_str), Some("Foo"));
    }
}
