use std::io::BufRead;

use crate::{
    Error,
    models::{GLOBAL_SECTION_NAME, IniFile},
    scanner::{Line, LineScanner},
};

/// Parses every line of `reader` into `ini_file`, stopping at the first invalid line.
///
/// Sections and values read before an invalid line stay in `ini_file`.
pub(crate) fn parse_into<R: BufRead>(reader: R, ini_file: &mut IniFile) -> Result<(), Error> {
    let mut scanner = LineScanner::new(reader);
    let mut current_section = GLOBAL_SECTION_NAME.to_owned();

    while let Some((line_number, line)) = scanner.next_line()? {
        log::debug!("Parsing line {line_number}: {line}");

        match Line::classify(line) {
            Line::Blank | Line::Comment => log::trace!("Skipping line {line_number}"),
            Line::Assignment { key, value } => {
                log::debug!("Line matched assignment in section {current_section:?}.");
                ini_file.section_mut(&current_section).insert(key, value);
            }
            Line::SectionHeader(name) => {
                log::debug!("Line matched section header {name:?}");
                current_section = name.to_owned();
                ini_file.section_mut(&current_section);
            }
            Line::Invalid => {
                return Err(Error::Syntax {
                    line: line_number,
                    content: line.to_owned(),
                });
            }
        }
    }

    log::debug!("End of input reached after {} sections.", ini_file.len());

    Ok(())
}
