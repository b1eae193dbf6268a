use std::{
    collections::{HashMap, hash_map},
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

use crate::{
    Error,
    models::{section::IniSection, timer_sections::TimerSections},
    parser,
};

/// Name of the implicit section that holds assignments made before the first header.
pub const GLOBAL_SECTION_NAME: &str = "";

/// A parsed INI file: sections keyed by name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IniFile {
    pub(crate) sections: HashMap<String, IniSection>,
}

impl IniFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the named section, creating an empty one if it does not exist yet.
    pub fn section_mut(&mut self, name: &str) -> &mut IniSection {
        match self.sections.entry(name.to_owned()) {
            hash_map::Entry::Occupied(entry) => entry.into_mut(),
            hash_map::Entry::Vacant(entry) => {
                log::debug!("Creating section {name:?}");
                entry.insert(IniSection::new())
            }
        }
    }

    pub fn get_section_by_name(&self, name: &str) -> Option<&IniSection> {
        self.sections.get(name)
    }

    pub fn get_global_section(&self) -> Option<&IniSection> {
        self.get_section_by_name(GLOBAL_SECTION_NAME)
    }

    /// Looks up a single value. A missing section and a missing key both give `None`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.get_section_by_name(section)?.get_value_by_key(key)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &IniSection)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Parses INI data from `reader` into this file. Existing sections are merged into.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        self.load_buffered(BufReader::new(reader))
    }

    /// Same as [`IniFile::load`] for readers that are already buffered.
    pub fn load_buffered<R: BufRead>(&mut self, reader: R) -> Result<(), Error> {
        parser::parse_into(reader, self)
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        log::debug!("Loading INI file {}", path.display());
        let file = File::open(path)?;
        self.load(file)
    }

    /// Collects the sections whose names are integers.
    pub fn timer_sections(&self) -> TimerSections {
        TimerSections::from_section_names(self.sections.keys().map(String::as_str))
    }

    pub fn time_section_count(&self) -> usize {
        self.timer_sections().len()
    }
}

impl FromStr for IniFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ini_file = Self::new();
        ini_file.load_buffered(s.as_bytes())?;
        Ok(ini_file)
    }
}

impl Display for IniFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(global_section) = self.get_global_section() {
            // An empty global section only exists because of an explicit `[]` header.
            if global_section.is_empty() {
                writeln!(f, "[]")?;
            } else {
                writeln!(f, "{global_section}")?;
            }
        }

        let mut named: Vec<_> = self.sections().filter(|(name, _)| *name != GLOBAL_SECTION_NAME).collect();
        named.sort_unstable_by_key(|(name, _)| *name);

        for (section_name, section) in named {
            writeln!(f, "[{section_name}]")?;
            write!(f, "{section}")?;
        }
        Ok(())
    }
}
