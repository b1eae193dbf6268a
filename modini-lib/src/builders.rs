use crate::models::{GLOBAL_SECTION_NAME, IniFile, IniSection};

#[derive(Debug, Default)]
pub struct IniSectionBuilder {
    section: IniSection,
}

impl IniSectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_key_value_pair(mut self, key: &str, value: &str) -> Self {
        self.section.insert(key, value);
        self
    }

    pub fn build(self) -> IniSection {
        self.section
    }
}

#[derive(Debug, Default)]
pub struct IniFileBuilder {
    ini_file: IniFile,
}

impl IniFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_section(mut self, name: &str, section: IniSection) -> Self {
        self.ini_file.sections.insert(name.to_owned(), section);
        self
    }

    pub fn set_global_section(self, section: IniSection) -> Self {
        self.new_section(GLOBAL_SECTION_NAME, section)
    }

    pub fn build(self) -> IniFile {
        self.ini_file
    }
}
