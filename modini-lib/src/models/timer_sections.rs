use std::collections::{BTreeMap, btree_map};

/// Sections whose names parse as base-10 integers, keyed by that integer.
///
/// Built fresh by [`IniFile::timer_sections`](crate::models::IniFile::timer_sections);
/// the caller owns the result.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TimerSections {
    sections: BTreeMap<i64, String>,
}

impl TimerSections {
    pub fn from_section_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut sections = BTreeMap::new();

        for name in names {
            let Ok(number) = name.parse::<i64>() else {
                continue;
            };
            log::trace!("Section {name:?} is timer section {number}");
            // "5" and "+5" collide, the last one seen wins.
            sections.insert(number, name.to_owned());
        }

        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Original section name for a timer number.
    pub fn get(&self, number: i64) -> Option<&str> {
        self.sections.get(&number).map(String::as_str)
    }

    /// Iterates in ascending numeric order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.sections.iter().map(|(number, name)| (*number, name.as_str()))
    }
}

impl IntoIterator for TimerSections {
    type Item = (i64, String);
    type IntoIter = btree_map::IntoIter<i64, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}
