use std::{collections::HashMap, fmt::Display};

/// Key/value pairs of one section. Assigning an existing key overwrites it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IniSection {
    pub(crate) entries: HashMap<String, String>,
}

impl IniSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_value_by_key(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for IniSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_unstable();
        for (key, value) in entries {
            writeln!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}
