mod builders;
mod description;
pub mod models;
mod parser;
pub mod scanner;

use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use thiserror::Error;

pub use crate::builders::{IniFileBuilder, IniSectionBuilder};
use crate::models::IniFile;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid INI syntax on line {line}: {content}")]
    Syntax { line: usize, content: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses INI text held in memory.
pub fn parse(ini_string: &str) -> Result<IniFile> {
    ini_string.parse()
}

/// Loads an [`IniFile`] from any reader.
pub fn load<R: Read>(reader: R) -> Result<IniFile> {
    let mut ini_file = IniFile::new();
    ini_file.load(reader)?;
    Ok(ini_file)
}

/// Loads an [`IniFile`] from a file on disk.
///
/// Sections parsed before a syntax error are dropped with the error; use
/// [`IniFile::load_file`] to keep them.
pub fn load_file(path: impl AsRef<Path>) -> Result<IniFile> {
    let mut ini_file = IniFile::new();
    ini_file.load_file(path)?;
    Ok(ini_file)
}

/// Reads only the `[description]` section of a mod file. A file without one gives an empty map.
pub fn load_mod_desc(path: impl AsRef<Path>) -> Result<HashMap<String, String>> {
    let path = path.as_ref();
    log::debug!("Loading description from {}", path.display());
    load_mod_desc_from(File::open(path)?)
}

/// Reads only the `[description]` section from any reader.
pub fn load_mod_desc_from<R: Read>(reader: R) -> Result<HashMap<String, String>> {
    description::parse_description(BufReader::new(reader))
}
