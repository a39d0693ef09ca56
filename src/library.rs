// src/library.rs

use crate::error::Result;
use crate::file_writer::LibraryFile;
use crate::symbol::Symbol;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const LIBRARY_HEADER: &str = "EESchema-LIBRARY Version 2.3\n#encoding utf-8\n";
pub const LIBRARY_FOOTER: &str = "#End Library\n";

/// An EESchema symbol library. Symbols are written in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    symbols: Vec<Symbol>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_symbol(&mut self, symbol: Symbol) -> &mut Self {
        debug!("Adding symbol '{}' to library", symbol.name());
        self.symbols.push(symbol);
        self
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// First symbol named `name`, if any.
    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the full library file text.
    pub fn to_lib(&self) -> String {
        self.to_string()
    }

    pub fn validate(&self) -> Result<()> {
        self.symbols.iter().try_for_each(Symbol::validate)
    }

    /// Validates the library, then writes it to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        LibraryFile::new(path.as_ref()).write(self)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LIBRARY_HEADER)?;
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        f.write_str(LIBRARY_FOOTER)
    }
}
