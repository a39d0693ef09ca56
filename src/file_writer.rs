// src/file_writer.rs

use crate::error::{Error, Result};
use crate::library::{LIBRARY_FOOTER, LIBRARY_HEADER, Library};
use crate::symbol::Symbol;
use log::{info, warn};
use regex::Regex;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

/// What [`LibraryFile::append_symbol`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The file did not exist or was empty; a new library holding the symbol was written.
    Created,
    /// The symbol was inserted before the library footer.
    Appended,
    /// The symbol's name or one of its aliases is already a `DEF` or `ALIAS` name in the file;
    /// nothing was written.
    Skipped,
}

/// A `.lib` file on disk.
///
/// Writes are not atomic: a failure part way leaves a truncated file behind.
pub struct LibraryFile {
    pub path: PathBuf,
}

impl LibraryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LibraryFile { path: path.into() }
    }

    /// Validates `library` and writes its full text, replacing the file.
    pub fn write(&self, library: &Library) -> Result<()> {
        library.validate()?;
        let mut file = File::create(&self.path)?;
        file.write_all(library.to_lib().as_bytes())?;
        file.flush()?;
        info!(
            "Wrote {} symbol(s) to library {:?}",
            library.len(),
            self.path
        );
        Ok(())
    }

    /// Adds one symbol to the library file, creating it if needed.
    pub fn append_symbol(&self, symbol: &Symbol) -> Result<AppendOutcome> {
        symbol.validate()?;
        let symbol_content = symbol.to_lib();

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;

        let mut file_content = String::new();
        file.read_to_string(&mut file_content)?;

        if file_content.is_empty() {
            file.write_all(LIBRARY_HEADER.as_bytes())?;
            file.write_all(symbol_content.as_bytes())?;
            file.write_all(LIBRARY_FOOTER.as_bytes())?;
            info!(
                "Created new library {:?} holding '{}'",
                self.path,
                symbol.name()
            );
            return Ok(AppendOutcome::Created);
        }

        if !file_content.starts_with(LIBRARY_HEADER) || !file_content.ends_with(LIBRARY_FOOTER) {
            return Err(Error::ParseError(format!(
                "{:?} is not an EESchema library (missing header or footer)",
                self.path
            )));
        }

        let existing = library_names(&file_content)?;
        let taken = std::iter::once(symbol.name())
            .chain(symbol.aliases().iter().map(String::as_str))
            .find(|name| existing.contains(name));
        if let Some(name) = taken {
            warn!(
                "Symbol '{}' clashes with '{}' already in {:?}. Skipping.",
                symbol.name(),
                name,
                self.path
            );
            return Ok(AppendOutcome::Skipped);
        }

        // Overwrite the footer with the new block, then put the footer back.
        file.seek(SeekFrom::End(-(LIBRARY_FOOTER.len() as i64)))?;
        file.write_all(symbol_content.as_bytes())?;
        file.write_all(LIBRARY_FOOTER.as_bytes())?;
        file.flush()?;
        info!("Appended symbol '{}' to {:?}", symbol.name(), self.path);
        Ok(AppendOutcome::Appended)
    }
}

/// Every name a library file defines: the `DEF` name of each symbol plus its `ALIAS` names.
fn library_names(content: &str) -> Result<HashSet<&str>> {
    let re =
        Regex::new(r"(?m)^(DEF|ALIAS) (.*)$").map_err(|e| Error::ParseError(e.to_string()))?;
    let mut names = HashSet::new();
    for caps in re.captures_iter(content) {
        let mut tokens = caps.get(2).map_or("", |m| m.as_str()).split_whitespace();
        match &caps[1] {
            "DEF" => names.extend(tokens.next()),
            _ => names.extend(tokens),
        }
    }
    Ok(names)
}
