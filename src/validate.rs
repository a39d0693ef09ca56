// src/validate.rs

//! Checks run before a library is written to disk.
//!
//! Serialization itself never validates: values pass through to the text
//! verbatim. These helpers catch the values that would break the line
//! grammar, and report the entity and field they were found on.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// A whitespace-separated grammar token: DEF name, reference, alias, pin name/number.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^[^\s"]+$"#).unwrap());

/// Text placed between double quotes on an `F` line.
static QUOTED_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^[^"\r\n]*$"#).unwrap());

/// Text drawn by a `T` line. Plain spaces become `~`, any other whitespace splits the token.
static DRAWN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\t\r\n\x0B\x0C]+$").unwrap());

pub(crate) fn token(entity: &str, field: &'static str, value: &str) -> Result<()> {
    if TOKEN.is_match(value) {
        Ok(())
    } else {
        Err(Error::validation(
            entity,
            field,
            format!("{:?} must be non-empty without whitespace or '\"'", value),
        ))
    }
}

pub(crate) fn quoted_text(entity: &str, field: &'static str, value: &str) -> Result<()> {
    if QUOTED_TEXT.is_match(value) {
        Ok(())
    } else {
        Err(Error::validation(
            entity,
            field,
            format!("{:?} must not contain '\"' or line breaks", value),
        ))
    }
}

pub(crate) fn drawn_text(entity: &str, field: &'static str, value: &str) -> Result<()> {
    if DRAWN_TEXT.is_match(value) {
        Ok(())
    } else {
        Err(Error::validation(
            entity,
            field,
            format!("{:?} must be non-empty without tabs or line breaks", value),
        ))
    }
}

pub(crate) fn non_negative(entity: &str, field: &'static str, value: i32) -> Result<()> {
    if value >= 0 {
        Ok(())
    } else {
        Err(Error::validation(
            entity,
            field,
            format!("{} must not be negative", value),
        ))
    }
}
