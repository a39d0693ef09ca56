// src/field.rs

use crate::error::Result;
use crate::validate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field id of the reference designator prefix.
pub const REFERENCE: u32 = 0;
/// Field id of the symbol name (value).
pub const NAME: u32 = 1;
/// Field id of the footprint.
pub const FOOTPRINT: u32 = 2;
/// Field id of the datasheet.
pub const DATASHEET: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl FieldOrientation {
    pub fn code(&self) -> &'static str {
        match self {
            FieldOrientation::Horizontal => "H",
            FieldOrientation::Vertical => "V",
        }
    }
}

/// Horizontal text justification, shared by fields and text primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HJustify {
    Left,
    Right,
    Center,
}

impl HJustify {
    pub fn code(&self) -> &'static str {
        match self {
            HJustify::Left => "L",
            HJustify::Right => "R",
            HJustify::Center => "C",
        }
    }
}

/// Vertical text justification, shared by fields and text primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VJustify {
    Bottom,
    Center,
    Top,
}

impl VJustify {
    pub fn code(&self) -> &'static str {
        match self {
            VJustify::Bottom => "B",
            VJustify::Center => "C",
            VJustify::Top => "T",
        }
    }
}

/// A labeled metadata slot of a symbol.
///
/// Ids 0 to 3 are the reference, name, footprint and datasheet slots every
/// symbol carries; ids from 4 up are user-defined.
///
/// Defaults from [`Field::new`]: position (0, 0), dimension 50, visible,
/// horizontal, left/center justified, neither italic nor bold, no name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: u32,
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub dimension: i32,
    pub visible: bool,
    pub orientation: FieldOrientation,
    pub hjustify: HJustify,
    pub vjustify: VJustify,
    pub italic: bool,
    pub bold: bool,
    /// Informational only, never written to the library.
    pub name: Option<String>,
}

impl Field {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Field {
            id,
            text: text.into(),
            x: 0,
            y: 0,
            dimension: 50,
            visible: true,
            orientation: FieldOrientation::Horizontal,
            hjustify: HJustify::Left,
            vjustify: VJustify::Center,
            italic: false,
            bold: false,
            name: None,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_dimension(mut self, dimension: i32) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_orientation(mut self, orientation: FieldOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_justify(mut self, hjustify: HJustify, vjustify: VJustify) -> Self {
        self.hjustify = hjustify;
        self.vjustify = vjustify;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns this field as one `F` line of the library format, without the line feed.
    pub fn to_lib(&self) -> String {
        self.to_string()
    }

    pub fn validate(&self) -> Result<()> {
        let entity = format!("field F{}", self.id);
        validate::quoted_text(&entity, "text", &self.text)?;
        validate::non_negative(&entity, "dimension", self.dimension)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "F{} \"{}\" {} {} {} {} {} {} {}{}{}",
            self.id,
            self.text,
            self.x,
            self.y,
            self.dimension,
            self.orientation.code(),
            if self.visible { "V" } else { "I" },
            self.hjustify.code(),
            self.vjustify.code(),
            if self.italic { "I" } else { "N" },
            if self.bold { "B" } else { "N" },
        )
    }
}
