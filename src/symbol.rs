// src/symbol.rs

use crate::error::Result;
use crate::field::{self, Field};
use crate::graphic::{Graphic, Pin};
use crate::validate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Symbol options, with the defaults a bare [`Symbol::new`] uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    /// Reference designator prefix. Default "U".
    pub reference: String,
    /// Whether pin numbers are drawn. Default true.
    pub draw_pin_number: bool,
    /// Whether pin names are drawn. Default true.
    pub draw_pin_name: bool,
    /// Alternate names, written in order on the `ALIAS` line. Default empty.
    pub aliases: Vec<String>,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        SymbolConfig {
            reference: "U".to_string(),
            draw_pin_number: true,
            draw_pin_name: true,
            aliases: Vec::new(),
        }
    }
}

/// One schematic component type, written as a `DEF` ... `ENDDEF` block.
///
/// Fields 0 to 3 (reference, name, footprint, datasheet) always exist.
/// Adding a field whose id is already present replaces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Symbol {
    name: String,
    config: SymbolConfig,
    fields: BTreeMap<u32, Field>,
    graphics: Vec<Graphic>,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol::with_config(name, SymbolConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: SymbolConfig) -> Self {
        let name = name.into();
        let mut symbol = Symbol {
            fields: BTreeMap::new(),
            graphics: Vec::new(),
            name,
            config,
        };
        symbol.insert_default_fields();
        symbol
    }

    fn insert_default_fields(&mut self) {
        let defaults = [
            Field::new(field::REFERENCE, self.config.reference.clone()),
            Field::new(field::NAME, self.name.clone()),
            Field::new(field::FOOTPRINT, "").with_visible(false),
            Field::new(field::DATASHEET, "").with_visible(false),
        ];
        for f in defaults {
            self.fields.entry(f.id).or_insert(f);
        }
    }

    /// Adds `field`, replacing any field with the same id.
    pub fn add_field(&mut self, field: Field) -> &mut Self {
        if let Some(old) = self.fields.insert(field.id, field) {
            debug!("Symbol '{}': replaced field F{}", self.name, old.id);
        }
        self
    }

    /// Appends a graphic. Pins and shapes share one sequence, written in insertion order.
    pub fn add_graphic(&mut self, graphic: impl Into<Graphic>) -> &mut Self {
        let graphic = graphic.into();
        debug!("Symbol '{}': adding {}", self.name, graphic.describe());
        self.graphics.push(graphic);
        self
    }

    pub fn add_pin(&mut self, pin: Pin) -> &mut Self {
        self.add_graphic(pin)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference(&self) -> &str {
        &self.config.reference
    }

    pub fn draw_pin_number(&self) -> bool {
        self.config.draw_pin_number
    }

    pub fn draw_pin_name(&self) -> bool {
        self.config.draw_pin_name
    }

    pub fn aliases(&self) -> &[String] {
        &self.config.aliases
    }

    pub fn field(&self, id: u32) -> Option<&Field> {
        self.fields.get(&id)
    }

    /// Fields in ascending id order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn graphics(&self) -> &[Graphic] {
        &self.graphics
    }

    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.graphics.iter().filter_map(Graphic::as_pin)
    }

    /// Returns this symbol's block in the library format, each line terminated by a line feed.
    pub fn to_lib(&self) -> String {
        self.to_string()
    }

    pub fn validate(&self) -> Result<()> {
        let entity = format!("symbol {:?}", self.name);
        validate::token(&entity, "name", &self.name)?;
        validate::token(&entity, "reference", &self.config.reference)?;
        for alias in &self.config.aliases {
            validate::token(&entity, "aliases", alias)?;
        }
        for f in self.fields.values() {
            f.validate().map_err(|e| e.within(&entity))?;
        }
        for (i, g) in self.graphics.iter().enumerate() {
            g.validate()
                .map_err(|e| e.within(&format!("{} / graphic #{}", entity, i)))?;
        }
        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "DEF {} {} 0 40 {} {} 1 F N",
            self.name,
            self.config.reference,
            if self.config.draw_pin_number { "Y" } else { "N" },
            if self.config.draw_pin_name { "Y" } else { "N" },
        )?;
        if !self.config.aliases.is_empty() {
            writeln!(f, "ALIAS {}", self.config.aliases.join(" "))?;
        }
        for field in self.fields.values() {
            writeln!(f, "{}", field)?;
        }
        writeln!(f, "DRAW")?;
        for graphic in &self.graphics {
            writeln!(f, "{}", graphic)?;
        }
        writeln!(f, "ENDDRAW")?;
        writeln!(f, "ENDDEF")
    }
}

// Deserialized symbols go through `with_config` so fields 0 to 3 always exist.
impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            name: String,
            #[serde(default)]
            config: SymbolConfig,
            #[serde(default)]
            fields: BTreeMap<u32, Field>,
            #[serde(default)]
            graphics: Vec<Graphic>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut symbol = Symbol::with_config(raw.name, raw.config);
        for f in raw.fields.into_values() {
            symbol.add_field(f);
        }
        symbol.graphics = raw.graphics;
        Ok(symbol)
    }
}
