// src/lib.rs

//! Build KiCad EESchema symbol libraries (`.lib`, version 2.3) in memory and
//! write them out.
//!
//! ```no_run
//! use eeschema_rs::{Field, Library, Pin, PinOrientation, Rectangle, Symbol};
//!
//! let mut led = Symbol::new("LED");
//! led.add_field(Field::new(2, "LED_SMD:LED_0805").with_visible(false))
//!     .add_graphic(Rectangle::new(-50, 50, 50, -50))
//!     .add_pin(Pin::new("K", 1).at(-150, 0))
//!     .add_pin(Pin::new("A", 2).at(150, 0).with_orientation(PinOrientation::Left));
//!
//! let mut lib = Library::new();
//! lib.add_symbol(led);
//! lib.save("leds.lib")?;
//! # Ok::<(), eeschema_rs::error::Error>(())
//! ```

pub mod error;
pub mod field;
pub mod file_writer;
pub mod graphic;
pub mod library;
pub mod symbol;
mod validate;

pub use error::{Error, Result};
pub use field::{Field, FieldOrientation, HJustify, VJustify};
pub use file_writer::{AppendOutcome, LibraryFile};
pub use graphic::{
    Arc, Circle, Fill, Graphic, Pin, PinOrientation, Polyline, Rectangle, Shape, Text,
    TextDirection,
};
pub use library::Library;
pub use symbol::{Symbol, SymbolConfig};
