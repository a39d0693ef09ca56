// src/graphic.rs

use crate::error::{Error, Result};
use crate::field::{HJustify, VJustify};
use crate::validate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a closed shape is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    #[default]
    None,
    Foreground,
    Background,
}

impl Fill {
    pub fn code(&self) -> &'static str {
        match self {
            Fill::None => "N",
            Fill::Foreground => "F",
            Fill::Background => "f",
        }
    }
}

/// Direction the pin line points to, from its connection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinOrientation {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl PinOrientation {
    pub fn code(&self) -> &'static str {
        match self {
            PinOrientation::Up => "U",
            PinOrientation::Down => "D",
            PinOrientation::Left => "L",
            PinOrientation::Right => "R",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl TextDirection {
    /// Angle in tenths of a degree.
    pub fn angle(&self) -> i32 {
        match self {
            TextDirection::Horizontal => 0,
            TextDirection::Vertical => 900,
        }
    }
}

/// Arc around `(x, y)`. Angles are in tenths of a degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arc {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub start_angle: i32,
    pub end_angle: i32,
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl Arc {
    pub fn new(
        center: (i32, i32),
        radius: i32,
        angles: (i32, i32),
        start: (i32, i32),
        end: (i32, i32),
    ) -> Self {
        Arc {
            x: center.0,
            y: center.1,
            radius,
            start_angle: angles.0,
            end_angle: angles.1,
            start_x: start.0,
            start_y: start.1,
            end_x: end.0,
            end_y: end.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Circle { x, y, radius }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<(i32, i32)>,
}

impl Polyline {
    pub fn new(points: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Polyline {
            points: points.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl Rectangle {
    pub fn new(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Self {
        Rectangle {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }
}

/// Free text drawn in the symbol body.
///
/// Defaults from [`Text::new`]: horizontal, size 60, neither italic nor bold,
/// centered both ways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub direction: TextDirection,
    pub size: i32,
    pub italic: bool,
    pub bold: bool,
    pub hjustify: HJustify,
    pub vjustify: VJustify,
}

impl Text {
    pub fn new(x: i32, y: i32, text: impl Into<String>) -> Self {
        Text {
            x,
            y,
            text: text.into(),
            direction: TextDirection::Horizontal,
            size: 60,
            italic: false,
            bold: false,
            hjustify: HJustify::Center,
            vjustify: VJustify::Center,
        }
    }

    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = size;
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

    pub fn with_justify(mut self, hjustify: HJustify, vjustify: VJustify) -> Self {
        self.hjustify = hjustify;
        self.vjustify = vjustify;
        self
    }
}

/// An electrical connection point.
///
/// Defaults from [`Pin::new`]: position (0, 0), length 100, pointing right,
/// number and name sizes 50.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub name: String,
    /// Not necessarily numeric, e.g. "A1" on a BGA.
    pub number: String,
    pub x: i32,
    pub y: i32,
    pub length: i32,
    pub orientation: PinOrientation,
    pub size_num: i32,
    pub size_name: i32,
}

impl Pin {
    pub fn new(name: impl Into<String>, number: impl ToString) -> Self {
        Pin {
            name: name.into(),
            number: number.to_string(),
            x: 0,
            y: 0,
            length: 100,
            orientation: PinOrientation::Right,
            size_num: 50,
            size_name: 50,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    pub fn with_orientation(mut self, orientation: PinOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_sizes(mut self, size_num: i32, size_name: i32) -> Self {
        self.size_num = size_num;
        self.size_name = size_name;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Arc(Arc),
    Circle(Circle),
    Polyline(Polyline),
    Rectangle(Rectangle),
    Text(Text),
    Pin(Pin),
}

/// One drawable item of a symbol: a [`Shape`] plus its outline thickness and fill.
///
/// Text and pins carry thickness and fill too, the format just never writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graphic {
    #[serde(default)]
    pub thickness: i32,
    #[serde(default)]
    pub fill: Fill,
    #[serde(flatten)]
    pub shape: Shape,
}

impl Graphic {
    pub fn new(shape: Shape) -> Self {
        Graphic {
            thickness: 0,
            fill: Fill::None,
            shape,
        }
    }

    pub fn with_thickness(mut self, thickness: i32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn as_pin(&self) -> Option<&Pin> {
        match &self.shape {
            Shape::Pin(pin) => Some(pin),
            _ => None,
        }
    }

    /// Returns this graphic as one line of the library format, without the line feed.
    pub fn to_lib(&self) -> String {
        self.to_string()
    }

    /// Short human description used in validation errors.
    pub fn describe(&self) -> String {
        match &self.shape {
            Shape::Arc(_) => "arc".to_string(),
            Shape::Circle(_) => "circle".to_string(),
            Shape::Polyline(_) => "polyline".to_string(),
            Shape::Rectangle(_) => "rectangle".to_string(),
            Shape::Text(t) => format!("text {:?}", t.text),
            Shape::Pin(p) => format!("pin {:?}", p.name),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let entity = self.describe();
        validate::non_negative(&entity, "thickness", self.thickness)?;
        match &self.shape {
            Shape::Arc(a) => validate::non_negative(&entity, "radius", a.radius),
            Shape::Circle(c) => validate::non_negative(&entity, "radius", c.radius),
            Shape::Polyline(p) if p.points.is_empty() => Err(Error::validation(
                entity,
                "points",
                "a polyline needs at least one point",
            )),
            Shape::Polyline(_) | Shape::Rectangle(_) => Ok(()),
            Shape::Text(t) => {
                validate::drawn_text(&entity, "text", &t.text)?;
                validate::non_negative(&entity, "size", t.size)
            }
            Shape::Pin(p) => {
                validate::token(&entity, "name", &p.name)?;
                validate::token(&entity, "number", &p.number)?;
                validate::non_negative(&entity, "length", p.length)?;
                validate::non_negative(&entity, "size_num", p.size_num)?;
                validate::non_negative(&entity, "size_name", p.size_name)
            }
        }
    }
}

impl fmt::Display for Graphic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fill = self.fill.code();
        match &self.shape {
            Shape::Arc(a) => write!(
                f,
                "A {} {} {} {} {} 0 1 {} {} {} {} {} {}",
                a.x,
                a.y,
                a.radius,
                a.start_angle,
                a.end_angle,
                self.thickness,
                fill,
                a.start_x,
                a.start_y,
                a.end_x,
                a.end_y
            ),
            Shape::Circle(c) => write!(
                f,
                "C {} {} {} 0 1 {} {}",
                c.x, c.y, c.radius, self.thickness, fill
            ),
            Shape::Polyline(p) => {
                write!(f, "P {} 0 1 {}", p.points.len(), self.thickness)?;
                for (x, y) in &p.points {
                    write!(f, " {} {}", x, y)?;
                }
                write!(f, " {}", fill)
            }
            Shape::Rectangle(r) => write!(
                f,
                "S {} {} {} {} 0 1 {} {}",
                r.start_x, r.start_y, r.end_x, r.end_y, self.thickness, fill
            ),
            Shape::Text(t) => write!(
                f,
                "T {} {} {} {} 0 0 1 {} {} {} {} {}",
                t.direction.angle(),
                t.x,
                t.y,
                t.size,
                t.text.replace(' ', "~"),
                if t.italic { "Italic" } else { "Normal" },
                // The format stores the inverse of bold here.
                if t.bold { "0" } else { "1" },
                t.hjustify.code(),
                t.vjustify.code()
            ),
            Shape::Pin(p) => write!(
                f,
                "X {} {} {} {} {} {} {} {} 0 0 I",
                p.name,
                p.number,
                p.x,
                p.y,
                p.length,
                p.orientation.code(),
                p.size_num,
                p.size_name
            ),
        }
    }
}

impl From<Shape> for Graphic {
    fn from(shape: Shape) -> Self {
        Graphic::new(shape)
    }
}

macro_rules! graphic_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Graphic {
                fn from(shape: $variant) -> Self {
                    Graphic::new(Shape::$variant(shape))
                }
            }
        )*
    };
}

graphic_from!(Arc, Circle, Polyline, Rectangle, Text, Pin);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn default_pin() {
        assert_eq!(
            Graphic::from(Pin::new("A1", "1")).to_lib(),
            "X A1 1 0 0 100 R 50 50 0 0 I"
        );
    }

    #[test]
    fn configured_pin() {
        let pin = Pin::new("~RESET", 7)
            .at(-300, 100)
            .with_length(150)
            .with_orientation(PinOrientation::Left)
            .with_sizes(40, 45);
        assert_eq!(
            Graphic::from(pin).to_lib(),
            "X ~RESET 7 -300 100 150 L 40 45 0 0 I"
        );
    }

    #[test]
    fn default_polyline() {
        let line = Graphic::from(Polyline::new([(0, 0), (10, 0), (10, 10)]));
        assert_eq!(line.to_lib(), "P 3 0 1 0 0 0 10 0 10 10 N");
    }

    #[rstest]
    #[case(Fill::None, "C 10 -20 30 0 1 6 N")]
    #[case(Fill::Foreground, "C 10 -20 30 0 1 6 F")]
    #[case(Fill::Background, "C 10 -20 30 0 1 6 f")]
    fn circle_fill_codes(#[case] fill: Fill, #[case] expected: &str) {
        let circle = Graphic::from(Circle::new(10, -20, 30))
            .with_thickness(6)
            .with_fill(fill);
        assert_eq!(circle.to_lib(), expected);
    }

    #[test]
    fn arc_line() {
        let arc = Graphic::from(Arc::new((0, 0), 50, (900, -900), (0, 50), (0, -50)))
            .with_thickness(10)
            .with_fill(Fill::Background);
        assert_eq!(arc.to_lib(), "A 0 0 50 900 -900 0 1 10 f 0 50 0 -50");
    }

    #[test]
    fn rectangle_line() {
        let rect =
            Graphic::from(Rectangle::new(-200, 300, 200, -300)).with_fill(Fill::Background);
        assert_eq!(rect.to_lib(), "S -200 300 200 -300 0 1 0 f");
    }

    #[rstest]
    #[case(Text::new(0, 0, "Hello world"), "T 0 0 0 60 0 0 1 Hello~world Normal 1 C C")]
    #[case(
        Text::new(5, -5, "V")
            .with_direction(TextDirection::Vertical)
            .with_size(40)
            .with_italic(true)
            .with_bold(true),
        "T 900 5 -5 40 0 0 1 V Italic 0 C C"
    )]
    #[case(
        Text::new(1, 2, "a b c").with_justify(HJustify::Left, VJustify::Bottom),
        "T 0 1 2 60 0 0 1 a~b~c Normal 1 L B"
    )]
    fn text_lines(#[case] text: Text, #[case] expected: &str) {
        assert_eq!(Graphic::from(text).to_lib(), expected);
    }

    #[test]
    fn negative_radius_passes_through_but_fails_validation() {
        let circle = Graphic::from(Circle::new(0, 0, -10));
        assert_eq!(circle.to_lib(), "C 0 0 -10 0 1 0 N");
        assert!(circle.validate().is_err());
    }

    #[test]
    fn empty_polyline_fails_validation() {
        let line = Graphic::from(Polyline::new(Vec::new()));
        assert_eq!(line.to_lib(), "P 0 0 1 0 N");
        assert!(line.validate().is_err());
    }

    #[test]
    fn text_that_splits_the_line_fails_validation() {
        for content in ["", "a\tb"] {
            let text = Graphic::from(Text::new(0, 0, content));
            assert!(text.validate().is_err(), "{:?}", text.to_lib());
        }
        assert!(Graphic::from(Text::new(0, 0, "a b")).validate().is_ok());
    }

    #[test]
    fn pin_name_with_space_fails_validation() {
        let err = Graphic::from(Pin::new("V CC", "1")).validate().unwrap_err();
        assert!(err.to_string().contains("pin \"V CC\""), "{}", err);
    }
}
