use eeschema_rs::{
    Arc, Circle, Error, Field, Fill, Graphic, HJustify, Library, Pin, PinOrientation, Polyline,
    Rectangle, Symbol, SymbolConfig, Text, VJustify,
};
use std::fs;

const HEADER: &str = "EESchema-LIBRARY Version 2.3\n#encoding utf-8\n";
const FOOTER: &str = "#End Library\n";

fn opamp() -> Symbol {
    let mut symbol = Symbol::with_config(
        "LM358",
        SymbolConfig {
            draw_pin_name: false,
            aliases: vec!["LM2904".to_string()],
            ..Default::default()
        },
    );
    symbol
        .add_field(Field::new(0, "U").at(0, 250))
        .add_field(Field::new(1, "LM358").at(0, -250))
        .add_field(
            Field::new(4, "Dual op-amp")
                .with_visible(false)
                .with_name("Description"),
        )
        .add_graphic(
            Graphic::from(Polyline::new([
                (-200, 200),
                (200, 0),
                (-200, -200),
                (-200, 200),
            ]))
            .with_thickness(10)
            .with_fill(Fill::Background),
        )
        .add_pin(Pin::new("+", 3).at(-400, 100).with_length(200))
        .add_pin(Pin::new("-", 2).at(-400, -100).with_length(200))
        .add_pin(
            Pin::new("~", 1)
                .at(400, 0)
                .with_length(200)
                .with_orientation(PinOrientation::Left),
        );
    symbol
}

#[test]
fn test_empty_library() {
    assert_eq!(Library::new().to_lib(), format!("{}{}", HEADER, FOOTER));
}

#[test]
fn test_full_library_text() {
    let mut lib = Library::new();
    lib.add_symbol(opamp());
    let expected = "\
EESchema-LIBRARY Version 2.3
#encoding utf-8
DEF LM358 U 0 40 Y N 1 F N
ALIAS LM2904
F0 \"U\" 0 250 50 H V L CNN
F1 \"LM358\" 0 -250 50 H V L CNN
F2 \"\" 0 0 50 H I L CNN
F3 \"\" 0 0 50 H I L CNN
F4 \"Dual op-amp\" 0 0 50 H I L CNN
DRAW
P 4 0 1 10 -200 200 200 0 -200 -200 -200 200 f
X + 3 -400 100 200 R 50 50 0 0 I
X - 2 -400 -100 200 R 50 50 0 0 I
X ~ 1 400 0 200 L 50 50 0 0 I
ENDDRAW
ENDDEF
#End Library
";
    assert_eq!(lib.to_lib(), expected);
}

#[test]
fn test_every_primitive_kind() {
    let mut symbol = Symbol::new("SHAPES");
    symbol
        .add_graphic(Arc::new((0, 0), 100, (0, 900), (100, 0), (0, 100)))
        .add_graphic(Circle::new(0, 0, 25))
        .add_graphic(Rectangle::new(-100, -100, 100, 100))
        .add_graphic(
            Text::new(0, -150, "HELLO THERE").with_justify(HJustify::Right, VJustify::Top),
        )
        .add_pin(Pin::new("A1", "1"));
    let text = symbol.to_lib();
    let draw: Vec<&str> = text
        .lines()
        .skip_while(|l| *l != "DRAW")
        .skip(1)
        .take_while(|l| *l != "ENDDRAW")
        .collect();
    assert_eq!(
        draw,
        vec![
            "A 0 0 100 0 900 0 1 0 N 100 0 0 100",
            "C 0 0 25 0 1 0 N",
            "S -100 -100 100 100 0 1 0 N",
            "T 0 0 -150 60 0 0 1 HELLO~THERE Normal 1 R T",
            "X A1 1 0 0 100 R 50 50 0 0 I",
        ]
    );
}

#[test]
fn test_field_order_independent_of_insertion() {
    let mut symbol = Symbol::new("S");
    symbol
        .add_field(Field::new(9, "nine"))
        .add_field(Field::new(7, "seven"))
        .add_field(Field::new(2, "two"));
    let text = symbol.to_lib();
    let ids: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with('F'))
        .filter_map(|l| l.split(' ').next())
        .collect();
    assert_eq!(ids, vec!["F0", "F1", "F2", "F3", "F7", "F9"]);
}

#[test]
fn test_serialization_is_repeatable() {
    let mut lib = Library::new();
    lib.add_symbol(opamp()).add_symbol(Symbol::new("R"));
    assert_eq!(lib.to_lib(), lib.to_lib());
    assert_eq!(lib.clone().to_lib(), lib.to_lib());
}

#[test]
fn test_save_writes_library_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("opamps.lib");
    let mut lib = Library::new();
    lib.add_symbol(opamp());

    lib.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), lib.to_lib());

    // Saving again replaces the file rather than appending.
    lib.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), lib.to_lib());
}

#[test]
fn test_save_io_error_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.lib");
    let err = Library::new().save(&path).unwrap_err();
    assert!(matches!(err, Error::IoError(_)), "{:?}", err);
}

#[test]
fn test_save_rejects_quote_in_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.lib");
    let mut symbol = Symbol::new("R");
    symbol.add_field(Field::new(5, "12\" long"));
    let mut lib = Library::new();
    lib.add_symbol(symbol);

    // Serialization passes the quote through, saving refuses it.
    assert!(lib.to_lib().contains("F5 \"12\" long\""));
    match lib.save(&path).unwrap_err() {
        Error::Validation { entity, field, .. } => {
            assert_eq!(entity, "symbol \"R\" / field F5");
            assert_eq!(field, "text");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
