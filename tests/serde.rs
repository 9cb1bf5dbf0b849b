#![cfg(feature = "derive_serde_style")]

use colorie::{Attribute, Color, Highlight, Style};

#[test]
fn test_vocabulary_serializes_as_identifiers() {
    assert_eq!(serde_json::to_string(&Color::Magenta).unwrap(), "\"magenta\"");
    assert_eq!(serde_json::to_string(&Highlight::OnCyan).unwrap(), "\"on_cyan\"");
    assert_eq!(
        serde_json::from_str::<Attribute>("\"concealed\"").unwrap(),
        Attribute::Concealed
    );
}

#[test]
fn test_style_serialization() {
    let style = Style::new().red().on_white().blink().bold();
    let json = serde_json::to_string(&style).unwrap();
    assert_eq!(
        json,
        r#"{"color":"red","highlight":"on_white","attributes":["blink","bold"]}"#
    );
    assert_eq!(serde_json::from_str::<Style>(&json).unwrap(), style);
}

#[test]
fn test_style_deserialization_defaults_missing_fields() {
    let style: Style = serde_json::from_str(r#"{"attributes":["bold","bold"]}"#).unwrap();
    assert_eq!(style, Style::new().bold());
    assert_eq!(serde_json::from_str::<Style>("{}").unwrap(), Style::new());
}

#[test]
fn test_unknown_identifier_is_rejected() {
    assert!(serde_json::from_str::<Style>(r#"{"color":"purple"}"#).is_err());
}
