//! Algebraic properties of style combination and rendering.

use colorie::{Attribute, Color, Highlight, Style};
use proptest::prelude::*;
use proptest::sample::select;

fn style() -> impl Strategy<Value = Style> {
    (
        proptest::option::of(select(Color::ALL)),
        proptest::option::of(select(Highlight::ALL)),
        proptest::collection::vec(select(Attribute::ALL), 0..8),
    )
        .prop_map(|(color, highlight, attributes)| {
            let mut style = Style::new();
            if let Some(color) = color {
                style = style.fg(color);
            }
            if let Some(highlight) = highlight {
                style = style.on(highlight);
            }
            attributes.into_iter().fold(style, Style::attr)
        })
}

proptest! {
    #[test]
    fn combine_with_plain_is_identity(a in style(), text in ".*") {
        prop_assert_eq!(a.combine(Style::new()).apply(&text), a.apply(&text));
        prop_assert_eq!(Style::new().combine(a), a);
    }

    #[test]
    fn combine_with_self_is_identity(a in style()) {
        prop_assert_eq!(a + a, a);
    }

    #[test]
    fn combine_is_associative(a in style(), b in style(), c in style()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn rightmost_color_wins(a in style(), b in style(), c in style()) {
        let expected = c.color().or(b.color()).or(a.color());
        prop_assert_eq!((a + b + c).color(), expected);
    }

    #[test]
    fn text_on_either_side_renders_the_same(a in style(), text in "[a-z ]{0,16}") {
        prop_assert_eq!(a + text.as_str(), text.as_str() + a);
    }

    #[test]
    fn plain_style_renders_verbatim(text in ".*") {
        prop_assert_eq!(Style::new().apply(&text), text);
    }

    #[test]
    fn styled_text_is_wrapped_and_reset(a in style(), text in "[a-z]{1,8}") {
        prop_assume!(!a.is_plain());
        let rendered = a.apply(&text);
        prop_assert!(rendered.starts_with("\x1b["));
        prop_assert!(rendered.ends_with("\x1b[0m"));
        prop_assert!(rendered.contains(&text));
    }

    #[test]
    fn names_and_builders_agree(
        color in select(Color::ALL),
        highlight in select(Highlight::ALL),
        attributes in proptest::collection::vec(select(Attribute::ALL), 0..6),
    ) {
        let names: Vec<&str> = attributes.iter().map(|a| a.name()).collect();
        let from_names = Style::from_names(Some(color.name()), Some(highlight.name()), &names).unwrap();
        let built = attributes
            .into_iter()
            .fold(Style::new().fg(color).on(highlight), Style::attr);
        prop_assert_eq!(from_names, built);
    }
}

#[test]
fn integers_render_with_display_form() {
    let style = Style::from_names(Some("green"), None, ["underline"]).unwrap();
    assert_eq!(style.apply(-17i64), "\x1b[32;4m-17\x1b[0m");
}
