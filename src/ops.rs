//! `+` as shorthand for [`Style::combine`] and [`Style::apply`].
//!
//! * `Style + Style` combines, the right-hand side winning;
//! * `Style + text` and `text + Style` both render the text.
//!
//! `String + Style` is deliberately absent: a second `Add` impl on `String`
//! would break the `string + &other_string` coercion for every dependent
//! crate. Use `s.as_str() + style` or `style + s` instead.

use std::ops::Add;

use crate::style::Style;

impl Add for Style {
    type Output = Style;

    fn add(self, rhs: Style) -> Style {
        self.combine(rhs)
    }
}

impl Add<&Style> for Style {
    type Output = Style;

    fn add(self, rhs: &Style) -> Style {
        self.combine(*rhs)
    }
}

impl Add<&str> for Style {
    type Output = String;

    fn add(self, rhs: &str) -> String {
        self.apply(rhs)
    }
}

impl Add<Style> for &str {
    type Output = String;

    fn add(self, rhs: Style) -> String {
        rhs.apply(self)
    }
}

impl Add<String> for Style {
    type Output = String;

    fn add(self, rhs: String) -> String {
        self.apply(rhs)
    }
}

impl Add<&String> for Style {
    type Output = String;

    fn add(self, rhs: &String) -> String {
        self.apply(rhs)
    }
}

macro_rules! display_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Add<$ty> for Style {
                type Output = String;

                fn add(self, rhs: $ty) -> String {
                    self.apply(rhs)
                }
            }

            impl Add<Style> for $ty {
                type Output = String;

                fn add(self, rhs: Style) -> String {
                    rhs.apply(self)
                }
            }
        )*
    };
}

display_operand!(char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_plus_style_combines() {
        let a = Style::new().red().bold();
        let b = Style::new().green().blink();
        assert_eq!(a + b, a.combine(b));
        assert_eq!(a + &b, a.combine(b));
    }

    #[test]
    fn test_text_on_either_side() {
        let red = Style::new().red();
        assert_eq!(red + "Hi", "Hi" + red);
        assert_eq!(red + "Hi", "\x1b[31mHi\x1b[0m");
    }

    #[test]
    fn test_owned_text() {
        let red = Style::new().red();
        let text = String::from("Hi");
        assert_eq!(red + &text, red.apply("Hi"));
        assert_eq!(red + text.clone(), red.apply("Hi"));
        assert_eq!(text.as_str() + red, red.apply("Hi"));
    }

    #[test]
    fn test_numbers_on_either_side() {
        let style = Style::new().yellow().on_blue();
        assert_eq!(style + 12i32, "\x1b[33;44m12\x1b[0m");
        assert_eq!(12u64 + style, style + 12i32);
        assert_eq!(2.5f64 + style, style.apply(2.5));
        assert_eq!('c' + style, style.apply('c'));
        assert_eq!(style + true, style.apply(true));
    }

    #[test]
    fn test_operator_chain_combines_before_rendering() {
        let rendered = Style::new().on_cyan() + Style::new().red() + "Hi";
        let direct = Style::new().red().on_cyan().apply("Hi");
        assert_eq!(rendered, direct);
    }

    #[test]
    fn test_plain_style_operators_are_identity() {
        assert_eq!(Style::new() + "x", "x");
        assert_eq!("x" + Style::new(), "x");
    }
}
