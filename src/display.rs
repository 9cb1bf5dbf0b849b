use std::fmt;
use std::ops::Add;

use crate::style::Style;

/// A value paired with the [`Style`] it will be rendered in.
///
/// Nothing is rendered until the value is formatted. Unlike a rendered
/// `String`, a `Styled` can still be extended and restyled:
///
/// ```
/// use colorie::Style;
///
/// let red = Style::new().red();
/// let line = red.paint("Red on") + " white" + Style::new().on_white();
/// assert_eq!(line.to_string(), "\x1b[31;47mRed on white\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Styled<T> {
    text: T,
    style: Style,
}

impl<T> Styled<T> {
    pub fn new(text: T, style: Style) -> Self {
        Self { text, style }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// The wrapped value, without escape sequences.
    pub fn unstyled(&self) -> &T {
        &self.text
    }

    pub fn into_inner(self) -> T {
        self.text
    }

    /// The same text in another style.
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

impl<T: fmt::Display> fmt::Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.style.prefix(), self.text, self.style.suffix())
    }
}

/// Appends text, keeping the style.
impl<T: fmt::Display> Add<&str> for Styled<T> {
    type Output = Styled<String>;

    fn add(self, rhs: &str) -> Styled<String> {
        Styled::new(format!("{}{rhs}", self.text), self.style)
    }
}

impl<T: fmt::Display> Add<String> for Styled<T> {
    type Output = Styled<String>;

    fn add(self, rhs: String) -> Styled<String> {
        self + rhs.as_str()
    }
}

/// Prepends text, keeping the style.
impl<T: fmt::Display> Add<Styled<T>> for &str {
    type Output = Styled<String>;

    fn add(self, rhs: Styled<T>) -> Styled<String> {
        Styled::new(format!("{self}{}", rhs.text), rhs.style)
    }
}

/// Restyles the text with `rhs` combined on top of the current style.
impl<T> Add<Style> for Styled<T> {
    type Output = Styled<T>;

    fn add(self, rhs: Style) -> Styled<T> {
        let style = self.style.combine(rhs);
        self.with_style(style)
    }
}

/// Restyles the text with the current style combined on top of `self`.
impl<T> Add<Styled<T>> for Style {
    type Output = Styled<T>;

    fn add(self, rhs: Styled<T>) -> Styled<T> {
        let style = self.combine(rhs.style);
        rhs.with_style(style)
    }
}

/// Concatenates both texts under the combination of both styles.
impl<T: fmt::Display, U: fmt::Display> Add<Styled<U>> for Styled<T> {
    type Output = Styled<String>;

    fn add(self, rhs: Styled<U>) -> Styled<String> {
        Styled::new(
            format!("{}{}", self.text, rhs.text),
            self.style.combine(rhs.style),
        )
    }
}
