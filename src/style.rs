use std::fmt;

use bitflags::bitflags;

use crate::ansi::{Prefix, Suffix};
use crate::display::Styled;
use crate::error::UnknownIdentifierError;
use crate::vocab::{Attribute, Color, Highlight};

bitflags! {
    /// Membership bits for [`Attributes`], one per [`Attribute`] variant.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    struct AttributeFlags: u8 {
        const BOLD = 1 << 0;
        const DARK = 1 << 1;
        const UNDERLINE = 1 << 2;
        const BLINK = 1 << 3;
        const REVERSE = 1 << 4;
        const CONCEALED = 1 << 5;
    }
}

impl From<Attribute> for AttributeFlags {
    fn from(attribute: Attribute) -> Self {
        match attribute {
            Attribute::Bold => AttributeFlags::BOLD,
            Attribute::Dark => AttributeFlags::DARK,
            Attribute::Underline => AttributeFlags::UNDERLINE,
            Attribute::Blink => AttributeFlags::BLINK,
            Attribute::Reverse => AttributeFlags::REVERSE,
            Attribute::Concealed => AttributeFlags::CONCEALED,
        }
    }
}

const ATTRIBUTE_COUNT: usize = 6;

/// A duplicate-free set of [`Attribute`]s that remembers insertion order.
///
/// The order is the order in which the attribute codes are emitted.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Attributes {
    order: [Option<Attribute>; ATTRIBUTE_COUNT],
    flags: AttributeFlags,
}

impl Attributes {
    pub const fn new() -> Self {
        Self {
            order: [None; ATTRIBUTE_COUNT],
            flags: AttributeFlags::empty(),
        }
    }

    /// Adds `attribute` after the existing ones. Returns `false` if it was
    /// already present, in which case its position is unchanged.
    pub fn insert(&mut self, attribute: Attribute) -> bool {
        let flag = AttributeFlags::from(attribute);
        if self.flags.contains(flag) {
            return false;
        }
        // Each variant occupies at most one slot, so a free one exists.
        if let Some(slot) = self.order.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(attribute);
            self.flags.insert(flag);
        }
        true
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.flags.contains(attribute.into())
    }

    pub fn len(&self) -> usize {
        self.flags.bits().count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.order.iter().flatten().copied()
    }

    /// `self` followed by the members of `other` not already present.
    #[must_use]
    pub fn union(mut self, other: Attributes) -> Attributes {
        self.extend(other);
        self
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Extend<Attribute> for Attributes {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute);
        }
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        attributes.extend(iter);
        attributes
    }
}

impl IntoIterator for Attributes {
    type Item = Attribute;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<Attribute>, ATTRIBUTE_COUNT>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter().flatten()
    }
}

/// A reusable styling: at most one foreground color, at most one highlight,
/// and any number of text attributes.
///
/// Styles are built either from typed values
///
/// ```
/// use colorie::{Attribute, Color, Style};
///
/// let warning = Style::new().fg(Color::Yellow).attr(Attribute::Bold);
/// assert_eq!(warning, Style::new().yellow().bold());
/// ```
///
/// or from identifiers, which are validated on the spot:
///
/// ```
/// use colorie::Style;
///
/// let warning = Style::from_names(Some("yellow"), None, ["bold"]).unwrap();
/// assert_eq!(warning.apply("careful"), "\x1b[33;1mcareful\x1b[0m");
///
/// assert!(Style::from_names(Some("yelow"), None, None::<&str>).is_err());
/// ```
///
/// A `Style` is `Copy`; combining two styles yields a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "derive_serde_style",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "StyleRepr", into = "StyleRepr")
)]
pub struct Style {
    color: Option<Color>,
    highlight: Option<Highlight>,
    attributes: Attributes,
}

impl Style {
    /// A style with nothing set. Applying it leaves text untouched.
    pub const fn new() -> Self {
        Self {
            color: None,
            highlight: None,
            attributes: Attributes::new(),
        }
    }

    /// Builds a style from identifiers.
    ///
    /// `attributes` takes any number of attribute identifiers: an array, a
    /// `Vec`, or an `Option` for a single one. Duplicates collapse, keeping
    /// the first position. Nothing is built unless every identifier is valid.
    pub fn from_names<I>(
        color: Option<&str>,
        highlight: Option<&str>,
        attributes: I,
    ) -> Result<Self, UnknownIdentifierError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let color = color.map(str::parse::<Color>).transpose()?;
        let highlight = highlight.map(str::parse::<Highlight>).transpose()?;
        let attributes = attributes
            .into_iter()
            .map(|name| name.as_ref().parse::<Attribute>())
            .collect::<Result<Attributes, _>>()?;

        tracing::trace!(?color, ?highlight, ?attributes, "built style from names");
        Ok(Self {
            color,
            highlight,
            attributes,
        })
    }

    /// Returns this style with its foreground color replaced.
    #[must_use]
    pub const fn fg(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Returns this style with its highlight replaced.
    #[must_use]
    pub const fn on(self, highlight: Highlight) -> Self {
        Self {
            highlight: Some(highlight),
            ..self
        }
    }

    /// Returns this style with `attribute` appended, unless already present.
    #[must_use]
    pub fn attr(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Whether applying this style leaves text untouched.
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.highlight.is_none() && self.attributes.is_empty()
    }

    /// Applies `self`, then `other` on top.
    ///
    /// `other`'s color and highlight win where set; attributes are the union,
    /// `self`'s first.
    ///
    /// ```
    /// use colorie::Style;
    ///
    /// let base = Style::new().red().bold();
    /// let alert = base.combine(Style::new().white().on_red().underline());
    /// assert_eq!(alert, Style::new().white().on_red().bold().underline());
    /// ```
    #[must_use]
    pub fn combine(self, other: Style) -> Style {
        Style {
            color: other.color.or(self.color),
            highlight: other.highlight.or(self.highlight),
            attributes: self.attributes.union(other.attributes),
        }
    }

    /// The SGR codes of this style: color, highlight, then the attributes in
    /// insertion order.
    pub fn codes(&self) -> impl Iterator<Item = u8> {
        let attributes = self.attributes;
        self.color
            .map(Color::code)
            .into_iter()
            .chain(self.highlight.map(Highlight::code))
            .chain(attributes.into_iter().map(Attribute::code))
    }

    /// Renders `text` wrapped in this style's escape sequence and a reset.
    ///
    /// A plain style returns the text verbatim.
    pub fn apply<T: fmt::Display>(&self, text: T) -> String {
        self.paint(text).to_string()
    }

    /// Pairs `text` with this style without rendering it yet.
    pub fn paint<T>(self, text: T) -> Styled<T> {
        Styled::new(text, self)
    }

    /// The opening escape sequence of this style.
    pub fn prefix(self) -> Prefix {
        Prefix(self)
    }

    /// The sequence that resets this style.
    pub fn suffix(self) -> Suffix {
        Suffix(self)
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Style::new().fg(color)
    }
}

impl From<Highlight> for Style {
    fn from(highlight: Highlight) -> Self {
        Style::new().on(highlight)
    }
}

impl From<Attribute> for Style {
    fn from(attribute: Attribute) -> Self {
        Style::new().attr(attribute)
    }
}

/// Writes the opening sequence only, so that following text inherits the
/// style until an explicit reset.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.prefix(), f)
    }
}

#[cfg(feature = "derive_serde_style")]
#[derive(serde::Serialize, serde::Deserialize)]
struct StyleRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    highlight: Option<Highlight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<Attribute>,
}

#[cfg(feature = "derive_serde_style")]
impl From<StyleRepr> for Style {
    fn from(repr: StyleRepr) -> Self {
        Style {
            color: repr.color,
            highlight: repr.highlight,
            attributes: repr.attributes.into_iter().collect(),
        }
    }
}

#[cfg(feature = "derive_serde_style")]
impl From<Style> for StyleRepr {
    fn from(style: Style) -> Self {
        StyleRepr {
            color: style.color,
            highlight: style.highlight,
            attributes: style.attributes.into_iter().collect(),
        }
    }
}
