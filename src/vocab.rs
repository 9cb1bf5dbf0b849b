//! The closed vocabulary of style identifiers.
//!
//! Every identifier belongs to exactly one [`Namespace`] and maps to one SGR
//! code:
//!
//! | namespace   | identifiers                                   | codes            |
//! |-------------|-----------------------------------------------|------------------|
//! | `color`     | `grey red green yellow blue magenta cyan white` | `30..=37`      |
//! | `highlight` | `on_grey` … `on_white`                        | `40..=47`        |
//! | `attribute` | `bold dark underline blink reverse concealed` | `1 2 4 5 7 8`    |
//!
//! Identifiers are case-sensitive.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownIdentifierError;

/// One of the three identifier namespaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Color,
    Highlight,
    Attribute,
}

impl Namespace {
    /// All namespaces, in rendering order.
    pub const ALL: [Namespace; 3] = [Namespace::Color, Namespace::Highlight, Namespace::Attribute];

    /// The identifiers of this namespace, in canonical order.
    pub const fn members(self) -> &'static [&'static str] {
        match self {
            Namespace::Color => Color::NAMES,
            Namespace::Highlight => Highlight::NAMES,
            Namespace::Attribute => Attribute::NAMES,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Namespace::Color => "color",
            Namespace::Highlight => "highlight",
            Namespace::Attribute => "attribute",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the SGR code of `identifier` within `namespace`.
///
/// ```
/// use colorie::vocab::{lookup, Namespace};
///
/// assert_eq!(lookup(Namespace::Color, "red").unwrap(), 31);
/// assert_eq!(lookup(Namespace::Highlight, "on_cyan").unwrap(), 46);
/// assert!(lookup(Namespace::Attribute, "italic").is_err());
/// ```
pub fn lookup(namespace: Namespace, identifier: &str) -> Result<u8, UnknownIdentifierError> {
    let code = match namespace {
        Namespace::Color => Color::from_name(identifier).map(Color::code),
        Namespace::Highlight => Highlight::from_name(identifier).map(Highlight::code),
        Namespace::Attribute => Attribute::from_name(identifier).map(Attribute::code),
    };
    code.ok_or_else(|| reject(namespace, identifier))
}

/// The identifiers of `namespace`, for help text and flag choices.
pub const fn members(namespace: Namespace) -> &'static [&'static str] {
    namespace.members()
}

fn reject(namespace: Namespace, identifier: &str) -> UnknownIdentifierError {
    tracing::debug!(%namespace, identifier, "rejected style identifier");
    UnknownIdentifierError::new(namespace, identifier)
}

/// Declares one namespace: the enum, its code table, its string forms, and
/// the matching builder methods on [`Style`](crate::Style).
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $ty:ident in $ns:ident, set with $setter:ident {
            $($variant:ident = $name:literal => $code:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "derive_serde_style",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub enum $ty {
            $(
                #[doc = concat!("`", $name, "`, code ", stringify!($code), ".")]
                #[cfg_attr(feature = "derive_serde_style", serde(rename = $name))]
                $variant,
            )*
        }

        impl $ty {
            /// Every member, in canonical order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),*];

            /// Every identifier, in canonical order.
            pub const NAMES: &'static [&'static str] = &[$($name),*];

            pub const NAMESPACE: Namespace = Namespace::$ns;

            /// The SGR code.
            pub const fn code(self) -> u8 {
                match self {
                    $($ty::$variant => $code,)*
                }
            }

            /// The identifier.
            pub const fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some($ty::$variant),)*
                    _ => None,
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownIdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| reject(Namespace::$ns, s))
            }
        }

        paste::paste! {
            impl crate::Style {
                $(
                    #[doc = "Returns this style with `" $name "` added."]
                    #[must_use]
                    pub fn [<$variant:snake>](self) -> crate::Style {
                        self.$setter($ty::$variant)
                    }
                )*
            }
        }
    };
}

vocabulary! {
    /// A foreground color.
    Color in Color, set with fg {
        Grey = "grey" => 30,
        Red = "red" => 31,
        Green = "green" => 32,
        Yellow = "yellow" => 33,
        Blue = "blue" => 34,
        Magenta = "magenta" => 35,
        Cyan = "cyan" => 36,
        White = "white" => 37,
    }
}

vocabulary! {
    /// A background color.
    Highlight in Highlight, set with on {
        OnGrey = "on_grey" => 40,
        OnRed = "on_red" => 41,
        OnGreen = "on_green" => 42,
        OnYellow = "on_yellow" => 43,
        OnBlue = "on_blue" => 44,
        OnMagenta = "on_magenta" => 45,
        OnCyan = "on_cyan" => 46,
        OnWhite = "on_white" => 47,
    }
}

vocabulary! {
    /// A text attribute.
    ///
    /// Support varies by terminal: `dark` and `concealed` are missing from
    /// many emulators and `blink` is often disabled. The codes are emitted
    /// regardless.
    Attribute in Attribute, set with attr {
        Bold = "bold" => 1,
        Dark = "dark" => 2,
        Underline = "underline" => 4,
        Blink = "blink" => 5,
        Reverse = "reverse" => 7,
        Concealed = "concealed" => 8,
    }
}

impl Color {
    /// The highlight with the same hue.
    pub const fn on(self) -> Highlight {
        match self {
            Color::Grey => Highlight::OnGrey,
            Color::Red => Highlight::OnRed,
            Color::Green => Highlight::OnGreen,
            Color::Yellow => Highlight::OnYellow,
            Color::Blue => Highlight::OnBlue,
            Color::Magenta => Highlight::OnMagenta,
            Color::Cyan => Highlight::OnCyan,
            Color::White => Highlight::OnWhite,
        }
    }
}

impl From<Color> for Highlight {
    fn from(color: Color) -> Self {
        color.on()
    }
}
