//! This is a library for styling text on ANSI terminals with reusable,
//! composable styles: red bold text, blue on white underlined text, and so on.
//!
//! ## Basic usage
//!
//! There are three kinds of building blocks: the vocabulary types
//! [`Color`], [`Highlight`] and [`Attribute`], the [`Style`] that collects
//! them, and the [`Styled`] value that pairs some text with a style.
//!
//! To style some text, build a [`Style`] and call [`apply`](Style::apply) on
//! it, passing anything that implements [`Display`](std::fmt::Display):
//!
//! ```
//! use colorie::Style;
//!
//! let red = Style::new().red();
//! assert_eq!(red.apply("a red string"), "\x1b[31ma red string\x1b[0m");
//! assert_eq!(red.apply(42), "\x1b[31m42\x1b[0m");
//! ```
//!
//! The `+` operator does the same, with the text on either side:
//!
//! ```
//! use colorie::Style;
//!
//! let red = Style::new().red();
//! assert_eq!(red + "Hi", "Hi" + red);
//! ```
//!
//! ## Styles from names
//!
//! When styles come from configuration or the command line, build them from
//! identifiers with [`Style::from_names`]. Every identifier is checked against
//! the closed [vocabulary](vocab) right away, so a typo fails here rather than
//! silently rendering unstyled text later:
//!
//! ```
//! use colorie::{Namespace, Style};
//!
//! let style = Style::from_names(Some("red"), Some("on_white"), ["bold", "blink"]).unwrap();
//! assert_eq!(style.apply("Hi"), "\x1b[31;47;1;5mHi\x1b[0m");
//!
//! let err = Style::from_names(Some("red"), None, ["bold", "blnk"]).unwrap_err();
//! assert_eq!(err.namespace(), Namespace::Attribute);
//! assert_eq!(err.identifier(), "blnk");
//! ```
//!
//! The identifiers of each namespace are available through
//! [`vocab::members`], e.g. to list the choices of a command-line flag.
//!
//! ## Combining styles
//!
//! Adding two styles gives a new style: the right-hand color and highlight
//! win where they are set, and the attributes of both are kept.
//!
//! ```
//! use colorie::Style;
//!
//! let emphasis = Style::new().bold();
//! let error = Style::new().red();
//! let on_white = Style::new().on_white();
//!
//! let loud_error = emphasis + error + on_white;
//! assert_eq!(loud_error, Style::new().red().on_white().bold());
//! ```
//!
//! ## Escape sequences
//!
//! A style renders as `ESC[<codes>m<text>ESC[0m`, the codes joined by `;` in
//! the order color, highlight, attributes. A style with nothing set renders
//! text verbatim. See [`ansi`] for the pieces.

#![crate_name = "colorie"]
#![crate_type = "rlib"]
#![warn(missing_copy_implementations)]
#![warn(trivial_casts, trivial_numeric_casts)]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// The escape sequence template.
pub mod ansi;
pub use ansi::{Prefix, Suffix, RESET};

pub mod vocab;
pub use vocab::{Attribute, Color, Highlight, Namespace};

mod error;
pub use error::UnknownIdentifierError;

mod style;
pub use style::{Attributes, Style};

/// Text paired with a style, rendered on display.
mod display;
pub use display::Styled;

mod ops;
