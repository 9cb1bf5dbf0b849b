use std::fmt;

use itertools::Itertools;

use crate::style::Style;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Separates SGR codes inside one sequence.
pub const SEPARATOR: &str = ";";

/// Terminates an SGR sequence.
pub const TERMINATOR: char = 'm';

/// Code that clears every color and attribute.
pub const RESET_CODE: u8 = 0;

/// The full reset sequence, `ESC[0m`.
pub const RESET: &str = "\x1b[0m";

/// The escape sequence that turns a style on, e.g. `ESC[31;1m`.
///
/// Writes nothing for a plain style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefix(pub(crate) Style);

/// The reset that turns a style off again.
///
/// Writes nothing for a plain style, since nothing was turned on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suffix(pub(crate) Style);

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_plain() {
            return Ok(());
        }
        write!(f, "{CSI}{}{TERMINATOR}", self.0.codes().format(SEPARATOR))
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_plain() {
            return Ok(());
        }
        f.write_str(RESET)
    }
}
