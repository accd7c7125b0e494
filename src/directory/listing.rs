//! Rendered address book listings.

use std::fmt;
use std::io::{self, Write};

/// Snapshot of the address book as display lines.
///
/// Building a listing does no I/O; the caller chooses where it goes with
/// [`Listing::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    Entries(Vec<String>),
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The display lines, empty for [`Listing::Empty`].
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Entries(lines) => lines,
        }
    }

    /// Write the listing to `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => writeln!(f, "Address Book is empty!"),
            Self::Entries(lines) => {
                writeln!(f, "Address Book Contacts:")?;
                for line in lines {
                    writeln!(f, "{}", line)?;
                }
                Ok(())
            }
        }
    }
}
