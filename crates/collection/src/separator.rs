//! Separator symbols for value joining
//!
//! Closed set of glyphs consumed by [`OrderedMap::join`](crate::OrderedMap::join).
//! The membership mirrors the configuration table this library ships with:
//! list punctuation, whitespace, a handful of currency glyphs, and the
//! basic arithmetic symbols.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Join separator symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// ` `
    Space,
    /// `\t`
    Tab,
    /// `\n`
    Newline,
    /// `\r`
    CarriageReturn,
    /// `:`
    Colon,
    /// `|`
    Pipe,
    /// `"`
    DoubleQuote,
    /// `'`
    SingleQuote,
    /// `` ` ``
    Backtick,
    /// `#`
    Hash,
    /// `&`
    Ampersand,
    /// `%`
    Percent,
    /// `!`
    Exclamation,
    /// `~`
    Tilde,
    /// `?`
    Question,
    /// NUL byte
    NullByte,
    /// `/`
    ForwardSlash,
    /// `\`
    BackwardSlash,
    /// `@`
    At,
    /// `$`
    Dollar,
    /// `^`
    Caret,
    /// `৳`
    Taka,
    /// `€`
    Euro,
    /// `£`
    Pound,
    /// `¥`
    Yen,
    /// `₨`
    PakistaniRupee,
    /// `₹`
    IndianRupee,
    /// `Rs`
    SriLankanRupee,
    /// `Nu`
    BhutaneseNgultrum,
    /// `Ks`
    MyanmarKyat,
    /// `₭`
    LaoKip,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `=`
    Equals,
}

impl Separator {
    /// The separator glyph
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Comma => ",",
            Separator::Semicolon => ";",
            Separator::Space => " ",
            Separator::Tab => "\t",
            Separator::Newline => "\n",
            Separator::CarriageReturn => "\r",
            Separator::Colon => ":",
            Separator::Pipe => "|",
            Separator::DoubleQuote => "\"",
            Separator::SingleQuote => "'",
            Separator::Backtick => "`",
            Separator::Hash => "#",
            Separator::Ampersand => "&",
            Separator::Percent => "%",
            Separator::Exclamation => "!",
            Separator::Tilde => "~",
            Separator::Question => "?",
            Separator::NullByte => "\0",
            Separator::ForwardSlash => "/",
            Separator::BackwardSlash => "\\",
            Separator::At => "@",
            Separator::Dollar => "$",
            Separator::Caret => "^",
            Separator::Taka => "৳",
            Separator::Euro => "€",
            Separator::Pound => "£",
            Separator::Yen => "¥",
            Separator::PakistaniRupee => "₨",
            Separator::IndianRupee => "₹",
            Separator::SriLankanRupee => "Rs",
            Separator::BhutaneseNgultrum => "Nu",
            Separator::MyanmarKyat => "Ks",
            Separator::LaoKip => "₭",
            Separator::Plus => "+",
            Separator::Minus => "-",
            Separator::Asterisk => "*",
            Separator::Equals => "=",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
