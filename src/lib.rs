//! Short letter codes for multiplayer sessions!
//!
//! A session is identified on the wire by a 32-bit signed integer (the _wire code_) and shown to players as
//! a short string of uppercase letters (the _display code_), such as `REDSUS`. This crate converts between
//! the two and mints fresh random codes.
//!
//! ```
//! let wire = gamecode::to_wire_code("REDSUS");
//! assert_eq!(gamecode::to_display_code(wire), "REDSUS");
//!
//! let fresh = gamecode::generate(6)?;
//! assert_eq!(gamecode::to_display_code(fresh).len(), 6);
//! # Ok::<(), gamecode::InvalidLength>(())
//! ```
//!
//!
//! # Formats
//!
//! Two incompatible formats share the wire code's 32 bits, and are told apart by value alone (see
//! [`Format::of`]):
//!
//! - [Legacy](Format::Legacy), any wire code `>= -1`: 4 letters, stored as their ascii bytes in
//! little-endian order. `CODE` is `'C' | 'O' << 8 | 'D' << 16 | 'E' << 24`.
//! - [Compact](Format::Compact), any wire code `< -1`: 6 letters. Each letter is mapped to a digit through
//! a fixed substitution alphabet, the first two digits are read as a base-26 number in the low 10 bits and
//! the last four as a base-26 number in bits 10 to 29. Bit 31 is always set, which makes the wire code
//! negative, and bit 30 is always clear.
//!
//! Encoding is case-insensitive and only accepts ascii letters. Invalid display codes encode to
//! [`SENTINEL`] (`-1`) with [`to_wire_code`], or to an [`InvalidCode`] error with [`try_to_wire_code`].
//!
//! Decoding never fails: every 32-bit value maps to some string. Only wire codes produced by this crate
//! are guaranteed to round-trip, though.
//!
//!
//! # Serde
//!
//! Enable the `serde` feature to store wire codes as display codes:
//! ```text
//! #[derive(Serialize, Deserialize)]
//! struct Lobby {
//!     #[serde(with = "gamecode")]
//!     code: i32,
//!     host: String,
//! }
//! ```
//!
//! [`GameCode`] also implements `Serialize` and `Deserialize` with the feature enabled.

mod alphabet;
mod encode;
mod decode;
mod generate;
mod serde;

use std::{fmt, str::FromStr};

pub use alphabet::{DIGIT_TO_LETTER, LETTER_TO_DIGIT};
pub use encode::*;
pub use decode::*;
pub use generate::*;

#[cfg(feature = "serde")]
pub use self::serde::{deserialize, serialize};

/// Set on every compact wire code.
const COMPACT_MARKER: u32 = 0x8000_0000;
/// Bits holding the first two letters of a compact code.
const LOW_MASK: u32 = 0x3FF;
/// Width of the field holding the last four letters of a compact code.
const HIGH_FIELD: u32 = 0xF_FFFF;
const HIGH_SHIFT: u32 = 10;
const HIGH_MASK: u32 = HIGH_FIELD << HIGH_SHIFT;

/// The two layouts a wire code can have.
///
/// Default: [`Format::Compact`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Format {
    /// 4 letters packed as ascii bytes. Wire codes `>= -1`.
    Legacy,
    /// 6 letters packed as two base-26 numbers. Wire codes `< -1`.
    Compact,
}

impl Format {
    /// Returns the format a wire code is decoded with.
    ///
    /// This is the only place the range rule lives: anything below `-1` is compact, everything else
    /// (including `-1` itself) is legacy.
    ///
    /// ```
    /// use gamecode::Format;
    ///
    /// assert_eq!(Format::of(-1), Format::Legacy);
    /// assert_eq!(Format::of(-2), Format::Compact);
    /// ```
    pub const fn of(wire: i32) -> Format {
        if wire < -1 {
            Format::Compact
        } else {
            Format::Legacy
        }
    }

    /// Returns the format of display codes with `len` letters.
    pub const fn from_len(len: usize) -> Option<Format> {
        match len {
            4 => Some(Format::Legacy),
            6 => Some(Format::Compact),
            _ => None,
        }
    }

    /// Returns the number of letters in display codes of this format.
    pub const fn len(self) -> usize {
        match self {
            Format::Legacy => 4,
            Format::Compact => 6,
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::Compact
    }
}

/// A wire code that displays as its display code.
///
/// ```
/// use gamecode::{Format, GameCode};
///
/// let code: GameCode = "redsus".parse()?;
/// assert_eq!(code.to_string(), "REDSUS");
/// assert_eq!(code.format(), Format::Compact);
/// assert_eq!(i32::from(code), gamecode::to_wire_code("REDSUS"));
/// # Ok::<(), gamecode::InvalidCode>(())
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GameCode(pub i32);

impl GameCode {
    /// Mints a fresh code of the given format using the operating system's entropy source.
    pub fn generate(format: Format) -> GameCode {
        GameCode(generate::mint(&mut rand::rngs::OsRng, format))
    }

    /// Returns the format this code is decoded with.
    pub const fn format(self) -> Format {
        Format::of(self.0)
    }
}

impl From<i32> for GameCode {
    fn from(wire: i32) -> Self {
        GameCode(wire)
    }
}

impl From<GameCode> for i32 {
    fn from(code: GameCode) -> Self {
        code.0
    }
}

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_display_code(self.0))
    }
}

impl FromStr for GameCode {
    type Err = InvalidCode;

    fn from_str(code: &str) -> Result<Self> {
        try_to_wire_code(code).map(GameCode)
    }
}
