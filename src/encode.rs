use thiserror::Error;
use crate::*;

/// Error type for display codes that cannot be turned into a wire code.
#[derive(Error, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum InvalidCode {
    /// The code was neither 4 nor 6 letters long.
    #[error("Game code must be 4 or 6 letters long")]
    Length,

    /// The code contained something other than an ascii letter.
    #[error("Game code may only contain letters")]
    Character,
}

/// Result of encoding a display code.
pub type Result<T> = std::result::Result<T, InvalidCode>;

/// Returned by [`to_wire_code`] for display codes that can't be encoded.
///
/// Note that `-1` is also the legacy wire code of the bytes `[0xFF; 4]`, which no letter code produces.
pub const SENTINEL: i32 = -1;

/// Encodes a display code as a wire code, returning [`SENTINEL`] if the code is invalid.
///
/// Case is ignored. 4-letter codes use the [legacy](Format::Legacy) format, 6-letter codes the
/// [compact](Format::Compact) one.
///
/// # Examples
///
/// ```
/// let wire = gamecode::to_wire_code("REDSUS");
/// assert!(wire < -1);
/// assert_eq!(gamecode::to_display_code(wire), "REDSUS");
///
/// assert_eq!(gamecode::to_wire_code("AB3D"), gamecode::SENTINEL);
/// ```
pub fn to_wire_code(code: impl AsRef<str>) -> i32 {
    let code = code.as_ref();
    try_to_wire_code(code).unwrap_or_else(|error| {
        tracing::trace!(code, %error, "rejected game code");
        SENTINEL
    })
}

/// Encodes a display code as a wire code, reporting why the code is invalid if it is.
///
/// # Examples
///
/// ```
/// use gamecode::InvalidCode;
///
/// assert_eq!(gamecode::try_to_wire_code("code"), gamecode::try_to_wire_code("CODE"));
/// assert_eq!(gamecode::try_to_wire_code("AB"), Err(InvalidCode::Length));
/// assert_eq!(gamecode::try_to_wire_code("AB3D"), Err(InvalidCode::Character));
/// ```
pub fn try_to_wire_code(code: impl AsRef<str>) -> Result<i32> {
    // factored out non-generic code to reduce code size
    to_wire_code_mono(code.as_ref())
}

/// Monomorphised encode implementation.
#[inline(never)]
fn to_wire_code_mono(code: &str) -> Result<i32> {
    let bytes = code.as_bytes();

    // characters are checked before length, so e.g. "A1" is a character error
    if !bytes.iter().all(u8::is_ascii_alphabetic) {
        return Err(InvalidCode::Character);
    }

    // both formats encode the uppercase form
    let mut buffer = [0; 6];
    let upper = buffer
        .get_mut(..bytes.len())
        .ok_or(InvalidCode::Length)?;
    upper.copy_from_slice(bytes);
    upper.make_ascii_uppercase();

    match *upper {
        [a, b, c, d] => Ok(encode_v1([a, b, c, d])),
        [a, b, c, d, e, f] => encode_v2([a, b, c, d, e, f]),
        _ => Err(InvalidCode::Length),
    }
}

/// Encodes 4 characters in the [legacy](Format::Legacy) format.
///
/// The character bytes are packed little-endian, first character lowest. No substitution is done and the
/// bytes are not validated; [`try_to_wire_code`] is the checked entry point.
///
/// ```
/// let wire = gamecode::encode_v1(*b"CODE");
/// assert_eq!(wire, i32::from(b'C') | i32::from(b'O') << 8 | i32::from(b'D') << 16 | i32::from(b'E') << 24);
/// ```
pub const fn encode_v1(code: [u8; 4]) -> i32 {
    i32::from_le_bytes(code)
}

/// Encodes 6 uppercase letters in the [compact](Format::Compact) format.
///
/// The first two letters become the low 10 bits, the last four the 20 bits above them, each as a
/// little-endian base-26 number over the substitution alphabet. Bit 31 is set as the format marker and bit
/// 30 is always clear.
pub fn encode_v2(code: [u8; 6]) -> Result<i32> {
    let mut digits = [0u32; 6];
    for (digit, letter) in digits.iter_mut().zip(code) {
        *digit = alphabet::digit(letter)
            .ok_or(InvalidCode::Character)?
            .into();
    }
    let [d0, d1, d2, d3, d4, d5] = digits;

    let low = (d0 + 26 * d1) & LOW_MASK;
    let high = d2 + 26 * (d3 + 26 * (d4 + 26 * d5));
    let packed = low | ((high << HIGH_SHIFT) & HIGH_MASK) | COMPACT_MARKER;

    Ok(packed as i32)
}
