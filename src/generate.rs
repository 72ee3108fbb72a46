use rand::{rngs::OsRng, CryptoRng, RngCore};
use thiserror::Error;
use crate::{alphabet, to_wire_code, Format};

/// Error type for asking the generator for a code length that has no format.
#[derive(Error, Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[error("Generated game codes must be 4 or 6 letters long, not {0}")]
pub struct InvalidLength(pub usize);

/// Generates a fresh wire code of `len` letters using the operating system's entropy source.
///
/// # Examples
///
/// ```
/// let wire = gamecode::generate(6)?;
/// let display = gamecode::to_display_code(wire);
///
/// assert_eq!(display.len(), 6);
/// assert_eq!(gamecode::to_wire_code(&display), wire);
/// # Ok::<(), gamecode::InvalidLength>(())
/// ```
pub fn generate(len: usize) -> Result<i32, InvalidLength> {
    generate_with(&mut OsRng, len)
}

/// Generates a fresh wire code of `len` letters using the given random source.
pub fn generate_with<R>(rng: &mut R, len: usize) -> Result<i32, InvalidLength>
where
    R: RngCore + CryptoRng,
{
    let format = Format::from_len(len).ok_or(InvalidLength(len))?;
    Ok(mint(rng, format))
}

/// Draws one random byte per letter and encodes the resulting code.
pub(crate) fn mint<R>(rng: &mut R, format: Format) -> i32
where
    R: RngCore + CryptoRng,
{
    let mut buffer = [0; 6];
    let bytes = &mut buffer[..format.len()];
    rng.fill_bytes(bytes);

    // the byte is reduced to a digit, which is put through the reverse table before being turned into a
    // letter by the forward one. the two lookups cancel out: byte b becomes 'A' + b % 26
    let code: String = bytes
        .iter()
        .map(|&byte| alphabet::LETTER_TO_DIGIT[usize::from(byte % 26)])
        .map(|digit| char::from(alphabet::letter(digit.into())))
        .collect();
    let wire = to_wire_code(&code);

    tracing::trace!(%code, wire, "generated game code");
    wire
}
