use crate::*;

/// Decodes a wire code into its display code.
///
/// The format is picked by [`Format::of`] from the value alone. Every wire code decodes to *something*,
/// but only wire codes produced by this crate are guaranteed to round-trip.
///
/// # Examples
///
/// ```
/// let wire = gamecode::to_wire_code("CODE");
/// assert_eq!(gamecode::to_display_code(wire), "CODE");
/// ```
pub fn to_display_code(wire: i32) -> String {
    match Format::of(wire) {
        Format::Legacy => decode_v1(wire),
        Format::Compact => decode_v2(wire),
    }
}

/// Decodes a [legacy](Format::Legacy) wire code by reading its little-endian bytes as text.
///
/// Bytes that aren't valid UTF-8 come out as `U+FFFD`, so the result is only a valid display code when the
/// wire code came from [`encode_v1`].
pub fn decode_v1(wire: i32) -> String {
    String::from_utf8_lossy(&wire.to_le_bytes()).into_owned()
}

/// Decodes a [compact](Format::Compact) wire code into 6 letters.
///
/// Bit 31 and bit 30 are ignored, and every base-26 digit is reduced modulo 26, so any value decodes.
pub fn decode_v2(wire: i32) -> String {
    let wire = wire as u32;
    let low = wire & LOW_MASK;
    let high = (wire >> HIGH_SHIFT) & HIGH_FIELD;

    [low, low / 26, high, high / 26, high / 676, high / 17_576]
        .map(alphabet::letter)
        .into_iter()
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn format_boundary() {
        // -1 is legacy: four 0xFF bytes, none of which are valid UTF-8
        assert_eq!(to_display_code(-1), "\u{FFFD}".repeat(4));
        // -2 is compact
        assert_eq!(to_display_code(-2).len(), 6);
        assert_eq!(to_display_code(-2), decode_v2(-2));
        assert_eq!(to_display_code(i32::MIN), "QQQQQQ");
        assert_eq!(to_display_code(0), "\0\0\0\0");
    }

    #[test]
    fn legacy() {
        let wire = 0x4544_4F43; // "CODE", little-endian
        assert_eq!(to_display_code(wire), "CODE");
        assert_eq!(decode_v1(wire), "CODE");
    }

    #[test]
    fn compact_known() {
        assert_eq!(decode_v2(0x8000_0000u32 as i32), "QQQQQQ");
        assert_eq!(decode_v2(0x8000_0001u32 as i32), "WQQQQQ");
        assert_eq!(decode_v2((0x8000_0000u32 | 1 << 10) as i32), "QQWQQQ");
    }

    #[test]
    fn compact_total() {
        let test = |wire: u32| {
            let decoded = decode_v2(wire as i32);
            assert_eq!(decoded.len(), 6, "{wire:#x}");
            assert!(decoded.bytes().all(|b| b.is_ascii_uppercase()), "{wire:#x}");
        };
        // bit patterns the encoder never produces: bit 30 set, low field above 675, high field overflow
        test(0xFFFF_FFFF);
        test(0xFFFF_FFFE);
        test(0xC000_0000);
        test(0x8000_03FF);
        test(0xBFFF_FFFF);
    }

    #[test]
    fn compact_ignores_bit_30() {
        let wire = to_wire_code("REDSUS") as u32;
        assert_eq!(decode_v2((wire | 0x4000_0000) as i32), "REDSUS");
    }
}
