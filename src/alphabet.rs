//! The substitution alphabet used to obscure base-26 digits in compact codes and in generated codes.

/// Maps a base-26 digit to its letter.
pub const DIGIT_TO_LETTER: [u8; 26] = *b"QWXRTYLPESDFGHUJKZOCVBINMA";

/// Maps a letter (offset from `b'A'`) to its base-26 digit. Inverse of [`DIGIT_TO_LETTER`].
pub const LETTER_TO_DIGIT: [u8; 26] = [
    25, 21, 19, 10,  8, 11, 12, 13, 22, 15, 16,  6, 24,
    23, 18,  7,  0,  3,  9,  4, 14, 20,  1,  2,  5, 17,
];

/// Gets the letter of a digit. The digit is reduced modulo 26 first, so any value yields a letter.
pub const fn letter(digit: u32) -> u8 {
    DIGIT_TO_LETTER[(digit % 26) as usize]
}

/// Gets the digit of an uppercase ascii letter, or `None` for anything else.
pub const fn digit(letter: u8) -> Option<u8> {
    match letter {
        b'A'..=b'Z' => Some(LETTER_TO_DIGIT[(letter - b'A') as usize]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_inverse() {
        for d in 0..26 {
            let letter = DIGIT_TO_LETTER[d];
            assert_eq!(LETTER_TO_DIGIT[(letter - b'A') as usize] as usize, d, "{}", letter as char);
        }
        for (i, &d) in LETTER_TO_DIGIT.iter().enumerate() {
            assert_eq!(DIGIT_TO_LETTER[d as usize], b'A' + i as u8);
        }
    }

    #[test]
    fn forward_table_is_permutation() {
        let mut sorted = DIGIT_TO_LETTER;
        sorted.sort_unstable();
        assert_eq!(&sorted, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn lookups() {
        assert_eq!(letter(0), b'Q');
        assert_eq!(letter(25), b'A');
        assert_eq!(letter(26), b'Q');
        assert_eq!(digit(b'Q'), Some(0));
        assert_eq!(digit(b'A'), Some(25));
        assert_eq!(digit(b'a'), None);
        assert_eq!(digit(b'@'), None);
        assert_eq!(digit(b'['), None);
    }
}
