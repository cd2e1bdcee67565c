//! Code 39 encoder.
//!
//! Each character is nine elements (five bars, four spaces) of which exactly
//! three are wide; wide elements are two modules, narrow elements one, with a
//! one-module gap between characters. `*` delimits the symbol internally and
//! never appears in the human-readable text. `option_2 == 1` appends a
//! Mod-43 check character.

use symcode_core::{BitMatrix, Encoded, Error, Warning, COLS_MAX};

/// Character set in Mod-43 value order; patterns use `1` for wide elements,
/// bars at even indices.
const TABLE: [(u8, &str); 43] = [
    (b'0', "000110100"),
    (b'1', "100100001"),
    (b'2', "001100001"),
    (b'3', "101100000"),
    (b'4', "000110001"),
    (b'5', "100110000"),
    (b'6', "001110000"),
    (b'7', "000100101"),
    (b'8', "100100100"),
    (b'9', "001100100"),
    (b'A', "100001001"),
    (b'B', "001001001"),
    (b'C', "101001000"),
    (b'D', "000011001"),
    (b'E', "100011000"),
    (b'F', "001011000"),
    (b'G', "000001101"),
    (b'H', "100001100"),
    (b'I', "001001100"),
    (b'J', "000011100"),
    (b'K', "100000011"),
    (b'L', "001000011"),
    (b'M', "101000010"),
    (b'N', "000010011"),
    (b'O', "100010010"),
    (b'P', "001010010"),
    (b'Q', "000000111"),
    (b'R', "100000110"),
    (b'S', "001000110"),
    (b'T', "000010110"),
    (b'U', "110000001"),
    (b'V', "011000001"),
    (b'W', "111000000"),
    (b'X', "010010001"),
    (b'Y', "110010000"),
    (b'Z', "011010000"),
    (b'-', "010000101"),
    (b'.', "110000100"),
    (b' ', "011000100"),
    (b'$', "010101000"),
    (b'/', "010100010"),
    (b'+', "010001010"),
    (b'%', "000101010"),
];

const DELIMITER: &str = "010010100";
/// Modules per character including the trailing gap.
const CHAR_MODULES: usize = 13;

fn value_of(ch: u8) -> Option<usize> {
    TABLE.iter().position(|&(c, _)| c == ch)
}

fn push_char(modules: &mut Vec<bool>, pattern: &str) {
    for (i, wide) in pattern.bytes().enumerate() {
        let bar = i % 2 == 0;
        let width = if wide == b'1' { 2 } else { 1 };
        for _ in 0..width {
            modules.push(bar);
        }
    }
    // inter-character gap
    modules.push(false);
}

/// Encode one Code 39 symbol. Lowercase letters are folded to uppercase;
/// anything outside the 43-character set is [`Error::InvalidData`].
pub fn encode(data: &[u8], option_2: i32) -> Result<Encoded, Error> {
    let (with_check, warning) = match option_2 {
        0 => (false, None),
        1 => (true, None),
        other => (
            false,
            Some(Warning::option_defaulted(format!(
                "option_2 value {other} out of range 0-1, check character disabled"
            ))),
        ),
    };

    if data.is_empty() {
        return Err(Error::InvalidData("input is empty".into()));
    }

    let mut values = Vec::with_capacity(data.len() + 1);
    let mut text = String::with_capacity(data.len() + 1);
    for (i, &raw) in data.iter().enumerate() {
        let ch = raw.to_ascii_uppercase();
        let value = value_of(ch).ok_or_else(|| {
            Error::InvalidData(format!(
                "character '{}' at position {i} is outside the Code 39 set",
                char::from(raw)
            ))
        })?;
        values.push(value);
        text.push(char::from(ch));
    }

    if with_check {
        let check = values.iter().sum::<usize>() % 43;
        values.push(check);
        text.push(char::from(TABLE[check].0));
    }

    // start + characters + stop, minus the gap after the stop character
    let width = CHAR_MODULES * (values.len() + 2) - 1;
    if width > COLS_MAX {
        return Err(Error::DataTooLong {
            length: width,
            max: COLS_MAX,
        });
    }

    let mut modules = Vec::with_capacity(width + 1);
    push_char(&mut modules, DELIMITER);
    for &v in &values {
        push_char(&mut modules, TABLE[v].1);
    }
    push_char(&mut modules, DELIMITER);
    modules.pop(); // no gap after the stop character

    let mut matrix = BitMatrix::new();
    matrix.push_row(modules)?;

    Ok(Encoded {
        matrix,
        row_height: Vec::new(),
        text,
        warnings: warning.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_has_nine_elements_three_wide() {
        for (ch, pattern) in TABLE.iter().chain(std::iter::once(&(b'*', DELIMITER))) {
            assert_eq!(pattern.len(), 9, "char {}", char::from(*ch));
            let wide = pattern.bytes().filter(|&b| b == b'1').count();
            assert_eq!(wide, 3, "char {}", char::from(*ch));
        }
    }

    #[test]
    fn width_matches_character_count() {
        let enc = encode(b"HELLO", 0).unwrap();
        assert_eq!(enc.matrix.width(), CHAR_MODULES * 7 - 1);
        assert_eq!(enc.text, "HELLO");
    }

    #[test]
    fn lowercase_is_folded() {
        let upper = encode(b"CODE39", 0).unwrap();
        let lower = encode(b"code39", 0).unwrap();
        assert_eq!(upper.matrix, lower.matrix);
        assert_eq!(lower.text, "CODE39");
    }

    #[test]
    fn mod43_check_character() {
        // Values of "12345": 1+2+3+4+5 = 15 -> 'F'.
        let enc = encode(b"12345", 1).unwrap();
        assert_eq!(enc.text, "12345F");
    }

    #[test]
    fn rejects_characters_outside_the_set() {
        let err = encode(b"AB@CD", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn rejects_oversized_symbol() {
        let data = vec![b'A'; 120];
        assert!(matches!(
            encode(&data, 0),
            Err(Error::DataTooLong { .. })
        ));
    }
}
