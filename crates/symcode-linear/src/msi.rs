//! MSI Plessey: the fully worked checksum-bearing numeric symbology.
//!
//! Structure of a symbol, in modules: start `110`, then one 12-module block
//! per digit (4 BCD bits, most significant first, `1` -> `110`, `0` ->
//! `100`), then stop `1001`. The default check policy appends one Mod-10
//! (Luhn) check digit; see [`CheckPolicy`].

use symcode_core::{BitMatrix, Encoded, Error, Warning, COLS_MAX};

const START: &str = "110";
const STOP: &str = "1001";
/// Modules contributed by one digit.
const DIGIT_MODULES: usize = 12;

/// Check-digit policy, selected by `option_2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckPolicy {
    /// Append one Mod-10 check digit (the default).
    #[default]
    Mod10,
    /// Encode the data as given, no check digit.
    None,
    /// Append two Mod-10 check digits, the second computed over the first.
    DoubleMod10,
    /// Treat the last input digit as a caller-supplied Mod-10 check digit
    /// and verify it.
    Verify,
}

impl CheckPolicy {
    /// Map `option_2` to a policy. Out-of-range values have a documented
    /// safe default and are coerced with a warning rather than rejected.
    pub fn from_option(option_2: i32) -> (Self, Option<Warning>) {
        match option_2 {
            0 => (CheckPolicy::Mod10, None),
            1 => (CheckPolicy::None, None),
            2 => (CheckPolicy::DoubleMod10, None),
            3 => (CheckPolicy::Verify, None),
            other => (
                CheckPolicy::Mod10,
                Some(Warning::option_defaulted(format!(
                    "option_2 value {other} out of range 0-3, using Mod-10 check"
                ))),
            ),
        }
    }
}

/// Mod-10 check digit over ASCII digits, Luhn-style: digits in odd positions
/// counting from the right (the last digit included) are doubled.
pub fn mod10_check(digits: &[u8]) -> u8 {
    let mut sum = 0u32;
    for (i, &d) in digits.iter().rev().enumerate() {
        let mut v = (d - b'0') as u32;
        if i % 2 == 0 {
            v *= 2;
            if v > 9 {
                v -= 9;
            }
        }
        sum += v;
    }
    (10 - (sum % 10) as u8) % 10
}

/// Encode one MSI Plessey symbol.
///
/// Rejects non-digit input with [`Error::InvalidData`] and symbols whose
/// module width would exceed the matrix column capacity with
/// [`Error::DataTooLong`], before anything is written.
pub fn encode(data: &[u8], option_2: i32) -> Result<Encoded, Error> {
    let (policy, warning) = CheckPolicy::from_option(option_2);

    if data.is_empty() {
        return Err(Error::InvalidData("input is empty".into()));
    }
    for (i, &b) in data.iter().enumerate() {
        if !b.is_ascii_digit() {
            return Err(Error::InvalidData(format!(
                "character '{}' at position {i}: MSI Plessey accepts digits only",
                char::from(b)
            )));
        }
    }

    let mut digits = data.to_vec();
    match policy {
        CheckPolicy::Mod10 => digits.push(b'0' + mod10_check(data)),
        CheckPolicy::None => {}
        CheckPolicy::DoubleMod10 => {
            digits.push(b'0' + mod10_check(&digits));
            digits.push(b'0' + mod10_check(&digits));
        }
        CheckPolicy::Verify => {
            if data.len() < 2 {
                return Err(Error::InvalidData(
                    "check verification needs at least two digits".into(),
                ));
            }
            let expected = char::from(b'0' + mod10_check(&data[..data.len() - 1]));
            let found = char::from(data[data.len() - 1]);
            if expected != found {
                return Err(Error::InvalidCheck { expected, found });
            }
        }
    }

    let width = START.len() + digits.len() * DIGIT_MODULES + STOP.len();
    if width > COLS_MAX {
        return Err(Error::DataTooLong {
            length: width,
            max: COLS_MAX,
        });
    }

    let mut pattern = String::with_capacity(width);
    pattern.push_str(START);
    for &d in &digits {
        let v = d - b'0';
        for bit in (0..4).rev() {
            pattern.push_str(if v & (1 << bit) != 0 { "110" } else { "100" });
        }
    }
    pattern.push_str(STOP);

    let mut matrix = BitMatrix::new();
    matrix.push_pattern(&pattern)?;

    Ok(Encoded {
        matrix,
        row_height: Vec::new(),
        text: digits.iter().map(|&d| char::from(d)).collect(),
        warnings: warning.into_iter().collect(),
    })
}

/// Reference decoder for the single row of an MSI symbol.
///
/// Returns the digits (check digits included) or `None` when the row is not
/// a well-formed MSI pattern. Exists so round-trip tests recover the encoded
/// data independently of the encoder's tables.
pub fn decode_row(matrix: &BitMatrix) -> Option<String> {
    let width = matrix.width();
    let bits: Vec<bool> = (0..width).map(|c| matrix.get(0, c)).collect();
    let body = bits.strip_prefix(&[true, true, false][..])?;
    let body = body.strip_suffix(&[true, false, false, true][..])?;
    if body.len() % DIGIT_MODULES != 0 {
        return None;
    }

    let mut out = String::new();
    for block in body.chunks(DIGIT_MODULES) {
        let mut value = 0u8;
        for bit_modules in block.chunks(3) {
            let bit = match bit_modules {
                [true, true, false] => 1,
                [true, false, false] => 0,
                _ => return None,
            };
            value = value << 1 | bit;
        }
        if value > 9 {
            return None;
        }
        out.push(char::from(b'0' + value));
    }
    Some(out)
}
