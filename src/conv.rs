//! Decimal -> binary conversion on top of `num-bigint`.
//!
//! The algorithm is the schoolbook one: fold the digits into a `BigUint`
//! accumulator, then divide by two collecting remainders until the value is
//! exhausted. `BigUint` could do the whole thing by itself (`parse_bytes`
//! plus `to_str_radix`), but the explicit loop keeps the remainder order
//! visible and the library rendering is still available as a test oracle.

use num_bigint::BigUint;
use std::fmt::Display;
use thiserror::Error;

/// Errors reported by [`convert`]. Every one of them is fatal to the single
/// call - nothing is retried and no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvError {
    /// The input system is not one of [`permitted_input_systems`]
    #[error("unsupported input system: {0}")]
    UnsupportedInputSystem(u32),
    /// The output system is not one of [`permitted_output_systems`]
    #[error("unsupported output system: {0}")]
    UnsupportedOutputSystem(u32),
    /// Both systems are individually permitted, but the combination has no
    /// implementation yet
    #[error("conversion from base {input} to base {output} is not implemented")]
    NotImplemented { input: u32, output: u32 },
    /// Nothing left of the input after trimming whitespace
    #[error("at least one digit is required")]
    EmptyInput,
    /// The input contains something else than ASCII digits
    #[error("only digits 0-9 are allowed")]
    InvalidDigits,
}

/// Numeral systems accepted on the input side. Order carries no meaning.
pub fn permitted_input_systems() -> &'static [u32] {
    &[10]
}

/// Numeral systems accepted on the output side. Order carries no meaning.
pub fn permitted_output_systems() -> &'static [u32] {
    &[2]
}

/// Converts a non-negative integer written in decimal into its binary
/// representation.
///
/// Anything with a string representation is accepted as input - `&str`,
/// `String`, machine integers. Surrounding whitespace is trimmed; what
/// remains has to be plain ASCII digits, so no sign, no decimal point, no
/// grouping separators, no `0x`-style prefixes. The result carries no sign
/// and no leading zeros, with zero itself rendered as `"0"`.
///
/// ```
/// use baseconv::convert;
///
/// assert_eq!(convert("15", 10, 2).unwrap(), "1111");
/// assert_eq!(convert(" 1024 ", 10, 2).unwrap(), "10000000000");
/// ```
pub fn convert(
    input: impl Display,
    input_system: u32,
    output_system: u32,
) -> Result<String, ConvError> {
    if !permitted_input_systems().contains(&input_system) {
        return Err(ConvError::UnsupportedInputSystem(input_system));
    }
    if !permitted_output_systems().contains(&output_system) {
        return Err(ConvError::UnsupportedOutputSystem(output_system));
    }

    // Unreachable while both permitted sets are singletons, but the sets are
    // meant to grow independently of implemented pairs
    if (input_system, output_system) != (10, 2) {
        return Err(ConvError::NotImplemented {
            input: input_system,
            output: output_system,
        });
    }

    let input = input.to_string();
    let digits = input.trim();

    if digits.is_empty() {
        return Err(ConvError::EmptyInput);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvError::InvalidDigits);
    }

    // Canonical zero, regardless of how many zeros were written
    if digits.bytes().all(|b| b == b'0') {
        return Ok("0".to_owned());
    }

    let mut value = BigUint::from(0u32);
    for digit in digits.bytes() {
        value = value * 10u32 + u32::from(digit - b'0');
    }

    // Remainders come out least significant first
    let zero = BigUint::from(0u32);
    let mut bits = String::new();
    while value > zero {
        bits.push(if &value % 2u32 == zero { '0' } else { '1' });
        value = value / 2u32;
    }

    Ok(bits.chars().rev().collect())
}
