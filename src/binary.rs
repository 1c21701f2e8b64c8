//! Decimal parsing and base-2 digit strings.
//!
//! Inputs are arbitrary-precision (`num_bigint::BigUint`), so any decimal the
//! shell can pass through is converted without overflow. The digit string is
//! minimal: no `0b` prefix and no leading zeros, except that zero itself is
//! `"0"`.

use std::str::FromStr;

use num_bigint::BigUint;

use crate::error::Error;

/// Parse `input` as a non-negative base-10 integer.
///
/// Surrounding whitespace is ignored and a leading `+` is accepted. Digits may
/// be grouped with single underscores (`1_000`), but an underscore must sit
/// between two digits. A leading `-` on an otherwise valid number yields
/// [`Error::NegativeInput`] rather than a generic parse failure so the CLI can
/// say what went wrong.
pub fn parse_decimal(input: &str) -> Result<BigUint, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    // num-bigint skips every `_`, so grouping is checked here
    if !is_decimal_literal(unsigned) {
        return Err(Error::MalformedDecimal(trimmed.to_string()));
    }

    let n = BigUint::from_str(unsigned).map_err(|source| Error::InvalidDecimal {
        input: trimmed.to_string(),
        source,
    })?;

    // "-0" is zero
    if negative && n.bits() > 0 {
        return Err(Error::NegativeInput(trimmed.to_string()));
    }
    Ok(n)
}

/// ASCII digits, optionally split into groups by single underscores.
fn is_decimal_literal(s: &str) -> bool {
    !s.is_empty()
        && s
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

/// Minimal base-2 digits of `n`.
pub fn to_binary_digits(n: &BigUint) -> String {
    n.to_str_radix(2)
}

/// Inverse of [`to_binary_digits`]; rejects anything but a non-empty run of
/// `0`/`1`.
pub fn from_binary_digits(digits: &str) -> Result<BigUint, Error> {
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(Error::InvalidBinary(digits.to_string()));
    }
    BigUint::parse_bytes(digits.as_bytes(), 2)
        .ok_or_else(|| Error::InvalidBinary(digits.to_string()))
}
