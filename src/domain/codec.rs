//! Base62 slug codec.
//!
//! Maps a durable link identifier to a compact slug and back. Digits are
//! written least-significant first: the first character of a slug carries
//! weight 62⁰, the second 62¹, and so on. Identifier `0` encodes to the empty
//! string.
//!
//! The alphabet and digit order are part of the public URL format. Reordering
//! them invalidates every slug already handed out.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::error::CodecError;

/// Slug alphabet. Index of a symbol is its digit value.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: i64 = ALPHABET.len() as i64;

// Unknown characters resolve to digit 0 and are told apart from a real '0'
// by comparing the character itself, so '0' must stay at index 0.
const _: () = assert!(ALPHABET[0] == b'0');

/// Symbol to digit lookup, built on first use and never mutated.
static DIGITS: LazyLock<HashMap<char, i64>> = LazyLock::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(index, &symbol)| (symbol as char, index as i64))
        .collect()
});

/// Forces construction of the digit table.
///
/// Called once during server start so the first request does not pay for it.
pub fn init() {
    LazyLock::force(&DIGITS);
}

/// Encodes a non-negative identifier into a slug.
///
/// # Errors
///
/// Returns [`CodecError::InvalidArgument`] if `id` is negative.
///
/// # Examples
///
/// ```
/// use slugline::domain::codec::encode;
///
/// assert_eq!(encode(0).unwrap(), "");
/// assert_eq!(encode(62).unwrap(), "01");
/// assert_eq!(encode(1504).unwrap(), "go");
/// ```
pub fn encode(id: i64) -> Result<String, CodecError> {
    if id < 0 {
        return Err(CodecError::InvalidArgument(id));
    }

    let mut remaining = id;
    let mut slug = String::new();
    while remaining > 0 {
        slug.push(ALPHABET[(remaining % BASE) as usize] as char);
        remaining /= BASE;
    }

    Ok(slug)
}

/// Decodes a slug back into its identifier.
///
/// The empty slug decodes to `0`. Non-canonical slugs with trailing `'0'`
/// digits decode to the same identifier as their canonical form.
///
/// # Errors
///
/// - [`CodecError::DecodeFailure`] if any character is outside [`ALPHABET`]
/// - [`CodecError::Overflow`] if the value does not fit in an `i64`
pub fn decode(slug: &str) -> Result<i64, CodecError> {
    let mut id: i64 = 0;
    let mut weight: Option<i64> = Some(1);

    for symbol in slug.chars() {
        let digit = DIGITS.get(&symbol).copied().unwrap_or(0);
        if digit == 0 && symbol != '0' {
            return Err(CodecError::DecodeFailure(slug.to_string()));
        }

        if digit != 0 {
            let contribution = weight
                .and_then(|w| w.checked_mul(digit))
                .ok_or_else(|| CodecError::Overflow(slug.to_string()))?;
            id = id
                .checked_add(contribution)
                .ok_or_else(|| CodecError::Overflow(slug.to_string()))?;
        }

        // Weight may run past i64 on trailing zero digits without affecting the value.
        weight = weight.and_then(|w| w.checked_mul(BASE));
    }

    Ok(id)
}
