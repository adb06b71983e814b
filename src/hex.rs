//! Hex and byte utilities
//!
//! Every value that crosses the ABI boundary is rendered as a `0x`-prefixed hex
//! string. These helpers are the one place that decides how strings, integers,
//! booleans and raw bytes map onto that representation.

use alloy::primitives::{hex, keccak256, Address, Bytes, Selector, U256};

use crate::error::{Error, Result};

/// Marker prefixed to every hex string
pub const HEX_PREFIX: &str = "0x";

/// A value that can be rendered with [`to_hex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexValue<'a> {
    /// UTF-8 text, encoded as its bytes
    Str(&'a str),
    /// Unsigned integer, encoded as minimal big-endian hex
    Number(U256),
    /// Encoded as a single digit
    Bool(bool),
    /// Raw bytes, two digits per byte
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for HexValue<'a> {
    fn from(value: &'a str) -> Self {
        HexValue::Str(value)
    }
}

impl From<U256> for HexValue<'_> {
    fn from(value: U256) -> Self {
        HexValue::Number(value)
    }
}

impl From<u64> for HexValue<'_> {
    fn from(value: u64) -> Self {
        HexValue::Number(U256::from(value))
    }
}

impl From<bool> for HexValue<'_> {
    fn from(value: bool) -> Self {
        HexValue::Bool(value)
    }
}

impl<'a> From<&'a [u8]> for HexValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        HexValue::Bytes(value)
    }
}

impl<'a> From<&'a Bytes> for HexValue<'a> {
    fn from(value: &'a Bytes) -> Self {
        HexValue::Bytes(value.as_ref())
    }
}

/// Renders a value as a hex string, optionally left-padded to `size` bytes.
///
/// Integers use the minimal representation (`0x0`, `0x7b`, `0x100`), not the
/// 32-byte word form; pass `Some(32)` to get the word form.
pub fn to_hex<'a>(value: impl Into<HexValue<'a>>, size: Option<usize>) -> Result<String> {
    let encoded = match value.into() {
        HexValue::Str(s) => format!("{HEX_PREFIX}{}", hex::encode(s.as_bytes())),
        HexValue::Number(n) => format!("{HEX_PREFIX}{n:x}"),
        HexValue::Bool(b) => format!("{HEX_PREFIX}{}", u8::from(b)),
        HexValue::Bytes(b) => format!("{HEX_PREFIX}{}", hex::encode(b)),
    };

    match size {
        Some(size) => pad(&encoded, PadOptions::left(size)),
        None => Ok(encoded),
    }
}

/// Checks whether `value` is a hex string.
///
/// Strict mode requires the `0x` marker and an even number of digits. Non-strict
/// mode also accepts odd lengths and a missing marker. The empty string is never
/// hex.
pub fn is_hex(value: &str, strict: bool) -> bool {
    if value.is_empty() {
        return false;
    }

    let digits = match value.strip_prefix(HEX_PREFIX) {
        Some(digits) => digits,
        None if strict => return false,
        None => value,
    };

    if strict && digits.len() % 2 != 0 {
        return false;
    }

    digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Side of the value that receives padding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PadDirection {
    #[default]
    Left,
    Right,
}

/// Options for [`pad`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadOptions {
    pub dir: PadDirection,
    /// Target width in bytes; `None` leaves the value untouched
    pub size: Option<usize>,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            dir: PadDirection::Left,
            size: Some(32),
        }
    }
}

impl PadOptions {
    pub fn left(size: usize) -> Self {
        Self {
            dir: PadDirection::Left,
            size: Some(size),
        }
    }

    pub fn right(size: usize) -> Self {
        Self {
            dir: PadDirection::Right,
            size: Some(size),
        }
    }
}

/// Zero-pads the digits of a hex string to `size * 2` digits.
pub fn pad(value: &str, options: PadOptions) -> Result<String> {
    let Some(size) = options.size else {
        return Ok(value.to_string());
    };

    let digits = value.strip_prefix(HEX_PREFIX).unwrap_or(value);
    let width = size * 2;
    if digits.len() > width {
        return Err(Error::PadSize {
            value: value.to_string(),
            size,
        });
    }

    Ok(match options.dir {
        PadDirection::Left => format!("{HEX_PREFIX}{digits:0>width$}"),
        PadDirection::Right => format!("{HEX_PREFIX}{digits:0<width$}"),
    })
}

/// Concatenates hex strings byte-wise under a single marker.
pub fn concat<S: AsRef<str>>(values: &[S]) -> String {
    let mut joined = HEX_PREFIX.to_string();
    for value in values {
        let value = value.as_ref();
        joined.push_str(value.strip_prefix(HEX_PREFIX).unwrap_or(value));
    }
    joined
}

/// Decodes a hex string into bytes. `0x` decodes to an empty buffer.
pub fn hex_to_bytes(value: &str) -> Result<Bytes> {
    if !is_hex(value, true) {
        return Err(Error::InvalidHex(value.to_string()));
    }
    hex::decode(value)
        .map(Bytes::from)
        .map_err(|_| Error::InvalidHex(value.to_string()))
}

/// Parses a hex string as a big-endian unsigned integer. `0x` parses to zero.
pub fn hex_to_number(value: &str) -> Result<U256> {
    let digits = value
        .strip_prefix(HEX_PREFIX)
        .filter(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| Error::InvalidHex(value.to_string()))?;

    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 16).map_err(|_| Error::InvalidHex(value.to_string()))
}

/// Checks whether `value` is a 20-byte address.
///
/// Strict mode additionally requires the exact EIP-55 checksum casing.
pub fn is_address(value: &str, strict: bool) -> bool {
    let Some(digits) = value.strip_prefix(HEX_PREFIX) else {
        return false;
    };
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    if !strict {
        return true;
    }
    to_checksum_address(value).is_ok_and(|checksummed| checksummed == value)
}

/// Renders an address string with EIP-55 mixed-case checksum.
pub fn to_checksum_address(value: &str) -> Result<String> {
    let address: Address = value
        .parse()
        .map_err(|_| Error::InvalidHex(value.to_string()))?;
    Ok(address.to_checksum(None))
}

/// Reduces a human-readable function or event signature to `name(type,...)`.
///
/// Leading `function`/`event` keywords and parameter names are dropped, tuple
/// nesting is kept. Anything after the closing parenthesis of the parameter
/// list (modifiers, return types) is ignored.
pub fn normalize_signature(signature: &str) -> Result<String> {
    let chars: Vec<char> = signature.chars().collect();
    let mut active = true;
    let mut level = 0i32;
    let mut current = String::new();
    let mut result = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '(' | ')' | ',') {
            active = true;
        }
        match c {
            '(' => level += 1,
            ')' => level -= 1,
            _ => {}
        }

        if !active {
            continue;
        }

        if level == 0 {
            if c == ' ' && matches!(result.as_str(), "event" | "function" | "") {
                result.clear();
                continue;
            }
            result.push(c);
            if c == ')' {
                return Ok(result);
            }
            continue;
        }

        if c == ' ' {
            let after_separator = i > 0 && chars[i - 1] == ',';
            if !after_separator && current != "," && current != ",(" {
                current.clear();
                active = false;
            }
            continue;
        }

        result.push(c);
        current.push(c);
    }

    Err(Error::Normalize)
}

/// Computes the 4-byte selector of a signature.
pub fn function_selector(signature: &str) -> Result<Selector> {
    let normalized = normalize_signature(signature)?;
    let hash = keccak256(normalized.as_bytes());
    Ok(Selector::from_slice(&hash[..4]))
}

/// Computes the 4-byte selector of a signature as a hex string.
pub fn to_function_selector(signature: &str) -> Result<String> {
    Ok(function_selector(signature)?.to_string())
}
