use std::ffi::OsStr;
use std::num::ParseIntError;

use crate::Error;
use crate::ErrorKind;
use crate::Kind;
use crate::OptionSpec;
use crate::Result;
use crate::Value;

/// Parse a signed integer written in decimal, `0x` hex, or `0b` binary
///
/// One base must consume the whole text; partial parses fail.
///
/// ```
/// assert_eq!(tabarg::parse_signed("-7").unwrap(), -7);
/// assert_eq!(tabarg::parse_signed("0x2a").unwrap(), 42);
/// assert_eq!(tabarg::parse_signed("0b101010").unwrap(), 42);
/// assert!(tabarg::parse_signed("2a").is_err());
/// assert!(tabarg::parse_signed("").is_err());
/// ```
pub fn parse_signed(text: &str) -> Result<i64> {
    parse_radix(text, i64::from_str_radix)
}

/// Parse an unsigned integer; see [`parse_signed`]
pub fn parse_unsigned(text: &str) -> Result<u64> {
    parse_radix(text, u64::from_str_radix)
}

fn parse_radix<T>(text: &str, from_str_radix: fn(&str, u32) -> Result<T, ParseIntError>) -> Result<T> {
    if let Ok(n) = from_str_radix(text, 10) {
        return Ok(n);
    }
    if let Some(digits) = strip_radix_prefix(text, "0x") {
        if let Ok(n) = from_str_radix(digits, 16) {
            return Ok(n);
        }
    }
    if let Some(digits) = strip_radix_prefix(text, "0b") {
        if let Ok(n) = from_str_radix(digits, 2) {
            return Ok(n);
        }
    }
    Err(Error::new(
        ErrorKind::InvalidValue,
        format_args!("Invalid numerical sequence `{text}`"),
    )
    .unexpected(text))
}

fn strip_radix_prefix<'t>(text: &'t str, prefix: &str) -> Option<&'t str> {
    if text.len() <= 2 {
        return None;
    }
    let digits = text.strip_prefix(prefix)?;
    // `from_str_radix` takes a sign; a literal like `0x-1` does not
    if digits.starts_with(['+', '-']) {
        return None;
    }
    Some(digits)
}

/// Copy `text`, failing if it is longer than `max_len` bytes
///
/// Oversized input is an error, never truncated.
pub fn bounded_copy(text: &str, max_len: usize) -> Result<String> {
    if max_len < text.len() {
        return Err(Error::new(
            ErrorKind::ValueTooLong,
            format_args!(
                "Value is {} bytes long, exceeding the maximum of {max_len}",
                text.len()
            ),
        ));
    }
    Ok(text.to_owned())
}

/// Coerce a raw token to `spec`'s [`Kind`]
pub(crate) fn coerce(spec: &OptionSpec, raw: &OsStr, max_len: usize) -> Result<Value> {
    let name = spec.display_name();
    if spec.kind() == Kind::Boolean {
        return Ok(Value::Bool(true));
    }
    let text = tabarg_lexer::to_str(raw).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidUtf8,
            format_args!("Value for option `{name}` is not valid UTF-8"),
        )
        .unexpected(raw.to_string_lossy())
        .within(spec.get_long())
    })?;
    let value = match spec.kind() {
        Kind::Boolean => Ok(Value::Bool(true)),
        Kind::String => bounded_copy(text, max_len).map(Value::Str).map_err(|_| {
            Error::new(
                ErrorKind::ValueTooLong,
                format_args!(
                    "Value for option `{name}` is {} bytes long, exceeding the maximum of {max_len}",
                    text.len()
                ),
            )
        }),
        Kind::Integer => parse_signed(text).map(Value::Int).map_err(|_| {
            Error::new(
                ErrorKind::InvalidValue,
                format_args!("Invalid numerical sequence for option `{name}`: {text}"),
            )
        }),
        Kind::UnsignedInteger => parse_unsigned(text).map(Value::UInt).map_err(|_| {
            Error::new(
                ErrorKind::InvalidValue,
                format_args!("Invalid unsigned numerical sequence for option `{name}`: {text}"),
            )
        }),
    }
    .map_err(|err| err.unexpected(text).within(spec.get_long()))?;
    tracing::trace!(option = spec.get_long(), %value, "coerced");
    Ok(value)
}
