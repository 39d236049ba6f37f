// crates/emberplus-rs-xml/src/format.rs

//! Locale-invariant text forms of primitive values.
//!
//! Every call site that renders a boolean, integer, real, octet string or path
//! goes through one of these helpers, so the encodings cannot drift apart.

use emberplus_rs::ParameterType;

// --- XML type names ---

pub const TYPE_BOOLEAN: &str = "BOOLEAN";
pub const TYPE_INTEGER: &str = "INTEGER";
pub const TYPE_OCTETS: &str = "OCTET STRING";
pub const TYPE_REAL: &str = "REAL";
pub const TYPE_STRING: &str = "UTF8";
/// `type` of a `parametersLocation` holding a base path.
pub const TYPE_RELATIVE_OID: &str = "RELATIVE-OID";

/// Maps a parameter type to its XML type name.
/// Returns `None` for tags with no XML representation (null, trigger, enum, unknown).
pub fn xml_type_name(parameter_type: ParameterType) -> Option<&'static str> {
    match parameter_type {
        ParameterType::BOOLEAN => Some(TYPE_BOOLEAN),
        ParameterType::INTEGER => Some(TYPE_INTEGER),
        ParameterType::OCTETS => Some(TYPE_OCTETS),
        ParameterType::REAL => Some(TYPE_REAL),
        ParameterType::STRING => Some(TYPE_STRING),
        _ => None,
    }
}

// --- Primitive encodings ---

pub fn format_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Decimal form of any integer up to 64 bits.
pub fn format_integer(value: impl Into<i64>) -> String {
    value.into().to_string()
}

/// Shortest decimal form that reads back to the same `f64`.
/// Non-finite values use the XML Schema spellings `NaN`, `INF` and `-INF`.
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        "NaN".into()
    } else if value.is_infinite() {
        let text = if value.is_sign_positive() { "INF" } else { "-INF" };
        text.into()
    } else {
        value.to_string()
    }
}

/// Upper-case hex digits, two per byte, no separators.
pub fn format_octets(value: &[u8]) -> String {
    hex::encode_upper(value)
}

/// Numbers joined by `.`, e.g. `[1, 2, 3]` -> `"1.2.3"`.
pub fn format_path(numbers: &[u32]) -> String {
    let mut buffer = String::with_capacity(numbers.len() * 4);
    for (index, number) in numbers.iter().enumerate() {
        if index >= 1 {
            buffer.push('.');
        }
        buffer.push_str(&number.to_string());
    }
    buffer
}
