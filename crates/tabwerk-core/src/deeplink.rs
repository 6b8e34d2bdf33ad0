// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Deep-link parameter extraction.
//
// Payloads are flat JSON objects of string-valued fields, e.g.
// `{"x":"1000","y":"0","z":"500"}`. Nesting, arrays and typed values are not
// supported. Failures are reported as `None` and logged — extraction never
// raises an error into the caller.

use crate::types::Vec3;

/// Extract a single string parameter from a deep-link payload.
///
/// Returns `None` if either input is empty, the text does not parse as a
/// JSON object, or the key is absent or not a string.
pub fn parameter(params_json: &str, key: &str) -> Option<String> {
    if params_json.is_empty() || key.is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(params_json) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "failed to parse deep-link parameters");
            return None;
        }
    };

    let Some(object) = value.as_object() else {
        tracing::error!("deep-link parameters are not a JSON object");
        return None;
    };

    match object.get(key).and_then(|v| v.as_str()) {
        Some(text) => Some(text.to_owned()),
        None => {
            tracing::debug!(key, "deep-link parameter not found");
            None
        }
    }
}

/// Extract a parameter as a float.
///
/// Conversion is permissive in the C `atof` style: the longest leading
/// numeric prefix is used, and non-numeric text yields `Some(0.0)` rather
/// than `None`. The result is `None` only when the key itself is missing.
pub fn parameter_as_f32(params_json: &str, key: &str) -> Option<f32> {
    parameter(params_json, key).map(|text| lenient_f32(&text))
}

/// Extract a parameter as an integer, with the same permissive conversion
/// as [`parameter_as_f32`].
pub fn parameter_as_i32(params_json: &str, key: &str) -> Option<i32> {
    parameter(params_json, key).map(|text| lenient_i32(&text))
}

/// Extract a vector from the `x`, `y` and `z` keys.
///
/// All three must be present; extraction fails as a unit and never returns
/// a partially populated vector.
pub fn parameter_as_vec3(params_json: &str) -> Option<Vec3> {
    let x = parameter_as_f32(params_json, "x");
    let y = parameter_as_f32(params_json, "y");
    let z = parameter_as_f32(params_json, "z");

    match (x, y, z) {
        (Some(x), Some(y), Some(z)) => Some(Vec3::new(x, y, z)),
        _ => {
            tracing::debug!(
                x = x.is_some(),
                y = y.is_some(),
                z = z.is_some(),
                "vector extraction missing components"
            );
            None
        }
    }
}

/// C `atof` semantics: longest leading float prefix after optional
/// whitespace, 0.0 when no digits are found.
fn lenient_f32(text: &str) -> f32 {
    float_prefix(text).parse().unwrap_or(0.0)
}

/// C `atoi` semantics: optional sign plus leading digits, 0 when no digits
/// are found or the value does not fit in `i32`.
fn lenient_i32(text: &str) -> i32 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    trimmed[..end].parse().unwrap_or(0)
}

/// Longest prefix of `text` (after leading whitespace) that forms a float:
/// sign, digits with optional fraction, optional exponent.
fn float_prefix(text: &str) -> &str {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mantissa_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if !bytes[mantissa_start..end].iter().any(u8::is_ascii_digit) {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    &trimmed[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &str = r#"{"x":"1000","y":"0","z":"500"}"#;

    #[test]
    fn present_key_is_extracted() {
        assert_eq!(parameter(PARAMS, "y").as_deref(), Some("0"));
    }

    #[test]
    fn absent_key_fails() {
        assert_eq!(parameter(PARAMS, "w"), None);
    }

    #[test]
    fn malformed_json_fails() {
        assert_eq!(parameter("not json", "x"), None);
    }

    #[test]
    fn non_object_json_fails() {
        assert_eq!(parameter(r#"["x","y"]"#, "x"), None);
    }

    #[test]
    fn empty_inputs_fail() {
        assert_eq!(parameter("", "x"), None);
        assert_eq!(parameter(PARAMS, ""), None);
    }

    #[test]
    fn full_vector_is_extracted() {
        let v = parameter_as_vec3(r#"{"x":"1","y":"2","z":"3"}"#).unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn partial_vector_fails_as_a_unit() {
        assert_eq!(parameter_as_vec3(r#"{"x":"1","y":"2"}"#), None);
    }

    #[test]
    fn non_numeric_text_converts_to_zero() {
        // Permissive conversion: the key is present, so the value is Some,
        // but non-numeric text degrades to zero.
        assert_eq!(parameter_as_i32(r#"{"n":"abc"}"#, "n"), Some(0));
        assert_eq!(parameter_as_f32(r#"{"n":"abc"}"#, "n"), Some(0.0));
    }

    #[test]
    fn numeric_prefix_is_used() {
        assert_eq!(parameter_as_i32(r#"{"n":"12abc"}"#, "n"), Some(12));
        assert_eq!(parameter_as_f32(r#"{"n":"-2.5e2m"}"#, "n"), Some(-250.0));
        assert_eq!(parameter_as_f32(r#"{"n":" 3.5"}"#, "n"), Some(3.5));
    }

    #[test]
    fn missing_key_stays_none_for_numeric_helpers() {
        assert_eq!(parameter_as_i32(PARAMS, "w"), None);
        assert_eq!(parameter_as_f32(PARAMS, "w"), None);
    }

    #[test]
    fn typed_json_values_are_not_strings() {
        // Only string-valued fields are supported by the payload format.
        assert_eq!(parameter(r#"{"n":42}"#, "n"), None);
    }
}
