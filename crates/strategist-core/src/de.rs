// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lenient deserializers for form-origin JSON bodies.
//!
//! HTML forms submit numbers as strings and clear fields by submitting
//! the empty string, so every numeric field on the API accepts
//! string-or-number input and treats `""`/`null` as absent. Patch
//! deserializers produce `Option<Option<T>>`: outer `None` means the key
//! was not present (keep the current value), `Some(None)` means the key
//! was present but empty (clear the field).

use serde::de::{DeserializeOwned, Deserializer, Error as DeError};
use serde::Deserialize;
use serde_json::Value;

fn coerce_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

fn coerce_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// `Option<i64>` accepting number, numeric string, `""`, or `null`.
pub fn opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(coerce_i64))
}

/// `Option<f64>` accepting number, numeric string, `""`, or `null`.
pub fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(coerce_f64))
}

/// `i64` counter defaulting to 0 for `""`, `null`, or unparseable input.
pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(opt_i64(d)?.unwrap_or(0))
}

/// `f64` rate defaulting to 0.0 for `""`, `null`, or unparseable input.
pub fn rate<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(opt_f64(d)?.unwrap_or(0.0))
}

/// Required `i64` id accepting number or numeric string.
pub fn req_i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let v = Value::deserialize(d)?;
    coerce_i64(&v).ok_or_else(|| D::Error::custom("expected an integer id"))
}

/// `Option<String>` where `""` means absent.
pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let v = Option::<String>::deserialize(d)?;
    Ok(v.filter(|s| !s.trim().is_empty()))
}

/// Optional enum value where `""` and `null` mean absent. Any other
/// value must deserialize to the closed enum, otherwise the request
/// is rejected.
pub fn opt_enum<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Option::<Value>::deserialize(d)?;
    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(other) => T::deserialize(other).map(Some).map_err(DeError::custom),
    }
}

/// Patch field for a nullable i64: present-and-empty clears.
pub fn patch_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<i64>>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(Some(v.as_ref().and_then(coerce_i64)))
}

/// Patch field for a nullable f64: present-and-empty clears.
pub fn patch_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<f64>>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(Some(v.as_ref().and_then(coerce_f64)))
}

/// Patch field for a nullable string: present-and-empty clears.
pub fn patch_string<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<Option<String>>, D::Error> {
    let v = Option::<String>::deserialize(d)?;
    Ok(Some(v.filter(|s| !s.trim().is_empty())))
}

/// Patch field for a nullable enum: present-and-empty clears, any other
/// value must belong to the closed enum.
pub fn patch_enum<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Some(opt_enum(d)?))
}

/// Platform id list accepting mixed number/string elements; empty and
/// non-numeric elements are dropped, matching the form behavior of
/// multi-select inputs.
pub fn id_vec<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<i64>>, D::Error> {
    let v = Option::<Vec<Value>>::deserialize(d)?;
    Ok(v.map(|values| values.iter().filter_map(coerce_i64).collect()))
}
