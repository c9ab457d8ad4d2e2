//! Conversions between `sea_orm::Value` and JSON.
//!
//! `to_dict` reads column values through [`json_value`]; `update`
//! writes them back through [`column_value`], keyed on the column's
//! declared type so the resulting `Value` variant always matches what
//! the active model expects. Decimal values are widened to f64 on the
//! way out - lossy, and preserved deliberately for compatibility with
//! the systems this serialization format originated in.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{ColumnDef, ColumnType, Value};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::errors::ApiError;

/// Convert a column value to its JSON representation.
///
/// Null database values become JSON null. Decimals are widened to f64
/// JSON numbers; byte columns become arrays of numbers; UUIDs and
/// temporal values become strings (RFC 3339 for timezone-aware types).
#[must_use]
pub fn json_value(value: Value) -> JsonValue {
    match value {
        Value::Bool(v) => v.map_or(JsonValue::Null, JsonValue::Bool),
        Value::TinyInt(v) => v.map_or(JsonValue::Null, JsonValue::from),
        Value::SmallInt(v) => v.map_or(JsonValue::Null, JsonValue::from),
        Value::Int(v) => v.map_or(JsonValue::Null, JsonValue::from),
        Value::BigInt(v) => v.map_or(JsonValue::Null, JsonValue::from),
        Value::TinyUnsigned(v) => v.map_or(JsonValue::Null, JsonValue::from),
        Value::SmallUnsigned(v) => v.map_or(JsonValue::Null, JsonValue::from),
        Value::Unsigned(v) => v.map_or(JsonValue::Null, JsonValue::from),
        Value::BigUnsigned(v) => v.map_or(JsonValue::Null, JsonValue::from),
        Value::Float(v) => v.map_or(JsonValue::Null, JsonValue::from),
        Value::Double(v) => v.map_or(JsonValue::Null, JsonValue::from),
        Value::String(v) => v.map_or(JsonValue::Null, |s| JsonValue::String(*s)),
        Value::Char(v) => v.map_or(JsonValue::Null, |c| JsonValue::String(c.to_string())),
        Value::Bytes(v) => v.map_or(JsonValue::Null, |bytes| {
            JsonValue::Array(bytes.iter().map(|byte| JsonValue::from(*byte)).collect())
        }),
        Value::Json(v) => v.map_or(JsonValue::Null, |json| *json),
        Value::Uuid(v) => v.map_or(JsonValue::Null, |uuid| JsonValue::String(uuid.to_string())),
        // Fixed-precision values are widened to floats. Lossy, kept for
        // compatibility with the source serialization format.
        Value::Decimal(v) => v
            .and_then(|decimal| decimal.to_f64())
            .map_or(JsonValue::Null, JsonValue::from),
        Value::ChronoDate(v) => v.map_or(JsonValue::Null, |d| JsonValue::String(d.to_string())),
        Value::ChronoTime(v) => v.map_or(JsonValue::Null, |t| JsonValue::String(t.to_string())),
        Value::ChronoDateTime(v) => {
            v.map_or(JsonValue::Null, |dt| JsonValue::String(dt.to_string()))
        }
        Value::ChronoDateTimeUtc(v) => {
            v.map_or(JsonValue::Null, |dt| JsonValue::String(dt.to_rfc3339()))
        }
        Value::ChronoDateTimeLocal(v) => {
            v.map_or(JsonValue::Null, |dt| JsonValue::String(dt.to_rfc3339()))
        }
        Value::ChronoDateTimeWithTimeZone(v) => {
            v.map_or(JsonValue::Null, |dt| JsonValue::String(dt.to_rfc3339()))
        }
        #[allow(unreachable_patterns)]
        _ => JsonValue::Null,
    }
}

/// Render a primary-key value as a URI path segment.
///
/// Strings (and string-rendered values like UUIDs) are used verbatim;
/// everything else takes its JSON rendering.
#[must_use]
pub fn uri_segment(value: Value) -> String {
    match json_value(value) {
        JsonValue::String(s) => s,
        other => other.to_string(),
    }
}

/// Convert a JSON value into the typed `sea_orm::Value` the given
/// column expects.
///
/// JSON null maps to the column type's typed null. Values that cannot
/// be represented in the declared column type are rejected with
/// [`ApiError::InvalidValue`].
///
/// # Errors
///
/// Returns `ApiError::InvalidValue` when the JSON value does not fit
/// the column's declared type, or when the column type has no JSON
/// assignment form (e.g. intervals, bit strings).
pub fn column_value(
    attribute: &str,
    def: &ColumnDef,
    value: &JsonValue,
) -> Result<Value, ApiError> {
    let ty = def.get_column_type();
    if value.is_null() {
        return null_value(attribute, ty);
    }
    match ty {
        ColumnType::Char(_) | ColumnType::String(_) | ColumnType::Text => value
            .as_str()
            .map(|s| Value::from(s.to_owned()))
            .ok_or_else(|| ApiError::invalid_value(attribute, "a string")),
        ColumnType::TinyInteger => signed_integer::<i8>(attribute, value),
        ColumnType::SmallInteger => signed_integer::<i16>(attribute, value),
        ColumnType::Integer => signed_integer::<i32>(attribute, value),
        ColumnType::BigInteger => signed_integer::<i64>(attribute, value),
        ColumnType::TinyUnsigned => unsigned_integer::<u8>(attribute, value),
        ColumnType::SmallUnsigned => unsigned_integer::<u16>(attribute, value),
        ColumnType::Unsigned => unsigned_integer::<u32>(attribute, value),
        ColumnType::BigUnsigned => unsigned_integer::<u64>(attribute, value),
        ColumnType::Float => {
            let float = value
                .as_f64()
                .ok_or_else(|| ApiError::invalid_value(attribute, "a number"))?;
            #[allow(clippy::cast_possible_truncation)]
            let narrowed = float as f32;
            Ok(Value::from(narrowed))
        }
        ColumnType::Double => value
            .as_f64()
            .map(Value::from)
            .ok_or_else(|| ApiError::invalid_value(attribute, "a number")),
        ColumnType::Decimal(_) | ColumnType::Money(_) => {
            let text = match value {
                JsonValue::Number(n) => n.to_string(),
                JsonValue::String(s) => s.clone(),
                _ => return Err(ApiError::invalid_value(attribute, "a decimal number")),
            };
            Decimal::from_str(&text)
                .map(Value::from)
                .map_err(|_| ApiError::invalid_value(attribute, "a decimal number"))
        }
        ColumnType::Boolean => value
            .as_bool()
            .map(Value::from)
            .ok_or_else(|| ApiError::invalid_value(attribute, "a boolean")),
        ColumnType::Uuid => value
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(Value::from)
            .ok_or_else(|| ApiError::invalid_value(attribute, "a UUID string")),
        ColumnType::Json | ColumnType::JsonBinary => Ok(Value::from(value.clone())),
        ColumnType::Date => parse_temporal::<NaiveDate>(attribute, value, "a date (YYYY-MM-DD)"),
        ColumnType::Time => parse_temporal::<NaiveTime>(attribute, value, "a time (HH:MM:SS)"),
        ColumnType::DateTime | ColumnType::Timestamp => {
            parse_temporal::<NaiveDateTime>(attribute, value, "an ISO 8601 datetime")
        }
        ColumnType::TimestampWithTimeZone => {
            let text = value
                .as_str()
                .ok_or_else(|| ApiError::invalid_value(attribute, "an RFC 3339 datetime"))?;
            DateTime::parse_from_rfc3339(text)
                .map(|dt| Value::from(dt.with_timezone(&Utc)))
                .map_err(|_| ApiError::invalid_value(attribute, "an RFC 3339 datetime"))
        }
        ColumnType::Binary(_) | ColumnType::VarBinary(_) | ColumnType::Blob => {
            let bytes = value
                .as_array()
                .ok_or_else(|| ApiError::invalid_value(attribute, "an array of bytes"))?
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or_else(|| ApiError::invalid_value(attribute, "an array of bytes"))
                })
                .collect::<Result<Vec<u8>, ApiError>>()?;
            Ok(Value::from(bytes))
        }
        _ => Err(ApiError::invalid_value(
            attribute,
            "a column type supporting JSON assignment",
        )),
    }
}

fn signed_integer<T>(attribute: &str, value: &JsonValue) -> Result<Value, ApiError>
where
    T: TryFrom<i64>,
    Value: From<T>,
{
    value
        .as_i64()
        .and_then(|n| T::try_from(n).ok())
        .map(Value::from)
        .ok_or_else(|| ApiError::invalid_value(attribute, "an integer in range"))
}

fn unsigned_integer<T>(attribute: &str, value: &JsonValue) -> Result<Value, ApiError>
where
    T: TryFrom<u64>,
    Value: From<T>,
{
    value
        .as_u64()
        .and_then(|n| T::try_from(n).ok())
        .map(Value::from)
        .ok_or_else(|| ApiError::invalid_value(attribute, "a non-negative integer in range"))
}

fn parse_temporal<T>(
    attribute: &str,
    value: &JsonValue,
    expected: &str,
) -> Result<Value, ApiError>
where
    T: FromStr,
    Value: From<T>,
{
    value
        .as_str()
        .and_then(|s| s.parse::<T>().ok())
        .map(Value::from)
        .ok_or_else(|| ApiError::invalid_value(attribute, expected))
}

/// The typed null for a given column type.
fn null_value(attribute: &str, ty: &ColumnType) -> Result<Value, ApiError> {
    match ty {
        ColumnType::Char(_) | ColumnType::String(_) | ColumnType::Text => Ok(Value::String(None)),
        ColumnType::TinyInteger => Ok(Value::TinyInt(None)),
        ColumnType::SmallInteger => Ok(Value::SmallInt(None)),
        ColumnType::Integer => Ok(Value::Int(None)),
        ColumnType::BigInteger => Ok(Value::BigInt(None)),
        ColumnType::TinyUnsigned => Ok(Value::TinyUnsigned(None)),
        ColumnType::SmallUnsigned => Ok(Value::SmallUnsigned(None)),
        ColumnType::Unsigned => Ok(Value::Unsigned(None)),
        ColumnType::BigUnsigned => Ok(Value::BigUnsigned(None)),
        ColumnType::Float => Ok(Value::Float(None)),
        ColumnType::Double => Ok(Value::Double(None)),
        ColumnType::Decimal(_) | ColumnType::Money(_) => Ok(Value::Decimal(None)),
        ColumnType::Boolean => Ok(Value::Bool(None)),
        ColumnType::Uuid => Ok(Value::Uuid(None)),
        ColumnType::Json | ColumnType::JsonBinary => Ok(Value::Json(None)),
        ColumnType::Date => Ok(Value::ChronoDate(None)),
        ColumnType::Time => Ok(Value::ChronoTime(None)),
        ColumnType::DateTime | ColumnType::Timestamp => Ok(Value::ChronoDateTime(None)),
        ColumnType::TimestampWithTimeZone => Ok(Value::ChronoDateTimeUtc(None)),
        ColumnType::Binary(_) | ColumnType::VarBinary(_) | ColumnType::Blob => {
            Ok(Value::Bytes(None))
        }
        _ => Err(ApiError::invalid_value(
            attribute,
            "a column type supporting JSON assignment",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ColumnTypeTrait;
    use sea_orm::sea_query::StringLen;
    use serde_json::json;

    #[test]
    fn decimal_values_widen_to_floats() {
        let decimal = Decimal::from_str("3.14").unwrap();
        assert_eq!(json_value(Value::from(decimal)), json!(3.14));
    }

    #[test]
    fn null_decimal_is_json_null() {
        assert_eq!(json_value(Value::Decimal(None)), JsonValue::Null);
    }

    #[test]
    fn uuid_values_render_as_strings() {
        let uuid = Uuid::new_v4();
        assert_eq!(json_value(Value::from(uuid)), json!(uuid.to_string()));
    }

    #[test]
    fn uri_segments_are_unquoted() {
        assert_eq!(uri_segment(Value::from(42i32)), "42");
        assert_eq!(uri_segment(Value::from("abc".to_owned())), "abc");
    }

    #[test]
    fn string_columns_accept_strings_only() {
        let def = ColumnType::String(StringLen::None).def();
        assert!(column_value("name", &def, &json!("foo")).is_ok());
        assert!(matches!(
            column_value("name", &def, &json!(12)),
            Err(ApiError::InvalidValue { .. })
        ));
    }

    #[test]
    fn integer_columns_reject_out_of_range_values() {
        let def = ColumnType::TinyInteger.def();
        assert_eq!(
            column_value("rank", &def, &json!(12)).unwrap(),
            Value::from(12i8)
        );
        assert!(column_value("rank", &def, &json!(4096)).is_err());
    }

    #[test]
    fn decimal_columns_accept_numbers_and_strings() {
        let def = ColumnType::Decimal(None).def();
        let expected = Value::from(Decimal::from_str("3.14").unwrap());
        assert_eq!(column_value("price", &def, &json!(3.14)).unwrap(), expected);
        assert_eq!(
            column_value("price", &def, &json!("3.14")).unwrap(),
            expected
        );
    }

    #[test]
    fn null_assignment_takes_the_column_type() {
        let def = ColumnType::Integer.def();
        assert_eq!(
            column_value("owner_id", &def, &JsonValue::Null).unwrap(),
            Value::Int(None)
        );
    }

    #[test]
    fn rfc3339_assignment_normalizes_to_utc() {
        let def = ColumnType::TimestampWithTimeZone.def();
        let value = column_value("created_at", &def, &json!("2024-01-02T03:04:05+01:00")).unwrap();
        let rendered = json_value(value);
        assert_eq!(rendered, json!("2024-01-02T02:04:05+00:00"));
    }
}
