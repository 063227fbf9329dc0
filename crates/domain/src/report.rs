//! Device reports — inbound payloads published by the bridge.
//!
//! The bridge publishes two shapes:
//!
//! - attribute reports: `{"type": "<data type>", "value": <json>}`
//! - zone status notifications: `{"Zone Status": [<bool>, ...], ...}`
//!
//! [`DeviceReport::decode`] turns either into a closed set of typed
//! variants. Only malformed JSON is an error; a well-formed payload of an
//! unexpected shape decodes to [`DeviceReport::Unrecognized`].

use serde_json::{Map, Number, Value};

use crate::data_type::DataType;
use crate::error::TransformError;

/// Key of the bit list in an IAS Zone status change notification.
pub const ZONE_STATUS_FIELD: &str = "Zone Status";

/// A decoded inbound payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceReport {
    /// `bool` attribute.
    Bool(bool),
    /// `uint16` attribute.
    Uint16(u16),
    /// `int16` attribute.
    Int16(i16),
    /// IAS Zone status change notification.
    Zone(ZoneStatus),
    /// Any other record carrying a `value`, tagged or not.
    Attribute {
        data_type: Option<DataType>,
        value: Value,
    },
    /// Valid JSON of no known shape.
    Unrecognized,
}

impl DeviceReport {
    /// Decode a raw payload.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Decode`] when `input` is not valid JSON.
    pub fn decode(input: &str) -> Result<Self, TransformError> {
        serde_json::from_str(input)
            .map(Self::from_json)
            .map_err(TransformError::Decode)
    }

    /// Classify an already-parsed JSON value.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::Unrecognized;
        };
        Self::from_fields(fields)
    }

    fn from_fields(mut fields: Map<String, Value>) -> Self {
        if let Some(Value::Array(bits)) = fields.remove(ZONE_STATUS_FIELD) {
            return Self::Zone(ZoneStatus::new(bits));
        }

        let data_type = match fields.remove("type") {
            Some(Value::String(tag)) => Some(DataType::from(tag)),
            _ => None,
        };
        let Some(value) = fields.remove("value") else {
            return Self::Unrecognized;
        };

        match (&data_type, &value) {
            (Some(DataType::Bool), Value::Bool(on)) => return Self::Bool(*on),
            (Some(DataType::Uint16), Value::Number(number)) => {
                if let Some(raw) = as_integer(number).and_then(|v| u16::try_from(v).ok()) {
                    return Self::Uint16(raw);
                }
            }
            (Some(DataType::Int16), Value::Number(number)) => {
                if let Some(raw) = as_integer(number).and_then(|v| i16::try_from(v).ok()) {
                    return Self::Int16(raw);
                }
            }
            _ => {}
        }

        Self::Attribute { data_type, value }
    }

    /// The data type tag of the report, if it has one.
    #[must_use]
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Self::Bool(_) => Some(DataType::Bool),
            Self::Uint16(_) => Some(DataType::Uint16),
            Self::Int16(_) => Some(DataType::Int16),
            Self::Attribute { data_type, .. } => data_type.clone(),
            Self::Zone(_) | Self::Unrecognized => None,
        }
    }

    /// The reported `value` as a number, whatever its data type.
    ///
    /// Booleans are not numbers here.
    #[must_use]
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Self::Uint16(raw) => Some(f64::from(*raw)),
            Self::Int16(raw) => Some(f64::from(*raw)),
            Self::Attribute {
                value: Value::Number(number),
                ..
            } => number.as_f64(),
            _ => None,
        }
    }
}

/// The number as an integer; integral floats such as `2350.0` count.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn as_integer(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        let float = number.as_f64()?;
        (float.fract() == 0.0 && float.abs() <= f64::from(u32::MAX)).then(|| float as i64)
    })
}

/// The bit list of an IAS Zone status change notification.
///
/// Elements are kept as raw JSON: the bridge lists them as booleans, but
/// nothing guarantees it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoneStatus {
    bits: Vec<Value>,
}

impl ZoneStatus {
    #[must_use]
    pub fn new(bits: Vec<Value>) -> Self {
        Self { bits }
    }

    /// Bit 0 (`Alarm1`), when it is a boolean.
    #[must_use]
    pub fn alarm1(&self) -> Option<bool> {
        self.bits.first().and_then(Value::as_bool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_bool_report() {
        let report = DeviceReport::decode(r#"{"type":"bool","value":true}"#).unwrap();
        assert_eq!(report, DeviceReport::Bool(true));
    }

    #[test]
    fn should_decode_uint16_report() {
        let report = DeviceReport::decode(r#"{"type":"uint16","value":6520}"#).unwrap();
        assert_eq!(report, DeviceReport::Uint16(6520));
    }

    #[test]
    fn should_decode_negative_int16_report() {
        let report = DeviceReport::decode(r#"{"type":"int16","value":-550}"#).unwrap();
        assert_eq!(report, DeviceReport::Int16(-550));
    }

    #[test]
    fn should_decode_zone_report() {
        let report = DeviceReport::decode(r#"{"Zone Status":[true,false,false]}"#).unwrap();
        let DeviceReport::Zone(status) = report else {
            panic!("expected a zone report");
        };
        assert_eq!(status.alarm1(), Some(true));
    }

    #[test]
    fn should_prefer_zone_status_over_other_fields() {
        let report =
            DeviceReport::decode(r#"{"Zone Status":[false],"Zone ID":1,"value":3}"#).unwrap();
        assert!(matches!(report, DeviceReport::Zone(_)));
    }

    #[test]
    fn should_decode_untagged_value_as_attribute() {
        let report = DeviceReport::decode(r#"{"value":30}"#).unwrap();
        assert_eq!(
            report,
            DeviceReport::Attribute {
                data_type: None,
                value: Value::from(30),
            }
        );
    }

    #[test]
    fn should_decode_other_data_type_as_attribute() {
        let report = DeviceReport::decode(r#"{"type":"single","value":42.5}"#).unwrap();
        assert_eq!(report.data_type(), Some(DataType::Single));
        assert_eq!(report.numeric_value(), Some(42.5));
    }

    #[test]
    fn should_keep_mistyped_bool_as_attribute() {
        let report = DeviceReport::decode(r#"{"type":"bool","value":1}"#).unwrap();
        assert!(matches!(report, DeviceReport::Attribute { .. }));
        assert_eq!(report.data_type(), Some(DataType::Bool));
    }

    #[test]
    fn should_accept_integral_float_for_int16() {
        let report = DeviceReport::decode(r#"{"type":"int16","value":2350.0}"#).unwrap();
        assert_eq!(report, DeviceReport::Int16(2350));
    }

    #[test]
    fn should_accept_integral_float_for_uint16() {
        let report = DeviceReport::decode(r#"{"type":"uint16","value":6520.0}"#).unwrap();
        assert_eq!(report, DeviceReport::Uint16(6520));
    }

    #[test]
    fn should_keep_fractional_int16_as_attribute() {
        let report = DeviceReport::decode(r#"{"type":"int16","value":23.5}"#).unwrap();
        assert!(matches!(report, DeviceReport::Attribute { .. }));
    }

    #[test]
    fn should_keep_out_of_range_uint16_as_attribute() {
        let report = DeviceReport::decode(r#"{"type":"uint16","value":70000}"#).unwrap();
        assert!(matches!(report, DeviceReport::Attribute { .. }));
    }

    #[test]
    fn should_decode_record_without_value_as_unrecognized() {
        let report = DeviceReport::decode(r#"{"type":"bool"}"#).unwrap();
        assert_eq!(report, DeviceReport::Unrecognized);
    }

    #[test]
    fn should_decode_non_object_as_unrecognized() {
        assert_eq!(
            DeviceReport::decode("[1,2]").unwrap(),
            DeviceReport::Unrecognized
        );
        assert_eq!(DeviceReport::decode("5").unwrap(), DeviceReport::Unrecognized);
    }

    #[test]
    fn should_fail_on_malformed_json() {
        let err = DeviceReport::decode("{\"value\":").unwrap_err();
        assert!(matches!(err, TransformError::Decode(_)));
    }

    #[test]
    fn should_not_treat_bool_as_number() {
        assert_eq!(DeviceReport::Bool(true).numeric_value(), None);
    }

    #[test]
    fn should_expose_numeric_value_of_typed_reports() {
        assert_eq!(DeviceReport::Uint16(10).numeric_value(), Some(10.0));
        assert_eq!(DeviceReport::Int16(-10).numeric_value(), Some(-10.0));
    }

    #[test]
    fn should_report_no_alarm_bit_for_non_boolean_first_element() {
        let status = ZoneStatus::new(vec![Value::from("x")]);
        assert_eq!(status.alarm1(), None);
    }

    #[test]
    fn should_report_no_alarm_bit_for_empty_status() {
        let status = ZoneStatus::default();
        assert_eq!(status.alarm1(), None);
    }
}
