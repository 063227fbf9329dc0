//! Temperature / humidity — `MeasuredValue` reports of the Temperature
//! Measurement and Relative Humidity Measurement clusters.
//!
//! Both clusters report hundredths of the unit (°C or %RH) as `int16`
//! or `uint16`.

use aqara_transforms_domain::item_state::ItemState;
use aqara_transforms_domain::report::DeviceReport;

use crate::transform::ReceiveTransform;

/// Inbound: fixed-point hundredths → decimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureHumidity;

impl ReceiveTransform for TemperatureHumidity {
    const NAME: &'static str = "temperature-humidity";

    fn receive(&self, report: &DeviceReport) -> Option<ItemState> {
        let hundredths = match report {
            DeviceReport::Uint16(raw) => f64::from(*raw),
            DeviceReport::Int16(raw) => f64::from(*raw),
            _ => return None,
        };
        Some(ItemState::Decimal(hundredths / 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;

    #[test]
    fn should_scale_int16_temperature() {
        let out = TemperatureHumidity
            .apply(r#"{"type":"int16","value":2350}"#)
            .unwrap();
        assert_eq!(out.as_deref(), Some("23.5"));
    }

    #[test]
    fn should_scale_negative_temperature() {
        let out = TemperatureHumidity
            .apply(r#"{"type":"int16","value":-550}"#)
            .unwrap();
        assert_eq!(out.as_deref(), Some("-5.5"));
    }

    #[test]
    fn should_scale_integral_float_value() {
        let out = TemperatureHumidity
            .apply(r#"{"type":"int16","value":2350.0}"#)
            .unwrap();
        assert_eq!(out.as_deref(), Some("23.5"));
    }

    #[test]
    fn should_scale_uint16_humidity() {
        let out = TemperatureHumidity
            .apply(r#"{"type":"uint16","value":6500}"#)
            .unwrap();
        assert_eq!(out.as_deref(), Some("65"));
    }

    #[test]
    fn should_produce_typed_decimal() {
        let state = TemperatureHumidity.receive(&DeviceReport::Int16(2350));
        assert_eq!(state, Some(ItemState::Decimal(23.5)));
    }

    #[test]
    fn should_skip_bool_report() {
        let out = TemperatureHumidity
            .apply(r#"{"type":"bool","value":true}"#)
            .unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn should_skip_other_numeric_types() {
        let out = TemperatureHumidity
            .apply(r#"{"type":"uint8","value":50}"#)
            .unwrap();
        assert_eq!(out, None);
    }
}
