//! Zone state — IAS Zone status change notifications (smoke detectors,
//! water leak sensors) to a switch state.

use aqara_transforms_domain::item_state::{ItemState, OnOff};
use aqara_transforms_domain::report::DeviceReport;

use crate::transform::ReceiveTransform;

/// Inbound: `Alarm1` bit → `ON`/`OFF`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneState;

impl ReceiveTransform for ZoneState {
    const NAME: &'static str = "zone-state";

    fn receive(&self, report: &DeviceReport) -> Option<ItemState> {
        let DeviceReport::Zone(status) = report else {
            return None;
        };
        status.alarm1().map(|alarm| OnOff::from(alarm).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;

    #[test]
    fn should_turn_on_when_alarm_bit_set() {
        let out = ZoneState.apply(r#"{"Zone Status":[true]}"#).unwrap();
        assert_eq!(out.as_deref(), Some("ON"));
    }

    #[test]
    fn should_turn_off_when_alarm_bit_clear() {
        let out = ZoneState.apply(r#"{"Zone Status":[false]}"#).unwrap();
        assert_eq!(out.as_deref(), Some("OFF"));
    }

    #[test]
    fn should_only_look_at_first_bit() {
        let out = ZoneState
            .apply(r#"{"Zone Status":[false,true,true],"Zone ID":255}"#)
            .unwrap();
        assert_eq!(out.as_deref(), Some("OFF"));
    }

    #[test]
    fn should_skip_non_boolean_first_bit() {
        let out = ZoneState.apply(r#"{"Zone Status":["x"]}"#).unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn should_skip_empty_status() {
        let out = ZoneState.apply(r#"{"Zone Status":[]}"#).unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn should_skip_attribute_report() {
        let out = ZoneState.apply(r#"{"type":"bool","value":true}"#).unwrap();
        assert_eq!(out, None);
    }
}
