//! On/off — `OnOff / Report Attributes / OnOff` reports (wall switches,
//! wireless buttons) to a switch state.

use aqara_transforms_domain::item_state::{ItemState, OnOff};
use aqara_transforms_domain::report::DeviceReport;

use crate::transform::ReceiveTransform;

/// Inbound: `bool` report → `ON`/`OFF`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnOffReport;

impl ReceiveTransform for OnOffReport {
    const NAME: &'static str = "on-off";

    fn receive(&self, report: &DeviceReport) -> Option<ItemState> {
        match report {
            DeviceReport::Bool(on) => Some(OnOff::from(*on).into()),
            _ => None,
        }
    }
}
