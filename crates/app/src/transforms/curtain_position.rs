//! Curtain position — `Analog Output / PresentValue` reports of a curtain
//! motor to a rollershutter state.
//!
//! The motor reports how far it is lifted (open); the rollershutter item
//! holds how far it is closed, so the value is inverted.

use aqara_transforms_domain::item_state::ItemState;
use aqara_transforms_domain::report::DeviceReport;

use crate::transform::ReceiveTransform;

/// Inbound: lift % → `100 - lift`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurtainPosition;

impl ReceiveTransform for CurtainPosition {
    const NAME: &'static str = "curtain-position";

    fn receive(&self, report: &DeviceReport) -> Option<ItemState> {
        report
            .numeric_value()
            .map(|lift| ItemState::Decimal(100.0 - lift))
    }
}
