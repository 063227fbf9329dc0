//! The value transform contract.
//!
//! Every transform is a stateless function of its input. Three outcomes:
//!
//! - `Ok(Some(output))` — hand `output` to the caller
//! - `Ok(None)` — not applicable; the caller should ignore the message
//! - `Err(_)` — the input is malformed

use aqara_transforms_domain::error::TransformError;
use aqara_transforms_domain::item_state::ItemState;
use aqara_transforms_domain::report::DeviceReport;
use aqara_transforms_domain::topic::Direction;

/// A named conversion between a bridge payload and an item value.
///
/// Implementations hold no state and may be shared freely across threads.
pub trait Transform: Send + Sync {
    /// Name the transform is looked up by (e.g. `"on-off"`).
    fn name(&self) -> &'static str;

    /// Which way the transform converts.
    fn direction(&self) -> Direction;

    /// Convert one raw input.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformError`] when the input cannot be decoded or
    /// parsed. Inputs of the wrong shape yield `Ok(None)` instead.
    fn apply(&self, input: &str) -> Result<Option<String>, TransformError>;
}

/// An inbound transform: pick the report variant it understands and turn
/// it into an item state.
///
/// Every `ReceiveTransform` is a [`Transform`]; decoding and rendering are
/// shared.
pub trait ReceiveTransform: Send + Sync {
    const NAME: &'static str;

    /// Map a decoded report, or `None` when the report is not for this
    /// transform.
    fn receive(&self, report: &DeviceReport) -> Option<ItemState>;
}

impl<T: ReceiveTransform> Transform for T {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn direction(&self) -> Direction {
        Direction::Inbound
    }

    fn apply(&self, input: &str) -> Result<Option<String>, TransformError> {
        let report = DeviceReport::decode(input)?;
        let Some(state) = self.receive(&report) else {
            tracing::debug!(
                transform = T::NAME,
                data_type = ?report.data_type(),
                "report not applicable"
            );
            return Ok(None);
        };
        tracing::trace!(transform = T::NAME, %state, "report converted");
        Ok(Some(state.to_string()))
    }
}
