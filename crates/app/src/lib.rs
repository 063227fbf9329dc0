//! # aqara-transforms-app
//!
//! Application layer — the value transforms and the bindings that route
//! bridge messages through them.
//!
//! ## Responsibilities
//! - Define the [`Transform`](transform::Transform) contract: raw text in,
//!   a value, "not applicable", or a hard error out
//! - Provide the five concrete transforms:
//!   - `curtain-position` — curtain lift % → rollershutter % closed
//!   - `on-off` — `bool` report → `ON`/`OFF`
//!   - `temperature-humidity` — `uint16`/`int16` hundredths → decimal
//!   - `zone-state` — IAS zone alarm bit → `ON`/`OFF`
//!   - `curtain-command` — rollershutter command → Window Covering command
//! - Look transforms up by name ([`TransformKind`](catalogue::TransformKind))
//! - Route bridge topics to items and back ([`BindingTable`](binding::BindingTable))
//!
//! ## Dependency rule
//! Depends on `aqara-transforms-domain` only. Performs no IO: the caller
//! owns the message bus.

pub mod binding;
pub mod catalogue;
pub mod error;
pub mod transform;
pub mod transforms;
