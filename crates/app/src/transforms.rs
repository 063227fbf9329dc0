//! Concrete transforms, one per device attribute mapping.
//!
//! Each is a unit struct: no configuration, no state.

pub mod curtain_command;
pub mod curtain_position;
pub mod on_off;
pub mod temperature_humidity;
pub mod zone_state;

pub use curtain_command::CurtainCommand;
pub use curtain_position::CurtainPosition;
pub use on_off::OnOffReport;
pub use temperature_humidity::TemperatureHumidity;
pub use zone_state::ZoneState;
