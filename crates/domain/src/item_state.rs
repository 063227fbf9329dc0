//! Item states — the openHAB side of an inbound transform.

use std::fmt;

/// Switch state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnOff {
    On,
    Off,
}

impl From<bool> for OnOff {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for OnOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
        }
    }
}

/// State handed back to the rules engine.
///
/// Rendered with [`Display`](fmt::Display) in the engine's text form:
/// `ON`/`OFF` for switches, a plain number (`70`, `23.5`) otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemState {
    OnOff(OnOff),
    Decimal(f64),
}

impl From<OnOff> for ItemState {
    fn from(state: OnOff) -> Self {
        Self::OnOff(state)
    }
}

impl From<f64> for ItemState {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnOff(state) => state.fmt(f),
            Self::Decimal(value) => value.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_bool_to_on_off() {
        assert_eq!(OnOff::from(true), OnOff::On);
        assert_eq!(OnOff::from(false), OnOff::Off);
    }

    #[test]
    fn should_display_switch_state_in_uppercase() {
        assert_eq!(ItemState::from(OnOff::On).to_string(), "ON");
        assert_eq!(ItemState::from(OnOff::Off).to_string(), "OFF");
    }

    #[test]
    fn should_display_whole_decimal_without_fraction() {
        assert_eq!(ItemState::Decimal(70.0).to_string(), "70");
    }

    #[test]
    fn should_display_fractional_decimal() {
        assert_eq!(ItemState::Decimal(23.5).to_string(), "23.5");
        assert_eq!(ItemState::Decimal(-5.5).to_string(), "-5.5");
    }
}
