//! Commands — openHAB rollershutter commands in, Window Covering cluster
//! commands out.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TransformError;

/// A command sent by the rules engine to a rollershutter item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollershutterCommand {
    Up,
    Down,
    Stop,
    /// Move to a position, in percent closed.
    Percent(u8),
}

impl FromStr for RollershutterCommand {
    type Err = TransformError;

    /// Keywords are matched exactly. Anything else must be a base-10
    /// integer in `0..=100`, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UP" => Ok(Self::Up),
            "DOWN" => Ok(Self::Down),
            "STOP" => Ok(Self::Stop),
            other => {
                let percent: i64 =
                    other
                        .trim()
                        .parse()
                        .map_err(|source| TransformError::InvalidCommand {
                            input: other.to_string(),
                            source,
                        })?;
                u8::try_from(percent)
                    .ok()
                    .filter(|p| *p <= 100)
                    .map(Self::Percent)
                    .ok_or(TransformError::PercentageOutOfRange(percent))
            }
        }
    }
}

impl fmt::Display for RollershutterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("UP"),
            Self::Down => f.write_str("DOWN"),
            Self::Stop => f.write_str("STOP"),
            Self::Percent(percent) => percent.fmt(f),
        }
    }
}

/// A Window Covering cluster command, shaped as the bridge expects on its
/// `out/Window Covering` topic.
///
/// ```json
/// {"command":"UpOpen"}
/// {"command":"Go To Lift Percentage","arguments":{"Percentage Lift Value":60}}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "command", content = "arguments")]
pub enum WindowCoveringCommand {
    UpOpen,
    DownClose,
    Stop,
    #[serde(rename = "Go To Lift Percentage")]
    GoToLiftPercentage {
        /// Target position, in percent lifted (open).
        #[serde(rename = "Percentage Lift Value")]
        lift: u8,
    },
}

impl WindowCoveringCommand {
    /// Serialize to the bridge's JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, TransformError> {
        serde_json::to_string(self).map_err(TransformError::Encode)
    }
}
