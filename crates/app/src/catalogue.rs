//! Name-based lookup of the available transforms.

use std::fmt;
use std::str::FromStr;

use aqara_transforms_domain::error::TransformError;
use aqara_transforms_domain::topic::Direction;
use serde::{Deserialize, Serialize};

use crate::transform::Transform;
use crate::transforms::{
    CurtainCommand, CurtainPosition, OnOffReport, TemperatureHumidity, ZoneState,
};

/// One of the known transforms, addressed by its kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformKind {
    CurtainPosition,
    OnOff,
    TemperatureHumidity,
    ZoneState,
    CurtainCommand,
}

impl TransformKind {
    /// Every transform, in listing order.
    pub const ALL: [Self; 5] = [
        Self::CurtainPosition,
        Self::OnOff,
        Self::TemperatureHumidity,
        Self::ZoneState,
        Self::CurtainCommand,
    ];

    /// The transform implementation.
    #[must_use]
    pub fn transform(self) -> &'static dyn Transform {
        match self {
            Self::CurtainPosition => &CurtainPosition,
            Self::OnOff => &OnOffReport,
            Self::TemperatureHumidity => &TemperatureHumidity,
            Self::ZoneState => &ZoneState,
            Self::CurtainCommand => &CurtainCommand,
        }
    }
}

impl Transform for TransformKind {
    fn name(&self) -> &'static str {
        self.transform().name()
    }

    fn direction(&self) -> Direction {
        self.transform().direction()
    }

    fn apply(&self, input: &str) -> Result<Option<String>, TransformError> {
        self.transform().apply(input)
    }
}

/// The requested name matches no transform.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown transform {0:?}")]
pub struct UnknownTransform(pub String);

impl FromStr for TransformKind {
    type Err = UnknownTransform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownTransform(s.to_string()))
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
