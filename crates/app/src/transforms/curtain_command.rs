//! Curtain command — rollershutter commands to Window Covering cluster
//! commands on the bridge's `out/Window Covering` topic.

use aqara_transforms_domain::command::{RollershutterCommand, WindowCoveringCommand};
use aqara_transforms_domain::error::TransformError;
use aqara_transforms_domain::topic::Direction;

use crate::transform::Transform;

/// Outbound: `UP`/`DOWN`/`STOP`/percent closed → device command.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurtainCommand;

impl CurtainCommand {
    pub const NAME: &'static str = "curtain-command";

    /// Map an item command to the device command.
    ///
    /// Percentages are inverted: the item speaks percent closed, the motor
    /// percent lifted.
    #[must_use]
    pub fn send(&self, command: RollershutterCommand) -> WindowCoveringCommand {
        match command {
            RollershutterCommand::Up => WindowCoveringCommand::UpOpen,
            RollershutterCommand::Down => WindowCoveringCommand::DownClose,
            RollershutterCommand::Stop => WindowCoveringCommand::Stop,
            RollershutterCommand::Percent(closed) => WindowCoveringCommand::GoToLiftPercentage {
                lift: 100u8.saturating_sub(closed),
            },
        }
    }
}

impl Transform for CurtainCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn direction(&self) -> Direction {
        Direction::Outbound
    }

    fn apply(&self, input: &str) -> Result<Option<String>, TransformError> {
        let command: RollershutterCommand = input.parse()?;
        let device_command = self.send(command);
        tracing::trace!(%command, ?device_command, "curtain command converted");
        device_command.to_json().map(Some)
    }
}
