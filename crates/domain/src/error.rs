//! Common error types used by every transform.
//!
//! A transform has three outcomes: a value, "not applicable" (`Ok(None)`),
//! or one of the hard failures below. Type mismatches are never errors.

/// Hard failures of a value transform.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The input is not valid JSON.
    #[error("failed to decode payload")]
    Decode(#[source] serde_json::Error),

    /// A device command could not be serialized.
    #[error("failed to encode device command")]
    Encode(#[source] serde_json::Error),

    /// An outbound command is neither a keyword nor an integer.
    #[error("invalid rollershutter command {input:?}")]
    InvalidCommand {
        /// The raw command text.
        input: String,
        /// Why it did not parse as an integer percentage.
        #[source]
        source: std::num::ParseIntError,
    },

    /// An outbound percentage lies outside `0..=100`.
    #[error("percentage {0} is outside 0..=100")]
    PercentageOutOfRange(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_decode_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err = TransformError::Decode(json_err);
        assert_eq!(err.to_string(), "failed to decode payload");
    }

    #[test]
    fn should_expose_json_error_as_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err = TransformError::Decode(json_err);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn should_display_invalid_command_with_input() {
        let source = "half".parse::<i64>().unwrap_err();
        let err = TransformError::InvalidCommand {
            input: "half".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "invalid rollershutter command \"half\"");
    }

    #[test]
    fn should_display_out_of_range_percentage() {
        let err = TransformError::PercentageOutOfRange(150);
        assert_eq!(err.to_string(), "percentage 150 is outside 0..=100");
    }
}
