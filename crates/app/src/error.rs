//! Binding error types.

use aqara_transforms_domain::error::TransformError;
use aqara_transforms_domain::topic::{Direction, TopicError};

use crate::catalogue::TransformKind;

/// Errors raised while building a binding table or routing through it.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    /// A binding's topic does not follow the bridge layout.
    #[error("invalid topic {topic:?}")]
    InvalidTopic {
        topic: String,
        #[source]
        source: TopicError,
    },

    /// A binding pairs a transform with a topic of the other direction.
    #[error("item {item:?}: {transform} is {expected} but the topic is {actual}")]
    DirectionMismatch {
        item: String,
        transform: TransformKind,
        expected: Direction,
        actual: Direction,
    },

    /// An item is bound twice to the same topic.
    #[error("item {item:?} is bound to {topic:?} twice")]
    Duplicate { item: String, topic: String },

    /// An item has several outbound topics, so a command has no single
    /// destination.
    #[error("item {0:?} has more than one outbound binding")]
    AmbiguousOutbound(String),

    /// No outbound binding exists for the item.
    #[error("item {0:?} has no outbound binding")]
    Unbound(String),

    /// The transform rejected the message.
    #[error("transform failed for item {item:?}")]
    Transform {
        item: String,
        #[source]
        source: TransformError,
    },
}
