//! Bindings — which item listens to which bridge topic, through which
//! transform.
//!
//! A curtain typically has two bindings on the same item: an inbound one
//! on its `Analog Output` report topic and an outbound one on its
//! `Window Covering` command topic.

use aqara_transforms_domain::topic::{Direction, Topic};
use serde::Deserialize;

use crate::catalogue::TransformKind;
use crate::error::BindingError;
use crate::transform::Transform;

/// A binding as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BindingConfig {
    /// Item name in the rules engine.
    pub item: String,
    /// Bridge topic, inbound or outbound.
    pub topic: String,
    /// Transform applied to every message on the topic.
    pub transform: TransformKind,
}

/// A validated binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub item: String,
    pub topic: Topic,
    pub transform: TransformKind,
}

impl TryFrom<BindingConfig> for Binding {
    type Error = BindingError;

    fn try_from(config: BindingConfig) -> Result<Self, Self::Error> {
        let topic: Topic = config
            .topic
            .parse()
            .map_err(|source| BindingError::InvalidTopic {
                topic: config.topic.clone(),
                source,
            })?;

        let expected = config.transform.direction();
        if topic.direction != expected {
            return Err(BindingError::DirectionMismatch {
                item: config.item,
                transform: config.transform,
                expected,
                actual: topic.direction,
            });
        }

        Ok(Self {
            item: config.item,
            topic,
            transform: config.transform,
        })
    }
}

/// State update produced by an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    pub item: String,
    /// `None` when the transform found the message not applicable.
    pub state: Option<String>,
}

/// Message to publish for an outbound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub topic: String,
    pub payload: String,
}

/// The set of validated bindings.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl BindingTable {
    /// Validate and index the configured bindings.
    ///
    /// # Errors
    ///
    /// Returns a [`BindingError`] for an unparseable topic, a transform
    /// bound against the wrong direction, an item bound twice to one topic,
    /// or an item with more than one outbound topic. An item may listen on
    /// any number of inbound topics.
    pub fn new(configs: Vec<BindingConfig>) -> Result<Self, BindingError> {
        let mut bindings: Vec<Binding> = Vec::with_capacity(configs.len());
        for config in configs {
            let binding = Binding::try_from(config)?;
            let conflict = bindings
                .iter()
                .filter(|existing| existing.item == binding.item)
                .find_map(|existing| {
                    if existing.topic == binding.topic {
                        Some(BindingError::Duplicate {
                            item: binding.item.clone(),
                            topic: binding.topic.to_string(),
                        })
                    } else if existing.topic.direction == Direction::Outbound
                        && binding.topic.direction == Direction::Outbound
                    {
                        Some(BindingError::AmbiguousOutbound(binding.item.clone()))
                    } else {
                        None
                    }
                });
            if let Some(err) = conflict {
                return Err(err);
            }
            bindings.push(binding);
        }
        tracing::debug!(count = bindings.len(), "bindings loaded");
        Ok(Self { bindings })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run an inbound message through every binding on its topic.
    ///
    /// An unbound topic yields no updates.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidTopic`] when `topic` does not follow
    /// the bridge layout, and [`BindingError::Transform`] when a bound
    /// transform cannot decode `payload`.
    pub fn route_inbound(
        &self,
        topic: &str,
        payload: &str,
    ) -> Result<Vec<ItemUpdate>, BindingError> {
        let parsed: Topic = topic.parse().map_err(|source| BindingError::InvalidTopic {
            topic: topic.to_string(),
            source,
        })?;

        let updates = self
            .bindings
            .iter()
            .filter(|binding| binding.topic == parsed)
            .map(|binding| -> Result<ItemUpdate, BindingError> {
                let state = binding.transform.apply(payload).map_err(|source| {
                    BindingError::Transform {
                        item: binding.item.clone(),
                        source,
                    }
                })?;
                Ok(ItemUpdate {
                    item: binding.item.clone(),
                    state,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if updates.is_empty() {
            tracing::warn!(topic, "no binding for topic");
        }
        Ok(updates)
    }

    /// Turn an item command into the message to publish.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::Unbound`] when the item has no outbound
    /// binding, and [`BindingError::Transform`] when the command is
    /// rejected.
    pub fn route_outbound(
        &self,
        item: &str,
        command: &str,
    ) -> Result<Option<OutboundMessage>, BindingError> {
        let binding = self
            .bindings
            .iter()
            .find(|binding| binding.item == item && binding.topic.direction == Direction::Outbound)
            .ok_or_else(|| BindingError::Unbound(item.to_string()))?;

        let payload =
            binding
                .transform
                .apply(command)
                .map_err(|source| BindingError::Transform {
                    item: item.to_string(),
                    source,
                })?;

        Ok(payload.map(|payload| OutboundMessage {
            topic: binding.topic.to_string(),
            payload,
        }))
    }
}
