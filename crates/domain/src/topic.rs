//! Bridge topics.
//!
//! The bridge publishes device traffic under
//! `<prefix>/<ieee>/<endpoint>/in/<cluster>/<command>[/<attribute>]` and
//! listens for commands on `<prefix>/<ieee>/<endpoint>/out/<cluster>`.
//! The prefix may itself contain `/`.

use std::fmt;
use std::str::FromStr;

/// Which way a message travels relative to the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Device → engine (`in` topics).
    Inbound,
    /// Engine → device (`out` topics).
    Outbound,
}

impl Direction {
    /// The topic segment marking this direction.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Inbound => "in",
            Self::Outbound => "out",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "in" => Some(Self::Inbound),
            "out" => Some(Self::Outbound),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inbound => f.write_str("inbound"),
            Self::Outbound => f.write_str("outbound"),
        }
    }
}

/// Why a topic string could not be parsed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TopicError {
    #[error("topic has no `in` or `out` segment")]
    MissingDirection,

    #[error("topic has no prefix before the device address")]
    MissingPrefix,

    #[error("invalid IEEE address {0:?}, expected 16 hex digits")]
    InvalidIeee(String),

    #[error("invalid endpoint {0:?}")]
    InvalidEndpoint(String),

    #[error("topic has no cluster segment")]
    MissingCluster,

    #[error("inbound topic has no command segment")]
    MissingCommand,

    #[error("outbound topic must end at the cluster segment")]
    TrailingSegments,
}

/// A parsed bridge topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic {
    pub prefix: String,
    /// 64-bit IEEE address of the device.
    pub ieee: u64,
    pub endpoint: u8,
    pub direction: Direction,
    /// Cluster name, e.g. `Window Covering`.
    pub cluster: String,
    /// Segments after the cluster: command and, for attribute reports, the
    /// attribute name. Always empty for outbound topics.
    pub path: Vec<String>,
}

impl Topic {
    /// Build an outbound command topic.
    #[must_use]
    pub fn outbound(
        prefix: impl Into<String>,
        ieee: u64,
        endpoint: u8,
        cluster: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            ieee,
            endpoint,
            direction: Direction::Outbound,
            cluster: cluster.into(),
            path: Vec::new(),
        }
    }
}

fn parse_ieee(segment: &str) -> Result<u64, TopicError> {
    if segment.len() != 16 || !segment.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TopicError::InvalidIeee(segment.to_string()));
    }
    u64::from_str_radix(segment, 16).map_err(|_| TopicError::InvalidIeee(segment.to_string()))
}

/// IEEE address and endpoint from the two segments before the direction
/// marker at `marker`.
fn parse_device(segments: &[&str], marker: usize) -> Result<(u64, u8), TopicError> {
    if marker < 3 {
        return Err(TopicError::MissingPrefix);
    }
    let ieee = parse_ieee(segments[marker - 2])?;
    let endpoint_segment = segments[marker - 1];
    let endpoint = endpoint_segment
        .parse()
        .map_err(|_| TopicError::InvalidEndpoint(endpoint_segment.to_string()))?;
    Ok((ieee, endpoint))
}

impl FromStr for Topic {
    type Err = TopicError;

    /// The direction marker is the first `in`/`out` segment preceded by a
    /// valid device address, so the prefix may contain either word. When
    /// no candidate qualifies, the error of the first one is returned.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('/').collect();

        let mut first_error = None;
        for (marker, segment) in segments.iter().enumerate().skip(2) {
            let Some(direction) = Direction::from_segment(segment) else {
                continue;
            };
            match parse_device(&segments, marker) {
                Ok((ieee, endpoint)) => {
                    return Self::from_segments(&segments, marker, direction, ieee, endpoint);
                }
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        Err(first_error.unwrap_or(TopicError::MissingDirection))
    }
}

impl Topic {
    fn from_segments(
        segments: &[&str],
        marker: usize,
        direction: Direction,
        ieee: u64,
        endpoint: u8,
    ) -> Result<Self, TopicError> {
        let mut rest = segments[marker + 1..].iter().map(ToString::to_string);
        let cluster = rest
            .next()
            .filter(|c| !c.is_empty())
            .ok_or(TopicError::MissingCluster)?;
        let path: Vec<String> = rest.collect();

        match direction {
            Direction::Inbound if path.is_empty() => return Err(TopicError::MissingCommand),
            Direction::Outbound if !path.is_empty() => return Err(TopicError::TrailingSegments),
            _ => {}
        }

        Ok(Self {
            prefix: segments[..marker - 2].join("/"),
            ieee,
            endpoint,
            direction,
            cluster,
            path,
        })
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{:016X}/{}/{}/{}",
            self.prefix,
            self.ieee,
            self.endpoint,
            self.direction.segment(),
            self.cluster
        )?;
        for segment in &self.path {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
