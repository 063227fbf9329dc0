//! # aqara-transforms-domain
//!
//! Pure payload model for the AqaraHub ↔ openHAB value transforms.
//!
//! ## Responsibilities
//! - ZCL **data type tags** as spelled by the bridge (`bool`, `uint16`, …)
//! - **Device reports**: inbound JSON payloads decoded into a closed set of
//!   typed variants
//! - **Device commands**: outbound Window Covering commands, serialized
//!   exactly as the bridge expects
//! - **Item states / commands**: the openHAB side of each conversion
//! - **Topics**: the bridge's `<prefix>/<ieee>/<endpoint>/<in|out>/…` layout
//! - Error types shared by every transform
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.

pub mod command;
pub mod data_type;
pub mod error;
pub mod item_state;
pub mod report;
pub mod topic;
