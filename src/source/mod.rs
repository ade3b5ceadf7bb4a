//! Remote record source.
//!
//! The feed is read exactly once, at startup. This module describes the
//! request and turns the host's response into records; the actual HTTP call is
//! made by the Zellij host on the plugin's behalf.
//!
//! # Modules
//!
//! - `request`: [`FetchRequest`] construction and response routing
//! - `decode`: status checking and JSON decoding with the record limit

pub mod decode;
pub mod request;

pub use decode::{check_status, decode_records, DEFAULT_RECORD_LIMIT};
pub use request::FetchRequest;
