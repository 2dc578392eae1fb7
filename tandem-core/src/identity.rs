//! Identity types for TANDEM agents

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Agent identifier: the unique name a remote agent registered under.
/// Registration names are chosen by the hosting system and are stable for
/// the lifetime of a matching operation.
pub type AgentId = String;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 request id (timestamp-sortable).
pub fn new_request_id() -> Uuid {
    Uuid::now_v7()
}
