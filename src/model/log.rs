//! Log entries: the immutable record of one request or response.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which side of a request cycle an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogKind {
    Request,
    Response,
}

/// One entry in the activity log.
///
/// Fields are private: an entry cannot change once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    kind: LogKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
    /// HTTP status. Absent on requests and on transport failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    timestamp: Timestamp,
}

impl LogEntry {
    /// A request entry, stamped now.
    pub fn request(message: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: LogKind::Request,
            message: message.into(),
            payload: Some(payload),
            status: None,
            timestamp: Timestamp::now(),
        }
    }

    /// A response entry, stamped now.
    pub fn response(message: impl Into<String>, payload: Option<Value>, status: Option<u16>) -> Self {
        Self {
            kind: LogKind::Response,
            message: message.into(),
            payload,
            status,
            timestamp: Timestamp::now(),
        }
    }

    pub fn kind(&self) -> LogKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Whether this is a response carrying a 2xx status.
    pub fn is_success(&self) -> bool {
        self.kind == LogKind::Response && self.status.is_some_and(|s| (200..300).contains(&s))
    }
}
