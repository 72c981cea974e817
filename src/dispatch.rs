//! Request dispatch: validate, build, send, classify, log.
//!
//! A send runs through a per-kind two-state machine:
//!
//! ```text
//! Idle --send--> Sending --outcome--> Idle
//! ```
//!
//! Each completed cycle appends exactly one request entry followed later by
//! exactly one response entry. A rejected recipient appends nothing.
//!
//! Everything runs on one thread. The only suspension point is the network
//! call, so log appends never race and no borrow is held across `.await`.

mod transport;

use std::cell::{Ref, RefCell};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::log_store::LogStore;
use crate::model::{ActionFields, ActionKind, LogEntry};

pub use transport::{HttpTransport, Outcome, Transport};

/// Errors that abort a send before anything is logged.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Please enter a valid target email (got {0:?})")]
    InvalidRecipient(String),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Where a single action kind stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
}

/// In-flight tracking, independent per action kind.
///
/// Re-entrant sends of the same kind are counted rather than rejected, so
/// the kind reads as `Sending` until every one of its calls has resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionState {
    in_flight: [u32; 3],
}

impl ActionState {
    pub fn phase(&self, kind: ActionKind) -> Phase {
        if self.in_flight[kind.index()] > 0 {
            Phase::Sending
        } else {
            Phase::Idle
        }
    }

    pub fn is_sending(&self, kind: ActionKind) -> bool {
        self.phase(kind) == Phase::Sending
    }

    fn begin(&mut self, kind: ActionKind) {
        self.in_flight[kind.index()] += 1;
    }

    fn finish(&mut self, kind: ActionKind) {
        let count = &mut self.in_flight[kind.index()];
        *count = count.saturating_sub(1);
    }
}

/// Checks the recipient before anything is built or sent.
pub fn validate_recipient(recipient: &str) -> Result<(), DispatchError> {
    if recipient.contains('@') {
        Ok(())
    } else {
        Err(DispatchError::InvalidRecipient(recipient.to_string()))
    }
}

/// The response entry for a resolved call.
pub fn response_entry(outcome: Outcome) -> LogEntry {
    match outcome {
        Outcome::Responded { status, body } if (200..300).contains(&status) => {
            LogEntry::response("Email dispatched successfully", Some(body), Some(status))
        }
        Outcome::Responded { status, body } => {
            let message = format!("Error: {}", server_error(&body));
            LogEntry::response(message, Some(body), Some(status))
        }
        Outcome::TransportFailure { description } => {
            LogEntry::response(format!("Network error: {description}"), None, None)
        }
    }
}

/// The server-reported `error` field, or `"Unknown"` when absent or blank.
fn server_error(body: &Value) -> String {
    match body.get("error") {
        None | Some(Value::Null | Value::Bool(false)) => "Unknown".to_string(),
        Some(Value::String(s)) if s.is_empty() => "Unknown".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Owns the activity log and per-kind state for one session.
pub struct Dispatcher<T = HttpTransport> {
    base_url: String,
    transport: T,
    log: RefCell<LogStore>,
    state: RefCell<ActionState>,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            log: RefCell::new(LogStore::new()),
            state: RefCell::new(ActionState::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one notification and logs the attempt.
    ///
    /// Only a bad recipient (or an unencodable body) returns an error, and
    /// then nothing is logged. API and transport failures are absorbed into
    /// the response entry.
    pub async fn send(&self, recipient: &str, fields: &ActionFields) -> Result<(), DispatchError> {
        let kind = fields.kind();
        if let Err(e) = validate_recipient(recipient) {
            warn!(?kind, "rejected send: invalid recipient");
            return Err(e);
        }

        let body = serde_json::to_value(fields.body(recipient))?;
        let url = kind.endpoint(&self.base_url);

        self.state.borrow_mut().begin(kind);
        self.log
            .borrow_mut()
            .append(LogEntry::request(format!("POST {url}"), body.clone()));
        debug!(?kind, %url, "request issued");

        let outcome = self.transport.post_json(&url, &body).await;
        match &outcome {
            Outcome::Responded { status, .. } => info!(?kind, status, "request resolved"),
            Outcome::TransportFailure { description } => {
                warn!(?kind, %description, "transport failure");
            }
        }

        self.log.borrow_mut().append(response_entry(outcome));
        self.state.borrow_mut().finish(kind);
        Ok(())
    }

    /// The log, oldest first. Do not hold across `.await`.
    pub fn log(&self) -> Ref<'_, LogStore> {
        self.log.borrow()
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn is_sending(&self, kind: ActionKind) -> bool {
        self.state.borrow().is_sending(kind)
    }
}
