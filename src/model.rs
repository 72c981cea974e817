//! Core data model: action kinds, their field sets, and log entries.

mod action;
mod log;
mod payload;

pub use action::ActionKind;
pub use log::{LogEntry, LogKind};
pub use payload::{ActionFields, EventInvitation, NewArrival, ReturnReminder};
