//! Action kinds: the three notification templates the API can trigger.

use serde::{Deserialize, Serialize};

/// One of the notification categories the API exposes.
///
/// Each kind routes to exactly one sub-path under the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    /// A new book was added to the catalogue.
    NewArrival,

    /// A borrowed book is due back.
    ReturnReminder,

    /// An invitation to a library event.
    EventInvitation,
}

impl ActionKind {
    /// Every kind, in dashboard order.
    pub const ALL: [Self; 3] = [Self::NewArrival, Self::ReturnReminder, Self::EventInvitation];

    /// The sub-path appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::NewArrival => "new-book",
            Self::ReturnReminder => "return",
            Self::EventInvitation => "event",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::NewArrival => "New Arrival Notification",
            Self::ReturnReminder => "Return Reminder",
            Self::EventInvitation => "Event Invitation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::NewArrival => "Trigger the 'New Book Added' email template.",
            Self::ReturnReminder => "Trigger the 'Overdue/Return' warning email.",
            Self::EventInvitation => "Trigger the 'Library Event' invitation email.",
        }
    }

    /// Position in [`ActionKind::ALL`]; used to index per-kind state.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::NewArrival => 0,
            Self::ReturnReminder => 1,
            Self::EventInvitation => 2,
        }
    }

    /// The full endpoint URL for this kind under `base_url`.
    ///
    /// A trailing `/` on the base is ignored.
    pub fn endpoint(self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_distinct() {
        let paths: Vec<_> = ActionKind::ALL.iter().map(|k| k.path()).collect();
        assert_eq!(paths, ["new-book", "return", "event"]);
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        assert_eq!(
            ActionKind::NewArrival.endpoint("https://api.test/notify"),
            "https://api.test/notify/new-book"
        );
        assert_eq!(
            ActionKind::EventInvitation.endpoint("https://api.test/notify/"),
            "https://api.test/notify/event"
        );
    }

    #[test]
    fn index_matches_all_order() {
        for (i, kind) in ActionKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
