//! Per-action field sets and the request bodies built from them.
//!
//! Field values are carried exactly as entered: no trimming, no coercion.
//! The recipient address is the only field shared by every kind and is
//! added when the body is built, never stored on the field set itself.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ActionKind;

const NEW_ARRIVAL_IMAGE: &str =
    "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?auto=format&fit=crop&q=80&w=800";
const RETURN_REMINDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1532012197267-da84d127e765?auto=format&fit=crop&q=80&w=800";
const EVENT_INVITATION_IMAGE: &str =
    "https://images.unsplash.com/photo-1540575467063-178a50c2df87?auto=format&fit=crop&q=80&w=800";

/// Fields for the "new book added" template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArrival {
    pub book_name: String,
    pub image_url: String,
}

/// Fields for the "return your book" template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnReminder {
    pub book_name: String,
    /// Due date as entered, normally `YYYY-MM-DD`.
    pub date: String,
    pub image_url: String,
}

/// Fields for the library event invitation template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInvitation {
    pub event_name: String,
    pub details: String,
    pub image_url: String,
}

impl NewArrival {
    pub fn sample() -> Self {
        Self {
            book_name: "The Design of Everyday Things".into(),
            image_url: NEW_ARRIVAL_IMAGE.into(),
        }
    }
}

impl ReturnReminder {
    /// Sample data due the day after `today`.
    pub fn sample(today: Date) -> Self {
        // Saturates at the last representable civil date.
        let due = today.tomorrow().unwrap_or(today);
        Self {
            book_name: "Clean Code".into(),
            date: due.to_string(),
            image_url: RETURN_REMINDER_IMAGE.into(),
        }
    }
}

impl EventInvitation {
    pub fn sample() -> Self {
        Self {
            event_name: "React Developers Meetup".into(),
            details: "Join us for pizza and code talk at the main hall. Bring your laptops!"
                .into(),
            image_url: EVENT_INVITATION_IMAGE.into(),
        }
    }
}

/// The current field values for one action, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ActionFields {
    NewArrival(NewArrival),
    ReturnReminder(ReturnReminder),
    EventInvitation(EventInvitation),
}

impl ActionFields {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::NewArrival(_) => ActionKind::NewArrival,
            Self::ReturnReminder(_) => ActionKind::ReturnReminder,
            Self::EventInvitation(_) => ActionKind::EventInvitation,
        }
    }

    /// Empty fields for `kind`.
    pub fn empty(kind: ActionKind) -> Self {
        match kind {
            ActionKind::NewArrival => Self::NewArrival(NewArrival::default()),
            ActionKind::ReturnReminder => Self::ReturnReminder(ReturnReminder::default()),
            ActionKind::EventInvitation => Self::EventInvitation(EventInvitation::default()),
        }
    }

    /// Fixed example content for `kind`. Only the return reminder's due
    /// date depends on `today`.
    pub fn sample(kind: ActionKind, today: Date) -> Self {
        match kind {
            ActionKind::NewArrival => Self::NewArrival(NewArrival::sample()),
            ActionKind::ReturnReminder => Self::ReturnReminder(ReturnReminder::sample(today)),
            ActionKind::EventInvitation => Self::EventInvitation(EventInvitation::sample()),
        }
    }

    /// Builds the wire body: `{ email, ...fields }`.
    pub fn body<'a>(&'a self, email: &'a str) -> RequestBody<'a> {
        RequestBody {
            email,
            fields: FieldsRef::from(self),
        }
    }
}

/// A request body borrowing the recipient and one action's fields.
#[derive(Debug, Serialize)]
pub struct RequestBody<'a> {
    pub email: &'a str,
    #[serde(flatten)]
    fields: FieldsRef<'a>,
}

/// Untagged view over the field sets so they flatten next to `email`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum FieldsRef<'a> {
    NewArrival(&'a NewArrival),
    ReturnReminder(&'a ReturnReminder),
    EventInvitation(&'a EventInvitation),
}

impl<'a> From<&'a ActionFields> for FieldsRef<'a> {
    fn from(fields: &'a ActionFields) -> Self {
        match fields {
            ActionFields::NewArrival(f) => Self::NewArrival(f),
            ActionFields::ReturnReminder(f) => Self::ReturnReminder(f),
            ActionFields::EventInvitation(f) => Self::EventInvitation(f),
        }
    }
}
