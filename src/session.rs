//! One dashboard session: recipient, per-action fields, and the dispatcher.
//!
//! This is the surface a front end drives. It reads the recipient and the
//! current fields for a kind, and hands them to the [`Dispatcher`].

use std::cell::Ref;

use jiff::Zoned;
use jiff::civil::Date;

use crate::dispatch::{DispatchError, Dispatcher, HttpTransport, Transport, validate_recipient};
use crate::log_store::LogStore;
use crate::model::{ActionFields, ActionKind};

pub struct Session<T = HttpTransport> {
    recipient: String,
    fields: [ActionFields; 3],
    dispatcher: Dispatcher<T>,
}

impl<T: Transport> Session<T> {
    /// A session with empty fields for every kind.
    pub fn new(recipient: impl Into<String>, dispatcher: Dispatcher<T>) -> Self {
        Self {
            recipient: recipient.into(),
            fields: ActionKind::ALL.map(ActionFields::empty),
            dispatcher,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn set_recipient(&mut self, recipient: impl Into<String>) {
        self.recipient = recipient.into();
    }

    /// Whether the recipient would pass validation right now.
    pub fn is_ready(&self) -> bool {
        validate_recipient(&self.recipient).is_ok()
    }

    pub fn fields(&self, kind: ActionKind) -> &ActionFields {
        &self.fields[kind.index()]
    }

    /// Mutable access for field edits.
    pub fn fields_mut(&mut self, kind: ActionKind) -> &mut ActionFields {
        &mut self.fields[kind.index()]
    }

    /// Overwrites `kind`'s fields with sample content, dated from today.
    pub fn fill_sample(&mut self, kind: ActionKind) {
        self.fill_sample_on(kind, Zoned::now().date());
    }

    /// Overwrites `kind`'s fields with sample content, dated from `today`.
    pub fn fill_sample_on(&mut self, kind: ActionKind, today: Date) {
        self.fields[kind.index()] = ActionFields::sample(kind, today);
    }

    /// Sends `kind` with the current recipient and fields.
    pub async fn send(&self, kind: ActionKind) -> Result<(), DispatchError> {
        self.dispatcher.send(&self.recipient, self.fields(kind)).await
    }

    pub fn log(&self) -> Ref<'_, LogStore> {
        self.dispatcher.log()
    }

    pub fn clear_log(&self) {
        self.dispatcher.clear_log();
    }

    pub fn is_sending(&self, kind: ActionKind) -> bool {
        self.dispatcher.is_sending(kind)
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;
    use serde_json::{Value, json};

    use crate::dispatch::Outcome;
    use crate::model::{LogKind, NewArrival};

    struct AlwaysOk;

    impl Transport for AlwaysOk {
        async fn post_json(&self, _url: &str, _body: &Value) -> Outcome {
            Outcome::Responded {
                status: 200,
                body: json!({ "ok": true }),
            }
        }
    }

    fn session(recipient: &str) -> Session<AlwaysOk> {
        Session::new(recipient, Dispatcher::new("https://api.test/notify", AlwaysOk))
    }

    #[test]
    fn starts_with_empty_fields() {
        let s = session("");
        for kind in ActionKind::ALL {
            assert_eq!(s.fields(kind), &ActionFields::empty(kind));
        }
        assert!(!s.is_ready());
    }

    #[test]
    fn fill_sample_twice_is_stable() {
        let mut s = session("a@b.c");
        let today = date(2026, 10, 19);

        s.fill_sample_on(ActionKind::EventInvitation, today);
        let first = s.fields(ActionKind::EventInvitation).clone();
        s.fill_sample_on(ActionKind::EventInvitation, today);

        assert_eq!(s.fields(ActionKind::EventInvitation), &first);
    }

    #[test]
    fn fill_sample_overwrites_edits() {
        let mut s = session("a@b.c");
        if let ActionFields::NewArrival(f) = s.fields_mut(ActionKind::NewArrival) {
            f.book_name = "Edited".into();
        }

        s.fill_sample(ActionKind::NewArrival);

        assert_eq!(
            s.fields(ActionKind::NewArrival),
            &ActionFields::NewArrival(NewArrival::sample())
        );
    }

    #[test]
    fn return_reminder_sample_tracks_today() {
        let mut s = session("a@b.c");
        s.fill_sample(ActionKind::ReturnReminder);

        let ActionFields::ReturnReminder(f) = s.fields(ActionKind::ReturnReminder) else {
            panic!("wrong kind");
        };
        let due: Date = f.date.parse().unwrap();
        assert!(due > Zoned::now().date().yesterday().unwrap());
    }

    #[tokio::test]
    async fn send_uses_recipient_and_current_fields() {
        let mut s = session("test@x.com");
        *s.fields_mut(ActionKind::NewArrival) = ActionFields::NewArrival(NewArrival {
            book_name: "Dune".into(),
            image_url: String::new(),
        });

        s.send(ActionKind::NewArrival).await.unwrap();

        let log = s.log();
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.read()[0].payload(),
            Some(&json!({ "email": "test@x.com", "bookName": "Dune", "imageUrl": "" }))
        );
        assert_eq!(log.read()[1].kind(), LogKind::Response);
    }

    #[tokio::test]
    async fn empty_recipient_is_rejected_before_logging() {
        let mut s = session("");
        s.fill_sample(ActionKind::EventInvitation);

        assert!(s.send(ActionKind::EventInvitation).await.is_err());
        assert!(s.log().is_empty());
        assert!(!s.is_sending(ActionKind::EventInvitation));

        s.set_recipient("now@valid.io");
        assert!(s.is_ready());
        s.send(ActionKind::EventInvitation).await.unwrap();
        assert_eq!(s.log().len(), 2);

        s.clear_log();
        assert!(s.log().is_empty());
    }
}
