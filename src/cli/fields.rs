//! Field edits: setting one named field on an action's field set.

use clap::Args;

use crate::model::ActionFields;

/// Field overrides applied after any sample fill.
#[derive(Debug, Default, Args)]
pub struct FieldEdits {
    /// Book title (new-arrival, return-reminder).
    #[arg(long)]
    book_name: Option<String>,

    /// Due date, `YYYY-MM-DD` (return-reminder).
    #[arg(long)]
    date: Option<String>,

    /// Event name (event-invitation).
    #[arg(long)]
    event_name: Option<String>,

    /// Event details (event-invitation).
    #[arg(long)]
    details: Option<String>,

    /// Cover or banner image URL (all kinds).
    #[arg(long)]
    image_url: Option<String>,
}

impl FieldEdits {
    /// Applies every given flag, in declaration order.
    pub(super) fn apply(self, fields: &mut ActionFields) -> Result<(), String> {
        let edits = [
            ("book-name", self.book_name),
            ("date", self.date),
            ("event-name", self.event_name),
            ("details", self.details),
            ("image-url", self.image_url),
        ];
        for (name, value) in edits {
            if let Some(value) = value {
                set_field(fields, name, value)?;
            }
        }
        Ok(())
    }
}

/// Sets the field called `name` (kebab-case or camelCase) to `value`.
pub(super) fn set_field(fields: &mut ActionFields, name: &str, value: String) -> Result<(), String> {
    let kind = fields.kind();
    let slot = match fields {
        ActionFields::NewArrival(f) => match name {
            "book-name" | "bookName" => Some(&mut f.book_name),
            "image-url" | "imageUrl" => Some(&mut f.image_url),
            _ => None,
        },
        ActionFields::ReturnReminder(f) => match name {
            "book-name" | "bookName" => Some(&mut f.book_name),
            "date" => Some(&mut f.date),
            "image-url" | "imageUrl" => Some(&mut f.image_url),
            _ => None,
        },
        ActionFields::EventInvitation(f) => match name {
            "event-name" | "eventName" => Some(&mut f.event_name),
            "details" => Some(&mut f.details),
            "image-url" | "imageUrl" => Some(&mut f.image_url),
            _ => None,
        },
    };
    let slot = slot.ok_or_else(|| format!("'{name}' is not a field of {}", kind.path()))?;
    *slot = value;
    Ok(())
}
