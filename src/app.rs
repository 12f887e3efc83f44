use adw::Application;
use log::debug;
use thiserror::Error;
use url::Url;

use crate::phone::{digits_of, format_phone};
use crate::wa;

/// Fewest digits accepted as a phone number: area code plus an eight-digit
/// subscriber number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Validation failures surfaced to the user. The `Display` text is the exact
/// message shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Please enter a message.")]
    MissingMessage,
}

/// All of the form's state. One instance lives behind the compose window;
/// nothing outlives the session.
#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    /// Display-formatted phone text. The digit string is derived from it,
    /// never stored separately.
    pub phone: String,
    pub message: String,
    pub error: Option<ComposeError>,
    /// True only while `submit` is running; `submit` resets it before it
    /// returns.
    pub sending: bool,
}

impl ComposeState {
    /// Applies a phone-field edit: reformat the raw text, drop any displayed
    /// error.
    pub fn edit_phone(&mut self, raw: &str) {
        self.phone = format_phone(raw);
        self.error = None;
    }

    /// Applies a message-field edit. The text is kept verbatim; trimming only
    /// happens at validation and link-building time.
    pub fn edit_message(&mut self, raw: &str) {
        self.message = raw.to_owned();
        self.error = None;
    }

    /// Whether the send control should be enabled. Must agree with the checks
    /// in `submit`.
    pub fn is_submittable(&self) -> bool {
        digits_of(&self.phone).len() >= MIN_PHONE_DIGITS && !self.message.trim().is_empty()
    }

    /// Validates the form and, on success, builds the deep link and hands it
    /// to `open` before touching any state. `open` runs in this same call
    /// stack: the URI launch must stay inside the user-gesture dispatch or
    /// the platform treats it as an unrequested popup and drops it.
    ///
    /// On success the phone field and error are cleared and the message is
    /// kept for the next send. On failure only `error` changes.
    pub fn submit(&mut self, open: impl FnOnce(&Url)) -> Result<(), ComposeError> {
        let digits = digits_of(&self.phone);
        if digits.len() < MIN_PHONE_DIGITS {
            self.error = Some(ComposeError::InvalidPhone);
            return Err(ComposeError::InvalidPhone);
        }

        let message = self.message.trim().to_owned();
        if message.is_empty() {
            self.error = Some(ComposeError::MissingMessage);
            return Err(ComposeError::MissingMessage);
        }

        self.sending = true;
        let url = wa::send_url(&digits, &message);
        debug!(
            "opening WhatsApp link ({} digits, {} message chars)",
            digits.len(),
            message.chars().count()
        );
        open(&url);

        // Clear the number but keep the message.
        self.phone.clear();
        self.error = None;
        self.sending = false;
        Ok(())
    }
}

pub fn build_ui(app: &Application) {
    crate::ui::compose::show_compose_window(app);
}
