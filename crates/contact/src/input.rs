use mailroom_shared::Result;
use serde::Deserialize;
use validator::Validate;

use crate::NewContactMessage;

/// Body of a contact-form submission as it arrives on the wire.
///
/// Every field is optional at the type level so that an absent field is a
/// validation failure rather than a decoding failure. The email address is
/// only checked for presence.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SubmitInput {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl SubmitInput {
    pub fn into_draft(self) -> Result<NewContactMessage> {
        self.validate()?;

        Ok(NewContactMessage {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}
