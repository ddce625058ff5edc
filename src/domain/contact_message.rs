use super::contact_email::ContactEmail;
use super::contact_name::ContactName;
use super::message_body::MessageBody;
use super::super::routes::ContactPayload;

/// The rejection reason when any required field is empty or missing. The
/// response body exposes this string verbatim, so the wording is part of the
/// API contract.
pub const REQUIRED_FIELDS_ERROR: &str = "Name, email, and message are required";

#[derive(Debug)]
pub struct ContactMessage {
    pub name: ContactName,
    pub email: ContactEmail,
    pub company: Option<String>,
    pub message: MessageBody
}

impl TryFrom<ContactPayload> for ContactMessage {
    type Error = String;

    fn try_from(value: ContactPayload) -> Result<Self, Self::Error> {
        // Every required field is checked for presence before any of them is
        // parsed, so a submission with several blank fields gets the single
        // canonical reason rather than whichever parser runs first.
        let any_required_missing = [&value.name, &value.email, &value.message]
            .iter()
            .any(|field| field.trim().is_empty());
        if any_required_missing {
            return Err(REQUIRED_FIELDS_ERROR.to_string());
        }

        let name = ContactName::parse(value.name)?;
        let email = ContactEmail::parse(value.email)?;
        let message = MessageBody::parse(value.message)?;
        let company = Some(value.company.trim().to_string())
            .filter(|company| !company.is_empty());

        Ok(Self { name, email, company, message })
    }
}
