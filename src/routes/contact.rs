use actix_web::{
    http::StatusCode,
    web,
    HttpResponse,
    ResponseError
};
use anyhow::Context;
use crate::{
    domain::ContactMessage,
    email_client::EmailClient,
    templates
};

// submit_contact
#[derive(serde::Deserialize)]
pub struct ContactPayload {
    // Absent keys behave exactly like empty strings, so a payload missing
    // `name` and one carrying `"name": ""` get the same rejection.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String
}

#[derive(serde::Serialize)]
pub struct ContactAccepted {
    pub success: bool,
    pub message: String
}

#[derive(serde::Serialize)]
pub struct ContactRejected {
    pub error: String
}

pub const ACCEPTED_MESSAGE: &str = "Message sent successfully";
pub const GENERIC_FAILURE_ERROR: &str = "Failed to send message";

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to send message")]
    UnexpectedError(#[from] anyhow::Error)
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Validation reasons are written for the visitor; anything else is
        // collapsed to a generic message so internal detail stays out of the
        // response body.
        let error = match self {
            ContactError::ValidationError(reason) => reason.clone(),
            ContactError::UnexpectedError(_) => GENERIC_FAILURE_ERROR.to_string()
        };
        HttpResponse::build(self.status_code()).json(ContactRejected { error })
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(payload, email_client),
    fields(
        sender_email = %payload.email,
        sender_name = %payload.name
    )
)]
pub async fn submit_contact(
    payload: web::Json<ContactPayload>,
    email_client: web::Data<EmailClient>
) -> Result<HttpResponse, ContactError> {

    let message: ContactMessage = payload.0
        .try_into()
        .map_err(ContactError::ValidationError)?;

    forward_to_inbox(&email_client, &message)
        .await
        .context("Failed to forward the message to the notification inbox")?;

    Ok(HttpResponse::Ok().json(ContactAccepted {
        success: true,
        message: ACCEPTED_MESSAGE.to_string()
    }))
}

#[tracing::instrument(
    name = "Forwarding a contact message to the inbox",
    skip(email_client, message),
    fields(
        error_message = "",
        event_type = "[FORWARDING A CONTACT MESSAGE TO THE INBOX - EVENT]"
    ),
    err
)]
pub async fn forward_to_inbox(
    email_client: &EmailClient,
    message: &ContactMessage
) -> Result<(), anyhow::Error> {

    let subject = format!("New Contact Form Submission from {}", message.name.as_ref());

    let html_body = templates::notification_html(message)
        .context("Failed to render the notification email")?;
    let text_body = format!(
        "New Contact Form Submission\n\n\
        Name: {}\nEmail: {}\nCompany: {}\nMessage:\n{}",
        message.name.as_ref(),
        message.email.as_ref(),
        message.company.as_deref().unwrap_or("Not provided"),
        message.message.as_ref()
    );

    email_client
        .send(&subject, &html_body, &text_body)
        .await
        .map_err(|e| {
            tracing::error!("Failed to dispatch the notification email: {:?}", e);
            e
        })?;

    Ok(())
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
