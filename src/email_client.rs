use crate::domain::ContactEmail;
use secrecy::{ExposeSecret, Secret};

/// Client for the transactional mail API that delivers contact
/// notifications to the firm's inbox.
#[derive(Debug)]
pub struct EmailClient {
    http_client: reqwest::Client,
    base_url: String,
    sender: ContactEmail,
    recipient: ContactEmail,
    authorization_token: Secret<String>
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: ContactEmail,
        recipient: ContactEmail,
        authorization_token: Secret<String>,
        timeout: std::time::Duration
    ) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();
        Self {
            http_client,
            base_url,
            sender,
            recipient,
            authorization_token
        }
    }

    pub async fn send(
        &self,
        subject: &str,
        html_content: &str,
        text_content: &str
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: self.recipient.as_ref(),
            subject,
            html: html_content,
            text: text_content
        };

        self.http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
