use super::state::FormFields;

/// What the server said about one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted,
    Rejected { reason: String }
}

/// The request never produced a usable answer. Distinct from a rejection:
/// the server's verdict, if any, could not be read.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("Failed to reach the contact endpoint")]
    Network(#[from] reqwest::Error),
    #[error("The contact endpoint returned an unreadable response")]
    MalformedResponse(#[source] reqwest::Error)
}

/// Transport seam between the form controller and the contact endpoint.
#[allow(async_fn_in_trait)]
pub trait ContactGateway {
    async fn submit(&self, fields: &FormFields) -> Result<SubmissionResult, TransportError>;
}

#[derive(serde::Deserialize)]
struct AcceptedBody {
    message: String
}

#[derive(serde::Deserialize)]
struct RejectedBody {
    error: String
}

pub struct HttpContactGateway {
    http_client: reqwest::Client,
    base_url: String
}

impl HttpContactGateway {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url
        }
    }
}

impl ContactGateway for HttpContactGateway {
    async fn submit(&self, fields: &FormFields) -> Result<SubmissionResult, TransportError> {
        let response = self.http_client
            .post(format!("{}/api/contact", self.base_url))
            .json(fields)
            .send()
            .await?;

        if response.status().is_success() {
            let acknowledgment = response
                .json::<AcceptedBody>()
                .await
                .map_err(TransportError::MalformedResponse)?;
            tracing::debug!(
                acknowledgment = %acknowledgment.message,
                "The contact endpoint accepted the submission"
            );
            Ok(SubmissionResult::Accepted)
        } else {
            let body = response
                .json::<RejectedBody>()
                .await
                .map_err(TransportError::MalformedResponse)?;
            Ok(SubmissionResult::Rejected { reason: body.error })
        }
    }
}
