//! Operations on the verify resource

use std::sync::Arc;
use tracing::{debug, info};
use url::form_urlencoded;
use verify_shared::utils::mask_recipient;

use crate::domain::entities::{EmailMessage, VerificationParams, VerificationResult};
use crate::errors::{VerifyError, VerifyResult};

use super::builder::build_request;
use super::decoder::{decode_email_message, decode_verification};
use super::traits::{HttpMethod, Transport};

/// Path of the verify resource
pub const VERIFY_PATH: &str = "verify";

/// Path of the email message sub-resource
pub const EMAIL_MESSAGES_PATH: &str = "verify/messages/email";

/// Client for the verify resource
///
/// Every operation performs exactly one exchange through the transport and
/// returns its errors unchanged. No state is kept between calls.
pub struct VerifyService<T: Transport + ?Sized> {
    transport: Arc<T>,
}

impl<T: Transport + ?Sized> Clone for VerifyService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport + ?Sized> VerifyService<T> {
    /// Create a new verify service on top of a transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Underlying transport
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Create a new one-time password challenge for one recipient
    ///
    /// # Arguments
    ///
    /// * `recipient` - Phone number or email address, must not be empty
    /// * `params` - Optional challenge settings
    pub async fn create(
        &self,
        recipient: &str,
        params: Option<&VerificationParams>,
    ) -> VerifyResult<VerificationResult> {
        let request = build_request(recipient, params)?;
        let body = serde_json::to_string(&request).map_err(VerifyError::Encode)?;

        debug!("Creating verification for {}", mask_recipient(recipient));

        let payload = self
            .transport
            .send(HttpMethod::Post, VERIFY_PATH, Some(body))
            .await?;
        let verification = decode_verification(&payload)?;

        info!(
            "Verification {} created with status '{}'",
            verification.id, verification.status
        );
        Ok(verification)
    }

    /// Retrieve an existing verification by its ID
    pub async fn read(&self, id: &str) -> VerifyResult<VerificationResult> {
        let payload = self
            .transport
            .send(HttpMethod::Get, &resource_path(id), None)
            .await?;
        decode_verification(&payload)
    }

    /// Delete an existing verification by its ID
    pub async fn delete(&self, id: &str) -> VerifyResult<()> {
        self.transport
            .send(HttpMethod::Delete, &resource_path(id), None)
            .await?;

        info!("Verification {} deleted", id);
        Ok(())
    }

    /// Check a token entered by the end user against a verification
    ///
    /// The service answers with the updated verification; a wrong token is
    /// reported by the transport as an API error.
    pub async fn verify_token(&self, id: &str, token: &str) -> VerifyResult<VerificationResult> {
        let path = token_path(id, token);

        debug!("Checking token for verification {}", id);

        let payload = self.transport.send(HttpMethod::Get, &path, None).await?;
        let verification = decode_verification(&payload)?;

        info!(
            "Verification {} token checked, status '{}'",
            verification.id, verification.status
        );
        Ok(verification)
    }

    /// Retrieve the email message sent for an email verification
    pub async fn read_email_message(&self, id: &str) -> VerifyResult<EmailMessage> {
        let path = format!("{}/{}", EMAIL_MESSAGES_PATH, id);
        let payload = self.transport.send(HttpMethod::Get, &path, None).await?;
        decode_email_message(&payload)
    }
}

fn resource_path(id: &str) -> String {
    format!("{}/{}", VERIFY_PATH, id)
}

fn token_path(id: &str, token: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("token", token)
        .finish();
    format!("{}?{}", resource_path(id), query)
}
