use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::{debug, error, info};
use serde::Serialize;
use thiserror::Error;

use crate::config;

const FALLBACK_MESSAGE: &str = "Please try again.";

/// Field mapping the EmailJS template expects.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub to_email: String,
    pub reply_to: String,
}

impl TemplateParams {
    /// Addressed to the channel inbox, with replies going back to the sender.
    pub fn to_channel(from_name: &str, from_email: &str, subject: String, message: String) -> Self {
        Self {
            from_name: from_name.to_string(),
            from_email: from_email.to_string(),
            subject,
            message,
            to_name: config::RECIPIENT_NAME.to_string(),
            to_email: config::RECIPIENT_EMAIL.to_string(),
            reply_to: from_email.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("EmailJS returned status {status}: {text}")]
    Status { status: u16, text: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl DispatchError {
    /// Best human-readable detail for the user.
    pub fn message(&self) -> String {
        let detail = match self {
            DispatchError::Status { text, .. } => text.trim(),
            DispatchError::Transport(text) | DispatchError::Encode(text) => text.trim(),
        };
        if detail.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            detail.to_string()
        }
    }
}

/// Sends one message to the channel inbox. Implementations make exactly one
/// outbound call per `send` and never retry.
pub trait EmailDispatcher {
    fn send(&self, params: TemplateParams) -> LocalBoxFuture<'static, Result<(), DispatchError>>;
}

#[derive(Serialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

#[derive(Clone, Debug)]
pub struct EmailJsClient {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsClient {
    pub fn new(service_id: &str, template_id: &str, public_key: &str) -> Self {
        Self {
            endpoint: config::EMAILJS_SEND_URL.to_string(),
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key: public_key.to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::EMAILJS_SERVICE_ID,
            config::EMAILJS_TEMPLATE_ID,
            config::EMAILJS_PUBLIC_KEY,
        )
    }

    fn request_body(&self, params: TemplateParams) -> SendRequest {
        SendRequest {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            user_id: self.public_key.clone(),
            template_params: params,
        }
    }
}

impl EmailDispatcher for EmailJsClient {
    fn send(&self, params: TemplateParams) -> LocalBoxFuture<'static, Result<(), DispatchError>> {
        let endpoint = self.endpoint.clone();
        let body = self.request_body(params);

        async move {
            debug!("Sending email with subject: {}", body.template_params.subject);

            let request = Request::post(&endpoint)
                .json(&body)
                .map_err(|e| DispatchError::Encode(e.to_string()))?;

            let response = request.send().await.map_err(|e| {
                error!("EmailJS request failed: {}", e);
                DispatchError::Transport(e.to_string())
            })?;

            if response.status() == 200 {
                info!("Email sent successfully");
                Ok(())
            } else {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                error!("EmailJS returned status {}: {}", status, text);
                Err(DispatchError::Status { status, text })
            }
        }
        .boxed_local()
    }
}
