use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use reportwire_common::{HeaderData, Recipient, ReportContent};

use crate::channel::NotifyChannel;
use crate::error::{NotificationError, Result};

/// Calls an HTTP webhook for a report recipient.
///
/// The recipient's `config_json` must contain a `target` field holding
/// the destination URL. The target is POSTed to as-is; no URL validation
/// happens before the request.
pub struct WebhookChannel {
    client: reqwest::Client,
    subject_prefix: String,
}

#[derive(Debug, Serialize)]
struct WebhookPayload {
    subject: String,
    content: WebhookContent,
}

/// The `content` half of the webhook payload. All three keys are always
/// serialized; unset ones go out as JSON null.
#[derive(Debug, Serialize)]
struct WebhookContent {
    body: Option<String>,
    data: Option<BTreeMap<String, Vec<u8>>>,
    images: Option<Vec<String>>,
}

impl WebhookChannel {
    pub fn new(subject_prefix: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            subject_prefix: subject_prefix.to_string(),
        }
    }

    fn error_template(text: &str) -> String {
        format!("Error: {text}")
    }

    fn subject(&self, content: &ReportContent) -> String {
        match content {
            ReportContent::Error { text } => Self::error_template(text),
            ReportContent::Rendered { name, .. } => {
                format!("{} {}", self.subject_prefix, name)
            }
        }
    }

    fn build_content(content: &ReportContent) -> WebhookContent {
        match content {
            ReportContent::Error { text } => WebhookContent {
                body: Some(Self::error_template(text)),
                data: None,
                images: None,
            },
            ReportContent::Rendered {
                name,
                csv,
                screenshots,
                ..
            } => {
                let images = if screenshots.is_empty() {
                    None
                } else {
                    Some(screenshots.iter().map(|s| STANDARD.encode(s)).collect())
                };
                let data = csv.as_ref().map(|bytes| {
                    BTreeMap::from([(format!("{name}.csv"), bytes.clone())])
                });
                WebhookContent {
                    body: None,
                    data,
                    images,
                }
            }
        }
    }

    fn target(recipient: &Recipient) -> Result<String> {
        let config: Value = serde_json::from_str(&recipient.config_json)?;
        config
            .get("target")
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| {
                NotificationError::new("An error occurred: recipient config has no 'target'")
            })
    }

    fn header_data(content: &ReportContent) -> Option<&HeaderData> {
        match content {
            ReportContent::Rendered { header_data, .. } => header_data.as_ref(),
            ReportContent::Error { .. } => None,
        }
    }
}

#[async_trait]
impl NotifyChannel for WebhookChannel {
    async fn send(&self, content: &ReportContent, recipient: &Recipient) -> Result<()> {
        let to = Self::target(recipient)?;
        let payload = WebhookPayload {
            subject: self.subject(content),
            content: Self::build_content(content),
        };

        // The original contract sends no headers of its own; the body is
        // raw JSON rather than a Content-Type-tagged request.
        let response = self
            .client
            .post(&to)
            .body(serde_json::to_vec(&payload)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::new(format!(
                "HTTP error occurred: {status} for {to}: {body}"
            )));
        }

        info!(
            header_data = ?Self::header_data(content),
            url = %to,
            status = status.as_u16(),
            "Report sent to webhook"
        );
        Ok(())
    }
}
