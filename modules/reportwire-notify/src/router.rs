use async_trait::async_trait;
use tracing::info;

use reportwire_common::{Config, Recipient, RecipientType, ReportContent};

use crate::channel::NotifyChannel;
use crate::error::{NotificationError, Result};
use crate::noop::NoopChannel;
use crate::webhook::WebhookChannel;

/// Routes a notification to the channel registered for the recipient's
/// type. Recipient types without a registered channel fail the send.
pub struct ChannelRouter {
    webhook: Box<dyn NotifyChannel>,
    dry_run: bool,
}

impl ChannelRouter {
    pub fn new(subject_prefix: &str) -> Self {
        Self {
            webhook: Box::new(WebhookChannel::new(subject_prefix)),
            dry_run: false,
        }
    }

    /// Build a router from application configuration. Dry-run mode
    /// suppresses delivery for every recipient type without touching the
    /// callers.
    pub fn from_config(config: &Config) -> Self {
        if config.notification_dry_run {
            info!("Notification dry-run enabled, deliveries are suppressed");
            return Self::dry_run();
        }
        Self::new(&config.email_reports_subject_prefix)
    }

    pub fn dry_run() -> Self {
        Self {
            webhook: Box::new(NoopChannel),
            dry_run: true,
        }
    }
}

#[async_trait]
impl NotifyChannel for ChannelRouter {
    async fn send(&self, content: &ReportContent, recipient: &Recipient) -> Result<()> {
        if self.dry_run {
            return NoopChannel.send(content, recipient).await;
        }
        match recipient.recipient_type {
            RecipientType::Webhook => self.webhook.send(content, recipient).await,
            other => Err(NotificationError::new(format!(
                "An error occurred: no channel registered for recipient type '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unregistered_recipient_type_fails() {
        let router = ChannelRouter::new("[Report]");
        let recipient = Recipient {
            recipient_type: RecipientType::Email,
            config_json: "{}".to_string(),
        };
        let err = router
            .send(&ReportContent::error("boom"), &recipient)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[tokio::test]
    async fn dry_run_covers_every_recipient_type() {
        let router = ChannelRouter::dry_run();
        for recipient_type in [
            RecipientType::Webhook,
            RecipientType::Email,
            RecipientType::Slack,
        ] {
            let recipient = Recipient {
                recipient_type,
                config_json: "{}".to_string(),
            };
            router
                .send(&ReportContent::rendered("sales"), &recipient)
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn dry_run_suppresses_delivery() {
        let router = ChannelRouter::dry_run();
        // Unreachable target; the noop channel never touches it.
        let recipient = Recipient::webhook(r#"{"target":"http://127.0.0.1:1/hook"}"#);
        router
            .send(&ReportContent::rendered("sales"), &recipient)
            .await
            .unwrap();
    }
}
