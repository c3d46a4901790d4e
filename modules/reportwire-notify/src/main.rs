use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use reportwire_common::{Config, Recipient, RecipientType, ReportContent};
use reportwire_notify::{ChannelRouter, NotifyChannel};

const USAGE: &str = "usage: send-report <content.json> <recipient-type> <recipient-config-json>";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("reportwire=info".parse()?))
        .init();

    let mut args = std::env::args().skip(1);
    let content_path = args.next().context(USAGE)?;
    let recipient_type: RecipientType = args.next().context(USAGE)?.parse()?;
    let config_json = args.next().context(USAGE)?;

    let config = Config::notify_from_env();
    config.log_redacted();

    let raw = std::fs::read_to_string(&content_path)
        .with_context(|| format!("failed to read {content_path}"))?;
    let content: ReportContent =
        serde_json::from_str(&raw).context("invalid report content JSON")?;

    let recipient = Recipient {
        recipient_type,
        config_json,
    };

    let router = ChannelRouter::from_config(&config);
    router.send(&content, &recipient).await?;

    info!("Report dispatched");
    Ok(())
}
