use async_trait::async_trait;

use reportwire_common::{Recipient, ReportContent};

use crate::error::Result;

/// Pluggable delivery channel for rendered report content.
#[async_trait]
pub trait NotifyChannel: Send + Sync {
    /// Deliver `content` to a single recipient. One linear attempt per
    /// call, no internal retry; the scheduler that invokes this owns
    /// retries and concurrency.
    async fn send(&self, content: &ReportContent, recipient: &Recipient) -> Result<()>;
}
