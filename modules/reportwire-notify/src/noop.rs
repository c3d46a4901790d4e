use async_trait::async_trait;

use reportwire_common::{Recipient, ReportContent};

use crate::channel::NotifyChannel;
use crate::error::Result;

/// No-op channel. Stands in for real channels when notification dry-run
/// is enabled, and in tests.
pub struct NoopChannel;

#[async_trait]
impl NotifyChannel for NoopChannel {
    async fn send(&self, _content: &ReportContent, _recipient: &Recipient) -> Result<()> {
        Ok(())
    }
}
