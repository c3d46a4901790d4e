pub mod channel;
pub mod error;
pub mod noop;
pub mod router;
pub mod webhook;

pub use channel::NotifyChannel;
pub use error::{NotificationError, Result};
pub use noop::NoopChannel;
pub use router::ChannelRouter;
pub use webhook::WebhookChannel;
