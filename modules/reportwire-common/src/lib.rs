pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, FeatureFlags};
pub use error::ReportWireError;
pub use types::{HeaderData, Recipient, RecipientType, ReportContent};
