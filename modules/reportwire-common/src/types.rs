use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportWireError;

/// Free-form header metadata attached to a rendered report by the
/// rendering pipeline. Carried through for logging, never interpreted.
pub type HeaderData = serde_json::Map<String, serde_json::Value>;

/// Fully-rendered report content handed to a notification channel.
///
/// A report render either failed (`Error`) or produced a bundle of
/// optional artifacts (`Rendered`); the two never coexist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportContent {
    Error {
        text: String,
    },
    Rendered {
        name: String,
        #[serde(default)]
        body: Option<String>,
        #[serde(default)]
        header_data: Option<HeaderData>,
        #[serde(default)]
        csv: Option<Vec<u8>>,
        #[serde(default)]
        screenshots: Vec<Vec<u8>>,
    },
}

impl ReportContent {
    pub fn error(text: impl Into<String>) -> Self {
        Self::Error { text: text.into() }
    }

    pub fn rendered(name: impl Into<String>) -> Self {
        Self::Rendered {
            name: name.into(),
            body: None,
            header_data: None,
            csv: None,
            screenshots: Vec::new(),
        }
    }
}

/// A configured destination for a report.
///
/// `config_json` is an opaque blob; only the channel registered for the
/// recipient's type interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub recipient_type: RecipientType,
    pub config_json: String,
}

impl Recipient {
    pub fn webhook(config_json: impl Into<String>) -> Self {
        Self {
            recipient_type: RecipientType::Webhook,
            config_json: config_json.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    Webhook,
    Email,
    Slack,
}

impl fmt::Display for RecipientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Webhook => write!(f, "webhook"),
            Self::Email => write!(f, "email"),
            Self::Slack => write!(f, "slack"),
        }
    }
}

impl FromStr for RecipientType {
    type Err = ReportWireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "webhook" => Ok(Self::Webhook),
            "email" => Ok(Self::Email),
            "slack" => Ok(Self::Slack),
            other => Err(ReportWireError::Validation(format!(
                "unknown recipient type '{other}'"
            ))),
        }
    }
}
