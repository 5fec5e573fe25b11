use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::error::{Error, Result};

pub const DEFAULT_PROMPT: &str = "You are the virtual assistant of a commercial-automation \
platform. Be cordial, professional and concise, and keep answers to at most 3-4 sentences. \
Help with commercial-automation products, customer support and demo scheduling.";

/// The singleton record governing AI response generation. The bot process
/// reads the same document this API writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AiConfig {
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            temperature: 0.7,
            max_tokens: 150,
        }
    }
}

// Request fields are option-typed so a missing key reports the documented
// message instead of a decoder error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePromptReq {
    pub prompt: Option<String>,
}

impl UpdatePromptReq {
    pub fn validate(&self) -> Result<String> {
        match self.prompt.as_deref() {
            Some(p) if !p.trim().is_empty() => Ok(p.to_string()),
            _ => Err(Error::Validation("prompt required".into())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateParametersReq {
    pub temperature: Option<f64>,
    pub max_tokens: Option<i64>,
}

impl UpdateParametersReq {
    /// Checks run in a fixed order: presence, then temperature, then
    /// max_tokens. The first failure is the reported one.
    pub fn validate(&self) -> Result<(f64, u32)> {
        let (temperature, max_tokens) = match (self.temperature, self.max_tokens) {
            (Some(t), Some(m)) => (t, m),
            _ => return Err(Error::Validation("missing parameters".into())),
        };

        if !(0.0..=1.0).contains(&temperature) {
            return Err(Error::Validation("temperature out of range".into()));
        }

        if !(50..=500).contains(&max_tokens) {
            return Err(Error::Validation("max_tokens out of range".into()));
        }

        Ok((temperature, max_tokens as u32))
    }
}
