// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Requested register of a drafted letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Auto,
    Formal,
    Informal,
}

impl Tone {
    /// Unrecognized labels fall back to `Auto`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "formal" => Tone::Formal,
            "informal" => Tone::Informal,
            _ => Tone::Auto,
        }
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Anything that is not a known label, strings or otherwise, means auto.
        match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(label)) => Ok(Tone::from_label(&label)),
            _ => Ok(Tone::Auto),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    #[serde(default)]
    pub letter: String,
    #[serde(default)]
    pub to: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmailResponse {
    pub success: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub letter: String,
}

pub type AnalyzeResponse = ChatResponse;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
