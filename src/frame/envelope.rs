//! Frame request envelope and the verified message extracted from it.

use serde::{Deserialize, Serialize};

/// Body of a frame action POST.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRequest {
    /// Client-reported action details. Not authenticated.
    #[serde(default)]
    pub untrusted_data: UntrustedData,
    /// Signed message bytes, hex-encoded.
    #[serde(default)]
    pub trusted_data: TrustedData,
}

/// Client-reported half of the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedData {
    /// Acting user's id.
    pub fid: Option<u64>,
    /// Frame URL.
    pub url: Option<String>,
    /// Hash of the signed message.
    pub message_hash: Option<String>,
    /// Unix timestamp in milliseconds.
    pub timestamp: Option<u64>,
    /// Network id.
    pub network: Option<u32>,
    /// 1-based index of the pressed button.
    pub button_index: Option<u32>,
    /// Text typed into the frame input.
    pub input_text: Option<String>,
    /// State token carried from the previous frame.
    pub state: Option<String>,
    /// Cast the frame was embedded in.
    pub cast_id: Option<CastId>,
}

/// Identifies a cast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastId {
    /// Author id.
    pub fid: u64,
    /// Cast hash.
    pub hash: String,
}

/// Signed half of the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedData {
    /// Hex-encoded signed message.
    #[serde(default)]
    pub message_bytes: String,
}

/// Message yielded by an [`EnvelopeVerifier`](super::EnvelopeVerifier).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMessage {
    /// Whether the envelope authenticated.
    pub is_valid: bool,
    /// Text the user typed.
    pub input: String,
    /// State carried from the previous frame.
    pub state: Option<FrameState>,
}

/// Serialized state carried by a frame message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameState {
    /// The state token.
    pub serialized: String,
}

impl FrameMessage {
    /// Returns the carried state token, if any and non-empty.
    pub fn serialized_state(&self) -> Option<&str> {
        self.state
            .as_ref()
            .map(|s| s.serialized.as_str())
            .filter(|s| !s.is_empty())
    }
}
