//! Envelope verification seam.

use super::envelope::{FrameMessage, FrameRequest, FrameState};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Error raised when a verifier cannot reach a verdict.
///
/// A verdict of "not valid" is not an error; it is reported through
/// [`FrameMessage::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum VerifyError {
    /// The verification backend could not be reached.
    #[display("Verifier unavailable: {}", _0)]
    Unavailable(String),

    /// The envelope could not be interpreted.
    #[display("Malformed envelope: {}", _0)]
    Malformed(String),
}

impl std::error::Error for VerifyError {}

/// Validates an inbound envelope and extracts the user's message.
#[async_trait]
pub trait EnvelopeVerifier: Send + Sync {
    /// Verifies `request` and returns the message it carries.
    async fn verify(&self, request: &FrameRequest) -> Result<FrameMessage, VerifyError>;
}

/// Verifier that trusts the envelope's unsigned payload.
///
/// Any envelope with non-empty signed message bytes is accepted; the
/// bytes themselves are not checked. Suitable for local play and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct UntrustedVerifier;

#[async_trait]
impl EnvelopeVerifier for UntrustedVerifier {
    #[instrument(skip(self, request), fields(fid = ?request.untrusted_data.fid))]
    async fn verify(&self, request: &FrameRequest) -> Result<FrameMessage, VerifyError> {
        if request.trusted_data.message_bytes.is_empty() {
            warn!("Envelope carries no signed message");
            return Ok(FrameMessage::default());
        }

        let data = &request.untrusted_data;
        debug!(has_state = data.state.is_some(), "Accepting unsigned payload");
        Ok(FrameMessage {
            is_valid: true,
            input: data.input_text.clone().unwrap_or_default(),
            state: data.state.clone().map(|serialized| FrameState { serialized }),
        })
    }
}
