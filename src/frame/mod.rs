//! Frame protocol plumbing around the turn resolver.
//!
//! Inbound: the signed envelope a frame client posts, and the verifier
//! seam that turns it into trusted input. Outbound: the HTML document
//! describing the next frame.

mod envelope;
mod render;
mod verifier;

pub use envelope::{CastId, FrameMessage, FrameRequest, FrameState, TrustedData, UntrustedData};
pub use render::{ButtonAction, FrameButton, FrameRenderer, FrameResponse, GUESS_PLACEHOLDER};
pub use verifier::{EnvelopeVerifier, UntrustedVerifier, VerifyError};
