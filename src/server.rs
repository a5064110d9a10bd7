//! HTTP frame server.
//!
//! One gameplay endpoint: verify the envelope, resolve the turn, render
//! the next frame. No game state lives here; the only shared object is
//! the random number generator used to draw solutions.

use crate::config::ServerConfig;
use crate::frame::{
    EnvelopeVerifier, FrameRenderer, FrameRequest, FrameResponse, UntrustedVerifier, VerifyError,
};
use crate::games::mastermind::{StateError, TurnResolver};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use tracing::{error, info, instrument, warn};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    resolver: TurnResolver,
    renderer: FrameRenderer,
    verifier: Arc<dyn EnvelopeVerifier>,
    rng: Arc<Mutex<StdRng>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("resolver", &self.resolver)
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Creates handler state from configuration and a verifier.
    #[instrument(skip(verifier))]
    pub fn new(config: &ServerConfig, verifier: Arc<dyn EnvelopeVerifier>) -> Self {
        let rng = match config.seed() {
            Some(seed) => {
                info!(seed, "Using seeded solution generator");
                StdRng::seed_from_u64(*seed)
            }
            None => StdRng::from_entropy(),
        };

        Self {
            resolver: TurnResolver::new(*config.invalid_guess()),
            renderer: FrameRenderer::new(config.public_url(), config.route(), config.image_path()),
            verifier,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Creates handler state that trusts unsigned envelope payloads.
    pub fn untrusted(config: &ServerConfig) -> Self {
        Self::new(config, Arc::new(UntrustedVerifier))
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }
}

/// Errors surfaced by the gameplay endpoint.
#[derive(Debug, derive_more::Display)]
pub enum FrameError {
    /// The envelope did not authenticate.
    #[display("Message not valid")]
    InvalidMessage,

    /// The verifier failed.
    #[display("{}", _0)]
    Verify(VerifyError),

    /// The next state could not be encoded.
    #[display("{}", _0)]
    State(StateError),

    /// A previous holder of the RNG lock panicked.
    #[display("Solution generator unavailable")]
    RngPoisoned,
}

impl std::error::Error for FrameError {}

impl From<VerifyError> for FrameError {
    fn from(err: VerifyError) -> Self {
        Self::Verify(err)
    }
}

impl From<StateError> for FrameError {
    fn from(err: StateError) -> Self {
        Self::State(err)
    }
}

impl IntoResponse for FrameError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Builds the router: the gameplay route plus `/health`.
#[instrument]
pub fn router(state: AppState) -> Router {
    let route = state.renderer().route().clone();
    info!(route = %route, "Mounting gameplay endpoint");

    Router::new()
        .route(&route, post(play_turn))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// POST {route} - resolves one turn and returns the next frame.
#[instrument(skip_all, fields(fid))]
async fn play_turn(
    State(state): State<AppState>,
    Json(request): Json<FrameRequest>,
) -> Result<FrameResponse, FrameError> {
    if let Some(fid) = request.untrusted_data.fid {
        tracing::Span::current().record("fid", fid);
    }

    let message = state.verifier.verify(&request).await.map_err(|e| {
        error!(error = %e, "Envelope verification failed");
        e
    })?;

    if !message.is_valid {
        warn!("Rejecting unauthenticated envelope");
        return Err(FrameError::InvalidMessage);
    }

    let outcome = {
        let mut rng = state.rng.lock().map_err(|_| FrameError::RngPoisoned)?;
        state
            .resolver
            .resolve_turn(&message.input, message.serialized_state(), &mut *rng)
    };

    info!(
        counter = outcome.state().counter(),
        won = outcome.is_won(),
        "Turn resolved"
    );

    Ok(state.renderer.render(&outcome)?)
}

/// Binds to the configured address and serves until shutdown.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = router(AppState::untrusted(&config));

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        "Mastermind frame ready at http://{}:{}{}",
        config.host(),
        config.port(),
        config.route()
    );

    axum::serve(listener, app).await?;
    Ok(())
}
