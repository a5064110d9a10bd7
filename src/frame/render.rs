//! Frame response rendering.

use crate::games::mastermind::{GameState, StateError, TurnOutcome};
use axum::response::{Html, IntoResponse, Response};
use derive_getters::Getters;
use tracing::instrument;

/// Placeholder shown in the frame's text input.
pub const GUESS_PLACEHOLDER: &str = "Enter guess: r,g,b,y,o (4 total)";

/// What a frame button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// POST back to the button target.
    Post,
}

impl ButtonAction {
    /// Protocol name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonAction::Post => "post",
        }
    }
}

/// A frame button.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FrameButton {
    label: String,
    action: ButtonAction,
    target: String,
}

/// Everything the next frame displays.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FrameResponse {
    buttons: Vec<FrameButton>,
    post_url: String,
    input_text: String,
    image_src: String,
    state: GameState,
    state_token: String,
}

/// Builds frame responses for resolved turns.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FrameRenderer {
    /// Public base URL, without trailing slash.
    public_url: String,
    /// Path of the gameplay endpoint.
    route: String,
    /// Path of the state image endpoint.
    image_path: String,
}

impl FrameRenderer {
    /// Creates a renderer.
    #[instrument(skip_all, fields(public_url = %public_url.as_ref()))]
    pub fn new(
        public_url: impl AsRef<str>,
        route: impl Into<String>,
        image_path: impl Into<String>,
    ) -> Self {
        Self {
            public_url: public_url.as_ref().trim_end_matches('/').to_string(),
            route: route.into(),
            image_path: image_path.into(),
        }
    }

    /// Absolute URL of the gameplay endpoint.
    pub fn target_url(&self) -> String {
        format!("{}{}", self.public_url, self.route)
    }

    /// Renders the frame for a resolved turn.
    #[instrument(skip(self, outcome), fields(counter = outcome.state().counter()))]
    pub fn render(&self, outcome: &TurnOutcome) -> Result<FrameResponse, StateError> {
        let state_token = outcome.state().to_token()?;
        let target = self.target_url();

        Ok(FrameResponse {
            buttons: vec![FrameButton {
                label: outcome.message().clone(),
                action: ButtonAction::Post,
                target: target.clone(),
            }],
            post_url: target,
            input_text: GUESS_PLACEHOLDER.to_string(),
            image_src: format!("{}{}?state={}", self.public_url, self.image_path, state_token),
            state: outcome.state().clone(),
            state_token,
        })
    }
}

impl FrameResponse {
    /// Renders the frame as an HTML document of `fc:frame` meta tags.
    pub fn to_html(&self) -> String {
        let mut tags: Vec<(String, &str)> = vec![
            ("fc:frame".into(), "vNext"),
            ("fc:frame:image".into(), self.image_src.as_str()),
            ("og:image".into(), self.image_src.as_str()),
            ("fc:frame:input:text".into(), self.input_text.as_str()),
        ];
        for (i, button) in self.buttons.iter().enumerate() {
            let n = i + 1;
            tags.push((format!("fc:frame:button:{n}"), button.label.as_str()));
            tags.push((format!("fc:frame:button:{n}:action"), button.action.as_str()));
            tags.push((format!("fc:frame:button:{n}:target"), button.target.as_str()));
        }
        tags.push(("fc:frame:post_url".into(), self.post_url.as_str()));
        tags.push(("fc:frame:state".into(), self.state_token.as_str()));

        let meta: String = tags
            .iter()
            .map(|(property, content)| {
                format!(
                    "  <meta property=\"{}\" content=\"{}\" />\n",
                    property,
                    escape_attr(content)
                )
            })
            .collect();

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n{meta}  <meta property=\"og:title\" content=\"Mastermind\" />\n</head>\n<body></body>\n</html>\n"
        )
    }
}

impl IntoResponse for FrameResponse {
    fn into_response(self) -> Response {
        Html(self.to_html()).into_response()
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
