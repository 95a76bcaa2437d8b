//! Rendering strategy selection
//!
//! Decides whether a full browser-rendering engine is available in the
//! current execution environment. Restricted runtimes never render; an
//! engine that fails to launch degrades to fallback extraction instead of
//! propagating the error.

mod chromium;

pub use chromium::RenderSession;

use crate::config::RenderConfig;

/// Attempts to acquire a rendered-extraction session
///
/// Returns `None` whenever the pipeline should use fallback extraction:
/// either rendering is disabled by configuration (restricted/ephemeral
/// runtime) or the engine failed to launch. Never returns an error.
pub async fn try_acquire(config: &RenderConfig, user_agent: &str) -> Option<RenderSession> {
    if !config.enabled {
        tracing::info!("rendered extraction disabled by configuration, using fallback mode");
        return None;
    }

    match RenderSession::launch(user_agent).await {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("browser launch failed, degrading to fallback mode: {}", e);
            None
        }
    }
}
