use thiserror::Error;

/// Errors raised while bringing the world up
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("sprite `{path}` failed to load: {reason}")]
    AssetFailed { path: String, reason: String },

    #[error("timed out after {waited_secs:.1}s waiting for sprites: {pending:?}")]
    AssetTimeout {
        waited_secs: f32,
        pending: Vec<String>,
    },

    #[error("failed to encode tile grid: {0}")]
    Encode(#[from] bincode::Error),
}
