use crate::assets::source::LayerKey;

/// Convenience result type used across wavatar.
pub type WavatarResult<T> = Result<T, WavatarError>;

/// Top-level error taxonomy used by the generation APIs.
#[derive(thiserror::Error, Debug)]
pub enum WavatarError {
    /// Invalid caller-provided data (bad hex input, mismatched buffers).
    #[error("validation error: {0}")]
    Validation(String),

    /// A named layer could not be loaded, decoded or applied.
    #[error("layer '{key}' failed: {source:#}")]
    Layer {
        /// Layer that failed.
        key: LayerKey,
        /// Underlying cause reported by the layer source.
        source: anyhow::Error,
    },

    /// Errors while encoding a raster into an image container.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavatarError {
    /// Build a [`WavatarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WavatarError::Layer`] value.
    pub fn layer(key: LayerKey, source: impl Into<anyhow::Error>) -> Self {
        Self::Layer {
            key,
            source: source.into(),
        }
    }

    /// Build a [`WavatarError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Layer key carried by a [`WavatarError::Layer`], if any.
    pub fn layer_key(&self) -> Option<LayerKey> {
        match self {
            Self::Layer { key, .. } => Some(*key),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
