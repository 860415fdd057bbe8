//! Session error taxonomy.
//!
//! No variant is fatal: a failed command leaves the session exactly as it
//! was before the command ran.

use thiserror::Error;

use crate::vector::ConvertError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Missing root tag, attribute or broken markup.
    #[error("could not load `{name}`: {source}")]
    MalformedInput {
        name: String,
        #[source]
        source: ConvertError,
    },

    /// Neither SVG nor Vector Drawable.
    #[error("unsupported file type: `{name}`")]
    UnsupportedFormat { name: String },

    /// The optimizer failed or returned unusable markup.
    #[error("optimizer failed: {0:#}")]
    ExternalToolFailure(#[source] anyhow::Error),

    /// Resize export with a zero dimension.
    #[error("invalid export size {width}x{height}, both sides must be at least 1 pixel")]
    InvalidSize { width: u32, height: u32 },

    #[error("no document loaded, load an SVG or Vector Drawable first")]
    NoDocument,

    /// Output could not be produced from the current document.
    #[error("could not export `{name}`: {source}")]
    Export {
        name: String,
        #[source]
        source: ConvertError,
    },
}

impl SessionError {
    /// Short, user-facing summary for the status line.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => "malformed input",
            Self::UnsupportedFormat { .. } => "unsupported file type",
            Self::ExternalToolFailure(_) => "optimizer failure",
            Self::InvalidSize { .. } => "invalid size",
            Self::NoDocument => "no document",
            Self::Export { .. } => "export failed",
        }
    }
}
