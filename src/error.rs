use thiserror::Error;

/// Main error type for the docgrid pipeline
#[derive(Error, Debug)]
pub enum DocgridError {
    #[error("Document fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("CSS selector error: {message}")]
    Selector { message: String },

    #[error("Grid rendering failed: {message}")]
    Grid { message: String },
}

impl DocgridError {
    /// Create a fetch error with context
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a selector compilation error
    pub fn selector(message: impl Into<String>) -> Self {
        Self::Selector {
            message: message.into(),
        }
    }

    /// Create a grid rendering error
    pub fn grid(message: impl Into<String>) -> Self {
        Self::Grid {
            message: message.into(),
        }
    }

    /// Check if the pipeline can degrade to "no data" instead of aborting
    pub fn is_recoverable(&self) -> bool {
        match self {
            DocgridError::Fetch { .. } => true,
            DocgridError::Selector { .. } => false,
            DocgridError::Grid { .. } => false,
        }
    }
}

/// Result type alias for convenience
pub type DocgridResult<T> = Result<T, DocgridError>;
