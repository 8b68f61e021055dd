/// Crate-wide result alias.
pub type HexlogoResult<T> = Result<T, HexlogoError>;

/// Error type shared by every stage of logo generation.
#[derive(thiserror::Error, Debug)]
pub enum HexlogoError {
    /// Configuration or geometry input rejected before any work is done.
    #[error("validation error: {0}")]
    Validation(String),

    /// Scene construction referenced a node or edge that does not exist.
    #[error("layout error: {0}")]
    Layout(String),

    /// Timeline scripting or loop binding failed.
    #[error("animation error: {0}")]
    Animation(String),

    /// SVG serialization, parsing, or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Anything else, typically I/O with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HexlogoError {
    /// Build a [`HexlogoError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HexlogoError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`HexlogoError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`HexlogoError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
