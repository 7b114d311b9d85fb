use thiserror::Error;

/// Errors from chart configuration and rendering
#[derive(Error, Debug)]
pub enum ChartError {
    /// Renderer name was not recognized
    #[error("Unknown chart backend: {0} (expected svg or png)")]
    UnknownBackend(String),

    /// Drawing backend failed while rendering
    #[error("Failed to render chart: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;

pub(crate) fn to_render_error(e: impl std::fmt::Display) -> ChartError {
    ChartError::Render(e.to_string())
}
