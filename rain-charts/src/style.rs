//! Backend selection and the display metadata handed to a renderer.

use crate::error::ChartError;
use std::str::FromStr;

/// Display labels for month positions 0..12, January first. The data
/// layer carries only month numbers; label text belongs here.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Rendering backend selected by the display mode option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartBackend {
    /// Vector output through plotters' SVG backend
    Svg,
    /// PNG output through plotters' bitmap backend
    Png,
}

impl ChartBackend {
    /// Default canvas size in pixels for this backend.
    pub fn default_size(&self) -> (u32, u32) {
        match self {
            ChartBackend::Svg => (950, 650),
            ChartBackend::Png => (1000, 600),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ChartBackend::Svg => "svg",
            ChartBackend::Png => "png",
        }
    }

    /// File name for a chart stem, e.g. `monthly-rainfall.svg`.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }
}

impl FromStr for ChartBackend {
    type Err = ChartError;

    fn from_str(s: &str) -> std::result::Result<ChartBackend, ChartError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(ChartBackend::Svg),
            "png" => Ok(ChartBackend::Png),
            other => Err(ChartError::UnknownBackend(other.to_string())),
        }
    }
}

/// Title, axis descriptions, and canvas size for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub size: (u32, u32),
}

impl ChartStyle {
    /// Style with the backend's default canvas size.
    pub fn new(title: &str, x_desc: &str, y_desc: &str, backend: ChartBackend) -> ChartStyle {
        ChartStyle {
            title: title.to_string(),
            x_desc: x_desc.to_string(),
            y_desc: y_desc.to_string(),
            size: backend.default_size(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn backend_parses_known_names() {
        assert_eq!(ChartBackend::from_str("svg").unwrap(), ChartBackend::Svg);
        assert_eq!(ChartBackend::from_str("png").unwrap(), ChartBackend::Png);
        assert_eq!(ChartBackend::from_str(" PNG ").unwrap(), ChartBackend::Png);
    }

    #[test]
    fn unknown_backend_name_is_an_error() {
        let err = ChartBackend::from_str("pdf").unwrap_err();
        assert!(matches!(err, ChartError::UnknownBackend(name) if name == "pdf"));
    }

    #[test]
    fn file_names_take_the_backend_extension() {
        assert_eq!(
            ChartBackend::Svg.file_name("monthly-rainfall"),
            "monthly-rainfall.svg"
        );
        assert_eq!(ChartBackend::Png.file_name("rainy-days"), "rainy-days.png");
    }

    #[test]
    fn styles_default_to_backend_size() {
        let style = ChartStyle::new("t", "x", "y", ChartBackend::Svg);
        assert_eq!(style.size, (950, 650));
        let style = ChartStyle::new("t", "x", "y", ChartBackend::Png);
        assert_eq!(style.size, (1000, 600));
    }
}
