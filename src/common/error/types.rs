//! Error variants for deck generation.
use thiserror::Error;

/// Main error type for deck generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error while producing an OOXML part or package
    #[error("OOXML error: {0}")]
    Ooxml(#[from] crate::ooxml::error::OoxmlError),

    /// Image decoding or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Chart data that cannot be plotted
    #[error("Invalid chart data: {0}")]
    InvalidChart(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for deck generation.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_chart_message() {
        let err = Error::InvalidChart("2 labels, 3 values".to_string());
        assert_eq!(err.to_string(), "Invalid chart data: 2 labels, 3 values");
    }
}
