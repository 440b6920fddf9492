// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Library(String),
    Geometry(GeometryError),
}

/// Specific error types for crop-geometry failures.
///
/// The mapper is a pure function: it either returns a valid pixel rectangle
/// or one of these, never a partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A container or image dimension was zero. The mapper refuses to divide
    /// by a degenerate scale factor.
    InvalidDimensions {
        container_width: u32,
        container_height: u32,
        image_width: u32,
        image_height: u32,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidDimensions {
                container_width,
                container_height,
                image_width,
                image_height,
            } => write!(
                f,
                "invalid dimensions: container {}x{}, image {}x{}",
                container_width, container_height, image_width, image_height
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Library(e) => write!(f, "Library Error: {}", e),
            Error::Geometry(e) => write!(f, "Geometry Error: {}", e),
        }
    }
}

impl From<GeometryError> for Error {
    fn from(err: GeometryError) -> Self {
        Error::Geometry(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
