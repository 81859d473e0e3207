use image::ImageError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixtureError>;

#[derive(Debug, Error)]
pub enum FixtureError {
    /// The output file could not be created, written or flushed.
    #[error("failed to write fixture {}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A primitive could not be rasterized.
    #[error("rendering failed: {0}")]
    Rendering(String),

    #[error("failed to encode fixture {}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("invalid color: {0}")]
    InvalidColor(String),
}

impl FixtureError {
    /// Sort an encoder failure into a resource or encoding error.
    pub(crate) fn from_image(path: PathBuf, err: ImageError) -> Self {
        match err {
            ImageError::IoError(source) => FixtureError::Resource { path, source },
            source => FixtureError::Encoding { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn resource_message_leaves_cause_to_the_chain() {
        let err = FixtureError::Resource {
            path: PathBuf::from("out/test_image.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only directory"),
        };

        assert_eq!(err.to_string(), "failed to write fixture out/test_image.png");
        let cause = err.source().map(|e| e.to_string());
        assert_eq!(cause.as_deref(), Some("read-only directory"));

        let report = format!("{:?}", anyhow::Error::new(err));
        assert_eq!(report.matches("read-only directory").count(), 1, "{}", report);
    }
}
