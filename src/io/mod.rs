#[cfg(feature = "stl-io")]
pub mod stl;

/// Generic I/O and format‑conversion errors.
///
/// Export formats are behind cargo feature‑flags.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
