//! Text sources accepted by [`PlaceFinder::process`](crate::PlaceFinder::process)

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::{Error, Result};

/// Where the text to scan comes from
///
/// Everything except `Text` is decoded as UTF-8 when processed; any other
/// encoding is rejected with [`Error::InvalidInput`].
pub enum Input {
    Text(String),
    File(PathBuf),
    Bytes(Vec<u8>),
    Reader(Box<dyn Read + Send + Sync>),
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }

    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }

    /// Short label for log lines and error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Text(text) => format!("text ({} bytes)", text.len()),
            Self::File(path) => path.display().to_string(),
            Self::Bytes(bytes) => format!("bytes ({} bytes)", bytes.len()),
            Self::Reader(_) => "reader".to_string(),
        }
    }

    /// Resolve the source into scan-ready text
    pub(crate) fn into_text(self) -> Result<String> {
        let label = self.describe();
        let bytes = match self {
            Self::Text(text) => return Ok(text),
            Self::Bytes(bytes) => bytes,
            Self::File(path) => std::fs::read(&path)
                .map_err(|e| Error::Infrastructure(format!("cannot read {label}: {e}")))?,
            Self::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .map_err(|e| Error::Infrastructure(format!("cannot read {label}: {e}")))?;
                bytes
            }
        };
        String::from_utf8(bytes)
            .map_err(|e| Error::InvalidInput(format!("{label} is not valid UTF-8: {e}")))
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Input").field(&self.describe()).finish()
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}
