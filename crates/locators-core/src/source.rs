use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where a `LocatorsDatabase` reads its content from.
pub enum Source {
    /// File on disk, opened on every load. A missing file is not an error.
    Path(PathBuf),
    /// Already-open text stream. Consumed by the first load; never rewound.
    Reader(Box<dyn Read + Send>),
}

/// Outcome of reading a source.
pub(crate) enum Content {
    Text(String),
    Missing,
}

impl Source {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Source::Path(path.into())
    }

    pub fn reader(reader: impl Read + Send + 'static) -> Self {
        Source::Reader(Box::new(reader))
    }

    pub(crate) fn read(&mut self) -> io::Result<Content> {
        match self {
            Source::Path(path) => match std::fs::read_to_string(path.as_path()) {
                Ok(text) => Ok(Content::Text(text)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Content::Missing),
                Err(e) => Err(e),
            },
            Source::Reader(reader) => {
                let mut text = String::new();
                reader.read_to_string(&mut text)?;
                Ok(Content::Text(text))
            }
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Source::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Reader(_) => f.write_str("<stream>"),
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}
