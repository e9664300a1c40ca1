// The counting kernel itself is infallible. Everything that can go wrong
// happens either while a configuration is being assembled or inside the
// harness (reading a catalog, writing a report), so that's all this type
// describes.
//
// We follow the same shape throughout: an opaque `Error` struct wrapping a
// private `ErrorKind` enum that is only ever built through the `pub(crate)`
// constructors below. That leaves us free to reorganize the kinds without
// breaking callers.

use std::path::PathBuf;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The underlying internal error type
#[non_exhaustive]
#[derive(Debug)]
enum ErrorKind {
    /// An error that occurs when the distance binning is misconfigured
    /// (e.g. zero bins or a non-positive maximum distance)
    BinConfig(BinConfigError),
    /// An error that occurs when a catalog array doesn't have exactly two
    /// components (ra & dec) along axis 0
    CatalogShape(CatalogShapeError),
    /// An error that occurs while reading a catalog or writing a report
    Io(IoError),
}

// define constructor methods for Error
impl Error {
    /// produce an error indicating that the distance bins are misconfigured
    pub(crate) fn bin_config(what: &'static str) -> Self {
        Error {
            kind: ErrorKind::BinConfig(BinConfigError { what }),
        }
    }

    /// produce an error indicating that a catalog view has the wrong number
    /// of components along axis 0
    pub(crate) fn catalog_shape(actual_n_components: usize) -> Self {
        Error {
            kind: ErrorKind::CatalogShape(CatalogShapeError {
                actual_n_components,
            }),
        }
    }

    /// wraps an I/O error. `target` describes what we were reading from or
    /// writing to (when we know it)
    pub(crate) fn io(target: Option<PathBuf>, source: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Io(IoError { target, source }),
        }
    }

    /// `true` when the error came from the I/O layer
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind {
            ErrorKind::Io(ref err) => Some(&err.source),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.kind.fmt(f)
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            ErrorKind::BinConfig(ref err) => err.fmt(f),
            ErrorKind::CatalogShape(ref err) => err.fmt(f),
            ErrorKind::Io(ref err) => err.fmt(f),
        }
    }
}

/// An error that occurs when the distance binning is misconfigured
#[derive(Clone, Debug)]
struct BinConfigError {
    what: &'static str,
}

impl core::fmt::Display for BinConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid distance bins: {}", self.what)
    }
}

/// An error that occurs when a catalog view has the wrong shape
#[derive(Clone, Debug)]
struct CatalogShapeError {
    actual_n_components: usize,
}

impl core::fmt::Display for CatalogShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "a catalog holds 2 components (ra, dec) along axis 0, but the \
             provided array holds {}",
            self.actual_n_components
        )
    }
}

/// An error that occurs while reading a catalog or writing a report
#[derive(Debug)]
struct IoError {
    target: Option<PathBuf>,
    source: std::io::Error,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.target {
            Some(ref path) => write!(f, "I/O error on {}: {}", path.display(), self.source),
            None => write!(f, "I/O error: {}", self.source),
        }
    }
}
