use std::{
    error::Error as StdError,
    fmt, io,
    path::{Path, PathBuf},
    result::Result as StdResult,
};

/// A type alias for `Result<T, rmfam::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Error when reformatting or annotating.
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    /// A crate private constructor for `Error`.
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    /// Attach a path to an I/O error, turning `NotFound` into `FileNotFound`.
    pub(crate) fn open(path: &Path, err: io::Error) -> Error {
        if err.kind() == io::ErrorKind::NotFound {
            Error::new(ErrorKind::FileNotFound {
                path: path.to_path_buf(),
            })
        } else {
            Error::new(ErrorKind::Io(err))
        }
    }

    /// Attach the output path to a failure to create a file.
    pub(crate) fn create(path: &Path, err: io::Error) -> Error {
        Error::new(ErrorKind::Create {
            path: path.to_path_buf(),
            err,
        })
    }

    /// Return the specific type of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Unwrap this error into its underlying type.
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }
}

/// Specific errors that can happen.
#[derive(Debug)]
pub enum ErrorKind {
    /// I/O error.
    Io(io::Error),
    /// A required input file does not exist.
    FileNotFound { path: PathBuf },
    /// An output file could not be created.
    Create { path: PathBuf, err: io::Error },
    /// The family list produced no usable motif -> family rows.
    EmptyLookup { path: PathBuf },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::new(ErrorKind::Io(err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::Io(ref err) => write!(f, "I/O error - {}", err),
            ErrorKind::FileNotFound { ref path } => {
                write!(f, "the file '{}' was not found", path.display())
            }
            ErrorKind::Create { ref path, ref err } => {
                write!(f, "could not create '{}' - {}", path.display(), err)
            }
            ErrorKind::EmptyLookup { ref path } => write!(
                f,
                "the family lookup built from '{}' is empty, check the family list file",
                path.display()
            ),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self.0 {
            ErrorKind::Io(ref err) | ErrorKind::Create { ref err, .. } => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_the_path() {
        let err = Error::open(
            Path::new("missing.out"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        match err.kind() {
            ErrorKind::FileNotFound { path } => assert_eq!(path, Path::new("missing.out")),
            other => panic!("unexpected kind {:?}", other),
        }
        assert_eq!(err.to_string(), "the file 'missing.out' was not found");
    }

    #[test]
    fn other_open_failures_stay_io() {
        let err = Error::open(
            Path::new("locked.out"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err.into_kind(), ErrorKind::Io(_)));
    }

    #[test]
    fn create_failures_name_the_output() {
        let err = Error::create(
            Path::new("out/genome.tsv"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err.kind(), ErrorKind::Create { .. }));
        assert!(err.to_string().starts_with("could not create 'out/genome.tsv'"));
        assert!(err.source().is_some());
    }
}
