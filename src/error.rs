use backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// The result type of this crate
pub type KeyResult<T> = Result<T, Error>;

type Source = Box<dyn StdError + Send + Sync + 'static>;

/// The error type of this crate
///
/// Every error carries an [`ErrorKind`](enum.ErrorKind.html),
/// and optionally the underlying error which caused it.
pub struct Error {
    kind: ErrorKind,
    inner: Option<Source>,
    backtrace: Option<Backtrace>,
}

impl Error {
    pub(crate) fn from_kind(kind: ErrorKind) -> Self {
        Error {
            kind,
            inner: None,
            backtrace: capture_backtrace(),
        }
    }

    pub(crate) fn with_error<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Source>,
    {
        Error {
            kind,
            inner: Some(err.into()),
            backtrace: capture_backtrace(),
        }
    }

    /// Get the kind of the error
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the backtrace, only captured when `RUST_BACKTRACE` is set
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }
}

fn capture_backtrace() -> Option<Backtrace> {
    match std::env::var_os("RUST_BACKTRACE") {
        Some(val) if val != "0" => Some(Backtrace::new()),
        _ => None,
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("inner", &self.inner)
            .finish()?;
        if let Some(bt) = &self.backtrace {
            write!(f, "\n{:?}", bt)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.kind)?;
        if let Some(cause) = &self.inner {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl From<openssl::error::ErrorStack> for Error {
    fn from(err: openssl::error::ErrorStack) -> Self {
        Self::with_error(ErrorKind::ProviderFailure, err)
    }
}
impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::with_error(ErrorKind::Decode, err)
    }
}
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::with_error(ErrorKind::JsonError, err)
    }
}
impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::with_error(ErrorKind::InvalidPemFormat, err)
    }
}
impl From<nom_pem::PemParsingError> for Error {
    fn from(_err: nom_pem::PemParsingError) -> Self {
        // nom_pem::PemParsingError doesn't implement std::error::Error
        Self::from_kind(ErrorKind::InvalidPemFormat)
    }
}

/// Indicate the reason of the error
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed base64 in a JWK field
    Decode,
    /// A key component is missing, malformed or rejected by OpenSSL
    InvalidKey,
    /// An explicit key size or exponent is out of range
    InvalidParameter,
    /// OpenSSL failed unexpectedly
    ProviderFailure,
    JsonError,
    InvalidPemFormat,
    UnsupportType,
    Unknown,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        use ErrorKind::*;

        match self {
            Decode => "Decode Error",
            InvalidKey => "Invalid Key",
            InvalidParameter => "Invalid Parameter",
            ProviderFailure => "Crypto Provider Failure",
            JsonError => "JSON Error",
            InvalidPemFormat => "Invalid PEM Format",
            UnsupportType => "Unsupported Key Type",
            Unknown => "Unknown Error",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.name())
    }
}
