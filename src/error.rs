//! Unified error types for polyfleet.
//!
//! A single [`Error`] enum that every subsystem converts into, with one
//! sub-enum per failure family:
//!
//! - [`ConstructionError`]: fatal, raised while building entities.
//! - [`AccessError`]: a device refused a sealed-state operation.
//! - [`InputError`]: console input that does not name a valid choice.
//! - [`FileError`]: the file utility could not read or write a path.
//!
//! Access and input errors are expected outcomes of user input.  They are
//! returned to the caller at the point of detection and never abort the
//! session.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An entity could not be constructed.
    Construction(ConstructionError),
    /// A device rejected an operation on its sealed state.
    Access(AccessError),
    /// Console input did not name a valid choice.
    Input(InputError),
    /// Catalog configuration is invalid.
    Config(&'static str),
    /// A file operation failed.
    File(FileError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction(e) => write!(f, "construction: {e}"),
            Self::Access(e) => write!(f, "access: {e}"),
            Self::Input(e) => write!(f, "input: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::File(e) => write!(f, "file: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Construction errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// No builder is registered for this kind, so it has no primary action.
    MissingImplementation { kind: String },
    /// A kind-specific attribute is absent from the entity spec.
    MissingAttribute {
        kind: String,
        attribute: &'static str,
    },
    /// A kind-specific attribute has the wrong type or an impossible value.
    InvalidAttribute {
        kind: String,
        attribute: &'static str,
    },
    /// Entity names must contain at least one non-whitespace character.
    EmptyName,
    /// Capacity must be finite and non-negative.
    InvalidCapacity(f64),
    /// Price must be finite and non-negative.
    InvalidPrice(f64),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingImplementation { kind } => {
                write!(f, "kind '{kind}' has no primary action implementation")
            }
            Self::MissingAttribute { kind, attribute } => {
                write!(f, "kind '{kind}' requires attribute '{attribute}'")
            }
            Self::InvalidAttribute { kind, attribute } => {
                write!(f, "kind '{kind}' has an invalid '{attribute}'")
            }
            Self::EmptyName => write!(f, "entity name is empty"),
            Self::InvalidCapacity(v) => write!(f, "capacity {v} is not a non-negative number"),
            Self::InvalidPrice(v) => write!(f, "price {v} is not a non-negative number"),
        }
    }
}

impl From<ConstructionError> for Error {
    fn from(e: ConstructionError) -> Self {
        Self::Construction(e)
    }
}

// ---------------------------------------------------------------------------
// Access errors (sealed device state)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessError {
    /// The supplied credential does not match the stored one.
    CredentialMismatch,
    /// A replacement credential is empty or longer than the limit.
    CredentialMalformed,
    /// Discount percentage outside the accepted range.
    DiscountOutOfRange(f64),
    /// Guarded storage may only grow.
    StorageDowngrade { current_gb: u32, requested_gb: u32 },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CredentialMismatch => write!(f, "incorrect PIN"),
            Self::CredentialMalformed => write!(f, "new PIN must be 1-16 characters"),
            Self::DiscountOutOfRange(p) => write!(f, "invalid discount percentage {p}"),
            Self::StorageDowngrade {
                current_gb,
                requested_gb,
            } => write!(f, "cannot shrink storage from {current_gb}GB to {requested_gb}GB"),
        }
    }
}

impl From<AccessError> for Error {
    fn from(e: AccessError) -> Self {
        Self::Access(e)
    }
}

// ---------------------------------------------------------------------------
// Input errors (menu and selection)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line could not be parsed as a number.
    NotANumber(String),
    /// A number outside `1..=max`.
    OutOfRange { value: usize, max: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(raw) => write!(f, "'{raw}' is not a valid number"),
            Self::OutOfRange { value, max } => {
                write!(f, "{value} is not between 1 and {max}")
            }
        }
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

/// Parse a 1-based menu number and validate it against `1..=max`.
///
/// Returns the zero-based index on success.
pub fn parse_choice(raw: &str, max: usize) -> core::result::Result<usize, InputError> {
    let trimmed = raw.trim();
    let value: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value == 0 || value > max {
        return Err(InputError::OutOfRange { value, max });
    }
    Ok(value - 1)
}

// ---------------------------------------------------------------------------
// File errors (transcribe / inspect)
// ---------------------------------------------------------------------------

/// Each variant carries the path as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    NotFound(String),
    PermissionDenied(String),
    /// The file is not valid UTF-8 text.
    NotUtf8(String),
    IsDirectory(String),
    Io { path: String, message: String },
}

impl FileError {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &std::path::Path, err: &std::io::Error) -> Self {
        use std::io::ErrorKind;

        let path = path.display().to_string();
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(path),
            ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            ErrorKind::IsADirectory => Self::IsDirectory(path),
            ErrorKind::InvalidData => Self::NotUtf8(path),
            _ => Self::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::NotFound(p)
            | Self::PermissionDenied(p)
            | Self::NotUtf8(p)
            | Self::IsDirectory(p) => p,
            Self::Io { path, .. } => path,
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(p) => write!(f, "'{p}' was not found"),
            Self::PermissionDenied(p) => write!(f, "permission denied for '{p}'"),
            Self::NotUtf8(p) => write!(f, "cannot decode '{p}' as UTF-8 (binary file?)"),
            Self::IsDirectory(p) => write!(f, "'{p}' is a directory, not a file"),
            Self::Io { path, message } => write!(f, "'{path}': {message}"),
        }
    }
}

impl std::error::Error for FileError {}

impl From<FileError> for Error {
    fn from(e: FileError) -> Self {
        Self::File(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
