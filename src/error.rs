//! Error types for the DPI shim.

use thiserror::Error;

/// Result type alias for dpi-shim operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A modern pointer-input capability this platform generation never has.
///
/// The stub bank reports these as first-class absences so callers (and
/// tests) can distinguish "no touch hardware support exists here" from an
/// OS call that happened to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Per-pointer touch info.
    Touch,
    /// Whole-frame touch info.
    TouchFrame,
    /// Touch frame history.
    TouchFrameHistory,
    /// Pen/stylus info.
    Pen,
    /// Pen info history.
    PenHistory,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Capability::Touch => "touch",
            Capability::TouchFrame => "touch frame",
            Capability::TouchFrameHistory => "touch frame history",
            Capability::Pen => "pen",
            Capability::PenHistory => "pen history",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during shim operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An enumerated input was not one of the recognized values.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying OS primitive itself failed.
    #[error("operation failed: {0}")]
    OperationFailed(String),

    /// The queried pointer capability does not exist on this platform
    /// generation; reported deterministically, never attempted per-call.
    #[error("pointer capability not present: {0}")]
    CapabilityAbsent(Capability),
}
