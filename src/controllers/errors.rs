use crate::core::data::domain::DomainError;
use crate::core::data::rate::RateError;
use std::error::Error;
use std::fmt;

/// Why a frame could not be produced.
///
/// `Domain` is a user-correctable input problem and is surfaced as a message;
/// `Rate` indicates a caller that bypassed the Input adapter's bounds and is
/// reported as a contract failure.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FrameError {
    Domain(DomainError),
    Rate(RateError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(err) => write!(f, "{}", err),
            Self::Rate(err) => write!(f, "invalid rate parameter supplied to the engine: {}", err),
        }
    }
}

impl Error for FrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Rate(err) => Some(err),
        }
    }
}

impl From<DomainError> for FrameError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<RateError> for FrameError {
    fn from(err: RateError) -> Self {
        Self::Rate(err)
    }
}
