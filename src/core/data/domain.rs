use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidBounds { x_min: u32, x_max: u32 },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { x_min, x_max } => {
                write!(f, "x-minimum must be less than x-maximum: {} >= {}", x_min, x_max)
            }
        }
    }
}

impl Error for DomainError {}

/// Inclusive integer range `[x_min, x_max]` over which distributions are
/// evaluated. Construction enforces `x_min < x_max`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Domain {
    x_min: u32,
    x_max: u32,
}

impl Domain {
    pub fn new(x_min: u32, x_max: u32) -> Result<Self, DomainError> {
        if x_min >= x_max {
            return Err(DomainError::InvalidBounds { x_min, x_max });
        }

        Ok(Self { x_min, x_max })
    }

    #[must_use]
    pub fn x_min(&self) -> u32 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> u32 {
        self.x_max
    }

    /// Number of integer points in the domain, endpoints included.
    #[must_use]
    pub fn point_count(&self) -> usize {
        (self.x_max - self.x_min + 1) as usize
    }

    pub fn points(&self) -> std::ops::RangeInclusive<u32> {
        self.x_min..=self.x_max
    }

    #[must_use]
    pub fn contains(&self, x: u32) -> bool {
        self.x_min <= x && x <= self.x_max
    }

    /// Continuous extent of the domain, used for sampling overlay curves.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        (f64::from(self.x_min), f64::from(self.x_max))
    }
}
