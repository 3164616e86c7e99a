#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised while reading through an order view.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// Dereference at or past the end position.
    #[cfg_attr(
        feature = "std",
        error("Iterator out of range: position {position} for length {len}")
    )]
    OutOfRange { position: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ViewError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ViewError::OutOfRange { position, len } => write!(
                f,
                "Iterator out of range: position {} for length {}",
                position, len
            ),
        }
    }
}
