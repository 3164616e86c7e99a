#[cfg(feature = "std")]
use thiserror::Error;

/// Container errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// `remove` found no element equal to the requested value.
    #[cfg_attr(feature = "std", error("Element not found in container"))]
    ValueNotFound,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ContainerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContainerError::ValueNotFound => write!(f, "Element not found in container"),
        }
    }
}
