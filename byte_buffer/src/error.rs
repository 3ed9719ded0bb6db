#[cfg(feature = "std")]
use thiserror::Error;

/// Buffer, sink and source errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BufferError {
    /// Fewer bytes remain than a read asked for.
    #[cfg_attr(
        feature = "std",
        error("Requested {requested} bytes but only {available} remain")
    )]
    UnexpectedEnd { requested: usize, available: usize },

    /// Growing the backing array to the given capacity failed.
    #[cfg_attr(feature = "std", error("Failed to allocate {0} bytes"))]
    AllocationFailed(usize),

    #[cfg_attr(feature = "std", error("Growth increment must be non-zero"))]
    InvalidGrowthIncrement,

    /// IO error from a file or stream backed sink/source
    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferError::UnexpectedEnd {
                requested,
                available,
            } => write!(
                f,
                "Requested {} bytes but only {} remain",
                requested, available
            ),
            BufferError::AllocationFailed(n) => write!(f, "Failed to allocate {} bytes", n),
            BufferError::InvalidGrowthIncrement => {
                write!(f, "Growth increment must be non-zero")
            }
        }
    }
}
