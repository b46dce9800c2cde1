//! Batch transform error types
//!
//! Reported when a batched transform is asked to touch elements outside the
//! slices it was given. Nothing is written when one of these is returned.

use std::fmt;

/// Error type for batched transform operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchError {
    /// `index..index + count` does not fit in the source slice
    SourceOutOfRange {
        index: usize,
        count: usize,
        len: usize,
    },
    /// `index..index + count` does not fit in the destination slice
    DestinationOutOfRange {
        index: usize,
        count: usize,
        len: usize,
    },
}

impl BatchError {
    /// Check that `index..index + count` lies within a slice of length `len`
    pub(crate) fn check_source(index: usize, count: usize, len: usize) -> Result<(), Self> {
        if fits(index, count, len) {
            Ok(())
        } else {
            Err(BatchError::SourceOutOfRange { index, count, len })
        }
    }

    pub(crate) fn check_destination(index: usize, count: usize, len: usize) -> Result<(), Self> {
        if fits(index, count, len) {
            Ok(())
        } else {
            Err(BatchError::DestinationOutOfRange { index, count, len })
        }
    }
}

#[inline]
fn fits(index: usize, count: usize, len: usize) -> bool {
    matches!(index.checked_add(count), Some(end) if end <= len)
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::SourceOutOfRange { index, count, len } => write!(
                f,
                "Source range of {} elements at index {} exceeds source length {}",
                count, index, len
            ),
            BatchError::DestinationOutOfRange { index, count, len } => write!(
                f,
                "Destination range of {} elements at index {} exceeds destination length {}",
                count, index, len
            ),
        }
    }
}

impl std::error::Error for BatchError {}
