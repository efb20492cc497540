use thiserror::Error;

use crate::MIN_LENGTH;

/// Errors returned when a flag length or bit position is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FlagError {
    /// The requested length is below [`MIN_LENGTH`].
    #[error("flag length {length} is below the minimum of {min}", min = MIN_LENGTH)]
    LengthTooSmall {
        /// The rejected length.
        length: u64,
    },

    /// The requested length is above [`MAX_LENGTH`](crate::MAX_LENGTH) (or above what a single
    /// word storage can hold).
    #[error("flag length {length} exceeds the maximum of {max}")]
    LengthTooLarge {
        /// The rejected length.
        length: u64,
        /// The largest length the rejecting storage accepts.
        max: u64,
    },

    /// A bit position is not below the flag length.
    #[error("position {position} is out of range for a flag of length {length}")]
    PositionOutOfRange {
        /// The rejected position.
        position: u64,
        /// Length of the flag that rejected it.
        length: u64,
    },
}

/// Result type for flag operations.
pub type Result<T> = core::result::Result<T, FlagError>;

/// Rejects lengths outside `min..=max`.
pub(crate) const fn check_length(length: u64, max: u64) -> Result<()> {
    if length < MIN_LENGTH {
        return Err(FlagError::LengthTooSmall { length });
    }
    if length > max {
        return Err(FlagError::LengthTooLarge { length, max });
    }
    Ok(())
}

/// Rejects positions that are not below `length`.
#[inline]
pub(crate) const fn check_position(position: u64, length: u64) -> Result<()> {
    if position >= length {
        return Err(FlagError::PositionOutOfRange { position, length });
    }
    Ok(())
}
