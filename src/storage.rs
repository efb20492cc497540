use crate::error::{Result, check_length, check_position};
use crate::word_array::WordArray;
use crate::{MAX_LENGTH, MIN_LENGTH};
use tracing::trace;

/// Lengths below this are stored in a single `u32`.
pub(crate) const WIDE_THRESHOLD: u64 = 33;
/// Lengths below this (and at least [`WIDE_THRESHOLD`]) are stored in a
/// single `u64`.
pub(crate) const ARRAY_THRESHOLD: u64 = 65;

/// The backing representation picked for a given flag length.
///
/// The choice is a pure function of the length, see [`StorageKind::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// A single `u32`, used for lengths `2..=32`.
    Narrow,
    /// A single `u64`, used for lengths `33..=64`.
    Wide,
    /// An array of `u32` words, used for lengths `65..=MAX_LENGTH`.
    WordArray,
}

impl StorageKind {
    /// Picks the storage for `length`.
    ///
    /// The thresholds are fixed: a length of 32 is always narrow and 64 is
    /// always wide, even where a different word would also fit.
    ///
    /// # Errors
    /// Returns [`FlagError::LengthTooSmall`] if `length < MIN_LENGTH` and
    /// [`FlagError::LengthTooLarge`] if `length > MAX_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use binary_flag::StorageKind;
    ///
    /// assert_eq!(StorageKind::select(32), Ok(StorageKind::Narrow));
    /// assert_eq!(StorageKind::select(33), Ok(StorageKind::Wide));
    /// assert_eq!(StorageKind::select(65), Ok(StorageKind::WordArray));
    /// assert!(StorageKind::select(1).is_err());
    /// ```
    ///
    /// [`FlagError::LengthTooSmall`]: crate::FlagError::LengthTooSmall
    /// [`FlagError::LengthTooLarge`]: crate::FlagError::LengthTooLarge
    pub const fn select(length: u64) -> Result<Self> {
        if let Err(err) = check_length(length, MAX_LENGTH) {
            return Err(err);
        }
        Ok(if length < WIDE_THRESHOLD {
            Self::Narrow
        } else if length < ARRAY_THRESHOLD {
            Self::Wide
        } else {
            Self::WordArray
        })
    }
}

/// Live packed bits, or nothing once they have been released.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Lifecycle<B> {
    Live(B),
    Disposed,
}

/// Raw bit packing for one storage variant.
///
/// Positions handed to these methods are already bounds checked.
pub(crate) trait PackedBits: Sized {
    /// Largest length this packing can hold.
    const MAX_LENGTH: u64;

    /// Builds storage for `length` bits, all set to `initial_value`.
    ///
    /// Padding bits at positions `>= length` are always 1.
    fn filled(length: u64, initial_value: bool) -> Self;

    fn set_bit(&mut self, position: u64);

    fn clear_bit(&mut self, position: u64);

    fn bit(&self, position: u64) -> bool;

    /// `true` iff every word is all ones, padding included.
    fn all_set(&self) -> bool;
}

/// Bounds checking and lifecycle shared by every storage variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ConcreteFlag<B> {
    length: u64,
    bits: Lifecycle<B>,
}

impl<B: PackedBits> ConcreteFlag<B> {
    pub(crate) fn new(length: u64, initial_value: bool) -> Result<Self> {
        check_length(length, B::MAX_LENGTH)?;
        Ok(Self {
            length,
            bits: Lifecycle::Live(B::filled(length, initial_value)),
        })
    }

    pub(crate) fn set(&mut self, position: u64) -> Result<()> {
        let Lifecycle::Live(bits) = &mut self.bits else {
            trace!(position, "ignoring set on released flag storage");
            return Ok(());
        };
        check_position(position, self.length)?;
        bits.set_bit(position);
        Ok(())
    }

    pub(crate) fn reset(&mut self, position: u64) -> Result<()> {
        let Lifecycle::Live(bits) = &mut self.bits else {
            trace!(position, "ignoring reset on released flag storage");
            return Ok(());
        };
        check_position(position, self.length)?;
        bits.clear_bit(position);
        Ok(())
    }

    /// Disposal is checked before bounds: a released flag reads as unknown
    /// at every position.
    pub(crate) fn get(&self, position: u64) -> Result<Option<bool>> {
        let Lifecycle::Live(bits) = &self.bits else {
            return Ok(None);
        };
        check_position(position, self.length)?;
        Ok(Some(bits.bit(position)))
    }

    pub(crate) fn get_all(&self) -> Option<bool> {
        match &self.bits {
            Lifecycle::Live(bits) => Some(bits.all_set()),
            Lifecycle::Disposed => None,
        }
    }

    pub(crate) fn dispose(&mut self) {
        if matches!(self.bits, Lifecycle::Disposed) {
            return;
        }
        self.bits = Lifecycle::Disposed;
        trace!(length = self.length, "released flag storage");
    }

    #[cfg(test)]
    pub(crate) fn live_bits(&self) -> Option<&B> {
        match &self.bits {
            Lifecycle::Live(bits) => Some(bits),
            Lifecycle::Disposed => None,
        }
    }
}

/// The storage variant owned by a flag, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Storage {
    Narrow(ConcreteFlag<u32>),
    Wide(ConcreteFlag<u64>),
    WordArray(ConcreteFlag<WordArray>),
}

macro_rules! dispatch {
    ($storage:expr, $flag:ident => $body:expr) => {
        match $storage {
            Storage::Narrow($flag) => $body,
            Storage::Wide($flag) => $body,
            Storage::WordArray($flag) => $body,
        }
    };
}

impl Storage {
    pub(crate) fn new(kind: StorageKind, length: u64, initial_value: bool) -> Result<Self> {
        debug_assert!(length >= MIN_LENGTH);
        Ok(match kind {
            StorageKind::Narrow => Self::Narrow(ConcreteFlag::new(length, initial_value)?),
            StorageKind::Wide => Self::Wide(ConcreteFlag::new(length, initial_value)?),
            StorageKind::WordArray => Self::WordArray(ConcreteFlag::new(length, initial_value)?),
        })
    }

    pub(crate) fn kind(&self) -> StorageKind {
        match self {
            Self::Narrow(_) => StorageKind::Narrow,
            Self::Wide(_) => StorageKind::Wide,
            Self::WordArray(_) => StorageKind::WordArray,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, position: u64) -> Result<()> {
        dispatch!(self, flag => flag.set(position))
    }

    #[inline]
    pub(crate) fn reset(&mut self, position: u64) -> Result<()> {
        dispatch!(self, flag => flag.reset(position))
    }

    #[inline]
    pub(crate) fn get(&self, position: u64) -> Result<Option<bool>> {
        dispatch!(self, flag => flag.get(position))
    }

    pub(crate) fn get_all(&self) -> Option<bool> {
        dispatch!(self, flag => flag.get_all())
    }

    pub(crate) fn dispose(&mut self) {
        dispatch!(self, flag => flag.dispose())
    }
}
