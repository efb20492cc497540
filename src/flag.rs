use crate::error::Result;
use crate::storage::{Storage, StorageKind};
use alloc::string::String;
use core::fmt::{self, Display, Formatter};
use tracing::trace;

/// Smallest accepted flag length.
pub const MIN_LENGTH: u64 = 2;

/// Largest accepted flag length.
pub const MAX_LENGTH: u64 = 17_179_868_704;

/// Marker written by [`Display`] once the flag has been disposed.
pub const UNKNOWN: &str = "unknown";

/// A fixed number of boolean flags packed into the smallest fitting storage.
///
/// The storage is picked once from the length (see [`StorageKind::select`])
/// and owned exclusively by the flag. After [`dispose`] the bits are
/// released: reads report unknown (`None`) and writes are silently ignored.
///
/// # Examples
/// ```
/// use binary_flag::MultipleBinaryFlag;
///
/// let mut flag = MultipleBinaryFlag::new(5, false).unwrap();
/// assert_eq!(flag.to_string(), "FFFFF");
/// flag.set_flag(2).unwrap();
/// assert_eq!(flag.to_string(), "FFTFF");
/// assert_eq!(flag.get_flag(), Some(false));
/// for position in [0, 1, 3, 4] {
///     flag.set_flag(position).unwrap();
/// }
/// assert_eq!(flag.get_flag(), Some(true));
/// ```
///
/// [`dispose`]: MultipleBinaryFlag::dispose
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultipleBinaryFlag {
    length: u64,
    storage: Storage,
    disposed: bool,
}

impl MultipleBinaryFlag {
    /// Creates a flag of `length` bits, all set to `initial_value`.
    ///
    /// # Errors
    /// Returns [`FlagError::LengthTooSmall`] if `length < 2` and
    /// [`FlagError::LengthTooLarge`] if `length > MAX_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use binary_flag::{FlagError, MultipleBinaryFlag};
    ///
    /// let flag = MultipleBinaryFlag::new(40, true).unwrap();
    /// assert_eq!(flag.get_flag(), Some(true));
    /// assert_eq!(
    ///     MultipleBinaryFlag::new(1, true),
    ///     Err(FlagError::LengthTooSmall { length: 1 })
    /// );
    /// ```
    ///
    /// [`FlagError::LengthTooSmall`]: crate::FlagError::LengthTooSmall
    /// [`FlagError::LengthTooLarge`]: crate::FlagError::LengthTooLarge
    pub fn new(length: u64, initial_value: bool) -> Result<Self> {
        let kind = StorageKind::select(length)?;
        trace!(length, initial_value, ?kind, "selected flag storage");
        Ok(Self {
            length,
            storage: Storage::new(kind, length, initial_value)?,
            disposed: false,
        })
    }

    /// Creates a flag of `length` bits, all set.
    ///
    /// # Errors
    /// Same as [`new`](MultipleBinaryFlag::new).
    pub fn with_length(length: u64) -> Result<Self> {
        Self::new(length, true)
    }

    /// Sets the bit at `position` to `true`.
    ///
    /// Does nothing once the flag has been disposed, whatever the position.
    ///
    /// # Errors
    /// Returns [`FlagError::PositionOutOfRange`] if `position >= length` on a
    /// live flag.
    ///
    /// [`FlagError::PositionOutOfRange`]: crate::FlagError::PositionOutOfRange
    #[inline]
    pub fn set_flag(&mut self, position: u64) -> Result<()> {
        self.storage.set(position)
    }

    /// Sets the bit at `position` to `false`.
    ///
    /// Does nothing once the flag has been disposed, whatever the position.
    ///
    /// # Errors
    /// Returns [`FlagError::PositionOutOfRange`] if `position >= length` on a
    /// live flag.
    ///
    /// # Examples
    /// ```
    /// use binary_flag::MultipleBinaryFlag;
    ///
    /// let mut flag = MultipleBinaryFlag::with_length(70).unwrap();
    /// flag.reset_flag(69).unwrap();
    /// assert_eq!(flag.is_set(69), Ok(Some(false)));
    /// assert!(flag.reset_flag(70).is_err());
    /// ```
    ///
    /// [`FlagError::PositionOutOfRange`]: crate::FlagError::PositionOutOfRange
    #[inline]
    pub fn reset_flag(&mut self, position: u64) -> Result<()> {
        self.storage.reset(position)
    }

    /// Returns `Some(true)` if every bit is set, `Some(false)` if any bit is
    /// clear and `None` once the flag has been disposed.
    pub fn get_flag(&self) -> Option<bool> {
        self.storage.get_all()
    }

    /// Reads the bit at `position`, or `None` once the flag has been disposed.
    ///
    /// A disposed flag reports `None` even for out of range positions.
    ///
    /// # Errors
    /// Returns [`FlagError::PositionOutOfRange`] if `position >= length` on a
    /// live flag.
    ///
    /// [`FlagError::PositionOutOfRange`]: crate::FlagError::PositionOutOfRange
    #[inline]
    pub fn is_set(&self, position: u64) -> Result<Option<bool>> {
        self.storage.get(position)
    }

    /// Renders the bits as `'T'`/`'F'`, position 0 first, or `None` once the
    /// flag has been disposed.
    pub fn bits_string(&self) -> Option<String> {
        let capacity = usize::try_from(self.length).unwrap_or_default();
        let mut rendered = String::with_capacity(capacity);
        for position in 0..self.length {
            let bit = self.storage.get(position).ok().flatten()?;
            rendered.push(if bit { 'T' } else { 'F' });
        }
        Some(rendered)
    }

    /// Releases the packed bits. Calling it again is a no-op.
    ///
    /// # Examples
    /// ```
    /// use binary_flag::{MultipleBinaryFlag, UNKNOWN};
    ///
    /// let mut flag = MultipleBinaryFlag::new(8, false).unwrap();
    /// flag.dispose();
    /// flag.dispose();
    /// assert_eq!(flag.get_flag(), None);
    /// assert_eq!(flag.to_string(), UNKNOWN);
    /// assert_eq!(flag.set_flag(100), Ok(()));
    /// ```
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.storage.dispose();
        self.disposed = true;
    }

    /// Returns `true` once [`dispose`](MultipleBinaryFlag::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Number of addressable bits.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// The storage picked for this flag's length.
    pub fn storage_kind(&self) -> StorageKind {
        self.storage.kind()
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }
}

impl Display for MultipleBinaryFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.bits_string() {
            Some(rendered) => f.write_str(&rendered),
            None => f.write_str(UNKNOWN),
        }
    }
}
