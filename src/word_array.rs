use crate::storage::PackedBits;
use alloc::boxed::Box;
use alloc::vec;

const WORD_BITS: u64 = u32::BITS as u64;

/// Number of `u32` words needed to hold `length` bits.
#[inline]
pub(crate) const fn word_count(length: u64) -> usize {
    length.div_ceil(WORD_BITS) as usize
}

/// Storage for flags longer than 64 bits.
///
/// # Layout
/// Words are addressed in **reverse order**: position `p` lives in word
/// `len - 1 - p / 32` at bit `p % 32`. Positions `0..32` are in the last word
/// and the padding bits above `length` sit in the high bits of the first word.
/// This layout is part of the observable contract and must not be flipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct WordArray(Box<[u32]>);

impl WordArray {
    #[inline]
    fn slot(&self, position: u64) -> (usize, u64) {
        let word_idx = self.0.len() - 1 - (position / WORD_BITS) as usize;
        (word_idx, position % WORD_BITS)
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> &[u32] {
        &self.0
    }
}

impl PackedBits for WordArray {
    const MAX_LENGTH: u64 = crate::MAX_LENGTH;

    fn filled(length: u64, initial_value: bool) -> Self {
        let mut words = vec![u32::MAX; word_count(length)].into_boxed_slice();
        if initial_value {
            return Self(words);
        }
        // clear from the last word backwards; the remainder goes into the
        // first partially cleared word
        let mut remaining = length;
        for word in words.iter_mut().rev() {
            if remaining >= WORD_BITS {
                *word = 0;
                remaining -= WORD_BITS;
            } else {
                *word = u32::filled(remaining, false);
                break;
            }
        }
        Self(words)
    }

    #[inline]
    fn set_bit(&mut self, position: u64) {
        let (word_idx, bit_idx) = self.slot(position);
        self.0[word_idx] |= 1 << bit_idx;
    }

    #[inline]
    fn clear_bit(&mut self, position: u64) {
        let (word_idx, bit_idx) = self.slot(position);
        self.0[word_idx] &= !(1 << bit_idx);
    }

    #[inline]
    fn bit(&self, position: u64) -> bool {
        let (word_idx, bit_idx) = self.slot(position);
        self.0[word_idx] & 1 << bit_idx != 0
    }

    fn all_set(&self) -> bool {
        self.0.iter().all(|&word| word == u32::MAX)
    }
}
