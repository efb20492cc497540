use crate::storage::PackedBits;

/// Single word storage for the narrow (`u32`) and wide (`u64`) flags.
///
/// Both start from all ones. A `false` initial value clears the low `length`
/// bits one at a time, so padding bits above `length` stay 1 and an all-ones
/// word means every addressable bit is set.
macro_rules! impl_single_word {
    ($($word:ty),+ $(,)?) => {
        $(
            impl PackedBits for $word {
                const MAX_LENGTH: u64 = <$word>::BITS as u64;

                fn filled(length: u64, initial_value: bool) -> Self {
                    let mut word = <$word>::MAX;
                    if initial_value {
                        return word;
                    }
                    let mut step: $word = 1;
                    for _ in 0..length {
                        word ^= step;
                        step <<= 1;
                    }
                    word
                }

                #[inline]
                fn set_bit(&mut self, position: u64) {
                    let one: $word = 1;
                    *self |= one << position;
                }

                #[inline]
                fn clear_bit(&mut self, position: u64) {
                    let one: $word = 1;
                    *self &= !(one << position);
                }

                #[inline]
                fn bit(&self, position: u64) -> bool {
                    let one: $word = 1;
                    *self & one << position != 0
                }

                #[inline]
                fn all_set(&self) -> bool {
                    *self == <$word>::MAX
                }
            }
        )+
    };
}

impl_single_word!(u32, u64);
