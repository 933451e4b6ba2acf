//! Bit-pair primitives for packing services into bytes.
//!
//! ## Bit Ordering
//! Pairs are taken MSB-first within each byte:
//! - Pair 0 occupies bits 7 and 6
//! - Pair 3 occupies bits 1 and 0
//!
//! Within a pair the higher bit is the allocated flag and the lower bit is
//! the activated flag.

use crate::layout::SERVICES_PER_BYTE;

/// Two-bit status payload of one service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitPair {
    /// Allocated flag (high bit of the pair).
    pub allocated: bool,
    /// Activated flag (low bit of the pair).
    pub activated: bool,
}

impl BitPair {
    /// Create a bit pair from its two flags.
    pub const fn new(allocated: bool, activated: bool) -> Self {
        Self {
            allocated,
            activated,
        }
    }

    /// The pair as a 2-bit field value, allocated in bit 1.
    #[inline]
    pub fn to_bits(self) -> u8 {
        (u8::from(self.allocated) << 1) | u8::from(self.activated)
    }

    /// Build a pair from the two low bits of `bits`; higher bits are ignored.
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        Self::new(bits & 0b10 != 0, bits & 0b01 != 0)
    }
}

/// Read the bit at `position`, where 7 is the MSB and 0 the LSB.
///
/// # Panics
/// Panics if `position` is greater than 7.
#[inline]
pub fn get_bit(byte: u8, position: usize) -> bool {
    assert!(position < 8, "bit position {position} out of range 0..=7");
    (byte >> position) & 1 != 0
}

/// Split a byte into its four service pairs, MSB pair first.
pub fn split_byte(byte: u8) -> [BitPair; SERVICES_PER_BYTE] {
    std::array::from_fn(|k| {
        let high = 7 - 2 * k;
        BitPair::new(get_bit(byte, high), get_bit(byte, high - 1))
    })
}

/// Pack four service pairs into a byte, MSB pair first.
pub fn join_byte(pairs: [BitPair; SERVICES_PER_BYTE]) -> u8 {
    pairs
        .iter()
        .enumerate()
        .fold(0u8, |byte, (k, pair)| byte | (pair.to_bits() << (6 - 2 * k)))
}
