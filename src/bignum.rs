//! Fixed-width unsigned integers, just big enough for long shift registers.
//!
//! This is a bignum with very limited functionality: bit access, parity
//! over a set of bits, and a right shift by one. No arithmetic.

use crate::digit::{limb_count, top_limb_mask};
use crate::{Digit, Error, Limb, Result};

mod shift;
mod trait_implementations;

/// Unsigned integer of `N` bits, stored in `L` limbs of type `T`.
///
/// Internal representation as little-endian: the least significant limb
/// comes first. The top limb may have unused high bits ("excess bits"),
/// which are kept zero by every operation.
///
/// Stable const generics cannot compute `L` from `N`, so it is spelled out,
/// and checked to be `ceil(N / T::BITS)` at compile time. The [`bignum!`]
/// macro fills it in.
///
/// ```
/// let x = tiptap::BigNum::<20, 3, u8>::zero();
/// assert!(x.is_zero());
/// ```
///
/// ```compile_fail
/// let x = tiptap::BigNum::<20, 4, u8>::zero();
/// ```
///
/// [`bignum!`]: crate::bignum!
#[derive(Copy, Clone, Eq, Hash, PartialEq)]
pub struct BigNum<const N: usize, const L: usize, T: Limb = Digit>(pub(crate) [T; L]);

/// `BigNum` with `N` bits and limb type `T` (default [`Digit`]), with the limb count filled in.
///
/// ```
/// type Big = tiptap::bignum!(1234, u8);
/// assert_eq!(Big::LIMB_COUNT, 155);
/// ```
///
/// Only works with concrete widths, not with generic parameters.
#[macro_export]
macro_rules! bignum {
    ($bits:expr) => {
        $crate::bignum!($bits, $crate::Digit)
    };
    ($bits:expr, $limb:ty) => {
        $crate::BigNum<
            { $bits },
            { $crate::limb_count($bits, <$limb as $crate::Bits>::BITS) },
            $limb,
        >
    };
}

// constants
impl<const N: usize, const L: usize, T: Limb> BigNum<N, L, T> {
    /// Nominal bit width.
    pub const WIDTH: usize = N;
    pub const LIMB_BITS: usize = T::BITS;
    pub const LIMB_COUNT: usize = L;
    /// Unused high bits in the top limb.
    pub const EXCESS_BITS: usize = L * T::BITS - N;
    /// Number of little-endian bytes written by [`Self::write_le_bytes`].
    pub const BYTES: usize = (N + 7) / 8;

    const LAYOUT: () = assert!(
        N > 0 && L == limb_count(N, T::BITS),
        "limb count does not match bit width",
    );

    /// Position of bit `N - 1` within the top limb.
    const TOP: usize = (N - 1) % T::BITS;
}

// c'tors and such
impl<const N: usize, const L: usize, T: Limb> BigNum<N, L, T> {
    pub fn zero() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::LAYOUT;
        Self([T::ZERO; L])
    }

    pub fn one() -> Self {
        let mut one = Self::zero();
        one.0[0] = T::ONE;
        one
    }

    /// Excess bits in the top limb are dropped.
    pub fn from_limbs(limbs: [T; L]) -> Self {
        let mut x = Self::zero();
        x.0 = limbs;
        x.0[L - 1] &= top_limb_mask::<T>(N);
        x
    }

    /// Little-endian limbs.
    pub fn limbs(&self) -> &[T; L] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == T::ZERO)
    }
}

// bits
impl<const N: usize, const L: usize, T: Limb> BigNum<N, L, T> {
    #[inline]
    fn locate(i: usize) -> (usize, usize) {
        assert!(i < N, "bit index out of range");
        (i / T::BITS, i % T::BITS)
    }

    /// Zero-indexed bit `i`. Panics unless `i < N`.
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        let (limb, offset) = Self::locate(i);
        (self.0[limb] >> offset) & T::ONE != T::ZERO
    }

    /// Sets zero-indexed bit `i` to `value`. Panics unless `i < N`.
    #[inline]
    pub fn set_bit(&mut self, i: usize, value: bool) {
        let (limb, offset) = Self::locate(i);
        let mask = T::ONE << offset;
        if value {
            self.0[limb] |= mask;
        } else {
            self.0[limb] &= !mask;
        }
    }

    pub fn popcount(&self) -> usize {
        self.0.iter().map(|limb| limb.count_ones() as usize).sum()
    }

    /// Flips all `N` bits.
    pub fn complement(&mut self) {
        for limb in self.0.iter_mut() {
            *limb = !*limb;
        }
        self.0[L - 1] &= top_limb_mask::<T>(N);
    }

    /// XOR of the given bits.
    #[inline]
    pub fn parity(&self, bits: &[usize]) -> bool {
        bits.iter().fold(false, |acc, &i| acc ^ self.bit(i))
    }

    /// XOR of the given bits, placed at bit `N - 1` (as a top limb).
    ///
    /// Same as `T::from_bool(self.parity(bits)) << ((N - 1) % T::BITS)`,
    /// but each bit is shifted straight to the top instead of to the bottom
    /// and back up, and no per-bit masking is needed.
    #[inline]
    pub fn parity_into_top_bit(&self, bits: &[usize]) -> T {
        let top = Self::TOP;
        let mut acc = T::ZERO;
        for &i in bits {
            let (limb, offset) = Self::locate(i);
            let limb = self.0[limb];
            acc ^= if offset <= top {
                limb << (top - offset)
            } else {
                limb >> (offset - top)
            };
        }
        acc & (T::ONE << top)
    }
}

// conversions
impl<const N: usize, const L: usize, T: Limb> BigNum<N, L, T> {
    /// The low 128 bits.
    pub fn to_u128(&self) -> u128 {
        let mut x = 0;
        for (i, limb) in self.0.iter().enumerate() {
            let position = i * T::BITS;
            if position >= 128 {
                break;
            }
            x |= limb.to_u128() << position;
        }
        x
    }

    /// The low 64 bits, which is the whole value for `N <= 64`.
    pub fn to_u64(&self) -> u64 {
        self.to_u128() as u64
    }

    /// The value, if it fits in 64 bits.
    pub fn try_to_u64(&self) -> Result<u64> {
        let high = (64..N).any(|i| self.bit(i));
        if high {
            Err(Error)
        } else {
            Ok(self.to_u64())
        }
    }

    #[inline]
    fn byte(&self, j: usize) -> u8 {
        let position = 8 * j;
        (self.0[position / T::BITS].to_u128() >> (position % T::BITS)) as u8
    }

    /// Writes the `Self::BYTES` least significant bytes, in little-endian order.
    pub fn write_le_bytes(&self, out: &mut [u8]) {
        assert_eq!(out.len(), Self::BYTES);
        for (j, byte) in out.iter_mut().enumerate() {
            *byte = self.byte(j);
        }
    }

    /// Updates `hasher` with the little-endian bytes of `self`.
    #[cfg(feature = "digest")]
    pub fn feed<D: digest::Digest>(&self, hasher: &mut D) {
        let mut chunk = [0u8; 64];
        let mut done = 0;
        while done < Self::BYTES {
            let len = core::cmp::min(chunk.len(), Self::BYTES - done);
            for (j, byte) in chunk[..len].iter_mut().enumerate() {
                *byte = self.byte(done + j);
            }
            hasher.update(&chunk[..len]);
            done += len;
        }
    }
}
