//! Native unsigned integers, as limbs of a [`BigNum`][crate::BigNum] or as
//! the register of a [`SmallLfsr`][crate::SmallLfsr].

use core::{fmt, hash::Hash};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr, ShrAssign};

use zeroize::Zeroize;

/// A word on the machine. [`BigNum`][crate::BigNum] is composed of many digits
/// unless another limb type is asked for.
///
/// Feature `u32` forces the digit to be 32-bit even on 64-bit architectures,
/// feature `u64` forces the digit to be 64-bit even on 32-bit architectures.
///
/// This is done only for easier testing (typically embedded targets are 32 bit,
/// while desktop/server targets as 64 bit).
pub type Digit = digit::Digit;

#[cfg(not(any(feature = "u32", feature = "u64")))]
compile_error!("Either feature u32 or feature u64!");

#[cfg(all(feature = "u32", feature = "u64"))]
compile_error!("Either feature u32 or feature u64, not both!");

#[cfg(feature = "u32")]
mod digit {
    pub type Digit = u32;
}

#[cfg(feature = "u64")]
mod digit {
    pub type Digit = u64;
}

/// The `{number}::BITS` constant, as `usize`.
///
/// Note that the inherent `u8::BITS` etc. (of type `u32`) win over this
/// for concrete types; in generic code `T::BITS` resolves here.
pub trait Bits {
    const BITS: usize;
}

mod sealed {
    pub trait Sealed {}
}

/// Unsigned native integer with the handful of operations shift registers need.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128`, and nothing else.
pub trait Limb:
    Bits
    + Copy
    + Default
    + Eq
    + Hash
    + fmt::Debug
    + fmt::LowerHex
    + Zeroize
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + ShrAssign<usize>
    + sealed::Sealed
{
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    /// Size in bytes.
    const BYTES: usize;

    fn count_ones(self) -> u32;

    /// `0` or `1`.
    fn from_bool(bit: bool) -> Self;

    /// Lossless widening.
    fn to_u128(self) -> u128;

    /// Keeps the low `Self::BITS` bits.
    fn truncate_u128(x: u128) -> Self;
}

macro_rules! impl_limb {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Bits for $t {
            const BITS: usize = <$t>::BITS as usize;
        }

        impl Limb for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$t>::MAX;
            const BYTES: usize = core::mem::size_of::<$t>();

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }

            #[inline(always)]
            fn from_bool(bit: bool) -> Self {
                bit as $t
            }

            #[inline(always)]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn truncate_u128(x: u128) -> Self {
                x as $t
            }
        }
    )*}
}

impl_limb!(u8, u16, u32, u64, u128);

/// Number of `limb_bits`-sized limbs needed for `bits` bits.
pub const fn limb_count(bits: usize, limb_bits: usize) -> usize {
    (bits + (limb_bits - 1)) / limb_bits
}

/// Mask of the bits of the top limb that belong to a `bits`-wide number.
pub(crate) fn top_limb_mask<T: Limb>(bits: usize) -> T {
    match bits % T::BITS {
        0 => T::MAX,
        used => !(T::MAX << used),
    }
}
