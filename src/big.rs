//! Shift registers of arbitrary width, with state in a [`BigNum`].
//!
//! The limb type changes performance, not the sequence; which one is fastest
//! depends on `N`, the compiler and the machine, so it is worth measuring for
//! the width at hand.
//!
//! Engines are stepped at runtime; [`state_after`] computes the same states
//! on `u64` limbs in constant expressions.

use core::marker::PhantomData;

use crate::taps::Positions;
use crate::{limb_count, taps, BigNum, Digit, DirectTopBit, Limb, Strategy, Taps};

/// Linear feedback shift register of `N` bits, stored in `L` limbs of type `T`.
///
/// Starts at `1` and cycles through all `2^N - 1` non-zero values.
/// `L` must be `ceil(N / T::BITS)`; the [`big_lfsr!`] macro fills it in.
/// `N` outside the tap table fails to compile.
///
/// ```
/// type Lfsr = tiptap::big_lfsr!(4096, u8);
///
/// let mut lfsr = Lfsr::new();
/// lfsr.next();
/// assert!(lfsr.state().bit(4095));
/// ```
///
/// There are no taps for 200 bits:
///
/// ```compile_fail
/// let lfsr = <tiptap::big_lfsr!(200, u8)>::new();
/// ```
///
/// and 16 bits do not fit in one byte:
///
/// ```compile_fail
/// let lfsr = tiptap::BigLfsr::<16, 1, u8>::default();
/// ```
///
/// [`big_lfsr!`]: crate::big_lfsr!
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct BigLfsr<const N: usize, const L: usize, T: Limb = Digit, S: Strategy = DirectTopBit> {
    state: BigNum<N, L, T>,
    __: PhantomData<S>,
}

/// `BigLfsr` with `N` bits, limb type (default [`Digit`]) and strategy
/// (default [`DirectTopBit`]), with the limb count filled in.
///
/// Only works with concrete widths, not with generic parameters.
#[macro_export]
macro_rules! big_lfsr {
    ($bits:expr) => {
        $crate::big_lfsr!($bits, $crate::Digit)
    };
    ($bits:expr, $limb:ty) => {
        $crate::big_lfsr!($bits, $limb, $crate::DirectTopBit)
    };
    ($bits:expr, $limb:ty, $strategy:ty) => {
        $crate::BigLfsr<
            { $bits },
            { $crate::limb_count($bits, <$limb as $crate::Bits>::BITS) },
            $limb,
            $strategy,
        >
    };
}

impl<const N: usize, const L: usize, T: Limb, S: Strategy> BigLfsr<N, L, T, S> {
    pub const WIDTH: usize = N;
    pub const TAPS: Taps = taps::get(N);
    /// `2^N - 1`, if that fits.
    pub const PERIOD: Option<u128> = if N <= 128 { Some(u128::MAX >> (128 - N)) } else { None };

    const POSITIONS: Positions = Self::TAPS.positions();

    pub fn new() -> Self {
        let _taps = Self::TAPS;
        Self { state: BigNum::one(), __: PhantomData }
    }

    /// Advance one step.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn next(&mut self) {
        S::step_big(&mut self.state, &Self::POSITIONS);
    }

    /// Advance `steps` steps.
    pub fn steps(&mut self, steps: u64) {
        for _ in 0..steps {
            self.next();
        }
    }

    /// Observe the state.
    #[inline]
    pub fn state(&self) -> &BigNum<N, L, T> {
        &self.state
    }

    /// The low 64 bits of the state, which is all of it for `N <= 64`.
    pub fn to_u64(&self) -> u64 {
        self.state.to_u64()
    }

    /// The bit about to be shifted out, after which the register advances.
    #[inline]
    pub fn next_bit(&mut self) -> bool {
        let bit = self.state.bit(0);
        self.next();
        bit
    }
}

impl<const N: usize, const L: usize, T: Limb, S: Strategy> Default for BigLfsr<N, L, T, S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Limbs of an `N`-bit register after `steps` steps from `1`, evaluable at compile time.
///
/// The limbs are `u64`, least significant first, so `L` must be `ceil(N / 64)`.
/// Agrees with [`BigLfsr`] for any limb type and strategy.
///
/// ```
/// use tiptap::big::state_after;
///
/// const THIRD: [u64; 1] = state_after::<12, 1>(3);
/// const FOURTH: [u64; 1] = state_after::<12, 1>(4);
/// const _: () = assert!(THIRD[0] != FOURTH[0]);
///
/// const STATE: [u64; 2] = state_after::<128, 2>(1000);
/// assert_eq!(STATE, [0x4001_4028_017d_5400, 0x0440_0000_0000_0001]);
/// ```
pub const fn state_after<const N: usize, const L: usize>(steps: u64) -> [u64; L] {
    assert!(L == limb_count(N, 64), "limb count does not match width");
    let taps = taps::get(N);
    let mut state = [0u64; L];
    state[0] = 1;
    let mut step = 0;
    while step < steps {
        let mut feedback = 0;
        let mut i = 0;
        while i < taps.len() {
            let position = N - taps.tap(i);
            feedback ^= state[position / 64] >> (position % 64);
            i += 1;
        }
        let mut j = 0;
        while j + 1 < L {
            state[j] = (state[j] >> 1) | (state[j + 1] << 63);
            j += 1;
        }
        state[L - 1] = (state[L - 1] >> 1) | ((feedback & 1) << ((N - 1) % 64));
        step += 1;
    }
    state
}
