//! The two ways of computing one shift register step.
//!
//! Both compute `state >> 1` with the parity of the tapped bits moved into
//! bit `N - 1`; they only differ in code generation. Which is faster depends
//! on `N`, the limb type and the target, so it is a type parameter of the
//! registers rather than a fixed choice. [`DirectTopBit`] is the default
//! (it was 0 to 15% faster on x86_64, depending on `N`).

use core::{fmt::Debug, hash::Hash};

use crate::{BigNum, Limb, Taps};

mod sealed {
    pub trait Sealed {}
}

/// A bit insertion strategy. Implemented by [`DirectTopBit`] and [`ShiftThenSet`].
pub trait Strategy: Copy + Debug + Default + Eq + Hash + sealed::Sealed {
    /// The register after one step, for an `n`-bit register in a native integer.
    fn step<R: Limb>(state: R, n: usize, taps: &Taps) -> R;

    /// One step of a multi-limb register; `positions` are the zero-indexed tapped bits.
    fn step_big<const N: usize, const L: usize, T: Limb>(state: &mut BigNum<N, L, T>, positions: &[usize]);
}

/// XOR the tapped bits directly at the top bit.
///
/// Tap `t` reads bit `N - t`; shifting it left by `t - 1` lands it on bit `N - 1`,
/// so the whole XOR chain is computed in place and masked once.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct DirectTopBit;

/// XOR the tapped bits into the bottom bit, then shift the result up.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ShiftThenSet;

impl sealed::Sealed for DirectTopBit {}
impl sealed::Sealed for ShiftThenSet {}

impl Strategy for DirectTopBit {
    #[inline(always)]
    fn step<R: Limb>(state: R, n: usize, taps: &Taps) -> R {
        let top = R::ONE << (n - 1);
        let feedback = taps.iter().fold(R::ZERO, |acc, t| acc ^ (state << (t - 1)));
        (state >> 1) | (feedback & top)
    }

    #[inline(always)]
    fn step_big<const N: usize, const L: usize, T: Limb>(state: &mut BigNum<N, L, T>, positions: &[usize]) {
        let top = state.parity_into_top_bit(positions);
        state.shr_one_positioned(top);
    }
}

impl Strategy for ShiftThenSet {
    #[inline(always)]
    fn step<R: Limb>(state: R, n: usize, taps: &Taps) -> R {
        let feedback = taps.iter().fold(R::ZERO, |acc, t| acc ^ (state >> (n - t)));
        (state >> 1) | ((feedback & R::ONE) << (n - 1))
    }

    #[inline(always)]
    fn step_big<const N: usize, const L: usize, T: Limb>(state: &mut BigNum<N, L, T>, positions: &[usize]) {
        let bit = state.parity(positions);
        state.shr_one(bit);
    }
}
