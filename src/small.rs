//! Shift registers that fit in a native integer (up to 128 bits).

use core::marker::PhantomData;

use crate::select::{SelectInteger, SelectedInteger, Width};
use crate::{taps, DirectTopBit, Limb, Strategy, Taps};

/// Linear feedback shift register of `N` bits, for `3 <= N <= 128`.
///
/// The state lives in the smallest native integer with at least `N` bits,
/// starts at `1`, and cycles through all `2^N - 1` non-zero values.
///
/// `N` outside the tap table, or above 128, fails to compile; use
/// [`BigLfsr`][crate::BigLfsr] for the wide ones.
///
/// ```
/// use tiptap::SmallLfsr;
///
/// let mut lfsr = SmallLfsr::<4>::new();
/// let initial = lfsr.state();
/// let mut period = 0;
/// loop {
///     lfsr.next();
///     period += 1;
///     if lfsr.state() == initial {
///         break;
///     }
/// }
/// assert_eq!(period, 15);
/// ```
///
/// There are no taps for two bits:
///
/// ```compile_fail
/// let lfsr = tiptap::SmallLfsr::<2>::new();
/// ```
///
/// and no native integer for 129:
///
/// ```compile_fail
/// let lfsr = tiptap::SmallLfsr::<129>::new();
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct SmallLfsr<const N: usize, S: Strategy = DirectTopBit>
where
    Width<N>: SelectInteger,
{
    state: SelectedInteger<N>,
    __: PhantomData<S>,
}

impl<const N: usize, S: Strategy> SmallLfsr<N, S>
where
    Width<N>: SelectInteger,
{
    pub const WIDTH: usize = N;
    pub const TAPS: Taps = taps::get(N);
    /// `2^N - 1`
    pub const PERIOD: u128 = u128::MAX >> (128 - N);

    pub fn new() -> Self {
        let _taps = Self::TAPS;
        Self { state: <SelectedInteger<N> as Limb>::ONE, __: PhantomData }
    }

    /// Advance one step.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn next(&mut self) {
        self.state = S::step(self.state, N, &Self::TAPS);
    }

    /// Advance `steps` steps.
    pub fn steps(&mut self, steps: u64) {
        for _ in 0..steps {
            self.next();
        }
    }

    /// Observe the state.
    #[inline]
    pub fn state(&self) -> SelectedInteger<N> {
        self.state
    }

    /// The bit about to be shifted out, after which the register advances.
    #[inline]
    pub fn next_bit(&mut self) -> bool {
        let bit = self.state & <SelectedInteger<N> as Limb>::ONE != <SelectedInteger<N> as Limb>::ZERO;
        self.next();
        bit
    }
}

impl<const N: usize, S: Strategy> Default for SmallLfsr<N, S>
where
    Width<N>: SelectInteger,
{
    fn default() -> Self {
        Self::new()
    }
}

/// State of an `n`-bit register after `steps` steps from `1`, evaluable at compile time.
///
/// For `n <= 128`. This is the shift-then-set computation on a `u128`,
/// and agrees with [`SmallLfsr`] for either strategy.
///
/// ```
/// // an array with the size equal to the third state of a size 12 register
/// const M: usize = tiptap::small::state_after(12, 3) as usize;
/// let data = [0u8; M];
/// assert_eq!(data.len(), 3584);
/// ```
pub const fn state_after(n: usize, steps: u64) -> u128 {
    assert!(n <= 128, "no native register wider than 128 bits");
    let taps = taps::get(n);
    let mut state: u128 = 1;
    let mut step = 0;
    while step < steps {
        let mut feedback = 0;
        let mut i = 0;
        while i < taps.len() {
            feedback ^= state >> (n - taps.tap(i));
            i += 1;
        }
        state = (state >> 1) | ((feedback & 1) << (n - 1));
        step += 1;
    }
    state
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ShiftThenSet;

    fn brute_force<const N: usize, S: Strategy>()
    where
        Width<N>: SelectInteger,
    {
        let mut lfsr = SmallLfsr::<N, S>::new();
        let mut seen = vec![false; 1 << N];
        let initial = lfsr.state();
        assert_eq!(initial.to_u128(), 1);

        let mut period = 0u128;
        loop {
            let state = lfsr.state().to_u128() as usize;
            // zero is never reached, everything stays within (0, 2^N)
            assert!(state > 0 && state < (1 << N));
            assert!(!seen[state], "state {} repeated", state);
            seen[state] = true;
            period += 1;

            lfsr.next();
            if lfsr.state() == initial {
                break;
            }
        }
        assert_eq!(period, SmallLfsr::<N, S>::PERIOD);
        assert_eq!(period, (1 << N) - 1);
    }

    macro_rules! brute_force {
        ($($n:literal)*) => {$(
            brute_force::<$n, DirectTopBit>();
            brute_force::<$n, ShiftThenSet>();
        )*}
    }

    #[test]
    fn fits_in_8_bits() {
        brute_force!(3 4 5 6 7 8);
    }

    #[test]
    fn fits_in_16_bits() {
        brute_force!(9 10 11 12 13 14 15 16);
    }

    #[test]
    fn fits_in_32_bits() {
        brute_force!(17 18);
    }

    #[test]
    fn three_bit_cycle() {
        let mut lfsr = SmallLfsr::<3>::new();
        let mut cycle = Vec::new();
        for _ in 0..8 {
            cycle.push(lfsr.state());
            lfsr.next();
        }
        assert_eq!(cycle, [1, 4, 2, 5, 6, 7, 3, 1]);
    }

    fn strategies_agree<const N: usize>(steps: u64)
    where
        Width<N>: SelectInteger,
    {
        let mut direct = SmallLfsr::<N, DirectTopBit>::new();
        let mut shifted = SmallLfsr::<N, ShiftThenSet>::new();
        for _ in 0..steps {
            direct.next();
            shifted.next();
            assert_eq!(direct.state(), shifted.state());
            assert!(direct.state().to_u128() != 0);
        }
    }

    #[test]
    fn strategies_agree_on_wide_registers() {
        strategies_agree::<24>(100_000);
        strategies_agree::<33>(100_000);
        strategies_agree::<64>(100_000);
        strategies_agree::<100>(100_000);
        strategies_agree::<127>(100_000);
        strategies_agree::<128>(100_000);
    }

    #[test]
    fn wide_registers_stay_in_range() {
        fn check<const N: usize>()
        where
            Width<N>: SelectInteger,
        {
            let mut lfsr = SmallLfsr::<N>::new();
            for _ in 0..10_000 {
                lfsr.next();
                let state = lfsr.state().to_u128();
                assert!(state != 0);
                assert!(N == 128 || state >> N == 0);
            }
        }
        check::<20>();
        check::<63>();
        check::<64>();
        check::<65>();
        check::<128>();
    }

    #[test]
    fn const_evaluation() {
        const THIRD: u128 = state_after(12, 3);
        const FOURTH: u128 = state_after(12, 4);
        assert_ne!(THIRD, FOURTH);

        assert_eq!(state_after(19, 3), 196_608);
        assert_eq!(state_after(64, 5), 0x0800_0000_0000_0000);
        assert_eq!(state_after(128, 5), 1 << 123);

        fn agrees<const N: usize>()
        where
            Width<N>: SelectInteger,
        {
            let mut lfsr = SmallLfsr::<N>::new();
            for step in 0..200 {
                assert_eq!(lfsr.state().to_u128(), state_after(N, step));
                lfsr.next();
            }
        }
        agrees::<3>();
        agrees::<19>();
        agrees::<64>();
        agrees::<128>();
    }

    #[test]
    fn next_bit_is_the_bottom_bit() {
        let mut lfsr = SmallLfsr::<7>::new();
        let mut reference = SmallLfsr::<7>::new();
        for _ in 0..300 {
            let expected = reference.state() & 1 == 1;
            reference.next();
            assert_eq!(lfsr.next_bit(), expected);
            assert_eq!(lfsr, reference);
        }
    }

    #[test]
    fn steps() {
        let mut a = SmallLfsr::<40>::default();
        let mut b = SmallLfsr::<40>::new();
        a.steps(1000);
        for _ in 0..1000 {
            b.next();
        }
        assert_eq!(a.state(), b.state());
        assert_eq!(a.state() as u128, state_after(40, 1000));
    }
}
