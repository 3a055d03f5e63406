//! Smallest native unsigned integer holding a given number of bits.
//!
//! This is a purely type-level computation: `SelectedInteger<N>` is `u8` for
//! `N <= 8`, `u16` for `N <= 16`, and so on up to `u128`. There is no
//! implementation for `N > 128`, so asking for one fails to compile;
//! such widths need a [`BigNum`][crate::BigNum].

use crate::Limb;

/// Carrier of a bit width on the type level.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Width<const N: usize>;

/// Implemented by [`Width<N>`] for `N` in `0..=128`.
pub trait SelectInteger {
    type Integer: Limb;
}

/// The smallest of `u8`, `u16`, `u32`, `u64`, `u128` with at least `N` bits.
pub type SelectedInteger<const N: usize> = <Width<N> as SelectInteger>::Integer;

/// Bit width of [`SelectedInteger<N>`], for use in const contexts.
///
/// Panics (at compile time, if const-evaluated) for `n > 128`.
pub const fn native_bits(n: usize) -> usize {
    if n <= 8 {
        8
    } else if n <= 16 {
        16
    } else if n <= 32 {
        32
    } else if n <= 64 {
        64
    } else if n <= 128 {
        128
    } else {
        panic!("no native integer wider than 128 bits")
    }
}

macro_rules! select {
    ($t:ty => $($n:literal)*) => {$(
        impl SelectInteger for Width<$n> {
            type Integer = $t;
        }
    )*}
}

select! { u8 =>
    0 1 2 3 4 5 6 7 8
}
select! { u16 =>
    9 10 11 12 13 14 15 16
}
select! { u32 =>
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
}
select! { u64 =>
    33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
    49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64
}
select! { u128 =>
    65 66 67 68 69 70 71 72 73 74 75 76 77 78 79 80
    81 82 83 84 85 86 87 88 89 90 91 92 93 94 95 96
    97 98 99 100 101 102 103 104 105 106 107 108 109 110 111 112
    113 114 115 116 117 118 119 120 121 122 123 124 125 126 127 128
}

#[cfg(test)]
mod test {
    use core::any::TypeId;

    use super::*;
    use crate::Bits;

    fn is<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn correct_integer_selected() {
        assert!(is::<SelectedInteger<0>, u8>());
        assert!(is::<SelectedInteger<1>, u8>());
        assert!(is::<SelectedInteger<8>, u8>());
        assert!(is::<SelectedInteger<9>, u16>());
        assert!(is::<SelectedInteger<16>, u16>());
        assert!(is::<SelectedInteger<17>, u32>());
        assert!(is::<SelectedInteger<31>, u32>());
        assert!(is::<SelectedInteger<32>, u32>());
        assert!(is::<SelectedInteger<33>, u64>());
        assert!(is::<SelectedInteger<45>, u64>());
        assert!(is::<SelectedInteger<64>, u64>());
        assert!(is::<SelectedInteger<65>, u128>());
        assert!(is::<SelectedInteger<128>, u128>());
        // `SelectedInteger<129>` does not compile, see `SmallLfsr`
    }

    #[test]
    fn native_bits_agree_with_types() {
        fn check<const N: usize>()
        where
            Width<N>: SelectInteger,
        {
            assert_eq!(native_bits(N), <SelectedInteger<N> as Bits>::BITS);
        }
        check::<3>();
        check::<8>();
        check::<12>();
        check::<24>();
        check::<40>();
        check::<100>();
        check::<128>();
    }

    const _: () = assert!(native_bits(19) == 32);
}
