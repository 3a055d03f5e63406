use crate::{BigNum, Limb};

impl<const N: usize, const L: usize, T: Limb> BigNum<N, L, T> {
    /// Right shift by one bit, filling bit `N - 1` with `top`.
    ///
    /// Note that "right" means "lower number". `top` is a top limb with at
    /// most bit `(N - 1) % T::BITS` set, as returned by [`Self::parity_into_top_bit`].
    #[inline]
    pub fn shr_one_positioned(&mut self, top: T) {
        debug_assert!(top & !(T::ONE << Self::TOP) == T::ZERO);

        let data = &mut self.0;
        // the bottom bit of each limb becomes the top bit of the one below
        for i in 0..L - 1 {
            data[i] = (data[i] >> 1) | (data[i + 1] << (T::BITS - 1));
        }
        data[L - 1] = (data[L - 1] >> 1) | top;
    }

    /// Right shift by one bit, setting bit `N - 1` to `fill`.
    #[inline]
    pub fn shr_one(&mut self, fill: bool) {
        self.shr_one_positioned(T::from_bool(fill) << Self::TOP);
    }
}

#[cfg(test)]
mod test {
    use crate::{bignum, limb_count, BigNum, Limb};

    type Big = bignum!(1234);

    #[test]
    fn shift_single_bit() {
        for &bit in [25, 78, 79, 1233].iter() {
            let mut big = Big::zero();
            big.set_bit(bit, true);
            big.shr_one(false);
            assert!(!big.bit(bit));
            assert!(big.bit(bit - 1));
            assert!(!big.bit(bit - 2));
            assert_eq!(big.popcount(), 1);
        }
    }

    #[test]
    fn shift_out_all_ones() {
        let mut big = Big::zero();
        big.complement();
        for i in 0..1234 {
            assert_eq!(big.popcount(), 1234 - i);
            big.shr_one(false);
        }
        assert_eq!(big.popcount(), 0);
        assert!(big.is_zero());
    }

    fn fill_top<const N: usize, const L: usize, T: Limb>() {
        let mut big = BigNum::<N, L, T>::one();
        for i in 1..N {
            big.shr_one(true);
            assert!(big.bit(N - 1));
            assert_eq!(big.popcount(), i);
        }
        // the original bit falls off the bottom, nothing leaks above N - 1
        big.shr_one(true);
        assert_eq!(big.popcount(), N);
        big.shr_one(true);
        assert_eq!(big.popcount(), N);

        let mut positioned = BigNum::<N, L, T>::one();
        let mut plain = BigNum::<N, L, T>::one();
        for i in 0..3 * N {
            let fill = i % 3 == 0;
            positioned.shr_one_positioned(T::from_bool(fill) << ((N - 1) % T::BITS));
            plain.shr_one(fill);
            assert_eq!(positioned, plain);
        }
    }

    #[test]
    fn shift_fills_top_bit() {
        fill_top::<3, { limb_count(3, 8) }, u8>();
        fill_top::<8, { limb_count(8, 8) }, u8>();
        fill_top::<9, { limb_count(9, 8) }, u8>();
        fill_top::<100, { limb_count(100, 16) }, u16>();
        fill_top::<128, { limb_count(128, 32) }, u32>();
        fill_top::<129, { limb_count(129, 64) }, u64>();
        fill_top::<300, { limb_count(300, 128) }, u128>();
    }
}
