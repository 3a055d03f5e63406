//! Shift registers as bit streams.
//!
//! The output is the sequence of bits shifted out of the bottom of the
//! register, least significant first within each word. This is a plain
//! LFSR stream, with no cryptographic strength whatsoever, hence there is
//! no `CryptoRng` implementation.

use rand_core::{impls, Error, RngCore};

use crate::select::{SelectInteger, Width};
use crate::{BigLfsr, Limb, SmallLfsr, Strategy};

#[inline]
fn collect_bits(count: u32, mut next_bit: impl FnMut() -> bool) -> u64 {
    (0..count).fold(0, |word, i| word | ((next_bit() as u64) << i))
}

impl<const N: usize, S: Strategy> RngCore for SmallLfsr<N, S>
where
    Width<N>: SelectInteger,
{
    fn next_u32(&mut self) -> u32 {
        collect_bits(32, || self.next_bit()) as u32
    }

    fn next_u64(&mut self) -> u64 {
        collect_bits(64, || self.next_bit())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<const N: usize, const L: usize, T: Limb, S: Strategy> RngCore for BigLfsr<N, L, T, S> {
    fn next_u32(&mut self) -> u32 {
        collect_bits(32, || self.next_bit()) as u32
    }

    fn next_u64(&mut self) -> u64 {
        collect_bits(64, || self.next_bit())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;
    use rand_core::RngCore;

    use crate::{big_lfsr, SmallLfsr};

    #[test]
    fn words() {
        let mut lfsr = SmallLfsr::<32>::new();
        assert_eq!(lfsr.next_u32(), 0x0000_0001);
        assert_eq!(lfsr.next_u32(), 0x8a2d_b6db);

        let mut lfsr = SmallLfsr::<32>::new();
        assert_eq!(lfsr.next_u64(), 0x8a2d_b6db_0000_0001);

        // a 128-bit register shifts out its initial 1, then 127 zeros
        let mut lfsr = <big_lfsr!(128)>::new();
        assert_eq!(lfsr.next_u64(), 1);
        assert_eq!(lfsr.next_u64(), 0);
    }

    #[test]
    fn bytes() {
        let mut lfsr = <big_lfsr!(32, u8)>::new();
        let mut bytes = [0u8; 8];
        lfsr.fill_bytes(&mut bytes);
        assert_eq!(bytes, hex!("01000000dbb62d8a"));

        let mut lfsr = SmallLfsr::<32>::new();
        let mut bytes = [0u8; 8];
        lfsr.try_fill_bytes(&mut bytes).unwrap();
        assert_eq!(bytes, hex!("01000000dbb62d8a"));
    }

    #[test]
    fn engines_stream_alike() {
        let mut small = SmallLfsr::<61>::new();
        let mut big = <big_lfsr!(61, u16)>::new();
        let mut a = [0u8; 1001];
        let mut b = [0u8; 1001];
        small.fill_bytes(&mut a);
        big.fill_bytes(&mut b);
        assert_eq!(a[..], b[..]);
        assert!(a.iter().any(|&byte| byte != 0));
    }
}
