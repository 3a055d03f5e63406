use core::fmt;

use zeroize::Zeroize;

use super::BigNum;
use crate::Limb;

impl<const N: usize, const L: usize, T: Limb> Default for BigNum<N, L, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, const L: usize, T: Limb> Zeroize for BigNum<N, L, T> {
    fn zeroize(&mut self) {
        for limb in self.0.iter_mut() {
            limb.zeroize();
        }
    }
}

#[cfg(feature = "ct-maybe")]
impl<const N: usize, const L: usize, T: Limb> subtle::ConstantTimeEq for BigNum<N, L, T> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        let mut difference = T::ZERO;
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            difference |= *a ^ *b;
        }
        let difference = difference.to_u128();
        let folded = (difference as u64) | ((difference >> 64) as u64);
        subtle::ConstantTimeEq::ct_eq(&folded, &0)
    }
}

// Big-endian: zero-padded limbs by default, `Self::BYTES` spaced bytes with `hex-debug`.
impl<const N: usize, const L: usize, T: Limb> fmt::Debug for BigNum<N, L, T> {
    #[cfg(not(feature = "hex-debug"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum<{}>(", N)?;
        for limb in self.0.iter().rev() {
            write!(f, "{:0width$x}", limb, width = 2 * T::BYTES)?;
        }
        f.write_str(")")
    }

    #[cfg(feature = "hex-debug")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum<{}>(", N)?;
        let mut chunk = [0u8; 64];
        let mut remaining = Self::BYTES;
        while remaining > 0 {
            let len = core::cmp::min(chunk.len(), remaining);
            for (k, byte) in chunk[..len].iter_mut().enumerate() {
                *byte = self.byte(remaining - 1 - k);
            }
            if remaining < Self::BYTES {
                f.write_str(" ")?;
            }
            write!(f, "{}", delog::hex_str!(&chunk[..len]))?;
            remaining -= len;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod test {
    use zeroize::Zeroize;

    use crate::bignum;

    #[cfg(not(feature = "hex-debug"))]
    #[test]
    fn debug() {
        let mut x = <bignum!(20, u8)>::zero();
        x.set_bit(0, true);
        x.set_bit(19, true);
        assert_eq!(format!("{:?}", x), "BigNum<20>(080001)");

        let y = <bignum!(40, u32)>::from_limbs([0x7654_3210, 0xBA]);
        assert_eq!(format!("{:?}", y), "BigNum<40>(000000ba76543210)");
    }

    #[cfg(feature = "hex-debug")]
    #[test]
    fn debug() {
        let mut x = <bignum!(20, u8)>::zero();
        x.set_bit(0, true);
        x.set_bit(19, true);
        assert_eq!(format!("{:?}", x), "BigNum<20>(08 00 01)");
        let mut y = <bignum!(20, u32)>::zero();
        y.set_bit(0, true);
        y.set_bit(19, true);
        assert_eq!(format!("{:?}", y), format!("{:?}", x));

        let y = <bignum!(40, u32)>::from_limbs([0x7654_3210, 0xBA]);
        assert_eq!(format!("{:?}", y), "BigNum<40>(BA 76 54 32 10)");

        // more than one chunk of bytes
        let mut z = <bignum!(1024, u64)>::zero();
        z.set_bit(1023, true);
        let printed = format!("{:?}", z);
        assert!(printed.starts_with("BigNum<1024>(80 00 "));
        assert!(printed.ends_with(" 00 00)"));
        assert_eq!(printed.matches(' ').count(), 127);
    }

    #[test]
    fn zeroize() {
        let mut x = <bignum!(300)>::zero();
        x.complement();
        x.zeroize();
        assert!(x.is_zero());
    }

    #[cfg(feature = "ct-maybe")]
    #[test]
    fn constant_time_eq() {
        use subtle::ConstantTimeEq;

        let mut x = <bignum!(200, u128)>::one();
        let y = x;
        assert!(bool::from(x.ct_eq(&y)));
        x.set_bit(199, true);
        assert!(!bool::from(x.ct_eq(&y)));
    }
}
