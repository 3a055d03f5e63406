//! Type aliases by bit-size for the default [`Digit`][crate::Digit],
//! independent of architecture/features.

use crate::{BigLfsr, BigNum};
pub use aliases::*;

// 32-bit
#[cfg(feature = "u32")]
mod aliases {
    use super::*;

    pub type BigNum128 = BigNum<128, 4>;
    pub type BigNum168 = BigNum<168, 6>;
    pub type BigNum512 = BigNum<512, 16>;
    pub type BigNum768 = BigNum<768, 24>;
    pub type BigNum1024 = BigNum<1024, 32>;
    pub type BigNum2048 = BigNum<2048, 64>;
    pub type BigNum4096 = BigNum<4096, 128>;

    pub type Lfsr128 = BigLfsr<128, 4>;
    pub type Lfsr168 = BigLfsr<168, 6>;
    pub type Lfsr512 = BigLfsr<512, 16>;
    pub type Lfsr768 = BigLfsr<768, 24>;
    pub type Lfsr1024 = BigLfsr<1024, 32>;
    pub type Lfsr2048 = BigLfsr<2048, 64>;
    pub type Lfsr4096 = BigLfsr<4096, 128>;
}

// 64-bit
#[cfg(feature = "u64")]
mod aliases {
    use super::*;

    pub type BigNum128 = BigNum<128, 2>;
    pub type BigNum168 = BigNum<168, 3>;
    pub type BigNum512 = BigNum<512, 8>;
    pub type BigNum768 = BigNum<768, 12>;
    pub type BigNum1024 = BigNum<1024, 16>;
    pub type BigNum2048 = BigNum<2048, 32>;
    pub type BigNum4096 = BigNum<4096, 64>;

    pub type Lfsr128 = BigLfsr<128, 2>;
    pub type Lfsr168 = BigLfsr<168, 3>;
    pub type Lfsr512 = BigLfsr<512, 8>;
    pub type Lfsr768 = BigLfsr<768, 12>;
    pub type Lfsr1024 = BigLfsr<1024, 16>;
    pub type Lfsr2048 = BigLfsr<2048, 32>;
    pub type Lfsr4096 = BigLfsr<4096, 64>;
}
