//! Maximal-length linear feedback shift registers, from 3 to 4096 bits.
//!
//! A register of width `N` starts at `1` and, with each [`next`][SmallLfsr::next],
//! visits all `2^N - 1` non-zero `N`-bit values exactly once before it returns to `1`.
//! This makes a cheap, deterministic counter that does not count in order,
//! e.g. for encrypted counters or test vectors. There is no cryptographic strength.
//!
//! - [`SmallLfsr`] keeps its state in the smallest native integer (up to `u128`)
//! - [`BigLfsr`] keeps it in a [`BigNum`], an array of limbs
//!
//! Both are parametrized by a [`Strategy`], which changes code generation but
//! not the sequence, and both produce the same sequence for the same width.
//!
//! Everything that can go wrong is rejected at compile time: widths missing
//! from the [tap table][taps], widths above 128 for `SmallLfsr`, and limb
//! counts that do not match the width.
//!
//! ```
//! use tiptap::SmallLfsr;
//!
//! let mut lfsr = SmallLfsr::<3>::new();
//! let mut states = [0u8; 7];
//! for state in states.iter_mut() {
//!     *state = lfsr.state();
//!     lfsr.next();
//! }
//! assert_eq!(states, [1, 4, 2, 5, 6, 7, 3]);
//! assert_eq!(lfsr.state(), 1);
//! ```

#![cfg_attr(not(test), no_std)]

mod digit;
pub use digit::{limb_count, Bits, Digit, Limb};
mod error;
pub use error::{Error, Result};
mod bignum;
pub use bignum::BigNum;
pub mod select;
pub use select::{SelectInteger, SelectedInteger, Width};
pub mod taps;
pub use taps::Taps;
mod strategy;
pub use strategy::{DirectTopBit, ShiftThenSet, Strategy};
pub mod small;
pub use small::SmallLfsr;
pub mod big;
pub use big::BigLfsr;
mod rng;
pub mod aliases;
