//! Feedback polynomials of maximal-length shift registers.
//!
//! Taps are numbered the customary way: `N` down to `1`, with tap `t`
//! reading the zero-indexed register bit `N - t`. Every set starts with `N`
//! and is strictly descending.
//!
//! Widths 3 to 168 are from Scott's table at
//! <http://scott.joviansynth.com/electronics/LFSRtaps.html>, some edited
//! (in particular `N = 16`, to match the Wikipedia article on LFSRs).
//! The widths 512 to 4096 are from the table by Roy Ward and Tim Molteno,
//! <https://web.archive.org/web/20161007061934/http://courses.cse.tamu.edu/csce680/walker/lfsr_table.pdf>.
//!
//! Other widths can be searched for with <https://github.com/hayguen/mlpolygen>,
//! which is very slow beyond 200 bits.
//!
//! At runtime, a missing width is an error:
//!
//! ```
//! assert!(tiptap::taps::lookup(0).is_err());
//! assert_eq!(tiptap::taps::get(4096).tap(3), 4069);
//! ```
//!
//! in constants, it stops the build:
//!
//! ```compile_fail
//! const TAPS: tiptap::Taps = tiptap::taps::get(0);
//! ```

use core::ops::Deref;

use crate::{Error, Result};

/// Tap set of one width: two or four exponents of the feedback polynomial.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Taps {
    taps: [u16; 4],
    len: usize,
}

impl Taps {
    const fn two(a: u16, b: u16) -> Self {
        Self { taps: [a, b, 0, 0], len: 2 }
    }

    const fn four(a: u16, b: u16, c: u16, d: u16) -> Self {
        Self { taps: [a, b, c, d], len: 4 }
    }

    /// The register width `N`, which is also the first tap.
    pub const fn width(&self) -> usize {
        self.taps[0] as usize
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `i`-th tap, in descending order.
    pub const fn tap(&self, i: usize) -> usize {
        assert!(i < self.len);
        self.taps[i] as usize
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.taps[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().map(|&t| t as usize)
    }

    /// The zero-indexed register bits read by the taps, `N - t` each.
    pub const fn positions(&self) -> Positions {
        let n = self.width();
        let mut bits = [0; 4];
        let mut i = 0;
        while i < self.len {
            bits[i] = n - self.taps[i] as usize;
            i += 1;
        }
        Positions { bits, len: self.len }
    }
}

/// Zero-indexed bit positions of a [`Taps`], ascending.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Positions {
    bits: [usize; 4],
    len: usize,
}

impl Deref for Positions {
    type Target = [usize];
    fn deref(&self) -> &Self::Target {
        &self.bits[..self.len]
    }
}

/// Taps of all supported widths, ascending by width.
static TABLE: [Taps; 171] = TAPS;

const TAPS: [Taps; 171] = [
    Taps::two(3, 2),
    Taps::two(4, 3),
    Taps::two(5, 3),
    Taps::two(6, 5),
    Taps::two(7, 6),
    Taps::four(8, 6, 5, 4),
    Taps::two(9, 5),
    Taps::two(10, 7),
    Taps::two(11, 9),
    Taps::four(12, 6, 4, 1),
    Taps::four(13, 4, 3, 1),
    Taps::four(14, 5, 3, 1),
    Taps::two(15, 14),
    Taps::four(16, 14, 13, 11),
    Taps::two(17, 14),
    Taps::two(18, 11),
    Taps::four(19, 6, 2, 1),
    Taps::two(20, 17),
    Taps::two(21, 19),
    Taps::two(22, 21),
    Taps::two(23, 18),
    Taps::four(24, 23, 22, 17),
    Taps::two(25, 22),
    Taps::four(26, 6, 2, 1),
    Taps::four(27, 5, 2, 1),
    Taps::two(28, 25),
    Taps::two(29, 27),
    Taps::four(30, 6, 4, 1),
    Taps::two(31, 28),
    Taps::four(32, 22, 2, 1),
    Taps::two(33, 2),
    Taps::four(34, 27, 2, 1),
    Taps::two(35, 33),
    Taps::two(36, 25),
    Taps::four(37, 36, 33, 31),
    Taps::four(38, 6, 5, 1),
    Taps::two(39, 35),
    Taps::four(40, 38, 21, 19),
    Taps::two(41, 38),
    Taps::four(42, 41, 20, 19),
    Taps::four(43, 42, 38, 37),
    Taps::four(44, 43, 18, 17),
    Taps::four(45, 44, 42, 41),
    Taps::four(46, 45, 26, 25),
    Taps::two(47, 42),
    Taps::four(48, 47, 21, 20),
    Taps::two(49, 4),
    Taps::four(50, 49, 24, 23),
    Taps::four(51, 50, 36, 35),
    Taps::two(52, 49),
    Taps::four(53, 52, 38, 37),
    Taps::four(54, 53, 18, 17),
    Taps::two(55, 31),
    Taps::four(56, 55, 35, 34),
    Taps::two(57, 5),
    Taps::two(58, 39),
    Taps::four(59, 58, 38, 37),
    Taps::two(60, 59),
    Taps::four(61, 60, 46, 45),
    Taps::four(62, 61, 6, 5),
    Taps::two(63, 62),
    Taps::four(64, 63, 61, 60),
    Taps::two(65, 47),
    Taps::four(66, 65, 57, 56),
    Taps::four(67, 66, 58, 57),
    Taps::two(68, 59),
    Taps::four(69, 67, 42, 40),
    Taps::four(70, 69, 55, 54),
    Taps::two(71, 65),
    Taps::four(72, 66, 25, 19),
    Taps::two(73, 48),
    Taps::four(74, 73, 59, 58),
    Taps::four(75, 74, 65, 64),
    Taps::four(76, 75, 41, 40),
    Taps::four(77, 76, 47, 46),
    Taps::four(78, 77, 59, 58),
    Taps::two(79, 7),
    Taps::four(80, 79, 43, 42),
    Taps::two(81, 77),
    Taps::four(82, 79, 47, 44),
    Taps::four(83, 82, 38, 37),
    Taps::two(84, 71),
    Taps::four(85, 84, 58, 57),
    Taps::four(86, 85, 74, 73),
    Taps::two(87, 74),
    Taps::four(88, 87, 17, 16),
    Taps::two(89, 51),
    Taps::four(90, 89, 72, 71),
    Taps::four(91, 90, 8, 7),
    Taps::four(92, 91, 80, 79),
    Taps::two(93, 91),
    Taps::two(94, 73),
    Taps::two(95, 84),
    Taps::four(96, 94, 49, 47),
    Taps::two(97, 91),
    Taps::two(98, 87),
    Taps::four(99, 97, 54, 52),
    Taps::two(100, 63),
    Taps::four(101, 100, 95, 94),
    Taps::four(102, 101, 36, 35),
    Taps::two(103, 94),
    Taps::four(104, 103, 94, 93),
    Taps::two(105, 89),
    Taps::two(106, 91),
    Taps::four(107, 105, 44, 42),
    Taps::two(108, 77),
    Taps::four(109, 108, 103, 102),
    Taps::four(110, 109, 98, 97),
    Taps::two(111, 101),
    Taps::four(112, 110, 69, 67),
    Taps::two(113, 104),
    Taps::four(114, 113, 33, 32),
    Taps::four(115, 114, 101, 100),
    Taps::four(116, 115, 46, 45),
    Taps::four(117, 115, 99, 97),
    Taps::two(118, 85),
    Taps::two(119, 111),
    Taps::four(120, 113, 9, 2),
    Taps::two(121, 103),
    Taps::four(122, 121, 63, 62),
    Taps::two(123, 121),
    Taps::two(124, 87),
    Taps::four(125, 124, 18, 17),
    Taps::four(126, 125, 90, 89),
    Taps::two(127, 126),
    Taps::four(128, 126, 101, 99),
    Taps::two(129, 124),
    Taps::two(130, 127),
    Taps::four(131, 130, 84, 83),
    Taps::two(132, 103),
    Taps::four(133, 132, 82, 81),
    Taps::two(134, 77),
    Taps::two(135, 124),
    Taps::four(136, 135, 11, 10),
    Taps::two(137, 116),
    Taps::four(138, 137, 131, 130),
    Taps::four(139, 136, 134, 131),
    Taps::two(140, 111),
    Taps::four(141, 140, 110, 109),
    Taps::two(142, 121),
    Taps::four(143, 142, 123, 122),
    Taps::four(144, 143, 75, 74),
    Taps::two(145, 93),
    Taps::four(146, 145, 87, 86),
    Taps::four(147, 146, 110, 109),
    Taps::two(148, 121),
    Taps::four(149, 148, 40, 39),
    Taps::two(150, 97),
    Taps::two(151, 148),
    Taps::four(152, 151, 87, 86),
    Taps::two(153, 152),
    Taps::four(154, 152, 27, 25),
    Taps::four(155, 154, 124, 123),
    Taps::four(156, 155, 41, 40),
    Taps::four(157, 156, 131, 130),
    Taps::four(158, 157, 132, 131),
    Taps::two(159, 128),
    Taps::four(160, 159, 142, 141),
    Taps::two(161, 143),
    Taps::four(162, 161, 75, 74),
    Taps::four(163, 162, 104, 103),
    Taps::four(164, 163, 151, 150),
    Taps::four(165, 164, 135, 134),
    Taps::four(166, 165, 128, 127),
    Taps::two(167, 161),
    Taps::four(168, 166, 153, 151),
    // Ward & Molteno
    Taps::four(512, 510, 507, 504),
    Taps::four(768, 764, 751, 749),
    Taps::four(1024, 1015, 1002, 1001),
    Taps::four(2048, 2035, 2034, 2029),
    Taps::four(4096, 4095, 4081, 4069),
];

/// Rows of the table indexed directly by `width - 3`.
const CONTIGUOUS: usize = 168 - 3 + 1;

/// The tap table is authored data; check it once, at compile time.
const fn check_table(table: &[Taps]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let taps = &table[i];
        assert!(taps.len == 2 || taps.len == 4, "two or four taps");
        assert!(taps.width() >= 3, "width below 3");
        let mut j = 1;
        while j < taps.len {
            assert!(taps.taps[j] != 0, "zero tap");
            assert!(taps.taps[j - 1] > taps.taps[j], "taps not strictly descending");
            j += 1;
        }
        while j < 4 {
            assert!(taps.taps[j] == 0, "unused tap slot");
            j += 1;
        }
        if i > 0 {
            assert!(table[i - 1].width() < taps.width(), "widths not strictly ascending");
        }
        if i < CONTIGUOUS {
            assert!(taps.width() == i + 3, "widths 3..=168 not contiguous");
        }
        i += 1;
    }
    true
}

const _: () = assert!(check_table(&TAPS));

/// Taps for width `n`, or `None` if `n` is not in the table.
pub const fn find(n: usize) -> Option<Taps> {
    // widths 3..=168 are contiguous
    if n >= 3 && n <= 168 {
        return Some(TAPS[n - 3]);
    }
    let mut i = CONTIGUOUS;
    while i < TAPS.len() {
        if TAPS[i].width() == n {
            return Some(TAPS[i]);
        }
        i += 1;
    }
    None
}

/// Taps for width `n`.
///
/// Meant for const evaluation, where an unsupported `n` stops the build.
pub const fn get(n: usize) -> Taps {
    match find(n) {
        Some(taps) => taps,
        None => panic!("unsupported LFSR width"),
    }
}

/// Taps for width `n`, if supported.
pub fn lookup(n: usize) -> Result<Taps> {
    find(n).ok_or(Error)
}

/// All supported widths, ascending.
pub fn widths() -> impl Iterator<Item = usize> {
    TABLE.iter().map(Taps::width)
}
