/// The one runtime failure: asking for something the crate does not have,
/// such as taps for an unlisted width, or a `u64` view of a wider value.
///
/// Everything the shift registers need is checked at compile time instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Error;

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unsupported width or value out of range")
    }
}
