//! Shorthand constructors for unsigned [`Integral`]s from integer literals.
//! 
//! Each function takes the literal as a [`u64`] and truncates it to the
//! target width, in the same way as [`Integral::from_numeric()`], so for
//! example `uc(321)` holds `65`.
//! 
//! ```
//! use integral::literals::{uc, ui};
//! 
//! assert_eq!(uc(65).get(), b'A');
//! assert_eq!(ui(1_000).hex(), "3e8");
//! ```



//		Modules

#[cfg(test)]
#[path = "tests/literals.rs"]
mod tests;



//		Packages

use crate::integral::Integral;



//		Functions

//		uc
/// Creates an [`Integral<u8>`], the equivalent of an unsigned char.
#[must_use]
pub fn uc(value: u64) -> Integral<u8> {
	Integral::from_numeric(value)
}

//		ui
/// Creates an [`Integral<u32>`], the equivalent of an unsigned int.
#[must_use]
pub fn ui(value: u64) -> Integral<u32> {
	Integral::from_numeric(value)
}

//		ul
/// Creates an [`Integral<u64>`], the equivalent of an unsigned long on 64-bit
/// Unix-like platforms.
#[must_use]
pub fn ul(value: u64) -> Integral<u64> {
	Integral::from_numeric(value)
}

//		ull
/// Creates an [`Integral<u64>`], the equivalent of an unsigned long long.
#[must_use]
pub fn ull(value: u64) -> Integral<u64> {
	Integral::new(value)
}

//		us
/// Creates an [`Integral<u16>`], the equivalent of an unsigned short.
#[must_use]
pub fn us(value: u64) -> Integral<u16> {
	Integral::from_numeric(value)
}
