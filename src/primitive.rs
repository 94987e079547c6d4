//! Trait describing the fixed-width integer primitives that can be wrapped.

//	The conversions in this module are between the primitive itself, its
//	unsigned counterpart, and u128, which is wide enough to hold the magnitude
//	of every supported type. Each cast is range-checked before it is made.
#![allow(
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::unnecessary_cast,
	reason = "Shared across all widths by the macros below, and range-checked where lossy"
)]



//		Modules

#[cfg(test)]
#[path = "tests/primitive.rs"]
mod tests;



//		Packages

use crate::errors::ConversionError;
use core::{
	fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex},
	hash::Hash,
	ops::{AddAssign, DivAssign, MulAssign, RemAssign, SubAssign},
};
use num_traits::{CheckedRem, PrimInt};



//		Traits

//		Sealed
mod sealed {
	/// Prevents [`Primitive`](super::Primitive) from being implemented outside
	/// of this crate.
	pub trait Sealed {}
}

//		Primitive
/// A built-in fixed-width integer type that can be wrapped by an
/// [`Integral`](crate::Integral).
///
/// This trait is sealed, and is implemented for exactly the following types:
///
///   - [`i8`], [`i16`], [`i32`], [`i64`], [`i128`], [`isize`]
///   - [`u8`], [`u16`], [`u32`], [`u64`], [`u128`], [`usize`]
///
/// On top of the general integer behaviour provided by [`PrimInt`], it
/// describes the handful of facts about each width that the wrapper needs in
/// order to parse and format values generically, most importantly a way to
/// split a value into a sign and an unsigned magnitude, and to rebuild it from
/// one.
///
pub trait Primitive:
	PrimInt
	+ CheckedRem
	+ AddAssign
	+ SubAssign
	+ MulAssign
	+ DivAssign
	+ RemAssign
	+ Binary
	+ Debug
	+ Default
	+ Display
	+ Hash
	+ LowerHex
	+ Octal
	+ UpperHex
	+ Send
	+ Sync
	+ 'static
	+ sealed::Sealed
{
	/// Number of bits used for storage.
	const BITS: u32;

	/// Number of value bits, i.e. [`BITS`](Self::BITS) less the sign bit for
	/// signed types.
	const DIGITS: u32;

	/// Whether the type is signed.
	const SIGNED: bool;

	/// Name of the type, as written in source.
	const TYPE_NAME: &'static str;

	//		from_magnitude
	/// Builds a value from a sign and an unsigned magnitude.
	///
	/// A negative zero is accepted for all types and produces zero.
	///
	/// # Parameters
	///
	/// * `negative`  - Whether the value is negative.
	/// * `magnitude` - The absolute value.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::ValueTooLarge`] or
	/// [`ConversionError::ValueTooSmall`] if the value lies outside the range
	/// of the type, or [`ConversionError::ValueIsNegative`] if a non-zero
	/// negative value is given for an unsigned type.
	///
	fn from_magnitude(negative: bool, magnitude: u128) -> Result<Self, ConversionError>;

	//		magnitude
	/// Splits the value into a sign (`true` when negative) and its absolute
	/// value.
	fn magnitude(self) -> (bool, u128);

	//		negate
	/// Negates the value.
	///
	/// Signed types follow the standard negation behaviour, and so will panic
	/// in debug builds when negating the minimum value. Unsigned types use
	/// modular negation, i.e. `-x` is `2^BITS - x`.
	///
	#[must_use]
	fn negate(self) -> Self;
}



//		Macros

//		impl_primitive_signed!
macro_rules! impl_primitive_signed {
	($($t:ty),* $(,)?) => {$(
		impl sealed::Sealed for $t {}

		//󰭅		Primitive
		impl Primitive for $t {
			const BITS:      u32          = <$t>::BITS;
			const DIGITS:    u32          = <Self as Primitive>::BITS - 1;
			const SIGNED:    bool         = true;
			const TYPE_NAME: &'static str = stringify!($t);

			//		from_magnitude
			fn from_magnitude(negative: bool, magnitude: u128) -> Result<Self, ConversionError> {
				if negative {
					//	The magnitude of MIN is one more than MAX, so it is handled by
					//	wrapping negation of the reinterpreted bits
					(magnitude <= <$t>::MIN.unsigned_abs() as u128)
						.then(|| (magnitude as $t).wrapping_neg())
						.ok_or(ConversionError::ValueTooSmall)
				} else {
					(magnitude <= <$t>::MAX as u128)
						.then_some(magnitude as $t)
						.ok_or(ConversionError::ValueTooLarge)
				}
			}

			//		magnitude
			fn magnitude(self) -> (bool, u128) {
				(self < 0, self.unsigned_abs() as u128)
			}

			//		negate
			#[expect(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]
			fn negate(self) -> Self {
				-self
			}
		}
	)*};
}

//		impl_primitive_unsigned!
macro_rules! impl_primitive_unsigned {
	($($t:ty),* $(,)?) => {$(
		impl sealed::Sealed for $t {}

		//󰭅		Primitive
		impl Primitive for $t {
			const BITS:      u32          = <$t>::BITS;
			const DIGITS:    u32          = <Self as Primitive>::BITS;
			const SIGNED:    bool         = false;
			const TYPE_NAME: &'static str = stringify!($t);

			//		from_magnitude
			fn from_magnitude(negative: bool, magnitude: u128) -> Result<Self, ConversionError> {
				if negative && magnitude != 0 {
					Err(ConversionError::ValueIsNegative)
				} else {
					(magnitude <= <$t>::MAX as u128)
						.then_some(magnitude as $t)
						.ok_or(ConversionError::ValueTooLarge)
				}
			}

			//		magnitude
			fn magnitude(self) -> (bool, u128) {
				(false, self as u128)
			}

			//		negate
			fn negate(self) -> Self {
				self.wrapping_neg()
			}
		}
	)*};
}

impl_primitive_signed!(i8, i16, i32, i64, i128, isize);
impl_primitive_unsigned!(u8, u16, u32, u64, u128, usize);
