//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ConversionError
/// Represents all possible conversion errors that can occur.
///
/// These are only produced by the strict parsing API, i.e.
/// [`Integral::parse()`](crate::Integral::parse()) and the [`FromStr`](core::str::FromStr)
/// implementation. The best-effort constructors never fail.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string, or a string that
	/// consists only of a sign and/or base prefix.
	#[error("Empty value")]
	EmptyValue,

	/// The incoming value contains a character that is not a digit in any
	/// supported base.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The incoming value contains a digit that is not valid for the base in
	/// use.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be represented by the destination
	/// type.
	#[error("Value too large")]
	ValueTooLarge,

	/// The incoming value is too small to be represented by the destination
	/// type.
	#[error("Value too small")]
	ValueTooSmall,
}
