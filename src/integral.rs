//! The fixed-width integer wrapper type.

//	This lint check is unnecessary in this module because the arithmetic
//	operations are the point of the type. They deliberately emulate the Rust
//	standard library behaviour of the wrapped primitive, including panics on
//	overflow in debug builds and on division by zero.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]



//		Modules

#[cfg(test)]
#[path = "tests/integral.rs"]
mod tests;



//		Packages

use crate::{
	errors::ConversionError,
	primitive::Primitive,
};
use core::{
	cmp::Ordering,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Deref, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	str::FromStr,
};
use num_traits::AsPrimitive;
use std::io::{BufRead, ErrorKind as IoErrorKind, Result as IoResult, Write};



//		Structs

//		Integral
/// A wrapper around one of the built-in fixed-width integer types.
///
/// The wrapper holds exactly one value of type `T`, and is a plain value type:
/// it is [`Copy`], holds no other state, and can never be in an invalid
/// condition. On top of the usual arithmetic and comparison it adds lenient
/// parsing from text in several bases, conversion to text in any base from 2
/// to 16, and a few small conveniences such as [`odd()`](Integral::odd()) and
/// [`min_bound()`](Integral::min_bound()).
///
/// # Construction
///
/// An [`Integral`] can be created from:
///
///   - Nothing, giving zero, via [`Default`] or [`zero()`](Integral::zero()).
///   - A value of `T`, via [`new()`](Integral::new()) or [`From`].
///   - Any other primitive numeric type, via
///     [`from_numeric()`](Integral::from_numeric()), which truncates in the
///     same way as an `as` cast. Floating-point values are truncated toward
///     zero, saturating at the bounds of `T`, and `NaN` becomes zero.
///   - Text, via [`from_text()`](Integral::from_text()) or `From<&str>`,
///     which never fails. See below.
///   - Text, via [`parse()`](Integral::parse()) or [`FromStr`], which is
///     strict and returns a [`ConversionError`] for anything malformed.
///
/// # Lenient parsing
///
/// The base is chosen from the start of the text:
///
///   1. `0b` or `0B` selects binary. Every remaining character must be `0` or
///      `1`, otherwise the result is zero. Only the first
///      [`DIGITS`](Primitive::DIGITS) characters are used.
///   2. `0x` selects hexadecimal.
///   3. A leading `0` otherwise selects octal.
///   4. Anything else is decimal, with leading whitespace skipped and an
///      optional `+` or `-` sign.
///
/// Apart from binary, digits are consumed until the first character that is
/// not a digit in the chosen base, and whatever was read up to that point is
/// the result; `"7SEVEN"` gives `7`, and `"SEVEN"` gives `0`. Numerals too
/// large for `T` saturate at the bounds of `T`, and negative numerals for an
/// unsigned `T` wrap around.
///
/// # Arithmetic
///
/// Arithmetic follows the wrapped primitive exactly: in debug builds overflow
/// panics, in release builds it wraps, and division or remainder by zero
/// always panics. Use [`checked_div()`](Integral::checked_div()) and
/// [`checked_rem()`](Integral::checked_rem()) where the divisor is not known to
/// be non-zero. Negation of an unsigned value is modular.
///
/// # Comparison
///
/// Equality, `<`, and [`Ord`] are plain numeric comparisons. The remaining
/// operators are derived from them, and two of them do not mean what they
/// look like they mean:
///
///   - `a <= b` is `a < b || a == b`, which is the usual meaning.
///   - `a > b` is `!(a < b)`, so it is also `true` when `a == b`.
///   - `a >= b` is `!(a <= b)`, so it is `false` when `a == b`.
///
/// Code that needs the conventional meaning should use [`Ord::cmp()`], which
/// is also what sorting and the standard collections use.
///
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Integral<T: Primitive>(T);

//󰭅		Integral
impl<T: Primitive> Integral<T> {
	//		Constructors

	//		new
	/// Creates a new [`Integral`] holding the given value.
	///
	/// # Parameters
	///
	/// * `value` - The value to wrap.
	///
	#[must_use]
	pub const fn new(value: T) -> Self {
		Self(value)
	}

	//		zero
	/// Creates a new [`Integral`] holding zero.
	#[must_use]
	pub fn zero() -> Self {
		Self(T::zero())
	}

	//		from_numeric
	/// Creates a new [`Integral`] from any primitive numeric type.
	///
	/// The conversion is the same as an `as` cast: integers are truncated to
	/// the low bits of `T`, and floating-point values are truncated toward zero
	/// and saturate at the bounds of `T`, with `NaN` giving zero.
	///
	/// # Parameters
	///
	/// * `value` - The value to convert.
	///
	#[must_use]
	pub fn from_numeric<N: AsPrimitive<T>>(value: N) -> Self {
		Self(value.as_())
	}

	//		from_text
	/// Creates a new [`Integral`] by leniently parsing text.
	///
	/// This never fails. Text that cannot be parsed at all gives zero, and
	/// text that starts with a valid numeral gives the value of that numeral.
	/// See the [type-level documentation](Integral#lenient-parsing) for the
	/// exact rules.
	///
	/// # Parameters
	///
	/// * `text` - The text to parse.
	///
	#[must_use]
	pub fn from_text(text: &str) -> Self {
		if let Some(rest) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
			return Self(scan_binary(rest));
		}
		if let Some(rest) = text.strip_prefix("0x") {
			return Self(scan_prefix(rest, 16, false));
		}
		if text.starts_with('0') {
			return Self(scan_prefix(text, 8, false));
		}
		Self(scan_prefix(text, 10, true))
	}

	//		parse
	/// Creates a new [`Integral`] by strictly parsing text.
	///
	/// Surrounding whitespace is ignored. A single `+` or `-` sign is allowed,
	/// followed by an optional `0x`, `0o`, or `0b` prefix (in either case), and
	/// then digits in the selected base. Underscores between digits are allowed
	/// and ignored.
	///
	/// # Parameters
	///
	/// * `text` - The text to parse.
	///
	/// # Errors
	///
	/// If the text is empty, contains an invalid digit, or describes a value
	/// outside the range of `T`, an error will be returned.
	///
	pub fn parse(text: &str) -> Result<Self, ConversionError> {
		text.parse()
	}

	//		Public methods

	//		assign
	/// Replaces the value with one converted from any primitive numeric type.
	///
	/// The conversion is the same as for
	/// [`from_numeric()`](Integral::from_numeric()).
	///
	/// # Parameters
	///
	/// * `value` - The value to convert.
	///
	pub fn assign<N: AsPrimitive<T>>(&mut self, value: N) -> &mut Self {
		self.0 = value.as_();
		self
	}

	//		bin
	/// Returns the value in base 2. Shorthand for
	/// [`to_radix(2)`](Integral::to_radix()).
	#[must_use]
	pub fn bin(&self) -> String {
		self.to_radix(2)
	}

	//		checked_div
	/// Checked division. Returns [`None`] if `rhs` is zero or the division
	/// overflows.
	#[must_use]
	pub fn checked_div(self, rhs: Self) -> Option<Self> {
		self.0.checked_div(&rhs.0).map(Self)
	}

	//		checked_rem
	/// Checked remainder. Returns [`None`] if `rhs` is zero or the operation
	/// overflows.
	#[must_use]
	pub fn checked_rem(self, rhs: Self) -> Option<Self> {
		self.0.checked_rem(&rhs.0).map(Self)
	}

	//		dec
	/// Returns the value in base 10. Shorthand for
	/// [`to_radix(10)`](Integral::to_radix()).
	#[must_use]
	pub fn dec(&self) -> String {
		self.to_radix(10)
	}

	//		even
	/// Whether the value is even.
	#[must_use]
	pub fn even(&self) -> bool {
		!self.odd()
	}

	//		get
	/// Returns the wrapped value.
	#[must_use]
	pub const fn get(&self) -> T {
		self.0
	}

	//		hex
	/// Returns the value in base 16. Shorthand for
	/// [`to_radix(16)`](Integral::to_radix()).
	#[must_use]
	pub fn hex(&self) -> String {
		self.to_radix(16)
	}

	//		is_zero
	/// Whether the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	//		max_bound
	/// The largest value representable by `T`.
	#[must_use]
	pub fn max_bound() -> T {
		T::max_value()
	}

	//		min_bound
	/// The smallest value representable by `T`.
	#[must_use]
	pub fn min_bound() -> T {
		T::min_value()
	}

	//		oct
	/// Returns the value in base 8. Shorthand for
	/// [`to_radix(8)`](Integral::to_radix()).
	#[must_use]
	pub fn oct(&self) -> String {
		self.to_radix(8)
	}

	//		odd
	/// Whether the value is odd, i.e. whether the lowest bit is set.
	#[must_use]
	pub fn odd(&self) -> bool {
		(self.0 & T::one()) == T::one()
	}

	//		post_decrement
	/// Decreases the value by one, and returns a copy of the value as it was
	/// before the change.
	pub fn post_decrement(&mut self) -> Self {
		let previous = *self;
		self.0 -= T::one();
		previous
	}

	//		post_increment
	/// Increases the value by one, and returns a copy of the value as it was
	/// before the change.
	pub fn post_increment(&mut self) -> Self {
		let previous = *self;
		self.0 += T::one();
		previous
	}

	//		pre_decrement
	/// Decreases the value by one, and returns the changed object itself.
	pub fn pre_decrement(&mut self) -> &mut Self {
		self.0 -= T::one();
		self
	}

	//		pre_increment
	/// Increases the value by one, and returns the changed object itself.
	pub fn pre_increment(&mut self) -> &mut Self {
		self.0 += T::one();
		self
	}

	//		read_from
	/// Replaces the value with one read from a text stream.
	///
	/// Leading whitespace is skipped, and then a single whitespace-delimited
	/// token is read and parsed leniently, as by
	/// [`from_text()`](Integral::from_text()). The whitespace that ends the
	/// token is left in the stream. If the stream is exhausted before any
	/// token is found, the value becomes zero.
	///
	/// # Parameters
	///
	/// * `reader` - The stream to read from.
	///
	/// # Errors
	///
	/// Any error from the underlying stream will be returned, in which case
	/// the value is left unchanged.
	///
	pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> IoResult<&mut Self> {
		let token = read_token(reader)?;
		*self     = Self::from_text(&String::from_utf8_lossy(&token));
		Ok(self)
	}

	//		to_numeric
	/// Converts the value to any primitive numeric type, in the same way as an
	/// `as` cast.
	#[must_use]
	pub fn to_numeric<N>(&self) -> N
	where
		N: Copy + 'static,
		T: AsPrimitive<N>,
	{
		self.0.as_()
	}

	//		to_radix
	/// Returns the value as a numeral in the given base.
	///
	/// The output never has a prefix or leading zeros. Special cases:
	///
	///   - A `radix` of zero, one, or above 16 gives base 10.
	///   - Bases 8 and 16 use the two's complement bits of negative values,
	///     exactly as the [`Octal`] and [`LowerHex`] formatters do.
	///   - All other bases write negative values with a leading `-`, and give
	///     an empty string for zero.
	///   - Each digit is written as its decimal value, so digits above 9 in
	///     bases 11 to 15 take two characters and the output is not a
	///     conventional numeral; `11` in base 12 is `"11"`, not `"b"`.
	///
	/// # Parameters
	///
	/// * `radix` - The base to convert to.
	///
	#[must_use]
	pub fn to_radix(&self, radix: u32) -> String {
		match radix {
			0 | 1    => self.0.to_string(),
			16       => format!("{:x}", self.0),
			8        => format!("{:o}", self.0),
			2..=15   => {
				let (negative, mut remaining) = self.0.magnitude();
				let radix_wide                = u128::from(radix);
				let mut stack                 = Vec::new();
				while remaining != 0 {
					#[expect(clippy::cast_possible_truncation, reason = "Remainder is below 16")]
					stack.push((remaining % radix_wide) as u32);
					remaining /= radix_wide;
				}
				let mut result = String::with_capacity(stack.len() * 2 + 1);
				if negative {
					result.push('-');
				}
				while let Some(digit) = stack.pop() {
					result.push_str(&digit.to_string());
				}
				result
			}
			_        => self.0.to_string(),
		}
	}

	//		to_text
	/// Returns the value in base 10.
	#[must_use]
	pub fn to_text(&self) -> String {
		self.0.to_string()
	}

	//		write_to
	/// Writes the value in base 10 to a stream.
	///
	/// # Parameters
	///
	/// * `writer` - The stream to write to.
	///
	/// # Errors
	///
	/// Any error from the underlying stream will be returned.
	///
	pub fn write_to<W: Write>(&self, writer: &mut W) -> IoResult<()> {
		write!(writer, "{}", self.0)
	}
}

//󰭅		Add
impl<T: Primitive> Add for Integral<T> {
	type Output = Self;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		Self(self.0 + rhs.0)
	}
}

//󰭅		AddAssign
impl<T: Primitive> AddAssign for Integral<T> {
	//		add_assign
	fn add_assign(&mut self, rhs: Self) {
		self.0 += rhs.0;
	}
}

//󰭅		Binary
impl<T: Primitive> Binary for Integral<T> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Binary::fmt(&self.0, f)
	}
}

//󰭅		Debug
impl<T: Primitive> Debug for Integral<T> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "Integral<{}>({})", T::TYPE_NAME, self.0)
	}
}

//󰭅		Deref
impl<T: Primitive> Deref for Integral<T> {
	type Target = T;

	//		deref
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

//󰭅		Display
impl<T: Primitive> Display for Integral<T> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

//󰭅		Div
impl<T: Primitive> Div for Integral<T> {
	type Output = Self;

	//		div
	fn div(self, rhs: Self) -> Self::Output {
		Self(self.0 / rhs.0)
	}
}

//󰭅		DivAssign
impl<T: Primitive> DivAssign for Integral<T> {
	//		div_assign
	fn div_assign(&mut self, rhs: Self) {
		self.0 /= rhs.0;
	}
}

//󰭅		From: T -> Integral
impl<T: Primitive> From<T> for Integral<T> {
	//		from
	fn from(value: T) -> Self {
		Self(value)
	}
}

//󰭅		From: &str -> Integral
impl<T: Primitive> From<&str> for Integral<T> {
	//		from
	fn from(text: &str) -> Self {
		Self::from_text(text)
	}
}

//󰭅		From: String -> Integral
impl<T: Primitive> From<String> for Integral<T> {
	//		from
	fn from(text: String) -> Self {
		Self::from_text(&text)
	}
}

//󰭅		FromStr
impl<T: Primitive> FromStr for Integral<T> {
	type Err = ConversionError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();

		if trimmed.is_empty() {
			return Err(ConversionError::EmptyValue);
		}

		//	Handle a single sign
		let (without_sign, is_negative) = trimmed.strip_prefix('-').map_or_else(
			|| (trimmed.strip_prefix('+').unwrap_or(trimmed), false),
			|rest| (rest, true),
		);

		//	Handle different bases
		#[expect(clippy::option_if_let_else, reason = "Clearer to read as if-let-else")]
		let (without_base, radix) =
			if        let Some(rest) = without_sign.strip_prefix("0x").or_else(|| without_sign.strip_prefix("0X")) {
				(rest, 16_u8)
			} else if let Some(rest) = without_sign.strip_prefix("0b").or_else(|| without_sign.strip_prefix("0B")) {
				(rest, 2)
			} else if let Some(rest) = without_sign.strip_prefix("0o").or_else(|| without_sign.strip_prefix("0O")) {
				(rest, 8)
			} else {
				(without_sign, 10)
			}
		;

		//	Parse the absolute value
		let mut magnitude = 0_u128;
		let mut digits    = 0_usize;
		let out_of_range  = if !is_negative {
			ConversionError::ValueTooLarge
		} else if T::SIGNED {
			ConversionError::ValueTooSmall
		} else {
			ConversionError::ValueIsNegative
		};

		for c in without_base.chars() {
			if c == '_' {
				continue;
			}
			let digit = c.to_digit(16).ok_or(ConversionError::InvalidDigit(c))?;
			if digit >= u32::from(radix) {
				return Err(ConversionError::InvalidRadix(c, radix));
			}
			magnitude = magnitude
				.checked_mul(u128::from(radix))
				.and_then(|v| v.checked_add(u128::from(digit)))
				.ok_or_else(|| out_of_range.clone())?
			;
			digits += 1;
		}

		if digits == 0 {
			return Err(ConversionError::EmptyValue);
		}

		T::from_magnitude(is_negative, magnitude).map(Self)
	}
}

//󰭅		LowerHex
impl<T: Primitive> LowerHex for Integral<T> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		LowerHex::fmt(&self.0, f)
	}
}

//󰭅		Mul
impl<T: Primitive> Mul for Integral<T> {
	type Output = Self;

	//		mul
	fn mul(self, rhs: Self) -> Self::Output {
		Self(self.0 * rhs.0)
	}
}

//󰭅		MulAssign
impl<T: Primitive> MulAssign for Integral<T> {
	//		mul_assign
	fn mul_assign(&mut self, rhs: Self) {
		self.0 *= rhs.0;
	}
}

//󰭅		Neg
impl<T: Primitive> Neg for Integral<T> {
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		Self(self.0.negate())
	}
}

//󰭅		Octal
impl<T: Primitive> Octal for Integral<T> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Octal::fmt(&self.0, f)
	}
}

//󰭅		Ord
impl<T: Primitive> Ord for Integral<T> {
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.cmp(&other.0)
	}
}

//󰭅		PartialOrd
impl<T: Primitive> PartialOrd for Integral<T> {
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}

	//		lt
	fn lt(&self, other: &Self) -> bool {
		self.0 < other.0
	}

	//		le
	fn le(&self, other: &Self) -> bool {
		self.lt(other) || self == other
	}

	//		gt
	//	True for equal values as well, see the type documentation
	fn gt(&self, other: &Self) -> bool {
		!self.lt(other)
	}

	//		ge
	//	False for equal values, see the type documentation
	fn ge(&self, other: &Self) -> bool {
		!self.le(other)
	}
}

//󰭅		Product
impl<T: Primitive> Product for Integral<T> {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self(T::one()), |acc, x| acc * x)
	}
}

//󰭅		Product<&>
impl<'a, T: Primitive> Product<&'a Self> for Integral<T> {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self(T::one()), |acc, &x| acc * x)
	}
}

//󰭅		Rem
impl<T: Primitive> Rem for Integral<T> {
	type Output = Self;

	//		rem
	fn rem(self, rhs: Self) -> Self::Output {
		Self(self.0 % rhs.0)
	}
}

//󰭅		RemAssign
impl<T: Primitive> RemAssign for Integral<T> {
	//		rem_assign
	fn rem_assign(&mut self, rhs: Self) {
		self.0 %= rhs.0;
	}
}

//󰭅		Sub
impl<T: Primitive> Sub for Integral<T> {
	type Output = Self;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		Self(self.0 - rhs.0)
	}
}

//󰭅		SubAssign
impl<T: Primitive> SubAssign for Integral<T> {
	//		sub_assign
	fn sub_assign(&mut self, rhs: Self) {
		self.0 -= rhs.0;
	}
}

//󰭅		Sum
impl<T: Primitive> Sum for Integral<T> {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>
impl<'a, T: Primitive> Sum<&'a Self> for Integral<T> {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, &x| acc + x)
	}
}

//󰭅		UpperHex
impl<T: Primitive> UpperHex for Integral<T> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		UpperHex::fmt(&self.0, f)
	}
}



//		Functions

//		max
/// Returns whichever of the two values is larger, without copying.
///
/// The choice is made with `lhs > rhs`, which is also true when the two are
/// equal (see the [`Integral`] comparison notes), so ties go to `lhs`.
///
/// # Parameters
///
/// * `lhs` - The first value.
/// * `rhs` - The second value.
///
#[must_use]
pub fn max<'a, T: Primitive>(lhs: &'a Integral<T>, rhs: &'a Integral<T>) -> &'a Integral<T> {
	if lhs > rhs { lhs } else { rhs }
}

//		min
/// Returns whichever of the two values is smaller, without copying.
///
/// The choice is made with `lhs < rhs`, so ties go to `rhs`.
///
/// # Parameters
///
/// * `lhs` - The first value.
/// * `rhs` - The second value.
///
#[must_use]
pub fn min<'a, T: Primitive>(lhs: &'a Integral<T>, rhs: &'a Integral<T>) -> &'a Integral<T> {
	if lhs < rhs { lhs } else { rhs }
}

//		read_token
/// Reads one whitespace-delimited token from a stream.
///
/// Leading whitespace is consumed and discarded. Reading stops at, but does
/// not consume, the first whitespace byte after the token, or at the end of
/// the stream. An empty token means the stream was exhausted.
///
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<Vec<u8>> {
	let mut token = Vec::new();
	loop {
		let (consumed, finished) = {
			let buffer = match reader.fill_buf() {
				Ok(buffer)                                         => buffer,
				Err(err) if err.kind() == IoErrorKind::Interrupted => continue,
				Err(err)                                           => return Err(err),
			};
			if buffer.is_empty() {
				break;
			}
			let mut consumed = 0;
			let mut finished = false;
			for &byte in buffer {
				if is_space(byte) {
					if !token.is_empty() {
						finished = true;
						break;
					}
				} else {
					token.push(byte);
				}
				consumed += 1;
			}
			(consumed, finished)
		};
		reader.consume(consumed);
		if finished {
			break;
		}
	}
	Ok(token)
}

//		is_space
/// Whether a byte separates tokens: ASCII whitespace, including vertical tab.
const fn is_space(byte: u8) -> bool {
	byte.is_ascii_whitespace() || byte == 0x0B
}

//		scan_binary
/// Parses a binary numeral, all or nothing.
///
/// Any character other than `0` or `1` gives zero. When there are more
/// characters than `T` has value bits, only the leading ones are used.
///
fn scan_binary<T: Primitive>(digits: &str) -> T {
	if !digits.bytes().all(|b| matches!(b, b'0' | b'1')) {
		return T::zero();
	}
	let magnitude = digits.bytes()
		.take(T::DIGITS as usize)
		.fold(0_u128, |acc, b| (acc << 1) | u128::from(b - b'0'))
	;
	T::from_magnitude(false, magnitude).unwrap_or_else(|_| T::max_value())
}

//		scan_prefix
/// Parses the leading numeral in the given base, ignoring whatever follows
/// it.
///
/// When `signed` is set, leading whitespace is skipped and a single `+` or
/// `-` is accepted first. Zero digits gives zero, values too large or small
/// for `T` saturate, and a negative value for an unsigned `T` wraps.
///
fn scan_prefix<T: Primitive>(text: &str, radix: u32, signed: bool) -> T {
	let mut rest     = text;
	let mut negative = false;
	if signed {
		rest = rest.trim_start();
		if let Some(unsigned) = rest.strip_prefix('-') {
			negative = true;
			rest     = unsigned;
		} else if let Some(unsigned) = rest.strip_prefix('+') {
			rest     = unsigned;
		}
	}

	let mut magnitude = Some(0_u128);
	let mut digits    = 0_usize;
	for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
		magnitude = magnitude
			.and_then(|v| v.checked_mul(u128::from(radix)))
			.and_then(|v| v.checked_add(u128::from(digit)))
		;
		digits += 1;
	}
	if digits == 0 {
		return T::zero();
	}

	let result = magnitude.map_or(
		Err(if negative && T::SIGNED { ConversionError::ValueTooSmall } else { ConversionError::ValueTooLarge }),
		|v| T::from_magnitude(negative, v),
	);
	match result {
		Ok(value)                              => value,
		Err(ConversionError::ValueIsNegative)  => magnitude
			.and_then(|v| T::from_magnitude(false, v).ok())
			.map_or_else(T::max_value, Primitive::negate),
		Err(ConversionError::ValueTooSmall)    => T::min_value(),
		Err(_)                                 => T::max_value(),
	}
}



//		Macros

//		impl_from_integral!
macro_rules! impl_from_integral {
	($($t:ty),* $(,)?) => {$(
		//󰭅		From: Integral -> primitive
		impl From<Integral<$t>> for $t {
			//		from
			fn from(value: Integral<$t>) -> Self {
				value.0
			}
		}
	)*};
}

impl_from_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
