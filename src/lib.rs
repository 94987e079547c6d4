//! The Integral crate provides a wrapper around the built-in fixed-width
//! integer types, adding lenient parsing from text in several bases and
//! conversion to text in any base from 2 to 16.
//! 
//! ```
//! use integral::Integral;
//! 
//! let value = Integral::<i32>::from_text("0x64");
//! assert_eq!(value.get(),  100);
//! assert_eq!(value.bin(),  "1100100");
//! assert_eq!(value.oct(),  "144");
//! 
//! let partial = Integral::<i32>::from("7SEVEN");
//! assert_eq!(partial.get(), 7);
//! ```



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::eq_op,
	clippy::expect_used,
	clippy::float_cmp,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::neg_cmp_op_on_partial_ord,
	clippy::nonminimal_bool,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
pub mod integral;
pub mod literals;
mod primitive;



//		Packages

pub use errors::ConversionError;
pub use integral::{Integral, max, min};
pub use primitive::Primitive;
