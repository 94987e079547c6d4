//		Packages

use super::*;



//		Tests

//		uc
#[test]
fn uc__normal() {
	let value: Integral<u8> = uc(65);
	assert_eq!(value.get(), b'A');
}
#[test]
fn uc__truncates() {
	assert_eq!(uc(321).get(), 65);
	assert_eq!(uc(u64::MAX).get(), u8::MAX);
}

//		ui
#[test]
fn ui__normal() {
	let value: Integral<u32> = ui(1_000);
	assert_eq!(value.get(), 1_000);
	assert_eq!(value.hex(), "3e8");
}
#[test]
fn ui__truncates() {
	assert_eq!(ui(u64::MAX).get(),  u32::MAX);
	assert_eq!(ui(1_u64 << 32).get(), 0);
}

//		ul
#[test]
fn ul__normal() {
	let value: Integral<u64> = ul(42);
	assert_eq!(value.get(), 42);
}

//		ull
#[test]
fn ull__normal() {
	let value: Integral<u64> = ull(u64::MAX);
	assert_eq!(value.get(), u64::MAX);
}

//		us
#[test]
fn us__normal() {
	let value: Integral<u16> = us(65_535);
	assert_eq!(value.get(), u16::MAX);
}
#[test]
fn us__truncates() {
	assert_eq!(us(70_000).get(), 4_464);
}
