use crate::error::LiteralError;
use crate::stack::Stack;

///base prefixes, anything else is decimal
fn base_of(prefix: char) -> Option<u32> {
	match prefix {
		'b' => Some(2),
		'o' => Some(8),
		'x' => Some(16),
		_ => None
	}
}

#[inline(always)]
///value of a single digit, 0-9 and a-f in either case
fn digit(c: char, base: u32) -> Result<f64, LiteralError> {
	let d = c.to_digit(16).ok_or(LiteralError::InvalidDigit(c))?;
	if d < base {Ok(d as f64)}
	else {Err(LiteralError::InvalidBase {base, digit: c})}
}

///weighted sum of the digits after the point: base^-1, base^-2, ...
fn fraction(src: &str, base: u32) -> Result<f64, LiteralError> {
	let b = base as f64;
	let mut mult = 1.0 / b;
	let mut total = 0.0;
	for c in src.chars() {
		total += digit(c, base)? * mult;
		mult /= b;
	}
	Ok(total)
}

///Parses a number literal like `42`, `3.5`, `x1F`, `o17`, `b101.1`.
///
///The integer loop multiplies by the base after every digit, so the fraction is scaled up
///to match and the whole sum is divided by the base once at the end.
pub fn parse_num(word: &str) -> Result<f64, LiteralError> {
	let first = word.chars().next().ok_or(LiteralError::EmptyWord)?;
	let (base, digits) = match base_of(first) {
		Some(b) => (b, &word[first.len_utf8()..]),
		None => (10, word)
	};
	let b = base as f64;

	let mut val = 0.0;
	for (i, c) in digits.char_indices() {
		if c == '.' {
			val += fraction(&digits[i+1..], base)? * b;
			break;
		}
		val += digit(c, base)?;
		val *= b;
	}
	Ok(val / b)
}

///parse and push onto the stack, nothing is pushed on failure
pub fn push_num(stk: &mut Stack, word: &str) -> Result<(), LiteralError> {
	stk.push(parse_num(word)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decimal() {
		assert_eq!(parse_num("0"), Ok(0.0));
		assert_eq!(parse_num("42"), Ok(42.0));
		assert_eq!(parse_num("3.5"), Ok(3.5));
		assert_eq!(parse_num("1."), Ok(1.0));
		assert_eq!(parse_num(".5"), Ok(0.5));
	}

	#[test]
	fn prefixed_bases() {
		assert_eq!(parse_num("x1F"), Ok(31.0));
		assert_eq!(parse_num("x1f"), Ok(31.0));
		assert_eq!(parse_num("o17"), Ok(15.0));
		assert_eq!(parse_num("b101"), Ok(5.0));
		assert_eq!(parse_num("xff"), Ok(255.0));
	}

	#[test]
	fn prefixed_fractions() {
		assert_eq!(parse_num("x1.8"), Ok(1.5));
		assert_eq!(parse_num("b10.01"), Ok(2.25));
		assert_eq!(parse_num("o0.4"), Ok(0.5));
	}

	#[test]
	fn bare_prefix_is_zero() {
		assert_eq!(parse_num("x"), Ok(0.0));
		assert_eq!(parse_num("b"), Ok(0.0));
	}

	#[test]
	fn rejects_bad_literals() {
		assert_eq!(parse_num(""), Err(LiteralError::EmptyWord));
		assert_eq!(parse_num("b2"), Err(LiteralError::InvalidBase {base: 2, digit: '2'}));
		assert_eq!(parse_num("o8"), Err(LiteralError::InvalidBase {base: 8, digit: '8'}));
		assert_eq!(parse_num("1e3"), Err(LiteralError::InvalidBase {base: 10, digit: 'e'}));
		assert_eq!(parse_num("1g"), Err(LiteralError::InvalidDigit('g')));
		assert_eq!(parse_num("-1"), Err(LiteralError::InvalidDigit('-')));
		assert_eq!(parse_num("1.2.3"), Err(LiteralError::InvalidDigit('.')));
		assert_eq!(parse_num("x1.g"), Err(LiteralError::InvalidDigit('g')));
	}

	#[test]
	fn push_only_on_success() {
		let mut s = Stack::new();
		assert!(push_num(&mut s, "7").is_ok());
		assert!(push_num(&mut s, "7z").is_err());
		assert_eq!(s.snapshot().collect::<Vec<_>>(), vec![7.0]);
	}
}
