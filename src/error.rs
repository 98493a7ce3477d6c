use thiserror::Error;

///everything that can go wrong while evaluating a single token
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
	///operation needed more values than the stack holds
	#[error("stack empty")]
	StackEmpty,
	///token fell through to number parsing and was not a number
	#[error(transparent)]
	InvalidLiteral(#[from] LiteralError),
}

///reasons a number literal is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LiteralError {
	#[error("empty word given")]
	EmptyWord,
	#[error("invalid digit {0}")]
	InvalidDigit(char),
	#[error("invalid base {base} for digit {digit}")]
	InvalidBase {
		base: u32,
		digit: char,
	},
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_match_reported_text() {
		assert_eq!(Error::StackEmpty.to_string(), "stack empty");
		assert_eq!(Error::from(LiteralError::EmptyWord).to_string(), "empty word given");
		assert_eq!(Error::from(LiteralError::InvalidDigit('g')).to_string(), "invalid digit g");
		assert_eq!(
			Error::from(LiteralError::InvalidBase {base: 8, digit: '9'}).to_string(),
			"invalid base 8 for digit 9"
		);
	}
}
