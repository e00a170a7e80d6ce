//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ConversionError
/// Represents all possible conversion errors that can occur.
///
/// A malformed hexadecimal string is reported as either
/// [`EmptyValue`](ConversionError::EmptyValue) or
/// [`InvalidDigit`](ConversionError::InvalidDigit), depending on what is wrong
/// with it.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,

	/// The requested word index is outside the range `0..8`.
	#[error("Word index out of range: {0}")]
	IndexOutOfRange(usize),

	/// The incoming value contains a character that is not a hex digit.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The incoming byte sequence is not exactly 32 bytes long.
	#[error("Invalid length: expected 32 bytes, got {0}")]
	InvalidLength(usize),

	/// The value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
