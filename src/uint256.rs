//! Fixed-width 256-bit unsigned integer type.

//	Every index used in this module is either a literal below the word count or
//	has been reduced modulo the word count, so the fixed-size arrays can be
//	indexed directly.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are always within the fixed word count"
)]

//	Carry propagation and rotation rely on wrapping shifts and sums that are
//	bounded by construction.
#![allow(clippy::arithmetic_side_effects, reason = "Wraparound is the defined behaviour")]



//		Modules

#[cfg(test)]
#[path = "tests/uint256.rs"]
mod tests;



//		Packages

use crate::errors::ConversionError;
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Debug, Display, Formatter, LowerHex, UpperHex, self},
	iter::Sum,
	ops::{Add, AddAssign, Neg, Not, Sub, SubAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, SeqAccess, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Constants

/// Number of 32-bit words held by a [`UInt256`].
const WORDS: usize = 8;

/// Number of bits held by one word.
const WORD_BITS: u32 = 32;

/// Number of bytes in the byte-array representation.
const BYTES: usize = 32;

/// Maximum number of significant hex digits.
const HEX_DIGITS: usize = 64;

/// Number of hex digits encoded by one word.
const HEX_DIGITS_PER_WORD: usize = 8;



//		Structs

//		UInt256
/// A 256-bit unsigned integer.
///
/// The value is held as eight 32-bit words. Word `0` is the least significant
/// and word `7` the most significant, so the represented number is
/// `Σ words[i] × 2^(32 × i)`.
///
/// # Arithmetic
///
/// Addition, subtraction, and negation wrap modulo 2^256. They never panic,
/// in debug or release builds, because the wraparound is the defined result
/// rather than an error. The [`overflowing_add()`](UInt256::overflowing_add())
/// method reports whether a carry was discarded, for callers that care.
///
/// Multiplication and division are not provided.
///
/// # Rotation
///
/// [`rotate_left()`](UInt256::rotate_left()) and
/// [`rotate_right()`](UInt256::rotate_right()) treat the value as a single
/// circular string of 256 bits, rather than rotating each word on its own.
///
/// # Text representation
///
/// The only text form is hexadecimal. [`to_hex()`](UInt256::to_hex()) gives
/// the minimal lowercase representation, which
/// [`from_hex()`](UInt256::from_hex()) reads back exactly.
///
/// ```
/// use uint256::UInt256;
///
/// let value = UInt256::from_hex("1ffffffff").unwrap();
/// assert_eq!(value.get_word(0).unwrap(), 0xFFFF_FFFF);
/// assert_eq!(value.get_word(1).unwrap(), 1);
/// assert_eq!(value.to_hex(), "1ffffffff");
/// ```
///
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct UInt256([u32; WORDS]);

//󰭅		UInt256
impl UInt256 {
	//		Public constants
	/// Number of bits in the value.
	pub const BITS:  u32   = 256;

	/// Number of 32-bit words in the value.
	pub const WORDS: usize = WORDS;

	/// The value `0`.
	pub const ZERO:  Self  = Self([0; WORDS]);

	/// The value `1`.
	pub const ONE:   Self  = Self::from_word(1);

	/// The largest value, 2^256 − 1, with every word set to `0xFFFFFFFF`.
	pub const MAX:   Self  = Self([u32::MAX; WORDS]);

	//		Constructors

	//		from_word
	/// Creates a [`UInt256`] from a single word.
	///
	/// The word becomes the least-significant word, and all others are zero.
	///
	/// # Parameters
	///
	/// * `word` - The value of the least-significant word.
	///
	#[must_use]
	pub const fn from_word(word: u32) -> Self {
		let mut words = [0; WORDS];
		words[0]      = word;
		Self(words)
	}

	//		from_words
	/// Creates a [`UInt256`] from eight words.
	///
	/// # Parameters
	///
	/// * `words` - The words, least-significant first.
	///
	#[must_use]
	pub const fn from_words(words: [u32; WORDS]) -> Self {
		Self(words)
	}

	//		from_hex
	/// Parses a string of hexadecimal digits.
	///
	/// The digits may be upper or lower case, and must not carry a prefix such
	/// as `0x` (use [`str::parse()`] for that). If there are more than 64
	/// digits then only the trailing 64 are used, which keeps the low 256 bits
	/// of the longer number.
	///
	/// # Parameters
	///
	/// * `hex` - The hexadecimal digits to parse.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::EmptyValue`] if the string is empty, and
	/// [`ConversionError::InvalidDigit`] if any character in it, including in a
	/// discarded leading part, is not a hex digit.
	///
	pub fn from_hex(hex: &str) -> Result<Self, ConversionError> {
		if hex.is_empty() {
			return Err(ConversionError::EmptyValue);
		}

		if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
			return Err(ConversionError::InvalidDigit(c));
		}

		//	Every character is now known to be ASCII, so bytes are digits
		let digits = hex.as_bytes();
		let start  = digits.len().saturating_sub(HEX_DIGITS);

		//	Groups are taken from the least-significant end, so the leftover
		//	partial group (if any) lands in the highest word used
		let mut words = [0_u32; WORDS];
		for (word, group) in words.iter_mut().zip(digits[start..].rchunks(HEX_DIGITS_PER_WORD)) {
			*word = group.iter().try_fold(0_u32, |acc, &byte| {
				let c = char::from(byte);
				c.to_digit(16)
					.map(|nibble| (acc << 4_u32) | nibble)
					.ok_or(ConversionError::InvalidDigit(c))
			})?;
		}

		Ok(Self(words))
	}

	//		from_be_bytes
	/// Creates a [`UInt256`] from 32 big-endian bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The bytes, most-significant first.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::InvalidLength`] if the slice is not exactly 32
	/// bytes long.
	///
	pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		if bytes.len() != BYTES {
			return Err(ConversionError::InvalidLength(bytes.len()));
		}

		let mut words = [0_u32; WORDS];
		for (word, chunk) in words.iter_mut().zip(bytes.rchunks_exact(4)) {
			*word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
		}

		Ok(Self(words))
	}

	//		from_json
	/// Deserialises a JSON string into a [`UInt256`].
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise. This may be a quoted hex
	///            string or an unsigned integer literal.
	///
	/// # Errors
	///
	/// If the JSON is invalid, or the value inside it is not a valid
	/// [`UInt256`], then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		from_le_bytes
	/// Creates a [`UInt256`] from 32 little-endian bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The bytes, least-significant first.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::InvalidLength`] if the slice is not exactly 32
	/// bytes long.
	///
	pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		if bytes.len() != BYTES {
			return Err(ConversionError::InvalidLength(bytes.len()));
		}

		let mut words = [0_u32; WORDS];
		for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
			*word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
		}

		Ok(Self(words))
	}

	//		Public methods

	//		as_words
	/// Represents the internal value as a reference to its words.
	#[must_use]
	pub const fn as_words(&self) -> &[u32; WORDS] {
		&self.0
	}

	//		get_word
	/// Gets a single word.
	///
	/// # Parameters
	///
	/// * `index` - The position of the word, where `0` is the
	///             least-significant and `7` the most-significant.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::IndexOutOfRange`] if `index` is not below 8.
	///
	pub fn get_word(&self, index: usize) -> Result<u32, ConversionError> {
		self.0.get(index).copied().ok_or(ConversionError::IndexOutOfRange(index))
	}

	//		into_words
	/// Converts the value into its words, least-significant first.
	#[must_use]
	pub const fn into_words(self) -> [u32; WORDS] {
		self.0
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|&word| word == 0)
	}

	//		overflowing_add
	/// Overflowing addition.
	///
	/// Computes `self + rhs` with the carry rippled from word `0` upwards,
	/// returning a tuple of the wrapped result and a boolean indicating whether
	/// a carry left the most-significant word.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
		let mut result = [0_u32; WORDS];
		let mut carry  = false;

		//	A word can overflow on the operand sum or when the carry is added
		for i in 0..WORDS {
			let (sum1, c1) = self.0[i].overflowing_add(rhs.0[i]);
			let (sum2, c2) = sum1.overflowing_add(u32::from(carry));
			result[i]      = sum2;
			carry          = c1 || c2;
		}

		(Self(result), carry)
	}

	//		rotate_left
	/// Rotates the bits of the value to the left.
	///
	/// The `n` most-significant bits are moved to the `n` least-significant
	/// bits, and the rest are moved to the left. The rotation amount is taken
	/// modulo 256.
	///
	/// # Parameters
	///
	/// * `n` - The number of bits to rotate by.
	///
	#[must_use]
	pub fn rotate_left(self, n: u32) -> Self {
		let shift = n % Self::BITS;
		if shift == 0 {
			return self;
		}

		#[expect(clippy::integer_division, reason = "Whole words are wanted here")]
		let block = (shift / WORD_BITS) as usize;
		let bits  = shift % WORD_BITS;

		//	Move whole words towards the most-significant end
		let mut moved = [0_u32; WORDS];
		for (i, &word) in self.0.iter().enumerate() {
			moved[(i + block) % WORDS] = word;
		}

		//	Shifting a 32-bit word by 32 is not valid, so word-aligned rotations
		//	stop here
		if bits == 0 {
			return Self(moved);
		}

		//	The top bits of each word feed the bottom of the next word up, with
		//	the top word wrapping round to word 0
		let mut result = [0_u32; WORDS];
		for i in 0..WORDS {
			let carried = moved[(i + WORDS - 1) % WORDS] >> (WORD_BITS - bits);
			result[i]   = (moved[i] << bits) | carried;
		}

		Self(result)
	}

	//		rotate_right
	/// Rotates the bits of the value to the right.
	///
	/// The `n` least-significant bits are moved to the `n` most-significant
	/// bits, and the rest are moved to the right. The rotation amount is taken
	/// modulo 256.
	///
	/// # Parameters
	///
	/// * `n` - The number of bits to rotate by.
	///
	#[must_use]
	pub fn rotate_right(self, n: u32) -> Self {
		let shift = n % Self::BITS;
		if shift == 0 {
			return self;
		}

		#[expect(clippy::integer_division, reason = "Whole words are wanted here")]
		let block = (shift / WORD_BITS) as usize;
		let bits  = shift % WORD_BITS;

		//	Move whole words towards the least-significant end
		let mut moved = [0_u32; WORDS];
		for (i, &word) in self.0.iter().enumerate() {
			moved[(i + WORDS - block) % WORDS] = word;
		}

		if bits == 0 {
			return Self(moved);
		}

		//	The bottom bits of each word feed the top of the next word down, with
		//	word 0 wrapping round to the top word
		let mut result = [0_u32; WORDS];
		for i in 0..WORDS {
			let carried = moved[(i + 1) % WORDS] << (WORD_BITS - bits);
			result[i]   = (moved[i] >> bits) | carried;
		}

		Self(result)
	}

	//		to_be_bytes
	/// Returns the value as 32 bytes, most-significant first.
	#[must_use]
	pub fn to_be_bytes(&self) -> [u8; BYTES] {
		let mut bytes = [0_u8; BYTES];
		for (chunk, word) in bytes.rchunks_exact_mut(4).zip(self.0) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
		bytes
	}

	//		to_hex
	/// Formats the value as minimal-length lowercase hexadecimal.
	///
	/// Zero is rendered as `"0"`. Otherwise the most-significant non-zero word
	/// is written without leading zeros and every word below it as exactly
	/// eight digits. There is no `0x` prefix.
	///
	#[must_use]
	pub fn to_hex(&self) -> String {
		format!("{self:x}")
	}

	//		to_json
	/// Serialises the value to a JSON string containing its hex form.
	///
	/// # Errors
	///
	/// If serialisation fails, an error will be returned.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_le_bytes
	/// Returns the value as 32 bytes, least-significant first.
	#[must_use]
	pub fn to_le_bytes(&self) -> [u8; BYTES] {
		let mut bytes = [0_u8; BYTES];
		for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.0) {
			chunk.copy_from_slice(&word.to_le_bytes());
		}
		bytes
	}

	//		wrapping_add
	/// Wrapping addition.
	///
	/// Computes `self + rhs` modulo 2^256. Any carry out of the
	/// most-significant word is discarded.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn wrapping_add(self, rhs: Self) -> Self {
		self.overflowing_add(rhs).0
	}

	//		wrapping_neg
	/// Wrapping (two's-complement) negation.
	///
	/// Computes `-self` modulo 2^256 by inverting every bit and adding one.
	/// Negating zero gives zero, and negating one gives [`UInt256::MAX`].
	///
	#[must_use]
	pub fn wrapping_neg(self) -> Self {
		let mut result = (!self).0;
		let mut carry  = 1_u64;

		for word in &mut result {
			if carry == 0 {
				break;
			}
			let sum = u64::from(*word) + carry;
			#[expect(clippy::cast_possible_truncation, reason = "Only the low 32 bits are wanted")]
			let low = sum as u32;
			*word   = low;
			carry   = sum >> WORD_BITS;
		}

		Self(result)
	}

	//		wrapping_sub
	/// Wrapping subtraction.
	///
	/// Computes `self - rhs` modulo 2^256, as `self + (-rhs)`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn wrapping_sub(self, rhs: Self) -> Self {
		self.wrapping_add(rhs.wrapping_neg())
	}

	//		Private methods

	//		low_words
	/// Reads the lowest `count` words (at most four) as a [`u128`], if all
	/// higher words are zero.
	fn low_words(self, count: usize) -> Option<u128> {
		self.0[count..].iter().all(|&word| word == 0).then(|| {
			self.0[..count].iter().rev().fold(0_u128, |acc, &word| (acc << WORD_BITS) | u128::from(word))
		})
	}

	//		split_top
	/// Splits off the highest non-zero word (or word 0 if all are zero),
	/// returning it along with the words below it.
	fn split_top(&self) -> (u32, &[u32]) {
		let top = self.0.iter().rposition(|&word| word != 0).unwrap_or(0);
		(self.0[top], &self.0[..top])
	}
}

//󰭅		Add
impl Add for UInt256 {
	type Output = Self;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		self.wrapping_add(rhs)
	}
}

//󰭅		AddAssign
impl AddAssign for UInt256 {
	//		add_assign
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

//󰭅		Debug
impl Debug for UInt256 {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "UInt256(0x{self:x})")?;

		//	For alternate formatting (#), also show the words
		if f.alternate() {
			write!(f, " [")?;
			for (i, word) in self.0.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{word:08x}")?;
			}
			write!(f, "]")?;
		}

		Ok(())
	}
}

//󰭅		Deserialize
impl<'de> Deserialize<'de> for UInt256 {
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	Accept both hex strings and plain integers
			deserializer.deserialize_any(UInt256Visitor)
		} else {
			deserializer.deserialize_bytes(UInt256Visitor)
		}
	}
}

//󰭅		Display
impl Display for UInt256 {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		LowerHex::fmt(self, f)
	}
}

//󰭅		From: u8 -> UInt256
impl From<u8> for UInt256 {
	//		from
	fn from(v: u8) -> Self {
		Self::from_word(u32::from(v))
	}
}

//󰭅		From: u16 -> UInt256
impl From<u16> for UInt256 {
	//		from
	fn from(v: u16) -> Self {
		Self::from_word(u32::from(v))
	}
}

//󰭅		From: u32 -> UInt256
impl From<u32> for UInt256 {
	//		from
	fn from(v: u32) -> Self {
		Self::from_word(v)
	}
}

//󰭅		From: u64 -> UInt256
impl From<u64> for UInt256 {
	//		from
	fn from(v: u64) -> Self {
		Self::from(u128::from(v))
	}
}

//󰭅		From: u128 -> UInt256
impl From<u128> for UInt256 {
	//		from
	#[expect(clippy::cast_possible_truncation, reason = "Each word takes its own 32 bits")]
	fn from(v: u128) -> Self {
		let mut words = [0_u32; WORDS];
		for (i, word) in words.iter_mut().take(4).enumerate() {
			*word = (v >> (WORD_BITS as usize * i)) as u32;
		}
		Self(words)
	}
}

//󰭅		From: [u32; 8] -> UInt256
impl From<[u32; WORDS]> for UInt256 {
	//		from
	fn from(words: [u32; WORDS]) -> Self {
		Self::from_words(words)
	}
}

//󰭅		From: UInt256 -> [u32; 8]
impl From<UInt256> for [u32; WORDS] {
	//		from
	fn from(v: UInt256) -> Self {
		v.into_words()
	}
}

//󰭅		FromSql
impl<'a> FromSql<'a> for UInt256 {
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::BYTEA                 => Ok(Self::from_be_bytes(raw)?),
			&Type::TEXT | &Type::VARCHAR => Ok(<&str as FromSql>::from_sql(ty, raw)?.parse::<Self>()?),
			unknown                      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for UInt256: {unknown}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::BYTEA | Type::TEXT | Type::VARCHAR)
	}
}

//󰭅		FromStr
impl FromStr for UInt256 {
	type Err = ConversionError;

	//		from_str
	/// Parses hexadecimal text, allowing surrounding whitespace and an optional
	/// `0x` or `0X` prefix.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let digits  = trimmed.strip_prefix("0x")
			.or_else(|| trimmed.strip_prefix("0X"))
			.unwrap_or(trimmed)
		;
		Self::from_hex(digits)
	}
}

//󰭅		LowerHex
impl LowerHex for UInt256 {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}

		//	Only the top word goes without leading zeros
		let (top, lower) = self.split_top();
		write!(f, "{top:x}")?;
		for word in lower.iter().rev() {
			write!(f, "{word:08x}")?;
		}

		Ok(())
	}
}

//󰭅		Neg
impl Neg for UInt256 {
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		self.wrapping_neg()
	}
}

//󰭅		Not
impl Not for UInt256 {
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		Self(self.0.map(|word| !word))
	}
}

//󰭅		Ord
impl Ord for UInt256 {
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		//	Most-significant word decides first
		self.0.iter().rev().cmp(other.0.iter().rev())
	}
}

//󰭅		PartialOrd
impl PartialOrd for UInt256 {
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Serialize
impl Serialize for UInt256 {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			serializer.serialize_str(&self.to_hex())
		} else {
			serializer.serialize_bytes(&self.to_be_bytes())
		}
	}
}

//󰭅		Sub
impl Sub for UInt256 {
	type Output = Self;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		self.wrapping_sub(rhs)
	}
}

//󰭅		SubAssign
impl SubAssign for UInt256 {
	//		sub_assign
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

//󰭅		Sum
impl Sum for UInt256 {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::ZERO, Add::add)
	}
}

//󰭅		Sum<&>
impl<'a> Sum<&'a Self> for UInt256 {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::ZERO, |acc, &v| acc + v)
	}
}

//󰭅		ToSql
impl ToSql for UInt256 {
	//		to_sql
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::BYTEA                 => self.to_be_bytes().as_slice().to_sql(ty, out),
			&Type::TEXT | &Type::VARCHAR => self.to_hex().to_sql(ty, out),
			unknown                      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for UInt256: {unknown}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::BYTEA | Type::TEXT | Type::VARCHAR)
	}

	to_sql_checked!();
}

//󰭅		TryFrom: UInt256 -> u32
impl TryFrom<UInt256> for u32 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: UInt256) -> Result<Self, Self::Error> {
		v.low_words(1).and_then(|value| Self::try_from(value).ok()).ok_or(ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: UInt256 -> u64
impl TryFrom<UInt256> for u64 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: UInt256) -> Result<Self, Self::Error> {
		v.low_words(2).and_then(|value| Self::try_from(value).ok()).ok_or(ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: UInt256 -> u128
impl TryFrom<UInt256> for u128 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: UInt256) -> Result<Self, Self::Error> {
		v.low_words(4).ok_or(ConversionError::ValueTooLarge)
	}
}

//󰭅		UpperHex
impl UpperHex for UInt256 {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}

		let (top, lower) = self.split_top();
		write!(f, "{top:X}")?;
		for word in lower.iter().rev() {
			write!(f, "{word:08X}")?;
		}

		Ok(())
	}
}



//		Visitors

//		UInt256Visitor
/// A visitor for parsing a [`UInt256`] from hex strings, integers, or bytes,
/// where the bytes may arrive either whole or as a sequence.
struct UInt256Visitor;

//󰭅		Visitor
impl<'de> Visitor<'de> for UInt256Visitor {
	type Value = UInt256;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a hex string, an unsigned integer, or 32 big-endian bytes")
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(UInt256::from(v))
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		UInt256::from_hex(v).map_err(E::custom)
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		if v.len() != BYTES {
			return Err(E::invalid_length(v.len(), &self));
		}
		UInt256::from_be_bytes(v).map_err(E::custom)
	}

	//		visit_seq
	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut bytes = [0_u8; BYTES];
		for (i, byte) in bytes.iter_mut().enumerate() {
			*byte = seq.next_element()?.ok_or_else(|| A::Error::invalid_length(i, &self))?;
		}
		if seq.next_element::<u8>()?.is_some() {
			return Err(A::Error::invalid_length(BYTES + 1, &self));
		}
		UInt256::from_be_bytes(&bytes).map_err(A::Error::custom)
	}
}
