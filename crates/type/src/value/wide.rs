// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use num_bigint::{BigInt, BigUint, Sign};

/// Unsigned 256-bit integer stored as 32 little-endian bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U256(pub [u8; 32]);

/// Signed 256-bit two's complement integer stored as 32 little-endian bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct I256(pub [u8; 32]);

impl U256 {
	pub const ZERO: U256 = U256([0; 32]);
	pub const MAX: U256 = U256([0xFF; 32]);

	pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	pub fn to_le_bytes(self) -> [u8; 32] {
		self.0
	}

	pub fn to_biguint(self) -> BigUint {
		BigUint::from_bytes_le(&self.0)
	}

	/// `None` if the value needs more than 256 bits.
	pub fn from_biguint(value: &BigUint) -> Option<Self> {
		let bytes = value.to_bytes_le();
		if bytes.len() > 32 {
			return None;
		}
		let mut out = [0u8; 32];
		out[..bytes.len()].copy_from_slice(&bytes);
		Some(Self(out))
	}

	/// Splits into four `u64` words, least significant first.
	pub fn to_words(self) -> [u64; 4] {
		let mut words = [0u64; 4];
		for (i, chunk) in self.0.chunks_exact(8).enumerate() {
			let mut word = [0u8; 8];
			word.copy_from_slice(chunk);
			words[i] = u64::from_le_bytes(word);
		}
		words
	}

	pub fn from_words(words: [u64; 4]) -> Self {
		let mut out = [0u8; 32];
		for (i, word) in words.iter().enumerate() {
			out[i * 8..(i + 1) * 8].copy_from_slice(&word.to_le_bytes());
		}
		Self(out)
	}
}

impl From<u128> for U256 {
	fn from(v: u128) -> Self {
		let mut out = [0u8; 32];
		out[..16].copy_from_slice(&v.to_le_bytes());
		Self(out)
	}
}

impl Display for U256 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.to_biguint(), f)
	}
}

impl I256 {
	pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	pub fn to_le_bytes(self) -> [u8; 32] {
		self.0
	}

	pub fn is_negative(self) -> bool {
		self.0[31] & 0x80 != 0
	}

	pub fn to_bigint(self) -> BigInt {
		BigInt::from_signed_bytes_le(&self.0)
	}

	/// `None` if the value does not fit 256 bits of two's complement.
	pub fn from_bigint(value: &BigInt) -> Option<Self> {
		let bytes = value.to_signed_bytes_le();
		if bytes.len() > 32 {
			return None;
		}
		let fill = if value.sign() == Sign::Minus {
			0xFF
		} else {
			0x00
		};
		let mut out = [fill; 32];
		out[..bytes.len()].copy_from_slice(&bytes);
		Some(Self(out))
	}
}

impl From<i128> for I256 {
	fn from(v: i128) -> Self {
		let fill = if v < 0 {
			0xFF
		} else {
			0x00
		};
		let mut out = [fill; 32];
		out[..16].copy_from_slice(&v.to_le_bytes());
		Self(out)
	}
}

impl Display for I256 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.to_bigint(), f)
	}
}

#[cfg(test)]
mod tests {
	use num_traits::One;

	use super::*;

	#[test]
	fn test_u256_from_u128_display() {
		assert_eq!(U256::from(42u128).to_string(), "42");
		assert_eq!(U256::ZERO.to_string(), "0");
	}

	#[test]
	fn test_u256_max_bigint() {
		let max = (BigUint::one() << 256usize) - BigUint::one();
		assert_eq!(U256::from_biguint(&max), Some(U256::MAX));
		assert_eq!(U256::from_biguint(&(max + BigUint::one())), None);
	}

	#[test]
	fn test_u256_words() {
		let words = [1, 2, 3, u64::MAX];
		assert_eq!(U256::from_words(words).to_words(), words);
	}

	#[test]
	fn test_i256_negative() {
		let v = I256::from(-1i128);
		assert!(v.is_negative());
		assert_eq!(v.0, [0xFF; 32]);
		assert_eq!(v.to_string(), "-1");
		assert_eq!(I256::from_bigint(&BigInt::from(-1)), Some(v));
	}

	#[test]
	fn test_i256_bigint_round_trip() {
		let big = BigInt::from(i128::MIN) * BigInt::from(1_000_000);
		let v = I256::from_bigint(&big).unwrap();
		assert_eq!(v.to_bigint(), big);
	}
}
