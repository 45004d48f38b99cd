// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! BSATN: the binary encoding used for module schemas, rows and call arguments.
//!
//! Primitives are fixed width little-endian, strings and arrays carry a `u32` prefix, sums a `u8`
//! tag, and products are their fields back to back with no framing.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod error;
mod reader;
mod traits;
mod types;
pub mod value;
mod writer;

pub use error::{DecodeError, EncodeError};
pub use reader::Reader;
pub use traits::{Decode, Encode};
pub use value::{decode_value, encode_value};
pub use writer::Writer;

pub fn to_vec<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, EncodeError> {
	let mut w = Writer::new();
	value.encode(&mut w)?;
	Ok(w.into_inner())
}

/// Decodes exactly one `T` from `bytes`; leftover input is an error.
pub fn from_slice<T: Decode>(bytes: &[u8]) -> Result<T, DecodeError> {
	let mut r = Reader::new(bytes);
	let value = T::decode(&mut r)?;
	r.finish()?;
	Ok(value)
}

/// Implements [`Encode`] and [`Decode`] for a struct as a product of the listed fields, in the
/// listed order.
#[macro_export]
macro_rules! impl_product_codec {
	($ty:ident { $($field:ident),* $(,)? }) => {
		impl $crate::Encode for $ty {
			fn encode(&self, w: &mut $crate::Writer) -> ::core::result::Result<(), $crate::EncodeError> {
				$($crate::Encode::encode(&self.$field, w)?;)*
				Ok(())
			}
		}

		impl $crate::Decode for $ty {
			fn decode(r: &mut $crate::Reader<'_>) -> ::core::result::Result<Self, $crate::DecodeError> {
				Ok($ty {
					$($field: $crate::Decode::decode(r)?,)*
				})
			}
		}
	};
}
