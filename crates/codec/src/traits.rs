// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_type::{ConnectionId, F32, F64, I256, Identity, ScheduleAt, TimeDuration, Timestamp, U256, Uuid};

use crate::{DecodeError, EncodeError, Reader, Writer};

pub trait Encode {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError>;
}

pub trait Decode: Sized {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError>;
}

macro_rules! impl_primitive {
	($($ty:ty => $write:ident, $read:ident);* $(;)?) => {
		$(
			impl Encode for $ty {
				fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
					w.$write(*self);
					Ok(())
				}
			}

			impl Decode for $ty {
				fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
					r.$read()
				}
			}
		)*
	};
}

impl_primitive!(
	bool => write_bool, read_bool;
	u8 => write_u8, read_u8;
	i8 => write_i8, read_i8;
	u16 => write_u16, read_u16;
	i16 => write_i16, read_i16;
	u32 => write_u32, read_u32;
	i32 => write_i32, read_i32;
	u64 => write_u64, read_u64;
	i64 => write_i64, read_i64;
	u128 => write_u128, read_u128;
	i128 => write_i128, read_i128;
	f32 => write_f32, read_f32;
	f64 => write_f64, read_f64;
);

impl Encode for F32 {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_f32(self.0);
		Ok(())
	}
}

impl Decode for F32 {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		r.read_f32().map(F32)
	}
}

impl Encode for F64 {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_f64(self.0);
		Ok(())
	}
}

impl Decode for F64 {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		r.read_f64().map(F64)
	}
}

impl Encode for U256 {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_bytes_raw(&self.0);
		Ok(())
	}
}

impl Decode for U256 {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		r.read_array().map(U256)
	}
}

impl Encode for I256 {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_bytes_raw(&self.0);
		Ok(())
	}
}

impl Decode for I256 {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		r.read_array().map(I256)
	}
}

impl Encode for str {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_string(self)
	}
}

impl Encode for String {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_string(self)
	}
}

impl Decode for String {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		r.read_string()
	}
}

impl Encode for () {
	fn encode(&self, _: &mut Writer) -> Result<(), EncodeError> {
		Ok(())
	}
}

impl Decode for () {
	fn decode(_: &mut Reader<'_>) -> Result<Self, DecodeError> {
		Ok(())
	}
}

impl<T: Encode + ?Sized> Encode for &T {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		(**self).encode(w)
	}
}

impl<T: Encode + ?Sized> Encode for Box<T> {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		(**self).encode(w)
	}
}

impl<T: Decode> Decode for Box<T> {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		T::decode(r).map(Box::new)
	}
}

impl<T: Encode> Encode for [T] {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_len(self.len())?;
		for item in self {
			item.encode(w)?;
		}
		Ok(())
	}
}

impl<T: Encode> Encode for Vec<T> {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		self.as_slice().encode(w)
	}
}

impl<T: Decode> Decode for Vec<T> {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		let len = r.read_len()?;
		// capacity bounded by the input, not the declared count
		let mut out = Vec::with_capacity(len.min(r.remaining()));
		for _ in 0..len {
			out.push(T::decode(r)?);
		}
		Ok(out)
	}
}

impl<T: Encode> Encode for Option<T> {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		match self {
			Some(v) => {
				w.write_u8(0);
				v.encode(w)
			}
			None => {
				w.write_u8(1);
				Ok(())
			}
		}
	}
}

impl<T: Decode> Decode for Option<T> {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => Ok(Some(T::decode(r)?)),
			1 => Ok(None),
			tag => Err(DecodeError::InvalidTag {
				context: "option",
				tag,
			}),
		}
	}
}

impl<T: Encode, E: Encode> Encode for Result<T, E> {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		match self {
			Ok(v) => {
				w.write_u8(0);
				v.encode(w)
			}
			Err(e) => {
				w.write_u8(1);
				e.encode(w)
			}
		}
	}
}

impl<T: Decode, E: Decode> Decode for Result<T, E> {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => Ok(Ok(T::decode(r)?)),
			1 => Ok(Err(E::decode(r)?)),
			tag => Err(DecodeError::InvalidTag {
				context: "result",
				tag,
			}),
		}
	}
}

macro_rules! impl_tuple {
	($($name:ident),+) => {
		impl<$($name: Encode),+> Encode for ($($name,)+) {
			#[allow(non_snake_case)]
			fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
				let ($($name,)+) = self;
				$($name.encode(w)?;)+
				Ok(())
			}
		}

		impl<$($name: Decode),+> Decode for ($($name,)+) {
			fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
				Ok(($($name::decode(r)?,)+))
			}
		}
	};
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);

impl Encode for Identity {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		self.0.encode(w)
	}
}

impl Decode for Identity {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		U256::decode(r).map(Identity)
	}
}

impl Encode for ConnectionId {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_u128(self.0);
		Ok(())
	}
}

impl Decode for ConnectionId {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		r.read_u128().map(ConnectionId)
	}
}

impl Encode for Timestamp {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_i64(self.micros_since_unix_epoch);
		Ok(())
	}
}

impl Decode for Timestamp {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		r.read_i64().map(Timestamp::from_micros)
	}
}

impl Encode for TimeDuration {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_i64(self.micros);
		Ok(())
	}
}

impl Decode for TimeDuration {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		r.read_i64().map(TimeDuration::from_micros)
	}
}

impl Encode for Uuid {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_u128(self.as_u128());
		Ok(())
	}
}

impl Decode for Uuid {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		r.read_u128().map(Uuid::from_u128)
	}
}

impl Encode for ScheduleAt {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		match self {
			ScheduleAt::Interval(d) => {
				w.write_u8(0);
				d.encode(w)
			}
			ScheduleAt::Time(t) => {
				w.write_u8(1);
				t.encode(w)
			}
		}
	}
}

impl Decode for ScheduleAt {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => TimeDuration::decode(r).map(ScheduleAt::Interval),
			1 => Timestamp::decode(r).map(ScheduleAt::Time),
			tag => Err(DecodeError::InvalidTag {
				context: "schedule_at",
				tag,
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{from_slice, to_vec};

	#[test]
	fn test_primitive_round_trips() {
		assert_eq!(from_slice::<u8>(&to_vec(&0xABu8).unwrap()).unwrap(), 0xAB);
		assert_eq!(from_slice::<i64>(&to_vec(&-5i64).unwrap()).unwrap(), -5);
		assert_eq!(from_slice::<u128>(&to_vec(&u128::MAX).unwrap()).unwrap(), u128::MAX);
		assert_eq!(from_slice::<f64>(&to_vec(&1.25f64).unwrap()).unwrap(), 1.25);
		assert!(from_slice::<bool>(&to_vec(&true).unwrap()).unwrap());
	}

	#[test]
	fn test_option_tags() {
		assert_eq!(to_vec(&Some(7u8)).unwrap(), vec![0, 7]);
		assert_eq!(to_vec(&None::<u8>).unwrap(), vec![1]);
		assert_eq!(
			from_slice::<Option<u8>>(&[2]),
			Err(DecodeError::InvalidTag {
				context: "option",
				tag: 2
			})
		);
	}

	#[test]
	fn test_vec_prefix() {
		assert_eq!(to_vec(&vec![1u16, 2]).unwrap(), vec![2, 0, 0, 0, 1, 0, 2, 0]);
		assert_eq!(from_slice::<Vec<u16>>(&[2, 0, 0, 0, 1, 0, 2, 0]).unwrap(), vec![1, 2]);
	}

	#[test]
	fn test_vec_count_larger_than_input() {
		let bytes = [0xFF, 0xFF, 0xFF, 0x7F, 1];
		assert!(matches!(from_slice::<Vec<u8>>(&bytes), Err(DecodeError::BufferUnderrun { .. })));
	}

	#[test]
	fn test_tuple_fields_concatenate() {
		let bytes = to_vec(&(1u8, "a".to_string(), true)).unwrap();
		assert_eq!(bytes, vec![1, 1, 0, 0, 0, b'a', 1]);
		let (a, b, c): (u8, String, bool) = from_slice(&bytes).unwrap();
		assert_eq!((a, b.as_str(), c), (1, "a", true));
	}

	#[test]
	fn test_schedule_at() {
		let at = ScheduleAt::Interval(TimeDuration::from_micros(1_000));
		assert_eq!(from_slice::<ScheduleAt>(&to_vec(&at).unwrap()).unwrap(), at);
		assert_eq!(to_vec(&ScheduleAt::Time(Timestamp::from_micros(1))).unwrap()[0], 1);
	}

	#[test]
	fn test_identity_is_32_bytes() {
		let id = Identity::from_words([1, 2, 3, 4]);
		let bytes = to_vec(&id).unwrap();
		assert_eq!(bytes.len(), 32);
		assert_eq!(from_slice::<Identity>(&bytes).unwrap(), id);
	}
}
