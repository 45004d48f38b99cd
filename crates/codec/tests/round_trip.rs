// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use modkit_codec::{Decode, Encode, Reader, Writer, decode_value, encode_value, from_slice, to_vec};
use modkit_type::{AlgebraicType, AlgebraicValue, F32, F64, I256, Typespace, U256};
use proptest::{prelude::*, strategy::Union};

fn round_trip<T: Encode + Decode + PartialEq + Debug>(value: &T) -> Result<(), TestCaseError> {
	let bytes = to_vec(value).map_err(|e| TestCaseError::fail(e.to_string()))?;
	let decoded = from_slice::<T>(&bytes).map_err(|e| TestCaseError::fail(e.to_string()))?;
	prop_assert_eq!(&decoded, value);
	Ok(())
}

fn arb_type() -> impl Strategy<Value = AlgebraicType> {
	let leaf = prop::sample::select(vec![
		AlgebraicType::Bool,
		AlgebraicType::I8,
		AlgebraicType::U8,
		AlgebraicType::I16,
		AlgebraicType::U16,
		AlgebraicType::I32,
		AlgebraicType::U32,
		AlgebraicType::I64,
		AlgebraicType::U64,
		AlgebraicType::I128,
		AlgebraicType::U128,
		AlgebraicType::I256,
		AlgebraicType::U256,
		AlgebraicType::F32,
		AlgebraicType::F64,
		AlgebraicType::String,
	]);
	leaf.prop_recursive(4, 32, 4, |inner| {
		prop_oneof![
			inner.clone().prop_map(AlgebraicType::array),
			inner.clone().prop_map(AlgebraicType::option),
			prop::collection::vec(inner.clone(), 0..4).prop_map(|fields| {
				AlgebraicType::product(fields.into_iter().enumerate().map(|(i, ty)| (format!("f{}", i), ty)))
			}),
			prop::collection::vec(inner, 1..4).prop_map(|variants| {
				AlgebraicType::sum(variants.into_iter().enumerate().map(|(i, ty)| (format!("v{}", i), ty)))
			}),
		]
	})
}

fn arb_value(ty: &AlgebraicType) -> BoxedStrategy<AlgebraicValue> {
	match ty {
		AlgebraicType::Bool => any::<bool>().prop_map(AlgebraicValue::Bool).boxed(),
		AlgebraicType::I8 => any::<i8>().prop_map(AlgebraicValue::I8).boxed(),
		AlgebraicType::U8 => any::<u8>().prop_map(AlgebraicValue::U8).boxed(),
		AlgebraicType::I16 => any::<i16>().prop_map(AlgebraicValue::I16).boxed(),
		AlgebraicType::U16 => any::<u16>().prop_map(AlgebraicValue::U16).boxed(),
		AlgebraicType::I32 => any::<i32>().prop_map(AlgebraicValue::I32).boxed(),
		AlgebraicType::U32 => any::<u32>().prop_map(AlgebraicValue::U32).boxed(),
		AlgebraicType::I64 => any::<i64>().prop_map(AlgebraicValue::I64).boxed(),
		AlgebraicType::U64 => any::<u64>().prop_map(AlgebraicValue::U64).boxed(),
		AlgebraicType::I128 => any::<i128>().prop_map(AlgebraicValue::I128).boxed(),
		AlgebraicType::U128 => any::<u128>().prop_map(AlgebraicValue::U128).boxed(),
		AlgebraicType::I256 => any::<[u8; 32]>().prop_map(|b| AlgebraicValue::I256(I256(b))).boxed(),
		AlgebraicType::U256 => any::<[u8; 32]>().prop_map(|b| AlgebraicValue::U256(U256(b))).boxed(),
		AlgebraicType::F32 => any::<u32>().prop_map(|bits| AlgebraicValue::F32(F32(f32::from_bits(bits)))).boxed(),
		AlgebraicType::F64 => any::<u64>().prop_map(|bits| AlgebraicValue::F64(F64(f64::from_bits(bits)))).boxed(),
		AlgebraicType::String => any::<String>().prop_map(AlgebraicValue::String).boxed(),
		AlgebraicType::Array(array) => {
			prop::collection::vec(arb_value(&array.elem_ty), 0..4).prop_map(AlgebraicValue::Array).boxed()
		}
		AlgebraicType::Product(product) => product
			.elements
			.iter()
			.map(|element| arb_value(&element.algebraic_type))
			.collect::<Vec<_>>()
			.prop_map(AlgebraicValue::Product)
			.boxed(),
		AlgebraicType::Sum(sum) => Union::new(sum.variants.iter().enumerate().map(|(tag, variant)| {
			arb_value(&variant.algebraic_type).prop_map(move |value| AlgebraicValue::sum(tag as u8, value)).boxed()
		}))
		.boxed(),
		AlgebraicType::Ref(_) => unreachable!("generated types are inline"),
	}
}

fn arb_typed_value() -> impl Strategy<Value = (AlgebraicType, AlgebraicValue)> {
	arb_type().prop_flat_map(|ty| {
		let value = arb_value(&ty);
		(Just(ty), value)
	})
}

proptest! {
	#[test]
	fn prop_integers(a in any::<i8>(), b in any::<u16>(), c in any::<i16>(), d in any::<u32>(), e in any::<i32>()) {
		round_trip(&a)?;
		round_trip(&b)?;
		round_trip(&c)?;
		round_trip(&d)?;
		round_trip(&e)?;
	}

	#[test]
	fn prop_wide_integers(a in any::<u64>(), b in any::<i64>(), c in any::<u128>(), d in any::<i128>()) {
		round_trip(&a)?;
		round_trip(&b)?;
		round_trip(&c)?;
		round_trip(&d)?;
	}

	#[test]
	fn prop_256_bit(u in any::<[u8; 32]>(), i in any::<[u8; 32]>()) {
		round_trip(&U256(u))?;
		round_trip(&I256(i))?;
	}

	#[test]
	fn prop_float_bits(a in any::<u32>(), b in any::<u64>()) {
		let bytes = to_vec(&f32::from_bits(a)).unwrap();
		prop_assert_eq!(from_slice::<f32>(&bytes).unwrap().to_bits(), a);
		let bytes = to_vec(&f64::from_bits(b)).unwrap();
		prop_assert_eq!(from_slice::<f64>(&bytes).unwrap().to_bits(), b);
	}

	#[test]
	fn prop_strings_and_containers(s in any::<String>(), v in any::<Vec<i32>>(), o in any::<Option<String>>()) {
		round_trip(&s)?;
		round_trip(&v)?;
		round_trip(&o)?;
		round_trip(&(s, v, o))?;
	}

	#[test]
	fn prop_bool(b in any::<bool>()) {
		round_trip(&b)?;
	}

	#[test]
	fn prop_value_against_type((ty, value) in arb_typed_value()) {
		let ts = Typespace::default();
		let mut w = Writer::new();
		encode_value(&mut w, &value, &ty, &ts).unwrap();
		let bytes = w.into_inner();

		let mut r = Reader::new(&bytes);
		prop_assert_eq!(decode_value(&mut r, &ty, &ts).unwrap(), value);
		prop_assert!(r.is_empty());
	}
}

#[test]
fn test_integer_bounds() {
	macro_rules! bounds {
		($($ty:ty),*) => {
			$(
				assert_eq!(from_slice::<$ty>(&to_vec(&<$ty>::MIN).unwrap()).unwrap(), <$ty>::MIN);
				assert_eq!(from_slice::<$ty>(&to_vec(&<$ty>::MAX).unwrap()).unwrap(), <$ty>::MAX);
			)*
		};
	}
	bounds!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128);
}

#[test]
fn test_float_specials() {
	for v in [0.0f32, -0.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY, f32::MIN_POSITIVE, f32::MAX] {
		assert_eq!(from_slice::<f32>(&to_vec(&v).unwrap()).unwrap().to_bits(), v.to_bits());
	}
	for v in [0.0f64, -0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MIN_POSITIVE, f64::MAX] {
		assert_eq!(from_slice::<f64>(&to_vec(&v).unwrap()).unwrap().to_bits(), v.to_bits());
	}
}

#[test]
fn test_256_bit_bounds() {
	for bytes in [[0u8; 32], [0xFF; 32]] {
		assert_eq!(from_slice::<U256>(&to_vec(&U256(bytes)).unwrap()).unwrap(), U256(bytes));
		assert_eq!(from_slice::<I256>(&to_vec(&I256(bytes)).unwrap()).unwrap(), I256(bytes));
	}
}
