// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Callable module functions: reducers, views and procedures, and the contexts the host passes them.

use indexmap::IndexMap;
use modkit_codec::{Decode, from_slice};
use modkit_type::{ConnectionId, GetType, Identity, ProductTypeElement, Timestamp, TypeBuilder};

/// Caller information for a reducer call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducerContext {
	pub sender: Identity,
	/// `None` for calls the host makes on its own, such as scheduled reducers.
	pub connection_id: Option<ConnectionId>,
	pub timestamp: Timestamp,
}

impl ReducerContext {
	/// Builds the context from the words the host passes; an all zero connection id means none.
	pub fn from_words(sender: [u64; 4], connection_id: [u64; 2], timestamp: Timestamp) -> Self {
		let connection_id = ConnectionId::from_words(connection_id);
		Self {
			sender: Identity::from_words(sender),
			connection_id: if connection_id.is_zero() {
				None
			} else {
				Some(connection_id)
			},
			timestamp,
		}
	}
}

/// Caller information for a view call; anonymous views do not see the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContext {
	pub sender: Option<Identity>,
}

pub type ProcedureContext = ReducerContext;

/// Argument tuple of a callable function.
///
/// The arguments arrive as one BSATN product; each tuple element is a parameter, in order.
pub trait FunctionArgs: Decode {
	fn params(builder: &mut dyn TypeBuilder) -> Vec<ProductTypeElement>;

	fn decode_args(bytes: &[u8]) -> Result<Self, String> {
		from_slice::<Self>(bytes).map_err(|err| format!("failed to decode arguments: {}", err))
	}
}

impl FunctionArgs for () {
	fn params(_: &mut dyn TypeBuilder) -> Vec<ProductTypeElement> {
		vec![]
	}
}

macro_rules! impl_function_args {
	($($name:ident),+) => {
		impl<$($name: GetType + Decode),+> FunctionArgs for ($($name,)+) {
			fn params(builder: &mut dyn TypeBuilder) -> Vec<ProductTypeElement> {
				vec![$(ProductTypeElement::new(None, $name::make_type(builder))),+]
			}
		}
	};
}

impl_function_args!(A);
impl_function_args!(A, B);
impl_function_args!(A, B, C);
impl_function_args!(A, B, C, D);
impl_function_args!(A, B, C, D, E);
impl_function_args!(A, B, C, D, E, F);

pub type ReducerFn = Box<dyn Fn(&ReducerContext, &[u8]) -> Result<(), String> + Send + Sync>;
pub type ViewFn = Box<dyn Fn(&ViewContext, &[u8]) -> Result<Vec<u8>, String> + Send + Sync>;
pub type ProcedureFn = Box<dyn Fn(&ProcedureContext, &[u8]) -> Result<Vec<u8>, String> + Send + Sync>;

/// Handlers by name, in registration order; a function's id is its position.
///
/// Re-registering a name replaces the handler and keeps its id, matching the upsert of the
/// schema builder.
#[derive(Default)]
pub struct FunctionTable {
	pub(crate) reducers: IndexMap<String, ReducerFn>,
	pub(crate) views: IndexMap<String, ViewFn>,
	pub(crate) anonymous_views: IndexMap<String, ViewFn>,
	pub(crate) procedures: IndexMap<String, ProcedureFn>,
}

impl FunctionTable {
	pub fn reducer_id(&self, name: &str) -> Option<u32> {
		self.reducers.get_index_of(name).map(|id| id as u32)
	}

	pub fn procedure_id(&self, name: &str) -> Option<u32> {
		self.procedures.get_index_of(name).map(|id| id as u32)
	}

	pub fn view_id(&self, name: &str) -> Option<u32> {
		self.views.get_index_of(name).or_else(|| self.anonymous_views.get_index_of(name)).map(|id| id as u32)
	}

	pub(crate) fn views_of(&self, anonymous: bool) -> &IndexMap<String, ViewFn> {
		if anonymous {
			&self.anonymous_views
		} else {
			&self.views
		}
	}

	/// Id the next view of this kind gets.
	pub(crate) fn view_index(&self, name: &str, anonymous: bool) -> u32 {
		let views = self.views_of(anonymous);
		views.get_index_of(name).unwrap_or(views.len()) as u32
	}

	pub fn len(&self) -> usize {
		self.reducers.len() + self.views.len() + self.anonymous_views.len() + self.procedures.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn clear(&mut self) {
		self.reducers.clear();
		self.views.clear();
		self.anonymous_views.clear();
		self.procedures.clear();
	}
}

impl std::fmt::Debug for FunctionTable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FunctionTable")
			.field("reducers", &self.reducers.keys().collect::<Vec<_>>())
			.field("views", &self.views.keys().collect::<Vec<_>>())
			.field("anonymous_views", &self.anonymous_views.keys().collect::<Vec<_>>())
			.field("procedures", &self.procedures.keys().collect::<Vec<_>>())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use modkit_type::{AlgebraicType, NativeType};

	use super::*;

	struct Inline;

	impl TypeBuilder for Inline {
		fn register_type(&mut self, ty: AlgebraicType, _: Option<&str>, _: Option<NativeType>) -> AlgebraicType {
			ty
		}

		fn register_named(
			&mut self,
			_: &str,
			_: NativeType,
			build: &mut dyn FnMut(&mut dyn TypeBuilder) -> AlgebraicType,
		) -> AlgebraicType {
			build(self)
		}
	}

	#[test]
	fn test_context_without_connection() {
		let ctx = ReducerContext::from_words([1, 0, 0, 0], [0, 0], Timestamp::from_micros(5));
		assert_eq!(ctx.connection_id, None);
		assert_eq!(ctx.sender, Identity::from_words([1, 0, 0, 0]));

		let ctx = ReducerContext::from_words([0; 4], [0, 1], Timestamp::UNIX_EPOCH);
		assert_eq!(ctx.connection_id, Some(ConnectionId(1 << 64)));
	}

	#[test]
	fn test_args_params_in_order() {
		let params = <(u32, String, Option<u8>)>::params(&mut Inline);
		let types: Vec<_> = params.iter().map(|p| p.algebraic_type.clone()).collect();
		assert_eq!(types, vec![AlgebraicType::U32, AlgebraicType::String, AlgebraicType::option(AlgebraicType::U8)]);
		assert!(params.iter().all(|p| p.name.is_none()));
		assert!(<()>::params(&mut Inline).is_empty());
	}

	#[test]
	fn test_decode_args() {
		assert_eq!(<(u16, u8)>::decode_args(&[1, 0, 7]), Ok((1, 7)));

		let err = <(u32,)>::decode_args(&[1, 0]).unwrap_err();
		assert!(err.starts_with("failed to decode arguments"));
		assert!(<(u8,)>::decode_args(&[1, 2]).is_err());
		assert_eq!(<()>::decode_args(&[]), Ok(()));
	}
}
