// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Submits a registration that runs in the given phase of every module build.
///
/// ```ignore
/// modkit_sdk::registration!(Tables, person, |ctx| {
/// 	ctx.register_table::<Person>("person", true);
/// });
/// ```
#[macro_export]
macro_rules! registration {
	($phase:ident, $name:ident, |$ctx:ident| $body:block) => {
		$crate::__private::paste::paste! {
			#[allow(non_snake_case)]
			fn [<__modkit_register_ $name>]($ctx: &mut $crate::ModuleBuildContext) $body

			$crate::__private::inventory::submit! {
				$crate::Registration::new($crate::Phase::$phase, stringify!($name), [<__modkit_register_ $name>])
			}
		}
	};
}

/// Declares a struct usable as a table row, a function argument or a return value.
///
/// The struct describes itself as a named product type, lists its fields for table registration
/// and encodes its fields in declaration order.
#[macro_export]
macro_rules! module_struct {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$($(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty),+ $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$($(#[$field_meta])* $field_vis $field: $ty),+
		}

		impl $crate::__private::GetType for $name {
			fn make_type(builder: &mut dyn $crate::__private::TypeBuilder) -> $crate::__private::AlgebraicType {
				builder.register_named(stringify!($name), $crate::__private::NativeType::of::<$name>(), &mut |builder| {
					$crate::__private::AlgebraicType::product([
						$((stringify!($field), <$ty as $crate::__private::GetType>::make_type(builder))),+
					])
				})
			}
		}

		impl $crate::__private::Fields for $name {
			fn field_descriptors() -> Vec<$crate::__private::FieldDescriptor> {
				vec![$($crate::__private::FieldDescriptor::of::<$ty>(stringify!($field))),+]
			}
		}

		$crate::__private::impl_product_codec!($name { $($field),+ });
	};
}

/// Declares a fieldless enum; it describes itself as a named sum of unit variants and encodes as
/// its variant tag.
#[macro_export]
macro_rules! module_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$($variant:ident),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		#[repr(u8)]
		$vis enum $name {
			$($variant),+
		}

		impl $name {
			const VARIANTS: &'static [$name] = &[$($name::$variant),+];
		}

		impl $crate::__private::GetType for $name {
			fn make_type(builder: &mut dyn $crate::__private::TypeBuilder) -> $crate::__private::AlgebraicType {
				builder.register_named(stringify!($name), $crate::__private::NativeType::of::<$name>(), &mut |_| {
					$crate::__private::AlgebraicType::simple_enum([$(stringify!($variant)),+])
				})
			}
		}

		impl $crate::__private::Encode for $name {
			fn encode(&self, w: &mut $crate::__private::Writer) -> Result<(), $crate::__private::EncodeError> {
				w.write_u8(*self as u8);
				Ok(())
			}
		}

		impl $crate::__private::Decode for $name {
			fn decode(r: &mut $crate::__private::Reader<'_>) -> Result<Self, $crate::__private::DecodeError> {
				let tag = r.read_u8()?;
				Self::VARIANTS.get(tag as usize).copied().ok_or($crate::__private::DecodeError::InvalidTag {
					context: stringify!($name),
					tag,
				})
			}
		}
	};
}
