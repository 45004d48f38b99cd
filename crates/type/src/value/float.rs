// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

macro_rules! impl_total_float {
	($name:ident, $inner:ty) => {
		/// Float with a total order (IEEE 754 `totalOrder`), so values can be compared, hashed and
		/// used as keys.
		#[derive(Debug, Clone, Copy, Default)]
		pub struct $name(pub $inner);

		impl $name {
			pub fn value(self) -> $inner {
				self.0
			}
		}

		impl PartialEq for $name {
			fn eq(&self, other: &Self) -> bool {
				self.0.total_cmp(&other.0) == Ordering::Equal
			}
		}

		impl Eq for $name {}

		impl PartialOrd for $name {
			fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for $name {
			fn cmp(&self, other: &Self) -> Ordering {
				self.0.total_cmp(&other.0)
			}
		}

		impl Hash for $name {
			fn hash<H: Hasher>(&self, state: &mut H) {
				self.0.to_bits().hash(state)
			}
		}

		impl From<$inner> for $name {
			fn from(v: $inner) -> Self {
				Self(v)
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				Display::fmt(&self.0, f)
			}
		}
	};
}

impl_total_float!(F32, f32);
impl_total_float!(F64, f64);
