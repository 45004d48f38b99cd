// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($diagnostic)
	};
}

/// `Err` of the given diagnostic.
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error::Error($diagnostic))
	};
}

/// Returns early with the given diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error::Error($diagnostic))
	};
}
