// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! ABI between a modkit module and its host
//!
//! The host hands the module opaque [`BytesSource`] and [`BytesSink`] handles. The module reads
//! call arguments from a source and writes its schema document, call results and error messages
//! to a sink. Every host call reports a status code, see [`constants`].

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod bytes;
pub mod constants;
mod error;
mod host;

pub use bytes::{consume_bytes, write_bytes};
pub use constants::StatusCode;
pub use error::AbiError;
pub use host::{BytesSink, BytesSource, HostIo};
