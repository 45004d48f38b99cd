// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Test support: an in-memory host, sample module types and the golden script runner.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod fixture;
mod host;
pub mod testscript;

pub use host::MemoryHost;
