// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	time::{Duration, SystemTime, UNIX_EPOCH},
};

use super::{GetType, TypeBuilder};
use crate::{AlgebraicType, value::U256};

/// Identity of a caller, 256 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity(pub U256);

impl Identity {
	pub const ZERO: Identity = Identity(U256::ZERO);

	/// Builds an identity from four `u64` words, least significant first.
	pub fn from_words(words: [u64; 4]) -> Self {
		Self(U256::from_words(words))
	}

	pub fn to_words(self) -> [u64; 4] {
		self.0.to_words()
	}

	pub fn to_hex(self) -> String {
		self.0.to_le_bytes().iter().rev().map(|b| format!("{:02x}", b)).collect()
	}
}

impl Display for Identity {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_hex())
	}
}

/// Identity of a single client connection, 128 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub u128);

impl ConnectionId {
	pub const ZERO: ConnectionId = ConnectionId(0);

	/// Builds a connection id from two `u64` words, least significant first.
	pub fn from_words(words: [u64; 2]) -> Self {
		Self(((words[1] as u128) << 64) | words[0] as u128)
	}

	pub fn is_zero(self) -> bool {
		self.0 == 0
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
	pub micros_since_unix_epoch: i64,
}

impl Timestamp {
	pub const UNIX_EPOCH: Timestamp = Timestamp::from_micros(0);

	pub const fn from_micros(micros_since_unix_epoch: i64) -> Self {
		Self {
			micros_since_unix_epoch,
		}
	}

	pub fn now() -> Self {
		let micros = match SystemTime::now().duration_since(UNIX_EPOCH) {
			Ok(elapsed) => elapsed.as_micros() as i64,
			Err(before) => -(before.duration().as_micros() as i64),
		};
		Self::from_micros(micros)
	}

	pub fn checked_add(self, duration: TimeDuration) -> Option<Self> {
		self.micros_since_unix_epoch.checked_add(duration.micros).map(Self::from_micros)
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeDuration {
	pub micros: i64,
}

impl TimeDuration {
	pub const fn from_micros(micros: i64) -> Self {
		Self {
			micros,
		}
	}
}

impl From<Duration> for TimeDuration {
	fn from(d: Duration) -> Self {
		Self::from_micros(d.as_micros().min(i64::MAX as u128) as i64)
	}
}

/// When a scheduled reducer fires: repeatedly at an interval, or once at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleAt {
	Interval(TimeDuration),
	Time(Timestamp),
}

impl From<Duration> for ScheduleAt {
	fn from(d: Duration) -> Self {
		ScheduleAt::Interval(d.into())
	}
}

impl From<Timestamp> for ScheduleAt {
	fn from(t: Timestamp) -> Self {
		ScheduleAt::Time(t)
	}
}

impl GetType for Identity {
	fn make_type(_: &mut dyn TypeBuilder) -> AlgebraicType {
		AlgebraicType::identity()
	}
}

impl GetType for ConnectionId {
	fn make_type(_: &mut dyn TypeBuilder) -> AlgebraicType {
		AlgebraicType::connection_id()
	}
}

impl GetType for Timestamp {
	fn make_type(_: &mut dyn TypeBuilder) -> AlgebraicType {
		AlgebraicType::timestamp()
	}
}

impl GetType for TimeDuration {
	fn make_type(_: &mut dyn TypeBuilder) -> AlgebraicType {
		AlgebraicType::time_duration()
	}
}

impl GetType for ScheduleAt {
	fn make_type(_: &mut dyn TypeBuilder) -> AlgebraicType {
		AlgebraicType::schedule_at()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::native::tests::Inline;

	#[test]
	fn test_identity_words() {
		let id = Identity::from_words([1, 0, 0, 0]);
		assert_eq!(id.to_words(), [1, 0, 0, 0]);
		assert!(id.to_hex().ends_with("01"));
		assert_eq!(id.to_hex().len(), 64);
	}

	#[test]
	fn test_connection_id_words() {
		let id = ConnectionId::from_words([2, 1]);
		assert_eq!(id.0, (1u128 << 64) | 2);
		assert!(ConnectionId::ZERO.is_zero());
	}

	#[test]
	fn test_special_shapes() {
		assert!(Identity::make_type(&mut Inline).is_special());
		assert!(Timestamp::make_type(&mut Inline).is_special());
		assert!(ScheduleAt::make_type(&mut Inline).is_schedule_at());
	}

	#[test]
	fn test_timestamp_add() {
		let t = Timestamp::from_micros(10);
		assert_eq!(t.checked_add(TimeDuration::from_micros(5)), Some(Timestamp::from_micros(15)));
		assert_eq!(Timestamp::from_micros(i64::MAX).checked_add(TimeDuration::from_micros(1)), None);
	}
}
