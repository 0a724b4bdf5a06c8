// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};

/// Width of a single offset table entry in a value record.
///
/// The width has to be large enough for the largest byte offset a record of
/// the table can hold, which [`crate::layout::Table::compile`] verifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OffsetWidth {
	U8,
	U16,
	U32,
}

impl OffsetWidth {
	pub const fn bytes(&self) -> usize {
		match self {
			OffsetWidth::U8 => 1,
			OffsetWidth::U16 => 2,
			OffsetWidth::U32 => 4,
		}
	}

	pub const fn max_offset(&self) -> usize {
		match self {
			OffsetWidth::U8 => u8::MAX as usize,
			OffsetWidth::U16 => u16::MAX as usize,
			OffsetWidth::U32 => u32::MAX as usize,
		}
	}

	/// Reads a little-endian entry from the start of `src`.
	pub fn read(&self, src: &[u8]) -> usize {
		match self {
			OffsetWidth::U8 => src[0] as usize,
			OffsetWidth::U16 => u16::from_le_bytes([src[0], src[1]]) as usize,
			OffsetWidth::U32 => u32::from_le_bytes([src[0], src[1], src[2], src[3]]) as usize,
		}
	}

	/// Fails with [`Error::OffsetOverflow`] when `offset` does not fit an entry.
	pub fn check(&self, offset: usize) -> Result<()> {
		if offset > self.max_offset() {
			return Err(Error::OffsetOverflow {
				offset,
				width: self.bytes(),
			});
		}
		Ok(())
	}

	/// Writes `offset` as a little-endian entry to the start of `dst`.
	pub fn write(&self, dst: &mut [u8], offset: usize) -> Result<()> {
		self.check(offset)?;
		match self {
			OffsetWidth::U8 => dst[0] = offset as u8,
			OffsetWidth::U16 => dst[..2].copy_from_slice(&(offset as u16).to_le_bytes()),
			OffsetWidth::U32 => dst[..4].copy_from_slice(&(offset as u32).to_le_bytes()),
		}
		Ok(())
	}
}

impl Default for OffsetWidth {
	fn default() -> Self {
		OffsetWidth::U16
	}
}

impl TryFrom<u8> for OffsetWidth {
	type Error = ConfigError;

	fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
		match value {
			1 => Ok(OffsetWidth::U8),
			2 => Ok(OffsetWidth::U16),
			4 => Ok(OffsetWidth::U32),
			other => Err(ConfigError::OffsetWidth(other)),
		}
	}
}

impl From<OffsetWidth> for u8 {
	fn from(width: OffsetWidth) -> Self {
		width.bytes() as u8
	}
}
