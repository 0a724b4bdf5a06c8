// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowcodec_type::Type;

use crate::layout::Group;

pub type Result<T> = std::result::Result<T, Error>;

/// A malformed table definition, reported when the table is compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	#[error("table must declare at least one key column")]
	NoKeyColumns,

	#[error("{group} column {index} declares a length of zero")]
	ZeroLength {
		group: Group,
		index: usize,
	},

	#[error("value column {index} is descending, only key columns have a sort direction")]
	DescendingValue {
		index: usize,
	},

	#[error("{group} declares {count} columns, at most {max} are supported")]
	TooManyColumns {
		group: Group,
		count: usize,
		max: usize,
	},

	#[error("{group} column {index} does not fit a record, its group exceeds {max} bytes", max = isize::MAX)]
	ColumnTooLarge {
		group: Group,
		index: usize,
	},

	#[error("offset table entries must be 1, 2 or 4 bytes wide, got {0}")]
	OffsetWidth(u8),

	#[error("{width} byte offset table entries cannot address offset {required}")]
	OffsetWidthTooSmall {
		width: usize,
		required: usize,
	},

	#[error("malformed table definition: {0}")]
	Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("writing {needed} bytes exceeds the record capacity of {capacity} bytes")]
	OutOfBounds {
		needed: usize,
		capacity: usize,
	},

	#[error("{group} column {index} does not exist, the table has {count}")]
	NoSuchColumn {
		group: Group,
		index: usize,
		count: usize,
	},

	#[error("{group} column {index} holds {expected}, got {actual}")]
	TypeMismatch {
		group: Group,
		index: usize,
		expected: Type,
		actual: Type,
	},

	#[error("{group} column {index} appended out of order, expected column {expected}")]
	OutOfOrder {
		group: Group,
		index: usize,
		expected: usize,
	},

	#[error("key column {index} was never written")]
	MissingKeyColumn {
		index: usize,
	},

	#[error("{len} raw bytes are not a whole number of {ty} elements")]
	RawLength {
		ty: Type,
		len: usize,
	},

	#[error("offset {offset} does not fit a {width} byte offset table entry")]
	OffsetOverflow {
		offset: usize,
		width: usize,
	},

	#[error("corrupt {group} record: {reason}")]
	Corrupt {
		group: Group,
		reason: String,
	},
}

impl Error {
	pub(crate) fn corrupt(group: Group, reason: impl Into<String>) -> Self {
		Error::Corrupt {
			group,
			reason: reason.into(),
		}
	}
}
