// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Outcome of reading a column into a caller buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
	/// The value column is null, nothing was copied.
	Absent,
	/// All `len` elements were copied.
	Complete(usize),
	/// The output held only `copied` of the column's `len` elements.
	Truncated {
		copied: usize,
		len: usize,
	},
}

impl ReadStatus {
	pub(crate) fn new(len: usize, capacity: usize) -> Self {
		if len > capacity {
			ReadStatus::Truncated {
				copied: capacity,
				len,
			}
		} else {
			ReadStatus::Complete(len)
		}
	}

	pub fn is_absent(&self) -> bool {
		matches!(self, ReadStatus::Absent)
	}

	pub fn is_truncated(&self) -> bool {
		matches!(self, ReadStatus::Truncated { .. })
	}

	/// Number of elements written to the output.
	pub fn copied(&self) -> usize {
		match self {
			ReadStatus::Absent => 0,
			ReadStatus::Complete(len) => *len,
			ReadStatus::Truncated {
				copied,
				..
			} => *copied,
		}
	}

	/// True element count of the column, `None` when it is null.
	pub fn len(&self) -> Option<usize> {
		match self {
			ReadStatus::Absent => None,
			ReadStatus::Complete(len) => Some(*len),
			ReadStatus::Truncated {
				len,
				..
			} => Some(*len),
		}
	}
}
