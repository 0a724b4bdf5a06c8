// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use rowcodec_type::Type;
use serde::{Deserialize, Serialize};

/// Which half of a record a column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
	Key,
	Value,
}

impl Display for Group {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Group::Key => f.write_str("key"),
			Group::Value => f.write_str("value"),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

/// A column as declared by the caller, before layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDef {
	#[serde(rename = "type")]
	pub r#type: Type,
	/// Element count. For variable-size columns this is the maximum.
	#[serde(default = "default_len")]
	pub len: usize,
	/// Fixed-size columns always occupy `len` elements, zero-padded.
	#[serde(default = "default_fixed")]
	pub fixed: bool,
	#[serde(default)]
	pub direction: SortDirection,
}

fn default_len() -> usize {
	1
}

fn default_fixed() -> bool {
	true
}

impl ColumnDef {
	pub fn scalar(r#type: Type) -> Self {
		Self::array(r#type, 1)
	}

	pub fn array(r#type: Type, len: usize) -> Self {
		Self {
			r#type,
			len,
			fixed: true,
			direction: SortDirection::Asc,
		}
	}

	pub fn varsize(r#type: Type, max_len: usize) -> Self {
		Self {
			r#type,
			len: max_len,
			fixed: false,
			direction: SortDirection::Asc,
		}
	}

	pub fn desc(mut self) -> Self {
		self.direction = SortDirection::Desc;
		self
	}
}

/// Where a key column starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyLocator {
	/// Absolute byte offset, every preceding column is fixed-size.
	Static(usize),
	/// Found by walking the preceding columns.
	Scan,
}

/// Where a value column starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueLocator {
	/// Absolute byte offset inside the fixed section.
	Static(usize),
	/// Byte offset of the offset table entry that holds the data start.
	Slot(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyColumn {
	pub r#type: Type,
	pub len: usize,
	pub fixed: bool,
	pub direction: SortDirection,
	/// Variable-size column closed by a terminator element whenever it holds
	/// fewer than `len` elements.
	pub terminated: bool,
	pub locator: KeyLocator,
}

impl KeyColumn {
	pub const fn element_size(&self) -> usize {
		self.r#type.size()
	}

	pub const fn max_size(&self) -> usize {
		self.len * self.element_size()
	}

	pub fn is_descending(&self) -> bool {
		self.direction == SortDirection::Desc
	}

	/// Terminator byte as it appears in an encoded record.
	pub fn terminator(&self) -> u8 {
		match self.direction {
			SortDirection::Asc => 0x00,
			SortDirection::Desc => 0xFF,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueColumn {
	pub r#type: Type,
	pub len: usize,
	pub fixed: bool,
	pub locator: ValueLocator,
	/// Offset table entry of the following variable-size column, which marks
	/// where this column's data ends. `None` for fixed-size columns and for the
	/// last variable-size column, which ends with the record.
	pub next_slot: Option<usize>,
}

impl ValueColumn {
	pub const fn element_size(&self) -> usize {
		self.r#type.size()
	}

	pub const fn max_size(&self) -> usize {
		self.len * self.element_size()
	}
}
