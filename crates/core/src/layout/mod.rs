// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Physical placement of key and value columns.
//!
//! Key records: `[fixed columns][first variable column][columns found by scanning]`.
//!
//! Value records: `[null bitmap][fixed columns][offset table][variable data]`.
//! The offset table holds one entry per variable-size column, the data start
//! of that column. A variable column ends where the next one starts, the last
//! one ends with the record.

mod column;
mod offset;

use std::{ops::Deref, sync::Arc};

pub use column::{ColumnDef, Group, KeyColumn, KeyLocator, SortDirection, ValueColumn, ValueLocator};
pub use offset::OffsetWidth;
use tracing::{debug, instrument};

use crate::error::{ConfigError, Error, Result};

/// Upper bound on the number of columns in either group.
pub const MAX_COLUMNS: usize = u16::MAX as usize;

/// A compiled table layout. Immutable and cheap to clone, one instance is
/// meant to be shared by every record of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table(Arc<TableInner>);

impl Deref for Table {
	type Target = TableInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[derive(Debug, PartialEq, Eq)]
pub struct TableInner {
	pub keys: Vec<KeyColumn>,
	pub values: Vec<ValueColumn>,
	pub offset_width: OffsetWidth,
	/// size of the null bitmap in bytes
	pub bitvec_size: usize,
	/// first byte past the fixed-size value columns
	pub offset_table_start: usize,
	/// first byte of variable-size value data
	pub dynamic_section_start: usize,
}

impl Table {
	#[instrument(
		name = "layout::compile",
		level = "debug",
		skip_all,
		fields(keys = keys.len(), values = values.len())
	)]
	pub fn compile(
		keys: &[ColumnDef],
		values: &[ColumnDef],
		offset_width: OffsetWidth,
	) -> std::result::Result<Self, ConfigError> {
		if keys.is_empty() {
			return Err(ConfigError::NoKeyColumns);
		}
		check_group(Group::Key, keys)?;
		check_group(Group::Value, values)?;

		if let Some(index) = values.iter().position(|def| def.direction == SortDirection::Desc) {
			return Err(ConfigError::DescendingValue {
				index,
			});
		}

		let keys = layout_keys(keys);
		let inner = layout_values(keys, values, offset_width)?;

		debug!(
			max_key_size = inner.max_key_size(),
			max_value_size = inner.max_value_size(),
			dynamic_section_start = inner.dynamic_section_start,
			"compiled table layout"
		);

		Ok(Self(Arc::new(inner)))
	}
}

impl TableInner {
	pub fn key(&self, index: usize) -> Result<&KeyColumn> {
		self.keys.get(index).ok_or(Error::NoSuchColumn {
			group: Group::Key,
			index,
			count: self.keys.len(),
		})
	}

	pub fn value(&self, index: usize) -> Result<&ValueColumn> {
		self.values.get(index).ok_or(Error::NoSuchColumn {
			group: Group::Value,
			index,
			count: self.values.len(),
		})
	}

	/// Largest key record the table can produce.
	pub fn max_key_size(&self) -> usize {
		self.keys.iter().map(KeyColumn::max_size).sum()
	}

	/// Largest value record the table can produce.
	pub fn max_value_size(&self) -> usize {
		self.dynamic_section_start
			+ self.values.iter().filter(|column| !column.fixed).map(ValueColumn::max_size).sum::<usize>()
	}

	/// Number of variable-size value columns, which is also the number of
	/// offset table entries.
	pub fn offset_table_len(&self) -> usize {
		(self.dynamic_section_start - self.offset_table_start) / self.offset_width.bytes()
	}
}

fn check_group(group: Group, defs: &[ColumnDef]) -> std::result::Result<(), ConfigError> {
	if defs.len() > MAX_COLUMNS {
		return Err(ConfigError::TooManyColumns {
			group,
			count: defs.len(),
			max: MAX_COLUMNS,
		});
	}
	if let Some(index) = defs.iter().position(|def| def.len == 0) {
		return Err(ConfigError::ZeroLength {
			group,
			index,
		});
	}
	// every later offset and size sum stays below this bound
	defs.iter().enumerate().try_fold(0usize, |total, (index, def)| {
		def.len.checked_mul(def.r#type.size())
			.and_then(|size| total.checked_add(size))
			.filter(|total| *total <= isize::MAX as usize)
			.ok_or(ConfigError::ColumnTooLarge {
				group,
				index,
			})
	})?;
	Ok(())
}

fn layout_keys(defs: &[ColumnDef]) -> Vec<KeyColumn> {
	let last = defs.len() - 1;
	let mut offset = Some(0usize);

	defs.iter()
		.enumerate()
		.map(|(index, def)| {
			let locator = match offset {
				Some(offset) => KeyLocator::Static(offset),
				None => KeyLocator::Scan,
			};

			if def.fixed {
				offset = offset.map(|offset| offset + def.len * def.r#type.size());
			} else {
				offset = None;
			}

			KeyColumn {
				r#type: def.r#type,
				len: def.len,
				fixed: def.fixed,
				direction: def.direction,
				// the last ascending column runs to the end of the record
				terminated: !def.fixed && (index < last || def.direction == SortDirection::Desc),
				locator,
			}
		})
		.collect()
}

fn layout_values(
	keys: Vec<KeyColumn>,
	defs: &[ColumnDef],
	offset_width: OffsetWidth,
) -> std::result::Result<TableInner, ConfigError> {
	let bitvec_size = defs.len().div_ceil(8);

	let mut offset = bitvec_size;
	let mut locators = vec![ValueLocator::Static(0); defs.len()];

	for (index, def) in defs.iter().enumerate().filter(|(_, def)| def.fixed) {
		locators[index] = ValueLocator::Static(offset);
		offset += def.len * def.r#type.size();
	}

	let offset_table_start = offset;
	for (index, _) in defs.iter().enumerate().filter(|(_, def)| !def.fixed) {
		locators[index] = ValueLocator::Slot(offset);
		offset += offset_width.bytes();
	}
	let dynamic_section_start = offset;

	let mut values: Vec<ValueColumn> = defs
		.iter()
		.zip(locators)
		.map(|(def, locator)| ValueColumn {
			r#type: def.r#type,
			len: def.len,
			fixed: def.fixed,
			locator,
			next_slot: None,
		})
		.collect();

	let mut next_slot = None;
	for column in values.iter_mut().rev() {
		if let ValueLocator::Slot(slot) = column.locator {
			column.next_slot = next_slot;
			next_slot = Some(slot);
		}
	}

	// The last variable column starts furthest into the record, after every
	// other variable column at its maximum size.
	let varsize: Vec<&ValueColumn> = values.iter().filter(|column| !column.fixed).collect();
	if let Some((_, preceding)) = varsize.split_last() {
		let required = dynamic_section_start + preceding.iter().map(|column| column.max_size()).sum::<usize>();
		if required > offset_width.max_offset() {
			return Err(ConfigError::OffsetWidthTooSmall {
				width: offset_width.bytes(),
				required,
			});
		}
	}

	Ok(TableInner {
		keys,
		values,
		offset_width,
		bitvec_size,
		offset_table_start,
		dynamic_section_start,
	})
}
