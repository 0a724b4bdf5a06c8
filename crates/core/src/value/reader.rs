// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use rowcodec_type::{Value, ordered};

use crate::{
	element::ElementsMut,
	error::{Error, Result},
	layout::{Group, Table, ValueColumn, ValueLocator},
	status::ReadStatus,
	value::null,
};

fn check_header(table: &Table, record: &[u8]) -> Result<()> {
	if record.len() < table.dynamic_section_start {
		return Err(Error::corrupt(Group::Value, "record is shorter than its header"));
	}
	Ok(())
}

/// Byte range of a non-null column. Variable columns end where the next
/// variable column starts, the last one ends with the record.
fn extent(table: &Table, column: &ValueColumn, record: &[u8]) -> Result<Range<usize>> {
	let slot = match column.locator {
		ValueLocator::Static(offset) => return Ok(offset..offset + column.max_size()),
		ValueLocator::Slot(slot) => slot,
	};

	let width = table.offset_width;
	let start = width.read(&record[slot..]);
	let end = match column.next_slot {
		Some(next) => width.read(&record[next..]),
		None => record.len(),
	};

	if start < table.dynamic_section_start || start > end || end > record.len() {
		return Err(Error::corrupt(Group::Value, format!("offset table entry {start}..{end} is out of range")));
	}
	if (end - start) % column.element_size() != 0 {
		return Err(Error::corrupt(Group::Value, "column data is not a whole number of elements"));
	}
	Ok(start..end)
}

/// Looks up a column, `None` when it is null.
fn column<'t>(table: &'t Table, index: usize, record: &[u8]) -> Result<Option<&'t ValueColumn>> {
	let column = table.value(index)?;
	check_header(table, record)?;
	if null::is_null(&record[..table.bitvec_size], index) {
		return Ok(None);
	}
	Ok(Some(column))
}

pub fn is_null(table: &Table, index: usize, record: &[u8]) -> Result<bool> {
	Ok(column(table, index, record)?.is_none())
}

/// Raw little-endian bytes of value column `index`, `None` when it is null.
pub fn bytes<'r>(table: &Table, index: usize, record: &'r [u8]) -> Result<Option<&'r [u8]>> {
	match column(table, index, record)? {
		Some(column) => Ok(Some(&record[extent(table, column, record)?])),
		None => Ok(None),
	}
}

/// Element count of value column `index`, `None` when it is null.
pub fn len(table: &Table, index: usize, record: &[u8]) -> Result<Option<usize>> {
	match column(table, index, record)? {
		Some(column) => Ok(Some(extent(table, column, record)?.len() / column.element_size())),
		None => Ok(None),
	}
}

/// Copies value column `index` into `out`, as many elements as fit.
///
/// A null column reports [`ReadStatus::Absent`] without its offset table
/// entry being looked at.
pub fn read<V: ElementsMut + ?Sized>(table: &Table, index: usize, record: &[u8], out: &mut V) -> Result<ReadStatus> {
	let expected = table.value(index)?.r#type;
	if out.element_type() != expected {
		return Err(Error::TypeMismatch {
			group: Group::Value,
			index,
			expected,
			actual: out.element_type(),
		});
	}

	let Some(column) = column(table, index, record)? else {
		return Ok(ReadStatus::Absent);
	};

	let data = &record[extent(table, column, record)?];
	let size = column.element_size();
	let status = ReadStatus::new(data.len() / size, out.capacity());

	for (i, src) in data.chunks_exact(size).take(status.copied()).enumerate() {
		out.read_raw(i, src);
	}
	Ok(status)
}

/// Decodes value column `index` into owned values, `None` when it is null.
pub fn values(table: &Table, index: usize, record: &[u8]) -> Result<Option<Vec<Value>>> {
	let Some(column) = column(table, index, record)? else {
		return Ok(None);
	};
	let data = &record[extent(table, column, record)?];
	Ok(Some(data.chunks_exact(column.element_size()).map(|src| ordered::read_value(column.r#type, src)).collect()))
}
