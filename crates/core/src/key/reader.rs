// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use rowcodec_type::{Value, ordered};

use crate::{
	element::ElementsMut,
	error::{Error, Result},
	layout::{Group, KeyColumn, KeyLocator, Table},
	status::ReadStatus,
};

/// Physical placement of one key column inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Extent {
	start: usize,
	/// element count, excluding terminator and padding
	len: usize,
	/// bytes occupied, including terminator and padding
	size: usize,
}

impl Extent {
	fn data(&self, column: &KeyColumn) -> Range<usize> {
		self.start..self.start + self.len * column.element_size()
	}
}

fn extent(column: &KeyColumn, record: &[u8], start: usize) -> Result<Extent> {
	let size = column.element_size();
	let available = record.len().checked_sub(start).ok_or_else(|| Error::corrupt(Group::Key, "column starts past the end"))?;

	if column.fixed {
		if available < column.max_size() {
			return Err(Error::corrupt(Group::Key, "fixed-size column runs past the end"));
		}
		return Ok(Extent {
			start,
			len: column.len,
			size: column.max_size(),
		});
	}

	if !column.terminated {
		if available % size != 0 || available / size > column.len {
			return Err(Error::corrupt(Group::Key, "trailing column has an invalid length"));
		}
		return Ok(Extent {
			start,
			len: available / size,
			size: available,
		});
	}

	let terminator = column.terminator();
	let elements = &record[start..start + available.min(column.max_size())];
	match elements.chunks_exact(size).position(|element| element.iter().all(|b| *b == terminator)) {
		Some(len) => Ok(Extent {
			start,
			len,
			size: (len + 1) * size,
		}),
		None if elements.len() == column.max_size() => Ok(Extent {
			start,
			len: column.len,
			size: column.max_size(),
		}),
		None => Err(Error::corrupt(Group::Key, "missing terminator")),
	}
}

/// Start of key column `index`, walking the preceding columns when its
/// position depends on their contents.
fn position(table: &Table, index: usize, record: &[u8]) -> Result<usize> {
	let column = table.key(index)?;
	if let KeyLocator::Static(offset) = column.locator {
		return Ok(offset);
	}

	let mut position = 0;
	for preceding in &table.keys[..index] {
		if let KeyLocator::Static(offset) = preceding.locator {
			position = offset;
		}
		position += extent(preceding, record, position)?.size;
	}
	Ok(position)
}

fn decode_into<V: ElementsMut + ?Sized>(
	column: &KeyColumn,
	extent: Extent,
	record: &[u8],
	index: usize,
	out: &mut V,
) -> Result<ReadStatus> {
	if out.element_type() != column.r#type {
		return Err(Error::TypeMismatch {
			group: Group::Key,
			index,
			expected: column.r#type,
			actual: out.element_type(),
		});
	}

	let status = ReadStatus::new(extent.len, out.capacity());
	let size = column.element_size();
	let mut element = [0u8; 8];

	for (i, src) in record[extent.data(column)].chunks_exact(size).take(status.copied()).enumerate() {
		let element = &mut element[..size];
		element.copy_from_slice(src);
		if column.is_descending() {
			ordered::invert(element);
		}
		out.decode_ordered(i, element);
	}

	Ok(status)
}

fn decode_values(column: &KeyColumn, extent: Extent, record: &[u8]) -> Vec<Value> {
	let size = column.element_size();
	let mut element = [0u8; 8];

	record[extent.data(column)]
		.chunks_exact(size)
		.map(|src| {
			let element = &mut element[..size];
			element.copy_from_slice(src);
			if column.is_descending() {
				ordered::invert(element);
			}
			ordered::decode_value(column.r#type, element)
		})
		.collect()
}

/// Byte range of key column `index`, excluding terminator and padding.
pub fn locate(table: &Table, index: usize, record: &[u8]) -> Result<Range<usize>> {
	let column = table.key(index)?;
	let start = position(table, index, record)?;
	Ok(extent(column, record, start)?.data(column))
}

/// Element count of key column `index`.
pub fn len(table: &Table, index: usize, record: &[u8]) -> Result<usize> {
	let column = table.key(index)?;
	let start = position(table, index, record)?;
	Ok(extent(column, record, start)?.len)
}

/// Decodes key column `index` into `out`, copying as many elements as fit.
///
/// Columns behind a variable-size column are found by scanning, which is
/// linear in the column index. Use [`KeyReader`] to read several columns.
pub fn read<V: ElementsMut + ?Sized>(table: &Table, index: usize, record: &[u8], out: &mut V) -> Result<ReadStatus> {
	let column = table.key(index)?;
	let start = position(table, index, record)?;
	let extent = extent(column, record, start)?;
	decode_into(column, extent, record, index, out)
}

/// Sequential reader over the columns of a key record.
#[derive(Debug, Clone)]
pub struct KeyReader<'a> {
	table: &'a Table,
	record: &'a [u8],
	index: usize,
	position: usize,
}

impl<'a> KeyReader<'a> {
	pub fn new(table: &'a Table, record: &'a [u8]) -> Self {
		Self {
			table,
			record,
			index: 0,
			position: 0,
		}
	}

	/// Index of the column the next read returns.
	pub fn index(&self) -> usize {
		self.index
	}

	pub fn is_done(&self) -> bool {
		self.index >= self.table.keys.len()
	}

	fn advance(&mut self) -> Result<(usize, &'a KeyColumn, Extent)> {
		let table: &'a Table = self.table;
		let index = self.index;
		let column = table.key(index)?;
		let start = match column.locator {
			KeyLocator::Static(offset) => offset,
			KeyLocator::Scan => self.position,
		};
		let extent = extent(column, self.record, start)?;
		self.position = start + extent.size;
		self.index += 1;
		Ok((index, column, extent))
	}

	pub fn next<V: ElementsMut + ?Sized>(&mut self, out: &mut V) -> Result<ReadStatus> {
		let (index, column, extent) = self.advance()?;
		decode_into(column, extent, self.record, index, out)
	}

	/// Decodes the next column into owned values.
	pub fn next_values(&mut self) -> Result<Vec<Value>> {
		let (_, column, extent) = self.advance()?;
		Ok(decode_values(column, extent, self.record))
	}

	pub fn skip(&mut self) -> Result<()> {
		self.advance().map(|_| ())
	}
}
