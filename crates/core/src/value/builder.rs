// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::trace;

use crate::{
	cursor::Cursor,
	element::Elements,
	error::{Error, Result},
	layout::{Group, Table, ValueColumn, ValueLocator},
	value::null,
};

/// Append-only writer for a value record.
///
/// Columns are written in ascending index order. Indices may be skipped,
/// skipped columns and columns never written before [`finish`](Self::finish)
/// are stored as null.
pub struct ValueBuilder<'a> {
	table: &'a Table,
	cursor: Cursor<'a>,
	next: usize,
}

impl<'a> ValueBuilder<'a> {
	/// Starts a record in `buf`. The header (null bitmap, fixed columns and
	/// offset table) is zeroed, variable data is appended after it.
	pub fn new(table: &'a Table, buf: &'a mut [u8]) -> Result<Self> {
		let header = table.dynamic_section_start;
		if buf.len() < header {
			return Err(Error::OutOfBounds {
				needed: header,
				capacity: buf.len(),
			});
		}
		buf[..header].fill(0);

		Ok(Self {
			table,
			cursor: Cursor::at(buf, header),
			next: 0,
		})
	}

	/// Bytes written so far, header included.
	pub fn position(&self) -> usize {
		self.cursor.position()
	}

	pub fn append<V: Elements + ?Sized>(&mut self, index: usize, values: &V) -> Result<&mut Self> {
		self.put(index, Some(values))
	}

	pub fn append_null(&mut self, index: usize) -> Result<&mut Self> {
		self.put::<[u8]>(index, None)
	}

	/// Completes the record and returns its size in bytes.
	pub fn finish(mut self) -> Result<usize> {
		let end = self.cursor.position();
		for index in self.next..self.table.values.len() {
			self.write_null(index, end)?;
		}
		Ok(self.cursor.position())
	}

	fn put<V: Elements + ?Sized>(&mut self, index: usize, values: Option<&V>) -> Result<&mut Self> {
		if index < self.next {
			return Err(Error::OutOfOrder {
				group: Group::Value,
				index,
				expected: self.next,
			});
		}

		let table: &'a Table = self.table;
		let column = table.value(index)?;
		if let Some(values) = values {
			if values.element_type() != column.r#type {
				return Err(Error::TypeMismatch {
					group: Group::Value,
					index,
					expected: column.r#type,
					actual: values.element_type(),
				});
			}
		}

		// nothing is written until the column is known to fit
		let start = self.cursor.position();
		match values {
			Some(values) => self.write(index, column, values)?,
			None => self.write_null(index, start)?,
		}
		for skipped in self.next..index {
			self.write_null(skipped, start)?;
		}

		self.next = index + 1;
		Ok(self)
	}

	fn write<V: Elements + ?Sized>(&mut self, index: usize, column: &ValueColumn, values: &V) -> Result<()> {
		let size = column.element_size();
		let len = values.count().min(column.len);

		match column.locator {
			ValueLocator::Static(offset) => {
				let region = self.cursor.region(offset, column.max_size())?;
				for (i, dst) in region.chunks_exact_mut(size).take(len).enumerate() {
					values.write_raw(i, dst);
				}
				region[len * size..].fill(0);
			}
			ValueLocator::Slot(slot) => {
				let start = self.cursor.position();
				self.table.offset_width.check(start)?;
				let region = self.cursor.claim(len * size)?;
				for (i, dst) in region.chunks_exact_mut(size).enumerate() {
					values.write_raw(i, dst);
				}
				self.write_offset(slot, start)?;
			}
		}

		self.set_null(index, false)?;
		trace!(index, len, "value column appended");
		Ok(())
	}

	fn write_null(&mut self, index: usize, offset: usize) -> Result<()> {
		let column = self.table.value(index)?;
		// a null variable column is empty, so the preceding one still ends here
		if let ValueLocator::Slot(slot) = column.locator {
			self.write_offset(slot, offset)?;
		}
		self.set_null(index, true)?;
		trace!(index, "value column null");
		Ok(())
	}

	fn write_offset(&mut self, slot: usize, offset: usize) -> Result<()> {
		let width = self.table.offset_width;
		width.write(self.cursor.region(slot, width.bytes())?, offset)
	}

	fn set_null(&mut self, index: usize, is_null: bool) -> Result<()> {
		let bitvec = self.cursor.region(0, self.table.bitvec_size)?;
		null::set_null(bitvec, index, is_null);
		Ok(())
	}
}
