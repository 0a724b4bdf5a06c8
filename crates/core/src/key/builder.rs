// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowcodec_type::ordered;
use tracing::trace;

use crate::{
	cursor::Cursor,
	element::Elements,
	error::{Error, Result},
	layout::{Group, Table},
};

/// Append-only writer for a key record.
///
/// Columns are written in declared order, each exactly once. A terminated
/// variable-size column is cut at its first zero element, or first element
/// whose ordered encoding is all zero bytes, since that pattern terminates
/// the column. Such keys are not 8-bit clean.
pub struct KeyBuilder<'a> {
	table: &'a Table,
	cursor: Cursor<'a>,
	next: usize,
}

impl<'a> KeyBuilder<'a> {
	pub fn new(table: &'a Table, buf: &'a mut [u8]) -> Self {
		Self {
			table,
			cursor: Cursor::new(buf),
			next: 0,
		}
	}

	/// Bytes written so far.
	pub fn position(&self) -> usize {
		self.cursor.position()
	}

	pub fn append<V: Elements + ?Sized>(&mut self, index: usize, values: &V) -> Result<&mut Self> {
		if index != self.next {
			return Err(Error::OutOfOrder {
				group: Group::Key,
				index,
				expected: self.next,
			});
		}

		let column = self.table.key(index)?;
		if values.element_type() != column.r#type {
			return Err(Error::TypeMismatch {
				group: Group::Key,
				index,
				expected: column.r#type,
				actual: values.element_type(),
			});
		}

		let mut len = values.count().min(column.len);
		if column.terminated {
			if let Some(separator) = (0..len).find(|&i| values.is_separator(i)) {
				trace!(index, len, separator, "key column cut at embedded separator");
				len = separator;
			}
		}

		let elements = if column.fixed {
			column.len
		} else if column.terminated && len < column.len {
			len + 1
		} else {
			len
		};

		let size = column.element_size();
		let region = self.cursor.claim(elements * size)?;

		for (i, dst) in region.chunks_exact_mut(size).take(len).enumerate() {
			values.encode_ordered(i, dst);
		}
		region[len * size..].fill(0);

		if column.is_descending() {
			ordered::invert(region);
		}

		trace!(index, len, bytes = elements * size, "key column appended");
		self.next += 1;
		Ok(self)
	}

	/// Completes the record and returns its size in bytes.
	pub fn finish(self) -> Result<usize> {
		if self.next < self.table.keys.len() {
			return Err(Error::MissingKeyColumn {
				index: self.next,
			});
		}
		Ok(self.cursor.position())
	}
}
