// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::{Error, Result};

/// Forward-only write position over a caller-owned record buffer.
///
/// Every region is bounds-checked before it is handed out, so a write that
/// would not fit fails without touching the buffer.
#[derive(Debug)]
pub struct Cursor<'a> {
	buf: &'a mut [u8],
	position: usize,
}

impl<'a> Cursor<'a> {
	pub fn new(buf: &'a mut [u8]) -> Self {
		Self::at(buf, 0)
	}

	pub fn at(buf: &'a mut [u8], position: usize) -> Self {
		debug_assert!(position <= buf.len());
		Self {
			buf,
			position,
		}
	}

	pub fn position(&self) -> usize {
		self.position
	}

	/// Claims the next `len` bytes and advances past them.
	pub fn claim(&mut self, len: usize) -> Result<&mut [u8]> {
		let start = self.position;
		let end = self.check(start, len)?;
		self.position = end;
		Ok(&mut self.buf[start..end])
	}

	/// Region at an absolute offset, leaving the position untouched.
	pub fn region(&mut self, offset: usize, len: usize) -> Result<&mut [u8]> {
		let end = self.check(offset, len)?;
		Ok(&mut self.buf[offset..end])
	}

	fn check(&self, offset: usize, len: usize) -> Result<usize> {
		match offset.checked_add(len) {
			Some(end) if end <= self.buf.len() => Ok(end),
			_ => Err(Error::OutOfBounds {
				needed: offset.saturating_add(len),
				capacity: self.buf.len(),
			}),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use crate::{cursor::Cursor, error::Error};

	#[test]
	fn test_claim_advances() {
		let mut buf = [0u8; 8];
		let mut cursor = Cursor::new(&mut buf);
		cursor.claim(3).unwrap().copy_from_slice(&[1, 2, 3]);
		assert_eq!(cursor.position(), 3);
		cursor.claim(5).unwrap()[0] = 4;
		assert_eq!(cursor.position(), 8);
		assert!(cursor.claim(1).is_err());
		assert_eq!(cursor.claim(0).unwrap().len(), 0);
		assert_eq!(buf, [1, 2, 3, 4, 0, 0, 0, 0]);
	}

	#[test]
	fn test_claim_past_capacity_fails_without_advancing() {
		let mut buf = [0u8; 4];
		let mut cursor = Cursor::at(&mut buf, 2);
		assert_eq!(
			cursor.claim(3),
			Err(Error::OutOfBounds {
				needed: 5,
				capacity: 4
			})
		);
		assert_eq!(cursor.position(), 2);
	}

	#[test]
	fn test_region() {
		let mut buf = [0u8; 4];
		let mut cursor = Cursor::at(&mut buf, 4);
		cursor.region(1, 2).unwrap().fill(7);
		assert!(cursor.region(3, 2).is_err());
		assert_eq!(cursor.position(), 4);
		assert_eq!(buf, [0, 7, 7, 0]);
	}
}
