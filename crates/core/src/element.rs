// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Adapters between caller data and column elements.
//!
//! Typed callers pass slices of native scalars. Callers that only know a
//! column's type at runtime pass little-endian bytes through [`Raw`] and
//! [`RawMut`].

use rowcodec_type::{Scalar, Type, ordered};

use crate::error::{Error, Result};

/// Column elements to be written.
pub trait Elements {
	fn element_type(&self) -> Type;

	fn count(&self) -> usize;

	fn encode_ordered(&self, index: usize, dst: &mut [u8]);

	fn write_raw(&self, index: usize, dst: &mut [u8]);

	/// Whether element `index` ends a terminated key column.
	fn is_separator(&self, index: usize) -> bool;
}

/// Output buffer for column elements being read.
pub trait ElementsMut {
	fn element_type(&self) -> Type;

	fn capacity(&self) -> usize;

	fn decode_ordered(&mut self, index: usize, src: &[u8]);

	fn read_raw(&mut self, index: usize, src: &[u8]);
}

impl<T: Scalar> Elements for [T] {
	fn element_type(&self) -> Type {
		T::get_type()
	}

	fn count(&self) -> usize {
		self.len()
	}

	fn encode_ordered(&self, index: usize, dst: &mut [u8]) {
		self[index].encode_ordered(dst)
	}

	fn write_raw(&self, index: usize, dst: &mut [u8]) {
		self[index].write_le(dst)
	}

	fn is_separator(&self, index: usize) -> bool {
		self[index].is_separator()
	}
}

impl<T: Scalar, const N: usize> Elements for [T; N] {
	fn element_type(&self) -> Type {
		T::get_type()
	}

	fn count(&self) -> usize {
		N
	}

	fn encode_ordered(&self, index: usize, dst: &mut [u8]) {
		self.as_slice().encode_ordered(index, dst)
	}

	fn write_raw(&self, index: usize, dst: &mut [u8]) {
		self.as_slice().write_raw(index, dst)
	}

	fn is_separator(&self, index: usize) -> bool {
		self.as_slice().is_separator(index)
	}
}

impl<T: Scalar> Elements for Vec<T> {
	fn element_type(&self) -> Type {
		T::get_type()
	}

	fn count(&self) -> usize {
		self.len()
	}

	fn encode_ordered(&self, index: usize, dst: &mut [u8]) {
		self.as_slice().encode_ordered(index, dst)
	}

	fn write_raw(&self, index: usize, dst: &mut [u8]) {
		self.as_slice().write_raw(index, dst)
	}

	fn is_separator(&self, index: usize) -> bool {
		self.as_slice().is_separator(index)
	}
}

impl<T: Scalar> ElementsMut for [T] {
	fn element_type(&self) -> Type {
		T::get_type()
	}

	fn capacity(&self) -> usize {
		self.len()
	}

	fn decode_ordered(&mut self, index: usize, src: &[u8]) {
		self[index] = T::decode_ordered(src);
	}

	fn read_raw(&mut self, index: usize, src: &[u8]) {
		self[index] = T::read_le(src);
	}
}

impl<T: Scalar, const N: usize> ElementsMut for [T; N] {
	fn element_type(&self) -> Type {
		T::get_type()
	}

	fn capacity(&self) -> usize {
		N
	}

	fn decode_ordered(&mut self, index: usize, src: &[u8]) {
		self.as_mut_slice().decode_ordered(index, src)
	}

	fn read_raw(&mut self, index: usize, src: &[u8]) {
		self.as_mut_slice().read_raw(index, src)
	}
}

/// Little-endian elements of a type known only at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Raw<'a> {
	r#type: Type,
	bytes: &'a [u8],
}

impl<'a> Raw<'a> {
	pub fn new(r#type: Type, bytes: &'a [u8]) -> Result<Self> {
		check_length(r#type, bytes.len())?;
		Ok(Self {
			r#type,
			bytes,
		})
	}

	fn element(&self, index: usize) -> &[u8] {
		let size = self.r#type.size();
		&self.bytes[index * size..(index + 1) * size]
	}
}

impl Elements for Raw<'_> {
	fn element_type(&self) -> Type {
		self.r#type
	}

	fn count(&self) -> usize {
		self.bytes.len() / self.r#type.size()
	}

	fn encode_ordered(&self, index: usize, dst: &mut [u8]) {
		ordered::encode(self.r#type, self.element(index), dst)
	}

	fn write_raw(&self, index: usize, dst: &mut [u8]) {
		let size = self.r#type.size();
		dst[..size].copy_from_slice(self.element(index))
	}

	fn is_separator(&self, index: usize) -> bool {
		ordered::is_separator(self.r#type, self.element(index))
	}
}

/// Output buffer of little-endian elements of a type known only at runtime.
#[derive(Debug)]
pub struct RawMut<'a> {
	r#type: Type,
	bytes: &'a mut [u8],
}

impl<'a> RawMut<'a> {
	pub fn new(r#type: Type, bytes: &'a mut [u8]) -> Result<Self> {
		check_length(r#type, bytes.len())?;
		Ok(Self {
			r#type,
			bytes,
		})
	}

	fn element_mut(&mut self, index: usize) -> &mut [u8] {
		let size = self.r#type.size();
		&mut self.bytes[index * size..(index + 1) * size]
	}
}

impl ElementsMut for RawMut<'_> {
	fn element_type(&self) -> Type {
		self.r#type
	}

	fn capacity(&self) -> usize {
		self.bytes.len() / self.r#type.size()
	}

	fn decode_ordered(&mut self, index: usize, src: &[u8]) {
		let r#type = self.r#type;
		ordered::decode(r#type, src, self.element_mut(index))
	}

	fn read_raw(&mut self, index: usize, src: &[u8]) {
		let size = self.r#type.size();
		self.element_mut(index).copy_from_slice(&src[..size])
	}
}

fn check_length(r#type: Type, len: usize) -> Result<()> {
	if len % r#type.size() != 0 {
		return Err(Error::RawLength {
			ty: r#type,
			len,
		});
	}
	Ok(())
}
