// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Native scalars and their two wire forms.
//!
//! Every scalar has an *ordered* form used inside keys, where an unsigned
//! byte-wise comparison of two encodings agrees with the numeric comparison of
//! the values, and a *raw* form used inside value records, which is plain
//! little-endian.
//!
//! * unsigned integers: big-endian.
//! * signed integers: big-endian, sign bit flipped.
//! * floats: big-endian, sign bit flipped, all bits flipped if negative. NaN is
//!   canonicalised to the positive quiet NaN first, so every NaN encodes the
//!   same way and sorts after `+inf`.

use std::fmt::Debug;

use crate::value::{Value, r#type::GetType};

mod private {
	pub trait Sealed {}
}

pub trait Scalar: GetType + Copy + Default + PartialEq + Debug + private::Sealed + 'static {
	/// Element size in bytes.
	const SIZE: usize;

	/// Writes the order-preserving encoding into the first `SIZE` bytes of `dst`.
	fn encode_ordered(self, dst: &mut [u8]);

	/// Inverse of [`Scalar::encode_ordered`], reading the first `SIZE` bytes of `src`.
	fn decode_ordered(src: &[u8]) -> Self;

	fn write_le(self, dst: &mut [u8]);

	fn read_le(src: &[u8]) -> Self;

	fn into_value(self) -> Value;

	/// Whether `self` ends a terminated key column: its raw form is all zero
	/// bytes, or its ordered form is and would read back as the terminator.
	fn is_separator(self) -> bool {
		let mut buf = [0u8; 8];
		self.write_le(&mut buf[..Self::SIZE]);
		if buf[..Self::SIZE].iter().all(|b| *b == 0) {
			return true;
		}
		self.encode_ordered(&mut buf[..Self::SIZE]);
		buf[..Self::SIZE].iter().all(|b| *b == 0)
	}
}

macro_rules! impl_unsigned {
	($($native:ty => $variant:ident),* $(,)?) => {
		$(
			impl private::Sealed for $native {}

			impl Scalar for $native {
				const SIZE: usize = size_of::<$native>();

				#[inline]
				fn encode_ordered(self, dst: &mut [u8]) {
					dst[..Self::SIZE].copy_from_slice(&self.to_be_bytes());
				}

				#[inline]
				fn decode_ordered(src: &[u8]) -> Self {
					let mut buf = [0u8; size_of::<$native>()];
					buf.copy_from_slice(&src[..Self::SIZE]);
					<$native>::from_be_bytes(buf)
				}

				#[inline]
				fn write_le(self, dst: &mut [u8]) {
					dst[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
				}

				#[inline]
				fn read_le(src: &[u8]) -> Self {
					let mut buf = [0u8; size_of::<$native>()];
					buf.copy_from_slice(&src[..Self::SIZE]);
					<$native>::from_le_bytes(buf)
				}

				fn into_value(self) -> Value {
					Value::$variant(self)
				}
			}
		)*
	};
}

macro_rules! impl_signed {
	($($native:ty, $unsigned:ty => $variant:ident),* $(,)?) => {
		$(
			impl private::Sealed for $native {}

			impl Scalar for $native {
				const SIZE: usize = size_of::<$native>();

				#[inline]
				fn encode_ordered(self, dst: &mut [u8]) {
					let flipped = (self as $unsigned) ^ (1 << (<$unsigned>::BITS - 1));
					dst[..Self::SIZE].copy_from_slice(&flipped.to_be_bytes());
				}

				#[inline]
				fn decode_ordered(src: &[u8]) -> Self {
					let mut buf = [0u8; size_of::<$native>()];
					buf.copy_from_slice(&src[..Self::SIZE]);
					(<$unsigned>::from_be_bytes(buf) ^ (1 << (<$unsigned>::BITS - 1))) as $native
				}

				#[inline]
				fn write_le(self, dst: &mut [u8]) {
					dst[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
				}

				#[inline]
				fn read_le(src: &[u8]) -> Self {
					let mut buf = [0u8; size_of::<$native>()];
					buf.copy_from_slice(&src[..Self::SIZE]);
					<$native>::from_le_bytes(buf)
				}

				fn into_value(self) -> Value {
					Value::$variant(self)
				}
			}
		)*
	};
}

macro_rules! impl_float {
	($($native:ty, $bits:ty => $variant:ident),* $(,)?) => {
		$(
			impl private::Sealed for $native {}

			impl Scalar for $native {
				const SIZE: usize = size_of::<$native>();

				#[inline]
				fn encode_ordered(self, dst: &mut [u8]) {
					const SIGN: $bits = 1 << (<$bits>::BITS - 1);
					let bits = if self.is_nan() {
						<$native>::NAN.to_bits()
					} else {
						self.to_bits()
					};
					let bits = if bits & SIGN != 0 {
						!bits
					} else {
						bits ^ SIGN
					};
					dst[..Self::SIZE].copy_from_slice(&bits.to_be_bytes());
				}

				#[inline]
				fn decode_ordered(src: &[u8]) -> Self {
					const SIGN: $bits = 1 << (<$bits>::BITS - 1);
					let mut buf = [0u8; size_of::<$native>()];
					buf.copy_from_slice(&src[..Self::SIZE]);
					let bits = <$bits>::from_be_bytes(buf);
					let bits = if bits & SIGN != 0 {
						bits ^ SIGN
					} else {
						!bits
					};
					<$native>::from_bits(bits)
				}

				#[inline]
				fn write_le(self, dst: &mut [u8]) {
					dst[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
				}

				#[inline]
				fn read_le(src: &[u8]) -> Self {
					let mut buf = [0u8; size_of::<$native>()];
					buf.copy_from_slice(&src[..Self::SIZE]);
					<$native>::from_le_bytes(buf)
				}

				fn into_value(self) -> Value {
					Value::$variant(self)
				}
			}
		)*
	};
}

impl_unsigned! {
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
}

impl_signed! {
	i8, u8 => Int1,
	i16, u16 => Int2,
	i32, u32 => Int4,
	i64, u64 => Int8,
}

impl_float! {
	f32, u32 => Float4,
	f64, u64 => Float8,
}
