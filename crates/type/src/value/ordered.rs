// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Byte-level transcoding for callers that only know a column's [`Type`] at
//! runtime. Raw elements are little-endian, ordered elements use the
//! encodings documented on [`Scalar`].

use crate::value::{Value, r#type::Type, scalar::Scalar};

macro_rules! dispatch {
	($ty:expr, $t:ident => $body:expr) => {
		match $ty {
			Type::Int1 => {
				type $t = i8;
				$body
			}
			Type::Int2 => {
				type $t = i16;
				$body
			}
			Type::Int4 => {
				type $t = i32;
				$body
			}
			Type::Int8 => {
				type $t = i64;
				$body
			}
			Type::Uint1 => {
				type $t = u8;
				$body
			}
			Type::Uint2 => {
				type $t = u16;
				$body
			}
			Type::Uint4 => {
				type $t = u32;
				$body
			}
			Type::Uint8 => {
				type $t = u64;
				$body
			}
			Type::Float4 => {
				type $t = f32;
				$body
			}
			Type::Float8 => {
				type $t = f64;
				$body
			}
		}
	};
}

/// Encodes one raw element of `ty` into its ordered form.
pub fn encode(ty: Type, raw: &[u8], dst: &mut [u8]) {
	dispatch!(ty, T => T::read_le(raw).encode_ordered(dst))
}

/// Decodes one ordered element of `ty` back into its raw form.
pub fn decode(ty: Type, src: &[u8], raw: &mut [u8]) {
	dispatch!(ty, T => T::decode_ordered(src).write_le(raw))
}

/// See [`Scalar::is_separator`].
pub fn is_separator(ty: Type, raw: &[u8]) -> bool {
	dispatch!(ty, T => T::read_le(raw).is_separator())
}

pub fn decode_value(ty: Type, src: &[u8]) -> Value {
	dispatch!(ty, T => T::decode_ordered(src).into_value())
}

pub fn read_value(ty: Type, raw: &[u8]) -> Value {
	dispatch!(ty, T => T::read_le(raw).into_value())
}

/// Bitwise complement in place, used for descending key columns.
pub fn invert(bytes: &mut [u8]) {
	for byte in bytes {
		*byte = !*byte;
	}
}
