// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// Scalar element types a column can be declared with.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
	/// A 1-byte signed integer
	#[serde(alias = "i8")]
	Int1,
	/// A 2-byte signed integer
	#[serde(alias = "i16")]
	Int2,
	/// A 4-byte signed integer
	#[serde(alias = "i32")]
	Int4,
	/// An 8-byte signed integer
	#[serde(alias = "i64")]
	Int8,
	/// A 1-byte unsigned integer
	#[serde(alias = "u8")]
	Uint1,
	/// A 2-byte unsigned integer
	#[serde(alias = "u16")]
	Uint2,
	/// A 4-byte unsigned integer
	#[serde(alias = "u32")]
	Uint4,
	/// An 8-byte unsigned integer
	#[serde(alias = "u64")]
	Uint8,
	/// A 4-byte floating point
	#[serde(alias = "f32")]
	Float4,
	/// An 8-byte floating point
	#[serde(alias = "f64")]
	Float8,
}

impl Type {
	pub const ALL: [Type; 10] = [
		Type::Int1,
		Type::Int2,
		Type::Int4,
		Type::Int8,
		Type::Uint1,
		Type::Uint2,
		Type::Uint4,
		Type::Uint8,
		Type::Float4,
		Type::Float8,
	];

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}
}

impl Type {
	/// Size of a single element in bytes.
	pub const fn size(&self) -> usize {
		match self {
			Type::Int1 | Type::Uint1 => 1,
			Type::Int2 | Type::Uint2 => 2,
			Type::Int4 | Type::Uint4 | Type::Float4 => 4,
			Type::Int8 | Type::Uint8 | Type::Float8 => 8,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
		}
	}
}

impl FromStr for Type {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_uppercase().as_str() {
			"INT1" | "I8" => Ok(Type::Int1),
			"INT2" | "I16" => Ok(Type::Int2),
			"INT4" | "I32" => Ok(Type::Int4),
			"INT8" | "I64" => Ok(Type::Int8),
			"UINT1" | "U8" => Ok(Type::Uint1),
			"UINT2" | "U16" => Ok(Type::Uint2),
			"UINT4" | "U32" => Ok(Type::Uint4),
			"UINT8" | "U64" => Ok(Type::Uint8),
			"FLOAT4" | "F32" => Ok(Type::Float4),
			"FLOAT8" | "F64" => Ok(Type::Float8),
			_ => Err(()),
		}
	}
}
