// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::r#type::Type;

pub trait GetType {
	fn get_type() -> Type;
}

macro_rules! impl_get_type {
	($($native:ty => $variant:ident),* $(,)?) => {
		$(
			impl GetType for $native {
				fn get_type() -> Type {
					Type::$variant
				}
			}
		)*
	};
}

impl_get_type! {
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	f32 => Float4,
	f64 => Float8,
}
