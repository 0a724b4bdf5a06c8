// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Serializable table definitions.
//!
//! ```json
//! {
//!   "key": [{ "type": "i32" }, { "type": "u8", "len": 16, "fixed": false, "direction": "desc" }],
//!   "value": [{ "type": "float8" }],
//!   "offset_width": 2
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
	error::ConfigError,
	layout::{ColumnDef, OffsetWidth, Table},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
	pub key: Vec<ColumnDef>,
	#[serde(default)]
	pub value: Vec<ColumnDef>,
	#[serde(default)]
	pub offset_width: OffsetWidth,
}

impl TableDef {
	pub fn new(key: Vec<ColumnDef>, value: Vec<ColumnDef>, offset_width: OffsetWidth) -> Self {
		Self {
			key,
			value,
			offset_width,
		}
	}

	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		serde_json::from_str(json).map_err(|err| ConfigError::Malformed(err.to_string()))
	}

	pub fn to_json(&self) -> Result<String, ConfigError> {
		serde_json::to_string(self).map_err(|err| ConfigError::Malformed(err.to_string()))
	}

	pub fn compile(&self) -> Result<Table, ConfigError> {
		Table::compile(&self.key, &self.value, self.offset_width)
	}
}

#[cfg(test)]
pub mod tests {
	use rowcodec_type::Type;

	use crate::{
		config::TableDef,
		error::ConfigError,
		layout::{ColumnDef, Group, OffsetWidth, SortDirection},
	};

	#[test]
	fn test_from_json() {
		let def = TableDef::from_json(
			r#"{
				"key": [
					{ "type": "i32" },
					{ "type": "uint1", "len": 16, "fixed": false, "direction": "desc" }
				],
				"value": [{ "type": "f64", "len": 3 }],
				"offset_width": 1
			}"#,
		)
		.unwrap();

		assert_eq!(
			def,
			TableDef::new(
				vec![ColumnDef::scalar(Type::Int4), ColumnDef::varsize(Type::Uint1, 16).desc()],
				vec![ColumnDef::array(Type::Float8, 3)],
				OffsetWidth::U8,
			)
		);
		assert_eq!(def.key[1].direction, SortDirection::Desc);
	}

	#[test]
	fn test_defaults() {
		let def = TableDef::from_json(r#"{ "key": [{ "type": "u64" }] }"#).unwrap();
		assert!(def.value.is_empty());
		assert_eq!(def.offset_width, OffsetWidth::U16);
		assert_eq!(def.key[0], ColumnDef::scalar(Type::Uint8));
	}

	#[test]
	fn test_malformed() {
		assert!(matches!(TableDef::from_json(r#"{ "key": [{ "type": "i128" }] }"#), Err(ConfigError::Malformed(_))));
		assert!(matches!(
			TableDef::from_json(r#"{ "key": [{ "type": "i8" }], "offset_width": 3 }"#),
			Err(ConfigError::Malformed(_))
		));
		assert!(matches!(TableDef::from_json("[]"), Err(ConfigError::Malformed(_))));
	}

	#[test]
	fn test_json_round_trip() {
		let def = TableDef::new(
			vec![ColumnDef::varsize(Type::Int2, 4)],
			vec![ColumnDef::scalar(Type::Float4)],
			OffsetWidth::U32,
		);
		let json = def.to_json().unwrap();
		assert_eq!(TableDef::from_json(&json).unwrap(), def);
	}

	#[test]
	fn test_compile() {
		let def = TableDef::from_json(r#"{ "key": [], "value": [{ "type": "u8" }] }"#).unwrap();
		assert_eq!(def.compile(), Err(ConfigError::NoKeyColumns));

		let def = TableDef::from_json(r#"{ "key": [{ "type": "u8" }], "value": [{ "type": "u8" }] }"#).unwrap();
		let table = def.compile().unwrap();
		assert_eq!(table.dynamic_section_start, 2);
	}

	#[test]
	fn test_huge_length_is_rejected() {
		let def = TableDef::from_json(r#"{ "key": [{ "type": "u64", "len": 4611686018427387904 }] }"#).unwrap();
		assert_eq!(
			def.compile(),
			Err(ConfigError::ColumnTooLarge {
				group: Group::Key,
				index: 0
			})
		);
	}
}
