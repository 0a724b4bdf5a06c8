// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Human readable rendering of encoded records, one line per column:
//!
//! ```text
//! 0: Int4 = -42
//! 1: Uint1 = [104, 105]
//! 2: Float8 = null
//! ```

use std::fmt::Write;

use rowcodec_type::{Type, Value};

use crate::{error::Result, key::KeyReader, layout::Table, value};

pub fn key(table: &Table, record: &[u8]) -> Result<String> {
	let mut result = String::new();
	let mut reader = KeyReader::new(table, record);
	while !reader.is_done() {
		let index = reader.index();
		let column = table.key(index)?;
		let values = reader.next_values()?;
		line(&mut result, index, column.r#type, column.fixed && column.len == 1, Some(&values));
	}
	Ok(result)
}

pub fn value(table: &Table, record: &[u8]) -> Result<String> {
	let mut result = String::new();
	for (index, column) in table.values.iter().enumerate() {
		let values = value::values(table, index, record)?;
		line(&mut result, index, column.r#type, column.fixed && column.len == 1, values.as_deref());
	}
	Ok(result)
}

fn line(result: &mut String, index: usize, r#type: Type, scalar: bool, values: Option<&[Value]>) {
	let _ = write!(result, "{index}: {} = ", r#type);
	match values {
		None => result.push_str("null"),
		Some([value]) if scalar => {
			let _ = write!(result, "{value}");
		}
		Some(values) => {
			result.push('[');
			for (i, value) in values.iter().enumerate() {
				if i > 0 {
					result.push_str(", ");
				}
				let _ = write!(result, "{value}");
			}
			result.push(']');
		}
	}
	result.push('\n');
}
