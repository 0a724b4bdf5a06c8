// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Key records, encoded so that an unsigned byte-wise comparison of two
//! records orders them column by column.
//!
//! * every element uses its order-preserving encoding, see [`rowcodec_type::Scalar`].
//! * fixed-size columns are padded with zero bytes up to their length.
//! * variable-size columns shorter than their maximum are closed by a zero
//!   element, except an ascending last column which runs to the end of the
//!   record.
//! * descending columns are complemented after encoding, terminator and
//!   padding included.
//!
//! Keys carry no null bitmap, every key column must be written.

mod builder;
mod reader;

pub use builder::KeyBuilder;
pub use reader::{KeyReader, len, locate, read};

#[cfg(test)]
pub mod tests {
	use crate::layout::{ColumnDef, OffsetWidth, Table};

	fn table(keys: &[ColumnDef]) -> Table {
		Table::compile(keys, &[], OffsetWidth::U8).unwrap()
	}

	mod encode {
		use rowcodec_type::Type;

		use super::table;
		use crate::{error::Error, key::KeyBuilder, layout::ColumnDef};

		#[test]
		fn test_scalars() {
			let table = table(&[ColumnDef::scalar(Type::Int4), ColumnDef::scalar(Type::Uint2)]);
			let mut buf = [0u8; 16];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, &[-1i32]).unwrap().append(1, &[0x0102u16]).unwrap();
			let size = builder.finish().unwrap();
			assert_eq!(hex::encode(&buf[..size]), "7fffffff0102");
		}

		#[test]
		fn test_fixed_array_is_zero_padded() {
			let table = table(&[ColumnDef::array(Type::Uint1, 4), ColumnDef::scalar(Type::Uint1)]);
			let mut buf = [0xAAu8; 8];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, b"ab").unwrap().append(1, &[7u8]).unwrap();
			let size = builder.finish().unwrap();
			assert_eq!(hex::encode(&buf[..size]), "6162000007");
		}

		#[test]
		fn test_varsize_terminator() {
			let table = table(&[ColumnDef::varsize(Type::Uint1, 4), ColumnDef::varsize(Type::Uint1, 4)]);

			let mut buf = [0u8; 16];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, b"ab").unwrap().append(1, b"cd").unwrap();
			let size = builder.finish().unwrap();
			assert_eq!(hex::encode(&buf[..size]), "6162006364");

			// no terminator once the column is full
			let mut buf = [0u8; 16];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, b"abcdef").unwrap().append(1, b"").unwrap();
			let size = builder.finish().unwrap();
			assert_eq!(hex::encode(&buf[..size]), "61626364");
		}

		#[test]
		fn test_embedded_separator_is_cut() {
			let table = table(&[ColumnDef::varsize(Type::Uint1, 8), ColumnDef::varsize(Type::Uint1, 8)]);
			let mut buf = [0u8; 32];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, b"ab\0cd").unwrap().append(1, b"x\0y").unwrap();
			let size = builder.finish().unwrap();
			// the last column keeps its zero byte
			assert_eq!(hex::encode(&buf[..size]), "616200780079");
		}

		#[test]
		fn test_signed_separator() {
			let table = table(&[ColumnDef::varsize(Type::Int2, 4), ColumnDef::scalar(Type::Uint1)]);

			// cut at the raw zero
			let mut buf = [0u8; 16];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, &[3i16, -1, 0, 5]).unwrap().append(1, &[1u8]).unwrap();
			let size = builder.finish().unwrap();
			assert_eq!(hex::encode(&buf[..size]), "80037fff000001");

			// cut at the minimum, whose encoding is the terminator
			let mut buf = [0u8; 16];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, &[-1i16, i16::MIN, 5]).unwrap().append(1, &[1u8]).unwrap();
			let size = builder.finish().unwrap();
			assert_eq!(hex::encode(&buf[..size]), "7fff000001");
		}

		#[test]
		fn test_float_separator_is_positive_zero() {
			let table = table(&[ColumnDef::varsize(Type::Float4, 4), ColumnDef::scalar(Type::Uint1)]);
			let mut buf = [0u8; 32];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, &[-0.0f32, 0.0, 1.0]).unwrap().append(1, &[1u8]).unwrap();
			let size = builder.finish().unwrap();
			assert_eq!(hex::encode(&buf[..size]), "7fffffff0000000001");
		}

		#[test]
		fn test_descending_inverts_terminator() {
			let table = table(&[ColumnDef::varsize(Type::Uint1, 4).desc(), ColumnDef::scalar(Type::Int1).desc()]);
			let mut buf = [0u8; 16];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, b"ab").unwrap().append(1, &[0i8]).unwrap();
			let size = builder.finish().unwrap();
			assert_eq!(hex::encode(&buf[..size]), "9e9dff7f");
		}

		#[test]
		fn test_out_of_order() {
			let table = table(&[ColumnDef::scalar(Type::Uint1), ColumnDef::scalar(Type::Uint1)]);
			let mut buf = [0u8; 4];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			assert_eq!(
				builder.append(1, &[1u8]).err(),
				Some(Error::OutOfOrder {
					group: crate::layout::Group::Key,
					index: 1,
					expected: 0
				})
			);
			builder.append(0, &[1u8]).unwrap();
			assert_eq!(
				builder.finish(),
				Err(Error::MissingKeyColumn {
					index: 1
				})
			);
		}

		#[test]
		fn test_type_mismatch() {
			let table = table(&[ColumnDef::scalar(Type::Uint1)]);
			let mut buf = [0u8; 4];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			assert!(matches!(
				builder.append(0, &[1i8]),
				Err(Error::TypeMismatch {
					expected: Type::Uint1,
					actual: Type::Int1,
					..
				})
			));
		}

		#[test]
		fn test_out_of_bounds_writes_nothing() {
			let table = table(&[ColumnDef::scalar(Type::Uint1), ColumnDef::scalar(Type::Uint8)]);
			let mut buf = [0xAAu8; 4];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, &[1u8]).unwrap();
			assert_eq!(
				builder.append(1, &[1u64]).err(),
				Some(Error::OutOfBounds {
					needed: 9,
					capacity: 4
				})
			);
			assert_eq!(buf, [0x01, 0xAA, 0xAA, 0xAA]);
		}
	}

	mod decode {
		use rowcodec_type::{Type, Value};

		use super::table;
		use crate::{
			element::RawMut,
			key::{KeyBuilder, KeyReader, len, locate, read},
			layout::ColumnDef,
			status::ReadStatus,
		};

		fn record(buf: &mut [u8]) -> usize {
			let table = table(&[
				ColumnDef::scalar(Type::Int4),
				ColumnDef::varsize(Type::Uint1, 8).desc(),
				ColumnDef::scalar(Type::Float8).desc(),
				ColumnDef::varsize(Type::Uint2, 4),
			]);
			let mut builder = KeyBuilder::new(&table, buf);
			builder.append(0, &[-42i32])
				.unwrap()
				.append(1, b"hello")
				.unwrap()
				.append(2, &[2.5f64])
				.unwrap()
				.append(3, &[1u16, 0, 3])
				.unwrap();
			builder.finish().unwrap()
		}

		fn sample() -> crate::layout::Table {
			table(&[
				ColumnDef::scalar(Type::Int4),
				ColumnDef::varsize(Type::Uint1, 8).desc(),
				ColumnDef::scalar(Type::Float8).desc(),
				ColumnDef::varsize(Type::Uint2, 4),
			])
		}

		#[test]
		fn test_random_access() {
			let mut buf = [0u8; 64];
			let size = record(&mut buf);
			let table = sample();
			let record = &buf[..size];

			let mut float = [0f64];
			assert_eq!(read(&table, 2, record, &mut float).unwrap(), ReadStatus::Complete(1));
			assert_eq!(float, [2.5]);

			let mut text = [0u8; 8];
			assert_eq!(read(&table, 1, record, &mut text).unwrap(), ReadStatus::Complete(5));
			assert_eq!(&text[..5], b"hello");

			let mut tail = [9u16; 4];
			assert_eq!(read(&table, 3, record, &mut tail).unwrap(), ReadStatus::Complete(3));
			assert_eq!(tail, [1, 0, 3, 9]);

			let mut int = [0i32];
			assert_eq!(read(&table, 0, record, &mut int).unwrap(), ReadStatus::Complete(1));
			assert_eq!(int, [-42]);

			assert_eq!(len(&table, 1, record).unwrap(), 5);
			assert_eq!(locate(&table, 1, record).unwrap(), 4..9);
			assert_eq!(locate(&table, 2, record).unwrap(), 10..18);
		}

		#[test]
		fn test_read_does_not_mutate_record() {
			let mut buf = [0u8; 64];
			let size = record(&mut buf);
			let before = buf;
			let mut text = [0u8; 8];
			read(&sample(), 1, &buf[..size], &mut text).unwrap();
			assert_eq!(buf, before);
		}

		#[test]
		fn test_truncation() {
			let mut buf = [0u8; 64];
			let size = record(&mut buf);
			let mut text = [0u8; 2];
			assert_eq!(
				read(&sample(), 1, &buf[..size], &mut text).unwrap(),
				ReadStatus::Truncated {
					copied: 2,
					len: 5
				}
			);
			assert_eq!(&text, b"he");
		}

		#[test]
		fn test_sequential_reader() {
			let mut buf = [0u8; 64];
			let size = record(&mut buf);
			let table = sample();
			let mut reader = KeyReader::new(&table, &buf[..size]);

			assert_eq!(reader.next_values().unwrap(), vec![Value::Int4(-42)]);
			reader.skip().unwrap();
			let mut float = [0f64];
			reader.next(&mut float).unwrap();
			assert_eq!(float, [2.5]);
			assert_eq!(reader.next_values().unwrap(), vec![Value::Uint2(1), Value::Uint2(0), Value::Uint2(3)]);
			assert!(reader.is_done());
			assert!(reader.next_values().is_err());
		}

		#[test]
		fn test_raw_output() {
			let mut buf = [0u8; 64];
			let size = record(&mut buf);
			let mut out = [0u8; 4];
			let mut raw = RawMut::new(Type::Int4, &mut out).unwrap();
			read(&sample(), 0, &buf[..size], &mut raw).unwrap();
			assert_eq!(i32::from_le_bytes(out), -42);
		}

		#[test]
		fn test_full_length_column_has_no_terminator() {
			let table = table(&[ColumnDef::varsize(Type::Uint1, 3), ColumnDef::scalar(Type::Uint1)]);
			let mut buf = [0u8; 8];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, b"abc").unwrap().append(1, &[9u8]).unwrap();
			let size = builder.finish().unwrap();
			assert_eq!(size, 4);

			let mut last = [0u8];
			read(&table, 1, &buf[..size], &mut last).unwrap();
			assert_eq!(last, [9]);
		}

		#[test]
		fn test_zero_element_ends_column() {
			let table = table(&[ColumnDef::varsize(Type::Int2, 4), ColumnDef::scalar(Type::Uint1)]);
			let mut buf = [0u8; 16];
			let mut builder = KeyBuilder::new(&table, &mut buf);
			builder.append(0, &[7i16, 0, 9]).unwrap().append(1, &[4u8]).unwrap();
			let size = builder.finish().unwrap();
			let record = &buf[..size];

			assert_eq!(len(&table, 0, record).unwrap(), 1);
			let mut out = [0i16; 4];
			assert_eq!(read(&table, 0, record, &mut out).unwrap(), ReadStatus::Complete(1));
			assert_eq!(out[0], 7);
			let mut last = [0u8];
			read(&table, 1, record, &mut last).unwrap();
			assert_eq!(last, [4]);
		}

		#[test]
		fn test_corrupt_record() {
			let table = table(&[ColumnDef::varsize(Type::Uint1, 4), ColumnDef::scalar(Type::Uint1)]);
			let mut out = [0u8];
			// neither terminated nor full
			assert!(read(&table, 1, b"ab", &mut out).is_err());
		}
	}
}
