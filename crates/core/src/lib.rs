// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Record codecs for ordered key-value stores.
//!
//! A table definition is compiled once into a [`Table`]. Key records built
//! with [`KeyBuilder`] compare byte-wise in the declared column order and
//! sort direction. Value records built with [`ValueBuilder`] give constant
//! time access to every column, nullable and variable-size ones included.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod config;
mod cursor;
pub mod element;
mod error;
pub mod explain;
pub mod key;
pub mod layout;
mod status;
pub mod value;

pub use config::TableDef;
pub use element::{Elements, ElementsMut, Raw, RawMut};
pub use error::{ConfigError, Error, Result};
pub use key::{KeyBuilder, KeyReader};
pub use layout::{ColumnDef, OffsetWidth, SortDirection, Table};
pub use rowcodec_type::{Scalar, Type, Value};
pub use status::ReadStatus;
pub use value::ValueBuilder;
