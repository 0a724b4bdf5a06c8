// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Value records: `[null bitmap][fixed columns][offset table][variable data]`.
//!
//! Elements are stored little-endian without any order-preserving
//! transform. Every column is reachable in constant time: fixed columns sit
//! at their static offset, variable columns through their offset table
//! entry.

mod builder;
pub(crate) mod null;
mod reader;

pub use builder::ValueBuilder;
pub use reader::{bytes, is_null, len, read, values};
